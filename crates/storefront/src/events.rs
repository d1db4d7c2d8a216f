//! UI event source.
//!
//! Controllers register handlers on an [`EventBus`] against a
//! [`Selector`]; the host page forwards each user interaction as a
//! [`UiEvent`] through [`EventBus::dispatch`]. Handlers run synchronously and
//! to completion, one at a time, which is the whole concurrency model of a
//! page.

use std::collections::BTreeMap;

use crate::dom::Selector;

/// Kinds of interaction the controllers care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
}

/// The element an event fired on.
///
/// `data` holds the element's `data-*` attributes keyed without the `data-`
/// prefix, like the DOM's `dataset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTarget {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub data: BTreeMap<String, String>,
}

impl EventTarget {
    /// Target identified by `id`.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Target carrying `class`.
    #[must_use]
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            classes: vec![class.into()],
            ..Self::default()
        }
    }

    /// Add a `data-<name>` attribute.
    #[must_use]
    pub fn data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Value of `data-<name>`.
    #[must_use]
    pub fn data_attr(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }

    /// Whether this element matches `selector`.
    #[must_use]
    pub fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => self.classes.iter().any(|c| c == class),
        }
    }
}

/// A user interaction forwarded by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub kind: EventKind,
    pub target: EventTarget,
}

impl UiEvent {
    /// A click on `target`.
    #[must_use]
    pub const fn click(target: EventTarget) -> Self {
        Self {
            kind: EventKind::Click,
            target,
        }
    }

    /// A submit of the form `target`.
    #[must_use]
    pub const fn submit(target: EventTarget) -> Self {
        Self {
            kind: EventKind::Submit,
            target,
        }
    }
}

type Handler = Box<dyn Fn(&UiEvent)>;

struct Registration {
    kind: EventKind,
    selector: Selector,
    handler: Handler,
}

/// Handler registry for one page.
#[derive(Default)]
pub struct EventBus {
    registrations: Vec<Registration>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(
                self.registrations
                    .iter()
                    .map(|r| format!("{:?} {}", r.kind, r.selector)),
            )
            .finish()
    }
}

impl EventBus {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `handler` for every `kind` event whose target matches `selector`.
    pub fn on(&mut self, kind: EventKind, selector: Selector, handler: impl Fn(&UiEvent) + 'static) {
        tracing::trace!(?kind, %selector, "Registered handler");
        self.registrations.push(Registration {
            kind,
            selector,
            handler: Box::new(handler),
        });
    }

    /// Deliver `event` to matching handlers in registration order.
    ///
    /// Returns how many handlers ran.
    pub fn dispatch(&self, event: &UiEvent) -> usize {
        let mut handled = 0;
        for registration in &self.registrations {
            if registration.kind == event.kind && event.target.matches(&registration.selector) {
                (registration.handler)(event);
                handled += 1;
            }
        }
        if handled == 0 {
            tracing::trace!(kind = ?event.kind, "Event had no handlers");
        }
        handled
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
