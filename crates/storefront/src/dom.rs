//! Abstract page document.
//!
//! Controllers only need a handful of DOM capabilities: check whether an
//! element exists, write text or markup into it, read form inputs, and show
//! an acknowledgement. [`Document`] captures exactly that, so controllers can
//! run against a real browser binding or against [`MemoryDocument`].

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// Addresses elements by id (`#id`) or class (`.class`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Id(String),
    Class(String),
}

impl Selector {
    /// `#id`
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// `.class`
    #[must_use]
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
        }
    }
}

/// The page the controllers are mounted on.
///
/// Writes to an element that does not exist are ignored and reported by the
/// `bool` return value.
pub trait Document {
    /// Whether at least one element matches `selector`.
    fn exists(&self, selector: &Selector) -> bool;

    /// Replace the text content of the element with `id`.
    fn set_text(&self, id: &str, text: &str) -> bool;

    /// Replace the inner markup of the element with `id`.
    fn set_html(&self, id: &str, html: &str) -> bool;

    /// Current value of the input with `id`.
    fn input_value(&self, id: &str) -> Option<String>;

    /// Reset every field of the form with `id`.
    fn reset_form(&self, id: &str) -> bool;

    /// Show an acknowledgement message to the user.
    fn alert(&self, message: &str);
}

/// State of one element in a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    pub html: String,
    pub value: String,
}

/// In-memory [`Document`] for tests and headless rendering.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: RefCell<BTreeMap<String, ElementState>>,
    classes: BTreeSet<String>,
    forms: BTreeMap<String, Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl MemoryDocument {
    /// An empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with `id`.
    #[must_use]
    pub fn with_element(self, id: &str) -> Self {
        self.elements
            .borrow_mut()
            .entry(id.to_string())
            .or_default();
        self
    }

    /// Add at least one element carrying `class`.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    /// Add a form with `id` and its input fields.
    #[must_use]
    pub fn with_form(mut self, id: &str, fields: &[&str]) -> Self {
        self = self.with_element(id);
        for field in fields {
            self = self.with_element(field);
        }
        self.forms.insert(
            id.to_string(),
            fields.iter().map(ToString::to_string).collect(),
        );
        self
    }

    /// Type `value` into the input with `id`. Returns false if it does not exist.
    pub fn set_value(&self, id: &str, value: &str) -> bool {
        self.elements.borrow_mut().get_mut(id).is_some_and(|el| {
            el.value = value.to_string();
            true
        })
    }

    /// Snapshot of the element with `id`.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<ElementState> {
        self.elements.borrow().get(id).cloned()
    }

    /// Text content of the element with `id`.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|el| el.text.clone())
    }

    /// Inner markup of the element with `id`.
    #[must_use]
    pub fn html(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|el| el.html.clone())
    }

    /// Acknowledgements shown so far, oldest first.
    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Document for MemoryDocument {
    fn exists(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.elements.borrow().contains_key(id),
            Selector::Class(class) => self.classes.contains(class),
        }
    }

    fn set_text(&self, id: &str, text: &str) -> bool {
        self.elements.borrow_mut().get_mut(id).is_some_and(|el| {
            el.text = text.to_string();
            true
        })
    }

    fn set_html(&self, id: &str, html: &str) -> bool {
        self.elements.borrow_mut().get_mut(id).is_some_and(|el| {
            el.html = html.to_string();
            true
        })
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|el| el.value.clone())
    }

    fn reset_form(&self, id: &str) -> bool {
        let Some(fields) = self.forms.get(id) else {
            return false;
        };
        let mut elements = self.elements.borrow_mut();
        for field in fields {
            if let Some(el) = elements.get_mut(field) {
                el.value.clear();
            }
        }
        true
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
