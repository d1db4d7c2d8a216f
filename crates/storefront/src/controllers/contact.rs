//! Contact form.
//!
//! Submissions are validated and logged, then acknowledged. There is no
//! backend to deliver them to.

use std::rc::Rc;

use ascii_cart_core::{ContactError, ContactSubmission};
use tracing::instrument;

use crate::dom::{Document, Selector};
use crate::events::{EventBus, EventKind};
use crate::views;

/// Handles `#contact-form` submissions.
pub struct ContactController {
    document: Rc<dyn Document>,
}

impl ContactController {
    pub const FORM_ID: &'static str = "contact-form";
    pub const NAME_ID: &'static str = "name";
    pub const EMAIL_ID: &'static str = "email";
    pub const MESSAGE_ID: &'static str = "message";

    /// Register the submit handler if the page has a contact form.
    pub fn activate(document: &Rc<dyn Document>, bus: &mut EventBus) -> Option<Rc<Self>> {
        if !document.exists(&Selector::id(Self::FORM_ID)) {
            return None;
        }

        let controller = Rc::new(Self {
            document: Rc::clone(document),
        });
        let handler = Rc::clone(&controller);
        bus.on(EventKind::Submit, Selector::id(Self::FORM_ID), move |_| {
            // Invalid input is already logged; nothing to show the user
            if handler.submit().is_err() {
                tracing::debug!("Contact form left as typed");
            }
        });

        tracing::debug!("Contact controller active");
        Some(controller)
    }

    /// Read, validate, log, acknowledge, and reset the form.
    ///
    /// # Errors
    ///
    /// Returns a [`ContactError`] if the fields do not validate. The form is
    /// left as typed in that case.
    #[instrument(skip_all)]
    pub fn submit(&self) -> Result<ContactSubmission, ContactError> {
        let field = |id| self.document.input_value(id).unwrap_or_default();
        let submission = ContactSubmission::new(
            &field(Self::NAME_ID),
            &field(Self::EMAIL_ID),
            &field(Self::MESSAGE_ID),
        )
        .inspect_err(|e| tracing::warn!(error = %e, "Rejected contact form"))?;

        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            message = %submission.message,
            submitted_at = %chrono::Utc::now().to_rfc3339(),
            "Contact form submitted"
        );
        self.document.alert(views::CONTACT_THANKS_MESSAGE);
        self.document.reset_form(Self::FORM_ID);
        Ok(submission)
    }
}
