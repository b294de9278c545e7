//! Contact form state and the submit flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The about page mounts one contact form. Keystrokes land in
//! `ContactFormState::update_field`; the submit button runs [`submit`], which
//! hands the message to a `ContactTransport` and reports the outcome through a
//! `NotificationSink`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure stops at [`submit`]. The visitor sees a generic toast for the
//! error kind; the underlying detail goes to the log only.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use super::toast::{NotificationSink, Toast};
use crate::net::types::{ContactMessage, MAX_EMAIL_CHARS, MAX_MESSAGE_CHARS, MAX_NAME_CHARS};

pub const SENT_TEXT: &str = "Message sent successfully! 🎉";
pub const UNAVAILABLE_TEXT: &str = "Service is not properly configured.";
pub const RETRY_TEXT: &str = "Couldn't send message. Please try again.";
pub const INVALID_TEXT: &str = "Please check your name, email address, and message.";
pub const RATE_LIMITED_TEXT: &str = "Too many messages. Please wait a few minutes before sending another.";

/// Form fields, addressed by the `name` attribute of their input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Inverse of [`input_name`](Self::input_name).
    #[must_use]
    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    /// Server-side length cap, mirrored in the input's `maxlength`.
    #[must_use]
    pub fn max_chars(self) -> usize {
        match self {
            Self::Name => MAX_NAME_CHARS,
            Self::Email => MAX_EMAIL_CHARS,
            Self::Message => MAX_MESSAGE_CHARS,
        }
    }
}

/// State of one mounted contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    /// True while a delivery is in flight. The submit button is disabled.
    pub submitting: bool,
}

impl ContactFormState {
    /// Store a keystroke's value with leading whitespace stripped.
    pub fn update_field(&mut self, field: ContactField, raw: &str) {
        let value = raw.trim_start().to_owned();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Mirrors the inputs' `required` constraint.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    /// Claim the form for a submission.
    ///
    /// Returns `None` without touching state when a submission is already in
    /// flight or a required field is empty.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.submitting || !self.is_complete() {
            return None;
        }
        self.submitting = true;
        Some(ContactMessage {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        })
    }

    /// Release the form after a submission. Fields reset only on success.
    pub fn finish_submit(&mut self, delivered: bool) {
        if delivered {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
        self.submitting = false;
    }
}

/// Why a message could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// The deployment is missing relay configuration.
    #[error("contact relay not configured: {0}")]
    Configuration(String),
    /// The send failed in transit or upstream. Retrying may help.
    #[error("message delivery failed: {0}")]
    Delivery(String),
    /// The server refused the content. Resending it unchanged will fail again.
    #[error("message rejected: {0}")]
    Invalid(String),
    /// Too many recent submissions from this visitor or overall.
    #[error("rate limited: {0}")]
    RateLimited(String),
}

impl ContactError {
    /// Text shown to the visitor. Never includes the underlying detail.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Configuration(_) => UNAVAILABLE_TEXT,
            Self::Delivery(_) => RETRY_TEXT,
            Self::Invalid(_) => INVALID_TEXT,
            Self::RateLimited(_) => RATE_LIMITED_TEXT,
        }
    }
}

/// Async seam for handing a message to whatever delivers it.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Mutable access to a form's state from inside an async flow.
pub trait ContactFormHandle {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R>;
}

impl ContactFormHandle for RwSignal<ContactFormState> {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent: already submitting, or a required field is empty.
    Skipped,
    Sent,
    Failed(ContactError),
}

/// Run one submission: claim the form, deliver, notify, release.
pub async fn submit<F, T, N>(form: &F, transport: &T, notifier: &N) -> SubmitOutcome
where
    F: ContactFormHandle,
    T: ContactTransport,
    N: NotificationSink,
{
    let Some(Some(message)) = form.update_form(ContactFormState::begin_submit) else {
        return SubmitOutcome::Skipped;
    };

    let result = transport.deliver(&message).await;
    let delivered = result.is_ok();
    let outcome = match result {
        Ok(()) => {
            notifier.notify(Toast::success(SENT_TEXT));
            SubmitOutcome::Sent
        }
        Err(e) => {
            log::error!("failed to send contact message: {e}");
            notifier.notify(Toast::error(e.user_message()));
            SubmitOutcome::Failed(e)
        }
    };

    if form.update_form(|state| state.finish_submit(delivered)).is_none() {
        log::debug!("contact form disposed before the send completed");
    }
    outcome
}
