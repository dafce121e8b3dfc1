//! Contact form: four required fields and a transient send status.
//!
//! `idle -> sending -> success | error -> idle`. Success clears the fields and
//! closes the form after 2 s; error returns to idle after 3 s.

use std::time::{Duration, Instant};

use folio_types::{ContactMessage, DraftInput};

pub const SUCCESS_RESET: Duration = Duration::from_secs(2);
pub const ERROR_RESET: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    const fn index(self) -> usize {
        match self {
            ContactField::Name => 0,
            ContactField::Email => 1,
            ContactField::Subject => 2,
            ContactField::Message => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    Idle,
    Sending,
    Success { until: Instant },
    Error { until: Instant },
}

impl ContactStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ContactStatus::Idle => "Send Message",
            ContactStatus::Sending => "Sending...",
            ContactStatus::Success { .. } => "Message Sent!",
            ContactStatus::Error { .. } => "Failed to send",
        }
    }
}

/// What a status timer asks the owner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTick {
    Nothing,
    Close,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: [DraftInput; 4],
    focus: ContactField,
    status: ContactStatus,
    outbox: Option<ContactMessage>,
    validation: Option<&'static str>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: Default::default(),
            focus: ContactField::Name,
            status: ContactStatus::Idle,
            outbox: None,
            validation: None,
        }
    }
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self, field: ContactField) -> &DraftInput {
        &self.fields[field.index()]
    }

    pub fn focused_input(&mut self) -> &mut DraftInput {
        self.validation = None;
        &mut self.fields[self.focus.index()]
    }

    #[must_use]
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = ContactField::ALL[(self.focus.index() + 1) % ContactField::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let len = ContactField::ALL.len();
        self.focus = ContactField::ALL[(self.focus.index() + len - 1) % len];
    }

    #[must_use]
    pub fn status(&self) -> ContactStatus {
        self.status
    }

    #[must_use]
    pub fn validation(&self) -> Option<&'static str> {
        self.validation
    }

    fn message(&self) -> ContactMessage {
        let text = |field: ContactField| self.field(field).text().trim().to_string();
        ContactMessage {
            name: text(ContactField::Name),
            email: text(ContactField::Email),
            subject: text(ContactField::Subject),
            message: text(ContactField::Message),
        }
    }

    /// Queue the form for sending. Ignored while a send is in flight or
    /// when a field is missing.
    pub fn submit(&mut self) {
        if self.status == ContactStatus::Sending {
            return;
        }
        let message = self.message();
        if message.name.is_empty()
            || message.email.is_empty()
            || message.subject.is_empty()
            || message.message.is_empty()
        {
            self.validation = Some("All fields are required");
            return;
        }
        if !message.email.contains('@') {
            self.validation = Some("Enter a valid email address");
            return;
        }
        self.validation = None;
        self.status = ContactStatus::Sending;
        self.outbox = Some(message);
    }

    pub fn take_submission(&mut self) -> Option<ContactMessage> {
        self.outbox.take()
    }

    pub fn apply_result(&mut self, ok: bool, now: Instant) {
        if ok {
            self.fields = Default::default();
            self.focus = ContactField::Name;
            self.status = ContactStatus::Success {
                until: now + SUCCESS_RESET,
            };
        } else {
            self.status = ContactStatus::Error {
                until: now + ERROR_RESET,
            };
        }
    }

    pub fn tick(&mut self, now: Instant) -> ContactTick {
        match self.status {
            ContactStatus::Success { until } if now >= until => {
                self.status = ContactStatus::Idle;
                ContactTick::Close
            }
            ContactStatus::Error { until } if now >= until => {
                self.status = ContactStatus::Idle;
                ContactTick::Nothing
            }
            _ => ContactTick::Nothing,
        }
    }
}
