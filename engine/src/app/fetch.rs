//! Outboxes drained by the binary and the completions it reports back.

use folio_types::{ContactMessage, Endpoint};

use super::App;
use crate::data::FetchCompletion;

impl App {
    /// Endpoints to fetch, queued since the last call.
    pub fn take_fetch_requests(&mut self) -> Vec<Endpoint> {
        self.data.take_fetch_requests()
    }

    /// Store a completed fetch. Completions for pages no longer shown are
    /// kept for the next visit.
    pub fn apply_fetch(&mut self, completion: FetchCompletion) {
        self.data.apply_fetch(completion);
        self.refresh_find();
    }

    pub fn take_contact_submission(&mut self) -> Option<ContactMessage> {
        self.contact.take_submission()
    }

    pub fn apply_contact_result(&mut self, ok: bool) {
        if !ok {
            tracing::warn!("Contact message was not delivered");
        }
        self.contact.apply_result(ok, self.now);
    }
}
