//! Fetched portfolio data, keyed by endpoint.
//!
//! Pages never own fetch state. They ask the cache to `ensure` an endpoint
//! and read whatever [`Resource`] is there; the binary drains the request
//! outbox and reports completions back through [`DataCache::apply_fetch`].

use std::collections::HashMap;

use folio_types::{Endpoint, Payload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Loading,
    Ready(Payload),
    /// Single-record endpoint answered 404.
    NotFound,
    Failed(String),
}

/// Result of one fetch, as delivered by the binary.
#[derive(Debug, Clone)]
pub struct FetchCompletion {
    pub endpoint: Endpoint,
    pub result: Result<Payload, String>,
}

#[derive(Debug, Default)]
pub struct DataCache {
    entries: HashMap<Endpoint, Resource>,
    outbox: Vec<Endpoint>,
}

impl DataCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a fetch unless `endpoint` is loaded or already in flight.
    /// Failed endpoints are retried.
    pub fn ensure(&mut self, endpoint: &Endpoint) {
        if matches!(
            self.entries.get(endpoint),
            Some(Resource::Loading | Resource::Ready(_) | Resource::NotFound)
        ) {
            return;
        }
        self.entries.insert(endpoint.clone(), Resource::Loading);
        self.outbox.push(endpoint.clone());
    }

    #[must_use]
    pub fn get(&self, endpoint: &Endpoint) -> Option<&Resource> {
        self.entries.get(endpoint)
    }

    /// Drain requests queued since the last call.
    pub fn take_fetch_requests(&mut self) -> Vec<Endpoint> {
        std::mem::take(&mut self.outbox)
    }

    pub fn apply_fetch(&mut self, completion: FetchCompletion) {
        let FetchCompletion { endpoint, result } = completion;
        let resource = match result {
            Ok(payload) if payload.is_not_found() => Resource::NotFound,
            Ok(payload) => Resource::Ready(payload),
            Err(message) => {
                tracing::warn!(endpoint = %endpoint.path(), "Fetch failed: {message}");
                Resource::Failed(message)
            }
        };
        self.entries.insert(endpoint, resource);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_queues_once() {
        let mut cache = DataCache::new();
        cache.ensure(&Endpoint::Skills);
        cache.ensure(&Endpoint::Skills);
        assert_eq!(cache.take_fetch_requests(), [Endpoint::Skills]);
        cache.ensure(&Endpoint::Skills);
        assert!(cache.take_fetch_requests().is_empty());
        assert_eq!(cache.get(&Endpoint::Skills), Some(&Resource::Loading));
    }

    #[test]
    fn ready_endpoints_are_not_refetched() {
        let mut cache = DataCache::new();
        cache.ensure(&Endpoint::Music);
        cache.take_fetch_requests();
        cache.apply_fetch(FetchCompletion {
            endpoint: Endpoint::Music,
            result: Ok(Payload::Music(Vec::new())),
        });
        cache.ensure(&Endpoint::Music);
        assert!(cache.take_fetch_requests().is_empty());
        assert_eq!(
            cache.get(&Endpoint::Music),
            Some(&Resource::Ready(Payload::Music(Vec::new())))
        );
    }

    #[test]
    fn failures_are_retried() {
        let mut cache = DataCache::new();
        cache.ensure(&Endpoint::Blog);
        cache.take_fetch_requests();
        cache.apply_fetch(FetchCompletion {
            endpoint: Endpoint::Blog,
            result: Err("connection refused".to_string()),
        });
        assert!(matches!(
            cache.get(&Endpoint::Blog),
            Some(Resource::Failed(_))
        ));
        cache.ensure(&Endpoint::Blog);
        assert_eq!(cache.take_fetch_requests(), [Endpoint::Blog]);
    }

    #[test]
    fn missing_profile_is_not_found() {
        let mut cache = DataCache::new();
        cache.apply_fetch(FetchCompletion {
            endpoint: Endpoint::Profile,
            result: Ok(Payload::Profile(None)),
        });
        assert_eq!(cache.get(&Endpoint::Profile), Some(&Resource::NotFound));
    }

    #[test]
    fn unrequested_completion_is_stored() {
        let mut cache = DataCache::new();
        cache.apply_fetch(FetchCompletion {
            endpoint: Endpoint::Education,
            result: Ok(Payload::Education(Vec::new())),
        });
        assert!(matches!(
            cache.get(&Endpoint::Education),
            Some(Resource::Ready(_))
        ));
    }
}
