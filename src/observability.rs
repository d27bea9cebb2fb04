use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("terrachat.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("terrachat.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("terrachat.client.request_duration_seconds");

pub(crate) static SESSION_SENDS: Counter = Counter::new("terrachat.session.sends");
pub(crate) static SESSION_SEND_FAILURES: Counter = Counter::new("terrachat.session.send_failures");
pub(crate) static SESSION_SKIPPED: Counter = Counter::new("terrachat.session.skipped");
pub(crate) static SESSION_CLEARS: Counter = Counter::new("terrachat.session.clears");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&SESSION_SENDS);
    collector.register_counter(&SESSION_SEND_FAILURES);
    collector.register_counter(&SESSION_SKIPPED);
    collector.register_counter(&SESSION_CLEARS);
}
