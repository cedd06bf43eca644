use std::time::Duration;

/// Source of each worker's simulated work duration.
///
/// The binary plugs in a random sampler; tests plug in fixed durations to
/// make the race outcome deterministic.
pub trait LatencySampler: Send + 'static {
    fn sample(&mut self, worker_id: usize) -> Duration;
}
