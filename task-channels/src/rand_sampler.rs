use deadline_race_core::config::Config;
use deadline_race_core::latency_sampler::LatencySampler;
use rand::Rng;
use std::time::Duration;

/// Uniform random work duration in `[min_ms, max_ms)`
pub struct RandLatencySampler {
    min_ms: u64,
    max_ms: u64,
}

impl RandLatencySampler {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.work_min_ms, config.work_max_ms)
    }
}

impl LatencySampler for RandLatencySampler {
    fn sample(&mut self, _worker_id: usize) -> Duration {
        let millis = if self.max_ms > self.min_ms {
            rand::rng().random_range(self.min_ms..self.max_ms)
        } else {
            self.min_ms
        };
        Duration::from_millis(millis)
    }
}
