use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Number of worker tasks racing the deadline
    pub num_workers: usize,
    /// Global deadline shared by all workers and the collector, in milliseconds
    pub timeout_ms: u64,
    /// Lower bound (inclusive) of a worker's simulated work duration in milliseconds
    #[serde(default = "default_work_min")]
    pub work_min_ms: u64,
    /// Upper bound (exclusive) of a worker's simulated work duration in milliseconds
    #[serde(default = "default_work_max")]
    pub work_max_ms: u64,
    /// How long to wait for spawned workers to wind down after the collector stops
    #[serde(default = "default_grace_period")]
    pub grace_period_ms: u64,
}

fn default_work_min() -> u64 {
    10
}

fn default_work_max() -> u64 {
    110
}

fn default_grace_period() -> u64 {
    1000
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn print_summary(&self) {
        println!("Workers: {}", self.num_workers);
        println!("Deadline: {}ms", self.timeout_ms);
        println!(
            "Work range: [{}ms, {}ms)",
            self.work_min_ms, self.work_max_ms
        );
        println!("Grace period: {}ms", self.grace_period_ms);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_workers: 11,
            timeout_ms: 50,
            work_min_ms: default_work_min(),
            work_max_ms: default_work_max(),
            grace_period_ms: default_grace_period(),
        }
    }
}
