// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use deadline_race_core::collector::{collect, Tally};
use deadline_race_core::latency_sampler::LatencySampler;
use deadline_race_core::worker::WorkerTask;
use deadline_race_core::worker_runtime::WorkerRuntime;
use deadline_race_task_channels::channel_wrappers::result_channel;
use deadline_race_task_channels::token_deadline::TokenDeadline;
use deadline_race_task_channels::tokio_runtime::TokioRuntime;
use std::time::Duration;

/// Test double: every worker gets the exact duration assigned to its id
struct PlannedLatencySampler {
    plan: Vec<u64>,
}

impl LatencySampler for PlannedLatencySampler {
    fn sample(&mut self, worker_id: usize) -> Duration {
        Duration::from_millis(self.plan[worker_id])
    }
}

async fn run_planned_race(plan: &[u64], timeout_ms: u64) -> Tally {
    let deadline = TokenDeadline::new(Duration::from_millis(timeout_ms));
    let (sink, source) = result_channel(plan.len());

    for id in 0..plan.len() {
        let task = WorkerTask {
            id,
            deadline: deadline.clone(),
            results: sink.clone(),
            sampler: PlannedLatencySampler {
                plan: plan.to_vec(),
            },
        };
        TokioRuntime::spawn(task);
    }
    drop(sink);

    collect(deadline, source).await
}

#[tokio::test]
async fn test_all_below_timeout_counts_every_worker() {
    // Arrange: every worker finishes well before the deadline
    let plan = vec![10; 11];

    // Act
    let tally = run_planned_race(&plan, 10_000).await;

    // Assert
    assert_eq!(tally, 11, "no worker should be dropped when none race-loses");
}

#[tokio::test]
async fn test_all_above_timeout_counts_nothing() {
    // Arrange: every worker needs far longer than the deadline allows
    let plan = vec![2_000; 11];

    // Act
    let tally = run_planned_race(&plan, 50).await;

    // Assert
    assert_eq!(tally, 0);
}

#[tokio::test]
async fn test_forced_latencies_are_deterministic() {
    // Arrange: three clear winners, two clear losers
    let plan = vec![10, 10, 10, 2_000, 2_000];

    // Act
    let first = run_planned_race(&plan, 300).await;
    let second = run_planned_race(&plan, 300).await;

    // Assert
    assert_eq!(
        first, second,
        "the same forced durations must yield the same tally"
    );
    assert_eq!(first, 3);
}
