// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use deadline_race_core::collector::{collect, Tally};
use deadline_race_core::worker::WorkerTask;
use deadline_race_core::worker_runtime::WorkerRuntime;
use deadline_race_task_channels::channel_wrappers::result_channel;
use deadline_race_task_channels::tokio_runtime::TokioRuntime;
use deadline_race_task_channels::rand_sampler::RandLatencySampler;
use deadline_race_task_channels::token_deadline::TokenDeadline;
use std::time::Duration;

async fn run_race(num_workers: usize, timeout_ms: u64, work_min_ms: u64, work_max_ms: u64) -> Tally {
    let deadline = TokenDeadline::new(Duration::from_millis(timeout_ms));
    let (sink, source) = result_channel(num_workers);

    for id in 0..num_workers {
        let task = WorkerTask {
            id,
            deadline: deadline.clone(),
            results: sink.clone(),
            sampler: RandLatencySampler::new(work_min_ms, work_max_ms),
        };
        TokioRuntime::spawn(task);
    }
    drop(sink);

    collect(deadline, source).await
}

#[tokio::test]
async fn test_tally_never_exceeds_worker_count() {
    // Act
    let tally = run_race(11, 50, 10, 110).await;

    // Assert
    assert!(tally <= 11, "tally {} exceeds the worker count", tally);
}

#[tokio::test]
async fn test_zero_timeout_yields_zero_tally() {
    // Act
    let tally = run_race(11, 0, 10, 110).await;

    // Assert
    assert_eq!(tally, 0, "no worker can beat an already-fired deadline");
}

#[tokio::test]
async fn test_zero_workers_yield_zero_tally() {
    // Act
    let tally = run_race(0, 50, 10, 110).await;

    // Assert
    assert_eq!(tally, 0);
}
