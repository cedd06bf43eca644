// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use deadline_race_core::collector::collect;
use deadline_race_core::config::Config;
use deadline_race_core::worker::WorkerTask;
use deadline_race_core::worker_runtime::WorkerRuntime;
use deadline_race_task_channels::channel_wrappers::{result_channel, ChannelResultSink};
use deadline_race_task_channels::rand_sampler::RandLatencySampler;
use deadline_race_task_channels::token_deadline::TokenDeadline;
use deadline_race_task_channels::tokio_runtime::TokioRuntime;
use std::time::Duration;

// Concrete worker type for this runtime
type ChannelWorker = WorkerTask<TokenDeadline, ChannelResultSink, RandLatencySampler>;

#[tokio::main]
async fn main() {
    // Load configuration from JSON file, falling back to the demo defaults
    let config = Config::load("config.json").unwrap_or_else(|_| {
        println!("No config.json found, using defaults");
        Config::default()
    });

    println!("=== DEADLINE RACE ===");
    config.print_summary();

    let deadline = TokenDeadline::new(Duration::from_millis(config.timeout_ms));
    let (sink, source) = result_channel(config.num_workers);

    println!("\nStarting {} workers...", config.num_workers);
    let mut handles = Vec::with_capacity(config.num_workers);
    for id in 0..config.num_workers {
        let task = ChannelWorker {
            id,
            deadline: deadline.clone(),
            results: sink.clone(),
            sampler: RandLatencySampler::from_config(&config),
        };
        handles.push(TokioRuntime::spawn(task));
    }

    // The workers hold the remaining sink clones; dropping this one lets the
    // collector observe channel closure once every worker is done.
    drop(sink);

    let tally = collect(deadline.clone(), source).await;

    println!("\nTotal results before the deadline: {}", tally);

    // Give already-scheduled workers a grace period to wind down cleanly
    let grace = Duration::from_millis(config.grace_period_ms);
    for (id, handle) in handles.into_iter().enumerate() {
        let join = <TokioRuntime as WorkerRuntime<ChannelWorker>>::join(handle);
        match tokio::time::timeout(grace, join).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => eprintln!("Worker {} shutdown failed: {}", id, e),
            Err(_) => eprintln!("Worker {} did not stop within the grace period", id),
        }
    }

    println!("\n=== PROGRAM COMPLETE ===");
}
