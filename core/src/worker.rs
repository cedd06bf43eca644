// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::deadline_signal::DeadlineSignal;
use crate::latency_sampler::LatencySampler;
use crate::result_channel::ResultSink;
use crate::worker_runtime::Runnable;
use async_trait::async_trait;
use tokio::time::sleep;

/// A single simulated unit of variable-latency work racing the deadline.
///
/// Runs exactly once: draws a work duration from its sampler, then waits on
/// whichever comes first, the work finishing or the deadline firing. Winning
/// the race publishes the worker identifier; losing it ends the task with no
/// partial result and no error.
pub struct WorkerTask<D, K, L> {
    pub id: usize,
    pub deadline: D,
    pub results: K,
    pub sampler: L,
}

#[async_trait]
impl<D, K, L> Runnable for WorkerTask<D, K, L>
where
    D: DeadlineSignal,
    K: ResultSink,
    L: LatencySampler,
{
    type Output = ();

    async fn run(mut self) -> Self::Output {
        let latency = self.sampler.sample(self.id);
        println!("Worker {} drew {}ms of work", self.id, latency.as_millis());

        tokio::select! {
            _ = self.deadline.fired() => {
                // Lost the race. No partial result is published.
            }
            _ = sleep(latency) => {
                println!("Worker {} finished work", self.id);
                if !self.results.publish(self.id).await {
                    // Collector is gone; the result is dropped.
                }
            }
        }
    }
}
