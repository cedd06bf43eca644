// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;

/// Producer side of the worker-to-collector hand-off.
///
/// Each worker holds its own clone and publishes at most once. The backing
/// channel must have room for every possible successful completion
/// (capacity >= worker count), otherwise a worker could block on a full
/// channel after the collector has already stopped draining.
#[async_trait]
pub trait ResultSink: Clone + Send + Sync + 'static {
    /// Publish the identifier of a worker that beat the deadline.
    /// Returns true if the result was accepted, false otherwise.
    async fn publish(&self, worker_id: usize) -> bool;
}

/// Consumer side of the hand-off, held only by the collector.
#[async_trait]
pub trait ResultSource: Send {
    /// Receive the next published identifier.
    /// Returns None once every sink has been dropped.
    async fn next(&mut self) -> Option<usize>;
}
