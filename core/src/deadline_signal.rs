// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;

/// One-shot broadcast marking that the global deadline has expired.
///
/// Every clone observes the same state: unfired until the timeout elapses,
/// then permanently fired. Observation is safe from any number of concurrent
/// tasks and there is no reset.
#[async_trait]
pub trait DeadlineSignal: Clone + Send + Sync + 'static {
    /// Non-blocking check of the fired state.
    /// Once this returns true it returns true forever.
    fn has_fired(&self) -> bool;

    /// Wait until the deadline has fired.
    /// Completes immediately if it already has.
    async fn fired(&self);
}
