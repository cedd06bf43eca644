// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use deadline_race_core::deadline_signal::DeadlineSignal;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Tokio CancellationToken-based deadline signal.
///
/// The token is cancelled by a spawned timer task once `timeout` has elapsed;
/// nothing else can cancel it. Cancellation is permanent, so every clone sees
/// the same fired state.
#[derive(Clone)]
pub struct TokenDeadline {
    token: CancellationToken,
}

impl TokenDeadline {
    /// Create a signal that fires `timeout` from now.
    ///
    /// A zero timeout fires before the constructor returns. Must be called
    /// from within a tokio runtime.
    pub fn new(timeout: Duration) -> Self {
        let token = CancellationToken::new();

        if timeout.is_zero() {
            token.cancel();
        } else {
            let timer = token.clone();
            tokio::spawn(async move {
                sleep(timeout).await;
                timer.cancel();
            });
        }

        Self { token }
    }
}

#[async_trait]
impl DeadlineSignal for TokenDeadline {
    fn has_fired(&self) -> bool {
        self.token.is_cancelled()
    }

    async fn fired(&self) {
        self.token.cancelled().await;
    }
}
