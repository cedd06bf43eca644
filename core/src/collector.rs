// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::deadline_signal::DeadlineSignal;
use crate::result_channel::ResultSource;

/// Count of results received before the deadline fired
pub type Tally = usize;

/// Drain the result channel until the deadline fires.
///
/// Races the next incoming result against the deadline on every iteration.
/// When the deadline wins, the current tally is returned immediately; results
/// published concurrently after that point are lost, which is the documented
/// behavior of the pattern. The loop also ends once every sink has been
/// dropped, since no further result can arrive.
pub async fn collect<D, R>(deadline: D, mut results: R) -> Tally
where
    D: DeadlineSignal,
    R: ResultSource,
{
    let mut tally: Tally = 0;

    loop {
        tokio::select! {
            _ = deadline.fired() => {
                break;
            }
            received = results.next() => {
                match received {
                    Some(worker_id) => {
                        tally += 1;
                        println!("Collector received result from worker {}", worker_id);
                    }
                    None => {
                        // All sinks dropped
                        break;
                    }
                }
            }
        }
    }

    tally
}
