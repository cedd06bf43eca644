use async_trait::async_trait;
use deadline_race_core::result_channel::{ResultSink, ResultSource};
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct ChannelResultSink {
    tx: mpsc::Sender<usize>,
}

pub struct ChannelResultSource {
    rx: mpsc::Receiver<usize>,
}

/// Build the worker-to-collector channel.
///
/// `capacity` must cover every possible successful completion (one slot per
/// worker), otherwise a late worker could block on a full channel after the
/// collector has stopped draining. Clamped to 1 because a zero-capacity mpsc
/// channel is invalid and zero workers is a legal configuration.
pub fn result_channel(capacity: usize) -> (ChannelResultSink, ChannelResultSource) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (ChannelResultSink { tx }, ChannelResultSource { rx })
}

#[async_trait]
impl ResultSink for ChannelResultSink {
    async fn publish(&self, worker_id: usize) -> bool {
        self.tx.send(worker_id).await.is_ok()
    }
}

#[async_trait]
impl ResultSource for ChannelResultSource {
    async fn next(&mut self) -> Option<usize> {
        self.rx.recv().await
    }
}
