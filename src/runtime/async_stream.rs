//! Channel-backed item stream.

use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

/// A handle to a background task that produces multiple results.
///
/// Items arrive through a bounded channel. The producer waits in `send` once
/// `capacity` items are buffered, and dropping the stream stops it at its
/// next send.
pub struct AsyncStream<T> {
    rx: mpsc::Receiver<T>,
}

impl<T> AsyncStream<T>
where
    T: Send + 'static,
{
    #[inline]
    #[must_use]
    pub fn new(rx: mpsc::Receiver<T>) -> Self {
        Self { rx }
    }

    /// Spawn `producer` on the tokio runtime, handing it the sending half of
    /// a channel holding at most `capacity` items (minimum one).
    pub fn spawn<F, Fut>(capacity: usize, producer: F) -> Self
    where
        F: FnOnce(mpsc::Sender<T>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        tokio::spawn(producer(tx));
        Self::new(rx)
    }

    /// Receive the next item, or `None` once the producer finished.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Drain the stream into a vector.
    pub async fn collect_vec(mut self) -> Vec<T> {
        let mut items = Vec::new();
        while let Some(item) = self.rx.recv().await {
            items.push(item);
        }
        items
    }
}

impl<T> Stream for AsyncStream<T> {
    type Item = T;

    #[inline]
    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
