//! Cancellation helpers shared by the network and the poll wait.

use std::future::Future;
use std::time::Duration;

use diadoc_core::Result;
use diadoc_core::error::TransportError;
use tokio_util::sync::CancellationToken;

/// Run `fut` unless `cancel` fires first. The losing future is dropped.
pub(crate) async fn run<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(TransportError::Cancelled.into()),
        result = fut => result,
    }
}

/// Sleep for `duration`, returning early with `Cancelled`.
pub(crate) async fn sleep(cancel: &CancellationToken, duration: Duration) -> Result<()> {
    run(cancel, async {
        tokio::time::sleep(duration).await;
        Ok(())
    })
    .await
}
