use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{TranslateError, Translation};

/// An in-flight translation that can be discarded before it completes
pub struct TranslationTask {
    handle: JoinHandle<Result<Translation, TranslateError>>,
    cancel: CancellationToken,
}

impl TranslationTask {
    pub(crate) fn new(
        handle: JoinHandle<Result<Translation, TranslateError>>,
        cancel: CancellationToken,
    ) -> Self {
        Self { handle, cancel }
    }

    /// Stop the request. Awaiting the task then yields `Cancelled`.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub async fn join(self) -> Result<Translation, TranslateError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(TranslateError::Cancelled),
            Err(e) => Err(TranslateError::TaskFailed(e.to_string())),
        }
    }
}
