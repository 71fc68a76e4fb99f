use dioxus::prelude::*;
use services::GalleryError;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The pictures directory has nothing to show.
    NoMedia,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NoMedia => "❌ Nenhuma foto ou vídeo encontrado no diretório de fotos!",
            ViewError::Unknown => "Algo deu errado. Tente novamente.",
        }
    }
}

impl From<GalleryError> for ViewError {
    fn from(err: GalleryError) -> Self {
        match err {
            GalleryError::NoMedia { .. } => ViewError::NoMedia,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// Run file and image work on the blocking pool so timers and input keep
/// flowing while media is read, resized and encoded.
///
/// # Errors
///
/// Returns `ViewError::Unknown` when the task panics or is cancelled.
pub async fn run_blocking<T, F>(work: F) -> Result<T, ViewError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|err| {
        warn!(error = %err, "media task failed");
        ViewError::Unknown
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "current_thread")]
    async fn blocking_work_hands_back_its_value() {
        let value = run_blocking(|| 21 * 2).await;
        assert_eq!(value, Ok(42));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn panicking_work_becomes_unknown_error() {
        let value: Result<u8, ViewError> = run_blocking(|| panic!("decoder blew up")).await;
        assert_eq!(value, Err(ViewError::Unknown));
    }
}
