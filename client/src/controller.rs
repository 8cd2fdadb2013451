use crate::api_service::RagApiService;
use crate::error::Result;
use crate::models::SelectedFile;
use crate::state::{reduce, Event, Notice, RequestKind, ViewState};
use crate::view;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

/// Whether a flow actually reached the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Preconditions not met (no file, empty question); nothing was sent.
    Skipped,
    Completed,
}

/// Owns the view state and runs the upload and ask flows against it.
///
/// Clones share the same state, so a request can run on a spawned task while
/// the caller keeps editing. The state lock is never held across a request.
#[derive(Clone)]
pub struct Controller {
    api: Arc<RagApiService>,
    state: Arc<RwLock<ViewState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Controller {
    pub fn new(api: RagApiService) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            api: Arc::new(api),
            state: Arc::new(RwLock::new(ViewState::default())),
            revision: Arc::new(revision),
        }
    }

    /// Ticks whenever the rendered screen may have changed.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    pub async fn render(&self) -> String {
        view::render(&*self.state.read().await)
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }

    pub async fn select_file(&self, file: SelectedFile) {
        log::debug!("Selected {} ({} bytes)", file.name, file.len());
        self.dispatch(Event::FileSelected(file)).await;
    }

    pub async fn edit_question(&self, question: impl Into<String>) {
        self.dispatch(Event::QuestionEdited(question.into())).await;
    }

    /// Acknowledges the pending notice, returning it.
    pub async fn dismiss_notice(&self) -> Option<Notice> {
        let mut state = self.state.write().await;
        let notice = state.notice;
        if notice.is_some() {
            // Notices are not part of the screen, so subscribers are not woken.
            let current = std::mem::take(&mut *state);
            *state = reduce(current, Event::NoticeDismissed);
        }
        notice
    }

    pub async fn upload(&self) -> Result<Submission> {
        let file = {
            let mut state = self.state.write().await;
            let file = match &state.file {
                Some(file) => file.clone(),
                None => {
                    log::debug!("Upload skipped: no file selected");
                    return Ok(Submission::Skipped);
                }
            };
            state.ensure_idle()?;

            self.apply(&mut state, Event::RequestStarted(RequestKind::Upload));
            file
        };

        let success = match self.api.upload(&file).await {
            Ok(status) => status.is_success(),
            Err(e) => {
                log::warn!("Upload of {} failed: {}", file.name, e);
                false
            }
        };

        self.dispatch(Event::UploadFinished { success }).await;
        Ok(Submission::Completed)
    }

    pub async fn ask(&self) -> Result<Submission> {
        let question = {
            let mut state = self.state.write().await;
            if state.question.is_empty() {
                log::debug!("Ask skipped: empty question");
                return Ok(Submission::Skipped);
            }
            state.ensure_idle()?;

            let question = state.question.clone();
            self.apply(&mut state, Event::RequestStarted(RequestKind::Ask));
            question
        };

        match self.api.ask(&question).await {
            Ok(response) => self.dispatch(Event::AskSucceeded(response)).await,
            Err(e) => {
                log::warn!("Ask failed: {}", e);
                self.dispatch(Event::AskFailed(e.to_string())).await;
            }
        }

        Ok(Submission::Completed)
    }

    async fn dispatch(&self, event: Event) {
        let mut state = self.state.write().await;
        self.apply(&mut state, event);
    }

    fn apply(&self, state: &mut ViewState, event: Event) {
        let current = std::mem::take(state);
        *state = reduce(current, event);
        self.revision.send_modify(|rev| *rev += 1);
    }
}
