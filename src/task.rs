//! The cancellable unit of work behind every API call: one network exchange
//! plus its decode step, guarded by an atomic state machine.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::completion::{deliver, Completion};
use crate::errors::Error;
use crate::session::Session;
use crate::types::{ApiResponse, Meta};

const RUNNING: u8 = 0;
const SUCCEEDED: u8 = 1;
const FAILED: u8 = 2;
const CANCELED: u8 = 3;

/// Observable state of an in-flight or finished call. Terminal states are
/// final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Running,
    Succeeded,
    Failed,
    Canceled,
}

/// Atomic state machine shared between a task and its handle.
///
/// Every terminal transition goes through one compare-and-swap from
/// `Running`, so of two racing parties (cancellation and completion) exactly
/// one wins.
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    pub(crate) fn new() -> Self {
        Self(AtomicU8::new(RUNNING))
    }

    /// Attempts the `Running -> terminal` transition. Returns false if the
    /// call already finished, canceled or otherwise.
    pub(crate) fn try_finish(&self, status: TaskStatus) -> bool {
        let raw = match status {
            TaskStatus::Succeeded => SUCCEEDED,
            TaskStatus::Failed => FAILED,
            TaskStatus::Canceled => CANCELED,
            TaskStatus::Running => return false,
        };
        self.0
            .compare_exchange(RUNNING, raw, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn get(&self) -> TaskStatus {
        match self.0.load(Ordering::Acquire) {
            SUCCEEDED => TaskStatus::Succeeded,
            FAILED => TaskStatus::Failed,
            CANCELED => TaskStatus::Canceled,
            _ => TaskStatus::Running,
        }
    }
}

/// Caller-visible token for one in-flight call.
///
/// Dropping the handle does not cancel the call; only [`RequestHandle::cancel`]
/// does.
pub struct RequestHandle {
    state: Arc<StateCell>,
    abort: tokio::task::AbortHandle,
}

impl RequestHandle {
    /// Requests cancellation. Returns true only for the invocation that won
    /// the `Running -> Canceled` transition; once won, the completion handler
    /// is guaranteed never to fire. Canceling a finished call is a no-op.
    ///
    /// Best-effort: the underlying transport is interrupted by aborting the
    /// task, with no deadline guarantee.
    pub fn cancel(&self) -> bool {
        if self.state.try_finish(TaskStatus::Canceled) {
            self.abort.abort();
            true
        } else {
            false
        }
    }

    pub fn status(&self) -> TaskStatus {
        self.state.get()
    }

    pub fn is_finished(&self) -> bool {
        self.state.get() != TaskStatus::Running
    }
}

/// One network call plus its decode step. Owns its URL and a handle to the
/// shared transport; nothing is shared with other in-flight tasks.
pub(crate) struct RequestTask<S> {
    session: Arc<S>,
    url: Url,
}

impl<S: Session + 'static> RequestTask<S> {
    pub(crate) fn new(session: Arc<S>, url: Url) -> Self {
        Self { session, url }
    }

    /// Spawns the exchange onto the ambient tokio runtime and returns the
    /// handle immediately. The completion handler runs on the spawned task.
    pub(crate) fn dispatch<T>(self, completion: Completion<T>) -> RequestHandle
    where
        T: ApiResponse + DeserializeOwned + Send + 'static,
    {
        let Self { session, url } = self;
        let state = Arc::new(StateCell::new());
        let task_state = Arc::clone(&state);
        let join = tokio::spawn(async move {
            let outcome = fetch::<S, T>(session.as_ref(), url).await;
            deliver(&task_state, completion, outcome);
        });
        RequestHandle {
            state,
            abort: join.abort_handle(),
        }
    }
}

/// Error envelope the API ships with non-2xx responses.
#[derive(Deserialize)]
struct ErrorEnvelope {
    meta: Meta,
}

async fn fetch<S, T>(session: &S, url: Url) -> Result<T, Error>
where
    S: Session,
    T: ApiResponse + DeserializeOwned,
{
    let resp = session.execute(url).await?;

    if !(200..300).contains(&resp.status) {
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(&resp.body) {
            return Err(Error::Server {
                status: envelope.meta.status,
                message: envelope.meta.msg,
            });
        }
        tracing::error!("request failed with status {}", resp.status);
        return Err(Error::Transport(format!(
            "unexpected HTTP status {}",
            resp.status
        )));
    }

    let parsed: T = serde_json::from_slice(&resp.body).map_err(|e| {
        tracing::error!("failed to decode response body: {}", e);
        Error::Decode(e.to_string())
    })?;

    // The API reports failures inside 2xx bodies as well.
    let meta = parsed.meta();
    if !(200..300).contains(&meta.status) {
        return Err(Error::Server {
            status: meta.status,
            message: meta.msg.clone(),
        });
    }

    Ok(parsed)
}
