//! At-most-once outcome delivery for asynchronous API calls.
//!
//! Every call registers exactly one handler. The handler receives either the
//! decoded response or an [`Error`], never both and never neither; `Result`
//! makes the illegal combinations unrepresentable. Delivery happens on the
//! tokio worker that executed the request task, never on the caller's thread,
//! and this holds for every endpoint. A canceled call delivers nothing.

use crate::errors::Error;
use crate::task::{StateCell, TaskStatus};

/// Boxed completion handler, consumed on delivery.
pub type Completion<T> = Box<dyn FnOnce(Result<T, Error>) + Send + 'static>;

/// Delivers `outcome` unless the call already reached a terminal state.
///
/// The transition into `Succeeded`/`Failed` and the decision to invoke the
/// handler are one compare-and-swap, so a racing cancellation either wins the
/// transition (and the handler is never called) or loses it entirely.
pub(crate) fn deliver<T>(state: &StateCell, completion: Completion<T>, outcome: Result<T, Error>) {
    let terminal = if outcome.is_ok() {
        TaskStatus::Succeeded
    } else {
        TaskStatus::Failed
    };
    if state.try_finish(terminal) {
        completion(outcome);
    }
}
