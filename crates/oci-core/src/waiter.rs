//! Lifecycle state polling.

use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::error::{Error, Result};

/// Interval between polls used by long-running workflows.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Poll `fetch` until the resource reaches `terminal_state`.
///
/// While the state is one of `wait_states` the waiter sleeps for `interval`
/// and polls again. Any other state fails with [`Error::UnexpectedState`].
/// `max_polls` bounds the number of fetches; `None` polls forever.
///
/// # Errors
///
/// Returns the first error from `fetch`, [`Error::UnexpectedState`], or
/// [`Error::WaitTimeout`] once `max_polls` is exhausted.
pub async fn wait_for_state<S, F, Fut>(
    mut fetch: F,
    wait_states: &[S],
    terminal_state: &S,
    max_polls: Option<u32>,
    interval: Duration,
) -> Result<S>
where
    S: PartialEq + Debug,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<S>>,
{
    let mut polls: u32 = 0;

    while max_polls.map_or(true, |max| polls < max) {
        polls += 1;
        let state = fetch().await?;

        if wait_states.contains(&state) {
            debug!(?state, ?terminal_state, polls, "waiting for resource state");
            sleep(interval).await;
            continue;
        }
        if &state == terminal_state {
            return Ok(state);
        }
        return Err(Error::UnexpectedState(format!(
            "{state:?}, expecting a waiting state {wait_states:?} or terminal state {terminal_state:?}"
        )));
    }

    Err(Error::WaitTimeout(format!(
        "maximum number of polls ({}) exceeded; resource did not reach state {terminal_state:?}",
        max_polls.unwrap_or_default()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    enum State {
        Provisioning,
        Running,
        Terminated,
    }

    fn sequence(states: Vec<State>) -> (Arc<AtomicUsize>, impl FnMut() -> std::future::Ready<Result<State>>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let fetch = move || {
            let index = counter.fetch_add(1, Ordering::SeqCst);
            let state = states[index.min(states.len() - 1)].clone();
            std::future::ready(Ok(state))
        };
        (calls, fetch)
    }

    #[tokio::test]
    async fn test_reaches_terminal_state() {
        let (calls, fetch) = sequence(vec![
            State::Provisioning,
            State::Provisioning,
            State::Running,
        ]);
        let state = wait_for_state(
            fetch,
            &[State::Provisioning],
            &State::Running,
            None,
            Duration::from_millis(1),
        )
        .await
        .unwrap();
        assert_eq!(state, State::Running);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_unexpected_state() {
        let (_, fetch) = sequence(vec![State::Provisioning, State::Terminated]);
        let err = wait_for_state(
            fetch,
            &[State::Provisioning],
            &State::Running,
            None,
            Duration::from_millis(1),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::UnexpectedState(_)));
        assert!(err.to_string().contains("Terminated"));
    }

    #[tokio::test]
    async fn test_max_polls_exceeded() {
        let (calls, fetch) = sequence(vec![State::Provisioning]);
        let err = wait_for_state(
            fetch,
            &[State::Provisioning],
            &State::Running,
            Some(3),
            Duration::from_millis(1),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::WaitTimeout(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_fetch_error_is_returned() {
        let err = wait_for_state(
            || async { Err::<State, _>(Error::NotFound("gone".to_string())) },
            &[State::Provisioning],
            &State::Running,
            None,
            Duration::from_millis(1),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
