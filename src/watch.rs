//! Channel-driven evaluation loop for async hosts.

use secrecy::SecretString;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::evaluator::evaluate_password_strength;
use crate::types::PasswordEvaluation;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WatchError {
    #[error("Evaluation receiver dropped after {0} results")]
    ResultsClosed(usize),
}

/// Evaluates every password received on `passwords` and sends one
/// evaluation per value on `results`, in arrival order.
///
/// Runs until the input channel closes or `token` is cancelled, and returns
/// the number of evaluations delivered. Cancellation is only observed
/// between evaluations.
///
/// # Errors
///
/// Returns [`WatchError::ResultsClosed`] if the result receiver is dropped.
pub async fn watch_password_changes(
    mut passwords: mpsc::Receiver<SecretString>,
    results: mpsc::Sender<PasswordEvaluation>,
    token: CancellationToken,
) -> Result<usize, WatchError> {
    #[cfg(feature = "tracing")]
    tracing::info!("password watcher started");

    let mut delivered = 0;

    loop {
        let password = tokio::select! {
            biased;
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::info!("password watcher cancelled after {} evaluations", delivered);
                break;
            }
            next = passwords.recv() => match next {
                Some(password) => password,
                None => break,
            },
        };

        let evaluation = evaluate_password_strength(&password);

        if results.send(evaluation).await.is_err() {
            #[cfg(feature = "tracing")]
            tracing::warn!("password evaluation receiver dropped");
            return Err(WatchError::ResultsClosed(delivered));
        }
        delivered += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::info!("password watcher stopped: {} evaluations delivered", delivered);

    Ok(delivered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use crate::types::PasswordStrength;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_watch_one_result_per_password() {
        let (pwd_tx, pwd_rx) = mpsc::channel(8);
        let (res_tx, mut res_rx) = mpsc::channel(8);
        let token = CancellationToken::new();

        let inputs = ["", "abcdefgh1", "Abcdefgh1", "Abcdefg1!", "Abcdefg1!"];
        for p in inputs {
            pwd_tx.send(pwd(p)).await.expect("send password");
        }
        drop(pwd_tx);

        let delivered = watch_password_changes(pwd_rx, res_tx, token)
            .await
            .expect("watcher should finish");
        assert_eq!(delivered, inputs.len());

        let mut received = Vec::new();
        while let Some(evaluation) = res_rx.recv().await {
            received.push(evaluation);
        }

        let expected: Vec<_> = inputs.iter().map(|p| evaluate(p)).collect();
        assert_eq!(received, expected);
        assert_eq!(received[1].strength(), PasswordStrength::Medium);
        assert_eq!(received[2].strength(), PasswordStrength::Strong);
        assert!(!received[2].is_valid());
        assert!(received[4].is_valid());
    }

    #[tokio::test]
    async fn test_watch_cancelled_before_start() {
        let (pwd_tx, pwd_rx) = mpsc::channel(1);
        let (res_tx, mut res_rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        pwd_tx.send(pwd("Abcdefg1!")).await.expect("send password");

        let delivered = watch_password_changes(pwd_rx, res_tx, token)
            .await
            .expect("cancel is not an error");
        assert_eq!(delivered, 0);
        assert!(res_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_watch_cancel_while_idle() {
        let (pwd_tx, pwd_rx) = mpsc::channel::<SecretString>(1);
        let (res_tx, _res_rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let handle = tokio::spawn(watch_password_changes(pwd_rx, res_tx, token.clone()));
        token.cancel();

        let delivered = handle.await.expect("task join").expect("watcher result");
        assert_eq!(delivered, 0);
        drop(pwd_tx);
    }

    #[tokio::test]
    async fn test_watch_results_receiver_dropped() {
        let (pwd_tx, pwd_rx) = mpsc::channel(1);
        let (res_tx, res_rx) = mpsc::channel(1);
        drop(res_rx);

        pwd_tx.send(pwd("abc")).await.expect("send password");

        let result = watch_password_changes(pwd_rx, res_tx, CancellationToken::new()).await;
        assert_eq!(result, Err(WatchError::ResultsClosed(0)));
    }
}
