use anyhow::Error;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// How often and how patiently a provider retries a failed request.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub retries: usize,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            retries: 3,
            delay: Duration::from_millis(500),
        }
    }
}

/// Runs `operation` until it succeeds or `policy.retries` extra attempts fail.
///
/// Returns the last error once attempts are exhausted.
pub async fn with_retry<F, Fut, T>(mut operation: F, policy: RetryPolicy) -> Result<T, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, reqwest::Error>>,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(val) => return Ok(val),
            Err(err) if attempt > policy.retries => return Err(err.into()),
            Err(err) => {
                debug!(
                    "Attempt {}/{} failed: {}. Retrying...",
                    attempt,
                    policy.retries + 1,
                    err
                );
                attempt += 1;
                tokio::time::sleep(policy.delay).await;
            }
        }
    }
}

/// Fetches `url` as text, treating non-2xx statuses as failures worth retrying.
pub async fn get_text(
    client: &reqwest::Client,
    url: &str,
    policy: RetryPolicy,
) -> Result<String, Error> {
    let response = with_retry(
        || async {
            client
                .get(url)
                .send()
                .await
                .and_then(|r| r.error_for_status())
        },
        policy,
    )
    .await?;
    Ok(response.text().await?)
}
