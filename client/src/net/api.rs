//! HTTP helpers for the questionnaire endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Host builds: stubs returning [`ClientError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, 5xx and 429 responses are retried with bounded
//! exponential backoff; everything else fails immediately so the page can
//! show its retry control.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use std::future::Future;

use super::types::Question;
use crate::error::ClientError;
use crate::state::answers::AnswerSet;
#[cfg(any(test, feature = "csr"))]
use crate::util::backoff::Backoff;

#[cfg(any(test, feature = "csr"))]
fn question_endpoint(index: usize) -> String {
    format!("/get_question/{index}")
}

/// Run `attempt` until it succeeds, fails permanently, or `backoff` runs out.
#[cfg(any(test, feature = "csr"))]
async fn with_retry<T, A, AF, S, SF>(backoff: Backoff, mut attempt: A, mut sleep: S) -> Result<T, ClientError>
where
    A: FnMut() -> AF,
    AF: Future<Output = Result<T, ClientError>>,
    S: FnMut(u32) -> SF,
    SF: Future<Output = ()>,
{
    let mut retry = 0;
    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && backoff.allows_retry(retry) => {
                let delay = backoff.delay_ms(retry);
                log::warn!("request failed ({err}); retry {} in {delay}ms", retry + 1);
                sleep(delay).await;
                retry += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(feature = "csr")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(feature = "csr")]
fn network_error(err: gloo_net::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

/// Fetch question `index` from `GET /get_question/{index}`.
///
/// # Errors
///
/// Returns the last error once retries are exhausted, or immediately for
/// non-retryable statuses and malformed bodies.
pub async fn fetch_question(index: usize) -> Result<Question, ClientError> {
    #[cfg(feature = "csr")]
    {
        let url = question_endpoint(index);
        let url = url.as_str();
        let mut question = with_retry(
            Backoff::REQUEST,
            move || async move {
                let resp = gloo_net::http::Request::get(url).send().await.map_err(network_error)?;
                if !resp.ok() {
                    return Err(ClientError::Status(resp.status()));
                }
                resp.json::<Question>().await.map_err(|e| ClientError::Decode(e.to_string()))
            },
            sleep_ms,
        )
        .await?;
        question.index = index;
        Ok(question)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = index;
        Err(ClientError::Unavailable("fetch"))
    }
}

/// Store the answer map with `POST /submit_answers`.
///
/// # Errors
///
/// Returns the last error once retries are exhausted.
pub async fn submit_answers(answers: &AnswerSet) -> Result<(), ClientError> {
    #[cfg(feature = "csr")]
    {
        use super::types::SubmitAnswersBody;
        use crate::consts::SUBMIT_ANSWERS_PATH;

        let body = SubmitAnswersBody { answers };
        let body = &body;
        with_retry(
            Backoff::REQUEST,
            move || async move {
                let resp = gloo_net::http::Request::post(SUBMIT_ANSWERS_PATH)
                    .json(body)
                    .map_err(network_error)?
                    .send()
                    .await
                    .map_err(network_error)?;
                if !resp.ok() {
                    return Err(ClientError::Status(resp.status()));
                }
                Ok(())
            },
            sleep_ms,
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = answers;
        Err(ClientError::Unavailable("fetch"))
    }
}
