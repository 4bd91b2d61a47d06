use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;

#[test]
fn question_endpoint_formats_expected_path() {
    assert_eq!(question_endpoint(7), "/get_question/7");
}

fn run(backoff: Backoff, results: Vec<Result<u8, ClientError>>) -> (Result<u8, ClientError>, u32, Vec<u32>) {
    let results = RefCell::new(results.into_iter());
    let attempts = Cell::new(0);
    let sleeps = RefCell::new(Vec::new());
    let out = block_on(with_retry(
        backoff,
        || {
            attempts.set(attempts.get() + 1);
            let next = results.borrow_mut().next().unwrap_or(Err(ClientError::Status(500)));
            async move { next }
        },
        |ms| {
            sleeps.borrow_mut().push(ms);
            async {}
        },
    ));
    (out, attempts.get(), sleeps.into_inner())
}

#[test]
fn retries_transient_failures_then_succeeds() {
    let (out, attempts, sleeps) =
        run(Backoff::REQUEST, vec![Err(ClientError::Network("reset".to_owned())), Err(ClientError::Status(503)), Ok(4)]);
    assert_eq!(out, Ok(4));
    assert_eq!(attempts, 3);
    assert_eq!(sleeps, vec![400, 800]);
}

#[test]
fn gives_up_after_bounded_retries() {
    let (out, attempts, sleeps) = run(Backoff::REQUEST, Vec::new());
    assert_eq!(out, Err(ClientError::Status(500)));
    assert_eq!(attempts, 4);
    assert_eq!(sleeps, vec![400, 800, 1_600]);
}

#[test]
fn permanent_failure_is_not_retried() {
    let (out, attempts, sleeps) = run(Backoff::REQUEST, vec![Err(ClientError::Status(404))]);
    assert_eq!(out, Err(ClientError::Status(404)));
    assert_eq!(attempts, 1);
    assert!(sleeps.is_empty());
}
