use std::sync::{Arc, Mutex};

use super::*;
use async_trait::async_trait;
use serde_json::json;
use shared::domain::{EventId, PostId};

use crate::{
    context::{Collections, SharedCollections},
    navigation::{NavigationCall, RecordingNavigator},
};

struct TestPostsApi {
    response: Result<Post, ServerError>,
    requests: Arc<Mutex<Vec<NewPost>>>,
}

impl TestPostsApi {
    fn ok(post: Post) -> Self {
        Self {
            response: Ok(post),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(error: ServerError) -> Self {
        Self {
            response: Err(error),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<NewPost> {
        self.requests.lock().expect("requests").clone()
    }
}

#[async_trait]
impl PostsApi for TestPostsApi {
    async fn create_post(&self, post: &NewPost) -> Result<Post, ServerError> {
        self.requests.lock().expect("requests").push(post.clone());
        self.response.clone()
    }
}

fn created_post() -> Post {
    Post {
        id: PostId(5),
        content: "hi".into(),
        event_id: EventId(3),
        date_published: "2021-01-01".into(),
    }
}

fn existing_post() -> Post {
    Post {
        id: PostId(1),
        content: "first".into(),
        event_id: EventId(3),
        date_published: "2020-12-31".into(),
    }
}

fn context_with_one_post() -> SharedCollections {
    SharedCollections::new(Collections {
        posts: vec![existing_post()],
        ..Collections::default()
    })
}

#[tokio::test]
async fn empty_content_is_rejected_without_a_request() {
    let api = TestPostsApi::ok(created_post());
    let context = context_with_one_post();
    let navigator = RecordingNavigator::default();

    let err = submit_post(&api, &context, &navigator, "", "3")
        .await
        .expect_err("must fail");

    assert_eq!(err, SubmitError::EmptyContent);
    assert!(api.requests().is_empty());
    assert!(navigator.calls().is_empty());
    assert_eq!(context.snapshot().await.posts, vec![existing_post()]);
}

#[tokio::test]
async fn sends_exactly_one_request_with_content_and_event_id() {
    let api = TestPostsApi::ok(created_post());
    let context = context_with_one_post();
    let navigator = RecordingNavigator::default();

    submit_post(&api, &context, &navigator, "hi", "3")
        .await
        .expect("submit");

    assert_eq!(
        api.requests(),
        vec![NewPost {
            content: "hi".into(),
            event_id: Some(EventId(3)),
        }]
    );
}

#[tokio::test]
async fn success_appends_post_then_navigates_and_reloads() {
    let api = TestPostsApi::ok(created_post());
    let context = context_with_one_post();
    let navigator = RecordingNavigator::default();

    let post = submit_post(&api, &context, &navigator, "hi", "3")
        .await
        .expect("submit");

    assert_eq!(post, created_post());
    assert_eq!(context.snapshot().await.posts, vec![existing_post(), created_post()]);
    assert_eq!(
        navigator.calls(),
        vec![NavigationCall::Push("/event/3".into()), NavigationCall::Reload]
    );
}

#[tokio::test]
async fn server_error_leaves_shared_posts_untouched() {
    let api = TestPostsApi::failing(ServerError::rejected(400, json!({ "message": "invalid" })));
    let context = context_with_one_post();
    let navigator = RecordingNavigator::default();

    let outcome = submit_post(&api, &context, &navigator, "hi", "3").await;

    let mut state = SubmissionState::default();
    state.record(&outcome);
    let error = state.server_error.as_ref().expect("server error state");
    assert_eq!(
        error.body().map(|body| &body.0),
        Some(&json!({ "message": "invalid" }))
    );
    assert_eq!(api.requests().len(), 1);
    assert_eq!(context.snapshot().await.posts, vec![existing_post()]);
    assert!(navigator.calls().is_empty());
}

#[tokio::test]
async fn transport_failure_is_surfaced_as_server_error() {
    let api = TestPostsApi::failing(ServerError::Transport("connection refused".into()));
    let context = SharedCollections::default();
    let navigator = RecordingNavigator::default();

    let err = submit_post(&api, &context, &navigator, "hi", "3")
        .await
        .expect_err("must fail");

    assert_eq!(
        err,
        SubmitError::Server(ServerError::Transport("connection refused".into()))
    );
    assert_eq!(err.to_string(), "request failed: connection refused");
}

#[tokio::test]
async fn unparsable_event_id_is_sent_as_null() {
    let api = TestPostsApi::ok(created_post());
    let context = SharedCollections::default();
    let navigator = RecordingNavigator::default();

    submit_post(&api, &context, &navigator, "hi", "latest")
        .await
        .expect("submit");

    assert_eq!(api.requests()[0].event_id, None);
    assert_eq!(navigator.current_path().as_deref(), Some("/event/latest"));
}

#[tokio::test]
async fn whitespace_only_content_is_submitted() {
    let api = TestPostsApi::ok(created_post());
    let context = SharedCollections::default();
    let navigator = RecordingNavigator::default();

    submit_post(&api, &context, &navigator, "   ", "3")
        .await
        .expect("submit");

    assert_eq!(api.requests()[0].content, "   ");
}

fn rejected() -> SubmitError {
    SubmitError::Server(ServerError::rejected(400, json!({ "message": "invalid" })))
}

#[test]
fn empty_submit_then_rejection_keeps_both_notices() {
    let mut state = SubmissionState::default();

    state.record(&Err::<(), _>(SubmitError::EmptyContent));
    assert!(state.invalid);
    assert_eq!(state.server_error, None);

    state.record(&Err::<(), _>(rejected()));
    assert!(state.invalid);
    assert_eq!(
        state.server_error,
        Some(ServerError::rejected(400, json!({ "message": "invalid" })))
    );
}

#[test]
fn rejection_then_empty_submit_keeps_both_notices() {
    let mut state = SubmissionState::default();

    state.record(&Err::<(), _>(rejected()));
    state.record(&Err::<(), _>(SubmitError::EmptyContent));

    assert!(state.invalid);
    assert!(state.server_error.is_some());
}

#[test]
fn later_server_error_replaces_earlier_one() {
    let mut state = SubmissionState::default();

    state.record(&Err::<(), _>(rejected()));
    state.record(&Err::<(), _>(SubmitError::Server(ServerError::Decode(
        "eof".into(),
    ))));

    assert_eq!(state.server_error, Some(ServerError::Decode("eof".into())));
}

#[test]
fn success_clears_both_notices() {
    let mut state = SubmissionState::default();
    state.record(&Err::<(), _>(SubmitError::EmptyContent));
    state.record(&Err::<(), _>(rejected()));

    state.record(&Ok(()));

    assert!(state.is_idle());
    assert_eq!(state, SubmissionState::default());
}
