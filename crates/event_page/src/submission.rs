use shared::{
    domain::parse_event_id,
    error::ServerError,
    protocol::{NewPost, Post},
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    api::PostsApi,
    context::PageContext,
    navigation::{event_path, Navigator},
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("You must enter some text.")]
    EmptyContent,
    #[error(transparent)]
    Server(#[from] ServerError),
}

// Each notice is set only by its own kind of failure; success clears both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    pub invalid: bool,
    pub server_error: Option<ServerError>,
}

impl SubmissionState {
    pub fn record<T>(&mut self, outcome: &Result<T, SubmitError>) {
        match outcome {
            Ok(_) => *self = Self::default(),
            Err(SubmitError::EmptyContent) => self.invalid = true,
            Err(SubmitError::Server(error)) => self.server_error = Some(error.clone()),
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.invalid && self.server_error.is_none()
    }
}

pub async fn submit_post<A, C, N>(
    api: &A,
    context: &C,
    navigator: &N,
    raw_content: &str,
    event_id: &str,
) -> Result<Post, SubmitError>
where
    A: PostsApi + ?Sized,
    C: PageContext + ?Sized,
    N: Navigator + ?Sized,
{
    if raw_content.is_empty() {
        debug!(event_id, "refusing to submit empty post");
        return Err(SubmitError::EmptyContent);
    }

    let request = NewPost {
        content: raw_content.to_string(),
        event_id: parse_event_id(event_id),
    };
    let post = api.create_post(&request).await.map_err(|error| {
        warn!(event_id, %error, "post submission failed");
        error
    })?;

    info!(event_id, post_id = post.id.0, "post created");
    context.add_post(post.clone()).await;
    navigator.push(&event_path(event_id));
    navigator.reload();
    Ok(post)
}

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod tests;
