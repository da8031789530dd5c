use std::sync::Arc;

use shared::protocol::Post;

use crate::{
    api::PostsApi,
    context::PageContext,
    navigation::Navigator,
    resolver::{resolve, ResolvedEvent},
    submission::{submit_post, SubmissionState, SubmitError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct EventPageView {
    pub resolved: ResolvedEvent,
    pub submission: SubmissionState,
}

pub struct EventPage {
    event_id: String,
    context: Arc<dyn PageContext>,
    navigator: Arc<dyn Navigator>,
    api: Arc<dyn PostsApi>,
    state: SubmissionState,
}

impl EventPage {
    pub fn new(
        event_id: impl Into<String>,
        context: Arc<dyn PageContext>,
        navigator: Arc<dyn Navigator>,
        api: Arc<dyn PostsApi>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            context,
            navigator,
            api,
            state: SubmissionState::default(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub async fn render(&self) -> EventPageView {
        let collections = self.context.snapshot().await;
        let resolved = resolve(
            &self.event_id,
            &collections.events,
            &collections.posts,
            &collections.organizations,
            &collections.animals,
        );
        EventPageView {
            resolved,
            submission: self.state.clone(),
        }
    }

    pub async fn submit(&mut self, raw_content: &str) -> Result<Post, SubmitError> {
        let outcome = submit_post(
            self.api.as_ref(),
            self.context.as_ref(),
            self.navigator.as_ref(),
            raw_content,
            &self.event_id,
        )
        .await;
        self.state.record(&outcome);
        outcome
    }
}
