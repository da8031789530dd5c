use std::sync::Arc;

use async_trait::async_trait;
use shared::protocol::{Animal, Event, Organization, Post};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collections {
    pub events: Vec<Event>,
    pub posts: Vec<Post>,
    pub organizations: Vec<Organization>,
    pub animals: Vec<Animal>,
}

#[async_trait]
pub trait PageContext: Send + Sync {
    async fn snapshot(&self) -> Collections;
    async fn add_post(&self, post: Post);
}

#[derive(Debug, Clone, Default)]
pub struct SharedCollections {
    inner: Arc<RwLock<Collections>>,
}

impl SharedCollections {
    pub fn new(collections: Collections) -> Self {
        Self {
            inner: Arc::new(RwLock::new(collections)),
        }
    }

    pub async fn replace(&self, collections: Collections) {
        *self.inner.write().await = collections;
    }
}

#[async_trait]
impl PageContext for SharedCollections {
    async fn snapshot(&self) -> Collections {
        self.inner.read().await.clone()
    }

    async fn add_post(&self, post: Post) {
        let mut guard = self.inner.write().await;
        debug!(post_id = post.id.0, event_id = post.event_id.0, "appending post");
        guard.posts.push(post);
    }
}
