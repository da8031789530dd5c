use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    error::ServerError,
    protocol::{NewPost, Post},
};
use tracing::{debug, warn};

use crate::{config::Settings, context::Collections};

#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn create_post(&self, post: &NewPost) -> Result<Post, ServerError>;
}

#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: Client,
    api_endpoint: String,
}

impl HttpApiClient {
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_endpoint: api_endpoint.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            api_endpoint: settings.api_endpoint.clone(),
        })
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub async fn fetch_collections(&self) -> Result<Collections, ServerError> {
        let (events, posts, organizations, animals) = futures::try_join!(
            self.get_json("events"),
            self.get_json("posts"),
            self.get_json("organizations"),
            self.get_json("animals"),
        )?;
        Ok(Collections {
            events,
            posts,
            organizations,
            animals,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ServerError> {
        let url = format!("{}/{resource}", self.api_endpoint);
        debug!(%url, "fetching collection");
        let response = self.http.get(&url).send().await.map_err(transport)?;
        read_json(response).await
    }
}

#[async_trait]
impl PostsApi for HttpApiClient {
    async fn create_post(&self, post: &NewPost) -> Result<Post, ServerError> {
        let url = format!("{}/posts", self.api_endpoint);
        debug!(%url, event_id = ?post.event_id, "creating post");
        let response = self
            .http
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(post)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}

fn transport(error: reqwest::Error) -> ServerError {
    warn!(%error, "request to API failed");
    ServerError::Transport(error.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServerError> {
    let status = response.status();
    if !status.is_success() {
        let body: Value = response
            .json()
            .await
            .map_err(|e| ServerError::Decode(e.to_string()))?;
        warn!(status = status.as_u16(), %body, "API returned an error");
        return Err(ServerError::rejected(status.as_u16(), body));
    }
    response
        .json()
        .await
        .map_err(|e| ServerError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
