pub mod api;
pub mod config;
pub mod context;
pub mod navigation;
pub mod page;
pub mod render;
pub mod resolver;
pub mod submission;

pub use api::{HttpApiClient, PostsApi};
pub use context::{Collections, PageContext, SharedCollections};
pub use navigation::{NavigationCall, Navigator, RecordingNavigator};
pub use page::{EventPage, EventPageView};
pub use render::render_text;
pub use resolver::{resolve, ResolvedEvent};
pub use submission::{submit_post, SubmissionState, SubmitError};
