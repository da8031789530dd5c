use serde::{Deserialize, Serialize};

use crate::domain::{AnimalId, EventId, OrganizationId, PostId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub date_published: String,
    #[serde(default)]
    pub org_id: Option<OrganizationId>,
    #[serde(default)]
    pub animal_id: Option<AnimalId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub event_id: EventId,
    pub date_published: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub breed: String,
    pub species: String,
}

// `event_id` is null when the route id did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub content: String,
    pub event_id: Option<EventId>,
}
