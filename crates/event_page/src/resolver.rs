use shared::{
    domain::parse_event_id,
    protocol::{Animal, Event, Organization, Post},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedEvent {
    pub event: Option<Event>,
    pub related_posts: Vec<Post>,
    pub organization: Option<Organization>,
    pub animal: Option<Animal>,
}

pub fn resolve(
    event_id: &str,
    events: &[Event],
    posts: &[Post],
    organizations: &[Organization],
    animals: &[Animal],
) -> ResolvedEvent {
    let Some(id) = parse_event_id(event_id) else {
        return ResolvedEvent::default();
    };

    let event = events.iter().find(|event| event.id == id).cloned();
    let related_posts = posts
        .iter()
        .filter(|post| post.event_id == id)
        .cloned()
        .collect();

    let organization = event
        .as_ref()
        .and_then(|event| event.org_id)
        .and_then(|org_id| organizations.iter().find(|org| org.id == org_id))
        .cloned();
    let animal = event
        .as_ref()
        .and_then(|event| event.animal_id)
        .and_then(|animal_id| animals.iter().find(|animal| animal.id == animal_id))
        .cloned();

    ResolvedEvent {
        event,
        related_posts,
        organization,
        animal,
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
