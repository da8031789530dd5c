use std::fmt::Write as _;

use crate::{page::EventPageView, submission::SubmitError};

pub fn render_text(view: &EventPageView) -> String {
    let resolved = &view.resolved;
    let event = resolved.event.as_ref();
    let mut out = String::new();

    if let Some(error) = &view.submission.server_error {
        let _ = writeln!(out, "{}", error_text(error));
    }

    let _ = writeln!(out, "Event: {}", event.map_or("", |e| e.title.as_str()));
    if let Some(org) = &resolved.organization {
        let _ = writeln!(out, "Has to do with the {} organization.", org.name);
    }
    if let Some(animal) = &resolved.animal {
        let _ = writeln!(
            out,
            "Has to do with {}, the {} {}.",
            animal.name, animal.breed, animal.species
        );
    }
    let _ = writeln!(out, "Type: {}", event.map_or("", |e| e.kind.as_str()));
    if let Some(event) = event {
        let _ = writeln!(out, "Description");
        let _ = writeln!(out, "{}", event.description);
    }
    let _ = writeln!(
        out,
        "Date Published: {}",
        event.map_or("", |e| e.date_published.as_str())
    );

    let _ = writeln!(out, "Posts");
    for post in &resolved.related_posts {
        let _ = writeln!(out, "- {} ({})", post.content, post.date_published);
    }

    if view.submission.invalid {
        let _ = writeln!(out, "{}", SubmitError::EmptyContent);
    }
    out
}

fn error_text(error: &shared::error::ServerError) -> String {
    match error.body() {
        Some(body) => body.to_string(),
        None => error.to_string(),
    }
}
