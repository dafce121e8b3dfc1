//! JSON projections shown in the editor and code view modes.
//!
//! Each page selects and renames a subset of its record fields. Missing
//! optional fields project as `null`.

use serde_json::{Map, Value, json};

use folio_types::{
    Achievement, BlogPost, BookRec, Education, Experience, MovieRec, MusicRec, Payload, Profile,
    Project, Skill, Writing,
};

/// `"Ledger KV"` -> `"ledger-kv"`
#[must_use]
pub fn kebab_case(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[must_use]
pub fn experiences(items: &[Experience]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|exp| {
                json!({
                    "company": exp.company,
                    "role": exp.role,
                    "period": exp.duration,
                    "description": exp.description,
                })
            })
            .collect(),
    )
}

/// The last of two or more projects is reported as completed.
#[must_use]
pub fn projects(items: &[Project]) -> Value {
    let last = items.len().saturating_sub(1);
    Value::Array(
        items
            .iter()
            .enumerate()
            .map(|(idx, project)| {
                let status = if idx > 0 && idx == last {
                    "Completed"
                } else {
                    "Active"
                };
                json!({
                    "id": idx + 1,
                    "name": kebab_case(&project.title),
                    "title": project.title,
                    "description": project.description,
                    "techStack": project.tech_stack,
                    "status": status,
                    "links": {
                        "github": project.github_link,
                        "demo": project.link,
                    },
                })
            })
            .collect(),
    )
}

/// `{category: items}` in display order.
#[must_use]
pub fn skills(items: &[Skill]) -> Value {
    let mut map = Map::new();
    for skill in items {
        map.insert(skill.category.clone(), json!(skill.items));
    }
    Value::Object(map)
}

#[must_use]
pub fn education(items: &[Education]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|edu| {
                json!({
                    "institution": edu.institution,
                    "degree": edu.degree,
                    "year": edu.year,
                })
            })
            .collect(),
    )
}

#[must_use]
pub fn music(items: &[MusicRec]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|rec| {
                json!({
                    "title": rec.title,
                    "artist": rec.artist,
                    "genre": rec.genre,
                    "note": rec.note,
                })
            })
            .collect(),
    )
}

#[must_use]
pub fn books(items: &[BookRec]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|rec| {
                json!({
                    "title": rec.title,
                    "author": rec.author,
                    "genre": rec.genre,
                    "note": rec.note,
                })
            })
            .collect(),
    )
}

#[must_use]
pub fn movies(items: &[MovieRec]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|rec| {
                json!({
                    "title": rec.title,
                    "director": rec.director,
                    "year": rec.year,
                    "genre": rec.genre,
                    "note": rec.note,
                })
            })
            .collect(),
    )
}

#[must_use]
pub fn writings(items: &[Writing]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|writing| {
                json!({
                    "title": writing.title,
                    "description": writing.description,
                    "url": writing.link,
                    "publishedAt": writing.published_at,
                })
            })
            .collect(),
    )
}

#[must_use]
pub fn achievements(items: &[Achievement]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|item| {
                json!({
                    "title": item.title,
                    "issuer": item.issuer,
                    "date": item.date,
                    "type": item.kind,
                })
            })
            .collect(),
    )
}

#[must_use]
pub fn blog(items: &[BlogPost]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|post| {
                json!({
                    "title": post.title,
                    "slug": post.slug,
                    "publishedAt": post.published_at,
                    "tags": post.tags(),
                })
            })
            .collect(),
    )
}

#[must_use]
pub fn profile(profile: &Profile) -> Value {
    json!({
        "name": profile.name,
        "title": profile.title,
        "bio": profile.bio,
        "email": profile.email,
        "github": profile.github_url,
        "linkedin": profile.linkedin_url,
    })
}

/// The projection for any list payload. Single-record payloads have none
/// except the profile.
#[must_use]
pub fn project_payload(payload: &Payload) -> Option<Value> {
    Some(match payload {
        Payload::Profile(Some(p)) => profile(p),
        Payload::Experiences(items) => experiences(items),
        Payload::Projects(items) => projects(items),
        Payload::Skills(items) => skills(items),
        Payload::Education(items) => education(items),
        Payload::Music(items) => music(items),
        Payload::Books(items) => books(items),
        Payload::Movies(items) => movies(items),
        Payload::Writings(items) => writings(items),
        Payload::Achievements(items) => achievements(items),
        Payload::Blog(items) => blog(items),
        Payload::Profile(None) | Payload::BlogPost(_) => return None,
    })
}

/// Two-space indented JSON.
#[must_use]
pub fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// `export const bio = {...};`
#[must_use]
pub fn bio_source(p: &Profile) -> String {
    format!("export const bio = {};", to_pretty(&profile(p)))
}
