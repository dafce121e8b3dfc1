//! REST endpoint vocabulary shared by the engine and the data sources.

use serde::{Deserialize, Serialize};

use crate::content::{
    Achievement, BlogPost, BookRec, Education, Experience, MovieRec, MusicRec, Profile, Project,
    Skill, Writing,
};

/// A GET endpoint of the portfolio API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Profile,
    Experiences,
    Projects,
    Skills,
    Education,
    Music,
    Books,
    Movies,
    Writings,
    Achievements,
    Blog,
    BlogPost(String),
}

impl Endpoint {
    /// Request path relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Endpoint::Profile => "/api/profile".to_string(),
            Endpoint::Experiences => "/api/experiences".to_string(),
            Endpoint::Projects => "/api/projects".to_string(),
            Endpoint::Skills => "/api/skills".to_string(),
            Endpoint::Education => "/api/education".to_string(),
            Endpoint::Music => "/api/music".to_string(),
            Endpoint::Books => "/api/books".to_string(),
            Endpoint::Movies => "/api/movies".to_string(),
            Endpoint::Writings => "/api/writings".to_string(),
            Endpoint::Achievements => "/api/achievements".to_string(),
            Endpoint::Blog => "/api/blog".to_string(),
            Endpoint::BlogPost(slug) => format!("/api/blog/{slug}"),
        }
    }

    /// Single-record endpoints answer 404 for "no such record".
    #[must_use]
    pub const fn is_single(&self) -> bool {
        matches!(self, Endpoint::Profile | Endpoint::BlogPost(_))
    }
}

/// Decoded response body of an [`Endpoint`].
///
/// Single-record endpoints carry `None` when the server reported 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Profile(Option<Profile>),
    Experiences(Vec<Experience>),
    Projects(Vec<Project>),
    Skills(Vec<Skill>),
    Education(Vec<Education>),
    Music(Vec<MusicRec>),
    Books(Vec<BookRec>),
    Movies(Vec<MovieRec>),
    Writings(Vec<Writing>),
    Achievements(Vec<Achievement>),
    Blog(Vec<BlogPost>),
    BlogPost(Option<BlogPost>),
}

impl Payload {
    /// The "not found" payload for a single-record endpoint.
    #[must_use]
    pub fn not_found(endpoint: &Endpoint) -> Option<Self> {
        match endpoint {
            Endpoint::Profile => Some(Payload::Profile(None)),
            Endpoint::BlogPost(_) => Some(Payload::BlogPost(None)),
            _ => None,
        }
    }

    /// Decode a JSON body for `endpoint`.
    pub fn decode(endpoint: &Endpoint, body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(match endpoint {
            Endpoint::Profile => Payload::Profile(Some(serde_json::from_slice(body)?)),
            Endpoint::Experiences => Payload::Experiences(serde_json::from_slice(body)?),
            Endpoint::Projects => Payload::Projects(serde_json::from_slice(body)?),
            Endpoint::Skills => Payload::Skills(serde_json::from_slice(body)?),
            Endpoint::Education => Payload::Education(serde_json::from_slice(body)?),
            Endpoint::Music => Payload::Music(serde_json::from_slice(body)?),
            Endpoint::Books => Payload::Books(serde_json::from_slice(body)?),
            Endpoint::Movies => Payload::Movies(serde_json::from_slice(body)?),
            Endpoint::Writings => Payload::Writings(serde_json::from_slice(body)?),
            Endpoint::Achievements => Payload::Achievements(serde_json::from_slice(body)?),
            Endpoint::Blog => Payload::Blog(serde_json::from_slice(body)?),
            Endpoint::BlogPost(_) => Payload::BlogPost(Some(serde_json::from_slice(body)?)),
        })
    }

    /// Whether a single-record payload reports a missing record.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Payload::Profile(None) | Payload::BlogPost(None))
    }
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_post_path_includes_slug() {
        let endpoint = Endpoint::BlogPost("hello-world".to_string());
        assert_eq!(endpoint.path(), "/api/blog/hello-world");
        assert!(endpoint.is_single());
        assert!(!Endpoint::Blog.is_single());
    }

    #[test]
    fn decode_list_payload() {
        let body = br#"[{"category":"Languages","items":["Rust","Go"],"order":1}]"#;
        let payload = Payload::decode(&Endpoint::Skills, body).expect("decode");
        match payload {
            Payload::Skills(skills) => {
                assert_eq!(skills.len(), 1);
                assert_eq!(skills[0].items, vec!["Rust", "Go"]);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn empty_list_decodes() {
        let payload = Payload::decode(&Endpoint::Writings, b"[]").expect("decode");
        assert_eq!(payload, Payload::Writings(Vec::new()));
    }

    #[test]
    fn not_found_only_for_single_records() {
        assert!(Payload::not_found(&Endpoint::Profile).is_some_and(|p| p.is_not_found()));
        assert!(Payload::not_found(&Endpoint::Projects).is_none());
    }
}
