//! Portfolio content records as served by the REST backend.
//!
//! Wire format is camelCase JSON. Optional columns may be absent or `null`.

use serde::{Deserialize, Serialize};

/// Words per minute used for the blog reading-time estimate.
const READING_WPM: usize = 200;

fn default_achievement_type() -> String {
    "certification".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub id: u32,
    pub company: String,
    pub role: String,
    /// Free-form period, e.g. "Jan 2023 - Present".
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    pub id: u32,
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub id: u32,
    pub institution: String,
    pub degree: String,
    pub year: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicRec {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRec {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRec {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Writing {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(rename = "type", default = "default_achievement_type")]
    pub kind: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub order: i32,
}

impl BlogPost {
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Estimated reading time in whole minutes, never less than one.
    #[must_use]
    pub fn reading_minutes(&self) -> usize {
        let words = self.content.split_whitespace().count();
        words.div_ceil(READING_WPM).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(content: &str) -> BlogPost {
        BlogPost {
            id: 1,
            title: "t".to_string(),
            slug: "t".to_string(),
            content: content.to_string(),
            excerpt: None,
            published_at: None,
            tags: None,
            order: 0,
        }
    }

    #[test]
    fn reading_time_rounds_up() {
        let body = vec!["word"; 201].join(" ");
        assert_eq!(post(&body).reading_minutes(), 2);
        let body = vec!["word"; 200].join(" ");
        assert_eq!(post(&body).reading_minutes(), 1);
    }

    #[test]
    fn reading_time_is_at_least_one_minute() {
        assert_eq!(post("").reading_minutes(), 1);
    }

    #[test]
    fn achievement_type_defaults_to_certification() {
        let raw = r#"{"id":3,"title":"Cert","issuer":"Org","date":"2023","order":0}"#;
        let parsed: Achievement = serde_json::from_str(raw).expect("parse");
        assert_eq!(parsed.kind, "certification");
        assert_eq!(parsed.description, None);
    }

    #[test]
    fn null_optional_columns_deserialize() {
        let raw = r#"{"title":"A","slug":"a","content":"x","excerpt":null,"tags":null}"#;
        let parsed: BlogPost = serde_json::from_str(raw).expect("parse");
        assert!(parsed.tags().is_empty());
        assert_eq!(parsed.excerpt, None);
    }

    #[test]
    fn project_uses_camel_case_keys() {
        let raw = r#"{"title":"P","description":"d","techStack":["Rust"],"githubLink":"g"}"#;
        let parsed: Project = serde_json::from_str(raw).expect("parse");
        assert_eq!(parsed.tech_stack, vec!["Rust".to_string()]);
        assert_eq!(parsed.github_link.as_deref(), Some("g"));
    }
}
