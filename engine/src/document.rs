//! Page documents: what a routed page shows for a given view mode and data
//! state, as styled lines the TUI can draw and Find can search.

use chrono::NaiveDate;
use pulldown_cmark::{Event, Parser, TagEnd};

use folio_types::{
    Achievement, BlogPost, BookRec, Education, Endpoint, Experience, MovieRec, MusicRec, PageKind,
    Payload, Profile, Project, Route, Skill, ViewMode, Writing,
};

use crate::data::Resource;
use crate::projection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Heading,
    Subheading,
    Body,
    Muted,
    Accent,
    Bullet,
    Link,
    Tag,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub role: LineRole,
    pub text: String,
    /// Index into [`Document::selectable`] for list rows.
    pub item: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Line(DocLine),
    /// Read-only source text, drawn with line numbers.
    Source { language: &'static str, text: String },
    Markdown(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
    /// Routes reachable from list rows, e.g. `/blog/<slug>`.
    pub selectable: Vec<String>,
    /// Still waiting for data.
    pub loading: bool,
}

/// The data endpoint behind a route.
#[must_use]
pub fn endpoint_for(route: &Route) -> Option<Endpoint> {
    Some(match route {
        Route::File(file) => match file.page {
            PageKind::Bio => Endpoint::Profile,
            PageKind::Experience => Endpoint::Experiences,
            PageKind::Projects => Endpoint::Projects,
            PageKind::Skills => Endpoint::Skills,
            PageKind::Education => Endpoint::Education,
            PageKind::Music => Endpoint::Music,
            PageKind::Books => Endpoint::Books,
            PageKind::Movies => Endpoint::Movies,
            PageKind::Writings => Endpoint::Writings,
            PageKind::Achievements => Endpoint::Achievements,
            PageKind::Blog => Endpoint::Blog,
            PageKind::BlogPost => return None,
        },
        Route::BlogPost(slug) => Endpoint::BlogPost(slug.clone()),
        Route::NotFound(_) => return None,
    })
}

/// `2024-05-20` -> `May 20, 2024`. Unparseable dates pass through.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let day = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

impl Document {
    fn push(&mut self, role: LineRole, text: impl Into<String>) {
        self.blocks.push(Block::Line(DocLine {
            role,
            text: text.into(),
            item: None,
        }));
    }

    fn push_item(&mut self, role: LineRole, text: impl Into<String>, item: usize) {
        self.blocks.push(Block::Line(DocLine {
            role,
            text: text.into(),
            item: Some(item),
        }));
    }

    fn blank(&mut self) {
        self.push(LineRole::Body, "");
    }

    fn push_opt(&mut self, role: LineRole, text: Option<&str>) {
        if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
            self.push(role, text);
        }
    }

    fn titled(title: &str) -> Self {
        let mut doc = Self::default();
        doc.push(LineRole::Heading, title);
        doc.blank();
        doc
    }

    fn source(&mut self, language: &'static str, text: String) {
        self.blocks.push(Block::Source { language, text });
    }

    /// A document for a page outside the file universe.
    #[must_use]
    pub fn not_found(path: &str) -> Self {
        let mut doc = Self::titled("404: File not found");
        doc.push(LineRole::Error, format!("Error: Cannot find module '{path}'"));
        doc.push(LineRole::Muted, "throw new Error(\"Page not found\");");
        doc.blank();
        doc.push(LineRole::Accent, "Press [ or ] to switch to an open tab.");
        doc
    }

    /// Text for Find: every visible line, markdown reduced to its text.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                Block::Line(line) => out.push_str(&line.text),
                Block::Source { text, .. } => out.push_str(text),
                Block::Markdown(source) => out.push_str(&markdown_text(source)),
            }
            out.push('\n');
        }
        out
    }

    /// Build the document for `route` in `mode` from `resource`.
    #[must_use]
    pub fn build(route: &Route, mode: ViewMode, resource: Option<&Resource>) -> Self {
        let Some(page) = route.page() else {
            return Self::not_found(&route.path());
        };

        let payload = match resource {
            None | Some(Resource::Loading) => {
                let mut doc = Self::titled(page.title());
                doc.push(LineRole::Muted, "Loading...");
                doc.loading = true;
                return doc;
            }
            Some(Resource::Failed(message)) => {
                let mut doc = Self::titled(page.title());
                doc.push(LineRole::Error, format!("Failed to load: {message}"));
                return doc;
            }
            Some(Resource::NotFound) => return Self::missing(page),
            Some(Resource::Ready(payload)) => payload,
        };

        if mode.is_source() {
            let mut doc = Self::titled(page.title());
            match payload {
                Payload::Profile(Some(profile)) => {
                    doc.source("typescript", projection::bio_source(profile));
                }
                other => {
                    if let Some(value) = projection::project_payload(other) {
                        doc.source("json", projection::to_pretty(&value));
                    }
                }
            }
            return doc;
        }

        let gallery = mode == ViewMode::Gallery;
        match payload {
            Payload::Profile(Some(profile)) => bio(profile),
            Payload::Profile(None) | Payload::BlogPost(None) => Self::missing(page),
            Payload::Experiences(items) => experiences(items),
            Payload::Projects(items) => projects(items),
            Payload::Skills(items) => skills(items),
            Payload::Education(items) => education(items),
            Payload::Music(items) => music(items),
            Payload::Books(items) => books(items, gallery),
            Payload::Movies(items) => movies(items, gallery),
            Payload::Writings(items) => writings(items),
            Payload::Achievements(items) => achievements(items),
            Payload::Blog(items) => blog(items),
            Payload::BlogPost(Some(post)) => blog_post(post),
        }
    }

    fn missing(page: PageKind) -> Self {
        match page {
            PageKind::BlogPost => {
                let mut doc = Self::titled("Post not found");
                doc.push(LineRole::Muted, "Backspace: back to blog");
                doc
            }
            PageKind::Bio => {
                let mut doc = Self::titled(page.title());
                doc.push(LineRole::Muted, "Profile not found");
                doc
            }
            _ => {
                let mut doc = Self::titled(page.title());
                doc.push(LineRole::Muted, "Nothing here yet.");
                doc
            }
        }
    }

    fn empty_note(&mut self, is_empty: bool) {
        if is_empty {
            self.push(LineRole::Muted, "Nothing here yet.");
        }
    }
}

fn markdown_text(source: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(source) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak
            | Event::HardBreak
            | Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::CodeBlock,
            ) => out.push('\n'),
            _ => {}
        }
    }
    out
}

fn bio(profile: &Profile) -> Document {
    let mut doc = Document::default();
    doc.push(LineRole::Heading, &profile.name);
    doc.push(LineRole::Accent, &profile.title);
    doc.push_opt(LineRole::Muted, profile.email.as_deref());
    doc.blank();
    doc.push(LineRole::Muted, "$ whoami");
    doc.push(LineRole::Body, format!("{} - {}", profile.name, profile.title));
    doc.blank();
    doc.push(LineRole::Muted, "$ cat about.txt");
    for paragraph in profile.bio.split("\n\n") {
        doc.push(LineRole::Body, paragraph.trim());
    }
    doc.blank();
    if let Some(url) = &profile.github_url {
        doc.push(LineRole::Link, format!("GitHub    {url}"));
    }
    if let Some(url) = &profile.linkedin_url {
        doc.push(LineRole::Link, format!("LinkedIn  {url}"));
    }
    doc
}

fn experiences(items: &[Experience]) -> Document {
    let mut doc = Document::titled("Experience");
    doc.empty_note(items.is_empty());
    for exp in items {
        doc.push(LineRole::Subheading, format!("{} @ {}", exp.role, exp.company));
        doc.push(LineRole::Muted, &exp.duration);
        doc.push(LineRole::Body, &exp.description);
        doc.blank();
    }
    doc
}

fn projects(items: &[Project]) -> Document {
    let mut doc = Document::titled("Projects");
    doc.empty_note(items.is_empty());
    for project in items {
        doc.push(LineRole::Subheading, &project.title);
        doc.push(LineRole::Body, &project.description);
        if !project.tech_stack.is_empty() {
            doc.push(LineRole::Tag, project.tech_stack.join(" · "));
        }
        if let Some(url) = &project.github_link {
            doc.push(LineRole::Link, format!("source  {url}"));
        }
        if let Some(url) = &project.link {
            doc.push(LineRole::Link, format!("demo    {url}"));
        }
        doc.blank();
    }
    doc
}

fn skills(items: &[Skill]) -> Document {
    let mut doc = Document::titled("Skills");
    doc.empty_note(items.is_empty());
    for skill in items {
        doc.push(LineRole::Subheading, &skill.category);
        for item in &skill.items {
            doc.push(LineRole::Bullet, item);
        }
        doc.blank();
    }
    doc
}

fn education(items: &[Education]) -> Document {
    let mut doc = Document::titled("Education");
    doc.empty_note(items.is_empty());
    for edu in items {
        doc.push(LineRole::Subheading, &edu.institution);
        doc.push(LineRole::Body, &edu.degree);
        doc.push(LineRole::Muted, &edu.year);
        doc.blank();
    }
    doc
}

fn music(items: &[MusicRec]) -> Document {
    let mut doc = Document::titled("Music");
    doc.empty_note(items.is_empty());
    for rec in items {
        doc.push(LineRole::Subheading, format!("{} · {}", rec.title, rec.artist));
        doc.push_opt(LineRole::Tag, rec.genre.as_deref());
        doc.push_opt(LineRole::Body, rec.note.as_deref());
        doc.blank();
    }
    doc
}

fn books(items: &[BookRec], gallery: bool) -> Document {
    let mut doc = Document::titled("Books");
    doc.empty_note(items.is_empty());
    for rec in items {
        if gallery {
            doc.push(LineRole::Bullet, format!("{} ({})", rec.title, rec.author));
            continue;
        }
        doc.push(LineRole::Subheading, &rec.title);
        doc.push(LineRole::Muted, format!("by {}", rec.author));
        doc.push_opt(LineRole::Tag, rec.genre.as_deref());
        doc.push_opt(LineRole::Body, rec.note.as_deref());
        doc.blank();
    }
    doc
}

fn movies(items: &[MovieRec], gallery: bool) -> Document {
    let mut doc = Document::titled("Movies");
    doc.empty_note(items.is_empty());
    for rec in items {
        let year = rec.year.as_deref().map(|y| format!(" ({y})")).unwrap_or_default();
        if gallery {
            doc.push(LineRole::Bullet, format!("{}{year}", rec.title));
            continue;
        }
        doc.push(LineRole::Subheading, format!("{}{year}", rec.title));
        if let Some(director) = &rec.director {
            doc.push(LineRole::Muted, format!("dir. {director}"));
        }
        doc.push_opt(LineRole::Tag, rec.genre.as_deref());
        doc.push_opt(LineRole::Body, rec.note.as_deref());
        doc.blank();
    }
    doc
}

fn writings(items: &[Writing]) -> Document {
    let mut doc = Document::titled("Writings");
    doc.empty_note(items.is_empty());
    for writing in items {
        doc.push(LineRole::Subheading, &writing.title);
        doc.push(LineRole::Body, &writing.description);
        if let Some(date) = &writing.published_at {
            doc.push(LineRole::Muted, format!("Published {}", format_date(date)));
        }
        doc.push_opt(LineRole::Link, writing.link.as_deref());
        doc.blank();
    }
    doc
}

fn achievements(items: &[Achievement]) -> Document {
    let mut doc = Document::titled("Achievements");
    doc.empty_note(items.is_empty());
    for item in items {
        doc.push(LineRole::Subheading, &item.title);
        doc.push(LineRole::Muted, format!("{} · {}", item.issuer, item.date));
        doc.push(LineRole::Tag, &item.kind);
        doc.push_opt(LineRole::Body, item.description.as_deref());
        doc.push_opt(LineRole::Link, item.credential_url.as_deref());
        doc.blank();
    }
    doc
}

fn blog(items: &[BlogPost]) -> Document {
    let mut doc = Document::titled("Blog");
    doc.empty_note(items.is_empty());
    for (idx, post) in items.iter().enumerate() {
        doc.selectable.push(format!("/blog/{}", post.slug));
        doc.push_item(LineRole::Subheading, &post.title, idx);
        let mut meta = vec![format!("{} min read", post.reading_minutes())];
        if let Some(date) = &post.published_at {
            meta.insert(0, format_date(date));
        }
        doc.push_item(LineRole::Muted, meta.join(" · "), idx);
        if let Some(excerpt) = &post.excerpt {
            doc.push_item(LineRole::Body, excerpt, idx);
        }
        if !post.tags().is_empty() {
            doc.push_item(LineRole::Tag, post.tags().join(" "), idx);
        }
        doc.blank();
    }
    doc
}

fn blog_post(post: &BlogPost) -> Document {
    let mut doc = Document::default();
    doc.push(LineRole::Muted, "< Back to blog (Backspace)");
    doc.blank();
    doc.push(LineRole::Heading, &post.title);
    let mut meta = vec![format!("{} min read", post.reading_minutes())];
    if let Some(date) = &post.published_at {
        meta.insert(0, format_date(date));
    }
    doc.push(LineRole::Muted, meta.join(" · "));
    if !post.tags().is_empty() {
        doc.push(LineRole::Tag, post.tags().join(" "));
    }
    doc.blank();
    doc.blocks.push(Block::Markdown(post.content.clone()));
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience(description: &str) -> Experience {
        Experience {
            id: 1,
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            duration: "2020 - Present".to_string(),
            description: description.to_string(),
            order: 0,
        }
    }

    fn post(slug: &str) -> BlogPost {
        BlogPost {
            id: 1,
            title: "Hello".to_string(),
            slug: slug.to_string(),
            content: "# Hello\n\nSome **bold** text and `code`.".to_string(),
            excerpt: Some("Intro".to_string()),
            published_at: Some("2024-05-20".to_string()),
            tags: Some(vec!["rust".to_string()]),
            order: 0,
        }
    }

    #[test]
    fn endpoints_for_routes() {
        assert_eq!(endpoint_for(&Route::home()), Some(Endpoint::Profile));
        assert_eq!(
            endpoint_for(&Route::parse("/blog/x")),
            Some(Endpoint::BlogPost("x".to_string()))
        );
        assert_eq!(endpoint_for(&Route::parse("/nope")), None);
    }

    #[test]
    fn loading_and_failure_states() {
        let route = Route::parse("/skills");
        let doc = Document::build(&route, ViewMode::Visual, None);
        assert!(doc.loading);
        assert!(doc.plain_text().contains("Loading..."));

        let failed = Resource::Failed("HTTP 500".to_string());
        let doc = Document::build(&route, ViewMode::Visual, Some(&failed));
        assert!(!doc.loading);
        assert!(doc.plain_text().contains("Failed to load: HTTP 500"));
    }

    #[test]
    fn missing_profile_renders_empty_state() {
        let doc = Document::build(&Route::home(), ViewMode::Visual, Some(&Resource::NotFound));
        assert!(doc.plain_text().contains("Profile not found"));
    }

    #[test]
    fn visual_and_source_modes_show_same_data() {
        let route = Route::parse("/experience");
        let ready = Resource::Ready(Payload::Experiences(vec![experience("Ships engineer tools")]));

        let visual = Document::build(&route, ViewMode::Visual, Some(&ready));
        assert!(visual.plain_text().contains("Engineer @ Acme"));

        let code = Document::build(&route, ViewMode::Code, Some(&ready));
        let source = code
            .blocks
            .iter()
            .find_map(|block| match block {
                Block::Source { language, text } => Some((*language, text.clone())),
                _ => None,
            })
            .unwrap();
        assert_eq!(source.0, "json");
        assert!(source.1.contains("\"period\": \"2020 - Present\""));
    }

    #[test]
    fn blog_rows_are_selectable() {
        let ready = Resource::Ready(Payload::Blog(vec![post("a"), post("b")]));
        let doc = Document::build(&Route::parse("/blog"), ViewMode::Visual, Some(&ready));
        assert_eq!(doc.selectable, ["/blog/a", "/blog/b"]);
        assert!(doc.plain_text().contains("May 20, 2024 · 1 min read"));
    }

    #[test]
    fn blog_post_markdown_is_searchable() {
        let ready = Resource::Ready(Payload::BlogPost(Some(post("a"))));
        let doc = Document::build(&Route::parse("/blog/a"), ViewMode::Visual, Some(&ready));
        let text = doc.plain_text();
        assert!(text.contains("Some bold text and code."));
        assert!(!text.contains("**"));
    }

    #[test]
    fn missing_blog_post() {
        let doc = Document::build(
            &Route::parse("/blog/gone"),
            ViewMode::Visual,
            Some(&Resource::NotFound),
        );
        assert!(doc.plain_text().contains("Post not found"));
    }

    #[test]
    fn unknown_route_is_404() {
        let doc = Document::build(&Route::parse("/nope"), ViewMode::Visual, None);
        assert!(doc.plain_text().contains("Cannot find module '/nope'"));
    }

    #[test]
    fn gallery_is_compact() {
        let ready = Resource::Ready(Payload::Books(vec![BookRec {
            id: 1,
            title: "Piranesi".to_string(),
            author: "Susanna Clarke".to_string(),
            genre: Some("Fiction".to_string()),
            note: None,
            image_url: None,
            order: 0,
        }]));
        let route = Route::parse("/books");
        let gallery = Document::build(&route, ViewMode::Gallery, Some(&ready));
        assert!(gallery.plain_text().contains("Piranesi (Susanna Clarke)"));
        let visual = Document::build(&route, ViewMode::Visual, Some(&ready));
        assert!(visual.plain_text().contains("by Susanna Clarke"));
    }

    #[test]
    fn date_formatting() {
        assert_eq!(format_date("2023-09-01"), "Sep 1, 2023");
        assert_eq!(format_date("2023-09-01T10:00:00Z"), "Sep 1, 2023");
        assert_eq!(format_date("someday"), "someday");
    }
}
