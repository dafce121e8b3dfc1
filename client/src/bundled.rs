//! Portfolio content compiled into the binary.

use serde::Deserialize;

use folio_types::{
    Achievement, BlogPost, BookRec, Education, Endpoint, Experience, MovieRec, MusicRec, Payload,
    Profile, Project, Skill, Writing,
};

use crate::FetchError;

const BUNDLED_JSON: &str = include_str!("../data/portfolio.json");

/// In-memory copy of every collection the API serves.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BundledData {
    profile: Option<Profile>,
    experiences: Vec<Experience>,
    projects: Vec<Project>,
    skills: Vec<Skill>,
    education: Vec<Education>,
    music: Vec<MusicRec>,
    books: Vec<BookRec>,
    movies: Vec<MovieRec>,
    writings: Vec<Writing>,
    achievements: Vec<Achievement>,
    blog: Vec<BlogPost>,
}

impl BundledData {
    pub fn load() -> Result<Self, FetchError> {
        Self::from_json(BUNDLED_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, FetchError> {
        let mut data: Self = serde_json::from_str(raw).map_err(FetchError::Bundled)?;
        data.sort_by_order();
        Ok(data)
    }

    fn sort_by_order(&mut self) {
        self.experiences.sort_by_key(|item| item.order);
        self.projects.sort_by_key(|item| item.order);
        self.skills.sort_by_key(|item| item.order);
        self.education.sort_by_key(|item| item.order);
        self.music.sort_by_key(|item| item.order);
        self.books.sort_by_key(|item| item.order);
        self.movies.sort_by_key(|item| item.order);
        self.writings.sort_by_key(|item| item.order);
        self.achievements.sort_by_key(|item| item.order);
        self.blog.sort_by_key(|item| item.order);
    }

    #[must_use]
    pub fn fetch(&self, endpoint: &Endpoint) -> Payload {
        match endpoint {
            Endpoint::Profile => Payload::Profile(self.profile.clone()),
            Endpoint::Experiences => Payload::Experiences(self.experiences.clone()),
            Endpoint::Projects => Payload::Projects(self.projects.clone()),
            Endpoint::Skills => Payload::Skills(self.skills.clone()),
            Endpoint::Education => Payload::Education(self.education.clone()),
            Endpoint::Music => Payload::Music(self.music.clone()),
            Endpoint::Books => Payload::Books(self.books.clone()),
            Endpoint::Movies => Payload::Movies(self.movies.clone()),
            Endpoint::Writings => Payload::Writings(self.writings.clone()),
            Endpoint::Achievements => Payload::Achievements(self.achievements.clone()),
            Endpoint::Blog => Payload::Blog(self.blog.clone()),
            Endpoint::BlogPost(slug) => Payload::BlogPost(
                self.blog.iter().find(|post| post.slug == *slug).cloned(),
            ),
        }
    }
}
