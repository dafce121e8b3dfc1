//! Core domain types for Folio.
//!
//! Pure data with no IO and no async: portfolio content records, the REST
//! endpoint vocabulary, the static file universe behind routes and tabs,
//! color themes, per-page view modes and the grapheme-aware text draft used
//! by every text field.

mod api;
mod content;
mod draft;
mod parse;
mod theme;
mod view;
mod workspace;

pub use api::{ContactMessage, Endpoint, Payload};
pub use content::{
    Achievement, BlogPost, BookRec, Education, Experience, MovieRec, MusicRec, Profile, Project,
    Skill, Writing,
};
pub use draft::DraftInput;
pub use parse::{EnumKind, EnumParseError};
pub use theme::{Rgb, ThemeColors, ThemeId};
pub use view::{PageKind, ViewMode};
pub use workspace::{ContentFile, FILE_COUNT, FILES, FileKind, Folder, Route, SCRATCH_FOLDER};
