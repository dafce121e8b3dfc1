//! Content pages and their view modes.

use std::fmt;

use crate::parse::{EnumKind, EnumParseError};

const VIEW_MODE_VALUES: &[&str] = &["visual", "gallery", "editor", "code"];

/// How a page presents its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Rendered cards and headings.
    Visual,
    /// Compact tiles.
    Gallery,
    /// Read-only JSON projection.
    Editor,
    /// Source-style projection with line numbers.
    Code,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ViewMode::Visual => "visual",
            ViewMode::Gallery => "gallery",
            ViewMode::Editor => "editor",
            ViewMode::Code => "code",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ViewMode::Visual => "Visual",
            ViewMode::Gallery => "Gallery",
            ViewMode::Editor => "Editor",
            ViewMode::Code => "Code",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "visual" => Ok(ViewMode::Visual),
            "gallery" => Ok(ViewMode::Gallery),
            "editor" => Ok(ViewMode::Editor),
            "code" => Ok(ViewMode::Code),
            other => Err(EnumParseError::new(
                EnumKind::ViewMode,
                other,
                VIEW_MODE_VALUES,
            )),
        }
    }

    /// Modes that show a JSON/source projection rather than rendered content.
    #[must_use]
    pub const fn is_source(self) -> bool {
        matches!(self, ViewMode::Editor | ViewMode::Code)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content page. Each one owns a fixed list of allowed view modes; the
/// first entry is the mode a fresh mount starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Bio,
    Experience,
    Projects,
    Skills,
    Education,
    Music,
    Books,
    Movies,
    Writings,
    Achievements,
    Blog,
    BlogPost,
}

impl PageKind {
    #[must_use]
    pub const fn modes(self) -> &'static [ViewMode] {
        match self {
            PageKind::Bio => &[ViewMode::Visual, ViewMode::Code],
            PageKind::Experience => &[ViewMode::Code, ViewMode::Visual],
            PageKind::Books | PageKind::Movies => {
                &[ViewMode::Visual, ViewMode::Gallery, ViewMode::Editor]
            }
            PageKind::BlogPost => &[ViewMode::Visual],
            PageKind::Projects
            | PageKind::Skills
            | PageKind::Education
            | PageKind::Music
            | PageKind::Writings
            | PageKind::Achievements
            | PageKind::Blog => &[ViewMode::Visual, ViewMode::Editor],
        }
    }

    #[must_use]
    pub const fn default_mode(self) -> ViewMode {
        self.modes()[0]
    }

    /// The mode after `current` in this page's cycle. Unknown modes restart
    /// at the default.
    #[must_use]
    pub fn next_mode(self, current: ViewMode) -> ViewMode {
        let modes = self.modes();
        match modes.iter().position(|mode| *mode == current) {
            Some(idx) => modes[(idx + 1) % modes.len()],
            None => self.default_mode(),
        }
    }

    #[must_use]
    pub fn allows(self, mode: ViewMode) -> bool {
        self.modes().contains(&mode)
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            PageKind::Bio => "About",
            PageKind::Experience => "Experience",
            PageKind::Projects => "Projects",
            PageKind::Skills => "Skills",
            PageKind::Education => "Education",
            PageKind::Music => "Music",
            PageKind::Books => "Books",
            PageKind::Movies => "Movies",
            PageKind::Writings => "Writings",
            PageKind::Achievements => "Achievements",
            PageKind::Blog => "Blog",
            PageKind::BlogPost => "Blog Post",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_defaults_to_code() {
        assert_eq!(PageKind::Experience.default_mode(), ViewMode::Code);
        assert_eq!(PageKind::Bio.default_mode(), ViewMode::Visual);
        assert_eq!(PageKind::Books.default_mode(), ViewMode::Visual);
    }

    #[test]
    fn next_mode_cycles_through_allowed_modes() {
        let page = PageKind::Books;
        let second = page.next_mode(page.default_mode());
        assert_eq!(second, ViewMode::Gallery);
        let third = page.next_mode(second);
        assert_eq!(third, ViewMode::Editor);
        assert_eq!(page.next_mode(third), ViewMode::Visual);
    }

    #[test]
    fn single_mode_page_stays_put() {
        assert_eq!(
            PageKind::BlogPost.next_mode(ViewMode::Visual),
            ViewMode::Visual
        );
    }

    #[test]
    fn disallowed_mode_resets_to_default() {
        assert!(!PageKind::Skills.allows(ViewMode::Code));
        assert_eq!(PageKind::Skills.next_mode(ViewMode::Code), ViewMode::Visual);
    }

    #[test]
    fn parse_view_mode() {
        assert_eq!(ViewMode::parse(" Editor "), Ok(ViewMode::Editor));
        let err = ViewMode::parse("split").unwrap_err();
        assert_eq!(err.kind(), EnumKind::ViewMode);
        assert_eq!(err.raw(), "split");
    }
}
