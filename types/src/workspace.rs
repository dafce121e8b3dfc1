//! The fixed file universe behind routes, tabs and the explorer.

use std::fmt;

use crate::view::PageKind;

/// Folder name used for session-only scratch files.
pub const SCRATCH_FOLDER: &str = "scratch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Folder {
    About,
    Career,
    Personal,
    Publications,
}

impl Folder {
    pub const ALL: [Folder; 4] = [
        Folder::About,
        Folder::Career,
        Folder::Personal,
        Folder::Publications,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Folder::About => "about",
            Folder::Career => "career",
            Folder::Personal => "personal",
            Folder::Publications => "publications",
        }
    }

    /// Files of this folder in explorer order.
    pub fn files(self) -> impl Iterator<Item = &'static ContentFile> {
        let order: &'static [&'static str] = match self {
            Folder::About => &["/", "/skills", "/education"],
            Folder::Career => &["/experience", "/projects", "/achievements"],
            Folder::Personal => &["/music", "/books", "/movies"],
            Folder::Publications => &["/writings", "/blog"],
        };
        order.iter().filter_map(|path| ContentFile::by_path(path))
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon/language category derived from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    TypeScript,
    Json,
    Markdown,
    Text,
}

impl FileKind {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
            Some(ext) if ext == "ts" || ext == "tsx" => FileKind::TypeScript,
            Some(ext) if ext == "json" => FileKind::Json,
            Some(ext) if ext == "md" => FileKind::Markdown,
            _ => FileKind::Text,
        }
    }

    /// Status bar language label.
    #[must_use]
    pub const fn language(self) -> &'static str {
        match self {
            FileKind::TypeScript => "TypeScript React",
            FileKind::Json => "JSON",
            FileKind::Markdown => "Markdown",
            FileKind::Text => "Plain Text",
        }
    }

    /// Initial content of a new scratch file. Unknown extensions get the
    /// TypeScript template.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            FileKind::Json => "{\n  \n}",
            FileKind::Markdown => "# New Document\n\n",
            FileKind::TypeScript | FileKind::Text => "// New TypeScript file\n\n",
        }
    }
}

/// One routed content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentFile {
    pub path: &'static str,
    pub label: &'static str,
    pub folder: Folder,
    pub page: PageKind,
    pub description: &'static str,
}

impl ContentFile {
    #[must_use]
    pub fn kind(&self) -> FileKind {
        FileKind::from_name(self.label)
    }

    #[must_use]
    pub fn by_path(path: &str) -> Option<&'static ContentFile> {
        FILES.iter().find(|file| file.path == path)
    }

    /// Position in declared (tab) order.
    #[must_use]
    pub fn index_of(path: &str) -> Option<usize> {
        FILES.iter().position(|file| file.path == path)
    }
}

/// Number of routed content files.
pub const FILE_COUNT: usize = 11;

/// Declared order is the tab order.
pub static FILES: [ContentFile; FILE_COUNT] = [
    ContentFile {
        path: "/",
        label: "bio.ts",
        folder: Folder::About,
        page: PageKind::Bio,
        description: "Personal introduction",
    },
    ContentFile {
        path: "/experience",
        label: "experience.json",
        folder: Folder::Career,
        page: PageKind::Experience,
        description: "Work history",
    },
    ContentFile {
        path: "/projects",
        label: "projects.ts",
        folder: Folder::Career,
        page: PageKind::Projects,
        description: "Portfolio projects",
    },
    ContentFile {
        path: "/skills",
        label: "skills.json",
        folder: Folder::About,
        page: PageKind::Skills,
        description: "Technical skills",
    },
    ContentFile {
        path: "/education",
        label: "education.md",
        folder: Folder::About,
        page: PageKind::Education,
        description: "Education",
    },
    ContentFile {
        path: "/music",
        label: "music.json",
        folder: Folder::Personal,
        page: PageKind::Music,
        description: "Music recommendations",
    },
    ContentFile {
        path: "/books",
        label: "books.json",
        folder: Folder::Personal,
        page: PageKind::Books,
        description: "Book recommendations",
    },
    ContentFile {
        path: "/movies",
        label: "movies.json",
        folder: Folder::Personal,
        page: PageKind::Movies,
        description: "Movie recommendations",
    },
    ContentFile {
        path: "/writings",
        label: "writings.md",
        folder: Folder::Publications,
        page: PageKind::Writings,
        description: "Papers and articles",
    },
    ContentFile {
        path: "/achievements",
        label: "achievements.json",
        folder: Folder::Career,
        page: PageKind::Achievements,
        description: "Certifications & awards",
    },
    ContentFile {
        path: "/blog",
        label: "blog.md",
        folder: Folder::Publications,
        page: PageKind::Blog,
        description: "Blog posts",
    },
];

/// A resolved location in the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// One of the static content files.
    File(&'static ContentFile),
    /// `/blog/:slug`
    BlogPost(String),
    /// Anything else; keeps the original path.
    NotFound(String),
}

impl Route {
    #[must_use]
    pub fn home() -> Self {
        Route::File(&FILES[0])
    }

    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        let normalized = if normalized.is_empty() { "/" } else { normalized };

        if let Some(file) = ContentFile::by_path(normalized) {
            return Route::File(file);
        }
        if let Some(slug) = normalized.strip_prefix("/blog/")
            && !slug.is_empty()
            && !slug.contains('/')
        {
            return Route::BlogPost(slug.to_string());
        }
        Route::NotFound(normalized.to_string())
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::File(file) => file.path.to_string(),
            Route::BlogPost(slug) => format!("/blog/{slug}"),
            Route::NotFound(path) => path.clone(),
        }
    }

    #[must_use]
    pub fn file(&self) -> Option<&'static ContentFile> {
        match self {
            Route::File(file) => Some(file),
            _ => None,
        }
    }

    #[must_use]
    pub fn page(&self) -> Option<PageKind> {
        match self {
            Route::File(file) => Some(file.page),
            Route::BlogPost(_) => Some(PageKind::BlogPost),
            Route::NotFound(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
