use folio_types::{Route, SCRATCH_FOLDER};

use crate::scratch::ScratchFs;

/// What the content area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Routed(Route),
    Scratch(String),
}

/// Name and folder of the file shown in the breadcrumb and status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentFile {
    pub name: String,
    pub folder: String,
}

/// Route plus scratch filesystem. A scratch selection shadows the route.
#[derive(Debug, Clone)]
pub struct Workspace {
    route: Route,
    scratch: ScratchFs,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            route: Route::home(),
            scratch: ScratchFs::new(),
        }
    }

    /// Route to `path` and drop any scratch selection.
    pub fn navigate(&mut self, path: &str) {
        self.route = Route::parse(path);
        self.scratch.select_file(None);
        tracing::debug!(route = %self.route, "Navigated");
    }

    pub fn select_scratch_file(&mut self, name: Option<String>) {
        self.scratch.select_file(name);
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.scratch.selected() {
            Some(name) => SessionState::Scratch(name.to_string()),
            None => SessionState::Routed(self.route.clone()),
        }
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn scratch(&self) -> &ScratchFs {
        &self.scratch
    }

    pub fn scratch_mut(&mut self) -> &mut ScratchFs {
        &mut self.scratch
    }

    #[must_use]
    pub fn current_file(&self) -> CurrentFile {
        if let Some(name) = self.scratch.selected() {
            return CurrentFile {
                name: name.to_string(),
                folder: SCRATCH_FOLDER.to_string(),
            };
        }
        match &self.route {
            Route::File(file) => CurrentFile {
                name: file.label.to_string(),
                folder: file.folder.as_str().to_string(),
            },
            Route::BlogPost(slug) => CurrentFile {
                name: format!("{slug}.md"),
                folder: "publications".to_string(),
            },
            Route::NotFound(_) => CurrentFile {
                name: "unknown".to_string(),
                folder: "src".to_string(),
            },
        }
    }

    /// `src / <folder> / <name>`
    #[must_use]
    pub fn breadcrumb(&self) -> Vec<String> {
        let current = self.current_file();
        vec!["src".to_string(), current.folder, current.name]
    }
}
