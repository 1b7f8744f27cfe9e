//! Project wiki storage.
//!
//! # Responsibility
//! - Define the storage contract the document engine's callers rely on.
//! - Provide the filesystem implementation: one `{project}.md` per project
//!   under a wiki directory.
//!
//! # Invariants
//! - A project name never escapes the wiki directory (no separators, no
//!   traversal segments).
//! - `create_project` refuses to overwrite an existing wiki.
//! - Documents are read and written whole; partial writes are not part of
//!   the contract.

use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const WIKI_EXTENSION: &str = "md";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying filesystem failure.
    Io(std::io::Error),
    /// Project name is empty or contains path segments.
    InvalidProjectName(String),
    /// `create_project` target already exists.
    ProjectExists(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::InvalidProjectName(name) => write!(f, "invalid project name: `{name}`"),
            Self::ProjectExists(name) => write!(f, "project already exists: `{name}`"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidProjectName(_) | Self::ProjectExists(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Storage contract for whole-document wiki persistence.
pub trait WikiStore {
    /// Lists known project names, sorted.
    fn list_projects(&self) -> StoreResult<Vec<String>>;
    /// Loads one project's full document, or `None` when it does not exist.
    fn load(&self, project: &str) -> StoreResult<Option<String>>;
    /// Writes one project's full document.
    fn save(&self, project: &str, content: &str) -> StoreResult<()>;
    /// Creates a new project seeded from the template and returns its
    /// initial document.
    fn create_project(&self, project: &str) -> StoreResult<String>;
}

/// Filesystem-backed wiki store rooted at one directory.
pub struct FsWikiStore {
    root: PathBuf,
}

impl FsWikiStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn project_path(&self, project: &str) -> StoreResult<PathBuf> {
        let name = project.trim();
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\'])
        {
            return Err(StoreError::InvalidProjectName(project.to_string()));
        }
        Ok(self.root.join(format!("{name}.{WIKI_EXTENSION}")))
    }

    fn ensure_root(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

impl WikiStore for FsWikiStore {
    fn list_projects(&self) -> StoreResult<Vec<String>> {
        self.ensure_root()?;
        let mut projects = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(WIKI_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                projects.push(stem.to_string());
            }
        }
        projects.sort();
        Ok(projects)
    }

    fn load(&self, project: &str) -> StoreResult<Option<String>> {
        let path = self.project_path(project)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, project: &str, content: &str) -> StoreResult<()> {
        let path = self.project_path(project)?;
        self.ensure_root()?;
        fs::write(&path, content)?;
        info!("event=wiki_save module=store status=ok project={project}");
        Ok(())
    }

    fn create_project(&self, project: &str) -> StoreResult<String> {
        let path = self.project_path(project)?;
        if path.exists() {
            return Err(StoreError::ProjectExists(project.trim().to_string()));
        }
        self.ensure_root()?;
        let content = project_template(project.trim());
        fs::write(&path, &content)?;
        info!("event=wiki_create module=store status=ok project={project}");
        Ok(content)
    }
}

/// Initial document for a new project wiki.
pub fn project_template(name: &str) -> String {
    format!(
        "# Project: {name}\n\n## Overview\n\n## Goals\n\n## Key Features\n\n\
         ## Risks/Mitigations\n\n## Daily Log\n"
    )
}
