//! Content loading with a write-once parse cache.
//!
//! The site is driven by three YAML documents in the content `data/`
//! directory:
//!
//! ```text
//! content/data/
//! ├── profile.yaml       # mapping  → Profile
//! ├── achievements.yaml  # list     → Vec<Achievement>
//! └── projects.yaml      # list     → Vec<Project>
//! ```
//!
//! ## Caching
//!
//! A [`ContentLoader`] parses each document at most once over its lifetime
//! and keeps the parsed value in a per-source `OnceLock`. Every [`load`]
//! still hands back a deep clone, so callers can mutate what they receive
//! (e.g. narrow a project list in place) without affecting each other or a
//! later load. The cache is owned by the loader instance; there is no global
//! state, and two loaders over the same directory are fully independent.
//!
//! ## Failures
//!
//! Structural problems surface immediately because the site cannot be built
//! correctly without its content:
//!
//! - missing document → [`ContentError::SourceNotFound`]
//! - unparsable YAML, or a top-level shape that doesn't match the source
//!   (list where a mapping belongs) → [`ContentError::SourceMalformed`]
//!
//! An empty document is valid and loads as `{}` or `[]`. Field-level problems
//! never surface; see [`fields`](crate::fields).
//!
//! [`load`]: ContentLoader::load

use crate::model::{Achievement, Profile, Project, records_from_list};
use serde_yaml::Value;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{source_id} source not found: {}", .path.display())]
    SourceNotFound {
        source_id: ContentSource,
        path: PathBuf,
    },
    #[error("{source_id} source is malformed ({}): {message}", .path.display())]
    SourceMalformed {
        source_id: ContentSource,
        path: PathBuf,
        message: String,
    },
    #[error("IO error reading {}: {err}", .path.display())]
    Io { path: PathBuf, err: io::Error },
}

/// One of the three content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSource {
    Profile,
    Achievements,
    Projects,
}

impl ContentSource {
    pub const ALL: [ContentSource; 3] = [
        ContentSource::Profile,
        ContentSource::Achievements,
        ContentSource::Projects,
    ];

    /// Document file name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ContentSource::Profile => "profile.yaml",
            ContentSource::Achievements => "achievements.yaml",
            ContentSource::Projects => "projects.yaml",
        }
    }

    /// Value an empty document loads as.
    pub fn empty_value(self) -> Value {
        match self {
            ContentSource::Profile => Value::Mapping(Default::default()),
            ContentSource::Achievements | ContentSource::Projects => Value::Sequence(Vec::new()),
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            ContentSource::Profile => value.is_mapping(),
            ContentSource::Achievements | ContentSource::Projects => value.is_sequence(),
        }
    }

    fn index(self) -> usize {
        match self {
            ContentSource::Profile => 0,
            ContentSource::Achievements => 1,
            ContentSource::Projects => 2,
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentSource::Profile => "profile",
            ContentSource::Achievements => "achievements",
            ContentSource::Projects => "projects",
        };
        f.write_str(name)
    }
}

/// All three collections, normalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    pub profile: Profile,
    pub achievements: Vec<Achievement>,
    pub projects: Vec<Project>,
}

/// Reads content documents from a data directory, parsing each at most once.
#[derive(Debug)]
pub struct ContentLoader {
    data_dir: PathBuf,
    cache: [OnceLock<Value>; 3],
}

impl ContentLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache: [OnceLock::new(), OnceLock::new(), OnceLock::new()],
        }
    }

    /// Loader for the conventional `data/` directory under a content root.
    pub fn for_content_root(root: &Path) -> Self {
        Self::new(root.join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn source_path(&self, source: ContentSource) -> PathBuf {
        self.data_dir.join(source.file_name())
    }

    /// Load a source as raw YAML. Returns an independent copy on every call.
    pub fn load(&self, source: ContentSource) -> Result<Value, ContentError> {
        let slot = &self.cache[source.index()];
        if let Some(cached) = slot.get() {
            return Ok(cached.clone());
        }
        let parsed = self.parse(source)?;
        // Only the first writer's value is kept; a racing parse of the same
        // file yields an equal value either way.
        Ok(slot.get_or_init(|| parsed).clone())
    }

    /// Whether a source has already been parsed by this loader.
    pub fn is_cached(&self, source: ContentSource) -> bool {
        self.cache[source.index()].get().is_some()
    }

    pub fn profile(&self) -> Result<Profile, ContentError> {
        Ok(Profile::from_value(&self.load(ContentSource::Profile)?))
    }

    pub fn achievements(&self) -> Result<Vec<Achievement>, ContentError> {
        let value = self.load(ContentSource::Achievements)?;
        Ok(records_from_list(&value, Achievement::from_value))
    }

    pub fn projects(&self) -> Result<Vec<Project>, ContentError> {
        let value = self.load(ContentSource::Projects)?;
        Ok(records_from_list(&value, Project::from_value))
    }

    pub fn load_all(&self) -> Result<Content, ContentError> {
        Ok(Content {
            profile: self.profile()?,
            achievements: self.achievements()?,
            projects: self.projects()?,
        })
    }

    fn parse(&self, source: ContentSource) -> Result<Value, ContentError> {
        let path = self.source_path(source);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ContentError::SourceNotFound {
                    source_id: source,
                    path,
                });
            }
            Err(err) => return Err(ContentError::Io { path, err }),
        };

        if raw.trim().is_empty() {
            return Ok(source.empty_value());
        }

        let value: Value =
            serde_yaml::from_str(&raw).map_err(|e| ContentError::SourceMalformed {
                source_id: source,
                path: path.clone(),
                message: e.to_string(),
            })?;

        match value {
            Value::Null => Ok(source.empty_value()),
            value if source.accepts(&value) => Ok(value),
            _ => Err(ContentError::SourceMalformed {
                source_id: source,
                path,
                message: format!("expected a {}", shape_name(source)),
            }),
        }
    }
}

fn shape_name(source: ContentSource) -> &'static str {
    match source {
        ContentSource::Profile => "mapping",
        ContentSource::Achievements | ContentSource::Projects => "list",
    }
}
