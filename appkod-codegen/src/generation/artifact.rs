//! The path to content mapping produced by a generation run.

use std::path::{Component, Path};

use appkod_core::{File, WriteResult};
use eyre::{Result, bail};
use indexmap::IndexMap;

/// One generated output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Relative path from the output directory, `/`-separated.
    pub path: String,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Ordered mapping from relative artifact path to generated text.
///
/// Iteration follows insertion order, so the same blueprint always yields
/// the same sequence of artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    entries: IndexMap<String, String>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an artifact, returning the content it replaced, if any.
    pub fn insert(&mut self, artifact: Artifact) -> Option<String> {
        self.entries.insert(artifact.path, artifact.content)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Artifact paths in generation order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(path, content)` pairs in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    /// Write every artifact below `base`, creating parent directories.
    ///
    /// Files whose content is already identical are left untouched. Nothing
    /// is written if any path is absolute or contains `.` or `..`.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        if let Some(path) = self.paths().find(|path| !is_contained(path)) {
            bail!("Refusing to write {path}: artifact paths must stay inside the output directory");
        }

        let mut stats = WriteStats::default();

        for (path, content) in self.iter() {
            let full_path = base.join(path);
            if std::fs::read_to_string(&full_path).is_ok_and(|existing| existing == content) {
                tracing::debug!(path, "unchanged");
                stats.unchanged.push(path.to_string());
                continue;
            }

            match File::new(full_path, content).write()? {
                WriteResult::Written => {
                    tracing::debug!(path, "written");
                    stats.written.push(path.to_string());
                }
                WriteResult::Skipped => stats.unchanged.push(path.to_string()),
            }
        }

        Ok(stats)
    }
}

/// Whether `path` is relative and made only of plain components.
fn is_contained(path: &str) -> bool {
    let path = Path::new(path);
    path.components().next().is_some()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
}

impl FromIterator<Artifact> for ArtifactSet {
    fn from_iter<I: IntoIterator<Item = Artifact>>(iter: I) -> Self {
        let mut set = Self::new();
        for artifact in iter {
            set.insert(artifact);
        }
        set
    }
}

impl IntoIterator for ArtifactSet {
    type Item = Artifact;
    type IntoIter = std::vec::IntoIter<Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .into_iter()
            .map(|(path, content)| Artifact { path, content })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Paths of files written.
    pub written: Vec<String>,
    /// Paths of files that already had the generated content.
    pub unchanged: Vec<String>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}
