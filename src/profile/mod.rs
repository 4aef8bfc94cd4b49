//! Profile document loading
//!
//! The profile is a single JSON file loaded once at startup and never written.
//! Everything the bot says is derived from it.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod node;

pub use node::Node;

/// Failure to produce a usable profile document
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Missing required file: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile root in {} must be a JSON object", .0.display())]
    NotAnObject(PathBuf),
}

/// The loaded, read-only profile document
#[derive(Debug, Clone)]
pub struct Profile {
    document: Value,
    source: PathBuf,
}

impl Profile {
    /// Build a profile from an already-parsed document
    pub fn from_value(document: Value, source: impl Into<PathBuf>) -> Result<Self, ProfileError> {
        let source = source.into();
        if !document.is_object() {
            return Err(ProfileError::NotAnObject(source));
        }
        Ok(Self { document, source })
    }

    /// Parse profile JSON text
    pub fn parse(content: &str, source: impl Into<PathBuf>) -> Result<Self, ProfileError> {
        let source = source.into();
        let document = serde_json::from_str(content).map_err(|e| ProfileError::Parse {
            path: source.clone(),
            source: e,
        })?;
        Self::from_value(document, source)
    }

    /// Root of the document
    pub fn root(&self) -> Node<'_> {
        Node::of(Some(&self.document))
    }

    /// Top-level section by name
    pub fn section(&self, name: &str) -> Node<'_> {
        self.root().get(name)
    }

    /// File name the profile was loaded from, as shown to users
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "profile.json".to_string())
    }

    pub fn display_name(&self) -> String {
        self.section("meta").get("display_name").text_or("Portfolio Owner")
    }

    pub fn tagline(&self) -> String {
        self.section("meta").get("role_tagline").text()
    }

    pub fn disclaimer(&self) -> Option<String> {
        let disclaimer = self.section("meta").get("disclaimer").text();
        if disclaimer.is_empty() { None } else { Some(disclaimer) }
    }

    /// "<name> — <tagline>", without a dangling separator
    pub fn caption(&self) -> String {
        format!("{} — {}", self.display_name(), self.tagline())
            .trim_matches(|c: char| c == ' ' || c == '—')
            .to_string()
    }
}

/// Load the profile document from disk
pub fn load(path: &Path) -> Result<Profile, ProfileError> {
    if !path.exists() {
        return Err(ProfileError::Missing(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| ProfileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let profile = Profile::parse(&content, path)?;
    log::info!("Loaded profile from: {}", path.display());
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load(&temp.path().join("profile.json")).unwrap_err();
        assert!(matches!(err, ProfileError::Missing(_)));
        assert!(err.to_string().starts_with("Missing required file:"));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }));
        assert_eq!(err.to_string(), format!("Invalid JSON in {}", path.display()));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_load_rejects_non_object_root() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(load(&path).unwrap_err(), ProfileError::NotAnObject(_)));
    }

    #[test]
    fn test_load_valid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("me.json");
        fs::write(&path, r#"{"meta": {"display_name": "Alex"}}"#).unwrap();
        let profile = load(&path).unwrap();
        assert_eq!(profile.display_name(), "Alex");
        assert_eq!(profile.source_name(), "me.json");
    }

    #[test]
    fn test_caption() {
        let full = Profile::from_value(
            json!({"meta": {"display_name": "Alex", "role_tagline": "Aspiring engineer"}}),
            "profile.json",
        )
        .unwrap();
        assert_eq!(full.caption(), "Alex — Aspiring engineer");

        let bare = Profile::from_value(json!({}), "profile.json").unwrap();
        assert_eq!(bare.caption(), "Portfolio Owner");
        assert_eq!(bare.disclaimer(), None);
    }
}
