use eyre::{Context, Result};

use crate::config::Config;
use crate::profile::{self, Profile};

pub mod admissions;
pub mod ask;
pub mod chat;
pub mod classify;
pub mod completions;
pub mod config;
pub mod links;
pub mod topic;
pub mod topics;

/// Load the configured profile. Failure ends the command before anything is rendered.
pub fn load_profile(config: &Config) -> Result<Profile> {
    let path = config.profile_path();
    profile::load(&path).with_context(|| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        format!("Could not load {}", name)
    })
}
