//! Loader for character profile files (RON, or JSON by extension).

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::validation::validate_profile;

/// Error type for profile loading failures.
#[derive(Debug)]
pub struct ProfileLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ProfileLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ProfileLoadError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Ron,
    Json,
}

impl ProfileFormat {
    /// `.json` files are JSON; everything else is read as RON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ProfileFormat::Json,
            _ => ProfileFormat::Ron,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate a profile from file contents.
/// `file` only labels errors.
pub fn parse_profile(
    contents: &str,
    format: ProfileFormat,
    file: &str,
) -> Result<CharacterProfile, ProfileLoadError> {
    let profile: CharacterProfile = match format {
        ProfileFormat::Ron => ron_options()
            .from_str(contents)
            .map_err(|e| e.to_string()),
        ProfileFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
    }
    .map_err(|e| ProfileLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })?;

    if profile.schema_version != PROFILE_SCHEMA_VERSION {
        return Err(ProfileLoadError {
            file: file.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                profile.schema_version, PROFILE_SCHEMA_VERSION
            ),
        });
    }

    let errors = validate_profile(&profile);
    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ProfileLoadError {
            file: file.to_string(),
            message: format!("Invalid profile: {}", message),
        });
    }

    Ok(profile)
}

/// Load a character profile from disk.
pub fn load_profile(path: &Path) -> Result<CharacterProfile, ProfileLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ProfileLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let profile = parse_profile(&contents, ProfileFormat::from_path(path), &file_name)?;
    info!(
        "Loaded character profile {}: max_speed={}, jump_power={}, facing={:?}",
        file_name, profile.movement.max_speed, profile.movement.jump_power, profile.facing
    );
    Ok(profile)
}

/// Load a profile, falling back to defaults with a warning on any failure.
pub fn load_profile_or_default(path: &Path) -> CharacterProfile {
    load_profile(path).unwrap_or_else(|e| {
        warn!("{}; using default character profile", e);
        CharacterProfile::default()
    })
}
