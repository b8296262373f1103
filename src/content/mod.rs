//! Content domain: character profiles loaded from data files.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{CharacterProfile, PROFILE_SCHEMA_VERSION};
pub use loader::{
    ProfileFormat, ProfileLoadError, load_profile, load_profile_or_default, parse_profile,
};
pub use validation::{ValidationError, validate_profile};
