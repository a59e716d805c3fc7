//! Naming rules for generated Tornado handlers, models, and variables.

use std::path::PathBuf;

use apigen_core::naming::{initial_caps, underscore};

/// Class name used when an API has no tag-derived name.
pub const DEFAULT_API_NAME: &str = "DefaultController";

/// Display name for a generated API class. Only the first character is
/// adjusted; the rest of the name passes through unchanged.
pub fn to_api_name(name: &str) -> String {
    if name.is_empty() {
        return DEFAULT_API_NAME.to_string();
    }
    initial_caps(name)
}

/// Shared rule for handler file names, model file names, and variable names:
/// hyphens become underscores, then the result is snake cased.
pub fn to_file_or_var_name(name: &str) -> String {
    underscore(&name.replace('-', "_"))
}

/// Join the output root with the API package, dots becoming path separators.
pub fn api_file_folder(output_folder: &str, api_package: &str) -> PathBuf {
    let mut folder = PathBuf::from(output_folder);
    folder.extend(api_package.split('.'));
    folder
}
