use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{OperationGroup, SupportingData};

/// What a generator profile produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Client,
    Server,
    Documentation,
    Config,
    Other,
}

impl GeneratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Client => "client",
            GeneratorKind::Server => "server",
            GeneratorKind::Documentation => "documentation",
            GeneratorKind::Config => "config",
            GeneratorKind::Other => "other",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A logical template bound to the file suffix its output receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBinding {
    pub template: String,
    pub suffix: String,
}

impl TemplateBinding {
    pub fn new(template: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            suffix: suffix.into(),
        }
    }
}

/// A standalone output rendered once per run, bound to a template and a
/// destination subpath. An empty folder places the file at the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportingFile {
    pub template: String,
    pub folder: String,
    pub destination: String,
}

impl SupportingFile {
    pub fn new(
        template: impl Into<String>,
        folder: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            folder: folder.into(),
            destination: destination.into(),
        }
    }
}

/// One target output flavor for the generation host.
///
/// Implementations are stateless per generation run: every method is a pure
/// function of the profile's immutable configuration. The host resolves a
/// profile by short name through a [`ProfileRegistry`], queries its naming and
/// type rules while building the render model, and hands that model through
/// the two post-processing hooks just before template rendering.
///
/// [`ProfileRegistry`]: crate::registry::ProfileRegistry
pub trait GeneratorProfile: std::fmt::Debug {
    /// Generator taxonomy tag.
    fn kind(&self) -> GeneratorKind;

    /// Short name the host's target-selection flag matches against.
    fn name(&self) -> &str;

    /// Human-readable help describing the profile's output and toggles.
    fn help(&self) -> &str;

    /// Logical package for generated API handler code.
    fn api_package(&self) -> &str;

    /// Logical package for generated model code.
    fn model_package(&self) -> &str;

    /// Folder for API handler output: the configured output root joined with
    /// the API package, dots becoming path separators.
    fn api_file_folder(&self) -> PathBuf;

    /// Map a schema type to the target-language type name. `None` falls back
    /// to the host's default behavior.
    fn map_schema_type(&self, schema_type: &str) -> Option<&str>;

    /// Whether `name` is a primitive in the target language.
    fn is_language_primitive(&self, name: &str) -> bool;

    /// Case-sensitive membership in the target language's reserved words.
    fn is_reserved_word(&self, name: &str) -> bool;

    /// Escape an identifier known to collide with a reserved word.
    fn escape_reserved_word(&self, name: &str) -> String;

    /// Escape `name` only when it is reserved; identity otherwise.
    fn escape_if_reserved(&self, name: &str) -> String {
        if self.is_reserved_word(name) {
            self.escape_reserved_word(name)
        } else {
            name.to_string()
        }
    }

    /// Display name for a generated API class. Total over empty input.
    fn to_api_name(&self, name: &str) -> String;

    /// File name (without suffix) for a generated API handler.
    fn to_api_filename(&self, name: &str) -> String;

    /// File name (without suffix) for a generated model.
    fn to_model_filename(&self, name: &str) -> String;

    /// Variable name in the target language.
    fn to_var_name(&self, name: &str) -> String;

    /// Directory the host resolves this profile's templates from.
    fn template_dir(&self) -> &str;

    /// Templates rendered once per generated API.
    fn api_template_files(&self) -> &[TemplateBinding];

    /// Templates rendered once per generated model.
    fn model_template_files(&self) -> &[TemplateBinding];

    /// Standalone files rendered once per run.
    fn supporting_files(&self) -> &[SupportingFile];

    /// Extra values merged into every template context.
    fn additional_properties(&self) -> IndexMap<String, serde_json::Value> {
        IndexMap::new()
    }

    /// Reshape one API's operation bundle just before its templates render.
    /// The default pass is the identity.
    fn post_process_operations(&self, group: OperationGroup) -> OperationGroup {
        group
    }

    /// Reshape the supporting-file context once per run, after all operation
    /// bundles are final. The default pass is the identity.
    fn post_process_supporting_data(&self, data: SupportingData) -> SupportingData {
        data
    }
}
