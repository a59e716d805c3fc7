use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::OperationGroup;

/// The full data context handed to supporting-file templates and to
/// [`GeneratorProfile::post_process_supporting_data`].
///
/// [`GeneratorProfile::post_process_supporting_data`]: crate::profile::GeneratorProfile::post_process_supporting_data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportingData {
    #[serde(rename = "apiInfo", default)]
    pub api_info: ApiInfo,

    /// Host-owned context entries (version stamps, template properties, and
    /// the like) passed through untouched.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// The per-run index of generated APIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apis: Vec<ApiEntry>,
}

/// One generated API within the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEntry {
    #[serde(default)]
    pub operations: OperationGroup,
}
