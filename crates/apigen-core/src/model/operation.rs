use serde::{Deserialize, Serialize};

/// One schema-defined endpoint in the host's render model.
///
/// Serde renames are part of the host contract: serialized keys are exactly
/// the names templates iterate over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(rename = "httpMethod")]
    pub http_method: String,

    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// `None` means "no parameters". A present-but-empty list is rewritten to
    /// `None` during normalization so templates never see the ambiguous form.
    #[serde(rename = "allParams", skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Parameter>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<Response>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,

    /// Separator marker for template iteration; cleared on the operation that
    /// closes its path group.
    #[serde(rename = "hasMore", default, skip_serializing_if = "is_false")]
    pub has_more: bool,
}

/// A single operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "paramName")]
    pub param_name: String,

    #[serde(rename = "dataType", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    #[serde(default)]
    pub required: bool,
}

/// One declared response of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Status code as written in the schema. `"0"` is the wildcard marker,
    /// rewritten to `"default"` during normalization.
    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// An example payload attached to an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// The per-API bundle handed to API templates and to
/// [`GeneratorProfile::post_process_operations`].
///
/// [`GeneratorProfile::post_process_operations`]: crate::profile::GeneratorProfile::post_process_operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationGroup {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub classname: String,

    #[serde(rename = "operation", default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<Operation>,

    /// By-path view attached by the supporting-data pass; empty until then.
    #[serde(
        rename = "operationsByPath",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub operations_by_path: Vec<PathGroup>,
}

/// Operations sharing one request path, in discovery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathGroup {
    pub path: String,

    #[serde(rename = "operation")]
    pub operations: Vec<Operation>,

    /// `true` on every group except the last, so templates can emit
    /// separators between groups but not after the final one.
    #[serde(rename = "hasMore", default, skip_serializing_if = "is_false")]
    pub has_more: bool,
}

fn is_false(value: &bool) -> bool {
    !value
}
