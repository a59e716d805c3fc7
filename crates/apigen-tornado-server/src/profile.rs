//! The Tornado REST server profile.

use std::path::PathBuf;

use apigen_core::model::{OperationGroup, SupportingData};
use apigen_core::{
    GeneratorKind, GeneratorProfile, ProfileError, SupportingFile, TemplateBinding,
};
use indexmap::IndexMap;
use serde_json::json;

use crate::options::TornadoOptions;
use crate::{naming, postprocess, reserved, type_mapper};

/// Short name the host's target-selection flag matches against.
pub const PROFILE_NAME: &str = "tornado-rest";

/// Directory the profile's templates live under.
pub const TEMPLATE_DIR: &str = "tornado-rest";

/// Package generated handler classes land in.
pub const API_PACKAGE: &str = "handler";

/// Package generated model classes land in.
pub const MODEL_PACKAGE: &str = "model";

const HELP: &str = "Generates a Tornado REST server library. By default it also generates \
service classes, which the `noservice` environment variable disables.";

/// Generator profile for Python Tornado REST server stubs.
#[derive(Debug)]
pub struct TornadoServerProfile {
    options: TornadoOptions,
    api_templates: Vec<TemplateBinding>,
    model_templates: Vec<TemplateBinding>,
    supporting: Vec<SupportingFile>,
}

impl TornadoServerProfile {
    pub fn new() -> Self {
        Self::with_options(TornadoOptions::default())
    }

    pub fn with_options(options: TornadoOptions) -> Self {
        Self {
            options,
            api_templates: vec![TemplateBinding::new("handler.mustache", ".py")],
            model_templates: vec![TemplateBinding::new("model.mustache", ".py")],
            supporting: vec![
                SupportingFile::new("swagger.mustache", "api", "swagger.json"),
                SupportingFile::new("run.mustache", "", "run.py"),
                SupportingFile::new("__init__model.mustache", "model", "__init__.py"),
                SupportingFile::new("__init__handler.mustache", "handler", "__init__.py"),
            ],
        }
    }

    /// Build the profile from the host's free-form configuration value.
    pub fn from_config(value: &serde_json::Value) -> Result<Self, ProfileError> {
        Ok(Self::with_options(TornadoOptions::from_value(value)?))
    }

    pub fn options(&self) -> &TornadoOptions {
        &self.options
    }
}

impl Default for TornadoServerProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorProfile for TornadoServerProfile {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Server
    }

    fn name(&self) -> &str {
        PROFILE_NAME
    }

    fn help(&self) -> &str {
        HELP
    }

    fn api_package(&self) -> &str {
        API_PACKAGE
    }

    fn model_package(&self) -> &str {
        MODEL_PACKAGE
    }

    fn api_file_folder(&self) -> PathBuf {
        naming::api_file_folder(&self.options.output_folder, self.api_package())
    }

    fn map_schema_type(&self, schema_type: &str) -> Option<&str> {
        type_mapper::map_schema_type(schema_type)
    }

    fn is_language_primitive(&self, name: &str) -> bool {
        type_mapper::is_language_primitive(name)
    }

    fn is_reserved_word(&self, name: &str) -> bool {
        reserved::is_reserved_word(name)
    }

    fn escape_reserved_word(&self, name: &str) -> String {
        reserved::escape_reserved_word(name)
    }

    fn to_api_name(&self, name: &str) -> String {
        naming::to_api_name(name)
    }

    fn to_api_filename(&self, name: &str) -> String {
        naming::to_file_or_var_name(name)
    }

    fn to_model_filename(&self, name: &str) -> String {
        naming::to_file_or_var_name(name)
    }

    fn to_var_name(&self, name: &str) -> String {
        naming::to_file_or_var_name(name)
    }

    fn template_dir(&self) -> &str {
        TEMPLATE_DIR
    }

    fn api_template_files(&self) -> &[TemplateBinding] {
        &self.api_templates
    }

    fn model_template_files(&self) -> &[TemplateBinding] {
        &self.model_templates
    }

    fn supporting_files(&self) -> &[SupportingFile] {
        &self.supporting
    }

    fn additional_properties(&self) -> IndexMap<String, serde_json::Value> {
        IndexMap::from([
            ("apiVersion".to_string(), json!(self.options.api_version)),
            ("serverPort".to_string(), json!(self.options.server_port)),
        ])
    }

    fn post_process_operations(&self, group: OperationGroup) -> OperationGroup {
        postprocess::normalize_operations(group)
    }

    fn post_process_supporting_data(&self, data: SupportingData) -> SupportingData {
        postprocess::attach_path_groups(data)
    }
}
