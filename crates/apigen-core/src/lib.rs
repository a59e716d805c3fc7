pub mod error;
pub mod model;
pub mod naming;
pub mod profile;
pub mod registry;

pub use error::ProfileError;
pub use profile::{GeneratorKind, GeneratorProfile, SupportingFile, TemplateBinding};
pub use registry::ProfileRegistry;
