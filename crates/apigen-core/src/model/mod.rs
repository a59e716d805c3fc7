pub mod operation;
pub mod supporting;

pub use operation::{Example, Operation, OperationGroup, Parameter, PathGroup, Response};
pub use supporting::{ApiEntry, ApiInfo, SupportingData};
