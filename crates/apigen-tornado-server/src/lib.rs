pub mod naming;
pub mod options;
pub mod postprocess;
pub mod profile;
pub mod reserved;
pub mod type_mapper;

pub use options::TornadoOptions;
pub use profile::TornadoServerProfile;
