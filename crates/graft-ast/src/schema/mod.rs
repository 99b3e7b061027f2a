pub mod attr;
pub mod registry;

pub use attr::{AttributeSpec, Builtin, Category};
pub use registry::{NodeType, Registry};
