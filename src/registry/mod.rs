mod table;
mod types;

pub use table::builtin_registry;
pub use types::{PageDescriptor, PageRegistry};
