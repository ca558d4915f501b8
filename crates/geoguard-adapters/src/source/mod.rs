//! Document source adapters.

mod local;
mod memory;

pub use local::{DEFAULT_EXTENSIONS, LocalSource};
pub use memory::MemorySource;
