pub mod memory_store;
pub mod seed_files;

pub use memory_store::*;
pub use seed_files::*;
