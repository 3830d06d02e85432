pub mod inventory_handlers;
pub mod ops_handlers;
pub mod report_handlers;
pub mod workflow_handlers;

pub use inventory_handlers::*;
pub use ops_handlers::*;
pub use report_handlers::*;
pub use workflow_handlers::*;
