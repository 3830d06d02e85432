// Domain entities

pub mod administration;
pub mod alert;
pub mod config;
pub mod inventory_lot;
pub mod loss;
pub mod receipt;
pub mod report;
pub mod vaccine;

pub use administration::*;
pub use alert::*;
pub use config::*;
pub use inventory_lot::*;
pub use loss::*;
pub use receipt::*;
pub use report::*;
pub use vaccine::*;
