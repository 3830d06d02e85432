// Pure domain services: stateless transforms of (snapshot, now, criteria)

pub mod alerts;
pub mod csv_export;
pub mod derivation;
pub mod query;
pub mod reports;

pub use alerts::*;
pub use csv_export::*;
pub use derivation::*;
pub use query::*;
pub use reports::*;
