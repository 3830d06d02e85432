// Domain value objects
pub mod criteria;
pub mod identifiers;
pub mod reasons;
pub mod severity;
pub mod statuses;

pub use criteria::*;
pub use identifiers::*;
pub use reasons::*;
pub use severity::*;
pub use statuses::*;
