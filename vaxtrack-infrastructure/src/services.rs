pub mod clock;
pub mod report_writer;

pub use clock::*;
pub use report_writer::*;
