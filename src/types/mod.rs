pub mod event;
pub mod report;

pub use event::*;
pub use report::*;
