pub mod progress;
pub mod viewer;

pub use progress::*;
pub use viewer::*;
