pub mod analysis;
pub mod config;
pub mod diagnostics;
pub mod gradebook;
pub mod input;
pub mod output;
pub mod report;
pub mod session;

pub use gradebook::{Gradebook, GradebookError, MarkArray, MarkMatrix};
