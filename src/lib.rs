pub mod args;
pub mod config;
pub mod err;
pub mod report;
pub mod style;
pub mod template;

pub use report::{Formatter, Mode, TestResults, format_results, log_test_results};
pub use template::{Fragments, Placeholder};
