pub mod error;
pub mod format;
pub mod input;
pub mod output;

pub use error::*;
pub use output::{OutputStyle, print_success, print_warning};
