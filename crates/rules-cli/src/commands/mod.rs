//! Command implementations for rules-cli

pub mod list_tools;
pub mod postinstall;
pub mod prepare;

pub use list_tools::run_list_tools;
pub use postinstall::run_postinstall;
pub use prepare::run_prepare;
