//! Infrastructure layer for the Zellij plugin sandbox.

pub mod paths;

pub use paths::get_data_dir;
