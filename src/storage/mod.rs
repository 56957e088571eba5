//! Storage layer holding the table's records.
//!
//! Records live only in memory for the lifetime of the plugin instance.
//!
//! # Modules
//!
//! - `records`: ordered record store with key-based update and removal

pub mod records;

pub use records::RecordStore;
