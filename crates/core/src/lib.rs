//! Axalon core: record schemas, payload validation, and the static brand
//! manifest. Nothing in this crate performs I/O.

pub mod error;
pub mod manifest;
pub mod stamp;
pub mod submission;
pub mod types;
