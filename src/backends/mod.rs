//! Backends module - Where input comes from
//!
//! Provides:
//! - scan: Text source discovery with the ignore crate

pub mod scan;
