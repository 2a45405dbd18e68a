//! Embedded theme catalogs
//!
//! Theme tables compiled into the binary at build time.

// Include generated theme tables from build script
include!(concat!(env!("OUT_DIR"), "/themes.rs"));
