//! Embedded word data
//!
//! Dictionaries and the allowed-guess list compiled into the binary at build time.

// Include generated word data from build script
include!(concat!(env!("OUT_DIR"), "/dictionaries.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
