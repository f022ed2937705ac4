//! Embedded lists
//!
//! Lists compiled into the binary at build time.

// Include generated lists from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/emojis.rs"));
