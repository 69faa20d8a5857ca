//! Embedded word lists
//!
//! Length-bucketed word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words5.rs"));
include!(concat!(env!("OUT_DIR"), "/words6.rs"));
include!(concat!(env!("OUT_DIR"), "/words7.rs"));
include!(concat!(env!("OUT_DIR"), "/words8.rs"));
include!(concat!(env!("OUT_DIR"), "/words9.rs"));
