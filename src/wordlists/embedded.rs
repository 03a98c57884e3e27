//! Embedded lexical tables
//!
//! Tables compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/stopwords.rs"));
