//! Foundation module - shared utilities
//!
//! Logging is the only foundation concern this engine carries; everything
//! else lives next to the subsystem that needs it.

pub mod logging;
