/// Config command handlers
pub mod config;

/// Duration and time-remaining command handlers
pub mod duration;

/// Byte size command handlers
pub mod size;

/// Version command handlers
pub mod version;
