//! Subcommand implementations.

/// Target language listing command handler.
pub mod languages;

/// Translation command handler.
pub mod translate;

/// Usage monitoring command handler.
pub mod usage;
