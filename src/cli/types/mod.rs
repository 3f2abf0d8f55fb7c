//! Type-safe wrappers for Clash of Clans identifiers.

pub mod ids;
