//! Command implementations for Rulepack CLI

pub mod bundle;
pub mod completions;
pub mod explode;
pub mod helpers;
