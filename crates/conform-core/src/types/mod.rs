//! Shared types used across the workspace.

pub mod collections;
pub mod rule_id;
pub mod severity;
