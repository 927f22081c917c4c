//! # conform-analysis
//!
//! Convention engine for the conform checker.
//! Contains the path normalizer, exclusion pattern matcher, logic classifier,
//! the five convention checkers, the scanner that feeds them, and reporters.

#![allow(clippy::module_inception)]

pub mod classify;
pub mod conventions;
pub mod engine;
pub mod parsers;
pub mod paths;
pub mod patterns;
pub mod reporters;
pub mod scanner;
pub mod syntax;
