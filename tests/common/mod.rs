//! Consolidated test utilities for igitt
//!
//! Integration tests run against real temporary git repositories.

pub mod assertions;
pub mod fixtures;
pub mod repository;
