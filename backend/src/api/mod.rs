//! Central module for organizing the application's HTTP endpoints.
//!
//! This module acts as a top-level container for the service's API domains:
//! the shared response envelope and the documentation viewer surface.

pub mod common;
pub mod docs;
