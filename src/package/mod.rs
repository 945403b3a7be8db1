//! Package requirements
//!
//! This module describes what to install: single requirements with an
//! optional exact version pin, and ordered manifests of them.

mod manifest;
mod requirement;

pub use manifest::{BUILTIN_REQUIREMENTS, Manifest};
pub use requirement::{PIN_SEPARATOR, Requirement};
