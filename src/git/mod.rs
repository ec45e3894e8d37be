//! Git history queries over the system git binary.

pub mod log;
pub mod tags;

pub use log::{subjects_between, subjects_from};
pub use tags::{VERSION_TAG_GLOB, previous_version_tag};
