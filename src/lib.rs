#![forbid(unsafe_code)]

pub mod display_name;
pub mod profile;

pub use display_name::build_display_name;
pub use profile::{ProfileEntry, ProfileError};
