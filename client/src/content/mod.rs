//! Static portfolio content.
//!
//! DESIGN
//! ======
//! Everything here is compiled in as `&'static` data and rendered in
//! declaration order. Optional fields are `Option`s so components can omit
//! the matching affordance instead of rendering a placeholder.

pub mod experience;
pub mod profile;
pub mod projects;

pub use experience::{EXPERIENCE, Experience};
pub use profile::{HIGHLIGHTS, Highlight, HighlightIcon, Link, PROFILE, Profile};
pub use projects::{PROJECTS, Project};
