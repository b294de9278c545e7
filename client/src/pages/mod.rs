//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes sections from `components`; none of them own state
//! beyond what their components create.

pub mod about;
pub mod home;
