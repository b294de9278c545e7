//! Client-side state.
//!
//! DESIGN
//! ======
//! Plain structs with pure transitions; components wrap them in `RwSignal`s.

pub mod contact;
pub mod toast;
