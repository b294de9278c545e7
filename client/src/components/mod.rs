//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, content cards, and the contact form. Shared
//! state (the toast queue) comes from Leptos context providers.

pub mod contact_form;
pub mod experience_card;
pub mod footer;
pub mod highlight_card;
pub mod navbar;
pub mod project_card;
pub mod toaster;
