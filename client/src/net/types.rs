//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These mirror the server's `/api/contact` request and response bodies so
//! serde round-trips stay lossless across the boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Longest accepted name, in characters. The server rejects anything longer.
pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_EMAIL_CHARS: usize = 320;
pub const MAX_MESSAGE_CHARS: usize = 5_000;

/// Outgoing contact message, already trimmed by the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body returned by `POST /api/contact` for both success and failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
