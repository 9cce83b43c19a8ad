//! # LMS Shared
//!
//! Types shared between the browser client and the backend: API envelopes,
//! request/response DTOs, entity messages and the client session store.
//! Nothing here depends on the server stack, so the crate also builds for WASM.

pub mod dto;
pub mod messages;
pub mod response;
pub mod store;

pub use messages::EntityMessages;
pub use response::{ApiResponse, ErrorResponse};
