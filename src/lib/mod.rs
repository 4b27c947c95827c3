//! Shared frontend utilities for API access, configuration, errors, and build metadata.
//!
//! ## Phone Sign-In Flow
//!
//! 1. **Send:** The client POSTs the normalized phone number to `/v1/auth/send-code`,
//!    which triggers an SMS with a short numeric code and returns `204`.
//! 2. **Verify:** The client POSTs the phone number and the entered code to
//!    `/v1/auth/verify-code` and receives an access token on success.
//! 3. **Session:** The token is kept in `localStorage` alongside the phone number so a
//!    reload keeps the user signed in until the token expires server-side.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids duplicated
//! logic in routes and features. These utilities do not handle secrets directly, but
//! callers must still avoid logging codes or tokens.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::{post_json, post_json_response};
pub(crate) use errors::AppError;
