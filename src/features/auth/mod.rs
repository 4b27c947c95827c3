//! Auth feature module covering phone sign-in, code entry, and session
//! hydration. It keeps authentication logic out of the UI and must stay
//! aligned with backend rate limits on code issuance. This module touches
//! security boundaries and must avoid logging codes or token material.
//!
//! Flow Overview: the sign-in page validates and normalizes the phone number,
//! requests a code over SMS, and opens the entry modal. The modal drives the
//! `CodeEntry` state machine; a verified code yields an access token that is
//! stored as the session.

pub(crate) mod client;
pub(crate) mod entry;
pub(crate) mod phone;
pub(crate) mod state;
pub(crate) mod types;
