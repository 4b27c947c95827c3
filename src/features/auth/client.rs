//! Client wrappers for the phone sign-in API endpoints. These helpers keep
//! request shapes in one place and prevent code or token leakage in view code.

use crate::{
    app_lib::{AppError, post_json, post_json_response},
    features::auth::types::{SendCodeRequest, VerifyCodeRequest, VerifyCodeResponse},
};

/// Requests an SMS code for the given phone number. Returns `204` on success;
/// the server decides whether the number actually receives a message.
pub async fn send_code(request: &SendCodeRequest) -> Result<(), AppError> {
    post_json("/v1/auth/send-code", request).await
}

/// Submits the entered code and returns an access token on success.
/// Must never log the code or the returned token.
pub async fn verify_code(request: &VerifyCodeRequest) -> Result<VerifyCodeResponse, AppError> {
    post_json_response("/v1/auth/verify-code", request).await
}
