use crate::{error, info, success, utils};

/// Acquires an access token and prints masked diagnostics.
///
/// Serves as the "are my credentials right" check: a successful exchange
/// proves the configured pair works without exposing a usable token.
pub async fn token() {
    let api = super::build_api();

    match api.token_manager().access_token().await {
        Ok(token) => {
            success!("Obtained access token {}", utils::mask_token(&token));
            if let Some(payload) = api.token_manager().last_payload() {
                info!(
                    "Token type: {}, expires in {}s",
                    payload.token_type, payload.expires_in
                );
            }
        }
        Err(e) => error!("Token request failed: {}", e),
    }
}
