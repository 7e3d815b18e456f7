//! Login request against the authorization endpoint

use gatehouse_common::{Credentials, RedirectResponse};
use leptos::logging;

use crate::api::{ApiClient, ApiError, Method};

pub const LOGIN_PATH: &str = "auth/login-code/";

/// Exchange credentials for a redirect URI.
///
/// Performs exactly one POST to [`LOGIN_PATH`] with the credentials as the
/// JSON body and the client/redirect pair as query parameters. Wrapper
/// failures propagate unchanged.
pub async fn login(
    client: &ApiClient,
    credentials: &Credentials,
    client_id: u32,
    redirect_uri: &str,
) -> Result<RedirectResponse, ApiError> {
    let params = [
        ("client_id", client_id.to_string()),
        ("redirect_uri", redirect_uri.to_string()),
    ];

    let response = client
        .call(LOGIN_PATH, Method::Post, Some(credentials), &params)
        .await?;

    response.json::<RedirectResponse>().await.map_err(|err| {
        logging::warn!("login response was not a redirect body: {}", err);
        ApiError::generic()
    })
}
