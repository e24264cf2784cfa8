use oauth2::{CsrfToken, PkceCodeChallenge, Scope};

use crate::server::model::auth::{LoginData, OAuthClient};

pub static LOGIN_SCOPES: [&str; 3] = ["openid", "email", "profile"];

/// Builds the provider authorization URL along with the CSRF state and PKCE verifier
/// that must be kept in session until the callback.
pub fn login_service(oauth_client: &OAuthClient) -> LoginData {
    let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

    let (login_url, csrf_state) = oauth_client
        .authorize_url(CsrfToken::new_random)
        .add_scopes(LOGIN_SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
        .set_pkce_challenge(pkce_challenge)
        .url();

    LoginData {
        login_url: login_url.to_string(),
        state: csrf_state.secret().to_string(),
        pkce_verifier: pkce_verifier.secret().to_string(),
    }
}
