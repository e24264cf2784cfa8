use oauth2::{basic::BasicClient, EndpointNotSet, EndpointSet};
use serde::Deserialize;

use crate::model::user::Role;

/// OAuth client with authorization and token endpoints configured.
pub type OAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Everything the login and callback flows need to talk to the OAuth provider.
pub struct AuthSettings {
    pub oauth_client: OAuthClient,
    /// Client used for the token exchange and userinfo request, redirects disabled
    pub http_client: reqwest::Client,
    pub userinfo_url: String,
    /// Lowercased e-mails granted the editor role
    pub editor_emails: Vec<String>,
}

impl AuthSettings {
    /// Role for `email`: editor when it is on the allow-list, ignoring case and whitespace.
    pub fn role_for(&self, email: &str) -> Role {
        let email = email.trim().to_lowercase();

        if self.editor_emails.iter().any(|editor| *editor == email) {
            Role::Editor
        } else {
            Role::Viewer
        }
    }
}

/// Data required to redirect the user to the provider's login page.
pub struct LoginData {
    pub login_url: String,
    pub state: String,
    pub pkce_verifier: String,
}

/// Subset of the OpenID Connect userinfo document used to identify users.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}
