//! Mock OAuth provider endpoints.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{TEST_ACCESS_TOKEN, TEST_TOKEN_PATH, TEST_USERINFO_PATH},
    fixtures::auth::AuthFixtures,
    TestError,
};

impl<'a> AuthFixtures<'a> {
    /// Create the token exchange and userinfo endpoints for a successful login.
    ///
    /// 1. POST token path - returns a bearer access token for any authorization code
    /// 2. GET userinfo path - returns the identity for that access token
    pub fn create_oauth_endpoints(
        &mut self,
        email: &str,
        name: Option<&str>,
    ) -> Result<Vec<Mock>, TestError> {
        let token = json!({
            "access_token": TEST_ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600,
        });
        let userinfo = json!({
            "sub": "1",
            "email": email,
            "name": name,
            "picture": null,
        });

        let token_endpoint = self
            .setup
            .server
            .mock("POST", TEST_TOKEN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&token)?)
            .create();

        let userinfo_endpoint = self
            .setup
            .server
            .mock("GET", TEST_USERINFO_PATH)
            .match_header(
                "authorization",
                Matcher::Exact(format!("Bearer {}", TEST_ACCESS_TOKEN)),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&userinfo)?)
            .create();

        Ok(vec![token_endpoint, userinfo_endpoint])
    }
}
