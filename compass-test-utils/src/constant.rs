//! Placeholder OAuth provider values shared by all tests. None of these are real credentials.

pub static TEST_OAUTH_CLIENT_ID: &str = "oauth_client_id";

pub static TEST_OAUTH_CLIENT_SECRET: &str = "oauth_client_secret";

pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";

/// Path of the mock authorization endpoint, never requested since login only builds the URL.
pub static TEST_AUTH_PATH: &str = "/o/oauth2/v2/auth";

pub static TEST_TOKEN_PATH: &str = "/token";

pub static TEST_USERINFO_PATH: &str = "/v1/userinfo";

pub static TEST_ACCESS_TOKEN: &str = "mock_access_token";

/// E-mail placed on the editor allow-list by test application state.
pub static TEST_EDITOR_EMAIL: &str = "editor@example.com";

/// E-mail absent from the editor allow-list.
pub static TEST_VIEWER_EMAIL: &str = "viewer@example.com";
