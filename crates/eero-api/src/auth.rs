// Authentication endpoints
//
// Two-step login: `POST /login` mails or texts a code and returns an
// unconfirmed token; `POST /login/verify` confirms it. The verify call must
// already present the unconfirmed token as its session cookie.

use reqwest::Method;
use secrecy::SecretString;
use serde_json::json;
use tracing::debug;

use crate::client::EeroClient;
use crate::error::Error;
use crate::models::{ApiAccount, LoginResponse};

impl EeroClient {
    /// Start a login for an email address or phone number.
    ///
    /// `POST /login` with `{"login": identity}`. Returns the unconfirmed
    /// `user_token`.
    pub async fn login(&self, identity: &str) -> Result<SecretString, Error> {
        debug!("requesting verification code");
        let resp: LoginResponse = self.post("/login", &json!({ "login": identity })).await?;
        Ok(SecretString::from(resp.user_token))
    }

    /// Confirm a login with the code the user received.
    ///
    /// Sets `token` as the session credential *before* sending, since the
    /// verify endpoint authenticates with the unconfirmed token.
    /// `POST /login/verify` with `{"code": code}`.
    pub async fn login_verify(&self, token: SecretString, code: &str) -> Result<(), Error> {
        self.set_token(token);
        debug!("verifying login code");
        self.execute(
            Method::POST,
            "/login/verify",
            Some(&json!({ "code": code })),
        )
        .await
    }

    /// Fetch the account and its networks.
    ///
    /// `GET /account`
    pub async fn account(&self) -> Result<ApiAccount, Error> {
        self.get("/account").await
    }

    /// Cheap credential probe: `false` without a request when no token is
    /// set, otherwise whether `GET /account` succeeds. The underlying error
    /// is discarded.
    pub async fn validate_token(&self) -> bool {
        if !self.has_token() {
            return false;
        }
        match self.account().await {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "token validation failed");
                false
            }
        }
    }
}
