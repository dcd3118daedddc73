//! Mock OAuth2 token issuance and client registration.
//!
//! Nothing here verifies credentials: required members are checked for presence and the
//! responses are synthesized from the request and the clock.

use crate::config::CoreConfig;
use crate::constants::{
    CLIENT_ID_PREFIX, CLIENT_SECRET_PLACEHOLDER, COMPACT_TIME, COMPACT_TIMESTAMP, TOKEN_EXPIRES_IN,
    TOKEN_PREFIX, TOKEN_TYPE,
};
use crate::{CoreError, CoreResult};
use api_shared::{
    ClientRegistrationRequest, ClientRegistrationResponse, ClientUpdateRequest, TokenRequest,
    TokenResponse,
};
use chrono::{DateTime, Utc};
use dohac_types::NonEmptyText;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AuthService {
    cfg: Arc<CoreConfig>,
}

impl AuthService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Issues `mock_<client_id>_<YYYYMMDDhhmmss>` for any request naming a grant type and a
    /// client. The requested scope is echoed back.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidInput` when `grant_type` or `client_id` is empty.
    pub fn issue_token(&self, req: &TokenRequest, now: DateTime<Utc>) -> CoreResult<TokenResponse> {
        let required = NonEmptyText::new(&req.grant_type)
            .and_then(|_| NonEmptyText::new(&req.client_id));
        let client_id = match required {
            Ok(client_id) => client_id,
            Err(_) => {
                return Err(CoreError::InvalidInput(
                    "grant_type and client_id are required".into(),
                ))
            }
        };

        Ok(TokenResponse {
            access_token: format!(
                "{TOKEN_PREFIX}{client_id}_{}",
                now.format(COMPACT_TIMESTAMP)
            ),
            token_type: TOKEN_TYPE.to_owned(),
            expires_in: TOKEN_EXPIRES_IN,
            scope: req.scope.clone(),
        })
    }

    /// Registers a client, generating `c64484a9-6cb3-4ad0-b9bd-<hhmmss>` as its id.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidInput` when `client_name`, `client_uri`, `software_id`,
    /// `software_version_id` or `redirect_uris` is empty.
    pub fn register_client(
        &self,
        req: ClientRegistrationRequest,
        now: DateTime<Utc>,
    ) -> CoreResult<ClientRegistrationResponse> {
        let complete = [
            &req.client_name,
            &req.client_uri,
            &req.software_id,
            &req.software_version_id,
        ]
        .iter()
        .all(|field| NonEmptyText::new(field).is_ok())
            && !req.redirect_uris.is_empty();
        if !complete {
            return Err(CoreError::InvalidInput(
                "client_name, client_uri, software_id, software_version_id, and redirect_uris are required"
                    .into(),
            ));
        }

        let client_id = format!("{CLIENT_ID_PREFIX}{}", now.format(COMPACT_TIME));
        tracing::info!(client_id = %client_id, software_id = %req.software_id, "registered client");

        Ok(self.client_response(client_id, req.client_name, req.redirect_uris))
    }

    /// Echoes an update for client `id`. No client state is kept, so any id is accepted.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidInput` when `id` is empty.
    pub fn update_client(
        &self,
        id: &str,
        req: ClientUpdateRequest,
    ) -> CoreResult<ClientRegistrationResponse> {
        let id = client_id(id)?;
        tracing::info!(client_id = %id, "updated client");
        Ok(self.client_response(id.into_inner(), req.client_name, req.redirect_uris))
    }

    /// Accepts a deletion for client `id`. Nothing is removed.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidInput` when `id` is empty.
    pub fn delete_client(&self, id: &str) -> CoreResult<()> {
        let id = client_id(id)?;
        tracing::info!(client_id = %id, "processed client deletion");
        Ok(())
    }

    fn client_response(
        &self,
        client_id: String,
        client_name: String,
        redirect_uris: Vec<String>,
    ) -> ClientRegistrationResponse {
        ClientRegistrationResponse {
            client_uri: format!("{}?client_id={client_id}", self.cfg.registration_url()),
            client_name,
            client_id,
            client_secret: CLIENT_SECRET_PLACEHOLDER.to_owned(),
            redirect_uris,
        }
    }
}

fn client_id(id: &str) -> CoreResult<NonEmptyText> {
    NonEmptyText::new(id).map_err(|_| CoreError::InvalidInput("Client ID is required".into()))
}
