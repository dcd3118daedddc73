//! OAuth2 token and client registration wire types.
//!
//! Request types decode leniently: absent members become empty values and required-field
//! checks happen afterwards, so a missing field and an empty one are reported the same way.
//!
//! Client registration follows the simple-registry contract. The earlier dynamic client
//! registration response (issued-at, software id/version, JWK, X.509 echoed back) is not served.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `application/x-www-form-urlencoded` body of `POST /oauth2/access-tokens`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TokenRequest {
    pub grant_type: String,
    pub client_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_secret: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_assertion: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_assertion_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scope: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scope: String,
}

/// JSON body of `POST /oauth2/registration`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ClientRegistrationRequest {
    pub client_name: String,
    pub client_uri: String,
    pub jwt: String,
    pub redirect_uris: Vec<String>,
    pub software_id: String,
    pub software_version_id: String,
    pub x_509: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientRegistrationResponse {
    pub client_name: String,
    pub client_id: String,
    pub client_secret: String,
    pub client_uri: String,
    pub redirect_uris: Vec<String>,
}

/// JSON body of `PATCH /oauth2/registration/{id}`. Every member is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ClientUpdateRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub software_version: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redirect_uris: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub jwk: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub x509: String,
}
