// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{self, Debug};
use std::str::FromStr;

use credfile_core::hash::base64_decode;
use credfile_core::utils::Redact;
use credfile_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// CredentialDocument is the decoded form of a google JSON credential file.
///
/// Every field is optional: which ones are present depends on `type`, and
/// interpreting them is left to the caller. Absent and `null` keys read as
/// `None`; a present empty string reads as `Some("")`. Unknown keys are
/// ignored.
///
/// The document can't be modified after decoding.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CredentialDocument {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    credential_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth_provider_x509_cert_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_x509_cert_url: Option<String>,
}

impl CredentialDocument {
    /// Parse credential document from bytes.
    ///
    /// The input must be a JSON object; any other JSON value fails with
    /// [`credfile_core::ErrorKind::CredentialInvalid`].
    pub fn from_slice(v: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(v).map_err(|e| {
            Error::credential_invalid("failed to parse credential document").with_source(e)
        })?;
        if !value.is_object() {
            return Err(Error::credential_invalid(
                "credential document must be a JSON object",
            ));
        }

        serde_json::from_value(value).map_err(|e| {
            Error::credential_invalid("failed to decode credential document").with_source(e)
        })
    }

    /// Parse credential document from base64-encoded content.
    pub fn from_base64(content: &str) -> Result<Self> {
        let decoded = base64_decode(content)?;
        Self::from_slice(&decoded)
    }

    /// Discriminator such as `service_account` or `authorized_user`.
    pub fn credential_type(&self) -> Option<&str> {
        self.credential_type.as_deref()
    }

    /// OAuth client identifier.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// OAuth client secret.
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// Long-lived token for obtaining new access tokens.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Cloud project identifier.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Identifier of the signing key.
    pub fn private_key_id(&self) -> Option<&str> {
        self.private_key_id.as_deref()
    }

    /// PEM-encoded private key.
    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    /// Service account email.
    pub fn client_email(&self) -> Option<&str> {
        self.client_email.as_deref()
    }

    /// Authorization endpoint.
    pub fn auth_uri(&self) -> Option<&str> {
        self.auth_uri.as_deref()
    }

    /// Token endpoint.
    pub fn token_uri(&self) -> Option<&str> {
        self.token_uri.as_deref()
    }

    /// URL of the provider's x509 certificates.
    pub fn auth_provider_x509_cert_url(&self) -> Option<&str> {
        self.auth_provider_x509_cert_url.as_deref()
    }

    /// URL of the client's x509 certificates.
    pub fn client_x509_cert_url(&self) -> Option<&str> {
        self.client_x509_cert_url.as_deref()
    }
}

impl FromStr for CredentialDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

impl Debug for CredentialDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialDocument")
            .field("type", &self.credential_type)
            .field("client_id", &self.client_id)
            .field("client_secret", &Redact::from(&self.client_secret))
            .field("refresh_token", &Redact::from(&self.refresh_token))
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &Redact::from(&self.private_key))
            .field("client_email", &self.client_email)
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .field(
                "auth_provider_x509_cert_url",
                &self.auth_provider_x509_cert_url,
            )
            .field("client_x509_cert_url", &self.client_x509_cert_url)
            .finish()
    }
}
