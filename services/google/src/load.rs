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

use log::{debug, warn};

use credfile_core::{Context, Error, Result};

use crate::config::Config;
use crate::constants::{
    APPDATA, GOOGLE_APPLICATION_CREDENTIALS, HOME, WELL_KNOWN_CREDENTIAL_PATH, XDG_CONFIG_HOME,
};
use crate::credential::CredentialDocument;

/// CredentialDocumentLoader locates and decodes a credential document.
///
/// Sources are tried in order:
///
/// 1. `credential_content` from config
/// 2. `credential_path` from config
/// 3. the file named by `GOOGLE_APPLICATION_CREDENTIALS`
/// 4. the application default credentials under the user's config dir
///
/// Explicitly configured sources must succeed. Implicit sources whose file
/// can't be read are skipped, but a file that exists and fails to decode is
/// always an error.
#[derive(Debug, Clone)]
pub struct CredentialDocumentLoader {
    config: Config,
}

impl CredentialDocumentLoader {
    /// Create a new loader.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load the first credential document found, or `None` if no source has one.
    pub async fn load(&self, ctx: &Context) -> Result<Option<CredentialDocument>> {
        if let Some(doc) = self.load_via_content()? {
            return Ok(Some(doc));
        }

        if let Some(doc) = self.load_via_path(ctx).await? {
            return Ok(Some(doc));
        }

        if let Some(doc) = self.load_via_env(ctx).await? {
            return Ok(Some(doc));
        }

        if let Some(doc) = self.load_via_well_known_location(ctx).await? {
            return Ok(Some(doc));
        }

        debug!("no credential document found");
        Ok(None)
    }

    fn load_via_content(&self) -> Result<Option<CredentialDocument>> {
        let Some(content) = &self.config.credential_content else {
            return Ok(None);
        };

        let content = content.trim();
        if content.is_empty() {
            return Err(Error::config_invalid("credential_content is empty"));
        }

        let doc = if content.starts_with('{') {
            content.parse::<CredentialDocument>()
        } else {
            CredentialDocument::from_base64(content)
        }
        .inspect_err(|err| warn!("failed to decode configured credential content: {err}"))?;

        debug!("loaded credential document from config content");
        Ok(Some(doc))
    }

    async fn load_via_path(&self, ctx: &Context) -> Result<Option<CredentialDocument>> {
        let Some(path) = &self.config.credential_path else {
            return Ok(None);
        };

        let path = ctx.expand_home_dir(path).ok_or_else(|| {
            Error::config_invalid(format!(
                "credential_path {path} requires a home dir but none was found"
            ))
        })?;

        let content = ctx.file_read(&path).await?;
        let doc = CredentialDocument::from_slice(&content)
            .inspect_err(|err| warn!("failed to decode credential document {path}: {err}"))?;

        debug!("loaded credential document from {path}");
        Ok(Some(doc))
    }

    async fn load_via_env(&self, ctx: &Context) -> Result<Option<CredentialDocument>> {
        if self.config.disable_env {
            return Ok(None);
        }

        let Some(path) = ctx
            .env_var(GOOGLE_APPLICATION_CREDENTIALS)
            .filter(|v| !v.is_empty())
        else {
            return Ok(None);
        };

        load_if_readable(ctx, &path).await
    }

    async fn load_via_well_known_location(
        &self,
        ctx: &Context,
    ) -> Result<Option<CredentialDocument>> {
        if self.config.disable_well_known_location {
            return Ok(None);
        }

        let config_dir = if let Some(v) = ctx.env_var(APPDATA) {
            v
        } else if let Some(v) = ctx.env_var(XDG_CONFIG_HOME) {
            v
        } else if let Some(v) = ctx.env_var(HOME) {
            format!("{v}/.config")
        } else {
            debug!("no config dir found, skip well-known credential location");
            return Ok(None);
        };

        let path = format!("{config_dir}/{WELL_KNOWN_CREDENTIAL_PATH}");
        load_if_readable(ctx, &path).await
    }
}

async fn load_if_readable(ctx: &Context, path: &str) -> Result<Option<CredentialDocument>> {
    let content = match ctx.file_read(path).await {
        Ok(v) => v,
        Err(err) => {
            debug!("skip credential document {path}: {err}");
            return Ok(None);
        }
    };

    let doc = CredentialDocument::from_slice(&content)
        .inspect_err(|err| warn!("failed to decode credential document {path}: {err}"))?;

    debug!("loaded credential document from {path}");
    Ok(Some(doc))
}
