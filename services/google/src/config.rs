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

use credfile_core::Context;

use crate::constants::GOOGLE_APPLICATION_CREDENTIALS;

/// Config carries all the configuration for locating a credential document.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Credential file path.
    pub credential_path: Option<String>,
    /// Credential content, either raw JSON or base64-encoded JSON.
    pub credential_content: Option<String>,
    /// Disable reading from environment variables.
    pub disable_env: bool,
    /// Disable reading from well-known locations.
    pub disable_well_known_location: bool,
}

impl Config {
    /// Create a new config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credential file path.
    pub fn with_credential_path(mut self, path: impl Into<String>) -> Self {
        self.credential_path = Some(path.into());
        self
    }

    /// Set credential content.
    pub fn with_credential_content(mut self, content: impl Into<String>) -> Self {
        self.credential_content = Some(content.into());
        self
    }

    /// Disable reading from environment variables.
    pub fn with_disable_env(mut self) -> Self {
        self.disable_env = true;
        self
    }

    /// Disable reading from well-known locations.
    pub fn with_disable_well_known_location(mut self) -> Self {
        self.disable_well_known_location = true;
        self
    }

    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        let mut cfg = Self::default();

        if let Some(v) = ctx.env_var(GOOGLE_APPLICATION_CREDENTIALS) {
            cfg.credential_path = Some(v);
        }

        cfg
    }
}
