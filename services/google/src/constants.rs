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

// Env values used to locate google credential documents.
pub const GOOGLE_APPLICATION_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const APPDATA: &str = "APPDATA";
pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub const HOME: &str = "HOME";

/// Path of the application default credentials, relative to the config dir.
pub const WELL_KNOWN_CREDENTIAL_PATH: &str = "gcloud/application_default_credentials.json";

/// `type` of a service account key exported from the IAM console.
pub const SERVICE_ACCOUNT_TYPE: &str = "service_account";
/// `type` of the document written by `gcloud auth application-default login`.
pub const AUTHORIZED_USER_TYPE: &str = "authorized_user";
