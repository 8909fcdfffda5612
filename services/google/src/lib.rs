//! Google credential documents.
//!
//! [`CredentialDocument`] is the decoded form of a JSON credential file as
//! exported for a service account or written by
//! `gcloud auth application-default login`. It only maps keys to fields:
//! validating them against `type` is up to the caller.
//!
//! ```
//! use credfile_google::CredentialDocument;
//!
//! let doc: CredentialDocument = r#"{
//!     "type": "authorized_user",
//!     "client_id": "cid",
//!     "client_secret": "secret",
//!     "refresh_token": "rtok"
//! }"#
//! .parse()?;
//!
//! assert_eq!(doc.credential_type(), Some("authorized_user"));
//! assert_eq!(doc.refresh_token(), Some("rtok"));
//! assert_eq!(doc.private_key(), None);
//! # Ok::<(), credfile_core::Error>(())
//! ```
//!
//! [`CredentialDocumentLoader`] finds a document the same way other google
//! clients do: explicit config first, then `GOOGLE_APPLICATION_CREDENTIALS`,
//! then the application default credentials file.

mod constants;
pub use constants::{AUTHORIZED_USER_TYPE, SERVICE_ACCOUNT_TYPE};

mod config;
pub use config::Config;

mod credential;
pub use credential::CredentialDocument;

mod load;
pub use load::CredentialDocumentLoader;
