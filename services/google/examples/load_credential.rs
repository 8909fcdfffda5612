//! Locate the credential document the same way google clients do and print it.
//!
//! Run with `RUST_LOG=debug` to see which sources were tried.

use credfile_core::{Context, OsEnv, Result};
use credfile_file_read_tokio::TokioFileRead;
use credfile_google::{Config, CredentialDocumentLoader};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);

    let mut config = Config::from_env(&ctx);
    if let Some(path) = std::env::args().nth(1) {
        config = config.with_credential_path(path);
    }

    match CredentialDocumentLoader::new(config).load(&ctx).await? {
        Some(doc) => {
            info!(
                "found {} credential",
                doc.credential_type().unwrap_or("untyped")
            );
            // Debug output redacts secrets.
            println!("{doc:#?}");
        }
        None => println!("no credential document found"),
    }

    Ok(())
}
