use credfile_core::hash::base64_encode;
use credfile_core::{Context, ErrorKind, Result};
use credfile_google::{
    Config, CredentialDocument, CredentialDocumentLoader, AUTHORIZED_USER_TYPE,
    SERVICE_ACCOUNT_TYPE,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

use super::{
    create_test_context_with_env, write_file, AUTHORIZED_USER_JSON, SERVICE_ACCOUNT_JSON,
};

async fn load(config: Config, ctx: &Context) -> Result<Option<CredentialDocument>> {
    CredentialDocumentLoader::new(config).load(ctx).await
}

#[tokio::test]
async fn test_load_from_raw_content() -> Result<()> {
    let ctx = create_test_context_with_env(None, &[]);
    let config = Config::new().with_credential_content(AUTHORIZED_USER_JSON);

    let doc = load(config, &ctx).await?.expect("document must be loaded");

    assert_eq!(doc.credential_type(), Some(AUTHORIZED_USER_TYPE));
    assert_eq!(doc.client_id(), Some("cid"));
    assert_eq!(doc.client_secret(), Some("secret"));
    assert_eq!(doc.refresh_token(), Some("rtok"));
    assert_eq!(doc.client_email(), None);
    Ok(())
}

#[tokio::test]
async fn test_load_from_base64_content() -> Result<()> {
    let ctx = create_test_context_with_env(None, &[]);
    let config =
        Config::new().with_credential_content(base64_encode(SERVICE_ACCOUNT_JSON.as_bytes()));

    let doc = load(config, &ctx).await?.expect("document must be loaded");

    assert_eq!(doc, SERVICE_ACCOUNT_JSON.parse::<CredentialDocument>()?);
    Ok(())
}

#[test_case("   " ; "blank")]
#[test_case("" ; "empty")]
#[tokio::test]
async fn test_load_from_empty_content(content: &str) {
    let ctx = create_test_context_with_env(None, &[]);
    let config = Config::new().with_credential_content(content);

    let err = load(config, &ctx).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[test_case(r#"{"type": "service_account""# ; "truncated json")]
#[test_case("bm90IGFuIG9iamVjdA==" ; "base64 of non json")]
#[test_case("!!!" ; "invalid base64")]
#[tokio::test]
async fn test_load_from_malformed_content(content: &str) {
    let ctx = create_test_context_with_env(None, &[]);
    let config = Config::new().with_credential_content(content);

    let err = load(config, &ctx).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}

#[tokio::test]
async fn test_content_wins_over_path() -> Result<()> {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let path = dir.path().join("sa.json");
    write_file(&path, SERVICE_ACCOUNT_JSON);

    let ctx = create_test_context_with_env(None, &[]);
    let config = Config::new()
        .with_credential_content(AUTHORIZED_USER_JSON)
        .with_credential_path(path.to_string_lossy());

    let doc = load(config, &ctx).await?.expect("document must be loaded");
    assert_eq!(doc.credential_type(), Some(AUTHORIZED_USER_TYPE));
    Ok(())
}

#[tokio::test]
async fn test_load_from_path() -> Result<()> {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let path = dir.path().join("sa.json");
    write_file(&path, SERVICE_ACCOUNT_JSON);

    let ctx = create_test_context_with_env(None, &[]);
    let config = Config::new().with_credential_path(path.to_string_lossy());

    let doc = load(config, &ctx).await?.expect("document must be loaded");
    assert_eq!(doc.credential_type(), Some(SERVICE_ACCOUNT_TYPE));
    assert_eq!(
        doc.client_email(),
        Some("svc@my-project.iam.gserviceaccount.com")
    );
    Ok(())
}

#[tokio::test]
async fn test_load_from_path_in_home_dir() -> Result<()> {
    let home = tempfile::tempdir().expect("tempdir must be created");
    write_file(&home.path().join("creds/user.json"), AUTHORIZED_USER_JSON);

    let ctx = create_test_context_with_env(Some(home.path()), &[]);
    let config = Config::new().with_credential_path("~/creds/user.json");

    let doc = load(config, &ctx).await?.expect("document must be loaded");
    assert_eq!(doc.refresh_token(), Some("rtok"));
    Ok(())
}

#[tokio::test]
async fn test_load_from_path_without_home_dir() {
    let ctx = create_test_context_with_env(None, &[]);
    let config = Config::new().with_credential_path("~/creds/user.json");

    let err = load(config, &ctx).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[tokio::test]
async fn test_load_from_missing_path() {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let path = dir.path().join("missing.json");

    let ctx = create_test_context_with_env(None, &[]);
    let config = Config::new().with_credential_path(path.to_string_lossy());

    let err = load(config, &ctx).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}

#[tokio::test]
async fn test_load_from_env() -> Result<()> {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let path = dir.path().join("sa.json");
    write_file(&path, SERVICE_ACCOUNT_JSON);
    let path = path.to_string_lossy().to_string();

    let ctx = create_test_context_with_env(
        None,
        &[("GOOGLE_APPLICATION_CREDENTIALS", path.as_str())],
    );

    let doc = load(Config::new(), &ctx).await?.expect("document must be loaded");
    assert_eq!(doc.private_key_id(), Some("abc123"));

    let doc = load(Config::from_env(&ctx), &ctx)
        .await?
        .expect("document must be loaded");
    assert_eq!(doc.private_key_id(), Some("abc123"));
    Ok(())
}

#[tokio::test]
async fn test_load_from_env_disabled() -> Result<()> {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let path = dir.path().join("sa.json");
    write_file(&path, SERVICE_ACCOUNT_JSON);
    let path = path.to_string_lossy().to_string();

    let ctx = create_test_context_with_env(
        None,
        &[("GOOGLE_APPLICATION_CREDENTIALS", path.as_str())],
    );
    let config = Config::new().with_disable_env();

    assert_eq!(load(config, &ctx).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_load_from_env_with_missing_file_falls_through() -> Result<()> {
    let config_home = tempfile::tempdir().expect("tempdir must be created");
    write_file(
        &config_home
            .path()
            .join("gcloud/application_default_credentials.json"),
        AUTHORIZED_USER_JSON,
    );
    let config_home_path = config_home.path().to_string_lossy().to_string();

    let ctx = create_test_context_with_env(
        None,
        &[
            (
                "GOOGLE_APPLICATION_CREDENTIALS",
                "/nonexistent/credfile/sa.json",
            ),
            ("XDG_CONFIG_HOME", config_home_path.as_str()),
        ],
    );

    let doc = load(Config::new(), &ctx).await?.expect("document must be loaded");
    assert_eq!(doc.credential_type(), Some(AUTHORIZED_USER_TYPE));
    Ok(())
}

#[tokio::test]
async fn test_load_from_env_with_malformed_file() {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let path = dir.path().join("sa.json");
    write_file(&path, r#""not an object""#);
    let path = path.to_string_lossy().to_string();

    let ctx = create_test_context_with_env(
        None,
        &[("GOOGLE_APPLICATION_CREDENTIALS", path.as_str())],
    );

    let err = load(Config::new(), &ctx).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}

#[test_case("APPDATA", "" ; "appdata")]
#[test_case("XDG_CONFIG_HOME", "" ; "xdg config home")]
#[test_case("HOME", "/.config" ; "home")]
#[tokio::test]
async fn test_load_from_well_known_location(env: &str, suffix: &str) {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let root = dir.path().to_string_lossy().to_string();
    write_file(
        &dir.path()
            .join(format!(".{suffix}/gcloud/application_default_credentials.json")),
        AUTHORIZED_USER_JSON,
    );

    let ctx = create_test_context_with_env(None, &[(env, root.as_str())]);

    let doc = load(Config::new(), &ctx)
        .await
        .expect("load must succeed")
        .expect("document must be loaded");
    assert_eq!(doc.client_secret(), Some("secret"));
}

#[tokio::test]
async fn test_appdata_wins_over_home() -> Result<()> {
    let appdata = tempfile::tempdir().expect("tempdir must be created");
    let home = tempfile::tempdir().expect("tempdir must be created");
    write_file(
        &appdata
            .path()
            .join("gcloud/application_default_credentials.json"),
        SERVICE_ACCOUNT_JSON,
    );
    write_file(
        &home
            .path()
            .join(".config/gcloud/application_default_credentials.json"),
        AUTHORIZED_USER_JSON,
    );
    let appdata_path = appdata.path().to_string_lossy().to_string();
    let home_path = home.path().to_string_lossy().to_string();

    let ctx = create_test_context_with_env(
        None,
        &[("APPDATA", appdata_path.as_str()), ("HOME", home_path.as_str())],
    );

    let doc = load(Config::new(), &ctx).await?.expect("document must be loaded");
    assert_eq!(doc.credential_type(), Some(SERVICE_ACCOUNT_TYPE));
    Ok(())
}

#[tokio::test]
async fn test_load_from_well_known_location_with_malformed_file() {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    write_file(
        &dir.path().join("gcloud/application_default_credentials.json"),
        r#""not an object""#,
    );
    let root = dir.path().to_string_lossy().to_string();

    let ctx = create_test_context_with_env(None, &[("XDG_CONFIG_HOME", root.as_str())]);

    let err = load(Config::new(), &ctx).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}

#[tokio::test]
async fn test_load_from_well_known_location_disabled() -> Result<()> {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    write_file(
        &dir.path().join("gcloud/application_default_credentials.json"),
        AUTHORIZED_USER_JSON,
    );
    let root = dir.path().to_string_lossy().to_string();

    let ctx = create_test_context_with_env(None, &[("XDG_CONFIG_HOME", root.as_str())]);
    let config = Config::new().with_disable_well_known_location();

    assert_eq!(load(config, &ctx).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_load_nothing() -> Result<()> {
    let dir = tempfile::tempdir().expect("tempdir must be created");
    let root = dir.path().to_string_lossy().to_string();

    let ctx = create_test_context_with_env(None, &[("XDG_CONFIG_HOME", root.as_str())]);

    assert_eq!(load(Config::new(), &ctx).await?, None);
    assert_eq!(load(Config::new(), &Context::new()).await?, None);
    Ok(())
}
