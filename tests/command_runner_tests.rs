use std::path::{Path, PathBuf};
use std::sync::Arc;
use ddwebhook::enums::commands::Commands;
use ddwebhook::structs::config::config::Config;
use ddwebhook::workers::command_runner::CommandRunner;
use ddwebhook::WebhookError;
use crate::common::EchoClient;

const HOOKS_FILE: &str = r#"
[[hooks]]
name = "alerts"
url = "https://hooks.example.com/alerts"

[hooks.headers]
"X-Team" = "sre"

[[hooks]]
name = "pager"
url = "https://pager.example.com/v2/enqueue"
use_custom_payload = true
custom_payload = '{"title": "$EVENT_TITLE"}'
"#;

fn write_hooks(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("hooks.toml");
    std::fs::write(&path, content).unwrap();
    path
}

fn runner(dir: &Path, echo: &Arc<EchoClient>) -> CommandRunner {
    CommandRunner::new(Config::default(), Some(dir.join("state.json"))).with_client(echo.clone())
}

#[tokio::test]
async fn create_persists_state_and_delete_removes_it() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_hooks(dir.path(), HOOKS_FILE);
    let echo = Arc::new(EchoClient::new());
    let mut runner = runner(dir.path(), &echo);

    runner.run_command(Commands::Create { file }).await.unwrap();

    let stored = runner.state_store().load().await.unwrap().unwrap();
    assert_eq!(stored.integration.hooks.len(), 2);
    assert_eq!(stored.integration.hooks[1].use_custom_payload, Some(true));

    runner.run_command(Commands::Delete).await.unwrap();
    assert!(echo.stored().is_none());
    assert!(runner.state_store().load().await.unwrap().is_none());
}

#[tokio::test]
async fn invalid_hooks_file_never_reaches_the_api() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_hooks(
        dir.path(),
        r#"
[[hooks]]
name = "dup"
url = "https://example.com/a"

[[hooks]]
name = "dup"
url = "ftp://example.com/b"
"#,
    );
    let echo = Arc::new(EchoClient::new());

    let err = runner(dir.path(), &echo)
        .run_command(Commands::Create { file })
        .await
        .unwrap_err();

    match err {
        WebhookError::MultipleErrors { errors, .. } => assert_eq!(errors.len(), 2),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(echo.mutations(), 0);
}

#[tokio::test]
async fn read_drops_state_when_integration_is_gone() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_hooks(dir.path(), HOOKS_FILE);
    let echo = Arc::new(EchoClient::new());
    let mut first = runner(dir.path(), &echo);
    first.run_command(Commands::Create { file }).await.unwrap();

    let other = Arc::new(EchoClient::new());
    let mut second = runner(dir.path(), &other);
    second.run_command(Commands::Read).await.unwrap();

    assert!(second.state_store().load().await.unwrap().is_none());
}

#[tokio::test]
async fn import_of_missing_integration_fails() {
    let dir = tempfile::tempdir().unwrap();
    let echo = Arc::new(EchoClient::new());

    let err = runner(dir.path(), &echo)
        .run_command(Commands::Import { id: "whatever".to_string() })
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}
