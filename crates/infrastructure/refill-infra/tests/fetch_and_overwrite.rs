use axum::{body::Body, routing::get, Router};
use camino::Utf8PathBuf;
use refill_config::HttpTimeouts;
use refill_core::FailureKind;
use refill_infra::net::{default_http_client, Fetcher, ReplaceError};
use std::net::SocketAddr;
use tempfile::tempdir;

async fn start_server() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route("/files/a.txt", get(|| async { Body::from("fresh contents") }))
        .route("/files/empty.txt", get(|| async { Body::empty() }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

fn fetcher() -> Fetcher {
    Fetcher::new(default_http_client(HttpTimeouts::default()).unwrap())
}

#[tokio::test]
async fn success_replaces_contents() {
    let (addr, handle) = start_server().await;
    let dir = tempdir().unwrap();
    let target = Utf8PathBuf::from_path_buf(dir.path().join("a.txt")).unwrap();
    std::fs::write(&target, b"old contents that are longer than the new ones").unwrap();

    let written = fetcher()
        .fetch_and_overwrite(&format!("http://{addr}/files/a.txt"), &target)
        .await
        .unwrap();

    assert_eq!(written, 14);
    assert_eq!(std::fs::read(&target).unwrap(), b"fresh contents");
    handle.abort();
}

#[tokio::test]
async fn empty_body_truncates_file() {
    let (addr, handle) = start_server().await;
    let dir = tempdir().unwrap();
    let target = Utf8PathBuf::from_path_buf(dir.path().join("empty.txt")).unwrap();
    std::fs::write(&target, b"something").unwrap();

    let written = fetcher()
        .fetch_and_overwrite(&format!("http://{addr}/files/empty.txt"), &target)
        .await
        .unwrap();

    assert_eq!(written, 0);
    assert!(std::fs::read(&target).unwrap().is_empty());
    handle.abort();
}

#[tokio::test]
async fn not_found_leaves_file_untouched() {
    let (addr, handle) = start_server().await;
    let dir = tempdir().unwrap();
    let target = Utf8PathBuf::from_path_buf(dir.path().join("b.txt")).unwrap();
    std::fs::write(&target, b"keep me").unwrap();

    let err = fetcher()
        .fetch_and_overwrite(&format!("http://{addr}/files/b.txt"), &target)
        .await
        .unwrap_err();

    assert!(matches!(err, ReplaceError::Status(s) if s.as_u16() == 404));
    assert_eq!(err.kind(), FailureKind::Fetch);
    assert_eq!(std::fs::read(&target).unwrap(), b"keep me");
    handle.abort();
}

#[tokio::test]
async fn vanished_target_is_a_write_error_and_not_recreated() {
    let (addr, handle) = start_server().await;
    let dir = tempdir().unwrap();
    let target = Utf8PathBuf::from_path_buf(dir.path().join("gone.txt")).unwrap();

    let err = fetcher()
        .fetch_and_overwrite(&format!("http://{addr}/files/a.txt"), &target)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Write);
    assert!(!target.exists());
    handle.abort();
}

#[tokio::test]
async fn malformed_url_is_a_fetch_error() {
    let dir = tempdir().unwrap();
    let target = Utf8PathBuf::from_path_buf(dir.path().join("c.txt")).unwrap();
    std::fs::write(&target, b"keep me").unwrap();

    let err = fetcher()
        .fetch_and_overwrite("not a url/c.txt", &target)
        .await
        .unwrap_err();

    assert!(matches!(err, ReplaceError::Transport(_)));
    assert_eq!(err.kind(), FailureKind::Fetch);
    assert!(!err.describe().is_empty());
    assert_eq!(std::fs::read(&target).unwrap(), b"keep me");
}
