mod common;

use std::time::Duration;

use common::{closed_port_url, png_bytes, sample_image, StubServer};
use imgfetch::loader::{ImageLoader, LoadError, LoadState};

fn loader() -> ImageLoader {
    ImageLoader::new(reqwest::Client::new())
}

#[tokio::test]
async fn empty_input_fails_without_loading() {
    let loader = loader();

    assert!(loader.request_load("").is_none());
    assert_eq!(loader.state(), LoadState::Failed(LoadError::InvalidUrl));
    assert_eq!(loader.state().message().as_deref(), Some("Invalid URL"));
}

#[tokio::test]
async fn malformed_input_never_reaches_the_network() {
    let server = StubServer::start("image/png", png_bytes(&sample_image()), Duration::ZERO).await;
    let loader = loader();

    // host:port without a scheme is not an absolute URL
    let bad = server.base_url.trim_start_matches("http://").to_string();
    assert!(loader.request_load(&bad).is_none());
    assert!(loader.request_load("not a url").is_none());

    assert_eq!(loader.state(), LoadState::Failed(LoadError::InvalidUrl));
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn valid_png_goes_loading_then_loaded() {
    let img = sample_image();
    let server = StubServer::start("image/png", png_bytes(&img), Duration::ZERO).await;
    let loader = loader();
    assert_eq!(loader.state(), LoadState::Idle);

    let handle = loader.request_load(&server.url("/cat.png")).unwrap();
    assert_eq!(loader.state(), LoadState::Loading);

    handle.await.unwrap();
    let state = loader.state();
    let loaded = state.image().expect("image should be loaded");
    assert_eq!(loaded.to_rgb8(), img.to_rgb8());
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn html_body_fails_to_decode() {
    let server = StubServer::start(
        "text/html",
        b"<html><body>not an image</body></html>".to_vec(),
        Duration::ZERO,
    )
    .await;
    let loader = loader();

    let handle = loader.request_load(&server.url("/cat.png")).unwrap();
    assert!(loader.state().is_loading());
    handle.await.unwrap();

    assert_eq!(loader.state(), LoadState::Failed(LoadError::Decode));
    assert_eq!(loader.state().message().as_deref(), Some("Failed to load image"));
}

#[tokio::test]
async fn connection_failure_reports_transport_error() {
    let loader = loader();

    let handle = loader.request_load(&closed_port_url().await).unwrap();
    assert!(loader.state().is_loading());
    handle.await.unwrap();

    match loader.state() {
        LoadState::Failed(err @ LoadError::Transport(_)) => {
            assert!(err.to_string().starts_with("Error: "), "got {err}");
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn new_request_clears_previous_result() {
    let server = StubServer::start("image/png", png_bytes(&sample_image()), Duration::ZERO).await;
    let loader = loader();

    let _ = loader.request_load("");
    assert!(loader.state().error().is_some());

    let handle = loader.request_load(&server.url("/a.png")).unwrap();
    assert_eq!(loader.state(), LoadState::Loading);
    assert!(loader.state().error().is_none());
    handle.await.unwrap();
    assert!(loader.state().image().is_some());
}

#[tokio::test]
async fn superseded_response_is_discarded() {
    let slow = StubServer::start(
        "image/png",
        png_bytes(&sample_image()),
        Duration::from_millis(300),
    )
    .await;
    let fast = StubServer::start("text/html", b"<html></html>".to_vec(), Duration::ZERO).await;
    let loader = loader();

    let first = loader.request_load(&slow.url("/old.png")).unwrap();
    let second = loader.request_load(&fast.url("/new.png")).unwrap();

    second.await.unwrap();
    assert_eq!(loader.state(), LoadState::Failed(LoadError::Decode));

    // The older, slower response arrives last and must not win
    first.await.unwrap();
    assert_eq!(loader.state(), LoadState::Failed(LoadError::Decode));
    assert_eq!(loader.snapshot().request, 2);
}

#[tokio::test]
async fn reset_orphans_in_flight_request() {
    let slow = StubServer::start(
        "image/png",
        png_bytes(&sample_image()),
        Duration::from_millis(100),
    )
    .await;
    let loader = loader();

    let handle = loader.request_load(&slow.url("/cat.png")).unwrap();
    loader.reset();
    handle.await.unwrap();

    assert_eq!(loader.state(), LoadState::Idle);
}

#[tokio::test]
async fn subscribers_see_the_final_state() {
    let server = StubServer::start("image/png", png_bytes(&sample_image()), Duration::ZERO).await;
    let loader = loader();
    let mut rx = loader.subscribe();

    let handle = loader.request_load(&server.url("/cat.png")).unwrap();
    assert!(rx.borrow_and_update().state.is_loading());

    handle.await.unwrap();
    assert!(rx.has_changed().unwrap());
    let snap = rx.borrow_and_update().clone();
    assert_eq!(snap.request, 1);
    assert!(snap.state.image().is_some());
}
