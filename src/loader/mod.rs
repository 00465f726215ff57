//! URL → HTTP GET → decoded image, published as a [`LoadSnapshot`].
//!
//! Every request gets an id from a counter stored next to the state. A
//! finished fetch only lands if its id is still the latest one, so a slow
//! response from an earlier click can never overwrite a newer result.

mod error;
mod state;

pub use error::LoadError;
pub use state::{LoadSnapshot, LoadState};

use std::sync::Arc;

use image::DynamicImage;
use reqwest::Client;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Clone)]
pub struct ImageLoader {
    client: Client,
    state: Arc<watch::Sender<LoadSnapshot>>,
}

impl ImageLoader {
    pub fn new(client: Client) -> Self {
        let (tx, _rx) = watch::channel(LoadSnapshot::default());
        Self {
            client,
            state: Arc::new(tx),
        }
    }

    /// Start loading `url_text`.
    ///
    /// Invalid input fails synchronously and returns `None`. Otherwise the
    /// state is `Loading` when this returns and the fetch runs on the
    /// returned task. Must be called from inside a tokio runtime.
    pub fn request_load(&self, url_text: &str) -> Option<JoinHandle<()>> {
        let url = match parse_url(url_text) {
            Ok(url) => url,
            Err(err) => {
                let request = self.begin(LoadState::Failed(err));
                warn!(request, input = url_text, "rejected image url");
                return None;
            }
        };

        let request = self.begin(LoadState::Loading);
        info!(request, %url, "loading image");

        let client = self.client.clone();
        let state = Arc::clone(&self.state);
        Some(tokio::spawn(async move {
            let outcome = match fetch_image(&client, url).await {
                Ok(image) => {
                    info!(request, width = image.width(), height = image.height(), "image loaded");
                    LoadState::Loaded(Arc::new(image))
                }
                Err(err) => {
                    warn!(request, error = %err, "image load failed");
                    LoadState::Failed(err)
                }
            };
            settle(&state, request, outcome);
        }))
    }

    /// Back to `Idle`; any in-flight fetch is orphaned.
    pub fn reset(&self) {
        let request = self.begin(LoadState::Idle);
        debug!(request, "load state reset");
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> LoadSnapshot {
        self.state.borrow().clone()
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().state.clone()
    }

    /// Issue a new request id and publish `state` under it in one update.
    fn begin(&self, state: LoadState) -> u64 {
        let label = state.label();
        let mut issued = 0;
        self.state.send_modify(|snap| {
            snap.request += 1;
            snap.state = state;
            issued = snap.request;
        });
        debug!(request = issued, state = label, "new request issued");
        issued
    }
}

/// Apply a finished fetch unless a newer request has been issued since.
fn settle(state: &watch::Sender<LoadSnapshot>, request: u64, outcome: LoadState) {
    let label = outcome.label();
    let applied = state.send_if_modified(|snap| {
        if snap.request != request {
            return false;
        }
        snap.state = outcome;
        true
    });
    if applied {
        debug!(request, state = label, "request settled");
    } else {
        debug!(request, state = label, "discarding superseded image result");
    }
}

/// Empty text and anything that is not an absolute, hierarchical URL is
/// rejected.
pub fn parse_url(text: &str) -> Result<Url, LoadError> {
    if text.is_empty() {
        return Err(LoadError::InvalidUrl);
    }
    let url = Url::parse(text).map_err(|_| LoadError::InvalidUrl)?;
    if url.cannot_be_a_base() {
        return Err(LoadError::InvalidUrl);
    }
    Ok(url)
}

async fn fetch_image(client: &Client, url: Url) -> Result<DynamicImage, LoadError> {
    let bytes = client
        .get(url)
        .send()
        .await
        .map_err(LoadError::transport)?
        .bytes()
        .await
        .map_err(LoadError::transport)?;

    let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(|e| {
            warn!(error = %e, "decode task aborted");
            LoadError::Decode
        })?;

    decoded.map_err(|e| {
        debug!(error = %e, "response body is not a supported image");
        LoadError::Decode
    })
}
