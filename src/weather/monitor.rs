//! Fixed-interval polling of the weather upstream.
//!
//! One fetch per tick, results published over a watch channel as display
//! states. A failed fetch publishes the neutral unavailable message and
//! waits for the next tick; there is no error-triggered retry.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::warn;

use super::client::WeatherClient;
use super::types::CurrentConditions;

/// What the widget shows when conditions could not be loaded.
pub const UNAVAILABLE_MESSAGE: &str = "No se pudo cargar el clima";

/// Display state of the weather widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherView {
    /// First fetch not finished yet.
    Loading,
    Ready(CurrentConditions),
    Unavailable { message: String },
}

/// Owns the poll loop and the published view.
pub struct WeatherMonitor {
    client: Arc<WeatherClient>,
    view: watch::Sender<WeatherView>,
}

impl WeatherMonitor {
    pub fn new(client: WeatherClient) -> Self {
        let (view, _) = watch::channel(WeatherView::Loading);
        Self {
            client: Arc::new(client),
            view,
        }
    }

    /// A receiver for the current display state. Starts at `Loading`.
    pub fn subscribe(&self) -> watch::Receiver<WeatherView> {
        self.view.subscribe()
    }

    /// Fetch once and publish the outcome.
    pub async fn refresh_once(&self) {
        let next = match self.client.fetch_current().await {
            Ok(conditions) => WeatherView::Ready(conditions),
            Err(err) => {
                warn!(error = %err, "could not refresh weather conditions");
                WeatherView::Unavailable {
                    message: UNAVAILABLE_MESSAGE.to_string(),
                }
            }
        };
        self.view.send_replace(next);
    }

    /// Poll forever at the configured interval. The first fetch happens
    /// immediately.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.client.config().poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.refresh_once().await;
        }
    }
}
