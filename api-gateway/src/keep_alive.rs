use medley_shared::KeepAliveConfig;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

// Periodically pings the service's own public URL so hosting platforms
// with an idle-shutdown policy keep the process alive. Failures are
// logged and absorbed; the loop only exits on the shutdown signal.
pub struct KeepAlivePinger {
    http_client: reqwest::Client,
    target_url: String,
    interval: Duration,
}

pub struct KeepAliveHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl KeepAliveHandle {
    /// Signals the loop to stop and waits for it to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

impl KeepAlivePinger {
    pub fn new(config: &KeepAliveConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            target_url: config.self_url.clone(),
            interval: Duration::from_secs(config.interval_secs),
        }
    }

    #[cfg(test)]
    fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn spawn(self) -> KeepAliveHandle {
        info!(
            "Starting keep-alive pinger against {} every {}s",
            self.target_url,
            self.interval.as_secs()
        );

        let (shutdown, mut signal) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut interval = time::interval(self.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; consume it so the
            // loop sleeps a full interval before the first ping.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        self.ping_once().await;
                    }
                    _ = signal.changed() => {
                        info!("Keep-alive pinger stopping");
                        break;
                    }
                }
            }
        });

        KeepAliveHandle { shutdown, task }
    }

    async fn ping_once(&self) {
        match self.http_client.get(&self.target_url).send().await {
            Ok(response) => match response.text().await {
                Ok(body) => info!("Keep-alive ping ok: {}", body.trim()),
                Err(e) => warn!("Keep-alive ping body read failed: {}", e),
            },
            Err(e) => warn!("Keep-alive ping failed: {}", e),
        }
    }
}
