//! Health Monitor
//!
//! Polls the backend health endpoint on a fixed interval and reports
//! status transitions to the presentation layer. The first probe fires
//! immediately so the indicator settles right after startup.

use crate::ports::health::{ConnectionStatus, HealthProbe};
use crate::ports::ui_event::UiEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// Default gap between health probes.
pub const DEFAULT_HEALTH_INTERVAL: Duration = Duration::from_secs(30);

/// Periodic backend health poller.
///
/// Emits [`UiEvent::StatusChanged`] only when the observed status differs
/// from the previous probe, so a stable connection produces exactly one
/// event. Stops when the event receiver goes away.
pub struct HealthMonitor {
    probe: Arc<dyn HealthProbe>,
    interval: Duration,
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl HealthMonitor {
    pub fn new(
        probe: Arc<dyn HealthProbe>,
        interval: Duration,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            probe,
            interval,
            tx,
        }
    }

    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        let mut last = ConnectionStatus::Unknown;
        loop {
            ticker.tick().await;
            if self.tx.is_closed() {
                break;
            }
            let status = self.probe.check().await;
            if status != last {
                debug!("Backend status changed: {} -> {}", last, status);
                if self.tx.send(UiEvent::StatusChanged(status)).is_err() {
                    break;
                }
                last = status;
            }
        }
        debug!("Health monitor stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Probe that walks through a fixed sequence, repeating the last entry.
    struct SequenceProbe {
        statuses: Mutex<VecDeque<ConnectionStatus>>,
        last: Mutex<ConnectionStatus>,
    }

    impl SequenceProbe {
        fn new(statuses: Vec<ConnectionStatus>) -> Self {
            Self {
                statuses: Mutex::new(VecDeque::from(statuses)),
                last: Mutex::new(ConnectionStatus::Offline),
            }
        }
    }

    #[async_trait]
    impl HealthProbe for SequenceProbe {
        async fn check(&self) -> ConnectionStatus {
            match self.statuses.lock().unwrap().pop_front() {
                Some(status) => {
                    *self.last.lock().unwrap() = status;
                    status
                }
                None => *self.last.lock().unwrap(),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_probe_fires_immediately() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let probe = Arc::new(SequenceProbe::new(vec![ConnectionStatus::Online]));
        let monitor = HealthMonitor::new(probe, Duration::from_secs(30), tx);
        let handle = tokio::spawn(monitor.run());

        let event = rx.recv().await.unwrap();
        assert!(matches!(
            event,
            UiEvent::StatusChanged(ConnectionStatus::Online)
        ));
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_only_on_change() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let probe = Arc::new(SequenceProbe::new(vec![
            ConnectionStatus::Online,
            ConnectionStatus::Online,
            ConnectionStatus::Offline,
        ]));
        let monitor = HealthMonitor::new(probe, Duration::from_secs(30), tx);
        let handle = tokio::spawn(monitor.run());

        let first = rx.recv().await.unwrap();
        assert!(matches!(
            first,
            UiEvent::StatusChanged(ConnectionStatus::Online)
        ));

        // Two more ticks: one unchanged (silent), one transition
        let second = rx.recv().await.unwrap();
        assert!(matches!(
            second,
            UiEvent::StatusChanged(ConnectionStatus::Offline)
        ));
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let probe = Arc::new(SequenceProbe::new(vec![ConnectionStatus::Online]));
        let monitor = HealthMonitor::new(probe, Duration::from_secs(30), tx);
        let handle = tokio::spawn(monitor.run());

        drop(rx);
        // The next tick notices the closed channel and exits
        handle.await.unwrap();
    }
}
