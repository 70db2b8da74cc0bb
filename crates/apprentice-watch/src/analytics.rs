use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.into(),
        }
    }

    pub fn listing_viewed(label: impl Into<String>) -> Self {
        Self::new("apprenticeship", "view_details", label)
    }
}

/// Outbound analytics hook.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics transport unavailable: {0}")]
    Transport(String),
}

/// Dispatches without waiting on the sink; failures are logged and dropped.
/// Callers normally discard the handle.
pub fn fire_and_forget(sink: Arc<dyn AnalyticsSink>, event: AnalyticsEvent) -> JoinHandle<()> {
    tokio::spawn(async move {
        let label = event.label.clone();
        if let Err(err) = sink.record(event) {
            warn!(error = %err, %label, "analytics event dropped");
        }
    })
}

/// Emits events as structured log records.
#[derive(Debug, Default, Clone)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn record(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        info!(
            category = %event.category,
            action = %event.action,
            label = %event.label,
            "analytics event"
        );
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryAnalytics {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl AnalyticsSink for MemoryAnalytics {
    fn record(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        let mut guard = self
            .events
            .lock()
            .map_err(|_| AnalyticsError::Transport("event buffer poisoned".to_string()))?;
        guard.push(event);
        Ok(())
    }
}

impl MemoryAnalytics {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct BrokenSink;

    impl AnalyticsSink for BrokenSink {
        fn record(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
            Err(AnalyticsError::Transport("offline".to_string()))
        }
    }

    #[test]
    fn listing_view_event_uses_fixed_category_and_action() {
        let event = AnalyticsEvent::listing_viewed("Data Analyst - Acme");
        assert_eq!(event.category, "apprenticeship");
        assert_eq!(event.action, "view_details");
        assert_eq!(event.label, "Data Analyst - Acme");
    }

    #[tokio::test]
    async fn fire_and_forget_reaches_sink() {
        let sink = MemoryAnalytics::default();
        fire_and_forget(
            Arc::new(sink.clone()),
            AnalyticsEvent::new("test", "ping", "one"),
        );

        for _ in 0..50 {
            if !sink.events().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(sink.events(), vec![AnalyticsEvent::new("test", "ping", "one")]);
    }

    #[tokio::test]
    async fn sink_failure_is_absorbed_by_the_dispatch_task() {
        let dispatch =
            fire_and_forget(Arc::new(BrokenSink), AnalyticsEvent::new("test", "ping", "two"));

        tokio::time::timeout(Duration::from_secs(1), dispatch)
            .await
            .expect("dispatch finishes")
            .expect("dispatch task does not panic");
    }
}
