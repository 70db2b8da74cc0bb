use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, error};

use crate::listings::VacancySource;

/// Display state of the active-vacancy count on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateStat {
    Loading,
    Failed,
    Loaded(u64),
}

impl AggregateStat {
    pub fn label(self) -> String {
        match self {
            Self::Loading => "Loading...".to_string(),
            Self::Failed => "Error".to_string(),
            Self::Loaded(count) => format!("{count}+"),
        }
    }

    pub const fn state_name(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Failed => "error",
            Self::Loaded(_) => "loaded",
        }
    }

    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn payload(self) -> StatPayload {
        StatPayload {
            state: self.state_name(),
            label: self.label(),
            count: match self {
                Self::Loaded(count) => Some(count),
                Self::Loading | Self::Failed => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatPayload {
    pub state: &'static str,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// One-shot vacancy count fetch. The request is issued once when the cell is
/// spawned and is never retried or cancelled.
#[derive(Debug)]
pub struct StatCell {
    receiver: watch::Receiver<AggregateStat>,
}

impl StatCell {
    pub fn spawn<S>(source: Arc<S>) -> Self
    where
        S: VacancySource + ?Sized + 'static,
    {
        let (sender, receiver) = watch::channel(AggregateStat::Loading);

        tokio::spawn(async move {
            let next = match source.total_active_vacancies().await {
                Ok(count) => {
                    debug!(count, "fetched total active vacancies");
                    AggregateStat::Loaded(count)
                }
                Err(err) => {
                    error!(error = %err, "error fetching total vacancies");
                    AggregateStat::Failed
                }
            };
            // The page may already have rendered without waiting for us.
            let _ = sender.send(next);
        });

        Self { receiver }
    }

    pub fn current(&self) -> AggregateStat {
        *self.receiver.borrow()
    }

    /// Waits up to `deadline` for the fetch to finish and returns whatever state the cell is in.
    pub async fn settle(&mut self, deadline: Duration) -> AggregateStat {
        let settled = tokio::time::timeout(
            deadline,
            self.receiver.wait_for(|stat| !stat.is_loading()),
        )
        .await
        .ok()
        .and_then(|result| result.ok().map(|stat| *stat));

        settled.unwrap_or_else(|| self.current())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub value: String,
    pub label: &'static str,
    pub description: &'static str,
}

/// The three landing-page highlight cards; only the first one is live data.
pub fn stat_cards(active_vacancies: AggregateStat) -> Vec<StatCard> {
    vec![
        StatCard {
            value: active_vacancies.label(),
            label: "Active Apprenticeships",
            description: "Updated in real-time with opportunities from companies across the UK.",
        },
        StatCard {
            value: "FREE".to_string(),
            label: "AI CV Optimisation",
            description: "Get instant feedback in under 20 seconds!",
        },
        StatCard {
            value: "24/7".to_string(),
            label: "Real-Time Notifications",
            description: "Get instant alerts on new apprenticeships anytime, anywhere.",
        },
    ]
}
