// logging_service/src/log.rs
use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slog::{info, o, warn, Discard, Drain, Logger};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A transient confirmation shown after a user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
            created_at: Utc::now(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            variant: ToastVariant::Destructive,
            ..Toast::new(title, description)
        }
    }
}

/// Receives every toast raised by the services.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, toast: Toast);
}

/// Logs toasts through slog and keeps the most recent ones for inspection.
pub struct LogService {
    logger: Logger,
    recent: Arc<RwLock<VecDeque<Toast>>>,
    capacity: usize,
}

#[async_trait]
impl NotificationSink for LogService {
    async fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => {
                info!(self.logger, "toast"; "title" => &toast.title, "description" => &toast.description, "id" => %toast.id)
            }
            ToastVariant::Destructive => {
                warn!(self.logger, "toast"; "title" => &toast.title, "description" => &toast.description, "id" => %toast.id)
            }
        }

        let mut recent = self.recent.write().await;
        if recent.len() == self.capacity {
            recent.pop_front();
        }
        recent.push_back(toast);
    }
}

impl LogService {
    /// Terminal logger with an async drain.
    pub fn new(capacity: usize) -> Self {
        let decorator = slog_term::TermDecorator::new().build();
        let drain = slog_term::FullFormat::new(decorator).build().fuse();
        let drain = slog_async::Async::new(drain).build().fuse();
        let logger = Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")));

        Self::with_logger(logger, capacity)
    }

    /// Keeps toasts without writing anything to the terminal.
    pub fn silent(capacity: usize) -> Self {
        Self::with_logger(Logger::root(Discard, o!()), capacity)
    }

    pub fn with_logger(logger: Logger, capacity: usize) -> Self {
        LogService {
            logger,
            recent: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Toasts still held, oldest first.
    pub async fn recent(&self) -> Vec<Toast> {
        self.recent.read().await.iter().cloned().collect()
    }

    pub async fn last(&self) -> Option<Toast> {
        self.recent.read().await.back().cloned()
    }

    pub async fn clear(&self) {
        self.recent.write().await.clear();
    }
}
