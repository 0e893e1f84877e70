//! Notification sink and clipboard seams

use std::collections::VecDeque;

use serde::Serialize;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyKind {
    Loading,
    Success,
    Error,
    Info,
}

/// Button attached to a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NotifyAction {
    ViewReceipt,
}

impl NotifyAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewReceipt => "View Receipt",
        }
    }
}

/// A user-visible notification.
///
/// Notifications sharing an `id` replace each other (loading -> success).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotifyKind,
    pub id: Option<String>,
    pub message: String,
    pub description: Option<String>,
    pub action: Option<NotifyAction>,
}

impl Notification {
    fn new(kind: NotifyKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            id: None,
            message: message.into(),
            description: None,
            action: None,
        }
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(NotifyKind::Loading, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotifyKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotifyKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotifyKind::Info, message)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_action(mut self, action: NotifyAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Receives notifications emitted by the page
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Bounded in-memory notification history
#[derive(Debug, Clone)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationLog {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&mut self) -> Vec<Notification> {
        self.entries.drain(..).collect()
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notification);
    }
}

/// Clipboard write access
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// Clipboard that keeps the last written text
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) {
        self.contents = Some(text.to_string());
    }
}
