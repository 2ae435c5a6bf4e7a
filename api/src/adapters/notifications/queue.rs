//! In-memory invite notification queue

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::ports::{InviteNotification, InviteNotifier};
use crate::error::NotificationError;

/// Queues notifications on an unbounded tokio channel
///
/// The receiving half is consumed by `NotificationWorker::run`.
#[derive(Clone)]
pub struct QueueNotifier {
    tx: UnboundedSender<InviteNotification>,
}

impl QueueNotifier {
    pub fn new() -> (Self, UnboundedReceiver<InviteNotification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl InviteNotifier for QueueNotifier {
    fn enqueue(&self, notification: InviteNotification) -> Result<(), NotificationError> {
        self.tx
            .send(notification)
            .map_err(|_| NotificationError::QueueClosed)
    }
}
