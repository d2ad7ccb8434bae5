use gloo_timers::callback::Interval;

use common::model::notification::Notification;

/// State for the header bell: the loaded notifications, whether the
/// dropdown is open, and the polling interval handle.
pub struct NotificationBell {
    pub notifications: Vec<Notification>,
    pub open: bool,
    pub poll: Option<Interval>,
}

impl NotificationBell {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            open: false,
            poll: None,
        }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }
}
