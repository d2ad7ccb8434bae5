use common::model::notification::Notification;

pub enum Msg {
    ToggleDropdown,
    SetNotifications(Vec<Notification>),
    MarkRead(String),
    MarkAllRead,
    Delete(String),
}
