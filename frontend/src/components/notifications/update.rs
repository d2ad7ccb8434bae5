use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::NotificationBell;

/// Mark/delete actions update the local list optimistically; the next poll
/// reconciles with the server.
pub fn update(component: &mut NotificationBell, ctx: &Context<NotificationBell>, msg: Msg) -> bool {
    match msg {
        Msg::ToggleDropdown => {
            component.open = !component.open;
            true
        }
        Msg::SetNotifications(notifications) => {
            component.notifications = notifications;
            true
        }
        Msg::MarkRead(id) => {
            if let Some(notification) =
                component.notifications.iter_mut().find(|n| n.id == id)
            {
                notification.is_read = true;
            }
            spawn_local(async move {
                let _ = Request::put(&format!("/api/notifications/{}/read", id))
                    .send()
                    .await;
            });
            true
        }
        Msg::MarkAllRead => {
            for notification in component.notifications.iter_mut() {
                notification.is_read = true;
            }
            spawn_local(async move {
                let _ = Request::put("/api/notifications/read-all").send().await;
            });
            true
        }
        Msg::Delete(id) => {
            component.notifications.retain(|n| n.id != id);
            let link = ctx.link().clone();
            spawn_local(async move {
                let _ = Request::delete(&format!("/api/notifications/{}", id))
                    .send()
                    .await;
                super::fetch_notifications(link);
            });
            true
        }
    }
}
