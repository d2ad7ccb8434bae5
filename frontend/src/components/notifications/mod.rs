//! Notification bell: unread counter in the header plus a dropdown with the
//! latest notifications. The list refreshes on a fixed polling interval
//! while the component is mounted.

use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::NotificationBell;

use common::model::notification::Notification;

const POLL_INTERVAL_MS: u32 = 30_000;

impl Component for NotificationBell {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NotificationBell::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            fetch_notifications(ctx.link().clone());
            let link = ctx.link().clone();
            self.poll = Some(Interval::new(POLL_INTERVAL_MS, move || {
                fetch_notifications(link.clone());
            }));
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the interval stops the polling.
        self.poll = None;
    }
}

pub(crate) fn fetch_notifications(link: yew::html::Scope<NotificationBell>) {
    spawn_local(async move {
        let response = Request::get("/api/notifications").send().await;
        match response {
            Ok(resp) if resp.status() == 200 => {
                if let Ok(notifications) = resp.json::<Vec<Notification>>().await {
                    link.send_message(Msg::SetNotifications(notifications));
                }
            }
            _ => gloo_console::error!("No se pudieron cargar las notificaciones"),
        }
    });
}
