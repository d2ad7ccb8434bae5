//! Dashboard: order table with search, status filter, per-status counters,
//! a creation form and delete with confirmation.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DashboardProps;
pub use state::Dashboard;

use common::model::order::TranslationOrder;

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Dashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            fetch_orders(ctx.link().clone());
        }
    }
}

pub(crate) fn fetch_orders(link: yew::html::Scope<Dashboard>) {
    spawn_local(async move {
        let response = Request::get("/api/orders").send().await;
        match response {
            Ok(resp) if resp.status() == 200 => {
                match resp.json::<Vec<TranslationOrder>>().await {
                    Ok(orders) => link.send_message(Msg::SetOrders(orders)),
                    Err(_) => link.send_message(Msg::LoadFailed),
                }
            }
            _ => link.send_message(Msg::LoadFailed),
        }
    });
}
