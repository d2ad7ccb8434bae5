//! Order detail page: status, progress and notes editing, translated
//! document management (upload, list, remove) and the client verification
//! link.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::OrderDetailProps;
pub use state::OrderDetail;

use common::model::order::TranslationOrder;

impl Component for OrderDetail {
    type Message = Msg;
    type Properties = OrderDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        OrderDetail::new()
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
            fetch_order(ctx.link().clone(), ctx.props().order_id.clone());
        }
    }
}

pub(crate) fn fetch_order(link: yew::html::Scope<OrderDetail>, order_id: String) {
    spawn_local(async move {
        let response = Request::get(&format!("/api/orders/{}", order_id))
            .send()
            .await;
        match response {
            Ok(resp) if resp.status() == 200 => match resp.json::<TranslationOrder>().await {
                Ok(order) => link.send_message(Msg::SetOrder(order)),
                Err(_) => link.send_message(Msg::LoadFailed),
            },
            _ => link.send_message(Msg::LoadFailed),
        }
    });
}
