//! Public verification page. Clients land here from the emailed link; the
//! page shows order progress and, once ready, the translated documents.
//! Internal notes never reach this page.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::VerificationProps;
pub use state::VerificationPage;

use common::model::order::TranslationOrder;
use common::model::settings::CompanySettings;

impl Component for VerificationPage {
    type Message = Msg;
    type Properties = VerificationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        VerificationPage::new()
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
            fetch_order(ctx.link().clone(), ctx.props().token.clone());
            fetch_company(ctx.link().clone());
        }
    }
}

pub(crate) fn fetch_order(link: yew::html::Scope<VerificationPage>, token: String) {
    spawn_local(async move {
        let response = Request::get(&format!("/api/verificar/{}", token))
            .send()
            .await;
        match response {
            Ok(resp) if resp.status() == 200 => {
                match resp.json::<TranslationOrder>().await {
                    Ok(order) => link.send_message(Msg::SetOrder(Box::new(order))),
                    Err(_) => link.send_message(Msg::LoadFailed),
                }
            }
            Ok(resp) if resp.status() == 404 => link.send_message(Msg::TokenInvalid),
            _ => link.send_message(Msg::LoadFailed),
        }
    });
}

fn fetch_company(link: yew::html::Scope<VerificationPage>) {
    spawn_local(async move {
        let response = Request::get("/api/company").send().await;
        if let Ok(resp) = response {
            if resp.status() == 200 {
                if let Ok(settings) = resp.json::<CompanySettings>().await {
                    link.send_message(Msg::SetCompany(Box::new(settings)));
                }
            }
        }
        // The contact block falls back to defaults when this fails.
    });
}
