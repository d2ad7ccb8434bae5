//! Company settings page: identity and SMTP configuration, the simulated
//! SMTP test, manual backups and backup scheduling.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CompanyPage;

use common::model::settings::CompanySettings;

impl Component for CompanyPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CompanyPage::new()
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
            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::get("/api/company").send().await;
                match response {
                    Ok(resp) if resp.status() == 200 => {
                        if let Ok(settings) = resp.json::<CompanySettings>().await {
                            link.send_message(Msg::SetSettings(settings));
                        }
                    }
                    _ => gloo_console::error!("No se pudo cargar la configuración"),
                }
            });
        }
    }
}
