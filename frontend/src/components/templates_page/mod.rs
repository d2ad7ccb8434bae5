//! Email template editor: list, edit with dirty tracking, local preview of
//! `#{variable}` placeholders, save and delete.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::TemplatesPage;

use common::model::template::EmailTemplate;

impl Component for TemplatesPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TemplatesPage::new()
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
            fetch_templates(ctx.link().clone());
        }
    }
}

pub(crate) fn fetch_templates(link: yew::html::Scope<TemplatesPage>) {
    spawn_local(async move {
        let response = Request::get("/api/templates").send().await;
        match response {
            Ok(resp) if resp.status() == 200 => {
                if let Ok(templates) = resp.json::<Vec<EmailTemplate>>().await {
                    link.send_message(Msg::SetTemplates(templates));
                }
            }
            _ => gloo_console::error!("No se pudieron cargar las plantillas"),
        }
    });
}
