//! Application shell: header navigation plus a state-driven router over the
//! admin pages and the public verification page.

use yew::html::Scope;
use yew::prelude::*;

use crate::components::company_page::CompanyPage;
use crate::components::dashboard::Dashboard;
use crate::components::notifications::NotificationBell;
use crate::components::order_detail::OrderDetail;
use crate::components::templates_page::TemplatesPage;
use crate::components::verification::VerificationPage;

/// The pages the shell can show. `Verification` is the only one reachable
/// without the admin header; clients land on it from the emailed link.
#[derive(Clone, PartialEq)]
pub enum Route {
    Dashboard,
    OrderDetail(String),
    Templates,
    Company,
    Verification(String),
}

pub enum AppMsg {
    Navigate(Route),
}

pub struct App {
    route: Route,
}

/// Maps the initial browser path to a route so emailed verification links
/// open directly on the public page.
fn initial_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    match path.strip_prefix("/verificar/") {
        Some(token) if !token.is_empty() => Route::Verification(token.to_string()),
        _ => Route::Dashboard,
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            route: initial_route(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(route) => {
                self.route = route;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(AppMsg::Navigate);

        if let Route::Verification(token) = &self.route {
            return html! {
                <VerificationPage token={token.clone()} />
            };
        }

        html! {
            <div class="app-root">
                { self.build_header(ctx) }
                <main class="app-main">
                    {
                        match &self.route {
                            Route::Dashboard => html! {
                                <Dashboard on_navigate={on_navigate} />
                            },
                            Route::OrderDetail(id) => html! {
                                <OrderDetail order_id={id.clone()} on_navigate={on_navigate} />
                            },
                            Route::Templates => html! { <TemplatesPage /> },
                            Route::Company => html! { <CompanyPage /> },
                            Route::Verification(_) => html! {},
                        }
                    }
                </main>
            </div>
        }
    }
}

impl App {
    fn build_header(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <header class="app-header">
                <span class="app-title">{"Consola de Traducciones"}</span>
                <nav>
                    { self.nav_button(link, "Órdenes", Route::Dashboard) }
                    { self.nav_button(link, "Plantillas", Route::Templates) }
                    { self.nav_button(link, "Empresa", Route::Company) }
                </nav>
                <NotificationBell />
            </header>
        }
    }

    fn nav_button(&self, link: &Scope<Self>, label: &str, route: Route) -> Html {
        let active = match (&self.route, &route) {
            (Route::Dashboard, Route::Dashboard) => true,
            (Route::OrderDetail(_), Route::Dashboard) => true,
            (Route::Templates, Route::Templates) => true,
            (Route::Company, Route::Company) => true,
            _ => false,
        };
        let target = route.clone();
        html! {
            <button
                class={classes!("nav-btn", if active { "active" } else { "" })}
                onclick={link.callback(move |_| AppMsg::Navigate(target.clone()))}
            >
                { label }
            </button>
        }
    }
}
