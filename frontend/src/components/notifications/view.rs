use yew::html::Scope;
use yew::prelude::*;

use crate::components::feedback::format_date;

use super::messages::Msg;
use super::state::NotificationBell;

pub fn view(component: &NotificationBell, ctx: &Context<NotificationBell>) -> Html {
    let link = ctx.link();
    let unread = component.unread_count();

    html! {
        <div class="notification-bell">
            <button class="bell-btn" onclick={link.callback(|_| Msg::ToggleDropdown)}>
                {"🔔"}
                {
                    if unread > 0 {
                        html! { <span class="bell-count">{ unread }</span> }
                    } else {
                        html! {}
                    }
                }
            </button>
            {
                if component.open {
                    build_dropdown(component, link)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_dropdown(component: &NotificationBell, link: &Scope<NotificationBell>) -> Html {
    html! {
        <div class="bell-dropdown">
            <div class="bell-dropdown-header">
                <span>{"Notificaciones"}</span>
                <button
                    class="btn-link"
                    onclick={link.callback(|_| Msg::MarkAllRead)}
                >
                    {"Marcar todas como leídas"}
                </button>
            </div>
            {
                if component.notifications.is_empty() {
                    html! { <p class="bell-empty">{"Sin notificaciones."}</p> }
                } else {
                    html! {
                        <ul class="bell-list">
                            { for component.notifications.iter().map(|n| {
                                let id_read = n.id.clone();
                                let id_delete = n.id.clone();
                                html! {
                                    <li class={classes!(
                                        "bell-item",
                                        n.kind.css_class(),
                                        if n.is_read { "read" } else { "unread" },
                                    )}>
                                        <div
                                            class="bell-item-body"
                                            onclick={link.callback(move |_| Msg::MarkRead(id_read.clone()))}
                                        >
                                            <strong>{ &n.title }</strong>
                                            <p>{ &n.message }</p>
                                            <small>{ format_date(&n.created_at) }</small>
                                        </div>
                                        <button
                                            class="btn-link"
                                            onclick={link.callback(move |_| Msg::Delete(id_delete.clone()))}
                                        >
                                            {"✕"}
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}
