use yew::prelude::*;

use super::messages::Msg;
use super::state::VerificationPage;

pub fn update(
    component: &mut VerificationPage,
    ctx: &Context<VerificationPage>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetOrder(order) => {
            component.order = Some(*order);
            component.load_error = false;
            component.token_invalid = false;
            true
        }
        Msg::SetCompany(settings) => {
            component.company = Some(*settings);
            true
        }
        Msg::TokenInvalid => {
            component.token_invalid = true;
            true
        }
        Msg::LoadFailed => {
            component.load_error = true;
            true
        }
        Msg::Retry => {
            component.load_error = false;
            super::fetch_order(ctx.link().clone(), ctx.props().token.clone());
            false
        }
    }
}
