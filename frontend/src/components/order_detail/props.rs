use yew::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct OrderDetailProps {
    pub order_id: String,
    pub on_navigate: Callback<Route>,
}
