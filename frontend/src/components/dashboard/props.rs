use yew::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Route changes are owned by the shell; the table emits them here.
    pub on_navigate: Callback<Route>,
}
