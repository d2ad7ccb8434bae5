//! Status and priority badges shared by the dashboard, the order detail
//! page and the public verification page.

use common::model::order::{status_config, ProcessingPriority};
use yew::prelude::*;

/// Renders the status badge for a raw status value. Unknown statuses render
/// with the raw value and the default style instead of disappearing.
pub fn status_badge(raw_status: &str) -> Html {
    let (label, css_class) = status_config(raw_status);
    html! {
        <span class={classes!("badge", css_class)}>{ label }</span>
    }
}

/// Renders the priority badge derived from the processing time in days.
pub fn priority_badge(processing_days: i64) -> Html {
    let priority = ProcessingPriority::from_days(processing_days);
    html! {
        <span class={classes!("badge", priority.css_class())}>
            { ProcessingPriority::badge_label(processing_days) }
        </span>
    }
}
