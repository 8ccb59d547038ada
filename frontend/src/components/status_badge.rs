use common::display::status_badge;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: Option<AttrValue>,
}

/// A small label for a project's status. Draws nothing when there is no status.

#[function_component(StatusBadge)]
pub fn status_badge_view(props: &StatusBadgeProps) -> Html {
    let Some(badge) = status_badge(props.status.as_deref()) else { return html! {} };
    
    html! {
        <span class={badge.style.class()}>{badge.label.to_owned()}</span>
    }
}
