//! Card Components
//!
//! Class-composing wrappers for the card surfaces used by the
//! showcase, tutoring, and contact sections.

use leptos::prelude::*;

use super::button::join_classes;

#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=join_classes(&["card", &class])>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=join_classes(&["card-header", &class])>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <h3 class=join_classes(&["card-title", &class])>{children()}</h3> }
}

#[component]
pub fn CardDescription(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <p class=join_classes(&["card-description", &class])>{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=join_classes(&["card-content", &class])>{children()}</div> }
}
