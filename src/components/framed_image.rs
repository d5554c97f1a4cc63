//! Framed Image Component
//!
//! `<img>` wrapper with either a fill mode (cover the parent box)
//! or fixed pixel dimensions.

use leptos::prelude::*;

#[component]
pub fn FramedImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] width: Option<u32>,
    #[prop(into, optional)] height: Option<u32>,
    #[prop(optional)] fill: bool,
) -> impl IntoView {
    let style = if fill {
        "position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;".to_string()
    } else {
        let mut style = String::new();
        if let Some(w) = width {
            style.push_str(&format!("width: {w}px;"));
        }
        if let Some(h) = height {
            style.push_str(&format!("height: {h}px;"));
        }
        style
    };

    view! { <img src=src alt=alt class=class style=style /> }
}
