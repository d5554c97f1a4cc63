//! Site Header Component
//!
//! Fixed top bar with anchor navigation to the page sections.

use leptos::prelude::*;

/// Section ids and their nav labels, in page order
const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("projects", "Projects"),
    ("about", "About"),
    ("tutoring", "Tutoring"),
    ("contact", "Contact"),
];

/// Smooth-scroll to a section by element id
fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.get_element_by_id(id) {
        Some(el) => {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        None => log::warn!("nav: missing section #{id}"),
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="site-nav">
                {SECTIONS
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <a
                                class="site-nav-link"
                                href=format!("#{id}")
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    scroll_to_section(id);
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
