//! Folio Frontend App
//!
//! Single-page layout: hero, project showcase, about, tutoring, contact.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pointer::{create_pointer_signals, glow_style, track_window_pointer};
use reactive_stores::Store;

use crate::components::{About, Contact, Footer, Hero, ProjectShowcase, SiteHeader, Tutoring};
use crate::store::{SiteState, SiteStateStoreFields};

/// Delay before the hero entrance transition fires, in ms
const ENTRANCE_DELAY_MS: u32 = 80;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(SiteState::new());
    provide_context(store);

    let pointer = create_pointer_signals();
    provide_context(pointer);

    // Wire page-lifetime effects on mount
    Effect::new(move |_| {
        track_window_pointer(pointer);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ENTRANCE_DELAY_MS).await;
            *store.entered().write() = true;
        });
        log::debug!("page mounted");
    });

    let glow = move || glow_style(pointer.x_read.get(), pointer.y_read.get());

    view! {
        <div class="site-shell">
            // Decorative cursor-following glow layer
            <div class="pointer-glow" style=glow></div>

            <SiteHeader />

            <main>
                <Hero />
                <ProjectShowcase />
                <About />
                <Tutoring />
                <Contact />
            </main>

            <Footer />
        </div>
    }
}
