//! Hero Section
//!
//! Name, tagline, and the two primary calls to action. Fades in once
//! the store flags the page as entered.

use leptos::prelude::*;

use super::{Button, ButtonSize, ButtonVariant, Icon, IconKind};
use crate::content;
use crate::markdown;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn Hero() -> impl IntoView {
    let store = use_site_store();
    let profile = content::profile();
    let tagline = markdown::render_inline(&profile.tagline);
    let mail_href = markdown::mailto_url(&profile.email, "Let's build something");

    let inner_class = move || {
        if store.entered().get() {
            "hero-inner entered"
        } else {
            "hero-inner"
        }
    };

    view! {
        <section id="home" class="hero-section">
            <div class=inner_class>
                <h1 class="hero-name">{profile.name.clone()}</h1>
                <p class="hero-tagline" inner_html=tagline></p>

                <div class="hero-actions">
                    <Button size=ButtonSize::Lg href=mail_href>
                        <Icon kind=IconKind::ExternalLink class="btn-icon" />
                        "Let's Build Something Bold"
                    </Button>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Lg href=profile.github_url.clone()>
                        <Icon kind=IconKind::Github class="btn-icon" />
                        "View Code"
                    </Button>
                </div>

                <div class="hero-scroll-hint">
                    <Icon kind=IconKind::ArrowDown />
                </div>
            </div>
        </section>
    }
}
