//! Footer Component

use leptos::prelude::*;

use super::{Button, ButtonSize, ButtonVariant, Icon, IconKind};
use crate::content;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = content::profile();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <p class="footer-line">
                {format!(
                    "© {} {}. Crafted with audacious vision and relentless execution.",
                    year,
                    profile.name,
                )}
            </p>
            <div class="footer-links">
                {content::contact_links()
                    .iter()
                    .cloned()
                    .map(|link| {
                        view! {
                            <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm href=link.url.clone()>
                                <Icon kind=IconKind::for_channel(link.channel) />
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
