//! About Section
//!
//! Mission copy, portrait, and profile links.

use leptos::prelude::*;

use super::{Button, ButtonVariant, FramedImage, Icon, IconKind};
use crate::content;
use crate::markdown;

#[component]
pub fn About() -> impl IntoView {
    let profile = content::profile();

    view! {
        <section id="about" class="about-section">
            <div class="section-heading">
                <h2>"The Mission"</h2>
            </div>

            <div class="about-grid">
                <div class="about-copy">
                    {content::mission_paragraphs()
                        .iter()
                        .map(|paragraph| {
                            let html = markdown::render_inline(paragraph);
                            view! { <p class="about-paragraph" inner_html=html></p> }
                        })
                        .collect_view()}

                    <div class="about-actions">
                        <Button variant=ButtonVariant::Outline href=profile.linkedin_url.clone()>
                            <Icon kind=IconKind::Linkedin class="btn-icon" />
                            "LinkedIn"
                        </Button>
                        <Button variant=ButtonVariant::Outline href=profile.github_url.clone()>
                            <Icon kind=IconKind::Github class="btn-icon" />
                            "GitHub"
                        </Button>
                    </div>
                </div>

                <div class="about-portrait">
                    <FramedImage
                        src=profile.portrait.clone()
                        alt=profile.name.clone()
                        width=300u32
                        height=300u32
                        class="portrait-img"
                    />
                </div>
            </div>
        </section>
    }
}
