//! Contact Section
//!
//! Contact channels and the primary mailto CTA.

use leptos::prelude::*;

use super::{Button, ButtonSize, Card, CardContent, Icon, IconKind};
use crate::content;
use crate::markdown;

#[component]
pub fn Contact() -> impl IntoView {
    let profile = content::profile();
    let cta_href = markdown::mailto_url(&profile.email, "Let's talk");

    view! {
        <section id="contact" class="contact-section">
            <div class="section-heading">
                <h2>"Ready to build something visionary?"</h2>
                <p>
                    "I'm always looking for ambitious projects and people to collaborate with. Let's talk about turning your boldest ideas into a tangible reality."
                </p>
            </div>

            <Card class="contact-card">
                <CardContent>
                    <ul class="contact-rows">
                        {content::contact_links()
                            .iter()
                            .cloned()
                            .map(|link| {
                                let target = link.url.starts_with("http").then_some("_blank");
                                view! {
                                    <li class="contact-row">
                                        <a href=link.url.clone() target=target rel="noreferrer">
                                            <Icon kind=IconKind::for_channel(link.channel) class="contact-icon" />
                                            <span>{link.label.clone()}</span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <Button size=ButtonSize::Lg class="contact-cta" href=cta_href>
                        <Icon kind=IconKind::Mail class="btn-icon" />
                        "Send Message"
                    </Button>
                </CardContent>
            </Card>
        </section>
    }
}
