//! Tutoring Section
//!
//! Promo card for tutoring sessions with topics and a mailto CTA.

use leptos::prelude::*;

use super::{Badge, Button, ButtonSize, Card, CardContent, CardDescription, CardHeader, CardTitle, Icon, IconKind};
use crate::content;
use crate::markdown;

#[component]
pub fn Tutoring() -> impl IntoView {
    let offer = content::tutoring();
    let profile = content::profile();
    let pitch = markdown::render_inline(&offer.pitch);
    let cta_href = markdown::mailto_url(&profile.email, &offer.inquiry_subject);

    view! {
        <section id="tutoring" class="tutoring-section">
            <Card class="tutoring-card">
                <CardHeader>
                    <div class="tutoring-heading">
                        <Icon kind=IconKind::BookOpen class="tutoring-icon" />
                        <CardTitle>{offer.heading.clone()}</CardTitle>
                    </div>
                    <CardDescription>
                        <span inner_html=pitch></span>
                    </CardDescription>
                </CardHeader>
                <CardContent>
                    <div class="tutoring-topics">
                        {offer
                            .topics
                            .iter()
                            .cloned()
                            .map(|topic| view! { <Badge>{topic}</Badge> })
                            .collect_view()}
                    </div>
                    <Button size=ButtonSize::Lg href=cta_href>
                        <Icon kind=IconKind::Mail class="btn-icon" />
                        "Book a Session"
                    </Button>
                </CardContent>
            </Card>
        </section>
    }
}
