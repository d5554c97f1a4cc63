//! Project Showcase Section
//!
//! Carousel over the project list: sliding track, arrow controls,
//! one indicator dot per project, and a position counter. All index
//! movement goes through the `Carousel` state in `crate::carousel`.

use leptos::prelude::*;

use super::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, FramedImage, Icon, IconKind,
};
use crate::carousel::Carousel;
use crate::markdown;
use crate::models::Project;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn ProjectShowcase() -> impl IntoView {
    let store = use_site_store();
    let slides = store.projects().get_untracked();
    if slides.is_empty() {
        log::warn!("showcase: no projects configured");
    }

    let (carousel, set_carousel) = signal(Carousel::new(slides.clone()));

    let rewind = Callback::new(move |_| {
        set_carousel.update(|c| {
            if let Err(err) = c.previous() {
                log::warn!("showcase: {err}");
            }
        })
    });
    let advance = Callback::new(move |_| {
        set_carousel.update(|c| {
            if let Err(err) = c.next() {
                log::warn!("showcase: {err}");
            }
        })
    });

    let track_style = move || {
        format!(
            "transform: translateX(-{}%);",
            carousel.with(|c| c.current_index()) * 100
        )
    };
    let counter = move || {
        carousel
            .with(|c| c.position())
            .map(|(at, of)| format!("{at} / {of}"))
            .unwrap_or_default()
    };

    view! {
        <section id="projects" class="projects-section">
            <div class="section-heading">
                <h2>"Proof of Concept"</h2>
                <p>
                    "A record of ideas taken from zero to launch. I don't just talk about building, I ship."
                </p>
            </div>

            <Show when=move || !carousel.with(|c| c.is_empty())>
                <div class="carousel">
                    <Button
                        variant=ButtonVariant::Outline
                        class="carousel-arrow"
                        aria_label="Previous project"
                        on_press=rewind
                    >
                        <Icon kind=IconKind::ChevronLeft />
                    </Button>

                    <div class="carousel-viewport">
                        <div class="carousel-track" style=track_style>
                            {slides
                                .iter()
                                .cloned()
                                .enumerate()
                                .map(|(index, project)| {
                                    let active = Signal::derive(move || {
                                        carousel.with(|c| c.is_active(index))
                                    });
                                    view! { <ProjectSlide index=index project=project active=active /> }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <Button
                        variant=ButtonVariant::Outline
                        class="carousel-arrow"
                        aria_label="Next project"
                        on_press=advance
                    >
                        <Icon kind=IconKind::ChevronRight />
                    </Button>
                </div>

                <div class="carousel-footer">
                    <div class="carousel-dots">
                        {(0..slides.len())
                            .map(|index| {
                                let dot_class = move || {
                                    if carousel.with(|c| c.is_active(index)) {
                                        "carousel-dot active"
                                    } else {
                                        "carousel-dot"
                                    }
                                };
                                view! {
                                    <button
                                        class=dot_class
                                        aria-label=format!("Go to project {}", index + 1)
                                        on:click=move |_| {
                                            set_carousel
                                                .update(|c| {
                                                    if let Err(err) = c.go_to(index) {
                                                        log::warn!("showcase: {err}");
                                                    }
                                                })
                                        }
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <span class="carousel-counter">{counter}</span>
                </div>
            </Show>
        </section>
    }
}

/// One slide: media on one half, body on the other. Odd slides flip
/// the halves; only the active slide offers its live-demo link.
#[component]
fn ProjectSlide(index: usize, project: Project, active: Signal<bool>) -> impl IntoView {
    let grid_class = if index % 2 == 1 {
        "slide-grid flipped"
    } else {
        "slide-grid"
    };
    let summary = markdown::render_inline(&project.summary);
    let has_live = project.live_url.is_some();
    let live_href = project.live_url.clone().unwrap_or_default();

    view! {
        <div class="carousel-slide">
            <Card class="slide-card">
                <div class=grid_class>
                    <div class="slide-media">
                        <div class=format!("slide-tint {}", project.accent.class())></div>
                        <FramedImage src=project.image.clone() alt=project.title.clone() fill=true />
                    </div>
                    <div class="slide-body">
                        <CardHeader class="slide-header">
                            <CardTitle>{project.title.clone()}</CardTitle>
                            <CardDescription>
                                <span inner_html=summary></span>
                            </CardDescription>
                        </CardHeader>
                        <CardContent class="slide-content">
                            <div class="slide-tags">
                                {project
                                    .technologies
                                    .iter()
                                    .cloned()
                                    .map(|tech| {
                                        view! { <Badge variant=BadgeVariant::Secondary>{tech}</Badge> }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="slide-links">
                                <Show when=move || active.get() && has_live>
                                    <Button variant=ButtonVariant::Outline href=live_href.clone()>
                                        <Icon kind=IconKind::ExternalLink class="btn-icon" />
                                        "Live Demo"
                                    </Button>
                                </Show>
                                <Button variant=ButtonVariant::Outline href=project.repo_url.clone()>
                                    <Icon kind=IconKind::Github class="btn-icon" />
                                    "Code"
                                </Button>
                            </div>
                        </CardContent>
                    </div>
                </div>
            </Card>
        </div>
    }
}
