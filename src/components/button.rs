//! Button Component
//!
//! Parameterized button/link with an enumerated set of style variants,
//! mirroring the design-system button used across the page.

use leptos::prelude::*;

/// Visual variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Size step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

/// Design-system button
///
/// Renders an anchor when `href` is given, otherwise a plain button
/// wired to the optional `on_press` callback.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] href: Option<String>,
    #[prop(into, optional)] on_press: Option<Callback<()>>,
    #[prop(into, optional)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let classes = join_classes(&["btn", variant.class(), size.class(), &class]);

    match href {
        Some(href) => {
            // External links open in a new tab; mailto stays in place
            let target = href.starts_with("http").then_some("_blank");
            view! {
                <a class=classes href=href target=target rel="noreferrer" aria-label=aria_label>
                    {children()}
                </a>
            }
            .into_any()
        }
        None => view! {
            <button
                class=classes
                aria-label=aria_label
                on:click=move |_| {
                    if let Some(cb) = on_press {
                        cb.run(());
                    }
                }
            >
                {children()}
            </button>
        }
        .into_any(),
    }
}

/// Compose CSS classes, skipping empty entries
pub(crate) fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert_eq!(ButtonVariant::Default.class(), "btn-default");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn test_size_classes() {
        assert_eq!(ButtonSize::Sm.class(), "btn-sm");
        assert_eq!(ButtonSize::Lg.class(), "btn-lg");
    }

    #[test]
    fn test_join_classes_skips_empty() {
        assert_eq!(join_classes(&["btn", "", "btn-lg"]), "btn btn-lg");
        assert_eq!(join_classes(&["card"]), "card");
    }
}
