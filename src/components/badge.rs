//! Badge Component
//!
//! Small pill label for technology tags and tutoring topics.

use leptos::prelude::*;

use super::button::join_classes;

/// Visual variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-default",
            BadgeVariant::Secondary => "badge-secondary",
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=join_classes(&["badge", variant.class(), &class])>{children()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variant_classes() {
        assert_eq!(BadgeVariant::Default.class(), "badge-default");
        assert_eq!(BadgeVariant::Secondary.class(), "badge-secondary");
    }
}
