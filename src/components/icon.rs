//! Icon Component
//!
//! Inline 24x24 stroke icons, enumerated rather than loaded from an
//! icon font.

use leptos::prelude::*;

use crate::models::Channel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    ArrowDown,
    ChevronLeft,
    ChevronRight,
    BookOpen,
}

impl IconKind {
    /// Icon shown for a contact/social channel
    pub fn for_channel(channel: Channel) -> Self {
        match channel {
            Channel::Github => IconKind::Github,
            Channel::Linkedin => IconKind::Linkedin,
            Channel::Email => IconKind::Mail,
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_body(kind)}
        </svg>
    }
}

fn icon_body(kind: IconKind) -> AnyView {
    match kind {
        IconKind::Github => view! {
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        }
        .into_any(),
        IconKind::Linkedin => view! {
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
            <rect width="4" height="12" x="2" y="9" />
            <circle cx="4" cy="4" r="2" />
        }
        .into_any(),
        IconKind::Mail => view! {
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        }
        .into_any(),
        IconKind::ExternalLink => view! {
            <path d="M15 3h6v6" />
            <path d="M10 14 21 3" />
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
        }
        .into_any(),
        IconKind::ArrowDown => view! {
            <path d="M12 5v14" />
            <path d="m19 12-7 7-7-7" />
        }
        .into_any(),
        IconKind::ChevronLeft => view! { <path d="m15 18-6-6 6-6" /> }.into_any(),
        IconKind::ChevronRight => view! { <path d="m9 18 6-6-6-6" /> }.into_any(),
        IconKind::BookOpen => view! {
            <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" />
            <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" />
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_icon_mapping() {
        assert_eq!(IconKind::for_channel(Channel::Email), IconKind::Mail);
        assert_eq!(IconKind::for_channel(Channel::Github), IconKind::Github);
        assert_eq!(IconKind::for_channel(Channel::Linkedin), IconKind::Linkedin);
    }
}
