//! UI Components
//!
//! Reusable Leptos components and the page sections built from them.

mod about;
mod badge;
mod button;
mod card;
mod contact;
mod footer;
mod framed_image;
mod hero;
mod icon;
mod project_showcase;
mod site_header;
mod tutoring;

pub use about::About;
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use contact::Contact;
pub use footer::Footer;
pub use framed_image::FramedImage;
pub use hero::Hero;
pub use icon::{Icon, IconKind};
pub use project_showcase::ProjectShowcase;
pub use site_header::SiteHeader;
pub use tutoring::Tutoring;
