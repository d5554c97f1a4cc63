//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crate::content;
use crate::models::Project;
use leptos::prelude::*;
use reactive_stores::Store;

/// Page-global state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Entrance transition has run (flips shortly after mount)
    pub entered: bool,
    /// Projects shown in the showcase carousel, fixed for the session
    pub projects: Vec<Project>,
}

impl SiteState {
    pub fn new() -> Self {
        Self {
            entered: false,
            projects: content::projects(),
        }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}
