//! # volcanoyt-page
//!
//! Leptos components for the VolcanoYT landing page.
//!
//! The page advertises the four VolcanoYT services, shows the latest known
//! version of each as a badge, and links to the matching downloads. Versions
//! come from [`volcanoyt_versions`] and reach the components through
//! [`LiveVersions`], one signal per service.
//!
//! ## Features
//!
//! - `ssr` (default) - render the whole document to a static HTML string with
//!   [`render_landing_page`]
//! - `csr` - mount the same components in the browser; the `landing` app
//!   feeds them from a [`VersionSlots`] updated by the browser poller
//!
//! ## Quick Start
//!
//! ```rust
//! use volcanoyt_page::render_landing_page;
//! use volcanoyt_versions::{Service, VersionState};
//!
//! let mut state = VersionState::new();
//! state.apply(Service::AndroidApp, "2.0.0");
//!
//! let html = render_landing_page(&state);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("volcanoyt-2.0.0.apk"));
//! ```

pub mod components;
pub mod links;
pub mod styles;
mod versions;

pub use versions::{LiveVersions, VersionSlots};

#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;
#[cfg(feature = "ssr")]
use volcanoyt_versions::VersionState;

/// Render the complete landing page for a fixed set of versions.
///
/// Services missing from `state` render without a badge, and their links
/// fall back to unversioned targets. Returns a full document including
/// `<!DOCTYPE html>`.
#[cfg(feature = "ssr")]
pub fn render_landing_page(state: &VersionState) -> String {
    use components::LandingDocument;

    let html = Owner::new().with(|| {
        let versions = LiveVersions::snapshot(state);
        view! { <LandingDocument versions=versions /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use volcanoyt_versions::Service;

    #[test]
    fn renders_complete_document() {
        let html = render_landing_page(&VersionState::new());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Why VolcanoYT?"));
        assert!(html.contains("The Hybrid Advantage"));
        assert!(html.contains("Stay Connected"));
        assert!(html.contains("Disaster Monitoring"));
    }

    #[test]
    fn known_version_shows_badge() {
        let mut state = VersionState::new();
        state.apply(Service::WebMap, "1.4.2");

        let html = render_landing_page(&state);
        assert!(html.contains("v1.4.2"));
        assert!(html.contains("https://map.volcanoyt.com/?v=1.4.2"));
        assert_eq!(html.matches("class=\"cta-badge\"").count(), 1);
    }

    #[test]
    fn android_link_points_at_versioned_apk() {
        let mut state = VersionState::new();
        state.apply(Service::AndroidApp, "2.0.0");

        let html = render_landing_page(&state);
        assert!(html.contains(
            "https://file2.yuuki.me/p/Local_EU/App/Android/VolcanoYT/volcanoyt-2.0.0.apk"
        ));
        assert!(html.contains("v2.0.0"));
    }

    #[test]
    fn unknown_versions_render_without_badges() {
        let html = render_landing_page(&VersionState::new());

        assert!(!html.contains("class=\"cta-badge\""));
        assert_eq!(html.matches("class=\"cta-badge-spacer\"").count(), 4);
        assert!(!html.contains(".apk\""));
        assert!(html.contains("href=\"https://map.volcanoyt.com/\""));
    }

    #[test]
    fn every_service_labelled() {
        let html = render_landing_page(&VersionState::new());
        for service in Service::ALL {
            assert!(html.contains(service.label()), "missing {}", service.label());
        }
    }
}
