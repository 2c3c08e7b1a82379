//! Leptos UI components for the VolcanoYT landing page.
//!
//! The same component tree is rendered to a static HTML string on the
//! server side and mounted reactively in the browser.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument (static render only)
//! └── LandingPage
//!     ├── Hero
//!     │   └── CtaLink (Android, Web Portal, Web Maps, API)
//!     ├── Features
//!     │   └── FeatureCard
//!     ├── HybridAdvantage
//!     ├── StayConnected
//!     │   └── SocialLink
//!     └── Footer
//! ```
//!
//! Version badges and versioned links read from [`crate::LiveVersions`],
//! so they update in place whenever a poll publishes a new version.

mod document;
mod features;
mod footer;
mod hero;
mod hybrid;
mod icons;
mod landing;
mod social;

pub use document::LandingDocument;
pub use features::{FeatureCard, Features};
pub use footer::Footer;
pub use hero::{CtaLink, Hero};
pub use hybrid::HybridAdvantage;
pub use icons::*;
pub use landing::LandingPage;
pub use social::{SocialLink, StayConnected};
