use leptos::prelude::*;

use super::{Features, Footer, Hero, HybridAdvantage, StayConnected};
use crate::versions::LiveVersions;

/// Every section of the page, top to bottom.
///
/// Shared by the static renderer and the browser app, so both produce the
/// same markup for the same versions.
#[component]
pub fn LandingPage(versions: LiveVersions) -> impl IntoView {
    view! {
        <div class="landing">
            <Hero versions=versions />
            <main>
                <Features />
                <HybridAdvantage />
                <StayConnected />
            </main>
            <Footer />
        </div>
    }
}
