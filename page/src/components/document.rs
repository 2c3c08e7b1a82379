//! Root document component for the prerendered page.

use leptos::prelude::*;

use super::LandingPage;
use crate::styles::LANDING_CSS;
use crate::versions::LiveVersions;

/// The complete HTML document around [`LandingPage`].
#[component]
pub fn LandingDocument(versions: LiveVersions) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta
                    name="description"
                    content="VolcanoYT: earthquakes, volcanoes, weather and more. The all-in-one disaster monitoring network."
                />
                <title>"VolcanoYT - Disaster Monitoring"</title>
                <link rel="icon" href="/logo.png" />
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <LandingPage versions=versions />
            </body>
        </html>
    }
}
