use leptos::prelude::*;
use volcanoyt_versions::Service;

use crate::links::{API_URL, WEB_PORTAL_URL, android_apk_url, badge_text, web_map_url};
use crate::versions::LiveVersions;

#[component]
pub fn Hero(versions: LiveVersions) -> impl IntoView {
    let android = versions.get(Service::AndroidApp);
    let web_map = versions.get(Service::WebMap);

    view! {
        <header class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-logo">
                        <img src="/logo.png" alt="VolcanoYT Logo" />
                    </div>
                    <h1 class="hero-title">
                        <span class="hero-title-accent">"VolcanoYT"</span>
                        <span class="hero-beta">"Beta"</span>
                    </h1>
                    <p class="hero-tagline">"Earthquakes, Volcanoes, Weather, and more."</p>
                    <p class="hero-subtitle">"The all-in-one disaster monitoring network."</p>
                    <div class="hero-actions">
                        <CtaLink
                            label=Service::AndroidApp.label()
                            href=Signal::derive(move || android_apk_url(android.get().as_deref()))
                            version=android
                        />
                        <CtaLink
                            label=Service::WebPortal.label()
                            href=Signal::derive(|| WEB_PORTAL_URL.to_string())
                            version=versions.get(Service::WebPortal)
                        />
                        <CtaLink
                            label=Service::WebMap.label()
                            href=Signal::derive(move || web_map_url(web_map.get().as_deref()))
                            version=web_map
                        />
                        <CtaLink
                            label=Service::Api.label()
                            href=Signal::derive(|| API_URL.to_string())
                            version=versions.get(Service::Api)
                        />
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Call-to-action button with a version badge once the version is known.
#[component]
pub fn CtaLink(
    label: &'static str,
    href: Signal<String>,
    version: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <a href=move || href.get() class="cta">
            <span class="cta-label">{label}</span>
            {move || match version.get() {
                Some(v) => view! { <span class="cta-badge">{badge_text(&v)}</span> }.into_any(),
                None => view! { <div class="cta-badge-spacer"></div> }.into_any(),
            }}
        </a>
    }
}
