use leptos::prelude::*;

use super::{Icon, IconStyle};
use crate::links::{SOCIAL_DESTINATIONS, SocialDestination};

#[component]
pub fn StayConnected() -> impl IntoView {
    view! {
        <section id="social" class="social">
            <div class="container social-panel">
                <h2 class="section-title">"Stay Connected"</h2>
                <p class="social-lead">
                    "Please follow us to get news and early warnings via our account bot and social channels."
                </p>
                <div class="social-links">
                    {SOCIAL_DESTINATIONS
                        .iter()
                        .map(|dest| view! { <SocialLink destination=*dest /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SocialLink(destination: SocialDestination) -> impl IntoView {
    let style = format!("background: {}", destination.background);
    view! {
        <a
            href=destination.href
            aria-label=destination.label
            class="social-link"
            style=style
            target="_blank"
            rel="noopener"
        >
            <Icon path=destination.icon paint=IconStyle::Solid size="24" />
            <span class="social-label">{destination.label}</span>
        </a>
    }
}
