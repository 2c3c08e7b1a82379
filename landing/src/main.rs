// VolcanoYT Landing Page, Leptos 0.8 browser app

mod poller;

use leptos::prelude::*;
use volcanoyt_page::components::LandingPage;
use volcanoyt_page::styles::LANDING_CSS;
use volcanoyt_page::VersionSlots;
use volcanoyt_versions::PollSettings;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let slots = VersionSlots::new();
    poller::start_version_poller(slots, PollSettings::default());

    view! {
        <style>{LANDING_CSS}</style>
        <LandingPage versions=slots.live() />
    }
}
