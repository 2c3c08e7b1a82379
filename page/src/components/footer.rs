use leptos::prelude::*;

use crate::links::GITHUB_URL;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <h3 class="footer-title">"VolcanoYT"</h3>
                    <p class="footer-tagline">"Disaster Monitoring"</p>
                </div>
                <div class="footer-links">
                    <a href=GITHUB_URL target="_blank" class="footer-link">"GitHub"</a>
                </div>
            </div>
        </footer>
    }
}
