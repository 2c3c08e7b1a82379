use leptos::prelude::*;

use super::{ICON_BOLT, ICON_CLOUD, ICON_FIRE, ICON_VIDEO, ICON_WARNING, Icon};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Why VolcanoYT?"</h2>
                    <div class="section-rule"></div>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon=ICON_BOLT
                        accent="icon-orange"
                        title="Earthquakes (Live)"
                        description="Advanced hybrid detection network monitoring seismic activity worldwide in real-time."
                    />
                    <FeatureCard
                        icon=ICON_FIRE
                        accent="icon-red"
                        title="Volcanoes (Coming Soon)"
                        description="Live eruption monitoring and ash advisory tracking for active volcanoes globally."
                    />
                    <FeatureCard
                        icon=ICON_CLOUD
                        accent="icon-blue"
                        title="Weather (Coming Soon)"
                        description="Severe weather alerts, storm tracking, and local forecasts integrated into the map."
                    />
                    <FeatureCard
                        icon=ICON_VIDEO
                        accent="icon-green"
                        title="Public CCTV (Coming Soon)"
                        description="Live video feeds from critical areas to visually confirm disaster impacts."
                    />
                    <FeatureCard
                        icon=ICON_WARNING
                        accent="icon-yellow"
                        title="Active Development"
                        description="VolcanoYT is currently in active development. While earthquake detection is live, other features are coming soon. False alarms may occur."
                        wide=true
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FeatureCard(
    icon: &'static str,
    /// CSS class tinting the icon
    accent: &'static str,
    title: &'static str,
    description: &'static str,
    /// Span the whole grid row
    #[prop(default = false)]
    wide: bool,
) -> impl IntoView {
    let class = if wide { "feature-card feature-card-wide" } else { "feature-card" };
    view! {
        <article class=class>
            <div class="feature-head">
                <div class="feature-icon">
                    <Icon path=icon class=accent />
                </div>
                <h3 class="feature-title">{title}</h3>
            </div>
            <p class="feature-description">{description}</p>
        </article>
    }
}
