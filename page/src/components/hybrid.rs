use leptos::prelude::*;

const ARCHITECTURE_SNIPPET: &str = r#"// Native Core
Service {
  background: constant;
  battery_drain: low;
  sensor: accelerometer;
}

// Web UI
Interface {
  updates: instant;
  charts: dynamic;
  platform: cross-device;
}"#;

/// Native background service vs. web interface.
#[component]
pub fn HybridAdvantage() -> impl IntoView {
    view! {
        <section class="hybrid">
            <div class="container hybrid-grid">
                <div>
                    <h2 class="section-title">"The Hybrid Advantage"</h2>
                    <p class="hybrid-lead">
                        "We combine the raw power of native Android code for sensor access with the "
                        "flexibility of modern Web technologies for the user interface."
                    </p>
                    <ul class="hybrid-points">
                        <HybridPoint
                            title="Native Core:"
                            text="Runs reliably in the background to detect vibrations."
                        />
                        <HybridPoint
                            title="Web UI:"
                            text="Always up-to-date visualization without app updates."
                        />
                        <HybridPoint
                            title="Privacy First:"
                            text="No camera, no microphone, only coarse location."
                        />
                    </ul>
                </div>
                <div class="hybrid-code">
                    <pre>{ARCHITECTURE_SNIPPET}</pre>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HybridPoint(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <li class="hybrid-point">
            <span class="hybrid-check">"✓"</span>
            <span><strong>{title}</strong>" "{text}</span>
        </li>
    }
}
