//! CSS for the landing page.
//!
//! Inlined into the prerendered document by
//! [`LandingDocument`](crate::components::LandingDocument). The browser app
//! mounts the same rules in a `<style>` element next to the page.
//!
//! ```rust
//! use volcanoyt_page::styles::LANDING_CSS;
//!
//! let themed = format!("{}\n.hero {{ background: #111; }}", LANDING_CSS);
//! assert!(themed.contains(".cta-badge"));
//! ```

/// Complete CSS for the landing page, dark theme with volcanic accents.
pub const LANDING_CSS: &str = r#"
:root {
    --bg-black: #000000;
    --bg-dark: #0b0b0d;
    --bg-mid: #16161a;
    --text-bright: #e5e5e5;
    --text-dim: #9ca3af;
    --text-muted: #4b5563;
    --border-subtle: rgba(229, 229, 229, 0.08);
    --border-visible: rgba(229, 229, 229, 0.18);
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 1100px;
    --accent-orange: #f97316;
    --accent-red: #dc2626;
    --accent-blue: #3b82f6;
    --accent-green: #10b981;
    --accent-yellow: #eab308;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-black);
    color: var(--text-bright);
    line-height: 1.6;
    margin: 0;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1.5rem;
}

/* Hero */
.hero {
    padding: 6rem 0 4rem;
    text-align: center;
    background: radial-gradient(circle at top, rgba(220, 38, 38, 0.25), transparent 60%);
}

.hero-logo img {
    width: 96px;
    height: 96px;
    border-radius: 24px;
}

.hero-title {
    font-size: clamp(2.5rem, 6vw, 4rem);
    margin: 1.5rem 0 0.5rem;
}

.hero-title-accent {
    background: linear-gradient(90deg, var(--accent-orange), var(--accent-red));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-beta {
    font-size: 0.8rem;
    vertical-align: super;
    margin-left: 0.5rem;
    padding: 0.1rem 0.5rem;
    border: 1px solid var(--accent-orange);
    border-radius: 999px;
    color: var(--accent-orange);
}

.hero-tagline {
    font-size: 1.25rem;
    margin: 0;
}

.hero-subtitle {
    color: var(--text-dim);
    margin: 0.25rem 0 2.5rem;
}

.hero-actions {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1rem;
}

.cta {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.4rem;
    padding: 1rem 1.25rem;
    border: 1px solid var(--border-visible);
    border-radius: 12px;
    background: var(--bg-mid);
    transition: border-color 0.2s, transform 0.2s;
}

.cta:hover {
    border-color: var(--accent-orange);
    transform: translateY(-2px);
}

.cta-label {
    font-weight: 600;
}

.cta-badge {
    font-family: var(--font-mono);
    font-size: 0.75rem;
    padding: 0.05rem 0.5rem;
    border-radius: 999px;
    background: rgba(249, 115, 22, 0.15);
    color: var(--accent-orange);
}

.cta-badge-spacer {
    height: 1.2rem;
}

/* Sections */
.features, .hybrid, .social {
    padding: 4rem 0;
    border-top: 1px solid var(--border-subtle);
}

.section-header {
    text-align: center;
    margin-bottom: 2.5rem;
}

.section-title {
    font-size: 2rem;
    margin: 0 0 1rem;
}

.section-rule {
    width: 64px;
    height: 4px;
    margin: 0 auto;
    border-radius: 2px;
    background: var(--accent-red);
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.25rem;
}

.feature-card {
    padding: 1.5rem;
    border: 1px solid var(--border-subtle);
    border-radius: 12px;
    background: var(--bg-dark);
}

.feature-card-wide {
    grid-column: 1 / -1;
    border-color: rgba(234, 179, 8, 0.35);
}

.feature-head {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.feature-title {
    margin: 0;
    font-size: 1.1rem;
}

.feature-description {
    color: var(--text-dim);
    margin: 0.75rem 0 0;
}

.icon-orange { color: var(--accent-orange); }
.icon-red { color: var(--accent-red); }
.icon-blue { color: var(--accent-blue); }
.icon-green { color: var(--accent-green); }
.icon-yellow { color: var(--accent-yellow); }

.hybrid-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 2.5rem;
    align-items: center;
}

.hybrid-lead {
    color: var(--text-dim);
}

.hybrid-points {
    list-style: none;
    padding: 0;
}

.hybrid-point {
    display: flex;
    gap: 0.75rem;
    margin-bottom: 0.75rem;
}

.hybrid-check {
    color: var(--accent-green);
    font-weight: 700;
}

.hybrid-code pre {
    margin: 0;
    padding: 1.5rem;
    border: 1px solid var(--border-visible);
    border-radius: 12px;
    background: var(--bg-mid);
    font-family: var(--font-mono);
    font-size: 0.85rem;
    overflow-x: auto;
}

.social-panel {
    text-align: center;
}

.social-lead {
    color: var(--text-dim);
    margin-bottom: 2rem;
}

.social-links {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.75rem;
}

.social-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.6rem 1rem;
    border-radius: 10px;
    color: #ffffff;
    font-weight: 600;
    transition: opacity 0.2s;
}

.social-link:hover {
    opacity: 0.85;
}

/* Footer */
.footer {
    padding: 2.5rem 0;
    border-top: 1px solid var(--border-subtle);
    color: var(--text-dim);
}

.footer-inner {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
}

.footer-title {
    margin: 0;
    color: var(--text-bright);
}

.footer-tagline {
    margin: 0;
    font-size: 0.85rem;
}

.footer-link:hover {
    color: var(--accent-orange);
}

@media (max-width: 640px) {
    .hero {
        padding: 4rem 0 3rem;
    }

    .section-title {
        font-size: 1.6rem;
    }
}
"#;
