//! Stylesheet for the landing page.
//!
//! Components only emit class names; everything visual lives here. The same
//! string is inlined by the static export (or written to `styles.css`) and
//! injected by the CSR bundle.
//!
//! Breakpoints:
//!
//! - news grid: 3 columns, 2 at `<= 1024px`, 1 at `<= 640px`
//! - header: hamburger + collapsible nav at `<= 768px`

/// Complete CSS for the page.
pub const PAGE_CSS: &str = r#"
:root {
    --ink: #1a1a1a;
    --paper: #ffffff;
    --muted: #5f5f5f;
    --accent: #ffeb00;
    --accent-faint: rgba(255, 235, 0, 0.35);
    --rule: #e6e6e6;
    --font-sans: "Helvetica Neue", Helvetica, Arial, sans-serif;
    --font-serif: Georgia, "Times New Roman", serif;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--paper);
    color: var(--ink);
    font-family: var(--font-sans);
}

a { color: inherit; text-decoration: none; }

/* Header */
.header {
    position: sticky;
    top: 0;
    z-index: 100;
    background: var(--paper);
    border-bottom: 1px solid var(--rule);
}
.header-container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 12px 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.logo { display: flex; align-items: center; gap: 10px; }
.logo-circle { width: 40px; height: 40px; }
.logo-text { font-family: var(--font-serif); font-size: 24px; font-weight: 700; }
.logo-text-large { font-size: 30px; }

.menu-toggle {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: 0;
    padding: 8px;
    cursor: pointer;
}
.menu-toggle span { display: block; width: 24px; height: 2px; background: var(--ink); }

.nav-list { display: flex; gap: 28px; list-style: none; margin: 0; padding: 0; align-items: center; }
.nav-list a { font-weight: 600; text-transform: uppercase; letter-spacing: 0.04em; font-size: 14px; }
.nav-list a:hover { box-shadow: inset 0 -3px 0 var(--accent); }
.login-btn { border: 2px solid var(--ink); padding: 6px 14px; }
.login-btn:hover { background: var(--accent); box-shadow: none; }

/* Hero */
.hero {
    position: relative;
    min-height: 460px;
    background-size: cover;
    background-position: center right;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    padding: 64px 24px 32px;
}
.hero::after {
    content: "";
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0);
    transition: background 0.25s ease;
    pointer-events: none;
}
.hero:hover::after { background: rgba(0, 0, 0, 0.08); }
.hero-content { position: relative; z-index: 1; max-width: 1200px; width: 100%; margin: 0 auto; }
.hero-text { display: block; max-width: 50%; }
.hero-text h1 { font-family: var(--font-serif); font-size: 44px; line-height: 1.15; margin: 0 0 16px; }
.hero-text:hover h1 { text-decoration: underline; text-decoration-color: var(--accent); text-underline-offset: 6px; }
.hero-text p { font-size: 18px; line-height: 1.5; color: var(--muted); margin: 0; }
.highlight-text { background: var(--accent); padding: 0 6px; }

.search-container { position: relative; z-index: 1; max-width: 1200px; width: 100%; margin: 32px auto 0; }
.search-form { display: flex; max-width: 640px; }
.search-input {
    flex: 1;
    padding: 14px 16px;
    font-size: 16px;
    border: 2px solid var(--ink);
    border-right: 0;
}
.search-button {
    padding: 0 24px;
    background: var(--ink);
    color: var(--accent);
    font-weight: 700;
    letter-spacing: 0.08em;
    border: 2px solid var(--ink);
    cursor: pointer;
}

/* News grid */
.news-grid-section { padding: 48px 24px; }
.news-grid-container { max-width: 1200px; margin: 0 auto; }
.news-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 32px;
}

.news-card-link { display: block; }
.news-card {
    height: 100%;
    border-left: 4px solid var(--accent-faint);
    background: var(--paper);
    transition: transform 0.2s ease, border-color 0.2s ease, box-shadow 0.2s ease;
}
.news-card-link:hover .news-card {
    transform: translateY(-4px);
    border-left-color: var(--accent);
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
}
.card-image { aspect-ratio: 16 / 9; overflow: hidden; background: #f2f2f2; }
.card-image img { width: 100%; height: 100%; object-fit: cover; display: block; }
.placeholder-card-image { width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; }
.card-content { padding: 16px 20px 24px; }
.card-title { font-family: var(--font-serif); font-size: 22px; line-height: 1.25; margin: 0 0 8px; }
.card-author { font-size: 12px; font-weight: 700; letter-spacing: 0.06em; color: var(--muted); margin: 0 0 10px; }
.card-description { font-size: 15px; line-height: 1.55; margin: 0; }

@media (max-width: 1024px) {
    .news-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .hero-text { max-width: 70%; }
}

@media (max-width: 768px) {
    .menu-toggle { display: flex; }
    .nav {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: var(--paper);
        border-bottom: 1px solid var(--rule);
    }
    .nav.nav-open { display: block; }
    .nav-list { flex-direction: column; align-items: flex-start; padding: 16px 24px; gap: 16px; }
    .hero { min-height: 380px; background-size: contain; background-repeat: no-repeat; background-position: top right; }
    .hero-text { max-width: 100%; }
    .hero-text h1 { font-size: 32px; }
}

@media (max-width: 640px) {
    .news-grid { grid-template-columns: minmax(0, 1fr); }
    .search-form { flex-direction: column; }
    .search-input { border-right: 2px solid var(--ink); }
    .search-button { padding: 12px; }
}
"#;
