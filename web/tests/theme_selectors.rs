#![cfg(test)]
/*!
Theme selector lint for the web build.

The page sections (hero, technology showcase, comparison table, process
flow, shared buttons) are styled purely through classes in
`web/assets/main.css`; a dropped or renamed selector degrades styling only
at runtime. This test embeds the same file the `asset!` constant in
`web/src/main.rs` ships and asserts a curated set of selectors is still
present, so the regression fails the build instead.

A substring check is deliberate: it catches renames early without pulling
a CSS parser into the dev-dependency tree. When a selector is renamed on
purpose, update the markup in `ui/` and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

/// Core selectors / tokens that must exist in the shipped theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".section {",
    ".section__header",
    ".section__rule",
    ".section__lede",
    // Hero
    ".section-hero",
    ".hero__video",
    ".hero__scrim",
    ".hero__content",
    ".hero__actions",
    // Shared buttons
    ".button {",
    ".button--primary",
    ".button--secondary",
    ".button--ghost",
    ".button--sm",
    ".button--full",
    ".button__icon",
    // Technology showcase
    ".tech-model {",
    ".tech-model__panel",
    ".tech-model__layer",
    ".tech-model__hint",
    ".tech-steps",
    ".tech-step__number",
    // Comparison table
    ".tech-table {",
    ".tech-table__row--ours",
    ".tech-table__badge",
    // Process flow
    ".process-flow {",
    ".process-flow__track",
    ".process-flow__step",
    ".process-flow__arrow",
    // Remaining sections
    ".about__grid",
    ".impact__stat",
    ".partners__grid",
    ".news__card",
    ".contact__panel",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 860px)",
];

#[test]
fn theme_css_is_not_empty() {
    assert!(
        !THEME_CSS.trim().is_empty(),
        "Theme CSS file appears to be empty."
    );
}

#[test]
fn theme_css_contains_required_selectors() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Missing selectors in web/assets/main.css:\n  {}",
        missing.join("\n  ")
    );
}
