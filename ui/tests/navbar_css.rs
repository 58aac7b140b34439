//! Ensures the navbar stylesheet stays present and keeps the selectors the
//! component markup relies on.
//!
//! Rationale:
//! - The header/highlight treatment is pure CSS over classes the component
//!   emits; a renamed or dropped selector degrades styling only at runtime.
//! - This test fails the build early instead.
//!
//! If you intentionally rename a class, update both the component markup in
//! `ui/src/components/navbar.rs` and this list.

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

#[test]
fn navbar_css_exists_and_is_not_empty() {
    assert!(
        !NAVBAR_CSS.trim().is_empty(),
        "Navbar CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn navbar_css_contains_expected_selectors() {
    let required = [
        ".navbar {",
        ".navbar--condensed",
        ".navbar__brand",
        ".navbar__brand-link",
        ".navbar__logo",
        ".navbar__links",
        ".navbar__link {",
        ".navbar__link--active",
        ".navbar__locale",
        ".navbar__menu-toggle",
        ".navbar__mobile {",
        ".navbar__mobile-link",
        ".navbar__mobile-link--active",
        ".navbar__mobile-cta",
        ".visually-hidden",
    ];
    for selector in required {
        assert!(
            NAVBAR_CSS.contains(selector),
            "Expected selector `{selector}` missing from navbar CSS"
        );
    }
}
