use dioxus::prelude::*;

use super::{
    AboutSection, ContactSection, HeroSection, ImpactSection, NewsSection, PartnersSection,
    TechnologySection,
};

/// The single marketing page.
///
/// Sections render in [`SectionId::ALL`](crate::core::sections::SectionId)
/// order; the navbar's scroll tracking depends on the DOM order matching the
/// visual stacking.
#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so the page
    // re-renders when the visitor switches language in the navbar.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        main { class: "page",
            HeroSection {}
            AboutSection {}
            TechnologySection {}
            ImpactSection {}
            PartnersSection {}
            NewsSection {}
            ContactSection {}
        }
    }
}
