use std::rc::Rc;

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{CloseIcon, MenuIcon};
use crate::core::dom::{self, ScrollSubscription};
use crate::core::nav::NavEngine;
use crate::core::sections::SectionId;
use crate::i18n;
use crate::t;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const LOGO: Asset = asset!("/assets/branding/logo.svg");

/// Platforms register a link builder so the brand control can navigate to
/// the site root without this crate knowing the platform's `Route` enum.
/// The builder receives the brand markup and wraps it in a router `Link`.
///
/// If no builder is registered the brand renders as an inert element, which
/// keeps previews and tests working without a router in scope.
pub struct BrandNav {
    pub home: fn(body: Element) -> Element,
}

static BRAND_NAV: OnceCell<BrandNav> = OnceCell::new();

pub fn register_brand_nav(builder: BrandNav) {
    let _ = BRAND_NAV.set(builder);
}

/// Fixed site header: brand, scroll-synchronized section menu, language
/// selector, and the contact call to action.
///
/// All interactive state lives in a [`NavEngine`] signal; this component
/// only wires browser events into it and renders the result.
#[component]
pub fn NavBar() -> Element {
    i18n::init();

    let mut engine = use_signal(NavEngine::default);
    let mut logo_hidden = use_signal(|| false);
    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    // Global language code signal, when the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    // Window scroll listener, held for the component's lifetime. The hook
    // value drops on unmount, which removes the listener again, so repeated
    // mount cycles never stack handlers.
    use_hook(|| {
        Rc::new(ScrollSubscription::subscribe(move || {
            let scroll_y = dom::scroll_y();
            let offsets = dom::section_offsets();
            engine.with_mut(|eng| eng.handle_scroll(scroll_y, &offsets));
        }))
    });

    // Menu selections close the mobile menu whether or not the target
    // section exists; the scroll itself only happens when it does.
    let mut scroll_to = move |section: SectionId| {
        let target = dom::section_top(section);
        if let Some(top) = engine.with_mut(|eng| eng.select_section(target)) {
            dom::smooth_scroll_to(top);
        }
    };

    let on_lang_change = move |evt: dioxus::events::FormEvent| {
        let tag = evt.value();
        if i18n::set_language(&tag).is_ok() {
            current_lang.set(tag.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(tag);
            }
        }
    };

    let snapshot = engine();
    let header_class = if snapshot.condensed {
        "navbar navbar--condensed"
    } else {
        "navbar"
    };
    let tagline = t!("brand-tagline");

    let brand_body = rsx! {
        if !logo_hidden() {
            img {
                class: "navbar__logo",
                src: LOGO,
                alt: "Agri-BioFuels Global logo",
                // Broken logo: hide the element rather than show a
                // placeholder glyph next to the wordmark.
                onerror: move |_| logo_hidden.set(true),
            }
        }
        span { class: "navbar__wordmark", "Agri-BioFuels Global" }
        span { class: "navbar__tagline", "{tagline}" }
    };
    let brand = match BRAND_NAV.get() {
        Some(builder) => (builder.home)(brand_body),
        None => rsx! {
            span { class: "navbar__brand-link", {brand_body} }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { class: "{header_class}",
            // Hidden marker keeps this component re-rendering when the
            // global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand", {brand} }

                // Desktop navigation
                nav { class: "navbar__links",
                    for section in SectionId::ALL {
                        button {
                            r#type: "button",
                            class: format!(
                                "navbar__link{}",
                                if snapshot.active == section { " navbar__link--active" } else { "" }
                            ),
                            onclick: move |_| scroll_to(section),
                            {section.label()}
                        }
                    }

                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_lang_change,
                                {
                                    langs().iter().map(|code| {
                                        let c = code.clone();
                                        let label = native_language_label(&c).to_string();
                                        rsx! {
                                            option { key: "{c}", value: "{c}", "{label}" }
                                        }
                                    })
                                }
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        onclick: move |_| scroll_to(SectionId::Contact),
                        {t!("nav-contact-cta")}
                    }
                }

                // Mobile menu toggle
                button {
                    r#type: "button",
                    class: "navbar__menu-toggle",
                    aria_label: "Toggle navigation menu",
                    onclick: move |_| engine.with_mut(|eng| eng.toggle_menu()),
                    if snapshot.menu_open {
                        CloseIcon {}
                    } else {
                        MenuIcon {}
                    }
                }
            }

            // Mobile navigation
            if snapshot.menu_open {
                div { class: "navbar__mobile",
                    for section in SectionId::ALL {
                        button {
                            r#type: "button",
                            class: format!(
                                "navbar__mobile-link{}",
                                if snapshot.active == section { " navbar__mobile-link--active" } else { "" }
                            ),
                            onclick: move |_| scroll_to(section),
                            {section.label()}
                        }
                    }

                    if show_switcher {
                        select {
                            class: "navbar__mobile-locale",
                            aria_label: t!("nav-language-label"),
                            value: "{current_lang()}",
                            oninput: on_lang_change,
                            {
                                langs().iter().map(|code| {
                                    let c = code.clone();
                                    let label = native_language_label(&c).to_string();
                                    rsx! {
                                        option { key: "{c}", value: "{c}", "{label}" }
                                    }
                                })
                            }
                        }
                    }

                    div { class: "navbar__mobile-cta",
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Full,
                            onclick: move |_| scroll_to(SectionId::Contact),
                            {t!("nav-contact-cta")}
                        }
                    }
                }
            }
        }
    }
}

/// Native-script display name for a locale tag, for the language menu.
fn native_language_label(tag: &str) -> &str {
    match tag {
        "en-US" => "English",
        "hi-IN" => "हिन्दी",
        "ta-IN" => "தமிழ்",
        other => other,
    }
}
