use dioxus::prelude::*;

use crate::components::icons::ArrowRightIcon;
use crate::components::{Button, ButtonVariant};
use crate::core::dom;
use crate::core::sections::SectionId;

const HERO_POSTER: Asset = asset!("/assets/branding/hero-poster.svg");

// The background loop is deployed alongside the site rather than embedded in
// the bundle; the poster covers the section while it streams in (or if it
// never does).
const HERO_VIDEO_SRC: &str = "/media/paddy-field-loop.mp4";

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: SectionId::Home.slug(), class: "section section-hero",
            video {
                class: "hero__video",
                src: HERO_VIDEO_SRC,
                poster: HERO_POSTER,
                autoplay: true,
                muted: true,
                r#loop: true,
            }
            div { class: "hero__scrim" }
            div { class: "hero__content",
                h1 { class: "hero__title", "Turning agricultural waste into clean fuel" }
                p { class: "hero__lede",
                    "Agri-BioFuels Global converts crop residues that would otherwise "
                    "be burned in the field into sustainable aviation and maritime "
                    "fuel, paying farmers for what used to be a liability."
                }
                div { class: "hero__actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        icon: rsx! {
                            ArrowRightIcon {}
                        },
                        onclick: move |_| dom::smooth_scroll_to_section(SectionId::Technology),
                        "Explore the technology"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| dom::smooth_scroll_to_section(SectionId::Contact),
                        "Talk to us"
                    }
                }
            }
        }
    }
}
