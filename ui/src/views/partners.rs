use dioxus::prelude::*;

use crate::core::sections::SectionId;

struct Partner {
    name: &'static str,
    role: &'static str,
}

const PARTNERS: [Partner; 6] = [
    Partner { name: "IndiGrain Cooperative", role: "Feedstock sourcing" },
    Partner { name: "Port of Chennai Bunkering", role: "Maritime offtake" },
    Partner { name: "SkyBridge Air Cargo", role: "Aviation offtake" },
    Partner { name: "TERI Bioenergy Lab", role: "Process research" },
    Partner { name: "GreenRail Logistics", role: "Residue haulage" },
    Partner { name: "Sunrise AgriBank", role: "Farmer financing" },
];

#[component]
pub fn PartnersSection() -> Element {
    rsx! {
        section { id: SectionId::Partners.slug(), class: "section section-partners",
            div { class: "section__header",
                h2 { "Partners" }
                div { class: "section__rule" }
                p { class: "section__lede",
                    "From the field to the fuel line, we work with organizations "
                    "that already move the goods."
                }
            }
            div { class: "partners__grid",
                for partner in PARTNERS.iter() {
                    div { class: "partners__card",
                        span { class: "partners__name", "{partner.name}" }
                        span { class: "partners__role", "{partner.role}" }
                    }
                }
            }
        }
    }
}
