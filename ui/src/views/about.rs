use dioxus::prelude::*;

use crate::core::sections::SectionId;

struct Pillar {
    title: &'static str,
    copy: &'static str,
}

const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Farm-gate sourcing",
        copy: "We contract rice straw, bagasse, and cotton stalk directly from \
               farming cooperatives, putting a price on residues that are \
               otherwise burned in the open.",
    },
    Pillar {
        title: "Distributed plants",
        copy: "Conversion plants sit inside the sourcing radius of the biomass \
               they process, keeping haulage short and rural jobs local.",
    },
    Pillar {
        title: "Drop-in fuels",
        copy: "Our output meets existing aviation and maritime fuel standards, \
               so operators decarbonize without re-engineering their fleets.",
    },
];

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: SectionId::About.slug(), class: "section section-about",
            div { class: "section__header",
                h2 { "Who we are" }
                div { class: "section__rule" }
                p { class: "section__lede",
                    "An agricultural-biofuel company closing the loop between the "
                    "field and the fuel tank."
                }
            }
            div { class: "about__grid",
                for pillar in PILLARS.iter() {
                    div { class: "about__card",
                        h3 { "{pillar.title}" }
                        p { "{pillar.copy}" }
                    }
                }
            }
        }
    }
}
