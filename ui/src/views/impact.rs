use dioxus::prelude::*;

use crate::core::sections::SectionId;

struct ImpactStat {
    value: &'static str,
    label: &'static str,
    detail: &'static str,
}

const IMPACT_STATS: [ImpactStat; 4] = [
    ImpactStat {
        value: "80%",
        label: "Lifecycle carbon reduction",
        detail: "Versus fossil jet fuel, on a well-to-wake basis",
    },
    ImpactStat {
        value: "2.1M t",
        label: "Crop residue diverted yearly",
        detail: "Straw and stalk that would otherwise burn in the field",
    },
    ImpactStat {
        value: "12,000+",
        label: "Farming households paid",
        detail: "Residue purchase agreements across three states",
    },
    ImpactStat {
        value: "40%",
        label: "Less seasonal smog",
        detail: "Measured around our first sourcing district",
    },
];

#[component]
pub fn ImpactSection() -> Element {
    rsx! {
        section { id: SectionId::Impact.slug(), class: "section section-impact",
            div { class: "section__header",
                h2 { "Impact" }
                div { class: "section__rule" }
                p { class: "section__lede",
                    "Every tonne of residue we buy is a tonne that is not burned."
                }
            }
            div { class: "impact__grid",
                for stat in IMPACT_STATS.iter() {
                    div { class: "impact__stat",
                        strong { class: "impact__value", "{stat.value}" }
                        span { class: "impact__label", "{stat.label}" }
                        span { class: "impact__detail", "{stat.detail}" }
                    }
                }
            }
        }
    }
}
