use std::rc::Rc;

use dioxus::events::MouseEvent;
use dioxus::prelude::*;

use crate::components::icons::DownloadIcon;
use crate::components::{Button, ButtonVariant};
use crate::core::sections::SectionId;
use crate::core::tilt::Rotation;

/// One row of the conversion-technology comparison table.
struct TechnologyComparison {
    name: &'static str,
    efficiency: &'static str,
    feedstock: &'static str,
    output: &'static str,
    carbon: &'static str,
    highlight: bool,
}

const COMPARISONS: [TechnologyComparison; 4] = [
    TechnologyComparison {
        name: "CAT-HTR (our technology)",
        efficiency: "85-90%",
        feedstock: "Wide range of agricultural waste",
        output: "High-quality SAF & SMF",
        carbon: "Up to 80% reduction",
        highlight: true,
    },
    TechnologyComparison {
        name: "Pyrolysis",
        efficiency: "60-75%",
        feedstock: "Limited feedstock range",
        output: "Lower quality, needs upgrading",
        carbon: "40-60% reduction",
        highlight: false,
    },
    TechnologyComparison {
        name: "Gasification",
        efficiency: "65-80%",
        feedstock: "Requires dry feedstock",
        output: "Syngas, requires processing",
        carbon: "45-65% reduction",
        highlight: false,
    },
    TechnologyComparison {
        name: "Fermentation",
        efficiency: "40-55%",
        feedstock: "Sugars and starches",
        output: "Primarily ethanol",
        carbon: "35-50% reduction",
        highlight: false,
    },
];

/// One stage of the conversion walkthrough.
struct ProcessStep {
    title: &'static str,
    detail: &'static str,
}

const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        title: "Collection & preparation",
        detail: "Agricultural waste is collected, cleaned, and sized to prepare \
                 it for conversion.",
    },
    ProcessStep {
        title: "Hydrothermal processing",
        detail: "Biomass is converted at high temperature and pressure in the \
                 presence of water and catalysts.",
    },
    ProcessStep {
        title: "Refinement",
        detail: "The biocrude oil is refined into fuels that meet international \
                 standards.",
    },
    ProcessStep {
        title: "Distribution",
        detail: "Sustainable fuels are delivered to aviation and maritime \
                 partners.",
    },
];

/// Short labels for the process-flow diagram, in pipeline order.
const FLOW_LABELS: [&str; 4] = [
    "Biomass collection",
    "CAT-HTR processing",
    "Refinement",
    "SAF & SMF production",
];

/// Technology showcase: the tilting reactor panel, the comparison table, and
/// the process-flow diagram.
#[component]
pub fn TechnologySection() -> Element {
    let mut rotation = use_signal(Rotation::neutral);
    let mut panel: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Pointer position maps straight to an orientation; bounds are read off
    // the mounted element on every move, so a window resize cannot skew the
    // mapping.
    let on_panel_move = move |evt: MouseEvent| {
        let point = evt.element_coordinates();
        async move {
            let Some(el) = panel() else { return };
            let Ok(rect) = el.get_client_rect().await else { return };
            rotation.set(Rotation::from_pointer(
                point.x,
                point.y,
                rect.size.width,
                rect.size.height,
            ));
        }
    };

    let transform = rotation().css_transform();

    rsx! {
        section { id: SectionId::Technology.slug(), class: "section section-technology",
            div { class: "section__header",
                h2 { "Our CAT-HTR technology" }
                div { class: "section__rule" }
                p { class: "section__lede",
                    "Catalytic Hydrothermal Reactor technology converts biomass "
                    "into high-quality renewable fuels through an innovative "
                    "liquefaction process."
                }
            }

            div { class: "tech-overview",
                div { class: "tech-model",
                    div {
                        class: "tech-model__panel",
                        style: "transform: perspective(1000px) {transform}; transform-style: preserve-3d;",
                        onmounted: move |evt| panel.set(Some(evt.data())),
                        onmousemove: on_panel_move,
                        onmouseleave: move |_| rotation.set(Rotation::neutral()),

                        // Stylized reactor cross-section, back to front.
                        div { class: "tech-model__layer tech-model__layer--outer" }
                        div { class: "tech-model__layer tech-model__layer--shell" }
                        div { class: "tech-model__layer tech-model__layer--jacket" }
                        div { class: "tech-model__layer tech-model__layer--bed" }
                        div { class: "tech-model__layer tech-model__layer--core" }
                    }
                    div { class: "tech-model__hint", "Hover to rotate" }
                }

                div { class: "tech-walkthrough",
                    h3 { "How CAT-HTR works" }
                    p {
                        "The Catalytic Hydrothermal Reactor uses supercritical "
                        "water to convert agricultural waste into biocrude oil, "
                        "which is then refined into sustainable aviation fuel "
                        "(SAF) and sustainable maritime fuel (SMF)."
                    }
                    ol { class: "tech-steps",
                        for (index, step) in PROCESS_STEPS.iter().enumerate() {
                            li { class: "tech-step",
                                span { class: "tech-step__number", "{index + 1}" }
                                div { class: "tech-step__body",
                                    h4 { "{step.title}" }
                                    p { "{step.detail}" }
                                }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        icon: rsx! {
                            DownloadIcon {}
                        },
                        "Request technical whitepaper"
                    }
                }
            }

            div { class: "tech-table",
                div { class: "tech-table__header",
                    h3 { "Technology comparison" }
                    p { "How CAT-HTR stacks up against alternative conversion routes." }
                }
                div { class: "tech-table__scroll",
                    table {
                        thead {
                            tr {
                                th { "Technology" }
                                th { "Conversion efficiency" }
                                th { "Feedstock flexibility" }
                                th { "Output quality" }
                                th { "Carbon reduction" }
                            }
                        }
                        tbody {
                            for row in COMPARISONS.iter() {
                                tr {
                                    class: format!(
                                        "tech-table__row{}",
                                        if row.highlight { " tech-table__row--ours" } else { "" }
                                    ),
                                    td {
                                        span { class: "tech-table__name", "{row.name}" }
                                        if row.highlight {
                                            span { class: "tech-table__badge", "Our technology" }
                                        }
                                    }
                                    td { "{row.efficiency}" }
                                    td { "{row.feedstock}" }
                                    td { "{row.output}" }
                                    td { "{row.carbon}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "process-flow",
                h3 { "Biomass to fuel, end to end" }
                div { class: "process-flow__track",
                    for (index, label) in FLOW_LABELS.iter().enumerate() {
                        div { class: "process-flow__step",
                            span { class: "process-flow__badge", "{index + 1}" }
                            h4 { "{label}" }
                        }
                        if index < FLOW_LABELS.len() - 1 {
                            svg {
                                class: "process-flow__arrow",
                                view_box: "0 0 48 16",
                                "aria-hidden": "true",
                                line {
                                    x1: "0",
                                    y1: "8",
                                    x2: "36",
                                    y2: "8",
                                    stroke: "currentColor",
                                    stroke_width: "3",
                                    stroke_dasharray: "6 6",
                                }
                                polygon { points: "36,3 48,8 36,13", fill: "currentColor" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_technology_is_highlighted() {
        let highlighted = COMPARISONS.iter().filter(|row| row.highlight).count();
        assert_eq!(highlighted, 1);
        assert!(COMPARISONS[0].highlight, "our row leads the table");
    }

    #[test]
    fn comparison_rows_keep_their_order() {
        let names: Vec<&str> = COMPARISONS.iter().map(|row| row.name).collect();
        assert_eq!(
            names,
            vec![
                "CAT-HTR (our technology)",
                "Pyrolysis",
                "Gasification",
                "Fermentation"
            ]
        );
    }

    #[test]
    fn walkthrough_and_diagram_both_describe_four_stages() {
        assert_eq!(PROCESS_STEPS.len(), 4);
        assert_eq!(FLOW_LABELS.len(), 4);
        assert_eq!(PROCESS_STEPS[0].title, "Collection & preparation");
        assert_eq!(FLOW_LABELS[3], "SAF & SMF production");
    }
}
