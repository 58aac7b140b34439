use dioxus::prelude::*;

use crate::core::sections::SectionId;

// Deliberately just a funnel: no form, no validation, one mail action.
#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section { id: SectionId::Contact.slug(), class: "section section-contact",
            div { class: "section__header",
                h2 { "Contact" }
                div { class: "section__rule" }
                p { class: "section__lede",
                    "Feedstock, offtake, or investment: tell us where you sit in "
                    "the chain and we will route you to the right team."
                }
            }
            div { class: "contact__panel",
                div { class: "contact__details",
                    p { class: "contact__line",
                        strong { "Head office" }
                        span { "4th Floor, Meridian Tower, Gurugram, Haryana 122002" }
                    }
                    p { class: "contact__line",
                        strong { "Phone" }
                        span { "+91 124 400 2180" }
                    }
                    p { class: "contact__line",
                        strong { "Email" }
                        span { "partnerships@agribiofuels-global.com" }
                    }
                }
                a {
                    class: "button button--primary button--md contact__mail-action",
                    href: "mailto:partnerships@agribiofuels-global.com",
                    "Email our team"
                }
            }
        }
    }
}
