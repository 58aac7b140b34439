use dioxus::prelude::*;

use crate::core::sections::SectionId;

struct NewsItem {
    date: &'static str,
    title: &'static str,
    excerpt: &'static str,
}

const NEWS_ITEMS: [NewsItem; 3] = [
    NewsItem {
        date: "June 2026",
        title: "Second conversion plant breaks ground in Punjab",
        excerpt: "The 120 kt/y facility will take rice straw from four districts \
                  ahead of the 2027 burning season.",
    },
    NewsItem {
        date: "March 2026",
        title: "First SAF batch certified for commercial blending",
        excerpt: "Independent testing confirmed our fuel meets ASTM D7566 \
                  requirements at a 40% blend ratio.",
    },
    NewsItem {
        date: "November 2025",
        title: "Residue purchase program expands to cotton stalk",
        excerpt: "Cotton growers join the program, adding a second harvest \
                  window to the sourcing calendar.",
    },
];

#[component]
pub fn NewsSection() -> Element {
    rsx! {
        section { id: SectionId::News.slug(), class: "section section-news",
            div { class: "section__header",
                h2 { "News" }
                div { class: "section__rule" }
            }
            div { class: "news__grid",
                for item in NEWS_ITEMS.iter() {
                    article { class: "news__card",
                        span { class: "news__date", "{item.date}" }
                        h3 { class: "news__title", "{item.title}" }
                        p { class: "news__excerpt", "{item.excerpt}" }
                    }
                }
            }
        }
    }
}
