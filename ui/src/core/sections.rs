//! Registry of the page's scrollable sections.
//!
//! The navbar (both render paths), the page shell, and the smooth-scroll
//! targets all consume the same ordered list, so the menu order and the DOM
//! order cannot drift apart.

/// One of the fixed page anchors, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Technology,
    Impact,
    Partners,
    News,
    Contact,
}

impl SectionId {
    /// Every section, top to bottom.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Technology,
        SectionId::Impact,
        SectionId::Partners,
        SectionId::News,
        SectionId::Contact,
    ];

    /// Stable DOM id carried by the section element.
    pub fn slug(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Technology => "technology",
            SectionId::Impact => "impact",
            SectionId::Partners => "partners",
            SectionId::News => "news",
            SectionId::Contact => "contact",
        }
    }

    /// Reverse of [`SectionId::slug`]. Ids that are not page sections
    /// resolve to `None` and are skipped by the scroll tracking.
    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.slug() == raw)
    }

    /// Localized menu label.
    pub fn label(self) -> String {
        match self {
            SectionId::Home => crate::t!("nav-home"),
            SectionId::About => crate::t!("nav-about"),
            SectionId::Technology => crate::t!("nav-technology"),
            SectionId::Impact => crate::t!("nav-impact"),
            SectionId::Partners => crate::t!("nav-partners"),
            SectionId::News => crate::t!("nav-news"),
            SectionId::Contact => crate::t!("nav-contact"),
        }
    }
}

/// A section's resolved vertical position, in document order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionOffset {
    pub id: SectionId,
    /// `offsetTop` of the section element, in CSS pixels.
    pub top: f64,
}
