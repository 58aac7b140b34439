//! Shared UI crate for the Agri-BioFuels Global site. Components, views, and
//! the interactive page logic live here.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod button;
    pub mod icons;
    pub mod navbar;

    pub use button::{Button, ButtonSize, ButtonVariant};
    pub use navbar::register_brand_nav;
    pub use navbar::BrandNav;
    pub use navbar::NavBar;
}
