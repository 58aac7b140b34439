//! Page views: the single-page shell and the marketing sections composing it.

mod about;
mod contact;
mod hero;
mod home;
mod impact;
mod news;
mod partners;
mod technology;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use home::Home;
pub use impact::ImpactSection;
pub use news::NewsSection;
pub use partners::PartnersSection;
pub use technology::TechnologySection;
