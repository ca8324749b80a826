//! The components module contains all shared components for our app. Components are the building
//! blocks of dioxus apps. Here that is the hero section the landing page is built from, along with
//! its configuration types.

mod hero_section;
pub use hero_section::{
    HeroBottomImage, HeroSection, HeroSectionProps, HeroSubtitle, RetroGrid, RetroGridOptions,
    RetroGridProps,
};
