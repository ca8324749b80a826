use crate::components::{HeroBottomImage, HeroSection, HeroSubtitle, RetroGridOptions};
use dioxus::prelude::*;

/// The Home page component that will be rendered when the current route is `[Route::Home]`.
/// It supplies the scheduling product's marketing copy to [`HeroSection`] and renders nothing else.
#[component]
pub fn Home() -> Element {
    let subtitle = HeroSubtitle {
        regular: "Your Schedule,".into(),
        gradient: " Simplified".into(),
    };
    let bottom_image = HeroBottomImage {
        light: "https://www.launchuicomponents.com/app-light.png".into(),
        dark: "https://www.launchuicomponents.com/app-dark.png".into(),
    };
    let grid_options = RetroGridOptions {
        angle: 65.0,
        cell_size: 50.0,
        opacity: 0.4,
        light_line_color: "#4a4a4a".into(),
        dark_line_color: "#2a2a2a".into(),
    };

    rsx! {
        HeroSection {
            title: "Welcome to Our Platform",
            subtitle,
            description: "The modern platform for service providers to showcase their offerings and for clients to book available slots with ease.",
            cta_text: "Book now",
            cta_href: "/signup",
            bottom_image: Some(bottom_image),
            grid_options,
        }
    }
}
