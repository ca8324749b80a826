use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Headline split into a plain span and a gradient-styled span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSubtitle {
    pub regular: String,
    pub gradient: String,
}

impl Default for HeroSubtitle {
    fn default() -> Self {
        Self {
            regular: "Designing your projects faster with ".into(),
            gradient: "the largest figma UI kit.".into(),
        }
    }
}

/// Screenshot pair, one image per color scheme. The stylesheet keeps exactly
/// one of the two visible at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroBottomImage {
    pub light: String,
    pub dark: String,
}

impl Default for HeroBottomImage {
    fn default() -> Self {
        Self {
            light: "https://farmui.vercel.app/dashboard-light.png".into(),
            dark: "https://farmui.vercel.app/dashboard.png".into(),
        }
    }
}

/// Appearance knobs for [`RetroGrid`]. Unset fields fall back to the same
/// values the component itself defaults to, whether the struct is built in
/// code or deserialized from a partial configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetroGridOptions {
    pub angle: f32,
    pub cell_size: f32,
    pub opacity: f32,
    pub light_line_color: String,
    pub dark_line_color: String,
}

impl Default for RetroGridOptions {
    fn default() -> Self {
        Self {
            angle: 65.0,
            cell_size: 60.0,
            opacity: 0.5,
            light_line_color: "gray".into(),
            dark_line_color: "gray".into(),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct HeroSectionProps {
    /// Badge headline shown above the main title.
    #[props(into, default = String::from("Build products for everyone"))]
    pub title: String,
    #[props(default)]
    pub subtitle: HeroSubtitle,
    /// Supporting paragraph under the headline.
    #[props(into, default = String::from("Sed ut perspiciatis unde omnis iste natus voluptatem accusantium doloremque laudantium, totam rem aperiam, eaque ipsa quae."))]
    pub description: String,
    #[props(into, default = String::from("Browse courses"))]
    pub cta_text: String,
    #[props(into, default = String::from("#"))]
    pub cta_href: String,
    /// Pass `None` to drop the screenshot block entirely.
    #[props(!optional, default = Some(HeroBottomImage::default()))]
    pub bottom_image: Option<HeroBottomImage>,
    #[props(default)]
    pub grid_options: RetroGridOptions,
    /// Extra class merged onto the root container.
    #[props(into, default)]
    pub class: String,
    #[props(extends = GlobalAttributes, extends = div)]
    pub attributes: Vec<Attribute>,
}

/// The hero banner: a badge, a two-part gradient headline, a description, a
/// call-to-action link inside a spinning conic-gradient ring, and a themed
/// screenshot pair, layered over a radial backdrop and the [`RetroGrid`]
/// animation. Every prop has a default, so `HeroSection {}` renders a
/// complete section.
#[allow(non_snake_case)]
pub fn HeroSection(props: HeroSectionProps) -> Element {
    let grid = props.grid_options;

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div {
            class: "hero-section {props.class}",
            ..props.attributes,

            div { class: "hero-backdrop" }
            section { class: "hero-body",
                RetroGrid {
                    angle: grid.angle,
                    cell_size: grid.cell_size,
                    opacity: grid.opacity,
                    light_line_color: grid.light_line_color,
                    dark_line_color: grid.dark_line_color,
                }
                div { class: "hero-inner",
                    div { class: "hero-copy",
                        h1 { class: "hero-badge",
                            {props.title}
                            svg {
                                class: "hero-badge-chevron",
                                xmlns: "http://www.w3.org/2000/svg",
                                width: "16",
                                height: "16",
                                view_box: "0 0 24 24",
                                fill: "none",
                                stroke: "currentColor",
                                stroke_width: "2",
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                path { d: "m9 18 6-6-6-6" }
                            }
                        }
                        h2 { class: "hero-headline",
                            {props.subtitle.regular}
                            span { class: "hero-headline-gradient", {props.subtitle.gradient} }
                        }
                        p { class: "hero-description", {props.description} }
                        div { class: "hero-cta-row",
                            span { class: "hero-cta-ring",
                                span { class: "hero-cta-spin" }
                                div { class: "hero-cta-inner",
                                    a { class: "hero-cta", href: props.cta_href, {props.cta_text} }
                                }
                            }
                        }
                    }
                    if let Some(image) = props.bottom_image {
                        div { class: "hero-screenshot",
                            img {
                                class: "hero-screenshot-light",
                                src: image.light,
                                alt: "Dashboard preview",
                            }
                            img {
                                class: "hero-screenshot-dark",
                                src: image.dark,
                                alt: "Dashboard preview",
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct RetroGridProps {
    #[props(default = 65.0)]
    pub angle: f32,
    #[props(default = 60.0)]
    pub cell_size: f32,
    #[props(default = 0.5)]
    pub opacity: f32,
    #[props(into, default = String::from("gray"))]
    pub light_line_color: String,
    #[props(into, default = String::from("gray"))]
    pub dark_line_color: String,
}

/// Decorative animated perspective grid behind the hero content. The props
/// are handed to the stylesheet as CSS custom properties; everything else is
/// declarative CSS, so there is no animation control surface.
#[allow(non_snake_case)]
pub fn RetroGrid(props: RetroGridProps) -> Element {
    let grid_vars = format!(
        "--grid-angle: {}deg; --cell-size: {}px; --opacity: {}; --light-line: {}; --dark-line: {};",
        props.angle, props.cell_size, props.opacity, props.light_line_color, props.dark_line_color,
    );

    rsx! {
        div { class: "retro-grid", style: "{grid_vars}",
            div { class: "retro-grid-plane",
                div { class: "retro-grid-lines" }
            }
            div { class: "retro-grid-fade" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::prelude::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[component]
    fn Bare() -> Element {
        rsx! { HeroSection {} }
    }

    #[component]
    fn ExplicitDefaults() -> Element {
        let subtitle = HeroSubtitle {
            regular: "Designing your projects faster with ".into(),
            gradient: "the largest figma UI kit.".into(),
        };
        let bottom_image = HeroBottomImage {
            light: "https://farmui.vercel.app/dashboard-light.png".into(),
            dark: "https://farmui.vercel.app/dashboard.png".into(),
        };
        let grid_options = RetroGridOptions {
            angle: 65.0,
            cell_size: 60.0,
            opacity: 0.5,
            light_line_color: "gray".into(),
            dark_line_color: "gray".into(),
        };
        rsx! {
            HeroSection {
                title: "Build products for everyone",
                subtitle,
                description: "Sed ut perspiciatis unde omnis iste natus voluptatem accusantium doloremque laudantium, totam rem aperiam, eaque ipsa quae.",
                cta_text: "Browse courses",
                cta_href: "#",
                bottom_image: Some(bottom_image),
                grid_options,
            }
        }
    }

    #[component]
    fn Custom() -> Element {
        rsx! {
            HeroSection {
                id: "hero",
                class: "promo",
                title: "Welcome to Our Platform",
                description: "Book available slots with ease.",
                cta_text: "Book now",
                cta_href: "/signup",
            }
        }
    }

    #[component]
    fn NoScreenshot() -> Element {
        rsx! {
            HeroSection { bottom_image: None }
        }
    }

    #[component]
    fn FlatGrid() -> Element {
        let grid_options = RetroGridOptions {
            angle: 0.0,
            ..Default::default()
        };
        rsx! {
            HeroSection { grid_options }
        }
    }

    #[test]
    fn omitted_props_render_like_explicit_defaults() {
        assert_eq!(render(Bare), render(ExplicitDefaults));
    }

    #[test]
    fn caller_text_appears_verbatim() {
        let html = render(Custom);
        assert!(html.contains("Welcome to Our Platform"));
        assert!(html.contains("Book available slots with ease."));
        assert!(html.contains("Book now"));
    }

    #[test]
    fn cta_href_is_forwarded_unchanged() {
        let html = render(Custom);
        assert!(html.contains(r#"href="/signup""#));
    }

    #[test]
    fn extra_class_and_attributes_land_on_the_root() {
        let html = render(Custom);
        assert!(html.contains("hero-section promo"));
        assert!(html.contains(r#"id="hero""#));
    }

    #[test]
    fn screenshot_pair_emits_both_theme_variants() {
        let html = render(Bare);
        assert!(html.contains("hero-screenshot-light"));
        assert!(html.contains("hero-screenshot-dark"));
        assert!(html.contains("https://farmui.vercel.app/dashboard-light.png"));
        assert!(html.contains("https://farmui.vercel.app/dashboard.png"));
    }

    #[test]
    fn screenshot_block_can_be_suppressed() {
        let html = render(NoScreenshot);
        assert!(!html.contains("hero-screenshot"));
    }

    #[test]
    fn zero_angle_grid_still_renders() {
        let html = render(FlatGrid);
        assert!(html.contains("--grid-angle: 0deg"));
        assert!(html.contains("retro-grid-lines"));
    }

    #[test]
    fn grid_options_become_custom_properties() {
        let html = render(ExplicitDefaults);
        assert!(html.contains("--grid-angle: 65deg"));
        assert!(html.contains("--cell-size: 60px"));
        assert!(html.contains("--light-line: gray"));
    }

    #[test]
    fn partial_grid_config_fills_in_defaults() {
        let grid: RetroGridOptions = serde_json::from_str(r#"{ "angle": 30.0 }"#).unwrap();
        assert_eq!(grid.angle, 30.0);
        assert_eq!(grid.cell_size, 60.0);
        assert_eq!(grid.opacity, 0.5);
        assert_eq!(grid.light_line_color, "gray");
        assert_eq!(grid.dark_line_color, "gray");
    }
}
