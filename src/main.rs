use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use views::Home;

/// Define a components module that contains all shared components for our app.
mod components;
/// Define a views module that contains the UI for all Layouts and Routes for our app.
mod views;

/// The Route enum is used to define the structure of internal routes in our app. All route enums need to derive
/// the [`Routable`] trait, which provides the necessary methods for the router to work.
///
/// The landing page is the only route: the call-to-action points off-app, so the browser
/// follows it as a plain link rather than the router.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

// We can import assets in dioxus with the `asset!` macro. This macro takes a path to an asset
// relative to the crate root. The returned `Asset` displays as the path the asset is served from.
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    dioxus::logger::initialize_default();
    info!("launching landing page");
    dioxus::launch(App);
}

/// App is the main component of our app. It wires the app-level stylesheet into the document
/// head and hands rendering over to the router, which resolves `/` to [`Home`].
#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
