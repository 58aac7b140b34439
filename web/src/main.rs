use dioxus::prelude::*;

use ui::components::navbar::{register_brand_nav, BrandNav};
use ui::components::NavBar;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn brand_home(body: Element) -> Element {
    rsx!(Link {
        class: "navbar__brand-link",
        to: Route::Home {},
        {body}
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Route the navbar's brand control through the router.
        register_brand_nav(BrandNav { home: brand_home });
    }

    // Global reactive language code signal; the navbar updates it when the
    // visitor picks a language, and localized labels re-render everywhere.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web shell wrapping every route with the shared navbar.
#[component]
fn WebShell() -> Element {
    rsx! {
        NavBar {}
        Outlet::<Route> {}
    }
}
