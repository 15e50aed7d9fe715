use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod error;
mod indicator;
mod layout;
mod viewport;

mod components {
    pub mod catalog_error;
    pub mod common_features;
    pub mod comparison;
    pub mod header;
    pub mod navbar;
}
mod pages {
    pub mod pricing;
}

use components::navbar::Navbar;
use pages::pricing::PricingPage;

/// The page is served from `/`, `/index.html` or any sub-path it is hosted
/// under, so every unmatched path falls back to the pricing view.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    #[not_found]
    Pricing,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <PricingPage /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                    body {
                        margin: 0;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1rem 1.5rem;
                        background: transparent;
                        transition: all 0.3s;
                    }
                    .top-nav.scrolled {
                        background: rgba(246, 243, 238, 0.9);
                        backdrop-filter: blur(16px);
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .nav-logo {
                        width: 48px;
                        height: 48px;
                        object-fit: contain;
                    }
                    .nav-wordmark {
                        font-weight: 700;
                        font-size: 1.125rem;
                        color: #214b25;
                    }
                    .nav-wordmark-dim {
                        opacity: 0.7;
                    }
                    .nav-link {
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #214b25;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #214b25;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: block;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1rem 1.5rem;
                            background: rgba(246, 243, 238, 0.95);
                        }
                    }
                "#}
            </style>
            <Navbar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting pricing page");
    yew::Renderer::<App>::new().render();
}
