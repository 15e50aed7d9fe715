use yew::prelude::*;

use crate::config;
use crate::viewport::use_nav_style;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let nav_style = use_nav_style();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", nav_style.class())}>
            <div class="nav-content">
                <div class="nav-brand">
                    <img src={config::get_logo_path()} alt="Vedanco Logo" class="nav-logo" />
                    <span class="nav-wordmark">
                        {"VEDANCO "}<span class="nav-wordmark-dim">{"MARKETING"}</span>
                    </span>
                </div>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#packages" class="nav-link" onclick={close_menu}>{"Packages"}</a>
                </div>
            </div>
        </nav>
    }
}
