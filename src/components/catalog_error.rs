use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CatalogErrorProps {
    pub message: String,
}

/// Shown in place of the plans when the catalog could not be loaded.
#[function_component(CatalogErrorPanel)]
pub fn catalog_error_panel(props: &CatalogErrorProps) -> Html {
    html! {
        <div class="catalog-error" role="alert">
            <h3>{"Pricing is temporarily unavailable"}</h3>
            <p>{props.message.clone()}</p>
        </div>
    }
}
