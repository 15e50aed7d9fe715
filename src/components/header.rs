use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <section class="pricing-hero">
            <div class="pricing-hero-glow"></div>
            <div class="pricing-hero-content">
                <h1>{"VEDANCO MARKETING – PRICING"}</h1>
                <p class="pricing-hero-tagline">{"Simple • Transparent • Result-Oriented"}</p>
            </div>
        </section>
    }
}
