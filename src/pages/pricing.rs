use log::error;
use yew::prelude::*;

use crate::catalog::Catalog;
use crate::components::catalog_error::CatalogErrorPanel;
use crate::components::common_features::CommonFeatures;
use crate::components::comparison::{ComparisonTable, PlanCards};
use crate::components::header::Header;
use crate::layout;
use crate::viewport::{use_viewport, Viewport};

#[function_component(PricingPage)]
pub fn pricing_page() -> Html {
    let catalog = use_memo(
        |_| {
            Catalog::embedded().map_err(|e| {
                error!("Pricing catalog rejected: {}", e);
                e.to_string()
            })
        },
        (),
    );
    let viewport = use_viewport();

    let packages = match &*catalog {
        Ok(catalog) => {
            let plans = match viewport {
                Viewport::Wide => html! { <ComparisonTable table={layout::wide_table(catalog)} /> },
                Viewport::Narrow => html! { <PlanCards cards={layout::plan_cards(catalog)} /> },
            };
            html! {
                <>
                    {plans}
                    <CommonFeatures features={catalog.common_features.clone()} />
                </>
            }
        }
        Err(message) => html! { <CatalogErrorPanel message={message.clone()} /> },
    };

    html! {
        <main class="pricing-page">
            <style>
                {r#"
                    .pricing-page {
                        min-height: 100vh;
                        background: #f6f3ee;
                        color: #214b25;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .pricing-hero {
                        position: relative;
                        padding: 8rem 1.5rem 0.5rem;
                        text-align: center;
                    }
                    .pricing-hero-glow {
                        position: absolute;
                        inset: 0;
                        margin: auto;
                        width: 600px;
                        max-width: 100%;
                        height: 600px;
                        border-radius: 50%;
                        background: rgba(33, 75, 37, 0.05);
                        filter: blur(120px);
                        pointer-events: none;
                    }
                    .pricing-hero-content {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .pricing-hero h1 {
                        font-size: 2.5rem;
                        font-weight: 900;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        margin-bottom: 1rem;
                    }
                    .pricing-hero-tagline {
                        font-size: 1.1rem;
                        font-weight: 700;
                        letter-spacing: 0.25em;
                        text-transform: uppercase;
                        opacity: 0.6;
                    }
                    .packages {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem 6rem;
                    }
                    .comparison-table {
                        border: 1px solid rgba(33, 75, 37, 0.15);
                        border-radius: 20px;
                        overflow: hidden;
                        box-shadow: 0 20px 40px rgba(33, 75, 37, 0.08);
                    }
                    .comparison-row, .comparison-category {
                        display: grid;
                        border-bottom: 1px solid rgba(33, 75, 37, 0.15);
                    }
                    .comparison-head {
                        position: sticky;
                        top: 72px;
                        z-index: 10;
                        background: #f6f3ee;
                    }
                    .comparison-label-cell {
                        padding: 1.5rem;
                        font-weight: 700;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        border-right: 1px solid rgba(33, 75, 37, 0.15);
                    }
                    .comparison-key {
                        font-weight: 900;
                        letter-spacing: 0.2em;
                    }
                    .comparison-plan {
                        padding: 1.5rem;
                        text-align: center;
                        border-right: 1px solid rgba(33, 75, 37, 0.15);
                    }
                    .comparison-plan h3, .plan-card-header h3 {
                        font-size: 0.875rem;
                        font-weight: 900;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        margin: 0 0 0.5rem;
                    }
                    .comparison-price {
                        font-size: 1.5rem;
                        font-weight: 900;
                    }
                    .comparison-period {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        opacity: 0.5;
                    }
                    .comparison-category {
                        background: rgba(33, 75, 37, 0.04);
                    }
                    .comparison-category-label {
                        padding: 1rem 1.5rem;
                        font-weight: 900;
                        font-size: 0.875rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                    }
                    .comparison-row:hover {
                        background: rgba(33, 75, 37, 0.04);
                    }
                    .comparison-cell {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                        border-right: 1px solid rgba(33, 75, 37, 0.15);
                    }
                    .comparison-plan:last-child, .comparison-cell:last-child {
                        border-right: none;
                    }
                    .elite {
                        background: rgba(33, 75, 37, 0.05);
                    }
                    .category-icon {
                        margin-right: 0.5rem;
                    }
                    .indicator {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .icon-check {
                        color: #214b25;
                    }
                    .icon-cross {
                        color: #c0392b;
                    }
                    .indicator-text {
                        font-size: 0.875rem;
                        font-weight: 700;
                        opacity: 0.8;
                    }
                    .indicator-missing {
                        opacity: 0.4;
                    }
                    .plan-cta {
                        display: inline-block;
                        margin-top: 0.75rem;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        background: #214b25;
                        color: #fff;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-decoration: none;
                        text-transform: uppercase;
                    }
                    .plan-cards {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .plan-card {
                        border: 1px solid rgba(33, 75, 37, 0.15);
                        border-radius: 20px;
                        padding: 1.5rem;
                        box-shadow: 0 10px 30px rgba(33, 75, 37, 0.08);
                    }
                    .plan-card-header {
                        text-align: center;
                        padding-bottom: 1rem;
                        border-bottom: 1px solid rgba(33, 75, 37, 0.15);
                    }
                    .plan-card-section h4 {
                        font-size: 0.8rem;
                        font-weight: 900;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        margin: 1.25rem 0 0.5rem;
                    }
                    .plan-card-section ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .plan-card-section li {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.5rem 0;
                        border-bottom: 1px dashed rgba(33, 75, 37, 0.1);
                    }
                    .plan-card-label {
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-transform: uppercase;
                    }
                    .common-features {
                        max-width: 56rem;
                        margin: 5rem auto 0;
                        padding: 3rem;
                        border: 1px solid rgba(33, 75, 37, 0.15);
                        border-radius: 18px;
                        background: rgba(255, 255, 255, 0.6);
                    }
                    .common-features-title {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 2.5rem;
                    }
                    .common-features-title h3 {
                        font-size: 1.25rem;
                        font-weight: 900;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        margin: 0;
                    }
                    .common-features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .common-feature {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 12px;
                        background: rgba(33, 75, 37, 0.03);
                        font-size: 0.875rem;
                        font-weight: 700;
                    }
                    .common-feature-badge {
                        flex-shrink: 0;
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #214b25, #2e6b35);
                    }
                    .common-feature-badge .icon-check {
                        color: #fff;
                    }
                    .catalog-error {
                        max-width: 40rem;
                        margin: 2rem auto;
                        padding: 2rem;
                        border: 1px solid #c0392b;
                        border-radius: 12px;
                        color: #c0392b;
                        text-align: center;
                    }
                    @media (max-width: 768px) {
                        .pricing-hero h1 {
                            font-size: 1.75rem;
                        }
                        .common-features {
                            padding: 1.5rem;
                        }
                    }
                "#}
            </style>
            <Header />
            <section id="packages" class="packages">
                {packages}
            </section>
        </main>
    }
}
