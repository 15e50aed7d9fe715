use yew::prelude::*;

use crate::config;
use crate::indicator::IndicatorIcon;
use crate::layout::{PlanCard, WideTable};

#[derive(Properties, PartialEq)]
pub struct ComparisonTableProps {
    pub table: WideTable,
}

#[function_component(ComparisonTable)]
pub fn comparison_table(props: &ComparisonTableProps) -> Html {
    let grid_style = format!("grid-template-columns: {};", props.table.grid_template());

    html! {
        <div class="comparison-table">
            <div class="comparison-row comparison-head" style={grid_style.clone()}>
                <div class="comparison-label-cell">
                    <span class="comparison-key">{"Key Features"}</span>
                </div>
                {
                    props.table.columns.iter().map(|plan| html! {
                        <div key={plan.id.clone()} class={classes!("comparison-plan", plan.is_elite.then(|| "elite"))}>
                            <h3>{plan.name.clone()}</h3>
                            <div class="comparison-price">{plan.price.clone()}</div>
                            <div class="comparison-period">{format!("/ {}", plan.billing_period)}</div>
                            <a class="plan-cta" href={config::get_contact_url()}>{"Get Started"}</a>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            {
                props.table.groups.iter().map(|group| html! {
                    <div key={group.category.clone()} class="comparison-group">
                        <div class="comparison-category" style={grid_style.clone()}>
                            <div class="comparison-category-label" style="grid-column: 1 / -1;">
                                {
                                    if let Some(icon) = &group.icon {
                                        html! { <span class="category-icon">{icon.clone()}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                                {group.category.clone()}
                            </div>
                        </div>
                        {
                            group.rows.iter().map(|row| html! {
                                <div key={row.label.clone()} class="comparison-row" style={grid_style.clone()}>
                                    <div class="comparison-label-cell">{row.label.clone()}</div>
                                    {
                                        row.cells.iter().map(|cell| html! {
                                            <div key={cell.plan_id.clone()} class={classes!("comparison-cell", cell.is_elite.then(|| "elite"))}>
                                                <IndicatorIcon indicator={cell.indicator.clone()} />
                                            </div>
                                        }).collect::<Html>()
                                    }
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlanCardsProps {
    pub cards: Vec<PlanCard>,
}

#[function_component(PlanCards)]
pub fn plan_cards(props: &PlanCardsProps) -> Html {
    html! {
        <div class="plan-cards">
            {
                props.cards.iter().map(|card| html! {
                    <div key={card.plan.id.clone()} class={classes!("plan-card", card.plan.is_elite.then(|| "elite"))}>
                        <div class="plan-card-header">
                            <h3>{card.plan.name.clone()}</h3>
                            <div class="comparison-price">{card.plan.price.clone()}</div>
                            <div class="comparison-period">{format!("/ {}", card.plan.billing_period)}</div>
                            <a class="plan-cta" href={config::get_contact_url()}>{"Get Started"}</a>
                        </div>
                        {
                            card.sections.iter().map(|section| html! {
                                <div key={section.category.clone()} class="plan-card-section">
                                    <h4>
                                        {
                                            if let Some(icon) = &section.icon {
                                                html! { <span class="category-icon">{icon.clone()}</span> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        {section.category.clone()}
                                    </h4>
                                    <ul>
                                        {
                                            section.entries.iter().map(|entry| html! {
                                                <li key={entry.label.clone()}>
                                                    <span class="plan-card-label">{entry.label.clone()}</span>
                                                    <IndicatorIcon indicator={entry.indicator.clone()} />
                                                </li>
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::layout;
    use yew::ServerRenderer;

    fn catalog() -> Catalog {
        Catalog::embedded().expect("embedded catalog should load")
    }

    #[tokio::test]
    async fn table_renders_each_plan_heading_once() {
        let catalog = catalog();
        let table = layout::wide_table(&catalog);
        let html = ServerRenderer::<ComparisonTable>::with_props(move || ComparisonTableProps { table })
            .hydratable(false)
            .render()
            .await;

        for plan in &catalog.plans {
            assert_eq!(html.matches(&format!("<h3>{}</h3>", plan.name)).count(), 1, "{}", plan.id);
            assert_eq!(html.matches(&format!(">{}</div>", plan.price)).count(), 1, "{}", plan.id);
        }
        assert_eq!(html.matches("Key Features").count(), 1);
    }

    #[tokio::test]
    async fn category_dividers_span_every_column() {
        let catalog = catalog();
        let table = layout::wide_table(&catalog);
        let html = ServerRenderer::<ComparisonTable>::with_props(move || ComparisonTableProps { table })
            .hydratable(false)
            .render()
            .await;

        assert_eq!(html.matches("comparison-category-label").count(), catalog.blocks.len());
        assert_eq!(html.matches("grid-column: 1 / -1;").count(), catalog.blocks.len());
        assert!(html.contains("Advanced Lead &amp; Sales System"));
    }

    #[tokio::test]
    async fn cards_render_each_plan_heading_once() {
        let catalog = catalog();
        let cards = layout::plan_cards(&catalog);
        let html = ServerRenderer::<PlanCards>::with_props(move || PlanCardsProps { cards })
            .hydratable(false)
            .render()
            .await;

        for plan in &catalog.plans {
            assert_eq!(html.matches(&format!("<h3>{}</h3>", plan.name)).count(), 1, "{}", plan.id);
            assert_eq!(html.matches(&format!(">{}</div>", plan.price)).count(), 1, "{}", plan.id);
        }
        let rows: usize = catalog.blocks.iter().map(|b| b.rows.len()).sum();
        assert_eq!(html.matches("plan-card-label").count(), rows * catalog.plans.len());
    }
}
