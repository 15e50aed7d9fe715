//! Builds the two page layouts out of one catalog: the comparison grid for
//! wide screens and one self-contained card per plan for narrow screens.

use crate::catalog::{Catalog, Plan};
use crate::indicator::Indicator;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanHeading {
    pub id: String,
    pub name: String,
    pub price: String,
    pub billing_period: String,
    pub is_elite: bool,
}

impl PlanHeading {
    fn new(plan: &Plan, billing_period: &str) -> Self {
        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            price: plan.price.clone(),
            billing_period: billing_period.to_string(),
            is_elite: plan.is_elite,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WideCell {
    pub plan_id: String,
    pub is_elite: bool,
    pub indicator: Indicator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub label: String,
    pub cells: Vec<WideCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WideGroup {
    pub category: String,
    pub icon: Option<String>,
    pub rows: Vec<WideRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    pub columns: Vec<PlanHeading>,
    pub groups: Vec<WideGroup>,
}

impl WideTable {
    /// CSS grid template: the feature label column plus one column per plan.
    pub fn grid_template(&self) -> String {
        format!("minmax(220px, 300px) repeat({}, minmax(0, 1fr))", self.columns.len())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardEntry {
    pub label: String,
    pub indicator: Indicator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardSection {
    pub category: String,
    pub icon: Option<String>,
    pub entries: Vec<CardEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanCard {
    pub plan: PlanHeading,
    pub sections: Vec<CardSection>,
}

pub fn wide_table(catalog: &Catalog) -> WideTable {
    let columns = catalog
        .plans
        .iter()
        .map(|plan| PlanHeading::new(plan, &catalog.billing_period))
        .collect();

    let groups = catalog
        .blocks
        .iter()
        .map(|block| WideGroup {
            category: block.category.clone(),
            icon: block.icon.clone(),
            rows: block
                .rows
                .iter()
                .map(|row| WideRow {
                    label: row.label.clone(),
                    cells: catalog
                        .plans
                        .iter()
                        .map(|plan| WideCell {
                            plan_id: plan.id.clone(),
                            is_elite: plan.is_elite,
                            indicator: Indicator::render(row.value_for(&plan.id)),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    WideTable { columns, groups }
}

/// Each card walks the whole matrix for its own plan column.
pub fn plan_cards(catalog: &Catalog) -> Vec<PlanCard> {
    catalog
        .plans
        .iter()
        .map(|plan| PlanCard {
            plan: PlanHeading::new(plan, &catalog.billing_period),
            sections: catalog
                .blocks
                .iter()
                .map(|block| CardSection {
                    category: block.category.clone(),
                    icon: block.icon.clone(),
                    entries: block
                        .rows
                        .iter()
                        .map(|row| CardEntry {
                            label: row.label.clone(),
                            indicator: Indicator::render(row.value_for(&plan.id)),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().expect("embedded catalog should load")
    }

    #[test]
    fn every_plan_heading_appears_once_per_layout() {
        let catalog = catalog();
        let table = wide_table(&catalog);
        let cards = plan_cards(&catalog);

        for plan in &catalog.plans {
            let in_table = table.columns.iter().filter(|c| c.name == plan.name && c.price == plan.price);
            assert_eq!(in_table.count(), 1, "{} in wide layout", plan.id);

            let in_cards = cards.iter().filter(|c| c.plan.name == plan.name && c.plan.price == plan.price);
            assert_eq!(in_cards.count(), 1, "{} in narrow layout", plan.id);
        }
    }

    #[test]
    fn layouts_follow_catalog_order() {
        let catalog = catalog();
        let table_ids: Vec<_> = wide_table(&catalog).columns.into_iter().map(|c| c.id).collect();
        let card_ids: Vec<_> = plan_cards(&catalog).into_iter().map(|c| c.plan.id).collect();
        let catalog_ids: Vec<_> = catalog.plans.iter().map(|p| p.id.clone()).collect();
        assert_eq!(table_ids, catalog_ids);
        assert_eq!(card_ids, catalog_ids);

        let categories: Vec<_> = wide_table(&catalog).groups.into_iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            [
                "Platforms Covered",
                "Content Deliverables",
                "Advanced Lead & Sales System",
                "Reporting & Dedicated Support"
            ]
        );
    }

    #[test]
    fn wide_and_narrow_layouts_agree_on_every_cell() {
        let catalog = catalog();
        let table = wide_table(&catalog);
        let cards = plan_cards(&catalog);

        for (group_idx, group) in table.groups.iter().enumerate() {
            for (row_idx, row) in group.rows.iter().enumerate() {
                for (cell, card) in row.cells.iter().zip(&cards) {
                    assert_eq!(cell.plan_id, card.plan.id);
                    let section = &card.sections[group_idx];
                    let entry = &section.entries[row_idx];
                    assert_eq!(section.category, group.category);
                    assert_eq!(entry.label, row.label);
                    assert_eq!(entry.indicator, cell.indicator, "{} / {} / {}", group.category, row.label, card.plan.id);
                }
            }
        }
    }

    #[test]
    fn youtube_row_is_elite_only() {
        let catalog = catalog();
        let table = wide_table(&catalog);
        let row = table
            .groups
            .iter()
            .flat_map(|g| &g.rows)
            .find(|r| r.label == "YouTube")
            .expect("YouTube row");

        let rendered: Vec<_> = row.cells.iter().map(|c| (c.plan_id.as_str(), c.indicator.clone())).collect();
        assert_eq!(
            rendered,
            [
                ("starter", Indicator::Excluded),
                ("growth", Indicator::Excluded),
                ("premium", Indicator::Excluded),
                ("elite", Indicator::Included),
            ]
        );

        for card in plan_cards(&catalog) {
            let entry = card
                .sections
                .iter()
                .flat_map(|s| &s.entries)
                .find(|e| e.label == "YouTube")
                .expect("YouTube entry");
            let expected = if card.plan.id == "elite" { Indicator::Included } else { Indicator::Excluded };
            assert_eq!(entry.indicator, expected, "{}", card.plan.id);
        }
    }

    #[test]
    fn text_cells_render_verbatim() {
        let catalog = catalog();
        let table = wide_table(&catalog);
        let shoot = table
            .groups
            .iter()
            .flat_map(|g| &g.rows)
            .find(|r| r.label == "Professional Shoot")
            .expect("Professional Shoot row");
        let symbols: Vec<_> = shoot.cells.iter().map(|c| c.indicator.symbol().to_string()).collect();
        assert_eq!(symbols, ["✗", "1 Shoots", "2 Shoots", "Drone / Pro"]);
    }

    #[test]
    fn grid_template_has_a_column_per_plan() {
        let table = wide_table(&catalog());
        assert_eq!(table.grid_template(), "minmax(220px, 300px) repeat(4, minmax(0, 1fr))");
        assert!(table.columns.iter().all(|c| c.billing_period == "Monthly"));
        assert!(table.groups.iter().flat_map(|g| &g.rows).flat_map(|r| &r.cells).filter(|c| c.is_elite).all(|c| c.plan_id == "elite"));
    }
}
