use std::collections::HashSet;
use std::fmt;

use log::{debug, info};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::CatalogError;

const EMBEDDED_CATALOG: &str = include_str!("../assets/pricing.json");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub is_elite: bool,
}

/// A single cell of the feature matrix. Anything other than a bool or a
/// string is refused by the deserializer.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    Flag(bool),
    Text(String),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub label: String,
    /// Entries in document order. Repeated keys are kept so validation can refuse them.
    #[serde(deserialize_with = "plan_values")]
    pub values: Vec<(String, CellValue)>,
}

impl FeatureRow {
    pub fn value_for(&self, plan_id: &str) -> Option<&CellValue> {
        self.values.iter().find(|(id, _)| id == plan_id).map(|(_, value)| value)
    }
}

fn plan_values<'de, D>(deserializer: D) -> Result<Vec<(String, CellValue)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PlanValues;

    impl<'de> Visitor<'de> for PlanValues {
        type Value = Vec<(String, CellValue)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of plan ids to bool or string values")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut values = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry::<String, CellValue>()? {
                values.push(entry);
            }
            Ok(values)
        }
    }

    deserializer.deserialize_map(PlanValues)
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FeatureBlock {
    pub category: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub rows: Vec<FeatureRow>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Catalog {
    pub billing_period: String,
    pub plans: Vec<Plan>,
    pub blocks: Vec<FeatureBlock>,
    #[serde(default)]
    pub common_features: Vec<String>,
}

impl Catalog {
    /// Loads the catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(source)?;
        catalog.validate()?;
        info!(
            "Loaded pricing catalog: {} plans, {} categories",
            catalog.plans.len(),
            catalog.blocks.len()
        );
        Ok(catalog)
    }

    /// Every row must carry exactly one non-empty value per known plan.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.plans.is_empty() {
            return Err(CatalogError::NoPlans);
        }

        let mut plan_ids = HashSet::new();
        for plan in &self.plans {
            if !plan_ids.insert(plan.id.as_str()) {
                return Err(CatalogError::DuplicatePlan(plan.id.clone()));
            }
        }

        let mut categories = HashSet::new();
        for block in &self.blocks {
            if !categories.insert(block.category.as_str()) {
                return Err(CatalogError::DuplicateCategory(block.category.clone()));
            }

            let mut labels = HashSet::new();
            for row in &block.rows {
                if !labels.insert(row.label.as_str()) {
                    return Err(CatalogError::DuplicateRow {
                        category: block.category.clone(),
                        label: row.label.clone(),
                    });
                }
                self.validate_row(row, &plan_ids)?;
            }
            debug!("Category `{}` validated ({} rows)", block.category, block.rows.len());
        }

        Ok(())
    }

    fn validate_row(&self, row: &FeatureRow, plan_ids: &HashSet<&str>) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for (id, _) in &row.values {
            if !plan_ids.contains(id.as_str()) {
                return Err(CatalogError::UnknownPlan {
                    label: row.label.clone(),
                    plan: id.clone(),
                });
            }
            if !seen.insert(id.as_str()) {
                return Err(CatalogError::DuplicateValue {
                    label: row.label.clone(),
                    plan: id.clone(),
                });
            }
        }

        for plan in &self.plans {
            match row.value_for(&plan.id) {
                None => {
                    return Err(CatalogError::MissingValue {
                        label: row.label.clone(),
                        plan: plan.id.clone(),
                    })
                }
                Some(CellValue::Text(text)) if text.trim().is_empty() => {
                    return Err(CatalogError::EmptyText {
                        label: row.label.clone(),
                        plan: plan.id.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}
