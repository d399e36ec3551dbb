use crate::model::criteria::{Criterion, CriterionValues};
use crate::model::labels::NutriLabel;

/// Per-100g nutrient quantities of one product.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NutrientVector {
    pub energy_kj: f64,
    pub saturated_fat_g: f64,
    pub sugars_g: f64,
    pub sodium_mg: f64,
    pub protein_g: f64,
    pub fiber_g: f64,
    pub fruit_veg_pct: f64,
}

/// Grade already attached to a product by its data source, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferenceGrade {
    pub label: Option<NutriLabel>,
    pub score: Option<i32>,
}

/// One dataset row with every field the scoring engine and the classifier need.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    pub id: usize,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub nutrients: NutrientVector,
    pub additives: u32,
    pub reference: ReferenceGrade,
}

impl Product {
    pub fn criteria(&self) -> CriterionValues {
        let n = &self.nutrients;
        let mut values = CriterionValues::default();
        values.set(Criterion::EnergyKj, n.energy_kj);
        values.set(Criterion::SaturatedFatG, n.saturated_fat_g);
        values.set(Criterion::SugarsG, n.sugars_g);
        values.set(Criterion::SodiumMg, n.sodium_mg);
        values.set(Criterion::ProteinG, n.protein_g);
        values.set(Criterion::FiberG, n.fiber_g);
        values.set(Criterion::FruitVegPct, n.fruit_veg_pct);
        values.set(Criterion::Additives, f64::from(self.additives));
        values
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("product_{}", self.id))
    }
}
