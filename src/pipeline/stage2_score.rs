use tracing::{debug, info};

use crate::model::labels::NutriLabel;
use crate::model::nutrients::{NutrientVector, Product};
use crate::model::tables::ScoringTables;

/// Points per component. `protein_points` is the contribution actually
/// counted; `protein_points_raw` is the table value before the protein rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub negative_score: i32,
    pub positive_score: i32,
    pub energy_points: u8,
    pub saturated_fat_points: u8,
    pub sugars_points: u8,
    pub sodium_points: u8,
    pub protein_points: u8,
    pub protein_points_raw: u8,
    pub fiber_points: u8,
    pub fruit_veg_points: u8,
    pub protein_counted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: i32,
    pub label: NutriLabel,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    tables: ScoringTables,
}

impl ScoringEngine {
    pub fn new(tables: ScoringTables) -> Self {
        Self { tables }
    }

    pub fn score(&self, nutrients: &NutrientVector) -> ScoreResult {
        let t = &self.tables;

        let energy_points = t.energy.points(nutrients.energy_kj);
        let saturated_fat_points = t.saturated_fat.points(nutrients.saturated_fat_g);
        let sugars_points = t.sugars.points(nutrients.sugars_g);
        let sodium_points = t.sodium.points(nutrients.sodium_mg);
        let negative_score = i32::from(energy_points)
            + i32::from(saturated_fat_points)
            + i32::from(sugars_points)
            + i32::from(sodium_points);

        let protein_points_raw = t.protein.points(nutrients.protein_g);
        let fiber_points = t.fiber.points(nutrients.fiber_g);
        let fruit_veg_points = t.fruit_veg.points(nutrients.fruit_veg_pct);

        let protein_counted = !(negative_score >= t.protein_cap_negative_min
            && nutrients.fruit_veg_pct < t.protein_cap_fruit_veg_max);
        let protein_points = if protein_counted {
            protein_points_raw
        } else {
            0
        };
        let positive_score =
            i32::from(protein_points) + i32::from(fiber_points) + i32::from(fruit_veg_points);

        let score = negative_score - positive_score;

        ScoreResult {
            score,
            label: t.bands.label(score),
            breakdown: ScoreBreakdown {
                negative_score,
                positive_score,
                energy_points,
                saturated_fat_points,
                sugars_points,
                sodium_points,
                protein_points,
                protein_points_raw,
                fiber_points,
                fruit_veg_points,
                protein_counted,
            },
        }
    }
}

/// How many reference grades shipped with the dataset the engine reproduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreVerification {
    pub labels_checked: usize,
    pub labels_matched: usize,
    pub scores_checked: usize,
    pub scores_matched: usize,
}

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub results: Vec<ScoreResult>,
    pub verification: ScoreVerification,
}

pub fn run_stage2(products: &[Product], engine: &ScoringEngine) -> Stage2Output {
    let mut results = Vec::with_capacity(products.len());
    let mut verification = ScoreVerification::default();

    for product in products {
        let result = engine.score(&product.nutrients);

        if let Some(expected) = product.reference.label {
            verification.labels_checked += 1;
            if expected == result.label {
                verification.labels_matched += 1;
            } else {
                debug!(
                    product = %product.display_name(),
                    expected = %expected,
                    computed = %result.label,
                    "reference label mismatch"
                );
            }
        }
        if let Some(expected) = product.reference.score {
            verification.scores_checked += 1;
            if expected == result.score {
                verification.scores_matched += 1;
            } else {
                debug!(
                    product = %product.display_name(),
                    expected,
                    computed = result.score,
                    "reference score mismatch"
                );
            }
        }

        results.push(result);
    }

    if verification.labels_checked > 0 {
        info!(
            checked = verification.labels_checked,
            matched = verification.labels_matched,
            "verified computed labels against reference grades"
        );
    }

    Stage2Output {
        results,
        verification,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
