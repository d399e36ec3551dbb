use std::io::Read;

use serde::{Deserialize, Deserializer};

use crate::input::InputError;
use crate::model::criteria::Criterion;
use crate::model::errors::ModelError;
use crate::model::labels::NutriLabel;
use crate::model::nutrients::{NutrientVector, Product, ReferenceGrade};

/// Reads products from CSV. Every criterion column must be present in the
/// header before any row is parsed; extra columns are ignored.
pub fn parse_products<R: Read>(reader: R) -> Result<Vec<Product>, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for criterion in Criterion::ALL {
        let present = headers
            .iter()
            .any(|h| h == criterion.name() || h == criterion.source_name());
        if !present {
            return Err(ModelError::MissingCriterion(criterion.name().to_string()).into());
        }
    }

    let mut products = Vec::new();
    for (idx, record) in csv_reader.deserialize::<ProductRow>().enumerate() {
        let row = record?;
        products.push(row.into_product(idx)?);
    }
    Ok(products)
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(
        default,
        alias = "Nom_Produit",
        deserialize_with = "empty_string_as_none"
    )]
    name: Option<String>,
    #[serde(default, alias = "Marque", deserialize_with = "empty_string_as_none")]
    brand: Option<String>,
    #[serde(
        default,
        alias = "Categorie",
        deserialize_with = "empty_string_as_none"
    )]
    category: Option<String>,
    #[serde(alias = "Energie_kJ")]
    energy_kj: f64,
    #[serde(alias = "Acides_Gras_Satures_g")]
    saturated_fat_g: f64,
    #[serde(alias = "Sucres_g")]
    sugars_g: f64,
    #[serde(alias = "Sodium_mg")]
    sodium_mg: f64,
    #[serde(alias = "Proteines_g")]
    protein_g: f64,
    #[serde(alias = "Fibres_g")]
    fiber_g: f64,
    #[serde(alias = "Fruits_Legumes_Pct")]
    fruit_veg_pct: f64,
    #[serde(alias = "Nombre_Additifs")]
    additives: f64,
    #[serde(
        default,
        alias = "Label_Nutriscore",
        deserialize_with = "empty_string_as_none"
    )]
    reference_label: Option<String>,
    #[serde(
        default,
        alias = "Score_Nutriscore",
        deserialize_with = "empty_string_as_none"
    )]
    reference_score: Option<String>,
}

impl ProductRow {
    fn into_product(self, id: usize) -> Result<Product, InputError> {
        let row = id + 1;

        let nutrients = NutrientVector {
            energy_kj: quantity(row, "energy_kj", self.energy_kj)?,
            saturated_fat_g: quantity(row, "saturated_fat_g", self.saturated_fat_g)?,
            sugars_g: quantity(row, "sugars_g", self.sugars_g)?,
            sodium_mg: quantity(row, "sodium_mg", self.sodium_mg)?,
            protein_g: quantity(row, "protein_g", self.protein_g)?,
            fiber_g: quantity(row, "fiber_g", self.fiber_g)?,
            fruit_veg_pct: quantity(row, "fruit_veg_pct", self.fruit_veg_pct)?,
        };
        if nutrients.fruit_veg_pct > 100.0 {
            return Err(invalid(row, "fruit_veg_pct", nutrients.fruit_veg_pct));
        }

        let additives = quantity(row, "additives", self.additives)?;
        if additives.fract() != 0.0 || additives > f64::from(u32::MAX) {
            return Err(invalid(row, "additives", additives));
        }

        let label = match self.reference_label.as_deref() {
            Some(raw) => Some(NutriLabel::parse(raw).ok_or_else(|| InputError::InvalidValue {
                row,
                field: "reference_label",
                value: raw.to_string(),
            })?),
            None => None,
        };
        let score = match self.reference_score.as_deref() {
            Some(raw) => Some(parse_score(raw).ok_or_else(|| InputError::InvalidValue {
                row,
                field: "reference_score",
                value: raw.to_string(),
            })?),
            None => None,
        };

        Ok(Product {
            id,
            name: self.name,
            brand: self.brand,
            category: self.category,
            nutrients,
            additives: additives as u32,
            reference: ReferenceGrade { label, score },
        })
    }
}

fn quantity(row: usize, field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid(row, field, value))
    }
}

fn invalid(row: usize, field: &'static str, value: f64) -> InputError {
    InputError::InvalidValue {
        row,
        field,
        value: value.to_string(),
    }
}

fn parse_score(raw: &str) -> Option<i32> {
    if let Ok(v) = raw.parse::<i32>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?;
    (v.is_finite() && v.fract() == 0.0).then_some(v as i32)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/dataset.rs"]
mod tests;
