use tracing::{info, warn};

use crate::model::errors::ModelError;
use crate::model::labels::Category;
use crate::model::nutrients::Product;
use crate::model::profiles::ProfileSet;
use crate::model::thresholds::{ClassifierParams, Procedure};
use crate::pipeline::stage4_outrank::OutrankingClassifier;
use crate::report::category_counts;

/// Classifier output for every row, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryColumn {
    pub name: String,
    pub procedure: Procedure,
    pub lambda: f64,
    pub values: Vec<Category>,
}

/// Products plus the category columns appended so far.
#[derive(Debug, Clone, Default)]
pub struct LabeledDataset {
    pub products: Vec<Product>,
    pub columns: Vec<CategoryColumn>,
}

impl LabeledDataset {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            columns: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&CategoryColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    fn append(&mut self, column: CategoryColumn) {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }
}

/// Column label for one (procedure, threshold) pair. Two decimals when they
/// represent the threshold exactly, otherwise the shortest exact form, so
/// distinct thresholds never share a column.
pub fn column_name(procedure: Procedure, lambda: f64) -> String {
    format!("electre_{}_l{}", procedure.name(), format_lambda(lambda))
}

fn format_lambda(lambda: f64) -> String {
    let short = format!("{lambda:.2}");
    if short.parse::<f64>() == Ok(lambda) {
        short
    } else {
        lambda.to_string()
    }
}

/// Classifies every row independently and appends the resulting column.
/// Re-running with the same procedure and threshold replaces that column.
pub fn classify_all(
    mut dataset: LabeledDataset,
    classifier: &OutrankingClassifier,
    procedure: Procedure,
) -> LabeledDataset {
    let values = dataset
        .products
        .iter()
        .map(|product| classifier.assign(&product.criteria(), procedure))
        .collect::<Vec<_>>();

    let lambda = classifier.params().lambda;
    dataset.append(CategoryColumn {
        name: column_name(procedure, lambda),
        procedure,
        lambda,
        values,
    });
    dataset
}

#[derive(Debug, Clone)]
pub struct Stage5Inputs<'a> {
    pub params: &'a ClassifierParams,
    pub profiles: &'a ProfileSet,
    pub lambdas: &'a [f64],
    pub procedures: &'a [Procedure],
}

/// Runs every (threshold, procedure) pair over the dataset.
pub fn run_stage5(
    mut dataset: LabeledDataset,
    inputs: &Stage5Inputs<'_>,
) -> Result<LabeledDataset, ModelError> {
    if dataset.is_empty() {
        warn!("no products to classify");
    }
    for &lambda in inputs.lambdas {
        let params = inputs.params.with_lambda(lambda)?;
        let classifier = OutrankingClassifier::new(params, inputs.profiles.clone())?;
        for &procedure in inputs.procedures {
            dataset = classify_all(dataset, &classifier, procedure);
            if let Some(column) = dataset.column(&column_name(procedure, lambda)) {
                let counts = category_counts(&column.values);
                info!(
                    column = %column.name,
                    a = counts[0],
                    b = counts[1],
                    c = counts[2],
                    d = counts[3],
                    e = counts[4],
                    "classified products"
                );
            }
        }
    }
    Ok(dataset)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_classify.rs"]
mod tests;
