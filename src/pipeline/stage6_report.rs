use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::model::criteria::Criterion;
use crate::model::labels::NutriLabel;
use crate::model::profiles::ProfileSet;
use crate::model::thresholds::ClassifierParams;
use crate::pipeline::stage2_score::{ScoreResult, ScoreVerification};
use crate::pipeline::stage5_classify::LabeledDataset;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    ColumnSummary, SummaryData, VerificationSummary, category_distribution, format_f64_6,
    label_distribution,
};

#[derive(Debug, Clone)]
pub struct Stage6Input<'a> {
    pub dataset: &'a LabeledDataset,
    pub scores: &'a [ScoreResult],
    pub verification: ScoreVerification,
    pub profiles: &'a ProfileSet,
    pub params: &'a ClassifierParams,
    pub lambdas: &'a [f64],

    pub input_path: String,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage6Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let products_path = out_dir.join("products.tsv");
    write_products_tsv(input, &products_path)?;

    let profiles_path = out_dir.join("profiles.tsv");
    write_profiles_tsv(input.profiles, &profiles_path)?;

    let summary = build_summary(input);
    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(&summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(&summary))?;

    info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

pub fn build_summary(input: &Stage6Input<'_>) -> SummaryData {
    let labels = input.scores.iter().map(|s| s.label).collect::<Vec<NutriLabel>>();
    let weights = input
        .params
        .weights
        .normalized()
        .iter()
        .map(|(c, w)| (c.name().to_string(), w))
        .collect();
    let classifications = input
        .dataset
        .columns
        .iter()
        .map(|column| ColumnSummary {
            name: column.name.clone(),
            procedure: column.procedure.name(),
            lambda: column.lambda,
            distribution: category_distribution(&column.values),
        })
        .collect();

    SummaryData {
        tool: input.tool_name.clone(),
        version: input.tool_version.clone(),
        input: input.input_path.clone(),
        n_products: input.dataset.len(),
        lambdas: input.lambdas.to_vec(),
        weights,
        profiles: input.profiles.clone(),
        nutriscore: label_distribution(&labels),
        classifications,
        verification: VerificationSummary {
            labels_checked: input.verification.labels_checked,
            labels_matched: input.verification.labels_matched,
            scores_checked: input.verification.scores_checked,
            scores_matched: input.verification.scores_matched,
        },
    }
}

fn write_products_tsv(input: &Stage6Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    let mut header = vec!["id", "name", "brand", "category"];
    header.extend(Criterion::ALL.iter().map(|c| c.name()));
    header.extend([
        "score",
        "negative_score",
        "positive_score",
        "protein_counted",
        "nutriscore",
    ]);
    header.extend(input.dataset.columns.iter().map(|c| c.name.as_str()));
    writeln!(w, "{}", header.join("\t"))?;

    for (row, product) in input.dataset.products.iter().enumerate() {
        let score = &input.scores[row];
        let criteria = product.criteria();

        let mut fields = vec![
            product.id.to_string(),
            sanitize(product.name.as_deref()),
            sanitize(product.brand.as_deref()),
            sanitize(product.category.as_deref()),
        ];
        fields.extend(Criterion::ALL.iter().map(|&c| criteria.get(c).to_string()));
        fields.push(score.score.to_string());
        fields.push(score.breakdown.negative_score.to_string());
        fields.push(score.breakdown.positive_score.to_string());
        fields.push(score.breakdown.protein_counted.to_string());
        fields.push(score.label.to_string());
        for column in &input.dataset.columns {
            fields.push(column.values[row].to_string());
        }
        writeln!(w, "{}", fields.join("\t"))?;
    }

    w.flush()
}

fn write_profiles_tsv(profiles: &ProfileSet, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    let mut header = vec!["profile"];
    header.extend(Criterion::ALL.iter().map(|c| c.name()));
    writeln!(w, "{}", header.join("\t"))?;

    for (index, values) in profiles.iter() {
        let mut fields = vec![index.name().to_string()];
        fields.extend(Criterion::ALL.iter().map(|&c| format_f64_6(values.get(c))));
        writeln!(w, "{}", fields.join("\t"))?;
    }

    w.flush()
}

fn sanitize(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
