use std::collections::BTreeMap;

use crate::model::criteria::Criterion;
use crate::report::{SummaryData, format_f64_6, fraction};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Nutri-Score vs ELECTRE TRI Report\n");
    out.push_str("=================================\n\n");

    out.push_str("1. Dataset\n");
    out.push_str(&format!("Input: {}\n", data.input));
    out.push_str(&format!("Products: {}\n\n", data.n_products));

    out.push_str("2. Nutri-Score labels\n");
    push_distribution(&mut out, &data.nutriscore, data.n_products);
    let v = &data.verification;
    if v.labels_checked > 0 || v.scores_checked > 0 {
        out.push_str(&format!(
            "Reference labels reproduced: {}/{}\n",
            v.labels_matched, v.labels_checked
        ));
        out.push_str(&format!(
            "Reference scores reproduced: {}/{}\n",
            v.scores_matched, v.scores_checked
        ));
    }
    out.push('\n');

    out.push_str("3. Criteria weights (normalised)\n");
    for criterion in Criterion::ALL {
        let w = data.weights.get(criterion.name()).copied().unwrap_or(0.0);
        out.push_str(&format!("{}: {}\n", criterion.name(), format_f64_6(w)));
    }
    out.push('\n');

    out.push_str("4. Boundary profiles\n");
    out.push_str("profile");
    for criterion in Criterion::ALL {
        out.push('\t');
        out.push_str(criterion.name());
    }
    out.push('\n');
    for (index, values) in data.profiles.iter().rev() {
        out.push_str(index.name());
        for criterion in Criterion::ALL {
            out.push('\t');
            out.push_str(&format_f64_6(values.get(criterion)));
        }
        out.push('\n');
    }
    out.push('\n');

    out.push_str("5. ELECTRE TRI classifications\n");
    if data.classifications.is_empty() {
        out.push_str("No classification requested.\n");
    }
    for column in &data.classifications {
        out.push_str(&format!(
            "{} (procedure={}, lambda={})\n",
            column.name,
            column.procedure,
            format_f64_6(column.lambda)
        ));
        push_distribution(&mut out, &column.distribution, data.n_products);
    }

    out
}

fn push_distribution(out: &mut String, distribution: &BTreeMap<String, usize>, total: usize) {
    for (label, count) in distribution {
        out.push_str(&format!(
            "{}: {} ({})\n",
            label,
            count,
            format_f64_6(fraction(*count, total))
        ));
    }
}
