use crate::model::profiles::ProfileSet;
use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}

/// Profiles keyed by profile name, then criterion name.
pub fn render_profiles_json(profiles: &ProfileSet) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(profiles)?;
    out.push('\n');
    Ok(out)
}
