//! CSV export of a result set

use leadscore_domain::ResultSet;

use crate::error::ExportError;

/// Column order of exported results
pub const EXPORT_COLUMNS: [&str; 6] = ["name", "role", "company", "intent", "score", "reasoning"];

/// Render results as CSV; the header row is written even for an empty set
pub fn export_csv(results: &ResultSet) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_COLUMNS)?;
    for row in results {
        writer.write_record([
            row.name.as_str(),
            row.role.as_str(),
            row.company.as_str(),
            row.intent.as_str(),
            row.score.to_string().as_str(),
            row.reasoning.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
