//! CSV lead ingestion

use std::io::Read;

use leadscore_domain::Lead;

use crate::error::IngestError;

/// Header names of the lead columns, in `Lead` field order
pub const LEAD_COLUMNS: [&str; 6] = [
    "name",
    "role",
    "company",
    "industry",
    "location",
    "linkedin_bio",
];

/// Read leads from CSV with a header row
///
/// Columns are matched by header name after trimming. Missing columns and
/// short rows leave fields empty; unknown columns are ignored. Row order is
/// preserved.
pub fn parse_leads<R: Read>(reader: R) -> Result<Vec<Lead>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);
    let columns = LEAD_COLUMNS.map(column);

    let mut leads = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let field = |i: usize| {
            columns[i]
                .and_then(|idx| record.get(idx))
                .unwrap_or_default()
                .to_string()
        };
        leads.push(Lead {
            name: field(0),
            role: field(1),
            company: field(2),
            industry: field(3),
            location: field(4),
            linkedin_bio: field(5),
        });
    }
    Ok(leads)
}
