use crate::domain::model::RedirectPair;
use crate::utils::error::{CheckerError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads every redirect pair from a two-column CSV file.
///
/// The whole file is validated before anything is returned: a single record
/// with a field count other than two fails the load with
/// [`CheckerError::MalformedInput`].
pub fn load_redirects<P: AsRef<Path>>(
    filename: P,
    skip_header: bool,
    from_domain: Option<&str>,
    to_domain: Option<&str>,
) -> Result<Vec<RedirectPair>> {
    let path = filename.as_ref();
    let file = File::open(path)?;
    load_redirects_from_reader(
        file,
        &path.display().to_string(),
        skip_header,
        from_domain,
        to_domain,
    )
}

/// Same as [`load_redirects`], over any reader. `filename` is only used in errors.
pub fn load_redirects_from_reader<R: Read>(
    reader: R,
    filename: &str,
    skip_header: bool,
    from_domain: Option<&str>,
    to_domain: Option<&str>,
) -> Result<Vec<RedirectPair>> {
    // Column counts are checked here rather than by the csv crate so the
    // error carries the offending record.
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = csv_reader.records();
    if skip_header {
        if let Some(header) = records.next() {
            let header = header?;
            tracing::debug!("Skipping header row: {:?}", header);
        }
    }

    let mut pairs = Vec::new();
    for (index, record) in records.enumerate() {
        let record = record?;
        if record.len() != 2 {
            return Err(CheckerError::MalformedInput {
                filename: filename.to_string(),
                record: index + 1 + usize::from(skip_header),
                fields: record.len(),
            });
        }

        pairs.push(RedirectPair {
            source: with_domain(from_domain, &record[0]),
            destination: with_domain(to_domain, &record[1]),
        });
    }

    tracing::debug!("Loaded {} redirect pairs from {}", pairs.len(), filename);
    Ok(pairs)
}

fn with_domain(domain: Option<&str>, raw: &str) -> String {
    match domain {
        Some(domain) if !domain.is_empty() => format!("{}/{}", domain, raw),
        _ => raw.to_string(),
    }
}
