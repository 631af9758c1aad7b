use crate::domain::model::{RawTable, SourceOptions};
use crate::domain::ports::Storage;
use crate::domain::schema::SourceSchema;
use crate::utils::error::{DashboardError, Result};

/// Read the source through `storage` and parse it. A path that cannot be read
/// is reported as `SourceNotFound`.
pub fn load_source<S: Storage>(
    storage: &S,
    path: &str,
    schema: &SourceSchema,
    options: &SourceOptions,
) -> Result<RawTable> {
    let bytes = storage.read_file(path).map_err(|e| match e {
        DashboardError::IoError(source) => DashboardError::SourceNotFound {
            path: path.to_string(),
            source,
        },
        other => other,
    })?;

    tracing::debug!("Read {} bytes from {}", bytes.len(), path);
    parse_table(&bytes, schema, options)
}

/// Decode `bytes`, drop the leading non-data lines and split the rest into
/// rows of exactly `schema.width()` fields. Short rows are padded with empty
/// fields, surplus fields are ignored.
pub fn parse_table(bytes: &[u8], schema: &SourceSchema, options: &SourceOptions) -> Result<RawTable> {
    let text = options.encoding.decode(bytes);
    let body = skip_lines(&text, options.skip_rows);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let width = schema.width();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let mut row: Vec<String> = record.iter().take(width).map(str::to_string).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(RawTable { rows })
}

fn skip_lines(text: &str, count: usize) -> &str {
    let mut rest = text;
    for _ in 0..count {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}
