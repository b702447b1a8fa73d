use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::code::MAX_CODE;
use crate::definition::ErrorDefinition;

/// code, prefix, label, description
pub const FIELDS_PER_RECORD: usize = 4;

static LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("label pattern compiles"));

static PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("prefix pattern compiles"));

/// Labels whose generated type names clash with items every generated module defines.
pub const RESERVED_LABELS: &[&str] = &["Coded", "UnknownCode"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Require each row's code to equal its 1-based position in the table.
    pub match_line_numbers: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("invalid record {row} in {table}: {content} ({reason})")]
    MalformedRow {
        table: String,
        row: usize,
        content: String,
        reason: String,
    },
    #[error("line number and record code do not match in {table}: {row} != {code}")]
    RowCodeMismatch { table: String, row: usize, code: u64 },
    #[error("invalid label '{label}' in record {row} of {table}: {reason}")]
    InvalidLabel {
        table: String,
        row: usize,
        label: String,
        reason: String,
    },
    #[error("invalid prefix {prefix:?} in record {row} of {table}: {reason}")]
    InvalidPrefix {
        table: String,
        row: usize,
        prefix: String,
        reason: String,
    },
    #[error("cannot read {table}: {error}")]
    Io {
        table: String,
        #[source]
        error: std::io::Error,
    },
}

impl ReadError {
    /// Table the error refers to.
    pub fn table(&self) -> &str {
        match self {
            ReadError::MalformedRow { table, .. }
            | ReadError::RowCodeMismatch { table, .. }
            | ReadError::InvalidLabel { table, .. }
            | ReadError::InvalidPrefix { table, .. }
            | ReadError::Io { table, .. } => table,
        }
    }

    /// 1-based record position, when the error is tied to a row.
    pub fn row(&self) -> Option<usize> {
        match self {
            ReadError::MalformedRow { row, .. }
            | ReadError::RowCodeMismatch { row, .. }
            | ReadError::InvalidLabel { row, .. }
            | ReadError::InvalidPrefix { row, .. } => Some(*row),
            ReadError::Io { .. } => None,
        }
    }
}

/// Read every definition from the table at `path`.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<Vec<ErrorDefinition>, ReadError> {
    let table = path.display().to_string();
    let file = File::open(path).map_err(|error| ReadError::Io { table: table.clone(), error })?;
    read_definitions(file, &table, options)
}

/// Read definitions from any CSV source. `table` names the source in the
/// resulting definitions and in errors.
///
/// Lines starting with `#` are comments and do not count as rows. Leading
/// whitespace is trimmed from every field.
pub fn read_definitions<R: Read>(
    input: R,
    table: &str,
    options: &ReadOptions,
) -> Result<Vec<ErrorDefinition>, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(input);

    let mut definitions = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut row = 0;

    loop {
        row += 1;
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(csv_error(e, table, row)),
        }
        let definition = parse_record(&record, table, row, options)?;
        log::trace!("{table}: row {row} -> {}", definition.citation());
        definitions.push(definition);
    }

    log::debug!("read {} definitions from {table}", definitions.len());
    Ok(definitions)
}

fn parse_record(
    record: &csv::StringRecord,
    table: &str,
    row: usize,
    options: &ReadOptions,
) -> Result<ErrorDefinition, ReadError> {
    let fields: Vec<&str> = record.iter().map(str::trim_start).collect();
    let malformed = |reason: String| ReadError::MalformedRow {
        table: table.to_string(),
        row,
        content: fields.join(","),
        reason,
    };

    if fields.len() != FIELDS_PER_RECORD {
        return Err(malformed(format!(
            "expected {FIELDS_PER_RECORD} fields, found {}",
            fields.len()
        )));
    }

    let code: u64 = fields[0]
        .parse()
        .map_err(|_| malformed(format!("code '{}' is not a non-negative integer", fields[0])))?;
    if code > MAX_CODE {
        return Err(malformed(format!("code {code} is larger than {MAX_CODE}")));
    }

    if options.match_line_numbers && code != row as u64 {
        return Err(ReadError::RowCodeMismatch { table: table.to_string(), row, code });
    }

    let prefix = fields[1];
    if !PREFIX.is_match(prefix) {
        let reason = if prefix.is_empty() {
            "prefix is empty"
        } else {
            "only letters, digits, '_', '-' and '.' are allowed"
        };
        return Err(ReadError::InvalidPrefix {
            table: table.to_string(),
            row,
            prefix: prefix.to_string(),
            reason: reason.to_string(),
        });
    }

    let label = fields[2];
    let invalid_label = |reason: &str| ReadError::InvalidLabel {
        table: table.to_string(),
        row,
        label: label.to_string(),
        reason: reason.to_string(),
    };
    if !LABEL.is_match(label) {
        return Err(invalid_label("not a valid identifier"));
    }
    if RESERVED_LABELS.contains(&label) {
        return Err(invalid_label("reserved by the generated module"));
    }

    Ok(ErrorDefinition::new(code, prefix, label, fields[3], table))
}

fn csv_error(e: csv::Error, table: &str, row: usize) -> ReadError {
    let reason = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(error) => ReadError::Io { table: table.to_string(), error },
        _ => ReadError::MalformedRow {
            table: table.to_string(),
            row,
            content: String::new(),
            reason,
        },
    }
}
