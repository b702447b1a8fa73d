use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

use crate::emit::{self, Artifacts, Context, Template, TemplateEngine};
use crate::error::Error;
use crate::reader::{self, ReadOptions};
use crate::registry;
use crate::sort::canonical_order;

/// Where an artifact goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `stdout` and `-` mean standard output; an empty value means no destination.
    pub fn parse(value: &str) -> Option<Destination> {
        match value {
            "" => None,
            "stdout" | "-" => Some(Destination::Stdout),
            path => Some(Destination::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fully resolved inputs of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Module path of the primary artifact, e.g. `errors` or `crate::api::errors`.
    pub package: String,
    /// Tables, read and registered in this order.
    pub sources: Vec<PathBuf>,
    pub out: Destination,
    /// `None` skips the companion test suite.
    pub test_out: Option<Destination>,
    pub validate: bool,
    pub match_line_numbers: bool,
    pub timestamp: DateTime<Utc>,
    /// Where to dump the JSON data context, if anywhere.
    pub context_out: Option<Destination>,
}

/// Everything one run produced, before anything is written.
#[derive(Debug, Clone)]
pub struct Generated {
    pub context: Context,
    pub artifacts: Artifacts,
    pub context_json: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub definitions: usize,
    pub written: Vec<Destination>,
}

/// Read, register, order and render. Nothing touches the filesystem beyond
/// reading the tables.
pub fn generate(options: &GenerateOptions, engine: &dyn TemplateEngine) -> Result<Generated, Error> {
    if options.sources.is_empty() {
        log::warn!("no source tables given; generating an empty module");
    }

    let read_options = ReadOptions { match_line_numbers: options.match_line_numbers };
    let mut tables = Vec::with_capacity(options.sources.len());
    for path in &options.sources {
        let table = reader::read_table(path, &read_options)?;
        log::info!("{}: {} definitions", path.display(), table.len());
        tables.push(table);
    }

    let entries = registry::register(tables, options.validate)?;
    let ordered = canonical_order(&entries);
    let context = Context::new(options.package.as_str(), options.timestamp, &ordered);

    let artifacts = emit::render(engine, &context, options.test_out.is_some())?;
    let context_json = match options.context_out {
        Some(_) => Some(engine.render(Template::Context, &context)?),
        None => None,
    };

    Ok(Generated { context, artifacts, context_json })
}

/// Run the whole pipeline and write every artifact.
pub fn run(options: &GenerateOptions, engine: &dyn TemplateEngine) -> Result<Report, Error> {
    let generated = generate(options, engine)?;

    let mut outputs = vec![(&options.out, generated.artifacts.source.as_str())];
    if let (Some(dest), Some(tests)) = (&options.test_out, &generated.artifacts.tests) {
        outputs.push((dest, tests.as_str()));
    }
    if let (Some(dest), Some(json)) = (&options.context_out, &generated.context_json) {
        outputs.push((dest, json.as_str()));
    }

    write_all(&outputs)?;
    Ok(Report {
        definitions: generated.context.codes.len(),
        written: outputs.into_iter().map(|(dest, _)| dest.clone()).collect(),
    })
}

/// Files are staged next to their targets and only moved into place once
/// every one of them has been written in full. Standard output goes last.
fn write_all(outputs: &[(&Destination, &str)]) -> Result<(), Error> {
    let mut staged = Vec::new();
    for (dest, text) in outputs {
        if let Destination::File(path) = dest {
            staged.push((stage(path, text)?, path));
        }
    }

    for (file, path) in staged {
        file.persist(path).map_err(|e| Error::Write { path: path.clone(), error: e.error })?;
        log::info!("wrote {}", path.display());
    }

    let mut stdout = std::io::stdout().lock();
    for (dest, text) in outputs {
        if **dest == Destination::Stdout {
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|error| Error::Write { path: PathBuf::from("stdout"), error })?;
        }
    }
    Ok(())
}

fn stage(path: &Path, text: &str) -> Result<NamedTempFile, Error> {
    let write_error = |error: std::io::Error| Error::Write { path: path.to_path_buf(), error };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(text.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    Ok(file)
}
