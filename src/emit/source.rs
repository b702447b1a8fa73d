use super::{comment_text, header, literal, CodeEntry, Context};

const PRELUDE: &str = r#"use std::error::Error;
use std::fmt;

/// Underlying cause carried by a generated error.
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Capability shared by every generated error type.
pub trait CodedError: Error + Send + Sync + 'static {
    /// Numeric code of the error within its table.
    fn code(&self) -> u64;
    /// Category prefix of the error.
    fn prefix(&self) -> &'static str;
    /// Human readable description of the error.
    fn describe(&self) -> &'static str;
    /// Serialized identity: the prefix followed by the encoded code.
    fn serialized(&self) -> &'static str;
    /// Whether `target` is this same kind of error. Wrapped causes are ignored.
    fn same_kind(&self, target: &(dyn Error + 'static)) -> bool;

    /// The serialized identity followed by the description.
    fn message(&self) -> String {
        format!("{} {}", self.serialized(), self.describe())
    }
}

/// Returned by [`error_from_code`] for a code no generated type owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCodeError {
    pub code: String,
}

impl fmt::Display for UnknownCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code: {}", self.code)
    }
}

impl Error for UnknownCodeError {}

/// Walks the `source()` chain of `err`, reporting whether any link is the
/// same kind of error as `target`.
pub fn is_kind(err: &(dyn Error + 'static), target: &dyn CodedError) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if target.same_kind(e) {
            return true;
        }
        current = e.source();
    }
    false
}
"#;

/// Render the primary artifact: one error type per entry plus the decode table.
pub fn emit(context: &Context) -> String {
    let mut out = String::new();
    header(&mut out, context, "Module");
    out.push('\n');
    out.push_str(PRELUDE);
    out.push('\n');
    emit_all_codes(&mut out, context);
    out.push('\n');
    emit_decode(&mut out, context);
    for entry in &context.codes {
        out.push('\n');
        emit_type(&mut out, entry);
    }
    out
}

fn emit_all_codes(out: &mut String, context: &Context) {
    out.push_str("/// Every serialized code known to [`error_from_code`].\n");
    out.push_str("pub const ALL_CODES: &[&str] = &[\n");
    for entry in context.decodable() {
        out.push_str(&format!("    {},\n", literal(&entry.serialized)));
    }
    out.push_str("];\n");
}

fn emit_decode(out: &mut String, context: &Context) {
    out.push_str("/// Returns the error registered under a serialized code.\n");
    out.push_str("pub fn error_from_code(code: &str) -> Result<Box<dyn CodedError>, UnknownCodeError> {\n");
    out.push_str("    match code {\n");
    for entry in context.decodable() {
        out.push_str(&format!(
            "        {} => Ok(Box::new({}::new())),\n",
            literal(&entry.serialized),
            entry.type_name
        ));
    }
    out.push_str("        _ => Err(UnknownCodeError { code: code.to_string() }),\n");
    out.push_str("    }\n");
    out.push_str("}\n");
}

fn emit_type(out: &mut String, entry: &CodeEntry) {
    let name = &entry.type_name;
    let serialized = literal(&entry.serialized);
    let prefix = literal(&entry.prefix);
    let code = entry.code;

    out.push_str(&format!(
        "/// `{}`: {}\n",
        comment_text(&entry.serialized),
        comment_text(&entry.description)
    ));
    out.push_str("#[derive(Debug, Default)]\n");
    out.push_str(&format!("pub struct {name} {{\n"));
    out.push_str("    pub err: Option<Cause>,\n");
    out.push_str("}\n\n");

    out.push_str(&format!("impl {name} {{\n"));
    out.push_str("    pub fn new() -> Self {\n");
    out.push_str("        Self { err: None }\n");
    out.push_str("    }\n\n");
    out.push_str("    pub fn wrap(err: impl Into<Cause>) -> Self {\n");
    out.push_str("        Self { err: Some(err.into()) }\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");

    out.push_str(&format!("impl fmt::Display for {name} {{\n"));
    out.push_str("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {\n");
    out.push_str(&format!("        f.write_str({serialized})\n"));
    out.push_str("    }\n");
    out.push_str("}\n\n");

    out.push_str(&format!("impl Error for {name} {{\n"));
    out.push_str("    fn source(&self) -> Option<&(dyn Error + 'static)> {\n");
    out.push_str("        self.err.as_deref().map(|e| e as &(dyn Error + 'static))\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");

    out.push_str(&format!("impl CodedError for {name} {{\n"));
    out.push_str(&format!("    fn code(&self) -> u64 {{\n        {code}\n    }}\n\n"));
    out.push_str(&format!("    fn prefix(&self) -> &'static str {{\n        {prefix}\n    }}\n\n"));
    out.push_str(&format!(
        "    fn describe(&self) -> &'static str {{\n        {}\n    }}\n\n",
        literal(&entry.description)
    ));
    out.push_str(&format!("    fn serialized(&self) -> &'static str {{\n        {serialized}\n    }}\n\n"));
    out.push_str("    fn same_kind(&self, target: &(dyn Error + 'static)) -> bool {\n");
    out.push_str("        target\n");
    out.push_str("            .downcast_ref::<Self>()\n");
    out.push_str(&format!(
        "            .is_some_and(|t| t.prefix() == {prefix} && t.code() == {code})\n"
    ));
    out.push_str("    }\n");
    out.push_str("}\n");
}
