use std::collections::HashSet;

use super::{header, literal, CodeEntry, Context};

const HELPERS: &str = r#"#[allow(dead_code)]
#[derive(Debug)]
struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not found")
    }
}

impl Error for NotFound {}

#[allow(dead_code)]
#[derive(Debug)]
struct Wrapped {
    context: &'static str,
    cause: Cause,
}

#[allow(dead_code)]
impl Wrapped {
    fn new(context: &'static str, cause: impl Into<Cause>) -> Self {
        Wrapped { context, cause: cause.into() }
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.cause)
    }
}

impl Error for Wrapped {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.cause as &(dyn Error + 'static))
    }
}

#[allow(dead_code)]
fn chain_has<T: Error + 'static>(err: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.is::<T>() {
            return true;
        }
        current = e.source();
    }
    false
}
"#;

/// Render the companion test suite for the primary artifact.
pub fn emit(context: &Context) -> String {
    let mut out = String::new();
    header(&mut out, context, "Tests for module");
    out.push('\n');
    out.push_str("use std::error::Error;\n");
    out.push_str("use std::fmt;\n\n");
    out.push_str(&format!("use {}::*;\n\n", context.module_path()));
    out.push_str(HELPERS);

    for entry in &context.codes {
        out.push('\n');
        emit_case(&mut out, entry);
    }

    out.push('\n');
    emit_all_codes_case(&mut out, context);
    out.push('\n');
    emit_unknown_case(&mut out, context);
    emit_distinct_case(&mut out, context);
    out
}

fn emit_case(out: &mut String, entry: &CodeEntry) {
    let name = &entry.type_name;
    let serialized = literal(&entry.serialized);
    let prefix = literal(&entry.prefix);
    let description = literal(&entry.description);
    let code = entry.code;

    out.push_str("#[test]\n");
    out.push_str("#[allow(non_snake_case)]\n");
    out.push_str(&format!("fn {}_coded_error() {{\n", entry.label));

    out.push_str(&format!("    let err1 = {name}::new();\n"));
    out.push_str(&format!("    assert_eq!(err1.prefix(), {prefix});\n"));
    out.push_str(&format!("    assert_eq!(err1.code(), {code});\n"));
    out.push_str(&format!("    assert_eq!(err1.describe(), {description});\n"));
    out.push_str(&format!("    assert_eq!(err1.serialized(), {serialized});\n"));
    out.push_str(&format!("    assert_eq!(err1.to_string(), {serialized});\n"));
    out.push_str(&format!(
        "    assert_eq!(err1.message(), {});\n",
        literal(&format!("{} {}", entry.serialized, entry.description))
    ));
    out.push_str("    assert!(err1.source().is_none());\n\n");

    out.push_str(&format!("    let err2 = {name}::wrap(Wrapped::new(\"thing\", NotFound));\n"));
    out.push_str(&format!("    assert_eq!(err2.code(), {code});\n"));
    out.push_str(&format!(
        "    assert!(chain_has::<NotFound>(&err2), \"{name}: NotFound not unwrapped correctly\");\n"
    ));
    out.push_str(&format!(
        "    assert!(chain_has::<Wrapped>(&err2), \"{name}: Wrapped not unwrapped correctly\");\n"
    ));
    out.push_str(&format!(
        "    assert!(is_kind(&err2, &{name}::new()), \"{name}: not identified correctly\");\n\n"
    ));

    out.push_str("    let nested = Wrapped::new(\"oh snap\", err2);\n");
    out.push_str(&format!(
        "    assert!(is_kind(&nested, &{name}::new()), \"{name}: not identified through wrapping\");\n"
    ));
    out.push_str("    assert!(chain_has::<NotFound>(&nested));\n");

    if !entry.shadowed {
        out.push('\n');
        out.push_str(&format!(
            "    let decoded = error_from_code({serialized}).expect(\"{name} decodes\");\n"
        ));
        out.push_str(&format!("    assert_eq!(decoded.code(), {code});\n"));
        out.push_str(&format!("    assert_eq!(decoded.prefix(), {prefix});\n"));
        out.push_str(&format!("    assert_eq!(decoded.describe(), {description});\n"));
        out.push_str(&format!("    assert!(decoded.same_kind(&{name}::new()));\n"));
    }
    out.push_str("}\n");
}

fn emit_all_codes_case(out: &mut String, context: &Context) {
    out.push_str("#[test]\n");
    out.push_str("fn all_codes_decode() {\n");
    out.push_str(&format!("    assert_eq!(ALL_CODES.len(), {});\n", context.decodable().count()));
    out.push_str("    for code in ALL_CODES {\n");
    out.push_str("        let err = error_from_code(code).expect(\"listed code decodes\");\n");
    out.push_str("        assert_eq!(err.serialized(), *code);\n");
    out.push_str("        assert_eq!(err.to_string(), *code);\n");
    out.push_str("    }\n");
    out.push_str("}\n");
}

/// Strings that cannot be identities: too short, or a real identity with a
/// symbol outside the alphabet tacked on. Any that happen to be taken are dropped.
fn unknown_inputs(context: &Context) -> Vec<String> {
    let taken: HashSet<&str> = context.codes.iter().map(|c| c.serialized.as_str()).collect();
    let mut inputs = vec![String::new(), "UNKNOWN".to_string()];
    if let Some(first) = context.codes.first() {
        inputs.push(format!("{}?", first.serialized));
        inputs.push(first.serialized.to_lowercase());
    }
    inputs.retain(|s| !taken.contains(s.as_str()));
    inputs
}

fn emit_unknown_case(out: &mut String, context: &Context) {
    out.push_str("#[test]\n");
    out.push_str("fn unknown_codes_are_rejected() {\n");
    out.push_str("    for code in [");
    let inputs: Vec<String> = unknown_inputs(context).iter().map(|s| literal(s)).collect();
    out.push_str(&inputs.join(", "));
    out.push_str("] {\n");
    out.push_str("        let err = error_from_code(code).expect_err(\"unknown code rejected\");\n");
    out.push_str("        assert_eq!(err.code, code);\n");
    out.push_str("        assert_eq!(err.to_string(), format!(\"unknown error code: {code}\"));\n");
    out.push_str("    }\n");
    out.push_str("}\n");
}

/// Each type against its neighbour in canonical order, both carrying the same cause.
fn emit_distinct_case(out: &mut String, context: &Context) {
    let pairs: Vec<(&CodeEntry, &CodeEntry)> = context
        .codes
        .iter()
        .zip(context.codes.iter().cycle().skip(1))
        .filter(|(a, b)| a.type_name != b.type_name)
        .collect();
    if pairs.is_empty() {
        return;
    }

    out.push('\n');
    out.push_str("#[test]\n");
    out.push_str("fn distinct_kinds_never_match() {\n");
    for (a, b) in pairs {
        out.push_str(&format!(
            "    assert!(!is_kind(&{}::wrap(Wrapped::new(\"shared\", NotFound)), &{}::new()));\n",
            a.type_name, b.type_name
        ));
    }
    out.push_str("}\n");
}
