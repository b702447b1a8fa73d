/// An entry in the error code registry.
pub struct ErrorEntry {
    pub code: &'static str,
    pub short: &'static str, // brief description for --list-errors
    pub long: &'static str,  // full explanation for --explain
}

/// All stable diagnostic codes herr reports.
pub static REGISTRY: &[ErrorEntry] = &[
    // ── Reader ───────────────────────────────────────────────────────────────
    ErrorEntry {
        code: "HERR-R001",
        short: "malformed record",
        long: r#"## HERR-R001: malformed record

A record in an error table could not be read. Every record has exactly
four comma-separated fields:

    code, prefix, label, description

`code` is a non-negative integer no larger than 2821109907455 (the
largest value that still encodes to eight symbols). Fields may be quoted
to carry commas. Lines starting with `#` are comments.

**Example that triggers this:**

    1, DBG, DebugErrorOne

**Fix:**

    1, DBG, DebugErrorOne, The first debug error
"#,
    },
    ErrorEntry {
        code: "HERR-R002",
        short: "record code does not match its position",
        long: r#"## HERR-R002: record code does not match its position

With `--match-line-numbers`, the code of every record must equal its
1-based position among the records of its table. Comment lines are not
records and are not counted.

**Example that triggers this:**

    # code, prefix, label, description
    1, DBG, DebugErrorOne, The first debug error
    3, DBG, DebugErrorThree, The third debug error

The second record carries code 3. Renumber it to 2, or drop the flag if
gaps are intended.
"#,
    },
    ErrorEntry {
        code: "HERR-R003",
        short: "label is not usable as a type name",
        long: r#"## HERR-R003: label is not usable as a type name

Each label becomes a generated Rust type, `{label}Error`, so it must be
an identifier: a letter or underscore followed by letters, digits or
underscores.

The labels `Coded` and `UnknownCode` are reserved because every
generated module already defines `CodedError` and `UnknownCodeError`.

**Example that triggers this:**

    4, MOBAND, Invalid Android Version, The Android version is invalid.

**Fix:**

    4, MOBAND, InvalidAndroidVersion, The Android version is invalid.
"#,
    },
    ErrorEntry {
        code: "HERR-R004",
        short: "table cannot be read",
        long: r#"## HERR-R004: table cannot be read

A file passed with `--source` (or listed under `sources` in the config
file) does not exist or is not readable. Paths in a config file are
relative to the config file itself.
"#,
    },
    ErrorEntry {
        code: "HERR-R005",
        short: "prefix is not usable in a serialized code",
        long: r#"## HERR-R005: prefix is not usable in a serialized code

The prefix starts every serialized code and is written into generated
string literals and doc comments. It must be non-empty and made of ASCII
letters, digits, `_`, `-` or `.`. Only leading whitespace is trimmed, so
a space before the next comma is part of the prefix.

**Example that triggers this:**

    1, DBG , DebugErrorOne, The first debug error

**Fix:**

    1, DBG, DebugErrorOne, The first debug error
"#,
    },

    // ── Validation ───────────────────────────────────────────────────────────
    ErrorEntry {
        code: "HERR-V001",
        short: "two definitions share a serialized code",
        long: r#"## HERR-V001: two definitions share a serialized code

Every definition serializes to its prefix followed by its encoded code,
e.g. `DBG` and 1 give `DBGAAAAAAAB`. Across all tables of one run these
identities must be unique, otherwise decoding would be ambiguous.

**Example that triggers this:**

    # android.csv
    5, MOBAND, InvalidAndroidDevice, The Android device is invalid.
    # legacy.csv
    5, MOBAND, LegacyAndroidDevice, The Android device is unsupported.

Give one of them a different code or prefix. `--skip-validate` keeps both;
only the first in prefix/code order can then be decoded.
"#,
    },
    ErrorEntry {
        code: "HERR-V002",
        short: "two definitions share a label",
        long: r#"## HERR-V002: two definitions share a label

Two definitions would generate the same Rust type name. Rename one of
the labels. `--skip-validate` disables this check, but the generated
module will not compile.
"#,
    },

    // ── Configuration ────────────────────────────────────────────────────────
    ErrorEntry {
        code: "HERR-C001",
        short: "invalid configuration",
        long: r#"## HERR-C001: invalid configuration

The config file could not be read or parsed, or the merged settings are
unusable. Common causes:

- an unknown key in the config file (keys are `package`, `sources`,
  `out`, `test_out`, `skip_validate`, `match_line_numbers`)
- a `package` that is not a Rust module path such as `errors` or
  `crate::api::errors`
- a `package` segment that is a keyword, such as `crate::fn` (raw
  `r#` segments are not supported)
- an empty `--out`
- two of `--out`, `--test-out` and `--dump-context` naming the same file
- a `SOURCE_DATE_EPOCH` outside the representable range
"#,
    },

    // ── Output ───────────────────────────────────────────────────────────────
    ErrorEntry {
        code: "HERR-E001",
        short: "template failed to render",
        long: r#"## HERR-E001: template failed to render

The template engine could not produce one of the artifacts. Nothing was
written: both artifacts are rendered in full before any file is touched.
"#,
    },
    ErrorEntry {
        code: "HERR-W001",
        short: "artifact cannot be written",
        long: r#"## HERR-W001: artifact cannot be written

An output file could not be created or replaced. Artifacts are written
to a temporary file next to the target and then renamed into place, so
the directory of every output must exist and be writable. Existing
files are left untouched when this happens.
"#,
    },
];

/// Look up an error entry by code (e.g. `"HERR-V001"`).
pub fn lookup(code: &str) -> Option<&'static ErrorEntry> {
    REGISTRY.iter().find(|e| e.code == code)
}
