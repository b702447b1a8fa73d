// Code generated by herr; DO NOT EDIT.
// This file was generated by herr at 2020-01-14T18:07:59Z
// Module: errors

use std::error::Error;
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

/// Every serialized code known to [`error_from_code`].
pub const ALL_CODES: &[&str] = &[
    "DBGAAAAAAAB",
    "DBGAAAAAAAC",
    "MOBANDAAAAAAAE",
    "MOBANDAAAAAAAF",
    "MOBIOSAAAAAAAD",
];

/// Returns the error registered under a serialized code.
pub fn error_from_code(code: &str) -> Result<Box<dyn CodedError>, UnknownCodeError> {
    match code {
        "DBGAAAAAAAB" => Ok(Box::new(DebugErrorOneError::new())),
        "DBGAAAAAAAC" => Ok(Box::new(DebugErrorTwoError::new())),
        "MOBANDAAAAAAAE" => Ok(Box::new(InvalidAndroidVersionError::new())),
        "MOBANDAAAAAAAF" => Ok(Box::new(InvalidAndroidDeviceError::new())),
        "MOBIOSAAAAAAAD" => Ok(Box::new(InvalidIOSDeviceError::new())),
        _ => Err(UnknownCodeError { code: code.to_string() }),
    }
}

/// `DBGAAAAAAAB`: The first debug error
#[derive(Debug, Default)]
pub struct DebugErrorOneError {
    pub err: Option<Cause>,
}

impl DebugErrorOneError {
    pub fn new() -> Self {
        Self { err: None }
    }

    pub fn wrap(err: impl Into<Cause>) -> Self {
        Self { err: Some(err.into()) }
    }
}

impl fmt::Display for DebugErrorOneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DBGAAAAAAAB")
    }
}

impl Error for DebugErrorOneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.err.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

impl CodedError for DebugErrorOneError {
    fn code(&self) -> u64 {
        1
    }

    fn prefix(&self) -> &'static str {
        "DBG"
    }

    fn describe(&self) -> &'static str {
        "The first debug error"
    }

    fn serialized(&self) -> &'static str {
        "DBGAAAAAAAB"
    }

    fn same_kind(&self, target: &(dyn Error + 'static)) -> bool {
        target
            .downcast_ref::<Self>()
            .is_some_and(|t| t.prefix() == "DBG" && t.code() == 1)
    }
}

/// `DBGAAAAAAAC`: The second debug error
#[derive(Debug, Default)]
pub struct DebugErrorTwoError {
    pub err: Option<Cause>,
}

impl DebugErrorTwoError {
    pub fn new() -> Self {
        Self { err: None }
    }

    pub fn wrap(err: impl Into<Cause>) -> Self {
        Self { err: Some(err.into()) }
    }
}

impl fmt::Display for DebugErrorTwoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DBGAAAAAAAC")
    }
}

impl Error for DebugErrorTwoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.err.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

impl CodedError for DebugErrorTwoError {
    fn code(&self) -> u64 {
        2
    }

    fn prefix(&self) -> &'static str {
        "DBG"
    }

    fn describe(&self) -> &'static str {
        "The second debug error"
    }

    fn serialized(&self) -> &'static str {
        "DBGAAAAAAAC"
    }

    fn same_kind(&self, target: &(dyn Error + 'static)) -> bool {
        target
            .downcast_ref::<Self>()
            .is_some_and(|t| t.prefix() == "DBG" && t.code() == 2)
    }
}

/// `MOBANDAAAAAAAE`: The Android version is invalid.
#[derive(Debug, Default)]
pub struct InvalidAndroidVersionError {
    pub err: Option<Cause>,
}

impl InvalidAndroidVersionError {
    pub fn new() -> Self {
        Self { err: None }
    }

    pub fn wrap(err: impl Into<Cause>) -> Self {
        Self { err: Some(err.into()) }
    }
}

impl fmt::Display for InvalidAndroidVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MOBANDAAAAAAAE")
    }
}

impl Error for InvalidAndroidVersionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.err.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

impl CodedError for InvalidAndroidVersionError {
    fn code(&self) -> u64 {
        4
    }

    fn prefix(&self) -> &'static str {
        "MOBAND"
    }

    fn describe(&self) -> &'static str {
        "The Android version is invalid."
    }

    fn serialized(&self) -> &'static str {
        "MOBANDAAAAAAAE"
    }

    fn same_kind(&self, target: &(dyn Error + 'static)) -> bool {
        target
            .downcast_ref::<Self>()
            .is_some_and(|t| t.prefix() == "MOBAND" && t.code() == 4)
    }
}

/// `MOBANDAAAAAAAF`: The Android device is invalid.
#[derive(Debug, Default)]
pub struct InvalidAndroidDeviceError {
    pub err: Option<Cause>,
}

impl InvalidAndroidDeviceError {
    pub fn new() -> Self {
        Self { err: None }
    }

    pub fn wrap(err: impl Into<Cause>) -> Self {
        Self { err: Some(err.into()) }
    }
}

impl fmt::Display for InvalidAndroidDeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MOBANDAAAAAAAF")
    }
}

impl Error for InvalidAndroidDeviceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.err.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

impl CodedError for InvalidAndroidDeviceError {
    fn code(&self) -> u64 {
        5
    }

    fn prefix(&self) -> &'static str {
        "MOBAND"
    }

    fn describe(&self) -> &'static str {
        "The Android device is invalid."
    }

    fn serialized(&self) -> &'static str {
        "MOBANDAAAAAAAF"
    }

    fn same_kind(&self, target: &(dyn Error + 'static)) -> bool {
        target
            .downcast_ref::<Self>()
            .is_some_and(|t| t.prefix() == "MOBAND" && t.code() == 5)
    }
}

/// `MOBIOSAAAAAAAD`: The iOS device is invalid.
#[derive(Debug, Default)]
pub struct InvalidIOSDeviceError {
    pub err: Option<Cause>,
}

impl InvalidIOSDeviceError {
    pub fn new() -> Self {
        Self { err: None }
    }

    pub fn wrap(err: impl Into<Cause>) -> Self {
        Self { err: Some(err.into()) }
    }
}

impl fmt::Display for InvalidIOSDeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MOBIOSAAAAAAAD")
    }
}

impl Error for InvalidIOSDeviceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.err.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

impl CodedError for InvalidIOSDeviceError {
    fn code(&self) -> u64 {
        3
    }

    fn prefix(&self) -> &'static str {
        "MOBIOS"
    }

    fn describe(&self) -> &'static str {
        "The iOS device is invalid."
    }

    fn serialized(&self) -> &'static str {
        "MOBIOSAAAAAAAD"
    }

    fn same_kind(&self, target: &(dyn Error + 'static)) -> bool {
        target
            .downcast_ref::<Self>()
            .is_some_and(|t| t.prefix() == "MOBIOS" && t.code() == 3)
    }
}
