// Code generated by herr; DO NOT EDIT.
// This file was generated by herr at 2020-01-14T18:07:59Z
// Tests for module: errors

use std::error::Error;
use std::fmt;

use crate::errors::*;

#[allow(dead_code)]
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

#[test]
#[allow(non_snake_case)]
fn DebugErrorOne_coded_error() {
    let err1 = DebugErrorOneError::new();
    assert_eq!(err1.prefix(), "DBG");
    assert_eq!(err1.code(), 1);
    assert_eq!(err1.describe(), "The first debug error");
    assert_eq!(err1.serialized(), "DBGAAAAAAAB");
    assert_eq!(err1.to_string(), "DBGAAAAAAAB");
    assert_eq!(err1.message(), "DBGAAAAAAAB The first debug error");
    assert!(err1.source().is_none());

    let err2 = DebugErrorOneError::wrap(Wrapped::new("thing", NotFound));
    assert_eq!(err2.code(), 1);
    assert!(chain_has::<NotFound>(&err2), "DebugErrorOneError: NotFound not unwrapped correctly");
    assert!(chain_has::<Wrapped>(&err2), "DebugErrorOneError: Wrapped not unwrapped correctly");
    assert!(is_kind(&err2, &DebugErrorOneError::new()), "DebugErrorOneError: not identified correctly");

    let nested = Wrapped::new("oh snap", err2);
    assert!(is_kind(&nested, &DebugErrorOneError::new()), "DebugErrorOneError: not identified through wrapping");
    assert!(chain_has::<NotFound>(&nested));

    let decoded = error_from_code("DBGAAAAAAAB").expect("DebugErrorOneError decodes");
    assert_eq!(decoded.code(), 1);
    assert_eq!(decoded.prefix(), "DBG");
    assert_eq!(decoded.describe(), "The first debug error");
    assert!(decoded.same_kind(&DebugErrorOneError::new()));
}

#[test]
#[allow(non_snake_case)]
fn DebugErrorTwo_coded_error() {
    let err1 = DebugErrorTwoError::new();
    assert_eq!(err1.prefix(), "DBG");
    assert_eq!(err1.code(), 2);
    assert_eq!(err1.describe(), "The second debug error");
    assert_eq!(err1.serialized(), "DBGAAAAAAAC");
    assert_eq!(err1.to_string(), "DBGAAAAAAAC");
    assert_eq!(err1.message(), "DBGAAAAAAAC The second debug error");
    assert!(err1.source().is_none());

    let err2 = DebugErrorTwoError::wrap(Wrapped::new("thing", NotFound));
    assert_eq!(err2.code(), 2);
    assert!(chain_has::<NotFound>(&err2), "DebugErrorTwoError: NotFound not unwrapped correctly");
    assert!(chain_has::<Wrapped>(&err2), "DebugErrorTwoError: Wrapped not unwrapped correctly");
    assert!(is_kind(&err2, &DebugErrorTwoError::new()), "DebugErrorTwoError: not identified correctly");

    let nested = Wrapped::new("oh snap", err2);
    assert!(is_kind(&nested, &DebugErrorTwoError::new()), "DebugErrorTwoError: not identified through wrapping");
    assert!(chain_has::<NotFound>(&nested));

    let decoded = error_from_code("DBGAAAAAAAC").expect("DebugErrorTwoError decodes");
    assert_eq!(decoded.code(), 2);
    assert_eq!(decoded.prefix(), "DBG");
    assert_eq!(decoded.describe(), "The second debug error");
    assert!(decoded.same_kind(&DebugErrorTwoError::new()));
}

#[test]
#[allow(non_snake_case)]
fn InvalidAndroidVersion_coded_error() {
    let err1 = InvalidAndroidVersionError::new();
    assert_eq!(err1.prefix(), "MOBAND");
    assert_eq!(err1.code(), 4);
    assert_eq!(err1.describe(), "The Android version is invalid.");
    assert_eq!(err1.serialized(), "MOBANDAAAAAAAE");
    assert_eq!(err1.to_string(), "MOBANDAAAAAAAE");
    assert_eq!(err1.message(), "MOBANDAAAAAAAE The Android version is invalid.");
    assert!(err1.source().is_none());

    let err2 = InvalidAndroidVersionError::wrap(Wrapped::new("thing", NotFound));
    assert_eq!(err2.code(), 4);
    assert!(chain_has::<NotFound>(&err2), "InvalidAndroidVersionError: NotFound not unwrapped correctly");
    assert!(chain_has::<Wrapped>(&err2), "InvalidAndroidVersionError: Wrapped not unwrapped correctly");
    assert!(is_kind(&err2, &InvalidAndroidVersionError::new()), "InvalidAndroidVersionError: not identified correctly");

    let nested = Wrapped::new("oh snap", err2);
    assert!(is_kind(&nested, &InvalidAndroidVersionError::new()), "InvalidAndroidVersionError: not identified through wrapping");
    assert!(chain_has::<NotFound>(&nested));

    let decoded = error_from_code("MOBANDAAAAAAAE").expect("InvalidAndroidVersionError decodes");
    assert_eq!(decoded.code(), 4);
    assert_eq!(decoded.prefix(), "MOBAND");
    assert_eq!(decoded.describe(), "The Android version is invalid.");
    assert!(decoded.same_kind(&InvalidAndroidVersionError::new()));
}

#[test]
#[allow(non_snake_case)]
fn InvalidAndroidDevice_coded_error() {
    let err1 = InvalidAndroidDeviceError::new();
    assert_eq!(err1.prefix(), "MOBAND");
    assert_eq!(err1.code(), 5);
    assert_eq!(err1.describe(), "The Android device is invalid.");
    assert_eq!(err1.serialized(), "MOBANDAAAAAAAF");
    assert_eq!(err1.to_string(), "MOBANDAAAAAAAF");
    assert_eq!(err1.message(), "MOBANDAAAAAAAF The Android device is invalid.");
    assert!(err1.source().is_none());

    let err2 = InvalidAndroidDeviceError::wrap(Wrapped::new("thing", NotFound));
    assert_eq!(err2.code(), 5);
    assert!(chain_has::<NotFound>(&err2), "InvalidAndroidDeviceError: NotFound not unwrapped correctly");
    assert!(chain_has::<Wrapped>(&err2), "InvalidAndroidDeviceError: Wrapped not unwrapped correctly");
    assert!(is_kind(&err2, &InvalidAndroidDeviceError::new()), "InvalidAndroidDeviceError: not identified correctly");

    let nested = Wrapped::new("oh snap", err2);
    assert!(is_kind(&nested, &InvalidAndroidDeviceError::new()), "InvalidAndroidDeviceError: not identified through wrapping");
    assert!(chain_has::<NotFound>(&nested));

    let decoded = error_from_code("MOBANDAAAAAAAF").expect("InvalidAndroidDeviceError decodes");
    assert_eq!(decoded.code(), 5);
    assert_eq!(decoded.prefix(), "MOBAND");
    assert_eq!(decoded.describe(), "The Android device is invalid.");
    assert!(decoded.same_kind(&InvalidAndroidDeviceError::new()));
}

#[test]
#[allow(non_snake_case)]
fn InvalidIOSDevice_coded_error() {
    let err1 = InvalidIOSDeviceError::new();
    assert_eq!(err1.prefix(), "MOBIOS");
    assert_eq!(err1.code(), 3);
    assert_eq!(err1.describe(), "The iOS device is invalid.");
    assert_eq!(err1.serialized(), "MOBIOSAAAAAAAD");
    assert_eq!(err1.to_string(), "MOBIOSAAAAAAAD");
    assert_eq!(err1.message(), "MOBIOSAAAAAAAD The iOS device is invalid.");
    assert!(err1.source().is_none());

    let err2 = InvalidIOSDeviceError::wrap(Wrapped::new("thing", NotFound));
    assert_eq!(err2.code(), 3);
    assert!(chain_has::<NotFound>(&err2), "InvalidIOSDeviceError: NotFound not unwrapped correctly");
    assert!(chain_has::<Wrapped>(&err2), "InvalidIOSDeviceError: Wrapped not unwrapped correctly");
    assert!(is_kind(&err2, &InvalidIOSDeviceError::new()), "InvalidIOSDeviceError: not identified correctly");

    let nested = Wrapped::new("oh snap", err2);
    assert!(is_kind(&nested, &InvalidIOSDeviceError::new()), "InvalidIOSDeviceError: not identified through wrapping");
    assert!(chain_has::<NotFound>(&nested));

    let decoded = error_from_code("MOBIOSAAAAAAAD").expect("InvalidIOSDeviceError decodes");
    assert_eq!(decoded.code(), 3);
    assert_eq!(decoded.prefix(), "MOBIOS");
    assert_eq!(decoded.describe(), "The iOS device is invalid.");
    assert!(decoded.same_kind(&InvalidIOSDeviceError::new()));
}

#[test]
fn all_codes_decode() {
    assert_eq!(ALL_CODES.len(), 5);
    for code in ALL_CODES {
        let err = error_from_code(code).expect("listed code decodes");
        assert_eq!(err.serialized(), *code);
        assert_eq!(err.to_string(), *code);
    }
}

#[test]
fn unknown_codes_are_rejected() {
    for code in ["", "UNKNOWN", "DBGAAAAAAAB?", "dbgaaaaaaab"] {
        let err = error_from_code(code).expect_err("unknown code rejected");
        assert_eq!(err.code, code);
        assert_eq!(err.to_string(), format!("unknown error code: {code}"));
    }
}

#[test]
fn distinct_kinds_never_match() {
    assert!(!is_kind(&DebugErrorOneError::wrap(Wrapped::new("shared", NotFound)), &DebugErrorTwoError::new()));
    assert!(!is_kind(&DebugErrorTwoError::wrap(Wrapped::new("shared", NotFound)), &InvalidAndroidVersionError::new()));
    assert!(!is_kind(&InvalidAndroidVersionError::wrap(Wrapped::new("shared", NotFound)), &InvalidAndroidDeviceError::new()));
    assert!(!is_kind(&InvalidAndroidDeviceError::wrap(Wrapped::new("shared", NotFound)), &InvalidIOSDeviceError::new()));
    assert!(!is_kind(&InvalidIOSDeviceError::wrap(Wrapped::new("shared", NotFound)), &DebugErrorOneError::new()));
}
