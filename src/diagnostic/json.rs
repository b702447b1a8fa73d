use super::{Diagnostic, Severity};

pub fn render(d: &Diagnostic) -> String {
    let severity = match d.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };

    let mut obj = serde_json::json!({
        "severity": severity,
        "message": d.message,
        "notes": d.notes,
    });

    if let Some(code) = d.code {
        obj["code"] = serde_json::Value::String(code.to_string());
    }

    if let Some(loc) = &d.location {
        let mut location = serde_json::json!({ "table": loc.table });
        if let Some(row) = loc.row {
            location["row"] = serde_json::Value::from(row);
        }
        obj["location"] = location;
    }

    if let Some(s) = &d.snippet {
        obj["snippet"] = serde_json::Value::String(s.clone());
    }

    if let Some(s) = &d.suggestion {
        obj["suggestion"] = serde_json::Value::String(s.clone());
    }

    serde_json::to_string(&obj).unwrap_or_else(|_| r#"{"severity":"error","message":"internal error serializing diagnostic"}"#.to_string())
}
