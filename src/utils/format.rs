use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";

/// Groups digits by thousands: `12345` -> `12,345`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Prints a float without a trailing `.0` for whole numbers.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Renders a JSON scalar the way it would appear as plain text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => format_number(f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

pub fn count_or_na(value: Option<u64>) -> String {
    value
        .map(format_count)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn number_or_na(value: Option<f64>) -> String {
    value
        .map(format_number)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn text_or_na(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
