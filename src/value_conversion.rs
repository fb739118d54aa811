use calamine::DataType;
use chrono::NaiveDateTime;
use serde_json::{Number, Value};
use std::collections::HashMap;

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Converts a worksheet cell to the JSON scalar it is written as.
///
/// Blank cells and empty strings become `null`, text is kept as text and
/// numbers keep their native type. Whole floats are written as integers so a
/// cell typed `1` does not come out as `1.0`.
pub fn cell_to_value(cell: &DataType) -> Value {
    match cell {
        DataType::Empty => Value::Null,
        DataType::String(s) if s.is_empty() => Value::Null,
        DataType::String(s) => Value::String(s.clone()),
        DataType::Bool(b) => Value::Bool(*b),
        DataType::Int(i) => Value::Number((*i).into()),
        DataType::Float(f) => float_to_value(*f),
        DataType::DateTime(serial) => match cell.as_datetime() {
            Some(dt) => Value::String(format_datetime(&dt)),
            None => float_to_value(*serial),
        },
        DataType::Duration(days) => float_to_value(*days),
        DataType::DateTimeIso(s) | DataType::DurationIso(s) => Value::String(s.clone()),
        DataType::Error(e) => Value::String(e.to_string()),
    }
}

/// ISO-8601 text without fractional seconds or offset.
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// True when every cell of the row would be written as `null`.
pub fn is_blank_row(row: &[DataType]) -> bool {
    row.iter().all(|cell| cell_to_value(cell).is_null())
}

fn float_to_value(f: f64) -> Value {
    if !f.is_finite() {
        return Value::Null;
    }
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Value::Number((f as i64).into())
    } else {
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Renders a header cell as a field name. Blank headers get `column_<index>`.
pub fn header_name(cell: Option<&DataType>, index: usize) -> String {
    let name = match cell {
        None | Some(DataType::Empty) => String::new(),
        Some(cell) => match cell_to_value(cell) {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        },
    };

    if name.trim().is_empty() {
        format!("column_{}", index)
    } else {
        name
    }
}

/// Makes field names unique, suffixing repeats with `.1`, `.2`, ...
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut unique = Vec::with_capacity(headers.len());

    for header in headers {
        if !seen.contains_key(&header) {
            seen.insert(header.clone(), 0);
            unique.push(header);
            continue;
        }

        let mut candidate = header.clone();
        while seen.contains_key(&candidate) {
            let count = seen.entry(header.clone()).or_insert(0);
            *count += 1;
            candidate = format!("{}.{}", header, count);
        }
        seen.insert(candidate.clone(), 0);
        unique.push(candidate);
    }

    unique
}
