//! Literal formatting
//!
//! Renders [`QueryValue`]s as SOQL literals. This is the only place where a
//! string that looks like a date is told apart from an ordinary string.

use crate::errors::TranslateError;
use crate::query_builder::operators::ComparisonOperator;
use crate::value::QueryValue;
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use regex::Regex;
use std::sync::OnceLock;

static ISO_DATE_RE: OnceLock<Regex> = OnceLock::new();

// year, month, day, hour, minute, second, offset
const ISO_DATE_PATTERN: &str = r"^(\d{4})-(\d{2})(?:-(\d{2})(?:[T ](\d{2})(?::(\d{2})(?::(\d{2})(?:[.,]\d+)?)?)?(Z|[+-]\d{2}(?::?\d{2})?)?)?)?$";

/// Strict ISO-8601 check for extended calendar dates with optional time and offset
pub fn is_iso_date(value: &str) -> bool {
    let regex = ISO_DATE_RE.get_or_init(|| Regex::new(ISO_DATE_PATTERN).expect("valid regex"));
    let Some(caps) = regex.captures(value) else {
        return false;
    };

    let number = |idx: usize| caps.get(idx).and_then(|m| m.as_str().parse::<u32>().ok());

    let (Some(year), Some(month)) = (caps[1].parse::<i32>().ok(), number(2)) else {
        return false;
    };
    let day = number(3).unwrap_or(1);
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return false;
    }

    if let Some(hour) = number(4) {
        let minute = number(5).unwrap_or(0);
        let second = number(6).unwrap_or(0);
        if NaiveTime::from_hms_opt(hour, minute, second).is_none() {
            return false;
        }
    }

    caps.get(7).is_none_or(|offset| is_valid_offset(offset.as_str()))
}

fn is_valid_offset(offset: &str) -> bool {
    if offset == "Z" {
        return true;
    }
    let digits: String = offset[1..].chars().filter(|c| *c != ':').collect();
    let hours = digits.get(0..2).and_then(|h| h.parse::<u32>().ok());
    let minutes = digits.get(2..4).map_or(Some(0), |m| m.parse::<u32>().ok());
    matches!((hours, minutes), (Some(h), Some(m)) if h <= 23 && m <= 59)
}

/// Render a date as a bare ISO-8601 token with millisecond precision
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Single-quote a string literal
///
/// Quotes and backslashes are escaped. A backslash before `%` or `_` is kept
/// as is so LIKE wildcards can still be escaped by the caller.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');

    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some('%' | '_')) => quoted.push('\\'),
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            other => quoted.push(other),
        }
    }

    quoted.push('\'');
    quoted
}

/// Literal text for a scalar, date or null. Compound values have no literal form.
pub fn format_literal(value: &QueryValue) -> Option<String> {
    match value {
        QueryValue::Null => Some("null".to_string()),
        QueryValue::Bool(b) => Some(b.to_string()),
        QueryValue::Number(n) => Some(n.to_string()),
        QueryValue::String(s) if is_iso_date(s) => Some(s.clone()),
        QueryValue::String(s) => Some(quote(s)),
        QueryValue::Date(dt) => Some(format_date(dt)),
        QueryValue::Array(_) | QueryValue::Object(_) => None,
    }
}

/// Render the operand of `field <operator> ...`
///
/// Set operators need a non-empty array and produce `(v1,v2,...)`. Every
/// other operator needs a value with a literal form.
pub fn format_value(
    field: &str,
    operator: ComparisonOperator,
    value: &QueryValue,
) -> Result<String, TranslateError> {
    match value {
        QueryValue::Array(items) if operator.is_set() && !items.is_empty() => {
            format_list(field, items)
        }
        _ => {
            let literal = if operator.is_set() {
                None
            } else {
                format_literal(value)
            };
            literal.ok_or_else(|| TranslateError::InvalidValueForOperator {
                field: field.to_string(),
                operator: operator.symbol().to_string(),
                value: value.to_string(),
            })
        }
    }
}

fn format_list(field: &str, items: &[QueryValue]) -> Result<String, TranslateError> {
    let values = items
        .iter()
        .map(|item| match item {
            QueryValue::String(s) => Ok(quote(s)),
            other => format_literal(other).ok_or_else(|| TranslateError::InvalidArrayElement {
                field: field.to_string(),
                value: other.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("({})", values.join(",")))
}
