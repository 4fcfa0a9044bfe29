//! Lenient numeric parsing of spreadsheet cells.

use store_ingest::CellValue;

/// Outcome of reading a numeric field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldParse<T> {
    Parsed(T),
    /// Cell was empty, zero or `false`.
    Missing,
    /// Cell held something that is not a number; the raw text is kept.
    Unparsable(String),
}

impl<T> FieldParse<T> {
    /// The parsed value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Missing | Self::Unparsable(_) => None,
        }
    }

    /// The parsed value, or `default` for missing and unparsable input.
    pub fn value_or(self, default: T) -> T {
        self.value().unwrap_or(default)
    }
}

fn truncate(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

/// Reads a cell as an integer.
///
/// Floats truncate toward zero. Text must be a base-10 integer after
/// trimming, so `"15.0"` is unparsable while the number `15.0` is not.
pub fn parse_integer(cell: &CellValue) -> FieldParse<i64> {
    if !cell.is_present() {
        return FieldParse::Missing;
    }
    let parsed = match cell {
        CellValue::Float(v) => truncate(*v),
        CellValue::Int(v) => Some(*v),
        CellValue::Bool(v) => Some(i64::from(*v)),
        CellValue::Text(s) => s.trim().parse().ok(),
        CellValue::Empty | CellValue::DateTime(_) | CellValue::Error(_) => None,
    };
    parsed.map_or_else(|| FieldParse::Unparsable(cell.to_string()), FieldParse::Parsed)
}

/// Reads a cell as a decimal amount truncated to an integer.
///
/// Text is parsed as a float first, so `"12000.7"` yields 12000. Infinite
/// and NaN values are unparsable.
pub fn parse_amount(cell: &CellValue) -> FieldParse<i64> {
    if !cell.is_present() {
        return FieldParse::Missing;
    }
    let parsed = match cell {
        CellValue::Float(v) => truncate(*v),
        CellValue::Int(v) => Some(*v),
        CellValue::Bool(v) => Some(i64::from(*v)),
        CellValue::Text(s) => s.trim().parse::<f64>().ok().and_then(truncate),
        CellValue::Empty | CellValue::DateTime(_) | CellValue::Error(_) => None,
    };
    parsed.map_or_else(|| FieldParse::Unparsable(cell.to_string()), FieldParse::Parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_integer_from_numbers() {
        assert_eq!(parse_integer(&CellValue::Float(15.0)), FieldParse::Parsed(15));
        assert_eq!(parse_integer(&CellValue::Float(15.7)), FieldParse::Parsed(15));
        assert_eq!(parse_integer(&CellValue::Float(-2.5)), FieldParse::Parsed(-2));
        assert_eq!(parse_integer(&CellValue::Int(25)), FieldParse::Parsed(25));
        assert_eq!(parse_integer(&CellValue::Bool(true)), FieldParse::Parsed(1));
    }

    #[test]
    fn test_integer_from_text() {
        assert_eq!(parse_integer(&text(" 10 ")), FieldParse::Parsed(10));
        assert_eq!(
            parse_integer(&text("15.0")),
            FieldParse::Unparsable("15.0".to_string())
        );
        assert_eq!(
            parse_integer(&text("말일")),
            FieldParse::Unparsable("말일".to_string())
        );
    }

    #[test]
    fn test_integer_missing() {
        assert_eq!(parse_integer(&CellValue::Empty), FieldParse::Missing);
        assert_eq!(parse_integer(&CellValue::Float(0.0)), FieldParse::Missing);
        assert_eq!(parse_integer(&text("")), FieldParse::Missing);
    }

    #[test]
    fn test_integer_rejects_errors_and_infinity() {
        assert_eq!(
            parse_integer(&CellValue::Error("#N/A".to_string())),
            FieldParse::Unparsable("#N/A".to_string())
        );
        assert_eq!(
            parse_integer(&CellValue::Float(f64::INFINITY)),
            FieldParse::Unparsable("inf".to_string())
        );
    }

    #[test]
    fn test_amount_truncates() {
        assert_eq!(parse_amount(&CellValue::Float(12000.7)), FieldParse::Parsed(12000));
        assert_eq!(parse_amount(&text("12000.7")), FieldParse::Parsed(12000));
        assert_eq!(parse_amount(&text("-99.9")), FieldParse::Parsed(-99));
        assert_eq!(parse_amount(&text("1e3")), FieldParse::Parsed(1000));
    }

    #[test]
    fn test_amount_defaults_to_zero() {
        assert_eq!(parse_amount(&CellValue::Empty).value_or(0), 0);
        assert_eq!(parse_amount(&text("1,000")).value_or(0), 0);
        assert_eq!(parse_amount(&text("inf")).value_or(0), 0);
        assert_eq!(parse_amount(&text("nan")).value_or(0), 0);
    }
}
