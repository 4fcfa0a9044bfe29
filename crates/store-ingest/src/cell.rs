//! Owned cell values detached from the spreadsheet reader.

use std::fmt;
use std::ops::Range;

use calamine::Data;
use chrono::NaiveDateTime;

/// Largest magnitude at which a whole float is still rendered as an integer.
const WHOLE_FLOAT_LIMIT: f64 = 1e16;

/// Decimal exponents rendered positionally; anything outside switches to
/// scientific notation with a signed, at least two-digit exponent.
const POSITIONAL_EXPONENTS: Range<i32> = -4..16;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Float(f64),
    Int(i64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Spreadsheet error value such as `#N/A`, kept as its display code.
    Error(String),
}

impl CellValue {
    /// True for cells that hold nothing at all (no value or an empty string).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Whether the cell counts as a value for field mapping.
    ///
    /// Blank cells, numeric zero and `false` are treated as absent, so a zero
    /// in a code or billing-day column reads the same as an empty cell.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Text(s) => !s.is_empty(),
            Self::Float(f) => *f != 0.0,
            Self::Int(i) => *i != 0,
            Self::Bool(b) => *b,
            Self::DateTime(_) | Self::Error(_) => true,
        }
    }

    /// Text form of a present cell, `None` otherwise.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        self.is_present().then(|| self.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) | Self::Error(s) => f.write_str(s),
            Self::Float(v) => write_float(f, *v),
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Shortest round-trip digits: `12000.7`, `1e+20`, `1.5e-05`, `nan`.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
    }
    if v.fract() == 0.0 && v.abs() < WHOLE_FLOAT_LIMIT {
        return write!(f, "{}", v as i64);
    }

    let scientific = format!("{v:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.write_str(&scientific);
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    if POSITIONAL_EXPONENTS.contains(&exponent) {
        write!(f, "{v}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Self::Empty,
            Data::String(s) => Self::Text(s.clone()),
            Data::Float(v) => Self::Float(*v),
            Data::Int(v) => Self::Int(*v),
            Data::Bool(v) => Self::Bool(*v),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(value) => Self::DateTime(value),
                None => Self::Float(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => Self::Text(s.clone()),
            Data::Error(e) => Self::Error(e.to_string()),
        }
    }
}
