//! Unit conversion utilities
//!
//! Every length entering the geometry engine is converted to millimeters
//! first. Supports the usual document units and fractional inch input.

use crate::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;

/// Length unit accepted on input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimeters
    #[default]
    Mm,
    /// Centimeters
    Cm,
    /// Meters
    M,
    /// Inches
    In,
    /// Points (1/72 inch)
    Pt,
    /// CSS pixels (1/96 inch)
    Px,
    /// Picas (1/6 inch)
    Pc,
    /// Feet
    Ft,
    /// Yards
    Yd,
}

impl LengthUnit {
    /// Number of millimeters in one unit
    pub fn mm_per_unit(self) -> f64 {
        match self {
            Self::Mm => 1.0,
            Self::Cm => 10.0,
            Self::M => 1000.0,
            Self::In => MM_PER_INCH,
            Self::Pt => MM_PER_INCH / 72.0,
            Self::Px => MM_PER_INCH / 96.0,
            Self::Pc => MM_PER_INCH / 6.0,
            Self::Ft => MM_PER_INCH * 12.0,
            Self::Yd => MM_PER_INCH * 36.0,
        }
    }

    /// Convert a value expressed in this unit to millimeters
    pub fn to_mm(self, value: f64) -> f64 {
        value * self.mm_per_unit()
    }

    /// Convert a millimeter value to this unit
    pub fn from_mm(self, value_mm: f64) -> f64 {
        value_mm / self.mm_per_unit()
    }

    /// Short label ("mm", "in", ...)
    pub fn label(self) -> &'static str {
        match self {
            Self::Mm => "mm",
            Self::Cm => "cm",
            Self::M => "m",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Px => "px",
            Self::Pc => "pc",
            Self::Ft => "ft",
            Self::Yd => "yd",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(Self::Mm),
            "cm" => Ok(Self::Cm),
            "m" => Ok(Self::M),
            "in" | "inch" | "inches" => Ok(Self::In),
            "pt" => Ok(Self::Pt),
            "px" => Ok(Self::Px),
            "pc" => Ok(Self::Pc),
            "ft" => Ok(Self::Ft),
            "yd" => Ok(Self::Yd),
            _ => Err(UnitError::UnknownUnit(s.to_string())),
        }
    }
}

/// Parse a length typed by the user, expressed in `unit`.
///
/// The result stays in `unit`. Inches also accept fractions such as
/// `1 1/2` or `3/8`.
pub fn parse_length(input: &str, unit: LengthUnit) -> Result<f64, UnitError> {
    let trimmed = input.trim();
    let invalid = |reason: &str| UnitError::InvalidLength {
        input: input.to_string(),
        reason: reason.to_string(),
    };
    if trimmed.is_empty() {
        return Err(invalid("empty length"));
    }

    if unit != LengthUnit::In || !trimmed.contains('/') {
        return trimmed.parse::<f64>().map_err(|e| invalid(&e.to_string()));
    }

    let mut total = 0.0;
    let mut sign = 1.0;
    for (idx, part) in trimmed.split_whitespace().enumerate() {
        let mut part = part;
        if idx == 0 && part.starts_with('-') {
            sign = -1.0;
            part = &part[1..];
        }
        if let Some((num, den)) = part.split_once('/') {
            let num = num
                .parse::<f64>()
                .map_err(|_| invalid("invalid numerator"))?;
            let den = den
                .parse::<f64>()
                .map_err(|_| invalid("invalid denominator"))?;
            if den == 0.0 {
                return Err(invalid("division by zero"));
            }
            total += num / den;
        } else {
            total += part
                .parse::<f64>()
                .map_err(|_| invalid("invalid number part"))?;
        }
    }
    Ok(sign * total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_plain_numbers_stay_in_unit() {
        assert!(close(parse_length("10.5", LengthUnit::Mm).unwrap(), 10.5));
        assert!(close(parse_length(" 4 ", LengthUnit::Cm).unwrap(), 4.0));
        assert!(close(parse_length("0.5", LengthUnit::In).unwrap(), 0.5));
    }

    #[test]
    fn test_imperial_fraction() {
        assert!(close(parse_length("1 1/2", LengthUnit::In).unwrap(), 1.5));
        assert!(close(parse_length("1/4", LengthUnit::In).unwrap(), 0.25));
        assert!(close(parse_length("-1/2", LengthUnit::In).unwrap(), -0.5));
    }

    #[test]
    fn test_document_units() {
        assert!(close(LengthUnit::Px.to_mm(96.0), 25.4));
        assert!(close(LengthUnit::Pt.to_mm(72.0), 25.4));
        assert!(close(LengthUnit::Ft.to_mm(1.0), 304.8));
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("MM".parse::<LengthUnit>().unwrap(), LengthUnit::Mm);
        assert_eq!("inch".parse::<LengthUnit>().unwrap(), LengthUnit::In);
        assert!("furlong".parse::<LengthUnit>().is_err());
        assert_eq!(LengthUnit::Cm.to_string(), "cm");
    }

    #[test]
    fn test_empty_and_invalid() {
        assert!(parse_length("", LengthUnit::Mm).is_err());
        assert!(parse_length("abc", LengthUnit::Mm).is_err());
        // fractions are an inch notation only
        assert!(parse_length("1/2", LengthUnit::Mm).is_err());
        assert!(parse_length("1/0", LengthUnit::In).is_err());
        assert!(parse_length("1/2/3", LengthUnit::In).is_err());
    }
}
