//! Address validation rule.
//!
//! A shipping address is accepted when its zipcode falls in an inclusive
//! numeric range (20170-20179 unless configured otherwise). Zipcodes that
//! cannot be read as a number fail closed.

use crate::address::{ShippingAddress, Zipcode};
use crate::types::{Error, Result};

/// Result of evaluating an address against the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    /// Zipcode parsed but lies outside the accepted range.
    Invalid,
    /// Zipcode missing or unreadable.
    Malformed(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// Inclusive range of accepted zipcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZipcodeRange {
    min: u32,
    max: u32,
}

impl ZipcodeRange {
    pub const DEFAULT_MIN: u32 = 20170;
    pub const DEFAULT_MAX: u32 = 20179;

    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(Error::config(format!(
                "zipcode range is empty: min {} > max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, zipcode: u32) -> bool {
        (self.min..=self.max).contains(&zipcode)
    }

    pub fn validate(&self, address: &ShippingAddress) -> ValidationOutcome {
        let Some(zipcode) = &address.zipcode else {
            return ValidationOutcome::Malformed("zipcode is missing".to_string());
        };
        match parse_zipcode(zipcode) {
            Ok(n) if self.contains(n) => ValidationOutcome::Valid,
            Ok(_) => ValidationOutcome::Invalid,
            Err(reason) => ValidationOutcome::Malformed(reason),
        }
    }
}

impl Default for ZipcodeRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Evaluate `address` against the default 20170-20179 range.
pub fn validate(address: &ShippingAddress) -> ValidationOutcome {
    ZipcodeRange::default().validate(address)
}

/// Read a zipcode as an integer.
///
/// Text is trimmed, an optional leading `+` is skipped, and the leading run
/// of ASCII digits is parsed, so ZIP+4 forms like `"20175-1234"` read as
/// 20175. Numbers must be non-negative, integral (`20175.0` is accepted,
/// `20175.5` is not) and fit in `u32`.
pub fn parse_zipcode(zipcode: &Zipcode) -> std::result::Result<u32, String> {
    match zipcode {
        Zipcode::Text(text) => {
            let trimmed = text.trim();
            let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
            let digits_end = unsigned
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(unsigned.len());
            let digits = &unsigned[..digits_end];
            if digits.is_empty() {
                return Err(format!("zipcode {:?} is not numeric", text));
            }
            digits
                .parse::<u32>()
                .map_err(|_| format!("zipcode {:?} is out of range", text))
        }
        Zipcode::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .or_else(|| n.as_f64().and_then(integral_u32))
            .ok_or_else(|| format!("zipcode {} is not a non-negative integer", n)),
    }
}

fn integral_u32(f: f64) -> Option<u32> {
    if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) {
        Some(f as u32)
    } else {
        None
    }
}
