use std::fmt::{self, Display};

/// An arbitrary-exponent decimal, `coefficient * 10^exponent`.
///
/// The view layer never interprets decimals; they are carried as an opaque
/// scalar payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Decimal {
    pub coefficient: i64,
    pub exponent: i32,
}

impl Decimal {
    pub const fn new(coefficient: i64, exponent: i32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Lossy conversion, for hosts that have no decimal column type.
    pub fn to_f64(self) -> f64 {
        self.coefficient as f64 * 10f64.powi(self.exponent)
    }
}

/// Formats the decimal in text notation, e.g. `125d-2`.
impl Display for Decimal {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}d{}", self.coefficient, self.exponent)
    }
}
