use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the exponents of the seven base units of a physical quantity
///
/// The order is: mass, length, time, temperature, amount of substance, current, luminous intensity.
///
/// **Note:** The exponents are carried along as metadata; no dimensional checking is performed here.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct Dimensions(pub [i32; 7]);

impl Dimensions {
    /// Dimensionless quantity
    pub const DIMLESS: Dimensions = Dimensions([0, 0, 0, 0, 0, 0, 0]);

    /// Mass per volume, e.g., kg/m³
    pub const DENSITY: Dimensions = Dimensions([1, -3, 0, 0, 0, 0, 0]);

    /// Force per area, e.g., Pa
    pub const PRESSURE: Dimensions = Dimensions([1, -1, -2, 0, 0, 0, 0]);

    /// Area per force, e.g., 1/Pa
    pub const COMPLIANCE: Dimensions = Dimensions([-1, 1, 2, 0, 0, 0, 0]);
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(f, "[{} {} {} {} {} {} {}]", d[0], d[1], d[2], d[3], d[4], d[5], d[6])
    }
}

/// Holds a named scalar value with physical dimensions
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionedScalar {
    /// Name of the quantity
    pub name: String,

    /// Physical dimensions
    pub dimensions: Dimensions,

    /// Value
    pub value: f64,
}

impl DimensionedScalar {
    /// Allocates a new instance
    pub fn new(name: &str, dimensions: Dimensions, value: f64) -> Self {
        DimensionedScalar {
            name: name.to_string(),
            dimensions,
            value,
        }
    }
}

impl fmt::Display for DimensionedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.dimensions, self.value)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
