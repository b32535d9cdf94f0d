/// Defines a small number used to keep the material-index band edges away from integers
pub const SMALL: f64 = 1.0e-15;

/// Defines a large number representing a numerically infinite quantity
pub const GREAT: f64 = 1.0e15;

/// Defines the plastic modulus reported by laws without plasticity
pub const DEFAULT_PLASTIC_MODULUS: f64 = 0.0;

/// Defines the yield stress reported by laws that never yield
pub const DEFAULT_YIELD_STRESS: f64 = GREAT;

/// Defines the name of the persisted material-index field
pub const MATERIALS_FIELD_NAME: &str = "materials";

/// Defines an auxiliary directory where the test files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/rheology/test";
