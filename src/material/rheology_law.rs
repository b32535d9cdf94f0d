use crate::base::{is_valid_word, RheologyError, RheologyResult};
use crate::field::{FvMesh, VolScalarField, VolSymmTensorField};
use std::rc::Rc;

/// Specifies the essential functions of rheology (stress-strain) laws
///
/// Each elastic property is available in two modes: the field mode (`rho()`) and the
/// time-evaluation mode (`rho_at(t)`). Laws that do not depend on time validate `t`
/// and return the same field as the field mode.
pub trait RheologyLaw {
    /// Returns the name given to this law instance
    fn name(&self) -> &str;

    /// Returns the type name used to select this law from the registry
    fn type_name(&self) -> &'static str;

    /// Returns the stress field
    fn sigma(&self) -> &VolSymmTensorField;

    /// Returns the mesh
    fn mesh(&self) -> &Rc<FvMesh> {
        self.sigma().mesh()
    }

    /// Returns the density
    fn rho(&self) -> RheologyResult<VolScalarField>;

    /// Returns the density at time t
    fn rho_at(&self, t: f64) -> RheologyResult<VolScalarField> {
        check_scalar_argument(t, "t")?;
        self.rho()
    }

    /// Returns the modulus of elasticity
    fn e(&self) -> RheologyResult<VolScalarField>;

    /// Returns the modulus of elasticity at time t
    fn e_at(&self, t: f64) -> RheologyResult<VolScalarField> {
        check_scalar_argument(t, "t")?;
        self.e()
    }

    /// Returns the Poisson's ratio
    fn nu(&self) -> RheologyResult<VolScalarField>;

    /// Returns the Poisson's ratio at time t
    fn nu_at(&self, t: f64) -> RheologyResult<VolScalarField> {
        check_scalar_argument(t, "t")?;
        self.nu()
    }

    /// Returns the plastic modulus
    fn ep(&self) -> RheologyResult<VolScalarField>;

    /// Returns the yield stress
    fn sigma_y(&self) -> RheologyResult<VolScalarField>;

    /// Returns the creep compliance at time t
    fn j(&self, t: f64) -> RheologyResult<VolScalarField>;

    /// Advances the internal state by one time step
    fn correct(&mut self) -> RheologyResult<()>;
}

/// Checks that a scalar argument is a real (finite) number
pub fn check_scalar_argument(value: f64, what: &str) -> RheologyResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RheologyError::InvalidArgument(format!(
            "{} must be a real scalar; got {}",
            what, value
        )))
    }
}

/// Parses a scalar argument given as text
///
/// # Examples
///
/// ```
/// use rheology::base::RheologyError;
/// use rheology::material::parse_scalar_argument;
///
/// assert_eq!(parse_scalar_argument("1.5"), Ok(1.5));
/// assert!(matches!(parse_scalar_argument("x"), Err(RheologyError::InvalidArgument(..))));
/// ```
pub fn parse_scalar_argument(text: &str) -> RheologyResult<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| RheologyError::InvalidArgument(format!("{} is not a scalar", text)))?;
    check_scalar_argument(value, text)
}

/// Checks that the name given to a law is a valid word
pub(crate) fn validate_law_name(name: &str) -> RheologyResult<String> {
    if is_valid_word(name) {
        Ok(name.to_string())
    } else {
        Err(RheologyError::Configuration(format!(
            "law name \"{}\" is not a valid word",
            name
        )))
    }
}

/// Implements the creep compliance of laws without creep
///
/// The argument is validated first.
pub(crate) fn creep_not_implemented(t: f64) -> RheologyResult<VolScalarField> {
    check_scalar_argument(t, "t")?;
    Err(RheologyError::NotImplemented("J(scalar t)"))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
