use super::{creep_not_implemented, validate_law_name, LawRegistry, RheologyLaw};
use crate::base::{DimensionedScalar, Dimensions, RheologyError, RheologyResult};
use crate::base::{Dictionary, DEFAULT_PLASTIC_MODULUS, DEFAULT_YIELD_STRESS};
use crate::field::{PatchKind, VolScalarField, VolSymmTensorField};

/// Implements a linear elastic law with uniform density, Young's modulus, and Poisson's ratio
///
/// The dictionary holds `rho`, `E`, and `nu`. The optional `Ep` and `sigmaY` entries replace
/// the plastic modulus and yield stress reported by default (zero and "never yields").
pub struct LinearElastic<'a> {
    /// Name of this instance
    name: String,

    /// Stress field
    sigma: &'a VolSymmTensorField,

    /// Density
    rho: DimensionedScalar,

    /// Young's modulus
    e: DimensionedScalar,

    /// Poisson's ratio
    nu: DimensionedScalar,

    /// Reported plastic modulus
    ep: DimensionedScalar,

    /// Reported yield stress
    sigma_y: DimensionedScalar,
}

impl<'a> LinearElastic<'a> {
    /// Type name used to select this law from the registry
    pub const TYPE_NAME: &'static str = "linearElastic";

    /// Allocates a new instance
    pub fn new(name: &str, sigma: &'a VolSymmTensorField, dict: &Dictionary) -> RheologyResult<Self> {
        let name = validate_law_name(name)?;
        let rho = dict.lookup_scalar("rho", Dimensions::DENSITY)?;
        let e = dict.lookup_scalar("E", Dimensions::PRESSURE)?;
        let nu = dict.lookup_scalar("nu", Dimensions::DIMLESS)?;
        if rho.value <= 0.0 {
            return Err(invalid_parameter(dict, "rho must be > 0"));
        }
        if e.value <= 0.0 {
            return Err(invalid_parameter(dict, "E must be > 0"));
        }
        if nu.value <= -1.0 || nu.value >= 0.5 {
            return Err(invalid_parameter(dict, "nu must be in (-1, 0.5)"));
        }
        let ep = match dict.lookup_scalar_opt("Ep", Dimensions::PRESSURE)? {
            Some(v) => v,
            None => DimensionedScalar::new("zeroEp", Dimensions::PRESSURE, DEFAULT_PLASTIC_MODULUS),
        };
        let sigma_y = match dict.lookup_scalar_opt("sigmaY", Dimensions::PRESSURE)? {
            Some(v) => v,
            None => DimensionedScalar::new("zeroSigmaY", Dimensions::PRESSURE, DEFAULT_YIELD_STRESS),
        };
        Ok(LinearElastic {
            name,
            sigma,
            rho,
            e,
            nu,
            ep,
            sigma_y,
        })
    }

    /// Returns a uniform zero-gradient field with corrected patches
    fn uniform(&self, field_name: &str, value: &DimensionedScalar) -> VolScalarField {
        let mut result = VolScalarField::uniform(field_name, self.mesh(), value, PatchKind::ZeroGradient);
        result.correct_boundary_conditions();
        result
    }
}

/// Returns an error for a parameter out of range
fn invalid_parameter(dict: &Dictionary, message: &str) -> RheologyError {
    RheologyError::Configuration(format!("{} in dictionary {}", message, dict.name()))
}

/// Allocates a boxed [LinearElastic] law (registry constructor)
pub(crate) fn allocate_linear_elastic<'a>(
    name: &str,
    sigma: &'a VolSymmTensorField,
    dict: &Dictionary,
    _registry: &LawRegistry,
) -> RheologyResult<Box<dyn RheologyLaw + 'a>> {
    Ok(Box::new(LinearElastic::new(name, sigma, dict)?))
}

impl<'a> RheologyLaw for LinearElastic<'a> {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        LinearElastic::TYPE_NAME
    }

    fn sigma(&self) -> &VolSymmTensorField {
        self.sigma
    }

    fn rho(&self) -> RheologyResult<VolScalarField> {
        Ok(self.uniform("rho", &self.rho))
    }

    fn e(&self) -> RheologyResult<VolScalarField> {
        Ok(self.uniform("E", &self.e))
    }

    fn nu(&self) -> RheologyResult<VolScalarField> {
        Ok(self.uniform("nu", &self.nu))
    }

    fn ep(&self) -> RheologyResult<VolScalarField> {
        Ok(self.uniform("Ep", &self.ep))
    }

    fn sigma_y(&self) -> RheologyResult<VolScalarField> {
        Ok(self.uniform("sigmaY", &self.sigma_y))
    }

    fn j(&self, t: f64) -> RheologyResult<VolScalarField> {
        creep_not_implemented(t)
    }

    /// Does nothing: there is no plastic or creep evolution
    fn correct(&mut self) -> RheologyResult<()> {
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LinearElastic;
    use crate::base::{Dimensions, RheologyError, RheologyResult, Samples, DEFAULT_YIELD_STRESS};
    use crate::material::RheologyLaw;
    use russell_lab::approx_eq;

    #[test]
    fn new_captures_errors() -> RheologyResult<()> {
        let (_mesh, sigma) = Samples::bar_mesh_and_sigma(&[0.0, 0.0])?;
        assert_eq!(
            LinearElastic::new("mild steel", &sigma, &Samples::steel()).err(),
            Some(RheologyError::Configuration(
                "law name \"mild steel\" is not a valid word".to_string()
            ))
        );

        let mut dict = Samples::steel();
        dict.set("E", "stiff");
        assert!(matches!(
            LinearElastic::new("steel", &sigma, &dict),
            Err(RheologyError::Configuration(..))
        ));

        let dict = crate::base::Dictionary::from_json("steel", r#"{ "rho": 7854.0, "E": 200e9 }"#)?;
        assert_eq!(
            LinearElastic::new("steel", &sigma, &dict).err(),
            Some(RheologyError::Configuration(
                "keyword nu is undefined in dictionary steel".to_string()
            ))
        );

        let mut dict = Samples::steel();
        dict.set("rho", 0.0);
        assert_eq!(
            LinearElastic::new("steel", &sigma, &dict).err(),
            Some(RheologyError::Configuration("rho must be > 0 in dictionary steel".to_string()))
        );
        let mut dict = Samples::steel();
        dict.set("E", -1.0);
        assert!(LinearElastic::new("steel", &sigma, &dict).is_err());
        let mut dict = Samples::steel();
        dict.set("nu", 0.5);
        assert_eq!(
            LinearElastic::new("steel", &sigma, &dict).err(),
            Some(RheologyError::Configuration(
                "nu must be in (-1, 0.5) in dictionary steel".to_string()
            ))
        );
        Ok(())
    }

    #[test]
    fn properties_are_uniform() -> RheologyResult<()> {
        let (mesh, sigma) = Samples::bar_mesh_and_sigma(&[0.0, 0.0, 0.0])?;
        let law = LinearElastic::new("steel", &sigma, &Samples::steel())?;
        assert_eq!(law.name(), "steel");
        assert_eq!(law.type_name(), "linearElastic");
        assert_eq!(law.mesh().n_cells(), mesh.n_cells());

        let rho = law.rho()?;
        assert_eq!(rho.name(), "rho");
        assert_eq!(rho.dimensions(), Dimensions::DENSITY);
        for c in 0..3 {
            approx_eq(rho.internal()[c], 7854.0, 1e-15);
        }
        for patch in rho.boundary() {
            for value in &patch.values {
                approx_eq(*value, 7854.0, 1e-15);
            }
        }
        let e = law.e()?;
        assert_eq!(e.dimensions(), Dimensions::PRESSURE);
        approx_eq(e.min(), 200e9, 1e-15);
        approx_eq(e.max(), 200e9, 1e-15);
        let nu = law.nu()?;
        assert_eq!(nu.dimensions(), Dimensions::DIMLESS);
        approx_eq(nu.max(), 0.3, 1e-15);
        Ok(())
    }

    #[test]
    fn time_evaluation_mode_works() -> RheologyResult<()> {
        let (_mesh, sigma) = Samples::bar_mesh_and_sigma(&[0.0, 0.0])?;
        let law = LinearElastic::new("steel", &sigma, &Samples::steel())?;
        approx_eq(law.rho_at(1.0)?.max(), 7854.0, 1e-15);
        approx_eq(law.e_at(10.0)?.max(), 200e9, 1e-15);
        approx_eq(law.nu_at(0.0)?.max(), 0.3, 1e-15);
        assert!(matches!(law.rho_at(f64::NAN), Err(RheologyError::InvalidArgument(..))));
        assert!(matches!(law.e_at(f64::INFINITY), Err(RheologyError::InvalidArgument(..))));
        assert!(matches!(law.nu_at(f64::NEG_INFINITY), Err(RheologyError::InvalidArgument(..))));
        Ok(())
    }

    #[test]
    fn plastic_properties_use_sentinels() -> RheologyResult<()> {
        let (_mesh, sigma) = Samples::bar_mesh_and_sigma(&[0.0, 0.0])?;
        let law = LinearElastic::new("steel", &sigma, &Samples::steel())?;
        let ep = law.ep()?;
        assert_eq!(ep.name(), "Ep");
        assert_eq!(ep.max(), 0.0);
        assert_eq!(ep.min(), 0.0);
        let sigma_y = law.sigma_y()?;
        assert_eq!(sigma_y.name(), "sigmaY");
        assert_eq!(sigma_y.min(), DEFAULT_YIELD_STRESS);

        let mut dict = Samples::steel();
        dict.set("Ep", 1e9).set("sigmaY", 250e6);
        let law = LinearElastic::new("steel", &sigma, &dict)?;
        assert_eq!(law.ep()?.max(), 1e9);
        assert_eq!(law.sigma_y()?.max(), 250e6);
        Ok(())
    }

    #[test]
    fn creep_compliance_is_not_implemented() -> RheologyResult<()> {
        let (_mesh, sigma) = Samples::bar_mesh_and_sigma(&[0.0, 0.0])?;
        let law = LinearElastic::new("steel", &sigma, &Samples::steel())?;
        assert_eq!(law.j(1.0).err(), Some(RheologyError::NotImplemented("J(scalar t)")));
        assert!(matches!(law.j(f64::NAN), Err(RheologyError::InvalidArgument(..))));
        Ok(())
    }

    #[test]
    fn correct_does_nothing() -> RheologyResult<()> {
        let (_mesh, sigma) = Samples::bar_mesh_and_sigma(&[0.0, 0.0])?;
        let mut law = LinearElastic::new("steel", &sigma, &Samples::steel())?;
        law.correct()?;
        approx_eq(law.rho()?.max(), 7854.0, 1e-15);
        Ok(())
    }
}
