use super::{LawRegistry, RheologyLaw};
use crate::base::{Dictionary, Dimensions, RheologyResult};
use crate::field::{VolScalarField, VolSymmTensorField};

/// Holds the rheology law selected for a solid and derives the elastic constants used by solvers
///
/// The dictionary holds the `rheology` sub-dictionary (with its `type` keyword) and an optional
/// `planeStress` switch (default: plane strain).
pub struct RheologyModel<'a> {
    /// Selected law
    law: Box<dyn RheologyLaw + 'a>,

    /// 2D plane-stress problem, otherwise plane-strain (or 3D)
    plane_stress: bool,
}

impl<'a> RheologyModel<'a> {
    /// Allocates a new instance
    pub fn new(sigma: &'a VolSymmTensorField, dict: &Dictionary, registry: &LawRegistry) -> RheologyResult<Self> {
        let plane_stress = dict.lookup_bool_or("planeStress", false)?;
        let law_dict = dict.sub_dict("rheology")?;
        let law = registry.select("law", sigma, &law_dict)?;
        Ok(RheologyModel { law, plane_stress })
    }

    /// Returns the selected law
    pub fn law(&self) -> &dyn RheologyLaw {
        self.law.as_ref()
    }

    /// Returns the plane-stress flag
    pub fn plane_stress(&self) -> bool {
        self.plane_stress
    }

    /// Returns the density
    pub fn rho(&self) -> RheologyResult<VolScalarField> {
        self.law.rho()
    }

    /// Returns the modulus of elasticity
    pub fn e(&self) -> RheologyResult<VolScalarField> {
        self.law.e()
    }

    /// Returns the Poisson's ratio
    pub fn nu(&self) -> RheologyResult<VolScalarField> {
        self.law.nu()
    }

    /// Returns the shear modulus μ = E / (2 (1 + ν))
    pub fn mu(&self) -> RheologyResult<VolScalarField> {
        let (e, nu) = (self.law.e()?, self.law.nu()?);
        VolScalarField::combine("mu", Dimensions::PRESSURE, &e, &nu, |e, nu| e / (2.0 * (1.0 + nu)))
    }

    /// Returns the first Lamé parameter λ
    ///
    /// ```text
    /// plane stress: λ = ν E / ((1 + ν) (1 - ν))
    /// otherwise:    λ = ν E / ((1 + ν) (1 - 2 ν))
    /// ```
    pub fn lambda(&self) -> RheologyResult<VolScalarField> {
        let (e, nu) = (self.law.e()?, self.law.nu()?);
        if self.plane_stress {
            VolScalarField::combine("lambda", Dimensions::PRESSURE, &e, &nu, |e, nu| {
                nu * e / ((1.0 + nu) * (1.0 - nu))
            })
        } else {
            VolScalarField::combine("lambda", Dimensions::PRESSURE, &e, &nu, |e, nu| {
                nu * e / ((1.0 + nu) * (1.0 - 2.0 * nu))
            })
        }
    }

    /// Returns three times the bulk modulus
    ///
    /// ```text
    /// plane stress: 3K = E / (1 - ν)
    /// otherwise:    3K = E / (1 - 2 ν)
    /// ```
    pub fn three_k(&self) -> RheologyResult<VolScalarField> {
        let (e, nu) = (self.law.e()?, self.law.nu()?);
        if self.plane_stress {
            VolScalarField::combine("threeK", Dimensions::PRESSURE, &e, &nu, |e, nu| e / (1.0 - nu))
        } else {
            VolScalarField::combine("threeK", Dimensions::PRESSURE, &e, &nu, |e, nu| e / (1.0 - 2.0 * nu))
        }
    }

    /// Corrects the selected law
    pub fn correct(&mut self) -> RheologyResult<()> {
        self.law.correct()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
