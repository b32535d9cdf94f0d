use super::{check_scalar_argument, creep_not_implemented, validate_law_name, LawRegistry, RheologyLaw};
use crate::base::{DimensionedScalar, Dictionary, Dimensions, RheologyError, RheologyResult};
use crate::base::{MATERIALS_FIELD_NAME, SMALL};
use crate::field::{IoObject, PatchKind, ReadOption, VolScalarField, VolSymmTensorField, WriteOption};
use log::{debug, info};
use russell_lab::Vector;

/// Implements a composite law made of several materials selected cell-wise by a material index
///
/// The persisted `materials` field holds, for each cell, a real number whose integer part is
/// the position of the governing law in the `laws` sub-dictionary. Every property is the sum
/// over the sub-laws of `indicator(i) * law_i.property()`; since exactly one indicator equals
/// one in each cell, this selects the property of the governing law.
///
/// # Example of dictionary
///
/// ```text
/// {
///     "type": "multiMaterial",
///     "laws": {
///         "steel": { "type": "linearElastic", "rho": 7854.0, "E": 200e9, "nu": 0.3 },
///         "aluminium": { "type": "linearElastic", "rho": 2700.0, "E": 70e9, "nu": 0.35 }
///     }
/// }
/// ```
pub struct MultiMaterial<'a> {
    /// Name of this instance
    name: String,

    /// Stress field
    sigma: &'a VolSymmTensorField,

    /// Material index of each cell
    materials: VolScalarField,

    /// Sub-laws in declaration order
    laws: Vec<Box<dyn RheologyLaw + 'a>>,
}

impl<'a> MultiMaterial<'a> {
    /// Type name used to select this law from the registry
    pub const TYPE_NAME: &'static str = "multiMaterial";

    /// Allocates a new instance
    ///
    /// # Errors
    ///
    /// * `Configuration` if the name is not a valid word
    /// * `Configuration` if the `materials` field cannot be read or the `laws` entry is missing or empty
    /// * any error raised while allocating the sub-laws (e.g., `UnknownLawType`)
    /// * `InvalidMaterialIndex` if a material index does not select one of the sub-laws
    pub fn new(
        name: &str,
        sigma: &'a VolSymmTensorField,
        dict: &Dictionary,
        registry: &LawRegistry,
    ) -> RheologyResult<Self> {
        let name = validate_law_name(name)?;
        let mesh = sigma.mesh();

        // material index
        let io = IoObject::new(
            MATERIALS_FIELD_NAME,
            mesh.time_name(),
            ReadOption::MustRead,
            WriteOption::AutoWrite,
        );
        let materials = VolScalarField::read(io, mesh, Dimensions::DIMLESS)?;

        // sub-laws
        let entries = dict.entries("laws")?;
        if entries.is_empty() {
            return Err(RheologyError::Configuration(format!(
                "at least one law must be given in {}.laws",
                dict.name()
            )));
        }
        let mut laws = Vec::with_capacity(entries.len());
        for (keyword, law_dict) in &entries {
            let type_name = law_dict.lookup_word("type")?;
            laws.push(registry.create(&type_name, keyword, sigma, law_dict)?);
        }

        check_material_index(&materials, laws.len())?;
        info!("Material {} combines {} laws over {} cells", name, laws.len(), mesh.n_cells());
        Ok(MultiMaterial {
            name,
            sigma,
            materials,
            laws,
        })
    }

    /// Returns the number of sub-laws
    pub fn len(&self) -> usize {
        self.laws.len()
    }

    /// Returns true if there are no sub-laws
    pub fn is_empty(&self) -> bool {
        self.laws.is_empty()
    }

    /// Returns the sub-law at a given position
    pub fn law(&self, i: usize) -> Option<&dyn RheologyLaw> {
        self.laws.get(i).map(|law| law.as_ref() as &dyn RheologyLaw)
    }

    /// Returns an iterator over the sub-laws in declaration order
    pub fn laws(&self) -> impl Iterator<Item = &dyn RheologyLaw> {
        self.laws.iter().map(|law| law.as_ref() as &dyn RheologyLaw)
    }

    /// Returns the material-index field
    pub fn materials(&self) -> &VolScalarField {
        &self.materials
    }

    /// Returns the position of the sub-law governing a cell
    pub fn owner_of(&self, cell: usize) -> Option<usize> {
        if cell >= self.materials.internal().dim() {
            return None;
        }
        let m = self.materials.internal()[cell];
        (0..self.laws.len()).find(|i| in_band(m, *i))
    }

    /// Returns the indicator of the i-th sub-law: one in the cells it governs, zero elsewhere
    ///
    /// A cell belongs to law `i` if its material index lies in `[i - SMALL, i + 1 - SMALL)`.
    pub fn indicator(&self, i: usize) -> Vector {
        let mat = self.materials.internal();
        let mut result = Vector::new(mat.dim());
        for c in 0..mat.dim() {
            if in_band(mat[c], i) {
                result[c] = 1.0;
            }
        }
        result
    }

    /// Sums the indicator-weighted property of every sub-law and corrects the patches once
    fn accumulate<F>(&self, field_name: &str, dimensions: Dimensions, property: F) -> RheologyResult<VolScalarField>
    where
        F: Fn(&dyn RheologyLaw) -> RheologyResult<VolScalarField>,
    {
        let zero = DimensionedScalar::new(&format!("zero{}", field_name), dimensions, 0.0);
        let mut result = VolScalarField::uniform(field_name, self.mesh(), &zero, PatchKind::ZeroGradient);
        for (i, law) in self.laws.iter().enumerate() {
            let value = property(law.as_ref())?;
            result.add_weighted(&self.indicator(i), &value)?;
        }
        result.correct_boundary_conditions();
        Ok(result)
    }
}

/// Returns true if the material index m lies in the band of law i
#[inline]
fn in_band(m: f64, i: usize) -> bool {
    let lower = i as f64 - SMALL;
    let upper = (i + 1) as f64 - SMALL;
    m >= lower && m < upper
}

/// Checks that every material index selects one of the n_laws laws
fn check_material_index(materials: &VolScalarField, n_laws: usize) -> RheologyResult<()> {
    let min = materials.min();
    let max = materials.max();
    let finite = materials.internal().as_data().iter().all(|m| m.is_finite());
    if !finite || min < 0.0 || max >= n_laws as f64 - SMALL {
        return Err(RheologyError::InvalidMaterialIndex { min, max, n_laws });
    }
    Ok(())
}

/// Allocates a boxed [MultiMaterial] law (registry constructor)
pub(crate) fn allocate_multi_material<'a>(
    name: &str,
    sigma: &'a VolSymmTensorField,
    dict: &Dictionary,
    registry: &LawRegistry,
) -> RheologyResult<Box<dyn RheologyLaw + 'a>> {
    Ok(Box::new(MultiMaterial::new(name, sigma, dict, registry)?))
}

impl<'a> RheologyLaw for MultiMaterial<'a> {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        MultiMaterial::TYPE_NAME
    }

    fn sigma(&self) -> &VolSymmTensorField {
        self.sigma
    }

    fn rho(&self) -> RheologyResult<VolScalarField> {
        self.accumulate("rho", Dimensions::DENSITY, |law| law.rho())
    }

    fn rho_at(&self, t: f64) -> RheologyResult<VolScalarField> {
        check_scalar_argument(t, "t")?;
        self.accumulate("rho", Dimensions::DENSITY, |law| law.rho_at(t))
    }

    fn e(&self) -> RheologyResult<VolScalarField> {
        self.accumulate("E", Dimensions::PRESSURE, |law| law.e())
    }

    fn e_at(&self, t: f64) -> RheologyResult<VolScalarField> {
        check_scalar_argument(t, "t")?;
        self.accumulate("E", Dimensions::PRESSURE, |law| law.e_at(t))
    }

    fn nu(&self) -> RheologyResult<VolScalarField> {
        self.accumulate("nu", Dimensions::DIMLESS, |law| law.nu())
    }

    fn nu_at(&self, t: f64) -> RheologyResult<VolScalarField> {
        check_scalar_argument(t, "t")?;
        self.accumulate("nu", Dimensions::DIMLESS, |law| law.nu_at(t))
    }

    fn ep(&self) -> RheologyResult<VolScalarField> {
        self.accumulate("Ep", Dimensions::PRESSURE, |law| law.ep())
    }

    fn sigma_y(&self) -> RheologyResult<VolScalarField> {
        self.accumulate("sigmaY", Dimensions::PRESSURE, |law| law.sigma_y())
    }

    fn j(&self, t: f64) -> RheologyResult<VolScalarField> {
        creep_not_implemented(t)
    }

    /// Corrects every sub-law in declaration order, stopping at the first failure
    fn correct(&mut self) -> RheologyResult<()> {
        let n_laws = self.laws.len();
        for (i, law) in self.laws.iter_mut().enumerate() {
            debug!("Correcting law {} ({} of {}) of material {}", law.name(), i + 1, n_laws, self.name);
            law.correct()?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
