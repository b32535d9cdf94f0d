use rheology::field::{FieldStore, PatchKind};
use rheology::material::check_scalar_argument;
use rheology::prelude::*;
use russell_lab::approx_eq;
use std::rc::Rc;

/// Linear elastic law whose modulus relaxes as E(t) = E∞ + (E₀ - E∞) exp(-t/τ)
struct Relaxing<'a> {
    name: String,
    sigma: &'a VolSymmTensorField,
    rho: f64,
    e0: f64,
    e_inf: f64,
    tau: f64,
    nu: f64,
    n_correct: usize,
}

impl<'a> Relaxing<'a> {
    fn uniform(&self, name: &str, dimensions: Dimensions, value: f64) -> VolScalarField {
        let value = DimensionedScalar::new(name, dimensions, value);
        let mut field = VolScalarField::uniform(name, self.mesh(), &value, PatchKind::ZeroGradient);
        field.correct_boundary_conditions();
        field
    }
}

impl<'a> RheologyLaw for Relaxing<'a> {
    fn name(&self) -> &str {
        &self.name
    }
    fn type_name(&self) -> &'static str {
        "relaxing"
    }
    fn sigma(&self) -> &VolSymmTensorField {
        self.sigma
    }
    fn rho(&self) -> RheologyResult<VolScalarField> {
        Ok(self.uniform("rho", Dimensions::DENSITY, self.rho))
    }
    fn e(&self) -> RheologyResult<VolScalarField> {
        Ok(self.uniform("E", Dimensions::PRESSURE, self.e0))
    }
    fn e_at(&self, t: f64) -> RheologyResult<VolScalarField> {
        check_scalar_argument(t, "t")?;
        let e = self.e_inf + (self.e0 - self.e_inf) * f64::exp(-t / self.tau);
        Ok(self.uniform("E", Dimensions::PRESSURE, e))
    }
    fn nu(&self) -> RheologyResult<VolScalarField> {
        Ok(self.uniform("nu", Dimensions::DIMLESS, self.nu))
    }
    fn ep(&self) -> RheologyResult<VolScalarField> {
        Ok(self.uniform("Ep", Dimensions::PRESSURE, 0.0))
    }
    fn sigma_y(&self) -> RheologyResult<VolScalarField> {
        Ok(self.uniform("sigmaY", Dimensions::PRESSURE, DEFAULT_YIELD_STRESS))
    }
    fn j(&self, t: f64) -> RheologyResult<VolScalarField> {
        let e = self.e_at(t)?;
        Ok(self.uniform("J", Dimensions::COMPLIANCE, 1.0 / e.max()))
    }
    fn correct(&mut self) -> RheologyResult<()> {
        self.n_correct += 1;
        Ok(())
    }
}

fn allocate_relaxing<'a>(
    name: &str,
    sigma: &'a VolSymmTensorField,
    dict: &Dictionary,
    _registry: &LawRegistry,
) -> RheologyResult<Box<dyn RheologyLaw + 'a>> {
    Ok(Box::new(Relaxing {
        name: name.to_string(),
        sigma,
        rho: dict.lookup_scalar("rho", Dimensions::DENSITY)?.value,
        e0: dict.lookup_scalar("E0", Dimensions::PRESSURE)?.value,
        e_inf: dict.lookup_scalar("Einf", Dimensions::PRESSURE)?.value,
        tau: dict.lookup_scalar("tau", Dimensions([0, 0, 1, 0, 0, 0, 0]))?.value,
        nu: dict.lookup_scalar("nu", Dimensions::DIMLESS)?.value,
        n_correct: 0,
    }))
}

const PROPERTIES: &str = r#"{
    "type": "multiMaterial",
    "laws": {
        "concrete": { "type": "relaxing", "rho": 2400.0, "E0": 30e9, "Einf": 10e9, "tau": 100.0, "nu": 0.2 },
        "steel": { "type": "linearElastic", "rho": 7854.0, "E": 200e9, "nu": 0.3 }
    }
}"#;

fn bar(materials: &[f64]) -> Result<(Rc<FvMesh>, VolSymmTensorField), RheologyError> {
    let patches = vec![Patch {
        name: "fixed".to_string(),
        face_cells: vec![0],
    }];
    let store = MemoryStore::new();
    store.write_scalar("materials", "0", materials)?;
    let mesh = Rc::new(FvMesh::new(materials.len(), patches)?.with_store(Box::new(store)));
    let sigma = VolSymmTensorField::new("sigma", &mesh, true);
    Ok((mesh, sigma))
}

#[test]
fn test_law_registry_extension() -> Result<(), RheologyError> {
    let mut registry = LawRegistry::with_builtins();
    registry.register("relaxing", allocate_relaxing)?;
    assert_eq!(registry.type_names(), &["linearElastic", "multiMaterial", "relaxing"]);

    // the composite allocates its sub-laws through the same registry
    let (_mesh, sigma) = bar(&[0.0, 1.0, 0.0])?;
    let dict = Dictionary::from_json("rheology", PROPERTIES)?;
    let mut law = registry.select("rheology", &sigma, &dict)?;
    assert_eq!(law.type_name(), "multiMaterial");

    // field mode
    let e = law.e()?;
    approx_eq(e.internal()[0], 30e9, 1e-15);
    approx_eq(e.internal()[1], 200e9, 1e-15);
    approx_eq(e.boundary()[0].values[0], 30e9, 1e-15);

    // time mode is forwarded to the sub-laws
    let e = law.e_at(100.0)?;
    approx_eq(e.internal()[0] / 1e9, 10.0 + 20.0 * f64::exp(-1.0), 1e-12);
    approx_eq(e.internal()[1], 200e9, 1e-15);
    approx_eq(e.internal()[2] / 1e9, 10.0 + 20.0 * f64::exp(-1.0), 1e-12);
    assert!(matches!(law.e_at(f64::NAN), Err(RheologyError::InvalidArgument(..))));

    // the creep compliance of the composite is not available
    assert!(law.j(1.0).is_err());
    law.correct()?;
    Ok(())
}

#[test]
fn test_law_registry_extension_errors() -> Result<(), RheologyError> {
    let (_mesh, sigma) = bar(&[0.0, 1.0])?;
    let dict = Dictionary::from_json("rheology", PROPERTIES)?;

    // the global registry does not know the new type
    assert_eq!(
        LawRegistry::global().select("rheology", &sigma, &dict).err(),
        Some(RheologyError::UnknownLawType("relaxing".to_string()))
    );

    // registering twice fails
    let mut registry = LawRegistry::with_builtins();
    registry.register("relaxing", allocate_relaxing)?;
    assert_eq!(
        registry.register("relaxing", allocate_relaxing).err(),
        Some(RheologyError::DuplicateLawType("relaxing".to_string()))
    );
    Ok(())
}
