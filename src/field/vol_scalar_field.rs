use super::{FvMesh, IoObject, ReadOption, WriteOption};
use crate::base::{DimensionedScalar, Dimensions, RheologyError, RheologyResult};
use russell_lab::Vector;
use std::rc::Rc;

/// Defines the boundary condition kind of a patch
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PatchKind {
    /// Face values equal the value of the owner cell
    ZeroGradient,

    /// Face values are assigned directly and left untouched by the correction
    Calculated,
}

/// Holds the face values of a patch
#[derive(Clone, Debug, PartialEq)]
pub struct PatchField {
    /// Boundary condition kind
    pub kind: PatchKind,

    /// Face values
    pub values: Vec<f64>,
}

/// Holds a cell-centred scalar field with patch values
#[derive(Clone, Debug)]
pub struct VolScalarField {
    /// Identity and persistence options
    io: IoObject,

    /// Access to the mesh
    mesh: Rc<FvMesh>,

    /// Physical dimensions
    dimensions: Dimensions,

    /// Cell values
    internal: Vector,

    /// Patch values (one entry per mesh patch)
    boundary: Vec<PatchField>,
}

impl VolScalarField {
    /// Allocates a new field with the same value everywhere
    ///
    /// The field is temporary (never read or written); call [VolScalarField::correct_boundary_conditions]
    /// after modifying the internal values.
    pub fn uniform(name: &str, mesh: &Rc<FvMesh>, value: &DimensionedScalar, kind: PatchKind) -> Self {
        let boundary = mesh
            .patches()
            .iter()
            .map(|patch| PatchField {
                kind,
                values: vec![value.value; patch.face_cells.len()],
            })
            .collect();
        VolScalarField {
            io: IoObject::temporary(name, mesh.time_name()),
            mesh: mesh.clone(),
            dimensions: value.dimensions,
            internal: Vector::filled(mesh.n_cells(), value.value),
            boundary,
        }
    }

    /// Reads a field from the store of persisted fields
    ///
    /// The patches are zero-gradient and are corrected after reading.
    ///
    /// # Errors
    ///
    /// * `Configuration` if the read option is `MustRead` and the field does not exist
    /// * `Configuration` if the number of values differs from the number of cells
    pub fn read(io: IoObject, mesh: &Rc<FvMesh>, dimensions: Dimensions) -> RheologyResult<Self> {
        let values = match io.read {
            ReadOption::NoRead => None,
            ReadOption::MustRead | ReadOption::ReadIfPresent => mesh.store().read_scalar(&io.name, &io.time_name)?,
        };
        let values = match (values, io.read) {
            (Some(v), _) => v,
            (None, ReadOption::MustRead) => {
                return Err(RheologyError::Configuration(format!(
                    "cannot find required field {} in time directory {}",
                    io.name, io.time_name
                )))
            }
            (None, _) => vec![0.0; mesh.n_cells()],
        };
        if values.len() != mesh.n_cells() {
            return Err(RheologyError::Configuration(format!(
                "field {} has {} values but the mesh has {} cells",
                io.name,
                values.len(),
                mesh.n_cells()
            )));
        }
        let zero = DimensionedScalar::new(&io.name, dimensions, 0.0);
        let mut field = VolScalarField::uniform(&io.name, mesh, &zero, PatchKind::ZeroGradient);
        field.io = io;
        field.internal = Vector::from(&values);
        field.correct_boundary_conditions();
        Ok(field)
    }

    /// Returns the field name
    pub fn name(&self) -> &str {
        &self.io.name
    }

    /// Returns the identity and persistence options
    pub fn io(&self) -> &IoObject {
        &self.io
    }

    /// Returns the mesh
    pub fn mesh(&self) -> &Rc<FvMesh> {
        &self.mesh
    }

    /// Returns the physical dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the cell values
    pub fn internal(&self) -> &Vector {
        &self.internal
    }

    /// Returns the cell values for modification
    pub fn internal_mut(&mut self) -> &mut Vector {
        &mut self.internal
    }

    /// Returns the patch values
    pub fn boundary(&self) -> &[PatchField] {
        &self.boundary
    }

    /// Updates the patch values according to their boundary condition kind
    pub fn correct_boundary_conditions(&mut self) {
        for (patch_field, patch) in self.boundary.iter_mut().zip(self.mesh.patches()) {
            match patch_field.kind {
                PatchKind::ZeroGradient => {
                    for (value, cell) in patch_field.values.iter_mut().zip(&patch.face_cells) {
                        *value = self.internal[*cell];
                    }
                }
                PatchKind::Calculated => (),
            }
        }
    }

    /// Returns the minimum cell value
    pub fn min(&self) -> f64 {
        self.internal.as_data().iter().fold(f64::INFINITY, |acc, v| acc.min(*v))
    }

    /// Returns the maximum cell value
    pub fn max(&self) -> f64 {
        self.internal.as_data().iter().fold(f64::NEG_INFINITY, |acc, v| acc.max(*v))
    }

    /// Performs the cell-wise update `self += weights * other`
    ///
    /// The patch values are not corrected.
    pub fn add_weighted(&mut self, weights: &Vector, other: &VolScalarField) -> RheologyResult<()> {
        let n = self.internal.dim();
        if weights.dim() != n || other.internal.dim() != n {
            return Err(RheologyError::Numerical("fields and weights must have the same number of cells"));
        }
        for c in 0..n {
            self.internal[c] += weights[c] * other.internal[c];
        }
        Ok(())
    }

    /// Returns a new field computed cell-wise from two fields, with corrected patches
    pub fn combine<F>(
        name: &str,
        dimensions: Dimensions,
        a: &VolScalarField,
        b: &VolScalarField,
        f: F,
    ) -> RheologyResult<VolScalarField>
    where
        F: Fn(f64, f64) -> f64,
    {
        let n = a.internal.dim();
        if b.internal.dim() != n {
            return Err(RheologyError::Numerical("fields must have the same number of cells"));
        }
        let zero = DimensionedScalar::new(name, dimensions, 0.0);
        let mut result = VolScalarField::uniform(name, &a.mesh, &zero, PatchKind::ZeroGradient);
        for c in 0..n {
            result.internal[c] = f(a.internal[c], b.internal[c]);
        }
        result.correct_boundary_conditions();
        Ok(result)
    }

    /// Writes the cell values to the store if the write option is `AutoWrite`
    ///
    /// Returns true if the field has been written.
    pub fn write(&self) -> RheologyResult<bool> {
        match self.io.write {
            WriteOption::AutoWrite => {
                self.mesh
                    .store()
                    .write_scalar(&self.io.name, &self.io.time_name, self.internal.as_data())?;
                Ok(true)
            }
            WriteOption::NoWrite => Ok(false),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
