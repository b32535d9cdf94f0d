use super::FvMesh;
use crate::base::{RheologyError, RheologyResult};
use russell_tensor::{Mandel, Tensor2};
use std::rc::Rc;

/// Holds a cell-centred symmetric second-order tensor field such as the stress
#[derive(Clone, Debug)]
pub struct VolSymmTensorField {
    /// Field name
    name: String,

    /// Access to the mesh
    mesh: Rc<FvMesh>,

    /// Cell values
    internal: Vec<Tensor2>,
}

impl VolSymmTensorField {
    /// Allocates a new field with zero tensors
    ///
    /// Uses the 2D (four components) Mandel representation if `two_dim` is true.
    pub fn new(name: &str, mesh: &Rc<FvMesh>, two_dim: bool) -> Self {
        let mandel = if two_dim { Mandel::Symmetric2D } else { Mandel::Symmetric };
        VolSymmTensorField {
            name: name.to_string(),
            mesh: mesh.clone(),
            internal: (0..mesh.n_cells()).map(|_| Tensor2::new(mandel)).collect(),
        }
    }

    /// Allocates a new field from cell values
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` if the number of tensors differs from the number of cells
    /// * `InvalidArgument` if any tensor is stored in the general (non-symmetric) representation
    pub fn from_tensors(name: &str, mesh: &Rc<FvMesh>, tensors: Vec<Tensor2>) -> RheologyResult<Self> {
        if tensors.len() != mesh.n_cells() {
            return Err(RheologyError::InvalidArgument(format!(
                "field {} has {} tensors but the mesh has {} cells",
                name,
                tensors.len(),
                mesh.n_cells()
            )));
        }
        if tensors.iter().any(|t| matches!(t.mandel(), Mandel::General)) {
            return Err(RheologyError::InvalidArgument(format!(
                "field {} must hold symmetric tensors",
                name
            )));
        }
        Ok(VolSymmTensorField {
            name: name.to_string(),
            mesh: mesh.clone(),
            internal: tensors,
        })
    }

    /// Returns the field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the mesh
    pub fn mesh(&self) -> &Rc<FvMesh> {
        &self.mesh
    }

    /// Returns the cell values
    pub fn internal(&self) -> &[Tensor2] {
        &self.internal
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
