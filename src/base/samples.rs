use super::{Dictionary, RheologyResult, MATERIALS_FIELD_NAME};
use crate::field::{FvMesh, MemoryStore, Patch, VolSymmTensorField};
use std::rc::Rc;

/// Holds some sample meshes and rheology dictionaries
pub struct Samples;

impl Samples {
    /// Returns a one-dimensional bar with one cell per material indicator value and its stress field
    ///
    /// The bar has a "left" patch at the first cell and a "right" patch at the last cell.
    /// The indicator values are stored as the "materials" field at time "0".
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `materials` is empty.
    pub fn bar_mesh_and_sigma(materials: &[f64]) -> RheologyResult<(Rc<FvMesh>, VolSymmTensorField)> {
        let n = materials.len();
        let last = n.saturating_sub(1);
        let patches = vec![
            Patch {
                name: "left".to_string(),
                face_cells: vec![0],
            },
            Patch {
                name: "right".to_string(),
                face_cells: vec![last],
            },
        ];
        let store = MemoryStore::new().with_scalar(MATERIALS_FIELD_NAME, "0", materials);
        let mesh = Rc::new(FvMesh::new(n, patches)?.with_store(Box::new(store)));
        let sigma = VolSymmTensorField::new("sigma", &mesh, false);
        Ok((mesh, sigma))
    }

    /// Returns the dictionary of a linear elastic steel (SI units)
    pub fn steel() -> Dictionary {
        Samples::linear_elastic("steel", 7854.0, 200e9, 0.3)
    }

    /// Returns the dictionary of a linear elastic aluminium (SI units)
    pub fn aluminium() -> Dictionary {
        Samples::linear_elastic("aluminium", 2700.0, 70e9, 0.35)
    }

    /// Returns the dictionary of a linear elastic copper (SI units)
    pub fn copper() -> Dictionary {
        Samples::linear_elastic("copper", 8960.0, 120e9, 0.34)
    }

    /// Returns a multi-material dictionary with steel (index 0) and aluminium (index 1)
    pub fn steel_aluminium() -> Dictionary {
        Samples::multi_material(vec![Samples::steel(), Samples::aluminium()])
    }

    /// Returns a multi-material dictionary with steel, aluminium, and copper
    pub fn three_materials() -> Dictionary {
        Samples::multi_material(vec![Samples::steel(), Samples::aluminium(), Samples::copper()])
    }

    fn linear_elastic(name: &str, rho: f64, young: f64, poisson: f64) -> Dictionary {
        let mut dict = Dictionary::new(name);
        dict.set("type", "linearElastic")
            .set("rho", rho)
            .set("E", young)
            .set("nu", poisson);
        dict
    }

    fn multi_material(laws: Vec<Dictionary>) -> Dictionary {
        let mut list = Dictionary::new("laws");
        for law in laws {
            let name = law.name().to_string();
            list.set_dict(&name, law);
        }
        let mut dict = Dictionary::new("rheology");
        dict.set("type", "multiMaterial").set_dict("laws", list);
        dict
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
