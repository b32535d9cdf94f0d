use super::{FieldStore, MemoryStore};
use crate::base::{RheologyError, RheologyResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds a boundary patch
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Patch {
    /// Patch name
    pub name: String,

    /// Index of the cell owning each face of the patch
    pub face_cells: Vec<usize>,
}

/// Holds the mesh data as saved in a JSON file
#[derive(Clone, Debug, Deserialize, Serialize)]
struct MeshData {
    n_cells: usize,
    patches: Vec<Patch>,
}

/// Holds the cell/patch topology of a finite-volume mesh and the access to persisted fields
///
/// Only the information required to evaluate cell-wise material properties is kept here:
/// the number of cells, the face-to-cell addressing of the boundary patches, the current
/// time directory, and the store holding persisted fields.
#[derive(Debug)]
pub struct FvMesh {
    /// Number of cells
    n_cells: usize,

    /// Boundary patches
    patches: Vec<Patch>,

    /// Current time directory, e.g., "0"
    time_name: String,

    /// Persisted fields
    store: Box<dyn FieldStore>,
}

impl FvMesh {
    /// Allocates a new instance with an empty in-memory store and time "0"
    pub fn new(n_cells: usize, patches: Vec<Patch>) -> RheologyResult<Self> {
        if n_cells == 0 {
            return Err(RheologyError::Configuration("mesh must have at least one cell".to_string()));
        }
        for patch in &patches {
            if let Some(c) = patch.face_cells.iter().find(|c| **c >= n_cells) {
                return Err(RheologyError::Configuration(format!(
                    "face of patch {} refers to cell {} but the mesh has {} cells",
                    patch.name, c, n_cells
                )));
            }
        }
        Ok(FvMesh {
            n_cells,
            patches,
            time_name: "0".to_string(),
            store: Box::new(MemoryStore::new()),
        })
    }

    /// Reads the mesh topology from a JSON file
    pub fn read_json<P>(full_path: &P) -> RheologyResult<Self>
    where
        P: AsRef<std::ffi::OsStr> + ?Sized,
    {
        let path = Path::new(full_path);
        let input = File::open(path)
            .map_err(|e| RheologyError::Configuration(format!("cannot open {}: {}", path.display(), e)))?;
        let buffered = BufReader::new(input);
        let data: MeshData = serde_json::from_reader(buffered)
            .map_err(|e| RheologyError::Configuration(format!("cannot parse {}: {}", path.display(), e)))?;
        FvMesh::new(data.n_cells, data.patches)
    }

    /// Sets the time directory (builder style)
    pub fn with_time_name(mut self, time_name: &str) -> Self {
        self.time_name = time_name.to_string();
        self
    }

    /// Sets the store of persisted fields (builder style)
    pub fn with_store(mut self, store: Box<dyn FieldStore>) -> Self {
        self.store = store;
        self
    }

    /// Returns the number of cells
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    /// Returns the boundary patches
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Returns the current time directory
    pub fn time_name(&self) -> &str {
        &self.time_name
    }

    /// Returns the store of persisted fields
    pub fn store(&self) -> &dyn FieldStore {
        self.store.as_ref()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{FvMesh, Patch};
    use crate::base::{RheologyError, DEFAULT_TEST_DIR};
    use crate::field::MemoryStore;
    use std::fs;

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            FvMesh::new(0, Vec::new()).err(),
            Some(RheologyError::Configuration("mesh must have at least one cell".to_string()))
        );
        let patches = vec![Patch {
            name: "right".to_string(),
            face_cells: vec![3],
        }];
        assert_eq!(
            FvMesh::new(3, patches).err(),
            Some(RheologyError::Configuration(
                "face of patch right refers to cell 3 but the mesh has 3 cells".to_string()
            ))
        );
    }

    #[test]
    fn new_works() {
        let patches = vec![Patch {
            name: "left".to_string(),
            face_cells: vec![0],
        }];
        let mesh = FvMesh::new(2, patches)
            .unwrap()
            .with_time_name("0.5")
            .with_store(Box::new(MemoryStore::new().with_scalar("materials", "0.5", &[0.0, 1.0])));
        assert_eq!(mesh.n_cells(), 2);
        assert_eq!(mesh.patches().len(), 1);
        assert_eq!(mesh.time_name(), "0.5");
        assert_eq!(
            mesh.store().read_scalar("materials", "0.5").unwrap(),
            Some(vec![0.0, 1.0])
        );
    }

    #[test]
    fn read_json_works() {
        let dir = format!("{}/mesh", DEFAULT_TEST_DIR);
        fs::create_dir_all(&dir).unwrap();
        let path = format!("{}/mesh.json", dir);
        let text = r#"{ "n_cells": 4, "patches": [
            { "name": "left", "face_cells": [0] },
            { "name": "right", "face_cells": [3] }
        ] }"#;
        fs::write(&path, text).unwrap();
        let mesh = FvMesh::read_json(&path).unwrap();
        assert_eq!(mesh.n_cells(), 4);
        assert_eq!(mesh.patches()[1].name, "right");
        assert_eq!(mesh.time_name(), "0");
        assert!(matches!(
            FvMesh::read_json("/tmp/rheology/test/__does_not_exist__.json"),
            Err(RheologyError::Configuration(..))
        ));
    }
}
