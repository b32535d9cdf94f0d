use crate::base::{RheologyError, RheologyResult};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

/// Defines whether a field is read from persisted state at construction
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadOption {
    /// The persisted field must exist
    MustRead,

    /// The persisted field is read only if it exists
    ReadIfPresent,

    /// The field is never read
    NoRead,
}

/// Defines whether a field is written back to persisted state
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WriteOption {
    /// The field is written whenever results are saved
    AutoWrite,

    /// The field is never written
    NoWrite,
}

/// Holds the identity and persistence options of a field
#[derive(Clone, Debug, PartialEq)]
pub struct IoObject {
    /// Field name (also the persisted file stem)
    pub name: String,

    /// Time directory, e.g., "0"
    pub time_name: String,

    /// Read option
    pub read: ReadOption,

    /// Write option
    pub write: WriteOption,
}

impl IoObject {
    /// Allocates a new instance
    pub fn new(name: &str, time_name: &str, read: ReadOption, write: WriteOption) -> Self {
        IoObject {
            name: name.to_string(),
            time_name: time_name.to_string(),
            read,
            write,
        }
    }

    /// Allocates a new instance that is neither read nor written
    pub fn temporary(name: &str, time_name: &str) -> Self {
        IoObject::new(name, time_name, ReadOption::NoRead, WriteOption::NoWrite)
    }
}

/// Specifies the access to persisted per-cell scalar fields
pub trait FieldStore: fmt::Debug {
    /// Reads the internal values of a field; returns None if the field does not exist
    fn read_scalar(&self, name: &str, time_name: &str) -> RheologyResult<Option<Vec<f64>>>;

    /// Writes the internal values of a field
    fn write_scalar(&self, name: &str, time_name: &str, values: &[f64]) -> RheologyResult<()>;
}

/// Implements an in-memory field store
#[derive(Debug, Default)]
pub struct MemoryStore {
    fields: RefCell<HashMap<(String, String), Vec<f64>>>,
}

impl MemoryStore {
    /// Allocates a new empty store
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Inserts a field (builder style)
    pub fn with_scalar(self, name: &str, time_name: &str, values: &[f64]) -> Self {
        self.fields
            .borrow_mut()
            .insert((name.to_string(), time_name.to_string()), values.to_vec());
        self
    }
}

impl FieldStore for MemoryStore {
    fn read_scalar(&self, name: &str, time_name: &str) -> RheologyResult<Option<Vec<f64>>> {
        let key = (name.to_string(), time_name.to_string());
        Ok(self.fields.borrow().get(&key).cloned())
    }

    fn write_scalar(&self, name: &str, time_name: &str, values: &[f64]) -> RheologyResult<()> {
        self.fields
            .borrow_mut()
            .insert((name.to_string(), time_name.to_string()), values.to_vec());
        Ok(())
    }
}

/// Holds the contents of a persisted scalar field file
#[derive(Clone, Debug, Deserialize, Serialize)]
struct ScalarFieldFile {
    /// Field name
    name: String,

    /// Internal (cell) values
    internal: Vec<f64>,
}

/// Implements a field store backed by JSON files at `<root>/<time_name>/<name>.json`
#[derive(Clone, Debug)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Allocates a new instance
    pub fn new<P>(root: &P) -> Self
    where
        P: AsRef<std::ffi::OsStr> + ?Sized,
    {
        JsonStore {
            root: PathBuf::from(root.as_ref()),
        }
    }

    /// Returns the path of the file holding a field
    pub fn path(&self, name: &str, time_name: &str) -> PathBuf {
        self.root.join(time_name).join(format!("{}.json", name))
    }
}

impl FieldStore for JsonStore {
    fn read_scalar(&self, name: &str, time_name: &str) -> RheologyResult<Option<Vec<f64>>> {
        let path = self.path(name, time_name);
        if !path.exists() {
            return Ok(None);
        }
        let input = File::open(&path)
            .map_err(|e| RheologyError::Configuration(format!("cannot open {}: {}", path.display(), e)))?;
        let buffered = BufReader::new(input);
        let file: ScalarFieldFile = serde_json::from_reader(buffered)
            .map_err(|e| RheologyError::Configuration(format!("cannot parse {}: {}", path.display(), e)))?;
        Ok(Some(file.internal))
    }

    fn write_scalar(&self, name: &str, time_name: &str, values: &[f64]) -> RheologyResult<()> {
        let path = self.path(name, time_name);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| RheologyError::Configuration(format!("cannot create {}: {}", dir.display(), e)))?;
        }
        let file = ScalarFieldFile {
            name: name.to_string(),
            internal: values.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| RheologyError::Configuration(format!("cannot serialize {}: {}", name, e)))?;
        fs::write(&path, json)
            .map_err(|e| RheologyError::Configuration(format!("cannot write {}: {}", path.display(), e)))?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
