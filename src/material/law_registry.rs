use super::{allocate_linear_elastic, allocate_multi_material, LinearElastic, MultiMaterial, RheologyLaw};
use crate::base::{is_valid_word, Dictionary, RheologyError, RheologyResult};
use crate::field::VolSymmTensorField;
use log::info;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Defines the constructor function of a rheology law
///
/// The arguments are the name of the new instance, the stress field, the law's dictionary,
/// and the registry itself (composite laws use it to allocate their sub-laws).
pub type LawConstructor = for<'a> fn(
    &str,
    &'a VolSymmTensorField,
    &Dictionary,
    &LawRegistry,
) -> RheologyResult<Box<dyn RheologyLaw + 'a>>;

/// Holds the table mapping law type names to constructors
///
/// # Example
///
/// ```
/// use rheology::material::LawRegistry;
///
/// let registry = LawRegistry::global();
/// assert!(registry.contains("linearElastic"));
/// assert!(registry.contains("multiMaterial"));
/// assert!(!registry.contains("doesNotExist"));
/// ```
#[derive(Default)]
pub struct LawRegistry {
    table: HashMap<String, LawConstructor>,
}

impl LawRegistry {
    /// Allocates a new empty registry
    pub fn new() -> Self {
        LawRegistry { table: HashMap::new() }
    }

    /// Allocates a new registry with the laws implemented in this crate
    pub fn with_builtins() -> Self {
        let mut registry = LawRegistry::new();
        registry
            .table
            .insert(LinearElastic::TYPE_NAME.to_string(), allocate_linear_elastic);
        registry
            .table
            .insert(MultiMaterial::TYPE_NAME.to_string(), allocate_multi_material);
        registry
    }

    /// Returns the process-wide registry holding the laws implemented in this crate
    ///
    /// The registry is populated on first access and is read-only afterwards.
    pub fn global() -> &'static LawRegistry {
        static GLOBAL: OnceLock<LawRegistry> = OnceLock::new();
        GLOBAL.get_or_init(LawRegistry::with_builtins)
    }

    /// Registers a constructor
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` if the type name is not a valid word
    /// * `DuplicateLawType` if another constructor has been registered under the same name
    pub fn register(&mut self, type_name: &str, constructor: LawConstructor) -> RheologyResult<&mut Self> {
        if !is_valid_word(type_name) {
            return Err(RheologyError::InvalidArgument(format!(
                "type name \"{}\" is not a valid word",
                type_name
            )));
        }
        if self.table.contains_key(type_name) {
            return Err(RheologyError::DuplicateLawType(type_name.to_string()));
        }
        self.table.insert(type_name.to_string(), constructor);
        Ok(self)
    }

    /// Returns true if a constructor is registered under the type name
    pub fn contains(&self, type_name: &str) -> bool {
        self.table.contains_key(type_name)
    }

    /// Returns the registered type names in alphabetical order
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.table.keys().map(|k| k.as_str()).collect();
        names.sort();
        names
    }

    /// Allocates a new law given its type name
    ///
    /// # Input
    ///
    /// * `type_name` -- the registered type, e.g., "linearElastic"
    /// * `name` -- the name of the new instance
    /// * `sigma` -- the stress field (borrowed for the lifetime of the law)
    /// * `dict` -- the law's dictionary
    pub fn create<'a>(
        &self,
        type_name: &str,
        name: &str,
        sigma: &'a VolSymmTensorField,
        dict: &Dictionary,
    ) -> RheologyResult<Box<dyn RheologyLaw + 'a>> {
        let constructor = self
            .table
            .get(type_name)
            .ok_or_else(|| RheologyError::UnknownLawType(type_name.to_string()))?;
        info!("Selecting rheology model {}", type_name);
        constructor(name, sigma, dict, self)
    }

    /// Allocates a new law whose type name is given by the `type` keyword of the dictionary
    pub fn select<'a>(
        &self,
        name: &str,
        sigma: &'a VolSymmTensorField,
        dict: &Dictionary,
    ) -> RheologyResult<Box<dyn RheologyLaw + 'a>> {
        let type_name = dict.lookup_word("type")?;
        self.create(&type_name, name, sigma, dict)
    }
}

impl fmt::Debug for LawRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LawRegistry")
            .field("type_names", &self.type_names())
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
