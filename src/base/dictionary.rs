use super::{DimensionedScalar, Dimensions, RheologyError, RheologyResult};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Holds the JSON forms accepted for a dimensioned scalar entry
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarEntry {
    /// Bare number such as `7854.0`; the caller's default dimensions apply
    Bare(f64),

    /// Full form such as `{ "dimensions": [1, -3, 0, 0, 0, 0, 0], "value": 7854.0 }`
    Full {
        #[serde(default)]
        dimensions: Option<Dimensions>,
        value: f64,
    },
}

/// Returns true if the text is a valid word (keyword or identifier)
///
/// A word is non-empty and has no whitespace, quotes, slashes, semicolons, or braces.
pub fn is_valid_word(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| !c.is_whitespace() && !matches!(c, '"' | '\'' | '/' | ';' | '{' | '}'))
}

/// Holds a keyed configuration dictionary
///
/// Entries keep their insertion order, thus sub-dictionaries such as the list of laws of a
/// composite material are visited in declaration order.
///
/// # Example
///
/// ```
/// use rheology::base::{Dictionary, Dimensions};
///
/// let dict = Dictionary::from_json(
///     "steel",
///     r#"{ "type": "linearElastic", "rho": 7854.0, "E": 200e9, "nu": 0.3 }"#,
/// ).unwrap();
/// assert_eq!(dict.lookup_word("type").unwrap(), "linearElastic");
/// assert_eq!(dict.lookup_scalar("rho", Dimensions::DENSITY).unwrap().value, 7854.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dictionary {
    /// Scoped name, e.g., `rheologyProperties.rheology.laws.steel`
    name: String,

    /// Entries
    entries: Map<String, Value>,
}

impl Dictionary {
    /// Allocates a new empty dictionary
    pub fn new(name: &str) -> Self {
        Dictionary {
            name: name.to_string(),
            entries: Map::new(),
        }
    }

    /// Allocates a new dictionary from a JSON value (must be an object)
    pub fn from_value(name: &str, value: Value) -> RheologyResult<Self> {
        match value {
            Value::Object(entries) => Ok(Dictionary {
                name: name.to_string(),
                entries,
            }),
            _ => Err(RheologyError::Configuration(format!(
                "dictionary {} must be a JSON object",
                name
            ))),
        }
    }

    /// Parses a dictionary from JSON text
    pub fn from_json(name: &str, text: &str) -> RheologyResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| RheologyError::Configuration(format!("cannot parse dictionary {}: {}", name, e)))?;
        Dictionary::from_value(name, value)
    }

    /// Reads a dictionary from a JSON file; the file stem becomes the dictionary name
    pub fn read<P>(full_path: &P) -> RheologyResult<Self>
    where
        P: AsRef<std::ffi::OsStr> + ?Sized,
    {
        let path = Path::new(full_path);
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("dictionary");
        let text = fs::read_to_string(path)
            .map_err(|e| RheologyError::Configuration(format!("cannot read {}: {}", path.display(), e)))?;
        Dictionary::from_json(name, &text)
    }

    /// Returns the scoped name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the keyword exists
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the keywords in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Sets (or replaces) an entry
    pub fn set<V>(&mut self, key: &str, value: V) -> &mut Self
    where
        V: Into<Value>,
    {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    /// Sets (or replaces) a dimensioned scalar entry using the full form
    pub fn set_scalar(&mut self, key: &str, dimensions: Dimensions, value: f64) -> &mut Self {
        let entry = serde_json::json!({ "dimensions": dimensions.0, "value": value });
        self.entries.insert(key.to_string(), entry);
        self
    }

    /// Sets (or replaces) a sub-dictionary
    pub fn set_dict(&mut self, key: &str, dict: Dictionary) -> &mut Self {
        self.entries.insert(key.to_string(), Value::Object(dict.entries));
        self
    }

    /// Returns the raw entry or an error naming the missing keyword
    fn lookup(&self, key: &str) -> RheologyResult<&Value> {
        self.entries.get(key).ok_or_else(|| {
            RheologyError::Configuration(format!("keyword {} is undefined in dictionary {}", key, self.name))
        })
    }

    /// Returns a formatted error for a malformed entry
    fn malformed(&self, key: &str, expected: &str) -> RheologyError {
        RheologyError::Configuration(format!(
            "keyword {} in dictionary {} must be {}",
            key, self.name, expected
        ))
    }

    /// Looks up a dimensioned scalar
    ///
    /// A bare number receives the `dimensions` given here; the full form carries its own.
    pub fn lookup_scalar(&self, key: &str, dimensions: Dimensions) -> RheologyResult<DimensionedScalar> {
        let value = self.lookup(key)?;
        let entry: ScalarEntry = serde_json::from_value(value.clone())
            .map_err(|_| self.malformed(key, "a number or {\"dimensions\": [..], \"value\": ..}"))?;
        let scalar = match entry {
            ScalarEntry::Bare(v) => DimensionedScalar::new(key, dimensions, v),
            ScalarEntry::Full { dimensions: d, value: v } => DimensionedScalar::new(key, d.unwrap_or(dimensions), v),
        };
        if !scalar.value.is_finite() {
            return Err(self.malformed(key, "a finite number"));
        }
        Ok(scalar)
    }

    /// Looks up an optional dimensioned scalar
    pub fn lookup_scalar_opt(&self, key: &str, dimensions: Dimensions) -> RheologyResult<Option<DimensionedScalar>> {
        if self.contains(key) {
            Ok(Some(self.lookup_scalar(key, dimensions)?))
        } else {
            Ok(None)
        }
    }

    /// Looks up a word (string without whitespace)
    pub fn lookup_word(&self, key: &str) -> RheologyResult<String> {
        match self.lookup(key)? {
            Value::String(s) if is_valid_word(s) => Ok(s.clone()),
            _ => Err(self.malformed(key, "a word")),
        }
    }

    /// Looks up a boolean switch, returning the default if the keyword is absent
    ///
    /// Accepts `true/false` and the words `yes/no/on/off`.
    pub fn lookup_bool_or(&self, key: &str, default: bool) -> RheologyResult<bool> {
        match self.entries.get(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) => match s.as_str() {
                "yes" | "on" | "true" => Ok(true),
                "no" | "off" | "false" => Ok(false),
                _ => Err(self.malformed(key, "a switch")),
            },
            Some(_) => Err(self.malformed(key, "a switch")),
        }
    }

    /// Returns a copy of a sub-dictionary
    pub fn sub_dict(&self, key: &str) -> RheologyResult<Dictionary> {
        match self.lookup(key)? {
            Value::Object(entries) => Ok(Dictionary {
                name: format!("{}.{}", self.name, key),
                entries: entries.clone(),
            }),
            _ => Err(self.malformed(key, "a dictionary")),
        }
    }

    /// Returns the keyword/sub-dictionary pairs of a sub-dictionary, in declaration order
    pub fn entries(&self, key: &str) -> RheologyResult<Vec<(String, Dictionary)>> {
        let list = self.sub_dict(key)?;
        let mut result = Vec::with_capacity(list.len());
        for keyword in list.keys() {
            if !is_valid_word(keyword) {
                return Err(list.malformed(keyword, "a keyword without whitespace"));
            }
            result.push((keyword.to_string(), list.sub_dict(keyword)?));
        }
        Ok(result)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
