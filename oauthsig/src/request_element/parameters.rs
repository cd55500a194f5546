use crate::rfc3986;
use indexmap::IndexMap;

/// Canonical multi-valued parameter mapping in insertion order: every occurring
/// name maps to at least one value. Built once per signing request by
/// [`ParametersLoader`] and immutable thereafter.
pub type ParameterMap = IndexMap<String, Vec<String>, fxhash::FxBuildHasher>;

/// Mapping shape carried by [`RequestParameters::Map`]
pub type ParameterValueMap = IndexMap<String, ParameterValue, fxhash::FxBuildHasher>;

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Value(s) bound to a single parameter name
pub enum ParameterValue {
  /// Absent value; normalizes to a single empty string
  #[default]
  Null,
  /// Single value
  One(String),
  /// Ordered values of a repeated parameter; the empty list normalizes to a
  /// single empty string
  Many(Vec<String>),
}

impl ParameterValue {
  /// Values as they enter the canonical mapping; never an empty list
  fn to_values(&self) -> Vec<String> {
    match self {
      ParameterValue::Null => vec![String::new()],
      ParameterValue::One(value) => vec![value.clone()],
      ParameterValue::Many(values) if values.is_empty() => vec![String::new()],
      ParameterValue::Many(values) => values.clone(),
    }
  }
}

impl From<&str> for ParameterValue {
  fn from(value: &str) -> Self {
    ParameterValue::One(value.to_string())
  }
}
impl From<String> for ParameterValue {
  fn from(value: String) -> Self {
    ParameterValue::One(value)
  }
}
impl From<Option<&str>> for ParameterValue {
  fn from(value: Option<&str>) -> Self {
    value.map(ParameterValue::from).unwrap_or(ParameterValue::Null)
  }
}
impl From<Vec<String>> for ParameterValue {
  fn from(values: Vec<String>) -> Self {
    ParameterValue::Many(values)
  }
}
impl From<Vec<&str>> for ParameterValue {
  fn from(values: Vec<&str>) -> Self {
    ParameterValue::Many(values.into_iter().map(|value| value.to_string()).collect())
  }
}
impl From<&[&str]> for ParameterValue {
  fn from(values: &[&str]) -> Self {
    ParameterValue::Many(values.iter().map(|value| value.to_string()).collect())
  }
}

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq)]
/// Caller-supplied request parameters in one of the two supported shapes. Both
/// shapes are normalized by [`ParametersLoader`] into the single
/// [`ParameterMap`] before any encoding logic runs.
pub enum RequestParameters {
  /// Mapping from parameter name to its value(s)
  Map(ParameterValueMap),
  /// Repeatable `(name, value)` entries where the same name may occur more
  /// than once, e.g. parameters collected one entry per form row
  Entries(Vec<(String, ParameterValue)>),
}

impl Default for RequestParameters {
  fn default() -> Self {
    RequestParameters::Map(ParameterValueMap::default())
  }
}

impl RequestParameters {
  /// Empty parameter set
  pub fn new() -> Self {
    Self::default()
  }

  /// Build the mapping shape; a later duplicate of a name replaces the earlier value
  pub fn from_map<K, V, I>(entries: I) -> Self
  where
    K: Into<String>,
    V: Into<ParameterValue>,
    I: IntoIterator<Item = (K, V)>,
  {
    RequestParameters::Map(entries.into_iter().map(|(name, value)| (name.into(), value.into())).collect())
  }

  /// Build the entries shape; duplicates of a name accumulate values
  pub fn from_entries<K, V, I>(entries: I) -> Self
  where
    K: Into<String>,
    V: Into<ParameterValue>,
    I: IntoIterator<Item = (K, V)>,
  {
    RequestParameters::Entries(entries.into_iter().map(|(name, value)| (name.into(), value.into())).collect())
  }

  pub fn is_empty(&self) -> bool {
    match self {
      RequestParameters::Map(map) => map.is_empty(),
      RequestParameters::Entries(entries) => entries.is_empty(),
    }
  }
}

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone)]
/// Normalizes either [`RequestParameters`] shape into the canonical [`ParameterMap`]
pub struct ParametersLoader {
  map: ParameterMap,
}

impl ParametersLoader {
  pub fn new(parameters: &RequestParameters) -> Self {
    let mut map = ParameterMap::default();
    match parameters {
      RequestParameters::Map(entries) => {
        for (name, value) in entries {
          map.insert(name.clone(), value.to_values());
        }
      }
      RequestParameters::Entries(entries) => {
        for (name, value) in entries {
          map.entry(name.clone()).or_default().extend(value.to_values());
        }
      }
    }
    Self { map }
  }

  /// The canonical mapping; every occurring name maps to at least one value
  pub fn get(&self) -> ParameterMap {
    self.map.clone()
  }
}

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone)]
/// Encodes a [`ParameterMap`] and deterministically orders it into the
/// canonical query-string-like parameter string of RFC 5849 Section 3.4.1.3.2
pub struct ParametersElement {
  /// pairs of encoded name and raw value, in their total order
  sorted_pairs: Vec<(String, String)>,
}

impl ParametersElement {
  pub fn new(parameters: &ParameterMap) -> Self {
    let mut sorted_pairs = parameters
      .iter()
      .flat_map(|(name, values)| {
        let encoded_name = rfc3986::encode(name);
        values.iter().map(move |value| (encoded_name.clone(), value.clone()))
      })
      .collect::<Vec<_>>();
    // total order: encoded name first, raw value in codepoint order for equal names
    sorted_pairs.sort();
    Self { sorted_pairs }
  }

  /// `name=value` pairs joined with `&`, both sides percent-encoded
  pub fn get(&self) -> String {
    self
      .sorted_pairs
      .iter()
      .map(|(name, value)| format!("{}={}", name, rfc3986::encode(value)))
      .collect::<Vec<_>>()
      .join("&")
  }
}

/* ---------------------------------------------------------------- */
