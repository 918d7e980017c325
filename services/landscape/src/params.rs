/// ParameterSet carries the parameters of one API action.
///
/// Parameters keep insertion order and values are strings on the wire, so
/// anything implementing [`ToString`] can be inserted. A parameter can be
/// absent (`None`); absent and empty values are dropped before signing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: Vec<(String, Option<String>)>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter that may be absent.
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Add a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.params.push((key.into(), Some(value.to_string())));
    }

    /// Add a parameter that may be absent.
    pub fn insert_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.params.push((key.into(), value.map(|v| v.to_string())));
    }

    /// Append all parameters of another set.
    pub fn append(&mut self, other: ParameterSet) {
        self.params.extend(other.params);
    }

    /// Get the first value of given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Number of parameters, absent ones included.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the set holds no parameter.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Consume the set, dropping parameters that are absent or empty.
    pub fn into_present(self) -> Vec<(String, String)> {
        self.params
            .into_iter()
            .filter_map(|(k, v)| v.filter(|v| !v.is_empty()).map(|v| (k, v)))
            .collect()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = ParameterSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// ValueList is a list of values given to [`pathlist`].
///
/// A single string converts into a one element list so that callers can pass
/// `"web"` where `["web"]` is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueList(Vec<String>);

impl ValueList {
    /// Check if the list holds no value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ValueList {
    fn from(value: &str) -> Self {
        ValueList(vec![value.to_string()])
    }
}

impl From<String> for ValueList {
    fn from(value: String) -> Self {
        ValueList(vec![value])
    }
}

impl<T: ToString> From<Vec<T>> for ValueList {
    fn from(value: Vec<T>) -> Self {
        ValueList(value.iter().map(|v| v.to_string()).collect())
    }
}

impl<T: ToString> From<&[T]> for ValueList {
    fn from(value: &[T]) -> Self {
        ValueList(value.iter().map(|v| v.to_string()).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for ValueList {
    fn from(value: [T; N]) -> Self {
        ValueList(value.iter().map(|v| v.to_string()).collect())
    }
}

/// Expand a list of values into indexed parameters.
///
/// ```
/// use landscape_api::{pathlist, ParameterSet};
///
/// let params = pathlist("tags", ["web", "server"]);
/// assert_eq!(params, ParameterSet::new().with("tags.1", "web").with("tags.2", "server"));
/// ```
pub fn pathlist(key: &str, values: impl Into<ValueList>) -> ParameterSet {
    values
        .into()
        .0
        .into_iter()
        .enumerate()
        .map(|(i, v)| (format!("{key}.{}", i + 1), v))
        .collect()
}
