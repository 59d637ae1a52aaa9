//! Attribute values and ordered attribute sets.

use std::fmt;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Text attribute.
    Str(String),
    /// `double` attribute.
    Double(f64),
    /// `float` attribute.
    Float(f32),
    /// `int` attribute.
    Int(i32),
    /// `int64` attribute.
    Long(i64),
}

impl AttrValue {
    /// Returns the text when this is a string attribute.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value widened to `f64` when it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Str(_) => None,
            Self::Double(v) => Some(v),
            Self::Float(v) => Some(f64::from(v)),
            Self::Int(v) => Some(f64::from(v)),
            Self::Long(v) => Some(v as f64),
        }
    }
}

/// Plain text form: strings unquoted, numbers without type suffixes.
impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Double(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<f32> for AttrValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<AttrValue> for netcdf::AttributeValue {
    fn from(v: AttrValue) -> Self {
        match v {
            AttrValue::Str(s) => netcdf::AttributeValue::Str(s),
            AttrValue::Double(x) => netcdf::AttributeValue::Double(x),
            AttrValue::Float(x) => netcdf::AttributeValue::Float(x),
            AttrValue::Int(x) => netcdf::AttributeValue::Int(x),
            AttrValue::Long(x) => netcdf::AttributeValue::Longlong(x),
        }
    }
}

/// Insertion-ordered mapping of attribute names to values.
///
/// Inserting an existing key replaces its value in place, so the first
/// position of a key is kept. Sets are combined with [`merged`](Self::merged),
/// which never modifies either input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces `key`, returning the updated set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns the text stored under `key` when it is a string attribute.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    /// Returns `true` when `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns a new set holding `self` with every entry of `overrides`
    /// applied on top.
    pub fn merged(&self, overrides: &Attributes) -> Attributes {
        let mut out = self.clone();
        for (k, v) in overrides {
            out.insert(k.as_str(), v.clone());
        }
        out
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a (String, AttrValue);
    type IntoIter = std::slice::Iter<'a, (String, AttrValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_text() {
        assert_eq!(AttrValue::from("Pier 7").to_string(), "Pier 7");
        assert_eq!(AttrValue::Int(44007).to_string(), "44007");
        assert_eq!(AttrValue::Long(5_000_000_000).to_string(), "5000000000");
        assert_eq!(AttrValue::Double(12.5).to_string(), "12.5");
        assert_eq!(AttrValue::Float(0.25).to_string(), "0.25");
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut attrs = Attributes::new().with("a", 1).with("b", "two");
        attrs.insert("a", 3.5);

        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(attrs.get("a"), Some(&AttrValue::Double(3.5)));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn merged_leaves_inputs_untouched() {
        let template = Attributes::new().with("long_name", "platform");
        let caller = Attributes::new()
            .with("long_name", "Buoy 7")
            .with("wmo_id", "44007");

        let out = template.merged(&caller);

        assert_eq!(out.get_str("long_name"), Some("Buoy 7"));
        assert_eq!(out.get_str("wmo_id"), Some("44007"));
        assert_eq!(template.get_str("long_name"), Some("platform"));
        assert_eq!(template.len(), 1);
        assert_eq!(caller.len(), 2);
    }

    #[test]
    fn from_iterator_collects_pairs() {
        let attrs: Attributes = [("x", "1"), ("y", "2")].into_iter().collect();
        assert!(attrs.contains_key("x"));
        assert_eq!(attrs.get_str("y"), Some("2"));
    }

    #[test]
    fn numeric_accessors() {
        assert_eq!(AttrValue::Int(4).as_f64(), Some(4.0));
        assert_eq!(AttrValue::Long(-2).as_f64(), Some(-2.0));
        assert_eq!(AttrValue::from("x").as_f64(), None);
        assert_eq!(AttrValue::Double(1.0).as_str(), None);
    }
}
