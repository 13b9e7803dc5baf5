// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Ordered name/value parameters used for query strings and headers.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Display;
use std::fmt::Write;

use serde::Serialize;

/// Rendered form of a [`ParameterList`] keyed by parameter name.
pub type ParameterMap = BTreeMap<String, ParamValue>;

/// Value of a single parameter.
///
/// Conversions normalize at insertion time: strings are trimmed, sequences
/// are joined with `,`, numbers and booleans are kept as they are.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Text value.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(v) => f.write_str(v),
            ParamValue::Integer(v) => write!(f, "{v}"),
            ParamValue::Float(v) => f.write_str(&format_float(*v)),
            ParamValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// Format a float the way JavaScript's `String(number)` does.
///
/// Magnitudes in `[1e-6, 1e21)` use plain decimal notation, everything else
/// uses exponent notation with an explicit sign on positive exponents.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let abs = v.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{v}");
    }

    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.trim().to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.len() == value.len() {
            ParamValue::Text(value)
        } else {
            ParamValue::Text(trimmed.to_string())
        }
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::from(value.as_str())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(ParamValue::Integer)
            .unwrap_or_else(|_| ParamValue::Text(value.to_string()))
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(ParamValue::Integer)
            .unwrap_or_else(|_| ParamValue::Text(value.to_string()))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl<T: Display> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        let mut s = String::new();
        for (idx, v) in values.iter().enumerate() {
            if idx != 0 {
                s.push(',');
            }
            // Writing into a String never fails.
            let _ = write!(s, "{v}");
        }
        ParamValue::Text(s)
    }
}

impl<T: Display> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::from(values.as_slice())
    }
}

impl<T: Display, const N: usize> From<[T; N]> for ParamValue {
    fn from(values: [T; N]) -> Self {
        ParamValue::from(values.as_slice())
    }
}

/// A single name/value pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Parameter name, kept verbatim.
    pub name: String,
    /// Normalized parameter value.
    pub value: ParamValue,
}

impl Parameter {
    /// Create a new parameter, normalizing its value.
    pub fn new(name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered collection of parameters, duplicate names allowed.
///
/// Insertion order is preserved for rendering. Cloning yields an independent
/// copy of every entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterList {
    params: Vec<Parameter>,
}

impl ParameterList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.params.push(Parameter::new(name, value));
        self
    }

    /// Append a parameter, consuming and returning the list.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.add(name, value);
        self
    }

    /// Append every entry of `other` in order, without deduplication.
    pub fn add_all(&mut self, other: impl IntoIterator<Item = Parameter>) -> &mut Self {
        self.params.extend(other);
        self
    }

    /// Whether the list holds at least one entry.
    #[inline]
    pub fn has_entries(&self) -> bool {
        !self.params.is_empty()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Parameter] {
        &self.params
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.params.iter()
    }

    /// Copy of this list that drops every entry whose name is at least as
    /// long as `prefix` but does not start with it.
    ///
    /// Names shorter than the prefix are always kept. Lengths are counted in
    /// bytes, which matches UTF-16 length for ASCII header names only.
    pub fn with_prefix_filter(&self, prefix: &str) -> ParameterList {
        self.params
            .iter()
            .filter(|p| p.name.len() < prefix.len() || p.name.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Sort entries by name, byte-wise ascending.
    ///
    /// The sort is stable: entries sharing a name keep their relative order.
    pub fn sort_by_name(&mut self) {
        self.params.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
    }

    /// Render as `name=value` pairs joined by `&`, in insertion order.
    ///
    /// Names and values are written verbatim.
    pub fn to_query_string(&self) -> String {
        let mut s = String::with_capacity(16);
        for (idx, p) in self.params.iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }
            s.push_str(&p.name);
            s.push('=');
            // Writing into a String never fails.
            let _ = write!(s, "{}", p.value);
        }
        s
    }

    /// Render as a map from name to value, the last entry winning on
    /// duplicate names.
    ///
    /// Returns `None` for an empty list.
    pub fn to_header_map(&self) -> Option<ParameterMap> {
        if self.params.is_empty() {
            return None;
        }

        Some(
            self.params
                .iter()
                .map(|p| (p.name.clone(), p.value.clone()))
                .collect(),
        )
    }
}

impl FromIterator<Parameter> for ParameterList {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl Extend<Parameter> for ParameterList {
    fn extend<I: IntoIterator<Item = Parameter>>(&mut self, iter: I) {
        self.params.extend(iter);
    }
}

impl IntoIterator for ParameterList {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
