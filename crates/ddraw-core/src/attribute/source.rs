//! Attribute lookup by stable name

use std::collections::HashMap;

use glam::{Mat4, Vec3};

use super::{
    AttributeError, AttributeKind, AttributeResult, AttributeValue, ChildValue, extract_color,
    extract_vec3,
};

/// Read access to a node's attributes.
///
/// Hosts implement [`AttributeSource::attribute`]; the typed readers are
/// provided on top of it.
pub trait AttributeSource {
    /// Look up an attribute by its stable name
    fn attribute(&self, name: &str) -> Option<&AttributeValue>;

    /// Look up an attribute, failing if it is not declared
    fn require(&self, name: &str) -> AttributeResult<&AttributeValue> {
        self.attribute(name)
            .ok_or_else(|| AttributeError::Missing(name.to_string()))
    }

    /// Read a 3-tuple attribute as a vector (see [`extract_vec3`])
    fn read_vec3(&self, name: &str) -> AttributeResult<Vec3> {
        self.require(name).map(extract_vec3)
    }

    /// Read a 3-tuple attribute as an RGB color
    fn read_color(&self, name: &str) -> AttributeResult<[f32; 3]> {
        self.require(name).map(extract_color)
    }

    /// Read a scalar float attribute
    fn read_f32(&self, name: &str) -> AttributeResult<f32> {
        match self.require(name)? {
            AttributeValue::Float(value) => Ok(*value),
            other => Err(wrong_kind(name, AttributeKind::Float, other)),
        }
    }

    /// Read a boolean attribute
    fn read_bool(&self, name: &str) -> AttributeResult<bool> {
        match self.require(name)? {
            AttributeValue::Bool(value) => Ok(*value),
            other => Err(wrong_kind(name, AttributeKind::Bool, other)),
        }
    }

    /// Read a matrix attribute.
    ///
    /// Host rows become glam columns, so the basis vectors land in
    /// `x_axis`/`y_axis`/`z_axis` and the translation in `w_axis`.
    fn read_matrix(&self, name: &str) -> AttributeResult<Mat4> {
        match self.require(name)? {
            AttributeValue::Matrix(rows) => Ok(Mat4::from_cols_array_2d(rows)),
            other => Err(wrong_kind(name, AttributeKind::Matrix, other)),
        }
    }
}

fn wrong_kind(name: &str, expected: AttributeKind, found: &AttributeValue) -> AttributeError {
    AttributeError::WrongKind {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

/// In-memory attribute source
#[derive(Debug, Clone, Default)]
pub struct AttributeMap {
    values: HashMap<String, AttributeValue>,
}

impl AttributeMap {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute value, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.values.insert(name.into(), value);
    }

    /// Remove an attribute
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.values.remove(name)
    }

    /// Number of declared attributes
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no attributes are declared
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Declare a point attribute with `X`/`Y`/`Z` children
    pub fn with_vec3(mut self, name: &str, v: Vec3) -> Self {
        self.set(name, compound(name, ['X', 'Y', 'Z'], v.to_array()));
        self
    }

    /// Set a color attribute with `R`/`G`/`B` children
    pub fn set_color(&mut self, name: &str, color: [f32; 3]) {
        self.set(name, compound(name, ['R', 'G', 'B'], color));
    }

    /// Declare a color attribute with `R`/`G`/`B` children
    pub fn with_color(mut self, name: &str, color: [f32; 3]) -> Self {
        self.set_color(name, color);
        self
    }

    /// Declare a float attribute
    pub fn with_f32(mut self, name: &str, value: f32) -> Self {
        self.set(name, AttributeValue::Float(value));
        self
    }

    /// Declare a boolean attribute
    pub fn with_bool(mut self, name: &str, value: bool) -> Self {
        self.set(name, AttributeValue::Bool(value));
        self
    }

    /// Declare a matrix attribute from a glam matrix
    pub fn with_matrix(mut self, name: &str, matrix: Mat4) -> Self {
        self.set(name, AttributeValue::Matrix(matrix.to_cols_array_2d()));
        self
    }
}

impl AttributeSource for AttributeMap {
    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }
}

fn compound(name: &str, suffixes: [char; 3], values: [f32; 3]) -> AttributeValue {
    AttributeValue::Compound(
        suffixes
            .iter()
            .zip(values)
            .map(|(suffix, value)| ChildValue::new(format!("{name}{suffix}"), value))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_reads() {
        let attrs = AttributeMap::new()
            .with_vec3("origin", Vec3::new(1.0, 2.0, 3.0))
            .with_color("textColor", [0.5, 0.25, 1.0])
            .with_f32("coneRadius", 0.3)
            .with_bool("displayText", true);

        assert_eq!(attrs.read_vec3("origin").unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(attrs.read_color("textColor").unwrap(), [0.5, 0.25, 1.0]);
        assert_eq!(attrs.read_f32("coneRadius").unwrap(), 0.3);
        assert!(attrs.read_bool("displayText").unwrap());
        assert_eq!(attrs.len(), 4);
    }

    #[test]
    fn test_missing_attribute() {
        let attrs = AttributeMap::new();
        assert_eq!(
            attrs.read_f32("coneHeight"),
            Err(AttributeError::Missing("coneHeight".to_string()))
        );
    }

    #[test]
    fn test_wrong_kind() {
        let attrs = AttributeMap::new().with_f32("displayText", 1.0);
        let err = attrs.read_bool("displayText").unwrap_err();
        assert_eq!(
            err,
            AttributeError::WrongKind {
                name: "displayText".to_string(),
                expected: AttributeKind::Bool,
                found: AttributeKind::Float,
            }
        );
        assert_eq!(
            err.to_string(),
            "Attribute 'displayText' is a float, expected bool"
        );
    }

    #[test]
    fn test_vec3_from_scalar_is_zero() {
        // A mis-declared 3-tuple degrades to zero instead of failing
        let attrs = AttributeMap::new().with_f32("origin", 4.0);
        assert_eq!(attrs.read_vec3("origin").unwrap(), Vec3::ZERO);
    }

    #[test]
    fn test_matrix_rows_map_to_axes() {
        let m = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0));
        let attrs = AttributeMap::new().with_matrix("inMatrix", m);

        match attrs.attribute("inMatrix") {
            Some(AttributeValue::Matrix(rows)) => assert_eq!(rows[3], [5.0, 0.0, 0.0, 1.0]),
            other => panic!("unexpected attribute: {other:?}"),
        }
        assert_eq!(attrs.read_matrix("inMatrix").unwrap(), m);
    }
}
