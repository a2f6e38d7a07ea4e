//! 3-tuple extraction from compound attributes
//!
//! A compound attribute with exactly three children is packed into a
//! [`Vec3`]. Children are placed by their channel suffix (`x/y/z` or
//! `r/g/b`, case-insensitive) when the suffixes name all three channels
//! exactly once; otherwise they are taken in declaration order. Anything
//! that is not a 3-child compound yields a zero vector.

use glam::Vec3;

use super::{AttributeValue, ChildValue};

/// Channel slot (0, 1, 2) named by the last character of a child name.
pub fn channel_index(name: &str) -> Option<usize> {
    match name.chars().last()?.to_ascii_lowercase() {
        'x' | 'r' => Some(0),
        'y' | 'g' => Some(1),
        'z' | 'b' => Some(2),
        _ => None,
    }
}

/// Pack a compound attribute into a vector.
pub fn extract_vec3(value: &AttributeValue) -> Vec3 {
    match value {
        AttributeValue::Compound(children) if children.len() == 3 => {
            Vec3::from_array(order_children(children))
        }
        AttributeValue::Compound(children) => {
            tracing::warn!(
                "Compound attribute has {} children, expected 3; using zero vector",
                children.len()
            );
            Vec3::ZERO
        }
        other => {
            tracing::warn!(
                "Attribute of kind {} is not a 3-tuple; using zero vector",
                other.kind()
            );
            Vec3::ZERO
        }
    }
}

/// Pack a compound attribute into an RGB color.
pub fn extract_color(value: &AttributeValue) -> [f32; 3] {
    extract_vec3(value).to_array()
}

fn order_children(children: &[ChildValue]) -> [f32; 3] {
    let declared = [children[0].value, children[1].value, children[2].value];

    let mut ordered = [0.0; 3];
    let mut seen = [false; 3];
    for child in children {
        match channel_index(&child.name) {
            Some(slot) if !seen[slot] => {
                seen[slot] = true;
                ordered[slot] = child.value;
            }
            _ => return declared,
        }
    }
    ordered
}
