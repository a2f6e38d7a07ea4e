//! Label text formatting

use glam::Vec3;

/// Coordinates in braces, newline-terminated: `{1.00, 2.00, 3.00}\n`
pub fn format_point(p: Vec3, precision: usize) -> String {
    format!(
        "{{{:.*}, {:.*}, {:.*}}}\n",
        precision, p.x, precision, p.y, precision, p.z
    )
}

/// Vector length: `3.00`
pub fn format_magnitude(magnitude: f32, precision: usize) -> String {
    format!("{:.*}", precision, magnitude)
}

/// Angle in both units: `90.00deg|1.57rad`
pub fn format_angle(degrees: f32, radians: f32, precision: usize) -> String {
    format!("{:.*}deg|{:.*}rad", precision, degrees, precision, radians)
}
