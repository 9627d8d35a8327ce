// clampcore/src/util.rs

use std::ops::Add;

/// Two-argument comparator shape used for the exit-status rule. Passed
/// explicitly rather than matched by signature.
pub type Comparator = fn(i64, i64) -> i64;

/// Descending comparator: `b - a`.
pub fn cmp_desc(a: i64, b: i64) -> i64 {
    b - a
}

/// Larger of two values.
pub fn max_i64(a: i64, b: i64) -> i64 {
    if a >= b {
        a
    } else {
        b
    }
}

/// Integer pair feeding the max-of-two display value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Three-component vector. Display-only; never feeds back into computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// RFC3339 (sortable) + a compact stamp string, for stderr diagnostics.
pub fn now_timestamp() -> String {
    use chrono::{Local, SecondsFormat};
    let now = Local::now();
    let rfc3339 = now.to_rfc3339_opts(SecondsFormat::Secs, true);
    let compact = now.format("%Y%m%d_%H%M%S").to_string();
    format!("{compact} ({rfc3339})")
}

/* ================================== Tests ================================== */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmp_desc_sign() {
        assert!(cmp_desc(46, 1) < 0);
        assert!(cmp_desc(1, 46) > 0);
        assert_eq!(cmp_desc(5, 5), 0);
    }

    #[test]
    fn max_of_two() {
        assert_eq!(max_i64(3, 4), 4);
        assert_eq!(max_i64(4, 3), 4);
        assert_eq!(max_i64(-1, -1), -1);
    }

    #[test]
    fn vec3_adds_componentwise() {
        let sum = Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(sum, Vec3::new(5.0, 7.0, 9.0));
    }
}
