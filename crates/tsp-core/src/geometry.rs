use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[inline(always)]
pub fn euclidean(from: &Point, to: &Point) -> f64 {
    let dx = from.x - to.x;
    let dy = from.y - to.y;
    (dx * dx + dy * dy).sqrt()
}

#[inline(always)]
fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Great-circle distance in kilometres, reading `y` as latitude and `x` as
/// longitude (degrees).
#[inline(always)]
pub fn great_circle_km(from: &Point, to: &Point) -> f64 {
    let lat1 = to_radians(from.y);
    let lon1 = to_radians(from.x);
    let lat2 = to_radians(to.y);
    let lon2 = to_radians(to.x);

    let val = (lat1.sin() * lat2.sin()) + (lat1.cos() * lat2.cos() * (lon1 - lon2).cos());

    val.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_is_pythagorean() {
        assert_eq!(euclidean(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn great_circle_is_zero_on_same_point_and_symmetric() {
        let hanoi = Point::new(105.85, 21.03);
        let hue = Point::new(107.59, 16.46);
        assert_eq!(great_circle_km(&hanoi, &hanoi), 0.0);
        let there = great_circle_km(&hanoi, &hue);
        let back = great_circle_km(&hue, &hanoi);
        assert!((there - back).abs() < 1e-9);
        // roughly 540 km apart
        assert!(there > 500.0 && there < 580.0, "got {there}");
    }
}
