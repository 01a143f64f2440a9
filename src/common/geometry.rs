use std::f64::consts::PI;
use std::fmt;

/// Returns `amount / capacity` clamped to `[0, 1]`.
///
/// A zero capacity can't hold anything, so its ratio is 0.
///
/// # Example
/// ```rust
/// use screeps_svg::common::geometry::fill_ratio;
///
/// assert_eq!(fill_ratio(500, 1000), 0.5);
/// assert_eq!(fill_ratio(1500, 1000), 1.0);
/// assert_eq!(fill_ratio(10, 0), 0.0);
/// ```
pub fn fill_ratio(amount: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    (amount as f64 / capacity as f64).clamp(0.0, 1.0)
}

/// Converts a polar coordinate to a cartesian one.
///
/// Angles are in degrees, measured clockwise from 12 o'clock.
pub fn polar_to_cartesian(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let angle_rad = (angle_deg - 90.0) * PI / 180.0;
    (
        center_x + radius * angle_rad.cos(),
        center_y + radius * angle_rad.sin(),
    )
}

/// Builds the path data for a circular arc from `start_deg` to `end_deg`.
pub fn describe_arc(x: f64, y: f64, radius: f64, start_deg: f64, end_deg: f64) -> String {
    let (start_x, start_y) = polar_to_cartesian(x, y, radius, end_deg);
    let (end_x, end_y) = polar_to_cartesian(x, y, radius, start_deg);

    let large_arc_flag = if end_deg - start_deg <= 180.0 { 0 } else { 1 };

    format!(
        "M {} {} A {} {} 0 {} 0 {} {}",
        Num(start_x),
        Num(start_y),
        Num(radius),
        Num(radius),
        large_arc_flag,
        Num(end_x),
        Num(end_y),
    )
}

/// End point of a progress arc swept by `turns` full turns around the origin,
/// starting at `(radius, 0)`.
///
/// Negative turns sweep counter-clockwise.
pub fn sweep_end(radius: f64, turns: f64) -> (f64, f64) {
    let angle = 2.0 * PI * turns;
    (radius * angle.cos(), radius * angle.sin())
}

/// Formats a number the way it should appear in markup.
///
/// Integral values print without a fractional part and `-0` prints as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn polar_zero_degrees_points_up() {
        let (x, y) = polar_to_cartesian(25.0, 25.0, 15.0, 0.0);
        assert!(approx(x, 25.0));
        assert!(approx(y, 10.0));
    }

    #[test]
    fn polar_ninety_degrees_points_right() {
        let (x, y) = polar_to_cartesian(25.0, 25.0, 15.0, 90.0);
        assert!(approx(x, 40.0));
        assert!(approx(y, 25.0));
    }

    #[test]
    fn describe_arc_sets_large_arc_flag_past_half_turn() {
        assert!(describe_arc(25.0, 25.0, 15.0, -45.0, 45.0).contains(" A 15 15 0 0 0 "));
        assert!(describe_arc(25.0, 25.0, 15.0, -100.0, 100.0).contains(" A 15 15 0 1 0 "));
    }

    #[test]
    fn describe_arc_starts_at_end_angle() {
        let d = describe_arc(0.0, 0.0, 10.0, 0.0, 90.0);
        assert!(d.starts_with("M 10 "), "{d}");
    }

    #[test]
    fn sweep_end_quarter_turn() {
        let (x, y) = sweep_end(50.0, 0.25);
        assert!(approx(x, 0.0));
        assert!(approx(y, 50.0));
    }

    #[test]
    fn num_formats_integers_without_fraction() {
        assert_eq!(Num(60.0).to_string(), "60");
        assert_eq!(Num(-0.0).to_string(), "0");
        assert_eq!(Num(12.5).to_string(), "12.5");
        assert_eq!(Num(-28.0).to_string(), "-28");
    }

    proptest! {
        #[test]
        fn fill_ratio_is_clamped(amount in any::<u32>(), capacity in any::<u32>()) {
            let ratio = fill_ratio(amount, capacity);
            prop_assert!((0.0..=1.0).contains(&ratio));
        }

        #[test]
        fn fill_ratio_is_monotonic_in_amount(a in 0u32..1_000_000, b in 0u32..1_000_000, capacity in 1u32..1_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(fill_ratio(lo, capacity) <= fill_ratio(hi, capacity));
        }

        #[test]
        fn fill_ratio_saturates_at_capacity(extra in 0u32..1_000_000, capacity in 1u32..1_000_000) {
            prop_assert_eq!(fill_ratio(capacity.saturating_add(extra), capacity), 1.0);
        }
    }
}
