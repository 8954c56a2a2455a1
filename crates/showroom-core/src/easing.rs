//! Easing curves mapping linear progress in \[0, 1\] to eased progress.

/// Cubic ease-in-out: slow start, fast middle, slow finish.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Quartic ease-in-out: steeper acceleration and deceleration at the ends.
#[inline]
pub fn ease_in_out_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    InOutCubic,
    InOutQuart,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::InOutCubic => ease_in_out_cubic(t),
            Easing::InOutQuart => ease_in_out_quart(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_half_for_both_curves() {
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out_quart(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn quart_is_flatter_than_cubic_near_start() {
        assert!(ease_in_out_quart(0.2) < ease_in_out_cubic(0.2));
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::InOutCubic.apply(-3.0), 0.0);
        assert_eq!(Easing::InOutQuart.apply(7.5), 1.0);
    }
}
