/// Stiffness below which the spring response is too flat to normalize.
const MIN_STIFFNESS: f32 = 0.5;

/// A critically damped spring easing curve.
///
/// Higher `stiffness` settles faster. The curve never overshoots and is
/// rescaled so it reaches exactly 1 at the end of the transition, which
/// keeps it usable as a transition easing.
pub fn spring(stiffness: f32) -> impl Fn(f32) -> f32 + Clone + 'static {
    let omega = stiffness.max(MIN_STIFFNESS);
    let end = spring_response(omega, 1.);

    move |delta| (spring_response(omega, delta.clamp(0., 1.)) / end).clamp(0., 1.)
}

// Displacement covered by a critically damped spring released from rest.
fn spring_response(omega: f32, t: f32) -> f32 {
    1. - (1. + omega * t) * (-omega * t).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_starts_and_ends_on_the_goals() {
        for stiffness in [1., 8., 24.] {
            let ease = spring(stiffness);
            assert_eq!(ease(0.), 0.);
            assert!((ease(1.) - 1.).abs() < 1e-6);
        }
    }

    #[test]
    fn spring_is_monotonic_and_bounded() {
        let ease = spring(8.);
        let mut last = 0.;

        for step in 0..=100 {
            let value = ease(step as f32 / 100.);
            assert!((0.0..=1.0).contains(&value));
            assert!(value >= last, "spring should never move backwards");
            last = value;
        }
    }

    #[test]
    fn stiffer_springs_lead_early() {
        let soft = spring(2.);
        let stiff = spring(16.);

        assert!(stiff(0.2) > soft(0.2));
        assert!(stiff(0.2) > 0.2, "a stiff spring should lead a linear curve");
    }

    #[test]
    fn spring_clamps_out_of_range_input() {
        let ease = spring(8.);
        assert_eq!(ease(-1.), 0.);
        assert!((ease(2.) - 1.).abs() < 1e-6);
    }

    #[test]
    fn degenerate_stiffness_stays_finite() {
        let ease = spring(0.);
        assert!(ease(0.5).is_finite());
        assert!((ease(1.) - 1.).abs() < 1e-6);
    }
}
