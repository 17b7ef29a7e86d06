//! Property-based tests for the Givens-angle solver.
//!
//! Random amplitude vectors are drawn on the unit sphere with `a >= 0` and
//! `b` bounded away from zero, which is exactly the set the circuit reaches
//! with a well-defined `theta_2`.

use std::f64::consts::PI;

use proptest::prelude::*;
use qhack_givens::{Amplitudes, GivensError, givens_rotations, parse_amplitudes};

const EPS: f64 = 1e-9;

/// A normalized amplitude vector with `a >= 0` and `|b| > 1e-3`.
fn arb_amplitudes() -> impl Strategy<Value = Amplitudes> {
    (0.0..1.0_f64, -1.0..1.0_f64, -1.0..1.0_f64, -1.0..1.0_f64)
        .prop_filter("vector must not be tiny", |&(a, b, c, d)| {
            (a * a + b * b + c * c + d * d).sqrt() > 0.1
        })
        .prop_map(|(a, b, c, d)| {
            let n = (a * a + b * b + c * c + d * d).sqrt();
            Amplitudes::new(a / n, b / n, c / n, d / n)
        })
        // Keeps cos(theta_1/2) clear of the float floor near zero.
        .prop_filter("b must be nonzero, a or d non-negligible", |amps| {
            amps.b.abs() > 1e-3 && amps.a * amps.a + amps.d * amps.d > 1e-6
        })
}

proptest! {
    /// Running the circuit with the solved angles gives back a, b, c, d.
    #[test]
    fn test_angles_reconstruct_amplitudes(amps in arb_amplitudes()) {
        let back = givens_rotations(&amps).unwrap().amplitudes();
        prop_assert!((back.a - amps.a).abs() < EPS, "a: {} vs {}", back.a, amps.a);
        prop_assert!((back.b - amps.b).abs() < EPS, "b: {} vs {}", back.b, amps.b);
        prop_assert!((back.c - amps.c).abs() < EPS, "c: {} vs {}", back.c, amps.c);
        prop_assert!((back.d - amps.d).abs() < EPS, "d: {} vs {}", back.d, amps.d);
    }

    /// Every angle stays in its principal range.
    #[test]
    fn test_angles_in_range(amps in arb_amplitudes()) {
        let angles = givens_rotations(&amps).unwrap();
        prop_assert!(angles.theta_1.abs() <= PI);
        prop_assert!(angles.theta_2.abs() < PI);
        prop_assert!(angles.theta_3.abs() <= PI);
    }

    /// The printed `a,b,c,d` line reads back to the same amplitudes.
    #[test]
    fn test_input_line_reads_back(amps in arb_amplitudes()) {
        let line = format!("{:?},{:?},{:?},{:?}\n", amps.a, amps.b, amps.c, amps.d);
        prop_assert_eq!(parse_amplitudes(&line).unwrap(), amps);
    }

    /// Scaling a valid vector off the unit sphere is rejected.
    #[test]
    fn test_scaled_vectors_rejected(amps in arb_amplitudes(), scale in 1.01..4.0_f64) {
        let scaled = Amplitudes::new(amps.a * scale, amps.b * scale, amps.c * scale, amps.d * scale);
        prop_assert!(matches!(givens_rotations(&scaled), Err(GivensError::NotNormalized(_))));
    }
}

#[test]
fn test_error_messages() {
    let err = givens_rotations(&Amplitudes::new(1.0, 0.0, 0.0, 0.0)).unwrap_err();
    assert_eq!(err.to_string(), "Amplitude b is zero, so theta_2 is undefined");
    assert_eq!(
        parse_amplitudes("1,2").unwrap_err().to_string(),
        "Expected four amplitudes 'a,b,c,d', got 2 field(s)"
    );
}
