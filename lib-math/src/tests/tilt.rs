use crate::*;

#[test]
fn test_flat_on_table() {
    let tilt = Tilt::from(Vector::new(0.0, 0.0, G_TO_MS2));
    assert!(tilt.approx_eq(&Tilt::level(), 1e-4), "{:?}", tilt);
    assert!(!tilt.within_band(20.0, 85.0));
}

#[test]
fn test_reading_angle() {
    // Phone held at ~45 degrees towards the face, tilted around the X-axis.
    let tilt = Tilt::from(Vector::new(0.0, 6.93, 6.93));
    assert!(libm::fabsf(tilt.roll - 45.0) < 0.01, "{:?}", tilt);
    assert!(libm::fabsf(tilt.pitch) < 0.01, "{:?}", tilt);
    assert!(tilt.within_band(20.0, 85.0));
}

#[test]
fn test_pitch_sign_is_ignored() {
    let tilt = Tilt::from(Vector::new(-5.0, 0.0, 8.5));
    assert!(tilt.pitch < -20.0, "{:?}", tilt);
    assert!(tilt.within_band(20.0, 85.0));
}

#[test]
fn test_upright_is_outside_band() {
    // Standing straight up, roll is 90 degrees which is not strictly inside the band.
    let tilt = Tilt::from(Vector::new(0.0, G_TO_MS2, 0.0));
    assert!(libm::fabsf(tilt.roll - 90.0) < 1e-3, "{:?}", tilt);
    assert!(!tilt.within_band(20.0, 85.0));
}

#[test]
fn test_band_edges_are_exclusive() {
    let band = |pitch: f32, roll: f32| Tilt { pitch, roll }.within_band(20.0, 85.0);

    assert!(!band(20.0, 0.0));
    assert!(!band(0.0, -20.0));
    assert!(!band(85.0, 0.0));
    assert!(!band(0.0, -85.0));

    assert!(band(20.01, 0.0));
    assert!(band(0.0, -84.99));
    assert!(!band(19.99, 85.01));
}
