use crate::*;

#[test]
fn test_dot_product_orthogonal_vectors() {
    let v1 = Vector { x: 1.0, y: 0.0, z: 0.0 };
    let v2 = Vector { x: 0.0, y: 1.0, z: 0.0 };
    assert_eq!(v1.dot(&v2), 0.0);
}

#[test]
fn test_component_along_gravity_axis() {
    // Phone held upright: gravity along -Y in device space, motion along the same axis.
    let gravity = Vector { x: 0.0, y: -9.8, z: 0.0 };
    let linear = Vector { x: 0.3, y: -2.0, z: 0.1 };
    let vertical = linear.component_along(&gravity, 0.1).unwrap();
    assert!(libm::fabsf(vertical - 2.0) < 1e-6, "{} != 2.0", vertical);
}

#[test]
fn test_component_along_tilted_axis() {
    let gravity = Vector { x: 0.0, y: 3.0, z: 4.0 };
    let linear = Vector { x: 7.0, y: 3.0, z: 4.0 };
    let vertical = linear.component_along(&gravity, 0.1).unwrap();
    assert!(libm::fabsf(vertical - 5.0) < 1e-5, "{} != 5.0", vertical);
}

#[test]
fn test_component_along_unresolved_axis() {
    let gravity = Vector { x: 0.05, y: 0.0, z: 0.05 };
    let linear = Vector { x: 1.0, y: 1.0, z: 1.0 };
    assert_eq!(linear.component_along(&gravity, 0.1), None);
    assert_eq!(linear.component_along(&Vector::zero(), 0.0), None);
}

#[test]
fn test_smooth_towards_converges() {
    let target = Vector { x: 0.0, y: 0.0, z: G_TO_MS2 };
    let mut estimate = Vector::zero();
    estimate.smooth_towards(&target, 0.8);
    assert!(estimate.approx_eq(&Vector::new(0.0, 0.0, 0.2 * G_TO_MS2), 1e-5));

    for _ in 0..100 {
        estimate.smooth_towards(&target, 0.8);
    }
    assert!(estimate.approx_eq(&target, 1e-4), "{:?}", estimate);
}

#[test]
fn test_sub_and_scale() {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(0.5, 0.5, 0.5);
    assert!((a - b).approx_eq(&Vector::new(0.5, 1.5, 2.5), 1e-6));
    assert!((a * 2.0).approx_eq(&Vector::new(2.0, 4.0, 6.0), 1e-6));
}

#[test]
fn test_is_finite() {
    assert!(Vector::new(0.0, -9.8, 1e30).is_finite());
    assert!(!Vector::new(f32::NAN, 0.0, 0.0).is_finite());
    assert!(!Vector::new(0.0, f32::INFINITY, 0.0).is_finite());
    assert!(!Vector::new(0.0, 0.0, f32::NEG_INFINITY).is_finite());
}
