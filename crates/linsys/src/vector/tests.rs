use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn v(coords: &[f64]) -> Vector {
    Vector::new(coords).unwrap()
}

fn assert_close(a: &Vector, b: &Vector, tol: f64) {
    assert_eq!(a.dimension(), b.dimension());
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < tol, "{a} vs {b}");
    }
}

#[test]
fn empty_coordinates_rejected() {
    assert_eq!(Vector::new(Vec::<f64>::new()), Err(LinsysError::EmptyInput));
    assert_eq!(Vector::zeros(0), Err(LinsysError::EmptyInput));
}

#[test]
fn plus_minus_times_scalar() {
    let sum = v(&[8.218, -9.341]).plus(&v(&[-1.129, 2.111])).unwrap();
    let rounded: Vec<f64> = sum.iter().map(|x| round_to(x, 3)).collect();
    assert_eq!(rounded, vec![7.089, -7.23]);

    let diff = v(&[7.119, 8.215]).minus(&v(&[-8.223, 0.878])).unwrap();
    assert_close(&diff, &v(&[15.342, 7.337]), 1e-12);

    let scaled = v(&[1.671, -1.012, -0.318]).times_scalar(7.41);
    assert_close(&scaled, &v(&[12.38211, -7.49892, -2.35638]), 1e-12);
}

#[test]
fn mismatched_dimensions_are_errors() {
    let a = v(&[1.0, 2.0]);
    let b = v(&[1.0, 2.0, 3.0]);
    let err = LinsysError::DimensionMismatch {
        expected: 2,
        found: 3,
    };
    assert_eq!(a.plus(&b), Err(err.clone()));
    assert_eq!(a.minus(&b), Err(err.clone()));
    assert_eq!(a.dot(&b), Err(err));
    assert!(!a.is_parallel(&b));
    assert!(!a.is_orthogonal(&b));
}

#[test]
fn magnitude_and_normalization() {
    assert!((v(&[-0.221, 7.437]).magnitude() - 7.440282924728065).abs() < 1e-12);
    assert!((v(&[8.813, -1.331, -6.247]).magnitude() - 10.884187567292289).abs() < 1e-12);

    let u = v(&[5.581, -2.136]).normalized().unwrap();
    assert!((u.magnitude() - 1.0).abs() < 1e-12);
    assert_eq!(v(&[0.0, 0.0]).normalized(), Err(LinsysError::ZeroVector));
}

#[test]
fn dot_is_rounded() {
    let d = v(&[7.887, 4.138]).dot(&v(&[-8.802, 6.776])).unwrap();
    assert_eq!(d, -41.382286);
    // 0.1 + 0.2 style noise disappears after rounding
    let noisy = v(&[0.1, 0.2]).dot(&v(&[1.0, 1.0])).unwrap();
    assert_eq!(noisy, 0.3);
}

#[test]
fn angle_in_radians_and_degrees() {
    let a = v(&[3.183, -7.627]);
    let b = v(&[-2.668, 5.319]);
    let rad = a.angle_with(&b, AngleUnit::Radians).unwrap();
    assert!((rad - 3.0720263097444658).abs() < 1e-12);
    let deg = a.angle_with(&b, AngleUnit::Degrees).unwrap();
    assert!((deg - rad.to_degrees()).abs() < 1e-12);

    let right = v(&[1.0, 0.0]).angle_with(&v(&[0.0, 2.0]), AngleUnit::Degrees).unwrap();
    assert!((right - 90.0).abs() < 1e-12);
    assert_eq!(
        a.angle_with(&v(&[0.0, 0.0]), AngleUnit::Radians),
        Err(LinsysError::ZeroVector)
    );
}

#[test]
fn parallel_and_orthogonal_pairs() {
    let a = v(&[-7.579, -7.88]);
    let b = v(&[22.737, 23.64]);
    assert!(a.is_parallel(&b));
    assert!(!a.is_orthogonal(&b));

    let a = v(&[-2.029, 9.97, 4.172]);
    let b = v(&[-9.231, -6.629, -7.245]);
    assert!(!a.is_parallel(&b));
    assert!(!a.is_orthogonal(&b));

    let a = v(&[-2.328, -7.284, -1.214]);
    let b = v(&[-1.821, 1.072, -2.94]);
    assert!(!a.is_parallel(&b));
    assert!(a.is_orthogonal(&b));

    // zero vector is parallel and orthogonal to everything
    let a = v(&[2.118, 4.827]);
    let zero = v(&[0.0, 0.0]);
    assert!(a.is_parallel(&zero));
    assert!(a.is_orthogonal(&zero));
}

#[test]
fn projections() {
    let par = v(&[3.039, 1.879]).component_parallel_to(&v(&[0.825, 2.036])).unwrap();
    assert_close(&par, &v(&[1.0826069625022305, 2.6717427583691413]), 1e-9);

    let orth = v(&[-9.88, -3.264, -8.159])
        .component_orthogonal_to(&v(&[-2.155, -9.353, -9.473]))
        .unwrap();
    assert_close(&orth, &v(&[-8.35008104319362, 3.3760612542970176, -1.4337460427717694]), 1e-9);

    let par4 = v(&[3.009, -6.172, 3.692, -2.51])
        .component_parallel_to(&v(&[6.404, -9.144, 2.759, 8.718]))
        .unwrap();
    assert_eq!(par4.dimension(), 4);
}

#[test]
fn orthogonal_component_is_orthogonal_to_the_basis() {
    let a = v(&[-9.39, -3.86, -7.15]);
    let b = v(&[0.85, -4.55, 9.02]);
    let orth = a.component_orthogonal_to(&b).unwrap();
    assert!(orth.is_orthogonal(&b), "{orth} . {b} = {:?}", orth.dot(&b));

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..256 {
        let a = v(&[rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)]);
        let b = v(&[rng.gen_range(1.0..10.0), rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)]);
        assert!(a.component_orthogonal_to(&b).unwrap().is_orthogonal(&b), "{a} vs {b}");
    }
}

#[test]
fn extreme_magnitudes_normalize() {
    let big = v(&[1e200, 1e200]);
    assert!((big.magnitude() - 1e200 * 2f64.sqrt()).abs() < 1e188);
    let u = big.normalized().unwrap();
    assert!((u.magnitude() - 1.0).abs() < 1e-12);
    assert!((u[0] - 0.5f64.sqrt()).abs() < 1e-12);

    let tiny = v(&[1e-200, 0.0]);
    assert!(tiny.magnitude() > 0.0);
    assert_eq!(tiny.normalized().unwrap(), v(&[1.0, 0.0]));
    assert_eq!(v(&[0.0, -0.0]).normalized(), Err(LinsysError::ZeroVector));
}

#[test]
fn projection_onto_zero_basis_has_no_unique_component() {
    let a = v(&[1.0, 2.0]);
    let zero = v(&[0.0, 0.0]);
    assert_eq!(a.component_parallel_to(&zero), Err(LinsysError::NoUniqueComponent));
    assert_eq!(a.component_orthogonal_to(&zero), Err(LinsysError::NoUniqueComponent));
    // the lower-level condition stays distinguishable
    assert_eq!(zero.normalized(), Err(LinsysError::ZeroVector));
}

#[test]
fn cross_embeds_two_dimensional_operands() {
    let a = v(&[8.462, 7.893]);
    let b = v(&[6.984, -5.975]);
    let c = a.cross(&b).unwrap();
    assert_eq!(c.dimension(), 3);
    assert_eq!(c[0], 0.0);
    assert_eq!(c[1], 0.0);
    assert!((c[2] - (8.462 * -5.975 - 6.984 * 7.893)).abs() < 1e-12);
    assert_eq!(a.area_of_parallelogram_with(&b).unwrap(), c.magnitude());
}

#[test]
fn cross_in_three_dimensions() {
    let c = v(&[1.0, 0.0, 0.0]).cross(&v(&[0.0, 1.0, 0.0])).unwrap();
    assert_eq!(c, v(&[0.0, 0.0, 1.0]));

    let a = v(&[1.5, 9.547, 3.691]);
    let b = v(&[-6.007, 0.124, 5.772]);
    let para = a.area_of_parallelogram_with(&b).unwrap();
    let tri = a.area_of_triangle_with(&b).unwrap();
    assert!((para - 2.0 * tri).abs() < 1e-12);
    // the cross product is orthogonal to both factors
    let c = a.cross(&b).unwrap();
    assert!(c.dot(&a).unwrap().abs() < 1e-9);
    assert!(c.dot(&b).unwrap().abs() < 1e-9);
}

#[test]
fn cross_rejects_other_dimensions() {
    let a = v(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(a.cross(&a), Err(LinsysError::DimensionUnsupported(4)));
    let one = v(&[1.0]);
    assert_eq!(one.cross(&v(&[1.0, 2.0])), Err(LinsysError::DimensionUnsupported(1)));
}

#[test]
fn display_lists_coordinates() {
    assert_eq!(v(&[1.5, -2.0]).to_string(), "Vector: (1.5, -2)");
}

#[test]
fn projection_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..32 {
        let a = v(&[rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)]);
        let b = v(&[rng.gen_range(1.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)]);
        let par = a.component_parallel_to(&b).unwrap();
        assert!(par.is_parallel(&b) || par.is_zero_eps(1e-9));
    }
}

fn coords(dim: std::ops::Range<usize>) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..10.0, dim)
}

proptest! {
    #[test]
    fn adding_the_negation_gives_zero(c in coords(1..6)) {
        let a = v(&c);
        let sum = a.plus(&a.times_scalar(-1.0)).unwrap();
        prop_assert_eq!(sum, Vector::zeros(c.len()).unwrap());
    }

    #[test]
    fn normalized_has_unit_magnitude(c in coords(1..6)) {
        let a = v(&c);
        prop_assume!(a.magnitude() > 1e-6);
        let m = a.normalized().unwrap().magnitude();
        prop_assert!((m - 1.0).abs() < 1e-10);
    }

    #[test]
    fn components_reconstruct_the_vector((a, b) in (2usize..6).prop_flat_map(|d| (coords(d..d + 1), coords(d..d + 1)))) {
        let a = v(&a);
        let b = v(&b);
        prop_assume!(b.magnitude() > 1e-3);
        let par = a.component_parallel_to(&b).unwrap();
        let orth = a.component_orthogonal_to(&b).unwrap();
        let back = par.plus(&orth).unwrap();
        for (x, y) in back.iter().zip(a.iter()) {
            prop_assert!((x - y).abs() < 1e-9);
        }
        prop_assert!(orth.is_orthogonal(&b), "{} . {} = {:?}", orth, b, orth.dot(&b));
    }
}
