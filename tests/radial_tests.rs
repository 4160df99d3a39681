/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use hydrogen_orbitals::wavefunction::{
    radial_extent, radial_normalization, radial_probability_density, radial_wavefunction,
    radius_from_cartesian, RadialWavefunction, WavefunctionError,
};
use ndarray::{arr1, Array1};
use rstest::rstest;

#[rstest]
#[case(1, 0)]
#[case(2, 0)]
#[case(2, 1)]
#[case(3, 0)]
#[case(3, 1)]
#[case(3, 2)]
#[case(4, 0)]
#[case(4, 1)]
#[case(4, 2)]
#[case(4, 3)]
fn test_radial_functions_are_normalized(#[case] n: i32, #[case] l: i32) {
    let r_max = radial_extent(n, 1.0, 1.0);
    let integral = radial_normalization(n, l, 1.0, 1.0, r_max, 20_000).unwrap();
    assert_relative_eq!(integral, 1.0, epsilon = 1e-3);
}

#[rstest]
#[case(2.0)]
#[case(3.0)]
fn test_normalization_holds_for_heavier_nuclei(#[case] z: f64) {
    for (n, l) in [(1, 0), (2, 1), (3, 2)] {
        let r_max = radial_extent(n, z, 1.0);
        let integral = radial_normalization(n, l, z, 1.0, r_max, 20_000).unwrap();
        assert_relative_eq!(integral, 1.0, epsilon = 1e-3);
    }
}

#[test]
fn test_ground_state_closed_form() {
    // R10 = 2 (Z/a0)^{3/2} exp(-Zr/a0)
    let z = 2.0;
    let r10 = RadialWavefunction::new(1, 0, z, 1.0).unwrap();
    for r in [0.0, 0.25, 1.0, 3.5] {
        let expected = 2.0 * z.powf(1.5) * (-z * r).exp();
        assert_relative_eq!(r10.value(r), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_two_s_has_node_at_two_bohr() {
    let r20 = RadialWavefunction::new(2, 0, 1.0, 1.0).unwrap();
    assert_relative_eq!(r20.value(2.0), 0.0, epsilon = 1e-12);
    assert!(r20.value(1.0) > 0.0);
    assert!(r20.value(3.0) < 0.0);
}

#[test]
fn test_probability_density_is_r_squared_r_squared() {
    let r = Array1::linspace(0.0, 15.0, 301);
    let values = radial_wavefunction(&r, 3, 1, 1.0, 1.0).unwrap();
    let density = radial_probability_density(&r, 3, 1, 1.0, 1.0).unwrap();

    for ((&ri, &ri_value), &ri_density) in r.iter().zip(values.iter()).zip(density.iter()) {
        assert_relative_eq!(ri_density, ri * ri * ri_value * ri_value, epsilon = 1e-14);
        assert!(ri_density >= 0.0);
    }
    assert_eq!(density[0], 0.0);
}

#[test]
fn test_radius_from_cartesian() {
    let x = arr1(&[3.0, -3.0, 0.0, 0.0, -1.0]);
    let y = arr1(&[4.0, -4.0, 0.0, -2.0, -2.0]);
    let z = arr1(&[0.0, 0.0, 0.0, 0.0, -2.0]);
    let r = radius_from_cartesian(&x, &y, &z);
    assert_eq!(r, arr1(&[5.0, 5.0, 0.0, 2.0, 3.0]));
}

#[rstest]
#[case(0, 0)]
#[case(-1, 0)]
#[case(1, -1)]
#[case(2, 2)]
#[case(3, 5)]
fn test_invalid_quantum_numbers_are_rejected(#[case] n: i32, #[case] l: i32) {
    let result = RadialWavefunction::new(n, l, 1.0, 1.0);
    assert!(matches!(
        result,
        Err(WavefunctionError::InvalidQuantumNumbers { .. })
    ));

    let r = arr1(&[0.0, 1.0]);
    assert!(radial_wavefunction(&r, n, l, 1.0, 1.0).is_err());
}

#[test]
fn test_invalid_parameters_are_rejected() {
    assert!(matches!(
        RadialWavefunction::new(1, 0, 0.0, 1.0),
        Err(WavefunctionError::InvalidParameter(_))
    ));
    assert!(matches!(
        RadialWavefunction::new(1, 0, 1.0, -1.0),
        Err(WavefunctionError::InvalidParameter(_))
    ));
}
