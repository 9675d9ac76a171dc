use approx::assert_relative_eq;

use crate::auxiliary::cell::Lattice;
use crate::drivers::lattice_symmetry::{LatticeSymmetryDriver, LatticeSymmetryParams};
use crate::drivers::CrystSymDriver;
use crate::symmetry::point_group::CrystalSystem;

#[test]
fn test_drivers_lattice_symmetry_skewed_cubic() {
    // A simple cubic lattice expressed in a skewed basis (a, a + b, a + b + c).
    let lattice = Lattice::new([[3.0, 0.0, 0.0], [3.0, 3.0, 0.0], [3.0, 3.0, 3.0]]);
    let params = LatticeSymmetryParams::builder()
        .symprec(1e-5)
        .build()
        .unwrap();
    let mut driver = LatticeSymmetryDriver::builder()
        .parameters(&params)
        .lattice(&lattice)
        .build()
        .unwrap();
    driver.run().unwrap();
    let res = driver.result().unwrap();
    assert_eq!(res.symmetry.bravais_lattice, "cP");
    assert_eq!(res.symmetry.crystal_system, CrystalSystem::Cubic);
    assert_eq!(res.symmetry.rotations.len(), 48);
    for length in res.niggli_lattice.lengths() {
        assert_relative_eq!(length, 3.0, epsilon = 1e-10);
    }
    assert!(res.to_string().contains("Bravais lattice cP"));
}

#[test]
fn test_drivers_lattice_symmetry_monoclinic() {
    let lattice = Lattice::from_parameters([3.1, 4.3, 5.7], [90.0, 101.0, 90.0]);
    let params = LatticeSymmetryParams::default();
    let mut driver = LatticeSymmetryDriver::builder()
        .parameters(&params)
        .lattice(&lattice)
        .build()
        .unwrap();
    assert!(driver.result().is_err());
    driver.run().unwrap();
    let res = driver.result().unwrap();
    assert_eq!(res.symmetry.bravais_lattice, "mP");
    assert_eq!(res.symmetry.holohedry, "2/m");
    assert_eq!(res.symmetry.rotations.len(), 4);
}

#[test]
fn test_drivers_lattice_symmetry_degenerate() {
    let lattice = Lattice::new([[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    let params = LatticeSymmetryParams::default();
    let mut driver = LatticeSymmetryDriver::builder()
        .parameters(&params)
        .lattice(&lattice)
        .build()
        .unwrap();
    assert!(driver.run().is_err());
}
