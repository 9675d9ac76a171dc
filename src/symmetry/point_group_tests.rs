use std::collections::HashSet;

use nalgebra::Matrix3;

use crate::auxiliary::cell::Lattice;
use crate::auxiliary::geometry::Tolerance;
use crate::database::space_group_records;
use crate::lattice::lattice_point_group;
use crate::symmetry::point_group::{
    identify_point_group, point_group_for_number, CrystalSystem, LaueClass, POINT_GROUPS,
};
use crate::symmetry::SymmetryError;

#[test]
fn test_point_group_signatures_are_distinct() {
    let signatures = POINT_GROUPS
        .iter()
        .map(|pg| *pg.signature())
        .collect::<HashSet<_>>();
    assert_eq!(signatures.len(), 32);
    for pg in POINT_GROUPS.iter() {
        assert_eq!(pg.signature().iter().sum::<usize>(), pg.order, "{pg}");
        assert_eq!(pg.signature()[5] == 1, pg.is_centrosymmetric(), "{pg}");
    }
}

#[test]
fn test_point_group_of_every_record() {
    for record in space_group_records() {
        let pg = identify_point_group(&record.rotations).unwrap();
        assert_eq!(pg.number, record.point_group.number, "{record}");
    }
}

#[test]
fn test_holohedries() {
    let tol = Tolerance::new(1e-5);
    let cases = [
        (Lattice::from_parameters([4.0, 4.0, 4.0], [90.0, 90.0, 90.0]), "m-3m"),
        (Lattice::from_parameters([4.0, 4.0, 6.0], [90.0, 90.0, 90.0]), "4/mmm"),
        (Lattice::from_parameters([4.0, 4.0, 6.0], [90.0, 90.0, 120.0]), "6/mmm"),
        (Lattice::from_parameters([4.0, 5.0, 6.0], [90.0, 90.0, 90.0]), "mmm"),
        (Lattice::from_parameters([4.0, 5.0, 6.0], [90.0, 100.0, 90.0]), "2/m"),
        (Lattice::from_parameters([5.0, 5.0, 5.0], [70.0, 70.0, 70.0]), "-3m"),
        (Lattice::from_parameters([4.0, 5.0, 6.0], [80.0, 95.0, 105.0]), "-1"),
    ];
    for (lattice, symbol) in cases {
        let rotations = lattice_point_group(&lattice, &tol).unwrap();
        let pg = identify_point_group(&rotations).unwrap();
        assert_eq!(pg.symbol, symbol);
        assert_eq!(pg.order, rotations.len());
    }
}

#[test]
fn test_point_group_lookup() {
    let pg = point_group_for_number(225).unwrap();
    assert_eq!(pg.symbol, "m-3m");
    assert_eq!(pg.crystal_system(), CrystalSystem::Cubic);
    assert_eq!(pg.laue_class, LaueClass::LaueM3m);
    assert_eq!(point_group_for_number(150).unwrap().crystal_system(), CrystalSystem::Trigonal);
    assert_eq!(point_group_for_number(174).unwrap().schoenflies, "C3h");
    assert!(point_group_for_number(0).is_none());
    assert!(point_group_for_number(231).is_none());

    let not_a_group = [Matrix3::identity(), Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1)];
    assert!(matches!(
        identify_point_group(&not_a_group),
        Err(SymmetryError::UnrecognizedSymmetry(_))
    ));
}
