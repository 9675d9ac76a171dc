use std::collections::HashSet;

use itertools::Itertools;

use nalgebra::{Matrix3, Vector3};

use crate::database::space_group_table::SPACE_GROUP_TABLE;
use crate::database::wyckoff_table::{WyckoffEntry, WYCKOFF_TABLE};
use crate::database::{
    records_for_number, records_for_point_group, space_group_record, space_group_records,
    space_group_type,
};
use crate::symmetry::point_group::{point_group_for_number, CrystalSystem};

#[test]
fn test_table_layout() {
    let records = space_group_records();
    assert_eq!(records.len(), 254);
    assert_eq!(records.first().unwrap().number, 1);
    assert_eq!(records.last().unwrap().number, 230);
    assert!(records
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.number <= b.number && a.hall_number + 1 == b.hall_number));
    let numbers = records.iter().map(|record| record.number).collect::<HashSet<_>>();
    assert_eq!(numbers.len(), 230);

    let two_origins = (1..=230)
        .filter(|&n| records_for_number(n).len() == 2)
        .collect_vec();
    assert_eq!(two_origins.len(), 24);
    for n in two_origins {
        let choices = records_for_number(n)
            .iter()
            .map(|record| record.choice)
            .collect_vec();
        assert_eq!(choices, vec!["1", "2"]);
    }
}

#[test]
fn test_record_group_orders() {
    for record in space_group_records() {
        assert_eq!(
            record.operations.len(),
            record.point_group.order * record.centring().len(),
            "{record}"
        );
        assert_eq!(record.rotations.len(), record.point_group.order, "{record}");
        let set = record.operations.iter().cloned().collect::<HashSet<_>>();
        assert_eq!(set.len(), record.operations.len(), "{record}");
        for a in &record.operations {
            for b in &record.operations {
                assert!(set.contains(&a.compose(b)), "{record}: {a} ∘ {b}");
            }
        }
        for (rotation, rep) in record.rotations.iter().zip(record.coset_representatives()) {
            assert_eq!(rotation, &rep.rotation);
            assert_eq!(record.translation_for(rotation), Some(&rep.translation));
        }
    }
}

#[test]
fn test_record_lookups() {
    let record = space_group_record(1).unwrap();
    assert_eq!(record.international, "P1");
    assert!(space_group_record(0).is_none());
    assert!(space_group_record(255).is_none());

    let fd3m = records_for_number(227);
    assert_eq!(fd3m[0].choice, "1");
    assert_eq!(fd3m[0].centring_symbol(), 'F');
    assert_eq!(fd3m[0].operations.len(), 192);

    let r3m = records_for_number(166);
    assert_eq!(r3m.len(), 1);
    assert_eq!(r3m[0].choice, "H");
    assert_eq!(r3m[0].operations.len(), 36);

    let p21c = records_for_number(14);
    assert_eq!(p21c[0].hall_symbol.symbol, "-P 2ybc");
    assert_eq!(p21c[0].crystal_system(), CrystalSystem::Monoclinic);

    let mmm = point_group_for_number(47).unwrap();
    let records = records_for_point_group(mmm);
    assert_eq!(records.first().unwrap().number, 47);
    assert_eq!(records.last().unwrap().number, 74);

    let sg = space_group_type(194).unwrap();
    assert_eq!(sg.international, "P6_3/mmc");
    assert_eq!(sg.point_group, "6/mmm");
    assert_eq!(sg.schoenflies, "D6h");
    assert_eq!(sg.crystal_system, CrystalSystem::Hexagonal);
    assert_eq!(sg.hall_numbers.len(), 1);
    assert!(space_group_type(231).is_none());
}

#[test]
fn test_wyckoff_table_layout() {
    for (setting, sites) in SPACE_GROUP_TABLE.iter().zip(WYCKOFF_TABLE.iter()) {
        assert_eq!(setting.number, sites.number, "{}", setting.hall_symbol);
    }
    for (record, sites) in space_group_records().iter().zip(WYCKOFF_TABLE.iter()) {
        let positions = sites.parse().unwrap();
        let general = positions.last().unwrap();
        assert_eq!(general.multiplicity, record.operations.len(), "{record}");
        assert_eq!(general.free_parameters(), 3, "{record}");
        assert!(positions.len() <= 27, "{record}");
    }
}

#[test]
fn test_wyckoff_term_parsing() {
    let sites = WyckoffEntry {
        number: 214,
        positions: "12 1/8,0,1/4; 24 1/8,y,-y+1/4; 48 x,2x,-x-y+1/2",
    };
    let positions = sites.parse().unwrap();
    assert_eq!(positions.len(), 3);

    assert_eq!(positions[0].multiplicity, 12);
    assert_eq!(positions[0].free_parameters(), 0);
    assert_eq!(positions[0].constants, Vector3::new(3, 0, 6));

    assert_eq!(positions[1].free_parameters(), 1);
    assert_eq!(
        positions[1].grid_point(&Vector3::new(0, 5, 0)),
        Vector3::new(3, 5, 1)
    );

    assert_eq!(
        positions[2].coefficients,
        Matrix3::new(1, 0, 0, 2, 0, 0, -1, -1, 0)
    );
    assert_eq!(positions[2].free_parameters(), 2);
    assert_eq!(positions[2].constants, Vector3::new(0, 0, 12));

    for malformed in ["4 x,y", "4 1/5,0,0", "q 0,0,0", "2 0,w,0"] {
        let sites = WyckoffEntry {
            number: 1,
            positions: malformed,
        };
        assert!(sites.parse().is_err(), "{malformed}");
    }
}
