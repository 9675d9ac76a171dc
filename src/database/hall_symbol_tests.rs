use std::collections::HashSet;

use nalgebra::{Matrix3, Vector3};

use crate::database::hall_symbol::{ExactOperation, HallSymbol};
use crate::symmetry::SymmetryError;

fn assert_closed(ops: &[ExactOperation]) {
    let set = ops.iter().cloned().collect::<HashSet<_>>();
    assert_eq!(set.len(), ops.len());
    for a in ops {
        for b in ops {
            assert!(set.contains(&a.compose(b)), "{a} ∘ {b} missing");
        }
    }
}

#[test]
fn test_hall_symbol_group_orders() {
    let cases = [
        ("P 1", 1),
        ("-P 1", 2),
        ("P 2yb", 2),
        ("-P 2ybc", 4),
        ("-C 2yc", 8),
        ("P 2ac 2ab", 4),
        ("-F 2uv 2vw", 32),
        ("I 4bw 2bw", 16),
        ("-I 4bd 2c", 32),
        ("R 3", 9),
        ("-R 3 2\"", 36),
        ("P 61 2 (0 0 -1)", 12),
        ("-P 6c 2c", 24),
        ("-P 4 2 3", 48),
        ("-F 4 2 3", 192),
        ("-I 4bd 2c 3", 96),
        ("F 4d 2 3 -1d", 192),
    ];
    for (symbol, order) in cases {
        let hall = HallSymbol::parse(symbol).unwrap();
        let ops = hall.operations();
        assert_eq!(ops.len(), order, "{symbol}");
        assert_eq!(ops[0], ExactOperation::identity());
        assert_closed(&ops);
    }
}

#[test]
fn test_hall_symbol_tokens() {
    let hall = HallSymbol::parse("-P 2ybc").unwrap();
    assert!(hall.centrosymmetric);
    assert_eq!(hall.lattice_symbol, 'P');
    assert_eq!(hall.centring, vec![Vector3::zeros()]);
    assert_eq!(hall.generators.len(), 2);
    assert_eq!(
        hall.generators[1],
        ExactOperation::new(
            Matrix3::new(-1, 0, 0, 0, 1, 0, 0, 0, -1),
            Vector3::new(0, 12, 12)
        )
    );

    let hall = HallSymbol::parse("P 31 2c (0 0 1)").unwrap();
    assert_eq!(hall.origin_shift, Vector3::new(0, 0, 2));
    assert_eq!(hall.generators[0].translation, Vector3::new(0, 0, 8));

    let hall = HallSymbol::parse("F 2 2").unwrap();
    assert_eq!(hall.centring.len(), 4);
}

#[test]
fn test_hall_symbol_default_axes() {
    let hall = HallSymbol::parse("P 3 2").unwrap();
    assert_eq!(
        hall.generators[1].rotation,
        Matrix3::new(0, -1, 0, -1, 0, 0, 0, 0, -1)
    );
    let hall = HallSymbol::parse("P 4 2").unwrap();
    assert_eq!(
        hall.generators[1].rotation,
        Matrix3::new(1, 0, 0, 0, -1, 0, 0, 0, -1)
    );
    let hall = HallSymbol::parse("P 2 2 3").unwrap();
    assert_eq!(
        hall.generators[2].rotation,
        Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0)
    );
}

#[test]
fn test_hall_symbol_errors() {
    for symbol in ["", "Q 2", "P 5", "P 2q", "P 2 (0 0)", "P 2 (0 0 1", "P 2 2 2 2*"] {
        assert!(
            matches!(
                HallSymbol::parse(symbol),
                Err(SymmetryError::InvalidHallSymbol(_))
            ),
            "{symbol}"
        );
    }
}
