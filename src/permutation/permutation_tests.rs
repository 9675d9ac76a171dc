use itertools::Itertools;
use num_traits::{Inv, Pow};

use crate::permutation::Permutation;

#[test]
fn test_permutation_cycles() {
    let p_01234 = Permutation::from_image(&[0, 1, 2, 3, 4]).unwrap();
    assert!(p_01234.is_identity());
    assert_eq!(p_01234.cycles(), &[[0], [1], [2], [3], [4]]);
    assert_eq!(p_01234.cycle_pattern(), &[1, 1, 1, 1, 1]);
    assert_eq!(p_01234.order(), 1);
    assert_eq!(p_01234, Permutation::identity(5));

    let p_32104 = Permutation::from_image(&[3, 2, 1, 0, 4]).unwrap();
    assert!(!p_32104.is_identity());
    assert_eq!(p_32104.cycles(), &[vec![0, 3], vec![1, 2], vec![4]]);
    assert_eq!(p_32104.cycle_pattern(), &[2, 2, 1]);
    assert_eq!(p_32104.order(), 2);
    assert_eq!(p_32104.to_string(), "(0 3)(1 2)");

    let p_32104_2 = Permutation::from_cycles(p_32104.cycles()).unwrap();
    assert_eq!(p_32104, p_32104_2);

    let p_12340 = Permutation::from_image(&[1, 2, 3, 4, 0]).unwrap();
    assert_eq!(p_12340.cycles(), &[vec![0, 1, 2, 3, 4]]);
    assert_eq!(p_12340.cycle_pattern(), &[5]);

    let rank = 7;
    for image in (0..rank).permutations(rank) {
        let perm = Permutation::from_image(&image).unwrap();
        assert_eq!(perm, Permutation::from_cycles(perm.cycles()).unwrap());
    }
}

#[test]
fn test_permutation_rejects_non_bijections() {
    assert!(Permutation::from_image(&[0, 0, 1]).is_none());
    assert!(Permutation::from_image(&[0, 3, 1]).is_none());
    assert!(Permutation::from_cycles(&[vec![0, 1], vec![1, 2]]).is_none());
}

#[test]
fn test_permutation_composition() {
    let p_01234 = Permutation::from_image(&[0, 1, 2, 3, 4]).unwrap();
    let p_32104 = Permutation::from_image(&[3, 2, 1, 0, 4]).unwrap();
    assert_eq!(p_32104, &p_01234 * &p_32104);
    assert_eq!(p_32104, &p_32104 * &p_01234);

    let p_04213 = Permutation::from_image(&[0, 4, 2, 1, 3]).unwrap();
    let p_34120 = Permutation::from_image(&[3, 4, 1, 2, 0]).unwrap();
    let p_12403 = Permutation::from_image(&[1, 2, 4, 0, 3]).unwrap();
    assert_eq!(p_34120, &p_32104 * &p_04213);
    assert_eq!(p_12403, &p_04213 * &p_32104);

    let p_12340 = Permutation::from_image(&[1, 2, 3, 4, 0]).unwrap();
    let p_23401 = Permutation::from_image(&[2, 3, 4, 0, 1]).unwrap();
    assert_eq!(p_23401, &p_12340 * &p_12340);
    assert_eq!(p_23401, (&p_12340).pow(2));
    assert_eq!(&p_23401 * &p_12340, (&p_12340).pow(3));
    assert_eq!((&p_23401).inv(), (&p_12340).pow(-2));
    assert_eq!((&p_23401).inv() * &p_12340, (&p_12340).pow(-1));
    assert_eq!(p_12340.order(), 5);

    assert_eq!(p_01234, &p_12340 * (&p_12340).inv());
    assert_eq!(p_01234, (&p_12340).pow(0));

    let rank = 6;
    for image in (0..rank).permutations(rank) {
        let perm = Permutation::from_image(&image).unwrap();
        assert!((&perm * (&perm).inv()).is_identity());
        assert!((&perm).pow(i32::try_from(perm.order()).unwrap()).is_identity());
    }
}
