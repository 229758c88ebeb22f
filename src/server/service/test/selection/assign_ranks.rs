use super::*;

/// Tests five candidates yield three officials and two alternates.
///
/// Expected: ranks 1 to 5, categories split after the third
#[test]
fn splits_officials_and_alternates() {
    let candidates = [10, 20, 30, 40, 50];
    let ranked = assign_ranks(&candidates, &[4, 3, 2, 1, 0]).unwrap();

    let ids: Vec<i32> = ranked.iter().map(|r| r.employee_id).collect();
    let ranks: Vec<i32> = ranked.iter().map(|r| r.rank).collect();
    let officials = ranked
        .iter()
        .filter(|r| r.category == SelectionCategory::Official)
        .count();

    assert_eq!(ids, vec![50, 40, 30, 20, 10]);
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    assert_eq!(officials, 3);
    assert_eq!(ranked[3].category, SelectionCategory::Alternate);
}

/// Tests placement stops after seven candidates.
///
/// Expected: seven entries, three officials and four alternates
#[test]
fn caps_at_seven() {
    let candidates: Vec<i32> = (1..=10).collect();
    let permutation: Vec<usize> = (0..10).collect();

    let ranked = assign_ranks(&candidates, &permutation).unwrap();

    assert_eq!(ranked.len(), 7);
    assert_eq!(ranked.last().map(|r| r.rank), Some(7));
    assert_eq!(
        ranked
            .iter()
            .filter(|r| r.category == SelectionCategory::Alternate)
            .count(),
        4
    );
}

/// Tests exactly three candidates are all officials.
///
/// Expected: three officials, no alternates
#[test]
fn three_candidates_are_all_official() {
    let ranked = assign_ranks(&[7, 8, 9], &[1, 2, 0]).unwrap();

    assert_eq!(ranked.len(), 3);
    assert!(ranked
        .iter()
        .all(|r| r.category == SelectionCategory::Official));
}

/// Tests inputs that are not permutations are rejected.
///
/// Expected: Err(InvalidPermutation) for duplicates, wrong length and out-of-range indices
#[test]
fn rejects_invalid_permutation() {
    let candidates = [1, 2, 3];

    for permutation in [vec![0, 0, 1], vec![0, 1], vec![0, 1, 3]] {
        assert!(matches!(
            assign_ranks(&candidates, &permutation),
            Err(InternalError::InvalidPermutation { len: 3 })
        ));
    }
}
