use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sortscope::prelude::*;
use sortscope::search::parse_target;
use sortscope::{binary_search, linear_search};

#[test]
fn test_reference_scenario() {
    let input = [5, 3, 8, 1, 9, 2];
    let sorted = [1, 2, 3, 5, 8, 9];

    assert_eq!(linear_search(&input, &8), SearchOutcome::Found(2));
    assert_eq!(binary_search(&sorted, &8), SearchOutcome::Found(4));
    assert_eq!(linear_search(&input, &7), SearchOutcome::NotFound);
    assert_eq!(binary_search(&sorted, &7), SearchOutcome::NotFound);
}

#[test]
fn test_combined_search_leaves_input_order() {
    let input = [5, 3, 8, 1, 9, 2];

    let report = search(&input, "8").unwrap();
    assert_eq!(report.target, Some(8));
    assert_eq!(report.linear, SearchOutcome::Found(2));
    assert_eq!(report.binary, SearchOutcome::Found(4));

    let report = search(&input, "7").unwrap();
    assert_eq!(report.linear, SearchOutcome::NotFound);
    assert_eq!(report.binary, SearchOutcome::NotFound);
}

#[test]
fn test_linear_returns_first_match() {
    assert_eq!(linear_search(&[4, 1, 4, 4], &4), SearchOutcome::Found(0));
    assert_eq!(linear_search(&[0, 1, 4, 4], &4), SearchOutcome::Found(2));
}

#[test]
fn test_binary_duplicates_report_midpoint_match() {
    // The first probe lands on index 3, which already matches.
    let data = [1, 2, 2, 2, 2, 2, 3];
    assert_eq!(binary_search(&data, &2), SearchOutcome::Found(3));
}

#[test]
fn test_binary_bounds() {
    let data = [10, 20, 30, 40];

    assert_eq!(binary_search(&data, &10), SearchOutcome::Found(0));
    assert_eq!(binary_search(&data, &40), SearchOutcome::Found(3));
    assert_eq!(binary_search(&data, &5), SearchOutcome::NotFound);
    assert_eq!(binary_search(&data, &45), SearchOutcome::NotFound);
    assert_eq!(binary_search(&data, &25), SearchOutcome::NotFound);
}

#[test]
fn test_empty_and_single() {
    let empty: [Value; 0] = [];
    assert_eq!(linear_search(&empty, &1), SearchOutcome::NotFound);
    assert_eq!(binary_search(&empty, &1), SearchOutcome::NotFound);

    assert_eq!(linear_search(&[1], &1), SearchOutcome::Found(0));
    assert_eq!(binary_search(&[1], &1), SearchOutcome::Found(0));
    assert_eq!(binary_search(&[1], &0), SearchOutcome::NotFound);
}

#[test]
fn test_fuzz_search_agreement() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        // Distinct values so every present target occurs exactly once.
        let mut pool: Vec<Value> = (0..500).collect();
        pool.shuffle(&mut rng);
        let len = rng.random_range(1..200);
        let data = &pool[..len];

        let target = data[rng.random_range(0..len)];
        let report = search(data, &target.to_string()).unwrap();
        let linear = report.linear.index().expect("linear should find it");
        let binary = report.binary.index().expect("binary should find it");

        let mut ascending = data.to_vec();
        ascending.sort();
        assert_eq!(data[linear], target);
        assert_eq!(ascending[binary], target);

        let report = search(data, "500").unwrap();
        assert!(!report.linear.is_found());
        assert!(!report.binary.is_found());
    }
}

#[test]
fn test_parse_target() {
    assert_eq!(parse_target("42"), Ok(Some(42)));
    assert_eq!(parse_target("  -3 "), Ok(Some(-3)));
    assert_eq!(parse_target("1e2"), Ok(Some(100)));
    assert_eq!(parse_target("7.0"), Ok(Some(7)));

    // Numeric but not a whole number: valid, matches nothing.
    assert_eq!(parse_target("3.5"), Ok(None));
    assert_eq!(parse_target("1e30"), Ok(None));
    assert_eq!(parse_target("NaN"), Ok(None));

    assert_eq!(parse_target(""), Err(StoreError::EmptySearchTarget));
    assert_eq!(parse_target("   "), Err(StoreError::EmptySearchTarget));
    assert_eq!(
        parse_target("abc"),
        Err(StoreError::InvalidSearchTarget("abc".to_string()))
    );
}

#[test]
fn test_fractional_target_finds_nothing() {
    let report = search(&[3, 4, 5], "3.5").unwrap();
    assert_eq!(report.target, None);
    assert_eq!(report.linear, SearchOutcome::NotFound);
    assert_eq!(report.binary, SearchOutcome::NotFound);
}

#[test]
fn test_outcome_display() {
    assert_eq!(SearchOutcome::Found(4).to_string(), "Found at index 4");
    assert_eq!(SearchOutcome::NotFound.to_string(), "Not found");

    let report = search(&[5, 3, 8], "8").unwrap();
    assert_eq!(
        report.to_string(),
        "Linear Search: Found at index 2\nBinary Search: Found at index 2"
    );
}
