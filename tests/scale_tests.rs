use rand::Rng;
use sortscope::prelude::*;
use sortscope::is_sorted;
use std::time::Instant;

#[test]
fn test_sort_max_size_n_log_n() {
    let mut store = ArrayStore::new();
    store.generate(100_000).unwrap();
    let original = store.array().to_vec();

    for algorithm in [Algorithm::Merge, Algorithm::Quick] {
        let run = sort(algorithm, &original);
        println!("{algorithm}: 100k elements in {} ms", run.elapsed_display());
        assert_eq!(run.result.len(), original.len());
        assert!(is_sorted(&run.result), "{algorithm} failed");
    }
}

#[test]
fn test_quick_sort_sorted_input_stack_depth() {
    // Worst case for a last-element pivot: every partition is maximally lopsided.
    let input: Vec<Value> = (0..20_000).collect();

    let start = Instant::now();
    let sorted = Algorithm::Quick.sort(&input);
    println!("Quick sort on sorted 20k in {:?}", start.elapsed());

    assert_eq!(sorted, input);
}

#[test]
fn test_quick_sort_all_equal() {
    let input = vec![250; 20_000];
    assert_eq!(Algorithm::Quick.sort(&input), input);
}

#[test]
fn test_quadratic_sorts_medium() {
    let mut rng = rand::rng();
    let input: Vec<Value> = (0..3_000).map(|_| rng.random_range(0..500)).collect();

    let mut expected = input.clone();
    expected.sort();

    for algorithm in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion] {
        let start = Instant::now();
        let sorted = algorithm.sort(&input);
        println!("{algorithm}: 3k elements in {:?}", start.elapsed());
        assert_eq!(sorted, expected);
    }
}

#[test]
#[ignore]
fn test_quick_sort_sorted_max_size() {
    // WARNING: O(N^2) comparisons, takes minutes in debug builds.
    let input: Vec<Value> = (0..100_000).collect();
    assert_eq!(Algorithm::Quick.sort(&input), input);
}

#[test]
#[ignore]
fn test_bubble_sort_max_size() {
    // WARNING: O(N^2), the documented limitation of the quadratic sorts.
    let mut store = ArrayStore::new();
    store.generate(100_000).unwrap();
    let elapsed = store.run_sort(Algorithm::Bubble);
    println!("Bubble sort on 100k in {:?}", elapsed);
    assert!(is_sorted(store.array()));
}
