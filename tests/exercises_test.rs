use small_fp::core::sequence_ops::{
    array_sum, keep_lower_than, keep_lower_than_ten_filter, keep_lower_than_ten_loop, negate_all,
    sum_with_initial,
};
use small_fp::{create_adder, create_counter, create_remover, most_common_letter, Fibonacci, LetterTally};

/// Closures passed around as values keep what they captured.
#[test]
fn test_closures_as_values() {
    let adders: Vec<Box<dyn Fn(i64) -> i64>> = vec![
        Box::new(create_adder(1)),
        Box::new(create_adder(15)),
        Box::new(create_adder(-3)),
    ];
    let results: Vec<i64> = adders.iter().map(|add| add(10)).collect();
    assert_eq!(results, vec![11, 25, 7]);

    let mut counter = create_counter();
    let counts: Vec<u64> = std::iter::repeat_with(&mut counter).take(3).collect();
    assert_eq!(counts, vec![1, 2, 3]);
    assert_eq!(counter(), 4);
}

#[test]
fn test_remover_reused_on_several_sequences() {
    let remove_first = create_remover(0);
    assert_eq!(remove_first(vec!['a', 'b']).unwrap(), vec!['b']);
    assert_eq!(remove_first(vec!['x']).unwrap(), Vec::<char>::new());
    assert!(remove_first(Vec::new()).is_err());
}

#[test]
fn test_generator_composes_with_adapters() {
    let even: Vec<u64> = Fibonacci::new().filter(|n| n % 2 == 0).take(4).collect();
    assert_eq!(even, vec![2, 8, 34, 144]);

    let below_hundred: u64 = Fibonacci::new().take_while(|&n| n < 100).sum();
    assert_eq!(below_hundred, 2 + 3 + 5 + 8 + 13 + 21 + 34 + 55 + 89);
}

#[test]
fn test_map_filter_reduce_sample() {
    let sample = [84, 2, -9, 42, 10, -10, 17, 54, 3];

    assert_eq!(keep_lower_than_ten_loop(&sample), vec![2, -9, -10, 3]);
    assert_eq!(keep_lower_than_ten_filter(&sample), vec![2, -9, -10, 3]);
    assert_eq!(keep_lower_than(&sample, 10), vec![2, -9, -10, 3]);
    assert_eq!(negate_all(&[1, -2]).unwrap(), vec![-1, 2]);

    let kept = keep_lower_than(&sample, 10);
    assert_eq!(array_sum(&kept).unwrap(), Some(-14));
    assert_eq!(sum_with_initial(&[3, 5, -1, 6, 12], 0).unwrap(), 25);
}

#[test]
fn test_most_common_letter_examples() {
    assert_eq!(
        most_common_letter(&["hello", "how are you", "not bad", "foo", "bar", "summary"]),
        Some('o')
    );
    assert_eq!(most_common_letter(&["AAA", "aaa"]), Some('a'));
    assert_eq!(most_common_letter::<&str>(&[]), None);
    assert_eq!(most_common_letter(&["  ", "?!", "42"]), None);

    let owned = vec![String::from("Mississippi")];
    assert_eq!(most_common_letter(&owned), Some('i'));
}

#[test]
fn test_tally_built_incrementally() {
    let tally = ["ab", "B", "c!"]
        .iter()
        .fold(LetterTally::new(), |tally, word| tally.add_str(word));
    assert_eq!(tally.count('b'), 2);
    assert_eq!(tally.total(), 4);
    assert_eq!(tally.most_common(), Some('b'));
}
