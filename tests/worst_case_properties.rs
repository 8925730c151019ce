use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use worstcase_bench::bench::data::{generate, reverse, worst_case_target};
use worstcase_bench::{BaseArray, BenchConfig, Harness, binary_search, bubble_sort, linear_search};

fn random_vec(rng: &mut StdRng, len: usize, bound: i32) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..bound)).collect()
}

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

#[test]
fn qa_linear_search_worst_case_on_reference_prefixes() {
    let base = generate(1_000_000, 12345, 1_000_000).unwrap();
    for n in [1_000, 10_000, 100_000] {
        let prefix = &base[..n];
        let target = worst_case_target(prefix);
        assert_eq!(linear_search(prefix, target), Some(n - 1), "n={}", n);
    }

    // The last value of the full array also appears earlier, so the first match wins.
    let target = worst_case_target(&base);
    let idx = linear_search(&base, target).unwrap();
    assert_eq!(base[idx], target);
    assert!(!base[..idx].contains(&target));
}

#[test]
fn qa_bubble_sort_orders_and_permutes() {
    let mut rng = StdRng::seed_from_u64(0xB0B);
    for len in [0, 1, 2, 3, 17, 256, 1_000] {
        let input = random_vec(&mut rng, len, 100);
        let mut work = input.clone();
        bubble_sort(&mut work);

        assert!(work.windows(2).all(|w| w[0] <= w[1]), "len={}", len);
        assert_eq!(work, sorted_copy(&input), "len={}", len);
    }
}

#[test]
fn qa_bubble_sort_reversed_reference_prefix() {
    let base = BaseArray::generate(10_000, 12345, 1_000_000).unwrap();
    let mut work = base.working_copy(10_000).unwrap();
    reverse(&mut work);
    bubble_sort(&mut work);
    assert_eq!(work, sorted_copy(base.prefix(10_000)));
}

#[test]
fn qa_binary_search_finds_maximum() {
    let mut rng = StdRng::seed_from_u64(42);
    for len in [1, 2, 5, 64, 999] {
        let mut work = random_vec(&mut rng, len, 50);
        bubble_sort(&mut work);
        let max = worst_case_target(&work);
        let idx = binary_search(&work, 0, len - 1, max).unwrap();
        assert_eq!(work[idx], max, "len={}", len);
    }
}

#[test]
fn qa_searches_agree_on_present_targets() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut work = random_vec(&mut rng, 500, 200);
    bubble_sort(&mut work);
    let high = work.len() - 1;

    for _ in 0..200 {
        let target = work[rng.gen_range(0..work.len())];
        let li = linear_search(&work, target).unwrap();
        let bi = binary_search(&work, 0, high, target).unwrap();
        assert_eq!(work[li], target);
        assert_eq!(work[bi], target);
        assert!(li <= bi);
    }
}

#[test]
fn qa_searches_report_absent_targets() {
    let mut work = vec![10, 30, 20, 50, 40];
    assert_eq!(linear_search(&work, 35), None);
    bubble_sort(&mut work);
    assert_eq!(binary_search(&work, 0, 4, 35), None);
    assert_eq!(binary_search(&work, 0, 4, 5), None);
    assert_eq!(binary_search(&work, 0, 4, 55), None);
}

#[test]
fn qa_reverse_twice_restores_order() {
    let mut rng = StdRng::seed_from_u64(99);
    for len in [0, 1, 2, 9, 10, 1_001] {
        let original = random_vec(&mut rng, len, 1_000);
        let mut work = original.clone();
        reverse(&mut work);
        reverse(&mut work);
        assert_eq!(work, original);
    }
}

#[test]
fn qa_end_to_end_five_elements() {
    let base = generate(5, 12345, 1_000_000).unwrap();
    let mut work = base.clone();

    assert_eq!(linear_search(&work, worst_case_target(&work)), Some(4));

    bubble_sort(&mut work);
    assert!(work.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(work, sorted_copy(&base));

    let max = worst_case_target(&work);
    assert_eq!(max, *base.iter().max().unwrap());
    assert_eq!(binary_search(&work, 0, 4, max), Some(4));
}

#[test]
fn qa_csv_report_shape() {
    let config = BenchConfig {
        base_len: 2_000,
        sizes: vec![10, 100, 1_000, 2_000],
        ..BenchConfig::default()
    };
    let harness = Harness::new(&config).unwrap();

    let mut out = Vec::new();
    let reports = harness.run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert!(text.ends_with('\n'));
    assert_eq!(lines.len(), config.sizes.len() + 1);
    assert_eq!(
        lines[0],
        "N,Linear_Search_Time_s,Binary_Search_Time_s,Bubble_Sort_Time_s"
    );

    for (line, (&n, report)) in lines[1..].iter().zip(config.sizes.iter().zip(&reports)) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 4, "line={}", line);
        assert_eq!(fields[0].parse::<usize>().unwrap(), n);
        for field in &fields[1..] {
            let (_, frac) = field.split_once('.').unwrap();
            assert_eq!(frac.len(), 6, "field={}", field);
            assert!(field.parse::<f64>().unwrap() >= 0.0);
        }
        assert_eq!(report.binary_index, Some(n - 1));
    }
}

#[test]
fn qa_harness_rejects_size_beyond_base() {
    let base = BaseArray::from_values(vec![1, 2, 3]);
    assert!(Harness::with_base(base, vec![4]).is_err());
}
