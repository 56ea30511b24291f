use proptest::prelude::*;
use seqstats::statistics::Accumulator;
use seqstats::summary::{average, median, median_sorted, sum, Summary};
use seqstats::traits::Reducer;

fn arb_value() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

/// Values spread over the whole finite range, with weight near the extremes
fn arb_wide() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6..1.0e6f64,
        1.0e307..f64::MAX,
        -f64::MAX..-1.0e307,
        Just(f64::MAX),
        Just(f64::MIN),
    ]
}

fn arb_sorted(
    values: impl Strategy<Value = f64>,
    max_len: usize,
) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(values, 1..max_len).prop_map(|mut v| {
        v.sort_by(f64::total_cmp);
        v
    })
}

proptest! {
    #[test]
    fn median_of_sorted_is_the_middle(v in arb_sorted(arb_wide(), 64)) {
        let n = v.len();
        let m = median(&v).unwrap();
        prop_assert_eq!(median_sorted(&v), Ok(m));

        if n % 2 == 1 {
            prop_assert_eq!(m, v[(n - 1) / 2]);
        } else {
            let (a, b) = (v[n / 2 - 1], v[n / 2]);
            // Halving first cannot overflow
            let expected = a / 2.0 + b / 2.0;
            let tolerance = 2.0 * f64::EPSILON * a.abs().max(b.abs()) + f64::MIN_POSITIVE;
            prop_assert!(
                (m - expected).abs() <= tolerance,
                "median {} of middle pair ({}, {}) expected {}",
                m,
                a,
                b,
                expected
            );
        }
    }

    #[test]
    fn median_ignores_input_order(v in arb_sorted(arb_value(), 64), seed in any::<u64>()) {
        // Deterministic rotation plus reversal stands in for a shuffle.
        let mut shuffled = v.clone();
        let k = (seed as usize) % shuffled.len();
        shuffled.rotate_left(k);
        if seed & 1 == 1 {
            shuffled.reverse();
        }
        prop_assert_eq!(median(&shuffled), median(&v));
    }

    #[test]
    fn median_lies_between_extremes(v in prop::collection::vec(arb_wide(), 1..64)) {
        let m = median(&v).unwrap();
        let lo = v.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(m.is_finite(), "median {} of finite input is not finite", m);
        prop_assert!(lo <= m && m <= hi, "median {} outside [{}, {}]", m, lo, hi);
    }

    #[test]
    fn summary_median_within_min_max(v in prop::collection::vec(arb_wide(), 1..64)) {
        let s = Summary::of(&v).unwrap();
        prop_assert!(s.min <= s.median && s.median <= s.max);
    }

    #[test]
    fn average_times_len_is_sum(v in prop::collection::vec(arb_value(), 1..64)) {
        let avg = average(&v).unwrap();
        let total = sum(&v);
        let scale = 1.0 + v.iter().map(|x| x.abs()).sum::<f64>();
        prop_assert!((avg * v.len() as f64 - total).abs() <= 1e-9 * scale);
    }

    #[test]
    fn merge_is_associative(
        a in prop::collection::vec(arb_value(), 0..32),
        b in prop::collection::vec(arb_value(), 0..32),
        c in prop::collection::vec(arb_value(), 0..32),
    ) {
        let (ra, rb, rc): (Accumulator, Accumulator, Accumulator) =
            (a.iter().collect(), b.iter().collect(), c.iter().collect());

        let mut left = ra.clone();
        left.merge(&rb);
        left.merge(&rc);

        let mut bc = rb.clone();
        bc.merge(&rc);
        let mut right = ra.clone();
        right.merge(&bc);

        prop_assert_eq!(left.count(), right.count());
        prop_assert_eq!(left.min(), right.min());
        prop_assert_eq!(left.max(), right.max());
        let scale = 1.0 + left.sum().abs() + right.sum().abs();
        prop_assert!((left.sum() - right.sum()).abs() <= 1e-9 * scale);
    }
}
