//! Property tests for the search, filter and sort transforms.

use proptest::prelude::*;
use scrutin_core::prelude::*;

const REGIONS: &[&str] = &["Ouest", "Est", "Nord", "Centrale", "Australe"];

fn record_strategy() -> impl Strategy<Value = DynRecord> {
    (
        "[a-z]{1,6}",
        "[A-Za-zéèôç' ]{1,12}",
        prop::sample::select(REGIONS),
        prop::option::of(1990i64..2030),
    )
        .prop_map(|(id, name, region, year)| {
            let record = DynRecord::new(id, name).with("region", region);
            match year {
                Some(y) => record.with("year", y),
                None => record,
            }
        })
}

fn records() -> impl Strategy<Value = Vec<DynRecord>> {
    prop::collection::vec(record_strategy(), 0..30)
}

fn is_subsequence(sub: &[DynRecord], of: &[DynRecord]) -> bool {
    let mut rest = of.iter();
    sub.iter().all(|s| rest.any(|o| o == s))
}

fn mode_strategy() -> impl Strategy<Value = SortMode> {
    prop::sample::select(vec![SortMode::Alphabetic, SortMode::Date, SortMode::Relevance])
}

proptest! {
    #[test]
    fn blank_query_is_identity(items in records(), pad in " {0,3}") {
        prop_assert_eq!(search_items(&items, &["name"], &pad), items);
    }

    #[test]
    fn search_keeps_order_and_only_matches(items in records(), q in "[a-z]{1,3}") {
        let out = search_items(&items, &["name"], &q);
        prop_assert!(is_subsequence(&out, &items));
        for r in &out {
            prop_assert!(r.name_contains(&q));
        }
    }

    #[test]
    fn empty_filter_is_identity(items in records()) {
        prop_assert_eq!(filter_items(&items, &FilterSpec::new()), items);
    }

    #[test]
    fn region_filter_is_exact_subsequence(
        items in records(),
        allowed in prop::collection::btree_set(prop::sample::select(REGIONS), 1..3),
    ) {
        let spec = FilterSpec::new().regions(allowed.iter().copied());
        let out = filter_items(&items, &spec);
        prop_assert!(is_subsequence(&out, &items));
        let expected = items
            .iter()
            .filter(|r| matches!(r.field("region"), Some(FieldValue::Text(v)) if allowed.contains(v)))
            .count();
        prop_assert_eq!(out.len(), expected);
    }

    #[test]
    fn year_range_bounds_hold(items in records(), a in 1990i64..2030, b in 1990i64..2030) {
        let (lo, hi) = (a.min(b), a.max(b));
        let out = filter_items(&items, &FilterSpec::new().year_range(YearRange::between(lo, hi)));
        for r in &out {
            let year = r.number("year");
            prop_assert!(year.is_some());
            let year = year.unwrap_or_default();
            prop_assert!(year >= lo as f64 && year <= hi as f64);
        }
    }

    #[test]
    fn sort_is_a_permutation(items in records(), mode in mode_strategy()) {
        let out = sort_items(&items, mode);
        prop_assert_eq!(out.len(), items.len());
        for r in &items {
            let want = items.iter().filter(|x| *x == r).count();
            let got = out.iter().filter(|x| *x == r).count();
            prop_assert_eq!(want, got);
        }
    }

    #[test]
    fn sort_is_idempotent(items in records(), mode in mode_strategy()) {
        let once = sort_items(&items, mode);
        let twice = sort_items(&once, mode);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn relevance_keeps_input_order(items in records()) {
        prop_assert_eq!(sort_items(&items, SortMode::Relevance), items);
    }

    #[test]
    fn date_sort_is_oldest_first(items in records()) {
        let out = sort_items(&items, SortMode::Date);
        let years: Vec<f64> = out.iter().map(|r| r.number("year").unwrap_or(0.0)).collect();
        prop_assert!(years.windows(2).all(|w| w[0] <= w[1]));
    }
}
