//! Property-based tests for collection invariants.

use errmap_core::{ErrorCollection, MatchError};
use proptest::prelude::*;

fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-d]{1,3}", "[a-z ]{0,12}"), 0..40)
}

fn build(entries: &[(String, String)]) -> ErrorCollection {
    let mut errs = ErrorCollection::new();
    for (cat, msg) in entries {
        errs.add_error(cat.as_str(), msg.as_str());
    }
    errs
}

proptest! {
    #[test]
    fn counts_match_entries(entries in entries()) {
        let errs = build(&entries);
        let (total, categories) = errs.count_errors();

        prop_assert_eq!(total, entries.len());
        let mut cats: Vec<&str> = entries.iter().map(|(c, _)| c.as_str()).collect();
        cats.sort_unstable();
        cats.dedup();
        prop_assert_eq!(categories, cats.len());

        let per_category: usize = errs.keys().iter().map(|k| errs.errors(k).len()).sum();
        prop_assert_eq!(per_category, total);
        prop_assert_eq!(errs.has_errors(), total > 0);
    }

    #[test]
    fn reads_are_idempotent(entries in entries()) {
        let errs = build(&entries);
        prop_assert_eq!(errs.summary(), errs.summary());
        prop_assert_eq!(errs.count_errors(), errs.count_errors());
        prop_assert_eq!(errs.report_to_string("run"), errs.report_to_string("run"));
        prop_assert_eq!(errs.matches(&errs), Ok(()));
    }

    #[test]
    fn matches_is_reflexive(entries in entries()) {
        let a = build(&entries);
        let b = build(&entries);
        prop_assert_eq!(a.matches(&b), Ok(()));
    }

    #[test]
    fn category_differences_are_symmetric(left in entries(), right in entries()) {
        let a = build(&left);
        let b = build(&right);
        match a.matches(&b) {
            Err(MatchError::CategoryNamesDiffer { records }) => {
                let back = b.matches(&a);
                let Err(MatchError::CategoryNamesDiffer { records: back_records }) = back else {
                    return Err(TestCaseError::fail("reverse comparison did not report category names"));
                };
                let mut swapped: Vec<String> = records
                    .iter()
                    .map(|r| {
                        if let Some(name) = r.strip_suffix(" in this, not other") {
                            format!("{name} in other, not this")
                        } else {
                            r.replace(" in other, not this", " in this, not other")
                        }
                    })
                    .collect();
                swapped.sort();
                prop_assert_eq!(swapped, back_records);
            }
            Err(MatchError::ErrorDetailsDiffer { .. }) => {
                let details_differ =
                    matches!(b.matches(&a), Err(MatchError::ErrorDetailsDiffer { .. }));
                prop_assert!(details_differ);
            }
            Ok(()) => {
                prop_assert_eq!(b.matches(&a), Ok(()));
            }
        }
    }

    #[test]
    fn report_lists_every_category_once(entries in entries()) {
        let errs = build(&entries);
        let report = errs.report_to_string("");
        let headers: Vec<&str> = report
            .lines()
            .filter(|l| l.starts_with("      ") && !l.starts_with("       "))
            .map(str::trim)
            .collect();

        let mut keys = errs.keys();
        keys.sort_unstable();
        let expected: Vec<String> = keys.iter().map(|k| errs.category_summary(k)).collect();
        prop_assert_eq!(headers, expected);
    }
}

#[test]
fn ten_errors_use_two_digit_ordinals() {
    let mut errs = ErrorCollection::new();
    for i in 0..10 {
        errs.add_error("many", format!("problem {i}"));
    }
    let report = errs.report_to_string("");
    assert!(report.contains("\n             1 : problem 0\n"));
    assert!(report.contains("\n            10 : problem 9\n"));
}

#[test]
fn hundred_errors_use_three_digit_ordinals() {
    let mut errs = ErrorCollection::new();
    for i in 0..100 {
        errs.add_error("many", format!("problem {i}"));
    }
    let report = errs.report_to_string("");
    assert!(report.contains("\n              1 : problem 0\n"));
    assert!(report.contains("\n             10 : problem 9\n"));
    assert!(report.contains("\n            100 : problem 99\n"));
}
