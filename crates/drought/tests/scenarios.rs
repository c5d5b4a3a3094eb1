//! Integration tests: drought scenarios over yearly averages.

use std::collections::BTreeMap;

use rainstat_drought::{MIN_RUN_LENGTH, detect_droughts};

fn series(values: &[i64]) -> BTreeMap<String, i64> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("{}", 1900 + i), *v))
        .collect()
}

#[test]
fn runs_never_shorter_than_minimum() {
    let values = [3, 1, 1, 8, 1, 1, 1, 1, 9, 0, 9, 0, 0, 0, 7, 2, 2];
    let a = detect_droughts(&series(&values)).unwrap();
    assert!(!a.runs().is_empty());
    for run in a.runs() {
        assert!(run.len() >= MIN_RUN_LENGTH);
    }
}

#[test]
fn run_members_are_contiguous_and_below_average() {
    let values = [5, 1, 1, 1, 1, 9, 9, 2, 2, 2, 9];
    let avgs = series(&values);
    let a = detect_droughts(&avgs).unwrap();
    let years: Vec<&String> = avgs.keys().collect();

    for run in a.runs() {
        let first = years.iter().position(|y| *y == run.first_year()).unwrap();
        let last = years.iter().position(|y| *y == run.last_year()).unwrap();
        assert_eq!(last - first + 1, run.len());
        for y in &years[first..=last] {
            assert!(avgs[*y] < a.multi_annual_average());
        }
    }
}

#[test]
fn drought_lasting_to_end_of_record_is_kept() {
    // avg = (30 + 1*5) / 6 = 5; the five trailing years form one run.
    let a = detect_droughts(&series(&[30, 1, 1, 1, 1, 1])).unwrap();
    assert_eq!(a.multi_annual_average(), 5);
    assert_eq!(a.runs().len(), 1);
    assert_eq!(a.runs()[0].len(), 5);
    assert_eq!(a.runs()[0].last_year(), "1905");
}

#[test]
fn single_year_has_no_drought() {
    let a = detect_droughts(&series(&[4])).unwrap();
    assert_eq!(a.multi_annual_average(), 4);
    assert!(a.runs().is_empty());
}
