use crate::extract::tests::utils::{arb_ragged, arb_row, data_file, run_into};
use proptest::prelude::*;
use proptest::proptest;

proptest! {
    #[test]
    fn output_is_sorted_and_counts_match(rows in prop::collection::vec(arb_row(), 1..40)) {
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let file = data_file(&row_refs);
        let (result, out, diag) = run_into(&[file.path().to_path_buf()]);
        prop_assert!(result.is_ok());

        let intervals: Vec<(i64, i64)> = out.lines()
            .map(|line| {
                let (start, end) = line.split_once(' ').unwrap();
                (start.parse().unwrap(), end.parse().unwrap())
            })
            .collect();

        prop_assert_eq!(intervals.len(), rows.len());
        for (start, end) in &intervals {
            prop_assert!(end >= start, "interval ends before it starts: {} {}", start, end);
        }
        for pair in intervals.windows(2) {
            prop_assert!(pair[0] <= pair[1], "out of order: {:?} then {:?}", pair[0], pair[1]);
        }
        let count_line = format!("\n{}\n", rows.len());
        prop_assert!(diag.ends_with(&count_line));
    }

    #[test]
    fn ragged_lines_never_contribute(
        mix in prop::collection::vec((any::<bool>(), arb_row(), arb_ragged()), 1..30)
    ) {
        let rows: Vec<&str> = mix.iter()
            .map(|(keep, good, bad)| if *keep { good.as_str() } else { bad.as_str() })
            .collect();
        let expected = mix.iter().filter(|(keep, _, _)| *keep).count();

        let file = data_file(&rows);
        let (result, out, _diag) = run_into(&[file.path().to_path_buf()]);
        prop_assert!(result.is_ok());
        prop_assert_eq!(out.lines().count(), expected);
    }
}
