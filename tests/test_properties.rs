//! Property-based tests over the script-generation invariants.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;

use latgen::generator::generate;
use latgen::script::format_float;
use latgen::types::GenerationRequest;

static CASE_ID: AtomicUsize = AtomicUsize::new(0);

/// Fresh /tmp destination per proptest case.
fn case_dir() -> PathBuf {
    let id = CASE_ID.fetch_add(1, Ordering::Relaxed);
    PathBuf::from(format!(
        "/tmp/latgen_prop_{}_{}",
        std::process::id(),
        id
    ))
}

fn coeff_strategy() -> impl Strategy<Value = f64> {
    (-1000i32..=1000).prop_map(|v| v as f64 / 1000.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Script shape: exactly one init/steps/exit, N img+csv dumps,
    // N*D sim/count pairs, and nothing else.
    #[test]
    fn script_line_counts(
        iterations in 1u32..6,
        dumps in 1u32..6,
        time in 1u32..400u32,
        a in prop::array::uniform3(coeff_strategy()),
        b in prop::array::uniform3(coeff_strategy()),
    ) {
        let dest = case_dir();
        let time_per_iteration = time as f64 / 100.0;
        let req = GenerationRequest {
            dest: dest.clone(),
            iterations,
            time_per_iteration,
            dumps_per_iteration: dumps,
            alpha: a,
            beta: b,
            lattice_size: "45".to_string(),
        };
        generate(&req).unwrap();

        let script = fs::read_to_string(dest.join("input.txt")).unwrap();
        let count = |p: &str| script.lines().filter(|l| l.starts_with(p)).count();

        let n = iterations as usize;
        let d = dumps as usize;
        prop_assert_eq!(count("init "), 1);
        prop_assert_eq!(count("dump img "), n);
        prop_assert_eq!(count("dump csv "), n);
        prop_assert_eq!(count("sim "), n * d);
        prop_assert_eq!(count("dump count "), n * d);
        prop_assert_eq!(count("dump steps "), 1);
        prop_assert_eq!(script.lines().count(), 1 + n * (2 * d + 2) + 2);
        prop_assert_eq!(script.lines().last(), Some("exit"));

        // Every sim line advances exactly time/dumps
        let expected_sim = format!("sim {}", format_float(time_per_iteration / dumps as f64));
        for line in script.lines().filter(|l| l.starts_with("sim ")) {
            prop_assert_eq!(line, expected_sim.as_str());
        }

        // One img directory per iteration, zero-based
        for i in 0..n {
            let img_dir = dest.join(format!("img{}", i));
            prop_assert!(img_dir.is_dir());
        }
        let img_past_end = dest.join(format!("img{}", n));
        prop_assert!(!img_past_end.exists());

        fs::remove_dir_all(&dest).unwrap();
    }

    // The init line carries size then the six coefficients, as supplied.
    #[test]
    fn init_tokens_round_trip(
        a in prop::array::uniform3(coeff_strategy()),
        b in prop::array::uniform3(coeff_strategy()),
    ) {
        let dest = case_dir();
        let req = GenerationRequest {
            dest: dest.clone(),
            iterations: 1,
            time_per_iteration: 0.25,
            dumps_per_iteration: 1,
            alpha: a,
            beta: b,
            lattice_size: "45".to_string(),
        };
        generate(&req).unwrap();

        let script = fs::read_to_string(dest.join("input.txt")).unwrap();
        let init = script.lines().next().unwrap();
        let tokens: Vec<&str> = init.split_whitespace().collect();

        prop_assert_eq!(tokens.len(), 8);
        prop_assert_eq!(tokens[0], "init");
        prop_assert_eq!(tokens[1], "45");
        for i in 0..3 {
            prop_assert_eq!(tokens[2 + i].parse::<f64>().unwrap(), a[i]);
            prop_assert_eq!(tokens[5 + i].parse::<f64>().unwrap(), b[i]);
        }

        fs::remove_dir_all(&dest).unwrap();
    }
}
