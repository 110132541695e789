use approx::assert_relative_eq;

use numkit_expr::Expression;

use crate::equation::bisection;

use super::{Action, Config, Error, Record, Status, solve, solve_unobserved};

/// Real root of x³ - x - 2.
const CUBIC_ROOT: f64 = 1.521_379_706_804_567_6;

fn formula(source: &str) -> Expression {
    Expression::parse(source).expect("formula should parse")
}

fn config(max_iters: usize, tolerance: f64) -> Config {
    Config::new(max_iters, tolerance).expect("valid config")
}

#[test]
fn finds_cubic_root_faster_than_bisection() {
    let f = formula("x^3 - x - 2");

    let solution = solve_unobserved(&f, [1.0, 2.0], &config(100, 1e-4)).expect("should solve");
    let bisected =
        bisection::solve_unobserved(&f, [1.0, 2.0], &config(100, 1e-4)).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, CUBIC_ROOT, epsilon = 1e-6);
    assert_relative_eq!(solution.root, bisected.root, epsilon = 1e-4);
    assert!(solution.iters() < bisected.iters());

    let last = solution.trace.last().expect("at least one record");
    assert_relative_eq!(solution.root, last.x2);
    assert!(last.error < 1e-4);
}

#[test]
fn first_record_matches_hand_computation() {
    let f = formula("x^3 - x - 2");

    let solution = solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect("should solve");
    let first = solution.trace.first().expect("at least one record");

    // x2 = 2 - 4 * (2 - 1) / (4 - (-2))
    assert_eq!(first.iter, 1);
    assert_relative_eq!(first.x0, 1.0);
    assert_relative_eq!(first.x1, 2.0);
    assert_relative_eq!(first.fx0, -2.0);
    assert_relative_eq!(first.fx1, 4.0);
    assert_relative_eq!(first.x2, 4.0 / 3.0);
    assert_relative_eq!(first.error, 2.0 / 3.0);
}

#[test]
fn points_shift_between_iterations() {
    let f = formula("x^3 - x - 2");

    let solution = solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect("should solve");

    for pair in solution.trace.as_slice().windows(2) {
        assert_eq!(pair[1].iter, pair[0].iter + 1);
        assert_eq!(pair[1].x0, pair[0].x1);
        assert_eq!(pair[1].x1, pair[0].x2);
    }
}

#[test]
fn constant_function_is_degenerate_at_first_iteration() {
    let f = formula("5");

    let result = solve_unobserved(&f, [0.0, 1.0], &Config::default());

    let Err(err) = result else {
        panic!("expected degenerate secant");
    };
    assert!(matches!(err, Error::Degenerate { iter: 1, .. }));
    assert!(err.trace().is_some_and(|trace| trace.is_empty()));
}

#[test]
fn equal_starting_points_are_degenerate() {
    let f = formula("x^2 - 2");

    let result = solve_unobserved(&f, [1.0, 1.0], &Config::default());

    assert!(matches!(result, Err(Error::Degenerate { iter: 1, .. })));
}

#[test]
fn degenerate_keeps_partial_trace() {
    // The first step jumps from x = 1 to x = -1, where f takes the same value.
    let f = formula("abs(x) + 1");

    let result = solve_unobserved(&f, [3.0, 1.0], &Config::default());

    let Err(err) = result else {
        panic!("expected degenerate secant");
    };
    assert!(matches!(err, Error::Degenerate { iter: 2, .. }));
    assert_eq!(err.trace().map(|trace| trace.len()), Some(1));
}

#[test]
fn errors_on_non_finite_start() {
    let f = formula("1/x");

    let result = solve_unobserved(&f, [0.0, 1.0], &Config::default());

    let Err(err) = result else {
        panic!("expected non-finite value");
    };
    assert!(matches!(err, Error::NonFiniteValue { x, .. } if x == 0.0));
    assert!(err.trace().is_some_and(|trace| trace.is_empty()));

    let result = solve_unobserved(&f, [f64::NAN, 1.0], &Config::default());
    assert!(matches!(result, Err(Error::NonFinitePoint { .. })));
}

#[test]
fn errors_when_iterate_leaves_domain() {
    // From 4 and 9 the first step lands on x = -1, where sqrt is undefined.
    let f = formula("sqrt(x) - 1");

    let result = solve_unobserved(&f, [4.0, 9.0], &Config::default());

    let Err(err) = result else {
        panic!("expected non-finite value");
    };
    assert!(matches!(err, Error::NonFiniteValue { x, value, .. } if x == -1.0 && value.is_nan()));
    let trace = err.trace().expect("partial trace");
    assert_eq!(trace.len(), 1);
    assert_relative_eq!(trace.as_slice()[0].x2, -1.0);
}

#[test]
fn max_iters_returns_partial_trace() {
    let f = formula("x^3 - x - 2");

    let solution = solve_unobserved(&f, [1.0, 2.0], &config(2, 1e-12)).expect("soft failure");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters(), 2);
    let last = solution.trace.last().expect("two records");
    assert_relative_eq!(solution.root, last.x2);
}

#[test]
fn observer_can_stop_iteration() {
    let f = formula("x^3 - x - 2");

    let mut calls = 0usize;
    let observer = |record: &Record| {
        calls += 1;
        (record.iter == 2).then_some(Action::StopEarly)
    };

    let solution = solve(&f, [1.0, 2.0], &config(100, 1e-12), observer).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters(), 2);
    assert_eq!(calls, 2);
}

#[test]
fn identical_inputs_give_identical_results() {
    let f = formula("exp(-x) - x");

    let first = solve_unobserved(&f, [0.0, 1.0], &config(100, 1e-10)).expect("should solve");
    let second = solve_unobserved(&f, [0.0, 1.0], &config(100, 1e-10)).expect("should solve");

    assert_eq!(first, second);
    assert_relative_eq!(first.root, 0.567_143_290_409_783_8, epsilon = 1e-9);
}
