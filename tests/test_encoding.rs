//! Structural and semantic properties of the generated clauses

use sat_dtree::cnf::CNF;
use sat_dtree::encoding::{compute_ordering, Encoder, VarKind};
use sat_dtree::solver::{Options, Solver};
use sat_dtree::value::Value;

fn solve(cnf: &CNF) -> bool {
    Solver::new(Options::default()).solve(cnf).unwrap().is_sat()
}

fn with_units(cnf: &CNF, units: &[i32]) -> CNF {
    let mut out = cnf.clone();
    for &lit in units {
        out.add_clause(vec![lit]);
    }
    out
}

fn rows(values: &[f64]) -> Vec<Vec<Value>> {
    values.iter().map(|&x| vec![Value::from(x)]).collect()
}

#[test]
fn test_two_features_one_node() {
    let mut encoder = Encoder::new();
    let cnf = encoder.choose_one_feature_at_branching(&[1], &[1, 2]).unwrap();

    assert_eq!(cnf.num_clauses(), 2);
    assert_eq!(cnf.num_variables, 2);
    assert_eq!(encoder.vars().len(), 2);
}

#[test]
fn test_exclusion_and_at_least_one_counts() {
    for num_features in 1..6usize {
        let features: Vec<usize> = (0..num_features).collect();
        let branching = [3, 5, 8];

        let mut encoder = Encoder::new();
        let cnf = encoder.choose_one_feature_at_branching(&branching, &features).unwrap();

        let pairs = num_features * (num_features - 1) / 2;
        let binary = cnf.iter().filter(|c| c.len() == 2 && c.iter().all(|&l| l < 0)).count();
        let wide = cnf
            .iter()
            .filter(|c| c.len() == num_features && c.iter().all(|&l| l > 0))
            .count();

        // a single feature yields a unit clause, counted as "wide"
        assert_eq!(binary, branching.len() * pairs);
        assert_eq!(wide, branching.len());
        assert_eq!(cnf.num_clauses(), branching.len() * (pairs + 1));
    }
}

#[test]
fn test_exactly_one_feature_is_enforced() {
    let mut encoder = Encoder::new();
    let cnf = encoder.choose_one_feature_at_branching(&[0], &[0, 1, 2]).unwrap();
    let a = |j| encoder.vars().get(VarKind::FeatureChoice, 0, j).unwrap();

    assert!(solve(&cnf));
    assert!(solve(&with_units(&cnf, &[a(1)])));
    assert!(!solve(&with_units(&cnf, &[a(0), a(2)])));
    assert!(!solve(&with_units(&cnf, &[-a(0), -a(1), -a(2)])));
}

#[test]
fn test_ordering_pairs_are_sorted() {
    let data = rows(&[4.0, -1.0, 3.5, 3.5, 0.0, 10.0]);
    let ordering = compute_ordering(&data, 0).unwrap();

    assert_eq!(ordering.len(), data.len() - 1);
    for &(i, i_prime) in &ordering {
        assert!(data[i][0] <= data[i_prime][0]);
    }
    // consecutive pairs chain into one permutation
    for w in ordering.windows(2) {
        assert_eq!(w[0].1, w[1].0);
    }
}

#[test]
fn test_ordering_mixed_values() {
    let data = vec![
        vec![Value::from("b")],
        vec![Value::from(2)],
        vec![Value::from("a")],
        vec![Value::from(1)],
    ];
    assert_eq!(compute_ordering(&data, 0).unwrap(), vec![(3, 1), (1, 2), (2, 0)]);
}

#[test]
fn test_monotone_routing() {
    // row 0 < row 1 on feature 0
    let data = rows(&[1.0, 2.0]);
    let mut encoder = Encoder::new();
    let cnf = encoder.enforce_ordering_at_branching(&[7], &[0], &data).unwrap();

    let a = encoder.vars().get(VarKind::FeatureChoice, 7, 0).unwrap();
    let s0 = encoder.vars().get(VarKind::Route, 0, 7).unwrap();
    let s1 = encoder.vars().get(VarKind::Route, 1, 7).unwrap();

    // the larger point cannot go left while the smaller goes right
    assert!(!solve(&with_units(&cnf, &[a, -s0, s1])));
    // threshold between them
    assert!(solve(&with_units(&cnf, &[a, s0, -s1])));
    // both on the same side
    assert!(solve(&with_units(&cnf, &[a, s0, s1])));
    assert!(solve(&with_units(&cnf, &[a, -s0, -s1])));
    // another feature chosen: no restriction
    assert!(solve(&with_units(&cnf, &[-a, -s0, s1])));
}

#[test]
fn test_ties_route_together() {
    let data = rows(&[5.0, 5.0]);
    let mut encoder = Encoder::new();
    let cnf = encoder.enforce_ordering_at_branching(&[0], &[0], &data).unwrap();

    let a = encoder.vars().get(VarKind::FeatureChoice, 0, 0).unwrap();
    let s0 = encoder.vars().get(VarKind::Route, 0, 0).unwrap();
    let s1 = encoder.vars().get(VarKind::Route, 1, 0).unwrap();

    assert!(!solve(&with_units(&cnf, &[a, s0, -s1])));
    assert!(!solve(&with_units(&cnf, &[a, -s0, s1])));
    assert!(solve(&with_units(&cnf, &[a, s0, s1])));
    assert!(solve(&with_units(&cnf, &[a, -s0, -s1])));
    assert!(solve(&with_units(&cnf, &[-a, s0, -s1])));
}

#[test]
fn test_monotonicity_is_transitive() {
    // 1 < 2 < 3: first goes right, last goes left is impossible even though
    // they are not adjacent in the order
    let data = rows(&[3.0, 1.0, 2.0]);
    let mut encoder = Encoder::new();
    let cnf = encoder.enforce_ordering_at_branching(&[0], &[0], &data).unwrap();

    let a = encoder.vars().get(VarKind::FeatureChoice, 0, 0).unwrap();
    let smallest = encoder.vars().get(VarKind::Route, 1, 0).unwrap();
    let largest = encoder.vars().get(VarKind::Route, 0, 0).unwrap();

    assert!(!solve(&with_units(&cnf, &[a, -smallest, largest])));
    assert!(solve(&with_units(&cnf, &[a, smallest, -largest])));
}

#[test]
fn test_routing_per_node_is_independent() {
    let data = rows(&[1.0, 2.0]);
    let mut encoder = Encoder::new();
    let cnf = encoder.enforce_ordering_at_branching(&[0, 1], &[0], &data).unwrap();

    let route = |i, t| encoder.vars().get(VarKind::Route, i, t).unwrap();
    let a0 = encoder.vars().get(VarKind::FeatureChoice, 0, 0).unwrap();

    // node 1 has feature 0 unchosen, so it may route against the order
    assert!(solve(&with_units(&cnf, &[a0, route(0, 0), -route(1, 0), -route(0, 1), route(1, 1)])));
}

#[test]
fn test_variable_ids_are_shared_between_families() {
    let data = rows(&[1.0, 2.0, 3.0]);
    let mut encoder = Encoder::new();
    let choose = encoder.choose_one_feature_at_branching(&[0, 1], &[0]).unwrap();
    let before = encoder.vars().len();
    let order = encoder.enforce_ordering_at_branching(&[0, 1], &[0], &data).unwrap();

    // a(t,0) already exists, only s(i,t) are new
    assert_eq!(before, 2);
    assert_eq!(encoder.vars().len(), 2 + 3 * 2);
    assert_eq!(choose.clauses[0], vec![1]);
    assert_eq!(order.clauses[0][0], -1);
}
