//! Dataset to CNF to solver, and reading the model back

use sat_dtree::dataset::Dataset;
use sat_dtree::encoding::{compute_ordering, Encoder, VarKind};
use sat_dtree::feature::Feature;
use sat_dtree::solver::{Options, Solver};
use sat_dtree::value::Value;

fn dataset() -> Dataset {
    let features = vec![
        Feature::numeric("age"),
        Feature::categorical("color", ["red", "blue"]),
    ];
    let rows: Vec<Vec<Value>> = vec![
        vec![25.into(), "red".into()],
        vec![35.into(), "blue".into()],
        vec![30.into(), "red".into()],
        vec![35.into(), "red".into()],
    ];
    let labels = ["yes", "no", "yes", "no"].map(String::from).to_vec();
    Dataset::new(features, rows, labels).unwrap()
}

#[test]
fn test_encoding_is_satisfiable() {
    let dataset = dataset();
    let branching = [1, 2, 3];
    let mut encoder = Encoder::new();
    let cnf = encoder.encode(&dataset, &branching).unwrap();

    let solution = Solver::new(Options { check_model: true }).solve(&cnf).unwrap();
    assert!(solution.is_sat());
    assert_eq!(solution.statistics().num_variables() as usize, encoder.vars().len());

    let model = solution.model().unwrap();
    let features = dataset.feature_indices();

    for &t in &branching {
        let chosen: Vec<usize> = features
            .iter()
            .copied()
            .filter(|&j| {
                let var = encoder.vars().get(VarKind::FeatureChoice, t, j).unwrap();
                model.lit_value(var)
            })
            .collect();
        assert_eq!(chosen.len(), 1, "node {} must pick one feature", t);

        // routing respects the chosen feature's order
        let j = chosen[0];
        for (i, i_prime) in compute_ordering(dataset.rows(), j).unwrap() {
            let s = encoder.vars().get(VarKind::Route, i, t).unwrap();
            let s_prime = encoder.vars().get(VarKind::Route, i_prime, t).unwrap();
            assert!(model.lit_value(s) || !model.lit_value(s_prime));
            if dataset.rows()[i][j] == dataset.rows()[i_prime][j] {
                assert_eq!(model.lit_value(s), model.lit_value(s_prime));
            }
        }
    }

    let keys = model.true_keys(encoder.vars());
    assert_eq!(
        keys.iter().filter(|k| k.kind == VarKind::FeatureChoice).count(),
        branching.len()
    );
}

#[test]
fn test_no_features_is_unsat() {
    let mut encoder = Encoder::new();
    let cnf = encoder.choose_one_feature_at_branching(&[1], &[]).unwrap();
    let solution = Solver::new(Options::default()).solve(&cnf).unwrap();
    assert!(solution.is_unsat());
}

#[test]
fn test_dimacs_header() {
    let mut encoder = Encoder::new();
    let cnf = encoder.choose_one_feature_at_branching(&[1, 2, 3], &[1, 2]).unwrap();
    let text = cnf.to_string();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("p cnf 6 6"));
    assert!(lines.all(|l| l.ends_with(" 0")));
}
