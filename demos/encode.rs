//! Encodes the feature-choice and ordering constraints for a small dataset,
//! prints the formula in DIMACS form and asks batsat whether it is satisfiable.

use log::LevelFilter;
use sat_dtree::dataset::Dataset;
use sat_dtree::encoding::Encoder;
use sat_dtree::feature::Feature;
use sat_dtree::solver::{Options, Solver};
use sat_dtree::value::Value;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

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
    let dataset = Dataset::new(features, rows, labels)?;

    let branching = [1, 2, 3];
    let mut encoder = Encoder::new();
    let cnf = encoder.encode(&dataset, &branching)?;
    print!("{}", cnf);

    let solution = Solver::new(Options::default()).solve(&cnf)?;
    println!("{}", solution.is_sat());

    if let Some(model) = solution.model() {
        for key in model.true_keys(encoder.vars()) {
            println!("  {}", key);
        }
    }

    Ok(())
}
