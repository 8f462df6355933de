use std::env;
use std::process;

use descent_viz::{DefaultsDocument, Gradient, ParamMap, Run, Vec2};

// Demo host loop: descend an elliptic bowl and print the path.
const START: [f64; 2] = [2.0, -1.5];
const STEPS: usize = 50;

// f(x, y) = x^2 + 2*y^2
fn bowl(p: Vec2) -> Vec2 {
    Vec2::new(2.0 * p.x, 4.0 * p.y)
}

fn main() {
    // Usage: descent_demo <algorithm> [defaults.json]
    let args: Vec<String> = env::args().collect();
    let algorithm = args.get(1).map(String::as_str).unwrap_or("sgd");

    // Effective parameters: document defaults when a document is given,
    // built-in defaults otherwise.
    let params = match args.get(2) {
        Some(path) => {
            let document = match DefaultsDocument::load(path) {
                Ok(document) => document,
                Err(err) => {
                    eprintln!("error: {err}");
                    process::exit(1);
                }
            };
            match algorithm.parse() {
                Ok(algorithm) => document.defaults_for(algorithm),
                Err(_) => ParamMap::new(),
            }
        }
        None => ParamMap::new(),
    };

    let mut run = match Run::from_name(algorithm, START, params) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    println!(
        "descending f(x, y) = x^2 + 2y^2 with {} from ({}, {})",
        run.algorithm(),
        START[0],
        START[1]
    );

    for _ in 0..STEPS {
        run.step(&Gradient::Function(&bowl));
    }

    for (i, p) in run.history().iter().enumerate() {
        println!("step {i:3}: ({:+.6}, {:+.6})", p.x, p.y);
    }

    if run.skipped_steps() > 0 {
        println!("skipped {} non-finite updates", run.skipped_steps());
    }
}
