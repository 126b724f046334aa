//! Maximum clique solver executable.

use clap::{App, load_yaml};

use clique_lp::instance::Instance;
use clique_lp::coloring::DEFAULT_STRATEGIES;
use clique_lp::search::clique_bnb::{BranchAndBound, SearchStatus};
use clique_lp::util::{export_results, read_params};

/**
reads a DIMACS instance and computes its maximum clique by branch-and-bound
over the LP relaxation, under the given time limit.
*/
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = match read_params(&main_args) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    // read instance file
    println!("=========================================================");
    println!("reading instance: {}...", params.path);
    let instance = match Instance::from_file(params.path.as_str()) {
        Ok(instance) => instance,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    instance.display_statistics();
    println!("time limit: {}", params.time);
    println!("=======================");
    // solve it
    let mut engine = BranchAndBound::with_config(&instance, &DEFAULT_STRATEGIES, params.branching);
    let result = engine.solve(params.time);
    println!(
        "branch and bound took {:.3} seconds. Nodes explored: {}",
        result.elapsed, result.nodes_explored
    );
    match result.status {
        SearchStatus::TimeLimit => println!("Timed out!"),
        SearchStatus::Optimal => {
            println!("Maximum clique size: {}", result.size);
            let nodes: Vec<usize> = result.clique.iter().map(|v| v + 1).collect();
            println!("Nodes: {:?}", nodes);
        }
    }
    // export results
    export_results(&instance, params.path.as_str(), &result, params.perf, params.solution);
}
