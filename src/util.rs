use std::fs;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use serde::Serialize;

use crate::error::ConfigurationError;
use crate::instance::{checker, Instance};
use crate::search::clique_bnb::{BranchingRule, SearchResult, SearchStatus};

/// parameters of the solver executable
#[derive(Debug)]
pub struct Params {
    /// input graph file
    pub path: String,
    /// wall-clock limit in seconds
    pub time: f32,
    /// branching rule
    pub branching: BranchingRule,
    /// optional clique output file
    pub solution: Option<String>,
    /// optional JSON statistics output file
    pub perf: Option<String>,
}

/** reads command line input for the solver executable */
pub fn read_params(main_args: &ArgMatches) -> Result<Params, ConfigurationError> {
    let path = main_args.value_of("path")
        .ok_or(ConfigurationError::MissingArgument("path"))?
        .to_string();
    let time = read_time(main_args)?;
    let branching = match main_args.value_of("branching") {
        None => BranchingRule::default(),
        Some(rule) => rule.parse::<BranchingRule>()?,
    };
    let solution = main_args.value_of("solution").map(|s| s.to_string());
    let perf = main_args.value_of("perf").map(|s| s.to_string());
    Ok(Params { path, time, branching, solution, perf })
}

/// parameters of the batch report executable
#[derive(Debug)]
pub struct BatchParams {
    /// directory containing the graph files
    pub dir: String,
    /// wall-clock limit per file, in seconds
    pub time: f32,
    /// report output file
    pub output: String,
}

/** reads command line input for the batch report executable */
pub fn read_batch_params(main_args: &ArgMatches) -> Result<BatchParams, ConfigurationError> {
    let dir = main_args.value_of("dir").unwrap_or("test").to_string();
    let time = read_time(main_args)?;
    let output = main_args.value_of("output").unwrap_or("test_results.csv").to_string();
    Ok(BatchParams { dir, time, output })
}

fn read_time(main_args: &ArgMatches) -> Result<f32, ConfigurationError> {
    let raw = main_args.value_of("time").unwrap_or("60");
    let time = raw.parse::<f32>().map_err(|_| ConfigurationError::InvalidValue {
        name: "time", value: raw.to_string(),
    })?;
    if time < 0.0 {
        return Err(ConfigurationError::InvalidValue { name: "time", value: raw.to_string() });
    }
    Ok(time)
}

/// search statistics exported as JSON
#[derive(Debug, Serialize)]
pub struct PerfStats {
    /// instance name
    pub inst_name: String,
    /// size of the best clique found
    pub clique_size: usize,
    /// termination mode
    pub status: SearchStatus,
    /// root relaxation objective
    pub root_bound: Option<f64>,
    /// nodes whose relaxation was solved
    pub nodes_explored: u64,
    /// nodes pruned
    pub nodes_pruned: u64,
    /// search duration (seconds)
    pub time_searched: f32,
}

impl PerfStats {
    /// gathers the exportable statistics of a search
    pub fn new(inst_name: &str, result: &SearchResult) -> Self {
        Self {
            inst_name: inst_name.to_string(),
            clique_size: result.size,
            status: result.status,
            root_bound: result.root_bound,
            nodes_explored: result.nodes_explored,
            nodes_pruned: result.nodes_pruned,
            time_searched: result.elapsed,
        }
    }
}

/// exports search results to files
pub fn export_results(
    instance: &Instance,
    inst_name: &str,
    result: &SearchResult,
    perf_file: Option<String>,
    sol_file: Option<String>,
) {
    // export statistics
    match perf_file {
        None => {},
        Some(filename) => {
            let stats = PerfStats::new(inst_name, result);
            let encoded = serde_json::to_string(&stats)
                .expect("export_results: unable to encode the statistics");
            if let Err(why) = fs::write(filename.as_str(), encoded) {
                panic!("couldn't write {}: {}", filename, why);
            }
        }
    }
    // export solution (1-indexed, one line)
    match sol_file {
        None => {},
        Some(filename) => {
            if checker(instance, &result.clique).is_none() {
                println!("invalid solution, not exported");
                return;
            }
            let mut encoded = String::default();
            for v in &result.clique {
                encoded += format!("{} ", v + 1).as_str();
            }
            encoded += "\n";
            if let Err(why) = fs::write(filename.as_str(), encoded) {
                panic!("couldn't write {}: {}", filename, why);
            }
        }
    }
}

/// header of the batch report
pub const CSV_HEADER: &str = "file|nodes|edges|clique_size|time";

/// one pipe-delimited row of the batch report
pub fn csv_row(file: &str, nodes: usize, edges: usize, clique_size: &str, time: &str) -> String {
    format!("{}|{}|{}|{}|{}", file, nodes, edges, clique_size, time)
}

/// lists the files under `dir` (recursively), ordered by ascending file size
pub fn files_by_ascending_size(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files(dir, &mut files)?;
    files.sort_by_key(|path| fs::metadata(path).map(|meta| meta.len()).unwrap_or(u64::MAX));
    Ok(files)
}

fn collect_files(dir: &Path, acc: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, acc)?;
        } else {
            acc.push(path);
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use clap::{App, Arg};

    fn test_app() -> App<'static, 'static> {
        App::new("test")
            .arg(Arg::with_name("path").long("path").takes_value(true))
            .arg(Arg::with_name("time").long("time").takes_value(true))
            .arg(Arg::with_name("branching").long("branching").takes_value(true))
            .arg(Arg::with_name("solution").long("solution").takes_value(true))
            .arg(Arg::with_name("perf").long("perf").takes_value(true))
    }

    #[test]
    fn test_read_params() {
        let matches = test_app()
            .get_matches_from(vec!["test", "--path", "graph.col", "--time", "10"]);
        let params = read_params(&matches).unwrap();
        assert_eq!(params.path, "graph.col");
        assert_eq!(params.time, 10.0);
        assert_eq!(params.branching, BranchingRule::LargestValue);
        assert!(params.solution.is_none());
        assert!(params.perf.is_none());
    }

    #[test]
    fn test_read_params_missing_path() {
        let matches = test_app().get_matches_from(vec!["test"]);
        assert!(matches!(
            read_params(&matches),
            Err(ConfigurationError::MissingArgument("path"))
        ));
    }

    #[test]
    fn test_read_params_bad_time() {
        let matches = test_app()
            .get_matches_from(vec!["test", "--path", "g", "--time", "soon"]);
        assert!(matches!(
            read_params(&matches),
            Err(ConfigurationError::InvalidValue { name: "time", .. })
        ));
    }

    #[test]
    fn test_read_params_bad_branching() {
        let matches = test_app()
            .get_matches_from(vec!["test", "--path", "g", "--branching", "pseudocost"]);
        assert!(matches!(
            read_params(&matches),
            Err(ConfigurationError::InvalidValue { name: "branching", .. })
        ));
    }

    #[test]
    fn test_csv_row() {
        assert_eq!(
            csv_row("test/c125.9.col", 125, 6963, "34", "512.337 ms"),
            "test/c125.9.col|125|6963|34|512.337 ms"
        );
        assert_eq!(
            csv_row("test/big.col", 1000, 450000, "-", "Timeout"),
            "test/big.col|1000|450000|-|Timeout"
        );
    }
}
