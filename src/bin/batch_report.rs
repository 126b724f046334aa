use std::fs::File;
use std::io::Write;
use std::path::Path;

use clap::{App, load_yaml};

use clique_lp::instance::Instance;
use clique_lp::search::clique_bnb::{BranchAndBound, SearchStatus};
use clique_lp::util::{csv_row, files_by_ascending_size, read_batch_params, CSV_HEADER};

/** solves every graph file of a directory (smallest files first) and appends
one pipe-delimited row per file to a report. a file hitting the deadline is
recorded as a timeout and the batch moves on. */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("batch_report.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = match read_batch_params(&main_args) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    let files = match files_by_ascending_size(Path::new(params.dir.as_str())) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("unable to list {}: {}", params.dir, e);
            std::process::exit(1);
        }
    };
    let mut output = match File::create(params.output.as_str()) {
        Err(why) => panic!("couldn't create {}: {}", params.output, why),
        Ok(file) => file,
    };
    writeln!(output, "{}", CSV_HEADER)
        .unwrap_or_else(|why| panic!("couldn't write {}: {}", params.output, why));
    // solve each file
    for file in files {
        let filename = file.to_string_lossy().to_string();
        let instance = match Instance::from_file(filename.as_str()) {
            Ok(instance) => instance,
            Err(e) => { // a bad file does not abort the batch
                eprintln!("skipping {}: {}", filename, e);
                continue;
            }
        };
        println!("solving {} ({} vertices, {} edges)...", filename, instance.n(), instance.m());
        let mut engine = BranchAndBound::new(&instance);
        let result = engine.solve(params.time);
        let row = match result.status {
            SearchStatus::TimeLimit =>
                csv_row(filename.as_str(), instance.n(), instance.m(), "-", "Timeout"),
            SearchStatus::Optimal =>
                csv_row(
                    filename.as_str(),
                    instance.n(),
                    instance.m(),
                    result.size.to_string().as_str(),
                    format!("{:.3} ms", result.elapsed * 1000.0).as_str(),
                ),
        };
        writeln!(output, "{}", row)
            .unwrap_or_else(|why| panic!("couldn't write {}: {}", params.output, why));
    }
}
