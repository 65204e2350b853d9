use std::process;

use gtkmm_helper::{make_project, parse_args::parse_args, Project};

// the real `main()` so we can clean up before `process::exit()`
fn run() -> bool {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        // usage was printed, nothing to do
        Ok(None) => return true,
        Err(err) => {
            eprintln!("{}", err);

            return false;
        }
    };

    let name = match args.name {
        Some(name) => name,
        // no --new given, nothing to make
        None => return true,
    };

    let project = match Project::new(name, args.dir) {
        Ok(project) => project,
        Err(err) => {
            eprintln!("{}", err);

            return false;
        }
    };

    if let Err(err) = make_project(&project) {
        eprintln!("{}", err);

        return false;
    }

    true
}

/// this wraps `run()` so everything can be cleaned up before exiting with an
/// error code
fn main() {
    if !run() {
        process::exit(1);
    }
}
