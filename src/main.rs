//! gitstamp binary entry point.

fn main() {
    if let Err(err) = gitstamp::cli::run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
