use s3_bucket_tool::{args, run_app};

fn main() {
    // Parse and validate command-line arguments
    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Any failure ends the run here; no later step has executed
    if let Err(e) = run_app(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
