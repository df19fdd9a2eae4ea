pub mod args;
pub mod errors;
pub mod interfaces;
pub mod ops;
pub mod start;
pub mod storage;
pub mod utils;

pub use args::Args;
pub use errors::{AppError, Result};

use utils::log_utils;

/// Open one session and run the fixed sequence against it, reporting on stdout
///
/// # Errors
///
/// Returns the first error encountered; nothing after it has run.
pub fn run_app(args: &Args) -> Result<()> {
    if log_utils::enabled(args.verbose, log_utils::LogLevel::Debug) {
        if let Ok(json) = serde_json::to_string(args) {
            log_utils::debug(&format!("Configuration: {json}"), args.verbose);
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let session = start::open_session(&args.session_config(), args.verbose, &mut out)?;
    start::run_sequence(&session, &args.plan(), args.verbose, &mut out)
}
