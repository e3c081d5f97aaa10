//! vsix_signer - sign a .vsix package with VsixSignTool located via vswhere.

use std::process;

use vsix_signer::cli;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            if let Err(io_err) = cli::OutputManager::from_env().failure(&e.to_string()) {
                eprintln!("Error: {e} (failed to report: {io_err})");
            }
            1
        }
    };

    process::exit(exit_code);
}
