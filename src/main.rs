use manifest_diff::common::logging;
use manifest_diff::presentation::cli::CliApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    logging::init()?;

    // Run the CLI application
    let app = CliApp::new();
    app.run()
}
