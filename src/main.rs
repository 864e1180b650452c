// Entrypoint for the CLI application.
// - Keeps `main` small: resolve config, check the image exists, send the
//   request and print the report.
// - Returns `anyhow::Result` so unexpected faults (transport failures,
//   malformed success bodies) terminate with a readable diagnostic.

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};

use plantid_cli::{
    api::{ApiError, IdentifyResponse, PlantClient},
    config::Config,
    report,
};

fn main() -> anyhow::Result<()> {
    // Optional first argument overrides the default image path. See
    // `config::Config::from_env`.
    let config = Config::from_env(std::env::args().nth(1));

    // Hard precondition: without the image there is nothing to send.
    if !config.image_path.exists() {
        println!("Image not found: {}", config.image_path.display());
        std::process::exit(1);
    }

    let client = PlantClient::from_config(&config)?;

    println!("Sending image to the identification API...");
    // Spinner goes to stderr, so stdout stays clean for the report.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Waiting for the identification service...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let outcome = client.identify(&config.image_path);
    spinner.finish_and_clear();

    let value = match outcome {
        Ok(value) => value,
        Err(ApiError::Status { status, body }) => {
            println!("API error: {}", status.as_u16());
            println!("{}", body.render());
            std::process::exit(1);
        }
        // Transport faults, unreadable files and non-JSON 200 bodies
        // propagate as-is.
        Err(err) => return Err(err.into()),
    };

    // Always dump the full response before the typed decode, as a
    // debugging aid.
    println!("\nFULL JSON RESPONSE:");
    println!("{}", report::pretty(&value));

    let parsed = IdentifyResponse::from_value(&value)
        .context("unexpected response shape from identification service")?;
    println!("{}", report::best_match(&parsed));
    Ok(())
}
