use clap::Parser;
use promptform::client::HttpPromptClient;
use promptform::core::config::{self, CliOverrides};
use promptform::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "promptform", about = "Submit a prompt to an HTTP endpoint and show the reply")]
struct Args {
    /// Endpoint to POST prompts to
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Where to write the log file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}, using defaults");
            config::PromptFormConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint.as_deref(),
            log_file: args.log_file.as_deref(),
        },
    );

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("promptform starting up, endpoint: {}", resolved.endpoint);

    let client = HttpPromptClient::with_timeout(resolved.endpoint, resolved.request_timeout)
        .map_err(std::io::Error::other)?;

    tui::run(Arc::new(client))
}
