mod driver;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The source file to verify
    file: PathBuf,

    /// Path to a sjavac.toml file, or to the directory holding it
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            println!("2");
            return ExitCode::from(2);
        }
    };

    let config_dir = cli.config.or_else(|| std::env::current_dir().ok());
    let config = sjava_config::load_config(config_dir);
    init_tracing(&config.log_filter);

    match driver::check_file(&cli.file, &config) {
        Ok(info) => {
            tracing::info!("{} method(s) verified", info.methods_checked);
            println!("0");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            println!("{}", err.status());
            ExitCode::from(err.status())
        }
    }
}
