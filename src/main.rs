use chartform::cli::Cli;
use chartform::config::{InputWatcher, Settings};
use clap::Parser;
use std::io::Write;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries the JSON output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let settings = Settings::new_with_cli(&cli)?;

    emit(&cli, &chartform::run_once(&cli, &settings)?)?;

    if cli.watch {
        let watcher = InputWatcher::new(&cli.input_paths())?;
        info!("Watching for changes, press Ctrl-C to stop");
        watcher.run(|| match chartform::run_once(&cli, &settings) {
            Ok(rendered) => {
                if let Err(e) = emit(&cli, &rendered) {
                    error!("Failed to write output: {}", e);
                }
            }
            Err(e) => error!("Transform failed: {:#}", e),
        });
    }

    Ok(())
}

fn emit(cli: &Cli, rendered: &str) -> anyhow::Result<()> {
    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Wrote form groups to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
