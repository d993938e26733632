use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use feedmill::app::AppContext;
use feedmill::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so converted output on stdout stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            pretty,
        } => {
            let ctx = if pretty { ctx.with_pretty_output() } else { ctx };
            commands::convert(&ctx, &input, output.as_deref())?;
        }
        Commands::Inspect { input } => {
            commands::inspect(&ctx, &input)?;
        }
    }

    Ok(())
}
