use clap::Parser;
use miette::Result;
use pantry::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    init_tracing(global.verbose);

    match cli.command {
        Commands::Init(args) => pantry::cli::commands::init::run(args),
        Commands::Stock(cmd) => pantry::cli::commands::stock::run(cmd, &global),
        Commands::Cook(args) => pantry::cli::commands::cook::run(args, &global),
        Commands::NearMiss(args) => pantry::cli::commands::near_miss::run(args, &global),
        Commands::Alternatives(args) => pantry::cli::commands::alternatives::run(args, &global),
        Commands::Config(cmd) => pantry::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => pantry::cli::commands::completions::run(args),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level chosen here
fn init_tracing(verbose: bool) {
    let default = if verbose { "pantry=debug" } else { "pantry=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
