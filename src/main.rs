use anyhow::Result;
use clap::Parser;

use distgit_branch::cli::{run_classify, ClassifyArgs};
use distgit_branch::config::{self, OutputFormat};
use distgit_branch::ui;

#[derive(clap::Parser)]
#[command(
    name = "distgit-branch",
    about = "Classify DistGit branch names and derive their build targets"
)]
struct Args {
    #[arg(required_unless_present = "version", help = "Branch names to classify")]
    branches: Vec<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Treat each branch as the branch of this commit")]
    hash: Option<String>,

    #[arg(long, requires = "hash", help = "Commit description")]
    description: Option<String>,

    #[arg(long, value_enum, help = "Output format (overrides configuration)")]
    format: Option<OutputFormat>,

    #[arg(long, help = "Fail when a branch has no derivable build target")]
    require_target: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with report output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if args.version {
        println!("distgit-branch {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e);
            std::process::exit(1);
        }
    };
    ui::apply_color(&config.output);

    let classify = ClassifyArgs {
        branches: args.branches,
        hash: args.hash,
        description: args.description,
        require_target: args.require_target || config.behavior.require_target,
    };

    let reports = match run_classify(&classify) {
        Ok(reports) => reports,
        Err(e) => {
            ui::display_error(&e);
            std::process::exit(1);
        }
    };

    let format = args.format.unwrap_or(config.output.format);
    ui::display_reports(&reports, format)?;

    Ok(())
}
