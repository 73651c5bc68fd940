use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_notes::cli::orchestration::{run_pipeline, PipelineArgs};
use release_notes::git::Git2Repository;
use release_notes::{config, publish, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-notes",
    about = "Generate release notes from conventional commits"
)]
struct Args {
    #[arg(long = "from-ref", help = "Start commit or tag (exclusive)")]
    from_ref: Option<String>,

    #[arg(long = "to-ref", default_value = "HEAD", help = "End commit or tag (inclusive)")]
    to_ref: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'C', long, default_value = ".", help = "Repository to read history from")]
    repo: String,

    #[arg(long, help = "Print the notes instead of writing them")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    if args.version {
        println!("release-notes {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open(&args.repo) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let pipeline_args = PipelineArgs {
        from_ref: args.from_ref,
        to_ref: Some(args.to_ref),
        dry_run: args.dry_run,
    };
    let mut sink = publish::sink_from_env(&config.output.has_changes_key);

    if let Err(e) = run_pipeline(&pipeline_args, &config, &repo, sink.as_mut()) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

/// Console logging controlled by RUST_LOG (default: warn), written to stderr
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
