use std::path::PathBuf;

use clap::Parser;
use wallmaze::{app::App, generators::Generator, logging, solvers::Solver};

/// Generate a perfect maze and find the way from the top-left to the bottom-right corner.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of rows, between 5 and 30
    #[arg(long, default_value_t = 15)]
    rows: usize,
    /// Number of columns, between 5 and 40
    #[arg(long, default_value_t = 20)]
    cols: usize,
    #[arg(long, value_enum, default_value_t = Generator::Kruskal)]
    generator: Generator,
    #[arg(long, value_enum, default_value_t = Solver::Bfs)]
    solver: Solver,
    /// Seed for a reproducible maze
    #[arg(long)]
    seed: Option<u64>,
    /// Animation speed from 1 to 100; 100 draws without pausing
    #[arg(long, default_value_t = 50)]
    speed: u8,
    /// Draw only the finished maze and path
    #[arg(long)]
    no_animate: bool,
    /// Draw with ASCII characters
    #[arg(long)]
    plain: bool,
    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let app = App {
        rows: cli.rows,
        cols: cli.cols,
        generator: cli.generator,
        solver: cli.solver,
        seed: cli.seed,
        animation_speed: cli.speed,
        animate: !cli.no_animate,
        plain: cli.plain,
    }
    .clamped();
    if (app.rows, app.cols) != (cli.rows, cli.cols) {
        tracing::warn!(
            "[main] maze size {}x{} clamped to {}x{}",
            cli.rows,
            cli.cols,
            app.rows,
            app.cols
        );
    }
    app.run()?;
    Ok(())
}
