use wallmaze::{app::App, generators::Generator, logging, solvers::Solver};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _guard = logging::init(None, tracing::Level::INFO)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok());
    for generator in Generator::ALL {
        for solver in Solver::ALL {
            let app = App {
                rows: App::ROW_RANGE.1,
                cols: App::COL_RANGE.1,
                generator,
                solver,
                seed: Some(0),
                animate: false,
                ..App::default()
            };
            let mean = app.profile(num_iters)?;
            println!("{} + {}: {}", generator, solver, mean);
        }
    }
    Ok(())
}
