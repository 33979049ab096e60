//! rat's main application entry point.
//! Parses arguments, sets up logging and turns any error into a fatal exit.

use rat::{
    cli::{get_args, Action, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::Processor,
    selector::ShellRunner,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.config()?;
    let runner = ShellRunner::new();
    let processor = Processor::from_config(&config, &runner);

    match args.action()? {
        Action::List => {
            for name in processor.list()? {
                println!("{name}");
            }
        }
        Action::Materialize {
            boilerplate,
            project,
        } => {
            processor.materialize(boilerplate.as_deref(), &project)?;
        }
    }

    Ok(())
}
