//! covfilter CLI binary entry point.
//! Delegates to the library for report filtering and classification.

use clap::Parser;
use covfilter::classify::Classifier;
use covfilter::cli::{Cli, Commands};
use covfilter::error::Result;
use covfilter::run::{exit_code, run_report, ReportArgs};
use covfilter::{output, utils};

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);
    let res = match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Commands::Report {
            json_report,
            show_all,
            output,
            totals,
            html,
            format,
            repo_root,
        } => run_report(&ReportArgs {
            json_report,
            show_all,
            output,
            totals,
            html,
            format,
            repo_root,
        }),
        Commands::Classify { checkers, format } => run_classify(&checkers, format.as_deref()),
    };
    std::process::exit(exit_code(res));
}

fn run_classify(checkers: &[String], format: Option<&str>) -> Result<i32> {
    let classifier = Classifier::default();
    let rows: Vec<_> = checkers
        .iter()
        .map(|c| (c.clone(), classifier.classify(c)))
        .collect();
    output::print_classifications(&rows, format.unwrap_or("human"))?;
    Ok(0)
}
