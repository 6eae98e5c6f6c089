//! du-args: validate and normalize the arguments of a disk usage run.
//!
//! Every argument is checked, notices and errors are printed, and the
//! resulting settings are shown.

use anyhow::Result;
use du_args::apply_args;
use du_args::cli::Args;
use du_args::report::Report;

fn main() -> Result<()> {
    let args = Args::parse_args();
    let report = Report::new().with_quiet(args.quiet);

    let (builder, errors) = apply_args(&args);
    let (settings, diagnostics) = builder.build();

    report.print_diagnostics(&diagnostics);
    for error in &errors {
        report.print_error(error);
    }
    report.print_arguments(&settings);

    if !errors.is_empty() {
        anyhow::bail!("{} invalid argument(s)", errors.len());
    }

    Ok(())
}
