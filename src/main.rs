use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use sel_printer::catalog::{self, PrintFilter};
use sel_printer::selection;
use sel_printer::{Code128Encoder, Error};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterArg {
    All,
    Printed,
    NotPrinted,
}

impl From<FilterArg> for PrintFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => PrintFilter::All,
            FilterArg::Printed => PrintFilter::Printed,
            FilterArg::NotPrinted => PrintFilter::NotPrinted,
        }
    }
}

/// Print shelf-edge price labels onto A4 label sheets.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Catalog JSON file (bare item array or {"record": {"ladderPricingLists": [...]}})
    catalog: PathBuf,

    /// Only list items with this print status
    #[arg(long, value_enum, default_value = "all")]
    filter: FilterArg,

    /// Select every listed item with quantity 1
    #[arg(long)]
    all: bool,

    /// Quantity for one product, as PRODUCT_ID=QUANTITY (repeatable)
    #[arg(long = "qty", value_name = "PRODUCT_ID=QUANTITY", value_parser = parse_qty)]
    quantities: Vec<(String, String)>,

    /// Directory the generated PDF is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn parse_qty(arg: &str) -> Result<(String, String), String> {
    let (id, qty) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected PRODUCT_ID=QUANTITY, got {arg:?}"))?;
    Ok((id.trim().to_string(), qty.to_string()))
}

fn run(cli: Cli) -> Result<(), Error> {
    let items = catalog::filter(catalog::load(&cli.catalog)?, cli.filter.into());
    let raw = selection::apply_quantities(&items, cli.all, cli.quantities)?;
    let selections = selection::validate(raw)?;

    let (output, pages) =
        sel_printer::generate_labels(&selections, &Code128Encoder::default(), &cli.out_dir)?;
    println!("Wrote {} ({pages} page(s))", output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
