use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use packlist::error::PacklistError;
use packlist::pipeline::{input, OperatorInput, Pipeline, PipelineContext};
use packlist::tables::{TableProvider, TableSources};
use packlist::{load_config, Result};

#[derive(Parser, Debug)]
#[command(
    name = "packlist",
    version,
    about = "Extract a supplier packing-list PDF into a labelled CSV export"
)]
struct Cli {
    /// Primary packing-list PDF (fully parsed).
    pdf: PathBuf,

    /// Additional PDFs whose order id is appended to every record.
    #[arg(long = "merge", value_name = "PDF")]
    merge: Vec<PathBuf>,

    /// Department name as it appears in the product-translation table.
    #[arg(long)]
    department: String,

    /// Product name as it appears in the product-translation table.
    #[arg(long)]
    product: String,

    /// Selected material, optionally with its composition percentage:
    /// NAME or NAME=95. Repeatable.
    #[arg(long = "material", value_name = "NAME[=COMPOSITION]")]
    materials: Vec<String>,

    /// Washing-code selection (1..15).
    #[arg(long = "washing-code")]
    washing_code: String,

    /// Anchor price in PLN, comma or dot decimals (e.g. 12,50).
    #[arg(long)]
    pln: String,

    /// Colour to use when the document requires manual input.
    #[arg(long)]
    colour: Option<String>,

    /// Output CSV path. Defaults to the input name with a .csv extension.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Config file with the reference-table sources.
    #[arg(long, default_value = "packlist.json")]
    config: PathBuf,
}

fn main() {
    init_tracing();

    if let Err(err) = run(Cli::parse()) {
        error!(error = %err, "processing failed");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_log::LogTracer::init();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)?;

    let provider = TableProvider::new(Duration::from_secs(config.tables.cache_ttl_secs))?;
    let tables = provider.load(&TableSources::from_config(&config.tables))?;

    let read = |path: &PathBuf| {
        std::fs::read(path).map_err(|e| PacklistError::ReadFile {
            path: path.clone(),
            source: e,
        })
    };
    let pdf = read(&cli.pdf)?;
    let extra_pdfs = cli.merge.iter().map(read).collect::<Result<Vec<_>>>()?;

    let operator_input = OperatorInput {
        department: cli.department,
        product_name: cli.product,
        materials: cli
            .materials
            .iter()
            .map(|raw| input::parse_material_arg(raw))
            .collect(),
        washing_code: cli.washing_code,
        pln_price: cli.pln,
        colour_override: cli.colour,
    };

    let pipeline = Pipeline::new(tables, config.collection_map());
    let ctx = PipelineContext::new(
        pdf,
        extra_pdfs,
        operator_input,
        chrono::Local::now().date_naive(),
    );
    let ctx = pipeline.run(ctx)?;

    let output = cli.output.unwrap_or_else(|| cli.pdf.with_extension("csv"));
    std::fs::write(&output, ctx.csv.as_deref().unwrap_or_default()).map_err(|e| {
        PacklistError::WriteFile {
            path: output.clone(),
            source: e,
        }
    })?;

    info!(
        "exported {} record(s) to {}",
        ctx.records.len(),
        output.display()
    );
    Ok(())
}
