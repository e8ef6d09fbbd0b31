use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dwpub::{Client, Dataset, public_url, storage};
use serde_json::{Map, Value, json};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dwpub",
    version,
    about = "Create, fill & publish Datawrapper charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a chart, upload its data, and publish it.
    Push(PushArgs),
}

#[derive(Args, Debug)]
struct PushArgs {
    /// Chart title
    #[arg(short, long, default_value = "Population Distribution by Area Type")]
    title: String,
    /// Datawrapper chart type tag (e.g., d3-bars-stacked, d3-lines)
    #[arg(long, default_value = "d3-bars-stacked")]
    chart_type: String,
    /// Read the dataset from a CSV file (header row of column names).
    /// Without this, a built-in example dataset is used.
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Push(args) => cmd_push(args),
    }
}

fn cmd_push(args: PushArgs) -> Result<()> {
    let token = std::env::var("DATAWRAPPER_API_TOKEN").map_err(|_| {
        anyhow::anyhow!("please set the DATAWRAPPER_API_TOKEN environment variable")
    })?;

    let mut client = Client::new(token);
    if let Ok(url) = std::env::var("DATAWRAPPER_API_URL") {
        client.base_url = url;
    }

    let dataset = match args.data.as_ref() {
        Some(path) => storage::load_csv(path)?,
        None => example_dataset(),
    };

    let metadata = default_metadata(&dataset);
    let Some(chart_id) = client.create_chart(&args.title, &args.chart_type, Some(&metadata))
    else {
        anyhow::bail!("chart creation failed");
    };
    println!("Created chart with ID: {}", chart_id);

    if !client.update_chart_data(&chart_id, &dataset) {
        anyhow::bail!("data upload failed for chart {}", chart_id);
    }
    println!("Updated chart data");

    if !client.publish_chart(&chart_id) {
        anyhow::bail!("publish failed for chart {}", chart_id);
    }
    println!("Chart published! View it at: {}", public_url(&chart_id));

    Ok(())
}

/// Theme/language defaults plus a column-format block marking every series
/// column (all but the first) as numeric.
fn default_metadata(dataset: &Dataset) -> Map<String, Value> {
    let mut formats = Map::new();
    for column in dataset.columns.iter().skip(1) {
        formats.insert(column.name.clone(), json!("numeric"));
    }

    let mut metadata = Map::new();
    metadata.insert("theme".into(), json!("datawrapper"));
    metadata.insert("language".into(), json!("en-US"));
    metadata.insert(
        "metadata".into(),
        json!({
            "describe": {
                "column-format": formats
            }
        }),
    );
    metadata
}

/// Stacked-bar example: population by area type, one bar per year.
fn example_dataset() -> Dataset {
    Dataset::new()
        .with_text_column("Year", ["2020", "2021", "2022"])
        .with_numeric_column("Urban", [1_000_000.0, 1_100_000.0, 1_200_000.0])
        .with_numeric_column("Suburban", [500_000.0, 550_000.0, 600_000.0])
        .with_numeric_column("Rural", [250_000.0, 240_000.0, 230_000.0])
}
