use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use demo_schema::{cached_page_schema, sample_page, CachedPage};
use schema::WireCategory;

#[derive(Parser)]
#[command(
    name = "binfield-tools",
    version,
    about = "binfield layout inspection and sample encode/decode tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the reference schema's field table.
    Layout,
    /// Serialize the sample page to a file.
    Encode {
        /// Destination for the serialized bytes.
        output: PathBuf,
    },
    /// Deserialize a page file and print it as JSON.
    Decode {
        /// Path to the serialized bytes.
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Layout => print_layout(),
        Command::Encode { output } => {
            let bytes = sample_page().to_bytes().context("serialize sample page")?;
            fs::write(&output, &bytes)
                .with_context(|| format!("write {}", output.display()))?;
            println!("wrote {} bytes to {}", bytes.len(), output.display());
        }
        Command::Decode { input } => {
            let bytes =
                fs::read(&input).with_context(|| format!("read {}", input.display()))?;
            let page = CachedPage::from_bytes(&bytes).context("decode page")?;
            let json = page_to_json(&page);
            println!("{}", serde_json::to_string_pretty(&json).context("serialize json")?);
        }
    }
    Ok(())
}

fn print_layout() {
    let schema = cached_page_schema();
    println!("{:<12} {:<18} width", "field", "category");
    for field in schema.fields() {
        let width = match field.category() {
            WireCategory::Scalar(kind) => kind
                .fixed_width()
                .map_or_else(|| "1-4".to_owned(), |w| w.to_string()),
            _ => "variable".to_owned(),
        };
        println!("{:<12} {:<18} {width}", field.name(), field.category());
    }
}

fn page_to_json(page: &CachedPage) -> serde_json::Value {
    serde_json::json!({
        "title": page.title,
        "tags": page.tags,
        "visits": page.visits,
        "rating": page.rating.to_string(),
        "thumbnail": {
            "width": page.thumbnail.width(),
            "height": page.thumbnail.height(),
            "pixel_bytes": page.thumbnail.pixels().len(),
        },
    })
}
