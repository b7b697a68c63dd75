use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use market_lens::data::aggregate::{labeled, DEFAULT_LABELED_BRANDS};
use market_lens::data::loader;
use market_lens::{BrandSelection, NumericField, ViewState};

/// Explore a mobile-phone catalog from the terminal: load the feed, filter
/// it, and print the three aggregate views a graphical front end would draw.
#[derive(Parser)]
#[command(name = "market-lens", version, about)]
struct Cli {
    /// Catalog CSV file.
    catalog: PathBuf,

    /// Keep listings with a discount price of at least this many USD.
    #[arg(long, default_value_t = 0.0)]
    min_price: f64,

    /// Keep one brand only (exact name), or "All".
    #[arg(long, default_value = "All")]
    brand: BrandSelection,

    /// Emit the three views as one JSON document instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = loader::load_file(&cli.catalog)?;
    log::info!(
        "loaded {} listings across {} brands",
        store.len(),
        store.brands.len()
    );

    let mut state = ViewState::default();
    state.set_store(store);
    state.set_min_price(cli.min_price);
    state.set_brand(cli.brand);

    let bar = state.bar_view(NumericField::DiscountPriceUsd);
    let scatter = state.scatter_view(NumericField::StorageGb, NumericField::Stars);
    let tree = state.tree_view(NumericField::Stars);

    if cli.json {
        let doc = serde_json::json!({
            "bar": bar,
            "scatter": scatter,
            "treemap": tree,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!(
        "{} of {} listings pass the current filters",
        state.visible_indices.len(),
        state.store.as_ref().map_or(0, |s| s.len())
    );

    println!("\nAverage discount price by brand (USD, ascending):");
    for item in &bar {
        match item.mean {
            Some(mean) => println!("  {:<12} {:>8.2}", item.brand, mean),
            None => println!("  {:<12} {:>8}", item.brand, "-"),
        }
    }

    println!("\nAverage storage (GB) vs average stars by brand (* = labeled):");
    let flagged = labeled(&scatter, &DEFAULT_LABELED_BRANDS);
    for point in &scatter {
        let mark = if flagged.iter().any(|p| p.brand == point.brand) {
            "*"
        } else {
            " "
        };
        println!(
            "  {mark} {:<12} {:>8} {:>6}",
            point.brand,
            point.mean_a.map_or("-".to_string(), |v| format!("{v:.1}")),
            point.mean_b.map_or("-".to_string(), |v| format!("{v:.2}")),
        );
    }

    println!("\nStars-weighted treemap (root weight {:.1}):", tree.weight);
    for brand in &tree.children {
        println!(
            "  {:<12} weight {:>6.1}  ({} products)",
            brand.name,
            brand.weight,
            brand.children.len()
        );
    }

    Ok(())
}
