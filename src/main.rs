use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::env;

use offer_shortlist::{
    load_offers, save_shortlist, CategoryCatalog, SelectionEngine, DATE_FORMAT,
};

// Fixed, non-configurable I/O paths
const INPUT_PATH: &str = "input.json";
const OUTPUT_PATH: &str = "output.json";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: offer-shortlist <check-in-date>");
        eprintln!("       check-in-date in YYYY-MM-DD form");
        std::process::exit(1);
    }

    // Malformed check-in date is a hard failure
    let check_in_date = NaiveDate::parse_from_str(&args[1], DATE_FORMAT)
        .with_context(|| format!("Invalid check-in date (expected YYYY-MM-DD): {}", args[1]))?;

    let catalog = CategoryCatalog::with_defaults();

    // 1. Load offers (recoverable: an unreadable source means an empty pool)
    let offers = match load_offers(INPUT_PATH, &catalog) {
        Ok(offers) => offers,
        Err(err) => {
            eprintln!("❌ Error loading offers: {:#}", err);
            Vec::new()
        }
    };
    println!("✓ Loaded {} offers from {}", offers.len(), INPUT_PATH);

    // 2. Run selection
    let shortlist = SelectionEngine::new(check_in_date).shortlist(&offers);
    println!(
        "✓ Selected {} offers for check-in {}",
        shortlist.len(),
        check_in_date.format(DATE_FORMAT)
    );

    // 3. Write the shortlist (recoverable: report and produce no output)
    match save_shortlist(OUTPUT_PATH, &shortlist) {
        Ok(()) => println!("✓ Shortlist written to {}", OUTPUT_PATH),
        Err(err) => eprintln!("❌ Error saving shortlist: {:#}", err),
    }

    Ok(())
}
