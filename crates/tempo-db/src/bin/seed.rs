//! # Seed Data Generator
//!
//! Populates a persistent database with demo music-store products.
//!
//! ## Usage
//! ```bash
//! # Generate 100 products (default) into ./music_store_management.db
//! cargo run -p tempo-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p tempo-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p tempo-db --bin seed -- --db ./data/store.db
//! ```
//!
//! Start the shell with `TEMPO_STARTUP_MODE=persistent` (the default) to see
//! the seeded rows; fresh mode discards them.

use std::env;
use std::time::Instant;

use tempo_core::NewProduct;
use tempo_db::{Database, DbConfig, ProductStore, StartupMode};

/// Product catalog: (category, models)
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Strings",
        &[
            "Acoustic Guitar",
            "Classical Guitar",
            "Electric Guitar",
            "Bass Guitar",
            "Ukulele",
            "Mandolin",
            "Banjo",
            "Violin",
            "Viola",
            "Cello",
        ],
    ),
    (
        "Percussion",
        &[
            "Snare Drum",
            "Bass Drum",
            "Floor Tom",
            "Cajon",
            "Djembe",
            "Crash Cymbal",
            "Ride Cymbal",
            "Hi-Hat Pair",
            "Tambourine",
            "Drum Sticks",
        ],
    ),
    (
        "Keys",
        &[
            "Digital Piano",
            "Stage Piano",
            "Synthesizer",
            "MIDI Controller",
            "Keyboard Stand",
            "Sustain Pedal",
        ],
    ),
    (
        "Wind",
        &[
            "Alto Saxophone",
            "Tenor Saxophone",
            "Trumpet",
            "Trombone",
            "Flute",
            "Clarinet",
            "Harmonica",
        ],
    ),
    (
        "Audio",
        &[
            "Guitar Amplifier",
            "Bass Amplifier",
            "Studio Monitor",
            "Dynamic Microphone",
            "Condenser Microphone",
            "Audio Interface",
            "Headphones",
            "Instrument Cable",
        ],
    ),
];

/// Finish / tier variants and their price addon in whole units.
const VARIANTS: &[(&str, f64)] = &[
    ("Student", 0.0),
    ("Standard", 80.0),
    ("Pro", 240.0),
    ("Vintage", 520.0),
];

const USAGE: &str = "\
Usage: seed [OPTIONS]

Options:
  -c, --count <N>    Number of products to generate (default: 100)
  -d, --db <PATH>    Database file path (default: ./music_store_management.db)
  -h, --help         Show this help message";

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Invocation {
    Seed { count: usize, db_path: String },
    Help,
}

/// Parses the arguments after the program name.
fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut count: usize = 100;
    let mut db_path = String::from("./music_store_management.db");

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--count" | "-c" => {
                let value = iter.next().ok_or("--count needs a value")?;
                count = value
                    .parse()
                    .map_err(|_| format!("--count must be a non-negative integer, got '{}'", value))?;
            }
            "--db" | "-d" => {
                db_path = iter.next().ok_or("--db needs a path")?.clone();
            }
            "--help" | "-h" => return Ok(Invocation::Help),
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(Invocation::Seed { count, db_path })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (count, db_path) = match parse_args(&args) {
        Ok(Invocation::Seed { count, db_path }) => (count, db_path),
        Ok(Invocation::Help) => {
            println!("Tempo Seed Data Generator");
            println!();
            println!("{}", USAGE);
            return Ok(());
        }
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    println!("Tempo Seed Data Generator");
    println!("=========================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let config = DbConfig::new(&db_path).startup_mode(StartupMode::Persistent);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let products = db.products();
    let start = Instant::now();
    let mut generated = 0;

    'outer: for (category, models) in CATEGORIES {
        for (model_idx, model) in models.iter().enumerate() {
            for (variant_idx, variant) in VARIANTS.iter().enumerate() {
                if generated >= count {
                    break 'outer;
                }

                let product = generate_product(category, model, variant, model_idx * 7 + variant_idx);

                if let Err(e) = products.add(&product).await {
                    eprintln!("Failed to insert {}: {}", product.name, e);
                    continue;
                }

                generated += 1;

                if generated % 50 == 0 {
                    println!("  Generated {} products...", generated);
                }
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    db.close().await;

    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with deterministic demo data.
fn generate_product(category: &str, model: &str, variant: &(&str, f64), seed: usize) -> NewProduct {
    let (tier, addon) = *variant;

    // Base price 49.00 - 448.00 plus the tier addon
    let base = 49.0 + ((seed * 37) % 400) as f64;
    let price = ((base + addon) * 100.0).round() / 100.0 - 0.01;

    NewProduct {
        name: format!("{} {}", tier, model),
        category: category.to_string(),
        price,
        description: format!("{} {} ({})", tier, model.to_lowercase(), category.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_products_pass_validation() {
        let product = generate_product("Strings", "Violin", &VARIANTS[2], 11);
        assert_eq!(product.name, "Pro Violin");
        assert_eq!(product.category, "Strings");

        let price = format!("{:.2}", product.price);
        let reparsed = NewProduct::from_fields(
            &product.name,
            &product.category,
            &price,
            &product.description,
        )
        .unwrap();
        assert_eq!(reparsed.name, product.name);
        assert!(reparsed.price > 0.0);
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(
            parse_args(&args(&[])),
            Ok(Invocation::Seed {
                count: 100,
                db_path: "./music_store_management.db".to_string()
            })
        );
        assert_eq!(
            parse_args(&args(&["-c", "25", "--db", "/tmp/shop.db"])),
            Ok(Invocation::Seed {
                count: 25,
                db_path: "/tmp/shop.db".to_string()
            })
        );
        assert_eq!(parse_args(&args(&["--help"])), Ok(Invocation::Help));
    }

    #[test]
    fn test_bad_count_is_rejected() {
        let err = parse_args(&args(&["--count", "lots"])).unwrap_err();
        assert!(err.contains("'lots'"));
        assert!(parse_args(&args(&["--count"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_catalog_covers_default_count() {
        let capacity: usize = CATEGORIES.iter().map(|(_, models)| models.len()).sum::<usize>()
            * VARIANTS.len();
        assert!(capacity >= 100);
    }
}
