//! Basic usage example for pgfkit-latex
//!
//! Builds a small plot, saves it and typesets it with the resolved engine.
//!
//! Run with: cargo run --example basic_usage

use pgfkit_core::{DocumentBuilder, LatexConfig};
use pgfkit_latex::{LatexTypesetter, resolve_engine};

fn main() -> pgfkit_core::Result<()> {
    println!("=== pgfkit-latex Basic Usage Example ===\n");

    println!("Step 1: Resolving LaTeX engine...");
    match resolve_engine(&LatexConfig::default()) {
        Ok(info) => println!("✓ {} from {}: {:?}\n", info.name, info.source, info.path),
        Err(e) => {
            println!("✗ {}", e);
            return Ok(());
        }
    }

    println!("Step 2: Building document...");
    let x: Vec<f64> = (0..=20).map(|i| i as f64 / 4.0).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let mut doc = DocumentBuilder::new("$t$", "$\\sin t$", Some(vec!["grid=major".to_string()]))
        .with_typesetter(LatexTypesetter::new);
    doc.plot(&x, &y, Some("sine"), None, false)?;

    println!("Step 3: Saving and typesetting...");
    let path = doc.save(Some("basic_usage"))?;
    doc.typeset(false)?;
    println!("✓ Wrote {} and basic_usage.pdf", path.display());

    Ok(())
}
