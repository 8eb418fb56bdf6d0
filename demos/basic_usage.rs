// ============================================================================
// Basic Usage Example
// ============================================================================

use chrono::NaiveDate;
use moneymint::prelude::*;
use std::sync::Arc;

fn main() -> MoneyResult<()> {
    #[cfg(feature = "logging")]
    moneymint::utils::init_tracing();

    println!("=== Money Mint Example ===\n");

    // Look up currencies by either code
    let eur = iso::get("EUR", None)?;
    let same = iso::get(978u16, None)?;
    println!(
        "EUR by code and by number is the same entry: {}",
        Arc::ptr_eq(&eur, &same)
    );
    println!("Minor unit of EUR: {:?}\n", eur.minor_unit());

    // Floats are healed to the decimal they were written as
    println!("Minting...");
    let coffee = eur.mint(3.2)?;
    let cake = eur.mint(0.1)?;
    let total = (&coffee + &cake)?;
    println!("  {} + {} = {}", coffee, cake, total);

    // Quantize on mint
    let options = MintOptions::default().quantized();
    let fee = eur.mint_with(0.125, &options)?;
    println!("  Fee 0.125 quantized to cents: {}\n", fee);

    // Arithmetic
    println!("Arithmetic...");
    let tripled = (&total * 3)?;
    println!("  {} * 3 = {}", total, tripled);
    let ratio = (&tripled / &total)?;
    println!("  {} / {} = {} (scalar)", tripled, total, ratio);
    let split: Money = (&total / 7)?;
    println!(
        "  {} / 7 = {} -> {}",
        total,
        split,
        split.round_to_minor(Rounding::HalfEven)?
    );

    // Mixing currencies is refused
    let usd = iso::mint("5.00", "USD")?;
    match &total + &usd {
        Ok(sum) => println!("  Unexpected sum: {}", sum),
        Err(e) => println!("  {} + {} refused: {}\n", total, usd, e),
    }

    // Reused numeric codes resolve by date
    println!("Numeric code 604 over time...");
    for (year, month, day) in [(1980, 1, 1), (1988, 6, 1), (2020, 1, 1)] {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let currency = iso::get(604u16, Some(date))?;
        println!("  {}: {}", date, currency);
    }
    if let Err(e) = iso::get(604u16, None) {
        println!("  Without a date: {}\n", e);
    }

    // Currencies that are not powers of ten
    let ariary = Arc::new(
        Currency::new("XMG", 5)
            .with_denominator(5)
            .with_name("Five-unit demo currency"),
    );
    let price = ariary.mint("7.33")?;
    println!(
        "Rounding {} to 1/5 units: {}",
        price,
        price.round_to_minor(Rounding::HalfUp)?
    );

    Ok(())
}
