//! Locates houses in a small city map by street address.
//!
//! Usage: `house_lookup [ADDRESS]...`. With no arguments, searches for "Prahlad's Avenue".
//! Set `RUST_LOG=debug` to see the table's diagnostics.

use std::error::Error;

use chaintable::ChainedTable;

#[derive(Debug, Clone)]
struct House {
    address: String,
    house_number: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut city_map = ChainedTable::with_capacity(10)?;
    for (address, house_number) in [("123 Main St", 1), ("456 Oak Ave", 2), ("789 Pine Rd", 3)] {
        let house = House {
            address: address.to_string(),
            house_number,
        };
        city_map.insert(address, house)?;
    }

    let mut searches: Vec<String> = std::env::args().skip(1).collect();
    if searches.is_empty() {
        searches.push("Prahlad's Avenue".to_string());
    }

    for address in &searches {
        match city_map.get(address) {
            Some(house) => println!(
                "House found at {}, House Number: {}",
                house.address, house.house_number
            ),
            None => println!("House not found at {}", address),
        }
    }

    Ok(())
}
