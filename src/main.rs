use std::error::Error;

use steam_market_info::{print_items, read_items_from_file, save_items_to_file, Item, SteamMarket};

const INPUT_PATH: &str = "demos/input.txt";
const OUTPUT_PATH: &str = "demos/output.txt";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let market = SteamMarket::new();

    // Items built by hand, refreshed and printed
    let mut items = vec![
        Item::new("MP9 | Storm (Minimal Wear)", 730)?,
        Item::new("AK-47 | Redline (Field-Tested)", 730)?,
    ];
    market.get_items_info(&mut items).await;
    print_items(&items);

    // Same thing from a file and back to another file
    let mut items = read_items_from_file(INPUT_PATH).await?;
    market.get_items_info(&mut items).await;
    save_items_to_file(OUTPUT_PATH, &items).await?;

    println!("Saved {} items to {}", items.len(), OUTPUT_PATH);
    Ok(())
}
