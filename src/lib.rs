//! Price and volume lookups for Steam Community Market items, plus a small
//! text format for reading item lists and saving the results.

pub mod browser;
pub mod error;
pub mod item_file;
pub mod models;
pub mod parsing;

pub use browser::steamcommunity::{get_items_info, SteamMarket};
pub use error::{MarketError, Result};
pub use item_file::{format_item_line, print_items, read_items_from_file, save_items_to_file, write_items};
pub use models::{item::{Item, DEFAULT_CURRENCY_ID}, price::{PriceOverview, PRICE_OVERVIEW_URL}};
pub use parsing::item_line::parse_item_line;
