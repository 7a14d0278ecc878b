use std::fmt;

use crate::error::{MarketError, Result};

pub const DEFAULT_CURRENCY_ID: u32 = 1;

/// One Steam Community Market listing query together with the last price
/// snapshot fetched for it.
///
/// `name`, `app_id` and `currency_id` are fixed at construction, the price
/// fields start out unknown and are filled in by [`crate::SteamMarket`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    app_id: u32,
    currency_id: u32,
    lowest_price: Option<String>,
    median_price: Option<String>,
    volume: Option<u64>,
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn is_valid_currency_id(currency_id: u32) -> bool {
    currency_id > 0
}

/// Prices are either unknown or a non-blank formatted string like `$0.05`.
pub fn is_valid_price(price: Option<&str>) -> bool {
    price.is_none_or(|p| !p.trim().is_empty())
}

impl Item {
    /// Creates an item priced in the default currency (USD on Steam).
    pub fn new(name: impl Into<String>, app_id: u32) -> Result<Self> {
        Self::with_currency(name, app_id, DEFAULT_CURRENCY_ID)
    }

    pub fn with_currency(name: impl Into<String>, app_id: u32, currency_id: u32) -> Result<Self> {
        let name = name.into();

        if !is_valid_name(&name) {
            return Err(MarketError::Validation { field: "name", reason: "must be a non-empty string" });
        }
        if !is_valid_currency_id(currency_id) {
            return Err(MarketError::Validation { field: "currencyId", reason: "must be a positive integer" });
        }

        Ok(Item {
            name,
            app_id,
            currency_id,
            lowest_price: None,
            median_price: None,
            volume: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn app_id(&self) -> u32 {
        self.app_id
    }

    pub fn currency_id(&self) -> u32 {
        self.currency_id
    }

    pub fn lowest_price(&self) -> Option<&str> {
        self.lowest_price.as_deref()
    }

    pub fn median_price(&self) -> Option<&str> {
        self.median_price.as_deref()
    }

    pub fn volume(&self) -> Option<u64> {
        self.volume
    }

    pub fn set_lowest_price(&mut self, lowest_price: Option<String>) -> Result<()> {
        if !is_valid_price(lowest_price.as_deref()) {
            return Err(MarketError::Validation { field: "lowest price", reason: "must be a non-empty string or null" });
        }
        self.lowest_price = lowest_price;
        Ok(())
    }

    pub fn set_median_price(&mut self, median_price: Option<String>) -> Result<()> {
        if !is_valid_price(median_price.as_deref()) {
            return Err(MarketError::Validation { field: "median price", reason: "must be a non-empty string or null" });
        }
        self.median_price = median_price;
        Ok(())
    }

    // Any u64 is a valid traded volume, so there is nothing to reject here
    pub fn set_volume(&mut self, volume: Option<u64>) {
        self.volume = volume;
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item {{ name: {}, appId: {}, currencyId: {}, lowestPrice: {}, medianPrice: {}, volume: {} }}",
            self.name,
            self.app_id,
            self.currency_id,
            self.lowest_price.as_deref().unwrap_or("null"),
            self.median_price.as_deref().unwrap_or("null"),
            self.volume.map_or_else(|| String::from("null"), |v| v.to_string()),
        )
    }
}

// Lets every batch operation take either one item or a whole collection
impl AsRef<[Item]> for Item {
    fn as_ref(&self) -> &[Item] {
        std::slice::from_ref(self)
    }
}

impl AsMut<[Item]> for Item {
    fn as_mut(&mut self) -> &mut [Item] {
        std::slice::from_mut(self)
    }
}
