use serde::Deserialize;

use crate::error::Result;
use super::item::Item;

pub const PRICE_OVERVIEW_URL: &str = "https://steamcommunity.com/market/priceoverview";

/// Body returned by the Steam `priceoverview` endpoint, e.g.
/// `{"success":true,"lowest_price":"$0.05","volume":"108","median_price":"$0.03"}`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PriceOverview {
    pub success: bool,
    #[serde(default)]
    pub lowest_price: Option<String>,
    #[serde(default)]
    pub median_price: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
}

impl PriceOverview {
    pub fn lowest_price(&self) -> Option<String> {
        non_blank(&self.lowest_price)
    }

    pub fn median_price(&self) -> Option<String> {
        non_blank(&self.median_price)
    }

    /// Steam sends the volume as text and groups thousands with commas ("1,234").
    pub fn volume(&self) -> Option<u64> {
        self.volume.as_deref()
            .map(|v| v.trim().replace(',', ""))
            .and_then(|v| v.parse::<u64>().ok())
    }

    pub fn apply_to(&self, item: &mut Item) -> Result<()> {
        item.set_lowest_price( self.lowest_price() )?;
        item.set_median_price( self.median_price() )?;
        item.set_volume( self.volume() );
        Ok(())
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}
