use futures_util::future::join_all;
use log::debug;
use reqwest::Client;

use crate::models::{item::Item, price::{PriceOverview, PRICE_OVERVIEW_URL}};

/// Client for the Steam Community Market `priceoverview` endpoint.
#[derive(Debug, Clone)]
pub struct SteamMarket {
    client: Client,
    endpoint: String,
}

impl Default for SteamMarket {
    fn default() -> Self {
        Self::new()
    }
}

impl SteamMarket {
    pub fn new() -> Self {
        Self::with_endpoint(PRICE_OVERVIEW_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        SteamMarket { client, endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    ///Looks up every item at once and fills in lowest price, median price and volume.
    ///
    ///Accepts one `Item` or any collection of them. An item whose lookup fails
    ///(network error, bad status, bad body or `success: false`) keeps whatever it had before.
    pub async fn get_items_info<I: AsMut<[Item]> + ?Sized>(&self, items: &mut I) {
        let items: &mut [Item] = items.as_mut();

        let overviews: Vec<Option<PriceOverview>> = join_all(
            items.iter().map(|item| self.search_item(item))
        ).await;

        for (item, overview) in items.iter_mut().zip(overviews) {
            let Some(overview) = overview else { continue };

            if let Err(e) = overview.apply_to(item) {
                debug!("Discarded price overview for {}: {}", item.name(), e);
            }
        }
    }

    /// `None` means nothing usable came back, the reason only goes to the log.
    pub async fn search_item(&self, item: &Item) -> Option<PriceOverview> {
        match self.fetch_price_overview(item).await {
            Ok(overview) if overview.success => Some(overview),
            Ok(_) => {
                debug!("Steam reported no price data for {}", item.name());
                None
            }
            Err(e) => {
                debug!("Price lookup for {} failed: {}", item.name(), e);
                None
            }
        }
    }

    async fn fetch_price_overview(&self, item: &Item) -> Result<PriceOverview, reqwest::Error> {
        debug!("GET {} for {} (appid {}, currency {})", self.endpoint, item.name(), item.app_id(), item.currency_id());

        self.client.get(&self.endpoint)
            .query(&[
                ("currency", item.currency_id().to_string()),
                ("appid", item.app_id().to_string()),
                ("market_hash_name", item.name().to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<PriceOverview>()
            .await
    }
}

/// Same as [`SteamMarket::get_items_info`] against the public Steam endpoint.
pub async fn get_items_info<I: AsMut<[Item]> + ?Sized>(items: &mut I) {
    SteamMarket::new().get_items_info(items).await
}
