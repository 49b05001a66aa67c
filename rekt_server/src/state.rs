use std::sync::Arc;

use rekt_core::{BalanceProvider, PriceProvider, etherscan::Etherscan};

use crate::config::Config;

#[derive(Clone)]
pub struct ServerState {
    balance_provider: Arc<dyn BalanceProvider>,
    price_provider: Arc<dyn PriceProvider>,
}

impl From<(Arc<dyn BalanceProvider>, Arc<dyn PriceProvider>)> for ServerState {
    fn from(providers: (Arc<dyn BalanceProvider>, Arc<dyn PriceProvider>)) -> Self {
        let (balance_provider, price_provider) = providers;
        Self {
            balance_provider,
            price_provider,
        }
    }
}

impl ServerState {
    /// Both lookups go through one Etherscan client.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let etherscan = Arc::new(Etherscan::new(
            config.etherscan_url.clone(),
            config.etherscan_api_key.clone(),
            config.request_timeout,
        )?);

        log::info!("Using Etherscan at {}", etherscan.base_url());

        let balance_provider: Arc<dyn BalanceProvider> = etherscan.clone();
        let price_provider: Arc<dyn PriceProvider> = etherscan;

        Ok(Self::from((balance_provider, price_provider)))
    }

    pub fn balance_provider(&self) -> &dyn BalanceProvider {
        self.balance_provider.as_ref()
    }

    pub fn price_provider(&self) -> &dyn PriceProvider {
        self.price_provider.as_ref()
    }
}
