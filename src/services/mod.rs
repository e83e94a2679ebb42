//! External collaborators: price-history provider and messaging delivery.

pub mod loader;
pub mod market_data;
pub mod notifier;
pub mod telegram;
pub mod twelve_data;

pub use loader::SeriesLoader;
pub use market_data::{MarketDataError, PriceHistoryProvider};
pub use notifier::{DeliveryError, Notifier};
pub use telegram::TelegramNotifier;
pub use twelve_data::TwelveDataClient;
