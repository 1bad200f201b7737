pub mod health;
pub mod ping;
pub mod add_item;
pub mod latest_item;

pub use health::health_handler;
pub use ping::ping_handler;
pub use add_item::add_item_handler;
pub use latest_item::latest_item_handler;
