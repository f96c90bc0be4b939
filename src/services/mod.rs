pub mod generator;
pub mod providers;
pub mod publisher;
pub mod store;

pub use generator::JokeGenerator;
pub use publisher::WebhookPublisher;
pub use store::JokeStore;
