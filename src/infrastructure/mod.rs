// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod fixtures;
pub mod openai;
pub mod plaid;
pub mod stripe;
