// Domain layer - Core types and pure business rules
pub mod cash;
pub mod integrations;
pub mod metrics;
