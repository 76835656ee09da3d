pub mod anomaly;
pub mod calculator;
pub mod edit;
pub mod format;
pub mod ingest;
pub mod resolver;
