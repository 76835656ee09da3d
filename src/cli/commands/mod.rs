pub mod config;
pub mod detect;
pub mod edit;
pub mod ingest;
pub mod init;
