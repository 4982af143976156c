pub mod config;
pub mod data_models;
pub mod error;
pub mod serp_client;
pub mod sink;
pub mod tracker;
