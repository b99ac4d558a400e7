mod client;
mod config;
mod error;
mod helpers;
mod logger;
