// ABOUTME: Client for the hosted profile data store

pub mod client;

pub use client::ProfileStoreClient;
