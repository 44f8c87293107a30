mod client;

pub use client::ClientSummary;
