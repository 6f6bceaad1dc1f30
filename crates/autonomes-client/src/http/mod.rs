pub mod client;

pub use client::HttpDashboardClient;
