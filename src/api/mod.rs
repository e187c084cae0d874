pub mod campaigns;
pub mod client;
pub mod reports;
pub mod session;

pub use client::*;
