//! HTTP handlers for the advert collection and item resources.

pub mod advert;
pub use advert::*;
