//! Request guards run before advert handlers. Each either yields its value or
//! rejects with an [`AppError`](crate::error::AppError) that becomes the response.

pub mod advert;
pub use advert::{ExistingAdvert, ValidAdvert};
