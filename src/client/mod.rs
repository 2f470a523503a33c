//! Client-side half of the application: a thin HTTP wrapper and the
//! observable state container the UI reads from.

pub mod api_client;
pub mod product_state;

pub use api_client::{ApiClient, ApiError};
pub use product_state::{ClientError, ProductState};
