mod request;
mod response;

pub use request::{DisplayProductsRequest, OriginDto};
pub use response::{CategoryView, HealthResponse};
