mod categories;
mod display;
mod health;

pub use categories::list_categories;
pub use display::display_products;
pub use health::health_check;
