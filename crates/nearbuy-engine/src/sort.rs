use std::cmp::Reverse;

use nearbuy_core::models::AnnotatedProduct;

use crate::models::SortMode;

/// Order products according to the sort mode
///
/// All sorts are stable; ties keep their post-filter order. `SortMode::None`
/// preserves the input order exactly. Numeric keys use `total_cmp` so an
/// upstream NaN cannot panic the comparator.
pub fn rank(mut products: Vec<AnnotatedProduct>, mode: SortMode) -> Vec<AnnotatedProduct> {
    match mode {
        SortMode::None => {}
        SortMode::PriceAsc => {
            products.sort_by(|a, b| a.product.price.total_cmp(&b.product.price));
        }
        SortMode::PriceDesc => {
            products.sort_by(|a, b| b.product.price.total_cmp(&a.product.price));
        }
        SortMode::DistanceAsc => {
            products.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        }
        SortMode::NameAsc => {
            products.sort_by_cached_key(name_key);
        }
        SortMode::NameDesc => {
            products.sort_by_cached_key(|p| Reverse(name_key(p)));
        }
    }
    products
}

/// Case-insensitive name key with the raw name as tie-break
fn name_key(product: &AnnotatedProduct) -> (String, String) {
    let name = &product.product.name;
    (name.to_lowercase(), name.clone())
}
