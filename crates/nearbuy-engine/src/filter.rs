use nearbuy_core::models::AnnotatedProduct;

use crate::models::{FilterCriteria, StageCounts};

/// Normalize a free-text query: trim, then lowercase
///
/// Returns `None` for absent or whitespace-only queries, which deactivates
/// the stage.
fn normalized_query(query: Option<&str>) -> Option<String> {
    let trimmed = query?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn contains_lowercase(field: Option<&str>, needle: &str) -> bool {
    field.map(|value| value.to_lowercase().contains(needle)).unwrap_or(false)
}

/// Stage 1: exact, case-sensitive vendor restriction
fn vendor_scope_matches(product: &AnnotatedProduct, scope: &str) -> bool {
    product.product.vendor.as_deref() == Some(scope)
}

/// Stage 2: case-insensitive substring over name, vendor, or category
fn search_matches(product: &AnnotatedProduct, needle: &str) -> bool {
    let p = &product.product;
    p.name.to_lowercase().contains(needle)
        || contains_lowercase(p.vendor.as_deref(), needle)
        || contains_lowercase(p.category.as_deref(), needle)
}

/// Stage 3: inclusive price bounds
fn price_in_bounds(product: &AnnotatedProduct, min: Option<f64>, max: Option<f64>) -> bool {
    let price = product.product.price;
    if let Some(min) = min {
        if price < min {
            return false;
        }
    }
    if let Some(max) = max {
        if price > max {
            return false;
        }
    }
    true
}

/// Stage 4: exact classification match
fn classification_matches(field: Option<&str>, expected: &str) -> bool {
    field == Some(expected)
}

/// Stage 5: case-insensitive substring over the vendor name
fn store_matches(product: &AnnotatedProduct, needle: &str) -> bool {
    contains_lowercase(product.product.vendor.as_deref(), needle)
}

/// Apply the filter stages in their fixed order
///
/// Returns the surviving products plus per-stage counts. The order does not
/// change the final set; it is fixed so stage logs and explanations are
/// deterministic.
pub fn apply_filters(
    products: &[AnnotatedProduct],
    criteria: &FilterCriteria,
) -> (Vec<AnnotatedProduct>, Vec<StageCounts>) {
    let mut current: Vec<AnnotatedProduct> = products.to_vec();
    let mut stages = Vec::with_capacity(6);

    run_stage(&mut current, &mut stages, "vendor-scope", criteria.vendor_scope.as_deref(), |p, scope| {
        vendor_scope_matches(p, scope)
    });

    let search = normalized_query(criteria.search_query.as_deref());
    run_stage(&mut current, &mut stages, "search", search.as_deref(), |p, needle| {
        search_matches(p, needle)
    });

    {
        let applied = criteria.price_min.is_some() || criteria.price_max.is_some();
        let evaluated = current.len();
        if applied {
            current.retain(|p| price_in_bounds(p, criteria.price_min, criteria.price_max));
        }
        record_stage(&mut stages, "price-bounds", applied, evaluated, current.len());
    }

    run_stage(&mut current, &mut stages, "category", criteria.category.as_deref(), |p, expected| {
        classification_matches(p.product.category.as_deref(), expected)
    });

    run_stage(
        &mut current,
        &mut stages,
        "subcategory",
        criteria.subcategory.as_deref(),
        |p, expected| classification_matches(p.product.subcategory.as_deref(), expected),
    );

    let store = normalized_query(criteria.store_query.as_deref());
    run_stage(&mut current, &mut stages, "store", store.as_deref(), |p, needle| {
        store_matches(p, needle)
    });

    (current, stages)
}

fn run_stage<F>(
    current: &mut Vec<AnnotatedProduct>,
    stages: &mut Vec<StageCounts>,
    name: &str,
    constraint: Option<&str>,
    predicate: F,
) where
    F: Fn(&AnnotatedProduct, &str) -> bool,
{
    let evaluated = current.len();
    if let Some(constraint) = constraint {
        current.retain(|p| predicate(p, constraint));
    }
    record_stage(stages, name, constraint.is_some(), evaluated, current.len());
}

fn record_stage(
    stages: &mut Vec<StageCounts>,
    name: &str,
    applied: bool,
    evaluated: usize,
    matched: usize,
) {
    tracing::debug!(stage = name, applied, evaluated, matched, "filter stage");
    stages.push(StageCounts { stage: name.to_string(), applied, evaluated, matched });
}
