use anyhow::Result;
use nearbuy_core::models::categories;
use serde::Serialize;
use tabled::Tabled;

use crate::output::OutputWriter;

#[derive(Tabled, Serialize)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: &'static str,

    #[tabled(rename = "Subcategories")]
    subcategories: String,
}

pub fn execute(output: &OutputWriter) -> Result<()> {
    let rows: Vec<CategoryRow> = categories()
        .iter()
        .map(|spec| CategoryRow {
            name: spec.name,
            subcategories: spec.subcategories.join(", "),
        })
        .collect();

    output.section("Categories");
    output.table(rows);

    Ok(())
}
