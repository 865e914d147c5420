//! Plain-text report renderer for terminals.

use std::fmt::Write as _;

use crate::structure::ReportDoc;

/// Render the report as an aligned table, best seller first, with a short
/// provenance footer.
pub fn render_report_text(doc: &ReportDoc) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:>4}  {:<12} {:<24} {:>12} {:>12} {:>7} {:>10}  {}",
        "#", "seller", "name", "revenue", "profit", "sales", "bonus", "top product"
    );

    for (rank, e) in doc.report.iter().enumerate() {
        let top = e
            .top_products
            .first()
            .map(|t| format!("{} x{}", t.sku, t.quantity))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:>4}  {:<12} {:<24} {:>12.2} {:>12.2} {:>7} {:>10.2}  {}",
            rank + 1,
            e.seller_id,
            e.name,
            e.revenue,
            e.profit,
            e.sales_count,
            e.bonus,
            top
        );
    }

    let s = &doc.run_summary;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} v{} | generated {} | dataset sha256 {}",
        s.engine.name, s.engine.version, s.generated_at, s.dataset_sha256
    );
    let _ = writeln!(
        out,
        "{} sellers, {} products, {} records ({} records ignored, {} items ignored)",
        s.seller_count, s.product_count, s.record_count, s.records_ignored, s.items_ignored
    );

    out
}
