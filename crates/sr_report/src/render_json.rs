//! Report JSON renderer (run_summary → report entries).
//!
//! Builds `serde_json::Map`s in insertion order (the crate is compiled with
//! `preserve_order`) so the emitted object reads summary-first with the
//! documented field order, independent of any canonicalization applied when
//! the artifact is written to disk.

use serde_json::{Map as JsonMap, Value};
use sr_core::entities::ReportEntry;

use crate::structure::ReportDoc;

/// Build the top-level report object.
pub fn render_report_json(doc: &ReportDoc) -> Value {
    let mut root = obj();

    let s = &doc.run_summary;
    let mut summary = obj();

    let mut engine = obj();
    engine.insert("name".into(), Value::String(s.engine.name.clone()));
    engine.insert("version".into(), Value::String(s.engine.version.clone()));
    summary.insert("engine".into(), Value::Object(engine));

    summary.insert(
        "generated_at".into(),
        Value::String(s.generated_at.clone()),
    );
    summary.insert(
        "dataset_sha256".into(),
        Value::String(s.dataset_sha256.clone()),
    );
    summary.insert("seller_count".into(), s.seller_count.into());
    summary.insert("product_count".into(), s.product_count.into());
    summary.insert("record_count".into(), s.record_count.into());
    summary.insert("records_ignored".into(), s.records_ignored.into());
    summary.insert("items_ignored".into(), s.items_ignored.into());
    root.insert("run_summary".into(), Value::Object(summary));

    let entries: Vec<Value> = doc.report.iter().map(entry_json).collect();
    root.insert("report".into(), Value::Array(entries));

    Value::Object(root)
}

fn entry_json(e: &ReportEntry) -> Value {
    let mut o = obj();
    o.insert("seller_id".into(), Value::String(e.seller_id.to_string()));
    o.insert("name".into(), Value::String(e.name.clone()));
    o.insert("revenue".into(), number(e.revenue));
    o.insert("profit".into(), number(e.profit));
    o.insert("sales_count".into(), e.sales_count.into());

    let tops: Vec<Value> = e
        .top_products
        .iter()
        .map(|t| {
            let mut row = obj();
            row.insert("sku".into(), Value::String(t.sku.to_string()));
            row.insert("quantity".into(), t.quantity.into());
            Value::Object(row)
        })
        .collect();
    o.insert("top_products".into(), Value::Array(tops));

    o.insert("bonus".into(), number(e.bonus));
    Value::Object(o)
}

fn number(x: f64) -> Value {
    serde_json::Number::from_f64(x)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn obj() -> JsonMap<String, Value> {
    JsonMap::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{EngineMeta, RunSummary};
    use sr_core::entities::TopProduct;

    fn doc() -> ReportDoc {
        ReportDoc::new(
            RunSummary {
                engine: EngineMeta::current(),
                generated_at: "2026-08-07T00:00:00Z".into(),
                dataset_sha256: "a".repeat(64),
                seller_count: 1,
                product_count: 1,
                record_count: 1,
                records_ignored: 0,
                items_ignored: 2,
            },
            vec![ReportEntry {
                seller_id: "A".into(),
                name: "Ann Lee".into(),
                revenue: 40.0,
                profit: 20.0,
                sales_count: 1,
                top_products: vec![TopProduct {
                    sku: "X".into(),
                    quantity: 2,
                }],
                bonus: 3.0,
            }],
        )
        .unwrap()
    }

    #[test]
    fn summary_comes_first_then_entries() {
        let v = render_report_json(&doc());
        let keys: Vec<&String> = v.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["run_summary", "report"]);
    }

    #[test]
    fn entry_fields_follow_the_documented_order() {
        let v = render_report_json(&doc());
        let entry = &v["report"][0];
        let keys: Vec<&String> = entry.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec![
                "seller_id",
                "name",
                "revenue",
                "profit",
                "sales_count",
                "top_products",
                "bonus"
            ]
        );
        assert_eq!(entry["revenue"], 40.0);
        assert_eq!(entry["top_products"][0]["sku"], "X");
    }

    #[test]
    fn skip_counts_are_echoed() {
        let v = render_report_json(&doc());
        assert_eq!(v["run_summary"]["items_ignored"], 2);
        assert_eq!(v["run_summary"]["records_ignored"], 0);
    }
}
