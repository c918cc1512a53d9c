use chrono::{Duration, NaiveDate};

use crate::parser::{ExtractedFields, ItemCodes};

/// Sentinel for a field the document did not yield.
pub const UNKNOWN: &str = "UNKNOWN";

/// One exportable CSV row, corresponding to one barcode within one
/// uploaded document. Created once per cycle, enriched in place by the
/// later pipeline steps, discarded after export.
#[derive(Debug, Clone)]
pub struct Record {
    pub order_id: String,
    pub style: String,
    pub colour: String,
    pub supplier_product_code: String,
    pub item_classification: String,
    pub supplier_name: String,
    pub today_date: String,
    pub collection: String,
    pub colour_sku: String,
    pub style_merch_season: String,
    pub batch: String,
    pub barcode: String,
    pub washing_code: String,
    pub eur: String,
    pub bgn: String,
    pub bam: String,
    pub pln: String,
    pub ron: String,
    pub czk: String,
    pub mkd: String,
    pub rsd: String,
    pub huf: String,
    pub product_name: String,
    pub dept: String,
    pub cotton: String,
}

impl Record {
    /// Field values in the fixed export column order.
    pub fn values(&self) -> [&str; 25] {
        [
            &self.order_id,
            &self.style,
            &self.colour,
            &self.supplier_product_code,
            &self.item_classification,
            &self.supplier_name,
            &self.today_date,
            &self.collection,
            &self.colour_sku,
            &self.style_merch_season,
            &self.batch,
            &self.barcode,
            &self.washing_code,
            &self.eur,
            &self.bgn,
            &self.bam,
            &self.pln,
            &self.ron,
            &self.czk,
            &self.mkd,
            &self.rsd,
            &self.huf,
            &self.product_name,
            &self.dept,
            &self.cotton,
        ]
    }
}

/// Pairs skus[i] with barcodes[i] for i in 0..min(m, n). Extra entries in
/// the longer list are dropped; the pairing stops at the shorter list by
/// policy, it is not an error.
pub fn build_records(
    fields: &ExtractedFields,
    colour: &str,
    items: &ItemCodes,
    today: NaiveDate,
) -> Vec<Record> {
    let or_unknown =
        |field: &Option<String>| field.clone().unwrap_or_else(|| UNKNOWN.to_string());

    // Production batch is the handover date minus the 20-day lead time,
    // rendered month-first.
    let batch = fields
        .handover_date
        .map(|date| (date - Duration::days(20)).format("%m%Y").to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let batch = format!("Data e prodhimit: {}", batch);

    let style_suffix = match (&fields.merch_code, &fields.season_digits) {
        (Some(merch), Some(season)) => format!("{}{}", merch, season),
        (Some(merch), None) => merch.clone(),
        _ => String::new(),
    };
    let style_merch_season = match &fields.style_code {
        Some(style) => format!("STYLE {} • {} • Batch No./", style, style_suffix),
        None => "STYLE UNKNOWN".to_string(),
    };

    let today_date = today.format("%d-%m-%Y").to_string();

    items
        .skus
        .iter()
        .zip(items.barcodes.iter())
        .map(|(sku, barcode)| Record {
            order_id: or_unknown(&fields.order_id),
            style: or_unknown(&fields.style_code),
            colour: colour.to_string(),
            supplier_product_code: or_unknown(&fields.supplier_product_code),
            item_classification: or_unknown(&fields.item_classification),
            supplier_name: or_unknown(&fields.supplier_name),
            today_date: today_date.clone(),
            collection: or_unknown(&fields.collection),
            colour_sku: format!("{} • SKU {}", colour, sku),
            style_merch_season: style_merch_season.clone(),
            batch: batch.clone(),
            barcode: barcode.clone(),
            washing_code: String::new(),
            eur: String::new(),
            bgn: String::new(),
            bam: String::new(),
            pln: String::new(),
            ron: String::new(),
            czk: String::new(),
            mkd: String::new(),
            rsd: String::new(),
            huf: String::new(),
            product_name: String::new(),
            dept: String::new(),
            cotton: String::new(),
        })
        .collect()
}
