//! The CSV artifact: semicolon-delimited, every field quoted, UTF-8 with a
//! byte-order mark so spreadsheet tools pick the encoding up correctly.

use crate::record::Record;

/// Fixed export column order.
pub const COLUMNS: [&str; 25] = [
    "Order_ID",
    "Style",
    "Colour",
    "Supplier_product_code",
    "Item_classification",
    "Supplier_name",
    "today_date",
    "Collection",
    "Colour_SKU",
    "Style_Merch_Season",
    "Batch",
    "barcode",
    "washing_code",
    "EUR",
    "BGN",
    "BAM",
    "PLN",
    "RON",
    "CZK",
    "MKD",
    "RSD",
    "HUF",
    "product_name",
    "Dept",
    "Cotton",
];

pub fn csv_bytes(records: &[Record]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice("\u{feff}".as_bytes());
    push_row(&mut out, COLUMNS.iter().copied());
    for record in records {
        push_row(&mut out, record.values().into_iter());
    }
    out
}

fn push_row<'a>(out: &mut Vec<u8>, fields: impl Iterator<Item = &'a str>) {
    let quoted: Vec<String> = fields
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect();
    out.extend_from_slice(quoted.join(";").as_bytes());
    out.extend_from_slice(b"\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            order_id: "AB123".to_string(),
            style: "123456".to_string(),
            colour: "NAVY BLUE".to_string(),
            supplier_product_code: "SPC77".to_string(),
            item_classification: "Baby Boys Outerwear".to_string(),
            supplier_name: "Example \"Tex\" Ltd".to_string(),
            today_date: "26-03-2026".to_string(),
            collection: "MODERN 1".to_string(),
            colour_sku: "NAVY BLUE • SKU 12345678".to_string(),
            style_merch_season: "STYLE 123456 • XY126 • Batch No./".to_string(),
            batch: "Data e prodhimit: 032026".to_string(),
            barcode: "1234567890123".to_string(),
            washing_code: "djnst".to_string(),
            eur: "4,50".to_string(),
            bgn: "8,50".to_string(),
            bam: "8,50".to_string(),
            pln: "19,99".to_string(),
            ron: "22,50".to_string(),
            czk: "105".to_string(),
            mkd: "270".to_string(),
            rsd: "520".to_string(),
            huf: "1690".to_string(),
            product_name: "|EN| t-shirt".to_string(),
            dept: "BABY".to_string(),
            cotton: "Y".to_string(),
        }
    }

    #[test]
    fn test_starts_with_byte_order_mark() {
        let bytes = csv_bytes(&[]);
        assert_eq!(&bytes[..3], [0xef, 0xbb, 0xbf]);
    }

    #[test]
    fn test_header_row_matches_column_order() {
        let bytes = csv_bytes(&[]);
        let text = String::from_utf8(bytes).unwrap();
        let header = text.trim_start_matches('\u{feff}').lines().next().unwrap();
        assert!(header.starts_with("\"Order_ID\";\"Style\";\"Colour\""));
        assert!(header.ends_with("\"product_name\";\"Dept\";\"Cotton\""));
        assert_eq!(header.split(';').count(), COLUMNS.len());
    }

    #[test]
    fn test_every_field_is_quoted() {
        let bytes = csv_bytes(&[record()]);
        let text = String::from_utf8(bytes).unwrap();
        let row = text.lines().nth(1).unwrap();
        for field in row.split(';') {
            assert!(field.starts_with('"') && field.ends_with('"'), "{}", field);
        }
        assert!(row.contains("\"NAVY BLUE • SKU 12345678\""));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let bytes = csv_bytes(&[record()]);
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"Example \"\"Tex\"\" Ltd\""));
    }

    #[test]
    fn test_rows_end_with_crlf() {
        let bytes = csv_bytes(&[record()]);
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.matches("\r\n").count(), 2);
    }
}
