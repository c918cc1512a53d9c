//! Shared helpers for the integration tests: an in-memory PDF builder and
//! reference tables parsed from CSV text the way a deployment would load
//! them.

use lopdf::{dictionary, Document, Object, Stream};

use packlist::tables::{csv, TableSet};

/// Builds a minimal PDF with one text block per line so extracted pages
/// come back with stable line structure.
pub fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut content = String::new();
        for (i, line) in lines.iter().enumerate() {
            let escaped = line
                .replace('\\', "\\\\")
                .replace('(', "\\(")
                .replace(')', "\\)");
            content.push_str(&format!(
                "BT /F1 11 Tf 50 {} Td ({}) Tj ET\n",
                770 - 14 * i as i32,
                escaped
            ));
        }
        let content_id =
            doc.add_object(Object::Stream(Stream::new(dictionary! {}, content.into_bytes())));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("in-memory PDF save");
    bytes
}

const PRICES_CSV: &str = "\
PLN,EUR,BGN,BAM,RON,CZK,MKD,RSD,HUF
9.99,2.5,4.5,4.5,11.5,55,140,270,880
19.99,4.5,8.5,8.5,22.5,105,270,520,1690
24.99,5.5,10.5,10.5,28.5,135,340,650,2150
";

const PRODUCTS_CSV: &str = "\
DEPARTMENT,PRODUCT_NAME,EN,AL,BG,BiH,CZ,ES,ES_CA,PL,RS
BABY,T-SHIRT,t-shirt,bluze,тениска,majica,tricko,camiseta,samarreta,koszulka,majica
KIDS,SHORTS,shorts,pantallona,шорти,,kratasy,pantalon,,szorty,
";

const MATERIALS_CSV: &str = "\
Name,AL,BG,MK,RS
Cotton,pambuk,памук,памук,pamuk
Elastane,elastan,еластан,еластан,elastin
";

/// Reference tables matching what the published sheets would serve.
pub fn sample_tables() -> TableSet {
    TableSet {
        prices: csv::price_ladder(PRICES_CSV).expect("price fixture"),
        translations: csv::translation_table(PRODUCTS_CSV).expect("product fixture"),
        materials: csv::material_table(MATERIALS_CSV).expect("material fixture"),
    }
}

/// Splits one exported CSV line back into its field values. Every field is
/// quoted on export, so the outer quotes anchor the split.
pub fn split_row(line: &str) -> Vec<String> {
    let line = line.trim_start_matches('\u{feff}').trim_end();
    line.trim_start_matches('"')
        .trim_end_matches('"')
        .split("\";\"")
        .map(|field| field.replace("\"\"", "\""))
        .collect()
}
