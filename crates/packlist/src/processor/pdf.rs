use lopdf::Document;

use crate::error::ExtractError;

/// Extracts plain text for every page of a PDF, in page order.
///
/// A page whose text layer cannot be decoded contributes an empty string;
/// only a byte stream that is not a PDF at all is an error. Page-count
/// requirements are enforced downstream, not here.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let _span = tracing::info_span!("processor.pdf").entered();

    let doc =
        Document::load_mem(bytes).map_err(|e| ExtractError::UnreadablePdf(e.to_string()))?;

    let mut pages = Vec::new();
    for (page_number, _) in doc.get_pages() {
        match doc.extract_text(&[page_number]) {
            Ok(text) => pages.push(text),
            Err(e) => {
                tracing::warn!("text extraction failed for page {}: {}", page_number, e);
                pages.push(String::new());
            }
        }
    }

    Ok(pages)
}

/// Test fixture: builds a minimal PDF in memory with one text line per
/// `Tj` block, so extracted pages come back with stable line structure.
#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::{dictionary, Document, Object, Stream};

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
}
