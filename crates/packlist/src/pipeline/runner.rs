use tracing::{debug, info_span, warn};

use crate::classify::{self, CollectionMap};
use crate::error::InputError;
use crate::export;
use crate::label;
use crate::parser::{ColourExtractor, ColourOutcome, FieldParser, ItemParser};
use crate::price;
use crate::processor;
use crate::record;
use crate::tables::TableSet;

use super::context::PipelineContext;
use super::error::{PipelineError, PipelineWarning};
use super::input;

/// Runs one full upload-and-configure cycle over already-resolved inputs.
/// The pipeline owns the compiled parsers and immutable table snapshots;
/// it keeps no state between runs.
pub struct Pipeline {
    fields: FieldParser,
    colour: ColourExtractor,
    items: ItemParser,
    collections: CollectionMap,
    tables: TableSet,
}

impl Pipeline {
    pub fn new(tables: TableSet, collections: CollectionMap) -> Self {
        Self {
            fields: FieldParser::new(),
            colour: ColourExtractor::new(),
            items: ItemParser::new(),
            collections,
            tables,
        }
    }

    pub fn run(&self, mut ctx: PipelineContext) -> Result<PipelineContext, PipelineError> {
        let _pipeline_span = info_span!("pipeline").entered();

        {
            let _step = info_span!("extract_pages").entered();
            self.step_extract_pages(&mut ctx)?;
        }
        {
            let _step = info_span!("parse_fields").entered();
            self.step_parse_fields(&mut ctx);
        }
        {
            let _step = info_span!("parse_colour").entered();
            self.step_parse_colour(&mut ctx);
        }
        {
            let _step = info_span!("parse_items").entered();
            self.step_parse_items(&mut ctx);
        }
        {
            let _step = info_span!("build_records").entered();
            self.step_build_records(&mut ctx);
        }
        {
            let _step = info_span!("merge_order_ids").entered();
            self.step_merge_order_ids(&mut ctx);
        }
        {
            let _step = info_span!("classify").entered();
            self.step_classify(&mut ctx);
        }
        {
            let _step = info_span!("label").entered();
            self.step_label(&mut ctx);
        }
        {
            let _step = info_span!("washing_code").entered();
            self.step_washing_code(&mut ctx)?;
        }
        {
            let _step = info_span!("prices").entered();
            self.step_prices(&mut ctx)?;
        }
        {
            let _step = info_span!("export").entered();
            self.step_export(&mut ctx);
        }

        Ok(ctx)
    }

    fn step_extract_pages(&self, ctx: &mut PipelineContext) -> Result<(), PipelineError> {
        let pages = processor::extract_pages(&ctx.pdf)?;
        if pages.len() < 3 {
            return Err(PipelineError::InsufficientPages { pages: pages.len() });
        }
        ctx.pages = Some(pages);
        Ok(())
    }

    fn step_parse_fields(&self, ctx: &mut PipelineContext) {
        let pages = ctx.pages.as_ref().expect("pages extracted");
        ctx.fields = Some(self.fields.parse_page1(&pages[0]));
    }

    fn step_parse_colour(&self, ctx: &mut PipelineContext) {
        let pages = ctx.pages.as_ref().expect("pages extracted");
        let colour = match self.colour.extract(&pages[1]) {
            ColourOutcome::Found(colour) => colour,
            ColourOutcome::RequiresManualInput => {
                ctx.warnings.push(PipelineWarning::ColourRequiresManualInput);
                let override_value = ctx
                    .input
                    .colour_override
                    .as_deref()
                    .map(str::trim)
                    .filter(|value| !value.is_empty());
                match override_value {
                    Some(value) => value.to_uppercase(),
                    None => {
                        warn!("colour requires manual input and no override was given");
                        record::UNKNOWN.to_string()
                    }
                }
            }
        };
        ctx.colour = Some(colour);
    }

    fn step_parse_items(&self, ctx: &mut PipelineContext) {
        let pages = ctx.pages.as_ref().expect("pages extracted");
        let items = self.items.parse(&pages[2]);
        if items.skus.len() != items.barcodes.len() {
            warn!(
                skus = items.skus.len(),
                barcodes = items.barcodes.len(),
                "SKU/barcode counts differ; the longer tail will be dropped"
            );
            ctx.warnings.push(PipelineWarning::UnpairedItems {
                skus: items.skus.len(),
                barcodes: items.barcodes.len(),
            });
        }
        ctx.items = Some(items);
    }

    fn step_build_records(&self, ctx: &mut PipelineContext) {
        let fields = ctx.fields.as_ref().expect("fields parsed");
        let colour = ctx.colour.as_deref().expect("colour resolved");
        let items = ctx.items.as_ref().expect("items parsed");
        ctx.records = record::build_records(fields, colour, items, ctx.today);
        debug!("built {} records", ctx.records.len());
    }

    fn step_merge_order_ids(&self, ctx: &mut PipelineContext) {
        let mut extra_ids = Vec::new();
        for bytes in &ctx.extra_pdfs {
            match processor::extract_pages(bytes) {
                Ok(pages) => {
                    if let Some(id) =
                        pages.first().and_then(|page| self.fields.parse_order_id(page))
                    {
                        extra_ids.push(id);
                    }
                }
                Err(e) => debug!("skipping unreadable secondary document: {}", e),
            }
        }
        if extra_ids.is_empty() {
            return;
        }

        let joined = extra_ids.join("+");
        for record in &mut ctx.records {
            record.order_id = format!("{}+{}", record.order_id, joined);
        }
    }

    fn step_classify(&self, ctx: &mut PipelineContext) {
        let material_names: Vec<String> = ctx
            .input
            .materials
            .iter()
            .map(|spec| spec.name.clone())
            .collect();
        let cotton = classify::cotton_flag(&material_names);

        for record in &mut ctx.records {
            record.dept = classify::department(&record.item_classification).to_string();
            if let Some(category) = classify::classify(&record.item_classification) {
                record.collection =
                    classify::recode_collection(&record.collection, category, &self.collections);
            }
            record.collection =
                classify::collection_suffix(&record.collection, &record.item_classification);
            record.cotton = cotton.to_string();
        }
    }

    fn step_label(&self, ctx: &mut PipelineContext) {
        let department = ctx.input.department.clone();
        let product_name = ctx.input.product_name.clone();

        let composition_total: f64 = ctx
            .input
            .materials
            .iter()
            .filter_map(|spec| {
                spec.composition
                    .as_deref()
                    .and_then(|c| c.trim().trim_end_matches('%').trim().parse::<f64>().ok())
            })
            .sum();
        if composition_total > 100.0 {
            warn!(total = composition_total, "material compositions exceed 100%");
            ctx.warnings.push(PipelineWarning::CompositionOver100 {
                total: composition_total,
            });
        }

        let label_text = match self.tables.translations.row(&department, &product_name) {
            Some(row) => {
                let materials = if ctx.input.materials.is_empty() {
                    None
                } else {
                    Some(label::material_text(
                        &ctx.input.materials,
                        &self.tables.materials,
                    ))
                };
                label::assemble(&product_name, row, materials.as_ref())
            }
            None => {
                warn!(
                    "product '{}' has no translation row in department '{}'",
                    product_name, department
                );
                ctx.warnings.push(PipelineWarning::ProductNotInTranslations {
                    department,
                    product_name,
                });
                String::new()
            }
        };

        for record in &mut ctx.records {
            record.product_name = label_text.clone();
        }
    }

    fn step_washing_code(&self, ctx: &mut PipelineContext) -> Result<(), PipelineError> {
        let glyphs = classify::washing_code(&ctx.input.washing_code)
            .ok_or_else(|| InputError::UnknownWashingCode(ctx.input.washing_code.clone()))?;
        for record in &mut ctx.records {
            record.washing_code = glyphs.to_string();
        }
        Ok(())
    }

    fn step_prices(&self, ctx: &mut PipelineContext) -> Result<(), PipelineError> {
        let anchor = input::parse_price(&ctx.input.pln_price)?;
        let prices = price::lookup("PLN", anchor, &self.tables.prices)?;
        let pln = price::format_number(&ctx.input.pln_price, "PLN");

        let get = |code: &str| prices.get(code).cloned().unwrap_or_default();
        for record in &mut ctx.records {
            record.eur = get("EUR");
            record.bgn = get("BGN");
            record.bam = get("BAM");
            record.pln = pln.clone();
            record.ron = get("RON");
            record.czk = get("CZK");
            record.mkd = get("MKD");
            record.rsd = get("RSD");
            record.huf = get("HUF");
        }
        Ok(())
    }

    fn step_export(&self, ctx: &mut PipelineContext) {
        ctx.csv = Some(export::csv_bytes(&ctx.records));
    }
}
