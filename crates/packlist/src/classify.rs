//! Item-classification rules and the table-driven collection recode.
//!
//! Every table here is an ordered list evaluated first-match-wins; the
//! declaration order is part of the contract.

/// Collection-recode group for an item classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Yg,
    B,
    A,
    D,
    DGirls,
}

impl Category {
    pub const ALL: [Category; 5] =
        [Category::Yg, Category::B, Category::A, Category::D, Category::DGirls];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Yg => "yg",
            Category::B => "b",
            Category::A => "a",
            Category::D => "d",
            Category::DGirls => "d_girls",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "yg" => Some(Category::Yg),
            "b" => Some(Category::B),
            "a" => Some(Category::A),
            "d" => Some(Category::D),
            "d_girls" => Some(Category::DGirls),
            _ => None,
        }
    }
}

/// Ordered classification rules. A string matching several substrings gets
/// the first listed match.
const CLASSIFICATION_RULES: [(&str, Category); 10] = [
    ("younger girls outerwear", Category::Yg),
    ("baby boys outerwear", Category::B),
    ("baby girls outerwear", Category::A),
    ("baby boys essentials", Category::D),
    ("baby girls essentials", Category::DGirls),
    ("younger boys outerwear", Category::Yg),
    ("older girls outerwear", Category::Yg),
    ("older boys outerwear", Category::Yg),
    ("ladies outerwear", Category::A),
    ("mens outerwear", Category::B),
];

pub fn classify(item_classification: &str) -> Option<Category> {
    if item_classification.is_empty() {
        return None;
    }
    let lower = item_classification.to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, category)| *category)
}

/// Disjoint substring groups mapping a classification to its department.
const DEPARTMENT_GROUPS: [(&[&str], &str); 5] = [
    (
        &[
            "baby boys outerwear",
            "baby girls outerwear",
            "baby boys essentials",
            "baby girls essentials",
        ],
        "BABY",
    ),
    (&["younger boys outerwear", "younger girls outerwear"], "KIDS"),
    (&["older girls outerwear", "older boys outerwear"], "TEENS"),
    (&["ladies outerwear"], "WOMEN"),
    (&["mens outerwear"], "MEN"),
];

pub fn department(item_classification: &str) -> &'static str {
    if item_classification.is_empty() {
        return "";
    }
    let lower = item_classification.to_lowercase();
    DEPARTMENT_GROUPS
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lower.contains(needle)))
        .map(|(_, dept)| *dept)
        .unwrap_or("")
}

/// Per-category (original → replacement) collection names, scanned in
/// declared order. The first original whose upper-cased form is a substring
/// of the upper-cased input wins.
#[derive(Debug, Clone)]
pub struct CollectionMap {
    entries: Vec<(Category, Vec<(String, String)>)>,
}

impl CollectionMap {
    pub fn new(entries: Vec<(Category, Vec<(String, String)>)>) -> Self {
        Self { entries }
    }

    /// Builds a map from per-category override lists keyed by category
    /// code. A category without an override keeps the built-in pairs;
    /// unknown codes are ignored (the config loader rejects them earlier).
    pub fn with_overrides(
        overrides: &std::collections::HashMap<String, Vec<(String, String)>>,
    ) -> Self {
        let builtin = Self::default();
        let entries = Category::ALL
            .iter()
            .map(|category| {
                let pairs = overrides
                    .get(category.code())
                    .cloned()
                    .unwrap_or_else(|| builtin.pairs(*category).to_vec());
                (*category, pairs)
            })
            .collect();
        Self { entries }
    }

    pub fn pairs(&self, category: Category) -> &[(String, String)] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, pairs)| pairs.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for CollectionMap {
    /// The season's built-in recode table.
    fn default() -> Self {
        let pairs = |raw: &[(&str, &str)]| {
            raw.iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect()
        };
        Self::new(vec![
            (
                Category::B,
                pairs(&[
                    ("CROCO CLUB", "MODERN 1"),
                    ("LITTLE SAILOR", "MODERN 2"),
                    ("EXPLORE THE WORLD", "MODERN 3"),
                    ("JURASIC ADVENTURE", "MODERN 4"),
                    ("WESTERN SPIRIT", "CLASSIC 1"),
                    ("SUMMER FUN", "CLASSIC 2"),
                ]),
            ),
            (
                Category::A,
                pairs(&[
                    ("Rainbow Girl", "MODERN 1"),
                    ("NEONS PICNIC", "MODERN 2"),
                    ("COUNTRY SIDE", "ROMANTIC 2"),
                    ("ESTER GARDENG", "ROMANTIC 3"),
                ]),
            ),
            (
                Category::D,
                pairs(&[
                    ("LITTLE TREASURE", "MODERN 1"),
                    ("DINO FRIENDS", "CLASSIC 1"),
                    ("EXOTIC ANIMALS", "CLASSIC 2"),
                ]),
            ),
            (
                Category::DGirls,
                pairs(&[
                    ("SWEEET PASTELS", "MODERN 1"),
                    ("PORCELAIN", "ROMANTIC 2"),
                    ("SUMMER VIBE", "ROMANTIC 3"),
                ]),
            ),
            (
                Category::Yg,
                pairs(&[
                    ("CUTE_JUMP", "COLLECTION_1"),
                    ("SWEET_HEART", "COLLECTION_2"),
                    ("DAISY", "COLLECTION_3"),
                    ("SPECIAL OCC", "COLLECTION_4"),
                    ("LILALOV", "COLLECTION_5"),
                    ("COOL GIRL", "COLLECTION_6"),
                    ("DEL MAR", "COLLECTION_7"),
                ]),
            ),
        ])
    }
}

/// Substitutes the first matching replacement name, or returns the input
/// unchanged when nothing matches.
pub fn recode_collection(collection: &str, category: Category, map: &CollectionMap) -> String {
    let upper = collection.to_uppercase();
    for (original, replacement) in map.pairs(category) {
        if upper.contains(&original.to_uppercase()) {
            return replacement.clone();
        }
    }
    collection.to_string()
}

/// Appends the boys/girls marker after recoding. Boys groups are checked
/// first, matching the declared rule order.
pub fn collection_suffix(collection: &str, item_classification: &str) -> String {
    if item_classification.is_empty() {
        return collection.to_string();
    }
    let lower = item_classification.to_lowercase();
    if lower.contains("younger boys outerwear") || lower.contains("older boys outerwear") {
        format!("{} B", collection)
    } else if lower.contains("older girls outerwear") || lower.contains("younger girls outerwear")
    {
        format!("{} G", collection)
    } else {
        collection.to_string()
    }
}

/// Care-label glyph strings keyed by the operator's washing-code selection.
const WASHING_CODES: [(&str, &str); 15] = [
    ("1", "১২৩৪৫"),
    ("2", "১৪৭৮৫"),
    ("3", "djnst"),
    ("4", "djnpt"),
    ("5", "djnqt"),
    ("6", "djnqt"),
    ("7", "gjnpt"),
    ("8", "gjnpu"),
    ("9", "gjnqt"),
    ("10", "gjnqu"),
    ("11", "ijnst"),
    ("12", "ijnsu"),
    ("13", "ijnpu"),
    ("14", "ijnsv"),
    ("15", "djnsw"),
];

pub fn washing_code(selection: &str) -> Option<&'static str> {
    WASHING_CODES
        .iter()
        .find(|(key, _)| *key == selection)
        .map(|(_, glyphs)| *glyphs)
}

/// "Y" exactly when one material is selected and it is cotton.
pub fn cotton_flag(materials: &[String]) -> &'static str {
    let normalized: Vec<String> = materials
        .iter()
        .map(|m| m.trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect();
    if normalized.len() == 1 && normalized[0] == "cotton" {
        "Y"
    } else {
        ""
    }
}
