use regex::Regex;

/// Lines containing any of these (case-insensitive) are order boilerplate,
/// never a colour name. The last two entries are literal address lines that
/// appear on every document of this family.
const SKIP_KEYWORDS: [&str; 16] = [
    "PURCHASE",
    "COLOUR",
    "TOTAL",
    "PANTONE",
    "SUPPLIER",
    "PRICE",
    "ORDERED",
    "SIZES",
    "TPG",
    "TPX",
    "USD",
    "NIP",
    "PEPCO",
    "Poland",
    "ul. Strzeszyńska 73A, 60-479 Poznań",
    "NIP 782-21-31-157",
];

/// Result of scanning page 2 for the colour token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourOutcome {
    Found(String),
    /// Either the literal "MANUAL" marker was present or no candidate line
    /// survived filtering. The colour must come from the operator; it is
    /// never invented.
    RequiresManualInput,
}

pub struct ColourExtractor {
    numeric_line: Regex,
    strip: Regex,
}

impl ColourExtractor {
    pub fn new() -> Self {
        Self {
            numeric_line: Regex::new(r"^[\d\s,./-]+$").expect("hard-coded pattern"),
            strip: Regex::new(r"[\d\.\)\(]+").expect("hard-coded pattern"),
        }
    }

    /// Picks the first non-boilerplate, non-numeric line, strips digits and
    /// parentheses, trims and upper-cases it.
    pub fn extract(&self, text: &str) -> ColourOutcome {
        let survivor = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .find(|line| {
                let lower = line.to_lowercase();
                SKIP_KEYWORDS
                    .iter()
                    .all(|keyword| !lower.contains(&keyword.to_lowercase()))
                    && !self.numeric_line.is_match(line)
            });

        match survivor {
            Some(line) => {
                let cleaned = self.strip.replace_all(line, "");
                let cleaned = cleaned.trim().to_uppercase();
                if cleaned.contains("MANUAL") {
                    return ColourOutcome::RequiresManualInput;
                }
                if cleaned.is_empty() {
                    ColourOutcome::Found("UNKNOWN".to_string())
                } else {
                    ColourOutcome::Found(cleaned)
                }
            }
            None => ColourOutcome::RequiresManualInput,
        }
    }
}

impl Default for ColourExtractor {
    fn default() -> Self {
        Self::new()
    }
}
