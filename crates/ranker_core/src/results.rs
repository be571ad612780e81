use serde::{Deserialize, Deserializer};

pub const DEFAULT_KEYWORD_DISPLAY_LIMIT: usize = 40;
pub const NO_PREVIEW_PLACEHOLDER: &str = "No preview available";

/// A successful analysis: extracted keywords plus the ranked candidates.
///
/// Never patched after it is received; a new submission yields a new value.
/// Both keys must be present in the service body.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Results {
    pub keywords: Vec<String>,
    #[serde(rename = "results")]
    pub entries: Vec<CandidateResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CandidateResult {
    pub filename: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub score: f64,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub parsed: Option<ParsedResume>,
    #[serde(default)]
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub contacts: Option<Contacts>,
    #[serde(default)]
    pub matches: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Contacts {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub linkedin: Vec<String>,
    #[serde(default)]
    pub github: Vec<String>,
}

/// A missing or `null` score counts as zero.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Colour band of the score bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl Results {
    /// Bounded prefix of the keyword list for display.
    pub fn display_keywords(&self, limit: usize) -> Vec<&str> {
        self.keywords
            .iter()
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    pub fn keywords_line(&self, limit: usize) -> String {
        self.display_keywords(limit).join(", ")
    }
}

impl CandidateResult {
    fn contacts(&self) -> Option<&Contacts> {
        self.parsed.as_ref()?.contacts.as_ref()
    }

    pub fn match_count(&self) -> usize {
        self.parsed
            .as_ref()
            .and_then(|parsed| parsed.matches.as_ref())
            .map_or(0, Vec::len)
    }

    pub fn has_email(&self) -> bool {
        self.contacts().is_some_and(|c| !c.emails.is_empty())
    }

    pub fn has_phone(&self) -> bool {
        self.contacts().is_some_and(|c| !c.phones.is_empty())
    }

    pub fn has_links(&self) -> bool {
        self.contacts()
            .is_some_and(|c| !c.linkedin.is_empty() || !c.github.is_empty())
    }

    pub fn contact_name(&self) -> Option<&str> {
        self.contacts()
            .and_then(|c| c.name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    /// Score limited to `[0, 100]` for display. The stored score is untouched.
    pub fn clamped_score(&self) -> f64 {
        if self.score.is_nan() {
            0.0
        } else {
            self.score.clamp(0.0, 100.0)
        }
    }

    pub fn score_tier(&self) -> ScoreTier {
        let score = self.clamped_score();
        if score >= 80.0 {
            ScoreTier::High
        } else if score >= 50.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    /// Raw score rounded to two decimals, e.g. `72.35%`.
    pub fn score_label(&self) -> String {
        let score = if self.score.is_finite() { self.score } else { 0.0 };
        let rounded = (score * 100.0).round() / 100.0;
        format!("{rounded}%")
    }

    /// Text shown in the preview pane: excerpt, then contact name, then a
    /// placeholder.
    pub fn preview_text(&self) -> String {
        self.excerpt
            .as_deref()
            .filter(|text| !text.is_empty())
            .or_else(|| self.contact_name())
            .unwrap_or(NO_PREVIEW_PLACEHOLDER)
            .to_string()
    }
}
