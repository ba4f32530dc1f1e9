//! Treatment models from the portal's treatment index.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Detail record for one treatment candidate.
///
/// The endpoint answers `{"data": {}}` for an unknown name, which
/// deserializes to a record with an empty `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentDetail {
    /// Canonical treatment name.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub name: String,

    /// Other names the treatment appears under in papers.
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub aliases: Vec<String>,

    /// Developing organisations.
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub developer: Vec<String>,

    /// Development stage, e.g. "Clinical".
    #[serde(default)]
    pub stage: Option<String>,

    /// Product category, e.g. "Antivirals".
    #[serde(default, rename = "product_category")]
    pub category: Option<String>,

    /// Free-text description.
    #[serde(default, rename = "product_description")]
    pub description: Option<String>,

    /// Whether an emergency use authorization has been granted.
    #[serde(default, rename = "has_emerg_use_auth", deserialize_with = "lenient::yes_no_flag")]
    pub has_emergency_use_authorization: bool,

    /// Number of papers mentioning the treatment.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub num_paper_mentions: u64,

    /// Planned next steps.
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub next_steps: Vec<String>,
}

impl TreatmentDetail {
    /// True when the backend had no record for the requested name.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Aliases to search papers for, falling back to `fallback` when the
    /// record lists none.
    #[must_use]
    pub fn search_terms<'a>(&'a self, fallback: &'a str) -> Vec<&'a str> {
        let aliases: Vec<&str> =
            self.aliases.iter().map(|a| a.trim()).filter(|a| !a.is_empty()).collect();
        if !aliases.is_empty() {
            return aliases;
        }
        if !self.name.trim().is_empty() {
            return vec![self.name.trim()];
        }
        vec![fallback]
    }
}

/// Entry in the top-mentioned treatments list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopTreatment {
    /// Treatment name.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub name: String,

    /// Number of papers mentioning it.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub num_paper_mentions: u64,
}
