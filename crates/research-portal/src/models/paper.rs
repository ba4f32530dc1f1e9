//! Paper data model matching the portal's search index documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// A research paper as returned by the portal's search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Unique CORD-19 identifier.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub cord_uid: String,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Links to the paper; the first one is the canonical link.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub url: Vec<String>,

    /// Author names in publication order.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub authors: Vec<String>,

    /// Journal name. The index stores it as a list.
    #[serde(default, deserialize_with = "lenient::first_non_empty")]
    pub journal: Option<String>,

    /// Human-readable publish date.
    #[serde(default, rename = "publish_date_for_web")]
    pub publish_date: Option<String>,

    /// Whether the paper is peer reviewed.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub is_peer_reviewed: bool,

    /// Whether the paper reports a clinical trial result.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub is_clinical_paper: bool,

    /// Topic tags (treatment, vaccine, ...).
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub topics: Vec<String>,

    /// Extracted keywords, most relevant first.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub top_keywords: Vec<String>,

    /// Machine-generated summary.
    #[serde(default, rename = "scibert_summary_short_cleaned")]
    pub summary: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Highlighted query matches, only present on search results.
    #[serde(default)]
    pub sample_sentences: Option<SampleSentences>,

    /// Similarity distance, only present on semantic search results.
    #[serde(default)]
    pub distance: Option<f64>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Untitled")
    }

    /// Get the canonical link if available.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.url.first().map(String::as_str)
    }

    /// Get the first author's name if available.
    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    /// Get the non-empty abstract if available.
    #[must_use]
    pub fn abstract_text(&self) -> Option<&str> {
        self.r#abstract.as_deref().filter(|a| !a.trim().is_empty())
    }

    /// Get the first highlighted snippet: abstract matches win over body text.
    #[must_use]
    pub fn snippet(&self) -> Option<&str> {
        let sentences = self.sample_sentences.as_ref()?;
        sentences
            .r#abstract
            .first()
            .or_else(|| sentences.text.first())
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Highlighted fragments keyed by the field they matched in.
///
/// Fragments contain `<b>...</b>` around matched terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSentences {
    /// Matches in the abstract.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub r#abstract: Vec<String>,

    /// Matches in the body text.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub text: Vec<String>,

    /// Matches in the title.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub title: Vec<String>,
}

/// One bucket of the publication-date histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i64, u64)", into = "(i64, u64)")]
pub struct DistributionPoint {
    /// Bucket start as milliseconds since the Unix epoch.
    pub timestamp_ms: i64,

    /// Papers published in the bucket.
    pub count: u64,
}

impl DistributionPoint {
    /// Bucket start as a UTC date-time.
    #[must_use]
    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms)
    }
}

impl From<(i64, u64)> for DistributionPoint {
    fn from((timestamp_ms, count): (i64, u64)) -> Self {
        Self { timestamp_ms, count }
    }
}

impl From<DistributionPoint> for (i64, u64) {
    fn from(point: DistributionPoint) -> Self {
        (point.timestamp_ms, point.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_deserialize_minimal() {
        let json = r#"{"cord_uid": "ug7v899j"}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.cord_uid, "ug7v899j");
        assert!(paper.title.is_none());
        assert!(paper.authors.is_empty());
        assert!(!paper.is_peer_reviewed);
        assert!(paper.snippet().is_none());
    }

    #[test]
    fn test_paper_deserialize_full() {
        let json = r#"{
            "cord_uid": "ug7v899j",
            "title": "Clinical features of culture-proven Mycoplasma pneumoniae infections",
            "url": ["https://doi.org/10.1186/1471-2334-1-6"],
            "authors": ["Madani, Tariq A", "Al-Ghamdi, Aisha A"],
            "journal": ["BMC Infect Dis"],
            "publish_date_for_web": "July 04, 2001",
            "is_peer_reviewed": true,
            "is_clinical_paper": false,
            "topics": ["diagnosis"],
            "top_keywords": ["pneumoniae", "culture"],
            "scibert_summary_short_cleaned": "A retrospective chart review.",
            "abstract": "OBJECTIVE: This retrospective chart review...",
            "sample_sentences": {"abstract": ["<b>Mycoplasma</b> infections"]}
        }"#;

        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.journal.as_deref(), Some("BMC Infect Dis"));
        assert_eq!(paper.first_author(), Some("Madani, Tariq A"));
        assert_eq!(paper.link(), Some("https://doi.org/10.1186/1471-2334-1-6"));
        assert_eq!(paper.publish_date.as_deref(), Some("July 04, 2001"));
        assert_eq!(paper.summary.as_deref(), Some("A retrospective chart review."));
        assert_eq!(paper.snippet(), Some("<b>Mycoplasma</b> infections"));
        assert!(paper.is_peer_reviewed);
    }

    #[test]
    fn test_snippet_falls_back_to_text() {
        let paper = Paper {
            sample_sentences: Some(SampleSentences {
                text: vec!["in the <b>body</b>".into()],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(paper.snippet(), Some("in the <b>body</b>"));
    }

    #[test]
    fn test_distribution_point_from_pair() {
        let points: Vec<DistributionPoint> =
            serde_json::from_str("[[1585699200000, 12], [1586304000000, 40]]").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].count, 40);
        let date = points[0].date().unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2020-04-01");
    }
}
