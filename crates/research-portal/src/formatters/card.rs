//! Paper card formatting.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::paging::{MAX_KEYWORDS, SUMMARY_PREVIEW_CHARS};
use crate::models::Paper;

/// Per-card display switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardOptions {
    /// Show the whole summary instead of a preview.
    pub full_summary: bool,
    /// Show the abstract instead of a "Show abstract" link.
    pub show_abstract: bool,
    /// Show the similarity distance.
    pub debug: bool,
}

impl CardOptions {
    /// Everything expanded.
    #[must_use]
    pub const fn expanded(debug: bool) -> Self {
        Self { full_summary: true, show_abstract: true, debug }
    }
}

static BOLD_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<b>(.*?)</b>").expect("valid bold tag pattern"));
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag pattern"));

/// Format a single paper as a card.
#[must_use]
pub fn format_paper_card(paper: &Paper, index: usize, options: CardOptions) -> String {
    let mut output = String::new();

    // Title with review markers
    output.push_str(&format!("## {}. {}", index, paper.title_or_default()));
    if paper.is_peer_reviewed {
        output.push_str(" [peer-reviewed]");
    }
    if paper.is_clinical_paper {
        output.push_str(" [clinical trial]");
    }
    output.push_str("\n\n");

    if let Some(link) = paper.link() {
        output.push_str(&format!("{link} ({})\n", paper.cord_uid));
    }

    let subtitle = format_subtitle(paper, options.debug);
    if !subtitle.is_empty() {
        output.push_str(&format!("{subtitle}\n"));
    }
    output.push('\n');

    if let Some(snippet) = paper.snippet() {
        output.push_str(&format!("> Snippet: {}\n\n", highlight_to_markdown(snippet)));
    }

    output.push_str(&format_summary(paper, options.full_summary));
    output.push_str("\n\n");
    output.push_str(&format_abstract(paper, options.show_abstract));
    output.push_str("\n\n");

    output.push_str(&format!("Topics: {}", paper.topics.join(", ")));
    let keywords: Vec<&str> =
        paper.top_keywords.iter().take(MAX_KEYWORDS).map(String::as_str).collect();
    output.push_str(&format!(" | Keywords: {}\n", keywords.join(", ")));

    output
}

/// Date, first author and journal, joined by `|`.
#[must_use]
pub fn format_subtitle(paper: &Paper, debug: bool) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(date) = paper.publish_date.as_deref().filter(|d| !d.is_empty()) {
        parts.push(date.to_string());
    }

    match paper.authors.as_slice() {
        [] => {}
        [only] => parts.push(only.clone()),
        [first, ..] => parts.push(format!("{first} et al.")),
    }

    if let Some(journal) = &paper.journal {
        parts.push(journal.clone());
    }

    if debug {
        if let Some(distance) = paper.distance {
            parts.push(format!("Distance (for debugging): {distance:.3}"));
        }
    }

    parts.join(" | ")
}

fn format_summary(paper: &Paper, full: bool) -> String {
    let summary = paper
        .summary
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("Summary not available.");

    if full {
        return format!("Machine-Generated Summary: {summary}");
    }
    match truncate_chars(summary, SUMMARY_PREVIEW_CHARS) {
        Some(preview) => {
            format!("Machine-Generated Summary: {preview}... [show full summary]")
        }
        None => format!("Machine-Generated Summary: {summary}"),
    }
}

fn format_abstract(paper: &Paper, show: bool) -> String {
    match paper.abstract_text() {
        None => "Abstract not available.".to_string(),
        Some(text) if show => format!("Abstract: {text}"),
        Some(_) => "[Show abstract]".to_string(),
    }
}

/// First `max` characters of `text`, or `None` when it is already short enough.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> Option<&str> {
    text.char_indices().nth(max).map(|(byte_index, _)| &text[..byte_index])
}

/// Turn `<b>term</b>` highlights into `**term**` and drop any other markup.
#[must_use]
pub fn highlight_to_markdown(fragment: &str) -> String {
    let bolded = BOLD_TAG.replace_all(fragment, "**$1**");
    ANY_TAG.replace_all(&bolded, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SampleSentences;

    fn paper() -> Paper {
        Paper {
            cord_uid: "abc123".into(),
            title: Some("Masks and transmission".into()),
            url: vec!["https://doi.org/10.1/abc".into()],
            authors: vec!["Chu, Derek K".into(), "Akl, Elie A".into()],
            journal: Some("Lancet".into()),
            publish_date: Some("June 01, 2020".into()),
            topics: vec!["prevention".into(), "transmission".into()],
            top_keywords: (1..=7).map(|i| format!("kw{i}")).collect(),
            summary: Some("Face masks reduce risk.".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_subtitle_multiple_authors() {
        assert_eq!(format_subtitle(&paper(), false), "June 01, 2020 | Chu, Derek K et al. | Lancet");
    }

    #[test]
    fn test_subtitle_single_author_no_journal() {
        let mut p = paper();
        p.authors.truncate(1);
        p.journal = None;
        assert_eq!(format_subtitle(&p, false), "June 01, 2020 | Chu, Derek K");
    }

    #[test]
    fn test_distance_only_in_debug() {
        let mut p = paper();
        p.distance = Some(0.12345);
        assert!(!format_subtitle(&p, false).contains("Distance"));
        assert!(format_subtitle(&p, true).ends_with("Distance (for debugging): 0.123"));
    }

    #[test]
    fn test_markers() {
        let mut p = paper();
        p.is_peer_reviewed = true;
        let card = format_paper_card(&p, 1, CardOptions::default());
        assert!(card.starts_with("## 1. Masks and transmission [peer-reviewed]\n"));
        assert!(!card.contains("[clinical trial]"));
    }

    #[test]
    fn test_summary_truncated_by_characters() {
        let mut p = paper();
        p.summary = Some("é".repeat(400));
        let card = format_paper_card(&p, 1, CardOptions::default());
        let expected = format!("Machine-Generated Summary: {}... [show full summary]", "é".repeat(300));
        assert!(card.contains(&expected));

        let full = format_paper_card(&p, 1, CardOptions::expanded(false));
        assert!(!full.contains("[show full summary]"));
    }

    #[test]
    fn test_summary_fallback() {
        let mut p = paper();
        p.summary = None;
        assert!(format_paper_card(&p, 1, CardOptions::default())
            .contains("Machine-Generated Summary: Summary not available."));
    }

    #[test]
    fn test_abstract_states() {
        let mut p = paper();
        assert!(format_paper_card(&p, 1, CardOptions::default()).contains("Abstract not available."));

        p.r#abstract = Some("Background: ...".into());
        assert!(format_paper_card(&p, 1, CardOptions::default()).contains("[Show abstract]"));
        assert!(format_paper_card(&p, 1, CardOptions::expanded(false)).contains("Abstract: Background: ..."));
    }

    #[test]
    fn test_keywords_capped_at_five() {
        let card = format_paper_card(&paper(), 1, CardOptions::default());
        assert!(card.contains("Keywords: kw1, kw2, kw3, kw4, kw5\n"));
        assert!(!card.contains("kw6"));
        assert!(card.contains("Topics: prevention, transmission"));
    }

    #[test]
    fn test_snippet_highlight() {
        let mut p = paper();
        p.sample_sentences = Some(SampleSentences {
            r#abstract: vec!["wearing <b>masks</b> was <i>associated</i> with".into()],
            ..Default::default()
        });
        let card = format_paper_card(&p, 1, CardOptions::default());
        assert!(card.contains("> Snippet: wearing **masks** was associated with"));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), None);
        assert_eq!(truncate_chars("abcdef", 3), Some("abc"));
        assert_eq!(truncate_chars("abc", 3), None);
    }
}
