//! Whole-page formatting: header, sidebar, paper list.

use crate::models::{Paper, TopTreatment, TreatmentDetail};
use crate::query::{FilterPredicate, FilterSet, Topic};
use crate::route::{Page, Route};
use crate::view::ViewState;

use super::card::{CardOptions, format_paper_card};
use super::histogram::format_distribution;

/// Portal name shown in headers.
pub const PORTAL_TITLE: &str = "Covid-19 Research Portal";

/// Message for routes naming no known page.
pub const NOT_FOUND_MESSAGE: &str =
    "Page not found! Please click one of the links in the header above to continue.";

/// Format the page for `route` from `state`.
#[must_use]
pub fn format_page(route: &Route, state: &ViewState, debug: bool) -> String {
    match &route.page {
        Page::Landing => format_landing(),
        Page::NotFound { .. } => {
            format!("{}\n{NOT_FOUND_MESSAGE}\n", format_header(route))
        }
        Page::Topic(topic) => {
            let sidebar = format_distribution(&state.distribution);
            format_results_page(route, state, topic.title(), &sidebar, debug)
        }
        Page::Search { query } => {
            let sidebar = format_distribution(&state.distribution);
            let heading = format!("Search Results for \"{query}\"");
            format_results_page(route, state, &heading, &sidebar, debug)
        }
        Page::Treatment { name } => {
            let mut sidebar = format_distribution(&state.distribution);
            sidebar.push('\n');
            let heading = match name {
                Some(name) => {
                    match &state.treatment {
                        Some(detail) => sidebar.push_str(&format_treatment_detail(
                            detail,
                            state.show_treatment_details,
                        )),
                        None => sidebar.push_str("### Treatment Details\n\nLoading...\n"),
                    }
                    format!("{}: {name}", Topic::Treatment.title())
                }
                None => {
                    sidebar.push_str(&format_top_treatments(&state.top_treatments));
                    Topic::Treatment.title().to_string()
                }
            };
            format_results_page(route, state, &heading, &sidebar, debug)
        }
    }
}

/// Splash page: title, search hint and one card per topic.
#[must_use]
pub fn format_landing() -> String {
    let mut output = format!("# {PORTAL_TITLE}\n\n");
    output.push_str("Search papers: /search/<your query>\n\n");

    for topic in Topic::ALL {
        let name = if topic == Topic::Latest { "Latest Papers" } else { topic.title() };
        output.push_str(&format!("## {name}\n{}\nView Summary: /{topic}\n\n", topic.blurb()));
    }

    output
}

/// Portal title and topic navigation, current topic bracketed.
#[must_use]
pub fn format_header(route: &Route) -> String {
    let current = route.topic();
    let nav: Vec<String> = Topic::ALL
        .into_iter()
        .map(|topic| {
            if Some(topic) == current {
                format!("[{}]", topic.title())
            } else {
                topic.title().to_string()
            }
        })
        .collect();

    let mut output = format!("# {PORTAL_TITLE}\n{}\n", nav.join(" | "));
    if let Page::Search { query } = &route.page {
        output.push_str(&format!("Search: {query}\n"));
    }
    output
}

/// Filter switches offered on a page.
#[must_use]
pub fn format_filter_switches(filters: FilterSet, offer_clinical: bool) -> String {
    FilterPredicate::ALL
        .into_iter()
        .rev()
        .filter(|p| offer_clinical || *p != FilterPredicate::ClinicalTrials)
        .map(|p| {
            let mark = if filters.is_active(p) { "x" } else { " " };
            format!("[{mark}] {}", p.label())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Numbered paper cards, a loading line, or the empty-state message.
#[must_use]
pub fn format_paper_list(papers: Option<&[Paper]>, options: CardOptions) -> String {
    match papers {
        None => "Loading papers...\n".to_string(),
        Some([]) => "No papers found!\n".to_string(),
        Some(papers) => {
            let mut output = String::new();
            for (i, paper) in papers.iter().enumerate() {
                output.push_str(&format_paper_card(paper, i + 1, options));
                output.push_str("\n---\n\n");
            }
            output
        }
    }
}

/// Treatment detail block; the collapsed form omits developer, next steps and aliases.
#[must_use]
pub fn format_treatment_detail(detail: &TreatmentDetail, expanded: bool) -> String {
    let mut output = String::from("### Treatment Details\n\n");

    if detail.is_unknown() {
        output.push_str("No details available.\n");
        return output;
    }

    fn field(value: Option<&str>) -> &str {
        value.unwrap_or("Unknown")
    }
    output.push_str(&format!("- Stage: {}\n", field(detail.stage.as_deref())));
    output.push_str(&format!("- Type: {}\n", field(detail.category.as_deref())));
    output.push_str(&format!("- Description: {}\n", field(detail.description.as_deref())));
    output.push_str(&format!(
        "- Emergency Use Authorization: {}\n",
        if detail.has_emergency_use_authorization { "Yes" } else { "No" }
    ));
    output.push_str(&format!("- Research Paper Mentions: {}\n", detail.num_paper_mentions));

    if !expanded {
        output.push_str("[Show More]\n");
        return output;
    }

    output.push_str(&format!("- Developer: {}\n", detail.developer.join(", ")));
    output.push_str("- Next Steps:\n");
    for step in &detail.next_steps {
        output.push_str(&format!("  - {step}\n"));
    }
    output.push_str("- Aliases:\n");
    for alias in &detail.aliases {
        output.push_str(&format!("  - {alias}\n"));
    }

    output
}

/// "Top-Mentioned Treatments" sidebar list.
#[must_use]
pub fn format_top_treatments(treatments: &[TopTreatment]) -> String {
    let mut output = String::from("### Top-Mentioned Treatments\n\n");
    for treatment in treatments {
        output.push_str(&format!(
            "- {} ({}) /treatment/{}\n",
            treatment.name,
            treatment.num_paper_mentions,
            urlencoding::encode(&treatment.name)
        ));
    }
    output
}

fn format_results_page(
    route: &Route,
    state: &ViewState,
    heading: &str,
    sidebar: &str,
    debug: bool,
) -> String {
    let offer_clinical = matches!(route.page, Page::Treatment { .. });
    let options = if state.expand_cards {
        CardOptions::expanded(debug)
    } else {
        CardOptions { debug, ..CardOptions::default() }
    };

    let mut output = format_header(route);
    output.push('\n');
    output.push_str(&format!("## {heading}\n"));
    output.push_str(&format_filter_switches(state.filters, offer_clinical));
    output.push_str("\n\n");
    output.push_str(sidebar);
    output.push('\n');
    output.push_str(&format_paper_list(state.papers.as_deref(), options));

    if state.has_more() {
        output.push_str("[Show More]\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_lists_every_topic() {
        let landing = format_landing();
        for topic in Topic::ALL {
            assert!(landing.contains(&format!("/{topic}")));
        }
        assert!(landing.contains("## Latest Papers"));
    }

    #[test]
    fn test_header_marks_current_topic() {
        let route = Route::new(Page::Topic(Topic::Vaccine));
        let header = format_header(&route);
        assert!(header.contains("Treatment | [Vaccine] | Prevention"));
    }

    #[test]
    fn test_not_found_keeps_navigation() {
        let route = Route::new(Page::NotFound { segment: "news".into() });
        let page = format_page(&route, &ViewState::default(), false);
        assert!(page.contains(NOT_FOUND_MESSAGE));
        assert!(page.contains("Treatment | Vaccine"));
    }

    #[test]
    fn test_filter_switches() {
        let mut filters = FilterSet::new();
        filters.set(FilterPredicate::PeerReviewed, true);
        assert_eq!(format_filter_switches(filters, false), "[x] Peer-Reviewed Papers Only");
        assert_eq!(
            format_filter_switches(filters, true),
            "[ ] Clinical Trial Results Only  [x] Peer-Reviewed Papers Only"
        );
    }

    #[test]
    fn test_paper_list_states() {
        assert_eq!(format_paper_list(None, CardOptions::default()), "Loading papers...\n");
        assert_eq!(format_paper_list(Some(&[][..]), CardOptions::default()), "No papers found!\n");
    }

    #[test]
    fn test_show_more_only_on_full_page() {
        let route = Route::new(Page::Topic(Topic::Latest));
        let full = ViewState { papers: Some(vec![Paper::default(); 10]), ..Default::default() };
        assert!(format_page(&route, &full, false).contains("[Show More]"));

        let partial = ViewState { papers: Some(vec![Paper::default(); 4]), ..Default::default() };
        assert!(!format_page(&route, &partial, false).contains("[Show More]"));
    }

    #[test]
    fn test_treatment_detail_collapsed_and_expanded() {
        let detail = TreatmentDetail {
            name: "Remdesivir".into(),
            aliases: vec!["remdesivir".into(), "GS-5734".into()],
            developer: vec!["Gilead Sciences".into()],
            stage: Some("Clinical".into()),
            has_emergency_use_authorization: true,
            num_paper_mentions: 412,
            next_steps: vec!["Phase 3".into()],
            ..Default::default()
        };

        let collapsed = format_treatment_detail(&detail, false);
        assert!(collapsed.contains("- Stage: Clinical"));
        assert!(collapsed.contains("- Type: Unknown"));
        assert!(collapsed.contains("- Description: Unknown"));
        assert!(collapsed.contains("- Emergency Use Authorization: Yes"));
        assert!(collapsed.contains("[Show More]"));
        assert!(!collapsed.contains("GS-5734"));

        let expanded = format_treatment_detail(&detail, true);
        assert!(expanded.contains("- Developer: Gilead Sciences"));
        assert!(expanded.contains("  - GS-5734"));
        assert!(expanded.contains("  - Phase 3"));
    }

    #[test]
    fn test_treatment_page_heading() {
        let route = Route::new(Page::Treatment { name: Some("remdesivir".into()) });
        let page = format_page(&route, &ViewState::default(), false);
        assert!(page.contains("## Treatment: remdesivir"));
        assert!(page.contains("[ ] Clinical Trial Results Only"));
    }

    #[test]
    fn test_top_treatments_links() {
        let list = format_top_treatments(&[TopTreatment {
            name: "Convalescent plasma".into(),
            num_paper_mentions: 90,
        }]);
        assert!(list.contains("- Convalescent plasma (90) /treatment/Convalescent%20plasma"));
    }
}
