//! Client-side routes: `/`, `/{topic}`, `/{topic}/{subtopic}`,
//! `/search/{query}`, each with an optional `?filters=a,b,c`.

use std::fmt;

use crate::error::RouteError;
use crate::query::{FilterSet, Topic};

/// Which page a route shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Splash page with the search box and topic cards.
    Landing,
    /// Papers for a topic. Subtopics are ignored outside `treatment`.
    Topic(Topic),
    /// Treatment overview, or a single treatment when `name` is set.
    Treatment {
        /// Decoded treatment name.
        name: Option<String>,
    },
    /// Free-text search results.
    Search {
        /// Decoded search text.
        query: String,
    },
    /// First path segment named no known page.
    NotFound {
        /// Decoded first segment.
        segment: String,
    },
}

/// A parsed route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Page to show.
    pub page: Page,
    /// Raw `?filters=` names in the order given.
    pub filters: Vec<String>,
}

impl Route {
    /// Route to a page with no filters.
    #[must_use]
    pub const fn new(page: Page) -> Self {
        Self { page, filters: Vec::new() }
    }

    /// Parse a route such as `/search/masks%20reused?filters=peer-reviewed`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] if the route is relative, a segment is not
    /// valid percent-encoded UTF-8, or a search route has no query.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let raw = raw.trim();
        if !raw.starts_with('/') {
            return Err(RouteError::NotAbsolute(raw.to_string()));
        }

        let (path, query_string) = raw.split_once('?').unwrap_or((raw, ""));
        let filters = parse_filters(query_string);

        let segments = path
            .split('/')
            .skip(1)
            .take(2)
            .map(decode_segment)
            .collect::<Result<Vec<_>, _>>()?;

        let first = segments.first().map(String::as_str).unwrap_or("");
        let second = segments.get(1).map(String::as_str).filter(|s| !s.is_empty());

        let page = match first {
            "" => Page::Landing,
            "search" => match second {
                Some(query) => Page::Search { query: query.to_string() },
                None => return Err(RouteError::EmptySearch),
            },
            "treatment" => Page::Treatment { name: second.map(String::from) },
            other => match other.parse::<Topic>() {
                Ok(topic) => Page::Topic(topic),
                Err(_) => Page::NotFound { segment: other.to_string() },
            },
        };

        Ok(Self { page, filters })
    }

    /// Refinements requested by the route.
    #[must_use]
    pub fn filter_set(&self) -> FilterSet {
        FilterSet::from_route_names(&self.filters)
    }

    /// Topic highlighted in the navigation, if any.
    #[must_use]
    pub const fn topic(&self) -> Option<Topic> {
        match &self.page {
            Page::Topic(topic) => Some(*topic),
            Page::Treatment { .. } => Some(Topic::Treatment),
            _ => None,
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn to_path(&self) -> String {
        let mut path = match &self.page {
            Page::Landing => "/".to_string(),
            Page::Topic(topic) => format!("/{topic}"),
            Page::Treatment { name: None } => "/treatment".to_string(),
            Page::Treatment { name: Some(name) } => {
                format!("/treatment/{}", urlencoding::encode(name))
            }
            Page::Search { query } => format!("/search/{}", urlencoding::encode(query)),
            Page::NotFound { segment } => format!("/{}", urlencoding::encode(segment)),
        };
        if !self.filters.is_empty() {
            path.push_str("?filters=");
            path.push_str(&self.filters.join(","));
        }
        path
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

fn decode_segment(segment: &str) -> Result<String, RouteError> {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| RouteError::BadEncoding(segment.to_string()))
}

fn parse_filters(query_string: &str) -> Vec<String> {
    url::form_urlencoded::parse(query_string.as_bytes())
        .filter(|(key, _)| key == "filters")
        .flat_map(|(_, value)| {
            value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .collect()
}
