//! The fixed set of portal topics.

use std::fmt;
use std::str::FromStr;

/// A fixed category used to scope a paper query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    Treatment,
    Vaccine,
    Prevention,
    Diagnosis,
    Transmission,
    Epidemiology,
    Latest,
}

impl Topic {
    /// All topics in navigation order.
    pub const ALL: [Self; 7] = [
        Self::Treatment,
        Self::Vaccine,
        Self::Prevention,
        Self::Diagnosis,
        Self::Transmission,
        Self::Epidemiology,
        Self::Latest,
    ];

    /// Route segment and index tag for this topic.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Treatment => "treatment",
            Self::Vaccine => "vaccine",
            Self::Prevention => "prevention",
            Self::Diagnosis => "diagnosis",
            Self::Transmission => "transmission",
            Self::Epidemiology => "epidemiology",
            Self::Latest => "latest",
        }
    }

    /// Capitalized name for headings and navigation.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Treatment => "Treatment",
            Self::Vaccine => "Vaccine",
            Self::Prevention => "Prevention",
            Self::Diagnosis => "Diagnosis",
            Self::Transmission => "Transmission",
            Self::Epidemiology => "Epidemiology",
            Self::Latest => "Latest",
        }
    }

    /// Landing page card text.
    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Treatment => "Find research papers on potential COVID-19 treatments.",
            Self::Vaccine => "Find research papers on finding a vaccine for COVID-19.",
            Self::Prevention => "Find research papers on how COVID-19 can be prevented.",
            Self::Diagnosis => "Find research papers on testing for and diagnosing COVID-19.",
            Self::Transmission => "Find research papers on how COVID-19 is transmitted.",
            Self::Epidemiology => "Find research papers on measuring the spread of COVID-19.",
            Self::Latest => "Find the latest papers discussing COVID-19.",
        }
    }

    /// Search-index query selecting this topic's papers.
    ///
    /// `latest` matches everything; the backend sorts by publish date.
    #[must_use]
    pub fn query(self) -> String {
        match self {
            Self::Latest => "*".to_string(),
            topic => format!("topics:{}", topic.as_str()),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known topic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown topic '{0}'")]
pub struct UnknownTopic(pub String);

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}
