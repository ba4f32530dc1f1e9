//! Text rendering of the publication-date histogram.

use crate::models::DistributionPoint;

/// Width of the longest bar.
const BAR_WIDTH: usize = 40;

/// Render buckets as one dated bar per line, scaled to the busiest bucket.
#[must_use]
pub fn format_distribution(points: &[DistributionPoint]) -> String {
    let mut output = String::from("### Number of Publications\n\n");

    if points.is_empty() {
        output.push_str("No publication data.\n");
        return output;
    }

    let max = points.iter().map(|p| p.count).max().unwrap_or(0).max(1);

    for point in points {
        let label = point
            .date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| point.timestamp_ms.to_string());
        let width = bar_width(point.count, max);
        output.push_str(&format!(
            "{label} {:<pad$} {}\n",
            "#".repeat(width),
            point.count,
            pad = BAR_WIDTH
        ));
    }

    output
}

fn bar_width(count: u64, max: u64) -> usize {
    if count == 0 {
        return 0;
    }
    // Non-empty buckets always get at least one mark
    ((count as f64 / max as f64) * BAR_WIDTH as f64).round().max(1.0) as usize
}
