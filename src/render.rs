//! Terminal presentation of a prediction report.
//!
//! The gauge shows five fixed severity tiers on a 0–5 % axis while the
//! interpretation and recommendation text only distinguish the two risk
//! bands. That mismatch is deliberate: the visual is finer-grained than
//! the advice it accompanies.

use crate::types::report::{RiskBand, SocReport};

/// Lower bound of the gauge axis (% SOC).
pub const GAUGE_MIN: f64 = 0.0;
/// Upper bound of the gauge axis (% SOC).
pub const GAUGE_MAX: f64 = 5.0;

const COLUMNS_PER_UNIT: usize = 10;
const GAUGE_WIDTH: usize = (GAUGE_MAX as usize) * COLUMNS_PER_UNIT;

/// One fixed tier of the gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeSegment {
    pub lo: f64,
    pub hi: f64,
    pub label: &'static str,
    pub fill: char,
}

/// The five fixed gauge tiers, severest first.
pub const GAUGE_SEGMENTS: [GaugeSegment; 5] = [
    GaugeSegment { lo: 0.0, hi: 1.0, label: "dark red", fill: '█' },
    GaugeSegment { lo: 1.0, hi: 2.0, label: "red", fill: '▓' },
    GaugeSegment { lo: 2.0, hi: 3.0, label: "orange", fill: '▒' },
    GaugeSegment { lo: 3.0, hi: 4.0, label: "yellow", fill: '░' },
    GaugeSegment { lo: 4.0, hi: 5.0, label: "light green", fill: '·' },
];

/// Tier containing the estimate, with out-of-axis values clamped to the
/// outermost tiers. Each tier covers the half-open interval `[lo, hi)`.
pub fn segment_for(estimate: f64) -> &'static GaugeSegment {
    GAUGE_SEGMENTS
        .iter()
        .find(|segment| estimate < segment.hi)
        .unwrap_or(&GAUGE_SEGMENTS[GAUGE_SEGMENTS.len() - 1])
}

/// Needle column on the rendered axis for an estimate.
///
/// Display position only; the printed number stays unclamped.
pub fn needle_column(estimate: f64) -> usize {
    let clamped = estimate.clamp(GAUGE_MIN, GAUGE_MAX);
    let column = ((clamped - GAUGE_MIN) / (GAUGE_MAX - GAUGE_MIN) * GAUGE_WIDTH as f64) as usize;
    column.min(GAUGE_WIDTH - 1)
}

/// Render the gauge for an estimate as a multi-line string.
pub fn render_gauge(estimate: f64) -> String {
    let mut out = String::new();

    // Axis labels, one tick per unit.
    out.push_str("  ");
    for unit in 0..GAUGE_MAX as usize {
        out.push_str(&format!("{:<width$}", unit, width = COLUMNS_PER_UNIT));
    }
    out.push_str(&format!("{}\n", GAUGE_MAX as usize));

    out.push_str("  ├");
    for unit in 0..GAUGE_MAX as usize {
        out.push_str(&"─".repeat(COLUMNS_PER_UNIT - 1));
        out.push(if unit + 1 < GAUGE_MAX as usize { '┼' } else { '┤' });
    }
    out.push('\n');

    out.push_str("  ");
    for segment in &GAUGE_SEGMENTS {
        for _ in 0..COLUMNS_PER_UNIT {
            out.push(segment.fill);
        }
    }
    out.push('\n');

    let column = needle_column(estimate);
    out.push_str("  ");
    out.push_str(&" ".repeat(column));
    out.push_str(&format!(
        "▲ {:.2} % ({})\n",
        estimate,
        segment_for(estimate).label
    ));

    out
}

/// Interpretation line for a risk band.
pub fn interpretation(band: RiskBand) -> &'static str {
    match band {
        RiskBand::High => {
            "High erosion risk. The soil has low organic carbon content, \
             making it more susceptible to erosion."
        }
        RiskBand::Low => {
            "Low erosion risk. The soil has good organic carbon content, \
             providing better stability against erosion."
        }
    }
}

/// Recommended measures for a risk band.
pub fn recommendations(band: RiskBand) -> &'static [&'static str] {
    match band {
        RiskBand::High => &[
            "Implement vegetative cover to protect the soil",
            "Use terracing techniques to reduce slope effects",
            "Apply mulch or ground cover to protect soil surface",
            "Consider contour plowing to reduce water runoff",
            "Install erosion control structures",
            "Add organic matter to improve soil structure",
            "Implement conservation tillage practices",
        ],
        RiskBand::Low => &[
            "Continue current soil management practices",
            "Monitor soil conditions regularly",
            "Maintain vegetative cover",
            "Practice sustainable farming methods",
            "Consider crop rotation to maintain soil health",
            "Avoid over-tilling to preserve soil structure",
        ],
    }
}

/// Render the full report: gauge, interpretation, recommendations.
pub fn render_report(report: &SocReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Predicted Soil Organic Carbon: {:.2} %\n",
        report.estimate
    ));
    out.push_str(&format!(
        "Report {} at {}\n\n",
        report.report_id, report.timestamp
    ));
    out.push_str(&render_gauge(report.estimate));
    out.push('\n');
    out.push_str("Interpretation\n");
    out.push_str(&format!("  {}\n\n", interpretation(report.band)));
    out.push_str("Recommendations\n");
    for (i, item) in recommendations(report.band).iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, item));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_boundaries() {
        assert_eq!(segment_for(0.0).label, "dark red");
        assert_eq!(segment_for(0.99).label, "dark red");
        assert_eq!(segment_for(1.0).label, "red");
        assert_eq!(segment_for(2.0).label, "orange");
        assert_eq!(segment_for(3.5).label, "yellow");
        assert_eq!(segment_for(4.0).label, "light green");
    }

    #[test]
    fn test_segments_tile_the_axis() {
        assert_eq!(GAUGE_SEGMENTS[0].lo, GAUGE_MIN);
        assert_eq!(GAUGE_SEGMENTS[GAUGE_SEGMENTS.len() - 1].hi, GAUGE_MAX);
        for pair in GAUGE_SEGMENTS.windows(2) {
            assert_eq!(pair[0].hi, pair[1].lo);
        }
    }

    #[test]
    fn test_segment_clamps_out_of_axis_values() {
        assert_eq!(segment_for(-0.7).label, "dark red");
        assert_eq!(segment_for(5.0).label, "light green");
        assert_eq!(segment_for(12.3).label, "light green");
    }

    #[test]
    fn test_needle_column() {
        assert_eq!(needle_column(0.0), 0);
        assert_eq!(needle_column(2.5), 25);
        // Display position clamps to the axis.
        assert_eq!(needle_column(5.0), GAUGE_WIDTH - 1);
        assert_eq!(needle_column(-3.0), 0);
        assert_eq!(needle_column(99.0), GAUGE_WIDTH - 1);
    }

    #[test]
    fn test_gauge_bar_covers_all_segments() {
        let gauge = render_gauge(2.14);
        let bar_line = gauge.lines().nth(2).unwrap().trim_start();
        assert_eq!(bar_line.chars().count(), GAUGE_WIDTH);
        for segment in &GAUGE_SEGMENTS {
            assert!(bar_line.contains(segment.fill));
        }
        assert!(gauge.contains("▲ 2.14 % (orange)"));
    }

    #[test]
    fn test_text_is_keyed_by_band_only() {
        assert!(interpretation(RiskBand::High).starts_with("High erosion risk"));
        assert!(interpretation(RiskBand::Low).starts_with("Low erosion risk"));
        assert_eq!(recommendations(RiskBand::High).len(), 7);
        assert_eq!(recommendations(RiskBand::Low).len(), 6);
    }

    #[test]
    fn test_render_report_sections() {
        let report = crate::types::report::SocReport::new(1.4, RiskBand::High);
        let rendered = render_report(&report);

        assert!(rendered.contains("Predicted Soil Organic Carbon: 1.40 %"));
        assert!(rendered.contains("Interpretation"));
        assert!(rendered.contains("High erosion risk"));
        assert!(rendered.contains("7. Implement conservation tillage practices"));
    }
}
