//! Shared risk-severity banding.
//!
//! Every score-to-band mapping in the dashboard goes through [`Severity`],
//! so thresholds and colors cannot drift between views.

/// Categorical risk band for a numeric score.
///
/// Thresholds mirror the backend's own bucketing; the client never
/// recomputes a score, it only colors what the backend returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Minimal,
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Band a numeric risk score.
    pub fn from_score(score: f64) -> Self {
        if score >= 40.0 {
            Severity::Critical
        } else if score >= 30.0 {
            Severity::High
        } else if score >= 20.0 {
            Severity::Medium
        } else if score >= 10.0 {
            Severity::Low
        } else {
            Severity::Minimal
        }
    }

    /// Parse a backend `risk_level` string, case-insensitively.
    pub fn parse(level: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(level.trim()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// CSS class for severity-colored text.
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Minimal => "sev-minimal",
            Severity::Low => "sev-low",
            Severity::Medium => "sev-medium",
            Severity::High => "sev-high",
            Severity::Critical => "sev-critical",
        }
    }

    /// Display color name (green/yellow/orange/red).
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Minimal | Severity::Low => "green",
            Severity::Medium => "yellow",
            Severity::High => "orange",
            Severity::Critical => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(Severity::from_score(0.0), Severity::Minimal);
        assert_eq!(Severity::from_score(9.9), Severity::Minimal);
        assert_eq!(Severity::from_score(10.0), Severity::Low);
        assert_eq!(Severity::from_score(19.9), Severity::Low);
        assert_eq!(Severity::from_score(20.0), Severity::Medium);
        assert_eq!(Severity::from_score(29.9), Severity::Medium);
        assert_eq!(Severity::from_score(30.0), Severity::High);
        assert_eq!(Severity::from_score(39.9), Severity::High);
        assert_eq!(Severity::from_score(40.0), Severity::Critical);
        assert_eq!(Severity::from_score(50.0), Severity::Critical);
    }

    #[test]
    fn band_edges_map_to_expected_colors() {
        assert_eq!(Severity::from_score(39.9).color(), "orange");
        assert_eq!(Severity::from_score(40.0).color(), "red");
        assert_eq!(Severity::from_score(20.0).color(), "yellow");
        assert_eq!(Severity::from_score(19.9).color(), "green");
    }

    #[test]
    fn monotonic_over_score_range() {
        let mut prev = Severity::Minimal;
        for i in 0..600 {
            let sev = Severity::from_score(i as f64 / 10.0);
            assert!(sev >= prev, "banding regressed at score {}", i as f64 / 10.0);
            prev = sev;
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Severity::parse("critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse("HIGH"), Some(Severity::High));
        assert_eq!(Severity::parse(" medium "), Some(Severity::Medium));
        assert_eq!(Severity::parse("unknown"), None);
    }
}
