//! Labelled points fed to the line-chart capability.

/// A single `{x-label, y}` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// Position along the x axis, starting at `1.0`.
    pub position: f64,
    /// Text shown for this point on the x axis or tooltip.
    pub label: String,
    /// Plotted value.
    pub value: f64,
}

/// Pair each score with a 1-based `Day N` label, preserving order.
#[must_use]
pub fn day_series(scores: &[u32]) -> Vec<TrendPoint> {
    scores
        .iter()
        .zip(1_u32..)
        .map(|(&score, day)| TrendPoint {
            position: f64::from(day),
            label: format!("Day {day}"),
            value: f64::from(score),
        })
        .collect()
}

/// Build a series from explicit `(label, value)` pairs.
#[must_use]
pub fn labelled_series(points: &[(&str, u32)]) -> Vec<TrendPoint> {
    points
        .iter()
        .zip(1_u32..)
        .map(|(&(label, value), position)| TrendPoint {
            position: f64::from(position),
            label: label.to_string(),
            value: f64::from(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_label_each_score_with_its_day_in_order() {
        let points = day_series(&[70, 75, 80]);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Day 1", "Day 2", "Day 3"]);
        assert!((points[2].value - 80.0).abs() < f64::EPSILON);
        assert!((points[0].position - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_produce_no_points_for_empty_history() {
        assert!(day_series(&[]).is_empty());
    }

    #[test]
    fn should_keep_explicit_labels() {
        let points = labelled_series(&[("Mon", 62), ("Tue", 64)]);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].label, "Tue");
        assert!((points[1].position - 2.0).abs() < f64::EPSILON);
    }
}
