use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPoint {
    /// Radians, counter-clockwise from the positive x axis.
    pub angle: f64,
    /// 0-100 normalized radius.
    pub radius: f64,
}

/// One section's normalized values placed on evenly spaced polar axes,
/// closed for rendering (the final point repeats the first so the
/// last-to-first edge is drawn).
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub points: Vec<RadarPoint>,
    pub labels: Vec<String>,
}

impl RadarSeries {
    pub fn project(values: &[f64]) -> Self {
        // A section with no answered questions still gets a (degenerate)
        // chart instead of crashing downstream.
        let fallback = [0.0];
        let values: &[f64] = if values.is_empty() { &fallback } else { values };

        let n = values.len();
        let mut points: Vec<RadarPoint> = values
            .iter()
            .enumerate()
            .map(|(i, &radius)| RadarPoint {
                angle: 2.0 * PI * i as f64 / n as f64,
                radius,
            })
            .collect();
        points.push(points[0]);

        let labels = (1..=n).map(|i| format!("Q{i}")).collect();

        Self { points, labels }
    }

    /// Number of axes (excludes the closing point).
    pub fn axis_count(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_closes_the_polygon() {
        let series = RadarSeries::project(&[100.0, 60.0, 0.0, 60.0]);
        assert_eq!(series.points.len(), 5);
        assert_eq!(series.points.first(), series.points.last());
        assert_eq!(series.labels, vec!["Q1", "Q2", "Q3", "Q4"]);
    }

    #[test]
    fn axes_are_evenly_spaced() {
        let series = RadarSeries::project(&[10.0, 20.0, 30.0]);
        let step = 2.0 * PI / 3.0;
        for (i, point) in series.points.iter().take(3).enumerate() {
            assert!((point.angle - step * i as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_input_falls_back_to_a_zero_spike() {
        let series = RadarSeries::project(&[]);
        assert_eq!(series.axis_count(), 1);
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].radius, 0.0);
        assert_eq!(series.points[0], series.points[1]);
    }

    #[test]
    fn single_value_spike_is_kept() {
        let series = RadarSeries::project(&[80.0]);
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].angle, 0.0);
        assert_eq!(series.points[0].radius, 80.0);
    }
}
