//! Closed-form curve geometry for the toys.
//!
//! Everything here is recomputed per redraw from a handful of control
//! parameters; there is no stored history.

/// A point in toy world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotates the point around the origin by `radians`.
    pub fn rotated(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

/// Samples per curve segment. Matches the sampling density the petal and
/// stem shapes were designed against.
pub const CURVE_SAMPLES: usize = 100;

/// Control polygon of a single upright petal before scaling and rotation.
/// The first three points form the right-hand lobe, the last three the
/// left-hand lobe; the outline closes back on the base.
pub const PETAL_CONTROL: [Point2; 5] = [
    Point2::new(0.0, 0.0),
    Point2::new(0.2, 0.6),
    Point2::new(0.0, 1.0),
    Point2::new(-0.2, 0.6),
    Point2::new(0.0, 0.0),
];

/// Sideways bow factor applied to stems.
pub const STEM_BOW: f32 = 0.15;

fn binomial(n: usize, k: usize) -> f32 {
    let k = k.min(n - k);
    let mut out = 1.0f32;
    for i in 0..k {
        out *= (n - i) as f32 / (i + 1) as f32;
    }
    out
}

/// Samples a Bézier curve of arbitrary degree in Bernstein form.
///
/// Returns `samples` points from `t = 0` to `t = 1` inclusive. An empty
/// control polygon yields an empty curve.
pub fn bezier(control: &[Point2], samples: usize) -> Vec<Point2> {
    if control.is_empty() || samples == 0 {
        return Vec::new();
    }
    let degree = control.len() - 1;
    let mut curve = Vec::with_capacity(samples);
    for s in 0..samples {
        let t = if samples == 1 {
            0.0
        } else {
            s as f32 / (samples - 1) as f32
        };
        let mut point = Point2::default();
        for (k, c) in control.iter().enumerate() {
            let bern =
                binomial(degree, k) * t.powi(k as i32) * (1.0 - t).powi((degree - k) as i32);
            point.x += bern * c.x;
            point.y += bern * c.y;
        }
        curve.push(point);
    }
    curve
}

/// Builds the closed outline of one petal: the control polygon scaled by
/// `size`, rotated by `angle_deg`, then traced as two quadratic lobes
/// (tip-right and tip-left) joined at the tip.
pub fn petal_outline(size: f32, angle_deg: f32) -> Vec<Point2> {
    let radians = angle_deg.to_radians();
    let points: Vec<Point2> = PETAL_CONTROL
        .iter()
        .map(|p| Point2::new(p.x * size, p.y * size).rotated(radians))
        .collect();

    let mut outline = bezier(&points[0..3], CURVE_SAMPLES);
    outline.extend(bezier(&points[2..5], CURVE_SAMPLES));
    outline
}

/// Builds a stem polyline rising `height` above `base`, bowed sideways by
/// a half-sine whose amplitude scales with the height.
pub fn stem_polyline(base: Point2, height: f32) -> Vec<Point2> {
    (0..CURVE_SAMPLES)
        .map(|i| {
            let t = i as f32 / (CURVE_SAMPLES - 1) as f32;
            Point2::new(
                base.x + STEM_BOW * (t * std::f32::consts::PI).sin() * height * 0.15,
                base.y + t * height,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn bezier_hits_endpoints() {
        let control = [
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 1.0),
            Point2::new(1.0, 0.0),
        ];
        let curve = bezier(&control, 50);
        assert_eq!(curve.len(), 50);
        assert!(close(curve[0].x, 0.0) && close(curve[0].y, 0.0));
        assert!(close(curve[49].x, 1.0) && close(curve[49].y, 0.0));
    }

    #[test]
    fn quadratic_midpoint_matches_closed_form() {
        // B(0.5) = 0.25 p0 + 0.5 p1 + 0.25 p2
        let control = [
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 1.0),
            Point2::new(1.0, 0.0),
        ];
        let curve = bezier(&control, 3);
        assert!(close(curve[1].x, 0.5));
        assert!(close(curve[1].y, 0.5));
    }

    #[test]
    fn bezier_of_nothing_is_empty() {
        assert!(bezier(&[], 10).is_empty());
        assert!(bezier(&[Point2::new(1.0, 2.0)], 0).is_empty());
    }

    #[test]
    fn rotation_quarter_turn() {
        let p = Point2::new(1.0, 0.0).rotated(std::f32::consts::FRAC_PI_2);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 1.0));
    }

    #[test]
    fn upright_petal_tip_is_at_size() {
        let outline = petal_outline(1.0, 0.0);
        // The two lobes meet at the rotated (0, 1.0) control point.
        let tip = outline[CURVE_SAMPLES - 1];
        assert!(close(tip.x, 0.0));
        assert!(close(tip.y, 1.0));
        // Outline starts and ends at the base.
        assert!(close(outline[0].y, 0.0));
        assert!(close(outline.last().unwrap().y, 0.0));
    }

    #[test]
    fn tilted_petal_tip_follows_angle() {
        let outline = petal_outline(2.0, 30.0);
        let tip = outline[CURVE_SAMPLES - 1];
        let expected = Point2::new(0.0, 2.0).rotated(30f32.to_radians());
        assert!(close(tip.x, expected.x));
        assert!(close(tip.y, expected.y));
    }

    #[test]
    fn stem_spans_base_to_height() {
        let stem = stem_polyline(Point2::new(2.0, 0.5), 3.0);
        assert_eq!(stem.len(), CURVE_SAMPLES);
        let first = stem[0];
        let last = stem[CURVE_SAMPLES - 1];
        assert!(close(first.x, 2.0) && close(first.y, 0.5));
        // The bow vanishes at both ends of the half-sine.
        assert!(close(last.x, 2.0) && close(last.y, 3.5));
        // Mid-stem bows to the right.
        assert!(stem[CURVE_SAMPLES / 2].x > 2.0);
    }
}
