/// Clamped linear map from an input range onto an output range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl LinearMap {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn at(&self, value: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        if in_end == in_start {
            return out_end;
        }
        let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
        out_start + (out_end - out_start) * t
    }
}

// Vertical offsets are percentages of the layer's own height.
pub const BACKGROUND_Y: LinearMap = LinearMap::new((0.0, 1.0), (0.0, 30.0));
pub const ORB_Y: [LinearMap; 3] = [
    LinearMap::new((0.0, 1.0), (0.0, 50.0)),
    LinearMap::new((0.0, 1.0), (0.0, 40.0)),
    LinearMap::new((0.0, 1.0), (0.0, 60.0)),
];
pub const STARS_Y: LinearMap = LinearMap::new((0.0, 1.0), (0.0, 20.0));
pub const FADE_OPACITY: LinearMap = LinearMap::new((0.0, 0.8), (1.0, 0.0));

/// Progress of a section scrolling out of the viewport: 0 while its top edge
/// is at or below the viewport top, 1 once its bottom edge has passed it.
pub fn scroll_progress(section_top: f64, section_height: f64) -> f64 {
    if section_height <= 0.0 {
        return 0.0;
    }
    (-section_top / section_height).clamp(0.0, 1.0)
}

/// Every parallax-derived value of the hero for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub background_y: f64,
    pub fade_opacity: f64,
    pub orb_y: [f64; 3],
    pub stars_y: f64,
}

impl ParallaxFrame {
    pub fn at(progress: f64) -> Self {
        Self {
            background_y: BACKGROUND_Y.at(progress),
            fade_opacity: FADE_OPACITY.at(progress),
            orb_y: [ORB_Y[0].at(progress), ORB_Y[1].at(progress), ORB_Y[2].at(progress)],
            stars_y: STARS_Y.at(progress),
        }
    }

    pub fn background_style(&self) -> String {
        format!("transform: translateY({}%); opacity: {};", self.background_y, self.fade_opacity)
    }

    pub fn orb_style(&self, index: usize) -> String {
        format!("transform: translateY({}%);", self.orb_y[index])
    }

    pub fn stars_style(&self) -> String {
        format!("transform: translateY({}%);", self.stars_y)
    }
}

impl Default for ParallaxFrame {
    fn default() -> Self {
        Self::at(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn start_of_scroll_is_at_rest() {
        let frame = ParallaxFrame::at(0.0);
        assert_eq!(frame.background_y, 0.0);
        assert_eq!(frame.fade_opacity, 1.0);
        assert_eq!(frame.orb_y, [0.0, 0.0, 0.0]);
        assert_eq!(frame.stars_y, 0.0);
    }

    #[test]
    fn end_of_scroll_hits_end_values() {
        let frame = ParallaxFrame::at(1.0);
        assert!(approx(frame.background_y, 30.0));
        assert!(approx(frame.fade_opacity, 0.0));
        assert!(approx(frame.orb_y[0], 50.0));
        assert!(approx(frame.orb_y[1], 40.0));
        assert!(approx(frame.orb_y[2], 60.0));
        assert!(approx(frame.stars_y, 20.0));
    }

    #[test]
    fn layers_interpolate_independently() {
        let frame = ParallaxFrame::at(0.5);
        assert!(approx(frame.background_y, 15.0));
        assert!(approx(frame.orb_y[0], 25.0));
        assert!(approx(frame.orb_y[1], 20.0));
        assert!(approx(frame.orb_y[2], 30.0));
        assert!(approx(frame.stars_y, 10.0));
        // Fade finishes at 0.8, so halfway through its own range at 0.4.
        assert!(approx(frame.fade_opacity, 0.375));
        assert!(approx(ParallaxFrame::at(0.4).fade_opacity, 0.5));
        assert!(approx(ParallaxFrame::at(0.9).fade_opacity, 0.0));
    }

    #[test]
    fn maps_clamp_outside_their_input() {
        assert_eq!(BACKGROUND_Y.at(-1.0), 0.0);
        assert_eq!(BACKGROUND_Y.at(2.0), 30.0);
        let degenerate = LinearMap::new((0.5, 0.5), (0.0, 1.0));
        assert_eq!(degenerate.at(0.1), 1.0);
    }

    #[test]
    fn progress_follows_section_leaving_viewport() {
        assert_eq!(scroll_progress(100.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 800.0), 0.0);
        assert!(approx(scroll_progress(-200.0, 800.0), 0.25));
        assert_eq!(scroll_progress(-1200.0, 800.0), 1.0);
        assert_eq!(scroll_progress(-10.0, 0.0), 0.0);
    }
}
