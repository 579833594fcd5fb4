//! Maps the normalized scroll position of a pinned section onto the step
//! sequence: which step is current, and how visible every panel is.
//!
//! Everything here is a pure function of the fraction. The mapper never
//! fails; degenerate inputs produce degenerate but well-defined frames.

use log::warn;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("blend half window must be finite and positive, got {0}")]
    HalfWindow(f64),
    #[error("blend dampening must be finite and positive, got {0}")]
    Dampening(f64),
    #[error("blend half window {0} leaves no panel visible between steps, it must exceed 0.5")]
    GapBetweenSteps(f64),
    #[error("blend dampening {0} keeps panels below full opacity, it must be at most 1")]
    NeverOpaque(f64),
}

/// Crossfade shape. `half_window` is how far (in steps) a panel stays
/// visible around its own index, `dampening` how much of that window is
/// spent ramping up to full opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendTuning {
    half_window: f64,
    dampening: f64,
}

impl BlendTuning {
    pub fn new(half_window: f64, dampening: f64) -> Result<Self, TuningError> {
        if !half_window.is_finite() || half_window <= 0.0 {
            return Err(TuningError::HalfWindow(half_window));
        }
        if !dampening.is_finite() || dampening <= 0.0 {
            return Err(TuningError::Dampening(dampening));
        }
        // Nearest step is at most half a step away
        if half_window <= 0.5 {
            return Err(TuningError::GapBetweenSteps(half_window));
        }
        // Peak blend is 1 / dampening
        if dampening > 1.0 {
            return Err(TuningError::NeverOpaque(dampening));
        }
        Ok(Self { half_window, dampening })
    }
}

impl Default for BlendTuning {
    fn default() -> Self {
        Self {
            half_window: 0.6,
            dampening: 0.5,
        }
    }
}

/// The landing page's tuning from `config`, or the default if those values
/// are unusable.
pub fn configured_tuning() -> BlendTuning {
    BlendTuning::new(config::BLEND_HALF_WINDOW, config::BLEND_DAMPENING).unwrap_or_else(|e| {
        warn!("Falling back to default blend tuning: {}", e);
        BlendTuning::default()
    })
}

/// NaN reads as the top of the section; everything else is clamped to [0, 1].
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollProgressMapper {
    step_count: usize,
    tuning: BlendTuning,
}

impl ScrollProgressMapper {
    pub fn new(step_count: usize, tuning: BlendTuning) -> Self {
        Self { step_count, tuning }
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    fn last_index(&self) -> usize {
        self.step_count.saturating_sub(1)
    }

    /// Continuous position in step units, in [0, N-1].
    pub fn position(&self, fraction: f64) -> f64 {
        if self.step_count <= 1 {
            return 0.0;
        }
        clamp_fraction(fraction) * self.last_index() as f64
    }

    pub fn current_step(&self, fraction: f64) -> usize {
        let index = self.position(fraction).round() as usize;
        index.min(self.last_index())
    }

    pub fn blend(&self, fraction: f64, step: usize) -> f64 {
        if self.step_count <= 1 {
            return if step == 0 { 1.0 } else { 0.0 };
        }
        self.blend_at(self.position(fraction), step)
    }

    fn blend_at(&self, position: f64, step: usize) -> f64 {
        let half_window = self.tuning.half_window;
        let distance = (position - step as f64).abs();
        ((half_window - distance) / (half_window * self.tuning.dampening)).clamp(0.0, 1.0)
    }

    /// Fraction at which `current_step` lands exactly on `step`. Out of range
    /// steps are clamped to the last one.
    pub fn fraction_for_step(&self, step: usize) -> f64 {
        if self.step_count <= 1 {
            return 0.0;
        }
        step.min(self.last_index()) as f64 / self.last_index() as f64
    }

    pub fn frame(&self, fraction: f64) -> StepFrame {
        if self.step_count <= 1 {
            return StepFrame {
                current: 0,
                position: 0.0,
                blends: vec![1.0; self.step_count],
            };
        }
        let position = self.position(fraction);
        StepFrame {
            current: self.current_step(fraction),
            position,
            blends: (0..self.step_count)
                .map(|step| self.blend_at(position, step))
                .collect(),
        }
    }
}

/// One sample of the mapper, recomputed on every scroll event and thrown away.
#[derive(Clone, Debug, PartialEq)]
pub struct StepFrame {
    pub current: usize,
    pub position: f64,
    pub blends: Vec<f64>,
}

impl StepFrame {
    pub fn step_count(&self) -> usize {
        self.blends.len()
    }

    pub fn blend(&self, step: usize) -> f64 {
        self.blends.get(step).copied().unwrap_or(0.0)
    }

    pub fn is_active(&self, step: usize) -> bool {
        step == self.current
    }

    /// Signed displacement in [-1, 1]: panels ahead of the position sit below,
    /// panels behind sit above, fully blended panels sit in place.
    pub fn offset(&self, step: usize) -> f64 {
        let direction = (step as f64 - self.position).clamp(-1.0, 1.0);
        direction * (1.0 - self.blend(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mapper(step_count: usize) -> ScrollProgressMapper {
        ScrollProgressMapper::new(step_count, BlendTuning::default())
    }

    #[test]
    fn boundaries_hit_first_and_last_step() {
        let m = mapper(5);
        assert_eq!(m.current_step(0.0), 0);
        assert_eq!(m.current_step(1.0), 4);
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        let m = mapper(5);
        assert_eq!(m.frame(-0.5), m.frame(0.0));
        assert_eq!(m.frame(1.5), m.frame(1.0));
        assert_eq!(m.current_step(f64::NAN), 0);
        assert_eq!(m.current_step(f64::INFINITY), 4);
    }

    #[test]
    fn single_step_is_always_fully_visible() {
        let m = mapper(1);
        for fraction in [-1.0, 0.0, 0.3, 1.0, 7.0] {
            assert_eq!(m.current_step(fraction), 0);
            assert_eq!(m.blend(fraction, 0), 1.0);
        }
        assert_eq!(m.frame(0.4).blends, vec![1.0]);
    }

    #[test]
    fn zero_steps_produce_an_empty_frame() {
        let frame = mapper(0).frame(0.5);
        assert_eq!(frame.current, 0);
        assert!(frame.blends.is_empty());
    }

    #[test]
    fn middle_of_five_steps() {
        let m = mapper(5);
        let frame = m.frame(0.5);
        assert_eq!(frame.current, 2);
        assert_eq!(frame.blend(2), 1.0);
        assert_eq!(frame.blend(0), 0.0);
        assert_eq!(frame.blend(4), 0.0);
        assert_eq!(frame.offset(2), 0.0);
    }

    #[test]
    fn midpoint_between_steps_shares_the_blend() {
        let m = mapper(3);
        // position 0.5, halfway between step 0 and step 1
        let frame = m.frame(0.25);
        assert!(frame.blend(0) > 0.0 && frame.blend(0) < 1.0);
        assert!((frame.blend(0) - frame.blend(1)).abs() < 1e-9);
        assert_eq!(frame.blend(2), 0.0);
    }

    #[test]
    fn offsets_point_away_from_the_position() {
        let frame = mapper(3).frame(0.5);
        assert_eq!(frame.offset(0), -1.0);
        assert_eq!(frame.offset(1), 0.0);
        assert_eq!(frame.offset(2), 1.0);
    }

    #[test]
    fn fraction_for_step_is_clamped() {
        let m = mapper(5);
        assert_eq!(m.fraction_for_step(0), 0.0);
        assert_eq!(m.fraction_for_step(2), 0.5);
        assert_eq!(m.fraction_for_step(9), 1.0);
        assert_eq!(mapper(1).fraction_for_step(3), 0.0);
    }

    #[test]
    fn tuning_rejects_degenerate_values() {
        assert_eq!(BlendTuning::new(0.0, 0.5), Err(TuningError::HalfWindow(0.0)));
        assert_eq!(BlendTuning::new(0.6, -1.0), Err(TuningError::Dampening(-1.0)));
        assert!(matches!(
            BlendTuning::new(f64::NAN, 0.5),
            Err(TuningError::HalfWindow(_))
        ));
        assert!(BlendTuning::new(f64::INFINITY, 0.5).is_err());
        assert!(BlendTuning::new(0.51, 1.0).is_ok());
    }

    #[test]
    fn tuning_rejects_gaps_and_dim_peaks() {
        assert_eq!(
            BlendTuning::new(0.4, 0.5),
            Err(TuningError::GapBetweenSteps(0.4))
        );
        assert_eq!(
            BlendTuning::new(0.5, 0.5),
            Err(TuningError::GapBetweenSteps(0.5))
        );
        assert_eq!(
            BlendTuning::new(0.6, 2.0),
            Err(TuningError::NeverOpaque(2.0))
        );
        assert!(BlendTuning::new(0.6, 1.0).is_ok());
    }

    #[test]
    fn configured_tuning_is_valid() {
        let tuning = configured_tuning();
        assert_eq!(
            BlendTuning::new(config::BLEND_HALF_WINDOW, config::BLEND_DAMPENING),
            Ok(tuning)
        );
    }

    #[test]
    fn wider_window_keeps_neighbours_visible() {
        let narrow = mapper(5);
        let wide = ScrollProgressMapper::new(5, BlendTuning::new(1.5, 0.5).unwrap());
        assert_eq!(narrow.blend(0.5, 1), 0.0);
        assert!(wide.blend(0.5, 1) > 0.0);
    }

    proptest! {
        #[test]
        fn current_step_stays_in_range(fraction in -2.0f64..3.0, steps in 1usize..40) {
            let m = mapper(steps);
            prop_assert!(m.current_step(fraction) < steps);
        }

        #[test]
        fn current_step_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0, steps in 1usize..40) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let m = mapper(steps);
            prop_assert!(m.current_step(low) <= m.current_step(high));
        }

        #[test]
        fn blends_stay_in_unit_interval(fraction in -1.0f64..2.0, steps in 1usize..20) {
            let frame = mapper(steps).frame(fraction);
            for step in 0..steps {
                let blend = frame.blend(step);
                prop_assert!((0.0..=1.0).contains(&blend));
                prop_assert!((-1.0..=1.0).contains(&frame.offset(step)));
            }
        }

        #[test]
        fn current_step_carries_the_strongest_blend(
            fraction in 0.0f64..=1.0,
            steps in 2usize..20,
            half_window in 0.501f64..3.0,
            dampening in 0.05f64..=1.0,
        ) {
            let tuning = BlendTuning::new(half_window, dampening).unwrap();
            let frame = ScrollProgressMapper::new(steps, tuning).frame(fraction);
            let peak = frame.blend(frame.current);
            prop_assert!(peak > 0.0);
            for step in 0..steps {
                prop_assert!(frame.blend(step) <= peak);
            }
        }

        #[test]
        fn resting_on_a_step_is_fully_opaque(
            steps in 2usize..20,
            half_window in 0.501f64..3.0,
            dampening in 0.05f64..=1.0,
        ) {
            let tuning = BlendTuning::new(half_window, dampening).unwrap();
            let m = ScrollProgressMapper::new(steps, tuning);
            for step in 0..steps {
                let frame = m.frame(m.fraction_for_step(step));
                prop_assert_eq!(frame.current, step);
                prop_assert!((frame.blend(step) - 1.0).abs() < 1e-9);
            }
        }
    }
}
