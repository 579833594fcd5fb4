use log::debug;
use web_sys::{Element, ScrollBehavior, ScrollToOptions, Window};

use crate::error::DomError;
use crate::scroll::geometry::{PinnedGeometry, ScrollSample};
use crate::scroll::mapper::ScrollProgressMapper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

impl From<ScrollMode> for ScrollBehavior {
    fn from(mode: ScrollMode) -> Self {
        match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub step: usize,
    pub top: f64,
    pub mode: ScrollMode,
}

/// Jumps the pinned section to a given step. This only asks the browser to
/// scroll; the step sequence picks the new step up from the scroll events
/// that follow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepNavigator {
    mapper: ScrollProgressMapper,
    reduced_motion: bool,
}

impl StepNavigator {
    pub fn new(mapper: ScrollProgressMapper, reduced_motion: bool) -> Self {
        Self { mapper, reduced_motion }
    }

    pub fn mode(&self) -> ScrollMode {
        if self.reduced_motion {
            ScrollMode::Instant
        } else {
            ScrollMode::Smooth
        }
    }

    pub fn clamp_step(&self, step: usize) -> usize {
        step.min(self.mapper.step_count().saturating_sub(1))
    }

    pub fn plan(&self, geometry: &PinnedGeometry, target: usize) -> ScrollRequest {
        let step = self.clamp_step(target);
        let fraction = self.mapper.fraction_for_step(step);
        ScrollRequest {
            step,
            top: geometry.offset_for(fraction),
            mode: self.mode(),
        }
    }

    pub fn navigate(
        &self,
        window: &Window,
        section: &Element,
        target: usize,
    ) -> Result<ScrollRequest, DomError> {
        let sample = ScrollSample::read(window, section)?;
        let request = self.plan(&sample.geometry, target);
        debug!(
            "Navigating to step {} at {:.0}px ({:?})",
            request.step, request.top, request.mode
        );

        let options = ScrollToOptions::new();
        options.set_top(request.top);
        options.set_behavior(request.mode.into());
        window.scroll_to_with_scroll_to_options(&options);
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::mapper::BlendTuning;
    use proptest::prelude::*;

    fn geometry() -> PinnedGeometry {
        PinnedGeometry {
            section_top: 840.0,
            section_height: 5400.0,
            viewport_height: 900.0,
        }
    }

    fn navigator(steps: usize, reduced_motion: bool) -> StepNavigator {
        StepNavigator::new(
            ScrollProgressMapper::new(steps, BlendTuning::default()),
            reduced_motion,
        )
    }

    #[test]
    fn reduced_motion_scrolls_instantly() {
        assert_eq!(navigator(5, true).mode(), ScrollMode::Instant);
        assert_eq!(navigator(5, false).mode(), ScrollMode::Smooth);
    }

    #[test]
    fn targets_past_the_end_are_clamped() {
        let nav = navigator(5, false);
        let request = nav.plan(&geometry(), 12);
        assert_eq!(request.step, 4);
        assert_eq!(request.top, geometry().offset_for(1.0));
    }

    #[test]
    fn first_step_lands_on_section_top() {
        let request = navigator(5, true).plan(&geometry(), 0);
        assert_eq!(request.top, 840.0);
        assert_eq!(request.mode, ScrollMode::Instant);
    }

    #[test]
    fn single_step_always_targets_section_top() {
        let request = navigator(1, false).plan(&geometry(), 3);
        assert_eq!(request.step, 0);
        assert_eq!(request.top, 840.0);
    }

    proptest! {
        #[test]
        fn navigation_round_trips_through_the_mapper(
            steps in 1usize..30,
            target in 0usize..40,
            top in 0.0f64..20_000.0,
            viewport in 300.0f64..2000.0,
            reduced_motion in any::<bool>(),
        ) {
            let geometry = PinnedGeometry {
                section_top: top,
                section_height: viewport * (steps as f64 + 1.0),
                viewport_height: viewport,
            };
            let nav = navigator(steps, reduced_motion);
            let mapper = ScrollProgressMapper::new(steps, BlendTuning::default());
            let request = nav.plan(&geometry, target);

            // browsers settle on whole pixels
            let settled = request.top.round();
            let step = mapper.current_step(geometry.fraction_at(settled));
            prop_assert_eq!(step, target.min(steps - 1));
        }
    }
}
