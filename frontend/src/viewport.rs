use yew::Html;

use crate::components::phone_showcase::{Carousel, PhoneScene};
use crate::config;
use crate::content::StepDescriptor;
use crate::scroll::mapper::StepFrame;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width >= config::DESKTOP_BREAKPOINT_PX {
            ViewportClass::Desktop
        } else {
            ViewportClass::Mobile
        }
    }
}

/// Anything that can draw the step sequence for a given scroll frame.
pub trait RenderProgress {
    fn render(&self, frame: &StepFrame, steps: &[StepDescriptor]) -> Html;
}

/// The showcase flavour picked for the current layout. Chosen once per
/// viewport class, not per frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Showcase {
    Scene(PhoneScene),
    Carousel(Carousel),
}

impl Showcase {
    pub fn for_viewport(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Desktop => Showcase::Scene(PhoneScene::default()),
            ViewportClass::Mobile => Showcase::Carousel(Carousel),
        }
    }

    pub fn viewport(&self) -> ViewportClass {
        match self {
            Showcase::Scene(_) => ViewportClass::Desktop,
            Showcase::Carousel(_) => ViewportClass::Mobile,
        }
    }
}

impl RenderProgress for Showcase {
    fn render(&self, frame: &StepFrame, steps: &[StepDescriptor]) -> Html {
        match self {
            Showcase::Scene(scene) => scene.render(frame, steps),
            Showcase::Carousel(carousel) => carousel.render(frame, steps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive_for_desktop() {
        let breakpoint = config::DESKTOP_BREAKPOINT_PX;
        assert_eq!(ViewportClass::from_width(breakpoint), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(breakpoint - 1.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(0.0), ViewportClass::Mobile);
    }

    #[test]
    fn showcase_matches_its_viewport() {
        for class in [ViewportClass::Desktop, ViewportClass::Mobile] {
            assert_eq!(Showcase::for_viewport(class).viewport(), class);
        }
    }
}
