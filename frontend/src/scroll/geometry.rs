use web_sys::{Element, Window};
use yew::NodeRef;

use crate::error::{self, DomError};
use crate::scroll::mapper::clamp_fraction;

/// Where a pinned section sits in the document, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedGeometry {
    pub section_top: f64,
    pub section_height: f64,
    pub viewport_height: f64,
}

impl PinnedGeometry {
    /// Scroll distance over which the section stays pinned.
    pub fn travel(&self) -> f64 {
        (self.section_height - self.viewport_height).max(0.0)
    }

    pub fn fraction_at(&self, scroll_y: f64) -> f64 {
        let travel = self.travel();
        if travel <= 0.0 {
            return 0.0;
        }
        clamp_fraction((scroll_y - self.section_top) / travel)
    }

    pub fn offset_for(&self, fraction: f64) -> f64 {
        self.section_top + clamp_fraction(fraction) * self.travel()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub geometry: PinnedGeometry,
    pub scroll_y: f64,
}

impl ScrollSample {
    pub fn read(window: &Window, section: &Element) -> Result<Self, DomError> {
        let scroll_y = window
            .scroll_y()
            .map_err(|e| DomError::js("window.scrollY", e))?;
        let viewport_height = window
            .inner_height()
            .map_err(|e| DomError::js("window.innerHeight", e))?
            .as_f64()
            .unwrap_or(0.0);
        let rect = section.get_bounding_client_rect();

        Ok(Self {
            geometry: PinnedGeometry {
                // bounding rect is viewport relative
                section_top: rect.top() + scroll_y,
                section_height: rect.height(),
                viewport_height,
            },
            scroll_y,
        })
    }

    pub fn fraction(&self) -> f64 {
        self.geometry.fraction_at(self.scroll_y)
    }
}

pub fn sample_section(section: &NodeRef) -> Result<ScrollSample, DomError> {
    let window = error::window()?;
    let element = section
        .cast::<Element>()
        .ok_or(DomError::Unmounted("pinned section"))?;
    ScrollSample::read(&window, &element)
}

pub fn sample_fraction(section: &NodeRef) -> Result<f64, DomError> {
    sample_section(section).map(|sample| sample.fraction())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> PinnedGeometry {
        PinnedGeometry {
            section_top: 1200.0,
            section_height: 5000.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn fraction_runs_across_the_pinned_travel() {
        let g = geometry();
        assert_eq!(g.travel(), 4000.0);
        assert_eq!(g.fraction_at(1200.0), 0.0);
        assert_eq!(g.fraction_at(3200.0), 0.5);
        assert_eq!(g.fraction_at(5200.0), 1.0);
    }

    #[test]
    fn fraction_is_clamped_outside_the_section() {
        let g = geometry();
        assert_eq!(g.fraction_at(0.0), 0.0);
        assert_eq!(g.fraction_at(90_000.0), 1.0);
    }

    #[test]
    fn section_shorter_than_viewport_has_no_travel() {
        let g = PinnedGeometry {
            section_top: 300.0,
            section_height: 600.0,
            viewport_height: 900.0,
        };
        assert_eq!(g.travel(), 0.0);
        assert_eq!(g.fraction_at(450.0), 0.0);
        assert_eq!(g.offset_for(1.0), 300.0);
    }

    #[test]
    fn offset_inverts_fraction() {
        let g = geometry();
        for fraction in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(g.fraction_at(g.offset_for(fraction)), fraction);
        }
        assert_eq!(g.offset_for(2.0), 5200.0);
    }

    #[test]
    fn sample_fraction_uses_current_scroll() {
        let sample = ScrollSample {
            geometry: geometry(),
            scroll_y: 2200.0,
        };
        assert_eq!(sample.fraction(), 0.25);
    }
}
