use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::StepDescriptor;
use crate::scroll::mapper::StepFrame;
use crate::viewport::{RenderProgress, Showcase, ViewportClass};

/// Desktop variant: a CSS 3D phone that turns as the sequence advances and
/// crossfades its screen between steps.
#[derive(Clone, Debug, PartialEq)]
pub struct PhoneScene {
    pub max_yaw_deg: f64,
    pub max_pitch_deg: f64,
}

impl Default for PhoneScene {
    fn default() -> Self {
        Self {
            max_yaw_deg: config::PHONE_MAX_YAW_DEG,
            max_pitch_deg: config::PHONE_MAX_PITCH_DEG,
        }
    }
}

impl PhoneScene {
    /// Sweeps linearly from -max to +max across the whole sequence.
    pub fn yaw(&self, frame: &StepFrame) -> f64 {
        let last = frame.step_count().saturating_sub(1);
        if last == 0 {
            return 0.0;
        }
        let progress = frame.position / last as f64;
        -self.max_yaw_deg + 2.0 * self.max_yaw_deg * progress
    }

    /// Tilts the most halfway between two steps, flat when resting on one.
    pub fn pitch(&self, frame: &StepFrame) -> f64 {
        let distance = (frame.position - frame.position.round()).abs();
        self.max_pitch_deg * distance * 2.0
    }

    pub fn transform(&self, frame: &StepFrame) -> String {
        format!(
            "rotateY({:.2}deg) rotateX({:.2}deg)",
            self.yaw(frame),
            self.pitch(frame)
        )
    }
}

impl RenderProgress for PhoneScene {
    fn render(&self, frame: &StepFrame, steps: &[StepDescriptor]) -> Html {
        html! {
            <div class="phone-stage">
                <div class="phone-body" style={format!("transform: {};", self.transform(frame))}>
                    <div class="phone-notch"></div>
                    <div class="phone-screen">
                        {
                            for steps.iter().enumerate().map(|(i, step)| html! {
                                <img
                                    src={step.screen}
                                    alt={step.title}
                                    loading="lazy"
                                    class="phone-screen-image"
                                    style={format!("opacity: {:.3};", frame.blend(i))}
                                />
                            })
                        }
                    </div>
                </div>
                <div class="phone-shadow"></div>
            </div>
        }
    }
}

/// Mobile variant: a horizontal strip of screens that slides with the position.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel;

impl Carousel {
    pub fn track_offset_percent(&self, frame: &StepFrame) -> f64 {
        -frame.position * 100.0
    }
}

impl RenderProgress for Carousel {
    fn render(&self, frame: &StepFrame, steps: &[StepDescriptor]) -> Html {
        html! {
            <div class="carousel">
                <div
                    class="carousel-track"
                    style={format!("transform: translateX({:.2}%);", self.track_offset_percent(frame))}
                >
                    {
                        for steps.iter().enumerate().map(|(i, step)| html! {
                            <div class={classes!("carousel-slide", frame.is_active(i).then(|| "active"))}>
                                <img src={step.screen} alt={step.title} loading="lazy" />
                                <span class="carousel-caption">{step.title}</span>
                            </div>
                        })
                    }
                </div>
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PhoneShowcaseProps {
    pub frame: StepFrame,
    pub steps: Vec<StepDescriptor>,
}

#[function_component(PhoneShowcase)]
pub fn phone_showcase(props: &PhoneShowcaseProps) -> Html {
    let (width, _) = use_window_size();
    let class = ViewportClass::from_width(width);
    let showcase = use_memo(
        |class| {
            debug!("Showcase layout: {:?}", class);
            Showcase::for_viewport(*class)
        },
        class,
    );

    html! {
        <div class="phone-showcase">
            { showcase.render(&props.frame, &props.steps) }
            <style>
                {r#"
                    .phone-showcase {
                        width: 100%;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                    }
                    .phone-stage {
                        perspective: 1400px;
                        position: relative;
                        padding: 2rem 0 4rem;
                    }
                    .phone-body {
                        width: 280px;
                        height: 570px;
                        border-radius: 44px;
                        background: #111;
                        border: 10px solid #1d1d1f;
                        box-shadow: 0 30px 60px rgba(0, 0, 0, 0.45);
                        transform-style: preserve-3d;
                        will-change: transform;
                        position: relative;
                    }
                    .phone-notch {
                        position: absolute;
                        top: 8px;
                        left: 50%;
                        width: 90px;
                        height: 22px;
                        margin-left: -45px;
                        border-radius: 12px;
                        background: #1d1d1f;
                        z-index: 2;
                    }
                    .phone-screen {
                        position: absolute;
                        inset: 0;
                        border-radius: 34px;
                        overflow: hidden;
                        background: #0b1220;
                    }
                    .phone-screen-image {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        will-change: opacity;
                    }
                    .phone-shadow {
                        position: absolute;
                        left: 15%;
                        right: 15%;
                        bottom: 1rem;
                        height: 24px;
                        border-radius: 50%;
                        background: radial-gradient(rgba(0, 0, 0, 0.35), transparent 70%);
                    }
                    .carousel {
                        width: 100%;
                        overflow: hidden;
                    }
                    .carousel-track {
                        display: flex;
                        will-change: transform;
                    }
                    .carousel-slide {
                        flex: 0 0 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                        opacity: 0.4;
                        transition: opacity 0.3s ease;
                    }
                    .carousel-slide.active {
                        opacity: 1;
                    }
                    .carousel-slide img {
                        width: 70%;
                        max-width: 260px;
                        border-radius: 24px;
                    }
                    .carousel-caption {
                        color: #cbd5e1;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::mapper::{BlendTuning, ScrollProgressMapper};

    fn frame(fraction: f64) -> StepFrame {
        ScrollProgressMapper::new(5, BlendTuning::default()).frame(fraction)
    }

    #[test]
    fn phone_turns_across_the_sequence() {
        let scene = PhoneScene::default();
        assert_eq!(scene.yaw(&frame(0.0)), -config::PHONE_MAX_YAW_DEG);
        assert_eq!(scene.yaw(&frame(0.5)), 0.0);
        assert_eq!(scene.yaw(&frame(1.0)), config::PHONE_MAX_YAW_DEG);
    }

    #[test]
    fn phone_tilts_between_steps_only() {
        let scene = PhoneScene::default();
        assert_eq!(scene.pitch(&frame(0.5)), 0.0);
        // position 2.5, halfway between two screens
        assert_eq!(scene.pitch(&frame(0.625)), config::PHONE_MAX_PITCH_DEG);
        assert_eq!(
            scene.transform(&frame(0.5)),
            "rotateY(0.00deg) rotateX(0.00deg)"
        );
    }

    #[test]
    fn single_screen_phone_faces_forward() {
        let single = ScrollProgressMapper::new(1, BlendTuning::default()).frame(0.7);
        assert_eq!(PhoneScene::default().yaw(&single), 0.0);
    }

    #[test]
    fn carousel_slides_one_screen_per_step() {
        assert_eq!(Carousel.track_offset_percent(&frame(0.0)), 0.0);
        assert_eq!(Carousel.track_offset_percent(&frame(0.5)), -200.0);
        assert_eq!(Carousel.track_offset_percent(&frame(1.0)), -400.0);
    }
}
