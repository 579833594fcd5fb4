use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::phone_showcase::PhoneShowcase;
use crate::config;
use crate::content::{self, StepDescriptor};
use crate::error::{self, DomError};
use crate::prefs::{self, Locale};
use crate::scroll::geometry;
use crate::scroll::mapper::{BlendTuning, ScrollProgressMapper, StepFrame};
use crate::scroll::navigation::{ScrollMode, StepNavigator};
use crate::scroll::subscription::ScrollSubscription;

/// Inline style for one panel: fades with its blend, drifts with its offset,
/// and only the current panel takes clicks.
pub fn panel_style(frame: &StepFrame, step: usize) -> String {
    format!(
        "opacity: {:.3}; transform: translateY({:.1}px); pointer-events: {};",
        frame.blend(step),
        frame.offset(step) * config::PANEL_TRAVEL_PX,
        if frame.is_active(step) { "auto" } else { "none" }
    )
}

/// Height of the pinned section: one viewport of scroll per step plus the
/// viewport the sticky stage itself occupies.
pub fn section_height_vh(step_count: usize) -> f64 {
    (step_count.max(1) as f64 * config::VIEWPORTS_PER_STEP + 1.0) * 100.0
}

#[derive(Properties, PartialEq)]
pub struct StepSequenceProps {
    pub steps: Vec<StepDescriptor>,
    #[prop_or_default]
    pub tuning: BlendTuning,
}

#[function_component(StepSequence)]
pub fn step_sequence(props: &StepSequenceProps) -> Html {
    let locale = use_context::<Locale>().unwrap_or_default();
    let copy = content::page_copy(locale);

    let section_ref = use_node_ref();
    let fraction = use_state_eq(|| 0.0_f64);
    let reduced_motion = use_memo(|_| prefs::prefers_reduced_motion(), ());
    let settle = use_mut_ref(|| None::<Timeout>);

    let mapper = ScrollProgressMapper::new(props.steps.len(), props.tuning);
    let navigator = StepNavigator::new(mapper, *reduced_motion);
    let frame = mapper.frame(*fraction);

    let resample: Rc<dyn Fn()> = {
        let section_ref = section_ref.clone();
        let fraction = fraction.clone();
        Rc::new(move || match geometry::sample_fraction(&section_ref) {
            Ok(sampled) => fraction.set(sampled),
            Err(e) => debug!("Skipping scroll sample: {}", e),
        })
    };

    // Register on mount, unregister on unmount
    {
        let resample = resample.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = error::window()
                    .and_then(|window| ScrollSubscription::attach(&window, move || resample()));
                if let Err(e) = &subscription {
                    error!("Step sequence will not follow scrolling: {}", e);
                }
                move || drop(subscription)
            },
            (),
        );
    }

    let go_to = {
        let section_ref = section_ref.clone();
        let settle = settle.clone();
        Callback::from(move |target: usize| {
            let result = error::window().and_then(|window| {
                let section = section_ref
                    .cast::<Element>()
                    .ok_or(DomError::Unmounted("pinned section"))?;
                navigator.navigate(&window, &section, target)
            });
            match result {
                Ok(request) if request.mode == ScrollMode::Smooth => {
                    // The last scroll event of a smooth scroll can be coalesced
                    // away, so sample once more when it should have settled.
                    // Replacing the handle cancels the previous check.
                    let resample = resample.clone();
                    *settle.borrow_mut() =
                        Some(Timeout::new(config::NAVIGATION_SETTLE_MS, move || resample()));
                }
                Ok(_) => {}
                Err(e) => warn!("Step navigation failed: {}", e),
            }
        })
    };

    let current = frame.current;
    let last = props.steps.len().saturating_sub(1);

    let on_previous = {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| go_to.emit(current.saturating_sub(1)))
    };
    let on_next = {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| go_to.emit(current + 1))
    };

    html! {
        <section
            id="how-it-works"
            class="step-sequence"
            ref={section_ref}
            style={format!("height: {}vh;", section_height_vh(props.steps.len()))}
        >
            <div class="step-stage">
                <div class="step-copy">
                    <h2>{copy.steps_heading}</h2>
                    <p class="step-intro">{copy.steps_intro}</p>
                    <div class="step-panels">
                        {
                            for props.steps.iter().enumerate().map(|(i, step)| html! {
                                <article
                                    class={classes!("step-panel", frame.is_active(i).then(|| "active"))}
                                    style={panel_style(&frame, i)}
                                    aria-hidden={(!frame.is_active(i)).to_string()}
                                >
                                    <span class="step-label">{step.label}</span>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </article>
                            })
                        }
                    </div>
                    <div class="step-controls">
                        <button class="step-arrow" onclick={on_previous} disabled={current == 0}>
                            {"← "}{copy.previous}
                        </button>
                        <div class="step-dots">
                            {
                                for (0..props.steps.len()).map(|i| {
                                    let go_to = go_to.clone();
                                    html! {
                                        <button
                                            class={classes!("step-dot", frame.is_active(i).then(|| "active"))}
                                            aria-label={format!("{} {}", copy.go_to_step, i + 1)}
                                            onclick={Callback::from(move |_: MouseEvent| go_to.emit(i))}
                                        ></button>
                                    }
                                })
                            }
                        </div>
                        <button class="step-arrow" onclick={on_next} disabled={current >= last}>
                            {copy.next}{" →"}
                        </button>
                    </div>
                </div>
                <PhoneShowcase frame={frame.clone()} steps={props.steps.clone()} />
            </div>
            <style>
                {r#"
                    .step-sequence {
                        position: relative;
                        width: 100%;
                    }
                    .step-stage {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        align-items: center;
                        gap: 3rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .step-copy h2 {
                        font-size: 2.5rem;
                        color: #fff;
                        margin-bottom: 0.5rem;
                    }
                    .step-intro {
                        color: #94a3b8;
                        margin-bottom: 2rem;
                    }
                    .step-panels {
                        position: relative;
                        min-height: 12rem;
                    }
                    .step-panel {
                        position: absolute;
                        inset: 0;
                        will-change: opacity, transform;
                    }
                    .step-label {
                        font-family: monospace;
                        color: #38bdf8;
                        letter-spacing: 0.1em;
                    }
                    .step-panel h3 {
                        font-size: 1.75rem;
                        color: #fff;
                        margin: 0.5rem 0;
                    }
                    .step-panel p {
                        color: #cbd5e1;
                        line-height: 1.6;
                    }
                    .step-controls {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .step-arrow {
                        background: transparent;
                        border: 1px solid rgba(56, 189, 248, 0.4);
                        color: #e2e8f0;
                        border-radius: 999px;
                        padding: 0.5rem 1rem;
                        cursor: pointer;
                    }
                    .step-arrow:disabled {
                        opacity: 0.35;
                        cursor: default;
                    }
                    .step-dots {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .step-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        border: none;
                        padding: 0;
                        background: rgba(148, 163, 184, 0.4);
                        cursor: pointer;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .step-dot.active {
                        background: #38bdf8;
                        transform: scale(1.3);
                    }
                    @media (max-width: 1023px) {
                        .step-stage {
                            grid-template-columns: 1fr;
                            gap: 1.5rem;
                            padding: 4rem 1.25rem 1rem;
                        }
                        .step-copy h2 {
                            font-size: 1.8rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(fraction: f64) -> StepFrame {
        ScrollProgressMapper::new(5, BlendTuning::default()).frame(fraction)
    }

    #[test]
    fn only_the_current_panel_takes_pointer_events() {
        for fraction in [0.0, 0.1, 0.37, 0.5, 0.62, 0.9, 1.0] {
            let frame = frame(fraction);
            let interactive: Vec<usize> = (0..5)
                .filter(|&i| panel_style(&frame, i).contains("pointer-events: auto"))
                .collect();
            assert_eq!(interactive, vec![frame.current]);
        }
    }

    #[test]
    fn current_panel_rests_in_place() {
        let style = panel_style(&frame(0.5), 2);
        assert_eq!(
            style,
            "opacity: 1.000; transform: translateY(0.0px); pointer-events: auto;"
        );
    }

    #[test]
    fn hidden_panels_sit_a_full_travel_away() {
        let style = panel_style(&frame(0.0), 3);
        assert!(style.starts_with("opacity: 0.000;"));
        assert!(style.contains(&format!("translateY({:.1}px)", config::PANEL_TRAVEL_PX)));
    }

    #[test]
    fn section_grows_with_the_step_count() {
        assert_eq!(section_height_vh(5), 600.0);
        assert_eq!(section_height_vh(0), 200.0);
    }
}
