use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use web_sys::js_sys::Date;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{COUNT_DURATION, FRAME_MS};
use crate::events::ViewportObserver;

/// Step response of a damped spring released from rest at 0 towards 1.
///
/// With the default constants the spring is overdamped (`damping^2 >
/// 4 * stiffness * mass`), so the curve rises monotonically and never
/// overshoots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self {
            stiffness: 50.0,
            damping: 20.0,
            mass: 1.0,
        }
    }
}

impl SpringCurve {
    /// Fraction of the way to the target after `t` seconds, in `[0, 1]`.
    pub fn progress(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let disc = self.damping * self.damping - 4.0 * self.stiffness * self.mass;
        let raw = if disc > 0.0 {
            let root = disc.sqrt();
            let r1 = (-self.damping + root) / (2.0 * self.mass);
            let r2 = (-self.damping - root) / (2.0 * self.mass);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        } else {
            // Critically damped; underdamped settings are treated the same so
            // the counter never runs past its target.
            let w = (self.stiffness / self.mass).sqrt();
            1.0 - (1.0 + w * t) * (-w * t).exp()
        };
        raw.clamp(0.0, 1.0)
    }
}

/// One-shot count-up animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CountUp {
    #[default]
    Idle,
    Running { elapsed: f64 },
    Done,
}

pub enum CountAction {
    Trigger,
    /// Seconds since the previous frame.
    Advance(f64),
}

impl CountUp {
    /// Starts the animation. Only the first call has any effect.
    pub fn trigger(&mut self) -> bool {
        if *self == CountUp::Idle {
            *self = CountUp::Running { elapsed: 0.0 };
            true
        } else {
            false
        }
    }

    pub fn advance(&mut self, dt: f64) {
        if let CountUp::Running { elapsed } = *self {
            let elapsed = elapsed + dt.max(0.0);
            *self = if elapsed >= COUNT_DURATION {
                CountUp::Done
            } else {
                CountUp::Running { elapsed }
            };
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, CountUp::Running { .. })
    }

    /// Whole number to show for a counter heading to `target`.
    pub fn display(&self, target: u32, curve: &SpringCurve) -> u32 {
        match *self {
            CountUp::Idle => 0,
            CountUp::Running { elapsed } => {
                let value = (target as f64 * curve.progress(elapsed)).floor() as u32;
                value.min(target)
            }
            CountUp::Done => target,
        }
    }
}

impl Reducible for CountUp {
    type Action = CountAction;

    fn reduce(self: Rc<Self>, action: CountAction) -> Rc<Self> {
        let mut next = *self;
        match action {
            CountAction::Trigger => {
                if !next.trigger() {
                    return self;
                }
            }
            CountAction::Advance(dt) => next.advance(dt),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct OdometerProps {
    pub value: u32,
    pub label: AttrValue,
}

#[function_component(Odometer)]
pub fn odometer(props: &OdometerProps) -> Html {
    let count = use_reducer_eq(CountUp::default);
    let node = use_node_ref();

    // Start counting the first time the counter scrolls into view.
    {
        let dispatcher = count.dispatcher();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_change = {
                        let dispatcher = dispatcher.clone();
                        move |visible: bool| {
                            if visible {
                                dispatcher.dispatch(CountAction::Trigger);
                            }
                        }
                    };
                    ViewportObserver::observe(&element, "-100px", on_change)
                        .map_err(|err| {
                            warn!("viewport observer unavailable, counting now: {:?}", err);
                            dispatcher.dispatch(CountAction::Trigger);
                        })
                        .ok()
                });
                move || drop(observer)
            },
            node.clone(),
        );
    }

    // Drive frames while running; dropping the interval stops them.
    {
        let dispatcher = count.dispatcher();
        let label = props.label.clone();
        use_effect_with_deps(
            move |running: &bool| {
                let interval = running.then(|| {
                    debug!("counting up {}", label);
                    let mut last = Date::now();
                    Interval::new(FRAME_MS, move || {
                        let now = Date::now();
                        dispatcher.dispatch(CountAction::Advance((now - last) / 1000.0));
                        last = now;
                    })
                });
                move || drop(interval)
            },
            count.is_running(),
        );
    }

    let shown = count.display(props.value, &SpringCurve::default());

    html! {
        <div ref={node} class="odometer">
            <div class="odometer-value">{ format!("{}+", shown) }</div>
            <div class="odometer-label">{ props.label.clone() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run_to_completion(target: u32) -> Vec<u32> {
        let curve = SpringCurve::default();
        let mut count = CountUp::default();
        let mut shown = vec![count.display(target, &curve)];
        count.trigger();
        while count != CountUp::Done {
            count.advance(FRAME);
            shown.push(count.display(target, &curve));
        }
        shown
    }

    #[test]
    fn idle_counter_shows_zero() {
        assert_eq!(CountUp::default().display(150, &SpringCurve::default()), 0);
    }

    #[test]
    fn counts_monotonically_to_target_without_overshoot() {
        for stat in crate::content::STATS.iter() {
            let shown = run_to_completion(stat.value);
            assert_eq!(shown.first(), Some(&0));
            assert_eq!(shown.last(), Some(&stat.value));
            for pair in shown.windows(2) {
                assert!(pair[0] <= pair[1], "{:?} went backwards", pair);
            }
            assert!(shown.iter().all(|v| *v <= stat.value));
        }
    }

    #[test]
    fn finishes_after_the_fixed_duration() {
        let mut count = CountUp::default();
        count.trigger();
        count.advance(COUNT_DURATION - 0.01);
        assert!(count.is_running());
        count.advance(0.02);
        assert_eq!(count, CountUp::Done);
    }

    #[test]
    fn second_trigger_is_ignored() {
        let mut count = CountUp::default();
        assert!(count.trigger());
        count.advance(0.5);
        let midway = count;
        assert!(!count.trigger());
        assert_eq!(count, midway);

        count.advance(COUNT_DURATION);
        assert!(!count.trigger());
        assert_eq!(count, CountUp::Done);
    }

    #[test]
    fn advancing_idle_does_nothing() {
        let mut count = CountUp::default();
        count.advance(1.0);
        assert_eq!(count, CountUp::Idle);
    }

    #[test]
    fn spring_curve_is_bounded_and_rising() {
        let curve = SpringCurve::default();
        assert_eq!(curve.progress(0.0), 0.0);
        let mut previous = 0.0;
        for i in 1..=400 {
            let p = curve.progress(i as f64 * 0.01);
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= previous);
            previous = p;
        }
        assert!(curve.progress(COUNT_DURATION) > 0.99);
    }

    #[test]
    fn underdamped_settings_still_never_overshoot() {
        let curve = SpringCurve {
            stiffness: 300.0,
            damping: 5.0,
            mass: 1.0,
        };
        for i in 0..=400 {
            assert!(curve.progress(i as f64 * 0.01) <= 1.0);
        }
    }

    #[test]
    fn reducer_ignores_repeated_triggers() {
        let running = Rc::new(CountUp::Running { elapsed: 0.3 });
        let next = running.clone().reduce(CountAction::Trigger);
        assert!(Rc::ptr_eq(&running, &next));
    }
}
