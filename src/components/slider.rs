use web_sys::{Element, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};

/// How far across the comparison container (0 to 100) the "before" image
/// reaches. Everything right of it shows the "after" image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPercentage(f64);

impl RevealPercentage {
    pub const INITIAL: f64 = 50.0;

    /// Converts a pointer's client x coordinate into a percentage of the
    /// container, clamping the offset to `[0, width]` first so positions
    /// outside the container pin to either edge.
    pub fn from_pointer(client_x: f64, left: f64, width: f64) -> Self {
        if !(width.is_finite() && width > 0.0) {
            return Self::default();
        }
        let offset = client_x - left;
        let x = if offset.is_nan() { 0.0 } else { offset.clamp(0.0, width) };
        Self(x / width * 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn before_visible_fraction(self) -> f64 {
        self.0 / 100.0
    }

    pub fn after_visible_fraction(self) -> f64 {
        1.0 - self.before_visible_fraction()
    }

    /// CSS clip for the "before" layer: a rectangle from the left edge to the
    /// current percentage.
    pub fn clip_path(self) -> String {
        format!(
            "polygon(0 0, {p}% 0, {p}% 100%, 0 100%)",
            p = self.value()
        )
    }

    pub fn handle_left(self) -> String {
        format!("left: {}%;", self.0)
    }
}

impl Default for RevealPercentage {
    fn default() -> Self {
        Self(Self::INITIAL)
    }
}

#[derive(Properties, PartialEq)]
pub struct ComparisonSliderProps {
    pub before_image: AttrValue,
    pub after_image: AttrValue,
    #[prop_or(AttrValue::Static("CONSTRUCTION PHASE"))]
    pub before_label: AttrValue,
    #[prop_or(AttrValue::Static("FINISHED REALITY"))]
    pub after_label: AttrValue,
}

#[function_component(ComparisonSlider)]
pub fn comparison_slider(props: &ComparisonSliderProps) -> Html {
    let position = use_state(RevealPercentage::default);
    let container = use_node_ref();

    let update_from = {
        let position = position.clone();
        let container = container.clone();
        move |client_x: f64| {
            if let Some(element) = container.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                position.set(RevealPercentage::from_pointer(client_x, rect.left(), rect.width()));
            }
        }
    };

    let on_mouse_move = {
        let update_from = update_from.clone();
        Callback::from(move |e: MouseEvent| update_from(e.client_x() as f64))
    };

    let on_touch_move = Callback::from(move |e: TouchEvent| {
        if let Some(touch) = e.touches().get(0) {
            update_from(touch.client_x() as f64);
        }
    });

    let before_style = format!(
        "clip-path: {}; background-image: url('{}');",
        position.clip_path(),
        props.before_image
    );
    let after_style = format!("background-image: url('{}');", props.after_image);

    html! {
        <div
            ref={container}
            class="comparison"
            onmousemove={on_mouse_move}
            ontouchmove={on_touch_move}
        >
            <style>
                {r#"
                    .comparison {
                        position: relative;
                        width: 100%;
                        height: 400px;
                        border-radius: 8px;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        cursor: col-resize;
                        user-select: none;
                        touch-action: pan-y;
                    }
                    .comparison-layer {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                    }
                    .comparison-before {
                        filter: grayscale(100%) brightness(0.9);
                    }
                    .comparison-before .comparison-tint {
                        position: absolute;
                        inset: 0;
                        background: rgba(15, 23, 42, 0.4);
                        mix-blend-mode: multiply;
                    }
                    .comparison-tag {
                        position: absolute;
                        top: 1.5rem;
                        padding: 0.25rem 1rem;
                        color: #fff;
                        font-weight: 700;
                        font-size: 0.875rem;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        z-index: 10;
                    }
                    .comparison-tag.after {
                        right: 1.5rem;
                        background: #2563eb;
                    }
                    .comparison-tag.before {
                        left: 1.5rem;
                        background: #1e293b;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .comparison-handle {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 4px;
                        background: #fff;
                        z-index: 20;
                        box-shadow: 0 0 10px rgba(0, 0, 0, 0.5);
                    }
                    .comparison-knob {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        display: flex;
                        padding: 0.5rem;
                        border-radius: 9999px;
                        background: #3b82f6;
                        color: #fff;
                        border: 2px solid #fff;
                    }
                    @media (min-width: 768px) {
                        .comparison { height: 600px; }
                    }
                "#}
            </style>
            <div class="comparison-layer comparison-after" style={after_style}></div>
            <div class="comparison-tag after">{ props.after_label.clone() }</div>

            <div class="comparison-layer comparison-before" style={before_style}>
                <div class="comparison-tint"></div>
                <div class="comparison-tag before">{ props.before_label.clone() }</div>
            </div>

            <div
                class="comparison-handle"
                style={position.handle_left()}
                role="slider"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={format!("{:.0}", position.value())}
            >
                <div class="comparison-knob">
                    <SvgIcon icon={Icon::ChevronRight} />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LEFT: f64 = 120.0;
    const WIDTH: f64 = 800.0;

    #[test]
    fn starts_at_midpoint_with_both_layers_half_visible() {
        let p = RevealPercentage::default();
        assert_eq!(p.value(), 50.0);
        assert_eq!(p.before_visible_fraction(), 0.5);
        assert_eq!(p.after_visible_fraction(), 0.5);
    }

    #[test]
    fn edges_and_midpoint() {
        assert_eq!(RevealPercentage::from_pointer(LEFT, LEFT, WIDTH).value(), 0.0);
        assert_eq!(RevealPercentage::from_pointer(LEFT + WIDTH, LEFT, WIDTH).value(), 100.0);
        assert_eq!(RevealPercentage::from_pointer(LEFT + WIDTH / 2.0, LEFT, WIDTH).value(), 50.0);
    }

    #[test]
    fn pointer_outside_container_is_clamped() {
        for client_x in [-10_000.0, -1.0, 0.0, LEFT - 0.5, LEFT + WIDTH + 0.5, 1e9] {
            let p = RevealPercentage::from_pointer(client_x, LEFT, WIDTH).value();
            assert!((0.0..=100.0).contains(&p), "{} gave {}", client_x, p);
        }
        assert_eq!(RevealPercentage::from_pointer(-50.0, LEFT, WIDTH).value(), 0.0);
        assert_eq!(RevealPercentage::from_pointer(5_000.0, LEFT, WIDTH).value(), 100.0);
    }

    #[test]
    fn whole_pixel_sweep_stays_in_range() {
        let mut previous = 0.0;
        for x in -200..=1200 {
            let p = RevealPercentage::from_pointer(x as f64, LEFT, WIDTH).value();
            assert!((0.0..=100.0).contains(&p));
            assert!(p >= previous);
            previous = p;
        }
    }

    #[test]
    fn degenerate_inputs_do_not_produce_nan() {
        assert_eq!(RevealPercentage::from_pointer(10.0, 0.0, 0.0).value(), 50.0);
        assert_eq!(RevealPercentage::from_pointer(10.0, 0.0, -5.0).value(), 50.0);
        assert_eq!(RevealPercentage::from_pointer(10.0, 0.0, f64::NAN).value(), 50.0);
        assert_eq!(RevealPercentage::from_pointer(f64::NAN, 0.0, 100.0).value(), 0.0);
    }

    #[test]
    fn lower_percentage_shows_more_of_the_after_image() {
        let low = RevealPercentage::from_pointer(LEFT + 200.0, LEFT, WIDTH);
        let high = RevealPercentage::from_pointer(LEFT + 600.0, LEFT, WIDTH);
        assert!(low.after_visible_fraction() > high.after_visible_fraction());
        assert!(low.before_visible_fraction() < high.before_visible_fraction());
    }

    #[test]
    fn clip_and_handle_follow_the_percentage() {
        let p = RevealPercentage::from_pointer(LEFT + 200.0, LEFT, WIDTH);
        assert_eq!(p.clip_path(), "polygon(0 0, 25% 0, 25% 100%, 0 100%)");
        assert_eq!(p.handle_left(), "left: 25%;");
    }
}
