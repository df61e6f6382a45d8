//! Declarative enter animations.
//!
//! An element is either [`Variant::Hidden`] or [`Variant::Visible`]; the only
//! transition is hidden -> visible, fired once when the element is revealed.
//! Each variant maps to a [`Target`] which renders to inline CSS, and the
//! browser's CSS transitions do the tweening.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Hidden,
    Visible,
}

impl Variant {
    pub fn from_revealed(revealed: bool) -> Self {
        if revealed {
            Variant::Visible
        } else {
            Variant::Hidden
        }
    }
}

/// Visual property targets. Offsets in px, rotation in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Target {
    pub const REST: Target = Target { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0, rotate: 0.0 };

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}) rotate({}deg);",
            self.opacity, self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Timing in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn css(&self) -> String {
        let ease = self.easing.css();
        format!(
            "transition: opacity {d}s {e} {w}s, transform {d}s {e} {w}s;",
            d = self.duration,
            e = ease,
            w = self.delay
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub hidden: Target,
    pub visible: Target,
    pub transition: Transition,
}

impl Animation {
    pub fn target(&self, variant: Variant) -> Target {
        match variant {
            Variant::Hidden => self.hidden,
            Variant::Visible => self.visible,
        }
    }

    /// Inline style for the given variant. The transition is always present so
    /// that flipping to visible animates.
    pub fn style(&self, variant: Variant) -> String {
        format!("{} {}", self.target(variant).css(), self.transition.css())
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.transition.delay = delay;
        self
    }

    /// Fade in while sliding up by `distance` px.
    pub fn fade_up(distance: f64, duration: f64) -> Self {
        Animation {
            hidden: Target { opacity: 0.0, y: distance, ..Target::REST },
            visible: Target::REST,
            transition: Transition { duration, delay: 0.0, easing: Easing::EaseOut },
        }
    }

    /// Fade in while sliding horizontally from `offset` px.
    pub fn slide_x(offset: f64, duration: f64) -> Self {
        Animation {
            hidden: Target { opacity: 0.0, x: offset, ..Target::REST },
            visible: Target::REST,
            transition: Transition { duration, delay: 0.0, easing: Easing::EaseOut },
        }
    }

    pub fn pop(from_scale: f64, duration: f64) -> Self {
        Animation {
            hidden: Target { opacity: 0.0, scale: from_scale, ..Target::REST },
            visible: Target::REST,
            transition: Transition { duration, delay: 0.0, easing: Easing::EaseInOut },
        }
    }

    pub fn project_card(index: usize) -> Self {
        Animation::fade_up(20.0, 0.5).with_delay(index as f64 * 0.1)
    }

    pub fn hero_item() -> Self {
        Animation::fade_up(30.0, 0.6)
    }

    pub fn hero_portrait() -> Self {
        Animation {
            hidden: Target { opacity: 0.0, scale: 0.8, rotate: -5.0, ..Target::REST },
            visible: Target::REST,
            transition: Transition { duration: 0.8, delay: 0.0, easing: Easing::EaseOut },
        }
    }

    /// Avatar inside the portrait, starting after the frame.
    pub fn hero_avatar() -> Self {
        Animation {
            hidden: Target { opacity: 0.0, scale: 0.5, rotate: -10.0, ..Target::REST },
            visible: Target::REST,
            transition: Transition { duration: 0.8, delay: 0.3, easing: Easing::EaseOut },
        }
    }
}

/// Per-child delays for a container that reveals its children in sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger: f64,
}

impl Stagger {
    pub const HERO: Stagger = Stagger { delay_children: 0.1, stagger: 0.15 };

    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + self.stagger * index as f64
    }

    pub fn apply(&self, animation: Animation, index: usize) -> Animation {
        animation.with_delay(self.delay_for(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn variants_pick_their_targets() {
        let card = Animation::project_card(0);
        assert_eq!(card.target(Variant::Hidden).opacity, 0.0);
        assert_eq!(card.target(Variant::Hidden).y, 20.0);
        assert_eq!(card.target(Variant::Visible), Target::REST);
    }

    #[test]
    fn card_delay_grows_with_index() {
        assert!(approx(Animation::project_card(0).transition.delay, 0.0));
        assert!(approx(Animation::project_card(3).transition.delay, 0.3));
        assert!(approx(Animation::project_card(3).transition.duration, 0.5));
    }

    #[test]
    fn hero_stagger_offsets_children() {
        assert!(approx(Stagger::HERO.delay_for(0), 0.1));
        assert!(approx(Stagger::HERO.delay_for(2), 0.4));
        let item = Stagger::HERO.apply(Animation::hero_item(), 1);
        assert!(approx(item.transition.delay, 0.25));
        assert_eq!(item.hidden.y, 30.0);
    }

    #[test]
    fn style_renders_target_and_transition() {
        let style = Animation::hero_portrait().style(Variant::Hidden);
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("scale(0.8) rotate(-5deg)"));
        assert!(style.contains("transition: opacity 0.8s ease-out 0s"));

        let shown = Animation::hero_portrait().style(Variant::Visible);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translate(0px, 0px) scale(1) rotate(0deg)"));
    }

    #[test]
    fn hero_avatar_spins_in_after_portrait() {
        let avatar = Animation::hero_avatar();
        let hidden = avatar.target(Variant::Hidden);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.scale, 0.5);
        assert_eq!(hidden.rotate, -10.0);
        assert_eq!(avatar.target(Variant::Visible), Target::REST);
        assert_eq!(avatar.transition.easing, Easing::EaseOut);
        assert!(approx(avatar.transition.duration, 0.8));
        assert!(approx(avatar.transition.delay, 0.3));
        assert!(avatar.transition.delay > Animation::hero_portrait().transition.delay);
    }

    #[test]
    fn from_revealed_maps_to_variant() {
        assert_eq!(Variant::from_revealed(false), Variant::Hidden);
        assert_eq!(Variant::from_revealed(true), Variant::Visible);
    }
}
