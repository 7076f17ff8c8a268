//! Motion driven by scroll progress and by page mount
//!
//! - [`ScrollMotion`] maps a section's scroll progress to its opacity and
//!   scale (the "fade and grow into view" effect).
//! - [`EntranceChoreography`] plays the one-shot entrance animations of the
//!   page chrome when the page mounts, plus the looping accent gradient.

use vista_animation::{
    map, AnimationPreset, AnimationScheduler, KeyframeMapping, KeyframeTrack,
    MotionAnimation, MotionId, MotionProperties, Spring, SpringConfig, SpringId,
};
use vista_core::{Result, ScrollProgress};

// ============================================================================
// Scroll-linked motion
// ============================================================================

/// Style values handed to the rendering surface every frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionStyle {
    pub opacity: f32,
    pub scale: f32,
}

impl Default for MotionStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

/// Two independent keyframe mappings evaluated from the same progress value
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollMotion {
    opacity: KeyframeMapping,
    scale: KeyframeMapping,
}

impl ScrollMotion {
    pub fn new(opacity: KeyframeMapping, scale: KeyframeMapping) -> Self {
        Self { opacity, scale }
    }

    /// Fade `[0, 0.5] -> [0, 1]` and grow `[0, 0.5] -> [0.8, 1]`
    pub fn fade_and_grow() -> Self {
        Self::from_ranges(&[0.0, 0.5], &[0.0, 1.0], &[0.0, 0.5], &[0.8, 1.0])
            .unwrap_or_else(|_| unreachable!("fade-and-grow breakpoints are valid"))
    }

    /// Build both mappings from input/output ranges
    pub fn from_ranges(
        opacity_inputs: &[f32],
        opacity_outputs: &[f32],
        scale_inputs: &[f32],
        scale_outputs: &[f32],
    ) -> Result<Self> {
        Ok(Self::new(
            KeyframeMapping::ranges(opacity_inputs, opacity_outputs)?,
            KeyframeMapping::ranges(scale_inputs, scale_outputs)?,
        ))
    }

    pub fn opacity_mapping(&self) -> &KeyframeMapping {
        &self.opacity
    }

    pub fn scale_mapping(&self) -> &KeyframeMapping {
        &self.scale
    }

    pub fn style(&self, progress: ScrollProgress) -> MotionStyle {
        MotionStyle {
            opacity: map(progress, &self.opacity),
            scale: map(progress, &self.scale),
        }
    }
}

impl Default for ScrollMotion {
    fn default() -> Self {
        Self::fade_and_grow()
    }
}

// ============================================================================
// Entrance choreography
// ============================================================================

/// Header starts this far above its resting position
const HEADER_OFFSET: f32 = -100.0;
/// Delay between consecutive navigation items
const NAV_STAGGER_MS: u32 = 100;
/// One full accent gradient sweep (there and back)
const ACCENT_PERIOD_MS: u32 = 5000;

/// Page elements with an entrance animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntranceElement {
    /// Fixed header, slides down on a spring
    Header,
    /// Brand mark in the header
    Brand,
    /// Navigation link by position
    NavItem(u8),
    HeroHeading,
    HeroActions,
    CtaHeading,
    CtaActions,
}

enum Slot {
    Pending(MotionAnimation),
    Running(MotionId),
}

/// Entrance animations of the page chrome, started once when the page mounts
pub struct EntranceChoreography {
    scheduler: AnimationScheduler,
    header: SpringId,
    slots: Vec<(EntranceElement, Slot)>,
    accent: KeyframeTrack,
    started: bool,
}

impl EntranceChoreography {
    pub fn new(nav_items: u8) -> Self {
        let mut scheduler = AnimationScheduler::new();
        let header = scheduler.add_spring(Spring::new(SpringConfig::snappy(), HEADER_OFFSET));

        let mut slots = vec![(
            EntranceElement::Brand,
            Slot::Pending(AnimationPreset::slide_in_left(500, 20.0)),
        )];
        for index in 0..nav_items {
            slots.push((
                EntranceElement::NavItem(index),
                Slot::Pending(
                    AnimationPreset::fade_down(500, 10.0).delay(NAV_STAGGER_MS * index as u32),
                ),
            ));
        }
        slots.push((
            EntranceElement::HeroHeading,
            Slot::Pending(AnimationPreset::fade_up(600, 20.0)),
        ));
        slots.push((
            EntranceElement::HeroActions,
            Slot::Pending(AnimationPreset::fade_up(600, 20.0).delay(200)),
        ));
        slots.push((
            EntranceElement::CtaHeading,
            Slot::Pending(AnimationPreset::fade_up(600, 20.0)),
        ));
        slots.push((
            EntranceElement::CtaActions,
            Slot::Pending(AnimationPreset::fade_up(600, 20.0).delay(200)),
        ));

        let accent = KeyframeMapping::ranges(&[0.0, 0.5, 1.0], &[0.0, 100.0, 0.0])
            .unwrap_or_else(|_| unreachable!("accent breakpoints are valid"));

        Self {
            scheduler,
            header,
            slots,
            accent: KeyframeTrack::new(ACCENT_PERIOD_MS, accent).looping(),
            started: false,
        }
    }

    /// Start every entrance animation. Later calls are no-ops.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        self.scheduler
            .with_spring_mut(self.header, |spring| spring.set_target(0.0));
        for (_, slot) in self.slots.iter_mut() {
            let placeholder = Slot::Running(MotionId::default());
            if let Slot::Pending(motion) = std::mem::replace(slot, placeholder) {
                *slot = Slot::Running(self.scheduler.add_motion(motion));
            }
        }
        self.accent.start();

        tracing::debug!(elements = self.slots.len() + 1, "entrance choreography started");
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Advance by `dt_ms` milliseconds of host time
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.started {
            return;
        }
        self.scheduler.tick(dt_ms);
        self.accent.tick(dt_ms);
    }

    /// True once every one-shot entrance has finished (the accent loops on)
    pub fn is_settled(&self) -> bool {
        self.started && !self.scheduler.has_active_animations()
    }

    /// Current style of an element, or `None` if the page has no such element
    pub fn style(&self, element: EntranceElement) -> Option<MotionProperties> {
        if element == EntranceElement::Header {
            let offset = self
                .scheduler
                .get_spring(self.header)
                .map_or(HEADER_OFFSET, Spring::value);
            return Some(MotionProperties::default().with_translate_y(offset));
        }

        let (_, slot) = self.slots.iter().find(|(e, _)| *e == element)?;
        match slot {
            Slot::Pending(motion) => Some(motion.sample_at(0.0)),
            Slot::Running(id) => self
                .scheduler
                .get_motion(*id)
                .map(MotionAnimation::current_properties),
        }
    }

    /// Accent gradient background position in percent
    pub fn accent_position(&self) -> f32 {
        if self.started {
            self.accent.value()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_and_grow_motion() {
        let motion = ScrollMotion::fade_and_grow();

        let start = motion.style(ScrollProgress::START);
        assert_eq!(start, MotionStyle { opacity: 0.0, scale: 0.8 });

        let quarter = motion.style(ScrollProgress::new(0.25));
        assert!((quarter.opacity - 0.5).abs() < 1e-6);
        assert!((quarter.scale - 0.9).abs() < 1e-6);

        for p in [0.5, 0.75, 1.0] {
            let style = motion.style(ScrollProgress::new(p));
            assert_eq!(style, MotionStyle::default(), "p = {p}");
        }
    }

    #[test]
    fn test_from_ranges_validates() {
        assert!(ScrollMotion::from_ranges(&[0.0], &[0.0], &[0.0, 1.0], &[0.8, 1.0]).is_err());
    }

    #[test]
    fn test_entrance_holds_initial_state_until_start() {
        let mut entrance = EntranceChoreography::new(4);
        entrance.tick(1000.0);

        assert!(!entrance.is_started());
        assert_eq!(
            entrance.style(EntranceElement::Header).unwrap().resolved_translate().1,
            HEADER_OFFSET
        );
        assert_eq!(
            entrance.style(EntranceElement::Brand).unwrap().resolved_opacity(),
            0.0
        );
        assert_eq!(entrance.accent_position(), 0.0);
        assert!(entrance.style(EntranceElement::NavItem(4)).is_none());
    }

    #[test]
    fn test_nav_items_are_staggered() {
        let mut entrance = EntranceChoreography::new(4);
        entrance.start();
        entrance.tick(150.0);

        let first = entrance.style(EntranceElement::NavItem(0)).unwrap();
        let third = entrance.style(EntranceElement::NavItem(2)).unwrap();
        assert!(first.resolved_opacity() > 0.0);
        assert_eq!(third.resolved_opacity(), 0.0);
    }

    #[test]
    fn test_entrance_settles() {
        let mut entrance = EntranceChoreography::new(4);
        entrance.start();
        entrance.start();

        for _ in 0..120 {
            entrance.tick(16.0);
        }

        assert!(entrance.is_settled());
        assert_eq!(
            entrance.style(EntranceElement::Header).unwrap().resolved_translate().1,
            0.0
        );
        for element in [
            EntranceElement::Brand,
            EntranceElement::NavItem(3),
            EntranceElement::HeroActions,
            EntranceElement::CtaActions,
        ] {
            let style = entrance.style(element).unwrap();
            assert_eq!(style.resolved_opacity(), 1.0, "{element:?}");
        }
        // 1920ms into a 5000ms there-and-back sweep
        assert!((entrance.accent_position() - 76.8).abs() < 1e-2);
    }
}
