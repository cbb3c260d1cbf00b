use serde::Serialize;

use crate::components::theme::SaberColor;

/// A sound event emitted by the controller.
/// The numeric value is a stable id the page's audio layer can key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    pub const ACTIVATE: SoundEvent = SoundEvent(1);
    pub const DEACTIVATE: SoundEvent = SoundEvent(2);
    /// Swing variant `i` maps to `SWING_BASE + i`.
    pub const SWING_BASE: u32 = 0x100;
    /// Hit variant `i` maps to `HIT_BASE + i`.
    pub const HIT_BASE: u32 = 0x200;
}

/// Which audio cue an effect belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectClass {
    Activate,
    Deactivate,
    Swing,
    Hit,
}

impl EffectClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectClass::Activate => "activate",
            EffectClass::Deactivate => "deactivate",
            EffectClass::Swing => "swing",
            EffectClass::Hit => "hit",
        }
    }
}

/// An outbound instruction naming which audio cue to play.
/// `variant` is always 0 for Activate/Deactivate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EffectRequest {
    pub class: EffectClass,
    pub variant: u32,
}

impl EffectRequest {
    pub fn activate() -> Self {
        Self { class: EffectClass::Activate, variant: 0 }
    }

    pub fn deactivate() -> Self {
        Self { class: EffectClass::Deactivate, variant: 0 }
    }

    pub fn swing(variant: u32) -> Self {
        Self { class: EffectClass::Swing, variant }
    }

    pub fn hit(variant: u32) -> Self {
        Self { class: EffectClass::Hit, variant }
    }

    /// Stable numeric id for the audio layer.
    pub fn sound_event(&self) -> SoundEvent {
        match self.class {
            EffectClass::Activate => SoundEvent::ACTIVATE,
            EffectClass::Deactivate => SoundEvent::DEACTIVATE,
            EffectClass::Swing => SoundEvent(SoundEvent::SWING_BASE + self.variant),
            EffectClass::Hit => SoundEvent(SoundEvent::HIT_BASE + self.variant),
        }
    }
}

/// What the renderer needs to draw the blade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BladeSignal {
    pub lit: bool,
    pub color: SaberColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_ids_do_not_collide_across_classes() {
        assert_eq!(EffectRequest::activate().sound_event(), SoundEvent(1));
        assert_eq!(EffectRequest::deactivate().sound_event(), SoundEvent(2));
        assert_eq!(EffectRequest::swing(4).sound_event(), SoundEvent(0x104));
        assert_eq!(EffectRequest::hit(0).sound_event(), SoundEvent(0x200));
        assert_ne!(
            EffectRequest::swing(255).sound_event(),
            EffectRequest::hit(0).sound_event()
        );
    }

    #[test]
    fn effect_class_names() {
        assert_eq!(EffectClass::Swing.as_str(), "swing");
        assert_eq!(EffectRequest::hit(2).class.as_str(), "hit");
    }
}
