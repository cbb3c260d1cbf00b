use crate::api::types::{BladeSignal, EffectRequest};

/// The collaborators a controller drives.
///
/// The controller decides *which* cue to play and *when*; the host owns
/// playback, rendering and the motion-sensor subscription. In the browser
/// this is backed by JavaScript callbacks and a `devicemotion` listener.
pub trait SaberHost {
    /// Play the sound for `request`.
    fn play(&mut self, request: EffectRequest);

    /// The blade was lit, extinguished or recolored.
    fn blade_changed(&mut self, _blade: BladeSignal) {}

    /// Start delivering motion samples. Called once, after authorization.
    fn subscribe_motion(&mut self);

    /// Stop delivering motion samples. Called once, on teardown or revocation.
    fn unsubscribe_motion(&mut self);
}
