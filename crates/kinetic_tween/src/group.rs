//! Batched tween management
//!
//! A [`TweenGroup`] owns a flat, unordered set of heterogeneous tweens
//! behind the [`GroupTween`] capability trait and fans every time operation
//! out to all of them. The group's own timescale multiplies each advance
//! delta before members apply theirs, so the effective rate is the product
//! of the two.
//!
//! Member evaluation is pure given its own state, so broadcast order does
//! not matter.

use std::any::Any;

use slotmap::{new_key_type, SlotMap};

use kinetic_ease::Ease;

use crate::curve::Curve;
use crate::lerp::Lerp;
use crate::scheduled::{CurveTween, ScheduledTween};

new_key_type! {
    /// Handle to a tween registered in a [`TweenGroup`].
    pub struct TweenId;
}

/// The capability set a group needs from a member.
///
/// Endpoints, ease functions and values stay the concern of the concrete
/// tween; typed access goes through [`TweenGroup::get`] via `Any`.
pub trait GroupTween {
    /// Absolute time jump.
    fn set(&mut self, time: f32);
    /// Relative advance (the member applies its own timescale).
    fn advance(&mut self, delta: f32);
    /// Rewind to the initial time.
    fn reset_time(&mut self);
    fn is_done(&self) -> bool;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Lerp + 'static> GroupTween for ScheduledTween<T> {
    fn set(&mut self, time: f32) {
        ScheduledTween::set(self, time);
    }

    fn advance(&mut self, delta: f32) {
        ScheduledTween::advance(self, delta);
    }

    fn reset_time(&mut self) {
        ScheduledTween::reset_time(self);
    }

    fn is_done(&self) -> bool {
        ScheduledTween::is_done(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<C: Curve + 'static> GroupTween for CurveTween<C> {
    fn set(&mut self, time: f32) {
        CurveTween::set(self, time);
    }

    fn advance(&mut self, delta: f32) {
        CurveTween::advance(self, delta);
    }

    fn reset_time(&mut self) {
        CurveTween::reset_time(self);
    }

    fn is_done(&self) -> bool {
        CurveTween::is_done(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// An unordered collection of tweens advanced and queried together.
pub struct TweenGroup {
    members: SlotMap<TweenId, Box<dyn GroupTween>>,
    timescale: f32,
}

impl TweenGroup {
    pub fn new() -> Self {
        Self {
            members: SlotMap::with_key(),
            timescale: 1.0,
        }
    }

    pub fn with_timescale(mut self, timescale: f32) -> Self {
        self.timescale = timescale;
        self
    }

    pub fn timescale(&self) -> f32 {
        self.timescale
    }

    pub fn set_timescale(&mut self, timescale: f32) {
        self.timescale = timescale;
    }

    /// Construct a [`ScheduledTween`] and register it.
    pub fn create<T: Lerp + 'static>(
        &mut self,
        ease: Ease,
        from: T,
        to: T,
        duration: f32,
        delay: f32,
        timescale: f32,
    ) -> TweenId {
        self.add(Box::new(
            ScheduledTween::new(ease, from, to, duration)
                .with_delay(delay)
                .with_timescale(timescale),
        ))
    }

    /// Construct a scalar [`CurveTween`] bound through `curve` and register
    /// it.
    #[allow(clippy::too_many_arguments)]
    pub fn create_curve<C: Curve + 'static>(
        &mut self,
        curve: C,
        ease: Ease,
        from: f32,
        to: f32,
        duration: f32,
        delay: f32,
        timescale: f32,
    ) -> TweenId {
        self.add(Box::new(
            CurveTween::new(curve, ease, from, to, duration)
                .with_delay(delay)
                .with_timescale(timescale),
        ))
    }

    /// Register an existing tween.
    pub fn add(&mut self, tween: Box<dyn GroupTween>) -> TweenId {
        let id = self.members.insert(tween);
        tracing::trace!(?id, members = self.members.len(), "tween added to group");
        id
    }

    /// Unregister and return a tween. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: TweenId) -> Option<Box<dyn GroupTween>> {
        let removed = self.members.remove(id);
        if removed.is_some() {
            tracing::trace!(?id, members = self.members.len(), "tween removed from group");
        }
        removed
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.members.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Typed access to a registered [`ScheduledTween`].
    pub fn get<T: Lerp + 'static>(&self, id: TweenId) -> Option<&ScheduledTween<T>> {
        self.members.get(id)?.as_any().downcast_ref()
    }

    pub fn get_mut<T: Lerp + 'static>(&mut self, id: TweenId) -> Option<&mut ScheduledTween<T>> {
        self.members.get_mut(id)?.as_any_mut().downcast_mut()
    }

    /// Typed access to a registered [`CurveTween`].
    pub fn get_curve<C: Curve + 'static>(&self, id: TweenId) -> Option<&CurveTween<C>> {
        self.members.get(id)?.as_any().downcast_ref()
    }

    /// Broadcast an absolute time jump to every member.
    pub fn set(&mut self, time: f32) {
        for member in self.members.values_mut() {
            member.set(time);
        }
    }

    /// Advance every member by `delta * group timescale`. Each member then
    /// applies its own timescale on top.
    pub fn advance(&mut self, delta: f32) {
        let delta = delta * self.timescale;
        for member in self.members.values_mut() {
            member.advance(delta);
        }
    }

    /// Broadcast a time reset to every member.
    pub fn reset_time(&mut self) {
        for member in self.members.values_mut() {
            member.reset_time();
        }
    }

    /// True iff every member is done. Short-circuits on the first member
    /// still in flight; vacuously true for an empty group.
    pub fn is_done(&self) -> bool {
        self.members.values().all(|member| member.is_done())
    }
}

impl Default for TweenGroup {
    fn default() -> Self {
        Self::new()
    }
}
