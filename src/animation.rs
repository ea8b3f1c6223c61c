use crate::field::ParticleField;
use crate::surface::Surface;

/// "Run the next frame before the next repaint."
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Scheduler that only remembers whether a frame was asked for.
#[derive(Debug, Default)]
pub struct PendingFrame {
    requested: bool,
}

impl PendingFrame {
    /// Consumes the pending request, if any.
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.requested, false)
    }
}

impl FrameScheduler for PendingFrame {
    fn request_frame(&mut self) {
        self.requested = true;
    }
}

/// Self-rescheduling render loop around a [`ParticleField`].
#[derive(Debug)]
pub struct AnimationLoop {
    field: ParticleField,
    running: bool,
    frames: u64,
}

impl AnimationLoop {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            running: true,
            frames: 0,
        }
    }

    /// Draws one frame and asks for the next. Does nothing once stopped.
    pub fn frame<S, F>(&mut self, surface: &mut S, scheduler: &mut F) -> bool
    where
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if !self.running {
            return false;
        }
        self.field.tick(surface);
        self.frames += 1;
        scheduler.request_frame();
        true
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("Animation stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }
}
