use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopPhase {
    #[default]
    Idle,
    Running,
    Cancelled,
}

/// Cancellation handle for the background's per-frame update task.
///
/// The update systems only run while the phase is [`LoopPhase::Running`], so
/// once [`cancel`](Self::cancel) has been called no further frame touches the
/// released scene.
#[derive(Resource, Debug, Default)]
pub struct RenderLoop {
    phase: LoopPhase,
    frames_presented: u64,
}

impl RenderLoop {
    /// Begin scheduling frames. Returns `false` if the loop was already running.
    pub fn start(&mut self) -> bool {
        if self.phase == LoopPhase::Running {
            return false;
        }
        self.phase = LoopPhase::Running;
        self.frames_presented = 0;
        true
    }

    /// Record one presented frame. Ignored unless running.
    pub fn present_frame(&mut self) -> bool {
        if self.phase != LoopPhase::Running {
            return false;
        }
        self.frames_presented += 1;
        true
    }

    /// Stop scheduling frames. Only the call that stops a running loop returns `true`.
    pub fn cancel(&mut self) -> bool {
        if self.phase != LoopPhase::Running {
            return false;
        }
        self.phase = LoopPhase::Cancelled;
        true
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

/// Run condition for the per-frame update systems.
pub fn render_loop_running(render_loop: Res<RenderLoop>) -> bool {
    render_loop.is_running()
}
