use crate::constants::CLOSE_GUARD_MS;
use crate::error::GalleryError;

/// Screen-space rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `width` x `height` rect centred inside `outer`.
    pub fn centered_in(outer: &Rect, width: f64, height: f64) -> Self {
        Self {
            x: outer.x + (outer.width - width) / 2.0,
            y: outer.y + (outer.height - height) / 2.0,
            width,
            height,
        }
    }
}

/// Injected measurement capability, so the phase logic is testable with
/// synthetic rectangles and portable to non-DOM surfaces.
pub trait RectMeasurer {
    fn tile_rect(&self, index: usize) -> Option<Rect>;
    fn viewport_rect(&self) -> Rect;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPhase {
    #[default]
    Idle,
    Opening,
    Open,
    Closing,
}

/// Everything the rendering side needs to start the opening animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenPlan {
    pub tile_index: usize,
    pub source_rect: Rect,
    pub dest_rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusEvent {
    /// The opening transition finished. `resize_to` carries the secondary
    /// re-centred target when an explicit opened size differs from the frame.
    Opened { resize_to: Option<Rect> },
    /// The closing transition finished; the session is gone.
    Closed { tile_index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Accepted,
    Ignored,
}

/// FLIP-style open/close orchestration: measure a First and Last rectangle,
/// then run duration-timed phases between them. Phase completion is decided
/// by explicit timers, never by a rendering backend's transition events.
#[derive(Debug)]
pub struct FocusMachine {
    transition_ms: f64,
    phase: FocusPhase,
    tile_index: usize,
    source_rect: Rect,
    dest_rect: Rect,
    resize_to: Option<Rect>,
    phase_started_ms: f64,
    opening_started_ms: f64,
}

impl FocusMachine {
    pub fn new(transition_ms: f64) -> Self {
        Self {
            transition_ms,
            phase: FocusPhase::Idle,
            tile_index: 0,
            source_rect: Rect::default(),
            dest_rect: Rect::default(),
            resize_to: None,
            phase_started_ms: 0.0,
            opening_started_ms: 0.0,
        }
    }

    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != FocusPhase::Idle
    }

    /// The rect the closing animation returns to; the tile's original spot.
    pub fn source_rect(&self) -> Option<Rect> {
        self.is_active().then_some(self.source_rect)
    }

    pub fn tile_index(&self) -> Option<usize> {
        self.is_active().then_some(self.tile_index)
    }

    /// Begin opening a tile. Re-entrant requests while a session exists are
    /// no-ops; an unmeasurable tile aborts back to Idle with an error the
    /// caller logs and survives.
    pub fn open<M: RectMeasurer>(
        &mut self,
        now_ms: f64,
        tile_index: usize,
        measurer: &M,
        opened_width: Option<f64>,
        opened_height: Option<f64>,
        pad: f64,
    ) -> Result<Option<OpenPlan>, GalleryError> {
        if self.phase != FocusPhase::Idle {
            return Ok(None);
        }
        let source_rect = measurer
            .tile_rect(tile_index)
            .ok_or(GalleryError::Measurement("tile"))?;
        let viewport = measurer.viewport_rect();
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Err(GalleryError::Measurement("viewport"));
        }

        let avail_w = (viewport.width - 2.0 * pad).max(1.0);
        let avail_h = (viewport.height - 2.0 * pad).max(1.0);
        let natural = avail_w.min(avail_h);
        let dest_rect = Rect::centered_in(&viewport, natural, natural);

        // Explicit opened size runs as a second short transition chained onto
        // the first, re-centred at the new dimensions.
        self.resize_to = match (opened_width, opened_height) {
            (None, None) => None,
            (w, h) => {
                let rw = w.unwrap_or(natural).min(avail_w);
                let rh = h.unwrap_or(natural).min(avail_h);
                let target = Rect::centered_in(&viewport, rw, rh);
                (target != dest_rect).then_some(target)
            }
        };

        self.tile_index = tile_index;
        self.source_rect = source_rect;
        self.dest_rect = dest_rect;
        self.phase = FocusPhase::Opening;
        self.phase_started_ms = now_ms;
        self.opening_started_ms = now_ms;
        Ok(Some(OpenPlan {
            tile_index,
            source_rect,
            dest_rect,
        }))
    }

    /// Explicit close (scrim click, Escape). Guarded right after opening so a
    /// same-gesture close cannot cancel the animation it just started.
    pub fn request_close(&mut self, now_ms: f64) -> CloseOutcome {
        match self.phase {
            FocusPhase::Opening if now_ms - self.opening_started_ms < CLOSE_GUARD_MS => {
                CloseOutcome::Ignored
            }
            FocusPhase::Opening | FocusPhase::Open => {
                self.phase = FocusPhase::Closing;
                self.phase_started_ms = now_ms;
                CloseOutcome::Accepted
            }
            _ => CloseOutcome::Ignored,
        }
    }

    /// Abandon the session without animating (tile unmounted, teardown).
    pub fn abort(&mut self) {
        self.phase = FocusPhase::Idle;
        self.resize_to = None;
    }

    /// Advance the phase timers. At most one event per call.
    pub fn tick(&mut self, now_ms: f64) -> Option<FocusEvent> {
        let elapsed = now_ms - self.phase_started_ms;
        match self.phase {
            FocusPhase::Opening if elapsed >= self.transition_ms => {
                self.phase = FocusPhase::Open;
                self.phase_started_ms = now_ms;
                let resize_to = self.resize_to.take();
                if let Some(r) = resize_to {
                    self.dest_rect = r;
                }
                Some(FocusEvent::Opened { resize_to })
            }
            FocusPhase::Closing if elapsed >= self.transition_ms => {
                let tile_index = self.tile_index;
                self.phase = FocusPhase::Idle;
                Some(FocusEvent::Closed { tile_index })
            }
            _ => None,
        }
    }
}
