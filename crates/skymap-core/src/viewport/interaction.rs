use super::controller::ViewportController;

/// Pointer input in display coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release,
    /// Raw wheel delta; one notch is `ZoomConfig::wheel_unit`.
    Wheel { delta: f64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { last: (f64, f64) },
}

/// Drag/wheel state machine driving a [`ViewportController`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Interaction {
    state: DragState,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed one event. Returns `true` when the view changed and needs a re-render.
    ///
    /// Dragging moves the content with the cursor, so the centre moves by
    /// `last - current`. Wheel events zoom regardless of drag state.
    pub fn handle(&mut self, viewport: &mut ViewportController, event: PointerEvent) -> bool {
        match (self.state, event) {
            (_, PointerEvent::Wheel { delta }) => {
                viewport.wheel(delta);
                true
            }
            (_, PointerEvent::Press { x, y }) => {
                self.state = DragState::Dragging { last: (x, y) };
                false
            }
            (DragState::Dragging { last }, PointerEvent::Move { x, y }) => {
                viewport.pan(last.0 - x, last.1 - y);
                self.state = DragState::Dragging { last: (x, y) };
                true
            }
            (DragState::Idle, PointerEvent::Move { .. }) => false,
            (_, PointerEvent::Release) => {
                self.state = DragState::Idle;
                false
            }
        }
    }
}
