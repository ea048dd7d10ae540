use pluto_core::CycleController;

/// Pointer events the host forwards from the list's touch interception.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// Feed the event to the pause/recover state machine.
    ///
    /// A cancelled gesture ends the interaction just like a lift.
    pub(crate) fn apply(self, cycle: &mut CycleController) {
        match self {
            PointerEventKind::Down => cycle.touch_down(),
            PointerEventKind::Up | PointerEventKind::Cancel => cycle.touch_up(),
            PointerEventKind::Move => {}
        }
    }
}
