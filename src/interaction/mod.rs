bitflags::bitflags! {
    /// Transient UI flags tracked alongside a slider.
    ///
    /// Combine with bitwise OR: `SliderState::DRAG | SliderState::FOCUS`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SliderState: u8 {
        const NONE = 0;
        const DRAG = 1 << 1;
        const FOCUS = 1 << 2;
    }
}

/// Bitmask store for UI-driven booleans the engine does not otherwise need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    states: SliderState,
}

impl InteractionState {
    #[must_use]
    pub fn states(self) -> SliderState {
        self.states
    }

    /// True when any flag of `state` is set.
    #[must_use]
    pub fn has_state(self, state: SliderState) -> bool {
        self.states.intersects(state)
    }

    pub fn add_state(&mut self, state: SliderState) {
        self.states.insert(state);
    }

    pub fn delete_state(&mut self, state: SliderState) {
        self.states.remove(state);
    }

    /// Clears `state` when any of its flags is set, sets it otherwise.
    pub fn toggle_state(&mut self, state: SliderState) {
        if self.has_state(state) {
            self.delete_state(state);
        } else {
            self.add_state(state);
        }
    }

    #[must_use]
    pub fn has_drag(self) -> bool {
        self.has_state(SliderState::DRAG)
    }

    #[must_use]
    pub fn has_focus(self) -> bool {
        self.has_state(SliderState::FOCUS)
    }
}
