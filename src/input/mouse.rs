use web_time::{Duration, Instant};

/// Two primary clicks closer together than this make a double-click.
pub(crate) const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(400);

/// Result of processing a primary-button release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// The press turned into a drag.
    NoAction,
    /// A click that did not complete a double-click.
    SingleClick,
    /// The second click of a quick pair.
    DoubleClick,
}

/// Tracks cursor position, drag state and the click-count state machine.
#[derive(Debug)]
pub struct InputState {
    pub mouse_pos: (f32, f32),
    pub is_dragging: bool,
    last_click_time: Option<Instant>,
    click_count: u32,
}

impl InputState {
    /// Create a new input state with no active click.
    pub fn new() -> Self {
        Self {
            mouse_pos: (0.0, 0.0),
            is_dragging: false,
            last_click_time: None,
            click_count: 0,
        }
    }

    /// Start a new press.
    pub fn handle_mouse_down(&mut self) {
        self.is_dragging = false;
    }

    /// Mark that a drag occurred (significant movement while pressed).
    pub fn mark_dragging(&mut self) {
        self.is_dragging = true;
    }

    /// Update the cursor position and return the movement since the last
    /// update.
    pub fn handle_mouse_position(&mut self, x: f32, y: f32) -> (f32, f32) {
        let delta = (x - self.mouse_pos.0, y - self.mouse_pos.1);
        self.mouse_pos = (x, y);
        delta
    }

    /// Process a primary release at the current time.
    pub fn process_mouse_up(&mut self) -> ClickResult {
        self.process_mouse_up_at(Instant::now())
    }

    /// Process a primary release at `now`.
    ///
    /// A drag resets the click count. Only the second click of a run fires
    /// [`ClickResult::DoubleClick`]; a third quick click counts as single.
    pub fn process_mouse_up_at(&mut self, now: Instant) -> ClickResult {
        let was_dragging = self.is_dragging;
        self.is_dragging = false;

        if was_dragging {
            self.last_click_time = None;
            self.click_count = 0;
            return ClickResult::NoAction;
        }

        let quick = self
            .last_click_time
            .is_some_and(|last| now.duration_since(last) < DOUBLE_CLICK_THRESHOLD);
        self.click_count = if quick { self.click_count + 1 } else { 1 };
        self.last_click_time = Some(now);

        if self.click_count == 2 {
            ClickResult::DoubleClick
        } else {
            ClickResult::SingleClick
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn quick_pair_is_double_click() {
        let mut state = InputState::new();
        let t0 = Instant::now();
        state.handle_mouse_down();
        assert_eq!(state.process_mouse_up_at(t0), ClickResult::SingleClick);
        state.handle_mouse_down();
        assert_eq!(
            state.process_mouse_up_at(t0 + ms(150)),
            ClickResult::DoubleClick
        );
    }

    #[test]
    fn slow_pair_is_two_singles() {
        let mut state = InputState::new();
        let t0 = Instant::now();
        assert_eq!(state.process_mouse_up_at(t0), ClickResult::SingleClick);
        assert_eq!(
            state.process_mouse_up_at(t0 + ms(500)),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn third_quick_click_is_not_another_double() {
        let mut state = InputState::new();
        let t0 = Instant::now();
        let _ = state.process_mouse_up_at(t0);
        let _ = state.process_mouse_up_at(t0 + ms(100));
        assert_eq!(
            state.process_mouse_up_at(t0 + ms(200)),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn drag_breaks_the_pair() {
        let mut state = InputState::new();
        let t0 = Instant::now();
        let _ = state.process_mouse_up_at(t0);
        state.handle_mouse_down();
        state.mark_dragging();
        assert_eq!(state.process_mouse_up_at(t0 + ms(100)), ClickResult::NoAction);
        assert_eq!(
            state.process_mouse_up_at(t0 + ms(200)),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn position_reports_delta() {
        let mut state = InputState::new();
        let _ = state.handle_mouse_position(10.0, 10.0);
        assert_eq!(state.handle_mouse_position(13.0, 6.0), (3.0, -4.0));
    }
}
