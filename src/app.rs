pub enum AppState {
    Input,
    Loading,
    Failed,
}

pub struct App {
    pub state: AppState,
    pub input: String,
    pub answer: String,
    // Last failure message, shown on the status line
    pub failure: Option<String>,
    // Scroll offset for the answer window
    pub scroll_offset: u16,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::Input,
            input: String::new(),
            answer: String::new(),
            failure: None,
            scroll_offset: 0,
        }
    }

    /// Submission is allowed only with a non-empty question and no
    /// request already in flight.
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && !matches!(self.state, AppState::Loading)
    }

    pub fn set_loading(&mut self) {
        self.state = AppState::Loading;
        self.answer.clear();
        self.failure = None;
    }

    pub fn set_answer(&mut self, answer: String) {
        self.answer = answer;
        self.scroll_offset = 0;
        self.state = AppState::Input;
    }

    /// Every failed round trip lands here, so the loading state can never
    /// outlive the request that entered it.
    pub fn set_failure(&mut self, message: String) {
        self.failure = Some(message);
        self.state = AppState::Failed;
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn scroll_up(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_blocks_submission() {
        let app = App::new();
        assert!(!app.can_submit());
    }

    #[test]
    fn loading_blocks_submission_regardless_of_input() {
        let mut app = App::new();
        app.push_char('x');
        assert!(app.can_submit());
        app.set_loading();
        assert!(!app.can_submit());
    }

    #[test]
    fn loading_clears_previous_answer() {
        let mut app = App::new();
        app.set_answer("old answer".to_string());
        app.push_char('x');
        app.set_loading();
        assert!(app.answer.is_empty());
    }

    #[test]
    fn answer_returns_to_input_state() {
        let mut app = App::new();
        app.push_char('x');
        app.set_loading();
        app.set_answer("Bail is...".to_string());
        assert!(matches!(app.state, AppState::Input));
        assert_eq!(app.answer, "Bail is...");
        assert!(app.can_submit());
    }

    #[test]
    fn failure_leaves_loading_and_reopens_the_guard() {
        let mut app = App::new();
        app.push_char('x');
        app.set_loading();
        app.set_failure("connection refused".to_string());
        assert!(matches!(app.state, AppState::Failed));
        assert!(app.can_submit());
    }

    #[test]
    fn answer_resets_scroll() {
        let mut app = App::new();
        app.scroll_down();
        app.scroll_down();
        app.set_answer("short".to_string());
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn backspace_edits_the_question() {
        let mut app = App::new();
        app.push_char('a');
        app.push_char('b');
        app.pop_char();
        assert_eq!(app.input, "a");
    }
}
