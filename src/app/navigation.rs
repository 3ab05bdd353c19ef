use super::*;
use crate::model::Direction;

impl<P: Presenter, S: AnswerStore> QuizController<P, S> {
    /// Moves one question back or forth. Stops at both ends, no wrap-around.
    /// Returns whether the index changed.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let target = match direction {
            Direction::Previous => session.current.checked_sub(1),
            Direction::Next => Some(session.current + 1).filter(|&i| i < session.len()),
        };
        let Some(target) = target else {
            return false;
        };

        session.current = target;
        // leaving the corrected question hides its reveal unless it was answered
        session.revealed = None;
        self.render_current();
        true
    }

    pub fn previous(&mut self) -> bool {
        self.navigate(Direction::Previous)
    }

    pub fn next(&mut self) -> bool {
        self.navigate(Direction::Next)
    }
}
