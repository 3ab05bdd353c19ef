use crate::error::QuizError;
use crate::view_models::{GradeReport, QuestionView};

/// What the quiz controller asks of the user interface. The controller
/// never touches widgets; the egui front-end and the tests implement this.
pub trait Presenter {
    /// Setup screen: count input, mode choice, bank size.
    fn show_setup(&mut self, bank_size: usize);

    fn render(&mut self, question: &QuestionView);

    fn show_result(&mut self, report: &GradeReport);

    fn show_warning(&mut self, warning: &QuizError);
}
