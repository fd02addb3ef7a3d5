use std::cell::RefCell;
use std::rc::Rc;

/// Receives the final credits of a finished game and answers with a rank.
pub trait ScoreRecorder {
    fn record(&mut self, score: f64) -> Option<usize>;
}

impl<T: ScoreRecorder + ?Sized> ScoreRecorder for Box<T> {
    fn record(&mut self, score: f64) -> Option<usize> {
        (**self).record(score)
    }
}

/// Lets the caller keep a handle on the store while a session records into it.
impl<T: ScoreRecorder> ScoreRecorder for Rc<RefCell<T>> {
    fn record(&mut self, score: f64) -> Option<usize> {
        self.borrow_mut().record(score)
    }
}
