/// A line-oriented sink for tour progress.
///
/// The binary prints to the terminal; tests record the lines and assert on them.
pub trait Console {
    /// Reports a single line of progress.
    fn line(&self, line: &str);

    /// Announces the demo that is about to run.
    fn section(&self, title: &str) {
        self.line(&format!("*** {title} ***"));
    }
}
