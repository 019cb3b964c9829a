/// Shows a fixed sequence of content one step at a time.
///
/// The first step is visible as soon as the reveal is created; each
/// `advance` uncovers the next one until all are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReveal<T> {
    steps: Vec<T>,
    revealed: usize,
}

impl<T> StepReveal<T> {
    #[must_use]
    pub fn new(steps: Vec<T>) -> Self {
        let revealed = steps.len().min(1);
        Self { steps, revealed }
    }

    /// Steps uncovered so far, in order.
    #[must_use]
    pub fn visible(&self) -> &[T] {
        &self.steps[..self.revealed]
    }

    /// Most recently uncovered step.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.visible().last()
    }

    /// Step that the next `advance` would uncover.
    #[must_use]
    pub fn upcoming(&self) -> Option<&T> {
        self.steps.get(self.revealed)
    }

    /// Uncover the next step. Returns `false` when everything is already visible.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed >= self.steps.len()
    }

    /// 1-based number of the current step (0 when there are no steps).
    #[must_use]
    pub fn step(&self) -> usize {
        self.revealed
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.steps.len()
    }
}
