/// A type that collects the steps taken while factoring an expression.
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. This
/// is what [`factorise`](crate::polynomial::factorise) uses when the caller only wants the
/// result.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
