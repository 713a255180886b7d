//! Sample source trait definition.

/// A producer of one numeric sample per logical time step.
///
/// Sources are pulled by the driving loop; `None` means the source is
/// exhausted. Live generators may never return `None`.
pub trait SampleSource: Send {
    /// Produce the next sample value.
    fn next_value(&mut self) -> Option<f64>;

    /// Short human readable description, shown by renderers.
    fn describe(&self) -> String {
        String::from("sample source")
    }
}

impl<S: SampleSource + ?Sized> SampleSource for Box<S> {
    fn next_value(&mut self) -> Option<f64> {
        (**self).next_value()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
