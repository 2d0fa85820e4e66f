/// Passes a value through only when it differs from the last one passed.
///
/// Starts with no baseline, so the first observation always passes.
#[derive(Debug, Clone, Default)]
pub struct EdgeTrigger<T> {
    last: Option<T>,
}

impl<T: PartialEq + Clone> EdgeTrigger<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn observe(&mut self, value: T) -> Option<T> {
        if self.last.as_ref() == Some(&value) {
            return None;
        }
        self.last = Some(value.clone());
        Some(value)
    }
}
