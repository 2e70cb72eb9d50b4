/// A small trait abstraction for anything that can describe itself as an
/// ordered sequence of feature strings. This is the only contract a document
/// type must satisfy to be trained on or classified; the classifier imposes
/// no constraints on feature content beyond string equality.
///
/// Implementations must be pure: the same document always yields the same
/// sequence.
pub trait Featurize {
    /// Derive the feature strings for this document, in order.
    fn features(&self) -> Vec<String>;
}

impl Featurize for Vec<String> {
    fn features(&self) -> Vec<String> {
        self.clone()
    }
}
