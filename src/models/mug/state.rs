/// Coarse fill state of a mug.
///
/// A mug moves between these freely; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MugState {
    /// Nothing to drink.
    Empty,
    /// Holds something, with room to spare.
    Partial,
    /// Filled to capacity.
    Full,
}
