/// Reduction by hardware division, kept as the reference every other
/// strategy is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlainPrecomp<O> {
    pub q: O,
}
