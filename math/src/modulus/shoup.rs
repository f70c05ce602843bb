/// Shoup stores a fixed multiplicand b with its quotient floor(b * 2^32 / q).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shoup<O>(pub O, pub O);

impl<O> Shoup<O> {
    #[inline(always)]
    pub fn value(&self) -> &O {
        &self.0
    }

    #[inline(always)]
    pub fn quotient(&self) -> &O {
        &self.1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShoupPrecomp<O> {
    pub q: O,
    pub one: Shoup<O>,
}
