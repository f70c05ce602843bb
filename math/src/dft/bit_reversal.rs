use crate::modulus::WordOps;
use itertools::izip;

/// Index permutation i -> BitRev(i) over log2(size) bits. It is an
/// involution: applying it twice restores the input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitReversal {
    pub log_size: u32,
    pub permutation: Vec<usize>,
}

impl BitReversal {
    /// Method will panic if size is not a power of two.
    pub fn new(size: usize) -> Self {
        assert!(
            size.is_power_of_two(),
            "invalid argument size: {} is not a power of two",
            size
        );
        let log_size: u32 = size.log2() as _;
        Self {
            log_size,
            permutation: (0..size).map(|i| i.reverse_bits_msb(log_size)).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.permutation.len()
    }

    #[inline(always)]
    pub fn index(&self, i: usize) -> usize {
        self.permutation[i]
    }

    /// Copies block BitRev(k) of a into block k of b, blocks being
    /// `block` consecutive values.
    pub fn apply<T: Copy>(&self, a: &[T], b: &mut [T], block: usize) {
        assert!(
            a.len() == self.size() * block,
            "invalid argument a: a.len()={} != size*block={}",
            a.len(),
            self.size() * block
        );
        assert!(
            b.len() == a.len(),
            "invalid argument b: b.len()={} != a.len()={}",
            b.len(),
            a.len()
        );
        izip!(b.chunks_exact_mut(block), &self.permutation)
            .for_each(|(b, &j)| b.copy_from_slice(&a[j * block..(j + 1) * block]));
    }
}
