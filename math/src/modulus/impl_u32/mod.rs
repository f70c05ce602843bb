pub mod barrett;
pub mod montgomery;
pub mod operations;
pub mod plain;
pub mod prime;
pub mod shoup;

use crate::lanes::Lanes;
use crate::modulus::ReduceOnce;
use crate::modulus::{BARRETT, BARRETTLAZY, FOURTIMES, NONE, ONCE, REDUCEMOD, TWICE};

impl ReduceOnce<u32> for u32 {
    #[inline(always)]
    fn reduce_once_constant_time_assign(&mut self, q: u32) {
        debug_assert!(q < 0x80000000, "2q >= 2^32");
        *self -= ((q - 1).wrapping_sub(*self) >> 31) * q;
    }

    #[inline(always)]
    fn reduce_once_constant_time(&self, q: u32) -> u32 {
        debug_assert!(q < 0x80000000, "2q >= 2^32");
        self - ((q - 1).wrapping_sub(*self) >> 31) * q
    }

    #[inline(always)]
    fn reduce_once_assign(&mut self, q: u32) {
        debug_assert!(q < 0x80000000, "2q >= 2^32");
        *self = (*self).min(self.wrapping_sub(q))
    }

    #[inline(always)]
    fn reduce_once(&self, q: u32) -> u32 {
        debug_assert!(q < 0x80000000, "2q >= 2^32");
        (*self).min(self.wrapping_sub(q))
    }
}

/// Applies REDUCE to lanes already known to lie in [0, 2q).
#[inline(always)]
pub(crate) fn reduce_two_q_lanes<const W: usize, const REDUCE: REDUCEMOD>(x: Lanes<u32, W>, q: u32) -> Lanes<u32, W> {
    match REDUCE {
        NONE | TWICE | FOURTIMES | BARRETTLAZY => x,
        ONCE | BARRETT => x.reduce_once(q),
        _ => unreachable!("invalid REDUCE argument"),
    }
}
