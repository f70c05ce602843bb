pub mod bit_reversal;
pub mod ntt;

use crate::lanes::Lanes;
use crate::modulus::ONCE;
use crate::modulus::montgomery::Montgomery;
use crate::modulus::prime::Prime;

/// Left operand of a base multiplication: a plain residue (Barrett product)
/// or a Montgomery-prepared one (Montgomery product).
pub trait BaseOperand: Copy {
    fn mul_lanes<const W: usize>(prime: &Prime<u32>, a: Lanes<Self, W>, b: Lanes<u32, W>) -> Lanes<u32, W>;
}

impl BaseOperand for u32 {
    #[inline(always)]
    fn mul_lanes<const W: usize>(prime: &Prime<u32>, a: Lanes<u32, W>, b: Lanes<u32, W>) -> Lanes<u32, W> {
        prime.barrett.mul_lanes::<W, ONCE>(a, b)
    }
}

impl BaseOperand for Montgomery<u32> {
    #[inline(always)]
    fn mul_lanes<const W: usize>(
        prime: &Prime<u32>,
        a: Lanes<Montgomery<u32>, W>,
        b: Lanes<u32, W>,
    ) -> Lanes<u32, W> {
        prime.montgomery.mul_external_lanes::<W, ONCE>(a, b)
    }
}
