//! Fixed-width batches of machine words processed in lockstep.
//!
//! A [`Lanes<T, W>`] is a plain array of `W` words on which every operation is
//! applied lane by lane, with no interaction between lanes. Kernels written
//! against it are generic over `W`; the scalar path is `W = 1`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Lanes<T, const W: usize>(pub [T; W]);

impl<T: Copy, const W: usize> Lanes<T, W> {
    const WIDTH_IS_POWER_OF_TWO: () = assert!(W.is_power_of_two(), "lane width must be a power of two");

    #[inline(always)]
    pub fn splat(v: T) -> Self {
        let () = Self::WIDTH_IS_POWER_OF_TWO;
        Self([v; W])
    }

    /// Reads the first W words of src.
    #[inline(always)]
    pub fn load(src: &[T]) -> Self {
        let () = Self::WIDTH_IS_POWER_OF_TWO;
        debug_assert!(
            src.len() >= W,
            "invalid argument src: src.len() = {} < W = {}",
            src.len(),
            W
        );
        Self(std::array::from_fn(|i| src[i]))
    }

    /// Writes the W lanes to the first W words of dst.
    #[inline(always)]
    pub fn store(self, dst: &mut [T]) {
        dst[..W].copy_from_slice(&self.0)
    }

    /// Reads src[idx[l]] into lane l.
    #[inline(always)]
    pub fn gather(src: &[T], idx: &[usize; W]) -> Self {
        let () = Self::WIDTH_IS_POWER_OF_TWO;
        Self(std::array::from_fn(|l| src[idx[l]]))
    }

    /// Writes lane l to dst[idx[l]].
    #[inline(always)]
    pub fn scatter(self, dst: &mut [T], idx: &[usize; W]) {
        idx.iter().zip(self.0).for_each(|(&i, v)| dst[i] = v);
    }

    #[inline(always)]
    pub fn map<U: Copy>(self, f: impl Fn(T) -> U) -> Lanes<U, W> {
        Lanes(self.0.map(f))
    }

    #[inline(always)]
    pub fn zip_with<U: Copy, V: Copy>(self, other: Lanes<U, W>, f: impl Fn(T, U) -> V) -> Lanes<V, W> {
        Lanes(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

macro_rules! impl_lanes_arith {
    ($t:ty) => {
        impl<const W: usize> Lanes<$t, W> {
            #[inline(always)]
            pub fn wrapping_add(self, other: Self) -> Self {
                self.zip_with(other, <$t>::wrapping_add)
            }

            #[inline(always)]
            pub fn wrapping_sub(self, other: Self) -> Self {
                self.zip_with(other, <$t>::wrapping_sub)
            }

            #[inline(always)]
            pub fn wrapping_mul(self, other: Self) -> Self {
                self.zip_with(other, <$t>::wrapping_mul)
            }

            #[inline(always)]
            pub fn min(self, other: Self) -> Self {
                self.zip_with(other, <$t>::min)
            }

            #[inline(always)]
            pub fn shr(self, s: u32) -> Self {
                self.map(|x| x >> s)
            }

            /// Returns min(x, x - q) per lane: subtracts q from the lanes
            /// where x >= q. Requires 2q to fit the word.
            #[inline(always)]
            pub fn reduce_once(self, q: $t) -> Self {
                self.map(|x| x.min(x.wrapping_sub(q)))
            }
        }
    };
}

impl_lanes_arith!(u32);
impl_lanes_arith!(u64);

impl<const W: usize> Lanes<u32, W> {
    /// Zero-extends every lane to 64 bits.
    #[inline(always)]
    pub fn widen(self) -> Lanes<u64, W> {
        self.map(u64::from)
    }

    /// Full 32x32 -> 64-bit product per lane.
    #[inline(always)]
    pub fn widening_mul(self, other: Self) -> Lanes<u64, W> {
        self.zip_with(other, |a, b| a as u64 * b as u64)
    }
}

impl<const W: usize> Lanes<u64, W> {
    /// Bits [0, 32) of every lane.
    #[inline(always)]
    pub fn lo(self) -> Lanes<u32, W> {
        self.map(|x| x as u32)
    }

    /// Bits [32, 64) of every lane.
    #[inline(always)]
    pub fn hi(self) -> Lanes<u32, W> {
        self.map(|x| (x >> 32) as u32)
    }
}

/// Lane-to-index tables for butterfly layers whose half-block `size` is
/// smaller than the lane width. Lane l of a 2W-coefficient chunk pairs
/// `top[l]` with `bottom[l] = top[l] + size` and uses the twiddle of
/// block `block[l]` relative to the chunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanePermutation<const W: usize> {
    pub top: [usize; W],
    pub bottom: [usize; W],
    pub block: [usize; W],
}

impl<const W: usize> LanePermutation<W> {
    pub fn new(size: usize) -> Self {
        debug_assert!(
            size > 0 && size < W,
            "invalid argument size: size = {} not in [1, W = {})",
            size,
            W
        );
        let top: [usize; W] = std::array::from_fn(|l| (l / size) * 2 * size + l % size);
        Self {
            top,
            bottom: top.map(|t| t + size),
            block: std::array::from_fn(|l| l / size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lo_hi_split() {
        let x: Lanes<u64, 2> = Lanes([0x1234_5678_9abc_def0, u64::MAX]);
        assert_eq!(x.lo(), Lanes([0x9abc_def0, u32::MAX]));
        assert_eq!(x.hi(), Lanes([0x1234_5678, u32::MAX]));
    }

    #[test]
    fn reduce_once_per_lane() {
        let q: u32 = 3329;
        let x: Lanes<u32, 4> = Lanes([0, q - 1, q, 2 * q - 1]);
        assert_eq!(x.reduce_once(q), Lanes([0, q - 1, 0, q - 1]));
    }

    #[test]
    fn gather_scatter_inverse() {
        let src: Vec<u32> = (0..8).collect();
        let idx: [usize; 4] = [6, 0, 3, 5];
        let g: Lanes<u32, 4> = Lanes::gather(&src, &idx);
        assert_eq!(g, Lanes([6, 0, 3, 5]));
        let mut dst: Vec<u32> = vec![0; 8];
        g.scatter(&mut dst, &idx);
        assert_eq!(dst, vec![0, 0, 0, 3, 0, 5, 6, 0]);
    }

    #[test]
    fn permutation_covers_chunk() {
        for size in [1usize, 2, 4] {
            let p: LanePermutation<8> = LanePermutation::new(size);
            let mut seen: Vec<usize> = p.top.iter().chain(p.bottom.iter()).copied().collect();
            seen.sort();
            assert_eq!(seen, (0..16).collect::<Vec<usize>>(), "size={}", size);
            p.top
                .iter()
                .zip(p.block.iter())
                .for_each(|(&t, &b)| assert_eq!(t / (2 * size), b));
        }
    }
}
