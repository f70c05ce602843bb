pub mod dft;
pub mod error;
pub mod lanes;
pub mod modulus;
pub mod params;
pub mod poly;
pub mod ring;

/// Default lane width of the vectorized kernels.
pub const LANES: usize = 8;

pub mod macros {
    // The apply macros split slices into W-lane chunks, run the lane kernel
    // `$f::<W, ..>` on each chunk and finish the remainder with the same
    // kernel at W = 1.

    /// vec(a) <- f(vec(a)).
    #[macro_export]
    macro_rules! apply_v {
        ($self:expr, $f:ident::<$W:ident $(, $g:tt)*>, $a:expr) => {{
            let n: usize = $a.len();
            let m: usize = n - n % $W;
            $a[..m].chunks_exact_mut($W).for_each(|a| {
                $self
                    .$f::<$W $(, $g)*>($crate::lanes::Lanes::load(a))
                    .store(a)
            });
            $a[m..].iter_mut().for_each(|a| {
                *a = $self.$f::<1 $(, $g)*>($crate::lanes::Lanes([*a])).0[0];
            });
        }};
    }

    /// vec(b) <- f(vec(a)).
    #[macro_export]
    macro_rules! apply_vu {
        ($self:expr, $f:ident::<$W:ident $(, $g:tt)*>, $a:expr, $b:expr) => {{
            let n: usize = $a.len();
            debug_assert!(
                $b.len() == n,
                "invalid argument b: b.len() = {} != a.len() = {}",
                $b.len(),
                n
            );
            let m: usize = n - n % $W;
            $a[..m]
                .chunks_exact($W)
                .zip($b[..m].chunks_exact_mut($W))
                .for_each(|(a, b)| {
                    $self
                        .$f::<$W $(, $g)*>($crate::lanes::Lanes::load(a))
                        .store(b)
                });
            $a[m..].iter().zip($b[m..].iter_mut()).for_each(|(a, b)| {
                *b = $self.$f::<1 $(, $g)*>($crate::lanes::Lanes([*a])).0[0];
            });
        }};
    }

    /// vec(b) <- f(vec(a), vec(b)).
    #[macro_export]
    macro_rules! apply_vv {
        ($self:expr, $f:ident::<$W:ident $(, $g:tt)*>, $a:expr, $b:expr) => {{
            let n: usize = $a.len();
            debug_assert!(
                $b.len() == n,
                "invalid argument b: b.len() = {} != a.len() = {}",
                $b.len(),
                n
            );
            let m: usize = n - n % $W;
            $a[..m]
                .chunks_exact($W)
                .zip($b[..m].chunks_exact_mut($W))
                .for_each(|(a, b)| {
                    $self
                        .$f::<$W $(, $g)*>(
                            $crate::lanes::Lanes::load(a),
                            $crate::lanes::Lanes::load(b),
                        )
                        .store(b)
                });
            $a[m..].iter().zip($b[m..].iter_mut()).for_each(|(a, b)| {
                *b = $self
                    .$f::<1 $(, $g)*>($crate::lanes::Lanes([*a]), $crate::lanes::Lanes([*b]))
                    .0[0];
            });
        }};
    }

    /// vec(c) <- f(vec(a), vec(b)).
    #[macro_export]
    macro_rules! apply_vvv {
        ($self:expr, $f:ident::<$W:ident $(, $g:tt)*>, $a:expr, $b:expr, $c:expr) => {{
            let n: usize = $a.len();
            debug_assert!(
                $b.len() == n,
                "invalid argument b: b.len() = {} != a.len() = {}",
                $b.len(),
                n
            );
            debug_assert!(
                $c.len() == n,
                "invalid argument c: c.len() = {} != a.len() = {}",
                $c.len(),
                n
            );
            let m: usize = n - n % $W;
            itertools::izip!(
                $a[..m].chunks_exact($W),
                $b[..m].chunks_exact($W),
                $c[..m].chunks_exact_mut($W)
            )
            .for_each(|(a, b, c)| {
                $self
                    .$f::<$W $(, $g)*>(
                        $crate::lanes::Lanes::load(a),
                        $crate::lanes::Lanes::load(b),
                    )
                    .store(c)
            });
            itertools::izip!($a[m..].iter(), $b[m..].iter(), $c[m..].iter_mut()).for_each(|(a, b, c)| {
                *c = $self
                    .$f::<1 $(, $g)*>($crate::lanes::Lanes([*a]), $crate::lanes::Lanes([*b]))
                    .0[0];
            });
        }};
    }

    /// vec(b) <- f(scalar(a), vec(b)).
    #[macro_export]
    macro_rules! apply_sv {
        ($self:expr, $f:ident::<$W:ident $(, $g:tt)*>, $a:expr, $b:expr) => {{
            let n: usize = $b.len();
            let m: usize = n - n % $W;
            let a_lanes = $crate::lanes::Lanes::<_, $W>::splat(*$a);
            $b[..m].chunks_exact_mut($W).for_each(|b| {
                $self
                    .$f::<$W $(, $g)*>(a_lanes, $crate::lanes::Lanes::load(b))
                    .store(b)
            });
            $b[m..].iter_mut().for_each(|b| {
                *b = $self
                    .$f::<1 $(, $g)*>($crate::lanes::Lanes([*$a]), $crate::lanes::Lanes([*b]))
                    .0[0];
            });
        }};
    }
}
