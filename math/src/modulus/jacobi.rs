/// Returns the Jacobi symbol (a | n) in {-1, 0, 1} for an odd n > 0,
/// using the binary algorithm (no factorization of n).
pub fn jacobi(a: u64, n: u64) -> i8 {
    debug_assert!(n & 1 == 1, "invalid argument n: n = {} is even", n);
    let mut a: u64 = a % n;
    let mut n: u64 = n;
    let mut t: i8 = 1;
    while a != 0 {
        let z: u32 = a.trailing_zeros();
        a >>= z;
        if z & 1 == 1 && matches!(n & 7, 3 | 5) {
            t = -t;
        }
        if a < n {
            std::mem::swap(&mut a, &mut n);
            if a & 3 == 3 && n & 3 == 3 {
                t = -t;
            }
        }
        a -= n;
    }
    if n == 1 { t } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn euler(a: u64, p: u64) -> i8 {
        let mut r: u64 = 1;
        let mut b: u64 = a % p;
        let mut e: u64 = (p - 1) >> 1;
        while e > 0 {
            if e & 1 == 1 {
                r = r * b % p;
            }
            b = b * b % p;
            e >>= 1;
        }
        match r {
            0 => 0,
            1 => 1,
            _ => -1,
        }
    }

    #[test]
    fn matches_euler_criterion() {
        for p in [3u64, 5, 7, 17, 257, 3329, 7681, 12289] {
            (0..p.min(2000)).for_each(|a| assert_eq!(jacobi(a, p), euler(a, p), "a={} p={}", a, p));
        }
    }

    #[test]
    fn composite_moduli() {
        assert_eq!(jacobi(2, 15), 1);
        assert_eq!(jacobi(7, 15), -1);
        assert_eq!(jacobi(5, 15), 0);
        assert_eq!(jacobi(1001, 9907), -1);
        assert_eq!(jacobi(19, 45), 1);
        assert_eq!(jacobi(8, 21), -1);
        assert_eq!(jacobi(5, 21), 1);
        assert_eq!(jacobi(12, 1), 1);
    }

    #[test]
    fn mlkem_smallest_non_residue() {
        assert_eq!(jacobi(2, 3329), 1);
        assert_eq!(jacobi(3, 3329), -1);
    }
}
