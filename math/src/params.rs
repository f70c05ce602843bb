//! Named parameter sets with the constants they are expected to reproduce.

/// A modulus, a ring degree and a root order, with the primitive root and
/// the inverse transform scale the engine must derive from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSet {
    pub name: &'static str,
    pub q: u32,
    pub n: usize,
    /// Order of the root of unity: 2n for a complete negacyclic transform.
    pub nth_root: u32,
    /// Expected smallest primitive nth_root-th root of unity.
    pub psi: Option<u32>,
    /// Expected (nth_root/2)^-1 mod q.
    pub n_inv: Option<u32>,
}

impl ParameterSet {
    /// Number of twiddle factors, also the number of residues of the transform.
    pub fn transform_size(&self) -> usize {
        (self.nth_root >> 1) as usize
    }

    /// Degree of the residues x^base - gamma left by the transform.
    pub fn base(&self) -> usize {
        2 * self.n / self.nth_root as usize
    }
}

/// FIPS-203: q = 3329 only admits primitive 256-th roots, the transform
/// stops at degree-1 residues.
pub const ML_KEM: ParameterSet = ParameterSet {
    name: "ML-KEM",
    q: 3329,
    n: 256,
    nth_root: 256,
    psi: Some(17),
    n_inv: Some(3303),
};

pub const KYBER_R1: ParameterSet = ParameterSet {
    name: "Kyber-r1",
    q: 7681,
    n: 256,
    nth_root: 512,
    psi: Some(62),
    n_inv: Some(7651),
};

pub const ML_DSA: ParameterSet = ParameterSet {
    name: "ML-DSA",
    q: 8380417,
    n: 256,
    nth_root: 512,
    psi: Some(1753),
    n_inv: Some(8347681),
};

pub const FALCON_512: ParameterSet = ParameterSet {
    name: "Falcon-512",
    q: 12289,
    n: 512,
    nth_root: 1024,
    psi: Some(49),
    n_inv: Some(12265),
};

pub const NTT_30BIT: ParameterSet = ParameterSet {
    name: "NTT-30bit",
    q: 998244353,
    n: 1024,
    nth_root: 2048,
    psi: Some(752127),
    n_inv: Some(997269505),
};

pub const ALL: [ParameterSet; 5] = [ML_KEM, KYBER_R1, ML_DSA, FALCON_512, NTT_30BIT];
