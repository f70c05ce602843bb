use thiserror::Error;

/// Failures raised while building moduli, root tables and rings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The modulus is even, smaller than three or composite.
    #[error("invalid modulus: q = {q} is not an odd prime")]
    NotAnOddPrime { q: u64 },
    /// The modulus leaves no room for the lazy [0, 4q) ranges of the word.
    #[error("invalid modulus: q = {q} has more than {max_bits} bits")]
    ModulusTooLarge { q: u64, max_bits: u32 },
    #[error("invalid {name}: {value} is not a power of two")]
    NotPowerOfTwo { name: &'static str, value: u64 },
    /// The root order must lie in [2, max]: 2n for a ring, q-1 for a prime.
    #[error("invalid root order: nth_root = {nth_root} not in [2, {max}]")]
    InvalidRootOrder { nth_root: u64, max: u64 },
    #[error("no primitive {nth_root}-th root of unity: q = {q} = {residue} mod {nth_root} != 1")]
    NoRootOfUnity { q: u64, nth_root: u64, residue: u64 },
    #[error("no quadratic non-residue mod q = {q} among the first {bound} candidates")]
    NoQuadraticNonResidue { q: u64, bound: u64 },
    #[error("no generator of Z_q^* for q = {q} among the first {bound} candidates")]
    NoGenerator { q: u64, bound: u64 },
    /// The root does not have exact multiplicative order nth_root.
    #[error("invalid root: {root} is not a primitive {nth_root}-th root of unity mod q = {q}")]
    InvalidRoot { root: u64, nth_root: u64, q: u64 },
    /// A named parameter set disagrees with the derived constants.
    #[error("parameter set {name}: {field} = {expected} but derived {derived}")]
    ParameterMismatch {
        name: &'static str,
        field: &'static str,
        expected: u64,
        derived: u64,
    },
}
