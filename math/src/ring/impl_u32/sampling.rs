use crate::modulus::WordOps;
use crate::poly::{Domain, Poly};
use crate::ring::Ring;
use sampling::distributions::CenteredBinomial;
use sampling::source::Source;

impl Ring<u32> {
    /// Fills a with coefficients uniform in [0, q).
    pub fn fill_uniform<D: Domain>(&self, source: &mut Source, a: &mut Poly<u32, D>) {
        let max: u32 = self.modulus.q;
        let mask: u32 = max.mask();
        a.0.iter_mut()
            .for_each(|a| *a = source.next_u32n(max, mask));
    }

    /// Fills a with centered binomial noise of parameter eta, mapped into [0, q).
    pub fn fill_binomial(&self, source: &mut Source, eta: u32, a: &mut Poly<u32>) {
        let q: u32 = self.modulus.q;
        let dist: CenteredBinomial = CenteredBinomial::new(eta);
        a.0.iter_mut().for_each(|a| {
            let e: i32 = dist.sample(source);
            *a = if e < 0 { q - e.unsigned_abs() } else { e as u32 };
        });
    }
}
