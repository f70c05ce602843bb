use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kem_math::LANES;
use kem_math::modulus::montgomery::Montgomery;
use kem_math::modulus::prime::Prime;
use kem_math::modulus::{ONCE, VectorOperations};

const MODULI: [u32; 3] = [3329, 8380417, 1073479681];

fn va_add_vb_into_vb(c: &mut Criterion) {
    fn runner(prime: Prime<u32>, n: usize) -> Box<dyn FnMut()> {
        let p0: Vec<u32> = (0..n as u32).map(|i| i % prime.q).collect();
        let mut p1: Vec<u32> = p0.clone();
        Box::new(move || {
            prime.va_add_vb_into_vb::<LANES, ONCE>(&p0, &mut p1);
        })
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("va_add_vb_into_vb");
    for q in MODULI {
        let n: usize = 1 << 12;
        let mut run = runner(Prime::<u32>::new(q).unwrap(), n);
        let id = BenchmarkId::new(format!("q={}", q), n);
        b.bench_with_input(id, &(), |b, _| b.iter(&mut run));
    }
}

fn va_barrett_mul_vb_into_vc(c: &mut Criterion) {
    fn runner(prime: Prime<u32>, n: usize) -> Box<dyn FnMut()> {
        let p0: Vec<u32> = (0..n as u32).map(|i| i % prime.q).collect();
        let p1: Vec<u32> = p0.iter().rev().copied().collect();
        let mut p2: Vec<u32> = vec![0; n];
        Box::new(move || {
            prime.va_barrett_mul_vb_into_vc::<LANES, ONCE>(&p0, &p1, &mut p2);
        })
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("va_barrett_mul_vb_into_vc");
    for q in MODULI {
        let n: usize = 1 << 12;
        let mut run = runner(Prime::<u32>::new(q).unwrap(), n);
        let id = BenchmarkId::new(format!("q={}", q), n);
        b.bench_with_input(id, &(), |b, _| b.iter(&mut run));
    }
}

fn va_mont_mul_vb_into_vc(c: &mut Criterion) {
    fn runner(prime: Prime<u32>, n: usize) -> Box<dyn FnMut()> {
        let p0: Vec<Montgomery<u32>> = (0..n as u32)
            .map(|i| prime.montgomery.prepare::<ONCE>(i % prime.q))
            .collect();
        let p1: Vec<u32> = (0..n as u32).map(|i| i % prime.q).collect();
        let mut p2: Vec<u32> = vec![0; n];
        Box::new(move || {
            prime.va_mont_mul_vb_into_vc::<LANES, ONCE>(&p0, &p1, &mut p2);
        })
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("va_mont_mul_vb_into_vc");
    for q in MODULI {
        let n: usize = 1 << 12;
        let mut run = runner(Prime::<u32>::new(q).unwrap(), n);
        let id = BenchmarkId::new(format!("q={}", q), n);
        b.bench_with_input(id, &(), |b, _| b.iter(&mut run));
    }
}

fn sa_shoup_mul_vb_into_vb(c: &mut Criterion) {
    fn runner(prime: Prime<u32>, n: usize) -> Box<dyn FnMut()> {
        let s = prime.shoup.prepare(prime.q - 1);
        let mut p0: Vec<u32> = (0..n as u32).map(|i| i % prime.q).collect();
        Box::new(move || {
            prime.sa_shoup_mul_vb_into_vb::<LANES, ONCE>(&s, &mut p0);
        })
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("sa_shoup_mul_vb_into_vb");
    for q in MODULI {
        let n: usize = 1 << 12;
        let mut run = runner(Prime::<u32>::new(q).unwrap(), n);
        let id = BenchmarkId::new(format!("q={}", q), n);
        b.bench_with_input(id, &(), |b, _| b.iter(&mut run));
    }
}

criterion_group!(
    benches,
    va_add_vb_into_vb,
    va_barrett_mul_vb_into_vc,
    va_mont_mul_vb_into_vc,
    sa_shoup_mul_vb_into_vb
);
criterion_main!(benches);
