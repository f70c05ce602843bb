use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kem_math::params::{ALL, ML_DSA, ML_KEM, ParameterSet};
use kem_math::poly::Poly;
use kem_math::ring::Ring;

fn forward(c: &mut Criterion) {
    fn runner<'a, const W: usize, const LAZY: bool>(ring: &'a Ring<u32>) -> Box<dyn FnMut() + 'a> {
        let mut a: Poly<u32> = ring.new_poly();
        for i in 0..a.n() {
            *a.at_mut(i) = i as u32;
        }
        Box::new(move || ring.dft.forward_inplace_lanes::<W, LAZY>(a.as_mut_slice()))
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("forward");

    for params in ALL.iter() {
        let ring: Ring<u32> = Ring::from_params(params).unwrap();

        let runners: [(String, Box<dyn FnMut() + '_>); 4] = [
            ("W=1/LAZY=false".to_string(), { runner::<1, false>(&ring) }),
            ("W=8/LAZY=false".to_string(), { runner::<8, false>(&ring) }),
            ("W=8/LAZY=true".to_string(), { runner::<8, true>(&ring) }),
            ("W=16/LAZY=false".to_string(), { runner::<16, false>(&ring) }),
        ];

        for (name, mut runner) in runners {
            let id: BenchmarkId = BenchmarkId::new(name, params.name);
            b.bench_with_input(id, &(), |b: &mut criterion::Bencher<'_>, _| b.iter(&mut runner));
        }
    }
}

fn backward(c: &mut Criterion) {
    fn runner<'a, const W: usize, const LAZY: bool>(ring: &'a Ring<u32>) -> Box<dyn FnMut() + 'a> {
        let mut a: Poly<u32> = ring.new_poly();
        for i in 0..a.n() {
            *a.at_mut(i) = i as u32;
        }
        Box::new(move || ring.dft.backward_inplace_lanes::<W, LAZY>(a.as_mut_slice()))
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("backward");

    for params in ALL.iter() {
        let ring: Ring<u32> = Ring::from_params(params).unwrap();

        let runners: [(String, Box<dyn FnMut() + '_>); 3] = [
            ("W=1/LAZY=false".to_string(), { runner::<1, false>(&ring) }),
            ("W=8/LAZY=false".to_string(), { runner::<8, false>(&ring) }),
            ("W=8/LAZY=true".to_string(), { runner::<8, true>(&ring) }),
        ];

        for (name, mut runner) in runners {
            let id: BenchmarkId = BenchmarkId::new(name, params.name);
            b.bench_with_input(id, &(), |b: &mut criterion::Bencher<'_>, _| b.iter(&mut runner));
        }
    }
}

fn mul(c: &mut Criterion) {
    fn runner<'a, const NTT: bool>(ring: &'a Ring<u32>) -> Box<dyn FnMut() + 'a> {
        let mut a: Poly<u32> = ring.new_poly();
        let mut b: Poly<u32> = ring.new_poly();
        for i in 0..a.n() {
            *a.at_mut(i) = i as u32;
            *b.at_mut(i) = (a.n() - i) as u32;
        }
        if NTT {
            Box::new(move || {
                ring.mul_ntt(&a, &b);
            })
        } else {
            Box::new(move || {
                ring.mul_schoolbook(&a, &b);
            })
        }
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("mul");

    let sets: [&ParameterSet; 2] = [&ML_KEM, &ML_DSA];
    for params in sets {
        let ring: Ring<u32> = Ring::from_params(params).unwrap();

        let runners: [(&str, Box<dyn FnMut() + '_>); 2] = [
            ("ntt", { runner::<true>(&ring) }),
            ("schoolbook", { runner::<false>(&ring) }),
        ];

        for (name, mut runner) in runners {
            let id: BenchmarkId = BenchmarkId::new(name, params.name);
            b.bench_with_input(id, &(), |b: &mut criterion::Bencher<'_>, _| b.iter(&mut runner));
        }
    }
}

criterion_group!(benches, forward, backward, mul);
criterion_main!(benches);
