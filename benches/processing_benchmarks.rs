use biosig_core::processing::{envelope, filter_bandpass, StatMode};
use biosig_core::spectral::welch;
use biosig_core::BandpassConfig;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::f64::consts::PI;

const SIGNAL_LENGTHS: &[usize] = &[2_000, 10_000, 50_000];
const WINDOW_HALFWIDTHS: &[usize] = &[25, 50, 100];

fn test_signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / 2000.0;
            (2.0 * PI * 110.0 * t).sin().abs()
        })
        .collect()
}

fn benchmark_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope");

    for &n in SIGNAL_LENGTHS {
        let signal = test_signal(n);
        group.throughput(Throughput::Elements(n as u64));

        for &halfwidth in WINDOW_HALFWIDTHS {
            group.bench_with_input(
                BenchmarkId::new("moving_rms", format!("{}samples_{}hw", n, halfwidth)),
                &halfwidth,
                |b, &hw| {
                    b.iter(|| envelope(black_box(&signal), hw, StatMode::Rms, None).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn benchmark_bandpass(c: &mut Criterion) {
    let mut group = c.benchmark_group("bandpass_filter");
    let config = BandpassConfig::default();

    for &n in SIGNAL_LENGTHS {
        let signal = test_signal(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n), &signal, |b, signal| {
            b.iter(|| filter_bandpass(black_box(signal), 2000.0, &config).unwrap());
        });
    }

    group.finish();
}

fn benchmark_welch(c: &mut Criterion) {
    let mut group = c.benchmark_group("welch_psd");

    for &n in SIGNAL_LENGTHS {
        let signal = test_signal(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n), &signal, |b, signal| {
            b.iter(|| welch(black_box(signal), 2000.0, 256).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_envelope,
    benchmark_bandpass,
    benchmark_welch
);
criterion_main!(benches);
