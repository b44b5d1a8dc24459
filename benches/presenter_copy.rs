use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mandelbrot_explorer::adapters::pixel_format::copy_rgba_to_rgb;

const FRAME_SIZES: [(usize, usize); 3] = [(600, 400), (1280, 720), (1920, 1080)];

fn bench_copy_rgba_to_rgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("presenter_copy");

    for (width, height) in FRAME_SIZES {
        let pixels = width * height;
        let src: Vec<u8> = (0..pixels * 4).map(|i| (i % 251) as u8).collect();
        let mut dst = vec![0u8; pixels * 3];

        group.throughput(Throughput::Elements(pixels as u64));
        group.bench_function(BenchmarkId::new("rgba_to_rgb", format!("{width}x{height}")), |b| {
            b.iter(|| {
                copy_rgba_to_rgb(black_box(&src), &mut dst);
                black_box(&dst);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_copy_rgba_to_rgb);
criterion_main!(benches);
