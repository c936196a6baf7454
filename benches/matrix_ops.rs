use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pixel_matrix::pixel_matrix::{Pixel3, PixelMatrixContainer, encode};
use std::hint::black_box;

const SIZES: [(usize, usize, &str); 3] = [
    (100, 100, "100x100"),
    (500, 500, "500x500"),
    (1000, 1000, "1000x1000"),
];

fn generate_gradient(width: usize, height: usize) -> PixelMatrixContainer {
    let mut container = PixelMatrixContainer::new(width, height).unwrap();
    let mut pixels = container.full_pixels_mut();
    for y in 0..height {
        let row = pixels.row_mut(y).unwrap();
        for (x, pixel) in row.iter_mut().enumerate() {
            let value = ((x + y) % 256) as u8;
            *pixel = Pixel3::new(value, value / 2, 255 - value);
        }
    }
    container
}

fn benchmark_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_all");

    for (width, height, label) in SIZES {
        let mut container = PixelMatrixContainer::new(width, height).unwrap();
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            let mut pixels = container.full_pixels_mut();
            b.iter(|| pixels.fill_all(black_box(Pixel3::GRAY)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_to");

    for (width, height, label) in SIZES {
        let source = generate_gradient(width, height);
        let mut destination = PixelMatrixContainer::new(width, height).unwrap();
        group.bench_function(BenchmarkId::new("continuous", label), |b| {
            let mut dest = destination.full_pixels_mut();
            b.iter(|| source.full_pixels().copy_to(black_box(&mut dest)).unwrap());
        });

        let mut padded = PixelMatrixContainer::new(width + 16, height).unwrap();
        group.bench_function(BenchmarkId::new("strided", label), |b| {
            let mut parent = padded.full_pixels_mut();
            let mut dest = parent.cut_out_mut(8, 0, width, height).unwrap();
            b.iter(|| source.full_pixels().copy_to(black_box(&mut dest)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_scale_up(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_to_with_scale_up");
    let source = generate_gradient(250, 250);

    for magnification in [2, 4] {
        let mut destination = PixelMatrixContainer::new(250 * magnification, 250 * magnification).unwrap();
        group.bench_function(BenchmarkId::from_parameter(magnification), |b| {
            let mut dest = destination.full_pixels_mut();
            b.iter(|| source.full_pixels().copy_to_with_scale_up(black_box(&mut dest)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bmp_encode");

    for (width, height, label) in SIZES {
        let container = generate_gradient(width, height);
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| encode(black_box(&container.full_pixels())).unwrap());
        });
    }

    group.finish();
}

fn benchmark_channel_average(c: &mut Criterion) {
    let container = generate_gradient(1000, 1000);
    c.bench_function("channel_average_of_entire", |b| {
        b.iter(|| black_box(container.full_pixels()).channel_average_of_entire().unwrap());
    });
}

criterion_group!(
    benches,
    benchmark_fill,
    benchmark_copy,
    benchmark_scale_up,
    benchmark_encode,
    benchmark_channel_average
);
criterion_main!(benches);
