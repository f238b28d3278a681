use std::hint::black_box;

use criterion::{
    BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main, measurement::WallTime,
};
use fls::{
    texture::{Texture, TextureRef},
    transform::prelude::{GrayscaleTransform, TextureTransform},
};

pub(crate) mod bench_utils;
use bench_utils::*;

fn bench_transform(
    group: &mut BenchmarkGroup<'_, WallTime>,
    mut transform: GrayscaleTransform,
    name: &str,
    size: u32,
) {
    let input = gen_random_image(size);
    let mut output = Texture::<f32>::new(size, size).unwrap();
    transform.prepare(input.shape(), output.shape());

    group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
        b.iter(|| {
            transform.apply(input.as_texture_slice(), output.as_texture_mut_slice());
            black_box(output.as_ref());
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grayscale_transform");

    for size in BENCH_IMAGE_SIZES {
        bench_transform(&mut group, GrayscaleTransform::Seq, "seq", size);
        bench_transform(&mut group, GrayscaleTransform::Par, "par", size);
    }

    group.finish();
}

criterion_group!(grayscale_transform, criterion_benchmark);
criterion_main!(grayscale_transform);
