use criterion::{criterion_group, criterion_main, Criterion};
use gridscan::{filter, for_each2, for_each_pair2, gaussian_kernel, GridCells, GridView};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as u8);
        }
    }
    data
}

fn bench_elementwise(c: &mut Criterion) {
    let width = 512;
    let height = 512;
    let image = make_image(width, height);
    let mut out = vec![0.0f32; width * height];

    c.bench_function("for_each2_512x512_u8_to_f32", |b| {
        b.iter(|| {
            let src = GridView::from_slice(&image, height, width).unwrap();
            let dst = GridCells::from_mut(&mut out, height, width).unwrap();
            for_each2(&src, &dst, |&px, o| o.set(f32::from(px) / 255.0)).unwrap();
            black_box(out[0]);
        })
    });
}

fn bench_pairwise(c: &mut Criterion) {
    let width = 512;
    let height = 512;
    let image = make_image(width, height);
    let mut laplacian = vec![0i32; width * height];

    c.bench_function("for_each_pair2_512x512_laplacian", |b| {
        b.iter(|| {
            laplacian.fill(0);
            let src = GridView::from_slice(&image, height, width).unwrap();
            let dst = GridCells::from_mut(&mut laplacian, height, width).unwrap();
            for_each_pair2(&src, &dst, |&b1, &b2, l1, l2| {
                let d = i32::from(b1) - i32::from(b2);
                l1.set(l1.get() + d);
                l2.set(l2.get() - d);
            })
            .unwrap();
            black_box(laplacian[0]);
        })
    });
}

fn bench_filter(c: &mut Criterion) {
    let width = 256;
    let height = 256;
    let image: Vec<f32> = make_image(width, height)
        .into_iter()
        .map(f32::from)
        .collect();
    let mut blurred = vec![0.0f32; width * height];
    let kernel = gaussian_kernel(5, 5, 1.4).unwrap();

    c.bench_function("filter_256x256_gaussian_5x5", |b| {
        b.iter(|| {
            let src = GridView::from_slice(&image, height, width).unwrap();
            let dst = GridCells::from_mut(&mut blurred, height, width).unwrap();
            let mut acc = (0.0f32, 0.0f32);
            filter(
                &src,
                &dst,
                &kernel,
                &mut acc,
                |acc, &px, w| {
                    acc.0 += px * w.get();
                    acc.1 += w.get();
                },
                |acc, out| {
                    out.set(acc.0 / acc.1);
                    *acc = (0.0, 0.0);
                },
            )
            .unwrap();
            black_box(blurred[0]);
        })
    });
}

criterion_group!(benches, bench_elementwise, bench_pairwise, bench_filter);
criterion_main!(benches);
