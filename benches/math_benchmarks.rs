//! 数学运算性能基准测试
//!
//! 测试向量、矩阵运算的性能

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use particle_engine::math::{Matrix4x4, Vec2, Vec3, Vec4};

fn bench_vec_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_operations");

    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(4.0, 5.0);

    group.bench_function("vec2_add", |bencher| {
        bencher.iter(|| black_box(a + b));
    });

    group.bench_function("vec2_dot", |bencher| {
        bencher.iter(|| black_box(a.dot(b)));
    });

    let v = Vec4::point(1.0, 2.0, 3.0);
    group.bench_function("vec4_scale", |bencher| {
        bencher.iter(|| black_box(v * 2.5));
    });

    group.finish();
}

fn bench_matrix_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_operations");

    let projection = Matrix4x4::pixel_projection(800.0, 600.0).unwrap();
    let rotation =
        Matrix4x4::rotation_about_axis(Vec3::new(0.0, 0.0, 1.0), std::f32::consts::FRAC_PI_4);
    let point = Vec4::point(400.0, 300.0, 0.0);

    group.bench_function("multiply", |bencher| {
        bencher.iter(|| black_box(rotation * projection));
    });

    group.bench_function("transform_point", |bencher| {
        bencher.iter(|| black_box(point * projection));
    });

    group.bench_function("pixel_projection", |bencher| {
        bencher.iter(|| black_box(Matrix4x4::pixel_projection(800.0, 600.0).unwrap()));
    });

    group.bench_function("perspective_projection", |bencher| {
        bencher.iter(|| {
            black_box(Matrix4x4::perspective_projection(16.0 / 9.0, 60.0, 0.1, 100.0).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_vec_operations, bench_matrix_operations);
criterion_main!(benches);
