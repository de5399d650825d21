use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::{Point3, Vector3};
use pegasus_collision::shapes::{Box, Shape, Sphere};
use pegasus_collision::Dispatcher;

fn bench_sphere_sphere(c: &mut Criterion) {
    let mut dispatcher = Dispatcher::new();
    let a = Shape::Sphere(Sphere::new(Point3::origin(), 1.0));
    let b = Shape::Sphere(Sphere::new(Point3::new(1.5, 0.0, 0.0), 1.0));

    c.bench_function("sphere_sphere_detect", |bencher| {
        bencher.iter(|| dispatcher.detect(black_box(&a), black_box(&b)).unwrap())
    });
}

fn bench_box_box(c: &mut Criterion) {
    let mut dispatcher = Dispatcher::new();
    let a = Shape::Box(Box::new(
        Point3::origin(),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ));
    let s = std::f64::consts::FRAC_1_SQRT_2;
    let b = Shape::Box(Box::new(
        Point3::new(1.5, 0.5, 0.0),
        Vector3::new(s, s, 0.0),
        Vector3::new(-s, s, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ));

    c.bench_function("box_box_detect", |bencher| {
        bencher.iter(|| dispatcher.detect(black_box(&a), black_box(&b)).unwrap())
    });
}

criterion_group!(benches, bench_sphere_sphere, bench_box_box);
criterion_main!(benches);
