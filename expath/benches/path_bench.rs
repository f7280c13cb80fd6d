use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use expath::path::resolve::{collapse, split_segments};
use expath::path::{normalize, PathResolver, PathStyle};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("clean_posix", |b| {
        b.iter(|| normalize::normalize(black_box("/absolute/path/to/file"), PathStyle::Posix));
    });

    group.bench_function("repeated_separators", |b| {
        b.iter(|| normalize::normalize(black_box("/a//b///c////d"), PathStyle::Posix));
    });

    // Windows accepts both separators
    group.bench_function("mixed_windows", |b| {
        b.iter(|| normalize::normalize(black_box("C:/a\\\\b//c\\d"), PathStyle::Windows));
    });

    group.finish();
}

fn bench_resolve_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_operations");

    group.bench_function("split_segments", |b| {
        b.iter(|| split_segments(black_box("/a/b/../c/./d"), PathStyle::Posix));
    });

    let segments = ["", "a", "b", "..", "c", ".", "d"];
    group.bench_function("collapse", |b| {
        b.iter(|| collapse(black_box(&segments)));
    });

    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");

    let posix = PathResolver::new().with_style(PathStyle::Posix);
    let windows = PathResolver::new().with_style(PathStyle::Windows);

    for (name, path) in [
        ("already_canonical", "/absolute/path/to/file"),
        ("with_dots", "/a/b/../c/./d"),
        ("many_dots", "/a/b/c/d/../../e/f/../../g"),
        ("trailing_separator", "/a/b/c/"),
    ] {
        group.bench_with_input(BenchmarkId::new("resolve_posix", name), &path, |b, &p| {
            b.iter(|| posix.resolve(black_box(p)));
        });
    }

    group.bench_function("resolve_windows", |b| {
        b.iter(|| windows.resolve(black_box("C:/Users/./me/../you/AppData")));
    });

    group.bench_function("join_no_resolve", |b| {
        b.iter(|| posix.join(black_box("/srv"), black_box(&["app", "bin", "tool"]), false));
    });

    group.bench_function("join_resolve", |b| {
        b.iter(|| posix.join(black_box("/srv/app"), black_box(&["..", "data", "db"]), true));
    });

    group.bench_function("resolve_against", |b| {
        b.iter(|| posix.resolve_against(black_box("/srv/app"), black_box("../data/./db")));
    });

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");

    let resolver = PathResolver::new().with_style(PathStyle::Posix);

    group.bench_function("ext_name", |b| {
        b.iter(|| resolver.ext_name(black_box("/srv/releases/app.tar.gz")));
    });

    group.bench_function("dirname", |b| {
        b.iter(|| resolver.dirname(black_box("/srv/releases/app.tar.gz")));
    });

    group.bench_function("is_absolute", |b| {
        b.iter(|| resolver.is_absolute(black_box("/srv/releases")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_resolve_operations,
    bench_resolver,
    bench_components
);
criterion_main!(benches);
