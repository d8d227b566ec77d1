use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use ui_hooks::ContainerSizeObserver;
use ui_hooks::api::{PaginationConfig, PaginationEngine};
use ui_hooks::core::{ChartSizeSpec, Dimensions, resolve_chart_size};
use ui_hooks::host::InMemorySurface;

fn bench_pagination_walk_100k(c: &mut Criterion) {
    let items: Vec<u64> = (0..100_000).collect();
    let mut engine = PaginationEngine::new(
        items,
        PaginationConfig::default().with_initial_page_size(25),
    );

    c.bench_function("pagination_walk_100k", |b| {
        b.iter(|| {
            engine.first_page();
            let mut checksum = 0u64;
            while engine.has_next_page() {
                checksum = checksum.wrapping_add(black_box(engine.paginated_data())[0]);
                engine.next_page();
            }
            black_box(checksum)
        })
    });
}

fn bench_responsive_chart_size(c: &mut Criterion) {
    let containers: Vec<Dimensions> = (0..1_000)
        .map(|i| Dimensions::new(f64::from(i) * 1.7, f64::from(1_000 - i) * 0.9))
        .collect();

    c.bench_function("responsive_chart_size_1k", |b| {
        b.iter(|| {
            containers
                .iter()
                .map(|container| {
                    resolve_chart_size(ChartSizeSpec::Responsive, Some(black_box(*container)))
                })
                .sum::<u32>()
        })
    });
}

fn bench_resize_fanout(c: &mut Criterion) {
    let surface = InMemorySurface::new(800.0, 600.0);
    let observers: Vec<ContainerSizeObserver> = (0..64)
        .map(|_| ContainerSizeObserver::attached(&surface))
        .collect();

    c.bench_function("resize_fanout_64_observers", |b| {
        b.iter(|| {
            surface.resize_to(black_box(640.0), black_box(480.0));
            black_box(observers[63].width())
        })
    });
}

criterion_group!(
    benches,
    bench_pagination_walk_100k,
    bench_responsive_chart_size,
    bench_resize_fanout
);
criterion_main!(benches);
