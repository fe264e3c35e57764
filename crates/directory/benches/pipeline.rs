//! Benchmarks for the load, rank and filter pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use schoolfinder_directory::{filter, load, rank, LevelFilter, SectorFilter};
use schoolfinder_geo::ReferencePosition;

fn create_official_file(count: usize) -> String {
    let mut text = String::from(
        "rentree_scolaire;uai;secteur;ips;position;appellation_officielle;libelle_academie;code_departement;libelle_departement;code_commune;libelle_commune\n",
    );
    for i in 0..count {
        // Spread points over a 2x2 degree square around Lyon
        let lat = 45.0 + (i as f64 * 0.01) % 2.0;
        let lng = 4.0 + (i as f64 * 0.013) % 2.0;
        let (kind, level) = if i % 3 == 0 { ("privé sous contrat", "Lycée") } else { ("public", "Collège") };
        text.push_str(&format!(
            "2022-2023;{i:07}A;{kind};{ips};{lat},{lng};{level} n°{i};LYON;069;RHONE;69123;Lyon\n",
            ips = 80.0 + (i % 60) as f64,
        ));
    }
    text
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [100, 1000, 10000].iter() {
        let text = create_official_file(*size);
        group.bench_with_input(BenchmarkId::new("official", size), size, |b, _| {
            b.iter(|| load(black_box(&text)))
        });
    }

    group.finish();
}

fn bench_rank_and_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_and_filter");
    let reference = ReferencePosition::at(45.7640, 4.8357);

    for size in [100, 1000, 10000].iter() {
        let institutions = load(&create_official_file(*size)).expect("benchmark data loads");
        group.bench_with_input(BenchmarkId::new("college_private", size), size, |b, _| {
            b.iter(|| {
                let ranked = rank(black_box(&institutions), &reference);
                filter(&ranked, LevelFilter::College, SectorFilter::Private)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_rank_and_filter);
criterion_main!(benches);
