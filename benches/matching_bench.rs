use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use refmatch::analysis::analyze_paper;
use refmatch::common::Reference;
use refmatch::matching::{journals_match, match_references, volumes_match};
use refmatch::normalize::{normalize_arxiv, normalize_journal};

const JOURNALS: [&str; 8] = [
    "Phys. Rev. D",
    "J. High Energy Phys.",
    "Nucl. Instrum. Meth. Phys. Res. A",
    "Proc. Natl. Acad. Sci. U.S.A.",
    "Class. Quantum Grav.",
    "Europhysics Letters",
    "PoS LATTICE2013",
    "Mon. Not. Roy. Astron. Soc.",
];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Elements(JOURNALS.len() as u64));

    group.bench_function("normalize_journal", |b| {
        b.iter(|| {
            for title in &JOURNALS {
                black_box(normalize_journal(title));
            }
        })
    });

    let ids = ["1234.5678v2", "hep-th/9901001v3", "0704.1500", "  CS.DM/9910013V1 "];
    group.bench_function("normalize_arxiv", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(normalize_arxiv(id));
            }
        })
    });

    group.finish();
}

fn bench_fuzzy_predicates(c: &mut Criterion) {
    let volumes = [("0904", "04"), ("904-905", "905"), ("012", "12"), ("LAT2006", "2006"), ("95", "96")];
    let journals = [
        ("physrev", "physrevd"),
        ("nuclphys", "nuclphysbprocsuppl"),
        ("physrevd", "physrevc"),
        ("jhep", "jcap"),
    ];

    let mut group = c.benchmark_group("fuzzy_match");

    group.bench_function("volumes_match", |b| {
        b.iter(|| {
            for (a, v) in &volumes {
                black_box(volumes_match(a, v));
            }
        })
    });

    group.bench_function("journals_match", |b| {
        b.iter(|| {
            for (a, j) in &journals {
                black_box(journals_match(a, j));
            }
        })
    });

    group.finish();
}

/// A paper with `n` references, a third of which the extractor found by journal only
fn synthetic_paper(n: usize) -> (Vec<Reference>, Vec<Reference>) {
    let ground_truth = (0..n)
        .map(|i| {
            let journal = JOURNALS[i % JOURNALS.len()];
            let arxiv = if i % 3 == 0 { format!("1{:03}.{:05}", i % 1000, i) } else { String::new() };
            Reference::new(&arxiv, "", journal, &format!("{}", 10 + i % 90))
        })
        .collect();
    let extracted = (0..n)
        .filter(|i| i % 3 != 2)
        .map(|i| {
            let journal = JOURNALS[i % JOURNALS.len()];
            Reference::new("", "", journal, &format!("{}", 10 + i % 90))
        })
        .collect();
    (ground_truth, extracted)
}

fn bench_paper(c: &mut Criterion) {
    let (ground_truth, extracted) = synthetic_paper(200);

    let mut group = c.benchmark_group("paper");
    group.throughput(Throughput::Elements(ground_truth.len() as u64));

    group.bench_function("match_references", |b| {
        b.iter(|| black_box(match_references(&ground_truth, &extracted)))
    });

    group.bench_function("analyze_paper", |b| {
        b.iter(|| black_box(analyze_paper("bench", &ground_truth, extracted.clone())))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_fuzzy_predicates, bench_paper);
criterion_main!(benches);
