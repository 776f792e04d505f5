use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cyanea_motif::{
    detect_acyl_chains, enumerate_paths, BondOrder, Fingerprint, GraphBuilder, GraphContext, MotifEngine, RingSetType,
    RingType, RuleTables,
};

/// Straight-chain acid, carbons 0..n with 0 the carboxyl carbon.
fn fatty_acid(n: usize, deltas: &[usize]) -> GraphContext {
    let mut b = GraphBuilder::new();
    let c: Vec<_> = (0..n).map(|_| b.add_atom("C")).collect();
    for i in 0..n - 1 {
        let order = if deltas.contains(&(i + 1)) { BondOrder::Double } else { BondOrder::Single };
        b.add_bond(c[i], c[i + 1], order);
    }
    let oxo = b.add_atom("O");
    let oh = b.add_atom("O");
    b.add_bond(c[0], oxo, BondOrder::Double);
    b.add_bond(c[0], oh, BondOrder::Single);
    b.build().unwrap()
}

/// 5,7-dihydroxychromone
fn chromone() -> GraphContext {
    let mut b = GraphBuilder::new();
    let o1 = b.add_atom("O");
    let c2 = b.add_atom("C");
    let c3 = b.add_atom("C");
    let c4 = b.add_atom("C");
    let benzo: Vec<_> = (0..6).map(|_| b.add_atom("C")).collect();
    let oxo = b.add_atom("O");
    b.add_bond(o1, c2, BondOrder::Single);
    b.add_bond(c2, c3, BondOrder::Double);
    b.add_bond(c3, c4, BondOrder::Single);
    b.add_bond(c4, benzo[0], BondOrder::Single);
    for i in 0..6 {
        b.add_bond(benzo[i], benzo[(i + 1) % 6], BondOrder::Aromatic);
    }
    b.add_bond(benzo[5], o1, BondOrder::Single);
    b.add_bond(c4, oxo, BondOrder::Double);
    for &at in &[benzo[1], benzo[3]] {
        let o = b.add_atom("O");
        b.add_bond(at, o, BondOrder::Single);
    }
    let pyrone = b.add_ring(RingType::Pyrone, &[o1, c2, c3, c4, benzo[0], benzo[5]]);
    let benzene = b.add_ring(RingType::Benzene, &benzo);
    b.add_ringset(RingSetType::Chromone, &[pyrone, benzene]);
    b.build().unwrap()
}

fn molecules() -> Vec<GraphContext> {
    vec![
        fatty_acid(16, &[]),
        fatty_acid(18, &[9]),
        fatty_acid(18, &[9, 12]),
        fatty_acid(20, &[5, 8, 11, 14]),
        chromone(),
    ]
}

fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_tables");
    group.bench_function("build_or_get", |b| b.iter(|| black_box(RuleTables::get().entry_count())));
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let engine = MotifEngine::new();

    for (name, ctx) in [("linoleic", fatty_acid(18, &[9, 12])), ("chromone", chromone())] {
        let paths = enumerate_paths(&ctx, 2, 13);
        group.bench_function(format!("{name}_{}_paths", paths.len()), |b| {
            b.iter(|| {
                let mut fp = Fingerprint::new();
                for path in black_box(&paths) {
                    engine.evaluate(&ctx, path, &mut fp);
                }
                fp
            })
        });
    }

    group.finish();
}

fn bench_molecule(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint_molecule");
    let engine = MotifEngine::new();
    let mols = molecules();

    group.bench_function("enumerate_paths", |b| {
        b.iter(|| {
            for ctx in black_box(&mols) {
                let _ = enumerate_paths(ctx, 2, 13);
                let _ = detect_acyl_chains(ctx);
            }
        })
    });

    // 1k molecules, cycling through the set
    let mols_1k: Vec<_> = mols.iter().cloned().cycle().take(1000).collect();
    group.sample_size(10);
    group.bench_function("1k_mols", |b| b.iter(|| engine.fingerprint_molecules(black_box(&mols_1k))));

    group.finish();
}

criterion_group!(benches, bench_tables, bench_dispatch, bench_molecule);
criterion_main!(benches);
