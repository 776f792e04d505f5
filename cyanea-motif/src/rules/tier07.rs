//! Seven-atom motifs: pyrone halves of benzopyrones, phospholipid head
//! groups, dipeptides and terpenoid units.

use super::common::*;
use super::{first_of, when, RuleTable};
use crate::graph::{FunctionGroup as G, RingSetType as RS};
use crate::motif::Motif as M;

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(7);

    // 0: C4a, 1: C8a, 2: O1, 3: C2, 4: C3, 5: C4, 6: carbonyl oxygen
    t.add(
        "C:C-O-C=C-C=O",
        clauses![when(|p| p.in_ringset_of(2, RS::Chromone) && p.same_ring(0, 5), &[M::ChromonePyroneWalk]).then(
            clauses![
                first_of(vec![
                    when(
                        |p| p.any_branch(3, "C", |a| a.aromatic) && p.env(4).hydroxyl > 0,
                        &[M::Flavonol],
                    ),
                    when(|p| p.any_branch(3, "C", |a| a.aromatic), &[M::Flavone]),
                    when(|p| p.any_branch(4, "C", |a| a.aromatic), &[M::Isoflavone]),
                ]),
                when(|p| p.any_branch(0, "C", |a| a.env.hydroxyl > 0), &[M::FiveHydroxyChromone]),
            ],
        )],
    );

    // 0: C3, 1: C4, 2: C4a, 3: C8a, 4: O1, 5: C2, 6: carbonyl oxygen
    t.add(
        "C=C-C:C-O-C=O",
        clauses![when(|p| p.in_ringset_of(4, RS::Coumarin), &[M::CoumarinPyroneWalk]).then(clauses![first_of(
            vec![
                when(|p| p.any_branch(0, "C", |a| a.aromatic), &[M::ThreeArylCoumarin]),
                when(|p| p.any_branch(1, "C", |a| a.aromatic), &[M::Neoflavone]),
            ]
        )])],
    );

    // 0: glycerol carbon, 1: ester oxygen, 2: phosphorus, 3: oxygen, 4-5: ethylene, 6: nitrogen
    t.add(
        "C-O-P-O-C-C-N",
        clauses![first_of(vec![
            when(
                |p| p.group(6) == G::QuaternaryNitrogen && p.env(6).methyl >= 3,
                &[M::PhosphatidylcholineHead],
            ),
            when(|p| amine(p, 6) && acyclic(p), &[M::PhosphatidylethanolamineHead]),
        ])],
    );

    // Palindromic: three phosphates joined by anhydride oxygens.
    t.add(
        "O-P-O-P-O-P-O",
        clauses![when(
            |p| count(p, |p, i| p.group(i) == G::PhosphatePhosphorus) == 3,
            &[M::TriphosphateChain],
        )
        .then(clauses![when(
            |p| either_end(p, |p, i| p.env(i).carbon_single > 0),
            &[M::OrganoTriphosphate],
        )])],
    );

    // 0: N-terminal nitrogen, 1: alpha carbon, 2: amide carbon, 3: amide nitrogen,
    // 4: alpha carbon, 5: carbonyl carbon, 6: oxygen
    t.add(
        "N-C-C-N-C-C=O",
        clauses![first_of(vec![
            when(
                |p| p.group(2) == G::AmideCarbon && p.in_ring(3) && p.same_ring(1, 4),
                &[M::Diketopiperazine],
            ),
            when(
                |p| amine(p, 0) && p.group(2) == G::AmideCarbon && p.group(5) == G::CarboxylCarbon,
                &[M::Dipeptide],
            ),
            when(
                |p| p.group(2) == G::AmideCarbon && carbonyl_carbon(p, 5) && open_chain(p),
                &[M::PeptideChainSegment],
            ),
        ])],
    );

    // Palindromic: terminal oxygens on a five-carbon chain.
    t.add(
        "O-C-C-C-C-C-O",
        clauses![when(
            |p| acyclic(p) && both_ends(p, hydroxyl) && (2..5).all(|i| p.env(i).hydroxyl > 0),
            &[M::PentitolChain],
        )],
    );

    // Palindromic seven-carbon walk.
    t.add(
        "C-C-C-C-C-C-C",
        clauses![first_of(vec![
            when(|p| (0..7).all(|i| p.in_ringset_of(i, RS::Steroid)), &[M::SteroidCoreWalk]),
            when(
                |p| acyclic(p) && count(p, |p, i| p.env(i).methyl > 0) >= 2,
                &[M::IsoprenoidChainSegment],
            ),
        ])],
    );

    // 0: methyl end, 1: methylene, 2=3: first double bond, 4: methylene, 5=6: second double bond
    t.add(
        "C-C-C=C-C-C=C",
        clauses![when(
            |p| open_chain(p) && methyl(p, 0) && hydrogens(p, 1, 2) && hydrogens(p, 4, 2),
            &[M::OmegaThreeTerminus],
        )],
    );

    // 0: C1, 1=2: C2=C3, 3-4: methylenes, 5=6: C6=C7
    t.add(
        "C-C=C-C-C-C=C",
        clauses![when(
            |p| open_chain(p) && p.env(2).methyl > 0 && p.env(6).methyl > 0,
            &[M::GeranylUnit],
        )
        .then(clauses![first_of(vec![
            when(|p| p.env(0).hydroxyl > 0, &[M::Geraniol]),
            when(
                |p| p.any_branch(0, "O", |a| matches!(a.group, G::EtherOxygen | G::EsterOxygen)),
                &[M::GeranylEther],
            ),
        ])])],
    );

    t
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::fingerprint::Fingerprint;
    use crate::graph::GraphContext;
    use crate::motif::Motif;
    use crate::path::Path;
    use crate::testing;

    fn eval(ctx: &GraphContext, atoms: &[usize]) -> Fingerprint {
        let path = Path::canonical(ctx, atoms).unwrap();
        let mut fp = Fingerprint::new();
        MotifEngine::new().evaluate(ctx, &path, &mut fp);
        fp
    }

    #[test]
    fn chromone_pyrone_with_peri_hydroxyl() {
        let ctx = testing::chromone(&[5, 7]);
        // C4a C8a O1 C2 C3 C4 O
        let fp = eval(&ctx, &[4, 9, 0, 1, 2, 3, 10]);
        assert!(fp.get(Motif::ChromonePyroneWalk));
        assert!(fp.get(Motif::FiveHydroxyChromone));
        assert!(!fp.get(Motif::Flavone));
        assert!(!fp.get(Motif::Isoflavone));
    }

    #[test]
    fn geraniol_unit() {
        let ctx = testing::geraniol();
        let fp = eval(&ctx, &[0, 1, 2, 3, 4, 5, 6]);
        assert!(fp.get(Motif::GeranylUnit));
        assert!(fp.get(Motif::Geraniol));
        assert!(!fp.get(Motif::GeranylEther));
    }

    #[test]
    fn glycylglycine() {
        let ctx = testing::glycylglycine();
        // N CA C(=O) N CA C =O
        let fp = eval(&ctx, &[0, 1, 2, 4, 5, 6, 7]);
        assert!(fp.get(Motif::Dipeptide));
        assert!(!fp.get(Motif::PeptideChainSegment));
        assert!(!fp.get(Motif::Diketopiperazine));
    }
}
