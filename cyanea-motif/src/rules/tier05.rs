//! Five-atom motifs: meta relationships, five-membered ring walks and
//! two-carbon spacers between functional groups.

use super::common::*;
use super::{always, first_of, when, RuleTable};
use crate::graph::{FunctionGroup as G, RingSetType as RS, RingType as R};
use crate::motif::Motif as M;

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(5);

    // Palindromic: oxygens meta to each other, position 2 between them.
    t.add(
        "O-C:C:C-O",
        clauses![first_of(vec![
            when(|p| both_ends(p, hydroxyl) && p.env(2).hydroxyl > 0, &[M::Pyrogallol]),
            when(
                |p| both_ends(p, hydroxyl) && p.ring(1, R::Benzene).map_or(false, |r| r.env.hydroxyl >= 3),
                &[M::Phloroglucinol],
            ),
            when(|p| both_ends(p, hydroxyl), &[M::Resorcinol]),
            when(
                |p| both_ends(p, |p, i| p.group(i) == G::EtherOxygen && p.env(i).methyl > 0),
                &[M::MetaDimethoxyArene],
            ),
            when(|p| either_end(p, hydroxyl), &[M::MetaOxygenatedPhenol]),
        ])],
    );

    // 0-1: aromatic ring bond, 2-3: ethylene spacer, 4: nitrogen
    t.add(
        "C:C-C-C-N",
        clauses![first_of(vec![
            when(|p| p.env(3).carbonyl > 0 && amine(p, 4), &[M::AromaticAminoAcid]),
            when(|p| p.in_ringset_of(1, RS::Indole) && amine(p, 4), &[M::Tryptamine]),
            when(
                |p| amine(p, 4) && p.ring(1, R::Benzene).map_or(false, |r| r.env.hydroxyl >= 2),
                &[M::Catecholamine],
            ),
            when(|p| amine(p, 4) && !p.in_ring(2) && !p.in_ring(3), &[M::Phenethylamine]).then(clauses![
                when(|p| p.env(4).methyl > 0, &[M::NMethylPhenethylamine]),
            ]),
        ])],
    );

    // 0-1: aromatic ring bond, 2: benzylic carbon, 3: carbonyl carbon, 4: oxygen
    t.add(
        "C:C-C-C=O",
        clauses![first_of(vec![
            when(|p| p.group(3) == G::CarboxylCarbon && !p.in_ring(2), &[M::ArylAceticAcid]),
            when(|p| p.group(3) == G::KetoneCarbon && !p.in_ring(2) && !p.in_ring(3), &[M::BenzylKetone]),
            when(|p| p.in_ring(2) && p.in_ring(3) && p.same_ring(1, 3), &[M::Indanone]),
        ])],
    );

    // Palindromic five-carbon walk.
    t.add(
        "C-C-C-C-C",
        clauses![first_of(vec![
            when(|p| p.all_in_one_ring() && p.in_ring_of(0, R::Cyclopentane), &[M::CyclopentaneRing]).then(
                clauses![when(
                    |p| p.ring(0, R::Cyclopentane).map_or(false, |r| r.env.ketone > 0),
                    &[M::Cyclopentanone],
                )],
            ),
            when(
                |p| acyclic(p) && (1..4).all(|i| hydrogens(p, i, 2)),
                &[M::PolymethyleneChain],
            ),
            when(
                |p| acyclic(p) && p.env(2).methyl > 0 && either_end(p, |p, i| p.env(i).carbon_double > 0),
                &[M::IsoprenoidBranch],
            ),
        ])],
    );

    // 0-3: carbons, 4: oxygen
    t.add(
        "C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| p.all_in_one_ring() && p.in_ring_of(4, R::Tetrahydrofuran), &[]).then(clauses![
                first_of(vec![
                    when(
                        |p| p.ring(4, R::Tetrahydrofuran).map_or(false, |r| r.env.nitrogen > 0),
                        &[M::NucleosideSugar],
                    ),
                    when(
                        |p| p.ring(4, R::Tetrahydrofuran).map_or(false, |r| r.env.hydroxyl >= 2),
                        &[M::Furanose],
                    ),
                    always(&[M::TetrahydrofuranRing]),
                ]),
            ]),
            when(|p| p.group(0) == G::CarboxylCarbon && hydroxyl(p, 4) && acyclic(p), &[M::GammaHydroxyAcid]),
            when(|p| p.in_ring_of(4, R::Butyrolactone) && p.all_in_one_ring(), &[M::ButyrolactoneRing]),
        ])],
    );

    // 0-3: carbons, 4: nitrogen
    t.add(
        "C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| p.all_in_one_ring() && p.in_ring_of(4, R::Pyrrolidine), &[]).then(clauses![when(
                |p| p.ring(4, R::Pyrrolidine).map_or(false, |r| r.env.carbonyl > 0),
                &[M::ProlineRing],
            )]),
            when(
                |p| acyclic(p) && amine(p, 4) && p.any_branch(0, "N", |a| a.group.is_amine()),
                &[M::Putrescine],
            ),
        ])],
    );

    // 0: carbon, 1: carbon, 2: amide nitrogen, 3: acyl carbon, 4: oxygen
    t.add(
        "C-C-N-C=O",
        clauses![first_of(vec![
            when(|p| p.env(0).hydroxyl > 0 && !p.in_ring(1), &[M::NAcylEthanolamine]),
            when(|p| p.group(0) == G::CarboxylCarbon, &[M::NAcylAminoAcid]),
            when(|p| p.any_branch(0, "C", |a| a.aromatic) && !p.in_ring(1), &[M::NAcylPhenethylamine]),
        ])],
    );

    // 0: carbon, 1: carbon, 2: ester oxygen, 3: acyl carbon, 4: oxygen
    t.add(
        "C-C-O-C=O",
        clauses![first_of(vec![
            when(|p| p.any_branch(0, "N", |a| a.group == G::QuaternaryNitrogen), &[M::CholineEster]),
            when(
                |p| acyclic(p) && p.any_branch(0, "O", |a| a.group == G::EsterOxygen),
                &[M::DiacylGlycerolLinkage],
            ),
            when(|p| p.any_branch(0, "C", |a| a.aromatic) && !p.in_ring(1), &[M::PhenethylEster]),
        ])],
    );

    // 0-1: aromatic ring bond, 2: ring oxygen, 3: lactone carbon, 4: oxygen
    t.add(
        "C:C-O-C=O",
        clauses![first_of(vec![
            when(|p| p.in_ringset_of(3, RS::Coumarin), &[M::CoumarinLactone]),
            when(|p| p.in_ringset_of(3, RS::Isocoumarin), &[M::IsocoumarinLactone]),
            when(|p| !p.in_ring(2), &[M::PhenylEster]),
        ])],
    );

    // 0: carbon, 1=2: alkene, 3: carbonyl carbon, 4: oxygen
    t.add(
        "C-C=C-C=O",
        clauses![first_of(vec![
            when(|p| p.aromatic(0) && p.any_branch(3, "C", |a| a.aromatic), &[M::Chalcone]),
            when(|p| p.aromatic(0) && p.group(3) == G::CarboxylCarbon, &[M::CinnamicAcid]),
            when(|p| p.aromatic(0) && p.group(3) == G::EsterCarbon, &[M::CinnamateEster]),
            when(|p| p.aromatic(0) && p.group(3) == G::AmideCarbon, &[M::Cinnamamide]),
            when(|p| p.aromatic(0) && p.group(3) == G::AldehydeCarbon, &[M::Cinnamaldehyde]),
            when(|p| methyl(p, 0) && open_chain(p), &[M::Crotonyl]),
        ])],
    );

    // Pyrrole-type ring walk ending on nitrogen.
    t.add(
        "C:C:C:C:N",
        clauses![first_of(vec![
            when(|p| p.in_ringset_of(4, RS::Indole), &[]),
            when(|p| p.all_in_one_ring() && p.in_ring_of(4, R::Pyrrole), &[M::PyrroleRing]).then(clauses![
                when(|p| p.ring(4, R::Pyrrole).map_or(false, |r| r.env.carbonyl > 0), &[M::AcylPyrrole]),
            ]),
            when(|p| p.all_in_one_ring() && p.in_ring_of(4, R::Pyridine), &[M::PyridineRingWalk]).then(
                clauses![when(
                    |p| p.ring(4, R::Pyridine).map_or(false, |r| r.env.carbonyl > 0),
                    &[M::NicotinoylLike],
                )],
            ),
        ])],
    );

    t.add(
        "C:C:C:C:O",
        clauses![when(|p| p.all_in_one_ring() && p.in_ring_of(4, R::Furan), &[M::FuranRing]).then(
            clauses![
                when(|p| p.ring(4, R::Furan).map_or(false, |r| r.env.carbonyl > 0), &[M::Furfuryl]),
                when(|p| p.in_ringset_of(4, RS::Benzofuran), &[M::BenzofuranRingWalk]),
            ],
        )],
    );

    t.add(
        "C:C:C:C:S",
        clauses![when(|p| p.all_in_one_ring() && p.in_ring_of(4, R::Thiophene), &[M::ThiopheneRing])],
    );

    // Imidazole-type walk; also the pyrimidine half of purines.
    t.add(
        "C:C:N:C:N",
        clauses![first_of(vec![
            when(|p| p.in_ringset_of(2, RS::Purine), &[M::Purine]),
            when(|p| p.all_in_one_ring() && p.in_ring_of(2, R::Imidazole), &[M::ImidazoleRing]).then(
                clauses![when(
                    |p| p.ring(2, R::Imidazole).map_or(false, |r| r.env.carbon > 0),
                    &[M::HistidineSideChain],
                )],
            ),
            when(|p| p.in_ring_of(2, R::Pyrimidine), &[M::PyrimidineRingWalk]),
        ])],
    );

    // Palindromic: two double bonds separated by two sp3 carbons.
    t.add(
        "C=C-C-C=C",
        clauses![when(|p| open_chain(p), &[M::OneFiveDiene])],
    );

    // 0: carbon, 1: carbon, 2=3: alkene, 4: carbon
    t.add(
        "C-C-C=C-C",
        clauses![when(
            |p| open_chain(p) && p.env(3).methyl > 0 && p.env(0).carbon_double > 0,
            &[M::TerpenoidHeadToTail],
        )],
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
    fn chromone_a_ring_is_resorcinol() {
        // 5,7-dihydroxy: hydroxyl oxygens 11 (on C5) and 12 (on C7)
        let ctx = testing::chromone(&[5, 7]);
        let c5 = testing::chromone_atom(5);
        let c6 = testing::chromone_atom(6);
        let c7 = testing::chromone_atom(7);
        let fp = eval(&ctx, &[11, c5, c6, c7, 12]);
        assert!(fp.get(Motif::Resorcinol));
        assert!(!fp.get(Motif::Pyrogallol));
    }

    #[test]
    fn phenethylamine_family() {
        let ctx = testing::phenethylamine();
        // ring 0..5, CH2 6 on atom 0, CH2 7, N 8
        let fp = eval(&ctx, &[1, 0, 6, 7, 8]);
        assert!(fp.get(Motif::Phenethylamine));
        assert!(!fp.get(Motif::Catecholamine));
        assert!(!fp.get(Motif::NMethylPhenethylamine));
    }
}
