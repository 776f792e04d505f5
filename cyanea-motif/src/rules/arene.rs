//! Benzene substitution patterns: ortho, meta and para pairs of substituent classes,
//! two benzene rings joined through a short linker, and phenyl, phenoxy or benzoyl groups
//! tethered to a functional group by a straight chain.

use super::common::*;
use super::{first_of, when, RuleTable};
use crate::graph::RingType as R;
use crate::motif::Motif as M;

pub(super) fn extend(t: &mut RuleTable) {
    match t.path_len() {
        4 => four(t),
        5 => five(t),
        6 => six(t),
        7 => seven(t),
        8 => eight(t),
        9 => nine(t),
        10 => ten(t),
        11 => eleven(t),
        12 => twelve(t),
        13 => thirteen(t),
        _ => {}
    }
}

fn four(t: &mut RuleTable) {
    t.extend(
        "C-C:C-C",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| ends_pair(p, methyl, hydroxymethyl), &[M::OrthoMethylHydroxymethylArene]),
                when(|p| ends_pair(p, methyl, trifluoromethyl), &[M::OrthoMethylTrifluoromethylArene]),
                when(|p| ends_pair(p, methyl, carboxyl_carbon), &[M::OrthoMethylCarboxyArene]),
                when(|p| ends_pair(p, methyl, ester_carbon), &[M::OrthoMethylAlkoxycarbonylArene]),
                when(|p| ends_pair(p, methyl, amide_carbon), &[M::OrthoMethylCarbamoylArene]),
                when(|p| ends_pair(p, methyl, aldehyde_carbon), &[M::OrthoMethylFormylArene]),
                when(|p| ends_pair(p, methyl, ketone_carbon), &[M::OrthoMethylAcylArene]),
                when(|p| ends_pair(p, methyl, cyano), &[M::OrthoMethylCyanoArene]),
                when(|p| ends_pair(p, methyl, vinyl), &[M::OrthoMethylVinylArene]),
                when(|p| ends_pair(p, methyl, alkyl), &[M::OrthoMethylAlkylArene]),
                when(|p| both_ends(p, hydroxymethyl), &[M::OrthoDihydroxymethylArene]),
                when(|p| ends_pair(p, hydroxymethyl, trifluoromethyl), &[M::OrthoHydroxymethylTrifluoromethylArene]),
                when(|p| ends_pair(p, hydroxymethyl, carboxyl_carbon), &[M::OrthoHydroxymethylCarboxyArene]),
                when(|p| ends_pair(p, hydroxymethyl, ester_carbon), &[M::OrthoHydroxymethylAlkoxycarbonylArene]),
                when(|p| ends_pair(p, hydroxymethyl, amide_carbon), &[M::OrthoHydroxymethylCarbamoylArene]),
                when(|p| ends_pair(p, hydroxymethyl, aldehyde_carbon), &[M::OrthoHydroxymethylFormylArene]),
                when(|p| ends_pair(p, hydroxymethyl, ketone_carbon), &[M::OrthoHydroxymethylAcylArene]),
                when(|p| ends_pair(p, hydroxymethyl, cyano), &[M::OrthoHydroxymethylCyanoArene]),
                when(|p| ends_pair(p, hydroxymethyl, vinyl), &[M::OrthoHydroxymethylVinylArene]),
                when(|p| ends_pair(p, hydroxymethyl, alkyl), &[M::OrthoHydroxymethylAlkylArene]),
                when(|p| both_ends(p, trifluoromethyl), &[M::OrthoDitrifluoromethylArene]),
                when(|p| ends_pair(p, trifluoromethyl, carboxyl_carbon), &[M::OrthoTrifluoromethylCarboxyArene]),
                when(|p| ends_pair(p, trifluoromethyl, ester_carbon), &[M::OrthoTrifluoromethylAlkoxycarbonylArene]),
                when(|p| ends_pair(p, trifluoromethyl, amide_carbon), &[M::OrthoTrifluoromethylCarbamoylArene]),
                when(|p| ends_pair(p, trifluoromethyl, aldehyde_carbon), &[M::OrthoTrifluoromethylFormylArene]),
                when(|p| ends_pair(p, trifluoromethyl, ketone_carbon), &[M::OrthoTrifluoromethylAcylArene]),
                when(|p| ends_pair(p, trifluoromethyl, cyano), &[M::OrthoTrifluoromethylCyanoArene]),
                when(|p| ends_pair(p, trifluoromethyl, vinyl), &[M::OrthoTrifluoromethylVinylArene]),
                when(|p| ends_pair(p, trifluoromethyl, alkyl), &[M::OrthoTrifluoromethylAlkylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, amide_carbon), &[M::OrthoCarboxyCarbamoylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, aldehyde_carbon), &[M::OrthoCarboxyFormylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, ketone_carbon), &[M::OrthoCarboxyAcylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, cyano), &[M::OrthoCarboxyCyanoArene]),
                when(|p| ends_pair(p, carboxyl_carbon, vinyl), &[M::OrthoCarboxyVinylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, alkyl), &[M::OrthoCarboxyAlkylArene]),
                when(|p| ends_pair(p, ester_carbon, amide_carbon), &[M::OrthoAlkoxycarbonylCarbamoylArene]),
                when(|p| ends_pair(p, ester_carbon, aldehyde_carbon), &[M::OrthoAlkoxycarbonylFormylArene]),
                when(|p| ends_pair(p, ester_carbon, ketone_carbon), &[M::OrthoAlkoxycarbonylAcylArene]),
                when(|p| ends_pair(p, ester_carbon, cyano), &[M::OrthoAlkoxycarbonylCyanoArene]),
                when(|p| ends_pair(p, ester_carbon, vinyl), &[M::OrthoAlkoxycarbonylVinylArene]),
                when(|p| ends_pair(p, ester_carbon, alkyl), &[M::OrthoAlkoxycarbonylAlkylArene]),
                when(|p| both_ends(p, amide_carbon), &[M::OrthoDicarbamoylArene]),
                when(|p| ends_pair(p, amide_carbon, aldehyde_carbon), &[M::OrthoCarbamoylFormylArene]),
                when(|p| ends_pair(p, amide_carbon, ketone_carbon), &[M::OrthoCarbamoylAcylArene]),
                when(|p| ends_pair(p, amide_carbon, cyano), &[M::OrthoCarbamoylCyanoArene]),
                when(|p| ends_pair(p, amide_carbon, vinyl), &[M::OrthoCarbamoylVinylArene]),
                when(|p| ends_pair(p, amide_carbon, alkyl), &[M::OrthoCarbamoylAlkylArene]),
                when(|p| both_ends(p, aldehyde_carbon), &[M::OrthoDiformylArene]),
                when(|p| ends_pair(p, aldehyde_carbon, ketone_carbon), &[M::OrthoFormylAcylArene]),
                when(|p| ends_pair(p, aldehyde_carbon, cyano), &[M::OrthoFormylCyanoArene]),
                when(|p| ends_pair(p, aldehyde_carbon, vinyl), &[M::OrthoFormylVinylArene]),
                when(|p| ends_pair(p, aldehyde_carbon, alkyl), &[M::OrthoFormylAlkylArene]),
                when(|p| both_ends(p, ketone_carbon), &[M::OrthoDiacylArene]),
                when(|p| ends_pair(p, ketone_carbon, cyano), &[M::OrthoAcylCyanoArene]),
                when(|p| ends_pair(p, ketone_carbon, vinyl), &[M::OrthoAcylVinylArene]),
                when(|p| ends_pair(p, ketone_carbon, alkyl), &[M::OrthoAcylAlkylArene]),
                when(|p| both_ends(p, cyano), &[M::OrthoDicyanoArene]),
                when(|p| ends_pair(p, cyano, vinyl), &[M::OrthoCyanoVinylArene]),
                when(|p| ends_pair(p, cyano, alkyl), &[M::OrthoCyanoAlkylArene]),
                when(|p| both_ends(p, vinyl), &[M::OrthoDivinylArene]),
                when(|p| ends_pair(p, vinyl, alkyl), &[M::OrthoVinylAlkylArene]),
                when(|p| both_ends(p, alkyl), &[M::OrthoDialkylArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0) && hydroxyl(p, 3), &[M::OrthoMethylHydroxyArene]),
                when(|p| methyl(p, 0) && methoxy(p, 3), &[M::OrthoMethylMethoxyArene]),
                when(|p| methyl(p, 0) && ether_oxygen(p, 3), &[M::OrthoMethylAlkoxyArene]),
                when(|p| methyl(p, 0) && ester_oxygen(p, 3), &[M::OrthoMethylAcyloxyArene]),
                when(|p| hydroxymethyl(p, 0) && hydroxyl(p, 3), &[M::OrthoHydroxymethylHydroxyArene]),
                when(|p| hydroxymethyl(p, 0) && methoxy(p, 3), &[M::OrthoHydroxymethylMethoxyArene]),
                when(|p| hydroxymethyl(p, 0) && ether_oxygen(p, 3), &[M::OrthoHydroxymethylAlkoxyArene]),
                when(|p| hydroxymethyl(p, 0) && ester_oxygen(p, 3), &[M::OrthoHydroxymethylAcyloxyArene]),
                when(|p| trifluoromethyl(p, 0) && hydroxyl(p, 3), &[M::OrthoTrifluoromethylHydroxyArene]),
                when(|p| trifluoromethyl(p, 0) && methoxy(p, 3), &[M::OrthoTrifluoromethylMethoxyArene]),
                when(|p| trifluoromethyl(p, 0) && ether_oxygen(p, 3), &[M::OrthoTrifluoromethylAlkoxyArene]),
                when(|p| trifluoromethyl(p, 0) && ester_oxygen(p, 3), &[M::OrthoTrifluoromethylAcyloxyArene]),
                when(|p| carboxyl_carbon(p, 0) && methoxy(p, 3), &[M::OrthoCarboxyMethoxyArene]),
                when(|p| carboxyl_carbon(p, 0) && ether_oxygen(p, 3), &[M::OrthoCarboxyAlkoxyArene]),
                when(|p| carboxyl_carbon(p, 0) && ester_oxygen(p, 3), &[M::OrthoCarboxyAcyloxyArene]),
                when(|p| ester_carbon(p, 0) && methoxy(p, 3), &[M::OrthoAlkoxycarbonylMethoxyArene]),
                when(|p| ester_carbon(p, 0) && ether_oxygen(p, 3), &[M::OrthoAlkoxycarbonylAlkoxyArene]),
                when(|p| ester_carbon(p, 0) && ester_oxygen(p, 3), &[M::OrthoAlkoxycarbonylAcyloxyArene]),
                when(|p| amide_carbon(p, 0) && hydroxyl(p, 3), &[M::OrthoCarbamoylHydroxyArene]),
                when(|p| amide_carbon(p, 0) && methoxy(p, 3), &[M::OrthoCarbamoylMethoxyArene]),
                when(|p| amide_carbon(p, 0) && ether_oxygen(p, 3), &[M::OrthoCarbamoylAlkoxyArene]),
                when(|p| amide_carbon(p, 0) && ester_oxygen(p, 3), &[M::OrthoCarbamoylAcyloxyArene]),
                when(|p| aldehyde_carbon(p, 0) && methoxy(p, 3), &[M::OrthoFormylMethoxyArene]),
                when(|p| aldehyde_carbon(p, 0) && ether_oxygen(p, 3), &[M::OrthoFormylAlkoxyArene]),
                when(|p| aldehyde_carbon(p, 0) && ester_oxygen(p, 3), &[M::OrthoFormylAcyloxyArene]),
                when(|p| ketone_carbon(p, 0) && methoxy(p, 3), &[M::OrthoAcylMethoxyArene]),
                when(|p| ketone_carbon(p, 0) && ether_oxygen(p, 3), &[M::OrthoAcylAlkoxyArene]),
                when(|p| ketone_carbon(p, 0) && ester_oxygen(p, 3), &[M::OrthoAcylAcyloxyArene]),
                when(|p| cyano(p, 0) && hydroxyl(p, 3), &[M::OrthoCyanoHydroxyArene]),
                when(|p| cyano(p, 0) && methoxy(p, 3), &[M::OrthoCyanoMethoxyArene]),
                when(|p| cyano(p, 0) && ether_oxygen(p, 3), &[M::OrthoCyanoAlkoxyArene]),
                when(|p| cyano(p, 0) && ester_oxygen(p, 3), &[M::OrthoCyanoAcyloxyArene]),
                when(|p| vinyl(p, 0) && hydroxyl(p, 3), &[M::OrthoVinylHydroxyArene]),
                when(|p| vinyl(p, 0) && methoxy(p, 3), &[M::OrthoVinylMethoxyArene]),
                when(|p| vinyl(p, 0) && ether_oxygen(p, 3), &[M::OrthoVinylAlkoxyArene]),
                when(|p| vinyl(p, 0) && ester_oxygen(p, 3), &[M::OrthoVinylAcyloxyArene]),
                when(|p| alkyl(p, 0) && hydroxyl(p, 3), &[M::OrthoAlkylHydroxyArene]),
                when(|p| alkyl(p, 0) && methoxy(p, 3), &[M::OrthoAlkylMethoxyArene]),
                when(|p| alkyl(p, 0) && ether_oxygen(p, 3), &[M::OrthoAlkylAlkoxyArene]),
                when(|p| alkyl(p, 0) && ester_oxygen(p, 3), &[M::OrthoAlkylAcyloxyArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0) && primary_amine(p, 3), &[M::OrthoMethylAminoArene]),
                when(|p| methyl(p, 0) && substituted_amine(p, 3), &[M::OrthoMethylAlkylaminoArene]),
                when(|p| methyl(p, 0) && amide_nitrogen(p, 3), &[M::OrthoMethylAcylaminoArene]),
                when(|p| methyl(p, 0) && nitro(p, 3), &[M::OrthoMethylNitroArene]),
                when(|p| hydroxymethyl(p, 0) && primary_amine(p, 3), &[M::OrthoHydroxymethylAminoArene]),
                when(|p| hydroxymethyl(p, 0) && substituted_amine(p, 3), &[M::OrthoHydroxymethylAlkylaminoArene]),
                when(|p| hydroxymethyl(p, 0) && amide_nitrogen(p, 3), &[M::OrthoHydroxymethylAcylaminoArene]),
                when(|p| hydroxymethyl(p, 0) && nitro(p, 3), &[M::OrthoHydroxymethylNitroArene]),
                when(|p| trifluoromethyl(p, 0) && primary_amine(p, 3), &[M::OrthoTrifluoromethylAminoArene]),
                when(|p| trifluoromethyl(p, 0) && substituted_amine(p, 3), &[M::OrthoTrifluoromethylAlkylaminoArene]),
                when(|p| trifluoromethyl(p, 0) && amide_nitrogen(p, 3), &[M::OrthoTrifluoromethylAcylaminoArene]),
                when(|p| trifluoromethyl(p, 0) && nitro(p, 3), &[M::OrthoTrifluoromethylNitroArene]),
                when(|p| carboxyl_carbon(p, 0) && substituted_amine(p, 3), &[M::OrthoCarboxyAlkylaminoArene]),
                when(|p| carboxyl_carbon(p, 0) && amide_nitrogen(p, 3), &[M::OrthoCarboxyAcylaminoArene]),
                when(|p| carboxyl_carbon(p, 0) && nitro(p, 3), &[M::OrthoCarboxyNitroArene]),
                when(|p| ester_carbon(p, 0) && substituted_amine(p, 3), &[M::OrthoAlkoxycarbonylAlkylaminoArene]),
                when(|p| ester_carbon(p, 0) && amide_nitrogen(p, 3), &[M::OrthoAlkoxycarbonylAcylaminoArene]),
                when(|p| ester_carbon(p, 0) && nitro(p, 3), &[M::OrthoAlkoxycarbonylNitroArene]),
                when(|p| amide_carbon(p, 0) && primary_amine(p, 3), &[M::OrthoCarbamoylAminoArene]),
                when(|p| amide_carbon(p, 0) && substituted_amine(p, 3), &[M::OrthoCarbamoylAlkylaminoArene]),
                when(|p| amide_carbon(p, 0) && amide_nitrogen(p, 3), &[M::OrthoCarbamoylAcylaminoArene]),
                when(|p| amide_carbon(p, 0) && nitro(p, 3), &[M::OrthoCarbamoylNitroArene]),
                when(|p| aldehyde_carbon(p, 0) && substituted_amine(p, 3), &[M::OrthoFormylAlkylaminoArene]),
                when(|p| aldehyde_carbon(p, 0) && amide_nitrogen(p, 3), &[M::OrthoFormylAcylaminoArene]),
                when(|p| aldehyde_carbon(p, 0) && nitro(p, 3), &[M::OrthoFormylNitroArene]),
                when(|p| ketone_carbon(p, 0) && substituted_amine(p, 3), &[M::OrthoAcylAlkylaminoArene]),
                when(|p| ketone_carbon(p, 0) && amide_nitrogen(p, 3), &[M::OrthoAcylAcylaminoArene]),
                when(|p| ketone_carbon(p, 0) && nitro(p, 3), &[M::OrthoAcylNitroArene]),
                when(|p| cyano(p, 0) && primary_amine(p, 3), &[M::OrthoCyanoAminoArene]),
                when(|p| cyano(p, 0) && substituted_amine(p, 3), &[M::OrthoCyanoAlkylaminoArene]),
                when(|p| cyano(p, 0) && amide_nitrogen(p, 3), &[M::OrthoCyanoAcylaminoArene]),
                when(|p| cyano(p, 0) && nitro(p, 3), &[M::OrthoCyanoNitroArene]),
                when(|p| vinyl(p, 0) && primary_amine(p, 3), &[M::OrthoVinylAminoArene]),
                when(|p| vinyl(p, 0) && substituted_amine(p, 3), &[M::OrthoVinylAlkylaminoArene]),
                when(|p| vinyl(p, 0) && amide_nitrogen(p, 3), &[M::OrthoVinylAcylaminoArene]),
                when(|p| vinyl(p, 0) && nitro(p, 3), &[M::OrthoVinylNitroArene]),
                when(|p| alkyl(p, 0) && primary_amine(p, 3), &[M::OrthoAlkylAminoArene]),
                when(|p| alkyl(p, 0) && substituted_amine(p, 3), &[M::OrthoAlkylAlkylaminoArene]),
                when(|p| alkyl(p, 0) && amide_nitrogen(p, 3), &[M::OrthoAlkylAcylaminoArene]),
                when(|p| alkyl(p, 0) && nitro(p, 3), &[M::OrthoAlkylNitroArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0) && thiol(p, 3), &[M::OrthoMethylMercaptoArene]),
                when(|p| methyl(p, 0) && thioether(p, 3), &[M::OrthoMethylAlkylthioArene]),
                when(|p| methyl(p, 0) && sulfonyl(p, 3), &[M::OrthoMethylSulfonylArene]),
                when(|p| hydroxymethyl(p, 0) && thiol(p, 3), &[M::OrthoHydroxymethylMercaptoArene]),
                when(|p| hydroxymethyl(p, 0) && thioether(p, 3), &[M::OrthoHydroxymethylAlkylthioArene]),
                when(|p| hydroxymethyl(p, 0) && sulfonyl(p, 3), &[M::OrthoHydroxymethylSulfonylArene]),
                when(|p| trifluoromethyl(p, 0) && thiol(p, 3), &[M::OrthoTrifluoromethylMercaptoArene]),
                when(|p| trifluoromethyl(p, 0) && thioether(p, 3), &[M::OrthoTrifluoromethylAlkylthioArene]),
                when(|p| trifluoromethyl(p, 0) && sulfonyl(p, 3), &[M::OrthoTrifluoromethylSulfonylArene]),
                when(|p| carboxyl_carbon(p, 0) && thiol(p, 3), &[M::OrthoCarboxyMercaptoArene]),
                when(|p| carboxyl_carbon(p, 0) && thioether(p, 3), &[M::OrthoCarboxyAlkylthioArene]),
                when(|p| carboxyl_carbon(p, 0) && sulfonyl(p, 3), &[M::OrthoCarboxySulfonylArene]),
                when(|p| ester_carbon(p, 0) && thiol(p, 3), &[M::OrthoAlkoxycarbonylMercaptoArene]),
                when(|p| ester_carbon(p, 0) && thioether(p, 3), &[M::OrthoAlkoxycarbonylAlkylthioArene]),
                when(|p| ester_carbon(p, 0) && sulfonyl(p, 3), &[M::OrthoAlkoxycarbonylSulfonylArene]),
                when(|p| amide_carbon(p, 0) && thiol(p, 3), &[M::OrthoCarbamoylMercaptoArene]),
                when(|p| amide_carbon(p, 0) && thioether(p, 3), &[M::OrthoCarbamoylAlkylthioArene]),
                when(|p| amide_carbon(p, 0) && sulfonyl(p, 3), &[M::OrthoCarbamoylSulfonylArene]),
                when(|p| aldehyde_carbon(p, 0) && thiol(p, 3), &[M::OrthoFormylMercaptoArene]),
                when(|p| aldehyde_carbon(p, 0) && thioether(p, 3), &[M::OrthoFormylAlkylthioArene]),
                when(|p| aldehyde_carbon(p, 0) && sulfonyl(p, 3), &[M::OrthoFormylSulfonylArene]),
                when(|p| ketone_carbon(p, 0) && thiol(p, 3), &[M::OrthoAcylMercaptoArene]),
                when(|p| ketone_carbon(p, 0) && thioether(p, 3), &[M::OrthoAcylAlkylthioArene]),
                when(|p| ketone_carbon(p, 0) && sulfonyl(p, 3), &[M::OrthoAcylSulfonylArene]),
                when(|p| cyano(p, 0) && thiol(p, 3), &[M::OrthoCyanoMercaptoArene]),
                when(|p| cyano(p, 0) && thioether(p, 3), &[M::OrthoCyanoAlkylthioArene]),
                when(|p| cyano(p, 0) && sulfonyl(p, 3), &[M::OrthoCyanoSulfonylArene]),
                when(|p| vinyl(p, 0) && thiol(p, 3), &[M::OrthoVinylMercaptoArene]),
                when(|p| vinyl(p, 0) && thioether(p, 3), &[M::OrthoVinylAlkylthioArene]),
                when(|p| vinyl(p, 0) && sulfonyl(p, 3), &[M::OrthoVinylSulfonylArene]),
                when(|p| alkyl(p, 0) && thiol(p, 3), &[M::OrthoAlkylMercaptoArene]),
                when(|p| alkyl(p, 0) && thioether(p, 3), &[M::OrthoAlkylAlkylthioArene]),
                when(|p| alkyl(p, 0) && sulfonyl(p, 3), &[M::OrthoAlkylSulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::OrthoMethylFluoroArene]),
                when(|p| hydroxymethyl(p, 0), &[M::OrthoHydroxymethylFluoroArene]),
                when(|p| trifluoromethyl(p, 0), &[M::OrthoTrifluoromethylFluoroArene]),
                when(|p| carboxyl_carbon(p, 0), &[M::OrthoCarboxyFluoroArene]),
                when(|p| ester_carbon(p, 0), &[M::OrthoAlkoxycarbonylFluoroArene]),
                when(|p| amide_carbon(p, 0), &[M::OrthoCarbamoylFluoroArene]),
                when(|p| aldehyde_carbon(p, 0), &[M::OrthoFormylFluoroArene]),
                when(|p| ketone_carbon(p, 0), &[M::OrthoAcylFluoroArene]),
                when(|p| cyano(p, 0), &[M::OrthoCyanoFluoroArene]),
                when(|p| vinyl(p, 0), &[M::OrthoVinylFluoroArene]),
                when(|p| alkyl(p, 0), &[M::OrthoAlkylFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C-Cl",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::OrthoMethylChloroArene]),
                when(|p| hydroxymethyl(p, 0), &[M::OrthoHydroxymethylChloroArene]),
                when(|p| trifluoromethyl(p, 0), &[M::OrthoTrifluoromethylChloroArene]),
                when(|p| carboxyl_carbon(p, 0), &[M::OrthoCarboxyChloroArene]),
                when(|p| ester_carbon(p, 0), &[M::OrthoAlkoxycarbonylChloroArene]),
                when(|p| amide_carbon(p, 0), &[M::OrthoCarbamoylChloroArene]),
                when(|p| aldehyde_carbon(p, 0), &[M::OrthoFormylChloroArene]),
                when(|p| ketone_carbon(p, 0), &[M::OrthoAcylChloroArene]),
                when(|p| cyano(p, 0), &[M::OrthoCyanoChloroArene]),
                when(|p| vinyl(p, 0), &[M::OrthoVinylChloroArene]),
                when(|p| alkyl(p, 0), &[M::OrthoAlkylChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C-C",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 3), &[M::OrthoMethylBromoArene]),
                when(|p| hydroxymethyl(p, 3), &[M::OrthoHydroxymethylBromoArene]),
                when(|p| trifluoromethyl(p, 3), &[M::OrthoTrifluoromethylBromoArene]),
                when(|p| carboxyl_carbon(p, 3), &[M::OrthoCarboxyBromoArene]),
                when(|p| ester_carbon(p, 3), &[M::OrthoAlkoxycarbonylBromoArene]),
                when(|p| amide_carbon(p, 3), &[M::OrthoCarbamoylBromoArene]),
                when(|p| aldehyde_carbon(p, 3), &[M::OrthoFormylBromoArene]),
                when(|p| ketone_carbon(p, 3), &[M::OrthoAcylBromoArene]),
                when(|p| cyano(p, 3), &[M::OrthoCyanoBromoArene]),
                when(|p| vinyl(p, 3), &[M::OrthoVinylBromoArene]),
                when(|p| alkyl(p, 3), &[M::OrthoAlkylBromoArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::OrthoMethylIodoArene]),
                when(|p| hydroxymethyl(p, 0), &[M::OrthoHydroxymethylIodoArene]),
                when(|p| trifluoromethyl(p, 0), &[M::OrthoTrifluoromethylIodoArene]),
                when(|p| carboxyl_carbon(p, 0), &[M::OrthoCarboxyIodoArene]),
                when(|p| ester_carbon(p, 0), &[M::OrthoAlkoxycarbonylIodoArene]),
                when(|p| amide_carbon(p, 0), &[M::OrthoCarbamoylIodoArene]),
                when(|p| aldehyde_carbon(p, 0), &[M::OrthoFormylIodoArene]),
                when(|p| ketone_carbon(p, 0), &[M::OrthoAcylIodoArene]),
                when(|p| cyano(p, 0), &[M::OrthoCyanoIodoArene]),
                when(|p| vinyl(p, 0), &[M::OrthoVinylIodoArene]),
                when(|p| alkyl(p, 0), &[M::OrthoAlkylIodoArene]),
            ]),
        ])],
    );

    t.extend(
        "O-C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| ends_pair(p, hydroxyl, ether_oxygen), &[M::OrthoHydroxyAlkoxyArene]),
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::OrthoHydroxyAcyloxyArene]),
                when(|p| ends_pair(p, methoxy, ester_oxygen), &[M::OrthoMethoxyAcyloxyArene]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::OrthoAlkoxyAcyloxyArene]),
                when(|p| both_ends(p, ester_oxygen), &[M::OrthoDiacyloxyArene]),
            ]),
        ])],
    );

    t.add(
        "N-C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 3) && substituted_amine(p, 0), &[M::OrthoHydroxyAlkylaminoArene]),
                when(|p| hydroxyl(p, 3) && amide_nitrogen(p, 0), &[M::OrthoHydroxyAcylaminoArene]),
                when(|p| hydroxyl(p, 3) && nitro(p, 0), &[M::OrthoHydroxyNitroArene]),
                when(|p| methoxy(p, 3) && primary_amine(p, 0), &[M::OrthoMethoxyAminoArene]),
                when(|p| methoxy(p, 3) && substituted_amine(p, 0), &[M::OrthoMethoxyAlkylaminoArene]),
                when(|p| methoxy(p, 3) && amide_nitrogen(p, 0), &[M::OrthoMethoxyAcylaminoArene]),
                when(|p| methoxy(p, 3) && nitro(p, 0), &[M::OrthoMethoxyNitroArene]),
                when(|p| ether_oxygen(p, 3) && primary_amine(p, 0), &[M::OrthoAlkoxyAminoArene]),
                when(|p| ether_oxygen(p, 3) && substituted_amine(p, 0), &[M::OrthoAlkoxyAlkylaminoArene]),
                when(|p| ether_oxygen(p, 3) && amide_nitrogen(p, 0), &[M::OrthoAlkoxyAcylaminoArene]),
                when(|p| ether_oxygen(p, 3) && nitro(p, 0), &[M::OrthoAlkoxyNitroArene]),
                when(|p| ester_oxygen(p, 3) && primary_amine(p, 0), &[M::OrthoAcyloxyAminoArene]),
                when(|p| ester_oxygen(p, 3) && substituted_amine(p, 0), &[M::OrthoAcyloxyAlkylaminoArene]),
                when(|p| ester_oxygen(p, 3) && amide_nitrogen(p, 0), &[M::OrthoAcyloxyAcylaminoArene]),
                when(|p| ester_oxygen(p, 3) && nitro(p, 0), &[M::OrthoAcyloxyNitroArene]),
            ]),
        ])],
    );

    t.add(
        "O-C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 3), &[M::OrthoHydroxyMercaptoArene]),
                when(|p| hydroxyl(p, 0) && thioether(p, 3), &[M::OrthoHydroxyAlkylthioArene]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 3), &[M::OrthoHydroxySulfonylArene]),
                when(|p| methoxy(p, 0) && thiol(p, 3), &[M::OrthoMethoxyMercaptoArene]),
                when(|p| methoxy(p, 0) && thioether(p, 3), &[M::OrthoMethoxyAlkylthioArene]),
                when(|p| methoxy(p, 0) && sulfonyl(p, 3), &[M::OrthoMethoxySulfonylArene]),
                when(|p| ether_oxygen(p, 0) && thiol(p, 3), &[M::OrthoAlkoxyMercaptoArene]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 3), &[M::OrthoAlkoxyAlkylthioArene]),
                when(|p| ether_oxygen(p, 0) && sulfonyl(p, 3), &[M::OrthoAlkoxySulfonylArene]),
                when(|p| ester_oxygen(p, 0) && thiol(p, 3), &[M::OrthoAcyloxyMercaptoArene]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 3), &[M::OrthoAcyloxyAlkylthioArene]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 3), &[M::OrthoAcyloxySulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 3), &[M::OrthoHydroxyFluoroArene]),
                when(|p| methoxy(p, 3), &[M::OrthoMethoxyFluoroArene]),
                when(|p| ether_oxygen(p, 3), &[M::OrthoAlkoxyFluoroArene]),
                when(|p| ester_oxygen(p, 3), &[M::OrthoAcyloxyFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "Cl-C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methoxy(p, 3), &[M::OrthoMethoxyChloroArene]),
                when(|p| ether_oxygen(p, 3), &[M::OrthoAlkoxyChloroArene]),
                when(|p| ester_oxygen(p, 3), &[M::OrthoAcyloxyChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 3), &[M::OrthoHydroxyBromoArene]),
                when(|p| methoxy(p, 3), &[M::OrthoMethoxyBromoArene]),
                when(|p| ether_oxygen(p, 3), &[M::OrthoAlkoxyBromoArene]),
                when(|p| ester_oxygen(p, 3), &[M::OrthoAcyloxyBromoArene]),
            ]),
        ])],
    );

    t.add(
        "I-C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 3), &[M::OrthoHydroxyIodoArene]),
                when(|p| methoxy(p, 3), &[M::OrthoMethoxyIodoArene]),
                when(|p| ether_oxygen(p, 3), &[M::OrthoAlkoxyIodoArene]),
                when(|p| ester_oxygen(p, 3), &[M::OrthoAcyloxyIodoArene]),
            ]),
        ])],
    );

    t.add(
        "N-C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::OrthoAminoAlkylaminoArene]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::OrthoAminoAcylaminoArene]),
                when(|p| ends_pair(p, primary_amine, nitro), &[M::OrthoAminoNitroArene]),
                when(|p| both_ends(p, substituted_amine), &[M::OrthoDialkylaminoArene]),
                when(|p| ends_pair(p, substituted_amine, amide_nitrogen), &[M::OrthoAlkylaminoAcylaminoArene]),
                when(|p| ends_pair(p, substituted_amine, nitro), &[M::OrthoAlkylaminoNitroArene]),
                when(|p| both_ends(p, amide_nitrogen), &[M::OrthoDiacylaminoArene]),
                when(|p| ends_pair(p, amide_nitrogen, nitro), &[M::OrthoAcylaminoNitroArene]),
                when(|p| both_ends(p, nitro), &[M::OrthoDinitroArene]),
            ]),
        ])],
    );

    t.add(
        "N-C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 3), &[M::OrthoAminoMercaptoArene]),
                when(|p| primary_amine(p, 0) && thioether(p, 3), &[M::OrthoAminoAlkylthioArene]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 3), &[M::OrthoAminoSulfonylArene]),
                when(|p| substituted_amine(p, 0) && thiol(p, 3), &[M::OrthoAlkylaminoMercaptoArene]),
                when(|p| substituted_amine(p, 0) && thioether(p, 3), &[M::OrthoAlkylaminoAlkylthioArene]),
                when(|p| substituted_amine(p, 0) && sulfonyl(p, 3), &[M::OrthoAlkylaminoSulfonylArene]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 3), &[M::OrthoAcylaminoMercaptoArene]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 3), &[M::OrthoAcylaminoAlkylthioArene]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 3), &[M::OrthoAcylaminoSulfonylArene]),
                when(|p| nitro(p, 0) && thiol(p, 3), &[M::OrthoNitroMercaptoArene]),
                when(|p| nitro(p, 0) && thioether(p, 3), &[M::OrthoNitroAlkylthioArene]),
                when(|p| nitro(p, 0) && sulfonyl(p, 3), &[M::OrthoNitroSulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 3), &[M::OrthoAminoFluoroArene]),
                when(|p| substituted_amine(p, 3), &[M::OrthoAlkylaminoFluoroArene]),
                when(|p| amide_nitrogen(p, 3), &[M::OrthoAcylaminoFluoroArene]),
                when(|p| nitro(p, 3), &[M::OrthoNitroFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "Cl-C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 3), &[M::OrthoAminoChloroArene]),
                when(|p| substituted_amine(p, 3), &[M::OrthoAlkylaminoChloroArene]),
                when(|p| amide_nitrogen(p, 3), &[M::OrthoAcylaminoChloroArene]),
                when(|p| nitro(p, 3), &[M::OrthoNitroChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 3), &[M::OrthoAminoBromoArene]),
                when(|p| substituted_amine(p, 3), &[M::OrthoAlkylaminoBromoArene]),
                when(|p| amide_nitrogen(p, 3), &[M::OrthoAcylaminoBromoArene]),
                when(|p| nitro(p, 3), &[M::OrthoNitroBromoArene]),
            ]),
        ])],
    );

    t.add(
        "I-C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 3), &[M::OrthoAminoIodoArene]),
                when(|p| substituted_amine(p, 3), &[M::OrthoAlkylaminoIodoArene]),
                when(|p| amide_nitrogen(p, 3), &[M::OrthoAcylaminoIodoArene]),
                when(|p| nitro(p, 3), &[M::OrthoNitroIodoArene]),
            ]),
        ])],
    );

    t.add(
        "S-C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::OrthoDimercaptoArene]),
                when(|p| ends_pair(p, thiol, thioether), &[M::OrthoMercaptoAlkylthioArene]),
                when(|p| ends_pair(p, thiol, sulfonyl), &[M::OrthoMercaptoSulfonylArene]),
                when(|p| both_ends(p, thioether), &[M::OrthoDialkylthioArene]),
                when(|p| ends_pair(p, thioether, sulfonyl), &[M::OrthoAlkylthioSulfonylArene]),
                when(|p| both_ends(p, sulfonyl), &[M::OrthoDisulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 3), &[M::OrthoMercaptoFluoroArene]),
                when(|p| thioether(p, 3), &[M::OrthoAlkylthioFluoroArene]),
                when(|p| sulfonyl(p, 3), &[M::OrthoSulfonylFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "Cl-C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 3), &[M::OrthoMercaptoChloroArene]),
                when(|p| thioether(p, 3), &[M::OrthoAlkylthioChloroArene]),
                when(|p| sulfonyl(p, 3), &[M::OrthoSulfonylChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 3), &[M::OrthoMercaptoBromoArene]),
                when(|p| thioether(p, 3), &[M::OrthoAlkylthioBromoArene]),
                when(|p| sulfonyl(p, 3), &[M::OrthoSulfonylBromoArene]),
            ]),
        ])],
    );

    t.add(
        "I-C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 3), &[M::OrthoMercaptoIodoArene]),
                when(|p| thioether(p, 3), &[M::OrthoAlkylthioIodoArene]),
                when(|p| sulfonyl(p, 3), &[M::OrthoSulfonylIodoArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[M::OrthoDifluoroArene])],
    );

    t.add(
        "Cl-C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[M::OrthoFluoroChloroArene])],
    );

    t.add(
        "Br-C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[M::OrthoFluoroBromoArene])],
    );

    t.add(
        "F-C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[M::OrthoFluoroIodoArene])],
    );

    t.add(
        "Br-C:C-Cl",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[M::OrthoChloroBromoArene])],
    );

    t.add(
        "Cl-C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[M::OrthoChloroIodoArene])],
    );

    t.add(
        "Br-C:C-Br",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[M::OrthoDibromoArene])],
    );

    t.add(
        "Br-C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[M::OrthoBromoIodoArene])],
    );

    t.add("I-C:C-I", clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 3, R::Benzene), &[M::OrthoDiiodoArene])]);

    t.add(
        "C-C-C:C",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Benzene) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOnePhenylmethane]),
                    when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOnePhenylmethane]),
                    when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOnePhenylmethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOnePhenylmethane]),
                    when(|p| ketone_carbon(p, 0), &[M::OneAcylOnePhenylmethane]),
                    when(|p| cyano(p, 0), &[M::OneCyanoOnePhenylmethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 3), &[M::OneHydroxyOnePhenylmethane]),
                    when(|p| methoxy(p, 3), &[M::OneMethoxyOnePhenylmethane]),
                    when(|p| ether_oxygen(p, 3), &[M::OneAlkoxyOnePhenylmethane]),
                    when(|p| ester_oxygen(p, 3), &[M::OneAcyloxyOnePhenylmethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 3), &[M::OneAminoOnePhenylmethane]),
                    when(|p| substituted_amine(p, 3), &[M::OneAlkylaminoOnePhenylmethane]),
                    when(|p| amide_nitrogen(p, 3), &[M::OneAcylaminoOnePhenylmethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 3), &[M::OneMercaptoOnePhenylmethane]),
                    when(|p| thioether(p, 3), &[M::OneAlkylthioOnePhenylmethane]),
                    when(|p| sulfonyl(p, 3), &[M::OneSulfonylOnePhenylmethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 3),
            &[M::OneFluoroOnePhenylmethane],
        )],
    );

    t.add(
        "C:C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 3),
            &[M::OneChloroOnePhenylmethane],
        )],
    );

    t.add(
        "Br-C-C:C",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Benzene) && straight(p, 1, 2),
            &[M::OneBromoOnePhenylmethane],
        )],
    );

    t.add(
        "C:C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 3),
            &[M::OneIodoOnePhenylmethane],
        )],
    );
}

fn five(t: &mut RuleTable) {
    t.add(
        "C-C:C:C-C",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, methyl), &[M::MetaDimethylArene]),
                when(|p| ends_pair(p, methyl, hydroxymethyl), &[M::MetaMethylHydroxymethylArene]),
                when(|p| ends_pair(p, methyl, trifluoromethyl), &[M::MetaMethylTrifluoromethylArene]),
                when(|p| ends_pair(p, methyl, carboxyl_carbon), &[M::MetaMethylCarboxyArene]),
                when(|p| ends_pair(p, methyl, ester_carbon), &[M::MetaMethylAlkoxycarbonylArene]),
                when(|p| ends_pair(p, methyl, amide_carbon), &[M::MetaMethylCarbamoylArene]),
                when(|p| ends_pair(p, methyl, aldehyde_carbon), &[M::MetaMethylFormylArene]),
                when(|p| ends_pair(p, methyl, ketone_carbon), &[M::MetaMethylAcylArene]),
                when(|p| ends_pair(p, methyl, cyano), &[M::MetaMethylCyanoArene]),
                when(|p| ends_pair(p, methyl, vinyl), &[M::MetaMethylVinylArene]),
                when(|p| ends_pair(p, methyl, alkyl), &[M::MetaMethylAlkylArene]),
                when(|p| both_ends(p, hydroxymethyl), &[M::MetaDihydroxymethylArene]),
                when(|p| ends_pair(p, hydroxymethyl, trifluoromethyl), &[M::MetaHydroxymethylTrifluoromethylArene]),
                when(|p| ends_pair(p, hydroxymethyl, carboxyl_carbon), &[M::MetaHydroxymethylCarboxyArene]),
                when(|p| ends_pair(p, hydroxymethyl, ester_carbon), &[M::MetaHydroxymethylAlkoxycarbonylArene]),
                when(|p| ends_pair(p, hydroxymethyl, amide_carbon), &[M::MetaHydroxymethylCarbamoylArene]),
                when(|p| ends_pair(p, hydroxymethyl, aldehyde_carbon), &[M::MetaHydroxymethylFormylArene]),
                when(|p| ends_pair(p, hydroxymethyl, ketone_carbon), &[M::MetaHydroxymethylAcylArene]),
                when(|p| ends_pair(p, hydroxymethyl, cyano), &[M::MetaHydroxymethylCyanoArene]),
                when(|p| ends_pair(p, hydroxymethyl, vinyl), &[M::MetaHydroxymethylVinylArene]),
                when(|p| ends_pair(p, hydroxymethyl, alkyl), &[M::MetaHydroxymethylAlkylArene]),
                when(|p| both_ends(p, trifluoromethyl), &[M::MetaDitrifluoromethylArene]),
                when(|p| ends_pair(p, trifluoromethyl, carboxyl_carbon), &[M::MetaTrifluoromethylCarboxyArene]),
                when(|p| ends_pair(p, trifluoromethyl, ester_carbon), &[M::MetaTrifluoromethylAlkoxycarbonylArene]),
                when(|p| ends_pair(p, trifluoromethyl, amide_carbon), &[M::MetaTrifluoromethylCarbamoylArene]),
                when(|p| ends_pair(p, trifluoromethyl, aldehyde_carbon), &[M::MetaTrifluoromethylFormylArene]),
                when(|p| ends_pair(p, trifluoromethyl, ketone_carbon), &[M::MetaTrifluoromethylAcylArene]),
                when(|p| ends_pair(p, trifluoromethyl, cyano), &[M::MetaTrifluoromethylCyanoArene]),
                when(|p| ends_pair(p, trifluoromethyl, vinyl), &[M::MetaTrifluoromethylVinylArene]),
                when(|p| ends_pair(p, trifluoromethyl, alkyl), &[M::MetaTrifluoromethylAlkylArene]),
                when(|p| both_ends(p, carboxyl_carbon), &[M::MetaDicarboxyArene]),
                when(|p| ends_pair(p, carboxyl_carbon, ester_carbon), &[M::MetaCarboxyAlkoxycarbonylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, amide_carbon), &[M::MetaCarboxyCarbamoylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, aldehyde_carbon), &[M::MetaCarboxyFormylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, ketone_carbon), &[M::MetaCarboxyAcylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, cyano), &[M::MetaCarboxyCyanoArene]),
                when(|p| ends_pair(p, carboxyl_carbon, vinyl), &[M::MetaCarboxyVinylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, alkyl), &[M::MetaCarboxyAlkylArene]),
                when(|p| both_ends(p, ester_carbon), &[M::MetaDialkoxycarbonylArene]),
                when(|p| ends_pair(p, ester_carbon, amide_carbon), &[M::MetaAlkoxycarbonylCarbamoylArene]),
                when(|p| ends_pair(p, ester_carbon, aldehyde_carbon), &[M::MetaAlkoxycarbonylFormylArene]),
                when(|p| ends_pair(p, ester_carbon, ketone_carbon), &[M::MetaAlkoxycarbonylAcylArene]),
                when(|p| ends_pair(p, ester_carbon, cyano), &[M::MetaAlkoxycarbonylCyanoArene]),
                when(|p| ends_pair(p, ester_carbon, vinyl), &[M::MetaAlkoxycarbonylVinylArene]),
                when(|p| ends_pair(p, ester_carbon, alkyl), &[M::MetaAlkoxycarbonylAlkylArene]),
                when(|p| both_ends(p, amide_carbon), &[M::MetaDicarbamoylArene]),
                when(|p| ends_pair(p, amide_carbon, aldehyde_carbon), &[M::MetaCarbamoylFormylArene]),
                when(|p| ends_pair(p, amide_carbon, ketone_carbon), &[M::MetaCarbamoylAcylArene]),
                when(|p| ends_pair(p, amide_carbon, cyano), &[M::MetaCarbamoylCyanoArene]),
                when(|p| ends_pair(p, amide_carbon, vinyl), &[M::MetaCarbamoylVinylArene]),
                when(|p| ends_pair(p, amide_carbon, alkyl), &[M::MetaCarbamoylAlkylArene]),
                when(|p| both_ends(p, aldehyde_carbon), &[M::MetaDiformylArene]),
                when(|p| ends_pair(p, aldehyde_carbon, ketone_carbon), &[M::MetaFormylAcylArene]),
                when(|p| ends_pair(p, aldehyde_carbon, cyano), &[M::MetaFormylCyanoArene]),
                when(|p| ends_pair(p, aldehyde_carbon, vinyl), &[M::MetaFormylVinylArene]),
                when(|p| ends_pair(p, aldehyde_carbon, alkyl), &[M::MetaFormylAlkylArene]),
                when(|p| both_ends(p, ketone_carbon), &[M::MetaDiacylArene]),
                when(|p| ends_pair(p, ketone_carbon, cyano), &[M::MetaAcylCyanoArene]),
                when(|p| ends_pair(p, ketone_carbon, vinyl), &[M::MetaAcylVinylArene]),
                when(|p| ends_pair(p, ketone_carbon, alkyl), &[M::MetaAcylAlkylArene]),
                when(|p| both_ends(p, cyano), &[M::MetaDicyanoArene]),
                when(|p| ends_pair(p, cyano, vinyl), &[M::MetaCyanoVinylArene]),
                when(|p| ends_pair(p, cyano, alkyl), &[M::MetaCyanoAlkylArene]),
                when(|p| both_ends(p, vinyl), &[M::MetaDivinylArene]),
                when(|p| ends_pair(p, vinyl, alkyl), &[M::MetaVinylAlkylArene]),
                when(|p| both_ends(p, alkyl), &[M::MetaDialkylArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0) && hydroxyl(p, 4), &[M::MetaMethylHydroxyArene]),
                when(|p| methyl(p, 0) && methoxy(p, 4), &[M::MetaMethylMethoxyArene]),
                when(|p| methyl(p, 0) && ether_oxygen(p, 4), &[M::MetaMethylAlkoxyArene]),
                when(|p| methyl(p, 0) && ester_oxygen(p, 4), &[M::MetaMethylAcyloxyArene]),
                when(|p| hydroxymethyl(p, 0) && hydroxyl(p, 4), &[M::MetaHydroxymethylHydroxyArene]),
                when(|p| hydroxymethyl(p, 0) && methoxy(p, 4), &[M::MetaHydroxymethylMethoxyArene]),
                when(|p| hydroxymethyl(p, 0) && ether_oxygen(p, 4), &[M::MetaHydroxymethylAlkoxyArene]),
                when(|p| hydroxymethyl(p, 0) && ester_oxygen(p, 4), &[M::MetaHydroxymethylAcyloxyArene]),
                when(|p| trifluoromethyl(p, 0) && hydroxyl(p, 4), &[M::MetaTrifluoromethylHydroxyArene]),
                when(|p| trifluoromethyl(p, 0) && methoxy(p, 4), &[M::MetaTrifluoromethylMethoxyArene]),
                when(|p| trifluoromethyl(p, 0) && ether_oxygen(p, 4), &[M::MetaTrifluoromethylAlkoxyArene]),
                when(|p| trifluoromethyl(p, 0) && ester_oxygen(p, 4), &[M::MetaTrifluoromethylAcyloxyArene]),
                when(|p| carboxyl_carbon(p, 0) && hydroxyl(p, 4), &[M::MetaCarboxyHydroxyArene]),
                when(|p| carboxyl_carbon(p, 0) && methoxy(p, 4), &[M::MetaCarboxyMethoxyArene]),
                when(|p| carboxyl_carbon(p, 0) && ether_oxygen(p, 4), &[M::MetaCarboxyAlkoxyArene]),
                when(|p| carboxyl_carbon(p, 0) && ester_oxygen(p, 4), &[M::MetaCarboxyAcyloxyArene]),
                when(|p| ester_carbon(p, 0) && hydroxyl(p, 4), &[M::MetaAlkoxycarbonylHydroxyArene]),
                when(|p| ester_carbon(p, 0) && methoxy(p, 4), &[M::MetaAlkoxycarbonylMethoxyArene]),
                when(|p| ester_carbon(p, 0) && ether_oxygen(p, 4), &[M::MetaAlkoxycarbonylAlkoxyArene]),
                when(|p| ester_carbon(p, 0) && ester_oxygen(p, 4), &[M::MetaAlkoxycarbonylAcyloxyArene]),
                when(|p| amide_carbon(p, 0) && hydroxyl(p, 4), &[M::MetaCarbamoylHydroxyArene]),
                when(|p| amide_carbon(p, 0) && methoxy(p, 4), &[M::MetaCarbamoylMethoxyArene]),
                when(|p| amide_carbon(p, 0) && ether_oxygen(p, 4), &[M::MetaCarbamoylAlkoxyArene]),
                when(|p| amide_carbon(p, 0) && ester_oxygen(p, 4), &[M::MetaCarbamoylAcyloxyArene]),
                when(|p| aldehyde_carbon(p, 0) && hydroxyl(p, 4), &[M::MetaFormylHydroxyArene]),
                when(|p| aldehyde_carbon(p, 0) && methoxy(p, 4), &[M::MetaFormylMethoxyArene]),
                when(|p| aldehyde_carbon(p, 0) && ether_oxygen(p, 4), &[M::MetaFormylAlkoxyArene]),
                when(|p| aldehyde_carbon(p, 0) && ester_oxygen(p, 4), &[M::MetaFormylAcyloxyArene]),
                when(|p| ketone_carbon(p, 0) && hydroxyl(p, 4), &[M::MetaAcylHydroxyArene]),
                when(|p| ketone_carbon(p, 0) && methoxy(p, 4), &[M::MetaAcylMethoxyArene]),
                when(|p| ketone_carbon(p, 0) && ether_oxygen(p, 4), &[M::MetaAcylAlkoxyArene]),
                when(|p| ketone_carbon(p, 0) && ester_oxygen(p, 4), &[M::MetaAcylAcyloxyArene]),
                when(|p| cyano(p, 0) && hydroxyl(p, 4), &[M::MetaCyanoHydroxyArene]),
                when(|p| cyano(p, 0) && methoxy(p, 4), &[M::MetaCyanoMethoxyArene]),
                when(|p| cyano(p, 0) && ether_oxygen(p, 4), &[M::MetaCyanoAlkoxyArene]),
                when(|p| cyano(p, 0) && ester_oxygen(p, 4), &[M::MetaCyanoAcyloxyArene]),
                when(|p| vinyl(p, 0) && hydroxyl(p, 4), &[M::MetaVinylHydroxyArene]),
                when(|p| vinyl(p, 0) && methoxy(p, 4), &[M::MetaVinylMethoxyArene]),
                when(|p| vinyl(p, 0) && ether_oxygen(p, 4), &[M::MetaVinylAlkoxyArene]),
                when(|p| vinyl(p, 0) && ester_oxygen(p, 4), &[M::MetaVinylAcyloxyArene]),
                when(|p| alkyl(p, 0) && hydroxyl(p, 4), &[M::MetaAlkylHydroxyArene]),
                when(|p| alkyl(p, 0) && methoxy(p, 4), &[M::MetaAlkylMethoxyArene]),
                when(|p| alkyl(p, 0) && ether_oxygen(p, 4), &[M::MetaAlkylAlkoxyArene]),
                when(|p| alkyl(p, 0) && ester_oxygen(p, 4), &[M::MetaAlkylAcyloxyArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0) && primary_amine(p, 4), &[M::MetaMethylAminoArene]),
                when(|p| methyl(p, 0) && substituted_amine(p, 4), &[M::MetaMethylAlkylaminoArene]),
                when(|p| methyl(p, 0) && amide_nitrogen(p, 4), &[M::MetaMethylAcylaminoArene]),
                when(|p| methyl(p, 0) && nitro(p, 4), &[M::MetaMethylNitroArene]),
                when(|p| hydroxymethyl(p, 0) && primary_amine(p, 4), &[M::MetaHydroxymethylAminoArene]),
                when(|p| hydroxymethyl(p, 0) && substituted_amine(p, 4), &[M::MetaHydroxymethylAlkylaminoArene]),
                when(|p| hydroxymethyl(p, 0) && amide_nitrogen(p, 4), &[M::MetaHydroxymethylAcylaminoArene]),
                when(|p| hydroxymethyl(p, 0) && nitro(p, 4), &[M::MetaHydroxymethylNitroArene]),
                when(|p| trifluoromethyl(p, 0) && primary_amine(p, 4), &[M::MetaTrifluoromethylAminoArene]),
                when(|p| trifluoromethyl(p, 0) && substituted_amine(p, 4), &[M::MetaTrifluoromethylAlkylaminoArene]),
                when(|p| trifluoromethyl(p, 0) && amide_nitrogen(p, 4), &[M::MetaTrifluoromethylAcylaminoArene]),
                when(|p| trifluoromethyl(p, 0) && nitro(p, 4), &[M::MetaTrifluoromethylNitroArene]),
                when(|p| carboxyl_carbon(p, 0) && primary_amine(p, 4), &[M::MetaCarboxyAminoArene]),
                when(|p| carboxyl_carbon(p, 0) && substituted_amine(p, 4), &[M::MetaCarboxyAlkylaminoArene]),
                when(|p| carboxyl_carbon(p, 0) && amide_nitrogen(p, 4), &[M::MetaCarboxyAcylaminoArene]),
                when(|p| carboxyl_carbon(p, 0) && nitro(p, 4), &[M::MetaCarboxyNitroArene]),
                when(|p| ester_carbon(p, 0) && primary_amine(p, 4), &[M::MetaAlkoxycarbonylAminoArene]),
                when(|p| ester_carbon(p, 0) && substituted_amine(p, 4), &[M::MetaAlkoxycarbonylAlkylaminoArene]),
                when(|p| ester_carbon(p, 0) && amide_nitrogen(p, 4), &[M::MetaAlkoxycarbonylAcylaminoArene]),
                when(|p| ester_carbon(p, 0) && nitro(p, 4), &[M::MetaAlkoxycarbonylNitroArene]),
                when(|p| amide_carbon(p, 0) && primary_amine(p, 4), &[M::MetaCarbamoylAminoArene]),
                when(|p| amide_carbon(p, 0) && substituted_amine(p, 4), &[M::MetaCarbamoylAlkylaminoArene]),
                when(|p| amide_carbon(p, 0) && amide_nitrogen(p, 4), &[M::MetaCarbamoylAcylaminoArene]),
                when(|p| amide_carbon(p, 0) && nitro(p, 4), &[M::MetaCarbamoylNitroArene]),
                when(|p| aldehyde_carbon(p, 0) && primary_amine(p, 4), &[M::MetaFormylAminoArene]),
                when(|p| aldehyde_carbon(p, 0) && substituted_amine(p, 4), &[M::MetaFormylAlkylaminoArene]),
                when(|p| aldehyde_carbon(p, 0) && amide_nitrogen(p, 4), &[M::MetaFormylAcylaminoArene]),
                when(|p| aldehyde_carbon(p, 0) && nitro(p, 4), &[M::MetaFormylNitroArene]),
                when(|p| ketone_carbon(p, 0) && primary_amine(p, 4), &[M::MetaAcylAminoArene]),
                when(|p| ketone_carbon(p, 0) && substituted_amine(p, 4), &[M::MetaAcylAlkylaminoArene]),
                when(|p| ketone_carbon(p, 0) && amide_nitrogen(p, 4), &[M::MetaAcylAcylaminoArene]),
                when(|p| ketone_carbon(p, 0) && nitro(p, 4), &[M::MetaAcylNitroArene]),
                when(|p| cyano(p, 0) && primary_amine(p, 4), &[M::MetaCyanoAminoArene]),
                when(|p| cyano(p, 0) && substituted_amine(p, 4), &[M::MetaCyanoAlkylaminoArene]),
                when(|p| cyano(p, 0) && amide_nitrogen(p, 4), &[M::MetaCyanoAcylaminoArene]),
                when(|p| cyano(p, 0) && nitro(p, 4), &[M::MetaCyanoNitroArene]),
                when(|p| vinyl(p, 0) && primary_amine(p, 4), &[M::MetaVinylAminoArene]),
                when(|p| vinyl(p, 0) && substituted_amine(p, 4), &[M::MetaVinylAlkylaminoArene]),
                when(|p| vinyl(p, 0) && amide_nitrogen(p, 4), &[M::MetaVinylAcylaminoArene]),
                when(|p| vinyl(p, 0) && nitro(p, 4), &[M::MetaVinylNitroArene]),
                when(|p| alkyl(p, 0) && primary_amine(p, 4), &[M::MetaAlkylAminoArene]),
                when(|p| alkyl(p, 0) && substituted_amine(p, 4), &[M::MetaAlkylAlkylaminoArene]),
                when(|p| alkyl(p, 0) && amide_nitrogen(p, 4), &[M::MetaAlkylAcylaminoArene]),
                when(|p| alkyl(p, 0) && nitro(p, 4), &[M::MetaAlkylNitroArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0) && thiol(p, 4), &[M::MetaMethylMercaptoArene]),
                when(|p| methyl(p, 0) && thioether(p, 4), &[M::MetaMethylAlkylthioArene]),
                when(|p| methyl(p, 0) && sulfonyl(p, 4), &[M::MetaMethylSulfonylArene]),
                when(|p| hydroxymethyl(p, 0) && thiol(p, 4), &[M::MetaHydroxymethylMercaptoArene]),
                when(|p| hydroxymethyl(p, 0) && thioether(p, 4), &[M::MetaHydroxymethylAlkylthioArene]),
                when(|p| hydroxymethyl(p, 0) && sulfonyl(p, 4), &[M::MetaHydroxymethylSulfonylArene]),
                when(|p| trifluoromethyl(p, 0) && thiol(p, 4), &[M::MetaTrifluoromethylMercaptoArene]),
                when(|p| trifluoromethyl(p, 0) && thioether(p, 4), &[M::MetaTrifluoromethylAlkylthioArene]),
                when(|p| trifluoromethyl(p, 0) && sulfonyl(p, 4), &[M::MetaTrifluoromethylSulfonylArene]),
                when(|p| carboxyl_carbon(p, 0) && thiol(p, 4), &[M::MetaCarboxyMercaptoArene]),
                when(|p| carboxyl_carbon(p, 0) && thioether(p, 4), &[M::MetaCarboxyAlkylthioArene]),
                when(|p| carboxyl_carbon(p, 0) && sulfonyl(p, 4), &[M::MetaCarboxySulfonylArene]),
                when(|p| ester_carbon(p, 0) && thiol(p, 4), &[M::MetaAlkoxycarbonylMercaptoArene]),
                when(|p| ester_carbon(p, 0) && thioether(p, 4), &[M::MetaAlkoxycarbonylAlkylthioArene]),
                when(|p| ester_carbon(p, 0) && sulfonyl(p, 4), &[M::MetaAlkoxycarbonylSulfonylArene]),
                when(|p| amide_carbon(p, 0) && thiol(p, 4), &[M::MetaCarbamoylMercaptoArene]),
                when(|p| amide_carbon(p, 0) && thioether(p, 4), &[M::MetaCarbamoylAlkylthioArene]),
                when(|p| amide_carbon(p, 0) && sulfonyl(p, 4), &[M::MetaCarbamoylSulfonylArene]),
                when(|p| aldehyde_carbon(p, 0) && thiol(p, 4), &[M::MetaFormylMercaptoArene]),
                when(|p| aldehyde_carbon(p, 0) && thioether(p, 4), &[M::MetaFormylAlkylthioArene]),
                when(|p| aldehyde_carbon(p, 0) && sulfonyl(p, 4), &[M::MetaFormylSulfonylArene]),
                when(|p| ketone_carbon(p, 0) && thiol(p, 4), &[M::MetaAcylMercaptoArene]),
                when(|p| ketone_carbon(p, 0) && thioether(p, 4), &[M::MetaAcylAlkylthioArene]),
                when(|p| ketone_carbon(p, 0) && sulfonyl(p, 4), &[M::MetaAcylSulfonylArene]),
                when(|p| cyano(p, 0) && thiol(p, 4), &[M::MetaCyanoMercaptoArene]),
                when(|p| cyano(p, 0) && thioether(p, 4), &[M::MetaCyanoAlkylthioArene]),
                when(|p| cyano(p, 0) && sulfonyl(p, 4), &[M::MetaCyanoSulfonylArene]),
                when(|p| vinyl(p, 0) && thiol(p, 4), &[M::MetaVinylMercaptoArene]),
                when(|p| vinyl(p, 0) && thioether(p, 4), &[M::MetaVinylAlkylthioArene]),
                when(|p| vinyl(p, 0) && sulfonyl(p, 4), &[M::MetaVinylSulfonylArene]),
                when(|p| alkyl(p, 0) && thiol(p, 4), &[M::MetaAlkylMercaptoArene]),
                when(|p| alkyl(p, 0) && thioether(p, 4), &[M::MetaAlkylAlkylthioArene]),
                when(|p| alkyl(p, 0) && sulfonyl(p, 4), &[M::MetaAlkylSulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::MetaMethylFluoroArene]),
                when(|p| hydroxymethyl(p, 0), &[M::MetaHydroxymethylFluoroArene]),
                when(|p| trifluoromethyl(p, 0), &[M::MetaTrifluoromethylFluoroArene]),
                when(|p| carboxyl_carbon(p, 0), &[M::MetaCarboxyFluoroArene]),
                when(|p| ester_carbon(p, 0), &[M::MetaAlkoxycarbonylFluoroArene]),
                when(|p| amide_carbon(p, 0), &[M::MetaCarbamoylFluoroArene]),
                when(|p| aldehyde_carbon(p, 0), &[M::MetaFormylFluoroArene]),
                when(|p| ketone_carbon(p, 0), &[M::MetaAcylFluoroArene]),
                when(|p| cyano(p, 0), &[M::MetaCyanoFluoroArene]),
                when(|p| vinyl(p, 0), &[M::MetaVinylFluoroArene]),
                when(|p| alkyl(p, 0), &[M::MetaAlkylFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:C-Cl",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::MetaMethylChloroArene]),
                when(|p| hydroxymethyl(p, 0), &[M::MetaHydroxymethylChloroArene]),
                when(|p| trifluoromethyl(p, 0), &[M::MetaTrifluoromethylChloroArene]),
                when(|p| carboxyl_carbon(p, 0), &[M::MetaCarboxyChloroArene]),
                when(|p| ester_carbon(p, 0), &[M::MetaAlkoxycarbonylChloroArene]),
                when(|p| amide_carbon(p, 0), &[M::MetaCarbamoylChloroArene]),
                when(|p| aldehyde_carbon(p, 0), &[M::MetaFormylChloroArene]),
                when(|p| ketone_carbon(p, 0), &[M::MetaAcylChloroArene]),
                when(|p| cyano(p, 0), &[M::MetaCyanoChloroArene]),
                when(|p| vinyl(p, 0), &[M::MetaVinylChloroArene]),
                when(|p| alkyl(p, 0), &[M::MetaAlkylChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C:C-C",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 4), &[M::MetaMethylBromoArene]),
                when(|p| hydroxymethyl(p, 4), &[M::MetaHydroxymethylBromoArene]),
                when(|p| trifluoromethyl(p, 4), &[M::MetaTrifluoromethylBromoArene]),
                when(|p| carboxyl_carbon(p, 4), &[M::MetaCarboxyBromoArene]),
                when(|p| ester_carbon(p, 4), &[M::MetaAlkoxycarbonylBromoArene]),
                when(|p| amide_carbon(p, 4), &[M::MetaCarbamoylBromoArene]),
                when(|p| aldehyde_carbon(p, 4), &[M::MetaFormylBromoArene]),
                when(|p| ketone_carbon(p, 4), &[M::MetaAcylBromoArene]),
                when(|p| cyano(p, 4), &[M::MetaCyanoBromoArene]),
                when(|p| vinyl(p, 4), &[M::MetaVinylBromoArene]),
                when(|p| alkyl(p, 4), &[M::MetaAlkylBromoArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::MetaMethylIodoArene]),
                when(|p| hydroxymethyl(p, 0), &[M::MetaHydroxymethylIodoArene]),
                when(|p| trifluoromethyl(p, 0), &[M::MetaTrifluoromethylIodoArene]),
                when(|p| carboxyl_carbon(p, 0), &[M::MetaCarboxyIodoArene]),
                when(|p| ester_carbon(p, 0), &[M::MetaAlkoxycarbonylIodoArene]),
                when(|p| amide_carbon(p, 0), &[M::MetaCarbamoylIodoArene]),
                when(|p| aldehyde_carbon(p, 0), &[M::MetaFormylIodoArene]),
                when(|p| ketone_carbon(p, 0), &[M::MetaAcylIodoArene]),
                when(|p| cyano(p, 0), &[M::MetaCyanoIodoArene]),
                when(|p| vinyl(p, 0), &[M::MetaVinylIodoArene]),
                when(|p| alkyl(p, 0), &[M::MetaAlkylIodoArene]),
            ]),
        ])],
    );

    t.extend(
        "O-C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| ends_pair(p, methoxy, ether_oxygen), &[M::MetaMethoxyAlkoxyArene]),
                when(|p| ends_pair(p, methoxy, ester_oxygen), &[M::MetaMethoxyAcyloxyArene]),
                when(|p| both_ends(p, ether_oxygen), &[M::MetaDialkoxyArene]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::MetaAlkoxyAcyloxyArene]),
                when(|p| both_ends(p, ester_oxygen), &[M::MetaDiacyloxyArene]),
            ]),
        ])],
    );

    t.add(
        "N-C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4) && primary_amine(p, 0), &[M::MetaHydroxyAminoArene]),
                when(|p| hydroxyl(p, 4) && substituted_amine(p, 0), &[M::MetaHydroxyAlkylaminoArene]),
                when(|p| hydroxyl(p, 4) && amide_nitrogen(p, 0), &[M::MetaHydroxyAcylaminoArene]),
                when(|p| hydroxyl(p, 4) && nitro(p, 0), &[M::MetaHydroxyNitroArene]),
                when(|p| methoxy(p, 4) && primary_amine(p, 0), &[M::MetaMethoxyAminoArene]),
                when(|p| methoxy(p, 4) && substituted_amine(p, 0), &[M::MetaMethoxyAlkylaminoArene]),
                when(|p| methoxy(p, 4) && amide_nitrogen(p, 0), &[M::MetaMethoxyAcylaminoArene]),
                when(|p| methoxy(p, 4) && nitro(p, 0), &[M::MetaMethoxyNitroArene]),
                when(|p| ether_oxygen(p, 4) && primary_amine(p, 0), &[M::MetaAlkoxyAminoArene]),
                when(|p| ether_oxygen(p, 4) && substituted_amine(p, 0), &[M::MetaAlkoxyAlkylaminoArene]),
                when(|p| ether_oxygen(p, 4) && amide_nitrogen(p, 0), &[M::MetaAlkoxyAcylaminoArene]),
                when(|p| ether_oxygen(p, 4) && nitro(p, 0), &[M::MetaAlkoxyNitroArene]),
                when(|p| ester_oxygen(p, 4) && primary_amine(p, 0), &[M::MetaAcyloxyAminoArene]),
                when(|p| ester_oxygen(p, 4) && substituted_amine(p, 0), &[M::MetaAcyloxyAlkylaminoArene]),
                when(|p| ester_oxygen(p, 4) && amide_nitrogen(p, 0), &[M::MetaAcyloxyAcylaminoArene]),
                when(|p| ester_oxygen(p, 4) && nitro(p, 0), &[M::MetaAcyloxyNitroArene]),
            ]),
        ])],
    );

    t.add(
        "O-C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 4), &[M::MetaHydroxyMercaptoArene]),
                when(|p| hydroxyl(p, 0) && thioether(p, 4), &[M::MetaHydroxyAlkylthioArene]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 4), &[M::MetaHydroxySulfonylArene]),
                when(|p| methoxy(p, 0) && thiol(p, 4), &[M::MetaMethoxyMercaptoArene]),
                when(|p| methoxy(p, 0) && thioether(p, 4), &[M::MetaMethoxyAlkylthioArene]),
                when(|p| methoxy(p, 0) && sulfonyl(p, 4), &[M::MetaMethoxySulfonylArene]),
                when(|p| ether_oxygen(p, 0) && thiol(p, 4), &[M::MetaAlkoxyMercaptoArene]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 4), &[M::MetaAlkoxyAlkylthioArene]),
                when(|p| ether_oxygen(p, 0) && sulfonyl(p, 4), &[M::MetaAlkoxySulfonylArene]),
                when(|p| ester_oxygen(p, 0) && thiol(p, 4), &[M::MetaAcyloxyMercaptoArene]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 4), &[M::MetaAcyloxyAlkylthioArene]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 4), &[M::MetaAcyloxySulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4), &[M::MetaHydroxyFluoroArene]),
                when(|p| methoxy(p, 4), &[M::MetaMethoxyFluoroArene]),
                when(|p| ether_oxygen(p, 4), &[M::MetaAlkoxyFluoroArene]),
                when(|p| ester_oxygen(p, 4), &[M::MetaAcyloxyFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "Cl-C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4), &[M::MetaHydroxyChloroArene]),
                when(|p| methoxy(p, 4), &[M::MetaMethoxyChloroArene]),
                when(|p| ether_oxygen(p, 4), &[M::MetaAlkoxyChloroArene]),
                when(|p| ester_oxygen(p, 4), &[M::MetaAcyloxyChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4), &[M::MetaHydroxyBromoArene]),
                when(|p| methoxy(p, 4), &[M::MetaMethoxyBromoArene]),
                when(|p| ether_oxygen(p, 4), &[M::MetaAlkoxyBromoArene]),
                when(|p| ester_oxygen(p, 4), &[M::MetaAcyloxyBromoArene]),
            ]),
        ])],
    );

    t.add(
        "I-C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4), &[M::MetaHydroxyIodoArene]),
                when(|p| methoxy(p, 4), &[M::MetaMethoxyIodoArene]),
                when(|p| ether_oxygen(p, 4), &[M::MetaAlkoxyIodoArene]),
                when(|p| ester_oxygen(p, 4), &[M::MetaAcyloxyIodoArene]),
            ]),
        ])],
    );

    t.add(
        "N-C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, primary_amine), &[M::MetaDiaminoArene]),
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::MetaAminoAlkylaminoArene]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::MetaAminoAcylaminoArene]),
                when(|p| ends_pair(p, primary_amine, nitro), &[M::MetaAminoNitroArene]),
                when(|p| both_ends(p, substituted_amine), &[M::MetaDialkylaminoArene]),
                when(|p| ends_pair(p, substituted_amine, amide_nitrogen), &[M::MetaAlkylaminoAcylaminoArene]),
                when(|p| ends_pair(p, substituted_amine, nitro), &[M::MetaAlkylaminoNitroArene]),
                when(|p| both_ends(p, amide_nitrogen), &[M::MetaDiacylaminoArene]),
                when(|p| ends_pair(p, amide_nitrogen, nitro), &[M::MetaAcylaminoNitroArene]),
                when(|p| both_ends(p, nitro), &[M::MetaDinitroArene]),
            ]),
        ])],
    );

    t.add(
        "N-C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 4), &[M::MetaAminoMercaptoArene]),
                when(|p| primary_amine(p, 0) && thioether(p, 4), &[M::MetaAminoAlkylthioArene]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 4), &[M::MetaAminoSulfonylArene]),
                when(|p| substituted_amine(p, 0) && thiol(p, 4), &[M::MetaAlkylaminoMercaptoArene]),
                when(|p| substituted_amine(p, 0) && thioether(p, 4), &[M::MetaAlkylaminoAlkylthioArene]),
                when(|p| substituted_amine(p, 0) && sulfonyl(p, 4), &[M::MetaAlkylaminoSulfonylArene]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 4), &[M::MetaAcylaminoMercaptoArene]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 4), &[M::MetaAcylaminoAlkylthioArene]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 4), &[M::MetaAcylaminoSulfonylArene]),
                when(|p| nitro(p, 0) && thiol(p, 4), &[M::MetaNitroMercaptoArene]),
                when(|p| nitro(p, 0) && thioether(p, 4), &[M::MetaNitroAlkylthioArene]),
                when(|p| nitro(p, 0) && sulfonyl(p, 4), &[M::MetaNitroSulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 4), &[M::MetaAminoFluoroArene]),
                when(|p| substituted_amine(p, 4), &[M::MetaAlkylaminoFluoroArene]),
                when(|p| amide_nitrogen(p, 4), &[M::MetaAcylaminoFluoroArene]),
                when(|p| nitro(p, 4), &[M::MetaNitroFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "Cl-C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 4), &[M::MetaAminoChloroArene]),
                when(|p| substituted_amine(p, 4), &[M::MetaAlkylaminoChloroArene]),
                when(|p| amide_nitrogen(p, 4), &[M::MetaAcylaminoChloroArene]),
                when(|p| nitro(p, 4), &[M::MetaNitroChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 4), &[M::MetaAminoBromoArene]),
                when(|p| substituted_amine(p, 4), &[M::MetaAlkylaminoBromoArene]),
                when(|p| amide_nitrogen(p, 4), &[M::MetaAcylaminoBromoArene]),
                when(|p| nitro(p, 4), &[M::MetaNitroBromoArene]),
            ]),
        ])],
    );

    t.add(
        "I-C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 4), &[M::MetaAminoIodoArene]),
                when(|p| substituted_amine(p, 4), &[M::MetaAlkylaminoIodoArene]),
                when(|p| amide_nitrogen(p, 4), &[M::MetaAcylaminoIodoArene]),
                when(|p| nitro(p, 4), &[M::MetaNitroIodoArene]),
            ]),
        ])],
    );

    t.add(
        "S-C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::MetaDimercaptoArene]),
                when(|p| ends_pair(p, thiol, thioether), &[M::MetaMercaptoAlkylthioArene]),
                when(|p| ends_pair(p, thiol, sulfonyl), &[M::MetaMercaptoSulfonylArene]),
                when(|p| both_ends(p, thioether), &[M::MetaDialkylthioArene]),
                when(|p| ends_pair(p, thioether, sulfonyl), &[M::MetaAlkylthioSulfonylArene]),
                when(|p| both_ends(p, sulfonyl), &[M::MetaDisulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::MetaMercaptoFluoroArene]),
                when(|p| thioether(p, 4), &[M::MetaAlkylthioFluoroArene]),
                when(|p| sulfonyl(p, 4), &[M::MetaSulfonylFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "Cl-C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::MetaMercaptoChloroArene]),
                when(|p| thioether(p, 4), &[M::MetaAlkylthioChloroArene]),
                when(|p| sulfonyl(p, 4), &[M::MetaSulfonylChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::MetaMercaptoBromoArene]),
                when(|p| thioether(p, 4), &[M::MetaAlkylthioBromoArene]),
                when(|p| sulfonyl(p, 4), &[M::MetaSulfonylBromoArene]),
            ]),
        ])],
    );

    t.add(
        "I-C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::MetaMercaptoIodoArene]),
                when(|p| thioether(p, 4), &[M::MetaAlkylthioIodoArene]),
                when(|p| sulfonyl(p, 4), &[M::MetaSulfonylIodoArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[M::MetaDifluoroArene])],
    );

    t.add(
        "Cl-C:C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[M::MetaFluoroChloroArene])],
    );

    t.add(
        "Br-C:C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[M::MetaFluoroBromoArene])],
    );

    t.add(
        "F-C:C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[M::MetaFluoroIodoArene])],
    );

    t.add(
        "Cl-C:C:C-Cl",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[M::MetaDichloroArene])],
    );

    t.add(
        "Br-C:C:C-Cl",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[M::MetaChloroBromoArene])],
    );

    t.add(
        "Cl-C:C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[M::MetaChloroIodoArene])],
    );

    t.add(
        "Br-C:C:C-Br",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[M::MetaDibromoArene])],
    );

    t.add(
        "Br-C:C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[M::MetaBromoIodoArene])],
    );

    t.add("I-C:C:C-I", clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 4, R::Benzene), &[M::MetaDiiodoArene])]);

    t.add(
        "C:C-C-C:C",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Benzene) && ring_run(p, 3, 5, R::Benzene) && !p.same_ring(1, 3),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| p.env(2).hydroxyl > 0, &[M::Benzhydrol]),
                when(|p| hydrogens(p, 2, 2), &[M::Diarylmethane]),
            ]),
        ])],
    );

    t.add(
        "C:C-S-C:C",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Benzene) && ring_run(p, 3, 5, R::Benzene) && !p.same_ring(1, 3),
            &[],
        ).then(clauses![
            when(|p| sulfonyl(p, 2), &[M::DiarylSulfone]),
        ])],
    );

    t.add(
        "C-C-C-C:C",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Benzene) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOnePhenylethane]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOnePhenylethane]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOnePhenylethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOnePhenylethane]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylOnePhenylethane]),
                    when(|p| cyano(p, 0), &[M::TwoCyanoOnePhenylethane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Benzene) && ketone_carbon(p, 2) && straight(p, 1, 2),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOnePhenylethanOneOne]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOnePhenylethanOneOne]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOnePhenylethanOneOne]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOnePhenylethanOneOne]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylOnePhenylethanOneOne]),
                    when(|p| cyano(p, 0), &[M::TwoCyanoOnePhenylethanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 4), &[M::TwoHydroxyOnePhenylethane]),
                    when(|p| methoxy(p, 4), &[M::TwoMethoxyOnePhenylethane]),
                    when(|p| ether_oxygen(p, 4), &[M::TwoAlkoxyOnePhenylethane]),
                    when(|p| ester_oxygen(p, 4), &[M::TwoAcyloxyOnePhenylethane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 4),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 4), &[M::TwoHydroxyOnePhenylethanOneOne]),
                    when(|p| methoxy(p, 4), &[M::TwoMethoxyOnePhenylethanOneOne]),
                    when(|p| ether_oxygen(p, 4), &[M::TwoAlkoxyOnePhenylethanOneOne]),
                    when(|p| ester_oxygen(p, 4), &[M::TwoAcyloxyOnePhenylethanOneOne]),
                ]),
            ]),
        ],
    );

    t.extend(
        "C:C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 4), &[M::TwoAminoOnePhenylethane]),
                    when(|p| substituted_amine(p, 4), &[M::TwoAlkylaminoOnePhenylethane]),
                    when(|p| amide_nitrogen(p, 4), &[M::TwoAcylaminoOnePhenylethane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 4),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 4), &[M::TwoAminoOnePhenylethanOneOne]),
                    when(|p| substituted_amine(p, 4), &[M::TwoAlkylaminoOnePhenylethanOneOne]),
                    when(|p| amide_nitrogen(p, 4), &[M::TwoAcylaminoOnePhenylethanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 4), &[M::TwoMercaptoOnePhenylethane]),
                    when(|p| thioether(p, 4), &[M::TwoAlkylthioOnePhenylethane]),
                    when(|p| sulfonyl(p, 4), &[M::TwoSulfonylOnePhenylethane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 4),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 4), &[M::TwoMercaptoOnePhenylethanOneOne]),
                    when(|p| thioether(p, 4), &[M::TwoAlkylthioOnePhenylethanOneOne]),
                    when(|p| sulfonyl(p, 4), &[M::TwoSulfonylOnePhenylethanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 4),
                &[M::TwoFluoroOnePhenylethane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 4),
                &[M::TwoFluoroOnePhenylethanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 4),
                &[M::TwoChloroOnePhenylethane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 4),
                &[M::TwoChloroOnePhenylethanOneOne],
            ),
        ],
    );

    t.add(
        "Br-C-C-C:C",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Benzene) && straight(p, 1, 3),
                &[M::TwoBromoOnePhenylethane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Benzene) && ketone_carbon(p, 2) && straight(p, 1, 2),
                &[M::TwoBromoOnePhenylethanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 4),
                &[M::TwoIodoOnePhenylethane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 4),
                &[M::TwoIodoOnePhenylethanOneOne],
            ),
        ],
    );

    t.add(
        "C-C-C:C:C",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Benzene) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOnePhenylmethane]),
                    when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOnePhenylmethane]),
                    when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOnePhenylmethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOnePhenylmethane]),
                    when(|p| ketone_carbon(p, 0), &[M::OneAcylOnePhenylmethane]),
                    when(|p| cyano(p, 0), &[M::OneCyanoOnePhenylmethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 4), &[M::OneHydroxyOnePhenylmethane]),
                    when(|p| methoxy(p, 4), &[M::OneMethoxyOnePhenylmethane]),
                    when(|p| ether_oxygen(p, 4), &[M::OneAlkoxyOnePhenylmethane]),
                    when(|p| ester_oxygen(p, 4), &[M::OneAcyloxyOnePhenylmethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 4), &[M::OneAminoOnePhenylmethane]),
                    when(|p| substituted_amine(p, 4), &[M::OneAlkylaminoOnePhenylmethane]),
                    when(|p| amide_nitrogen(p, 4), &[M::OneAcylaminoOnePhenylmethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 4), &[M::OneMercaptoOnePhenylmethane]),
                    when(|p| thioether(p, 4), &[M::OneAlkylthioOnePhenylmethane]),
                    when(|p| sulfonyl(p, 4), &[M::OneSulfonylOnePhenylmethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 4),
            &[M::OneFluoroOnePhenylmethane],
        )],
    );

    t.add(
        "C:C:C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 4),
            &[M::OneChloroOnePhenylmethane],
        )],
    );

    t.add(
        "Br-C-C:C:C",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Benzene) && straight(p, 1, 2),
            &[M::OneBromoOnePhenylmethane],
        )],
    );

    t.add(
        "C:C:C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 4),
            &[M::OneIodoOnePhenylmethane],
        )],
    );

    t.add(
        "C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Benzene) && ether_oxygen(p, 2) && straight(p, 1, 2),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOnePhenoxymethane]),
                when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOnePhenoxymethane]),
                when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOnePhenoxymethane]),
                when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOnePhenoxymethane]),
                when(|p| ketone_carbon(p, 0), &[M::OneAcylOnePhenoxymethane]),
                when(|p| cyano(p, 0), &[M::OneCyanoOnePhenoxymethane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 4),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4), &[M::OneHydroxyOnePhenoxymethane]),
                when(|p| methoxy(p, 4), &[M::OneMethoxyOnePhenoxymethane]),
                when(|p| ether_oxygen(p, 4), &[M::OneAlkoxyOnePhenoxymethane]),
                when(|p| ester_oxygen(p, 4), &[M::OneAcyloxyOnePhenoxymethane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 4),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 4), &[M::OneAminoOnePhenoxymethane]),
                when(|p| substituted_amine(p, 4), &[M::OneAlkylaminoOnePhenoxymethane]),
                when(|p| amide_nitrogen(p, 4), &[M::OneAcylaminoOnePhenoxymethane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 4),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::OneMercaptoOnePhenoxymethane]),
                when(|p| thioether(p, 4), &[M::OneAlkylthioOnePhenoxymethane]),
                when(|p| sulfonyl(p, 4), &[M::OneSulfonylOnePhenoxymethane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-F",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 4),
            &[M::OneFluoroOnePhenoxymethane],
        )],
    );

    t.add(
        "C:C-O-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 4),
            &[M::OneChloroOnePhenoxymethane],
        )],
    );

    t.add(
        "Br-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Benzene) && ether_oxygen(p, 2) && straight(p, 1, 2),
            &[M::OneBromoOnePhenoxymethane],
        )],
    );

    t.add(
        "C:C-O-C-I",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 4),
            &[M::OneIodoOnePhenoxymethane],
        )],
    );
}

fn six(t: &mut RuleTable) {
    t.add(
        "C-C:C:C:C-C",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, methyl), &[M::ParaDimethylArene]),
                when(|p| ends_pair(p, methyl, hydroxymethyl), &[M::ParaMethylHydroxymethylArene]),
                when(|p| ends_pair(p, methyl, trifluoromethyl), &[M::ParaMethylTrifluoromethylArene]),
                when(|p| ends_pair(p, methyl, carboxyl_carbon), &[M::ParaMethylCarboxyArene]),
                when(|p| ends_pair(p, methyl, ester_carbon), &[M::ParaMethylAlkoxycarbonylArene]),
                when(|p| ends_pair(p, methyl, amide_carbon), &[M::ParaMethylCarbamoylArene]),
                when(|p| ends_pair(p, methyl, aldehyde_carbon), &[M::ParaMethylFormylArene]),
                when(|p| ends_pair(p, methyl, ketone_carbon), &[M::ParaMethylAcylArene]),
                when(|p| ends_pair(p, methyl, cyano), &[M::ParaMethylCyanoArene]),
                when(|p| ends_pair(p, methyl, vinyl), &[M::ParaMethylVinylArene]),
                when(|p| ends_pair(p, methyl, alkyl), &[M::ParaMethylAlkylArene]),
                when(|p| both_ends(p, hydroxymethyl), &[M::ParaDihydroxymethylArene]),
                when(|p| ends_pair(p, hydroxymethyl, trifluoromethyl), &[M::ParaHydroxymethylTrifluoromethylArene]),
                when(|p| ends_pair(p, hydroxymethyl, carboxyl_carbon), &[M::ParaHydroxymethylCarboxyArene]),
                when(|p| ends_pair(p, hydroxymethyl, ester_carbon), &[M::ParaHydroxymethylAlkoxycarbonylArene]),
                when(|p| ends_pair(p, hydroxymethyl, amide_carbon), &[M::ParaHydroxymethylCarbamoylArene]),
                when(|p| ends_pair(p, hydroxymethyl, aldehyde_carbon), &[M::ParaHydroxymethylFormylArene]),
                when(|p| ends_pair(p, hydroxymethyl, ketone_carbon), &[M::ParaHydroxymethylAcylArene]),
                when(|p| ends_pair(p, hydroxymethyl, cyano), &[M::ParaHydroxymethylCyanoArene]),
                when(|p| ends_pair(p, hydroxymethyl, vinyl), &[M::ParaHydroxymethylVinylArene]),
                when(|p| ends_pair(p, hydroxymethyl, alkyl), &[M::ParaHydroxymethylAlkylArene]),
                when(|p| both_ends(p, trifluoromethyl), &[M::ParaDitrifluoromethylArene]),
                when(|p| ends_pair(p, trifluoromethyl, carboxyl_carbon), &[M::ParaTrifluoromethylCarboxyArene]),
                when(|p| ends_pair(p, trifluoromethyl, ester_carbon), &[M::ParaTrifluoromethylAlkoxycarbonylArene]),
                when(|p| ends_pair(p, trifluoromethyl, amide_carbon), &[M::ParaTrifluoromethylCarbamoylArene]),
                when(|p| ends_pair(p, trifluoromethyl, aldehyde_carbon), &[M::ParaTrifluoromethylFormylArene]),
                when(|p| ends_pair(p, trifluoromethyl, ketone_carbon), &[M::ParaTrifluoromethylAcylArene]),
                when(|p| ends_pair(p, trifluoromethyl, cyano), &[M::ParaTrifluoromethylCyanoArene]),
                when(|p| ends_pair(p, trifluoromethyl, vinyl), &[M::ParaTrifluoromethylVinylArene]),
                when(|p| ends_pair(p, trifluoromethyl, alkyl), &[M::ParaTrifluoromethylAlkylArene]),
                when(|p| both_ends(p, carboxyl_carbon), &[M::ParaDicarboxyArene]),
                when(|p| ends_pair(p, carboxyl_carbon, ester_carbon), &[M::ParaCarboxyAlkoxycarbonylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, amide_carbon), &[M::ParaCarboxyCarbamoylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, aldehyde_carbon), &[M::ParaCarboxyFormylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, ketone_carbon), &[M::ParaCarboxyAcylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, cyano), &[M::ParaCarboxyCyanoArene]),
                when(|p| ends_pair(p, carboxyl_carbon, vinyl), &[M::ParaCarboxyVinylArene]),
                when(|p| ends_pair(p, carboxyl_carbon, alkyl), &[M::ParaCarboxyAlkylArene]),
                when(|p| both_ends(p, ester_carbon), &[M::ParaDialkoxycarbonylArene]),
                when(|p| ends_pair(p, ester_carbon, amide_carbon), &[M::ParaAlkoxycarbonylCarbamoylArene]),
                when(|p| ends_pair(p, ester_carbon, aldehyde_carbon), &[M::ParaAlkoxycarbonylFormylArene]),
                when(|p| ends_pair(p, ester_carbon, ketone_carbon), &[M::ParaAlkoxycarbonylAcylArene]),
                when(|p| ends_pair(p, ester_carbon, cyano), &[M::ParaAlkoxycarbonylCyanoArene]),
                when(|p| ends_pair(p, ester_carbon, vinyl), &[M::ParaAlkoxycarbonylVinylArene]),
                when(|p| ends_pair(p, ester_carbon, alkyl), &[M::ParaAlkoxycarbonylAlkylArene]),
                when(|p| both_ends(p, amide_carbon), &[M::ParaDicarbamoylArene]),
                when(|p| ends_pair(p, amide_carbon, aldehyde_carbon), &[M::ParaCarbamoylFormylArene]),
                when(|p| ends_pair(p, amide_carbon, ketone_carbon), &[M::ParaCarbamoylAcylArene]),
                when(|p| ends_pair(p, amide_carbon, cyano), &[M::ParaCarbamoylCyanoArene]),
                when(|p| ends_pair(p, amide_carbon, vinyl), &[M::ParaCarbamoylVinylArene]),
                when(|p| ends_pair(p, amide_carbon, alkyl), &[M::ParaCarbamoylAlkylArene]),
                when(|p| both_ends(p, aldehyde_carbon), &[M::ParaDiformylArene]),
                when(|p| ends_pair(p, aldehyde_carbon, ketone_carbon), &[M::ParaFormylAcylArene]),
                when(|p| ends_pair(p, aldehyde_carbon, cyano), &[M::ParaFormylCyanoArene]),
                when(|p| ends_pair(p, aldehyde_carbon, vinyl), &[M::ParaFormylVinylArene]),
                when(|p| ends_pair(p, aldehyde_carbon, alkyl), &[M::ParaFormylAlkylArene]),
                when(|p| both_ends(p, ketone_carbon), &[M::ParaDiacylArene]),
                when(|p| ends_pair(p, ketone_carbon, cyano), &[M::ParaAcylCyanoArene]),
                when(|p| ends_pair(p, ketone_carbon, vinyl), &[M::ParaAcylVinylArene]),
                when(|p| ends_pair(p, ketone_carbon, alkyl), &[M::ParaAcylAlkylArene]),
                when(|p| both_ends(p, cyano), &[M::ParaDicyanoArene]),
                when(|p| ends_pair(p, cyano, vinyl), &[M::ParaCyanoVinylArene]),
                when(|p| ends_pair(p, cyano, alkyl), &[M::ParaCyanoAlkylArene]),
                when(|p| both_ends(p, vinyl), &[M::ParaDivinylArene]),
                when(|p| ends_pair(p, vinyl, alkyl), &[M::ParaVinylAlkylArene]),
                when(|p| both_ends(p, alkyl), &[M::ParaDialkylArene]),
            ]),
        ])],
    );

    t.extend(
        "C-C:C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0) && methoxy(p, 5), &[M::ParaMethylMethoxyArene]),
                when(|p| methyl(p, 0) && ether_oxygen(p, 5), &[M::ParaMethylAlkoxyArene]),
                when(|p| methyl(p, 0) && ester_oxygen(p, 5), &[M::ParaMethylAcyloxyArene]),
                when(|p| hydroxymethyl(p, 0) && methoxy(p, 5), &[M::ParaHydroxymethylMethoxyArene]),
                when(|p| hydroxymethyl(p, 0) && ether_oxygen(p, 5), &[M::ParaHydroxymethylAlkoxyArene]),
                when(|p| hydroxymethyl(p, 0) && ester_oxygen(p, 5), &[M::ParaHydroxymethylAcyloxyArene]),
                when(|p| trifluoromethyl(p, 0) && hydroxyl(p, 5), &[M::ParaTrifluoromethylHydroxyArene]),
                when(|p| trifluoromethyl(p, 0) && methoxy(p, 5), &[M::ParaTrifluoromethylMethoxyArene]),
                when(|p| trifluoromethyl(p, 0) && ether_oxygen(p, 5), &[M::ParaTrifluoromethylAlkoxyArene]),
                when(|p| trifluoromethyl(p, 0) && ester_oxygen(p, 5), &[M::ParaTrifluoromethylAcyloxyArene]),
                when(|p| carboxyl_carbon(p, 0) && methoxy(p, 5), &[M::ParaCarboxyMethoxyArene]),
                when(|p| carboxyl_carbon(p, 0) && ether_oxygen(p, 5), &[M::ParaCarboxyAlkoxyArene]),
                when(|p| carboxyl_carbon(p, 0) && ester_oxygen(p, 5), &[M::ParaCarboxyAcyloxyArene]),
                when(|p| ester_carbon(p, 0) && methoxy(p, 5), &[M::ParaAlkoxycarbonylMethoxyArene]),
                when(|p| ester_carbon(p, 0) && ether_oxygen(p, 5), &[M::ParaAlkoxycarbonylAlkoxyArene]),
                when(|p| ester_carbon(p, 0) && ester_oxygen(p, 5), &[M::ParaAlkoxycarbonylAcyloxyArene]),
                when(|p| amide_carbon(p, 0) && methoxy(p, 5), &[M::ParaCarbamoylMethoxyArene]),
                when(|p| amide_carbon(p, 0) && ether_oxygen(p, 5), &[M::ParaCarbamoylAlkoxyArene]),
                when(|p| amide_carbon(p, 0) && ester_oxygen(p, 5), &[M::ParaCarbamoylAcyloxyArene]),
                when(|p| aldehyde_carbon(p, 0) && methoxy(p, 5), &[M::ParaFormylMethoxyArene]),
                when(|p| aldehyde_carbon(p, 0) && ether_oxygen(p, 5), &[M::ParaFormylAlkoxyArene]),
                when(|p| aldehyde_carbon(p, 0) && ester_oxygen(p, 5), &[M::ParaFormylAcyloxyArene]),
                when(|p| ketone_carbon(p, 0) && methoxy(p, 5), &[M::ParaAcylMethoxyArene]),
                when(|p| ketone_carbon(p, 0) && ether_oxygen(p, 5), &[M::ParaAcylAlkoxyArene]),
                when(|p| ketone_carbon(p, 0) && ester_oxygen(p, 5), &[M::ParaAcylAcyloxyArene]),
                when(|p| cyano(p, 0) && hydroxyl(p, 5), &[M::ParaCyanoHydroxyArene]),
                when(|p| cyano(p, 0) && methoxy(p, 5), &[M::ParaCyanoMethoxyArene]),
                when(|p| cyano(p, 0) && ether_oxygen(p, 5), &[M::ParaCyanoAlkoxyArene]),
                when(|p| cyano(p, 0) && ester_oxygen(p, 5), &[M::ParaCyanoAcyloxyArene]),
                when(|p| vinyl(p, 0) && hydroxyl(p, 5), &[M::ParaVinylHydroxyArene]),
                when(|p| vinyl(p, 0) && ether_oxygen(p, 5), &[M::ParaVinylAlkoxyArene]),
                when(|p| vinyl(p, 0) && ester_oxygen(p, 5), &[M::ParaVinylAcyloxyArene]),
                when(|p| alkyl(p, 0) && methoxy(p, 5), &[M::ParaAlkylMethoxyArene]),
                when(|p| alkyl(p, 0) && ether_oxygen(p, 5), &[M::ParaAlkylAlkoxyArene]),
                when(|p| alkyl(p, 0) && ester_oxygen(p, 5), &[M::ParaAlkylAcyloxyArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0) && primary_amine(p, 5), &[M::ParaMethylAminoArene]),
                when(|p| methyl(p, 0) && substituted_amine(p, 5), &[M::ParaMethylAlkylaminoArene]),
                when(|p| methyl(p, 0) && amide_nitrogen(p, 5), &[M::ParaMethylAcylaminoArene]),
                when(|p| methyl(p, 0) && nitro(p, 5), &[M::ParaMethylNitroArene]),
                when(|p| hydroxymethyl(p, 0) && primary_amine(p, 5), &[M::ParaHydroxymethylAminoArene]),
                when(|p| hydroxymethyl(p, 0) && substituted_amine(p, 5), &[M::ParaHydroxymethylAlkylaminoArene]),
                when(|p| hydroxymethyl(p, 0) && amide_nitrogen(p, 5), &[M::ParaHydroxymethylAcylaminoArene]),
                when(|p| hydroxymethyl(p, 0) && nitro(p, 5), &[M::ParaHydroxymethylNitroArene]),
                when(|p| trifluoromethyl(p, 0) && primary_amine(p, 5), &[M::ParaTrifluoromethylAminoArene]),
                when(|p| trifluoromethyl(p, 0) && substituted_amine(p, 5), &[M::ParaTrifluoromethylAlkylaminoArene]),
                when(|p| trifluoromethyl(p, 0) && amide_nitrogen(p, 5), &[M::ParaTrifluoromethylAcylaminoArene]),
                when(|p| trifluoromethyl(p, 0) && nitro(p, 5), &[M::ParaTrifluoromethylNitroArene]),
                when(|p| carboxyl_carbon(p, 0) && primary_amine(p, 5), &[M::ParaCarboxyAminoArene]),
                when(|p| carboxyl_carbon(p, 0) && substituted_amine(p, 5), &[M::ParaCarboxyAlkylaminoArene]),
                when(|p| carboxyl_carbon(p, 0) && amide_nitrogen(p, 5), &[M::ParaCarboxyAcylaminoArene]),
                when(|p| carboxyl_carbon(p, 0) && nitro(p, 5), &[M::ParaCarboxyNitroArene]),
                when(|p| ester_carbon(p, 0) && primary_amine(p, 5), &[M::ParaAlkoxycarbonylAminoArene]),
                when(|p| ester_carbon(p, 0) && substituted_amine(p, 5), &[M::ParaAlkoxycarbonylAlkylaminoArene]),
                when(|p| ester_carbon(p, 0) && amide_nitrogen(p, 5), &[M::ParaAlkoxycarbonylAcylaminoArene]),
                when(|p| ester_carbon(p, 0) && nitro(p, 5), &[M::ParaAlkoxycarbonylNitroArene]),
                when(|p| amide_carbon(p, 0) && primary_amine(p, 5), &[M::ParaCarbamoylAminoArene]),
                when(|p| amide_carbon(p, 0) && substituted_amine(p, 5), &[M::ParaCarbamoylAlkylaminoArene]),
                when(|p| amide_carbon(p, 0) && amide_nitrogen(p, 5), &[M::ParaCarbamoylAcylaminoArene]),
                when(|p| amide_carbon(p, 0) && nitro(p, 5), &[M::ParaCarbamoylNitroArene]),
                when(|p| aldehyde_carbon(p, 0) && primary_amine(p, 5), &[M::ParaFormylAminoArene]),
                when(|p| aldehyde_carbon(p, 0) && substituted_amine(p, 5), &[M::ParaFormylAlkylaminoArene]),
                when(|p| aldehyde_carbon(p, 0) && amide_nitrogen(p, 5), &[M::ParaFormylAcylaminoArene]),
                when(|p| aldehyde_carbon(p, 0) && nitro(p, 5), &[M::ParaFormylNitroArene]),
                when(|p| ketone_carbon(p, 0) && primary_amine(p, 5), &[M::ParaAcylAminoArene]),
                when(|p| ketone_carbon(p, 0) && substituted_amine(p, 5), &[M::ParaAcylAlkylaminoArene]),
                when(|p| ketone_carbon(p, 0) && amide_nitrogen(p, 5), &[M::ParaAcylAcylaminoArene]),
                when(|p| ketone_carbon(p, 0) && nitro(p, 5), &[M::ParaAcylNitroArene]),
                when(|p| cyano(p, 0) && primary_amine(p, 5), &[M::ParaCyanoAminoArene]),
                when(|p| cyano(p, 0) && substituted_amine(p, 5), &[M::ParaCyanoAlkylaminoArene]),
                when(|p| cyano(p, 0) && amide_nitrogen(p, 5), &[M::ParaCyanoAcylaminoArene]),
                when(|p| cyano(p, 0) && nitro(p, 5), &[M::ParaCyanoNitroArene]),
                when(|p| vinyl(p, 0) && primary_amine(p, 5), &[M::ParaVinylAminoArene]),
                when(|p| vinyl(p, 0) && substituted_amine(p, 5), &[M::ParaVinylAlkylaminoArene]),
                when(|p| vinyl(p, 0) && amide_nitrogen(p, 5), &[M::ParaVinylAcylaminoArene]),
                when(|p| vinyl(p, 0) && nitro(p, 5), &[M::ParaVinylNitroArene]),
                when(|p| alkyl(p, 0) && primary_amine(p, 5), &[M::ParaAlkylAminoArene]),
                when(|p| alkyl(p, 0) && substituted_amine(p, 5), &[M::ParaAlkylAlkylaminoArene]),
                when(|p| alkyl(p, 0) && amide_nitrogen(p, 5), &[M::ParaAlkylAcylaminoArene]),
                when(|p| alkyl(p, 0) && nitro(p, 5), &[M::ParaAlkylNitroArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0) && thiol(p, 5), &[M::ParaMethylMercaptoArene]),
                when(|p| methyl(p, 0) && thioether(p, 5), &[M::ParaMethylAlkylthioArene]),
                when(|p| methyl(p, 0) && sulfonyl(p, 5), &[M::ParaMethylSulfonylArene]),
                when(|p| hydroxymethyl(p, 0) && thiol(p, 5), &[M::ParaHydroxymethylMercaptoArene]),
                when(|p| hydroxymethyl(p, 0) && thioether(p, 5), &[M::ParaHydroxymethylAlkylthioArene]),
                when(|p| hydroxymethyl(p, 0) && sulfonyl(p, 5), &[M::ParaHydroxymethylSulfonylArene]),
                when(|p| trifluoromethyl(p, 0) && thiol(p, 5), &[M::ParaTrifluoromethylMercaptoArene]),
                when(|p| trifluoromethyl(p, 0) && thioether(p, 5), &[M::ParaTrifluoromethylAlkylthioArene]),
                when(|p| trifluoromethyl(p, 0) && sulfonyl(p, 5), &[M::ParaTrifluoromethylSulfonylArene]),
                when(|p| carboxyl_carbon(p, 0) && thiol(p, 5), &[M::ParaCarboxyMercaptoArene]),
                when(|p| carboxyl_carbon(p, 0) && thioether(p, 5), &[M::ParaCarboxyAlkylthioArene]),
                when(|p| carboxyl_carbon(p, 0) && sulfonyl(p, 5), &[M::ParaCarboxySulfonylArene]),
                when(|p| ester_carbon(p, 0) && thiol(p, 5), &[M::ParaAlkoxycarbonylMercaptoArene]),
                when(|p| ester_carbon(p, 0) && thioether(p, 5), &[M::ParaAlkoxycarbonylAlkylthioArene]),
                when(|p| ester_carbon(p, 0) && sulfonyl(p, 5), &[M::ParaAlkoxycarbonylSulfonylArene]),
                when(|p| amide_carbon(p, 0) && thiol(p, 5), &[M::ParaCarbamoylMercaptoArene]),
                when(|p| amide_carbon(p, 0) && thioether(p, 5), &[M::ParaCarbamoylAlkylthioArene]),
                when(|p| amide_carbon(p, 0) && sulfonyl(p, 5), &[M::ParaCarbamoylSulfonylArene]),
                when(|p| aldehyde_carbon(p, 0) && thiol(p, 5), &[M::ParaFormylMercaptoArene]),
                when(|p| aldehyde_carbon(p, 0) && thioether(p, 5), &[M::ParaFormylAlkylthioArene]),
                when(|p| aldehyde_carbon(p, 0) && sulfonyl(p, 5), &[M::ParaFormylSulfonylArene]),
                when(|p| ketone_carbon(p, 0) && thiol(p, 5), &[M::ParaAcylMercaptoArene]),
                when(|p| ketone_carbon(p, 0) && thioether(p, 5), &[M::ParaAcylAlkylthioArene]),
                when(|p| ketone_carbon(p, 0) && sulfonyl(p, 5), &[M::ParaAcylSulfonylArene]),
                when(|p| cyano(p, 0) && thiol(p, 5), &[M::ParaCyanoMercaptoArene]),
                when(|p| cyano(p, 0) && thioether(p, 5), &[M::ParaCyanoAlkylthioArene]),
                when(|p| cyano(p, 0) && sulfonyl(p, 5), &[M::ParaCyanoSulfonylArene]),
                when(|p| vinyl(p, 0) && thiol(p, 5), &[M::ParaVinylMercaptoArene]),
                when(|p| vinyl(p, 0) && thioether(p, 5), &[M::ParaVinylAlkylthioArene]),
                when(|p| vinyl(p, 0) && sulfonyl(p, 5), &[M::ParaVinylSulfonylArene]),
                when(|p| alkyl(p, 0) && thiol(p, 5), &[M::ParaAlkylMercaptoArene]),
                when(|p| alkyl(p, 0) && thioether(p, 5), &[M::ParaAlkylAlkylthioArene]),
                when(|p| alkyl(p, 0) && sulfonyl(p, 5), &[M::ParaAlkylSulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::ParaMethylFluoroArene]),
                when(|p| hydroxymethyl(p, 0), &[M::ParaHydroxymethylFluoroArene]),
                when(|p| trifluoromethyl(p, 0), &[M::ParaTrifluoromethylFluoroArene]),
                when(|p| carboxyl_carbon(p, 0), &[M::ParaCarboxyFluoroArene]),
                when(|p| ester_carbon(p, 0), &[M::ParaAlkoxycarbonylFluoroArene]),
                when(|p| amide_carbon(p, 0), &[M::ParaCarbamoylFluoroArene]),
                when(|p| aldehyde_carbon(p, 0), &[M::ParaFormylFluoroArene]),
                when(|p| ketone_carbon(p, 0), &[M::ParaAcylFluoroArene]),
                when(|p| cyano(p, 0), &[M::ParaCyanoFluoroArene]),
                when(|p| vinyl(p, 0), &[M::ParaVinylFluoroArene]),
                when(|p| alkyl(p, 0), &[M::ParaAlkylFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:C:C-Cl",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::ParaMethylChloroArene]),
                when(|p| hydroxymethyl(p, 0), &[M::ParaHydroxymethylChloroArene]),
                when(|p| trifluoromethyl(p, 0), &[M::ParaTrifluoromethylChloroArene]),
                when(|p| carboxyl_carbon(p, 0), &[M::ParaCarboxyChloroArene]),
                when(|p| ester_carbon(p, 0), &[M::ParaAlkoxycarbonylChloroArene]),
                when(|p| amide_carbon(p, 0), &[M::ParaCarbamoylChloroArene]),
                when(|p| aldehyde_carbon(p, 0), &[M::ParaFormylChloroArene]),
                when(|p| ketone_carbon(p, 0), &[M::ParaAcylChloroArene]),
                when(|p| cyano(p, 0), &[M::ParaCyanoChloroArene]),
                when(|p| vinyl(p, 0), &[M::ParaVinylChloroArene]),
                when(|p| alkyl(p, 0), &[M::ParaAlkylChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C:C:C-C",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 5), &[M::ParaMethylBromoArene]),
                when(|p| hydroxymethyl(p, 5), &[M::ParaHydroxymethylBromoArene]),
                when(|p| trifluoromethyl(p, 5), &[M::ParaTrifluoromethylBromoArene]),
                when(|p| carboxyl_carbon(p, 5), &[M::ParaCarboxyBromoArene]),
                when(|p| ester_carbon(p, 5), &[M::ParaAlkoxycarbonylBromoArene]),
                when(|p| amide_carbon(p, 5), &[M::ParaCarbamoylBromoArene]),
                when(|p| aldehyde_carbon(p, 5), &[M::ParaFormylBromoArene]),
                when(|p| ketone_carbon(p, 5), &[M::ParaAcylBromoArene]),
                when(|p| cyano(p, 5), &[M::ParaCyanoBromoArene]),
                when(|p| vinyl(p, 5), &[M::ParaVinylBromoArene]),
                when(|p| alkyl(p, 5), &[M::ParaAlkylBromoArene]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::ParaMethylIodoArene]),
                when(|p| hydroxymethyl(p, 0), &[M::ParaHydroxymethylIodoArene]),
                when(|p| trifluoromethyl(p, 0), &[M::ParaTrifluoromethylIodoArene]),
                when(|p| carboxyl_carbon(p, 0), &[M::ParaCarboxyIodoArene]),
                when(|p| ester_carbon(p, 0), &[M::ParaAlkoxycarbonylIodoArene]),
                when(|p| amide_carbon(p, 0), &[M::ParaCarbamoylIodoArene]),
                when(|p| aldehyde_carbon(p, 0), &[M::ParaFormylIodoArene]),
                when(|p| ketone_carbon(p, 0), &[M::ParaAcylIodoArene]),
                when(|p| cyano(p, 0), &[M::ParaCyanoIodoArene]),
                when(|p| vinyl(p, 0), &[M::ParaVinylIodoArene]),
                when(|p| alkyl(p, 0), &[M::ParaAlkylIodoArene]),
            ]),
        ])],
    );

    t.extend(
        "O-C:C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::ParaHydroxyAcyloxyArene]),
                when(|p| ends_pair(p, methoxy, ester_oxygen), &[M::ParaMethoxyAcyloxyArene]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::ParaAlkoxyAcyloxyArene]),
                when(|p| both_ends(p, ester_oxygen), &[M::ParaDiacyloxyArene]),
            ]),
        ])],
    );

    t.add(
        "N-C:C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 5) && primary_amine(p, 0), &[M::ParaHydroxyAminoArene]),
                when(|p| hydroxyl(p, 5) && substituted_amine(p, 0), &[M::ParaHydroxyAlkylaminoArene]),
                when(|p| hydroxyl(p, 5) && amide_nitrogen(p, 0), &[M::ParaHydroxyAcylaminoArene]),
                when(|p| hydroxyl(p, 5) && nitro(p, 0), &[M::ParaHydroxyNitroArene]),
                when(|p| methoxy(p, 5) && primary_amine(p, 0), &[M::ParaMethoxyAminoArene]),
                when(|p| methoxy(p, 5) && substituted_amine(p, 0), &[M::ParaMethoxyAlkylaminoArene]),
                when(|p| methoxy(p, 5) && amide_nitrogen(p, 0), &[M::ParaMethoxyAcylaminoArene]),
                when(|p| methoxy(p, 5) && nitro(p, 0), &[M::ParaMethoxyNitroArene]),
                when(|p| ether_oxygen(p, 5) && primary_amine(p, 0), &[M::ParaAlkoxyAminoArene]),
                when(|p| ether_oxygen(p, 5) && substituted_amine(p, 0), &[M::ParaAlkoxyAlkylaminoArene]),
                when(|p| ether_oxygen(p, 5) && amide_nitrogen(p, 0), &[M::ParaAlkoxyAcylaminoArene]),
                when(|p| ether_oxygen(p, 5) && nitro(p, 0), &[M::ParaAlkoxyNitroArene]),
                when(|p| ester_oxygen(p, 5) && primary_amine(p, 0), &[M::ParaAcyloxyAminoArene]),
                when(|p| ester_oxygen(p, 5) && substituted_amine(p, 0), &[M::ParaAcyloxyAlkylaminoArene]),
                when(|p| ester_oxygen(p, 5) && amide_nitrogen(p, 0), &[M::ParaAcyloxyAcylaminoArene]),
                when(|p| ester_oxygen(p, 5) && nitro(p, 0), &[M::ParaAcyloxyNitroArene]),
            ]),
        ])],
    );

    t.add(
        "O-C:C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 5), &[M::ParaHydroxyMercaptoArene]),
                when(|p| hydroxyl(p, 0) && thioether(p, 5), &[M::ParaHydroxyAlkylthioArene]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 5), &[M::ParaHydroxySulfonylArene]),
                when(|p| methoxy(p, 0) && thiol(p, 5), &[M::ParaMethoxyMercaptoArene]),
                when(|p| methoxy(p, 0) && thioether(p, 5), &[M::ParaMethoxyAlkylthioArene]),
                when(|p| methoxy(p, 0) && sulfonyl(p, 5), &[M::ParaMethoxySulfonylArene]),
                when(|p| ether_oxygen(p, 0) && thiol(p, 5), &[M::ParaAlkoxyMercaptoArene]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 5), &[M::ParaAlkoxyAlkylthioArene]),
                when(|p| ether_oxygen(p, 0) && sulfonyl(p, 5), &[M::ParaAlkoxySulfonylArene]),
                when(|p| ester_oxygen(p, 0) && thiol(p, 5), &[M::ParaAcyloxyMercaptoArene]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 5), &[M::ParaAcyloxyAlkylthioArene]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 5), &[M::ParaAcyloxySulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 5), &[M::ParaHydroxyFluoroArene]),
                when(|p| methoxy(p, 5), &[M::ParaMethoxyFluoroArene]),
                when(|p| ether_oxygen(p, 5), &[M::ParaAlkoxyFluoroArene]),
                when(|p| ester_oxygen(p, 5), &[M::ParaAcyloxyFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "Cl-C:C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 5), &[M::ParaHydroxyChloroArene]),
                when(|p| methoxy(p, 5), &[M::ParaMethoxyChloroArene]),
                when(|p| ether_oxygen(p, 5), &[M::ParaAlkoxyChloroArene]),
                when(|p| ester_oxygen(p, 5), &[M::ParaAcyloxyChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 5), &[M::ParaHydroxyBromoArene]),
                when(|p| methoxy(p, 5), &[M::ParaMethoxyBromoArene]),
                when(|p| ether_oxygen(p, 5), &[M::ParaAlkoxyBromoArene]),
                when(|p| ester_oxygen(p, 5), &[M::ParaAcyloxyBromoArene]),
            ]),
        ])],
    );

    t.add(
        "I-C:C:C:C-O",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 5), &[M::ParaHydroxyIodoArene]),
                when(|p| methoxy(p, 5), &[M::ParaMethoxyIodoArene]),
                when(|p| ether_oxygen(p, 5), &[M::ParaAlkoxyIodoArene]),
                when(|p| ester_oxygen(p, 5), &[M::ParaAcyloxyIodoArene]),
            ]),
        ])],
    );

    t.add(
        "N-C:C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, primary_amine), &[M::ParaDiaminoArene]),
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::ParaAminoAlkylaminoArene]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::ParaAminoAcylaminoArene]),
                when(|p| ends_pair(p, primary_amine, nitro), &[M::ParaAminoNitroArene]),
                when(|p| both_ends(p, substituted_amine), &[M::ParaDialkylaminoArene]),
                when(|p| ends_pair(p, substituted_amine, amide_nitrogen), &[M::ParaAlkylaminoAcylaminoArene]),
                when(|p| ends_pair(p, substituted_amine, nitro), &[M::ParaAlkylaminoNitroArene]),
                when(|p| both_ends(p, amide_nitrogen), &[M::ParaDiacylaminoArene]),
                when(|p| ends_pair(p, amide_nitrogen, nitro), &[M::ParaAcylaminoNitroArene]),
                when(|p| both_ends(p, nitro), &[M::ParaDinitroArene]),
            ]),
        ])],
    );

    t.add(
        "N-C:C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 5), &[M::ParaAminoMercaptoArene]),
                when(|p| primary_amine(p, 0) && thioether(p, 5), &[M::ParaAminoAlkylthioArene]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 5), &[M::ParaAminoSulfonylArene]),
                when(|p| substituted_amine(p, 0) && thiol(p, 5), &[M::ParaAlkylaminoMercaptoArene]),
                when(|p| substituted_amine(p, 0) && thioether(p, 5), &[M::ParaAlkylaminoAlkylthioArene]),
                when(|p| substituted_amine(p, 0) && sulfonyl(p, 5), &[M::ParaAlkylaminoSulfonylArene]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 5), &[M::ParaAcylaminoMercaptoArene]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 5), &[M::ParaAcylaminoAlkylthioArene]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 5), &[M::ParaAcylaminoSulfonylArene]),
                when(|p| nitro(p, 0) && thiol(p, 5), &[M::ParaNitroMercaptoArene]),
                when(|p| nitro(p, 0) && thioether(p, 5), &[M::ParaNitroAlkylthioArene]),
                when(|p| nitro(p, 0) && sulfonyl(p, 5), &[M::ParaNitroSulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 5), &[M::ParaAminoFluoroArene]),
                when(|p| substituted_amine(p, 5), &[M::ParaAlkylaminoFluoroArene]),
                when(|p| amide_nitrogen(p, 5), &[M::ParaAcylaminoFluoroArene]),
                when(|p| nitro(p, 5), &[M::ParaNitroFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "Cl-C:C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 5), &[M::ParaAminoChloroArene]),
                when(|p| substituted_amine(p, 5), &[M::ParaAlkylaminoChloroArene]),
                when(|p| amide_nitrogen(p, 5), &[M::ParaAcylaminoChloroArene]),
                when(|p| nitro(p, 5), &[M::ParaNitroChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 5), &[M::ParaAminoBromoArene]),
                when(|p| substituted_amine(p, 5), &[M::ParaAlkylaminoBromoArene]),
                when(|p| amide_nitrogen(p, 5), &[M::ParaAcylaminoBromoArene]),
                when(|p| nitro(p, 5), &[M::ParaNitroBromoArene]),
            ]),
        ])],
    );

    t.add(
        "I-C:C:C:C-N",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 5), &[M::ParaAminoIodoArene]),
                when(|p| substituted_amine(p, 5), &[M::ParaAlkylaminoIodoArene]),
                when(|p| amide_nitrogen(p, 5), &[M::ParaAcylaminoIodoArene]),
                when(|p| nitro(p, 5), &[M::ParaNitroIodoArene]),
            ]),
        ])],
    );

    t.add(
        "S-C:C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::ParaDimercaptoArene]),
                when(|p| ends_pair(p, thiol, thioether), &[M::ParaMercaptoAlkylthioArene]),
                when(|p| ends_pair(p, thiol, sulfonyl), &[M::ParaMercaptoSulfonylArene]),
                when(|p| both_ends(p, thioether), &[M::ParaDialkylthioArene]),
                when(|p| ends_pair(p, thioether, sulfonyl), &[M::ParaAlkylthioSulfonylArene]),
                when(|p| both_ends(p, sulfonyl), &[M::ParaDisulfonylArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::ParaMercaptoFluoroArene]),
                when(|p| thioether(p, 5), &[M::ParaAlkylthioFluoroArene]),
                when(|p| sulfonyl(p, 5), &[M::ParaSulfonylFluoroArene]),
            ]),
        ])],
    );

    t.add(
        "Cl-C:C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::ParaMercaptoChloroArene]),
                when(|p| thioether(p, 5), &[M::ParaAlkylthioChloroArene]),
                when(|p| sulfonyl(p, 5), &[M::ParaSulfonylChloroArene]),
            ]),
        ])],
    );

    t.add(
        "Br-C:C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::ParaMercaptoBromoArene]),
                when(|p| thioether(p, 5), &[M::ParaAlkylthioBromoArene]),
                when(|p| sulfonyl(p, 5), &[M::ParaSulfonylBromoArene]),
            ]),
        ])],
    );

    t.add(
        "I-C:C:C:C-S",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::ParaMercaptoIodoArene]),
                when(|p| thioether(p, 5), &[M::ParaAlkylthioIodoArene]),
                when(|p| sulfonyl(p, 5), &[M::ParaSulfonylIodoArene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C:C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[M::ParaDifluoroArene])],
    );

    t.add(
        "Cl-C:C:C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[M::ParaFluoroChloroArene])],
    );

    t.add(
        "Br-C:C:C:C-F",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[M::ParaFluoroBromoArene])],
    );

    t.add(
        "F-C:C:C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[M::ParaFluoroIodoArene])],
    );

    t.add(
        "Cl-C:C:C:C-Cl",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[M::ParaDichloroArene])],
    );

    t.add(
        "Br-C:C:C:C-Cl",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[M::ParaChloroBromoArene])],
    );

    t.add(
        "Cl-C:C:C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[M::ParaChloroIodoArene])],
    );

    t.add(
        "Br-C:C:C:C-Br",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[M::ParaDibromoArene])],
    );

    t.add(
        "Br-C:C:C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[M::ParaBromoIodoArene])],
    );

    t.add(
        "I-C:C:C:C-I",
        clauses![when(|p| exocyclic_ends(p) && ring_run(p, 1, 5, R::Benzene), &[M::ParaDiiodoArene])],
    );

    t.add(
        "C:C-C-C-C:C",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Benzene) && ring_run(p, 4, 6, R::Benzene) && !p.same_ring(1, 4),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| pair_at(p, 2, 3, ketone_carbon, |p, i| hydrogens(p, i, 2)), &[M::Deoxybenzoin]),
                when(|p| both_at(p, 2, 3, ketone_carbon), &[M::Benzil]),
                when(|p| p.env(2).hydroxyl > 0 && p.env(3).hydroxyl > 0, &[M::Hydrobenzoin]),
                when(|p| straight(p, 2, 4), &[M::Bibenzyl]),
            ]),
        ])],
    );

    t.add(
        "C:C-C-O-C:C",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Benzene) && ring_run(p, 4, 6, R::Benzene) && !p.same_ring(1, 4),
            &[],
        ).then(clauses![
            when(|p| ester_carbon(p, 2), &[M::ArylBenzoate]),
        ])],
    );

    t.add(
        "C:C-C-N-C:C",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Benzene) && ring_run(p, 4, 6, R::Benzene) && !p.same_ring(1, 4),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| amide_carbon(p, 2), &[M::Benzanilide]),
                when(|p| alkyl(p, 2), &[M::NBenzylaniline]),
            ]),
        ])],
    );

    t.add(
        "C:C-C#C-C:C",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Benzene) && ring_run(p, 4, 6, R::Benzene) && !p.same_ring(1, 4),
            &[M::Diphenylacetylene],
        )],
    );

    t.add(
        "C:C-C=N-C:C",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Benzene) && ring_run(p, 4, 6, R::Benzene) && !p.same_ring(1, 4),
            &[M::NBenzylideneaniline],
        )],
    );

    t.add(
        "C:C-N-S-C:C",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Benzene) && ring_run(p, 4, 6, R::Benzene) && !p.same_ring(1, 4),
            &[],
        ).then(clauses![
            when(|p| sulfonyl(p, 3), &[M::ArylBenzenesulfonamide]),
        ])],
    );

    t.add(
        "C-C-C-C-C:C",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Benzene) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOnePhenylpropane]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOnePhenylpropane]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOnePhenylpropane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOnePhenylpropane]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOnePhenylpropane]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanoOnePhenylpropane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Benzene) && ketone_carbon(p, 3) && straight(p, 1, 3),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOnePhenylpropanOneOne]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOnePhenylpropanOneOne]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOnePhenylpropanOneOne]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOnePhenylpropanOneOne]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOnePhenylpropanOneOne]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanoOnePhenylpropanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::ThreeHydroxyOnePhenylpropane]),
                    when(|p| methoxy(p, 5), &[M::ThreeMethoxyOnePhenylpropane]),
                    when(|p| ether_oxygen(p, 5), &[M::ThreeAlkoxyOnePhenylpropane]),
                    when(|p| ester_oxygen(p, 5), &[M::ThreeAcyloxyOnePhenylpropane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 5),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::ThreeHydroxyOnePhenylpropanOneOne]),
                    when(|p| methoxy(p, 5), &[M::ThreeMethoxyOnePhenylpropanOneOne]),
                    when(|p| ether_oxygen(p, 5), &[M::ThreeAlkoxyOnePhenylpropanOneOne]),
                    when(|p| ester_oxygen(p, 5), &[M::ThreeAcyloxyOnePhenylpropanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 5), &[M::ThreeAminoOnePhenylpropane]),
                    when(|p| substituted_amine(p, 5), &[M::ThreeAlkylaminoOnePhenylpropane]),
                    when(|p| amide_nitrogen(p, 5), &[M::ThreeAcylaminoOnePhenylpropane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 5),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 5), &[M::ThreeAminoOnePhenylpropanOneOne]),
                    when(|p| substituted_amine(p, 5), &[M::ThreeAlkylaminoOnePhenylpropanOneOne]),
                    when(|p| amide_nitrogen(p, 5), &[M::ThreeAcylaminoOnePhenylpropanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 5), &[M::ThreeMercaptoOnePhenylpropane]),
                    when(|p| thioether(p, 5), &[M::ThreeAlkylthioOnePhenylpropane]),
                    when(|p| sulfonyl(p, 5), &[M::ThreeSulfonylOnePhenylpropane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 5),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 5), &[M::ThreeMercaptoOnePhenylpropanOneOne]),
                    when(|p| thioether(p, 5), &[M::ThreeAlkylthioOnePhenylpropanOneOne]),
                    when(|p| sulfonyl(p, 5), &[M::ThreeSulfonylOnePhenylpropanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 5),
                &[M::ThreeFluoroOnePhenylpropane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 5),
                &[M::ThreeFluoroOnePhenylpropanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 5),
                &[M::ThreeChloroOnePhenylpropane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 5),
                &[M::ThreeChloroOnePhenylpropanOneOne],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C:C",
        clauses![
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Benzene) && straight(p, 1, 4),
                &[M::ThreeBromoOnePhenylpropane],
            ),
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Benzene) && ketone_carbon(p, 3) && straight(p, 1, 3),
                &[M::ThreeBromoOnePhenylpropanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 5),
                &[M::ThreeIodoOnePhenylpropane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 5),
                &[M::ThreeIodoOnePhenylpropanOneOne],
            ),
        ],
    );

    t.add(
        "C-C-C-C:C:C",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Benzene) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOnePhenylethane]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOnePhenylethane]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOnePhenylethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOnePhenylethane]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylOnePhenylethane]),
                    when(|p| cyano(p, 0), &[M::TwoCyanoOnePhenylethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::TwoHydroxyOnePhenylethane]),
                    when(|p| methoxy(p, 5), &[M::TwoMethoxyOnePhenylethane]),
                    when(|p| ether_oxygen(p, 5), &[M::TwoAlkoxyOnePhenylethane]),
                    when(|p| ester_oxygen(p, 5), &[M::TwoAcyloxyOnePhenylethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 5), &[M::TwoAminoOnePhenylethane]),
                    when(|p| substituted_amine(p, 5), &[M::TwoAlkylaminoOnePhenylethane]),
                    when(|p| amide_nitrogen(p, 5), &[M::TwoAcylaminoOnePhenylethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 5), &[M::TwoMercaptoOnePhenylethane]),
                    when(|p| thioether(p, 5), &[M::TwoAlkylthioOnePhenylethane]),
                    when(|p| sulfonyl(p, 5), &[M::TwoSulfonylOnePhenylethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 5),
            &[M::TwoFluoroOnePhenylethane],
        )],
    );

    t.add(
        "C:C:C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 5),
            &[M::TwoChloroOnePhenylethane],
        )],
    );

    t.add(
        "Br-C-C-C:C:C",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Benzene) && straight(p, 1, 3),
            &[M::TwoBromoOnePhenylethane],
        )],
    );

    t.add(
        "C:C:C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 5),
            &[M::TwoIodoOnePhenylethane],
        )],
    );

    t.add(
        "C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Benzene) && ether_oxygen(p, 3) && straight(p, 1, 3),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOnePhenoxyethane]),
                when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOnePhenoxyethane]),
                when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOnePhenoxyethane]),
                when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOnePhenoxyethane]),
                when(|p| ketone_carbon(p, 0), &[M::TwoAcylOnePhenoxyethane]),
                when(|p| cyano(p, 0), &[M::TwoCyanoOnePhenoxyethane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 5),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 5), &[M::TwoHydroxyOnePhenoxyethane]),
                when(|p| methoxy(p, 5), &[M::TwoMethoxyOnePhenoxyethane]),
                when(|p| ether_oxygen(p, 5), &[M::TwoAlkoxyOnePhenoxyethane]),
                when(|p| ester_oxygen(p, 5), &[M::TwoAcyloxyOnePhenoxyethane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 5),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 5), &[M::TwoAminoOnePhenoxyethane]),
                when(|p| substituted_amine(p, 5), &[M::TwoAlkylaminoOnePhenoxyethane]),
                when(|p| amide_nitrogen(p, 5), &[M::TwoAcylaminoOnePhenoxyethane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 5),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::TwoMercaptoOnePhenoxyethane]),
                when(|p| thioether(p, 5), &[M::TwoAlkylthioOnePhenoxyethane]),
                when(|p| sulfonyl(p, 5), &[M::TwoSulfonylOnePhenoxyethane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 5),
            &[M::TwoFluoroOnePhenoxyethane],
        )],
    );

    t.add(
        "C:C-O-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 5),
            &[M::TwoChloroOnePhenoxyethane],
        )],
    );

    t.add(
        "Br-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Benzene) && ether_oxygen(p, 3) && straight(p, 1, 3),
            &[M::TwoBromoOnePhenoxyethane],
        )],
    );

    t.add(
        "C:C-O-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 5),
            &[M::TwoIodoOnePhenoxyethane],
        )],
    );
}

fn seven(t: &mut RuleTable) {
    t.add(
        "C:C-C-C-C-C:C",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Benzene) && ring_run(p, 5, 7, R::Benzene) && !p.same_ring(1, 5),
            &[],
        ).then(clauses![
            when(|p| straight(p, 2, 5), &[M::OneThreeDiarylpropane]),
        ])],
    );

    t.add(
        "C:C-C-O-C-C:C",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Benzene) && ring_run(p, 5, 7, R::Benzene) && !p.same_ring(1, 5),
            &[],
        ).then(clauses![
            when(|p| alkyl(p, 2) && alkyl(p, 4), &[M::DibenzylEther]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C:C",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Benzene) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOnePhenylbutane]),
                    when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOnePhenylbutane]),
                    when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOnePhenylbutane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOnePhenylbutane]),
                    when(|p| ketone_carbon(p, 0), &[M::FourAcylOnePhenylbutane]),
                    when(|p| cyano(p, 0), &[M::FourCyanoOnePhenylbutane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Benzene) && ketone_carbon(p, 4) && straight(p, 1, 4),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOnePhenylbutanOneOne]),
                    when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOnePhenylbutanOneOne]),
                    when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOnePhenylbutanOneOne]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOnePhenylbutanOneOne]),
                    when(|p| ketone_carbon(p, 0), &[M::FourAcylOnePhenylbutanOneOne]),
                    when(|p| cyano(p, 0), &[M::FourCyanoOnePhenylbutanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::FourHydroxyOnePhenylbutane]),
                    when(|p| methoxy(p, 6), &[M::FourMethoxyOnePhenylbutane]),
                    when(|p| ether_oxygen(p, 6), &[M::FourAlkoxyOnePhenylbutane]),
                    when(|p| ester_oxygen(p, 6), &[M::FourAcyloxyOnePhenylbutane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 6),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::FourHydroxyOnePhenylbutanOneOne]),
                    when(|p| methoxy(p, 6), &[M::FourMethoxyOnePhenylbutanOneOne]),
                    when(|p| ether_oxygen(p, 6), &[M::FourAlkoxyOnePhenylbutanOneOne]),
                    when(|p| ester_oxygen(p, 6), &[M::FourAcyloxyOnePhenylbutanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 6), &[M::FourAminoOnePhenylbutane]),
                    when(|p| substituted_amine(p, 6), &[M::FourAlkylaminoOnePhenylbutane]),
                    when(|p| amide_nitrogen(p, 6), &[M::FourAcylaminoOnePhenylbutane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 6),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 6), &[M::FourAminoOnePhenylbutanOneOne]),
                    when(|p| substituted_amine(p, 6), &[M::FourAlkylaminoOnePhenylbutanOneOne]),
                    when(|p| amide_nitrogen(p, 6), &[M::FourAcylaminoOnePhenylbutanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 6), &[M::FourMercaptoOnePhenylbutane]),
                    when(|p| thioether(p, 6), &[M::FourAlkylthioOnePhenylbutane]),
                    when(|p| sulfonyl(p, 6), &[M::FourSulfonylOnePhenylbutane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 6),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 6), &[M::FourMercaptoOnePhenylbutanOneOne]),
                    when(|p| thioether(p, 6), &[M::FourAlkylthioOnePhenylbutanOneOne]),
                    when(|p| sulfonyl(p, 6), &[M::FourSulfonylOnePhenylbutanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 6),
                &[M::FourFluoroOnePhenylbutane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 6),
                &[M::FourFluoroOnePhenylbutanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 6),
                &[M::FourChloroOnePhenylbutane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 6),
                &[M::FourChloroOnePhenylbutanOneOne],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C:C",
        clauses![
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Benzene) && straight(p, 1, 5),
                &[M::FourBromoOnePhenylbutane],
            ),
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Benzene) && ketone_carbon(p, 4) && straight(p, 1, 4),
                &[M::FourBromoOnePhenylbutanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 6),
                &[M::FourIodoOnePhenylbutane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 6),
                &[M::FourIodoOnePhenylbutanOneOne],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C:C:C",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Benzene) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOnePhenylpropane]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOnePhenylpropane]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOnePhenylpropane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOnePhenylpropane]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOnePhenylpropane]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanoOnePhenylpropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::ThreeHydroxyOnePhenylpropane]),
                    when(|p| methoxy(p, 6), &[M::ThreeMethoxyOnePhenylpropane]),
                    when(|p| ether_oxygen(p, 6), &[M::ThreeAlkoxyOnePhenylpropane]),
                    when(|p| ester_oxygen(p, 6), &[M::ThreeAcyloxyOnePhenylpropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 6), &[M::ThreeAminoOnePhenylpropane]),
                    when(|p| substituted_amine(p, 6), &[M::ThreeAlkylaminoOnePhenylpropane]),
                    when(|p| amide_nitrogen(p, 6), &[M::ThreeAcylaminoOnePhenylpropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 6), &[M::ThreeMercaptoOnePhenylpropane]),
                    when(|p| thioether(p, 6), &[M::ThreeAlkylthioOnePhenylpropane]),
                    when(|p| sulfonyl(p, 6), &[M::ThreeSulfonylOnePhenylpropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 6),
            &[M::ThreeFluoroOnePhenylpropane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 6),
            &[M::ThreeChloroOnePhenylpropane],
        )],
    );

    t.add(
        "Br-C-C-C-C:C:C",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Benzene) && straight(p, 1, 4),
            &[M::ThreeBromoOnePhenylpropane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 6),
            &[M::ThreeIodoOnePhenylpropane],
        )],
    );

    t.add(
        "C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Benzene) && ether_oxygen(p, 4) && straight(p, 1, 4),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOnePhenoxypropane]),
                when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOnePhenoxypropane]),
                when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOnePhenoxypropane]),
                when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOnePhenoxypropane]),
                when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOnePhenoxypropane]),
                when(|p| cyano(p, 0), &[M::ThreeCyanoOnePhenoxypropane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 6),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 6), &[M::ThreeHydroxyOnePhenoxypropane]),
                when(|p| methoxy(p, 6), &[M::ThreeMethoxyOnePhenoxypropane]),
                when(|p| ether_oxygen(p, 6), &[M::ThreeAlkoxyOnePhenoxypropane]),
                when(|p| ester_oxygen(p, 6), &[M::ThreeAcyloxyOnePhenoxypropane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 6),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 6), &[M::ThreeAminoOnePhenoxypropane]),
                when(|p| substituted_amine(p, 6), &[M::ThreeAlkylaminoOnePhenoxypropane]),
                when(|p| amide_nitrogen(p, 6), &[M::ThreeAcylaminoOnePhenoxypropane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 6),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 6), &[M::ThreeMercaptoOnePhenoxypropane]),
                when(|p| thioether(p, 6), &[M::ThreeAlkylthioOnePhenoxypropane]),
                when(|p| sulfonyl(p, 6), &[M::ThreeSulfonylOnePhenoxypropane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 6),
            &[M::ThreeFluoroOnePhenoxypropane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 6),
            &[M::ThreeChloroOnePhenoxypropane],
        )],
    );

    t.add(
        "Br-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Benzene) && ether_oxygen(p, 4) && straight(p, 1, 4),
            &[M::ThreeBromoOnePhenoxypropane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 6),
            &[M::ThreeIodoOnePhenoxypropane],
        )],
    );
}

fn eight(t: &mut RuleTable) {
    t.add(
        "C:C-C-C-C-C-C:C",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Benzene) && ring_run(p, 6, 8, R::Benzene) && !p.same_ring(1, 6),
            &[],
        ).then(clauses![
            when(|p| straight(p, 2, 6), &[M::OneFourDiarylbutane]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C:C",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Benzene) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOnePhenylpentane]),
                    when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOnePhenylpentane]),
                    when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOnePhenylpentane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOnePhenylpentane]),
                    when(|p| ketone_carbon(p, 0), &[M::FiveAcylOnePhenylpentane]),
                    when(|p| cyano(p, 0), &[M::FiveCyanoOnePhenylpentane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Benzene) && ketone_carbon(p, 5) && straight(p, 1, 5),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOnePhenylpentanOneOne]),
                    when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOnePhenylpentanOneOne]),
                    when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOnePhenylpentanOneOne]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOnePhenylpentanOneOne]),
                    when(|p| ketone_carbon(p, 0), &[M::FiveAcylOnePhenylpentanOneOne]),
                    when(|p| cyano(p, 0), &[M::FiveCyanoOnePhenylpentanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::FiveHydroxyOnePhenylpentane]),
                    when(|p| methoxy(p, 7), &[M::FiveMethoxyOnePhenylpentane]),
                    when(|p| ether_oxygen(p, 7), &[M::FiveAlkoxyOnePhenylpentane]),
                    when(|p| ester_oxygen(p, 7), &[M::FiveAcyloxyOnePhenylpentane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 7),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::FiveHydroxyOnePhenylpentanOneOne]),
                    when(|p| methoxy(p, 7), &[M::FiveMethoxyOnePhenylpentanOneOne]),
                    when(|p| ether_oxygen(p, 7), &[M::FiveAlkoxyOnePhenylpentanOneOne]),
                    when(|p| ester_oxygen(p, 7), &[M::FiveAcyloxyOnePhenylpentanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 7), &[M::FiveAminoOnePhenylpentane]),
                    when(|p| substituted_amine(p, 7), &[M::FiveAlkylaminoOnePhenylpentane]),
                    when(|p| amide_nitrogen(p, 7), &[M::FiveAcylaminoOnePhenylpentane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 7),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 7), &[M::FiveAminoOnePhenylpentanOneOne]),
                    when(|p| substituted_amine(p, 7), &[M::FiveAlkylaminoOnePhenylpentanOneOne]),
                    when(|p| amide_nitrogen(p, 7), &[M::FiveAcylaminoOnePhenylpentanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 7), &[M::FiveMercaptoOnePhenylpentane]),
                    when(|p| thioether(p, 7), &[M::FiveAlkylthioOnePhenylpentane]),
                    when(|p| sulfonyl(p, 7), &[M::FiveSulfonylOnePhenylpentane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 7),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 7), &[M::FiveMercaptoOnePhenylpentanOneOne]),
                    when(|p| thioether(p, 7), &[M::FiveAlkylthioOnePhenylpentanOneOne]),
                    when(|p| sulfonyl(p, 7), &[M::FiveSulfonylOnePhenylpentanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 7),
                &[M::FiveFluoroOnePhenylpentane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 7),
                &[M::FiveFluoroOnePhenylpentanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 7),
                &[M::FiveChloroOnePhenylpentane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 7),
                &[M::FiveChloroOnePhenylpentanOneOne],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C:C",
        clauses![
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Benzene) && straight(p, 1, 6),
                &[M::FiveBromoOnePhenylpentane],
            ),
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Benzene) && ketone_carbon(p, 5) && straight(p, 1, 5),
                &[M::FiveBromoOnePhenylpentanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 7),
                &[M::FiveIodoOnePhenylpentane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 7),
                &[M::FiveIodoOnePhenylpentanOneOne],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C:C:C",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Benzene) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOnePhenylbutane]),
                    when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOnePhenylbutane]),
                    when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOnePhenylbutane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOnePhenylbutane]),
                    when(|p| ketone_carbon(p, 0), &[M::FourAcylOnePhenylbutane]),
                    when(|p| cyano(p, 0), &[M::FourCyanoOnePhenylbutane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::FourHydroxyOnePhenylbutane]),
                    when(|p| methoxy(p, 7), &[M::FourMethoxyOnePhenylbutane]),
                    when(|p| ether_oxygen(p, 7), &[M::FourAlkoxyOnePhenylbutane]),
                    when(|p| ester_oxygen(p, 7), &[M::FourAcyloxyOnePhenylbutane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 7), &[M::FourAminoOnePhenylbutane]),
                    when(|p| substituted_amine(p, 7), &[M::FourAlkylaminoOnePhenylbutane]),
                    when(|p| amide_nitrogen(p, 7), &[M::FourAcylaminoOnePhenylbutane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 7), &[M::FourMercaptoOnePhenylbutane]),
                    when(|p| thioether(p, 7), &[M::FourAlkylthioOnePhenylbutane]),
                    when(|p| sulfonyl(p, 7), &[M::FourSulfonylOnePhenylbutane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 7),
            &[M::FourFluoroOnePhenylbutane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 7),
            &[M::FourChloroOnePhenylbutane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C:C:C",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Benzene) && straight(p, 1, 5),
            &[M::FourBromoOnePhenylbutane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 7),
            &[M::FourIodoOnePhenylbutane],
        )],
    );

    t.add(
        "C-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Benzene) && ether_oxygen(p, 5) && straight(p, 1, 5),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOnePhenoxybutane]),
                when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOnePhenoxybutane]),
                when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOnePhenoxybutane]),
                when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOnePhenoxybutane]),
                when(|p| ketone_carbon(p, 0), &[M::FourAcylOnePhenoxybutane]),
                when(|p| cyano(p, 0), &[M::FourCyanoOnePhenoxybutane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 7),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 7), &[M::FourHydroxyOnePhenoxybutane]),
                when(|p| methoxy(p, 7), &[M::FourMethoxyOnePhenoxybutane]),
                when(|p| ether_oxygen(p, 7), &[M::FourAlkoxyOnePhenoxybutane]),
                when(|p| ester_oxygen(p, 7), &[M::FourAcyloxyOnePhenoxybutane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 7),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 7), &[M::FourAminoOnePhenoxybutane]),
                when(|p| substituted_amine(p, 7), &[M::FourAlkylaminoOnePhenoxybutane]),
                when(|p| amide_nitrogen(p, 7), &[M::FourAcylaminoOnePhenoxybutane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 7),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 7), &[M::FourMercaptoOnePhenoxybutane]),
                when(|p| thioether(p, 7), &[M::FourAlkylthioOnePhenoxybutane]),
                when(|p| sulfonyl(p, 7), &[M::FourSulfonylOnePhenoxybutane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 7),
            &[M::FourFluoroOnePhenoxybutane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 7),
            &[M::FourChloroOnePhenoxybutane],
        )],
    );

    t.add(
        "Br-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Benzene) && ether_oxygen(p, 5) && straight(p, 1, 5),
            &[M::FourBromoOnePhenoxybutane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 7),
            &[M::FourIodoOnePhenoxybutane],
        )],
    );
}

fn nine(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C:C",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Benzene) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOnePhenylhexane]),
                    when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOnePhenylhexane]),
                    when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOnePhenylhexane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOnePhenylhexane]),
                    when(|p| ketone_carbon(p, 0), &[M::SixAcylOnePhenylhexane]),
                    when(|p| cyano(p, 0), &[M::SixCyanoOnePhenylhexane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Benzene) && ketone_carbon(p, 6) && straight(p, 1, 6),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOnePhenylhexanOneOne]),
                    when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOnePhenylhexanOneOne]),
                    when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOnePhenylhexanOneOne]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOnePhenylhexanOneOne]),
                    when(|p| ketone_carbon(p, 0), &[M::SixAcylOnePhenylhexanOneOne]),
                    when(|p| cyano(p, 0), &[M::SixCyanoOnePhenylhexanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 8), &[M::SixHydroxyOnePhenylhexane]),
                    when(|p| methoxy(p, 8), &[M::SixMethoxyOnePhenylhexane]),
                    when(|p| ether_oxygen(p, 8), &[M::SixAlkoxyOnePhenylhexane]),
                    when(|p| ester_oxygen(p, 8), &[M::SixAcyloxyOnePhenylhexane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 8),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 8), &[M::SixHydroxyOnePhenylhexanOneOne]),
                    when(|p| methoxy(p, 8), &[M::SixMethoxyOnePhenylhexanOneOne]),
                    when(|p| ether_oxygen(p, 8), &[M::SixAlkoxyOnePhenylhexanOneOne]),
                    when(|p| ester_oxygen(p, 8), &[M::SixAcyloxyOnePhenylhexanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 8), &[M::SixAminoOnePhenylhexane]),
                    when(|p| substituted_amine(p, 8), &[M::SixAlkylaminoOnePhenylhexane]),
                    when(|p| amide_nitrogen(p, 8), &[M::SixAcylaminoOnePhenylhexane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 8),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 8), &[M::SixAminoOnePhenylhexanOneOne]),
                    when(|p| substituted_amine(p, 8), &[M::SixAlkylaminoOnePhenylhexanOneOne]),
                    when(|p| amide_nitrogen(p, 8), &[M::SixAcylaminoOnePhenylhexanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 8), &[M::SixMercaptoOnePhenylhexane]),
                    when(|p| thioether(p, 8), &[M::SixAlkylthioOnePhenylhexane]),
                    when(|p| sulfonyl(p, 8), &[M::SixSulfonylOnePhenylhexane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 8),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 8), &[M::SixMercaptoOnePhenylhexanOneOne]),
                    when(|p| thioether(p, 8), &[M::SixAlkylthioOnePhenylhexanOneOne]),
                    when(|p| sulfonyl(p, 8), &[M::SixSulfonylOnePhenylhexanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 8),
                &[M::SixFluoroOnePhenylhexane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 8),
                &[M::SixFluoroOnePhenylhexanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 8),
                &[M::SixChloroOnePhenylhexane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 8),
                &[M::SixChloroOnePhenylhexanOneOne],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C:C",
        clauses![
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Benzene) && straight(p, 1, 7),
                &[M::SixBromoOnePhenylhexane],
            ),
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Benzene) && ketone_carbon(p, 6) && straight(p, 1, 6),
                &[M::SixBromoOnePhenylhexanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 8),
                &[M::SixIodoOnePhenylhexane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 8),
                &[M::SixIodoOnePhenylhexanOneOne],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C-C:C:C",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Benzene) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOnePhenylpentane]),
                    when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOnePhenylpentane]),
                    when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOnePhenylpentane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOnePhenylpentane]),
                    when(|p| ketone_carbon(p, 0), &[M::FiveAcylOnePhenylpentane]),
                    when(|p| cyano(p, 0), &[M::FiveCyanoOnePhenylpentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 8), &[M::FiveHydroxyOnePhenylpentane]),
                    when(|p| methoxy(p, 8), &[M::FiveMethoxyOnePhenylpentane]),
                    when(|p| ether_oxygen(p, 8), &[M::FiveAlkoxyOnePhenylpentane]),
                    when(|p| ester_oxygen(p, 8), &[M::FiveAcyloxyOnePhenylpentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 8), &[M::FiveAminoOnePhenylpentane]),
                    when(|p| substituted_amine(p, 8), &[M::FiveAlkylaminoOnePhenylpentane]),
                    when(|p| amide_nitrogen(p, 8), &[M::FiveAcylaminoOnePhenylpentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 8), &[M::FiveMercaptoOnePhenylpentane]),
                    when(|p| thioether(p, 8), &[M::FiveAlkylthioOnePhenylpentane]),
                    when(|p| sulfonyl(p, 8), &[M::FiveSulfonylOnePhenylpentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 8),
            &[M::FiveFluoroOnePhenylpentane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 8),
            &[M::FiveChloroOnePhenylpentane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C:C:C",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Benzene) && straight(p, 1, 6),
            &[M::FiveBromoOnePhenylpentane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 8),
            &[M::FiveIodoOnePhenylpentane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Benzene) && ether_oxygen(p, 6) && straight(p, 1, 6),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOnePhenoxypentane]),
                when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOnePhenoxypentane]),
                when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOnePhenoxypentane]),
                when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOnePhenoxypentane]),
                when(|p| ketone_carbon(p, 0), &[M::FiveAcylOnePhenoxypentane]),
                when(|p| cyano(p, 0), &[M::FiveCyanoOnePhenoxypentane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 8),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 8), &[M::FiveHydroxyOnePhenoxypentane]),
                when(|p| methoxy(p, 8), &[M::FiveMethoxyOnePhenoxypentane]),
                when(|p| ether_oxygen(p, 8), &[M::FiveAlkoxyOnePhenoxypentane]),
                when(|p| ester_oxygen(p, 8), &[M::FiveAcyloxyOnePhenoxypentane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 8),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 8), &[M::FiveAminoOnePhenoxypentane]),
                when(|p| substituted_amine(p, 8), &[M::FiveAlkylaminoOnePhenoxypentane]),
                when(|p| amide_nitrogen(p, 8), &[M::FiveAcylaminoOnePhenoxypentane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 8),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 8), &[M::FiveMercaptoOnePhenoxypentane]),
                when(|p| thioether(p, 8), &[M::FiveAlkylthioOnePhenoxypentane]),
                when(|p| sulfonyl(p, 8), &[M::FiveSulfonylOnePhenoxypentane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 8),
            &[M::FiveFluoroOnePhenoxypentane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 8),
            &[M::FiveChloroOnePhenoxypentane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Benzene) && ether_oxygen(p, 6) && straight(p, 1, 6),
            &[M::FiveBromoOnePhenoxypentane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 8),
            &[M::FiveIodoOnePhenoxypentane],
        )],
    );
}

fn ten(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C:C",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Benzene) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOnePhenylheptane]),
                    when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOnePhenylheptane]),
                    when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOnePhenylheptane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOnePhenylheptane]),
                    when(|p| ketone_carbon(p, 0), &[M::SevenAcylOnePhenylheptane]),
                    when(|p| cyano(p, 0), &[M::SevenCyanoOnePhenylheptane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Benzene) && ketone_carbon(p, 7) && straight(p, 1, 7),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOnePhenylheptanOneOne]),
                    when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOnePhenylheptanOneOne]),
                    when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOnePhenylheptanOneOne]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOnePhenylheptanOneOne]),
                    when(|p| ketone_carbon(p, 0), &[M::SevenAcylOnePhenylheptanOneOne]),
                    when(|p| cyano(p, 0), &[M::SevenCyanoOnePhenylheptanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 9), &[M::SevenHydroxyOnePhenylheptane]),
                    when(|p| methoxy(p, 9), &[M::SevenMethoxyOnePhenylheptane]),
                    when(|p| ether_oxygen(p, 9), &[M::SevenAlkoxyOnePhenylheptane]),
                    when(|p| ester_oxygen(p, 9), &[M::SevenAcyloxyOnePhenylheptane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 9),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 9), &[M::SevenHydroxyOnePhenylheptanOneOne]),
                    when(|p| methoxy(p, 9), &[M::SevenMethoxyOnePhenylheptanOneOne]),
                    when(|p| ether_oxygen(p, 9), &[M::SevenAlkoxyOnePhenylheptanOneOne]),
                    when(|p| ester_oxygen(p, 9), &[M::SevenAcyloxyOnePhenylheptanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 9), &[M::SevenAminoOnePhenylheptane]),
                    when(|p| substituted_amine(p, 9), &[M::SevenAlkylaminoOnePhenylheptane]),
                    when(|p| amide_nitrogen(p, 9), &[M::SevenAcylaminoOnePhenylheptane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 9),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 9), &[M::SevenAminoOnePhenylheptanOneOne]),
                    when(|p| substituted_amine(p, 9), &[M::SevenAlkylaminoOnePhenylheptanOneOne]),
                    when(|p| amide_nitrogen(p, 9), &[M::SevenAcylaminoOnePhenylheptanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 9), &[M::SevenMercaptoOnePhenylheptane]),
                    when(|p| thioether(p, 9), &[M::SevenAlkylthioOnePhenylheptane]),
                    when(|p| sulfonyl(p, 9), &[M::SevenSulfonylOnePhenylheptane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 9),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 9), &[M::SevenMercaptoOnePhenylheptanOneOne]),
                    when(|p| thioether(p, 9), &[M::SevenAlkylthioOnePhenylheptanOneOne]),
                    when(|p| sulfonyl(p, 9), &[M::SevenSulfonylOnePhenylheptanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 9),
                &[M::SevenFluoroOnePhenylheptane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 9),
                &[M::SevenFluoroOnePhenylheptanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 9),
                &[M::SevenChloroOnePhenylheptane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 9),
                &[M::SevenChloroOnePhenylheptanOneOne],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C:C",
        clauses![
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Benzene) && straight(p, 1, 8),
                &[M::SevenBromoOnePhenylheptane],
            ),
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Benzene) && ketone_carbon(p, 7) && straight(p, 1, 7),
                &[M::SevenBromoOnePhenylheptanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 9),
                &[M::SevenIodoOnePhenylheptane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 9),
                &[M::SevenIodoOnePhenylheptanOneOne],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C-C-C:C:C",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Benzene) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOnePhenylhexane]),
                    when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOnePhenylhexane]),
                    when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOnePhenylhexane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOnePhenylhexane]),
                    when(|p| ketone_carbon(p, 0), &[M::SixAcylOnePhenylhexane]),
                    when(|p| cyano(p, 0), &[M::SixCyanoOnePhenylhexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 9), &[M::SixHydroxyOnePhenylhexane]),
                    when(|p| methoxy(p, 9), &[M::SixMethoxyOnePhenylhexane]),
                    when(|p| ether_oxygen(p, 9), &[M::SixAlkoxyOnePhenylhexane]),
                    when(|p| ester_oxygen(p, 9), &[M::SixAcyloxyOnePhenylhexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 9), &[M::SixAminoOnePhenylhexane]),
                    when(|p| substituted_amine(p, 9), &[M::SixAlkylaminoOnePhenylhexane]),
                    when(|p| amide_nitrogen(p, 9), &[M::SixAcylaminoOnePhenylhexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 9), &[M::SixMercaptoOnePhenylhexane]),
                    when(|p| thioether(p, 9), &[M::SixAlkylthioOnePhenylhexane]),
                    when(|p| sulfonyl(p, 9), &[M::SixSulfonylOnePhenylhexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 9),
            &[M::SixFluoroOnePhenylhexane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 9),
            &[M::SixChloroOnePhenylhexane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C:C:C",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Benzene) && straight(p, 1, 7),
            &[M::SixBromoOnePhenylhexane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 9),
            &[M::SixIodoOnePhenylhexane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Benzene) && ether_oxygen(p, 7) && straight(p, 1, 7),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOnePhenoxyhexane]),
                when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOnePhenoxyhexane]),
                when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOnePhenoxyhexane]),
                when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOnePhenoxyhexane]),
                when(|p| ketone_carbon(p, 0), &[M::SixAcylOnePhenoxyhexane]),
                when(|p| cyano(p, 0), &[M::SixCyanoOnePhenoxyhexane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 9),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 9), &[M::SixHydroxyOnePhenoxyhexane]),
                when(|p| methoxy(p, 9), &[M::SixMethoxyOnePhenoxyhexane]),
                when(|p| ether_oxygen(p, 9), &[M::SixAlkoxyOnePhenoxyhexane]),
                when(|p| ester_oxygen(p, 9), &[M::SixAcyloxyOnePhenoxyhexane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 9),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 9), &[M::SixAminoOnePhenoxyhexane]),
                when(|p| substituted_amine(p, 9), &[M::SixAlkylaminoOnePhenoxyhexane]),
                when(|p| amide_nitrogen(p, 9), &[M::SixAcylaminoOnePhenoxyhexane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 9),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 9), &[M::SixMercaptoOnePhenoxyhexane]),
                when(|p| thioether(p, 9), &[M::SixAlkylthioOnePhenoxyhexane]),
                when(|p| sulfonyl(p, 9), &[M::SixSulfonylOnePhenoxyhexane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 9),
            &[M::SixFluoroOnePhenoxyhexane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 9),
            &[M::SixChloroOnePhenoxyhexane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Benzene) && ether_oxygen(p, 7) && straight(p, 1, 7),
            &[M::SixBromoOnePhenoxyhexane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 9),
            &[M::SixIodoOnePhenoxyhexane],
        )],
    );
}

fn eleven(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C-C:C",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Benzene) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOnePhenyloctane]),
                    when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOnePhenyloctane]),
                    when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOnePhenyloctane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOnePhenyloctane]),
                    when(|p| ketone_carbon(p, 0), &[M::EightAcylOnePhenyloctane]),
                    when(|p| cyano(p, 0), &[M::EightCyanoOnePhenyloctane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Benzene) && ketone_carbon(p, 8) && straight(p, 1, 8),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOnePhenyloctanOneOne]),
                    when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOnePhenyloctanOneOne]),
                    when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOnePhenyloctanOneOne]),
                    when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOnePhenyloctanOneOne]),
                    when(|p| ketone_carbon(p, 0), &[M::EightAcylOnePhenyloctanOneOne]),
                    when(|p| cyano(p, 0), &[M::EightCyanoOnePhenyloctanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 10), &[M::EightHydroxyOnePhenyloctane]),
                    when(|p| methoxy(p, 10), &[M::EightMethoxyOnePhenyloctane]),
                    when(|p| ether_oxygen(p, 10), &[M::EightAlkoxyOnePhenyloctane]),
                    when(|p| ester_oxygen(p, 10), &[M::EightAcyloxyOnePhenyloctane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 10), &[M::EightHydroxyOnePhenyloctanOneOne]),
                    when(|p| methoxy(p, 10), &[M::EightMethoxyOnePhenyloctanOneOne]),
                    when(|p| ether_oxygen(p, 10), &[M::EightAlkoxyOnePhenyloctanOneOne]),
                    when(|p| ester_oxygen(p, 10), &[M::EightAcyloxyOnePhenyloctanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 10), &[M::EightAminoOnePhenyloctane]),
                    when(|p| substituted_amine(p, 10), &[M::EightAlkylaminoOnePhenyloctane]),
                    when(|p| amide_nitrogen(p, 10), &[M::EightAcylaminoOnePhenyloctane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 10), &[M::EightAminoOnePhenyloctanOneOne]),
                    when(|p| substituted_amine(p, 10), &[M::EightAlkylaminoOnePhenyloctanOneOne]),
                    when(|p| amide_nitrogen(p, 10), &[M::EightAcylaminoOnePhenyloctanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 10), &[M::EightMercaptoOnePhenyloctane]),
                    when(|p| thioether(p, 10), &[M::EightAlkylthioOnePhenyloctane]),
                    when(|p| sulfonyl(p, 10), &[M::EightSulfonylOnePhenyloctane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 10), &[M::EightMercaptoOnePhenyloctanOneOne]),
                    when(|p| thioether(p, 10), &[M::EightAlkylthioOnePhenyloctanOneOne]),
                    when(|p| sulfonyl(p, 10), &[M::EightSulfonylOnePhenyloctanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 10),
                &[M::EightFluoroOnePhenyloctane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 10),
                &[M::EightFluoroOnePhenyloctanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 10),
                &[M::EightChloroOnePhenyloctane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 10),
                &[M::EightChloroOnePhenyloctanOneOne],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C:C",
        clauses![
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Benzene) && straight(p, 1, 9),
                &[M::EightBromoOnePhenyloctane],
            ),
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Benzene) && ketone_carbon(p, 8) && straight(p, 1, 8),
                &[M::EightBromoOnePhenyloctanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 10),
                &[M::EightIodoOnePhenyloctane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 10),
                &[M::EightIodoOnePhenyloctanOneOne],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C:C:C",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Benzene) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOnePhenylheptane]),
                    when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOnePhenylheptane]),
                    when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOnePhenylheptane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOnePhenylheptane]),
                    when(|p| ketone_carbon(p, 0), &[M::SevenAcylOnePhenylheptane]),
                    when(|p| cyano(p, 0), &[M::SevenCyanoOnePhenylheptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 10), &[M::SevenHydroxyOnePhenylheptane]),
                    when(|p| methoxy(p, 10), &[M::SevenMethoxyOnePhenylheptane]),
                    when(|p| ether_oxygen(p, 10), &[M::SevenAlkoxyOnePhenylheptane]),
                    when(|p| ester_oxygen(p, 10), &[M::SevenAcyloxyOnePhenylheptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 10), &[M::SevenAminoOnePhenylheptane]),
                    when(|p| substituted_amine(p, 10), &[M::SevenAlkylaminoOnePhenylheptane]),
                    when(|p| amide_nitrogen(p, 10), &[M::SevenAcylaminoOnePhenylheptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 10), &[M::SevenMercaptoOnePhenylheptane]),
                    when(|p| thioether(p, 10), &[M::SevenAlkylthioOnePhenylheptane]),
                    when(|p| sulfonyl(p, 10), &[M::SevenSulfonylOnePhenylheptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 10),
            &[M::SevenFluoroOnePhenylheptane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 10),
            &[M::SevenChloroOnePhenylheptane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C:C:C",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Benzene) && straight(p, 1, 8),
            &[M::SevenBromoOnePhenylheptane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 10),
            &[M::SevenIodoOnePhenylheptane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Benzene) && ether_oxygen(p, 8) && straight(p, 1, 8),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOnePhenoxyheptane]),
                when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOnePhenoxyheptane]),
                when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOnePhenoxyheptane]),
                when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOnePhenoxyheptane]),
                when(|p| ketone_carbon(p, 0), &[M::SevenAcylOnePhenoxyheptane]),
                when(|p| cyano(p, 0), &[M::SevenCyanoOnePhenoxyheptane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 10),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 10), &[M::SevenHydroxyOnePhenoxyheptane]),
                when(|p| methoxy(p, 10), &[M::SevenMethoxyOnePhenoxyheptane]),
                when(|p| ether_oxygen(p, 10), &[M::SevenAlkoxyOnePhenoxyheptane]),
                when(|p| ester_oxygen(p, 10), &[M::SevenAcyloxyOnePhenoxyheptane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 10),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 10), &[M::SevenAminoOnePhenoxyheptane]),
                when(|p| substituted_amine(p, 10), &[M::SevenAlkylaminoOnePhenoxyheptane]),
                when(|p| amide_nitrogen(p, 10), &[M::SevenAcylaminoOnePhenoxyheptane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 10),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 10), &[M::SevenMercaptoOnePhenoxyheptane]),
                when(|p| thioether(p, 10), &[M::SevenAlkylthioOnePhenoxyheptane]),
                when(|p| sulfonyl(p, 10), &[M::SevenSulfonylOnePhenoxyheptane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 10),
            &[M::SevenFluoroOnePhenoxyheptane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 10),
            &[M::SevenChloroOnePhenoxyheptane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Benzene) && ether_oxygen(p, 8) && straight(p, 1, 8),
            &[M::SevenBromoOnePhenoxyheptane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 10),
            &[M::SevenIodoOnePhenoxyheptane],
        )],
    );
}

fn twelve(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C-C-C:C",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Benzene) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOnePhenylnonane]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOnePhenylnonane]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOnePhenylnonane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOnePhenylnonane]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOnePhenylnonane]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOnePhenylnonane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Benzene) && ketone_carbon(p, 9) && straight(p, 1, 9),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOnePhenylnonanOneOne]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOnePhenylnonanOneOne]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOnePhenylnonanOneOne]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOnePhenylnonanOneOne]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOnePhenylnonanOneOne]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOnePhenylnonanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 11), &[M::NineHydroxyOnePhenylnonane]),
                    when(|p| methoxy(p, 11), &[M::NineMethoxyOnePhenylnonane]),
                    when(|p| ether_oxygen(p, 11), &[M::NineAlkoxyOnePhenylnonane]),
                    when(|p| ester_oxygen(p, 11), &[M::NineAcyloxyOnePhenylnonane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 11), &[M::NineHydroxyOnePhenylnonanOneOne]),
                    when(|p| methoxy(p, 11), &[M::NineMethoxyOnePhenylnonanOneOne]),
                    when(|p| ether_oxygen(p, 11), &[M::NineAlkoxyOnePhenylnonanOneOne]),
                    when(|p| ester_oxygen(p, 11), &[M::NineAcyloxyOnePhenylnonanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 11), &[M::NineAminoOnePhenylnonane]),
                    when(|p| substituted_amine(p, 11), &[M::NineAlkylaminoOnePhenylnonane]),
                    when(|p| amide_nitrogen(p, 11), &[M::NineAcylaminoOnePhenylnonane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 11), &[M::NineAminoOnePhenylnonanOneOne]),
                    when(|p| substituted_amine(p, 11), &[M::NineAlkylaminoOnePhenylnonanOneOne]),
                    when(|p| amide_nitrogen(p, 11), &[M::NineAcylaminoOnePhenylnonanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 11), &[M::NineMercaptoOnePhenylnonane]),
                    when(|p| thioether(p, 11), &[M::NineAlkylthioOnePhenylnonane]),
                    when(|p| sulfonyl(p, 11), &[M::NineSulfonylOnePhenylnonane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 11), &[M::NineMercaptoOnePhenylnonanOneOne]),
                    when(|p| thioether(p, 11), &[M::NineAlkylthioOnePhenylnonanOneOne]),
                    when(|p| sulfonyl(p, 11), &[M::NineSulfonylOnePhenylnonanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 11),
                &[M::NineFluoroOnePhenylnonane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 11),
                &[M::NineFluoroOnePhenylnonanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 11),
                &[M::NineChloroOnePhenylnonane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 11),
                &[M::NineChloroOnePhenylnonanOneOne],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C:C",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Benzene) && straight(p, 1, 10),
                &[M::NineBromoOnePhenylnonane],
            ),
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Benzene) && ketone_carbon(p, 9) && straight(p, 1, 9),
                &[M::NineBromoOnePhenylnonanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 11),
                &[M::NineIodoOnePhenylnonane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 11),
                &[M::NineIodoOnePhenylnonanOneOne],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C:C:C",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Benzene) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOnePhenyloctane]),
                    when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOnePhenyloctane]),
                    when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOnePhenyloctane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOnePhenyloctane]),
                    when(|p| ketone_carbon(p, 0), &[M::EightAcylOnePhenyloctane]),
                    when(|p| cyano(p, 0), &[M::EightCyanoOnePhenyloctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 11), &[M::EightHydroxyOnePhenyloctane]),
                    when(|p| methoxy(p, 11), &[M::EightMethoxyOnePhenyloctane]),
                    when(|p| ether_oxygen(p, 11), &[M::EightAlkoxyOnePhenyloctane]),
                    when(|p| ester_oxygen(p, 11), &[M::EightAcyloxyOnePhenyloctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 11), &[M::EightAminoOnePhenyloctane]),
                    when(|p| substituted_amine(p, 11), &[M::EightAlkylaminoOnePhenyloctane]),
                    when(|p| amide_nitrogen(p, 11), &[M::EightAcylaminoOnePhenyloctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 11), &[M::EightMercaptoOnePhenyloctane]),
                    when(|p| thioether(p, 11), &[M::EightAlkylthioOnePhenyloctane]),
                    when(|p| sulfonyl(p, 11), &[M::EightSulfonylOnePhenyloctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 11),
            &[M::EightFluoroOnePhenyloctane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 11),
            &[M::EightChloroOnePhenyloctane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C:C:C",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Benzene) && straight(p, 1, 9),
            &[M::EightBromoOnePhenyloctane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 11),
            &[M::EightIodoOnePhenyloctane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Benzene) && ether_oxygen(p, 9) && straight(p, 1, 9),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOnePhenoxyoctane]),
                when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOnePhenoxyoctane]),
                when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOnePhenoxyoctane]),
                when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOnePhenoxyoctane]),
                when(|p| ketone_carbon(p, 0), &[M::EightAcylOnePhenoxyoctane]),
                when(|p| cyano(p, 0), &[M::EightCyanoOnePhenoxyoctane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 11),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 11), &[M::EightHydroxyOnePhenoxyoctane]),
                when(|p| methoxy(p, 11), &[M::EightMethoxyOnePhenoxyoctane]),
                when(|p| ether_oxygen(p, 11), &[M::EightAlkoxyOnePhenoxyoctane]),
                when(|p| ester_oxygen(p, 11), &[M::EightAcyloxyOnePhenoxyoctane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 11),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 11), &[M::EightAminoOnePhenoxyoctane]),
                when(|p| substituted_amine(p, 11), &[M::EightAlkylaminoOnePhenoxyoctane]),
                when(|p| amide_nitrogen(p, 11), &[M::EightAcylaminoOnePhenoxyoctane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 11),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 11), &[M::EightMercaptoOnePhenoxyoctane]),
                when(|p| thioether(p, 11), &[M::EightAlkylthioOnePhenoxyoctane]),
                when(|p| sulfonyl(p, 11), &[M::EightSulfonylOnePhenoxyoctane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 11),
            &[M::EightFluoroOnePhenoxyoctane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 11),
            &[M::EightChloroOnePhenoxyoctane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Benzene) && ether_oxygen(p, 9) && straight(p, 1, 9),
            &[M::EightBromoOnePhenoxyoctane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 11),
            &[M::EightIodoOnePhenoxyoctane],
        )],
    );
}

fn thirteen(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C:C",
        clauses![
            when(|p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Benzene) && straight(p, 1, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TenCarboxyOnePhenyldecane]),
                    when(|p| ester_carbon(p, 0), &[M::TenAlkoxycarbonylOnePhenyldecane]),
                    when(|p| amide_carbon(p, 0), &[M::TenCarbamoylOnePhenyldecane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TenFormylOnePhenyldecane]),
                    when(|p| ketone_carbon(p, 0), &[M::TenAcylOnePhenyldecane]),
                    when(|p| cyano(p, 0), &[M::TenCyanoOnePhenyldecane]),
                ]),
            ]),
            when(
                |p| {
                    !p.bond_in_ring(10)
                        && ring_run(p, 11, 13, R::Benzene)
                        && ketone_carbon(p, 10)
                        && straight(p, 1, 10)
                },
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TenCarboxyOnePhenyldecanOneOne]),
                    when(|p| ester_carbon(p, 0), &[M::TenAlkoxycarbonylOnePhenyldecanOneOne]),
                    when(|p| amide_carbon(p, 0), &[M::TenCarbamoylOnePhenyldecanOneOne]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TenFormylOnePhenyldecanOneOne]),
                    when(|p| ketone_carbon(p, 0), &[M::TenAcylOnePhenyldecanOneOne]),
                    when(|p| cyano(p, 0), &[M::TenCyanoOnePhenyldecanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 12), &[M::TenHydroxyOnePhenyldecane]),
                    when(|p| methoxy(p, 12), &[M::TenMethoxyOnePhenyldecane]),
                    when(|p| ether_oxygen(p, 12), &[M::TenAlkoxyOnePhenyldecane]),
                    when(|p| ester_oxygen(p, 12), &[M::TenAcyloxyOnePhenyldecane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 12),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 12), &[M::TenHydroxyOnePhenyldecanOneOne]),
                    when(|p| methoxy(p, 12), &[M::TenMethoxyOnePhenyldecanOneOne]),
                    when(|p| ether_oxygen(p, 12), &[M::TenAlkoxyOnePhenyldecanOneOne]),
                    when(|p| ester_oxygen(p, 12), &[M::TenAcyloxyOnePhenyldecanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 12), &[M::TenAminoOnePhenyldecane]),
                    when(|p| substituted_amine(p, 12), &[M::TenAlkylaminoOnePhenyldecane]),
                    when(|p| amide_nitrogen(p, 12), &[M::TenAcylaminoOnePhenyldecane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 12),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 12), &[M::TenAminoOnePhenyldecanOneOne]),
                    when(|p| substituted_amine(p, 12), &[M::TenAlkylaminoOnePhenyldecanOneOne]),
                    when(|p| amide_nitrogen(p, 12), &[M::TenAcylaminoOnePhenyldecanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 12), &[M::TenMercaptoOnePhenyldecane]),
                    when(|p| thioether(p, 12), &[M::TenAlkylthioOnePhenyldecane]),
                    when(|p| sulfonyl(p, 12), &[M::TenSulfonylOnePhenyldecane]),
                ]),
            ]),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 12),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 12), &[M::TenMercaptoOnePhenyldecanOneOne]),
                    when(|p| thioether(p, 12), &[M::TenAlkylthioOnePhenyldecanOneOne]),
                    when(|p| sulfonyl(p, 12), &[M::TenSulfonylOnePhenyldecanOneOne]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 12),
                &[M::TenFluoroOnePhenyldecane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 12),
                &[M::TenFluoroOnePhenyldecanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 12),
                &[M::TenChloroOnePhenyldecane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 12),
                &[M::TenChloroOnePhenyldecanOneOne],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-C:C",
        clauses![
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Benzene) && straight(p, 1, 11),
                &[M::TenBromoOnePhenyldecane],
            ),
            when(
                |p| {
                    !p.bond_in_ring(10)
                        && ring_run(p, 11, 13, R::Benzene)
                        && ketone_carbon(p, 10)
                        && straight(p, 1, 10)
                },
                &[M::TenBromoOnePhenyldecanOneOne],
            ),
        ],
    );

    t.add(
        "C:C-C-C-C-C-C-C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && straight(p, 2, 12),
                &[M::TenIodoOnePhenyldecane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ketone_carbon(p, 2) && straight(p, 3, 12),
                &[M::TenIodoOnePhenyldecanOneOne],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C:C:C",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Benzene) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOnePhenylnonane]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOnePhenylnonane]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOnePhenylnonane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOnePhenylnonane]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOnePhenylnonane]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOnePhenylnonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 12), &[M::NineHydroxyOnePhenylnonane]),
                    when(|p| methoxy(p, 12), &[M::NineMethoxyOnePhenylnonane]),
                    when(|p| ether_oxygen(p, 12), &[M::NineAlkoxyOnePhenylnonane]),
                    when(|p| ester_oxygen(p, 12), &[M::NineAcyloxyOnePhenylnonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 12), &[M::NineAminoOnePhenylnonane]),
                    when(|p| substituted_amine(p, 12), &[M::NineAlkylaminoOnePhenylnonane]),
                    when(|p| amide_nitrogen(p, 12), &[M::NineAcylaminoOnePhenylnonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 12), &[M::NineMercaptoOnePhenylnonane]),
                    when(|p| thioether(p, 12), &[M::NineAlkylthioOnePhenylnonane]),
                    when(|p| sulfonyl(p, 12), &[M::NineSulfonylOnePhenylnonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 12),
            &[M::NineFluoroOnePhenylnonane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 12),
            &[M::NineChloroOnePhenylnonane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C:C:C",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Benzene) && straight(p, 1, 10),
            &[M::NineBromoOnePhenylnonane],
        )],
    );

    t.add(
        "C:C:C-C-C-C-C-C-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Benzene) && straight(p, 3, 12),
            &[M::NineIodoOnePhenylnonane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Benzene) && ether_oxygen(p, 10) && straight(p, 1, 10),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOnePhenoxynonane]),
                when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOnePhenoxynonane]),
                when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOnePhenoxynonane]),
                when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOnePhenoxynonane]),
                when(|p| ketone_carbon(p, 0), &[M::NineAcylOnePhenoxynonane]),
                when(|p| cyano(p, 0), &[M::NineCyanoOnePhenoxynonane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-C-O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 12),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 12), &[M::NineHydroxyOnePhenoxynonane]),
                when(|p| methoxy(p, 12), &[M::NineMethoxyOnePhenoxynonane]),
                when(|p| ether_oxygen(p, 12), &[M::NineAlkoxyOnePhenoxynonane]),
                when(|p| ester_oxygen(p, 12), &[M::NineAcyloxyOnePhenoxynonane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-C-N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 12),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 12), &[M::NineAminoOnePhenoxynonane]),
                when(|p| substituted_amine(p, 12), &[M::NineAlkylaminoOnePhenoxynonane]),
                when(|p| amide_nitrogen(p, 12), &[M::NineAcylaminoOnePhenoxynonane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-C-S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 12),
            &[],
        ).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 12), &[M::NineMercaptoOnePhenoxynonane]),
                when(|p| thioether(p, 12), &[M::NineAlkylthioOnePhenoxynonane]),
                when(|p| sulfonyl(p, 12), &[M::NineSulfonylOnePhenoxynonane]),
            ]),
        ])],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-C-F",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 12),
            &[M::NineFluoroOnePhenoxynonane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-C-Cl",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 12),
            &[M::NineChloroOnePhenoxynonane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-O-C:C",
        clauses![when(
            |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Benzene) && ether_oxygen(p, 10) && straight(p, 1, 10),
            &[M::NineBromoOnePhenoxynonane],
        )],
    );

    t.add(
        "C:C-O-C-C-C-C-C-C-C-C-C-I",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Benzene) && ether_oxygen(p, 2) && straight(p, 3, 12),
            &[M::NineIodoOnePhenoxynonane],
        )],
    );
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::graph::RingType as R;
    use crate::motif::Motif as M;
    use crate::testing::smiles;

    #[test]
    fn phenylpropanol() {
        let ctx = smiles("OCCCc1ccccc1", &[R::Benzene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ThreeHydroxyOnePhenylpropane));
        assert!(!fp.get(M::FiveChloroOnePhenylpentanOneOne));
    }

    #[test]
    fn chlorovalerophenone() {
        let ctx = smiles("O=C(CCCCCl)c1ccccc1", &[R::Benzene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::FiveChloroOnePhenylpentanOneOne));
        assert!(!fp.get(M::ThreeHydroxyOnePhenylpropane));
    }

    #[test]
    fn bromophenol() {
        let ctx = smiles("Oc1ccc(Br)cc1", &[R::Benzene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ParaHydroxyBromoArene));
        assert!(!fp.get(M::ThreeHydroxyOnePhenylpropane));
    }

    #[test]
    fn methoxybenzoic_acid() {
        let ctx = smiles("COc1ccccc1C(=O)O", &[R::Benzene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::OrthoCarboxyMethoxyArene));
        assert!(!fp.get(M::ThreeHydroxyOnePhenylpropane));
    }

    #[test]
    fn chlorobutyl_phenyl_ether() {
        let ctx = smiles("ClCCCCOc1ccccc1", &[R::Benzene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::FourChloroOnePhenoxybutane));
        assert!(!fp.get(M::ThreeHydroxyOnePhenylpropane));
    }

    #[test]
    fn aminobenzyl_alcohol() {
        let ctx = smiles("Nc1cccc(CO)c1", &[R::Benzene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [M::MetaHydroxymethylAminoArene, M::OneHydroxyOnePhenylmethane] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeHydroxyOnePhenylpropane));
    }

    #[test]
    fn phenylacetic_acid() {
        let ctx = smiles("OC(=O)Cc1ccccc1", &[R::Benzene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::OneCarboxyOnePhenylmethane));
        assert!(!fp.get(M::ThreeHydroxyOnePhenylpropane));
    }

    #[test]
    fn anisaldehyde() {
        let ctx = smiles("COc1ccc(C=O)cc1", &[R::Benzene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ParaFormylMethoxyArene));
        assert!(!fp.get(M::ThreeHydroxyOnePhenylpropane));
    }

    #[test]
    fn nitrotoluene() {
        let ctx = smiles("Cc1ccc([N+](=O)[O-])cc1", &[R::Benzene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ParaMethylNitroArene));
        assert!(!fp.get(M::ThreeHydroxyOnePhenylpropane));
    }

    #[test]
    fn ibuprofen() {
        let ctx = smiles("CC(C)Cc1ccc(C(C)C(=O)O)cc1", &[R::Benzene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ParaDialkylArene));
        assert!(!fp.get(M::ThreeHydroxyOnePhenylpropane));
    }
}
