//! The motif catalogue: every named substructure bit a rule can set.
//!
//! Declaration order is fingerprint order, so new motifs are appended at the
//! end of their group and existing ones are never reordered.

macro_rules! motifs {
    ($($variant:ident => $name:literal,)*) => {
        /// A named structural motif.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Motif {
            $($variant,)*
        }

        impl Motif {
            /// Every motif, in fingerprint order.
            pub const ALL: &'static [Motif] = &[$(Motif::$variant,)*];

            /// Human-readable catalogue name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Motif::$variant => $name,)*
                }
            }
        }
    };
}

motifs! {
    // two-atom paths
    Biaryl => "Biaryl",
    ArylMethyl => "Aryl methyl",
    ArylAlkyl => "Aryl alkyl",
    TertButyl => "tert-Butyl",
    Isopropyl => "Isopropyl",
    AlphaDicarbonyl => "Alpha dicarbonyl",
    RingFusionSingleBond => "Ring fusion single bond",
    CyclohexeneDoubleBond => "Cyclohexene double bond",
    EndocyclicDoubleBond => "Endocyclic double bond",
    ExocyclicDoubleBond => "Exocyclic double bond",
    Enol => "Enol",
    EnolEther => "Enol ether",
    AlphaBetaUnsaturatedCarbonyl => "Alpha,beta-unsaturated carbonyl",
    Styrene => "Styrene",
    Haloalkene => "Haloalkene",
    TerminalAlkene => "Terminal alkene",
    CarbonCarbonDoubleBond => "Carbon-carbon double bond",
    TerminalAlkyne => "Terminal alkyne",
    InternalAlkyne => "Internal alkyne",
    FusedAromaticBond => "Fused aromatic bond",
    Naphthalene => "Naphthalene",
    Anthracene => "Anthracene",
    Phenanthrene => "Phenanthrene",
    Indole => "Indole",
    Benzofuran => "Benzofuran",
    Benzothiophene => "Benzothiophene",
    Benzimidazole => "Benzimidazole",
    Quinoline => "Quinoline",
    Isoquinoline => "Isoquinoline",
    Carbazole => "Carbazole",
    Hydroxyl => "Hydroxyl",
    Phenol => "Phenol",
    CarboxylicAcid => "Carboxylic acid",
    Hemiacetal => "Hemiacetal",
    SugarHydroxyl => "Sugar hydroxyl",
    PrimaryAlcohol => "Primary alcohol",
    SecondaryAlcohol => "Secondary alcohol",
    TertiaryAlcohol => "Tertiary alcohol",
    MethylEster => "Methyl ester",
    Methoxy => "Methoxy",
    GlycosidicOxygen => "Glycosidic oxygen",
    ArylEther => "Aryl ether",
    Carboxylate => "Carboxylate",
    Alkoxide => "Alkoxide",
    KetoneCarbonyl => "Ketone carbonyl",
    CyclicKetone => "Cyclic ketone",
    DiarylKetone => "Diaryl ketone",
    ArylKetone => "Aryl ketone",
    MethylKetone => "Methyl ketone",
    AldehydeCarbonyl => "Aldehyde carbonyl",
    ArylAldehyde => "Aryl aldehyde",
    Formaldehyde => "Formaldehyde",
    CarboxylCarbonyl => "Carboxyl carbonyl",
    CarbonicAcidDerivative => "Carbonic acid derivative",
    EsterCarbonyl => "Ester carbonyl",
    Carbonate => "Carbonate",
    Lactone => "Lactone",
    Formate => "Formate",
    AmideCarbonyl => "Amide carbonyl",
    Urea => "Urea",
    Carbamate => "Carbamate",
    Lactam => "Lactam",
    Formamide => "Formamide",
    Aniline => "Aniline",
    PrimaryAmine => "Primary amine",
    CyclicSecondaryAmine => "Cyclic secondary amine",
    SecondaryAmine => "Secondary amine",
    TertiaryAmine => "Tertiary amine",
    Dimethylamino => "Dimethylamino",
    CyclicTertiaryAmine => "Cyclic tertiary amine",
    QuaternaryAmmonium => "Quaternary ammonium",
    Trimethylammonium => "Trimethylammonium",
    NSubstitutedAzole => "N-substituted azole",
    Nitroarene => "Nitroarene",
    Nitroalkane => "Nitroalkane",
    NMethyl => "N-methyl",
    Oxime => "Oxime",
    Guanidine => "Guanidine",
    Amidine => "Amidine",
    CyclicImine => "Cyclic imine",
    Imine => "Imine",
    Nitrile => "Nitrile",
    ArylNitrile => "Aryl nitrile",
    Pyridine => "Pyridine",
    Pyrimidine => "Pyrimidine",
    Pyrazine => "Pyrazine",
    Triazine => "Triazine",
    Pyrrole => "Pyrrole",
    Imidazole => "Imidazole",
    Thiazole => "Thiazole",
    Oxazole => "Oxazole",
    AzaArene => "Aza-arene",
    Furan => "Furan",
    Isoxazole => "Isoxazole",
    OxaArene => "Oxa-arene",
    Thiophene => "Thiophene",
    ThiaArene => "Thia-arene",
    Thiophenol => "Thiophenol",
    Thiol => "Thiol",
    Methylthio => "Methylthio",
    Sulfide => "Sulfide",
    ArylSulfonyl => "Aryl sulfonyl",
    AlkylSulfonyl => "Alkyl sulfonyl",
    Thiourea => "Thiourea",
    Thioamide => "Thioamide",
    Thiocarbonyl => "Thiocarbonyl",
    Trifluoromethyl => "Trifluoromethyl",
    ArylFluoride => "Aryl fluoride",
    AlkylFluoride => "Alkyl fluoride",
    Trichloromethyl => "Trichloromethyl",
    ArylChloride => "Aryl chloride",
    VinylChloride => "Vinyl chloride",
    AlkylChloride => "Alkyl chloride",
    ArylBromide => "Aryl bromide",
    AlkylBromide => "Alkyl bromide",
    ArylIodide => "Aryl iodide",
    AlkylIodide => "Alkyl iodide",
    Phosphonate => "Phosphonate",
    Phosphine => "Phosphine",
    Organophosphorus => "Organophosphorus",
    TertButyldimethylsilyl => "tert-Butyldimethylsilyl",
    Trimethylsilyl => "Trimethylsilyl",
    Organosilicon => "Organosilicon",
    Hydrazide => "Hydrazide",
    Hydrazone => "Hydrazone",
    Hydrazine => "Hydrazine",
    Azobenzene => "Azobenzene",
    AzoGroup => "Azo group",
    Pyrazole => "Pyrazole",
    Triazole => "Triazole",
    Tetrazole => "Tetrazole",
    Pyridazine => "Pyridazine",
    NOxide => "N-oxide",
    Hydroxylamine => "Hydroxylamine",
    NitrateEster => "Nitrate ester",
    NitroGroup => "Nitro group",
    Nitroso => "Nitroso",
    Hydroperoxide => "Hydroperoxide",
    Endoperoxide => "Endoperoxide",
    Peroxide => "Peroxide",
    PhosphateTriester => "Phosphate triester",
    PhosphateDiester => "Phosphate diester",
    PhosphateMonoester => "Phosphate monoester",
    InorganicPhosphate => "Inorganic phosphate",
    PhosphonateOxo => "Phosphonate oxo",
    PhosphineOxide => "Phosphine oxide",
    Pyrophosphate => "Pyrophosphate",
    PhosphateAnion => "Phosphate anion",
    PhosphateHydroxyl => "Phosphate hydroxyl",
    Sulfoxide => "Sulfoxide",
    SulfonylGroup => "Sulfonyl group",
    SulfateEster => "Sulfate ester",
    SulfonicAcid => "Sulfonic acid",
    SulfonateEster => "Sulfonate ester",
    Sulfonamide => "Sulfonamide",
    Sulfenamide => "Sulfenamide",
    Disulfide => "Disulfide",
    Silanol => "Silanol",
    SilylEther => "Silyl ether",
    // three-atom paths
    AlphaHydroxyKetone => "Alpha hydroxy ketone",
    AlphaHaloKetone => "Alpha halo ketone",
    AlphaAminoKetone => "Alpha amino ketone",
    AcetylGroup => "Acetyl group",
    AlphaHydroxyAldehyde => "Alpha hydroxy aldehyde",
    AlphaHydroxyAcid => "Alpha hydroxy acid",
    BenzoicAcid => "Benzoic acid",
    UnsaturatedAcid => "Unsaturated acid",
    AceticAcidMoiety => "Acetic acid moiety",
    Acetate => "Acetate",
    Benzoate => "Benzoate",
    AminoAcidEster => "Amino acid ester",
    Acetamide => "Acetamide",
    Benzamide => "Benzamide",
    VicinalDiol => "Vicinal diol",
    BenzylAlcohol => "Benzyl alcohol",
    Halohydrin => "Halohydrin",
    SugarHydroxymethyl => "Sugar hydroxymethyl",
    Epoxide => "Epoxide",
    EthyleneGlycolUnit => "Ethylene glycol unit",
    InterglycosidicLinkage => "Interglycosidic linkage",
    PyranoseRingOxygen => "Pyranose ring oxygen",
    FuranoseRingOxygen => "Furanose ring oxygen",
    CyclicEther => "Cyclic ether",
    EsterLinkage => "Ester linkage",
    DiarylEther => "Diaryl ether",
    Anisole => "Anisole",
    AlkylArylEther => "Alkyl aryl ether",
    VinylEther => "Vinyl ether",
    DialkylEther => "Dialkyl ether",
    CarbamicAcid => "Carbamic acid",
    GammaLactone => "Gamma lactone",
    DeltaLactone => "Delta lactone",
    Macrolactone => "Macrolactone",
    ArylEster => "Aryl ester",
    EnolEster => "Enol ester",
    GlycosylEster => "Glycosyl ester",
    CarboxylateAnion => "Carboxylate anion",
    HeteroaromaticLactam => "Heteroaromatic lactam",
    PrimaryAmide => "Primary amide",
    SecondaryAmide => "Secondary amide",
    TertiaryAmide => "Tertiary amide",
    HydroxamicAcid => "Hydroxamic acid",
    Imide => "Imide",
    BetaLactam => "Beta lactam",
    Piperidine => "Piperidine",
    Pyrrolidine => "Pyrrolidine",
    Morpholine => "Morpholine",
    Piperazine => "Piperazine",
    Azepane => "Azepane",
    Diarylamine => "Diarylamine",
    NMethylAniline => "N-methyl aniline",
    AcyclicImide => "Acyclic imide",
    Prenyl => "Prenyl",
    AllylicAlcohol => "Allylic alcohol",
    AllylicEther => "Allylic ether",
    Cinnamoyl => "Cinnamoyl",
    Acryloyl => "Acryloyl",
    MethylCycloalkene => "Methyl cycloalkene",
    Styryl => "Styryl",
    PropargylAlcohol => "Propargyl alcohol",
    Propargyl => "Propargyl",
    Cyanohydrin => "Cyanohydrin",
    Aminonitrile => "Aminonitrile",
    Benzylamine => "Benzylamine",
    BenzylHalide => "Benzyl halide",
    AllylArene => "Allyl arene",
    OrthoDisubstitutedArene => "Ortho disubstituted arene",
    Pyridinium => "Pyridinium",
    AromaticNH => "Aromatic n h",
    Methylenedioxy => "Methylenedioxy",
    Catechol => "Catechol",
    Guaiacol => "Guaiacol",
    OrthoHydroxyArylCarbonyl => "Ortho hydroxy aryl carbonyl",
    OrthoDialkoxyArene => "Ortho dialkoxy arene",
    OrthoAminophenol => "Ortho aminophenol",
    OrthoAminoArylCarbonyl => "Ortho amino aryl carbonyl",
    OrthoPhenylenediamine => "Ortho phenylenediamine",
    OrthoDichloroarene => "Ortho dichloroarene",
    OrthoChlorophenol => "Ortho chlorophenol",
    Thiolane => "Thiolane",
    DiarylSulfide => "Diaryl sulfide",
    DialkylSulfide => "Dialkyl sulfide",
    Sulfone => "Sulfone",
    SulfateGroup => "Sulfate group",
    SulfonateGroup => "Sulfonate group",
    GlycosylPhosphate => "Glycosyl phosphate",
    ArylPhosphate => "Aryl phosphate",
    AlkylPhosphate => "Alkyl phosphate",
    SilylEster => "Silyl ester",
    TrimethylsilylEther => "Trimethylsilyl ether",
    ArylSilylEther => "Aryl silyl ether",
    Aziridine => "Aziridine",
    AlphaAminoAcid => "Alpha amino acid",
    PeptideBackbone => "Peptide backbone",
    BetaAminoAlcohol => "Beta amino alcohol",
    Ethylenediamine => "Ethylenediamine",
    SchiffBase => "Schiff base",
    NAlkylImine => "N-alkyl imine",
    Difluoromethylene => "Difluoromethylene",
    Dichloromethyl => "Dichloromethyl",
    Orthoester => "Orthoester",
    AnomericCenter => "Anomeric center",
    CyclicAcetal => "Cyclic acetal",
    Formal => "Formal",
    Acetal => "Acetal",
    Cysteine => "Cysteine",
    Nucleoside => "Nucleoside",
    NMethylAzole => "N-methyl azole",
    AzaArylCarbonyl => "Aza aryl carbonyl",
    MethylAzaArene => "Methyl aza arene",
    Enolate => "Enolate",
    CyclicEnolEther => "Cyclic enol ether",
    VinylEsterOxygen => "Vinyl ester oxygen",
    VicinalDichloride => "Vicinal dichloride",
    // four-atom paths
    SugarEster => "Sugar ester",
    GalloylLikeSugarEster => "Galloyl-like sugar ester",
    GlycerolEster => "Glycerol ester",
    EthylEster => "Ethyl ester",
    UnsaturatedEster => "Unsaturated ester",
    NAcetylHexosamine => "N-Acetylhexosamine",
    Anilide => "Anilide",
    PeptideBond => "Peptide bond",
    NMethylAmide => "N-methyl amide",
    NSubstitutedLactam => "N-substituted lactam",
    BetaDicarbonyl => "Beta dicarbonyl",
    BetaAminoAcid => "Beta amino acid",
    BetaHydroxyCarbonyl => "Beta hydroxy carbonyl",
    ArylPropanoid => "Aryl propanoid",
    PyroneCarbonyl => "Pyrone carbonyl",
    Quinone => "Quinone",
    CyclicEnone => "Cyclic enone",
    Enone => "Enone",
    Enal => "Enal",
    AcrylateEster => "Acrylate ester",
    Acrylamide => "Acrylamide",
    CinnamicScaffold => "Cinnamic scaffold",
    BenzopyranoneCarbonyl => "Benzopyranone carbonyl",
    FusedArylKetone => "Fused aryl ketone",
    Salicylate => "Salicylate",
    SalicylicAcid => "Salicylic acid",
    AcetylatedSugar => "Acetylated sugar",
    Ethoxy => "Ethoxy",
    FuranoseSideChain => "Furanose side chain",
    PhenolicGlycoside => "Phenolic glycoside",
    AllylArylEther => "Allyl aryl ether",
    BenzylArylEther => "Benzyl aryl ether",
    HydroxyMethoxyArene => "Hydroxy methoxy arene",
    Benzodioxane => "Benzodioxane",
    Veratrole => "Veratrole",
    TrihydroxyArene => "Trihydroxy arene",
    Phthalate => "Phthalate",
    OrthoXylene => "Ortho xylene",
    BenzoCycloalkane => "Benzo cycloalkane",
    CyclicDiene => "Cyclic diene",
    Butadiene => "Butadiene",
    ConjugatedDiene => "Conjugated diene",
    MethyleneInterruptedDiene => "Methylene interrupted diene",
    InternalAlkeneChain => "Internal alkene chain",
    TrisubstitutedRingAlkene => "Trisubstituted ring alkene",
    Phosphocholine => "Phosphocholine",
    Phosphoethanolamine => "Phosphoethanolamine",
    PrimarySugarPhosphate => "Primary sugar phosphate",
    GlycerolPhosphate => "Glycerol phosphate",
    ConjugatedDiyne => "Conjugated diyne",
    HomoallylicAlcohol => "Homoallylic alcohol",
    BetaGammaUnsaturatedCarbonyl => "Beta,gamma-unsaturated carbonyl",
    AlkylGlycoside => "Alkyl glycoside",
    MethoxymethylEther => "Methoxymethyl ether",
    Oxalate => "Oxalate",
    AlphaKetoAcid => "Alpha keto acid",
    AlphaDiketone => "Alpha diketone",
    GammaAminoAcid => "Gamma amino acid",
    Azetidine => "Azetidine",
    Choline => "Choline",
    Ethanolamine => "Ethanolamine",
    AminoSugar => "Amino sugar",
    // five-atom paths
    Pyrogallol => "Pyrogallol",
    Phloroglucinol => "Phloroglucinol",
    Resorcinol => "Resorcinol",
    MetaDimethoxyArene => "Meta dimethoxy arene",
    MetaOxygenatedPhenol => "Meta oxygenated phenol",
    AromaticAminoAcid => "Aromatic amino acid",
    Tryptamine => "Tryptamine",
    Catecholamine => "Catecholamine",
    Phenethylamine => "Phenethylamine",
    NMethylPhenethylamine => "N-methyl phenethylamine",
    ArylAceticAcid => "Aryl acetic acid",
    BenzylKetone => "Benzyl ketone",
    Indanone => "Indanone",
    CyclopentaneRing => "Cyclopentane ring",
    Cyclopentanone => "Cyclopentanone",
    PolymethyleneChain => "Polymethylene chain",
    IsoprenoidBranch => "Isoprenoid branch",
    NucleosideSugar => "Nucleoside sugar",
    Furanose => "Furanose",
    TetrahydrofuranRing => "Tetrahydrofuran ring",
    GammaHydroxyAcid => "Gamma hydroxy acid",
    ButyrolactoneRing => "Butyrolactone ring",
    ProlineRing => "Proline ring",
    Putrescine => "Putrescine",
    NAcylEthanolamine => "N-acyl ethanolamine",
    NAcylAminoAcid => "N-acyl amino acid",
    NAcylPhenethylamine => "N-acyl phenethylamine",
    CholineEster => "Choline ester",
    DiacylGlycerolLinkage => "Diacyl glycerol linkage",
    PhenethylEster => "Phenethyl ester",
    CoumarinLactone => "Coumarin lactone",
    IsocoumarinLactone => "Isocoumarin lactone",
    PhenylEster => "Phenyl ester",
    Chalcone => "Chalcone",
    CinnamicAcid => "Cinnamic acid",
    CinnamateEster => "Cinnamate ester",
    Cinnamamide => "Cinnamamide",
    Cinnamaldehyde => "Cinnamaldehyde",
    Crotonyl => "Crotonyl",
    PyrroleRing => "Pyrrole ring",
    AcylPyrrole => "Acyl pyrrole",
    PyridineRingWalk => "Pyridine ring walk",
    NicotinoylLike => "Nicotinoyl-like",
    FuranRing => "Furan ring",
    Furfuryl => "Furfuryl",
    BenzofuranRingWalk => "Benzofuran ring walk",
    ThiopheneRing => "Thiophene ring",
    Purine => "Purine",
    ImidazoleRing => "Imidazole ring",
    HistidineSideChain => "Histidine side chain",
    PyrimidineRingWalk => "Pyrimidine ring walk",
    OneFiveDiene => "1,5-Diene",
    TerpenoidHeadToTail => "Terpenoid head to tail",
    // six-atom paths
    BenzeneRing => "Benzene ring",
    PolysubstitutedBenzene => "Polysubstituted benzene",
    TrisubstitutedBenzene => "Trisubstituted benzene",
    DisubstitutedBenzene => "Disubstituted benzene",
    MonosubstitutedBenzene => "Monosubstituted benzene",
    PolyhydroxyBenzene => "Polyhydroxy benzene",
    PolymethoxyBenzene => "Polymethoxy benzene",
    PolyhaloBenzene => "Polyhalo benzene",
    ChromoneBenzoRing => "Chromone benzo ring",
    PolyoxygenatedChromoneBenzoRing => "Polyoxygenated chromone benzo ring",
    PolyoxygenatedChromonePyrone => "Polyoxygenated chromone pyrone",
    CyclohexaneRing => "Cyclohexane ring",
    Inositol => "Inositol",
    Cyclitol => "Cyclitol",
    Cyclohexanone => "Cyclohexanone",
    LongMethyleneRun => "Long methylene run",
    UronicAcid => "Uronic acid",
    HexosamineRing => "Hexosamine ring",
    DeoxyHexopyranose => "Deoxy hexopyranose",
    Hexopyranose => "Hexopyranose",
    Pentopyranose => "Pentopyranose",
    TetrahydropyranRing => "Tetrahydropyran ring",
    Pyranoside => "Pyranoside",
    AlditolChain => "Alditol chain",
    AldoseOpenChain => "Aldose open chain",
    KetoseOpenChain => "Ketose open chain",
    SaturatedAcylChain => "Saturated acyl chain",
    PyridineRing => "Pyridine ring",
    QuinolinePyridoRing => "Quinoline pyrido ring",
    IsoquinolinePyridoRing => "Isoquinoline pyrido ring",
    PyridoxineLike => "Pyridoxine-like",
    Hydroxypyridine => "Hydroxypyridine",
    Hydroquinone => "Hydroquinone",
    ParaAlkoxyPhenol => "Para alkoxy phenol",
    ParaDialkoxyArene => "Para dialkoxy arene",
    ParaHydroxybenzoyl => "Para hydroxybenzoyl",
    Coumaroyl => "Coumaroyl",
    FlavonoidParaHydroxyBRing => "Flavonoid para-hydroxy B ring",
    ParaHydroxyphenylAlkyl => "Para hydroxyphenyl alkyl",
    ParaMethoxyStyrene => "Para methoxy styrene",
    ConjugatedTriene => "Conjugated triene",
    MethylatedPolyene => "Methylated polyene",
    LysineSideChain => "Lysine side chain",
    Cadaverine => "Cadaverine",
    PiperidineRing => "Piperidine ring",
    PipecolicAcid => "Pipecolic acid",
    PolyethyleneGlycolUnit => "Polyethylene glycol unit",
    PhenylalanineScaffold => "Phenylalanine scaffold",
    ArylPropanoicAcid => "Aryl propanoic acid",
    ArylPropanoateEster => "Aryl propanoate ester",
    Dihydrochalcone => "Dihydrochalcone",
    // seven-atom paths
    ChromonePyroneWalk => "Chromone pyrone walk",
    Flavonol => "Flavonol",
    Flavone => "Flavone",
    Isoflavone => "Isoflavone",
    FiveHydroxyChromone => "5-Hydroxychromone",
    CoumarinPyroneWalk => "Coumarin pyrone walk",
    ThreeArylCoumarin => "3-Arylcoumarin",
    Neoflavone => "Neoflavone",
    PhosphatidylcholineHead => "Phosphatidylcholine head",
    PhosphatidylethanolamineHead => "Phosphatidylethanolamine head",
    TriphosphateChain => "Triphosphate chain",
    OrganoTriphosphate => "Organo triphosphate",
    Diketopiperazine => "Diketopiperazine",
    Dipeptide => "Dipeptide",
    PeptideChainSegment => "Peptide chain segment",
    PentitolChain => "Pentitol chain",
    SteroidCoreWalk => "Steroid core walk",
    IsoprenoidChainSegment => "Isoprenoid chain segment",
    OmegaThreeTerminus => "Omega-3 terminus",
    GeranylUnit => "Geranyl unit",
    Geraniol => "Geraniol",
    GeranylEther => "Geranyl ether",
    // eight-atom paths
    DecalinWalk => "Decalin walk",
    LongAlkylTail => "Long alkyl tail",
    Ceramide => "Ceramide",
    Sphingosine => "Sphingosine",
    DiacylGlycerophospholipid => "Diacyl glycerophospholipid",
    Lysophospholipid => "Lysophospholipid",
    MethyleneInterruptedTriene => "Methylene interrupted triene",
    NaphthaleneWalk => "Naphthalene walk",
    AnthraceneWalk => "Anthracene walk",
    PhenanthreneWalk => "Phenanthrene walk",
    Stilbene => "Stilbene",
    PolyhydroxyStilbene => "Polyhydroxy stilbene",
    // nine-atom paths
    Diacylglycerol => "Diacylglycerol",
    Triacylglycerol => "Triacylglycerol",
    OneThreeDiacylglycerol => "1,3-Diacylglycerol",
    IndoleWalk => "Indole walk",
    AlkylIndole => "Alkyl indole",
    BenzimidazoleWalk => "Benzimidazole walk",
    ConjugatedTetraene => "Conjugated tetraene",
    CarotenoidPolyene => "Carotenoid polyene",
    // ten-atom paths
    NaphthalenePerimeter => "Naphthalene perimeter",
    QuinolinePerimeter => "Quinoline perimeter",
    IsoquinolinePerimeter => "Isoquinoline perimeter",
    ConjugatedPentaene => "Conjugated pentaene",
    OmegaSixTerminus => "Omega-6 terminus",
    OmegaNineTerminus => "Omega-9 terminus",
    // eleven-atom paths
    FarnesylUnit => "Farnesyl unit",
    Farnesol => "Farnesol",
    FarnesylPhosphate => "Farnesyl phosphate",
    LongChainFattyAlcohol => "Long chain fatty alcohol",
    WaxEsterAlkoxy => "Wax ester alkoxy",
    LongChainAlkylEther => "Long chain alkyl ether",
    // twelve-atom paths
    RetinoidChromophore => "Retinoid chromophore",
    Retinal => "Retinal",
    RetinoicAcid => "Retinoic acid",
    Retinol => "Retinol",
    RetinylEster => "Retinyl ester",
    LongChainAldehyde => "Long chain aldehyde",
    LongChainAcyl => "Long chain acyl",
    // thirteen-atom paths
    ConjugatedHexaene => "Conjugated hexaene",
    ExtendedCarotenoidChain => "Extended carotenoid chain",
    VeryLongMethyleneRun => "Very long methylene run",
    PolyprenylSkeleton => "Polyprenyl skeleton",
    // alkyl chains: end-group pairs, dihalides, oligoethers
    NPropanol => "1-Propanol",
    NPropoxy => "n-Propoxy",
    NPropylEster => "n-Propyl ester",
    Isobutanol => "Isobutanol",
    Isobutoxy => "Isobutoxy",
    IsobutylEster => "Isobutyl ester",
    ArylPropanol => "3-Arylpropan-1-ol",
    ArylPropylEther => "3-Arylpropyl ether",
    ArylPropylEster => "3-Arylpropyl ester",
    NButanol => "1-Butanol",
    NButoxy => "n-Butoxy",
    NButylEster => "n-Butyl ester",
    Isopentanol => "Isopentanol",
    Isopentyloxy => "Isopentyloxy",
    IsopentylEster => "Isopentyl ester",
    ArylButanol => "4-Arylbutan-1-ol",
    ArylButylEther => "4-Arylbutyl ether",
    ArylButylEster => "4-Arylbutyl ester",
    NPentanol => "1-Pentanol",
    NPentyloxy => "n-Pentyloxy",
    NPentylEster => "n-Pentyl ester",
    Isohexanol => "Isohexanol",
    Isohexyloxy => "Isohexyloxy",
    IsohexylEster => "Isohexyl ester",
    ArylPentanol => "5-Arylpentan-1-ol",
    ArylPentylEther => "5-Arylpentyl ether",
    ArylPentylEster => "5-Arylpentyl ester",
    NHexanol => "1-Hexanol",
    NHexyloxy => "n-Hexyloxy",
    NHexylEster => "n-Hexyl ester",
    Isoheptanol => "Isoheptanol",
    Isoheptyloxy => "Isoheptyloxy",
    IsoheptylEster => "Isoheptyl ester",
    ArylHexanol => "6-Arylhexan-1-ol",
    ArylHexylEther => "6-Arylhexyl ether",
    ArylHexylEster => "6-Arylhexyl ester",
    NHeptanol => "1-Heptanol",
    NHeptyloxy => "n-Heptyloxy",
    NHeptylEster => "n-Heptyl ester",
    Isooctanol => "Isooctanol",
    Isooctyloxy => "Isooctyloxy",
    IsooctylEster => "Isooctyl ester",
    NOctanol => "1-Octanol",
    NOctyloxy => "n-Octyloxy",
    NOctylEster => "n-Octyl ester",
    NNonanol => "1-Nonanol",
    NNonyloxy => "n-Nonyloxy",
    NNonylEster => "n-Nonyl ester",
    NDecanol => "1-Decanol",
    NDecyloxy => "n-Decyloxy",
    NDecylEster => "n-Decyl ester",
    NUndecanol => "1-Undecanol",
    NUndecyloxy => "n-Undecyloxy",
    NUndecylEster => "n-Undecyl ester",
    NDodecanol => "1-Dodecanol",
    NDodecyloxy => "n-Dodecyloxy",
    NDodecylEster => "n-Dodecyl ester",
    NPropylamine => "n-Propylamine",
    NPropylamino => "n-Propylamino",
    NPropylAmide => "N-n-Propyl amide",
    NPropylammonium => "n-Propylammonium",
    Isobutylamine => "Isobutylamine",
    NIsobutylAmide => "N-Isobutyl amide",
    ArylPropylamine => "3-Arylpropylamine",
    ArylPropylAmide => "N-(3-Arylpropyl) amide",
    NButylamine => "n-Butylamine",
    NButylamino => "n-Butylamino",
    NButylAmide => "N-n-Butyl amide",
    NButylammonium => "n-Butylammonium",
    Isopentylamine => "Isopentylamine",
    NIsopentylAmide => "N-Isopentyl amide",
    ArylButylamine => "4-Arylbutylamine",
    ArylButylAmide => "N-(4-Arylbutyl) amide",
    NPentylamine => "n-Pentylamine",
    NPentylamino => "n-Pentylamino",
    NPentylAmide => "N-n-Pentyl amide",
    NPentylammonium => "n-Pentylammonium",
    Isohexylamine => "Isohexylamine",
    NIsohexylAmide => "N-Isohexyl amide",
    ArylPentylamine => "5-Arylpentylamine",
    ArylPentylAmide => "N-(5-Arylpentyl) amide",
    NHexylamine => "n-Hexylamine",
    NHexylamino => "n-Hexylamino",
    NHexylAmide => "N-n-Hexyl amide",
    NHexylammonium => "n-Hexylammonium",
    ArylHexylamine => "6-Arylhexylamine",
    ArylHexylAmide => "N-(6-Arylhexyl) amide",
    NHeptylamine => "n-Heptylamine",
    NHeptylamino => "n-Heptylamino",
    NHeptylAmide => "N-n-Heptyl amide",
    NHeptylammonium => "n-Heptylammonium",
    NOctylamine => "n-Octylamine",
    NOctylamino => "n-Octylamino",
    NOctylAmide => "N-n-Octyl amide",
    NOctylammonium => "n-Octylammonium",
    NNonylamine => "n-Nonylamine",
    NNonylamino => "n-Nonylamino",
    NNonylAmide => "N-n-Nonyl amide",
    NNonylammonium => "n-Nonylammonium",
    NDecylamine => "n-Decylamine",
    NDecylamino => "n-Decylamino",
    NDecylAmide => "N-n-Decyl amide",
    NDecylammonium => "n-Decylammonium",
    NUndecylamine => "n-Undecylamine",
    NUndecylamino => "n-Undecylamino",
    NUndecylAmide => "N-n-Undecyl amide",
    NUndecylammonium => "n-Undecylammonium",
    NDodecylamine => "n-Dodecylamine",
    NDodecylamino => "n-Dodecylamino",
    NDodecylAmide => "N-n-Dodecyl amide",
    NDodecylammonium => "n-Dodecylammonium",
    NPropanethiol => "1-Propanethiol",
    NPropylthio => "n-Propylthio",
    NPropylsulfonyl => "n-Propylsulfonyl",
    NButanethiol => "1-Butanethiol",
    NButylthio => "n-Butylthio",
    NButylsulfonyl => "n-Butylsulfonyl",
    NPentanethiol => "1-Pentanethiol",
    NPentylthio => "n-Pentylthio",
    NPentylsulfonyl => "n-Pentylsulfonyl",
    NHexanethiol => "1-Hexanethiol",
    NHexylthio => "n-Hexylthio",
    NHexylsulfonyl => "n-Hexylsulfonyl",
    NHeptanethiol => "1-Heptanethiol",
    NHeptylthio => "n-Heptylthio",
    NHeptylsulfonyl => "n-Heptylsulfonyl",
    NOctanethiol => "1-Octanethiol",
    NOctylthio => "n-Octylthio",
    NOctylsulfonyl => "n-Octylsulfonyl",
    NNonanethiol => "1-Nonanethiol",
    NNonylthio => "n-Nonylthio",
    NNonylsulfonyl => "n-Nonylsulfonyl",
    NDecanethiol => "1-Decanethiol",
    NDecylthio => "n-Decylthio",
    NDecylsulfonyl => "n-Decylsulfonyl",
    NUndecanethiol => "1-Undecanethiol",
    NUndecylthio => "n-Undecylthio",
    NUndecylsulfonyl => "n-Undecylsulfonyl",
    NDodecanethiol => "1-Dodecanethiol",
    NDodecylthio => "n-Dodecylthio",
    NDodecylsulfonyl => "n-Dodecylsulfonyl",
    Ethylphosphonate => "Ethylphosphonate",
    Ethylphosphine => "Ethylphosphine",
    NPropylphosphonate => "n-Propylphosphonate",
    NPropylphosphine => "n-Propylphosphine",
    NButylphosphonate => "n-Butylphosphonate",
    NButylphosphine => "n-Butylphosphine",
    NPentylphosphonate => "n-Pentylphosphonate",
    NPentylphosphine => "n-Pentylphosphine",
    NHexylphosphonate => "n-Hexylphosphonate",
    NHexylphosphine => "n-Hexylphosphine",
    NHeptylphosphonate => "n-Heptylphosphonate",
    NHeptylphosphine => "n-Heptylphosphine",
    NOctylphosphonate => "n-Octylphosphonate",
    NOctylphosphine => "n-Octylphosphine",
    NNonylphosphonate => "n-Nonylphosphonate",
    NNonylphosphine => "n-Nonylphosphine",
    NDecylphosphonate => "n-Decylphosphonate",
    NDecylphosphine => "n-Decylphosphine",
    NUndecylphosphonate => "n-Undecylphosphonate",
    NUndecylphosphine => "n-Undecylphosphine",
    NDodecylphosphonate => "n-Dodecylphosphonate",
    NDodecylphosphine => "n-Dodecylphosphine",
    Ethylsilyl => "Ethylsilyl",
    NPropylsilyl => "n-Propylsilyl",
    NButylsilyl => "n-Butylsilyl",
    NPentylsilyl => "n-Pentylsilyl",
    NHexylsilyl => "n-Hexylsilyl",
    NHeptylsilyl => "n-Heptylsilyl",
    NOctylsilyl => "n-Octylsilyl",
    NNonylsilyl => "n-Nonylsilyl",
    NDecylsilyl => "n-Decylsilyl",
    NUndecylsilyl => "n-Undecylsilyl",
    NDodecylsilyl => "n-Dodecylsilyl",
    Perfluoroethyl => "Perfluoroethyl",
    EthylFluoride => "Ethyl fluoride",
    Perfluoropropyl => "Perfluoropropyl",
    NPropylFluoride => "n-Propyl fluoride",
    Perfluorobutyl => "Perfluorobutyl",
    NButylFluoride => "n-Butyl fluoride",
    Perfluoropentyl => "Perfluoropentyl",
    NPentylFluoride => "n-Pentyl fluoride",
    Perfluorohexyl => "Perfluorohexyl",
    NHexylFluoride => "n-Hexyl fluoride",
    Perfluoroheptyl => "Perfluoroheptyl",
    NHeptylFluoride => "n-Heptyl fluoride",
    Perfluorooctyl => "Perfluorooctyl",
    NOctylFluoride => "n-Octyl fluoride",
    Perfluorononyl => "Perfluorononyl",
    NNonylFluoride => "n-Nonyl fluoride",
    Perfluorodecyl => "Perfluorodecyl",
    NDecylFluoride => "n-Decyl fluoride",
    Perfluoroundecyl => "Perfluoroundecyl",
    NUndecylFluoride => "n-Undecyl fluoride",
    Perfluorododecyl => "Perfluorododecyl",
    NDodecylFluoride => "n-Dodecyl fluoride",
    NPropylChloride => "n-Propyl chloride",
    NButylChloride => "n-Butyl chloride",
    NPentylChloride => "n-Pentyl chloride",
    NHexylChloride => "n-Hexyl chloride",
    NHeptylChloride => "n-Heptyl chloride",
    NOctylChloride => "n-Octyl chloride",
    NNonylChloride => "n-Nonyl chloride",
    NDecylChloride => "n-Decyl chloride",
    NUndecylChloride => "n-Undecyl chloride",
    NDodecylChloride => "n-Dodecyl chloride",
    EthylBromide => "Ethyl bromide",
    NPropylBromide => "n-Propyl bromide",
    NButylBromide => "n-Butyl bromide",
    NPentylBromide => "n-Pentyl bromide",
    NHexylBromide => "n-Hexyl bromide",
    NHeptylBromide => "n-Heptyl bromide",
    NOctylBromide => "n-Octyl bromide",
    NNonylBromide => "n-Nonyl bromide",
    NDecylBromide => "n-Decyl bromide",
    NUndecylBromide => "n-Undecyl bromide",
    NDodecylBromide => "n-Dodecyl bromide",
    EthylIodide => "Ethyl iodide",
    NPropylIodide => "n-Propyl iodide",
    NButylIodide => "n-Butyl iodide",
    NPentylIodide => "n-Pentyl iodide",
    NHexylIodide => "n-Hexyl iodide",
    NHeptylIodide => "n-Heptyl iodide",
    NOctylIodide => "n-Octyl iodide",
    NNonylIodide => "n-Nonyl iodide",
    NDecylIodide => "n-Decyl iodide",
    NUndecylIodide => "n-Undecyl iodide",
    NDodecylIodide => "n-Dodecyl iodide",
    AlkoxyEthanol => "2-Alkoxyethan-1-ol",
    HydroxyethylEster => "2-Hydroxyethyl ester",
    DialkoxyEthane => "1,2-Dialkoxyethane",
    AlkoxyethylEster => "2-Alkoxyethyl ester",
    EthanediylDiester => "Ethane-1,2-diyl diester",
    AlphaOmegaPropanediol => "Propane-1,3-diol",
    AlkoxyPropanol => "3-Alkoxypropan-1-ol",
    HydroxypropylEster => "3-Hydroxypropyl ester",
    DialkoxyPropane => "1,3-Dialkoxypropane",
    AlkoxypropylEster => "3-Alkoxypropyl ester",
    PropanediylDiester => "Propane-1,3-diyl diester",
    AlphaOmegaButanediol => "Butane-1,4-diol",
    AlkoxyButanol => "4-Alkoxybutan-1-ol",
    HydroxybutylEster => "4-Hydroxybutyl ester",
    DialkoxyButane => "1,4-Dialkoxybutane",
    AlkoxybutylEster => "4-Alkoxybutyl ester",
    ButanediylDiester => "Butane-1,4-diyl diester",
    AlkoxyPentanol => "5-Alkoxypentan-1-ol",
    HydroxypentylEster => "5-Hydroxypentyl ester",
    DialkoxyPentane => "1,5-Dialkoxypentane",
    AlkoxypentylEster => "5-Alkoxypentyl ester",
    PentanediylDiester => "Pentane-1,5-diyl diester",
    AlphaOmegaHexanediol => "Hexane-1,6-diol",
    AlkoxyHexanol => "6-Alkoxyhexan-1-ol",
    HydroxyhexylEster => "6-Hydroxyhexyl ester",
    DialkoxyHexane => "1,6-Dialkoxyhexane",
    AlkoxyhexylEster => "6-Alkoxyhexyl ester",
    HexanediylDiester => "Hexane-1,6-diyl diester",
    AlphaOmegaHeptanediol => "Heptane-1,7-diol",
    AlkoxyHeptanol => "7-Alkoxyheptan-1-ol",
    HydroxyheptylEster => "7-Hydroxyheptyl ester",
    DialkoxyHeptane => "1,7-Dialkoxyheptane",
    AlkoxyheptylEster => "7-Alkoxyheptyl ester",
    HeptanediylDiester => "Heptane-1,7-diyl diester",
    AlphaOmegaOctanediol => "Octane-1,8-diol",
    AlkoxyOctanol => "8-Alkoxyoctan-1-ol",
    HydroxyoctylEster => "8-Hydroxyoctyl ester",
    DialkoxyOctane => "1,8-Dialkoxyoctane",
    AlkoxyoctylEster => "8-Alkoxyoctyl ester",
    OctanediylDiester => "Octane-1,8-diyl diester",
    AlphaOmegaNonanediol => "Nonane-1,9-diol",
    AlkoxyNonanol => "9-Alkoxynonan-1-ol",
    HydroxynonylEster => "9-Hydroxynonyl ester",
    DialkoxyNonane => "1,9-Dialkoxynonane",
    AlkoxynonylEster => "9-Alkoxynonyl ester",
    NonanediylDiester => "Nonane-1,9-diyl diester",
    AlphaOmegaDecanediol => "Decane-1,10-diol",
    AlkoxyDecanol => "10-Alkoxydecan-1-ol",
    HydroxydecylEster => "10-Hydroxydecyl ester",
    DialkoxyDecane => "1,10-Dialkoxydecane",
    AlkoxydecylEster => "10-Alkoxydecyl ester",
    DecanediylDiester => "Decane-1,10-diyl diester",
    AlphaOmegaUndecanediol => "Undecane-1,11-diol",
    AlkoxyUndecanol => "11-Alkoxyundecan-1-ol",
    HydroxyundecylEster => "11-Hydroxyundecyl ester",
    DialkoxyUndecane => "1,11-Dialkoxyundecane",
    AlkoxyundecylEster => "11-Alkoxyundecyl ester",
    UndecanediylDiester => "Undecane-1,11-diyl diester",
    AlkylMethanediamine => "N-Alkyl methanediamine",
    DialkylMethanediamine => "N,N'-Dialkyl methanediamine",
    AminomethylAmide => "N-(Aminomethyl) amide",
    MethanediylBisamide => "N,N'-Methanediyl bisamide",
    AlkylEthanediamine => "N-Alkyl ethane-1,2-diamine",
    DialkylEthanediamine => "N,N'-Dialkyl ethane-1,2-diamine",
    AminoethylAmide => "N-(2-Aminoethyl) amide",
    EthanediylBisamide => "N,N'-Ethane-1,2-diyl bisamide",
    AlphaOmegaPropanediamine => "Propane-1,3-diamine",
    AlkylPropanediamine => "N-Alkyl propane-1,3-diamine",
    DialkylPropanediamine => "N,N'-Dialkyl propane-1,3-diamine",
    AminopropylAmide => "N-(3-Aminopropyl) amide",
    PropanediylBisamide => "N,N'-Propane-1,3-diyl bisamide",
    AlkylButanediamine => "N-Alkyl butane-1,4-diamine",
    DialkylButanediamine => "N,N'-Dialkyl butane-1,4-diamine",
    AminobutylAmide => "N-(4-Aminobutyl) amide",
    ButanediylBisamide => "N,N'-Butane-1,4-diyl bisamide",
    AlkylPentanediamine => "N-Alkyl pentane-1,5-diamine",
    DialkylPentanediamine => "N,N'-Dialkyl pentane-1,5-diamine",
    AminopentylAmide => "N-(5-Aminopentyl) amide",
    PentanediylBisamide => "N,N'-Pentane-1,5-diyl bisamide",
    AlphaOmegaHexanediamine => "Hexane-1,6-diamine",
    AlkylHexanediamine => "N-Alkyl hexane-1,6-diamine",
    DialkylHexanediamine => "N,N'-Dialkyl hexane-1,6-diamine",
    AminohexylAmide => "N-(6-Aminohexyl) amide",
    HexanediylBisamide => "N,N'-Hexane-1,6-diyl bisamide",
    AlphaOmegaHeptanediamine => "Heptane-1,7-diamine",
    AlkylHeptanediamine => "N-Alkyl heptane-1,7-diamine",
    DialkylHeptanediamine => "N,N'-Dialkyl heptane-1,7-diamine",
    AminoheptylAmide => "N-(7-Aminoheptyl) amide",
    HeptanediylBisamide => "N,N'-Heptane-1,7-diyl bisamide",
    AlphaOmegaOctanediamine => "Octane-1,8-diamine",
    AlkylOctanediamine => "N-Alkyl octane-1,8-diamine",
    DialkylOctanediamine => "N,N'-Dialkyl octane-1,8-diamine",
    AminooctylAmide => "N-(8-Aminooctyl) amide",
    OctanediylBisamide => "N,N'-Octane-1,8-diyl bisamide",
    AlphaOmegaNonanediamine => "Nonane-1,9-diamine",
    AlkylNonanediamine => "N-Alkyl nonane-1,9-diamine",
    DialkylNonanediamine => "N,N'-Dialkyl nonane-1,9-diamine",
    AminononylAmide => "N-(9-Aminononyl) amide",
    NonanediylBisamide => "N,N'-Nonane-1,9-diyl bisamide",
    AlphaOmegaDecanediamine => "Decane-1,10-diamine",
    AlkylDecanediamine => "N-Alkyl decane-1,10-diamine",
    DialkylDecanediamine => "N,N'-Dialkyl decane-1,10-diamine",
    AminodecylAmide => "N-(10-Aminodecyl) amide",
    DecanediylBisamide => "N,N'-Decane-1,10-diyl bisamide",
    AlphaOmegaUndecanediamine => "Undecane-1,11-diamine",
    AlkylUndecanediamine => "N-Alkyl undecane-1,11-diamine",
    DialkylUndecanediamine => "N,N'-Dialkyl undecane-1,11-diamine",
    AminoundecylAmide => "N-(11-Aminoundecyl) amide",
    UndecanediylBisamide => "N,N'-Undecane-1,11-diyl bisamide",
    AminoMethanol => "Aminomethanol",
    AlkoxymethylAmine => "Alkoxymethylamine",
    AminomethylEster => "Aminomethyl ester",
    AlkylaminoMethanol => "(Alkylamino)methanol",
    AlkylaminomethylEster => "(Alkylamino)methyl ester",
    HydroxymethylAmmonium => "Hydroxymethylammonium",
    AcyloxymethylAmmonium => "Acyloxymethylammonium",
    HydroxymethylAmide => "N-(Hydroxymethyl) amide",
    AlkoxymethylAmide => "N-(Alkoxymethyl) amide",
    AcyloxymethylAmide => "N-(Acyloxymethyl) amide",
    AlkoxyethylAmine => "2-Alkoxyethylamine",
    AminoethylEster => "2-Aminoethyl ester",
    AlkylaminoEthanol => "2-(Alkylamino)ethan-1-ol",
    AlkylaminoethylEster => "2-(Alkylamino)ethyl ester",
    AlkoxyethylAmide => "N-(2-Alkoxyethyl) amide",
    AcyloxyethylAmide => "N-(2-Acyloxyethyl) amide",
    AminoPropanol => "3-Aminopropan-1-ol",
    AlkoxypropylAmine => "3-Alkoxypropylamine",
    AminopropylEster => "3-Aminopropyl ester",
    AlkylaminoPropanol => "3-(Alkylamino)propan-1-ol",
    AlkylaminopropylEster => "3-(Alkylamino)propyl ester",
    HydroxypropylAmmonium => "3-Hydroxypropylammonium",
    AcyloxypropylAmmonium => "3-Acyloxypropylammonium",
    HydroxypropylAmide => "N-(3-Hydroxypropyl) amide",
    AlkoxypropylAmide => "N-(3-Alkoxypropyl) amide",
    AcyloxypropylAmide => "N-(3-Acyloxypropyl) amide",
    AminoButanol => "4-Aminobutan-1-ol",
    AlkoxybutylAmine => "4-Alkoxybutylamine",
    AminobutylEster => "4-Aminobutyl ester",
    AlkylaminoButanol => "4-(Alkylamino)butan-1-ol",
    AlkylaminobutylEster => "4-(Alkylamino)butyl ester",
    HydroxybutylAmmonium => "4-Hydroxybutylammonium",
    AcyloxybutylAmmonium => "4-Acyloxybutylammonium",
    HydroxybutylAmide => "N-(4-Hydroxybutyl) amide",
    AlkoxybutylAmide => "N-(4-Alkoxybutyl) amide",
    AcyloxybutylAmide => "N-(4-Acyloxybutyl) amide",
    AminoPentanol => "5-Aminopentan-1-ol",
    AlkoxypentylAmine => "5-Alkoxypentylamine",
    AminopentylEster => "5-Aminopentyl ester",
    AlkylaminoPentanol => "5-(Alkylamino)pentan-1-ol",
    AlkylaminopentylEster => "5-(Alkylamino)pentyl ester",
    HydroxypentylAmmonium => "5-Hydroxypentylammonium",
    AcyloxypentylAmmonium => "5-Acyloxypentylammonium",
    HydroxypentylAmide => "N-(5-Hydroxypentyl) amide",
    AlkoxypentylAmide => "N-(5-Alkoxypentyl) amide",
    AcyloxypentylAmide => "N-(5-Acyloxypentyl) amide",
    AminoHexanol => "6-Aminohexan-1-ol",
    AlkoxyhexylAmine => "6-Alkoxyhexylamine",
    AminohexylEster => "6-Aminohexyl ester",
    AlkylaminoHexanol => "6-(Alkylamino)hexan-1-ol",
    AlkylaminohexylEster => "6-(Alkylamino)hexyl ester",
    HydroxyhexylAmmonium => "6-Hydroxyhexylammonium",
    AcyloxyhexylAmmonium => "6-Acyloxyhexylammonium",
    HydroxyhexylAmide => "N-(6-Hydroxyhexyl) amide",
    AlkoxyhexylAmide => "N-(6-Alkoxyhexyl) amide",
    AcyloxyhexylAmide => "N-(6-Acyloxyhexyl) amide",
    AminoHeptanol => "7-Aminoheptan-1-ol",
    AlkoxyheptylAmine => "7-Alkoxyheptylamine",
    AminoheptylEster => "7-Aminoheptyl ester",
    AlkylaminoHeptanol => "7-(Alkylamino)heptan-1-ol",
    AlkylaminoheptylEster => "7-(Alkylamino)heptyl ester",
    HydroxyheptylAmmonium => "7-Hydroxyheptylammonium",
    AcyloxyheptylAmmonium => "7-Acyloxyheptylammonium",
    HydroxyheptylAmide => "N-(7-Hydroxyheptyl) amide",
    AlkoxyheptylAmide => "N-(7-Alkoxyheptyl) amide",
    AcyloxyheptylAmide => "N-(7-Acyloxyheptyl) amide",
    AminoOctanol => "8-Aminooctan-1-ol",
    AlkoxyoctylAmine => "8-Alkoxyoctylamine",
    AminooctylEster => "8-Aminooctyl ester",
    AlkylaminoOctanol => "8-(Alkylamino)octan-1-ol",
    AlkylaminooctylEster => "8-(Alkylamino)octyl ester",
    HydroxyoctylAmmonium => "8-Hydroxyoctylammonium",
    AcyloxyoctylAmmonium => "8-Acyloxyoctylammonium",
    HydroxyoctylAmide => "N-(8-Hydroxyoctyl) amide",
    AlkoxyoctylAmide => "N-(8-Alkoxyoctyl) amide",
    AcyloxyoctylAmide => "N-(8-Acyloxyoctyl) amide",
    AminoNonanol => "9-Aminononan-1-ol",
    AlkoxynonylAmine => "9-Alkoxynonylamine",
    AminononylEster => "9-Aminononyl ester",
    AlkylaminoNonanol => "9-(Alkylamino)nonan-1-ol",
    AlkylaminononylEster => "9-(Alkylamino)nonyl ester",
    HydroxynonylAmmonium => "9-Hydroxynonylammonium",
    AcyloxynonylAmmonium => "9-Acyloxynonylammonium",
    HydroxynonylAmide => "N-(9-Hydroxynonyl) amide",
    AlkoxynonylAmide => "N-(9-Alkoxynonyl) amide",
    AcyloxynonylAmide => "N-(9-Acyloxynonyl) amide",
    AminoDecanol => "10-Aminodecan-1-ol",
    AlkoxydecylAmine => "10-Alkoxydecylamine",
    AminodecylEster => "10-Aminodecyl ester",
    AlkylaminoDecanol => "10-(Alkylamino)decan-1-ol",
    AlkylaminodecylEster => "10-(Alkylamino)decyl ester",
    HydroxydecylAmmonium => "10-Hydroxydecylammonium",
    AcyloxydecylAmmonium => "10-Acyloxydecylammonium",
    HydroxydecylAmide => "N-(10-Hydroxydecyl) amide",
    AlkoxydecylAmide => "N-(10-Alkoxydecyl) amide",
    AcyloxydecylAmide => "N-(10-Acyloxydecyl) amide",
    AminoUndecanol => "11-Aminoundecan-1-ol",
    AlkoxyundecylAmine => "11-Alkoxyundecylamine",
    AminoundecylEster => "11-Aminoundecyl ester",
    AlkylaminoUndecanol => "11-(Alkylamino)undecan-1-ol",
    AlkylaminoundecylEster => "11-(Alkylamino)undecyl ester",
    HydroxyundecylAmmonium => "11-Hydroxyundecylammonium",
    AcyloxyundecylAmmonium => "11-Acyloxyundecylammonium",
    HydroxyundecylAmide => "N-(11-Hydroxyundecyl) amide",
    AlkoxyundecylAmide => "N-(11-Alkoxyundecyl) amide",
    AcyloxyundecylAmide => "N-(11-Acyloxyundecyl) amide",
    AminoMethanethiol => "Aminomethanethiol",
    AlkylthiomethylAmine => "(Alkylthio)methylamine",
    AminoMethanesulfonyl => "Aminomethanesulfonyl",
    MercaptomethylAmide => "N-(Mercaptomethyl) amide",
    AcylthiomethylAmide => "N-(Acylthiomethyl) amide",
    AlkylthiomethylAmide => "N-(Alkylthiomethyl) amide",
    AcylaminoMethanesulfonyl => "(Acylamino)methanesulfonyl",
    AminoEthanethiol => "2-Aminoethane-1-thiol",
    AlkylthioethylAmine => "2-(Alkylthio)ethylamine",
    AminoEthanesulfonyl => "2-Aminoethanesulfonyl",
    MercaptoethylAmide => "N-(2-Mercaptoethyl) amide",
    AcylthioethylAmide => "N-(2-Acylthioethyl) amide",
    AlkylthioethylAmide => "N-(2-Alkylthioethyl) amide",
    AcylaminoEthanesulfonyl => "2-(Acylamino)ethanesulfonyl",
    AminoPropanethiol => "3-Aminopropane-1-thiol",
    AlkylthiopropylAmine => "3-(Alkylthio)propylamine",
    AminoPropanesulfonyl => "3-Aminopropanesulfonyl",
    MercaptopropylAmide => "N-(3-Mercaptopropyl) amide",
    AcylthiopropylAmide => "N-(3-Acylthiopropyl) amide",
    AlkylthiopropylAmide => "N-(3-Alkylthiopropyl) amide",
    AcylaminoPropanesulfonyl => "3-(Acylamino)propanesulfonyl",
    AminoButanethiol => "4-Aminobutane-1-thiol",
    AlkylthiobutylAmine => "4-(Alkylthio)butylamine",
    AminoButanesulfonyl => "4-Aminobutanesulfonyl",
    MercaptobutylAmide => "N-(4-Mercaptobutyl) amide",
    AcylthiobutylAmide => "N-(4-Acylthiobutyl) amide",
    AlkylthiobutylAmide => "N-(4-Alkylthiobutyl) amide",
    AcylaminoButanesulfonyl => "4-(Acylamino)butanesulfonyl",
    AminoPentanethiol => "5-Aminopentane-1-thiol",
    AlkylthiopentylAmine => "5-(Alkylthio)pentylamine",
    AminoPentanesulfonyl => "5-Aminopentanesulfonyl",
    MercaptopentylAmide => "N-(5-Mercaptopentyl) amide",
    AcylthiopentylAmide => "N-(5-Acylthiopentyl) amide",
    AlkylthiopentylAmide => "N-(5-Alkylthiopentyl) amide",
    AcylaminoPentanesulfonyl => "5-(Acylamino)pentanesulfonyl",
    AminoHexanethiol => "6-Aminohexane-1-thiol",
    AlkylthiohexylAmine => "6-(Alkylthio)hexylamine",
    AminoHexanesulfonyl => "6-Aminohexanesulfonyl",
    MercaptohexylAmide => "N-(6-Mercaptohexyl) amide",
    AcylthiohexylAmide => "N-(6-Acylthiohexyl) amide",
    AlkylthiohexylAmide => "N-(6-Alkylthiohexyl) amide",
    AcylaminoHexanesulfonyl => "6-(Acylamino)hexanesulfonyl",
    AminoHeptanethiol => "7-Aminoheptane-1-thiol",
    AlkylthioheptylAmine => "7-(Alkylthio)heptylamine",
    AminoHeptanesulfonyl => "7-Aminoheptanesulfonyl",
    MercaptoheptylAmide => "N-(7-Mercaptoheptyl) amide",
    AcylthioheptylAmide => "N-(7-Acylthioheptyl) amide",
    AlkylthioheptylAmide => "N-(7-Alkylthioheptyl) amide",
    AcylaminoHeptanesulfonyl => "7-(Acylamino)heptanesulfonyl",
    AminoOctanethiol => "8-Aminooctane-1-thiol",
    AlkylthiooctylAmine => "8-(Alkylthio)octylamine",
    AminoOctanesulfonyl => "8-Aminooctanesulfonyl",
    MercaptooctylAmide => "N-(8-Mercaptooctyl) amide",
    AcylthiooctylAmide => "N-(8-Acylthiooctyl) amide",
    AlkylthiooctylAmide => "N-(8-Alkylthiooctyl) amide",
    AcylaminoOctanesulfonyl => "8-(Acylamino)octanesulfonyl",
    AminoNonanethiol => "9-Aminononane-1-thiol",
    AlkylthiononylAmine => "9-(Alkylthio)nonylamine",
    AminoNonanesulfonyl => "9-Aminononanesulfonyl",
    MercaptononylAmide => "N-(9-Mercaptononyl) amide",
    AcylthiononylAmide => "N-(9-Acylthiononyl) amide",
    AlkylthiononylAmide => "N-(9-Alkylthiononyl) amide",
    AcylaminoNonanesulfonyl => "9-(Acylamino)nonanesulfonyl",
    AminoDecanethiol => "10-Aminodecane-1-thiol",
    AlkylthiodecylAmine => "10-(Alkylthio)decylamine",
    AminoDecanesulfonyl => "10-Aminodecanesulfonyl",
    MercaptodecylAmide => "N-(10-Mercaptodecyl) amide",
    AcylthiodecylAmide => "N-(10-Acylthiodecyl) amide",
    AlkylthiodecylAmide => "N-(10-Alkylthiodecyl) amide",
    AcylaminoDecanesulfonyl => "10-(Acylamino)decanesulfonyl",
    AminoUndecanethiol => "11-Aminoundecane-1-thiol",
    AlkylthioundecylAmine => "11-(Alkylthio)undecylamine",
    AminoUndecanesulfonyl => "11-Aminoundecanesulfonyl",
    MercaptoundecylAmide => "N-(11-Mercaptoundecyl) amide",
    AcylthioundecylAmide => "N-(11-Acylthioundecyl) amide",
    AlkylthioundecylAmide => "N-(11-Alkylthioundecyl) amide",
    AcylaminoUndecanesulfonyl => "11-(Acylamino)undecanesulfonyl",
    MercaptoMethanol => "Mercaptomethanol",
    AlkylthioMethanol => "(Alkylthio)methanol",
    HydroxyMethanesulfonyl => "Hydroxymethanesulfonyl",
    AlkoxymethylSulfide => "Alkoxymethyl sulfide",
    AcyloxymethylSulfide => "Acyloxymethyl sulfide",
    AcyloxyMethanesulfonyl => "Acyloxymethanesulfonyl",
    MercaptoEthanol => "2-Mercaptoethan-1-ol",
    AlkylthioEthanol => "2-(Alkylthio)ethan-1-ol",
    HydroxyEthanesulfonyl => "2-Hydroxyethanesulfonyl",
    AlkoxyethylSulfide => "2-Alkoxyethyl sulfide",
    AcyloxyethylSulfide => "2-Acyloxyethyl sulfide",
    AcyloxyEthanesulfonyl => "2-Acyloxyethanesulfonyl",
    MercaptoPropanol => "3-Mercaptopropan-1-ol",
    AlkylthioPropanol => "3-(Alkylthio)propan-1-ol",
    HydroxyPropanesulfonyl => "3-Hydroxypropanesulfonyl",
    AlkoxypropylSulfide => "3-Alkoxypropyl sulfide",
    AcyloxypropylSulfide => "3-Acyloxypropyl sulfide",
    AcyloxyPropanesulfonyl => "3-Acyloxypropanesulfonyl",
    MercaptoButanol => "4-Mercaptobutan-1-ol",
    AlkylthioButanol => "4-(Alkylthio)butan-1-ol",
    HydroxyButanesulfonyl => "4-Hydroxybutanesulfonyl",
    AlkoxybutylSulfide => "4-Alkoxybutyl sulfide",
    AcyloxybutylSulfide => "4-Acyloxybutyl sulfide",
    AcyloxyButanesulfonyl => "4-Acyloxybutanesulfonyl",
    MercaptoPentanol => "5-Mercaptopentan-1-ol",
    AlkylthioPentanol => "5-(Alkylthio)pentan-1-ol",
    HydroxyPentanesulfonyl => "5-Hydroxypentanesulfonyl",
    AlkoxypentylSulfide => "5-Alkoxypentyl sulfide",
    AcyloxypentylSulfide => "5-Acyloxypentyl sulfide",
    AcyloxyPentanesulfonyl => "5-Acyloxypentanesulfonyl",
    MercaptoHexanol => "6-Mercaptohexan-1-ol",
    AlkylthioHexanol => "6-(Alkylthio)hexan-1-ol",
    HydroxyHexanesulfonyl => "6-Hydroxyhexanesulfonyl",
    AlkoxyhexylSulfide => "6-Alkoxyhexyl sulfide",
    AcyloxyhexylSulfide => "6-Acyloxyhexyl sulfide",
    AcyloxyHexanesulfonyl => "6-Acyloxyhexanesulfonyl",
    MercaptoHeptanol => "7-Mercaptoheptan-1-ol",
    AlkylthioHeptanol => "7-(Alkylthio)heptan-1-ol",
    HydroxyHeptanesulfonyl => "7-Hydroxyheptanesulfonyl",
    AlkoxyheptylSulfide => "7-Alkoxyheptyl sulfide",
    AcyloxyheptylSulfide => "7-Acyloxyheptyl sulfide",
    AcyloxyHeptanesulfonyl => "7-Acyloxyheptanesulfonyl",
    MercaptoOctanol => "8-Mercaptooctan-1-ol",
    AlkylthioOctanol => "8-(Alkylthio)octan-1-ol",
    HydroxyOctanesulfonyl => "8-Hydroxyoctanesulfonyl",
    AlkoxyoctylSulfide => "8-Alkoxyoctyl sulfide",
    AcyloxyoctylSulfide => "8-Acyloxyoctyl sulfide",
    AcyloxyOctanesulfonyl => "8-Acyloxyoctanesulfonyl",
    MercaptoNonanol => "9-Mercaptononan-1-ol",
    AlkylthioNonanol => "9-(Alkylthio)nonan-1-ol",
    HydroxyNonanesulfonyl => "9-Hydroxynonanesulfonyl",
    AlkoxynonylSulfide => "9-Alkoxynonyl sulfide",
    AcyloxynonylSulfide => "9-Acyloxynonyl sulfide",
    AcyloxyNonanesulfonyl => "9-Acyloxynonanesulfonyl",
    MercaptoDecanol => "10-Mercaptodecan-1-ol",
    AlkylthioDecanol => "10-(Alkylthio)decan-1-ol",
    HydroxyDecanesulfonyl => "10-Hydroxydecanesulfonyl",
    AlkoxydecylSulfide => "10-Alkoxydecyl sulfide",
    AcyloxydecylSulfide => "10-Acyloxydecyl sulfide",
    AcyloxyDecanesulfonyl => "10-Acyloxydecanesulfonyl",
    MercaptoUndecanol => "11-Mercaptoundecan-1-ol",
    AlkylthioUndecanol => "11-(Alkylthio)undecan-1-ol",
    HydroxyUndecanesulfonyl => "11-Hydroxyundecanesulfonyl",
    AlkoxyundecylSulfide => "11-Alkoxyundecyl sulfide",
    AcyloxyundecylSulfide => "11-Acyloxyundecyl sulfide",
    AcyloxyUndecanesulfonyl => "11-Acyloxyundecanesulfonyl",
    AlphaOmegaMethanedithiol => "Methanedithiol",
    AlkylthioMethanethiol => "(Alkylthio)methanethiol",
    BisalkylthioMethane => "Bis(alkylthio)methane",
    AlphaOmegaEthanedithiol => "Ethane-1,2-dithiol",
    AlkylthioEthanethiol => "2-(Alkylthio)ethane-1-thiol",
    BisalkylthioEthane => "1,2-Bis(alkylthio)ethane",
    AlphaOmegaPropanedithiol => "Propane-1,3-dithiol",
    AlkylthioPropanethiol => "3-(Alkylthio)propane-1-thiol",
    BisalkylthioPropane => "1,3-Bis(alkylthio)propane",
    AlphaOmegaButanedithiol => "Butane-1,4-dithiol",
    AlkylthioButanethiol => "4-(Alkylthio)butane-1-thiol",
    BisalkylthioButane => "1,4-Bis(alkylthio)butane",
    AlphaOmegaPentanedithiol => "Pentane-1,5-dithiol",
    AlkylthioPentanethiol => "5-(Alkylthio)pentane-1-thiol",
    BisalkylthioPentane => "1,5-Bis(alkylthio)pentane",
    AlphaOmegaHexanedithiol => "Hexane-1,6-dithiol",
    AlkylthioHexanethiol => "6-(Alkylthio)hexane-1-thiol",
    BisalkylthioHexane => "1,6-Bis(alkylthio)hexane",
    AlphaOmegaHeptanedithiol => "Heptane-1,7-dithiol",
    AlkylthioHeptanethiol => "7-(Alkylthio)heptane-1-thiol",
    BisalkylthioHeptane => "1,7-Bis(alkylthio)heptane",
    AlphaOmegaOctanedithiol => "Octane-1,8-dithiol",
    AlkylthioOctanethiol => "8-(Alkylthio)octane-1-thiol",
    BisalkylthioOctane => "1,8-Bis(alkylthio)octane",
    AlphaOmegaNonanedithiol => "Nonane-1,9-dithiol",
    AlkylthioNonanethiol => "9-(Alkylthio)nonane-1-thiol",
    BisalkylthioNonane => "1,9-Bis(alkylthio)nonane",
    AlphaOmegaDecanedithiol => "Decane-1,10-dithiol",
    AlkylthioDecanethiol => "10-(Alkylthio)decane-1-thiol",
    BisalkylthioDecane => "1,10-Bis(alkylthio)decane",
    AlphaOmegaUndecanedithiol => "Undecane-1,11-dithiol",
    AlkylthioUndecanethiol => "11-(Alkylthio)undecane-1-thiol",
    BisalkylthioUndecane => "1,11-Bis(alkylthio)undecane",
    ChloroMethanol => "Chloromethanol",
    ChloromethylEther => "Chloromethyl ether",
    ChloromethylEster => "Chloromethyl ester",
    ChloroEthanol => "2-Chloroethan-1-ol",
    ChloroethylEther => "2-Chloroethyl ether",
    ChloroethylEster => "2-Chloroethyl ester",
    ChloroPropanol => "3-Chloropropan-1-ol",
    ChloropropylEther => "3-Chloropropyl ether",
    ChloropropylEster => "3-Chloropropyl ester",
    ChloroButanol => "4-Chlorobutan-1-ol",
    ChlorobutylEther => "4-Chlorobutyl ether",
    ChlorobutylEster => "4-Chlorobutyl ester",
    ChloroPentanol => "5-Chloropentan-1-ol",
    ChloropentylEther => "5-Chloropentyl ether",
    ChloropentylEster => "5-Chloropentyl ester",
    ChloroHexanol => "6-Chlorohexan-1-ol",
    ChlorohexylEther => "6-Chlorohexyl ether",
    ChlorohexylEster => "6-Chlorohexyl ester",
    ChloroHeptanol => "7-Chloroheptan-1-ol",
    ChloroheptylEther => "7-Chloroheptyl ether",
    ChloroheptylEster => "7-Chloroheptyl ester",
    ChloroOctanol => "8-Chlorooctan-1-ol",
    ChlorooctylEther => "8-Chlorooctyl ether",
    ChlorooctylEster => "8-Chlorooctyl ester",
    ChloroNonanol => "9-Chlorononan-1-ol",
    ChlorononylEther => "9-Chlorononyl ether",
    ChlorononylEster => "9-Chlorononyl ester",
    ChloroDecanol => "10-Chlorodecan-1-ol",
    ChlorodecylEther => "10-Chlorodecyl ether",
    ChlorodecylEster => "10-Chlorodecyl ester",
    ChloroUndecanol => "11-Chloroundecan-1-ol",
    ChloroundecylEther => "11-Chloroundecyl ether",
    ChloroundecylEster => "11-Chloroundecyl ester",
    ChloromethylAmine => "Chloromethylamine",
    ChloromethylAmide => "N-(Chloromethyl) amide",
    ChloroethylAmine => "2-Chloroethylamine",
    ChloroethylAmide => "N-(2-Chloroethyl) amide",
    ChloropropylAmine => "3-Chloropropylamine",
    ChloropropylAmide => "N-(3-Chloropropyl) amide",
    ChlorobutylAmine => "4-Chlorobutylamine",
    ChlorobutylAmide => "N-(4-Chlorobutyl) amide",
    ChloropentylAmine => "5-Chloropentylamine",
    ChloropentylAmide => "N-(5-Chloropentyl) amide",
    ChlorohexylAmine => "6-Chlorohexylamine",
    ChlorohexylAmide => "N-(6-Chlorohexyl) amide",
    ChloroheptylAmine => "7-Chloroheptylamine",
    ChloroheptylAmide => "N-(7-Chloroheptyl) amide",
    ChlorooctylAmine => "8-Chlorooctylamine",
    ChlorooctylAmide => "N-(8-Chlorooctyl) amide",
    ChlorononylAmine => "9-Chlorononylamine",
    ChlorononylAmide => "N-(9-Chlorononyl) amide",
    ChlorodecylAmine => "10-Chlorodecylamine",
    ChlorodecylAmide => "N-(10-Chlorodecyl) amide",
    ChloroundecylAmine => "11-Chloroundecylamine",
    ChloroundecylAmide => "N-(11-Chloroundecyl) amide",
    BromoMethanol => "Bromomethanol",
    BromomethylEther => "Bromomethyl ether",
    BromomethylEster => "Bromomethyl ester",
    BromoEthanol => "2-Bromoethan-1-ol",
    BromoethylEther => "2-Bromoethyl ether",
    BromoethylEster => "2-Bromoethyl ester",
    BromoPropanol => "3-Bromopropan-1-ol",
    BromopropylEther => "3-Bromopropyl ether",
    BromopropylEster => "3-Bromopropyl ester",
    BromoButanol => "4-Bromobutan-1-ol",
    BromobutylEther => "4-Bromobutyl ether",
    BromobutylEster => "4-Bromobutyl ester",
    BromoPentanol => "5-Bromopentan-1-ol",
    BromopentylEther => "5-Bromopentyl ether",
    BromopentylEster => "5-Bromopentyl ester",
    BromoHexanol => "6-Bromohexan-1-ol",
    BromohexylEther => "6-Bromohexyl ether",
    BromohexylEster => "6-Bromohexyl ester",
    BromoHeptanol => "7-Bromoheptan-1-ol",
    BromoheptylEther => "7-Bromoheptyl ether",
    BromoheptylEster => "7-Bromoheptyl ester",
    BromoOctanol => "8-Bromooctan-1-ol",
    BromooctylEther => "8-Bromooctyl ether",
    BromooctylEster => "8-Bromooctyl ester",
    BromoNonanol => "9-Bromononan-1-ol",
    BromononylEther => "9-Bromononyl ether",
    BromononylEster => "9-Bromononyl ester",
    BromoDecanol => "10-Bromodecan-1-ol",
    BromodecylEther => "10-Bromodecyl ether",
    BromodecylEster => "10-Bromodecyl ester",
    BromoUndecanol => "11-Bromoundecan-1-ol",
    BromoundecylEther => "11-Bromoundecyl ether",
    BromoundecylEster => "11-Bromoundecyl ester",
    BromomethylAmine => "Bromomethylamine",
    BromomethylAmide => "N-(Bromomethyl) amide",
    BromoethylAmine => "2-Bromoethylamine",
    BromoethylAmide => "N-(2-Bromoethyl) amide",
    BromopropylAmine => "3-Bromopropylamine",
    BromopropylAmide => "N-(3-Bromopropyl) amide",
    BromobutylAmine => "4-Bromobutylamine",
    BromobutylAmide => "N-(4-Bromobutyl) amide",
    BromopentylAmine => "5-Bromopentylamine",
    BromopentylAmide => "N-(5-Bromopentyl) amide",
    BromohexylAmine => "6-Bromohexylamine",
    BromohexylAmide => "N-(6-Bromohexyl) amide",
    BromoheptylAmine => "7-Bromoheptylamine",
    BromoheptylAmide => "N-(7-Bromoheptyl) amide",
    BromooctylAmine => "8-Bromooctylamine",
    BromooctylAmide => "N-(8-Bromooctyl) amide",
    BromononylAmine => "9-Bromononylamine",
    BromononylAmide => "N-(9-Bromononyl) amide",
    BromodecylAmine => "10-Bromodecylamine",
    BromodecylAmide => "N-(10-Bromodecyl) amide",
    BromoundecylAmine => "11-Bromoundecylamine",
    BromoundecylAmide => "N-(11-Bromoundecyl) amide",
    FluoroMethanol => "Fluoromethanol",
    FluoromethylEster => "Fluoromethyl ester",
    FluoroEthanol => "2-Fluoroethan-1-ol",
    FluoroethylEster => "2-Fluoroethyl ester",
    FluoroPropanol => "3-Fluoropropan-1-ol",
    FluoropropylEster => "3-Fluoropropyl ester",
    FluoroButanol => "4-Fluorobutan-1-ol",
    FluorobutylEster => "4-Fluorobutyl ester",
    FluoroPentanol => "5-Fluoropentan-1-ol",
    FluoropentylEster => "5-Fluoropentyl ester",
    FluoroHexanol => "6-Fluorohexan-1-ol",
    FluorohexylEster => "6-Fluorohexyl ester",
    FluoroHeptanol => "7-Fluoroheptan-1-ol",
    FluoroheptylEster => "7-Fluoroheptyl ester",
    FluoroOctanol => "8-Fluorooctan-1-ol",
    FluorooctylEster => "8-Fluorooctyl ester",
    FluoroNonanol => "9-Fluorononan-1-ol",
    FluorononylEster => "9-Fluorononyl ester",
    FluoroDecanol => "10-Fluorodecan-1-ol",
    FluorodecylEster => "10-Fluorodecyl ester",
    FluoroUndecanol => "11-Fluoroundecan-1-ol",
    FluoroundecylEster => "11-Fluoroundecyl ester",
    FluoromethylAmine => "Fluoromethylamine",
    FluoroethylAmine => "2-Fluoroethylamine",
    FluoropropylAmine => "3-Fluoropropylamine",
    FluorobutylAmine => "4-Fluorobutylamine",
    FluoropentylAmine => "5-Fluoropentylamine",
    FluorohexylAmine => "6-Fluorohexylamine",
    FluoroheptylAmine => "7-Fluoroheptylamine",
    FluorooctylAmine => "8-Fluorooctylamine",
    FluorononylAmine => "9-Fluorononylamine",
    FluorodecylAmine => "10-Fluorodecylamine",
    FluoroundecylAmine => "11-Fluoroundecylamine",
    IodoMethanol => "Iodomethanol",
    IodomethylEster => "Iodomethyl ester",
    IodoEthanol => "2-Iodoethan-1-ol",
    IodoethylEster => "2-Iodoethyl ester",
    IodoPropanol => "3-Iodopropan-1-ol",
    IodopropylEster => "3-Iodopropyl ester",
    IodoButanol => "4-Iodobutan-1-ol",
    IodobutylEster => "4-Iodobutyl ester",
    IodoPentanol => "5-Iodopentan-1-ol",
    IodopentylEster => "5-Iodopentyl ester",
    IodoHexanol => "6-Iodohexan-1-ol",
    IodohexylEster => "6-Iodohexyl ester",
    IodoHeptanol => "7-Iodoheptan-1-ol",
    IodoheptylEster => "7-Iodoheptyl ester",
    IodoOctanol => "8-Iodooctan-1-ol",
    IodooctylEster => "8-Iodooctyl ester",
    IodoNonanol => "9-Iodononan-1-ol",
    IodononylEster => "9-Iodononyl ester",
    IodoDecanol => "10-Iododecan-1-ol",
    IododecylEster => "10-Iododecyl ester",
    IodoUndecanol => "11-Iodoundecan-1-ol",
    IodoundecylEster => "11-Iodoundecyl ester",
    IodomethylAmine => "Iodomethylamine",
    IodoethylAmine => "2-Iodoethylamine",
    IodopropylAmine => "3-Iodopropylamine",
    IodobutylAmine => "4-Iodobutylamine",
    IodopentylAmine => "5-Iodopentylamine",
    IodohexylAmine => "6-Iodohexylamine",
    IodoheptylAmine => "7-Iodoheptylamine",
    IodooctylAmine => "8-Iodooctylamine",
    IodononylAmine => "9-Iodononylamine",
    IododecylAmine => "10-Iododecylamine",
    IodoundecylAmine => "11-Iodoundecylamine",
    ChloroMethanethiol => "Chloromethanethiol",
    ChloromethylSulfide => "Chloromethyl sulfide",
    ChloroEthanethiol => "2-Chloroethane-1-thiol",
    ChloroethylSulfide => "2-Chloroethyl sulfide",
    ChloroPropanethiol => "3-Chloropropane-1-thiol",
    ChloropropylSulfide => "3-Chloropropyl sulfide",
    ChloroButanethiol => "4-Chlorobutane-1-thiol",
    ChlorobutylSulfide => "4-Chlorobutyl sulfide",
    ChloroPentanethiol => "5-Chloropentane-1-thiol",
    ChloropentylSulfide => "5-Chloropentyl sulfide",
    ChloroHexanethiol => "6-Chlorohexane-1-thiol",
    ChlorohexylSulfide => "6-Chlorohexyl sulfide",
    ChloroHeptanethiol => "7-Chloroheptane-1-thiol",
    ChloroheptylSulfide => "7-Chloroheptyl sulfide",
    ChloroOctanethiol => "8-Chlorooctane-1-thiol",
    ChlorooctylSulfide => "8-Chlorooctyl sulfide",
    ChloroNonanethiol => "9-Chlorononane-1-thiol",
    ChlorononylSulfide => "9-Chlorononyl sulfide",
    ChloroDecanethiol => "10-Chlorodecane-1-thiol",
    ChlorodecylSulfide => "10-Chlorodecyl sulfide",
    ChloroUndecanethiol => "11-Chloroundecane-1-thiol",
    ChloroundecylSulfide => "11-Chloroundecyl sulfide",
    BromoMethanethiol => "Bromomethanethiol",
    BromomethylSulfide => "Bromomethyl sulfide",
    BromoEthanethiol => "2-Bromoethane-1-thiol",
    BromoethylSulfide => "2-Bromoethyl sulfide",
    BromoPropanethiol => "3-Bromopropane-1-thiol",
    BromopropylSulfide => "3-Bromopropyl sulfide",
    BromoButanethiol => "4-Bromobutane-1-thiol",
    BromobutylSulfide => "4-Bromobutyl sulfide",
    BromoPentanethiol => "5-Bromopentane-1-thiol",
    BromopentylSulfide => "5-Bromopentyl sulfide",
    BromoHexanethiol => "6-Bromohexane-1-thiol",
    BromohexylSulfide => "6-Bromohexyl sulfide",
    BromoHeptanethiol => "7-Bromoheptane-1-thiol",
    BromoheptylSulfide => "7-Bromoheptyl sulfide",
    BromoOctanethiol => "8-Bromooctane-1-thiol",
    BromooctylSulfide => "8-Bromooctyl sulfide",
    BromoNonanethiol => "9-Bromononane-1-thiol",
    BromononylSulfide => "9-Bromononyl sulfide",
    BromoDecanethiol => "10-Bromodecane-1-thiol",
    BromodecylSulfide => "10-Bromodecyl sulfide",
    BromoUndecanethiol => "11-Bromoundecane-1-thiol",
    BromoundecylSulfide => "11-Bromoundecyl sulfide",
    HydroxymethylPhosphonate => "Hydroxymethylphosphonate",
    AcyloxymethylPhosphonate => "Acyloxymethylphosphonate",
    HydroxyethylPhosphonate => "2-Hydroxyethylphosphonate",
    AcyloxyethylPhosphonate => "2-Acyloxyethylphosphonate",
    HydroxypropylPhosphonate => "3-Hydroxypropylphosphonate",
    AcyloxypropylPhosphonate => "3-Acyloxypropylphosphonate",
    HydroxybutylPhosphonate => "4-Hydroxybutylphosphonate",
    AcyloxybutylPhosphonate => "4-Acyloxybutylphosphonate",
    HydroxypentylPhosphonate => "5-Hydroxypentylphosphonate",
    AcyloxypentylPhosphonate => "5-Acyloxypentylphosphonate",
    HydroxyhexylPhosphonate => "6-Hydroxyhexylphosphonate",
    AcyloxyhexylPhosphonate => "6-Acyloxyhexylphosphonate",
    HydroxyheptylPhosphonate => "7-Hydroxyheptylphosphonate",
    AcyloxyheptylPhosphonate => "7-Acyloxyheptylphosphonate",
    HydroxyoctylPhosphonate => "8-Hydroxyoctylphosphonate",
    AcyloxyoctylPhosphonate => "8-Acyloxyoctylphosphonate",
    HydroxynonylPhosphonate => "9-Hydroxynonylphosphonate",
    AcyloxynonylPhosphonate => "9-Acyloxynonylphosphonate",
    HydroxydecylPhosphonate => "10-Hydroxydecylphosphonate",
    AcyloxydecylPhosphonate => "10-Acyloxydecylphosphonate",
    HydroxyundecylPhosphonate => "11-Hydroxyundecylphosphonate",
    AcyloxyundecylPhosphonate => "11-Acyloxyundecylphosphonate",
    AminomethylPhosphonate => "Aminomethylphosphonate",
    AminoethylPhosphonate => "2-Aminoethylphosphonate",
    AminopropylPhosphonate => "3-Aminopropylphosphonate",
    AminobutylPhosphonate => "4-Aminobutylphosphonate",
    AminopentylPhosphonate => "5-Aminopentylphosphonate",
    AminohexylPhosphonate => "6-Aminohexylphosphonate",
    AminoheptylPhosphonate => "7-Aminoheptylphosphonate",
    AminooctylPhosphonate => "8-Aminooctylphosphonate",
    AminononylPhosphonate => "9-Aminononylphosphonate",
    AminodecylPhosphonate => "10-Aminodecylphosphonate",
    AminoundecylPhosphonate => "11-Aminoundecylphosphonate",
    Difluoromethane => "Difluoromethane",
    OneTwoDifluoroethane => "1,2-Difluoroethane",
    OneThreeDifluoropropane => "1,3-Difluoropropane",
    OneFourDifluorobutane => "1,4-Difluorobutane",
    OneFiveDifluoropentane => "1,5-Difluoropentane",
    OneSixDifluorohexane => "1,6-Difluorohexane",
    OneSevenDifluoroheptane => "1,7-Difluoroheptane",
    OneEightDifluorooctane => "1,8-Difluorooctane",
    OneNineDifluorononane => "1,9-Difluorononane",
    OneTenDifluorodecane => "1,10-Difluorodecane",
    OneElevenDifluoroundecane => "1,11-Difluoroundecane",
    Chlorofluoromethane => "Chlorofluoromethane",
    OneChloroTwoFluoroethane => "1-Chloro-2-fluoroethane",
    OneChloroThreeFluoropropane => "1-Chloro-3-fluoropropane",
    OneChloroFourFluorobutane => "1-Chloro-4-fluorobutane",
    OneChloroFiveFluoropentane => "1-Chloro-5-fluoropentane",
    OneChloroSixFluorohexane => "1-Chloro-6-fluorohexane",
    OneChloroSevenFluoroheptane => "1-Chloro-7-fluoroheptane",
    OneChloroEightFluorooctane => "1-Chloro-8-fluorooctane",
    OneChloroNineFluorononane => "1-Chloro-9-fluorononane",
    OneChloroTenFluorodecane => "1-Chloro-10-fluorodecane",
    OneChloroElevenFluoroundecane => "1-Chloro-11-fluoroundecane",
    Bromofluoromethane => "Bromofluoromethane",
    OneBromoTwoFluoroethane => "1-Bromo-2-fluoroethane",
    OneBromoThreeFluoropropane => "1-Bromo-3-fluoropropane",
    OneBromoFourFluorobutane => "1-Bromo-4-fluorobutane",
    OneBromoFiveFluoropentane => "1-Bromo-5-fluoropentane",
    OneBromoSixFluorohexane => "1-Bromo-6-fluorohexane",
    OneBromoSevenFluoroheptane => "1-Bromo-7-fluoroheptane",
    OneBromoEightFluorooctane => "1-Bromo-8-fluorooctane",
    OneBromoNineFluorononane => "1-Bromo-9-fluorononane",
    OneBromoTenFluorodecane => "1-Bromo-10-fluorodecane",
    OneBromoElevenFluoroundecane => "1-Bromo-11-fluoroundecane",
    Fluoroiodomethane => "Fluoroiodomethane",
    OneFluoroTwoIodoethane => "1-Fluoro-2-iodoethane",
    OneFluoroThreeIodopropane => "1-Fluoro-3-iodopropane",
    OneFluoroFourIodobutane => "1-Fluoro-4-iodobutane",
    OneFluoroFiveIodopentane => "1-Fluoro-5-iodopentane",
    OneFluoroSixIodohexane => "1-Fluoro-6-iodohexane",
    OneFluoroSevenIodoheptane => "1-Fluoro-7-iodoheptane",
    OneFluoroEightIodooctane => "1-Fluoro-8-iodooctane",
    OneFluoroNineIodononane => "1-Fluoro-9-iodononane",
    OneFluoroTenIododecane => "1-Fluoro-10-iododecane",
    OneFluoroElevenIodoundecane => "1-Fluoro-11-iodoundecane",
    Dichloromethane => "Dichloromethane",
    OneTwoDichloroethane => "1,2-Dichloroethane",
    OneThreeDichloropropane => "1,3-Dichloropropane",
    OneFourDichlorobutane => "1,4-Dichlorobutane",
    OneFiveDichloropentane => "1,5-Dichloropentane",
    OneSixDichlorohexane => "1,6-Dichlorohexane",
    OneSevenDichloroheptane => "1,7-Dichloroheptane",
    OneEightDichlorooctane => "1,8-Dichlorooctane",
    OneNineDichlorononane => "1,9-Dichlorononane",
    OneTenDichlorodecane => "1,10-Dichlorodecane",
    OneElevenDichloroundecane => "1,11-Dichloroundecane",
    Bromochloromethane => "Bromochloromethane",
    OneBromoTwoChloroethane => "1-Bromo-2-chloroethane",
    OneBromoThreeChloropropane => "1-Bromo-3-chloropropane",
    OneBromoFourChlorobutane => "1-Bromo-4-chlorobutane",
    OneBromoFiveChloropentane => "1-Bromo-5-chloropentane",
    OneBromoSixChlorohexane => "1-Bromo-6-chlorohexane",
    OneBromoSevenChloroheptane => "1-Bromo-7-chloroheptane",
    OneBromoEightChlorooctane => "1-Bromo-8-chlorooctane",
    OneBromoNineChlorononane => "1-Bromo-9-chlorononane",
    OneBromoTenChlorodecane => "1-Bromo-10-chlorodecane",
    OneBromoElevenChloroundecane => "1-Bromo-11-chloroundecane",
    Chloroiodomethane => "Chloroiodomethane",
    OneChloroTwoIodoethane => "1-Chloro-2-iodoethane",
    OneChloroThreeIodopropane => "1-Chloro-3-iodopropane",
    OneChloroFourIodobutane => "1-Chloro-4-iodobutane",
    OneChloroFiveIodopentane => "1-Chloro-5-iodopentane",
    OneChloroSixIodohexane => "1-Chloro-6-iodohexane",
    OneChloroSevenIodoheptane => "1-Chloro-7-iodoheptane",
    OneChloroEightIodooctane => "1-Chloro-8-iodooctane",
    OneChloroNineIodononane => "1-Chloro-9-iodononane",
    OneChloroTenIododecane => "1-Chloro-10-iododecane",
    OneChloroElevenIodoundecane => "1-Chloro-11-iodoundecane",
    Dibromomethane => "Dibromomethane",
    OneTwoDibromoethane => "1,2-Dibromoethane",
    OneThreeDibromopropane => "1,3-Dibromopropane",
    OneFourDibromobutane => "1,4-Dibromobutane",
    OneFiveDibromopentane => "1,5-Dibromopentane",
    OneSixDibromohexane => "1,6-Dibromohexane",
    OneSevenDibromoheptane => "1,7-Dibromoheptane",
    OneEightDibromooctane => "1,8-Dibromooctane",
    OneNineDibromononane => "1,9-Dibromononane",
    OneTenDibromodecane => "1,10-Dibromodecane",
    OneElevenDibromoundecane => "1,11-Dibromoundecane",
    Bromoiodomethane => "Bromoiodomethane",
    OneBromoTwoIodoethane => "1-Bromo-2-iodoethane",
    OneBromoThreeIodopropane => "1-Bromo-3-iodopropane",
    OneBromoFourIodobutane => "1-Bromo-4-iodobutane",
    OneBromoFiveIodopentane => "1-Bromo-5-iodopentane",
    OneBromoSixIodohexane => "1-Bromo-6-iodohexane",
    OneBromoSevenIodoheptane => "1-Bromo-7-iodoheptane",
    OneBromoEightIodooctane => "1-Bromo-8-iodooctane",
    OneBromoNineIodononane => "1-Bromo-9-iodononane",
    OneBromoTenIododecane => "1-Bromo-10-iododecane",
    OneBromoElevenIodoundecane => "1-Bromo-11-iodoundecane",
    Diiodomethane => "Diiodomethane",
    OneTwoDiiodoethane => "1,2-Diiodoethane",
    OneThreeDiiodopropane => "1,3-Diiodopropane",
    OneFourDiiodobutane => "1,4-Diiodobutane",
    OneFiveDiiodopentane => "1,5-Diiodopentane",
    OneSixDiiodohexane => "1,6-Diiodohexane",
    OneSevenDiiodoheptane => "1,7-Diiodoheptane",
    OneEightDiiodooctane => "1,8-Diiodooctane",
    OneNineDiiodononane => "1,9-Diiodononane",
    OneTenDiiododecane => "1,10-Diiododecane",
    OneElevenDiiodoundecane => "1,11-Diiodoundecane",
    OligoOxyethyleneChainTwoOxygensEndCapsOneAndOne =>
        "Oligo(oxyethylene) chain, 2 oxygens, end caps 1 and 1",
    OligoOxyethyleneChainTwoOxygensEndCapsOneAndTwo =>
        "Oligo(oxyethylene) chain, 2 oxygens, end caps 1 and 2",
    OligoOxyethyleneChainTwoOxygensEndCapsTwoAndTwo =>
        "Oligo(oxyethylene) chain, 2 oxygens, end caps 2 and 2",
    OligoOxyethyleneChainThreeOxygensEndCapsZeroAndZero =>
        "Oligo(oxyethylene) chain, 3 oxygens, end caps 0 and 0",
    OligoOxyethyleneChainThreeOxygensEndCapsZeroAndOne =>
        "Oligo(oxyethylene) chain, 3 oxygens, end caps 0 and 1",
    OligoOxyethyleneChainThreeOxygensEndCapsZeroAndTwo =>
        "Oligo(oxyethylene) chain, 3 oxygens, end caps 0 and 2",
    OligoOxyethyleneChainThreeOxygensEndCapsOneAndOne =>
        "Oligo(oxyethylene) chain, 3 oxygens, end caps 1 and 1",
    OligoOxyethyleneChainThreeOxygensEndCapsOneAndTwo =>
        "Oligo(oxyethylene) chain, 3 oxygens, end caps 1 and 2",
    OligoOxyethyleneChainThreeOxygensEndCapsTwoAndTwo =>
        "Oligo(oxyethylene) chain, 3 oxygens, end caps 2 and 2",
    OligoOxyethyleneChainFourOxygensEndCapsZeroAndZero =>
        "Oligo(oxyethylene) chain, 4 oxygens, end caps 0 and 0",
    OligoOxyethyleneChainFourOxygensEndCapsZeroAndOne =>
        "Oligo(oxyethylene) chain, 4 oxygens, end caps 0 and 1",
    OligoOxyethyleneChainFourOxygensEndCapsZeroAndTwo =>
        "Oligo(oxyethylene) chain, 4 oxygens, end caps 0 and 2",
    OligoOxyethyleneChainFourOxygensEndCapsOneAndOne =>
        "Oligo(oxyethylene) chain, 4 oxygens, end caps 1 and 1",
    OligoOxyethyleneChainFourOxygensEndCapsOneAndTwo =>
        "Oligo(oxyethylene) chain, 4 oxygens, end caps 1 and 2",
    OligoOxyethyleneChainFiveOxygensEndCapsZeroAndZero =>
        "Oligo(oxyethylene) chain, 5 oxygens, end caps 0 and 0",
    OligoOxytrimethyleneChainTwoOxygensEndCapsOneAndOne =>
        "Oligo(oxytrimethylene) chain, 2 oxygens, end caps 1 and 1",
    OligoOxytrimethyleneChainTwoOxygensEndCapsOneAndTwo =>
        "Oligo(oxytrimethylene) chain, 2 oxygens, end caps 1 and 2",
    OligoOxytrimethyleneChainTwoOxygensEndCapsTwoAndTwo =>
        "Oligo(oxytrimethylene) chain, 2 oxygens, end caps 2 and 2",
    OligoOxytrimethyleneChainThreeOxygensEndCapsZeroAndZero =>
        "Oligo(oxytrimethylene) chain, 3 oxygens, end caps 0 and 0",
    OligoOxytrimethyleneChainThreeOxygensEndCapsZeroAndOne =>
        "Oligo(oxytrimethylene) chain, 3 oxygens, end caps 0 and 1",
    OligoOxytrimethyleneChainThreeOxygensEndCapsZeroAndTwo =>
        "Oligo(oxytrimethylene) chain, 3 oxygens, end caps 0 and 2",
    OligoOxytrimethyleneChainThreeOxygensEndCapsOneAndOne =>
        "Oligo(oxytrimethylene) chain, 3 oxygens, end caps 1 and 1",
    OligoOxytrimethyleneChainThreeOxygensEndCapsOneAndTwo =>
        "Oligo(oxytrimethylene) chain, 3 oxygens, end caps 1 and 2",
    OligoOxytrimethyleneChainThreeOxygensEndCapsTwoAndTwo =>
        "Oligo(oxytrimethylene) chain, 3 oxygens, end caps 2 and 2",
    OligoOxytrimethyleneChainFourOxygensEndCapsZeroAndZero =>
        "Oligo(oxytrimethylene) chain, 4 oxygens, end caps 0 and 0",
    OligoOxytetramethyleneChainTwoOxygensEndCapsOneAndOne =>
        "Oligo(oxytetramethylene) chain, 2 oxygens, end caps 1 and 1",
    OligoOxytetramethyleneChainTwoOxygensEndCapsOneAndTwo =>
        "Oligo(oxytetramethylene) chain, 2 oxygens, end caps 1 and 2",
    OligoOxytetramethyleneChainTwoOxygensEndCapsTwoAndTwo =>
        "Oligo(oxytetramethylene) chain, 2 oxygens, end caps 2 and 2",
    OligoOxytetramethyleneChainThreeOxygensEndCapsZeroAndZero =>
        "Oligo(oxytetramethylene) chain, 3 oxygens, end caps 0 and 0",
    OligoOxytetramethyleneChainThreeOxygensEndCapsZeroAndOne =>
        "Oligo(oxytetramethylene) chain, 3 oxygens, end caps 0 and 1",
    OligoOxytetramethyleneChainThreeOxygensEndCapsZeroAndTwo =>
        "Oligo(oxytetramethylene) chain, 3 oxygens, end caps 0 and 2",
    OligoOxytetramethyleneChainThreeOxygensEndCapsOneAndOne =>
        "Oligo(oxytetramethylene) chain, 3 oxygens, end caps 1 and 1",
    OligoIminoethyleneChainTwoNitrogensEndCapsOneAndOne =>
        "Oligo(iminoethylene) chain, 2 nitrogens, end caps 1 and 1",
    OligoIminoethyleneChainTwoNitrogensEndCapsOneAndTwo =>
        "Oligo(iminoethylene) chain, 2 nitrogens, end caps 1 and 2",
    OligoIminoethyleneChainTwoNitrogensEndCapsTwoAndTwo =>
        "Oligo(iminoethylene) chain, 2 nitrogens, end caps 2 and 2",
    OligoIminoethyleneChainThreeNitrogensEndCapsZeroAndZero =>
        "Oligo(iminoethylene) chain, 3 nitrogens, end caps 0 and 0",
    OligoIminoethyleneChainThreeNitrogensEndCapsZeroAndOne =>
        "Oligo(iminoethylene) chain, 3 nitrogens, end caps 0 and 1",
    OligoIminoethyleneChainThreeNitrogensEndCapsZeroAndTwo =>
        "Oligo(iminoethylene) chain, 3 nitrogens, end caps 0 and 2",
    OligoIminoethyleneChainThreeNitrogensEndCapsOneAndOne =>
        "Oligo(iminoethylene) chain, 3 nitrogens, end caps 1 and 1",
    OligoIminoethyleneChainThreeNitrogensEndCapsOneAndTwo =>
        "Oligo(iminoethylene) chain, 3 nitrogens, end caps 1 and 2",
    OligoIminoethyleneChainThreeNitrogensEndCapsTwoAndTwo =>
        "Oligo(iminoethylene) chain, 3 nitrogens, end caps 2 and 2",
    OligoIminoethyleneChainFourNitrogensEndCapsZeroAndZero =>
        "Oligo(iminoethylene) chain, 4 nitrogens, end caps 0 and 0",
    OligoIminoethyleneChainFourNitrogensEndCapsZeroAndOne =>
        "Oligo(iminoethylene) chain, 4 nitrogens, end caps 0 and 1",
    OligoIminoethyleneChainFourNitrogensEndCapsZeroAndTwo =>
        "Oligo(iminoethylene) chain, 4 nitrogens, end caps 0 and 2",
    OligoIminoethyleneChainFourNitrogensEndCapsOneAndOne =>
        "Oligo(iminoethylene) chain, 4 nitrogens, end caps 1 and 1",
    OligoIminoethyleneChainFourNitrogensEndCapsOneAndTwo =>
        "Oligo(iminoethylene) chain, 4 nitrogens, end caps 1 and 2",
    OligoIminoethyleneChainFiveNitrogensEndCapsZeroAndZero =>
        "Oligo(iminoethylene) chain, 5 nitrogens, end caps 0 and 0",
    OligoIminotrimethyleneChainTwoNitrogensEndCapsOneAndOne =>
        "Oligo(iminotrimethylene) chain, 2 nitrogens, end caps 1 and 1",
    OligoIminotrimethyleneChainTwoNitrogensEndCapsOneAndTwo =>
        "Oligo(iminotrimethylene) chain, 2 nitrogens, end caps 1 and 2",
    OligoIminotrimethyleneChainTwoNitrogensEndCapsTwoAndTwo =>
        "Oligo(iminotrimethylene) chain, 2 nitrogens, end caps 2 and 2",
    OligoIminotrimethyleneChainThreeNitrogensEndCapsZeroAndZero =>
        "Oligo(iminotrimethylene) chain, 3 nitrogens, end caps 0 and 0",
    OligoIminotrimethyleneChainThreeNitrogensEndCapsZeroAndOne =>
        "Oligo(iminotrimethylene) chain, 3 nitrogens, end caps 0 and 1",
    OligoIminotrimethyleneChainThreeNitrogensEndCapsZeroAndTwo =>
        "Oligo(iminotrimethylene) chain, 3 nitrogens, end caps 0 and 2",
    OligoIminotrimethyleneChainThreeNitrogensEndCapsOneAndOne =>
        "Oligo(iminotrimethylene) chain, 3 nitrogens, end caps 1 and 1",
    OligoIminotrimethyleneChainThreeNitrogensEndCapsOneAndTwo =>
        "Oligo(iminotrimethylene) chain, 3 nitrogens, end caps 1 and 2",
    OligoIminotrimethyleneChainThreeNitrogensEndCapsTwoAndTwo =>
        "Oligo(iminotrimethylene) chain, 3 nitrogens, end caps 2 and 2",
    OligoIminotrimethyleneChainFourNitrogensEndCapsZeroAndZero =>
        "Oligo(iminotrimethylene) chain, 4 nitrogens, end caps 0 and 0",
    OligoIminotetramethyleneChainTwoNitrogensEndCapsOneAndOne =>
        "Oligo(iminotetramethylene) chain, 2 nitrogens, end caps 1 and 1",
    OligoIminotetramethyleneChainTwoNitrogensEndCapsOneAndTwo =>
        "Oligo(iminotetramethylene) chain, 2 nitrogens, end caps 1 and 2",
    OligoIminotetramethyleneChainTwoNitrogensEndCapsTwoAndTwo =>
        "Oligo(iminotetramethylene) chain, 2 nitrogens, end caps 2 and 2",
    OligoIminotetramethyleneChainThreeNitrogensEndCapsZeroAndZero =>
        "Oligo(iminotetramethylene) chain, 3 nitrogens, end caps 0 and 0",
    OligoIminotetramethyleneChainThreeNitrogensEndCapsZeroAndOne =>
        "Oligo(iminotetramethylene) chain, 3 nitrogens, end caps 0 and 1",
    OligoIminotetramethyleneChainThreeNitrogensEndCapsZeroAndTwo =>
        "Oligo(iminotetramethylene) chain, 3 nitrogens, end caps 0 and 2",
    OligoIminotetramethyleneChainThreeNitrogensEndCapsOneAndOne =>
        "Oligo(iminotetramethylene) chain, 3 nitrogens, end caps 1 and 1",
    OligoThioethyleneChainTwoSulfursEndCapsOneAndOne =>
        "Oligo(thioethylene) chain, 2 sulfurs, end caps 1 and 1",
    OligoThioethyleneChainTwoSulfursEndCapsOneAndTwo =>
        "Oligo(thioethylene) chain, 2 sulfurs, end caps 1 and 2",
    OligoThioethyleneChainTwoSulfursEndCapsTwoAndTwo =>
        "Oligo(thioethylene) chain, 2 sulfurs, end caps 2 and 2",
    OligoThioethyleneChainThreeSulfursEndCapsZeroAndZero =>
        "Oligo(thioethylene) chain, 3 sulfurs, end caps 0 and 0",
    OligoThioethyleneChainThreeSulfursEndCapsZeroAndOne =>
        "Oligo(thioethylene) chain, 3 sulfurs, end caps 0 and 1",
    OligoThioethyleneChainThreeSulfursEndCapsZeroAndTwo =>
        "Oligo(thioethylene) chain, 3 sulfurs, end caps 0 and 2",
    OligoThioethyleneChainThreeSulfursEndCapsOneAndOne =>
        "Oligo(thioethylene) chain, 3 sulfurs, end caps 1 and 1",
    OligoThioethyleneChainThreeSulfursEndCapsOneAndTwo =>
        "Oligo(thioethylene) chain, 3 sulfurs, end caps 1 and 2",
    OligoThioethyleneChainThreeSulfursEndCapsTwoAndTwo =>
        "Oligo(thioethylene) chain, 3 sulfurs, end caps 2 and 2",
    OligoThioethyleneChainFourSulfursEndCapsZeroAndZero =>
        "Oligo(thioethylene) chain, 4 sulfurs, end caps 0 and 0",
    OligoThioethyleneChainFourSulfursEndCapsZeroAndOne =>
        "Oligo(thioethylene) chain, 4 sulfurs, end caps 0 and 1",
    OligoThioethyleneChainFourSulfursEndCapsZeroAndTwo =>
        "Oligo(thioethylene) chain, 4 sulfurs, end caps 0 and 2",
    OligoThioethyleneChainFourSulfursEndCapsOneAndOne =>
        "Oligo(thioethylene) chain, 4 sulfurs, end caps 1 and 1",
    OligoThioethyleneChainFourSulfursEndCapsOneAndTwo =>
        "Oligo(thioethylene) chain, 4 sulfurs, end caps 1 and 2",
    OligoThioethyleneChainFiveSulfursEndCapsZeroAndZero =>
        "Oligo(thioethylene) chain, 5 sulfurs, end caps 0 and 0",
    OligoThiotrimethyleneChainTwoSulfursEndCapsOneAndOne =>
        "Oligo(thiotrimethylene) chain, 2 sulfurs, end caps 1 and 1",
    OligoThiotrimethyleneChainTwoSulfursEndCapsOneAndTwo =>
        "Oligo(thiotrimethylene) chain, 2 sulfurs, end caps 1 and 2",
    OligoThiotrimethyleneChainTwoSulfursEndCapsTwoAndTwo =>
        "Oligo(thiotrimethylene) chain, 2 sulfurs, end caps 2 and 2",
    OligoThiotrimethyleneChainThreeSulfursEndCapsZeroAndZero =>
        "Oligo(thiotrimethylene) chain, 3 sulfurs, end caps 0 and 0",
    OligoThiotrimethyleneChainThreeSulfursEndCapsZeroAndOne =>
        "Oligo(thiotrimethylene) chain, 3 sulfurs, end caps 0 and 1",
    OligoThiotrimethyleneChainThreeSulfursEndCapsZeroAndTwo =>
        "Oligo(thiotrimethylene) chain, 3 sulfurs, end caps 0 and 2",
    OligoThiotrimethyleneChainThreeSulfursEndCapsOneAndOne =>
        "Oligo(thiotrimethylene) chain, 3 sulfurs, end caps 1 and 1",
    OligoThiotrimethyleneChainThreeSulfursEndCapsOneAndTwo =>
        "Oligo(thiotrimethylene) chain, 3 sulfurs, end caps 1 and 2",
    OligoThiotrimethyleneChainThreeSulfursEndCapsTwoAndTwo =>
        "Oligo(thiotrimethylene) chain, 3 sulfurs, end caps 2 and 2",
    OligoThiotrimethyleneChainFourSulfursEndCapsZeroAndZero =>
        "Oligo(thiotrimethylene) chain, 4 sulfurs, end caps 0 and 0",
    NOOEthyleneLinkedHeteroatomChain => "N-O-O ethylene-linked heteroatom chain",
    OOSEthyleneLinkedHeteroatomChain => "O-O-S ethylene-linked heteroatom chain",
    ONOEthyleneLinkedHeteroatomChain => "O-N-O ethylene-linked heteroatom chain",
    NNOEthyleneLinkedHeteroatomChain => "N-N-O ethylene-linked heteroatom chain",
    ONSEthyleneLinkedHeteroatomChain => "O-N-S ethylene-linked heteroatom chain",
    OSOEthyleneLinkedHeteroatomChain => "O-S-O ethylene-linked heteroatom chain",
    NSOEthyleneLinkedHeteroatomChain => "N-S-O ethylene-linked heteroatom chain",
    OSSEthyleneLinkedHeteroatomChain => "O-S-S ethylene-linked heteroatom chain",
    NONEthyleneLinkedHeteroatomChain => "N-O-N ethylene-linked heteroatom chain",
    NOSEthyleneLinkedHeteroatomChain => "N-O-S ethylene-linked heteroatom chain",
    NNSEthyleneLinkedHeteroatomChain => "N-N-S ethylene-linked heteroatom chain",
    NSNEthyleneLinkedHeteroatomChain => "N-S-N ethylene-linked heteroatom chain",
    NSSEthyleneLinkedHeteroatomChain => "N-S-S ethylene-linked heteroatom chain",
    SOSEthyleneLinkedHeteroatomChain => "S-O-S ethylene-linked heteroatom chain",
    SNSEthyleneLinkedHeteroatomChain => "S-N-S ethylene-linked heteroatom chain",
    NOOOEthyleneLinkedHeteroatomChain => "N-O-O-O ethylene-linked heteroatom chain",
    OOOSEthyleneLinkedHeteroatomChain => "O-O-O-S ethylene-linked heteroatom chain",
    ONOOEthyleneLinkedHeteroatomChain => "O-N-O-O ethylene-linked heteroatom chain",
    NNOOEthyleneLinkedHeteroatomChain => "N-N-O-O ethylene-linked heteroatom chain",
    OONSEthyleneLinkedHeteroatomChain => "O-O-N-S ethylene-linked heteroatom chain",
    OOSOEthyleneLinkedHeteroatomChain => "O-O-S-O ethylene-linked heteroatom chain",
    NSOOEthyleneLinkedHeteroatomChain => "N-S-O-O ethylene-linked heteroatom chain",
    OOSSEthyleneLinkedHeteroatomChain => "O-O-S-S ethylene-linked heteroatom chain",
    NONOEthyleneLinkedHeteroatomChain => "N-O-N-O ethylene-linked heteroatom chain",
    ONOSEthyleneLinkedHeteroatomChain => "O-N-O-S ethylene-linked heteroatom chain",
    ONNOEthyleneLinkedHeteroatomChain => "O-N-N-O ethylene-linked heteroatom chain",
    NNNOEthyleneLinkedHeteroatomChain => "N-N-N-O ethylene-linked heteroatom chain",
    ONNSEthyleneLinkedHeteroatomChain => "O-N-N-S ethylene-linked heteroatom chain",
    ONSOEthyleneLinkedHeteroatomChain => "O-N-S-O ethylene-linked heteroatom chain",
    NSNOEthyleneLinkedHeteroatomChain => "N-S-N-O ethylene-linked heteroatom chain",
    ONSSEthyleneLinkedHeteroatomChain => "O-N-S-S ethylene-linked heteroatom chain",
    NOSOEthyleneLinkedHeteroatomChain => "N-O-S-O ethylene-linked heteroatom chain",
    OSOSEthyleneLinkedHeteroatomChain => "O-S-O-S ethylene-linked heteroatom chain",
    NNSOEthyleneLinkedHeteroatomChain => "N-N-S-O ethylene-linked heteroatom chain",
    OSNSEthyleneLinkedHeteroatomChain => "O-S-N-S ethylene-linked heteroatom chain",
    OSSOEthyleneLinkedHeteroatomChain => "O-S-S-O ethylene-linked heteroatom chain",
    NSSOEthyleneLinkedHeteroatomChain => "N-S-S-O ethylene-linked heteroatom chain",
    OSSSEthyleneLinkedHeteroatomChain => "O-S-S-S ethylene-linked heteroatom chain",
    NOONEthyleneLinkedHeteroatomChain => "N-O-O-N ethylene-linked heteroatom chain",
    NOOSEthyleneLinkedHeteroatomChain => "N-O-O-S ethylene-linked heteroatom chain",
    NNONEthyleneLinkedHeteroatomChain => "N-N-O-N ethylene-linked heteroatom chain",
    NONSEthyleneLinkedHeteroatomChain => "N-O-N-S ethylene-linked heteroatom chain",
    NOSNEthyleneLinkedHeteroatomChain => "N-O-S-N ethylene-linked heteroatom chain",
    NOSSEthyleneLinkedHeteroatomChain => "N-O-S-S ethylene-linked heteroatom chain",
    NNOSEthyleneLinkedHeteroatomChain => "N-N-O-S ethylene-linked heteroatom chain",
    NNNSEthyleneLinkedHeteroatomChain => "N-N-N-S ethylene-linked heteroatom chain",
    NNSNEthyleneLinkedHeteroatomChain => "N-N-S-N ethylene-linked heteroatom chain",
    NNSSEthyleneLinkedHeteroatomChain => "N-N-S-S ethylene-linked heteroatom chain",
    NSOSEthyleneLinkedHeteroatomChain => "N-S-O-S ethylene-linked heteroatom chain",
    NSNSEthyleneLinkedHeteroatomChain => "N-S-N-S ethylene-linked heteroatom chain",
    NSSNEthyleneLinkedHeteroatomChain => "N-S-S-N ethylene-linked heteroatom chain",
    NSSSEthyleneLinkedHeteroatomChain => "N-S-S-S ethylene-linked heteroatom chain",
    SOOSEthyleneLinkedHeteroatomChain => "S-O-O-S ethylene-linked heteroatom chain",
    SNOSEthyleneLinkedHeteroatomChain => "S-N-O-S ethylene-linked heteroatom chain",
    SOSSEthyleneLinkedHeteroatomChain => "S-O-S-S ethylene-linked heteroatom chain",
    SNNSEthyleneLinkedHeteroatomChain => "S-N-N-S ethylene-linked heteroatom chain",
    SNSSEthyleneLinkedHeteroatomChain => "S-N-S-S ethylene-linked heteroatom chain",
    // acyl chains: omega-substituted acids, lactams, lactones, dicarbonyls
    PropanoicAcid => "Propanoic acid",
    PropanoylEster => "Propanoyl ester",
    Propanamide => "Propanamide",
    Propanal => "Propanal",
    EthylKetone => "Ethyl ketone",
    ButanoicAcid => "Butanoic acid",
    ButanoylEster => "Butanoyl ester",
    Butanamide => "Butanamide",
    Butanal => "Butanal",
    PropylKetone => "Propyl ketone",
    IsobutyricAcid => "Isobutyric acid",
    IsobutyrylEster => "Isobutyryl ester",
    IsobutyrylAmide => "Isobutyryl amide",
    PentanoicAcid => "Pentanoic acid",
    PentanoylEster => "Pentanoyl ester",
    Pentanamide => "Pentanamide",
    Pentanal => "Pentanal",
    ButylKetone => "Butyl ketone",
    IsovalericAcid => "Isovaleric acid",
    IsovalerylEster => "Isovaleryl ester",
    IsovalerylAmide => "Isovaleryl amide",
    AnteisoC5Acid => "Anteiso-C5 acid",
    AnteisoC5Ester => "Anteiso-C5 acyl ester",
    ArylButanoicAcid => "4-Arylbutanoic acid",
    ArylButanoylEster => "4-Arylbutanoyl ester",
    ArylButanamide => "4-Arylbutanamide",
    ArylPropylKetone => "3-Arylpropyl ketone",
    HexanoicAcid => "Hexanoic acid",
    HexanoylEster => "Hexanoyl ester",
    Hexanamide => "Hexanamide",
    Hexanal => "Hexanal",
    PentylKetone => "Pentyl ketone",
    IsocaproicAcid => "Isocaproic acid",
    IsocaproylEster => "Isocaproyl ester",
    IsocaproylAmide => "Isocaproyl amide",
    AnteisoC6Acid => "Anteiso-C6 acid",
    AnteisoC6Ester => "Anteiso-C6 acyl ester",
    ArylPentanoicAcid => "5-Arylpentanoic acid",
    ArylPentanoylEster => "5-Arylpentanoyl ester",
    ArylPentanamide => "5-Arylpentanamide",
    ArylButylKetone => "4-Arylbutyl ketone",
    HeptanoicAcid => "Heptanoic acid",
    HeptanoylEster => "Heptanoyl ester",
    Heptanamide => "Heptanamide",
    Heptanal => "Heptanal",
    HexylKetone => "Hexyl ketone",
    IsoheptanoicAcid => "Isoheptanoic acid",
    IsoheptanoylEster => "Isoheptanoyl ester",
    IsoheptanoylAmide => "Isoheptanoyl amide",
    AnteisoC7Acid => "Anteiso-C7 acid",
    AnteisoC7Ester => "Anteiso-C7 acyl ester",
    ArylHexanoicAcid => "6-Arylhexanoic acid",
    ArylHexanoylEster => "6-Arylhexanoyl ester",
    ArylHexanamide => "6-Arylhexanamide",
    ArylPentylKetone => "5-Arylpentyl ketone",
    OctanoicAcid => "Octanoic acid",
    OctanoylEster => "Octanoyl ester",
    Octanamide => "Octanamide",
    Octanal => "Octanal",
    HeptylKetone => "Heptyl ketone",
    IsooctanoicAcid => "Isooctanoic acid",
    IsooctanoylEster => "Isooctanoyl ester",
    IsooctanoylAmide => "Isooctanoyl amide",
    AnteisoC8Acid => "Anteiso-C8 acid",
    AnteisoC8Ester => "Anteiso-C8 acyl ester",
    ArylHeptanoicAcid => "7-Arylheptanoic acid",
    ArylHeptanoylEster => "7-Arylheptanoyl ester",
    ArylHeptanamide => "7-Arylheptanamide",
    ArylHexylKetone => "6-Arylhexyl ketone",
    NonanoicAcid => "Nonanoic acid",
    NonanoylEster => "Nonanoyl ester",
    Nonanamide => "Nonanamide",
    Nonanal => "Nonanal",
    OctylKetone => "Octyl ketone",
    IsononanoicAcid => "Isononanoic acid",
    IsononanoylEster => "Isononanoyl ester",
    IsononanoylAmide => "Isononanoyl amide",
    AnteisoC9Acid => "Anteiso-C9 acid",
    AnteisoC9Ester => "Anteiso-C9 acyl ester",
    ArylOctanoicAcid => "8-Aryloctanoic acid",
    ArylOctanoylEster => "8-Aryloctanoyl ester",
    ArylOctanamide => "8-Aryloctanamide",
    ArylHeptylKetone => "7-Arylheptyl ketone",
    DecanoicAcid => "Decanoic acid",
    DecanoylEster => "Decanoyl ester",
    Decanamide => "Decanamide",
    Decanal => "Decanal",
    NonylKetone => "Nonyl ketone",
    IsodecanoicAcid => "Isodecanoic acid",
    IsodecanoylEster => "Isodecanoyl ester",
    IsodecanoylAmide => "Isodecanoyl amide",
    AnteisoC10Acid => "Anteiso-C10 acid",
    AnteisoC10Ester => "Anteiso-C10 acyl ester",
    UndecanoicAcid => "Undecanoic acid",
    UndecanoylEster => "Undecanoyl ester",
    Undecanamide => "Undecanamide",
    Undecanal => "Undecanal",
    DecylKetone => "Decyl ketone",
    IsoundecanoicAcid => "Isoundecanoic acid",
    IsoundecanoylEster => "Isoundecanoyl ester",
    IsoundecanoylAmide => "Isoundecanoyl amide",
    AnteisoC11Acid => "Anteiso-C11 acid",
    AnteisoC11Ester => "Anteiso-C11 acyl ester",
    DodecanoicAcid => "Dodecanoic acid",
    DodecanoylEster => "Dodecanoyl ester",
    Dodecanamide => "Dodecanamide",
    Dodecanal => "Dodecanal",
    UndecylKetone => "Undecyl ketone",
    IsolauricAcid => "Isolauric acid",
    IsolauroylEster => "Isolauroyl ester",
    IsolauroylAmide => "Isolauroyl amide",
    AnteisoC12Acid => "Anteiso-C12 acid",
    AnteisoC12Ester => "Anteiso-C12 acyl ester",
    AminoEthanoateEster => "2-Aminoethanoate ester",
    AminoEthanamide => "2-Aminoethanamide",
    AlkylaminoEthanoicAcid => "2-(Alkylamino)ethanoic acid",
    TrialkylammonioEthanoate => "2-(Trialkylammonio)ethanoate",
    AcylaminoEthanoicAcid => "2-(Acylamino)ethanoic acid",
    AcylaminoEthanoateEster => "2-(Acylamino)ethanoate ester",
    AcylaminomethylKetone => "1-(Acylamino)methyl ketone",
    AminoPropanoateEster => "3-Aminopropanoate ester",
    AminoPropanamide => "3-Aminopropanamide",
    AlkylaminoPropanoicAcid => "3-(Alkylamino)propanoic acid",
    TrialkylammonioPropanoate => "3-(Trialkylammonio)propanoate",
    AcylaminoPropanoicAcid => "3-(Acylamino)propanoic acid",
    AcylaminoPropanoateEster => "3-(Acylamino)propanoate ester",
    AcylaminoethylKetone => "2-(Acylamino)ethyl ketone",
    BetaLactamRing => "Beta-lactam ring",
    AminoButanoateEster => "4-Aminobutanoate ester",
    AminoButanamide => "4-Aminobutanamide",
    AlkylaminoButanoicAcid => "4-(Alkylamino)butanoic acid",
    TrialkylammonioButanoate => "4-(Trialkylammonio)butanoate",
    AcylaminoButanoicAcid => "4-(Acylamino)butanoic acid",
    AcylaminoButanoateEster => "4-(Acylamino)butanoate ester",
    AcylaminopropylKetone => "3-(Acylamino)propyl ketone",
    GammaLactamRing => "Gamma-lactam ring",
    AminoPentanoicAcid => "5-Aminopentanoic acid",
    AminoPentanoateEster => "5-Aminopentanoate ester",
    AminoPentanamide => "5-Aminopentanamide",
    AlkylaminoPentanoicAcid => "5-(Alkylamino)pentanoic acid",
    TrialkylammonioPentanoate => "5-(Trialkylammonio)pentanoate",
    AcylaminoPentanoicAcid => "5-(Acylamino)pentanoic acid",
    AcylaminoPentanoateEster => "5-(Acylamino)pentanoate ester",
    AcylaminobutylKetone => "4-(Acylamino)butyl ketone",
    DeltaLactamRing => "Delta-lactam ring",
    AminoHexanoicAcid => "6-Aminohexanoic acid",
    AminoHexanoateEster => "6-Aminohexanoate ester",
    AminoHexanamide => "6-Aminohexanamide",
    AlkylaminoHexanoicAcid => "6-(Alkylamino)hexanoic acid",
    TrialkylammonioHexanoate => "6-(Trialkylammonio)hexanoate",
    AcylaminoHexanoicAcid => "6-(Acylamino)hexanoic acid",
    AcylaminoHexanoateEster => "6-(Acylamino)hexanoate ester",
    AcylaminopentylKetone => "5-(Acylamino)pentyl ketone",
    EpsilonLactamRing => "Epsilon-lactam ring",
    AminoHeptanoicAcid => "7-Aminoheptanoic acid",
    AminoHeptanoateEster => "7-Aminoheptanoate ester",
    AminoHeptanamide => "7-Aminoheptanamide",
    AlkylaminoHeptanoicAcid => "7-(Alkylamino)heptanoic acid",
    TrialkylammonioHeptanoate => "7-(Trialkylammonio)heptanoate",
    AcylaminoHeptanoicAcid => "7-(Acylamino)heptanoic acid",
    AcylaminoHeptanoateEster => "7-(Acylamino)heptanoate ester",
    AcylaminohexylKetone => "6-(Acylamino)hexyl ketone",
    EightMemberedLactamRing => "8-Membered lactam ring",
    AminoOctanoicAcid => "8-Aminooctanoic acid",
    AminoOctanoateEster => "8-Aminooctanoate ester",
    AminoOctanamide => "8-Aminooctanamide",
    AlkylaminoOctanoicAcid => "8-(Alkylamino)octanoic acid",
    TrialkylammonioOctanoate => "8-(Trialkylammonio)octanoate",
    AcylaminoOctanoicAcid => "8-(Acylamino)octanoic acid",
    AcylaminoOctanoateEster => "8-(Acylamino)octanoate ester",
    AcylaminoheptylKetone => "7-(Acylamino)heptyl ketone",
    NineMemberedLactamRing => "9-Membered lactam ring",
    AminoNonanoicAcid => "9-Aminononanoic acid",
    AminoNonanoateEster => "9-Aminononanoate ester",
    AminoNonanamide => "9-Aminononanamide",
    AlkylaminoNonanoicAcid => "9-(Alkylamino)nonanoic acid",
    TrialkylammonioNonanoate => "9-(Trialkylammonio)nonanoate",
    AcylaminoNonanoicAcid => "9-(Acylamino)nonanoic acid",
    AcylaminoNonanoateEster => "9-(Acylamino)nonanoate ester",
    AcylaminooctylKetone => "8-(Acylamino)octyl ketone",
    TenMemberedLactamRing => "10-Membered lactam ring",
    AminoDecanoicAcid => "10-Aminodecanoic acid",
    AminoDecanoateEster => "10-Aminodecanoate ester",
    AminoDecanamide => "10-Aminodecanamide",
    AlkylaminoDecanoicAcid => "10-(Alkylamino)decanoic acid",
    TrialkylammonioDecanoate => "10-(Trialkylammonio)decanoate",
    AcylaminoDecanoicAcid => "10-(Acylamino)decanoic acid",
    AcylaminoDecanoateEster => "10-(Acylamino)decanoate ester",
    AcylaminononylKetone => "9-(Acylamino)nonyl ketone",
    ElevenMemberedLactamRing => "11-Membered lactam ring",
    AminoUndecanoicAcid => "11-Aminoundecanoic acid",
    AminoUndecanoateEster => "11-Aminoundecanoate ester",
    AminoUndecanamide => "11-Aminoundecanamide",
    AlkylaminoUndecanoicAcid => "11-(Alkylamino)undecanoic acid",
    TrialkylammonioUndecanoate => "11-(Trialkylammonio)undecanoate",
    AcylaminoUndecanoicAcid => "11-(Acylamino)undecanoic acid",
    AcylaminoUndecanoateEster => "11-(Acylamino)undecanoate ester",
    AcylaminodecylKetone => "10-(Acylamino)decyl ketone",
    TwelveMemberedLactamRing => "12-Membered lactam ring",
    HydroxyEthanoicAcid => "2-Hydroxyethanoic acid",
    HydroxyEthanoateEster => "2-Hydroxyethanoate ester",
    HydroxyEthanamide => "2-Hydroxyethanamide",
    HydroxyEthanal => "2-Hydroxyethanal",
    HydroxymethylKetone => "1-Hydroxymethyl ketone",
    AlkoxyEthanoicAcid => "2-Alkoxyethanoic acid",
    AlkoxyEthanoateEster => "2-Alkoxyethanoate ester",
    AcyloxyEthanoicAcid => "2-Acyloxyethanoic acid",
    AcyloxyEthanoateEster => "2-Acyloxyethanoate ester",
    HydroxyPropanoicAcid => "3-Hydroxypropanoic acid",
    HydroxyPropanoateEster => "3-Hydroxypropanoate ester",
    HydroxyPropanamide => "3-Hydroxypropanamide",
    HydroxyPropanal => "3-Hydroxypropanal",
    HydroxyethylKetone => "2-Hydroxyethyl ketone",
    AlkoxyPropanoicAcid => "3-Alkoxypropanoic acid",
    AlkoxyPropanoateEster => "3-Alkoxypropanoate ester",
    AcyloxyPropanoicAcid => "3-Acyloxypropanoic acid",
    AcyloxyPropanoateEster => "3-Acyloxypropanoate ester",
    BetaLactoneRing => "Beta-lactone ring",
    HydroxyButanoicAcid => "4-Hydroxybutanoic acid",
    HydroxyButanoateEster => "4-Hydroxybutanoate ester",
    HydroxyButanamide => "4-Hydroxybutanamide",
    HydroxyButanal => "4-Hydroxybutanal",
    HydroxypropylKetone => "3-Hydroxypropyl ketone",
    AlkoxyButanoicAcid => "4-Alkoxybutanoic acid",
    AlkoxyButanoateEster => "4-Alkoxybutanoate ester",
    AcyloxyButanoicAcid => "4-Acyloxybutanoic acid",
    AcyloxyButanoateEster => "4-Acyloxybutanoate ester",
    HydroxyPentanoicAcid => "5-Hydroxypentanoic acid",
    HydroxyPentanoateEster => "5-Hydroxypentanoate ester",
    HydroxyPentanamide => "5-Hydroxypentanamide",
    HydroxyPentanal => "5-Hydroxypentanal",
    HydroxybutylKetone => "4-Hydroxybutyl ketone",
    AlkoxyPentanoicAcid => "5-Alkoxypentanoic acid",
    AlkoxyPentanoateEster => "5-Alkoxypentanoate ester",
    AcyloxyPentanoicAcid => "5-Acyloxypentanoic acid",
    AcyloxyPentanoateEster => "5-Acyloxypentanoate ester",
    HydroxyHexanoicAcid => "6-Hydroxyhexanoic acid",
    HydroxyHexanoateEster => "6-Hydroxyhexanoate ester",
    HydroxyHexanamide => "6-Hydroxyhexanamide",
    HydroxyHexanal => "6-Hydroxyhexanal",
    HydroxypentylKetone => "5-Hydroxypentyl ketone",
    AlkoxyHexanoicAcid => "6-Alkoxyhexanoic acid",
    AlkoxyHexanoateEster => "6-Alkoxyhexanoate ester",
    AcyloxyHexanoicAcid => "6-Acyloxyhexanoic acid",
    AcyloxyHexanoateEster => "6-Acyloxyhexanoate ester",
    SevenMemberedLactoneRing => "7-Membered lactone ring",
    HydroxyHeptanoicAcid => "7-Hydroxyheptanoic acid",
    HydroxyHeptanoateEster => "7-Hydroxyheptanoate ester",
    HydroxyHeptanamide => "7-Hydroxyheptanamide",
    HydroxyHeptanal => "7-Hydroxyheptanal",
    HydroxyhexylKetone => "6-Hydroxyhexyl ketone",
    AlkoxyHeptanoicAcid => "7-Alkoxyheptanoic acid",
    AlkoxyHeptanoateEster => "7-Alkoxyheptanoate ester",
    AcyloxyHeptanoicAcid => "7-Acyloxyheptanoic acid",
    AcyloxyHeptanoateEster => "7-Acyloxyheptanoate ester",
    EightMemberedLactoneRing => "8-Membered lactone ring",
    HydroxyOctanoicAcid => "8-Hydroxyoctanoic acid",
    HydroxyOctanoateEster => "8-Hydroxyoctanoate ester",
    HydroxyOctanamide => "8-Hydroxyoctanamide",
    HydroxyOctanal => "8-Hydroxyoctanal",
    HydroxyheptylKetone => "7-Hydroxyheptyl ketone",
    AlkoxyOctanoicAcid => "8-Alkoxyoctanoic acid",
    AlkoxyOctanoateEster => "8-Alkoxyoctanoate ester",
    AcyloxyOctanoicAcid => "8-Acyloxyoctanoic acid",
    AcyloxyOctanoateEster => "8-Acyloxyoctanoate ester",
    NineMemberedLactoneRing => "9-Membered lactone ring",
    HydroxyNonanoicAcid => "9-Hydroxynonanoic acid",
    HydroxyNonanoateEster => "9-Hydroxynonanoate ester",
    HydroxyNonanamide => "9-Hydroxynonanamide",
    HydroxyNonanal => "9-Hydroxynonanal",
    HydroxyoctylKetone => "8-Hydroxyoctyl ketone",
    AlkoxyNonanoicAcid => "9-Alkoxynonanoic acid",
    AlkoxyNonanoateEster => "9-Alkoxynonanoate ester",
    AcyloxyNonanoicAcid => "9-Acyloxynonanoic acid",
    AcyloxyNonanoateEster => "9-Acyloxynonanoate ester",
    TenMemberedLactoneRing => "10-Membered lactone ring",
    HydroxyDecanoicAcid => "10-Hydroxydecanoic acid",
    HydroxyDecanoateEster => "10-Hydroxydecanoate ester",
    HydroxyDecanamide => "10-Hydroxydecanamide",
    HydroxyDecanal => "10-Hydroxydecanal",
    HydroxynonylKetone => "9-Hydroxynonyl ketone",
    AlkoxyDecanoicAcid => "10-Alkoxydecanoic acid",
    AlkoxyDecanoateEster => "10-Alkoxydecanoate ester",
    AcyloxyDecanoicAcid => "10-Acyloxydecanoic acid",
    AcyloxyDecanoateEster => "10-Acyloxydecanoate ester",
    ElevenMemberedLactoneRing => "11-Membered lactone ring",
    HydroxyUndecanoicAcid => "11-Hydroxyundecanoic acid",
    HydroxyUndecanoateEster => "11-Hydroxyundecanoate ester",
    HydroxyUndecanamide => "11-Hydroxyundecanamide",
    HydroxyUndecanal => "11-Hydroxyundecanal",
    HydroxydecylKetone => "10-Hydroxydecyl ketone",
    AlkoxyUndecanoicAcid => "11-Alkoxyundecanoic acid",
    AlkoxyUndecanoateEster => "11-Alkoxyundecanoate ester",
    AcyloxyUndecanoicAcid => "11-Acyloxyundecanoic acid",
    AcyloxyUndecanoateEster => "11-Acyloxyundecanoate ester",
    TwelveMemberedLactoneRing => "12-Membered lactone ring",
    MercaptoEthanoicAcid => "2-Mercaptoethanoic acid",
    MercaptoEthanamide => "2-Mercaptoethanamide",
    AlkylthioEthanoicAcid => "2-(Alkylthio)ethanoic acid",
    AlkylthioEthanoateEster => "2-(Alkylthio)ethanoate ester",
    SulfonylEthanoicAcid => "2-Sulfonylethanoic acid",
    MercaptoPropanoicAcid => "3-Mercaptopropanoic acid",
    MercaptoPropanamide => "3-Mercaptopropanamide",
    AlkylthioPropanoicAcid => "3-(Alkylthio)propanoic acid",
    AlkylthioPropanoateEster => "3-(Alkylthio)propanoate ester",
    SulfonylPropanoicAcid => "3-Sulfonylpropanoic acid",
    MercaptoButanoicAcid => "4-Mercaptobutanoic acid",
    MercaptoButanamide => "4-Mercaptobutanamide",
    AlkylthioButanoicAcid => "4-(Alkylthio)butanoic acid",
    AlkylthioButanoateEster => "4-(Alkylthio)butanoate ester",
    SulfonylButanoicAcid => "4-Sulfonylbutanoic acid",
    MercaptoPentanoicAcid => "5-Mercaptopentanoic acid",
    MercaptoPentanamide => "5-Mercaptopentanamide",
    AlkylthioPentanoicAcid => "5-(Alkylthio)pentanoic acid",
    AlkylthioPentanoateEster => "5-(Alkylthio)pentanoate ester",
    SulfonylPentanoicAcid => "5-Sulfonylpentanoic acid",
    MercaptoHexanoicAcid => "6-Mercaptohexanoic acid",
    MercaptoHexanamide => "6-Mercaptohexanamide",
    AlkylthioHexanoicAcid => "6-(Alkylthio)hexanoic acid",
    AlkylthioHexanoateEster => "6-(Alkylthio)hexanoate ester",
    SulfonylHexanoicAcid => "6-Sulfonylhexanoic acid",
    MercaptoHeptanoicAcid => "7-Mercaptoheptanoic acid",
    MercaptoHeptanamide => "7-Mercaptoheptanamide",
    AlkylthioHeptanoicAcid => "7-(Alkylthio)heptanoic acid",
    AlkylthioHeptanoateEster => "7-(Alkylthio)heptanoate ester",
    SulfonylHeptanoicAcid => "7-Sulfonylheptanoic acid",
    MercaptoOctanoicAcid => "8-Mercaptooctanoic acid",
    MercaptoOctanamide => "8-Mercaptooctanamide",
    AlkylthioOctanoicAcid => "8-(Alkylthio)octanoic acid",
    AlkylthioOctanoateEster => "8-(Alkylthio)octanoate ester",
    SulfonylOctanoicAcid => "8-Sulfonyloctanoic acid",
    MercaptoNonanoicAcid => "9-Mercaptononanoic acid",
    MercaptoNonanamide => "9-Mercaptononanamide",
    AlkylthioNonanoicAcid => "9-(Alkylthio)nonanoic acid",
    AlkylthioNonanoateEster => "9-(Alkylthio)nonanoate ester",
    SulfonylNonanoicAcid => "9-Sulfonylnonanoic acid",
    MercaptoDecanoicAcid => "10-Mercaptodecanoic acid",
    MercaptoDecanamide => "10-Mercaptodecanamide",
    AlkylthioDecanoicAcid => "10-(Alkylthio)decanoic acid",
    AlkylthioDecanoateEster => "10-(Alkylthio)decanoate ester",
    SulfonylDecanoicAcid => "10-Sulfonyldecanoic acid",
    MercaptoUndecanoicAcid => "11-Mercaptoundecanoic acid",
    MercaptoUndecanamide => "11-Mercaptoundecanamide",
    AlkylthioUndecanoicAcid => "11-(Alkylthio)undecanoic acid",
    AlkylthioUndecanoateEster => "11-(Alkylthio)undecanoate ester",
    SulfonylUndecanoicAcid => "11-Sulfonylundecanoic acid",
    ChloroEthanoicAcid => "2-Chloroethanoic acid",
    ChloroEthanoateEster => "2-Chloroethanoate ester",
    ChloroEthanamide => "2-Chloroethanamide",
    ChloromethylKetone => "1-Chloromethyl ketone",
    ChloroPropanoicAcid => "3-Chloropropanoic acid",
    ChloroPropanoateEster => "3-Chloropropanoate ester",
    ChloroPropanamide => "3-Chloropropanamide",
    ChloroethylKetone => "2-Chloroethyl ketone",
    ChloroButanoicAcid => "4-Chlorobutanoic acid",
    ChloroButanoateEster => "4-Chlorobutanoate ester",
    ChloroButanamide => "4-Chlorobutanamide",
    ChloropropylKetone => "3-Chloropropyl ketone",
    ChloroPentanoicAcid => "5-Chloropentanoic acid",
    ChloroPentanoateEster => "5-Chloropentanoate ester",
    ChloroPentanamide => "5-Chloropentanamide",
    ChlorobutylKetone => "4-Chlorobutyl ketone",
    ChloroHexanoicAcid => "6-Chlorohexanoic acid",
    ChloroHexanoateEster => "6-Chlorohexanoate ester",
    ChloroHexanamide => "6-Chlorohexanamide",
    ChloropentylKetone => "5-Chloropentyl ketone",
    ChloroHeptanoicAcid => "7-Chloroheptanoic acid",
    ChloroHeptanoateEster => "7-Chloroheptanoate ester",
    ChloroHeptanamide => "7-Chloroheptanamide",
    ChlorohexylKetone => "6-Chlorohexyl ketone",
    ChloroOctanoicAcid => "8-Chlorooctanoic acid",
    ChloroOctanoateEster => "8-Chlorooctanoate ester",
    ChloroOctanamide => "8-Chlorooctanamide",
    ChloroheptylKetone => "7-Chloroheptyl ketone",
    ChloroNonanoicAcid => "9-Chlorononanoic acid",
    ChloroNonanoateEster => "9-Chlorononanoate ester",
    ChloroNonanamide => "9-Chlorononanamide",
    ChlorooctylKetone => "8-Chlorooctyl ketone",
    ChloroDecanoicAcid => "10-Chlorodecanoic acid",
    ChloroDecanoateEster => "10-Chlorodecanoate ester",
    ChloroDecanamide => "10-Chlorodecanamide",
    ChlorononylKetone => "9-Chlorononyl ketone",
    ChloroUndecanoicAcid => "11-Chloroundecanoic acid",
    ChloroUndecanoateEster => "11-Chloroundecanoate ester",
    ChloroUndecanamide => "11-Chloroundecanamide",
    ChlorodecylKetone => "10-Chlorodecyl ketone",
    BromoEthanoicAcid => "2-Bromoethanoic acid",
    BromoEthanoateEster => "2-Bromoethanoate ester",
    BromoEthanamide => "2-Bromoethanamide",
    BromomethylKetone => "1-Bromomethyl ketone",
    BromoPropanoicAcid => "3-Bromopropanoic acid",
    BromoPropanoateEster => "3-Bromopropanoate ester",
    BromoPropanamide => "3-Bromopropanamide",
    BromoethylKetone => "2-Bromoethyl ketone",
    BromoButanoicAcid => "4-Bromobutanoic acid",
    BromoButanoateEster => "4-Bromobutanoate ester",
    BromoButanamide => "4-Bromobutanamide",
    BromopropylKetone => "3-Bromopropyl ketone",
    BromoPentanoicAcid => "5-Bromopentanoic acid",
    BromoPentanoateEster => "5-Bromopentanoate ester",
    BromoPentanamide => "5-Bromopentanamide",
    BromobutylKetone => "4-Bromobutyl ketone",
    BromoHexanoicAcid => "6-Bromohexanoic acid",
    BromoHexanoateEster => "6-Bromohexanoate ester",
    BromoHexanamide => "6-Bromohexanamide",
    BromopentylKetone => "5-Bromopentyl ketone",
    BromoHeptanoicAcid => "7-Bromoheptanoic acid",
    BromoHeptanoateEster => "7-Bromoheptanoate ester",
    BromoHeptanamide => "7-Bromoheptanamide",
    BromohexylKetone => "6-Bromohexyl ketone",
    BromoOctanoicAcid => "8-Bromooctanoic acid",
    BromoOctanoateEster => "8-Bromooctanoate ester",
    BromoOctanamide => "8-Bromooctanamide",
    BromoheptylKetone => "7-Bromoheptyl ketone",
    BromoNonanoicAcid => "9-Bromononanoic acid",
    BromoNonanoateEster => "9-Bromononanoate ester",
    BromoNonanamide => "9-Bromononanamide",
    BromooctylKetone => "8-Bromooctyl ketone",
    BromoDecanoicAcid => "10-Bromodecanoic acid",
    BromoDecanoateEster => "10-Bromodecanoate ester",
    BromoDecanamide => "10-Bromodecanamide",
    BromononylKetone => "9-Bromononyl ketone",
    BromoUndecanoicAcid => "11-Bromoundecanoic acid",
    BromoUndecanoateEster => "11-Bromoundecanoate ester",
    BromoUndecanamide => "11-Bromoundecanamide",
    BromodecylKetone => "10-Bromodecyl ketone",
    PerfluoroButanoicAcid => "Perfluorobutanoic acid",
    PerfluoroButanoyl => "Perfluorobutanoyl",
    PerfluoroPentanoicAcid => "Perfluoropentanoic acid",
    PerfluoroPentanoyl => "Perfluoropentanoyl",
    PerfluoroHexanoicAcid => "Perfluorohexanoic acid",
    PerfluoroHexanoyl => "Perfluorohexanoyl",
    PerfluoroHeptanoicAcid => "Perfluoroheptanoic acid",
    PerfluoroHeptanoyl => "Perfluoroheptanoyl",
    PerfluoroOctanoicAcid => "Perfluorooctanoic acid",
    PerfluoroOctanoyl => "Perfluorooctanoyl",
    PerfluoroNonanoicAcid => "Perfluorononanoic acid",
    PerfluoroNonanoyl => "Perfluorononanoyl",
    PerfluoroDecanoicAcid => "Perfluorodecanoic acid",
    PerfluoroDecanoyl => "Perfluorodecanoyl",
    PerfluoroUndecanoicAcid => "Perfluoroundecanoic acid",
    PerfluoroUndecanoyl => "Perfluoroundecanoyl",
    MalonicAcid => "Malonic acid",
    MalonicMonoester => "Malonic monoester",
    MalonicDiester => "Malonic diester",
    MalonicMonoamide => "Malonic monoamide",
    MalonicDiamide => "Malonic diamide",
    OxoThreeAcid => "3-Oxo acid",
    OxoThreeEster => "3-Oxo ester",
    OxoThreeAmide => "3-Oxo amide",
    DiketoneThree => "1,3-Diketone",
    MalonicSemialdehyde => "Malonic semialdehyde",
    Propanedial => "Propanedial",
    SuccinicAcid => "Succinic acid",
    SuccinicMonoester => "Succinic monoester",
    SuccinicDiester => "Succinic diester",
    SuccinicMonoamide => "Succinic monoamide",
    SuccinicDiamide => "Succinic diamide",
    OxoFourAcid => "4-Oxo acid",
    OxoFourEster => "4-Oxo ester",
    OxoFourAmide => "4-Oxo amide",
    DiketoneFour => "1,4-Diketone",
    SuccinicSemialdehyde => "Succinic semialdehyde",
    Butanedial => "Butanedial",
    CyclicImideFive => "Cyclic imide, 5-membered",
    CyclicAnhydrideFive => "Cyclic anhydride, 5-membered",
    GlutaricAcid => "Glutaric acid",
    GlutaricMonoester => "Glutaric monoester",
    GlutaricDiester => "Glutaric diester",
    GlutaricMonoamide => "Glutaric monoamide",
    GlutaricDiamide => "Glutaric diamide",
    OxoFiveAcid => "5-Oxo acid",
    OxoFiveEster => "5-Oxo ester",
    OxoFiveAmide => "5-Oxo amide",
    DiketoneFive => "1,5-Diketone",
    GlutaricSemialdehyde => "Glutaric semialdehyde",
    Pentanedial => "Pentanedial",
    CyclicImideSix => "Cyclic imide, 6-membered",
    CyclicAnhydrideSix => "Cyclic anhydride, 6-membered",
    AdipicAcid => "Adipic acid",
    AdipicMonoester => "Adipic monoester",
    AdipicDiester => "Adipic diester",
    AdipicMonoamide => "Adipic monoamide",
    AdipicDiamide => "Adipic diamide",
    OxoSixAcid => "6-Oxo acid",
    OxoSixEster => "6-Oxo ester",
    OxoSixAmide => "6-Oxo amide",
    DiketoneSix => "1,6-Diketone",
    AdipicSemialdehyde => "Adipic semialdehyde",
    Hexanedial => "Hexanedial",
    CyclicImideSeven => "Cyclic imide, 7-membered",
    CyclicAnhydrideSeven => "Cyclic anhydride, 7-membered",
    PimelicAcid => "Pimelic acid",
    PimelicMonoester => "Pimelic monoester",
    PimelicDiester => "Pimelic diester",
    PimelicMonoamide => "Pimelic monoamide",
    PimelicDiamide => "Pimelic diamide",
    OxoSevenAcid => "7-Oxo acid",
    OxoSevenEster => "7-Oxo ester",
    OxoSevenAmide => "7-Oxo amide",
    DiketoneSeven => "1,7-Diketone",
    PimelicSemialdehyde => "Pimelic semialdehyde",
    Heptanedial => "Heptanedial",
    SubericAcid => "Suberic acid",
    SubericMonoester => "Suberic monoester",
    SubericDiester => "Suberic diester",
    SubericMonoamide => "Suberic monoamide",
    SubericDiamide => "Suberic diamide",
    OxoEightAcid => "8-Oxo acid",
    OxoEightEster => "8-Oxo ester",
    OxoEightAmide => "8-Oxo amide",
    DiketoneEight => "1,8-Diketone",
    SubericSemialdehyde => "Suberic semialdehyde",
    Octanedial => "Octanedial",
    AzelaicAcid => "Azelaic acid",
    AzelaicMonoester => "Azelaic monoester",
    AzelaicDiester => "Azelaic diester",
    AzelaicMonoamide => "Azelaic monoamide",
    AzelaicDiamide => "Azelaic diamide",
    OxoNineAcid => "9-Oxo acid",
    OxoNineEster => "9-Oxo ester",
    OxoNineAmide => "9-Oxo amide",
    DiketoneNine => "1,9-Diketone",
    AzelaicSemialdehyde => "Azelaic semialdehyde",
    Nonanedial => "Nonanedial",
    SebacicAcid => "Sebacic acid",
    SebacicMonoester => "Sebacic monoester",
    SebacicDiester => "Sebacic diester",
    SebacicMonoamide => "Sebacic monoamide",
    SebacicDiamide => "Sebacic diamide",
    OxoTenAcid => "10-Oxo acid",
    OxoTenEster => "10-Oxo ester",
    OxoTenAmide => "10-Oxo amide",
    DiketoneTen => "1,10-Diketone",
    SebacicSemialdehyde => "Sebacic semialdehyde",
    Decanedial => "Decanedial",
    UndecanedioicAcid => "Undecanedioic acid",
    UndecanedioicMonoester => "Undecanedioic monoester",
    UndecanedioicDiester => "Undecanedioic diester",
    UndecanedioicMonoamide => "Undecanedioic monoamide",
    UndecanedioicDiamide => "Undecanedioic diamide",
    OxoElevenAcid => "11-Oxo acid",
    OxoElevenEster => "11-Oxo ester",
    OxoElevenAmide => "11-Oxo amide",
    DiketoneEleven => "1,11-Diketone",
    UndecanedioicSemialdehyde => "Undecanedioic semialdehyde",
    Undecanedial => "Undecanedial",
    // alkenyl and alkynyl chains
    ButThreeEnoicAcid => "But-3-enoic acid",
    ButThreeEnoateEster => "But-3-enoate ester",
    ButThreeEnamide => "But-3-enamide",
    ButThreeEnal => "But-3-enal",
    DeltaThreeUnsaturatedAcyl => "Delta-3 unsaturated acyl",
    DeltaThreeUnsaturatedAmide => "Delta-3 unsaturated amide",
    PentFourEnoicAcid => "Pent-4-enoic acid",
    PentFourEnoateEster => "Pent-4-enoate ester",
    PentFourEnamide => "Pent-4-enamide",
    PentFourEnal => "Pent-4-enal",
    DeltaFourUnsaturatedAcyl => "Delta-4 unsaturated acyl",
    DeltaFourUnsaturatedAmide => "Delta-4 unsaturated amide",
    HexFiveEnoicAcid => "Hex-5-enoic acid",
    HexFiveEnoateEster => "Hex-5-enoate ester",
    HexFiveEnamide => "Hex-5-enamide",
    HexFiveEnal => "Hex-5-enal",
    DeltaFiveUnsaturatedAcyl => "Delta-5 unsaturated acyl",
    DeltaFiveUnsaturatedAmide => "Delta-5 unsaturated amide",
    HeptSixEnoicAcid => "Hept-6-enoic acid",
    HeptSixEnoateEster => "Hept-6-enoate ester",
    HeptSixEnamide => "Hept-6-enamide",
    HeptSixEnal => "Hept-6-enal",
    DeltaSixUnsaturatedAcyl => "Delta-6 unsaturated acyl",
    DeltaSixUnsaturatedAmide => "Delta-6 unsaturated amide",
    OctSevenEnoicAcid => "Oct-7-enoic acid",
    OctSevenEnoateEster => "Oct-7-enoate ester",
    OctSevenEnamide => "Oct-7-enamide",
    OctSevenEnal => "Oct-7-enal",
    DeltaSevenUnsaturatedAcyl => "Delta-7 unsaturated acyl",
    DeltaSevenUnsaturatedAmide => "Delta-7 unsaturated amide",
    NonEightEnoicAcid => "Non-8-enoic acid",
    NonEightEnoateEster => "Non-8-enoate ester",
    NonEightEnamide => "Non-8-enamide",
    NonEightEnal => "Non-8-enal",
    DeltaEightUnsaturatedAcyl => "Delta-8 unsaturated acyl",
    DeltaEightUnsaturatedAmide => "Delta-8 unsaturated amide",
    DecNineEnoicAcid => "Dec-9-enoic acid",
    DecNineEnoateEster => "Dec-9-enoate ester",
    DecNineEnamide => "Dec-9-enamide",
    DecNineEnal => "Dec-9-enal",
    DeltaNineUnsaturatedAcyl => "Delta-9 unsaturated acyl",
    DeltaNineUnsaturatedAmide => "Delta-9 unsaturated amide",
    UndecTenEnoicAcid => "Undec-10-enoic acid",
    UndecTenEnoateEster => "Undec-10-enoate ester",
    UndecTenEnamide => "Undec-10-enamide",
    UndecTenEnal => "Undec-10-enal",
    DeltaTenUnsaturatedAcyl => "Delta-10 unsaturated acyl",
    DeltaTenUnsaturatedAmide => "Delta-10 unsaturated amide",
    DodecElevenEnoicAcid => "Dodec-11-enoic acid",
    DodecElevenEnoateEster => "Dodec-11-enoate ester",
    DodecElevenEnamide => "Dodec-11-enamide",
    DodecElevenEnal => "Dodec-11-enal",
    DeltaElevenUnsaturatedAcyl => "Delta-11 unsaturated acyl",
    DeltaElevenUnsaturatedAmide => "Delta-11 unsaturated amide",
    ButThreeYnoicAcid => "But-3-ynoic acid",
    ButThreeYnoateEster => "But-3-ynoate ester",
    ButThreeYnamide => "But-3-ynamide",
    ButThreeYnal => "But-3-ynal",
    DeltaThreeAcetylenicAcyl => "Delta-3 acetylenic acyl",
    DeltaThreeAcetylenicAmide => "Delta-3 acetylenic amide",
    PentFourYnoicAcid => "Pent-4-ynoic acid",
    PentFourYnoateEster => "Pent-4-ynoate ester",
    PentFourYnamide => "Pent-4-ynamide",
    PentFourYnal => "Pent-4-ynal",
    DeltaFourAcetylenicAcyl => "Delta-4 acetylenic acyl",
    DeltaFourAcetylenicAmide => "Delta-4 acetylenic amide",
    HexFiveYnoicAcid => "Hex-5-ynoic acid",
    HexFiveYnoateEster => "Hex-5-ynoate ester",
    HexFiveYnamide => "Hex-5-ynamide",
    HexFiveYnal => "Hex-5-ynal",
    DeltaFiveAcetylenicAcyl => "Delta-5 acetylenic acyl",
    DeltaFiveAcetylenicAmide => "Delta-5 acetylenic amide",
    HeptSixYnoicAcid => "Hept-6-ynoic acid",
    HeptSixYnoateEster => "Hept-6-ynoate ester",
    HeptSixYnamide => "Hept-6-ynamide",
    HeptSixYnal => "Hept-6-ynal",
    DeltaSixAcetylenicAcyl => "Delta-6 acetylenic acyl",
    DeltaSixAcetylenicAmide => "Delta-6 acetylenic amide",
    OctSevenYnoicAcid => "Oct-7-ynoic acid",
    OctSevenYnoateEster => "Oct-7-ynoate ester",
    OctSevenYnamide => "Oct-7-ynamide",
    OctSevenYnal => "Oct-7-ynal",
    DeltaSevenAcetylenicAcyl => "Delta-7 acetylenic acyl",
    DeltaSevenAcetylenicAmide => "Delta-7 acetylenic amide",
    NonEightYnoicAcid => "Non-8-ynoic acid",
    NonEightYnoateEster => "Non-8-ynoate ester",
    NonEightYnamide => "Non-8-ynamide",
    NonEightYnal => "Non-8-ynal",
    DeltaEightAcetylenicAcyl => "Delta-8 acetylenic acyl",
    DeltaEightAcetylenicAmide => "Delta-8 acetylenic amide",
    DecNineYnoicAcid => "Dec-9-ynoic acid",
    DecNineYnoateEster => "Dec-9-ynoate ester",
    DecNineYnamide => "Dec-9-ynamide",
    DecNineYnal => "Dec-9-ynal",
    DeltaNineAcetylenicAcyl => "Delta-9 acetylenic acyl",
    DeltaNineAcetylenicAmide => "Delta-9 acetylenic amide",
    UndecTenYnoicAcid => "Undec-10-ynoic acid",
    UndecTenYnoateEster => "Undec-10-ynoate ester",
    UndecTenYnamide => "Undec-10-ynamide",
    UndecTenYnal => "Undec-10-ynal",
    DeltaTenAcetylenicAcyl => "Delta-10 acetylenic acyl",
    DeltaTenAcetylenicAmide => "Delta-10 acetylenic amide",
    DodecElevenYnoicAcid => "Dodec-11-ynoic acid",
    DodecElevenYnoateEster => "Dodec-11-ynoate ester",
    DodecElevenYnamide => "Dodec-11-ynamide",
    DodecElevenYnal => "Dodec-11-ynal",
    DeltaElevenAcetylenicAcyl => "Delta-11 acetylenic acyl",
    DeltaElevenAcetylenicAmide => "Delta-11 acetylenic amide",
    OmegaThreeDoubleBond => "Omega-3 double bond",
    OmegaFourDoubleBond => "Omega-4 double bond",
    OmegaFiveDoubleBond => "Omega-5 double bond",
    OmegaSixDoubleBond => "Omega-6 double bond",
    OmegaSevenDoubleBond => "Omega-7 double bond",
    OmegaEightDoubleBond => "Omega-8 double bond",
    OmegaNineDoubleBond => "Omega-9 double bond",
    OmegaTenDoubleBond => "Omega-10 double bond",
    OmegaElevenDoubleBond => "Omega-11 double bond",
    OmegaTwelveDoubleBond => "Omega-12 double bond",
    PentFourEnOneOl => "Pent-4-en-1-ol",
    PentFourEnylEther => "Pent-4-enyl ether",
    PentFourEnylEster => "Pent-4-enyl ester",
    DeltaFourAlkenol => "Delta-4 alkenol",
    DeltaFourAlkenylOxy => "Delta-4 alkenyloxy",
    HexFiveEnOneOl => "Hex-5-en-1-ol",
    HexFiveEnylEther => "Hex-5-enyl ether",
    HexFiveEnylEster => "Hex-5-enyl ester",
    DeltaFiveAlkenol => "Delta-5 alkenol",
    DeltaFiveAlkenylOxy => "Delta-5 alkenyloxy",
    HeptSixEnOneOl => "Hept-6-en-1-ol",
    HeptSixEnylEther => "Hept-6-enyl ether",
    HeptSixEnylEster => "Hept-6-enyl ester",
    DeltaSixAlkenol => "Delta-6 alkenol",
    DeltaSixAlkenylOxy => "Delta-6 alkenyloxy",
    OctSevenEnOneOl => "Oct-7-en-1-ol",
    OctSevenEnylEther => "Oct-7-enyl ether",
    OctSevenEnylEster => "Oct-7-enyl ester",
    DeltaSevenAlkenol => "Delta-7 alkenol",
    DeltaSevenAlkenylOxy => "Delta-7 alkenyloxy",
    NonEightEnOneOl => "Non-8-en-1-ol",
    NonEightEnylEther => "Non-8-enyl ether",
    NonEightEnylEster => "Non-8-enyl ester",
    DeltaEightAlkenol => "Delta-8 alkenol",
    DeltaEightAlkenylOxy => "Delta-8 alkenyloxy",
    DecNineEnOneOl => "Dec-9-en-1-ol",
    DecNineEnylEther => "Dec-9-enyl ether",
    DecNineEnylEster => "Dec-9-enyl ester",
    DeltaNineAlkenol => "Delta-9 alkenol",
    DeltaNineAlkenylOxy => "Delta-9 alkenyloxy",
    UndecTenEnOneOl => "Undec-10-en-1-ol",
    UndecTenEnylEther => "Undec-10-enyl ether",
    UndecTenEnylEster => "Undec-10-enyl ester",
    DeltaTenAlkenol => "Delta-10 alkenol",
    DeltaTenAlkenylOxy => "Delta-10 alkenyloxy",
    DodecElevenEnOneOl => "Dodec-11-en-1-ol",
    DodecElevenEnylEther => "Dodec-11-enyl ether",
    DodecElevenEnylEster => "Dodec-11-enyl ester",
    DeltaElevenAlkenol => "Delta-11 alkenol",
    DeltaElevenAlkenylOxy => "Delta-11 alkenyloxy",
    PropTwoEnOneAmine => "Prop-2-en-1-amine",
    PropTwoEnylAmide => "N-(Prop-2-enyl) amide",
    ButThreeEnOneAmine => "But-3-en-1-amine",
    ButThreeEnylAmide => "N-(But-3-enyl) amide",
    PentFourEnOneAmine => "Pent-4-en-1-amine",
    PentFourEnylAmide => "N-(Pent-4-enyl) amide",
    DeltaFourAlkenylamine => "Delta-4 alkenylamine",
    DeltaFourAlkenylAmide => "N-(Delta-4 alkenyl) amide",
    HexFiveEnOneAmine => "Hex-5-en-1-amine",
    HexFiveEnylAmide => "N-(Hex-5-enyl) amide",
    DeltaFiveAlkenylamine => "Delta-5 alkenylamine",
    DeltaFiveAlkenylAmide => "N-(Delta-5 alkenyl) amide",
    HeptSixEnOneAmine => "Hept-6-en-1-amine",
    HeptSixEnylAmide => "N-(Hept-6-enyl) amide",
    DeltaSixAlkenylamine => "Delta-6 alkenylamine",
    DeltaSixAlkenylAmide => "N-(Delta-6 alkenyl) amide",
    OctSevenEnOneAmine => "Oct-7-en-1-amine",
    OctSevenEnylAmide => "N-(Oct-7-enyl) amide",
    DeltaSevenAlkenylamine => "Delta-7 alkenylamine",
    DeltaSevenAlkenylAmide => "N-(Delta-7 alkenyl) amide",
    NonEightEnOneAmine => "Non-8-en-1-amine",
    NonEightEnylAmide => "N-(Non-8-enyl) amide",
    DeltaEightAlkenylamine => "Delta-8 alkenylamine",
    DeltaEightAlkenylAmide => "N-(Delta-8 alkenyl) amide",
    DecNineEnOneAmine => "Dec-9-en-1-amine",
    DecNineEnylAmide => "N-(Dec-9-enyl) amide",
    DeltaNineAlkenylamine => "Delta-9 alkenylamine",
    DeltaNineAlkenylAmide => "N-(Delta-9 alkenyl) amide",
    UndecTenEnOneAmine => "Undec-10-en-1-amine",
    UndecTenEnylAmide => "N-(Undec-10-enyl) amide",
    DeltaTenAlkenylamine => "Delta-10 alkenylamine",
    DeltaTenAlkenylAmide => "N-(Delta-10 alkenyl) amide",
    DodecElevenEnOneAmine => "Dodec-11-en-1-amine",
    DodecElevenEnylAmide => "N-(Dodec-11-enyl) amide",
    DeltaElevenAlkenylamine => "Delta-11 alkenylamine",
    DeltaElevenAlkenylAmide => "N-(Delta-11 alkenyl) amide",
    PropTwoEnOneThiol => "Prop-2-en-1-thiol",
    PropTwoEnylSulfide => "Prop-2-enyl sulfide",
    ButThreeEnOneThiol => "But-3-en-1-thiol",
    ButThreeEnylSulfide => "But-3-enyl sulfide",
    PentFourEnOneThiol => "Pent-4-en-1-thiol",
    PentFourEnylSulfide => "Pent-4-enyl sulfide",
    HexFiveEnOneThiol => "Hex-5-en-1-thiol",
    HexFiveEnylSulfide => "Hex-5-enyl sulfide",
    HeptSixEnOneThiol => "Hept-6-en-1-thiol",
    HeptSixEnylSulfide => "Hept-6-enyl sulfide",
    OctSevenEnOneThiol => "Oct-7-en-1-thiol",
    OctSevenEnylSulfide => "Oct-7-enyl sulfide",
    NonEightEnOneThiol => "Non-8-en-1-thiol",
    NonEightEnylSulfide => "Non-8-enyl sulfide",
    DecNineEnOneThiol => "Dec-9-en-1-thiol",
    DecNineEnylSulfide => "Dec-9-enyl sulfide",
    UndecTenEnOneThiol => "Undec-10-en-1-thiol",
    UndecTenEnylSulfide => "Undec-10-enyl sulfide",
    DodecElevenEnOneThiol => "Dodec-11-en-1-thiol",
    DodecElevenEnylSulfide => "Dodec-11-enyl sulfide",
    ChloroPropTwoEne => "3-Chloroprop-1-ene",
    ChloroButThreeEne => "4-Chlorobut-1-ene",
    ChloroPentFourEne => "5-Chloropent-1-ene",
    ChloroHexFiveEne => "6-Chlorohex-1-ene",
    ChloroHeptSixEne => "7-Chlorohept-1-ene",
    ChloroOctSevenEne => "8-Chlorooct-1-ene",
    ChloroNonEightEne => "9-Chloronon-1-ene",
    ChloroDecNineEne => "10-Chlorodec-1-ene",
    ChloroUndecTenEne => "11-Chloroundec-1-ene",
    ChloroDodecElevenEne => "12-Chlorododec-1-ene",
    BromoPropTwoEne => "3-Bromoprop-1-ene",
    BromoButThreeEne => "4-Bromobut-1-ene",
    BromoPentFourEne => "5-Bromopent-1-ene",
    BromoHexFiveEne => "6-Bromohex-1-ene",
    BromoHeptSixEne => "7-Bromohept-1-ene",
    BromoOctSevenEne => "8-Bromooct-1-ene",
    BromoNonEightEne => "9-Bromonon-1-ene",
    BromoDecNineEne => "10-Bromodec-1-ene",
    BromoUndecTenEne => "11-Bromoundec-1-ene",
    BromoDodecElevenEne => "12-Bromododec-1-ene",
    ButThreeYnOneOl => "But-3-yn-1-ol",
    ButThreeYnylEther => "But-3-ynyl ether",
    ButThreeYnylEster => "But-3-ynyl ester",
    PentFourYnOneOl => "Pent-4-yn-1-ol",
    PentFourYnylEther => "Pent-4-ynyl ether",
    PentFourYnylEster => "Pent-4-ynyl ester",
    HexFiveYnOneOl => "Hex-5-yn-1-ol",
    HexFiveYnylEther => "Hex-5-ynyl ether",
    HexFiveYnylEster => "Hex-5-ynyl ester",
    HeptSixYnOneOl => "Hept-6-yn-1-ol",
    HeptSixYnylEther => "Hept-6-ynyl ether",
    HeptSixYnylEster => "Hept-6-ynyl ester",
    OctSevenYnOneOl => "Oct-7-yn-1-ol",
    OctSevenYnylEther => "Oct-7-ynyl ether",
    OctSevenYnylEster => "Oct-7-ynyl ester",
    NonEightYnOneOl => "Non-8-yn-1-ol",
    NonEightYnylEther => "Non-8-ynyl ether",
    NonEightYnylEster => "Non-8-ynyl ester",
    DecNineYnOneOl => "Dec-9-yn-1-ol",
    DecNineYnylEther => "Dec-9-ynyl ether",
    DecNineYnylEster => "Dec-9-ynyl ester",
    UndecTenYnOneOl => "Undec-10-yn-1-ol",
    UndecTenYnylEther => "Undec-10-ynyl ether",
    UndecTenYnylEster => "Undec-10-ynyl ester",
    DodecElevenYnOneOl => "Dodec-11-yn-1-ol",
    DodecElevenYnylEther => "Dodec-11-ynyl ether",
    DodecElevenYnylEster => "Dodec-11-ynyl ester",
    ButThreeYnOneAmine => "But-3-yn-1-amine",
    ButThreeYnylAmide => "N-(But-3-ynyl) amide",
    PentFourYnOneAmine => "Pent-4-yn-1-amine",
    PentFourYnylAmide => "N-(Pent-4-ynyl) amide",
    HexFiveYnOneAmine => "Hex-5-yn-1-amine",
    HexFiveYnylAmide => "N-(Hex-5-ynyl) amide",
    HeptSixYnOneAmine => "Hept-6-yn-1-amine",
    HeptSixYnylAmide => "N-(Hept-6-ynyl) amide",
    OctSevenYnOneAmine => "Oct-7-yn-1-amine",
    OctSevenYnylAmide => "N-(Oct-7-ynyl) amide",
    NonEightYnOneAmine => "Non-8-yn-1-amine",
    NonEightYnylAmide => "N-(Non-8-ynyl) amide",
    DecNineYnOneAmine => "Dec-9-yn-1-amine",
    DecNineYnylAmide => "N-(Dec-9-ynyl) amide",
    UndecTenYnOneAmine => "Undec-10-yn-1-amine",
    UndecTenYnylAmide => "N-(Undec-10-ynyl) amide",
    DodecElevenYnOneAmine => "Dodec-11-yn-1-amine",
    DodecElevenYnylAmide => "N-(Dodec-11-ynyl) amide",
    ButThreeYnOneThiol => "But-3-yn-1-thiol",
    ButThreeYnylSulfide => "But-3-ynyl sulfide",
    PentFourYnOneThiol => "Pent-4-yn-1-thiol",
    PentFourYnylSulfide => "Pent-4-ynyl sulfide",
    HexFiveYnOneThiol => "Hex-5-yn-1-thiol",
    HexFiveYnylSulfide => "Hex-5-ynyl sulfide",
    HeptSixYnOneThiol => "Hept-6-yn-1-thiol",
    HeptSixYnylSulfide => "Hept-6-ynyl sulfide",
    OctSevenYnOneThiol => "Oct-7-yn-1-thiol",
    OctSevenYnylSulfide => "Oct-7-ynyl sulfide",
    NonEightYnOneThiol => "Non-8-yn-1-thiol",
    NonEightYnylSulfide => "Non-8-ynyl sulfide",
    DecNineYnOneThiol => "Dec-9-yn-1-thiol",
    DecNineYnylSulfide => "Dec-9-ynyl sulfide",
    UndecTenYnOneThiol => "Undec-10-yn-1-thiol",
    UndecTenYnylSulfide => "Undec-10-ynyl sulfide",
    DodecElevenYnOneThiol => "Dodec-11-yn-1-thiol",
    DodecElevenYnylSulfide => "Dodec-11-ynyl sulfide",
    ChloroButThreeYne => "4-Chlorobut-1-yne",
    ChloroPentFourYne => "5-Chloropent-1-yne",
    ChloroHexFiveYne => "6-Chlorohex-1-yne",
    ChloroHeptSixYne => "7-Chlorohept-1-yne",
    ChloroOctSevenYne => "8-Chlorooct-1-yne",
    ChloroNonEightYne => "9-Chloronon-1-yne",
    ChloroDecNineYne => "10-Chlorodec-1-yne",
    ChloroUndecTenYne => "11-Chloroundec-1-yne",
    ChloroDodecElevenYne => "12-Chlorododec-1-yne",
    BromoButThreeYne => "4-Bromobut-1-yne",
    BromoPentFourYne => "5-Bromopent-1-yne",
    BromoHexFiveYne => "6-Bromohex-1-yne",
    BromoHeptSixYne => "7-Bromohept-1-yne",
    BromoOctSevenYne => "8-Bromooct-1-yne",
    BromoNonEightYne => "9-Bromonon-1-yne",
    BromoDecNineYne => "10-Bromodec-1-yne",
    BromoUndecTenYne => "11-Bromoundec-1-yne",
    BromoDodecElevenYne => "12-Bromododec-1-yne",
    // benzene substitution patterns and tethered side chains
    OrthoMethylHydroxymethylArene => "Ortho methyl hydroxymethyl arene",
    OrthoMethylTrifluoromethylArene => "Ortho methyl trifluoromethyl arene",
    OrthoMethylCarboxyArene => "Ortho methyl carboxy arene",
    OrthoMethylAlkoxycarbonylArene => "Ortho methyl alkoxycarbonyl arene",
    OrthoMethylCarbamoylArene => "Ortho methyl carbamoyl arene",
    OrthoMethylFormylArene => "Ortho methyl formyl arene",
    OrthoMethylAcylArene => "Ortho methyl acyl arene",
    OrthoMethylCyanoArene => "Ortho methyl cyano arene",
    OrthoMethylVinylArene => "Ortho methyl vinyl arene",
    OrthoMethylAlkylArene => "Ortho methyl alkyl arene",
    OrthoDihydroxymethylArene => "Ortho dihydroxymethyl arene",
    OrthoHydroxymethylTrifluoromethylArene => "Ortho hydroxymethyl trifluoromethyl arene",
    OrthoHydroxymethylCarboxyArene => "Ortho hydroxymethyl carboxy arene",
    OrthoHydroxymethylAlkoxycarbonylArene => "Ortho hydroxymethyl alkoxycarbonyl arene",
    OrthoHydroxymethylCarbamoylArene => "Ortho hydroxymethyl carbamoyl arene",
    OrthoHydroxymethylFormylArene => "Ortho hydroxymethyl formyl arene",
    OrthoHydroxymethylAcylArene => "Ortho hydroxymethyl acyl arene",
    OrthoHydroxymethylCyanoArene => "Ortho hydroxymethyl cyano arene",
    OrthoHydroxymethylVinylArene => "Ortho hydroxymethyl vinyl arene",
    OrthoHydroxymethylAlkylArene => "Ortho hydroxymethyl alkyl arene",
    OrthoDitrifluoromethylArene => "Ortho ditrifluoromethyl arene",
    OrthoTrifluoromethylCarboxyArene => "Ortho trifluoromethyl carboxy arene",
    OrthoTrifluoromethylAlkoxycarbonylArene => "Ortho trifluoromethyl alkoxycarbonyl arene",
    OrthoTrifluoromethylCarbamoylArene => "Ortho trifluoromethyl carbamoyl arene",
    OrthoTrifluoromethylFormylArene => "Ortho trifluoromethyl formyl arene",
    OrthoTrifluoromethylAcylArene => "Ortho trifluoromethyl acyl arene",
    OrthoTrifluoromethylCyanoArene => "Ortho trifluoromethyl cyano arene",
    OrthoTrifluoromethylVinylArene => "Ortho trifluoromethyl vinyl arene",
    OrthoTrifluoromethylAlkylArene => "Ortho trifluoromethyl alkyl arene",
    OrthoCarboxyCarbamoylArene => "Ortho carboxy carbamoyl arene",
    OrthoCarboxyFormylArene => "Ortho carboxy formyl arene",
    OrthoCarboxyAcylArene => "Ortho carboxy acyl arene",
    OrthoCarboxyCyanoArene => "Ortho carboxy cyano arene",
    OrthoCarboxyVinylArene => "Ortho carboxy vinyl arene",
    OrthoCarboxyAlkylArene => "Ortho carboxy alkyl arene",
    OrthoAlkoxycarbonylCarbamoylArene => "Ortho alkoxycarbonyl carbamoyl arene",
    OrthoAlkoxycarbonylFormylArene => "Ortho alkoxycarbonyl formyl arene",
    OrthoAlkoxycarbonylAcylArene => "Ortho alkoxycarbonyl acyl arene",
    OrthoAlkoxycarbonylCyanoArene => "Ortho alkoxycarbonyl cyano arene",
    OrthoAlkoxycarbonylVinylArene => "Ortho alkoxycarbonyl vinyl arene",
    OrthoAlkoxycarbonylAlkylArene => "Ortho alkoxycarbonyl alkyl arene",
    OrthoDicarbamoylArene => "Ortho dicarbamoyl arene",
    OrthoCarbamoylFormylArene => "Ortho carbamoyl formyl arene",
    OrthoCarbamoylAcylArene => "Ortho carbamoyl acyl arene",
    OrthoCarbamoylCyanoArene => "Ortho carbamoyl cyano arene",
    OrthoCarbamoylVinylArene => "Ortho carbamoyl vinyl arene",
    OrthoCarbamoylAlkylArene => "Ortho carbamoyl alkyl arene",
    OrthoDiformylArene => "Ortho diformyl arene",
    OrthoFormylAcylArene => "Ortho formyl acyl arene",
    OrthoFormylCyanoArene => "Ortho formyl cyano arene",
    OrthoFormylVinylArene => "Ortho formyl vinyl arene",
    OrthoFormylAlkylArene => "Ortho formyl alkyl arene",
    OrthoDiacylArene => "Ortho diacyl arene",
    OrthoAcylCyanoArene => "Ortho acyl cyano arene",
    OrthoAcylVinylArene => "Ortho acyl vinyl arene",
    OrthoAcylAlkylArene => "Ortho acyl alkyl arene",
    OrthoDicyanoArene => "Ortho dicyano arene",
    OrthoCyanoVinylArene => "Ortho cyano vinyl arene",
    OrthoCyanoAlkylArene => "Ortho cyano alkyl arene",
    OrthoDivinylArene => "Ortho divinyl arene",
    OrthoVinylAlkylArene => "Ortho vinyl alkyl arene",
    OrthoDialkylArene => "Ortho dialkyl arene",
    OrthoMethylHydroxyArene => "Ortho methyl hydroxy arene",
    OrthoMethylMethoxyArene => "Ortho methyl methoxy arene",
    OrthoMethylAlkoxyArene => "Ortho methyl alkoxy arene",
    OrthoMethylAcyloxyArene => "Ortho methyl acyloxy arene",
    OrthoHydroxymethylHydroxyArene => "Ortho hydroxymethyl hydroxy arene",
    OrthoHydroxymethylMethoxyArene => "Ortho hydroxymethyl methoxy arene",
    OrthoHydroxymethylAlkoxyArene => "Ortho hydroxymethyl alkoxy arene",
    OrthoHydroxymethylAcyloxyArene => "Ortho hydroxymethyl acyloxy arene",
    OrthoTrifluoromethylHydroxyArene => "Ortho trifluoromethyl hydroxy arene",
    OrthoTrifluoromethylMethoxyArene => "Ortho trifluoromethyl methoxy arene",
    OrthoTrifluoromethylAlkoxyArene => "Ortho trifluoromethyl alkoxy arene",
    OrthoTrifluoromethylAcyloxyArene => "Ortho trifluoromethyl acyloxy arene",
    OrthoCarboxyMethoxyArene => "Ortho carboxy methoxy arene",
    OrthoCarboxyAlkoxyArene => "Ortho carboxy alkoxy arene",
    OrthoCarboxyAcyloxyArene => "Ortho carboxy acyloxy arene",
    OrthoAlkoxycarbonylMethoxyArene => "Ortho alkoxycarbonyl methoxy arene",
    OrthoAlkoxycarbonylAlkoxyArene => "Ortho alkoxycarbonyl alkoxy arene",
    OrthoAlkoxycarbonylAcyloxyArene => "Ortho alkoxycarbonyl acyloxy arene",
    OrthoCarbamoylHydroxyArene => "Ortho carbamoyl hydroxy arene",
    OrthoCarbamoylMethoxyArene => "Ortho carbamoyl methoxy arene",
    OrthoCarbamoylAlkoxyArene => "Ortho carbamoyl alkoxy arene",
    OrthoCarbamoylAcyloxyArene => "Ortho carbamoyl acyloxy arene",
    OrthoFormylMethoxyArene => "Ortho formyl methoxy arene",
    OrthoFormylAlkoxyArene => "Ortho formyl alkoxy arene",
    OrthoFormylAcyloxyArene => "Ortho formyl acyloxy arene",
    OrthoAcylMethoxyArene => "Ortho acyl methoxy arene",
    OrthoAcylAlkoxyArene => "Ortho acyl alkoxy arene",
    OrthoAcylAcyloxyArene => "Ortho acyl acyloxy arene",
    OrthoCyanoHydroxyArene => "Ortho cyano hydroxy arene",
    OrthoCyanoMethoxyArene => "Ortho cyano methoxy arene",
    OrthoCyanoAlkoxyArene => "Ortho cyano alkoxy arene",
    OrthoCyanoAcyloxyArene => "Ortho cyano acyloxy arene",
    OrthoVinylHydroxyArene => "Ortho vinyl hydroxy arene",
    OrthoVinylMethoxyArene => "Ortho vinyl methoxy arene",
    OrthoVinylAlkoxyArene => "Ortho vinyl alkoxy arene",
    OrthoVinylAcyloxyArene => "Ortho vinyl acyloxy arene",
    OrthoAlkylHydroxyArene => "Ortho alkyl hydroxy arene",
    OrthoAlkylMethoxyArene => "Ortho alkyl methoxy arene",
    OrthoAlkylAlkoxyArene => "Ortho alkyl alkoxy arene",
    OrthoAlkylAcyloxyArene => "Ortho alkyl acyloxy arene",
    OrthoMethylAminoArene => "Ortho methyl amino arene",
    OrthoMethylAlkylaminoArene => "Ortho methyl alkylamino arene",
    OrthoMethylAcylaminoArene => "Ortho methyl acylamino arene",
    OrthoMethylNitroArene => "Ortho methyl nitro arene",
    OrthoHydroxymethylAminoArene => "Ortho hydroxymethyl amino arene",
    OrthoHydroxymethylAlkylaminoArene => "Ortho hydroxymethyl alkylamino arene",
    OrthoHydroxymethylAcylaminoArene => "Ortho hydroxymethyl acylamino arene",
    OrthoHydroxymethylNitroArene => "Ortho hydroxymethyl nitro arene",
    OrthoTrifluoromethylAminoArene => "Ortho trifluoromethyl amino arene",
    OrthoTrifluoromethylAlkylaminoArene => "Ortho trifluoromethyl alkylamino arene",
    OrthoTrifluoromethylAcylaminoArene => "Ortho trifluoromethyl acylamino arene",
    OrthoTrifluoromethylNitroArene => "Ortho trifluoromethyl nitro arene",
    OrthoCarboxyAlkylaminoArene => "Ortho carboxy alkylamino arene",
    OrthoCarboxyAcylaminoArene => "Ortho carboxy acylamino arene",
    OrthoCarboxyNitroArene => "Ortho carboxy nitro arene",
    OrthoAlkoxycarbonylAlkylaminoArene => "Ortho alkoxycarbonyl alkylamino arene",
    OrthoAlkoxycarbonylAcylaminoArene => "Ortho alkoxycarbonyl acylamino arene",
    OrthoAlkoxycarbonylNitroArene => "Ortho alkoxycarbonyl nitro arene",
    OrthoCarbamoylAminoArene => "Ortho carbamoyl amino arene",
    OrthoCarbamoylAlkylaminoArene => "Ortho carbamoyl alkylamino arene",
    OrthoCarbamoylAcylaminoArene => "Ortho carbamoyl acylamino arene",
    OrthoCarbamoylNitroArene => "Ortho carbamoyl nitro arene",
    OrthoFormylAlkylaminoArene => "Ortho formyl alkylamino arene",
    OrthoFormylAcylaminoArene => "Ortho formyl acylamino arene",
    OrthoFormylNitroArene => "Ortho formyl nitro arene",
    OrthoAcylAlkylaminoArene => "Ortho acyl alkylamino arene",
    OrthoAcylAcylaminoArene => "Ortho acyl acylamino arene",
    OrthoAcylNitroArene => "Ortho acyl nitro arene",
    OrthoCyanoAminoArene => "Ortho cyano amino arene",
    OrthoCyanoAlkylaminoArene => "Ortho cyano alkylamino arene",
    OrthoCyanoAcylaminoArene => "Ortho cyano acylamino arene",
    OrthoCyanoNitroArene => "Ortho cyano nitro arene",
    OrthoVinylAminoArene => "Ortho vinyl amino arene",
    OrthoVinylAlkylaminoArene => "Ortho vinyl alkylamino arene",
    OrthoVinylAcylaminoArene => "Ortho vinyl acylamino arene",
    OrthoVinylNitroArene => "Ortho vinyl nitro arene",
    OrthoAlkylAminoArene => "Ortho alkyl amino arene",
    OrthoAlkylAlkylaminoArene => "Ortho alkyl alkylamino arene",
    OrthoAlkylAcylaminoArene => "Ortho alkyl acylamino arene",
    OrthoAlkylNitroArene => "Ortho alkyl nitro arene",
    OrthoMethylMercaptoArene => "Ortho methyl mercapto arene",
    OrthoMethylAlkylthioArene => "Ortho methyl alkylthio arene",
    OrthoMethylSulfonylArene => "Ortho methyl sulfonyl arene",
    OrthoHydroxymethylMercaptoArene => "Ortho hydroxymethyl mercapto arene",
    OrthoHydroxymethylAlkylthioArene => "Ortho hydroxymethyl alkylthio arene",
    OrthoHydroxymethylSulfonylArene => "Ortho hydroxymethyl sulfonyl arene",
    OrthoTrifluoromethylMercaptoArene => "Ortho trifluoromethyl mercapto arene",
    OrthoTrifluoromethylAlkylthioArene => "Ortho trifluoromethyl alkylthio arene",
    OrthoTrifluoromethylSulfonylArene => "Ortho trifluoromethyl sulfonyl arene",
    OrthoCarboxyMercaptoArene => "Ortho carboxy mercapto arene",
    OrthoCarboxyAlkylthioArene => "Ortho carboxy alkylthio arene",
    OrthoCarboxySulfonylArene => "Ortho carboxy sulfonyl arene",
    OrthoAlkoxycarbonylMercaptoArene => "Ortho alkoxycarbonyl mercapto arene",
    OrthoAlkoxycarbonylAlkylthioArene => "Ortho alkoxycarbonyl alkylthio arene",
    OrthoAlkoxycarbonylSulfonylArene => "Ortho alkoxycarbonyl sulfonyl arene",
    OrthoCarbamoylMercaptoArene => "Ortho carbamoyl mercapto arene",
    OrthoCarbamoylAlkylthioArene => "Ortho carbamoyl alkylthio arene",
    OrthoCarbamoylSulfonylArene => "Ortho carbamoyl sulfonyl arene",
    OrthoFormylMercaptoArene => "Ortho formyl mercapto arene",
    OrthoFormylAlkylthioArene => "Ortho formyl alkylthio arene",
    OrthoFormylSulfonylArene => "Ortho formyl sulfonyl arene",
    OrthoAcylMercaptoArene => "Ortho acyl mercapto arene",
    OrthoAcylAlkylthioArene => "Ortho acyl alkylthio arene",
    OrthoAcylSulfonylArene => "Ortho acyl sulfonyl arene",
    OrthoCyanoMercaptoArene => "Ortho cyano mercapto arene",
    OrthoCyanoAlkylthioArene => "Ortho cyano alkylthio arene",
    OrthoCyanoSulfonylArene => "Ortho cyano sulfonyl arene",
    OrthoVinylMercaptoArene => "Ortho vinyl mercapto arene",
    OrthoVinylAlkylthioArene => "Ortho vinyl alkylthio arene",
    OrthoVinylSulfonylArene => "Ortho vinyl sulfonyl arene",
    OrthoAlkylMercaptoArene => "Ortho alkyl mercapto arene",
    OrthoAlkylAlkylthioArene => "Ortho alkyl alkylthio arene",
    OrthoAlkylSulfonylArene => "Ortho alkyl sulfonyl arene",
    OrthoMethylFluoroArene => "Ortho methyl fluoro arene",
    OrthoHydroxymethylFluoroArene => "Ortho hydroxymethyl fluoro arene",
    OrthoTrifluoromethylFluoroArene => "Ortho trifluoromethyl fluoro arene",
    OrthoCarboxyFluoroArene => "Ortho carboxy fluoro arene",
    OrthoAlkoxycarbonylFluoroArene => "Ortho alkoxycarbonyl fluoro arene",
    OrthoCarbamoylFluoroArene => "Ortho carbamoyl fluoro arene",
    OrthoFormylFluoroArene => "Ortho formyl fluoro arene",
    OrthoAcylFluoroArene => "Ortho acyl fluoro arene",
    OrthoCyanoFluoroArene => "Ortho cyano fluoro arene",
    OrthoVinylFluoroArene => "Ortho vinyl fluoro arene",
    OrthoAlkylFluoroArene => "Ortho alkyl fluoro arene",
    OrthoMethylChloroArene => "Ortho methyl chloro arene",
    OrthoHydroxymethylChloroArene => "Ortho hydroxymethyl chloro arene",
    OrthoTrifluoromethylChloroArene => "Ortho trifluoromethyl chloro arene",
    OrthoCarboxyChloroArene => "Ortho carboxy chloro arene",
    OrthoAlkoxycarbonylChloroArene => "Ortho alkoxycarbonyl chloro arene",
    OrthoCarbamoylChloroArene => "Ortho carbamoyl chloro arene",
    OrthoFormylChloroArene => "Ortho formyl chloro arene",
    OrthoAcylChloroArene => "Ortho acyl chloro arene",
    OrthoCyanoChloroArene => "Ortho cyano chloro arene",
    OrthoVinylChloroArene => "Ortho vinyl chloro arene",
    OrthoAlkylChloroArene => "Ortho alkyl chloro arene",
    OrthoMethylBromoArene => "Ortho methyl bromo arene",
    OrthoHydroxymethylBromoArene => "Ortho hydroxymethyl bromo arene",
    OrthoTrifluoromethylBromoArene => "Ortho trifluoromethyl bromo arene",
    OrthoCarboxyBromoArene => "Ortho carboxy bromo arene",
    OrthoAlkoxycarbonylBromoArene => "Ortho alkoxycarbonyl bromo arene",
    OrthoCarbamoylBromoArene => "Ortho carbamoyl bromo arene",
    OrthoFormylBromoArene => "Ortho formyl bromo arene",
    OrthoAcylBromoArene => "Ortho acyl bromo arene",
    OrthoCyanoBromoArene => "Ortho cyano bromo arene",
    OrthoVinylBromoArene => "Ortho vinyl bromo arene",
    OrthoAlkylBromoArene => "Ortho alkyl bromo arene",
    OrthoMethylIodoArene => "Ortho methyl iodo arene",
    OrthoHydroxymethylIodoArene => "Ortho hydroxymethyl iodo arene",
    OrthoTrifluoromethylIodoArene => "Ortho trifluoromethyl iodo arene",
    OrthoCarboxyIodoArene => "Ortho carboxy iodo arene",
    OrthoAlkoxycarbonylIodoArene => "Ortho alkoxycarbonyl iodo arene",
    OrthoCarbamoylIodoArene => "Ortho carbamoyl iodo arene",
    OrthoFormylIodoArene => "Ortho formyl iodo arene",
    OrthoAcylIodoArene => "Ortho acyl iodo arene",
    OrthoCyanoIodoArene => "Ortho cyano iodo arene",
    OrthoVinylIodoArene => "Ortho vinyl iodo arene",
    OrthoAlkylIodoArene => "Ortho alkyl iodo arene",
    OrthoHydroxyAlkoxyArene => "Ortho hydroxy alkoxy arene",
    OrthoHydroxyAcyloxyArene => "Ortho hydroxy acyloxy arene",
    OrthoMethoxyAcyloxyArene => "Ortho methoxy acyloxy arene",
    OrthoAlkoxyAcyloxyArene => "Ortho alkoxy acyloxy arene",
    OrthoDiacyloxyArene => "Ortho diacyloxy arene",
    OrthoHydroxyAlkylaminoArene => "Ortho hydroxy alkylamino arene",
    OrthoHydroxyAcylaminoArene => "Ortho hydroxy acylamino arene",
    OrthoHydroxyNitroArene => "Ortho hydroxy nitro arene",
    OrthoMethoxyAminoArene => "Ortho methoxy amino arene",
    OrthoMethoxyAlkylaminoArene => "Ortho methoxy alkylamino arene",
    OrthoMethoxyAcylaminoArene => "Ortho methoxy acylamino arene",
    OrthoMethoxyNitroArene => "Ortho methoxy nitro arene",
    OrthoAlkoxyAminoArene => "Ortho alkoxy amino arene",
    OrthoAlkoxyAlkylaminoArene => "Ortho alkoxy alkylamino arene",
    OrthoAlkoxyAcylaminoArene => "Ortho alkoxy acylamino arene",
    OrthoAlkoxyNitroArene => "Ortho alkoxy nitro arene",
    OrthoAcyloxyAminoArene => "Ortho acyloxy amino arene",
    OrthoAcyloxyAlkylaminoArene => "Ortho acyloxy alkylamino arene",
    OrthoAcyloxyAcylaminoArene => "Ortho acyloxy acylamino arene",
    OrthoAcyloxyNitroArene => "Ortho acyloxy nitro arene",
    OrthoHydroxyMercaptoArene => "Ortho hydroxy mercapto arene",
    OrthoHydroxyAlkylthioArene => "Ortho hydroxy alkylthio arene",
    OrthoHydroxySulfonylArene => "Ortho hydroxy sulfonyl arene",
    OrthoMethoxyMercaptoArene => "Ortho methoxy mercapto arene",
    OrthoMethoxyAlkylthioArene => "Ortho methoxy alkylthio arene",
    OrthoMethoxySulfonylArene => "Ortho methoxy sulfonyl arene",
    OrthoAlkoxyMercaptoArene => "Ortho alkoxy mercapto arene",
    OrthoAlkoxyAlkylthioArene => "Ortho alkoxy alkylthio arene",
    OrthoAlkoxySulfonylArene => "Ortho alkoxy sulfonyl arene",
    OrthoAcyloxyMercaptoArene => "Ortho acyloxy mercapto arene",
    OrthoAcyloxyAlkylthioArene => "Ortho acyloxy alkylthio arene",
    OrthoAcyloxySulfonylArene => "Ortho acyloxy sulfonyl arene",
    OrthoHydroxyFluoroArene => "Ortho hydroxy fluoro arene",
    OrthoMethoxyFluoroArene => "Ortho methoxy fluoro arene",
    OrthoAlkoxyFluoroArene => "Ortho alkoxy fluoro arene",
    OrthoAcyloxyFluoroArene => "Ortho acyloxy fluoro arene",
    OrthoMethoxyChloroArene => "Ortho methoxy chloro arene",
    OrthoAlkoxyChloroArene => "Ortho alkoxy chloro arene",
    OrthoAcyloxyChloroArene => "Ortho acyloxy chloro arene",
    OrthoHydroxyBromoArene => "Ortho hydroxy bromo arene",
    OrthoMethoxyBromoArene => "Ortho methoxy bromo arene",
    OrthoAlkoxyBromoArene => "Ortho alkoxy bromo arene",
    OrthoAcyloxyBromoArene => "Ortho acyloxy bromo arene",
    OrthoHydroxyIodoArene => "Ortho hydroxy iodo arene",
    OrthoMethoxyIodoArene => "Ortho methoxy iodo arene",
    OrthoAlkoxyIodoArene => "Ortho alkoxy iodo arene",
    OrthoAcyloxyIodoArene => "Ortho acyloxy iodo arene",
    OrthoAminoAlkylaminoArene => "Ortho amino alkylamino arene",
    OrthoAminoAcylaminoArene => "Ortho amino acylamino arene",
    OrthoAminoNitroArene => "Ortho amino nitro arene",
    OrthoDialkylaminoArene => "Ortho dialkylamino arene",
    OrthoAlkylaminoAcylaminoArene => "Ortho alkylamino acylamino arene",
    OrthoAlkylaminoNitroArene => "Ortho alkylamino nitro arene",
    OrthoDiacylaminoArene => "Ortho diacylamino arene",
    OrthoAcylaminoNitroArene => "Ortho acylamino nitro arene",
    OrthoDinitroArene => "Ortho dinitro arene",
    OrthoAminoMercaptoArene => "Ortho amino mercapto arene",
    OrthoAminoAlkylthioArene => "Ortho amino alkylthio arene",
    OrthoAminoSulfonylArene => "Ortho amino sulfonyl arene",
    OrthoAlkylaminoMercaptoArene => "Ortho alkylamino mercapto arene",
    OrthoAlkylaminoAlkylthioArene => "Ortho alkylamino alkylthio arene",
    OrthoAlkylaminoSulfonylArene => "Ortho alkylamino sulfonyl arene",
    OrthoAcylaminoMercaptoArene => "Ortho acylamino mercapto arene",
    OrthoAcylaminoAlkylthioArene => "Ortho acylamino alkylthio arene",
    OrthoAcylaminoSulfonylArene => "Ortho acylamino sulfonyl arene",
    OrthoNitroMercaptoArene => "Ortho nitro mercapto arene",
    OrthoNitroAlkylthioArene => "Ortho nitro alkylthio arene",
    OrthoNitroSulfonylArene => "Ortho nitro sulfonyl arene",
    OrthoAminoFluoroArene => "Ortho amino fluoro arene",
    OrthoAlkylaminoFluoroArene => "Ortho alkylamino fluoro arene",
    OrthoAcylaminoFluoroArene => "Ortho acylamino fluoro arene",
    OrthoNitroFluoroArene => "Ortho nitro fluoro arene",
    OrthoAminoChloroArene => "Ortho amino chloro arene",
    OrthoAlkylaminoChloroArene => "Ortho alkylamino chloro arene",
    OrthoAcylaminoChloroArene => "Ortho acylamino chloro arene",
    OrthoNitroChloroArene => "Ortho nitro chloro arene",
    OrthoAminoBromoArene => "Ortho amino bromo arene",
    OrthoAlkylaminoBromoArene => "Ortho alkylamino bromo arene",
    OrthoAcylaminoBromoArene => "Ortho acylamino bromo arene",
    OrthoNitroBromoArene => "Ortho nitro bromo arene",
    OrthoAminoIodoArene => "Ortho amino iodo arene",
    OrthoAlkylaminoIodoArene => "Ortho alkylamino iodo arene",
    OrthoAcylaminoIodoArene => "Ortho acylamino iodo arene",
    OrthoNitroIodoArene => "Ortho nitro iodo arene",
    OrthoDimercaptoArene => "Ortho dimercapto arene",
    OrthoMercaptoAlkylthioArene => "Ortho mercapto alkylthio arene",
    OrthoMercaptoSulfonylArene => "Ortho mercapto sulfonyl arene",
    OrthoDialkylthioArene => "Ortho dialkylthio arene",
    OrthoAlkylthioSulfonylArene => "Ortho alkylthio sulfonyl arene",
    OrthoDisulfonylArene => "Ortho disulfonyl arene",
    OrthoMercaptoFluoroArene => "Ortho mercapto fluoro arene",
    OrthoAlkylthioFluoroArene => "Ortho alkylthio fluoro arene",
    OrthoSulfonylFluoroArene => "Ortho sulfonyl fluoro arene",
    OrthoMercaptoChloroArene => "Ortho mercapto chloro arene",
    OrthoAlkylthioChloroArene => "Ortho alkylthio chloro arene",
    OrthoSulfonylChloroArene => "Ortho sulfonyl chloro arene",
    OrthoMercaptoBromoArene => "Ortho mercapto bromo arene",
    OrthoAlkylthioBromoArene => "Ortho alkylthio bromo arene",
    OrthoSulfonylBromoArene => "Ortho sulfonyl bromo arene",
    OrthoMercaptoIodoArene => "Ortho mercapto iodo arene",
    OrthoAlkylthioIodoArene => "Ortho alkylthio iodo arene",
    OrthoSulfonylIodoArene => "Ortho sulfonyl iodo arene",
    OrthoDifluoroArene => "Ortho difluoro arene",
    OrthoFluoroChloroArene => "Ortho fluoro chloro arene",
    OrthoFluoroBromoArene => "Ortho fluoro bromo arene",
    OrthoFluoroIodoArene => "Ortho fluoro iodo arene",
    OrthoChloroBromoArene => "Ortho chloro bromo arene",
    OrthoChloroIodoArene => "Ortho chloro iodo arene",
    OrthoDibromoArene => "Ortho dibromo arene",
    OrthoBromoIodoArene => "Ortho bromo iodo arene",
    OrthoDiiodoArene => "Ortho diiodo arene",
    MetaDimethylArene => "Meta dimethyl arene",
    MetaMethylHydroxymethylArene => "Meta methyl hydroxymethyl arene",
    MetaMethylTrifluoromethylArene => "Meta methyl trifluoromethyl arene",
    MetaMethylCarboxyArene => "Meta methyl carboxy arene",
    MetaMethylAlkoxycarbonylArene => "Meta methyl alkoxycarbonyl arene",
    MetaMethylCarbamoylArene => "Meta methyl carbamoyl arene",
    MetaMethylFormylArene => "Meta methyl formyl arene",
    MetaMethylAcylArene => "Meta methyl acyl arene",
    MetaMethylCyanoArene => "Meta methyl cyano arene",
    MetaMethylVinylArene => "Meta methyl vinyl arene",
    MetaMethylAlkylArene => "Meta methyl alkyl arene",
    MetaDihydroxymethylArene => "Meta dihydroxymethyl arene",
    MetaHydroxymethylTrifluoromethylArene => "Meta hydroxymethyl trifluoromethyl arene",
    MetaHydroxymethylCarboxyArene => "Meta hydroxymethyl carboxy arene",
    MetaHydroxymethylAlkoxycarbonylArene => "Meta hydroxymethyl alkoxycarbonyl arene",
    MetaHydroxymethylCarbamoylArene => "Meta hydroxymethyl carbamoyl arene",
    MetaHydroxymethylFormylArene => "Meta hydroxymethyl formyl arene",
    MetaHydroxymethylAcylArene => "Meta hydroxymethyl acyl arene",
    MetaHydroxymethylCyanoArene => "Meta hydroxymethyl cyano arene",
    MetaHydroxymethylVinylArene => "Meta hydroxymethyl vinyl arene",
    MetaHydroxymethylAlkylArene => "Meta hydroxymethyl alkyl arene",
    MetaDitrifluoromethylArene => "Meta ditrifluoromethyl arene",
    MetaTrifluoromethylCarboxyArene => "Meta trifluoromethyl carboxy arene",
    MetaTrifluoromethylAlkoxycarbonylArene => "Meta trifluoromethyl alkoxycarbonyl arene",
    MetaTrifluoromethylCarbamoylArene => "Meta trifluoromethyl carbamoyl arene",
    MetaTrifluoromethylFormylArene => "Meta trifluoromethyl formyl arene",
    MetaTrifluoromethylAcylArene => "Meta trifluoromethyl acyl arene",
    MetaTrifluoromethylCyanoArene => "Meta trifluoromethyl cyano arene",
    MetaTrifluoromethylVinylArene => "Meta trifluoromethyl vinyl arene",
    MetaTrifluoromethylAlkylArene => "Meta trifluoromethyl alkyl arene",
    MetaDicarboxyArene => "Meta dicarboxy arene",
    MetaCarboxyAlkoxycarbonylArene => "Meta carboxy alkoxycarbonyl arene",
    MetaCarboxyCarbamoylArene => "Meta carboxy carbamoyl arene",
    MetaCarboxyFormylArene => "Meta carboxy formyl arene",
    MetaCarboxyAcylArene => "Meta carboxy acyl arene",
    MetaCarboxyCyanoArene => "Meta carboxy cyano arene",
    MetaCarboxyVinylArene => "Meta carboxy vinyl arene",
    MetaCarboxyAlkylArene => "Meta carboxy alkyl arene",
    MetaDialkoxycarbonylArene => "Meta dialkoxycarbonyl arene",
    MetaAlkoxycarbonylCarbamoylArene => "Meta alkoxycarbonyl carbamoyl arene",
    MetaAlkoxycarbonylFormylArene => "Meta alkoxycarbonyl formyl arene",
    MetaAlkoxycarbonylAcylArene => "Meta alkoxycarbonyl acyl arene",
    MetaAlkoxycarbonylCyanoArene => "Meta alkoxycarbonyl cyano arene",
    MetaAlkoxycarbonylVinylArene => "Meta alkoxycarbonyl vinyl arene",
    MetaAlkoxycarbonylAlkylArene => "Meta alkoxycarbonyl alkyl arene",
    MetaDicarbamoylArene => "Meta dicarbamoyl arene",
    MetaCarbamoylFormylArene => "Meta carbamoyl formyl arene",
    MetaCarbamoylAcylArene => "Meta carbamoyl acyl arene",
    MetaCarbamoylCyanoArene => "Meta carbamoyl cyano arene",
    MetaCarbamoylVinylArene => "Meta carbamoyl vinyl arene",
    MetaCarbamoylAlkylArene => "Meta carbamoyl alkyl arene",
    MetaDiformylArene => "Meta diformyl arene",
    MetaFormylAcylArene => "Meta formyl acyl arene",
    MetaFormylCyanoArene => "Meta formyl cyano arene",
    MetaFormylVinylArene => "Meta formyl vinyl arene",
    MetaFormylAlkylArene => "Meta formyl alkyl arene",
    MetaDiacylArene => "Meta diacyl arene",
    MetaAcylCyanoArene => "Meta acyl cyano arene",
    MetaAcylVinylArene => "Meta acyl vinyl arene",
    MetaAcylAlkylArene => "Meta acyl alkyl arene",
    MetaDicyanoArene => "Meta dicyano arene",
    MetaCyanoVinylArene => "Meta cyano vinyl arene",
    MetaCyanoAlkylArene => "Meta cyano alkyl arene",
    MetaDivinylArene => "Meta divinyl arene",
    MetaVinylAlkylArene => "Meta vinyl alkyl arene",
    MetaDialkylArene => "Meta dialkyl arene",
    MetaMethylHydroxyArene => "Meta methyl hydroxy arene",
    MetaMethylMethoxyArene => "Meta methyl methoxy arene",
    MetaMethylAlkoxyArene => "Meta methyl alkoxy arene",
    MetaMethylAcyloxyArene => "Meta methyl acyloxy arene",
    MetaHydroxymethylHydroxyArene => "Meta hydroxymethyl hydroxy arene",
    MetaHydroxymethylMethoxyArene => "Meta hydroxymethyl methoxy arene",
    MetaHydroxymethylAlkoxyArene => "Meta hydroxymethyl alkoxy arene",
    MetaHydroxymethylAcyloxyArene => "Meta hydroxymethyl acyloxy arene",
    MetaTrifluoromethylHydroxyArene => "Meta trifluoromethyl hydroxy arene",
    MetaTrifluoromethylMethoxyArene => "Meta trifluoromethyl methoxy arene",
    MetaTrifluoromethylAlkoxyArene => "Meta trifluoromethyl alkoxy arene",
    MetaTrifluoromethylAcyloxyArene => "Meta trifluoromethyl acyloxy arene",
    MetaCarboxyHydroxyArene => "Meta carboxy hydroxy arene",
    MetaCarboxyMethoxyArene => "Meta carboxy methoxy arene",
    MetaCarboxyAlkoxyArene => "Meta carboxy alkoxy arene",
    MetaCarboxyAcyloxyArene => "Meta carboxy acyloxy arene",
    MetaAlkoxycarbonylHydroxyArene => "Meta alkoxycarbonyl hydroxy arene",
    MetaAlkoxycarbonylMethoxyArene => "Meta alkoxycarbonyl methoxy arene",
    MetaAlkoxycarbonylAlkoxyArene => "Meta alkoxycarbonyl alkoxy arene",
    MetaAlkoxycarbonylAcyloxyArene => "Meta alkoxycarbonyl acyloxy arene",
    MetaCarbamoylHydroxyArene => "Meta carbamoyl hydroxy arene",
    MetaCarbamoylMethoxyArene => "Meta carbamoyl methoxy arene",
    MetaCarbamoylAlkoxyArene => "Meta carbamoyl alkoxy arene",
    MetaCarbamoylAcyloxyArene => "Meta carbamoyl acyloxy arene",
    MetaFormylHydroxyArene => "Meta formyl hydroxy arene",
    MetaFormylMethoxyArene => "Meta formyl methoxy arene",
    MetaFormylAlkoxyArene => "Meta formyl alkoxy arene",
    MetaFormylAcyloxyArene => "Meta formyl acyloxy arene",
    MetaAcylHydroxyArene => "Meta acyl hydroxy arene",
    MetaAcylMethoxyArene => "Meta acyl methoxy arene",
    MetaAcylAlkoxyArene => "Meta acyl alkoxy arene",
    MetaAcylAcyloxyArene => "Meta acyl acyloxy arene",
    MetaCyanoHydroxyArene => "Meta cyano hydroxy arene",
    MetaCyanoMethoxyArene => "Meta cyano methoxy arene",
    MetaCyanoAlkoxyArene => "Meta cyano alkoxy arene",
    MetaCyanoAcyloxyArene => "Meta cyano acyloxy arene",
    MetaVinylHydroxyArene => "Meta vinyl hydroxy arene",
    MetaVinylMethoxyArene => "Meta vinyl methoxy arene",
    MetaVinylAlkoxyArene => "Meta vinyl alkoxy arene",
    MetaVinylAcyloxyArene => "Meta vinyl acyloxy arene",
    MetaAlkylHydroxyArene => "Meta alkyl hydroxy arene",
    MetaAlkylMethoxyArene => "Meta alkyl methoxy arene",
    MetaAlkylAlkoxyArene => "Meta alkyl alkoxy arene",
    MetaAlkylAcyloxyArene => "Meta alkyl acyloxy arene",
    MetaMethylAminoArene => "Meta methyl amino arene",
    MetaMethylAlkylaminoArene => "Meta methyl alkylamino arene",
    MetaMethylAcylaminoArene => "Meta methyl acylamino arene",
    MetaMethylNitroArene => "Meta methyl nitro arene",
    MetaHydroxymethylAminoArene => "Meta hydroxymethyl amino arene",
    MetaHydroxymethylAlkylaminoArene => "Meta hydroxymethyl alkylamino arene",
    MetaHydroxymethylAcylaminoArene => "Meta hydroxymethyl acylamino arene",
    MetaHydroxymethylNitroArene => "Meta hydroxymethyl nitro arene",
    MetaTrifluoromethylAminoArene => "Meta trifluoromethyl amino arene",
    MetaTrifluoromethylAlkylaminoArene => "Meta trifluoromethyl alkylamino arene",
    MetaTrifluoromethylAcylaminoArene => "Meta trifluoromethyl acylamino arene",
    MetaTrifluoromethylNitroArene => "Meta trifluoromethyl nitro arene",
    MetaCarboxyAminoArene => "Meta carboxy amino arene",
    MetaCarboxyAlkylaminoArene => "Meta carboxy alkylamino arene",
    MetaCarboxyAcylaminoArene => "Meta carboxy acylamino arene",
    MetaCarboxyNitroArene => "Meta carboxy nitro arene",
    MetaAlkoxycarbonylAminoArene => "Meta alkoxycarbonyl amino arene",
    MetaAlkoxycarbonylAlkylaminoArene => "Meta alkoxycarbonyl alkylamino arene",
    MetaAlkoxycarbonylAcylaminoArene => "Meta alkoxycarbonyl acylamino arene",
    MetaAlkoxycarbonylNitroArene => "Meta alkoxycarbonyl nitro arene",
    MetaCarbamoylAminoArene => "Meta carbamoyl amino arene",
    MetaCarbamoylAlkylaminoArene => "Meta carbamoyl alkylamino arene",
    MetaCarbamoylAcylaminoArene => "Meta carbamoyl acylamino arene",
    MetaCarbamoylNitroArene => "Meta carbamoyl nitro arene",
    MetaFormylAminoArene => "Meta formyl amino arene",
    MetaFormylAlkylaminoArene => "Meta formyl alkylamino arene",
    MetaFormylAcylaminoArene => "Meta formyl acylamino arene",
    MetaFormylNitroArene => "Meta formyl nitro arene",
    MetaAcylAminoArene => "Meta acyl amino arene",
    MetaAcylAlkylaminoArene => "Meta acyl alkylamino arene",
    MetaAcylAcylaminoArene => "Meta acyl acylamino arene",
    MetaAcylNitroArene => "Meta acyl nitro arene",
    MetaCyanoAminoArene => "Meta cyano amino arene",
    MetaCyanoAlkylaminoArene => "Meta cyano alkylamino arene",
    MetaCyanoAcylaminoArene => "Meta cyano acylamino arene",
    MetaCyanoNitroArene => "Meta cyano nitro arene",
    MetaVinylAminoArene => "Meta vinyl amino arene",
    MetaVinylAlkylaminoArene => "Meta vinyl alkylamino arene",
    MetaVinylAcylaminoArene => "Meta vinyl acylamino arene",
    MetaVinylNitroArene => "Meta vinyl nitro arene",
    MetaAlkylAminoArene => "Meta alkyl amino arene",
    MetaAlkylAlkylaminoArene => "Meta alkyl alkylamino arene",
    MetaAlkylAcylaminoArene => "Meta alkyl acylamino arene",
    MetaAlkylNitroArene => "Meta alkyl nitro arene",
    MetaMethylMercaptoArene => "Meta methyl mercapto arene",
    MetaMethylAlkylthioArene => "Meta methyl alkylthio arene",
    MetaMethylSulfonylArene => "Meta methyl sulfonyl arene",
    MetaHydroxymethylMercaptoArene => "Meta hydroxymethyl mercapto arene",
    MetaHydroxymethylAlkylthioArene => "Meta hydroxymethyl alkylthio arene",
    MetaHydroxymethylSulfonylArene => "Meta hydroxymethyl sulfonyl arene",
    MetaTrifluoromethylMercaptoArene => "Meta trifluoromethyl mercapto arene",
    MetaTrifluoromethylAlkylthioArene => "Meta trifluoromethyl alkylthio arene",
    MetaTrifluoromethylSulfonylArene => "Meta trifluoromethyl sulfonyl arene",
    MetaCarboxyMercaptoArene => "Meta carboxy mercapto arene",
    MetaCarboxyAlkylthioArene => "Meta carboxy alkylthio arene",
    MetaCarboxySulfonylArene => "Meta carboxy sulfonyl arene",
    MetaAlkoxycarbonylMercaptoArene => "Meta alkoxycarbonyl mercapto arene",
    MetaAlkoxycarbonylAlkylthioArene => "Meta alkoxycarbonyl alkylthio arene",
    MetaAlkoxycarbonylSulfonylArene => "Meta alkoxycarbonyl sulfonyl arene",
    MetaCarbamoylMercaptoArene => "Meta carbamoyl mercapto arene",
    MetaCarbamoylAlkylthioArene => "Meta carbamoyl alkylthio arene",
    MetaCarbamoylSulfonylArene => "Meta carbamoyl sulfonyl arene",
    MetaFormylMercaptoArene => "Meta formyl mercapto arene",
    MetaFormylAlkylthioArene => "Meta formyl alkylthio arene",
    MetaFormylSulfonylArene => "Meta formyl sulfonyl arene",
    MetaAcylMercaptoArene => "Meta acyl mercapto arene",
    MetaAcylAlkylthioArene => "Meta acyl alkylthio arene",
    MetaAcylSulfonylArene => "Meta acyl sulfonyl arene",
    MetaCyanoMercaptoArene => "Meta cyano mercapto arene",
    MetaCyanoAlkylthioArene => "Meta cyano alkylthio arene",
    MetaCyanoSulfonylArene => "Meta cyano sulfonyl arene",
    MetaVinylMercaptoArene => "Meta vinyl mercapto arene",
    MetaVinylAlkylthioArene => "Meta vinyl alkylthio arene",
    MetaVinylSulfonylArene => "Meta vinyl sulfonyl arene",
    MetaAlkylMercaptoArene => "Meta alkyl mercapto arene",
    MetaAlkylAlkylthioArene => "Meta alkyl alkylthio arene",
    MetaAlkylSulfonylArene => "Meta alkyl sulfonyl arene",
    MetaMethylFluoroArene => "Meta methyl fluoro arene",
    MetaHydroxymethylFluoroArene => "Meta hydroxymethyl fluoro arene",
    MetaTrifluoromethylFluoroArene => "Meta trifluoromethyl fluoro arene",
    MetaCarboxyFluoroArene => "Meta carboxy fluoro arene",
    MetaAlkoxycarbonylFluoroArene => "Meta alkoxycarbonyl fluoro arene",
    MetaCarbamoylFluoroArene => "Meta carbamoyl fluoro arene",
    MetaFormylFluoroArene => "Meta formyl fluoro arene",
    MetaAcylFluoroArene => "Meta acyl fluoro arene",
    MetaCyanoFluoroArene => "Meta cyano fluoro arene",
    MetaVinylFluoroArene => "Meta vinyl fluoro arene",
    MetaAlkylFluoroArene => "Meta alkyl fluoro arene",
    MetaMethylChloroArene => "Meta methyl chloro arene",
    MetaHydroxymethylChloroArene => "Meta hydroxymethyl chloro arene",
    MetaTrifluoromethylChloroArene => "Meta trifluoromethyl chloro arene",
    MetaCarboxyChloroArene => "Meta carboxy chloro arene",
    MetaAlkoxycarbonylChloroArene => "Meta alkoxycarbonyl chloro arene",
    MetaCarbamoylChloroArene => "Meta carbamoyl chloro arene",
    MetaFormylChloroArene => "Meta formyl chloro arene",
    MetaAcylChloroArene => "Meta acyl chloro arene",
    MetaCyanoChloroArene => "Meta cyano chloro arene",
    MetaVinylChloroArene => "Meta vinyl chloro arene",
    MetaAlkylChloroArene => "Meta alkyl chloro arene",
    MetaMethylBromoArene => "Meta methyl bromo arene",
    MetaHydroxymethylBromoArene => "Meta hydroxymethyl bromo arene",
    MetaTrifluoromethylBromoArene => "Meta trifluoromethyl bromo arene",
    MetaCarboxyBromoArene => "Meta carboxy bromo arene",
    MetaAlkoxycarbonylBromoArene => "Meta alkoxycarbonyl bromo arene",
    MetaCarbamoylBromoArene => "Meta carbamoyl bromo arene",
    MetaFormylBromoArene => "Meta formyl bromo arene",
    MetaAcylBromoArene => "Meta acyl bromo arene",
    MetaCyanoBromoArene => "Meta cyano bromo arene",
    MetaVinylBromoArene => "Meta vinyl bromo arene",
    MetaAlkylBromoArene => "Meta alkyl bromo arene",
    MetaMethylIodoArene => "Meta methyl iodo arene",
    MetaHydroxymethylIodoArene => "Meta hydroxymethyl iodo arene",
    MetaTrifluoromethylIodoArene => "Meta trifluoromethyl iodo arene",
    MetaCarboxyIodoArene => "Meta carboxy iodo arene",
    MetaAlkoxycarbonylIodoArene => "Meta alkoxycarbonyl iodo arene",
    MetaCarbamoylIodoArene => "Meta carbamoyl iodo arene",
    MetaFormylIodoArene => "Meta formyl iodo arene",
    MetaAcylIodoArene => "Meta acyl iodo arene",
    MetaCyanoIodoArene => "Meta cyano iodo arene",
    MetaVinylIodoArene => "Meta vinyl iodo arene",
    MetaAlkylIodoArene => "Meta alkyl iodo arene",
    MetaMethoxyAlkoxyArene => "Meta methoxy alkoxy arene",
    MetaMethoxyAcyloxyArene => "Meta methoxy acyloxy arene",
    MetaDialkoxyArene => "Meta dialkoxy arene",
    MetaAlkoxyAcyloxyArene => "Meta alkoxy acyloxy arene",
    MetaDiacyloxyArene => "Meta diacyloxy arene",
    MetaHydroxyAminoArene => "Meta hydroxy amino arene",
    MetaHydroxyAlkylaminoArene => "Meta hydroxy alkylamino arene",
    MetaHydroxyAcylaminoArene => "Meta hydroxy acylamino arene",
    MetaHydroxyNitroArene => "Meta hydroxy nitro arene",
    MetaMethoxyAminoArene => "Meta methoxy amino arene",
    MetaMethoxyAlkylaminoArene => "Meta methoxy alkylamino arene",
    MetaMethoxyAcylaminoArene => "Meta methoxy acylamino arene",
    MetaMethoxyNitroArene => "Meta methoxy nitro arene",
    MetaAlkoxyAminoArene => "Meta alkoxy amino arene",
    MetaAlkoxyAlkylaminoArene => "Meta alkoxy alkylamino arene",
    MetaAlkoxyAcylaminoArene => "Meta alkoxy acylamino arene",
    MetaAlkoxyNitroArene => "Meta alkoxy nitro arene",
    MetaAcyloxyAminoArene => "Meta acyloxy amino arene",
    MetaAcyloxyAlkylaminoArene => "Meta acyloxy alkylamino arene",
    MetaAcyloxyAcylaminoArene => "Meta acyloxy acylamino arene",
    MetaAcyloxyNitroArene => "Meta acyloxy nitro arene",
    MetaHydroxyMercaptoArene => "Meta hydroxy mercapto arene",
    MetaHydroxyAlkylthioArene => "Meta hydroxy alkylthio arene",
    MetaHydroxySulfonylArene => "Meta hydroxy sulfonyl arene",
    MetaMethoxyMercaptoArene => "Meta methoxy mercapto arene",
    MetaMethoxyAlkylthioArene => "Meta methoxy alkylthio arene",
    MetaMethoxySulfonylArene => "Meta methoxy sulfonyl arene",
    MetaAlkoxyMercaptoArene => "Meta alkoxy mercapto arene",
    MetaAlkoxyAlkylthioArene => "Meta alkoxy alkylthio arene",
    MetaAlkoxySulfonylArene => "Meta alkoxy sulfonyl arene",
    MetaAcyloxyMercaptoArene => "Meta acyloxy mercapto arene",
    MetaAcyloxyAlkylthioArene => "Meta acyloxy alkylthio arene",
    MetaAcyloxySulfonylArene => "Meta acyloxy sulfonyl arene",
    MetaHydroxyFluoroArene => "Meta hydroxy fluoro arene",
    MetaMethoxyFluoroArene => "Meta methoxy fluoro arene",
    MetaAlkoxyFluoroArene => "Meta alkoxy fluoro arene",
    MetaAcyloxyFluoroArene => "Meta acyloxy fluoro arene",
    MetaHydroxyChloroArene => "Meta hydroxy chloro arene",
    MetaMethoxyChloroArene => "Meta methoxy chloro arene",
    MetaAlkoxyChloroArene => "Meta alkoxy chloro arene",
    MetaAcyloxyChloroArene => "Meta acyloxy chloro arene",
    MetaHydroxyBromoArene => "Meta hydroxy bromo arene",
    MetaMethoxyBromoArene => "Meta methoxy bromo arene",
    MetaAlkoxyBromoArene => "Meta alkoxy bromo arene",
    MetaAcyloxyBromoArene => "Meta acyloxy bromo arene",
    MetaHydroxyIodoArene => "Meta hydroxy iodo arene",
    MetaMethoxyIodoArene => "Meta methoxy iodo arene",
    MetaAlkoxyIodoArene => "Meta alkoxy iodo arene",
    MetaAcyloxyIodoArene => "Meta acyloxy iodo arene",
    MetaDiaminoArene => "Meta diamino arene",
    MetaAminoAlkylaminoArene => "Meta amino alkylamino arene",
    MetaAminoAcylaminoArene => "Meta amino acylamino arene",
    MetaAminoNitroArene => "Meta amino nitro arene",
    MetaDialkylaminoArene => "Meta dialkylamino arene",
    MetaAlkylaminoAcylaminoArene => "Meta alkylamino acylamino arene",
    MetaAlkylaminoNitroArene => "Meta alkylamino nitro arene",
    MetaDiacylaminoArene => "Meta diacylamino arene",
    MetaAcylaminoNitroArene => "Meta acylamino nitro arene",
    MetaDinitroArene => "Meta dinitro arene",
    MetaAminoMercaptoArene => "Meta amino mercapto arene",
    MetaAminoAlkylthioArene => "Meta amino alkylthio arene",
    MetaAminoSulfonylArene => "Meta amino sulfonyl arene",
    MetaAlkylaminoMercaptoArene => "Meta alkylamino mercapto arene",
    MetaAlkylaminoAlkylthioArene => "Meta alkylamino alkylthio arene",
    MetaAlkylaminoSulfonylArene => "Meta alkylamino sulfonyl arene",
    MetaAcylaminoMercaptoArene => "Meta acylamino mercapto arene",
    MetaAcylaminoAlkylthioArene => "Meta acylamino alkylthio arene",
    MetaAcylaminoSulfonylArene => "Meta acylamino sulfonyl arene",
    MetaNitroMercaptoArene => "Meta nitro mercapto arene",
    MetaNitroAlkylthioArene => "Meta nitro alkylthio arene",
    MetaNitroSulfonylArene => "Meta nitro sulfonyl arene",
    MetaAminoFluoroArene => "Meta amino fluoro arene",
    MetaAlkylaminoFluoroArene => "Meta alkylamino fluoro arene",
    MetaAcylaminoFluoroArene => "Meta acylamino fluoro arene",
    MetaNitroFluoroArene => "Meta nitro fluoro arene",
    MetaAminoChloroArene => "Meta amino chloro arene",
    MetaAlkylaminoChloroArene => "Meta alkylamino chloro arene",
    MetaAcylaminoChloroArene => "Meta acylamino chloro arene",
    MetaNitroChloroArene => "Meta nitro chloro arene",
    MetaAminoBromoArene => "Meta amino bromo arene",
    MetaAlkylaminoBromoArene => "Meta alkylamino bromo arene",
    MetaAcylaminoBromoArene => "Meta acylamino bromo arene",
    MetaNitroBromoArene => "Meta nitro bromo arene",
    MetaAminoIodoArene => "Meta amino iodo arene",
    MetaAlkylaminoIodoArene => "Meta alkylamino iodo arene",
    MetaAcylaminoIodoArene => "Meta acylamino iodo arene",
    MetaNitroIodoArene => "Meta nitro iodo arene",
    MetaDimercaptoArene => "Meta dimercapto arene",
    MetaMercaptoAlkylthioArene => "Meta mercapto alkylthio arene",
    MetaMercaptoSulfonylArene => "Meta mercapto sulfonyl arene",
    MetaDialkylthioArene => "Meta dialkylthio arene",
    MetaAlkylthioSulfonylArene => "Meta alkylthio sulfonyl arene",
    MetaDisulfonylArene => "Meta disulfonyl arene",
    MetaMercaptoFluoroArene => "Meta mercapto fluoro arene",
    MetaAlkylthioFluoroArene => "Meta alkylthio fluoro arene",
    MetaSulfonylFluoroArene => "Meta sulfonyl fluoro arene",
    MetaMercaptoChloroArene => "Meta mercapto chloro arene",
    MetaAlkylthioChloroArene => "Meta alkylthio chloro arene",
    MetaSulfonylChloroArene => "Meta sulfonyl chloro arene",
    MetaMercaptoBromoArene => "Meta mercapto bromo arene",
    MetaAlkylthioBromoArene => "Meta alkylthio bromo arene",
    MetaSulfonylBromoArene => "Meta sulfonyl bromo arene",
    MetaMercaptoIodoArene => "Meta mercapto iodo arene",
    MetaAlkylthioIodoArene => "Meta alkylthio iodo arene",
    MetaSulfonylIodoArene => "Meta sulfonyl iodo arene",
    MetaDifluoroArene => "Meta difluoro arene",
    MetaFluoroChloroArene => "Meta fluoro chloro arene",
    MetaFluoroBromoArene => "Meta fluoro bromo arene",
    MetaFluoroIodoArene => "Meta fluoro iodo arene",
    MetaDichloroArene => "Meta dichloro arene",
    MetaChloroBromoArene => "Meta chloro bromo arene",
    MetaChloroIodoArene => "Meta chloro iodo arene",
    MetaDibromoArene => "Meta dibromo arene",
    MetaBromoIodoArene => "Meta bromo iodo arene",
    MetaDiiodoArene => "Meta diiodo arene",
    ParaDimethylArene => "Para dimethyl arene",
    ParaMethylHydroxymethylArene => "Para methyl hydroxymethyl arene",
    ParaMethylTrifluoromethylArene => "Para methyl trifluoromethyl arene",
    ParaMethylCarboxyArene => "Para methyl carboxy arene",
    ParaMethylAlkoxycarbonylArene => "Para methyl alkoxycarbonyl arene",
    ParaMethylCarbamoylArene => "Para methyl carbamoyl arene",
    ParaMethylFormylArene => "Para methyl formyl arene",
    ParaMethylAcylArene => "Para methyl acyl arene",
    ParaMethylCyanoArene => "Para methyl cyano arene",
    ParaMethylVinylArene => "Para methyl vinyl arene",
    ParaMethylAlkylArene => "Para methyl alkyl arene",
    ParaDihydroxymethylArene => "Para dihydroxymethyl arene",
    ParaHydroxymethylTrifluoromethylArene => "Para hydroxymethyl trifluoromethyl arene",
    ParaHydroxymethylCarboxyArene => "Para hydroxymethyl carboxy arene",
    ParaHydroxymethylAlkoxycarbonylArene => "Para hydroxymethyl alkoxycarbonyl arene",
    ParaHydroxymethylCarbamoylArene => "Para hydroxymethyl carbamoyl arene",
    ParaHydroxymethylFormylArene => "Para hydroxymethyl formyl arene",
    ParaHydroxymethylAcylArene => "Para hydroxymethyl acyl arene",
    ParaHydroxymethylCyanoArene => "Para hydroxymethyl cyano arene",
    ParaHydroxymethylVinylArene => "Para hydroxymethyl vinyl arene",
    ParaHydroxymethylAlkylArene => "Para hydroxymethyl alkyl arene",
    ParaDitrifluoromethylArene => "Para ditrifluoromethyl arene",
    ParaTrifluoromethylCarboxyArene => "Para trifluoromethyl carboxy arene",
    ParaTrifluoromethylAlkoxycarbonylArene => "Para trifluoromethyl alkoxycarbonyl arene",
    ParaTrifluoromethylCarbamoylArene => "Para trifluoromethyl carbamoyl arene",
    ParaTrifluoromethylFormylArene => "Para trifluoromethyl formyl arene",
    ParaTrifluoromethylAcylArene => "Para trifluoromethyl acyl arene",
    ParaTrifluoromethylCyanoArene => "Para trifluoromethyl cyano arene",
    ParaTrifluoromethylVinylArene => "Para trifluoromethyl vinyl arene",
    ParaTrifluoromethylAlkylArene => "Para trifluoromethyl alkyl arene",
    ParaDicarboxyArene => "Para dicarboxy arene",
    ParaCarboxyAlkoxycarbonylArene => "Para carboxy alkoxycarbonyl arene",
    ParaCarboxyCarbamoylArene => "Para carboxy carbamoyl arene",
    ParaCarboxyFormylArene => "Para carboxy formyl arene",
    ParaCarboxyAcylArene => "Para carboxy acyl arene",
    ParaCarboxyCyanoArene => "Para carboxy cyano arene",
    ParaCarboxyVinylArene => "Para carboxy vinyl arene",
    ParaCarboxyAlkylArene => "Para carboxy alkyl arene",
    ParaDialkoxycarbonylArene => "Para dialkoxycarbonyl arene",
    ParaAlkoxycarbonylCarbamoylArene => "Para alkoxycarbonyl carbamoyl arene",
    ParaAlkoxycarbonylFormylArene => "Para alkoxycarbonyl formyl arene",
    ParaAlkoxycarbonylAcylArene => "Para alkoxycarbonyl acyl arene",
    ParaAlkoxycarbonylCyanoArene => "Para alkoxycarbonyl cyano arene",
    ParaAlkoxycarbonylVinylArene => "Para alkoxycarbonyl vinyl arene",
    ParaAlkoxycarbonylAlkylArene => "Para alkoxycarbonyl alkyl arene",
    ParaDicarbamoylArene => "Para dicarbamoyl arene",
    ParaCarbamoylFormylArene => "Para carbamoyl formyl arene",
    ParaCarbamoylAcylArene => "Para carbamoyl acyl arene",
    ParaCarbamoylCyanoArene => "Para carbamoyl cyano arene",
    ParaCarbamoylVinylArene => "Para carbamoyl vinyl arene",
    ParaCarbamoylAlkylArene => "Para carbamoyl alkyl arene",
    ParaDiformylArene => "Para diformyl arene",
    ParaFormylAcylArene => "Para formyl acyl arene",
    ParaFormylCyanoArene => "Para formyl cyano arene",
    ParaFormylVinylArene => "Para formyl vinyl arene",
    ParaFormylAlkylArene => "Para formyl alkyl arene",
    ParaDiacylArene => "Para diacyl arene",
    ParaAcylCyanoArene => "Para acyl cyano arene",
    ParaAcylVinylArene => "Para acyl vinyl arene",
    ParaAcylAlkylArene => "Para acyl alkyl arene",
    ParaDicyanoArene => "Para dicyano arene",
    ParaCyanoVinylArene => "Para cyano vinyl arene",
    ParaCyanoAlkylArene => "Para cyano alkyl arene",
    ParaDivinylArene => "Para divinyl arene",
    ParaVinylAlkylArene => "Para vinyl alkyl arene",
    ParaDialkylArene => "Para dialkyl arene",
    ParaMethylMethoxyArene => "Para methyl methoxy arene",
    ParaMethylAlkoxyArene => "Para methyl alkoxy arene",
    ParaMethylAcyloxyArene => "Para methyl acyloxy arene",
    ParaHydroxymethylMethoxyArene => "Para hydroxymethyl methoxy arene",
    ParaHydroxymethylAlkoxyArene => "Para hydroxymethyl alkoxy arene",
    ParaHydroxymethylAcyloxyArene => "Para hydroxymethyl acyloxy arene",
    ParaTrifluoromethylHydroxyArene => "Para trifluoromethyl hydroxy arene",
    ParaTrifluoromethylMethoxyArene => "Para trifluoromethyl methoxy arene",
    ParaTrifluoromethylAlkoxyArene => "Para trifluoromethyl alkoxy arene",
    ParaTrifluoromethylAcyloxyArene => "Para trifluoromethyl acyloxy arene",
    ParaCarboxyMethoxyArene => "Para carboxy methoxy arene",
    ParaCarboxyAlkoxyArene => "Para carboxy alkoxy arene",
    ParaCarboxyAcyloxyArene => "Para carboxy acyloxy arene",
    ParaAlkoxycarbonylMethoxyArene => "Para alkoxycarbonyl methoxy arene",
    ParaAlkoxycarbonylAlkoxyArene => "Para alkoxycarbonyl alkoxy arene",
    ParaAlkoxycarbonylAcyloxyArene => "Para alkoxycarbonyl acyloxy arene",
    ParaCarbamoylMethoxyArene => "Para carbamoyl methoxy arene",
    ParaCarbamoylAlkoxyArene => "Para carbamoyl alkoxy arene",
    ParaCarbamoylAcyloxyArene => "Para carbamoyl acyloxy arene",
    ParaFormylMethoxyArene => "Para formyl methoxy arene",
    ParaFormylAlkoxyArene => "Para formyl alkoxy arene",
    ParaFormylAcyloxyArene => "Para formyl acyloxy arene",
    ParaAcylMethoxyArene => "Para acyl methoxy arene",
    ParaAcylAlkoxyArene => "Para acyl alkoxy arene",
    ParaAcylAcyloxyArene => "Para acyl acyloxy arene",
    ParaCyanoHydroxyArene => "Para cyano hydroxy arene",
    ParaCyanoMethoxyArene => "Para cyano methoxy arene",
    ParaCyanoAlkoxyArene => "Para cyano alkoxy arene",
    ParaCyanoAcyloxyArene => "Para cyano acyloxy arene",
    ParaVinylHydroxyArene => "Para vinyl hydroxy arene",
    ParaVinylAlkoxyArene => "Para vinyl alkoxy arene",
    ParaVinylAcyloxyArene => "Para vinyl acyloxy arene",
    ParaAlkylMethoxyArene => "Para alkyl methoxy arene",
    ParaAlkylAlkoxyArene => "Para alkyl alkoxy arene",
    ParaAlkylAcyloxyArene => "Para alkyl acyloxy arene",
    ParaMethylAminoArene => "Para methyl amino arene",
    ParaMethylAlkylaminoArene => "Para methyl alkylamino arene",
    ParaMethylAcylaminoArene => "Para methyl acylamino arene",
    ParaMethylNitroArene => "Para methyl nitro arene",
    ParaHydroxymethylAminoArene => "Para hydroxymethyl amino arene",
    ParaHydroxymethylAlkylaminoArene => "Para hydroxymethyl alkylamino arene",
    ParaHydroxymethylAcylaminoArene => "Para hydroxymethyl acylamino arene",
    ParaHydroxymethylNitroArene => "Para hydroxymethyl nitro arene",
    ParaTrifluoromethylAminoArene => "Para trifluoromethyl amino arene",
    ParaTrifluoromethylAlkylaminoArene => "Para trifluoromethyl alkylamino arene",
    ParaTrifluoromethylAcylaminoArene => "Para trifluoromethyl acylamino arene",
    ParaTrifluoromethylNitroArene => "Para trifluoromethyl nitro arene",
    ParaCarboxyAminoArene => "Para carboxy amino arene",
    ParaCarboxyAlkylaminoArene => "Para carboxy alkylamino arene",
    ParaCarboxyAcylaminoArene => "Para carboxy acylamino arene",
    ParaCarboxyNitroArene => "Para carboxy nitro arene",
    ParaAlkoxycarbonylAminoArene => "Para alkoxycarbonyl amino arene",
    ParaAlkoxycarbonylAlkylaminoArene => "Para alkoxycarbonyl alkylamino arene",
    ParaAlkoxycarbonylAcylaminoArene => "Para alkoxycarbonyl acylamino arene",
    ParaAlkoxycarbonylNitroArene => "Para alkoxycarbonyl nitro arene",
    ParaCarbamoylAminoArene => "Para carbamoyl amino arene",
    ParaCarbamoylAlkylaminoArene => "Para carbamoyl alkylamino arene",
    ParaCarbamoylAcylaminoArene => "Para carbamoyl acylamino arene",
    ParaCarbamoylNitroArene => "Para carbamoyl nitro arene",
    ParaFormylAminoArene => "Para formyl amino arene",
    ParaFormylAlkylaminoArene => "Para formyl alkylamino arene",
    ParaFormylAcylaminoArene => "Para formyl acylamino arene",
    ParaFormylNitroArene => "Para formyl nitro arene",
    ParaAcylAminoArene => "Para acyl amino arene",
    ParaAcylAlkylaminoArene => "Para acyl alkylamino arene",
    ParaAcylAcylaminoArene => "Para acyl acylamino arene",
    ParaAcylNitroArene => "Para acyl nitro arene",
    ParaCyanoAminoArene => "Para cyano amino arene",
    ParaCyanoAlkylaminoArene => "Para cyano alkylamino arene",
    ParaCyanoAcylaminoArene => "Para cyano acylamino arene",
    ParaCyanoNitroArene => "Para cyano nitro arene",
    ParaVinylAminoArene => "Para vinyl amino arene",
    ParaVinylAlkylaminoArene => "Para vinyl alkylamino arene",
    ParaVinylAcylaminoArene => "Para vinyl acylamino arene",
    ParaVinylNitroArene => "Para vinyl nitro arene",
    ParaAlkylAminoArene => "Para alkyl amino arene",
    ParaAlkylAlkylaminoArene => "Para alkyl alkylamino arene",
    ParaAlkylAcylaminoArene => "Para alkyl acylamino arene",
    ParaAlkylNitroArene => "Para alkyl nitro arene",
    ParaMethylMercaptoArene => "Para methyl mercapto arene",
    ParaMethylAlkylthioArene => "Para methyl alkylthio arene",
    ParaMethylSulfonylArene => "Para methyl sulfonyl arene",
    ParaHydroxymethylMercaptoArene => "Para hydroxymethyl mercapto arene",
    ParaHydroxymethylAlkylthioArene => "Para hydroxymethyl alkylthio arene",
    ParaHydroxymethylSulfonylArene => "Para hydroxymethyl sulfonyl arene",
    ParaTrifluoromethylMercaptoArene => "Para trifluoromethyl mercapto arene",
    ParaTrifluoromethylAlkylthioArene => "Para trifluoromethyl alkylthio arene",
    ParaTrifluoromethylSulfonylArene => "Para trifluoromethyl sulfonyl arene",
    ParaCarboxyMercaptoArene => "Para carboxy mercapto arene",
    ParaCarboxyAlkylthioArene => "Para carboxy alkylthio arene",
    ParaCarboxySulfonylArene => "Para carboxy sulfonyl arene",
    ParaAlkoxycarbonylMercaptoArene => "Para alkoxycarbonyl mercapto arene",
    ParaAlkoxycarbonylAlkylthioArene => "Para alkoxycarbonyl alkylthio arene",
    ParaAlkoxycarbonylSulfonylArene => "Para alkoxycarbonyl sulfonyl arene",
    ParaCarbamoylMercaptoArene => "Para carbamoyl mercapto arene",
    ParaCarbamoylAlkylthioArene => "Para carbamoyl alkylthio arene",
    ParaCarbamoylSulfonylArene => "Para carbamoyl sulfonyl arene",
    ParaFormylMercaptoArene => "Para formyl mercapto arene",
    ParaFormylAlkylthioArene => "Para formyl alkylthio arene",
    ParaFormylSulfonylArene => "Para formyl sulfonyl arene",
    ParaAcylMercaptoArene => "Para acyl mercapto arene",
    ParaAcylAlkylthioArene => "Para acyl alkylthio arene",
    ParaAcylSulfonylArene => "Para acyl sulfonyl arene",
    ParaCyanoMercaptoArene => "Para cyano mercapto arene",
    ParaCyanoAlkylthioArene => "Para cyano alkylthio arene",
    ParaCyanoSulfonylArene => "Para cyano sulfonyl arene",
    ParaVinylMercaptoArene => "Para vinyl mercapto arene",
    ParaVinylAlkylthioArene => "Para vinyl alkylthio arene",
    ParaVinylSulfonylArene => "Para vinyl sulfonyl arene",
    ParaAlkylMercaptoArene => "Para alkyl mercapto arene",
    ParaAlkylAlkylthioArene => "Para alkyl alkylthio arene",
    ParaAlkylSulfonylArene => "Para alkyl sulfonyl arene",
    ParaMethylFluoroArene => "Para methyl fluoro arene",
    ParaHydroxymethylFluoroArene => "Para hydroxymethyl fluoro arene",
    ParaTrifluoromethylFluoroArene => "Para trifluoromethyl fluoro arene",
    ParaCarboxyFluoroArene => "Para carboxy fluoro arene",
    ParaAlkoxycarbonylFluoroArene => "Para alkoxycarbonyl fluoro arene",
    ParaCarbamoylFluoroArene => "Para carbamoyl fluoro arene",
    ParaFormylFluoroArene => "Para formyl fluoro arene",
    ParaAcylFluoroArene => "Para acyl fluoro arene",
    ParaCyanoFluoroArene => "Para cyano fluoro arene",
    ParaVinylFluoroArene => "Para vinyl fluoro arene",
    ParaAlkylFluoroArene => "Para alkyl fluoro arene",
    ParaMethylChloroArene => "Para methyl chloro arene",
    ParaHydroxymethylChloroArene => "Para hydroxymethyl chloro arene",
    ParaTrifluoromethylChloroArene => "Para trifluoromethyl chloro arene",
    ParaCarboxyChloroArene => "Para carboxy chloro arene",
    ParaAlkoxycarbonylChloroArene => "Para alkoxycarbonyl chloro arene",
    ParaCarbamoylChloroArene => "Para carbamoyl chloro arene",
    ParaFormylChloroArene => "Para formyl chloro arene",
    ParaAcylChloroArene => "Para acyl chloro arene",
    ParaCyanoChloroArene => "Para cyano chloro arene",
    ParaVinylChloroArene => "Para vinyl chloro arene",
    ParaAlkylChloroArene => "Para alkyl chloro arene",
    ParaMethylBromoArene => "Para methyl bromo arene",
    ParaHydroxymethylBromoArene => "Para hydroxymethyl bromo arene",
    ParaTrifluoromethylBromoArene => "Para trifluoromethyl bromo arene",
    ParaCarboxyBromoArene => "Para carboxy bromo arene",
    ParaAlkoxycarbonylBromoArene => "Para alkoxycarbonyl bromo arene",
    ParaCarbamoylBromoArene => "Para carbamoyl bromo arene",
    ParaFormylBromoArene => "Para formyl bromo arene",
    ParaAcylBromoArene => "Para acyl bromo arene",
    ParaCyanoBromoArene => "Para cyano bromo arene",
    ParaVinylBromoArene => "Para vinyl bromo arene",
    ParaAlkylBromoArene => "Para alkyl bromo arene",
    ParaMethylIodoArene => "Para methyl iodo arene",
    ParaHydroxymethylIodoArene => "Para hydroxymethyl iodo arene",
    ParaTrifluoromethylIodoArene => "Para trifluoromethyl iodo arene",
    ParaCarboxyIodoArene => "Para carboxy iodo arene",
    ParaAlkoxycarbonylIodoArene => "Para alkoxycarbonyl iodo arene",
    ParaCarbamoylIodoArene => "Para carbamoyl iodo arene",
    ParaFormylIodoArene => "Para formyl iodo arene",
    ParaAcylIodoArene => "Para acyl iodo arene",
    ParaCyanoIodoArene => "Para cyano iodo arene",
    ParaVinylIodoArene => "Para vinyl iodo arene",
    ParaAlkylIodoArene => "Para alkyl iodo arene",
    ParaHydroxyAcyloxyArene => "Para hydroxy acyloxy arene",
    ParaMethoxyAcyloxyArene => "Para methoxy acyloxy arene",
    ParaAlkoxyAcyloxyArene => "Para alkoxy acyloxy arene",
    ParaDiacyloxyArene => "Para diacyloxy arene",
    ParaHydroxyAminoArene => "Para hydroxy amino arene",
    ParaHydroxyAlkylaminoArene => "Para hydroxy alkylamino arene",
    ParaHydroxyAcylaminoArene => "Para hydroxy acylamino arene",
    ParaHydroxyNitroArene => "Para hydroxy nitro arene",
    ParaMethoxyAminoArene => "Para methoxy amino arene",
    ParaMethoxyAlkylaminoArene => "Para methoxy alkylamino arene",
    ParaMethoxyAcylaminoArene => "Para methoxy acylamino arene",
    ParaMethoxyNitroArene => "Para methoxy nitro arene",
    ParaAlkoxyAminoArene => "Para alkoxy amino arene",
    ParaAlkoxyAlkylaminoArene => "Para alkoxy alkylamino arene",
    ParaAlkoxyAcylaminoArene => "Para alkoxy acylamino arene",
    ParaAlkoxyNitroArene => "Para alkoxy nitro arene",
    ParaAcyloxyAminoArene => "Para acyloxy amino arene",
    ParaAcyloxyAlkylaminoArene => "Para acyloxy alkylamino arene",
    ParaAcyloxyAcylaminoArene => "Para acyloxy acylamino arene",
    ParaAcyloxyNitroArene => "Para acyloxy nitro arene",
    ParaHydroxyMercaptoArene => "Para hydroxy mercapto arene",
    ParaHydroxyAlkylthioArene => "Para hydroxy alkylthio arene",
    ParaHydroxySulfonylArene => "Para hydroxy sulfonyl arene",
    ParaMethoxyMercaptoArene => "Para methoxy mercapto arene",
    ParaMethoxyAlkylthioArene => "Para methoxy alkylthio arene",
    ParaMethoxySulfonylArene => "Para methoxy sulfonyl arene",
    ParaAlkoxyMercaptoArene => "Para alkoxy mercapto arene",
    ParaAlkoxyAlkylthioArene => "Para alkoxy alkylthio arene",
    ParaAlkoxySulfonylArene => "Para alkoxy sulfonyl arene",
    ParaAcyloxyMercaptoArene => "Para acyloxy mercapto arene",
    ParaAcyloxyAlkylthioArene => "Para acyloxy alkylthio arene",
    ParaAcyloxySulfonylArene => "Para acyloxy sulfonyl arene",
    ParaHydroxyFluoroArene => "Para hydroxy fluoro arene",
    ParaMethoxyFluoroArene => "Para methoxy fluoro arene",
    ParaAlkoxyFluoroArene => "Para alkoxy fluoro arene",
    ParaAcyloxyFluoroArene => "Para acyloxy fluoro arene",
    ParaHydroxyChloroArene => "Para hydroxy chloro arene",
    ParaMethoxyChloroArene => "Para methoxy chloro arene",
    ParaAlkoxyChloroArene => "Para alkoxy chloro arene",
    ParaAcyloxyChloroArene => "Para acyloxy chloro arene",
    ParaHydroxyBromoArene => "Para hydroxy bromo arene",
    ParaMethoxyBromoArene => "Para methoxy bromo arene",
    ParaAlkoxyBromoArene => "Para alkoxy bromo arene",
    ParaAcyloxyBromoArene => "Para acyloxy bromo arene",
    ParaHydroxyIodoArene => "Para hydroxy iodo arene",
    ParaMethoxyIodoArene => "Para methoxy iodo arene",
    ParaAlkoxyIodoArene => "Para alkoxy iodo arene",
    ParaAcyloxyIodoArene => "Para acyloxy iodo arene",
    ParaDiaminoArene => "Para diamino arene",
    ParaAminoAlkylaminoArene => "Para amino alkylamino arene",
    ParaAminoAcylaminoArene => "Para amino acylamino arene",
    ParaAminoNitroArene => "Para amino nitro arene",
    ParaDialkylaminoArene => "Para dialkylamino arene",
    ParaAlkylaminoAcylaminoArene => "Para alkylamino acylamino arene",
    ParaAlkylaminoNitroArene => "Para alkylamino nitro arene",
    ParaDiacylaminoArene => "Para diacylamino arene",
    ParaAcylaminoNitroArene => "Para acylamino nitro arene",
    ParaDinitroArene => "Para dinitro arene",
    ParaAminoMercaptoArene => "Para amino mercapto arene",
    ParaAminoAlkylthioArene => "Para amino alkylthio arene",
    ParaAminoSulfonylArene => "Para amino sulfonyl arene",
    ParaAlkylaminoMercaptoArene => "Para alkylamino mercapto arene",
    ParaAlkylaminoAlkylthioArene => "Para alkylamino alkylthio arene",
    ParaAlkylaminoSulfonylArene => "Para alkylamino sulfonyl arene",
    ParaAcylaminoMercaptoArene => "Para acylamino mercapto arene",
    ParaAcylaminoAlkylthioArene => "Para acylamino alkylthio arene",
    ParaAcylaminoSulfonylArene => "Para acylamino sulfonyl arene",
    ParaNitroMercaptoArene => "Para nitro mercapto arene",
    ParaNitroAlkylthioArene => "Para nitro alkylthio arene",
    ParaNitroSulfonylArene => "Para nitro sulfonyl arene",
    ParaAminoFluoroArene => "Para amino fluoro arene",
    ParaAlkylaminoFluoroArene => "Para alkylamino fluoro arene",
    ParaAcylaminoFluoroArene => "Para acylamino fluoro arene",
    ParaNitroFluoroArene => "Para nitro fluoro arene",
    ParaAminoChloroArene => "Para amino chloro arene",
    ParaAlkylaminoChloroArene => "Para alkylamino chloro arene",
    ParaAcylaminoChloroArene => "Para acylamino chloro arene",
    ParaNitroChloroArene => "Para nitro chloro arene",
    ParaAminoBromoArene => "Para amino bromo arene",
    ParaAlkylaminoBromoArene => "Para alkylamino bromo arene",
    ParaAcylaminoBromoArene => "Para acylamino bromo arene",
    ParaNitroBromoArene => "Para nitro bromo arene",
    ParaAminoIodoArene => "Para amino iodo arene",
    ParaAlkylaminoIodoArene => "Para alkylamino iodo arene",
    ParaAcylaminoIodoArene => "Para acylamino iodo arene",
    ParaNitroIodoArene => "Para nitro iodo arene",
    ParaDimercaptoArene => "Para dimercapto arene",
    ParaMercaptoAlkylthioArene => "Para mercapto alkylthio arene",
    ParaMercaptoSulfonylArene => "Para mercapto sulfonyl arene",
    ParaDialkylthioArene => "Para dialkylthio arene",
    ParaAlkylthioSulfonylArene => "Para alkylthio sulfonyl arene",
    ParaDisulfonylArene => "Para disulfonyl arene",
    ParaMercaptoFluoroArene => "Para mercapto fluoro arene",
    ParaAlkylthioFluoroArene => "Para alkylthio fluoro arene",
    ParaSulfonylFluoroArene => "Para sulfonyl fluoro arene",
    ParaMercaptoChloroArene => "Para mercapto chloro arene",
    ParaAlkylthioChloroArene => "Para alkylthio chloro arene",
    ParaSulfonylChloroArene => "Para sulfonyl chloro arene",
    ParaMercaptoBromoArene => "Para mercapto bromo arene",
    ParaAlkylthioBromoArene => "Para alkylthio bromo arene",
    ParaSulfonylBromoArene => "Para sulfonyl bromo arene",
    ParaMercaptoIodoArene => "Para mercapto iodo arene",
    ParaAlkylthioIodoArene => "Para alkylthio iodo arene",
    ParaSulfonylIodoArene => "Para sulfonyl iodo arene",
    ParaDifluoroArene => "Para difluoro arene",
    ParaFluoroChloroArene => "Para fluoro chloro arene",
    ParaFluoroBromoArene => "Para fluoro bromo arene",
    ParaFluoroIodoArene => "Para fluoro iodo arene",
    ParaDichloroArene => "Para dichloro arene",
    ParaChloroBromoArene => "Para chloro bromo arene",
    ParaChloroIodoArene => "Para chloro iodo arene",
    ParaDibromoArene => "Para dibromo arene",
    ParaBromoIodoArene => "Para bromo iodo arene",
    ParaDiiodoArene => "Para diiodo arene",
    Benzhydrol => "Benzhydrol",
    Diarylmethane => "Diarylmethane",
    DiarylSulfone => "Diaryl sulfone",
    Deoxybenzoin => "Deoxybenzoin",
    Benzil => "Benzil",
    Hydrobenzoin => "Hydrobenzoin",
    Bibenzyl => "Bibenzyl",
    ArylBenzoate => "Aryl benzoate",
    Benzanilide => "Benzanilide",
    NBenzylaniline => "N-Benzylaniline",
    Diphenylacetylene => "Diphenylacetylene",
    NBenzylideneaniline => "N-Benzylideneaniline",
    ArylBenzenesulfonamide => "Aryl benzenesulfonamide",
    OneThreeDiarylpropane => "1,3-Diarylpropane",
    DibenzylEther => "Dibenzyl ether",
    OneFourDiarylbutane => "1,4-Diarylbutane",
    OneCarboxyOnePhenylmethane => "1-Carboxy-1-phenylmethane",
    OneAlkoxycarbonylOnePhenylmethane => "1-Alkoxycarbonyl-1-phenylmethane",
    OneCarbamoylOnePhenylmethane => "1-Carbamoyl-1-phenylmethane",
    OneFormylOnePhenylmethane => "1-Formyl-1-phenylmethane",
    OneAcylOnePhenylmethane => "1-Acyl-1-phenylmethane",
    OneCyanoOnePhenylmethane => "1-Cyano-1-phenylmethane",
    TwoCarboxyOnePhenylethane => "2-Carboxy-1-phenylethane",
    TwoAlkoxycarbonylOnePhenylethane => "2-Alkoxycarbonyl-1-phenylethane",
    TwoCarbamoylOnePhenylethane => "2-Carbamoyl-1-phenylethane",
    TwoFormylOnePhenylethane => "2-Formyl-1-phenylethane",
    TwoAcylOnePhenylethane => "2-Acyl-1-phenylethane",
    TwoCyanoOnePhenylethane => "2-Cyano-1-phenylethane",
    ThreeCarboxyOnePhenylpropane => "3-Carboxy-1-phenylpropane",
    ThreeAlkoxycarbonylOnePhenylpropane => "3-Alkoxycarbonyl-1-phenylpropane",
    ThreeCarbamoylOnePhenylpropane => "3-Carbamoyl-1-phenylpropane",
    ThreeFormylOnePhenylpropane => "3-Formyl-1-phenylpropane",
    ThreeAcylOnePhenylpropane => "3-Acyl-1-phenylpropane",
    ThreeCyanoOnePhenylpropane => "3-Cyano-1-phenylpropane",
    FourCarboxyOnePhenylbutane => "4-Carboxy-1-phenylbutane",
    FourAlkoxycarbonylOnePhenylbutane => "4-Alkoxycarbonyl-1-phenylbutane",
    FourCarbamoylOnePhenylbutane => "4-Carbamoyl-1-phenylbutane",
    FourFormylOnePhenylbutane => "4-Formyl-1-phenylbutane",
    FourAcylOnePhenylbutane => "4-Acyl-1-phenylbutane",
    FourCyanoOnePhenylbutane => "4-Cyano-1-phenylbutane",
    FiveCarboxyOnePhenylpentane => "5-Carboxy-1-phenylpentane",
    FiveAlkoxycarbonylOnePhenylpentane => "5-Alkoxycarbonyl-1-phenylpentane",
    FiveCarbamoylOnePhenylpentane => "5-Carbamoyl-1-phenylpentane",
    FiveFormylOnePhenylpentane => "5-Formyl-1-phenylpentane",
    FiveAcylOnePhenylpentane => "5-Acyl-1-phenylpentane",
    FiveCyanoOnePhenylpentane => "5-Cyano-1-phenylpentane",
    SixCarboxyOnePhenylhexane => "6-Carboxy-1-phenylhexane",
    SixAlkoxycarbonylOnePhenylhexane => "6-Alkoxycarbonyl-1-phenylhexane",
    SixCarbamoylOnePhenylhexane => "6-Carbamoyl-1-phenylhexane",
    SixFormylOnePhenylhexane => "6-Formyl-1-phenylhexane",
    SixAcylOnePhenylhexane => "6-Acyl-1-phenylhexane",
    SixCyanoOnePhenylhexane => "6-Cyano-1-phenylhexane",
    SevenCarboxyOnePhenylheptane => "7-Carboxy-1-phenylheptane",
    SevenAlkoxycarbonylOnePhenylheptane => "7-Alkoxycarbonyl-1-phenylheptane",
    SevenCarbamoylOnePhenylheptane => "7-Carbamoyl-1-phenylheptane",
    SevenFormylOnePhenylheptane => "7-Formyl-1-phenylheptane",
    SevenAcylOnePhenylheptane => "7-Acyl-1-phenylheptane",
    SevenCyanoOnePhenylheptane => "7-Cyano-1-phenylheptane",
    EightCarboxyOnePhenyloctane => "8-Carboxy-1-phenyloctane",
    EightAlkoxycarbonylOnePhenyloctane => "8-Alkoxycarbonyl-1-phenyloctane",
    EightCarbamoylOnePhenyloctane => "8-Carbamoyl-1-phenyloctane",
    EightFormylOnePhenyloctane => "8-Formyl-1-phenyloctane",
    EightAcylOnePhenyloctane => "8-Acyl-1-phenyloctane",
    EightCyanoOnePhenyloctane => "8-Cyano-1-phenyloctane",
    NineCarboxyOnePhenylnonane => "9-Carboxy-1-phenylnonane",
    NineAlkoxycarbonylOnePhenylnonane => "9-Alkoxycarbonyl-1-phenylnonane",
    NineCarbamoylOnePhenylnonane => "9-Carbamoyl-1-phenylnonane",
    NineFormylOnePhenylnonane => "9-Formyl-1-phenylnonane",
    NineAcylOnePhenylnonane => "9-Acyl-1-phenylnonane",
    NineCyanoOnePhenylnonane => "9-Cyano-1-phenylnonane",
    TenCarboxyOnePhenyldecane => "10-Carboxy-1-phenyldecane",
    TenAlkoxycarbonylOnePhenyldecane => "10-Alkoxycarbonyl-1-phenyldecane",
    TenCarbamoylOnePhenyldecane => "10-Carbamoyl-1-phenyldecane",
    TenFormylOnePhenyldecane => "10-Formyl-1-phenyldecane",
    TenAcylOnePhenyldecane => "10-Acyl-1-phenyldecane",
    TenCyanoOnePhenyldecane => "10-Cyano-1-phenyldecane",
    OneHydroxyOnePhenylmethane => "1-Hydroxy-1-phenylmethane",
    OneMethoxyOnePhenylmethane => "1-Methoxy-1-phenylmethane",
    OneAlkoxyOnePhenylmethane => "1-Alkoxy-1-phenylmethane",
    OneAcyloxyOnePhenylmethane => "1-Acyloxy-1-phenylmethane",
    TwoHydroxyOnePhenylethane => "2-Hydroxy-1-phenylethane",
    TwoMethoxyOnePhenylethane => "2-Methoxy-1-phenylethane",
    TwoAlkoxyOnePhenylethane => "2-Alkoxy-1-phenylethane",
    TwoAcyloxyOnePhenylethane => "2-Acyloxy-1-phenylethane",
    ThreeHydroxyOnePhenylpropane => "3-Hydroxy-1-phenylpropane",
    ThreeMethoxyOnePhenylpropane => "3-Methoxy-1-phenylpropane",
    ThreeAlkoxyOnePhenylpropane => "3-Alkoxy-1-phenylpropane",
    ThreeAcyloxyOnePhenylpropane => "3-Acyloxy-1-phenylpropane",
    FourHydroxyOnePhenylbutane => "4-Hydroxy-1-phenylbutane",
    FourMethoxyOnePhenylbutane => "4-Methoxy-1-phenylbutane",
    FourAlkoxyOnePhenylbutane => "4-Alkoxy-1-phenylbutane",
    FourAcyloxyOnePhenylbutane => "4-Acyloxy-1-phenylbutane",
    FiveHydroxyOnePhenylpentane => "5-Hydroxy-1-phenylpentane",
    FiveMethoxyOnePhenylpentane => "5-Methoxy-1-phenylpentane",
    FiveAlkoxyOnePhenylpentane => "5-Alkoxy-1-phenylpentane",
    FiveAcyloxyOnePhenylpentane => "5-Acyloxy-1-phenylpentane",
    SixHydroxyOnePhenylhexane => "6-Hydroxy-1-phenylhexane",
    SixMethoxyOnePhenylhexane => "6-Methoxy-1-phenylhexane",
    SixAlkoxyOnePhenylhexane => "6-Alkoxy-1-phenylhexane",
    SixAcyloxyOnePhenylhexane => "6-Acyloxy-1-phenylhexane",
    SevenHydroxyOnePhenylheptane => "7-Hydroxy-1-phenylheptane",
    SevenMethoxyOnePhenylheptane => "7-Methoxy-1-phenylheptane",
    SevenAlkoxyOnePhenylheptane => "7-Alkoxy-1-phenylheptane",
    SevenAcyloxyOnePhenylheptane => "7-Acyloxy-1-phenylheptane",
    EightHydroxyOnePhenyloctane => "8-Hydroxy-1-phenyloctane",
    EightMethoxyOnePhenyloctane => "8-Methoxy-1-phenyloctane",
    EightAlkoxyOnePhenyloctane => "8-Alkoxy-1-phenyloctane",
    EightAcyloxyOnePhenyloctane => "8-Acyloxy-1-phenyloctane",
    NineHydroxyOnePhenylnonane => "9-Hydroxy-1-phenylnonane",
    NineMethoxyOnePhenylnonane => "9-Methoxy-1-phenylnonane",
    NineAlkoxyOnePhenylnonane => "9-Alkoxy-1-phenylnonane",
    NineAcyloxyOnePhenylnonane => "9-Acyloxy-1-phenylnonane",
    TenHydroxyOnePhenyldecane => "10-Hydroxy-1-phenyldecane",
    TenMethoxyOnePhenyldecane => "10-Methoxy-1-phenyldecane",
    TenAlkoxyOnePhenyldecane => "10-Alkoxy-1-phenyldecane",
    TenAcyloxyOnePhenyldecane => "10-Acyloxy-1-phenyldecane",
    OneAminoOnePhenylmethane => "1-Amino-1-phenylmethane",
    OneAlkylaminoOnePhenylmethane => "1-Alkylamino-1-phenylmethane",
    OneAcylaminoOnePhenylmethane => "1-Acylamino-1-phenylmethane",
    TwoAminoOnePhenylethane => "2-Amino-1-phenylethane",
    TwoAlkylaminoOnePhenylethane => "2-Alkylamino-1-phenylethane",
    TwoAcylaminoOnePhenylethane => "2-Acylamino-1-phenylethane",
    ThreeAminoOnePhenylpropane => "3-Amino-1-phenylpropane",
    ThreeAlkylaminoOnePhenylpropane => "3-Alkylamino-1-phenylpropane",
    ThreeAcylaminoOnePhenylpropane => "3-Acylamino-1-phenylpropane",
    FourAminoOnePhenylbutane => "4-Amino-1-phenylbutane",
    FourAlkylaminoOnePhenylbutane => "4-Alkylamino-1-phenylbutane",
    FourAcylaminoOnePhenylbutane => "4-Acylamino-1-phenylbutane",
    FiveAminoOnePhenylpentane => "5-Amino-1-phenylpentane",
    FiveAlkylaminoOnePhenylpentane => "5-Alkylamino-1-phenylpentane",
    FiveAcylaminoOnePhenylpentane => "5-Acylamino-1-phenylpentane",
    SixAminoOnePhenylhexane => "6-Amino-1-phenylhexane",
    SixAlkylaminoOnePhenylhexane => "6-Alkylamino-1-phenylhexane",
    SixAcylaminoOnePhenylhexane => "6-Acylamino-1-phenylhexane",
    SevenAminoOnePhenylheptane => "7-Amino-1-phenylheptane",
    SevenAlkylaminoOnePhenylheptane => "7-Alkylamino-1-phenylheptane",
    SevenAcylaminoOnePhenylheptane => "7-Acylamino-1-phenylheptane",
    EightAminoOnePhenyloctane => "8-Amino-1-phenyloctane",
    EightAlkylaminoOnePhenyloctane => "8-Alkylamino-1-phenyloctane",
    EightAcylaminoOnePhenyloctane => "8-Acylamino-1-phenyloctane",
    NineAminoOnePhenylnonane => "9-Amino-1-phenylnonane",
    NineAlkylaminoOnePhenylnonane => "9-Alkylamino-1-phenylnonane",
    NineAcylaminoOnePhenylnonane => "9-Acylamino-1-phenylnonane",
    TenAminoOnePhenyldecane => "10-Amino-1-phenyldecane",
    TenAlkylaminoOnePhenyldecane => "10-Alkylamino-1-phenyldecane",
    TenAcylaminoOnePhenyldecane => "10-Acylamino-1-phenyldecane",
    OneMercaptoOnePhenylmethane => "1-Mercapto-1-phenylmethane",
    OneAlkylthioOnePhenylmethane => "1-Alkylthio-1-phenylmethane",
    OneSulfonylOnePhenylmethane => "1-Sulfonyl-1-phenylmethane",
    TwoMercaptoOnePhenylethane => "2-Mercapto-1-phenylethane",
    TwoAlkylthioOnePhenylethane => "2-Alkylthio-1-phenylethane",
    TwoSulfonylOnePhenylethane => "2-Sulfonyl-1-phenylethane",
    ThreeMercaptoOnePhenylpropane => "3-Mercapto-1-phenylpropane",
    ThreeAlkylthioOnePhenylpropane => "3-Alkylthio-1-phenylpropane",
    ThreeSulfonylOnePhenylpropane => "3-Sulfonyl-1-phenylpropane",
    FourMercaptoOnePhenylbutane => "4-Mercapto-1-phenylbutane",
    FourAlkylthioOnePhenylbutane => "4-Alkylthio-1-phenylbutane",
    FourSulfonylOnePhenylbutane => "4-Sulfonyl-1-phenylbutane",
    FiveMercaptoOnePhenylpentane => "5-Mercapto-1-phenylpentane",
    FiveAlkylthioOnePhenylpentane => "5-Alkylthio-1-phenylpentane",
    FiveSulfonylOnePhenylpentane => "5-Sulfonyl-1-phenylpentane",
    SixMercaptoOnePhenylhexane => "6-Mercapto-1-phenylhexane",
    SixAlkylthioOnePhenylhexane => "6-Alkylthio-1-phenylhexane",
    SixSulfonylOnePhenylhexane => "6-Sulfonyl-1-phenylhexane",
    SevenMercaptoOnePhenylheptane => "7-Mercapto-1-phenylheptane",
    SevenAlkylthioOnePhenylheptane => "7-Alkylthio-1-phenylheptane",
    SevenSulfonylOnePhenylheptane => "7-Sulfonyl-1-phenylheptane",
    EightMercaptoOnePhenyloctane => "8-Mercapto-1-phenyloctane",
    EightAlkylthioOnePhenyloctane => "8-Alkylthio-1-phenyloctane",
    EightSulfonylOnePhenyloctane => "8-Sulfonyl-1-phenyloctane",
    NineMercaptoOnePhenylnonane => "9-Mercapto-1-phenylnonane",
    NineAlkylthioOnePhenylnonane => "9-Alkylthio-1-phenylnonane",
    NineSulfonylOnePhenylnonane => "9-Sulfonyl-1-phenylnonane",
    TenMercaptoOnePhenyldecane => "10-Mercapto-1-phenyldecane",
    TenAlkylthioOnePhenyldecane => "10-Alkylthio-1-phenyldecane",
    TenSulfonylOnePhenyldecane => "10-Sulfonyl-1-phenyldecane",
    OneFluoroOnePhenylmethane => "1-Fluoro-1-phenylmethane",
    TwoFluoroOnePhenylethane => "2-Fluoro-1-phenylethane",
    ThreeFluoroOnePhenylpropane => "3-Fluoro-1-phenylpropane",
    FourFluoroOnePhenylbutane => "4-Fluoro-1-phenylbutane",
    FiveFluoroOnePhenylpentane => "5-Fluoro-1-phenylpentane",
    SixFluoroOnePhenylhexane => "6-Fluoro-1-phenylhexane",
    SevenFluoroOnePhenylheptane => "7-Fluoro-1-phenylheptane",
    EightFluoroOnePhenyloctane => "8-Fluoro-1-phenyloctane",
    NineFluoroOnePhenylnonane => "9-Fluoro-1-phenylnonane",
    TenFluoroOnePhenyldecane => "10-Fluoro-1-phenyldecane",
    OneChloroOnePhenylmethane => "1-Chloro-1-phenylmethane",
    TwoChloroOnePhenylethane => "2-Chloro-1-phenylethane",
    ThreeChloroOnePhenylpropane => "3-Chloro-1-phenylpropane",
    FourChloroOnePhenylbutane => "4-Chloro-1-phenylbutane",
    FiveChloroOnePhenylpentane => "5-Chloro-1-phenylpentane",
    SixChloroOnePhenylhexane => "6-Chloro-1-phenylhexane",
    SevenChloroOnePhenylheptane => "7-Chloro-1-phenylheptane",
    EightChloroOnePhenyloctane => "8-Chloro-1-phenyloctane",
    NineChloroOnePhenylnonane => "9-Chloro-1-phenylnonane",
    TenChloroOnePhenyldecane => "10-Chloro-1-phenyldecane",
    OneBromoOnePhenylmethane => "1-Bromo-1-phenylmethane",
    TwoBromoOnePhenylethane => "2-Bromo-1-phenylethane",
    ThreeBromoOnePhenylpropane => "3-Bromo-1-phenylpropane",
    FourBromoOnePhenylbutane => "4-Bromo-1-phenylbutane",
    FiveBromoOnePhenylpentane => "5-Bromo-1-phenylpentane",
    SixBromoOnePhenylhexane => "6-Bromo-1-phenylhexane",
    SevenBromoOnePhenylheptane => "7-Bromo-1-phenylheptane",
    EightBromoOnePhenyloctane => "8-Bromo-1-phenyloctane",
    NineBromoOnePhenylnonane => "9-Bromo-1-phenylnonane",
    TenBromoOnePhenyldecane => "10-Bromo-1-phenyldecane",
    OneIodoOnePhenylmethane => "1-Iodo-1-phenylmethane",
    TwoIodoOnePhenylethane => "2-Iodo-1-phenylethane",
    ThreeIodoOnePhenylpropane => "3-Iodo-1-phenylpropane",
    FourIodoOnePhenylbutane => "4-Iodo-1-phenylbutane",
    FiveIodoOnePhenylpentane => "5-Iodo-1-phenylpentane",
    SixIodoOnePhenylhexane => "6-Iodo-1-phenylhexane",
    SevenIodoOnePhenylheptane => "7-Iodo-1-phenylheptane",
    EightIodoOnePhenyloctane => "8-Iodo-1-phenyloctane",
    NineIodoOnePhenylnonane => "9-Iodo-1-phenylnonane",
    TenIodoOnePhenyldecane => "10-Iodo-1-phenyldecane",
    OneCarboxyOnePhenoxymethane => "1-Carboxy-1-phenoxymethane",
    OneAlkoxycarbonylOnePhenoxymethane => "1-Alkoxycarbonyl-1-phenoxymethane",
    OneCarbamoylOnePhenoxymethane => "1-Carbamoyl-1-phenoxymethane",
    OneFormylOnePhenoxymethane => "1-Formyl-1-phenoxymethane",
    OneAcylOnePhenoxymethane => "1-Acyl-1-phenoxymethane",
    OneCyanoOnePhenoxymethane => "1-Cyano-1-phenoxymethane",
    TwoCarboxyOnePhenoxyethane => "2-Carboxy-1-phenoxyethane",
    TwoAlkoxycarbonylOnePhenoxyethane => "2-Alkoxycarbonyl-1-phenoxyethane",
    TwoCarbamoylOnePhenoxyethane => "2-Carbamoyl-1-phenoxyethane",
    TwoFormylOnePhenoxyethane => "2-Formyl-1-phenoxyethane",
    TwoAcylOnePhenoxyethane => "2-Acyl-1-phenoxyethane",
    TwoCyanoOnePhenoxyethane => "2-Cyano-1-phenoxyethane",
    ThreeCarboxyOnePhenoxypropane => "3-Carboxy-1-phenoxypropane",
    ThreeAlkoxycarbonylOnePhenoxypropane => "3-Alkoxycarbonyl-1-phenoxypropane",
    ThreeCarbamoylOnePhenoxypropane => "3-Carbamoyl-1-phenoxypropane",
    ThreeFormylOnePhenoxypropane => "3-Formyl-1-phenoxypropane",
    ThreeAcylOnePhenoxypropane => "3-Acyl-1-phenoxypropane",
    ThreeCyanoOnePhenoxypropane => "3-Cyano-1-phenoxypropane",
    FourCarboxyOnePhenoxybutane => "4-Carboxy-1-phenoxybutane",
    FourAlkoxycarbonylOnePhenoxybutane => "4-Alkoxycarbonyl-1-phenoxybutane",
    FourCarbamoylOnePhenoxybutane => "4-Carbamoyl-1-phenoxybutane",
    FourFormylOnePhenoxybutane => "4-Formyl-1-phenoxybutane",
    FourAcylOnePhenoxybutane => "4-Acyl-1-phenoxybutane",
    FourCyanoOnePhenoxybutane => "4-Cyano-1-phenoxybutane",
    FiveCarboxyOnePhenoxypentane => "5-Carboxy-1-phenoxypentane",
    FiveAlkoxycarbonylOnePhenoxypentane => "5-Alkoxycarbonyl-1-phenoxypentane",
    FiveCarbamoylOnePhenoxypentane => "5-Carbamoyl-1-phenoxypentane",
    FiveFormylOnePhenoxypentane => "5-Formyl-1-phenoxypentane",
    FiveAcylOnePhenoxypentane => "5-Acyl-1-phenoxypentane",
    FiveCyanoOnePhenoxypentane => "5-Cyano-1-phenoxypentane",
    SixCarboxyOnePhenoxyhexane => "6-Carboxy-1-phenoxyhexane",
    SixAlkoxycarbonylOnePhenoxyhexane => "6-Alkoxycarbonyl-1-phenoxyhexane",
    SixCarbamoylOnePhenoxyhexane => "6-Carbamoyl-1-phenoxyhexane",
    SixFormylOnePhenoxyhexane => "6-Formyl-1-phenoxyhexane",
    SixAcylOnePhenoxyhexane => "6-Acyl-1-phenoxyhexane",
    SixCyanoOnePhenoxyhexane => "6-Cyano-1-phenoxyhexane",
    SevenCarboxyOnePhenoxyheptane => "7-Carboxy-1-phenoxyheptane",
    SevenAlkoxycarbonylOnePhenoxyheptane => "7-Alkoxycarbonyl-1-phenoxyheptane",
    SevenCarbamoylOnePhenoxyheptane => "7-Carbamoyl-1-phenoxyheptane",
    SevenFormylOnePhenoxyheptane => "7-Formyl-1-phenoxyheptane",
    SevenAcylOnePhenoxyheptane => "7-Acyl-1-phenoxyheptane",
    SevenCyanoOnePhenoxyheptane => "7-Cyano-1-phenoxyheptane",
    EightCarboxyOnePhenoxyoctane => "8-Carboxy-1-phenoxyoctane",
    EightAlkoxycarbonylOnePhenoxyoctane => "8-Alkoxycarbonyl-1-phenoxyoctane",
    EightCarbamoylOnePhenoxyoctane => "8-Carbamoyl-1-phenoxyoctane",
    EightFormylOnePhenoxyoctane => "8-Formyl-1-phenoxyoctane",
    EightAcylOnePhenoxyoctane => "8-Acyl-1-phenoxyoctane",
    EightCyanoOnePhenoxyoctane => "8-Cyano-1-phenoxyoctane",
    NineCarboxyOnePhenoxynonane => "9-Carboxy-1-phenoxynonane",
    NineAlkoxycarbonylOnePhenoxynonane => "9-Alkoxycarbonyl-1-phenoxynonane",
    NineCarbamoylOnePhenoxynonane => "9-Carbamoyl-1-phenoxynonane",
    NineFormylOnePhenoxynonane => "9-Formyl-1-phenoxynonane",
    NineAcylOnePhenoxynonane => "9-Acyl-1-phenoxynonane",
    NineCyanoOnePhenoxynonane => "9-Cyano-1-phenoxynonane",
    OneHydroxyOnePhenoxymethane => "1-Hydroxy-1-phenoxymethane",
    OneMethoxyOnePhenoxymethane => "1-Methoxy-1-phenoxymethane",
    OneAlkoxyOnePhenoxymethane => "1-Alkoxy-1-phenoxymethane",
    OneAcyloxyOnePhenoxymethane => "1-Acyloxy-1-phenoxymethane",
    TwoHydroxyOnePhenoxyethane => "2-Hydroxy-1-phenoxyethane",
    TwoMethoxyOnePhenoxyethane => "2-Methoxy-1-phenoxyethane",
    TwoAlkoxyOnePhenoxyethane => "2-Alkoxy-1-phenoxyethane",
    TwoAcyloxyOnePhenoxyethane => "2-Acyloxy-1-phenoxyethane",
    ThreeHydroxyOnePhenoxypropane => "3-Hydroxy-1-phenoxypropane",
    ThreeMethoxyOnePhenoxypropane => "3-Methoxy-1-phenoxypropane",
    ThreeAlkoxyOnePhenoxypropane => "3-Alkoxy-1-phenoxypropane",
    ThreeAcyloxyOnePhenoxypropane => "3-Acyloxy-1-phenoxypropane",
    FourHydroxyOnePhenoxybutane => "4-Hydroxy-1-phenoxybutane",
    FourMethoxyOnePhenoxybutane => "4-Methoxy-1-phenoxybutane",
    FourAlkoxyOnePhenoxybutane => "4-Alkoxy-1-phenoxybutane",
    FourAcyloxyOnePhenoxybutane => "4-Acyloxy-1-phenoxybutane",
    FiveHydroxyOnePhenoxypentane => "5-Hydroxy-1-phenoxypentane",
    FiveMethoxyOnePhenoxypentane => "5-Methoxy-1-phenoxypentane",
    FiveAlkoxyOnePhenoxypentane => "5-Alkoxy-1-phenoxypentane",
    FiveAcyloxyOnePhenoxypentane => "5-Acyloxy-1-phenoxypentane",
    SixHydroxyOnePhenoxyhexane => "6-Hydroxy-1-phenoxyhexane",
    SixMethoxyOnePhenoxyhexane => "6-Methoxy-1-phenoxyhexane",
    SixAlkoxyOnePhenoxyhexane => "6-Alkoxy-1-phenoxyhexane",
    SixAcyloxyOnePhenoxyhexane => "6-Acyloxy-1-phenoxyhexane",
    SevenHydroxyOnePhenoxyheptane => "7-Hydroxy-1-phenoxyheptane",
    SevenMethoxyOnePhenoxyheptane => "7-Methoxy-1-phenoxyheptane",
    SevenAlkoxyOnePhenoxyheptane => "7-Alkoxy-1-phenoxyheptane",
    SevenAcyloxyOnePhenoxyheptane => "7-Acyloxy-1-phenoxyheptane",
    EightHydroxyOnePhenoxyoctane => "8-Hydroxy-1-phenoxyoctane",
    EightMethoxyOnePhenoxyoctane => "8-Methoxy-1-phenoxyoctane",
    EightAlkoxyOnePhenoxyoctane => "8-Alkoxy-1-phenoxyoctane",
    EightAcyloxyOnePhenoxyoctane => "8-Acyloxy-1-phenoxyoctane",
    NineHydroxyOnePhenoxynonane => "9-Hydroxy-1-phenoxynonane",
    NineMethoxyOnePhenoxynonane => "9-Methoxy-1-phenoxynonane",
    NineAlkoxyOnePhenoxynonane => "9-Alkoxy-1-phenoxynonane",
    NineAcyloxyOnePhenoxynonane => "9-Acyloxy-1-phenoxynonane",
    OneAminoOnePhenoxymethane => "1-Amino-1-phenoxymethane",
    OneAlkylaminoOnePhenoxymethane => "1-Alkylamino-1-phenoxymethane",
    OneAcylaminoOnePhenoxymethane => "1-Acylamino-1-phenoxymethane",
    TwoAminoOnePhenoxyethane => "2-Amino-1-phenoxyethane",
    TwoAlkylaminoOnePhenoxyethane => "2-Alkylamino-1-phenoxyethane",
    TwoAcylaminoOnePhenoxyethane => "2-Acylamino-1-phenoxyethane",
    ThreeAminoOnePhenoxypropane => "3-Amino-1-phenoxypropane",
    ThreeAlkylaminoOnePhenoxypropane => "3-Alkylamino-1-phenoxypropane",
    ThreeAcylaminoOnePhenoxypropane => "3-Acylamino-1-phenoxypropane",
    FourAminoOnePhenoxybutane => "4-Amino-1-phenoxybutane",
    FourAlkylaminoOnePhenoxybutane => "4-Alkylamino-1-phenoxybutane",
    FourAcylaminoOnePhenoxybutane => "4-Acylamino-1-phenoxybutane",
    FiveAminoOnePhenoxypentane => "5-Amino-1-phenoxypentane",
    FiveAlkylaminoOnePhenoxypentane => "5-Alkylamino-1-phenoxypentane",
    FiveAcylaminoOnePhenoxypentane => "5-Acylamino-1-phenoxypentane",
    SixAminoOnePhenoxyhexane => "6-Amino-1-phenoxyhexane",
    SixAlkylaminoOnePhenoxyhexane => "6-Alkylamino-1-phenoxyhexane",
    SixAcylaminoOnePhenoxyhexane => "6-Acylamino-1-phenoxyhexane",
    SevenAminoOnePhenoxyheptane => "7-Amino-1-phenoxyheptane",
    SevenAlkylaminoOnePhenoxyheptane => "7-Alkylamino-1-phenoxyheptane",
    SevenAcylaminoOnePhenoxyheptane => "7-Acylamino-1-phenoxyheptane",
    EightAminoOnePhenoxyoctane => "8-Amino-1-phenoxyoctane",
    EightAlkylaminoOnePhenoxyoctane => "8-Alkylamino-1-phenoxyoctane",
    EightAcylaminoOnePhenoxyoctane => "8-Acylamino-1-phenoxyoctane",
    NineAminoOnePhenoxynonane => "9-Amino-1-phenoxynonane",
    NineAlkylaminoOnePhenoxynonane => "9-Alkylamino-1-phenoxynonane",
    NineAcylaminoOnePhenoxynonane => "9-Acylamino-1-phenoxynonane",
    OneMercaptoOnePhenoxymethane => "1-Mercapto-1-phenoxymethane",
    OneAlkylthioOnePhenoxymethane => "1-Alkylthio-1-phenoxymethane",
    OneSulfonylOnePhenoxymethane => "1-Sulfonyl-1-phenoxymethane",
    TwoMercaptoOnePhenoxyethane => "2-Mercapto-1-phenoxyethane",
    TwoAlkylthioOnePhenoxyethane => "2-Alkylthio-1-phenoxyethane",
    TwoSulfonylOnePhenoxyethane => "2-Sulfonyl-1-phenoxyethane",
    ThreeMercaptoOnePhenoxypropane => "3-Mercapto-1-phenoxypropane",
    ThreeAlkylthioOnePhenoxypropane => "3-Alkylthio-1-phenoxypropane",
    ThreeSulfonylOnePhenoxypropane => "3-Sulfonyl-1-phenoxypropane",
    FourMercaptoOnePhenoxybutane => "4-Mercapto-1-phenoxybutane",
    FourAlkylthioOnePhenoxybutane => "4-Alkylthio-1-phenoxybutane",
    FourSulfonylOnePhenoxybutane => "4-Sulfonyl-1-phenoxybutane",
    FiveMercaptoOnePhenoxypentane => "5-Mercapto-1-phenoxypentane",
    FiveAlkylthioOnePhenoxypentane => "5-Alkylthio-1-phenoxypentane",
    FiveSulfonylOnePhenoxypentane => "5-Sulfonyl-1-phenoxypentane",
    SixMercaptoOnePhenoxyhexane => "6-Mercapto-1-phenoxyhexane",
    SixAlkylthioOnePhenoxyhexane => "6-Alkylthio-1-phenoxyhexane",
    SixSulfonylOnePhenoxyhexane => "6-Sulfonyl-1-phenoxyhexane",
    SevenMercaptoOnePhenoxyheptane => "7-Mercapto-1-phenoxyheptane",
    SevenAlkylthioOnePhenoxyheptane => "7-Alkylthio-1-phenoxyheptane",
    SevenSulfonylOnePhenoxyheptane => "7-Sulfonyl-1-phenoxyheptane",
    EightMercaptoOnePhenoxyoctane => "8-Mercapto-1-phenoxyoctane",
    EightAlkylthioOnePhenoxyoctane => "8-Alkylthio-1-phenoxyoctane",
    EightSulfonylOnePhenoxyoctane => "8-Sulfonyl-1-phenoxyoctane",
    NineMercaptoOnePhenoxynonane => "9-Mercapto-1-phenoxynonane",
    NineAlkylthioOnePhenoxynonane => "9-Alkylthio-1-phenoxynonane",
    NineSulfonylOnePhenoxynonane => "9-Sulfonyl-1-phenoxynonane",
    OneFluoroOnePhenoxymethane => "1-Fluoro-1-phenoxymethane",
    TwoFluoroOnePhenoxyethane => "2-Fluoro-1-phenoxyethane",
    ThreeFluoroOnePhenoxypropane => "3-Fluoro-1-phenoxypropane",
    FourFluoroOnePhenoxybutane => "4-Fluoro-1-phenoxybutane",
    FiveFluoroOnePhenoxypentane => "5-Fluoro-1-phenoxypentane",
    SixFluoroOnePhenoxyhexane => "6-Fluoro-1-phenoxyhexane",
    SevenFluoroOnePhenoxyheptane => "7-Fluoro-1-phenoxyheptane",
    EightFluoroOnePhenoxyoctane => "8-Fluoro-1-phenoxyoctane",
    NineFluoroOnePhenoxynonane => "9-Fluoro-1-phenoxynonane",
    OneChloroOnePhenoxymethane => "1-Chloro-1-phenoxymethane",
    TwoChloroOnePhenoxyethane => "2-Chloro-1-phenoxyethane",
    ThreeChloroOnePhenoxypropane => "3-Chloro-1-phenoxypropane",
    FourChloroOnePhenoxybutane => "4-Chloro-1-phenoxybutane",
    FiveChloroOnePhenoxypentane => "5-Chloro-1-phenoxypentane",
    SixChloroOnePhenoxyhexane => "6-Chloro-1-phenoxyhexane",
    SevenChloroOnePhenoxyheptane => "7-Chloro-1-phenoxyheptane",
    EightChloroOnePhenoxyoctane => "8-Chloro-1-phenoxyoctane",
    NineChloroOnePhenoxynonane => "9-Chloro-1-phenoxynonane",
    OneBromoOnePhenoxymethane => "1-Bromo-1-phenoxymethane",
    TwoBromoOnePhenoxyethane => "2-Bromo-1-phenoxyethane",
    ThreeBromoOnePhenoxypropane => "3-Bromo-1-phenoxypropane",
    FourBromoOnePhenoxybutane => "4-Bromo-1-phenoxybutane",
    FiveBromoOnePhenoxypentane => "5-Bromo-1-phenoxypentane",
    SixBromoOnePhenoxyhexane => "6-Bromo-1-phenoxyhexane",
    SevenBromoOnePhenoxyheptane => "7-Bromo-1-phenoxyheptane",
    EightBromoOnePhenoxyoctane => "8-Bromo-1-phenoxyoctane",
    NineBromoOnePhenoxynonane => "9-Bromo-1-phenoxynonane",
    OneIodoOnePhenoxymethane => "1-Iodo-1-phenoxymethane",
    TwoIodoOnePhenoxyethane => "2-Iodo-1-phenoxyethane",
    ThreeIodoOnePhenoxypropane => "3-Iodo-1-phenoxypropane",
    FourIodoOnePhenoxybutane => "4-Iodo-1-phenoxybutane",
    FiveIodoOnePhenoxypentane => "5-Iodo-1-phenoxypentane",
    SixIodoOnePhenoxyhexane => "6-Iodo-1-phenoxyhexane",
    SevenIodoOnePhenoxyheptane => "7-Iodo-1-phenoxyheptane",
    EightIodoOnePhenoxyoctane => "8-Iodo-1-phenoxyoctane",
    NineIodoOnePhenoxynonane => "9-Iodo-1-phenoxynonane",
    TwoCarboxyOnePhenylethanOneOne => "2-Carboxy-1-phenylethan-1-one",
    TwoAlkoxycarbonylOnePhenylethanOneOne => "2-Alkoxycarbonyl-1-phenylethan-1-one",
    TwoCarbamoylOnePhenylethanOneOne => "2-Carbamoyl-1-phenylethan-1-one",
    TwoFormylOnePhenylethanOneOne => "2-Formyl-1-phenylethan-1-one",
    TwoAcylOnePhenylethanOneOne => "2-Acyl-1-phenylethan-1-one",
    TwoCyanoOnePhenylethanOneOne => "2-Cyano-1-phenylethan-1-one",
    ThreeCarboxyOnePhenylpropanOneOne => "3-Carboxy-1-phenylpropan-1-one",
    ThreeAlkoxycarbonylOnePhenylpropanOneOne => "3-Alkoxycarbonyl-1-phenylpropan-1-one",
    ThreeCarbamoylOnePhenylpropanOneOne => "3-Carbamoyl-1-phenylpropan-1-one",
    ThreeFormylOnePhenylpropanOneOne => "3-Formyl-1-phenylpropan-1-one",
    ThreeAcylOnePhenylpropanOneOne => "3-Acyl-1-phenylpropan-1-one",
    ThreeCyanoOnePhenylpropanOneOne => "3-Cyano-1-phenylpropan-1-one",
    FourCarboxyOnePhenylbutanOneOne => "4-Carboxy-1-phenylbutan-1-one",
    FourAlkoxycarbonylOnePhenylbutanOneOne => "4-Alkoxycarbonyl-1-phenylbutan-1-one",
    FourCarbamoylOnePhenylbutanOneOne => "4-Carbamoyl-1-phenylbutan-1-one",
    FourFormylOnePhenylbutanOneOne => "4-Formyl-1-phenylbutan-1-one",
    FourAcylOnePhenylbutanOneOne => "4-Acyl-1-phenylbutan-1-one",
    FourCyanoOnePhenylbutanOneOne => "4-Cyano-1-phenylbutan-1-one",
    FiveCarboxyOnePhenylpentanOneOne => "5-Carboxy-1-phenylpentan-1-one",
    FiveAlkoxycarbonylOnePhenylpentanOneOne => "5-Alkoxycarbonyl-1-phenylpentan-1-one",
    FiveCarbamoylOnePhenylpentanOneOne => "5-Carbamoyl-1-phenylpentan-1-one",
    FiveFormylOnePhenylpentanOneOne => "5-Formyl-1-phenylpentan-1-one",
    FiveAcylOnePhenylpentanOneOne => "5-Acyl-1-phenylpentan-1-one",
    FiveCyanoOnePhenylpentanOneOne => "5-Cyano-1-phenylpentan-1-one",
    SixCarboxyOnePhenylhexanOneOne => "6-Carboxy-1-phenylhexan-1-one",
    SixAlkoxycarbonylOnePhenylhexanOneOne => "6-Alkoxycarbonyl-1-phenylhexan-1-one",
    SixCarbamoylOnePhenylhexanOneOne => "6-Carbamoyl-1-phenylhexan-1-one",
    SixFormylOnePhenylhexanOneOne => "6-Formyl-1-phenylhexan-1-one",
    SixAcylOnePhenylhexanOneOne => "6-Acyl-1-phenylhexan-1-one",
    SixCyanoOnePhenylhexanOneOne => "6-Cyano-1-phenylhexan-1-one",
    SevenCarboxyOnePhenylheptanOneOne => "7-Carboxy-1-phenylheptan-1-one",
    SevenAlkoxycarbonylOnePhenylheptanOneOne => "7-Alkoxycarbonyl-1-phenylheptan-1-one",
    SevenCarbamoylOnePhenylheptanOneOne => "7-Carbamoyl-1-phenylheptan-1-one",
    SevenFormylOnePhenylheptanOneOne => "7-Formyl-1-phenylheptan-1-one",
    SevenAcylOnePhenylheptanOneOne => "7-Acyl-1-phenylheptan-1-one",
    SevenCyanoOnePhenylheptanOneOne => "7-Cyano-1-phenylheptan-1-one",
    EightCarboxyOnePhenyloctanOneOne => "8-Carboxy-1-phenyloctan-1-one",
    EightAlkoxycarbonylOnePhenyloctanOneOne => "8-Alkoxycarbonyl-1-phenyloctan-1-one",
    EightCarbamoylOnePhenyloctanOneOne => "8-Carbamoyl-1-phenyloctan-1-one",
    EightFormylOnePhenyloctanOneOne => "8-Formyl-1-phenyloctan-1-one",
    EightAcylOnePhenyloctanOneOne => "8-Acyl-1-phenyloctan-1-one",
    EightCyanoOnePhenyloctanOneOne => "8-Cyano-1-phenyloctan-1-one",
    NineCarboxyOnePhenylnonanOneOne => "9-Carboxy-1-phenylnonan-1-one",
    NineAlkoxycarbonylOnePhenylnonanOneOne => "9-Alkoxycarbonyl-1-phenylnonan-1-one",
    NineCarbamoylOnePhenylnonanOneOne => "9-Carbamoyl-1-phenylnonan-1-one",
    NineFormylOnePhenylnonanOneOne => "9-Formyl-1-phenylnonan-1-one",
    NineAcylOnePhenylnonanOneOne => "9-Acyl-1-phenylnonan-1-one",
    NineCyanoOnePhenylnonanOneOne => "9-Cyano-1-phenylnonan-1-one",
    TenCarboxyOnePhenyldecanOneOne => "10-Carboxy-1-phenyldecan-1-one",
    TenAlkoxycarbonylOnePhenyldecanOneOne => "10-Alkoxycarbonyl-1-phenyldecan-1-one",
    TenCarbamoylOnePhenyldecanOneOne => "10-Carbamoyl-1-phenyldecan-1-one",
    TenFormylOnePhenyldecanOneOne => "10-Formyl-1-phenyldecan-1-one",
    TenAcylOnePhenyldecanOneOne => "10-Acyl-1-phenyldecan-1-one",
    TenCyanoOnePhenyldecanOneOne => "10-Cyano-1-phenyldecan-1-one",
    TwoHydroxyOnePhenylethanOneOne => "2-Hydroxy-1-phenylethan-1-one",
    TwoMethoxyOnePhenylethanOneOne => "2-Methoxy-1-phenylethan-1-one",
    TwoAlkoxyOnePhenylethanOneOne => "2-Alkoxy-1-phenylethan-1-one",
    TwoAcyloxyOnePhenylethanOneOne => "2-Acyloxy-1-phenylethan-1-one",
    ThreeHydroxyOnePhenylpropanOneOne => "3-Hydroxy-1-phenylpropan-1-one",
    ThreeMethoxyOnePhenylpropanOneOne => "3-Methoxy-1-phenylpropan-1-one",
    ThreeAlkoxyOnePhenylpropanOneOne => "3-Alkoxy-1-phenylpropan-1-one",
    ThreeAcyloxyOnePhenylpropanOneOne => "3-Acyloxy-1-phenylpropan-1-one",
    FourHydroxyOnePhenylbutanOneOne => "4-Hydroxy-1-phenylbutan-1-one",
    FourMethoxyOnePhenylbutanOneOne => "4-Methoxy-1-phenylbutan-1-one",
    FourAlkoxyOnePhenylbutanOneOne => "4-Alkoxy-1-phenylbutan-1-one",
    FourAcyloxyOnePhenylbutanOneOne => "4-Acyloxy-1-phenylbutan-1-one",
    FiveHydroxyOnePhenylpentanOneOne => "5-Hydroxy-1-phenylpentan-1-one",
    FiveMethoxyOnePhenylpentanOneOne => "5-Methoxy-1-phenylpentan-1-one",
    FiveAlkoxyOnePhenylpentanOneOne => "5-Alkoxy-1-phenylpentan-1-one",
    FiveAcyloxyOnePhenylpentanOneOne => "5-Acyloxy-1-phenylpentan-1-one",
    SixHydroxyOnePhenylhexanOneOne => "6-Hydroxy-1-phenylhexan-1-one",
    SixMethoxyOnePhenylhexanOneOne => "6-Methoxy-1-phenylhexan-1-one",
    SixAlkoxyOnePhenylhexanOneOne => "6-Alkoxy-1-phenylhexan-1-one",
    SixAcyloxyOnePhenylhexanOneOne => "6-Acyloxy-1-phenylhexan-1-one",
    SevenHydroxyOnePhenylheptanOneOne => "7-Hydroxy-1-phenylheptan-1-one",
    SevenMethoxyOnePhenylheptanOneOne => "7-Methoxy-1-phenylheptan-1-one",
    SevenAlkoxyOnePhenylheptanOneOne => "7-Alkoxy-1-phenylheptan-1-one",
    SevenAcyloxyOnePhenylheptanOneOne => "7-Acyloxy-1-phenylheptan-1-one",
    EightHydroxyOnePhenyloctanOneOne => "8-Hydroxy-1-phenyloctan-1-one",
    EightMethoxyOnePhenyloctanOneOne => "8-Methoxy-1-phenyloctan-1-one",
    EightAlkoxyOnePhenyloctanOneOne => "8-Alkoxy-1-phenyloctan-1-one",
    EightAcyloxyOnePhenyloctanOneOne => "8-Acyloxy-1-phenyloctan-1-one",
    NineHydroxyOnePhenylnonanOneOne => "9-Hydroxy-1-phenylnonan-1-one",
    NineMethoxyOnePhenylnonanOneOne => "9-Methoxy-1-phenylnonan-1-one",
    NineAlkoxyOnePhenylnonanOneOne => "9-Alkoxy-1-phenylnonan-1-one",
    NineAcyloxyOnePhenylnonanOneOne => "9-Acyloxy-1-phenylnonan-1-one",
    TenHydroxyOnePhenyldecanOneOne => "10-Hydroxy-1-phenyldecan-1-one",
    TenMethoxyOnePhenyldecanOneOne => "10-Methoxy-1-phenyldecan-1-one",
    TenAlkoxyOnePhenyldecanOneOne => "10-Alkoxy-1-phenyldecan-1-one",
    TenAcyloxyOnePhenyldecanOneOne => "10-Acyloxy-1-phenyldecan-1-one",
    TwoAminoOnePhenylethanOneOne => "2-Amino-1-phenylethan-1-one",
    TwoAlkylaminoOnePhenylethanOneOne => "2-Alkylamino-1-phenylethan-1-one",
    TwoAcylaminoOnePhenylethanOneOne => "2-Acylamino-1-phenylethan-1-one",
    ThreeAminoOnePhenylpropanOneOne => "3-Amino-1-phenylpropan-1-one",
    ThreeAlkylaminoOnePhenylpropanOneOne => "3-Alkylamino-1-phenylpropan-1-one",
    ThreeAcylaminoOnePhenylpropanOneOne => "3-Acylamino-1-phenylpropan-1-one",
    FourAminoOnePhenylbutanOneOne => "4-Amino-1-phenylbutan-1-one",
    FourAlkylaminoOnePhenylbutanOneOne => "4-Alkylamino-1-phenylbutan-1-one",
    FourAcylaminoOnePhenylbutanOneOne => "4-Acylamino-1-phenylbutan-1-one",
    FiveAminoOnePhenylpentanOneOne => "5-Amino-1-phenylpentan-1-one",
    FiveAlkylaminoOnePhenylpentanOneOne => "5-Alkylamino-1-phenylpentan-1-one",
    FiveAcylaminoOnePhenylpentanOneOne => "5-Acylamino-1-phenylpentan-1-one",
    SixAminoOnePhenylhexanOneOne => "6-Amino-1-phenylhexan-1-one",
    SixAlkylaminoOnePhenylhexanOneOne => "6-Alkylamino-1-phenylhexan-1-one",
    SixAcylaminoOnePhenylhexanOneOne => "6-Acylamino-1-phenylhexan-1-one",
    SevenAminoOnePhenylheptanOneOne => "7-Amino-1-phenylheptan-1-one",
    SevenAlkylaminoOnePhenylheptanOneOne => "7-Alkylamino-1-phenylheptan-1-one",
    SevenAcylaminoOnePhenylheptanOneOne => "7-Acylamino-1-phenylheptan-1-one",
    EightAminoOnePhenyloctanOneOne => "8-Amino-1-phenyloctan-1-one",
    EightAlkylaminoOnePhenyloctanOneOne => "8-Alkylamino-1-phenyloctan-1-one",
    EightAcylaminoOnePhenyloctanOneOne => "8-Acylamino-1-phenyloctan-1-one",
    NineAminoOnePhenylnonanOneOne => "9-Amino-1-phenylnonan-1-one",
    NineAlkylaminoOnePhenylnonanOneOne => "9-Alkylamino-1-phenylnonan-1-one",
    NineAcylaminoOnePhenylnonanOneOne => "9-Acylamino-1-phenylnonan-1-one",
    TenAminoOnePhenyldecanOneOne => "10-Amino-1-phenyldecan-1-one",
    TenAlkylaminoOnePhenyldecanOneOne => "10-Alkylamino-1-phenyldecan-1-one",
    TenAcylaminoOnePhenyldecanOneOne => "10-Acylamino-1-phenyldecan-1-one",
    TwoMercaptoOnePhenylethanOneOne => "2-Mercapto-1-phenylethan-1-one",
    TwoAlkylthioOnePhenylethanOneOne => "2-Alkylthio-1-phenylethan-1-one",
    TwoSulfonylOnePhenylethanOneOne => "2-Sulfonyl-1-phenylethan-1-one",
    ThreeMercaptoOnePhenylpropanOneOne => "3-Mercapto-1-phenylpropan-1-one",
    ThreeAlkylthioOnePhenylpropanOneOne => "3-Alkylthio-1-phenylpropan-1-one",
    ThreeSulfonylOnePhenylpropanOneOne => "3-Sulfonyl-1-phenylpropan-1-one",
    FourMercaptoOnePhenylbutanOneOne => "4-Mercapto-1-phenylbutan-1-one",
    FourAlkylthioOnePhenylbutanOneOne => "4-Alkylthio-1-phenylbutan-1-one",
    FourSulfonylOnePhenylbutanOneOne => "4-Sulfonyl-1-phenylbutan-1-one",
    FiveMercaptoOnePhenylpentanOneOne => "5-Mercapto-1-phenylpentan-1-one",
    FiveAlkylthioOnePhenylpentanOneOne => "5-Alkylthio-1-phenylpentan-1-one",
    FiveSulfonylOnePhenylpentanOneOne => "5-Sulfonyl-1-phenylpentan-1-one",
    SixMercaptoOnePhenylhexanOneOne => "6-Mercapto-1-phenylhexan-1-one",
    SixAlkylthioOnePhenylhexanOneOne => "6-Alkylthio-1-phenylhexan-1-one",
    SixSulfonylOnePhenylhexanOneOne => "6-Sulfonyl-1-phenylhexan-1-one",
    SevenMercaptoOnePhenylheptanOneOne => "7-Mercapto-1-phenylheptan-1-one",
    SevenAlkylthioOnePhenylheptanOneOne => "7-Alkylthio-1-phenylheptan-1-one",
    SevenSulfonylOnePhenylheptanOneOne => "7-Sulfonyl-1-phenylheptan-1-one",
    EightMercaptoOnePhenyloctanOneOne => "8-Mercapto-1-phenyloctan-1-one",
    EightAlkylthioOnePhenyloctanOneOne => "8-Alkylthio-1-phenyloctan-1-one",
    EightSulfonylOnePhenyloctanOneOne => "8-Sulfonyl-1-phenyloctan-1-one",
    NineMercaptoOnePhenylnonanOneOne => "9-Mercapto-1-phenylnonan-1-one",
    NineAlkylthioOnePhenylnonanOneOne => "9-Alkylthio-1-phenylnonan-1-one",
    NineSulfonylOnePhenylnonanOneOne => "9-Sulfonyl-1-phenylnonan-1-one",
    TenMercaptoOnePhenyldecanOneOne => "10-Mercapto-1-phenyldecan-1-one",
    TenAlkylthioOnePhenyldecanOneOne => "10-Alkylthio-1-phenyldecan-1-one",
    TenSulfonylOnePhenyldecanOneOne => "10-Sulfonyl-1-phenyldecan-1-one",
    TwoFluoroOnePhenylethanOneOne => "2-Fluoro-1-phenylethan-1-one",
    ThreeFluoroOnePhenylpropanOneOne => "3-Fluoro-1-phenylpropan-1-one",
    FourFluoroOnePhenylbutanOneOne => "4-Fluoro-1-phenylbutan-1-one",
    FiveFluoroOnePhenylpentanOneOne => "5-Fluoro-1-phenylpentan-1-one",
    SixFluoroOnePhenylhexanOneOne => "6-Fluoro-1-phenylhexan-1-one",
    SevenFluoroOnePhenylheptanOneOne => "7-Fluoro-1-phenylheptan-1-one",
    EightFluoroOnePhenyloctanOneOne => "8-Fluoro-1-phenyloctan-1-one",
    NineFluoroOnePhenylnonanOneOne => "9-Fluoro-1-phenylnonan-1-one",
    TenFluoroOnePhenyldecanOneOne => "10-Fluoro-1-phenyldecan-1-one",
    TwoChloroOnePhenylethanOneOne => "2-Chloro-1-phenylethan-1-one",
    ThreeChloroOnePhenylpropanOneOne => "3-Chloro-1-phenylpropan-1-one",
    FourChloroOnePhenylbutanOneOne => "4-Chloro-1-phenylbutan-1-one",
    FiveChloroOnePhenylpentanOneOne => "5-Chloro-1-phenylpentan-1-one",
    SixChloroOnePhenylhexanOneOne => "6-Chloro-1-phenylhexan-1-one",
    SevenChloroOnePhenylheptanOneOne => "7-Chloro-1-phenylheptan-1-one",
    EightChloroOnePhenyloctanOneOne => "8-Chloro-1-phenyloctan-1-one",
    NineChloroOnePhenylnonanOneOne => "9-Chloro-1-phenylnonan-1-one",
    TenChloroOnePhenyldecanOneOne => "10-Chloro-1-phenyldecan-1-one",
    TwoBromoOnePhenylethanOneOne => "2-Bromo-1-phenylethan-1-one",
    ThreeBromoOnePhenylpropanOneOne => "3-Bromo-1-phenylpropan-1-one",
    FourBromoOnePhenylbutanOneOne => "4-Bromo-1-phenylbutan-1-one",
    FiveBromoOnePhenylpentanOneOne => "5-Bromo-1-phenylpentan-1-one",
    SixBromoOnePhenylhexanOneOne => "6-Bromo-1-phenylhexan-1-one",
    SevenBromoOnePhenylheptanOneOne => "7-Bromo-1-phenylheptan-1-one",
    EightBromoOnePhenyloctanOneOne => "8-Bromo-1-phenyloctan-1-one",
    NineBromoOnePhenylnonanOneOne => "9-Bromo-1-phenylnonan-1-one",
    TenBromoOnePhenyldecanOneOne => "10-Bromo-1-phenyldecan-1-one",
    TwoIodoOnePhenylethanOneOne => "2-Iodo-1-phenylethan-1-one",
    ThreeIodoOnePhenylpropanOneOne => "3-Iodo-1-phenylpropan-1-one",
    FourIodoOnePhenylbutanOneOne => "4-Iodo-1-phenylbutan-1-one",
    FiveIodoOnePhenylpentanOneOne => "5-Iodo-1-phenylpentan-1-one",
    SixIodoOnePhenylhexanOneOne => "6-Iodo-1-phenylhexan-1-one",
    SevenIodoOnePhenylheptanOneOne => "7-Iodo-1-phenylheptan-1-one",
    EightIodoOnePhenyloctanOneOne => "8-Iodo-1-phenyloctan-1-one",
    NineIodoOnePhenylnonanOneOne => "9-Iodo-1-phenylnonan-1-one",
    TenIodoOnePhenyldecanOneOne => "10-Iodo-1-phenyldecan-1-one",
    // heteroaromatic substitution and tethered side chains
    TwoMethylpyridine => "2-Methylpyridine",
    TwoHydroxymethylpyridine => "2-Hydroxymethylpyridine",
    TwoTrifluoromethylpyridine => "2-Trifluoromethylpyridine",
    TwoCarboxypyridine => "2-Carboxypyridine",
    TwoAlkoxycarbonylpyridine => "2-Alkoxycarbonylpyridine",
    TwoCarbamoylpyridine => "2-Carbamoylpyridine",
    TwoFormylpyridine => "2-Formylpyridine",
    TwoAcylpyridine => "2-Acylpyridine",
    TwoCyanopyridine => "2-Cyanopyridine",
    TwoVinylpyridine => "2-Vinylpyridine",
    TwoAlkylpyridine => "2-Alkylpyridine",
    TwoMethylpyrrole => "2-Methylpyrrole",
    TwoHydroxymethylpyrrole => "2-Hydroxymethylpyrrole",
    TwoTrifluoromethylpyrrole => "2-Trifluoromethylpyrrole",
    TwoCarboxypyrrole => "2-Carboxypyrrole",
    TwoAlkoxycarbonylpyrrole => "2-Alkoxycarbonylpyrrole",
    TwoCarbamoylpyrrole => "2-Carbamoylpyrrole",
    TwoFormylpyrrole => "2-Formylpyrrole",
    TwoAcylpyrrole => "2-Acylpyrrole",
    TwoCyanopyrrole => "2-Cyanopyrrole",
    TwoVinylpyrrole => "2-Vinylpyrrole",
    TwoAlkylpyrrole => "2-Alkylpyrrole",
    ThreeMethylpyridine => "3-Methylpyridine",
    ThreeHydroxymethylpyridine => "3-Hydroxymethylpyridine",
    ThreeTrifluoromethylpyridine => "3-Trifluoromethylpyridine",
    ThreeCarboxypyridine => "3-Carboxypyridine",
    ThreeAlkoxycarbonylpyridine => "3-Alkoxycarbonylpyridine",
    ThreeCarbamoylpyridine => "3-Carbamoylpyridine",
    ThreeFormylpyridine => "3-Formylpyridine",
    ThreeAcylpyridine => "3-Acylpyridine",
    ThreeCyanopyridine => "3-Cyanopyridine",
    ThreeVinylpyridine => "3-Vinylpyridine",
    ThreeAlkylpyridine => "3-Alkylpyridine",
    ThreeMethylpyrrole => "3-Methylpyrrole",
    ThreeHydroxymethylpyrrole => "3-Hydroxymethylpyrrole",
    ThreeTrifluoromethylpyrrole => "3-Trifluoromethylpyrrole",
    ThreeCarboxypyrrole => "3-Carboxypyrrole",
    ThreeAlkoxycarbonylpyrrole => "3-Alkoxycarbonylpyrrole",
    ThreeCarbamoylpyrrole => "3-Carbamoylpyrrole",
    ThreeFormylpyrrole => "3-Formylpyrrole",
    ThreeAcylpyrrole => "3-Acylpyrrole",
    ThreeCyanopyrrole => "3-Cyanopyrrole",
    ThreeVinylpyrrole => "3-Vinylpyrrole",
    ThreeAlkylpyrrole => "3-Alkylpyrrole",
    FourMethylpyridine => "4-Methylpyridine",
    FourHydroxymethylpyridine => "4-Hydroxymethylpyridine",
    FourTrifluoromethylpyridine => "4-Trifluoromethylpyridine",
    FourCarboxypyridine => "4-Carboxypyridine",
    FourAlkoxycarbonylpyridine => "4-Alkoxycarbonylpyridine",
    FourCarbamoylpyridine => "4-Carbamoylpyridine",
    FourFormylpyridine => "4-Formylpyridine",
    FourAcylpyridine => "4-Acylpyridine",
    FourCyanopyridine => "4-Cyanopyridine",
    FourVinylpyridine => "4-Vinylpyridine",
    FourAlkylpyridine => "4-Alkylpyridine",
    TwoMethylfuran => "2-Methylfuran",
    TwoHydroxymethylfuran => "2-Hydroxymethylfuran",
    TwoTrifluoromethylfuran => "2-Trifluoromethylfuran",
    TwoCarboxyfuran => "2-Carboxyfuran",
    TwoAlkoxycarbonylfuran => "2-Alkoxycarbonylfuran",
    TwoCarbamoylfuran => "2-Carbamoylfuran",
    TwoFormylfuran => "2-Formylfuran",
    TwoAcylfuran => "2-Acylfuran",
    TwoCyanofuran => "2-Cyanofuran",
    TwoVinylfuran => "2-Vinylfuran",
    TwoAlkylfuran => "2-Alkylfuran",
    ThreeMethylfuran => "3-Methylfuran",
    ThreeHydroxymethylfuran => "3-Hydroxymethylfuran",
    ThreeTrifluoromethylfuran => "3-Trifluoromethylfuran",
    ThreeCarboxyfuran => "3-Carboxyfuran",
    ThreeAlkoxycarbonylfuran => "3-Alkoxycarbonylfuran",
    ThreeCarbamoylfuran => "3-Carbamoylfuran",
    ThreeFormylfuran => "3-Formylfuran",
    ThreeAcylfuran => "3-Acylfuran",
    ThreeCyanofuran => "3-Cyanofuran",
    ThreeVinylfuran => "3-Vinylfuran",
    ThreeAlkylfuran => "3-Alkylfuran",
    TwoMethylthiophene => "2-Methylthiophene",
    TwoHydroxymethylthiophene => "2-Hydroxymethylthiophene",
    TwoTrifluoromethylthiophene => "2-Trifluoromethylthiophene",
    TwoCarboxythiophene => "2-Carboxythiophene",
    TwoAlkoxycarbonylthiophene => "2-Alkoxycarbonylthiophene",
    TwoCarbamoylthiophene => "2-Carbamoylthiophene",
    TwoFormylthiophene => "2-Formylthiophene",
    TwoAcylthiophene => "2-Acylthiophene",
    TwoCyanothiophene => "2-Cyanothiophene",
    TwoVinylthiophene => "2-Vinylthiophene",
    TwoAlkylthiophene => "2-Alkylthiophene",
    ThreeMethylthiophene => "3-Methylthiophene",
    ThreeHydroxymethylthiophene => "3-Hydroxymethylthiophene",
    ThreeTrifluoromethylthiophene => "3-Trifluoromethylthiophene",
    ThreeCarboxythiophene => "3-Carboxythiophene",
    ThreeAlkoxycarbonylthiophene => "3-Alkoxycarbonylthiophene",
    ThreeCarbamoylthiophene => "3-Carbamoylthiophene",
    ThreeFormylthiophene => "3-Formylthiophene",
    ThreeAcylthiophene => "3-Acylthiophene",
    ThreeCyanothiophene => "3-Cyanothiophene",
    ThreeVinylthiophene => "3-Vinylthiophene",
    ThreeAlkylthiophene => "3-Alkylthiophene",
    TwoHydroxypyridine => "2-Hydroxypyridine",
    TwoMethoxypyridine => "2-Methoxypyridine",
    TwoAlkoxypyridine => "2-Alkoxypyridine",
    TwoAcyloxypyridine => "2-Acyloxypyridine",
    TwoHydroxypyrrole => "2-Hydroxypyrrole",
    TwoMethoxypyrrole => "2-Methoxypyrrole",
    TwoAlkoxypyrrole => "2-Alkoxypyrrole",
    TwoAcyloxypyrrole => "2-Acyloxypyrrole",
    ThreeHydroxypyridine => "3-Hydroxypyridine",
    ThreeMethoxypyridine => "3-Methoxypyridine",
    ThreeAlkoxypyridine => "3-Alkoxypyridine",
    ThreeAcyloxypyridine => "3-Acyloxypyridine",
    ThreeHydroxypyrrole => "3-Hydroxypyrrole",
    ThreeMethoxypyrrole => "3-Methoxypyrrole",
    ThreeAlkoxypyrrole => "3-Alkoxypyrrole",
    ThreeAcyloxypyrrole => "3-Acyloxypyrrole",
    FourHydroxypyridine => "4-Hydroxypyridine",
    FourMethoxypyridine => "4-Methoxypyridine",
    FourAlkoxypyridine => "4-Alkoxypyridine",
    FourAcyloxypyridine => "4-Acyloxypyridine",
    TwoHydroxyfuran => "2-Hydroxyfuran",
    TwoMethoxyfuran => "2-Methoxyfuran",
    TwoAlkoxyfuran => "2-Alkoxyfuran",
    TwoAcyloxyfuran => "2-Acyloxyfuran",
    ThreeHydroxyfuran => "3-Hydroxyfuran",
    ThreeMethoxyfuran => "3-Methoxyfuran",
    ThreeAlkoxyfuran => "3-Alkoxyfuran",
    ThreeAcyloxyfuran => "3-Acyloxyfuran",
    TwoHydroxythiophene => "2-Hydroxythiophene",
    TwoMethoxythiophene => "2-Methoxythiophene",
    TwoAlkoxythiophene => "2-Alkoxythiophene",
    TwoAcyloxythiophene => "2-Acyloxythiophene",
    ThreeHydroxythiophene => "3-Hydroxythiophene",
    ThreeMethoxythiophene => "3-Methoxythiophene",
    ThreeAlkoxythiophene => "3-Alkoxythiophene",
    ThreeAcyloxythiophene => "3-Acyloxythiophene",
    TwoAminopyridine => "2-Aminopyridine",
    TwoAlkylaminopyridine => "2-Alkylaminopyridine",
    TwoAcylaminopyridine => "2-Acylaminopyridine",
    TwoNitropyridine => "2-Nitropyridine",
    TwoAminopyrrole => "2-Aminopyrrole",
    TwoAlkylaminopyrrole => "2-Alkylaminopyrrole",
    TwoAcylaminopyrrole => "2-Acylaminopyrrole",
    TwoNitropyrrole => "2-Nitropyrrole",
    ThreeAminopyridine => "3-Aminopyridine",
    ThreeAlkylaminopyridine => "3-Alkylaminopyridine",
    ThreeAcylaminopyridine => "3-Acylaminopyridine",
    ThreeNitropyridine => "3-Nitropyridine",
    ThreeAminopyrrole => "3-Aminopyrrole",
    ThreeAlkylaminopyrrole => "3-Alkylaminopyrrole",
    ThreeAcylaminopyrrole => "3-Acylaminopyrrole",
    ThreeNitropyrrole => "3-Nitropyrrole",
    FourAminopyridine => "4-Aminopyridine",
    FourAlkylaminopyridine => "4-Alkylaminopyridine",
    FourAcylaminopyridine => "4-Acylaminopyridine",
    FourNitropyridine => "4-Nitropyridine",
    TwoAminofuran => "2-Aminofuran",
    TwoAlkylaminofuran => "2-Alkylaminofuran",
    TwoAcylaminofuran => "2-Acylaminofuran",
    TwoNitrofuran => "2-Nitrofuran",
    ThreeAminofuran => "3-Aminofuran",
    ThreeAlkylaminofuran => "3-Alkylaminofuran",
    ThreeAcylaminofuran => "3-Acylaminofuran",
    ThreeNitrofuran => "3-Nitrofuran",
    TwoAminothiophene => "2-Aminothiophene",
    TwoAlkylaminothiophene => "2-Alkylaminothiophene",
    TwoAcylaminothiophene => "2-Acylaminothiophene",
    TwoNitrothiophene => "2-Nitrothiophene",
    ThreeAminothiophene => "3-Aminothiophene",
    ThreeAlkylaminothiophene => "3-Alkylaminothiophene",
    ThreeAcylaminothiophene => "3-Acylaminothiophene",
    ThreeNitrothiophene => "3-Nitrothiophene",
    TwoMercaptopyridine => "2-Mercaptopyridine",
    TwoAlkylthiopyridine => "2-Alkylthiopyridine",
    TwoSulfonylpyridine => "2-Sulfonylpyridine",
    TwoMercaptopyrrole => "2-Mercaptopyrrole",
    TwoAlkylthiopyrrole => "2-Alkylthiopyrrole",
    TwoSulfonylpyrrole => "2-Sulfonylpyrrole",
    ThreeMercaptopyridine => "3-Mercaptopyridine",
    ThreeAlkylthiopyridine => "3-Alkylthiopyridine",
    ThreeSulfonylpyridine => "3-Sulfonylpyridine",
    ThreeMercaptopyrrole => "3-Mercaptopyrrole",
    ThreeAlkylthiopyrrole => "3-Alkylthiopyrrole",
    ThreeSulfonylpyrrole => "3-Sulfonylpyrrole",
    FourMercaptopyridine => "4-Mercaptopyridine",
    FourAlkylthiopyridine => "4-Alkylthiopyridine",
    FourSulfonylpyridine => "4-Sulfonylpyridine",
    TwoMercaptofuran => "2-Mercaptofuran",
    TwoAlkylthiofuran => "2-Alkylthiofuran",
    TwoSulfonylfuran => "2-Sulfonylfuran",
    ThreeMercaptofuran => "3-Mercaptofuran",
    ThreeAlkylthiofuran => "3-Alkylthiofuran",
    ThreeSulfonylfuran => "3-Sulfonylfuran",
    TwoMercaptothiophene => "2-Mercaptothiophene",
    TwoAlkylthiothiophene => "2-Alkylthiothiophene",
    TwoSulfonylthiophene => "2-Sulfonylthiophene",
    ThreeMercaptothiophene => "3-Mercaptothiophene",
    ThreeAlkylthiothiophene => "3-Alkylthiothiophene",
    ThreeSulfonylthiophene => "3-Sulfonylthiophene",
    TwoFluoropyridine => "2-Fluoropyridine",
    TwoFluoropyrrole => "2-Fluoropyrrole",
    ThreeFluoropyridine => "3-Fluoropyridine",
    ThreeFluoropyrrole => "3-Fluoropyrrole",
    FourFluoropyridine => "4-Fluoropyridine",
    TwoFluorofuran => "2-Fluorofuran",
    ThreeFluorofuran => "3-Fluorofuran",
    TwoFluorothiophene => "2-Fluorothiophene",
    ThreeFluorothiophene => "3-Fluorothiophene",
    TwoChloropyridine => "2-Chloropyridine",
    TwoChloropyrrole => "2-Chloropyrrole",
    ThreeChloropyridine => "3-Chloropyridine",
    ThreeChloropyrrole => "3-Chloropyrrole",
    FourChloropyridine => "4-Chloropyridine",
    TwoChlorofuran => "2-Chlorofuran",
    ThreeChlorofuran => "3-Chlorofuran",
    TwoChlorothiophene => "2-Chlorothiophene",
    ThreeChlorothiophene => "3-Chlorothiophene",
    TwoBromopyridine => "2-Bromopyridine",
    TwoBromopyrrole => "2-Bromopyrrole",
    ThreeBromopyridine => "3-Bromopyridine",
    ThreeBromopyrrole => "3-Bromopyrrole",
    FourBromopyridine => "4-Bromopyridine",
    TwoBromofuran => "2-Bromofuran",
    ThreeBromofuran => "3-Bromofuran",
    TwoBromothiophene => "2-Bromothiophene",
    ThreeBromothiophene => "3-Bromothiophene",
    TwoIodopyridine => "2-Iodopyridine",
    TwoIodopyrrole => "2-Iodopyrrole",
    ThreeIodopyridine => "3-Iodopyridine",
    ThreeIodopyrrole => "3-Iodopyrrole",
    FourIodopyridine => "4-Iodopyridine",
    TwoIodofuran => "2-Iodofuran",
    ThreeIodofuran => "3-Iodofuran",
    TwoIodothiophene => "2-Iodothiophene",
    ThreeIodothiophene => "3-Iodothiophene",
    OneCarboxyOnePyridinTwoYlMethane => "1-Carboxy-1-(pyridin-2-yl)methane",
    OneAlkoxycarbonylOnePyridinTwoYlMethane => "1-Alkoxycarbonyl-1-(pyridin-2-yl)methane",
    OneCarbamoylOnePyridinTwoYlMethane => "1-Carbamoyl-1-(pyridin-2-yl)methane",
    OneFormylOnePyridinTwoYlMethane => "1-Formyl-1-(pyridin-2-yl)methane",
    OneAcylOnePyridinTwoYlMethane => "1-Acyl-1-(pyridin-2-yl)methane",
    OneCyanoOnePyridinTwoYlMethane => "1-Cyano-1-(pyridin-2-yl)methane",
    TwoCarboxyOnePyridinTwoYlEthane => "2-Carboxy-1-(pyridin-2-yl)ethane",
    TwoAlkoxycarbonylOnePyridinTwoYlEthane => "2-Alkoxycarbonyl-1-(pyridin-2-yl)ethane",
    TwoCarbamoylOnePyridinTwoYlEthane => "2-Carbamoyl-1-(pyridin-2-yl)ethane",
    TwoFormylOnePyridinTwoYlEthane => "2-Formyl-1-(pyridin-2-yl)ethane",
    TwoAcylOnePyridinTwoYlEthane => "2-Acyl-1-(pyridin-2-yl)ethane",
    TwoCyanoOnePyridinTwoYlEthane => "2-Cyano-1-(pyridin-2-yl)ethane",
    ThreeCarboxyOnePyridinTwoYlPropane => "3-Carboxy-1-(pyridin-2-yl)propane",
    ThreeAlkoxycarbonylOnePyridinTwoYlPropane => "3-Alkoxycarbonyl-1-(pyridin-2-yl)propane",
    ThreeCarbamoylOnePyridinTwoYlPropane => "3-Carbamoyl-1-(pyridin-2-yl)propane",
    ThreeFormylOnePyridinTwoYlPropane => "3-Formyl-1-(pyridin-2-yl)propane",
    ThreeAcylOnePyridinTwoYlPropane => "3-Acyl-1-(pyridin-2-yl)propane",
    ThreeCyanoOnePyridinTwoYlPropane => "3-Cyano-1-(pyridin-2-yl)propane",
    FourCarboxyOnePyridinTwoYlButane => "4-Carboxy-1-(pyridin-2-yl)butane",
    FourAlkoxycarbonylOnePyridinTwoYlButane => "4-Alkoxycarbonyl-1-(pyridin-2-yl)butane",
    FourCarbamoylOnePyridinTwoYlButane => "4-Carbamoyl-1-(pyridin-2-yl)butane",
    FourFormylOnePyridinTwoYlButane => "4-Formyl-1-(pyridin-2-yl)butane",
    FourAcylOnePyridinTwoYlButane => "4-Acyl-1-(pyridin-2-yl)butane",
    FourCyanoOnePyridinTwoYlButane => "4-Cyano-1-(pyridin-2-yl)butane",
    FiveCarboxyOnePyridinTwoYlPentane => "5-Carboxy-1-(pyridin-2-yl)pentane",
    FiveAlkoxycarbonylOnePyridinTwoYlPentane => "5-Alkoxycarbonyl-1-(pyridin-2-yl)pentane",
    FiveCarbamoylOnePyridinTwoYlPentane => "5-Carbamoyl-1-(pyridin-2-yl)pentane",
    FiveFormylOnePyridinTwoYlPentane => "5-Formyl-1-(pyridin-2-yl)pentane",
    FiveAcylOnePyridinTwoYlPentane => "5-Acyl-1-(pyridin-2-yl)pentane",
    FiveCyanoOnePyridinTwoYlPentane => "5-Cyano-1-(pyridin-2-yl)pentane",
    SixCarboxyOnePyridinTwoYlHexane => "6-Carboxy-1-(pyridin-2-yl)hexane",
    SixAlkoxycarbonylOnePyridinTwoYlHexane => "6-Alkoxycarbonyl-1-(pyridin-2-yl)hexane",
    SixCarbamoylOnePyridinTwoYlHexane => "6-Carbamoyl-1-(pyridin-2-yl)hexane",
    SixFormylOnePyridinTwoYlHexane => "6-Formyl-1-(pyridin-2-yl)hexane",
    SixAcylOnePyridinTwoYlHexane => "6-Acyl-1-(pyridin-2-yl)hexane",
    SixCyanoOnePyridinTwoYlHexane => "6-Cyano-1-(pyridin-2-yl)hexane",
    SevenCarboxyOnePyridinTwoYlHeptane => "7-Carboxy-1-(pyridin-2-yl)heptane",
    SevenAlkoxycarbonylOnePyridinTwoYlHeptane => "7-Alkoxycarbonyl-1-(pyridin-2-yl)heptane",
    SevenCarbamoylOnePyridinTwoYlHeptane => "7-Carbamoyl-1-(pyridin-2-yl)heptane",
    SevenFormylOnePyridinTwoYlHeptane => "7-Formyl-1-(pyridin-2-yl)heptane",
    SevenAcylOnePyridinTwoYlHeptane => "7-Acyl-1-(pyridin-2-yl)heptane",
    SevenCyanoOnePyridinTwoYlHeptane => "7-Cyano-1-(pyridin-2-yl)heptane",
    EightCarboxyOnePyridinTwoYlOctane => "8-Carboxy-1-(pyridin-2-yl)octane",
    EightAlkoxycarbonylOnePyridinTwoYlOctane => "8-Alkoxycarbonyl-1-(pyridin-2-yl)octane",
    EightCarbamoylOnePyridinTwoYlOctane => "8-Carbamoyl-1-(pyridin-2-yl)octane",
    EightFormylOnePyridinTwoYlOctane => "8-Formyl-1-(pyridin-2-yl)octane",
    EightAcylOnePyridinTwoYlOctane => "8-Acyl-1-(pyridin-2-yl)octane",
    EightCyanoOnePyridinTwoYlOctane => "8-Cyano-1-(pyridin-2-yl)octane",
    NineCarboxyOnePyridinTwoYlNonane => "9-Carboxy-1-(pyridin-2-yl)nonane",
    NineAlkoxycarbonylOnePyridinTwoYlNonane => "9-Alkoxycarbonyl-1-(pyridin-2-yl)nonane",
    NineCarbamoylOnePyridinTwoYlNonane => "9-Carbamoyl-1-(pyridin-2-yl)nonane",
    NineFormylOnePyridinTwoYlNonane => "9-Formyl-1-(pyridin-2-yl)nonane",
    NineAcylOnePyridinTwoYlNonane => "9-Acyl-1-(pyridin-2-yl)nonane",
    NineCyanoOnePyridinTwoYlNonane => "9-Cyano-1-(pyridin-2-yl)nonane",
    TenCarboxyOnePyridinTwoYlDecane => "10-Carboxy-1-(pyridin-2-yl)decane",
    TenAlkoxycarbonylOnePyridinTwoYlDecane => "10-Alkoxycarbonyl-1-(pyridin-2-yl)decane",
    TenCarbamoylOnePyridinTwoYlDecane => "10-Carbamoyl-1-(pyridin-2-yl)decane",
    TenFormylOnePyridinTwoYlDecane => "10-Formyl-1-(pyridin-2-yl)decane",
    TenAcylOnePyridinTwoYlDecane => "10-Acyl-1-(pyridin-2-yl)decane",
    TenCyanoOnePyridinTwoYlDecane => "10-Cyano-1-(pyridin-2-yl)decane",
    OneHydroxyOnePyridinTwoYlMethane => "1-Hydroxy-1-(pyridin-2-yl)methane",
    OneMethoxyOnePyridinTwoYlMethane => "1-Methoxy-1-(pyridin-2-yl)methane",
    OneAlkoxyOnePyridinTwoYlMethane => "1-Alkoxy-1-(pyridin-2-yl)methane",
    OneAcyloxyOnePyridinTwoYlMethane => "1-Acyloxy-1-(pyridin-2-yl)methane",
    TwoHydroxyOnePyridinTwoYlEthane => "2-Hydroxy-1-(pyridin-2-yl)ethane",
    TwoMethoxyOnePyridinTwoYlEthane => "2-Methoxy-1-(pyridin-2-yl)ethane",
    TwoAlkoxyOnePyridinTwoYlEthane => "2-Alkoxy-1-(pyridin-2-yl)ethane",
    TwoAcyloxyOnePyridinTwoYlEthane => "2-Acyloxy-1-(pyridin-2-yl)ethane",
    ThreeHydroxyOnePyridinTwoYlPropane => "3-Hydroxy-1-(pyridin-2-yl)propane",
    ThreeMethoxyOnePyridinTwoYlPropane => "3-Methoxy-1-(pyridin-2-yl)propane",
    ThreeAlkoxyOnePyridinTwoYlPropane => "3-Alkoxy-1-(pyridin-2-yl)propane",
    ThreeAcyloxyOnePyridinTwoYlPropane => "3-Acyloxy-1-(pyridin-2-yl)propane",
    FourHydroxyOnePyridinTwoYlButane => "4-Hydroxy-1-(pyridin-2-yl)butane",
    FourMethoxyOnePyridinTwoYlButane => "4-Methoxy-1-(pyridin-2-yl)butane",
    FourAlkoxyOnePyridinTwoYlButane => "4-Alkoxy-1-(pyridin-2-yl)butane",
    FourAcyloxyOnePyridinTwoYlButane => "4-Acyloxy-1-(pyridin-2-yl)butane",
    FiveHydroxyOnePyridinTwoYlPentane => "5-Hydroxy-1-(pyridin-2-yl)pentane",
    FiveMethoxyOnePyridinTwoYlPentane => "5-Methoxy-1-(pyridin-2-yl)pentane",
    FiveAlkoxyOnePyridinTwoYlPentane => "5-Alkoxy-1-(pyridin-2-yl)pentane",
    FiveAcyloxyOnePyridinTwoYlPentane => "5-Acyloxy-1-(pyridin-2-yl)pentane",
    SixHydroxyOnePyridinTwoYlHexane => "6-Hydroxy-1-(pyridin-2-yl)hexane",
    SixMethoxyOnePyridinTwoYlHexane => "6-Methoxy-1-(pyridin-2-yl)hexane",
    SixAlkoxyOnePyridinTwoYlHexane => "6-Alkoxy-1-(pyridin-2-yl)hexane",
    SixAcyloxyOnePyridinTwoYlHexane => "6-Acyloxy-1-(pyridin-2-yl)hexane",
    SevenHydroxyOnePyridinTwoYlHeptane => "7-Hydroxy-1-(pyridin-2-yl)heptane",
    SevenMethoxyOnePyridinTwoYlHeptane => "7-Methoxy-1-(pyridin-2-yl)heptane",
    SevenAlkoxyOnePyridinTwoYlHeptane => "7-Alkoxy-1-(pyridin-2-yl)heptane",
    SevenAcyloxyOnePyridinTwoYlHeptane => "7-Acyloxy-1-(pyridin-2-yl)heptane",
    EightHydroxyOnePyridinTwoYlOctane => "8-Hydroxy-1-(pyridin-2-yl)octane",
    EightMethoxyOnePyridinTwoYlOctane => "8-Methoxy-1-(pyridin-2-yl)octane",
    EightAlkoxyOnePyridinTwoYlOctane => "8-Alkoxy-1-(pyridin-2-yl)octane",
    EightAcyloxyOnePyridinTwoYlOctane => "8-Acyloxy-1-(pyridin-2-yl)octane",
    NineHydroxyOnePyridinTwoYlNonane => "9-Hydroxy-1-(pyridin-2-yl)nonane",
    NineMethoxyOnePyridinTwoYlNonane => "9-Methoxy-1-(pyridin-2-yl)nonane",
    NineAlkoxyOnePyridinTwoYlNonane => "9-Alkoxy-1-(pyridin-2-yl)nonane",
    NineAcyloxyOnePyridinTwoYlNonane => "9-Acyloxy-1-(pyridin-2-yl)nonane",
    TenHydroxyOnePyridinTwoYlDecane => "10-Hydroxy-1-(pyridin-2-yl)decane",
    TenMethoxyOnePyridinTwoYlDecane => "10-Methoxy-1-(pyridin-2-yl)decane",
    TenAlkoxyOnePyridinTwoYlDecane => "10-Alkoxy-1-(pyridin-2-yl)decane",
    TenAcyloxyOnePyridinTwoYlDecane => "10-Acyloxy-1-(pyridin-2-yl)decane",
    OneAminoOnePyridinTwoYlMethane => "1-Amino-1-(pyridin-2-yl)methane",
    OneAlkylaminoOnePyridinTwoYlMethane => "1-Alkylamino-1-(pyridin-2-yl)methane",
    OneAcylaminoOnePyridinTwoYlMethane => "1-Acylamino-1-(pyridin-2-yl)methane",
    TwoAminoOnePyridinTwoYlEthane => "2-Amino-1-(pyridin-2-yl)ethane",
    TwoAlkylaminoOnePyridinTwoYlEthane => "2-Alkylamino-1-(pyridin-2-yl)ethane",
    TwoAcylaminoOnePyridinTwoYlEthane => "2-Acylamino-1-(pyridin-2-yl)ethane",
    ThreeAminoOnePyridinTwoYlPropane => "3-Amino-1-(pyridin-2-yl)propane",
    ThreeAlkylaminoOnePyridinTwoYlPropane => "3-Alkylamino-1-(pyridin-2-yl)propane",
    ThreeAcylaminoOnePyridinTwoYlPropane => "3-Acylamino-1-(pyridin-2-yl)propane",
    FourAminoOnePyridinTwoYlButane => "4-Amino-1-(pyridin-2-yl)butane",
    FourAlkylaminoOnePyridinTwoYlButane => "4-Alkylamino-1-(pyridin-2-yl)butane",
    FourAcylaminoOnePyridinTwoYlButane => "4-Acylamino-1-(pyridin-2-yl)butane",
    FiveAminoOnePyridinTwoYlPentane => "5-Amino-1-(pyridin-2-yl)pentane",
    FiveAlkylaminoOnePyridinTwoYlPentane => "5-Alkylamino-1-(pyridin-2-yl)pentane",
    FiveAcylaminoOnePyridinTwoYlPentane => "5-Acylamino-1-(pyridin-2-yl)pentane",
    SixAminoOnePyridinTwoYlHexane => "6-Amino-1-(pyridin-2-yl)hexane",
    SixAlkylaminoOnePyridinTwoYlHexane => "6-Alkylamino-1-(pyridin-2-yl)hexane",
    SixAcylaminoOnePyridinTwoYlHexane => "6-Acylamino-1-(pyridin-2-yl)hexane",
    SevenAminoOnePyridinTwoYlHeptane => "7-Amino-1-(pyridin-2-yl)heptane",
    SevenAlkylaminoOnePyridinTwoYlHeptane => "7-Alkylamino-1-(pyridin-2-yl)heptane",
    SevenAcylaminoOnePyridinTwoYlHeptane => "7-Acylamino-1-(pyridin-2-yl)heptane",
    EightAminoOnePyridinTwoYlOctane => "8-Amino-1-(pyridin-2-yl)octane",
    EightAlkylaminoOnePyridinTwoYlOctane => "8-Alkylamino-1-(pyridin-2-yl)octane",
    EightAcylaminoOnePyridinTwoYlOctane => "8-Acylamino-1-(pyridin-2-yl)octane",
    NineAminoOnePyridinTwoYlNonane => "9-Amino-1-(pyridin-2-yl)nonane",
    NineAlkylaminoOnePyridinTwoYlNonane => "9-Alkylamino-1-(pyridin-2-yl)nonane",
    NineAcylaminoOnePyridinTwoYlNonane => "9-Acylamino-1-(pyridin-2-yl)nonane",
    TenAminoOnePyridinTwoYlDecane => "10-Amino-1-(pyridin-2-yl)decane",
    TenAlkylaminoOnePyridinTwoYlDecane => "10-Alkylamino-1-(pyridin-2-yl)decane",
    TenAcylaminoOnePyridinTwoYlDecane => "10-Acylamino-1-(pyridin-2-yl)decane",
    OneMercaptoOnePyridinTwoYlMethane => "1-Mercapto-1-(pyridin-2-yl)methane",
    OneAlkylthioOnePyridinTwoYlMethane => "1-Alkylthio-1-(pyridin-2-yl)methane",
    OneSulfonylOnePyridinTwoYlMethane => "1-Sulfonyl-1-(pyridin-2-yl)methane",
    TwoMercaptoOnePyridinTwoYlEthane => "2-Mercapto-1-(pyridin-2-yl)ethane",
    TwoAlkylthioOnePyridinTwoYlEthane => "2-Alkylthio-1-(pyridin-2-yl)ethane",
    TwoSulfonylOnePyridinTwoYlEthane => "2-Sulfonyl-1-(pyridin-2-yl)ethane",
    ThreeMercaptoOnePyridinTwoYlPropane => "3-Mercapto-1-(pyridin-2-yl)propane",
    ThreeAlkylthioOnePyridinTwoYlPropane => "3-Alkylthio-1-(pyridin-2-yl)propane",
    ThreeSulfonylOnePyridinTwoYlPropane => "3-Sulfonyl-1-(pyridin-2-yl)propane",
    FourMercaptoOnePyridinTwoYlButane => "4-Mercapto-1-(pyridin-2-yl)butane",
    FourAlkylthioOnePyridinTwoYlButane => "4-Alkylthio-1-(pyridin-2-yl)butane",
    FourSulfonylOnePyridinTwoYlButane => "4-Sulfonyl-1-(pyridin-2-yl)butane",
    FiveMercaptoOnePyridinTwoYlPentane => "5-Mercapto-1-(pyridin-2-yl)pentane",
    FiveAlkylthioOnePyridinTwoYlPentane => "5-Alkylthio-1-(pyridin-2-yl)pentane",
    FiveSulfonylOnePyridinTwoYlPentane => "5-Sulfonyl-1-(pyridin-2-yl)pentane",
    SixMercaptoOnePyridinTwoYlHexane => "6-Mercapto-1-(pyridin-2-yl)hexane",
    SixAlkylthioOnePyridinTwoYlHexane => "6-Alkylthio-1-(pyridin-2-yl)hexane",
    SixSulfonylOnePyridinTwoYlHexane => "6-Sulfonyl-1-(pyridin-2-yl)hexane",
    SevenMercaptoOnePyridinTwoYlHeptane => "7-Mercapto-1-(pyridin-2-yl)heptane",
    SevenAlkylthioOnePyridinTwoYlHeptane => "7-Alkylthio-1-(pyridin-2-yl)heptane",
    SevenSulfonylOnePyridinTwoYlHeptane => "7-Sulfonyl-1-(pyridin-2-yl)heptane",
    EightMercaptoOnePyridinTwoYlOctane => "8-Mercapto-1-(pyridin-2-yl)octane",
    EightAlkylthioOnePyridinTwoYlOctane => "8-Alkylthio-1-(pyridin-2-yl)octane",
    EightSulfonylOnePyridinTwoYlOctane => "8-Sulfonyl-1-(pyridin-2-yl)octane",
    NineMercaptoOnePyridinTwoYlNonane => "9-Mercapto-1-(pyridin-2-yl)nonane",
    NineAlkylthioOnePyridinTwoYlNonane => "9-Alkylthio-1-(pyridin-2-yl)nonane",
    NineSulfonylOnePyridinTwoYlNonane => "9-Sulfonyl-1-(pyridin-2-yl)nonane",
    TenMercaptoOnePyridinTwoYlDecane => "10-Mercapto-1-(pyridin-2-yl)decane",
    TenAlkylthioOnePyridinTwoYlDecane => "10-Alkylthio-1-(pyridin-2-yl)decane",
    TenSulfonylOnePyridinTwoYlDecane => "10-Sulfonyl-1-(pyridin-2-yl)decane",
    OneFluoroOnePyridinTwoYlMethane => "1-Fluoro-1-(pyridin-2-yl)methane",
    TwoFluoroOnePyridinTwoYlEthane => "2-Fluoro-1-(pyridin-2-yl)ethane",
    ThreeFluoroOnePyridinTwoYlPropane => "3-Fluoro-1-(pyridin-2-yl)propane",
    FourFluoroOnePyridinTwoYlButane => "4-Fluoro-1-(pyridin-2-yl)butane",
    FiveFluoroOnePyridinTwoYlPentane => "5-Fluoro-1-(pyridin-2-yl)pentane",
    SixFluoroOnePyridinTwoYlHexane => "6-Fluoro-1-(pyridin-2-yl)hexane",
    SevenFluoroOnePyridinTwoYlHeptane => "7-Fluoro-1-(pyridin-2-yl)heptane",
    EightFluoroOnePyridinTwoYlOctane => "8-Fluoro-1-(pyridin-2-yl)octane",
    NineFluoroOnePyridinTwoYlNonane => "9-Fluoro-1-(pyridin-2-yl)nonane",
    TenFluoroOnePyridinTwoYlDecane => "10-Fluoro-1-(pyridin-2-yl)decane",
    OneChloroOnePyridinTwoYlMethane => "1-Chloro-1-(pyridin-2-yl)methane",
    TwoChloroOnePyridinTwoYlEthane => "2-Chloro-1-(pyridin-2-yl)ethane",
    ThreeChloroOnePyridinTwoYlPropane => "3-Chloro-1-(pyridin-2-yl)propane",
    FourChloroOnePyridinTwoYlButane => "4-Chloro-1-(pyridin-2-yl)butane",
    FiveChloroOnePyridinTwoYlPentane => "5-Chloro-1-(pyridin-2-yl)pentane",
    SixChloroOnePyridinTwoYlHexane => "6-Chloro-1-(pyridin-2-yl)hexane",
    SevenChloroOnePyridinTwoYlHeptane => "7-Chloro-1-(pyridin-2-yl)heptane",
    EightChloroOnePyridinTwoYlOctane => "8-Chloro-1-(pyridin-2-yl)octane",
    NineChloroOnePyridinTwoYlNonane => "9-Chloro-1-(pyridin-2-yl)nonane",
    TenChloroOnePyridinTwoYlDecane => "10-Chloro-1-(pyridin-2-yl)decane",
    OneBromoOnePyridinTwoYlMethane => "1-Bromo-1-(pyridin-2-yl)methane",
    TwoBromoOnePyridinTwoYlEthane => "2-Bromo-1-(pyridin-2-yl)ethane",
    ThreeBromoOnePyridinTwoYlPropane => "3-Bromo-1-(pyridin-2-yl)propane",
    FourBromoOnePyridinTwoYlButane => "4-Bromo-1-(pyridin-2-yl)butane",
    FiveBromoOnePyridinTwoYlPentane => "5-Bromo-1-(pyridin-2-yl)pentane",
    SixBromoOnePyridinTwoYlHexane => "6-Bromo-1-(pyridin-2-yl)hexane",
    SevenBromoOnePyridinTwoYlHeptane => "7-Bromo-1-(pyridin-2-yl)heptane",
    EightBromoOnePyridinTwoYlOctane => "8-Bromo-1-(pyridin-2-yl)octane",
    NineBromoOnePyridinTwoYlNonane => "9-Bromo-1-(pyridin-2-yl)nonane",
    TenBromoOnePyridinTwoYlDecane => "10-Bromo-1-(pyridin-2-yl)decane",
    OneIodoOnePyridinTwoYlMethane => "1-Iodo-1-(pyridin-2-yl)methane",
    TwoIodoOnePyridinTwoYlEthane => "2-Iodo-1-(pyridin-2-yl)ethane",
    ThreeIodoOnePyridinTwoYlPropane => "3-Iodo-1-(pyridin-2-yl)propane",
    FourIodoOnePyridinTwoYlButane => "4-Iodo-1-(pyridin-2-yl)butane",
    FiveIodoOnePyridinTwoYlPentane => "5-Iodo-1-(pyridin-2-yl)pentane",
    SixIodoOnePyridinTwoYlHexane => "6-Iodo-1-(pyridin-2-yl)hexane",
    SevenIodoOnePyridinTwoYlHeptane => "7-Iodo-1-(pyridin-2-yl)heptane",
    EightIodoOnePyridinTwoYlOctane => "8-Iodo-1-(pyridin-2-yl)octane",
    NineIodoOnePyridinTwoYlNonane => "9-Iodo-1-(pyridin-2-yl)nonane",
    TenIodoOnePyridinTwoYlDecane => "10-Iodo-1-(pyridin-2-yl)decane",
    OneCarboxyOnePyridinThreeYlMethane => "1-Carboxy-1-(pyridin-3-yl)methane",
    OneAlkoxycarbonylOnePyridinThreeYlMethane => "1-Alkoxycarbonyl-1-(pyridin-3-yl)methane",
    OneCarbamoylOnePyridinThreeYlMethane => "1-Carbamoyl-1-(pyridin-3-yl)methane",
    OneFormylOnePyridinThreeYlMethane => "1-Formyl-1-(pyridin-3-yl)methane",
    OneAcylOnePyridinThreeYlMethane => "1-Acyl-1-(pyridin-3-yl)methane",
    OneCyanoOnePyridinThreeYlMethane => "1-Cyano-1-(pyridin-3-yl)methane",
    TwoCarboxyOnePyridinThreeYlEthane => "2-Carboxy-1-(pyridin-3-yl)ethane",
    TwoAlkoxycarbonylOnePyridinThreeYlEthane => "2-Alkoxycarbonyl-1-(pyridin-3-yl)ethane",
    TwoCarbamoylOnePyridinThreeYlEthane => "2-Carbamoyl-1-(pyridin-3-yl)ethane",
    TwoFormylOnePyridinThreeYlEthane => "2-Formyl-1-(pyridin-3-yl)ethane",
    TwoAcylOnePyridinThreeYlEthane => "2-Acyl-1-(pyridin-3-yl)ethane",
    TwoCyanoOnePyridinThreeYlEthane => "2-Cyano-1-(pyridin-3-yl)ethane",
    ThreeCarboxyOnePyridinThreeYlPropane => "3-Carboxy-1-(pyridin-3-yl)propane",
    ThreeAlkoxycarbonylOnePyridinThreeYlPropane => "3-Alkoxycarbonyl-1-(pyridin-3-yl)propane",
    ThreeCarbamoylOnePyridinThreeYlPropane => "3-Carbamoyl-1-(pyridin-3-yl)propane",
    ThreeFormylOnePyridinThreeYlPropane => "3-Formyl-1-(pyridin-3-yl)propane",
    ThreeAcylOnePyridinThreeYlPropane => "3-Acyl-1-(pyridin-3-yl)propane",
    ThreeCyanoOnePyridinThreeYlPropane => "3-Cyano-1-(pyridin-3-yl)propane",
    FourCarboxyOnePyridinThreeYlButane => "4-Carboxy-1-(pyridin-3-yl)butane",
    FourAlkoxycarbonylOnePyridinThreeYlButane => "4-Alkoxycarbonyl-1-(pyridin-3-yl)butane",
    FourCarbamoylOnePyridinThreeYlButane => "4-Carbamoyl-1-(pyridin-3-yl)butane",
    FourFormylOnePyridinThreeYlButane => "4-Formyl-1-(pyridin-3-yl)butane",
    FourAcylOnePyridinThreeYlButane => "4-Acyl-1-(pyridin-3-yl)butane",
    FourCyanoOnePyridinThreeYlButane => "4-Cyano-1-(pyridin-3-yl)butane",
    FiveCarboxyOnePyridinThreeYlPentane => "5-Carboxy-1-(pyridin-3-yl)pentane",
    FiveAlkoxycarbonylOnePyridinThreeYlPentane => "5-Alkoxycarbonyl-1-(pyridin-3-yl)pentane",
    FiveCarbamoylOnePyridinThreeYlPentane => "5-Carbamoyl-1-(pyridin-3-yl)pentane",
    FiveFormylOnePyridinThreeYlPentane => "5-Formyl-1-(pyridin-3-yl)pentane",
    FiveAcylOnePyridinThreeYlPentane => "5-Acyl-1-(pyridin-3-yl)pentane",
    FiveCyanoOnePyridinThreeYlPentane => "5-Cyano-1-(pyridin-3-yl)pentane",
    SixCarboxyOnePyridinThreeYlHexane => "6-Carboxy-1-(pyridin-3-yl)hexane",
    SixAlkoxycarbonylOnePyridinThreeYlHexane => "6-Alkoxycarbonyl-1-(pyridin-3-yl)hexane",
    SixCarbamoylOnePyridinThreeYlHexane => "6-Carbamoyl-1-(pyridin-3-yl)hexane",
    SixFormylOnePyridinThreeYlHexane => "6-Formyl-1-(pyridin-3-yl)hexane",
    SixAcylOnePyridinThreeYlHexane => "6-Acyl-1-(pyridin-3-yl)hexane",
    SixCyanoOnePyridinThreeYlHexane => "6-Cyano-1-(pyridin-3-yl)hexane",
    SevenCarboxyOnePyridinThreeYlHeptane => "7-Carboxy-1-(pyridin-3-yl)heptane",
    SevenAlkoxycarbonylOnePyridinThreeYlHeptane => "7-Alkoxycarbonyl-1-(pyridin-3-yl)heptane",
    SevenCarbamoylOnePyridinThreeYlHeptane => "7-Carbamoyl-1-(pyridin-3-yl)heptane",
    SevenFormylOnePyridinThreeYlHeptane => "7-Formyl-1-(pyridin-3-yl)heptane",
    SevenAcylOnePyridinThreeYlHeptane => "7-Acyl-1-(pyridin-3-yl)heptane",
    SevenCyanoOnePyridinThreeYlHeptane => "7-Cyano-1-(pyridin-3-yl)heptane",
    EightCarboxyOnePyridinThreeYlOctane => "8-Carboxy-1-(pyridin-3-yl)octane",
    EightAlkoxycarbonylOnePyridinThreeYlOctane => "8-Alkoxycarbonyl-1-(pyridin-3-yl)octane",
    EightCarbamoylOnePyridinThreeYlOctane => "8-Carbamoyl-1-(pyridin-3-yl)octane",
    EightFormylOnePyridinThreeYlOctane => "8-Formyl-1-(pyridin-3-yl)octane",
    EightAcylOnePyridinThreeYlOctane => "8-Acyl-1-(pyridin-3-yl)octane",
    EightCyanoOnePyridinThreeYlOctane => "8-Cyano-1-(pyridin-3-yl)octane",
    NineCarboxyOnePyridinThreeYlNonane => "9-Carboxy-1-(pyridin-3-yl)nonane",
    NineAlkoxycarbonylOnePyridinThreeYlNonane => "9-Alkoxycarbonyl-1-(pyridin-3-yl)nonane",
    NineCarbamoylOnePyridinThreeYlNonane => "9-Carbamoyl-1-(pyridin-3-yl)nonane",
    NineFormylOnePyridinThreeYlNonane => "9-Formyl-1-(pyridin-3-yl)nonane",
    NineAcylOnePyridinThreeYlNonane => "9-Acyl-1-(pyridin-3-yl)nonane",
    NineCyanoOnePyridinThreeYlNonane => "9-Cyano-1-(pyridin-3-yl)nonane",
    OneHydroxyOnePyridinThreeYlMethane => "1-Hydroxy-1-(pyridin-3-yl)methane",
    OneMethoxyOnePyridinThreeYlMethane => "1-Methoxy-1-(pyridin-3-yl)methane",
    OneAlkoxyOnePyridinThreeYlMethane => "1-Alkoxy-1-(pyridin-3-yl)methane",
    OneAcyloxyOnePyridinThreeYlMethane => "1-Acyloxy-1-(pyridin-3-yl)methane",
    TwoHydroxyOnePyridinThreeYlEthane => "2-Hydroxy-1-(pyridin-3-yl)ethane",
    TwoMethoxyOnePyridinThreeYlEthane => "2-Methoxy-1-(pyridin-3-yl)ethane",
    TwoAlkoxyOnePyridinThreeYlEthane => "2-Alkoxy-1-(pyridin-3-yl)ethane",
    TwoAcyloxyOnePyridinThreeYlEthane => "2-Acyloxy-1-(pyridin-3-yl)ethane",
    ThreeHydroxyOnePyridinThreeYlPropane => "3-Hydroxy-1-(pyridin-3-yl)propane",
    ThreeMethoxyOnePyridinThreeYlPropane => "3-Methoxy-1-(pyridin-3-yl)propane",
    ThreeAlkoxyOnePyridinThreeYlPropane => "3-Alkoxy-1-(pyridin-3-yl)propane",
    ThreeAcyloxyOnePyridinThreeYlPropane => "3-Acyloxy-1-(pyridin-3-yl)propane",
    FourHydroxyOnePyridinThreeYlButane => "4-Hydroxy-1-(pyridin-3-yl)butane",
    FourMethoxyOnePyridinThreeYlButane => "4-Methoxy-1-(pyridin-3-yl)butane",
    FourAlkoxyOnePyridinThreeYlButane => "4-Alkoxy-1-(pyridin-3-yl)butane",
    FourAcyloxyOnePyridinThreeYlButane => "4-Acyloxy-1-(pyridin-3-yl)butane",
    FiveHydroxyOnePyridinThreeYlPentane => "5-Hydroxy-1-(pyridin-3-yl)pentane",
    FiveMethoxyOnePyridinThreeYlPentane => "5-Methoxy-1-(pyridin-3-yl)pentane",
    FiveAlkoxyOnePyridinThreeYlPentane => "5-Alkoxy-1-(pyridin-3-yl)pentane",
    FiveAcyloxyOnePyridinThreeYlPentane => "5-Acyloxy-1-(pyridin-3-yl)pentane",
    SixHydroxyOnePyridinThreeYlHexane => "6-Hydroxy-1-(pyridin-3-yl)hexane",
    SixMethoxyOnePyridinThreeYlHexane => "6-Methoxy-1-(pyridin-3-yl)hexane",
    SixAlkoxyOnePyridinThreeYlHexane => "6-Alkoxy-1-(pyridin-3-yl)hexane",
    SixAcyloxyOnePyridinThreeYlHexane => "6-Acyloxy-1-(pyridin-3-yl)hexane",
    SevenHydroxyOnePyridinThreeYlHeptane => "7-Hydroxy-1-(pyridin-3-yl)heptane",
    SevenMethoxyOnePyridinThreeYlHeptane => "7-Methoxy-1-(pyridin-3-yl)heptane",
    SevenAlkoxyOnePyridinThreeYlHeptane => "7-Alkoxy-1-(pyridin-3-yl)heptane",
    SevenAcyloxyOnePyridinThreeYlHeptane => "7-Acyloxy-1-(pyridin-3-yl)heptane",
    EightHydroxyOnePyridinThreeYlOctane => "8-Hydroxy-1-(pyridin-3-yl)octane",
    EightMethoxyOnePyridinThreeYlOctane => "8-Methoxy-1-(pyridin-3-yl)octane",
    EightAlkoxyOnePyridinThreeYlOctane => "8-Alkoxy-1-(pyridin-3-yl)octane",
    EightAcyloxyOnePyridinThreeYlOctane => "8-Acyloxy-1-(pyridin-3-yl)octane",
    NineHydroxyOnePyridinThreeYlNonane => "9-Hydroxy-1-(pyridin-3-yl)nonane",
    NineMethoxyOnePyridinThreeYlNonane => "9-Methoxy-1-(pyridin-3-yl)nonane",
    NineAlkoxyOnePyridinThreeYlNonane => "9-Alkoxy-1-(pyridin-3-yl)nonane",
    NineAcyloxyOnePyridinThreeYlNonane => "9-Acyloxy-1-(pyridin-3-yl)nonane",
    OneAminoOnePyridinThreeYlMethane => "1-Amino-1-(pyridin-3-yl)methane",
    OneAlkylaminoOnePyridinThreeYlMethane => "1-Alkylamino-1-(pyridin-3-yl)methane",
    OneAcylaminoOnePyridinThreeYlMethane => "1-Acylamino-1-(pyridin-3-yl)methane",
    TwoAminoOnePyridinThreeYlEthane => "2-Amino-1-(pyridin-3-yl)ethane",
    TwoAlkylaminoOnePyridinThreeYlEthane => "2-Alkylamino-1-(pyridin-3-yl)ethane",
    TwoAcylaminoOnePyridinThreeYlEthane => "2-Acylamino-1-(pyridin-3-yl)ethane",
    ThreeAminoOnePyridinThreeYlPropane => "3-Amino-1-(pyridin-3-yl)propane",
    ThreeAlkylaminoOnePyridinThreeYlPropane => "3-Alkylamino-1-(pyridin-3-yl)propane",
    ThreeAcylaminoOnePyridinThreeYlPropane => "3-Acylamino-1-(pyridin-3-yl)propane",
    FourAminoOnePyridinThreeYlButane => "4-Amino-1-(pyridin-3-yl)butane",
    FourAlkylaminoOnePyridinThreeYlButane => "4-Alkylamino-1-(pyridin-3-yl)butane",
    FourAcylaminoOnePyridinThreeYlButane => "4-Acylamino-1-(pyridin-3-yl)butane",
    FiveAminoOnePyridinThreeYlPentane => "5-Amino-1-(pyridin-3-yl)pentane",
    FiveAlkylaminoOnePyridinThreeYlPentane => "5-Alkylamino-1-(pyridin-3-yl)pentane",
    FiveAcylaminoOnePyridinThreeYlPentane => "5-Acylamino-1-(pyridin-3-yl)pentane",
    SixAminoOnePyridinThreeYlHexane => "6-Amino-1-(pyridin-3-yl)hexane",
    SixAlkylaminoOnePyridinThreeYlHexane => "6-Alkylamino-1-(pyridin-3-yl)hexane",
    SixAcylaminoOnePyridinThreeYlHexane => "6-Acylamino-1-(pyridin-3-yl)hexane",
    SevenAminoOnePyridinThreeYlHeptane => "7-Amino-1-(pyridin-3-yl)heptane",
    SevenAlkylaminoOnePyridinThreeYlHeptane => "7-Alkylamino-1-(pyridin-3-yl)heptane",
    SevenAcylaminoOnePyridinThreeYlHeptane => "7-Acylamino-1-(pyridin-3-yl)heptane",
    EightAminoOnePyridinThreeYlOctane => "8-Amino-1-(pyridin-3-yl)octane",
    EightAlkylaminoOnePyridinThreeYlOctane => "8-Alkylamino-1-(pyridin-3-yl)octane",
    EightAcylaminoOnePyridinThreeYlOctane => "8-Acylamino-1-(pyridin-3-yl)octane",
    NineAminoOnePyridinThreeYlNonane => "9-Amino-1-(pyridin-3-yl)nonane",
    NineAlkylaminoOnePyridinThreeYlNonane => "9-Alkylamino-1-(pyridin-3-yl)nonane",
    NineAcylaminoOnePyridinThreeYlNonane => "9-Acylamino-1-(pyridin-3-yl)nonane",
    OneMercaptoOnePyridinThreeYlMethane => "1-Mercapto-1-(pyridin-3-yl)methane",
    OneAlkylthioOnePyridinThreeYlMethane => "1-Alkylthio-1-(pyridin-3-yl)methane",
    OneSulfonylOnePyridinThreeYlMethane => "1-Sulfonyl-1-(pyridin-3-yl)methane",
    TwoMercaptoOnePyridinThreeYlEthane => "2-Mercapto-1-(pyridin-3-yl)ethane",
    TwoAlkylthioOnePyridinThreeYlEthane => "2-Alkylthio-1-(pyridin-3-yl)ethane",
    TwoSulfonylOnePyridinThreeYlEthane => "2-Sulfonyl-1-(pyridin-3-yl)ethane",
    ThreeMercaptoOnePyridinThreeYlPropane => "3-Mercapto-1-(pyridin-3-yl)propane",
    ThreeAlkylthioOnePyridinThreeYlPropane => "3-Alkylthio-1-(pyridin-3-yl)propane",
    ThreeSulfonylOnePyridinThreeYlPropane => "3-Sulfonyl-1-(pyridin-3-yl)propane",
    FourMercaptoOnePyridinThreeYlButane => "4-Mercapto-1-(pyridin-3-yl)butane",
    FourAlkylthioOnePyridinThreeYlButane => "4-Alkylthio-1-(pyridin-3-yl)butane",
    FourSulfonylOnePyridinThreeYlButane => "4-Sulfonyl-1-(pyridin-3-yl)butane",
    FiveMercaptoOnePyridinThreeYlPentane => "5-Mercapto-1-(pyridin-3-yl)pentane",
    FiveAlkylthioOnePyridinThreeYlPentane => "5-Alkylthio-1-(pyridin-3-yl)pentane",
    FiveSulfonylOnePyridinThreeYlPentane => "5-Sulfonyl-1-(pyridin-3-yl)pentane",
    SixMercaptoOnePyridinThreeYlHexane => "6-Mercapto-1-(pyridin-3-yl)hexane",
    SixAlkylthioOnePyridinThreeYlHexane => "6-Alkylthio-1-(pyridin-3-yl)hexane",
    SixSulfonylOnePyridinThreeYlHexane => "6-Sulfonyl-1-(pyridin-3-yl)hexane",
    SevenMercaptoOnePyridinThreeYlHeptane => "7-Mercapto-1-(pyridin-3-yl)heptane",
    SevenAlkylthioOnePyridinThreeYlHeptane => "7-Alkylthio-1-(pyridin-3-yl)heptane",
    SevenSulfonylOnePyridinThreeYlHeptane => "7-Sulfonyl-1-(pyridin-3-yl)heptane",
    EightMercaptoOnePyridinThreeYlOctane => "8-Mercapto-1-(pyridin-3-yl)octane",
    EightAlkylthioOnePyridinThreeYlOctane => "8-Alkylthio-1-(pyridin-3-yl)octane",
    EightSulfonylOnePyridinThreeYlOctane => "8-Sulfonyl-1-(pyridin-3-yl)octane",
    NineMercaptoOnePyridinThreeYlNonane => "9-Mercapto-1-(pyridin-3-yl)nonane",
    NineAlkylthioOnePyridinThreeYlNonane => "9-Alkylthio-1-(pyridin-3-yl)nonane",
    NineSulfonylOnePyridinThreeYlNonane => "9-Sulfonyl-1-(pyridin-3-yl)nonane",
    OneFluoroOnePyridinThreeYlMethane => "1-Fluoro-1-(pyridin-3-yl)methane",
    TwoFluoroOnePyridinThreeYlEthane => "2-Fluoro-1-(pyridin-3-yl)ethane",
    ThreeFluoroOnePyridinThreeYlPropane => "3-Fluoro-1-(pyridin-3-yl)propane",
    FourFluoroOnePyridinThreeYlButane => "4-Fluoro-1-(pyridin-3-yl)butane",
    FiveFluoroOnePyridinThreeYlPentane => "5-Fluoro-1-(pyridin-3-yl)pentane",
    SixFluoroOnePyridinThreeYlHexane => "6-Fluoro-1-(pyridin-3-yl)hexane",
    SevenFluoroOnePyridinThreeYlHeptane => "7-Fluoro-1-(pyridin-3-yl)heptane",
    EightFluoroOnePyridinThreeYlOctane => "8-Fluoro-1-(pyridin-3-yl)octane",
    NineFluoroOnePyridinThreeYlNonane => "9-Fluoro-1-(pyridin-3-yl)nonane",
    OneChloroOnePyridinThreeYlMethane => "1-Chloro-1-(pyridin-3-yl)methane",
    TwoChloroOnePyridinThreeYlEthane => "2-Chloro-1-(pyridin-3-yl)ethane",
    ThreeChloroOnePyridinThreeYlPropane => "3-Chloro-1-(pyridin-3-yl)propane",
    FourChloroOnePyridinThreeYlButane => "4-Chloro-1-(pyridin-3-yl)butane",
    FiveChloroOnePyridinThreeYlPentane => "5-Chloro-1-(pyridin-3-yl)pentane",
    SixChloroOnePyridinThreeYlHexane => "6-Chloro-1-(pyridin-3-yl)hexane",
    SevenChloroOnePyridinThreeYlHeptane => "7-Chloro-1-(pyridin-3-yl)heptane",
    EightChloroOnePyridinThreeYlOctane => "8-Chloro-1-(pyridin-3-yl)octane",
    NineChloroOnePyridinThreeYlNonane => "9-Chloro-1-(pyridin-3-yl)nonane",
    OneBromoOnePyridinThreeYlMethane => "1-Bromo-1-(pyridin-3-yl)methane",
    TwoBromoOnePyridinThreeYlEthane => "2-Bromo-1-(pyridin-3-yl)ethane",
    ThreeBromoOnePyridinThreeYlPropane => "3-Bromo-1-(pyridin-3-yl)propane",
    FourBromoOnePyridinThreeYlButane => "4-Bromo-1-(pyridin-3-yl)butane",
    FiveBromoOnePyridinThreeYlPentane => "5-Bromo-1-(pyridin-3-yl)pentane",
    SixBromoOnePyridinThreeYlHexane => "6-Bromo-1-(pyridin-3-yl)hexane",
    SevenBromoOnePyridinThreeYlHeptane => "7-Bromo-1-(pyridin-3-yl)heptane",
    EightBromoOnePyridinThreeYlOctane => "8-Bromo-1-(pyridin-3-yl)octane",
    NineBromoOnePyridinThreeYlNonane => "9-Bromo-1-(pyridin-3-yl)nonane",
    OneIodoOnePyridinThreeYlMethane => "1-Iodo-1-(pyridin-3-yl)methane",
    TwoIodoOnePyridinThreeYlEthane => "2-Iodo-1-(pyridin-3-yl)ethane",
    ThreeIodoOnePyridinThreeYlPropane => "3-Iodo-1-(pyridin-3-yl)propane",
    FourIodoOnePyridinThreeYlButane => "4-Iodo-1-(pyridin-3-yl)butane",
    FiveIodoOnePyridinThreeYlPentane => "5-Iodo-1-(pyridin-3-yl)pentane",
    SixIodoOnePyridinThreeYlHexane => "6-Iodo-1-(pyridin-3-yl)hexane",
    SevenIodoOnePyridinThreeYlHeptane => "7-Iodo-1-(pyridin-3-yl)heptane",
    EightIodoOnePyridinThreeYlOctane => "8-Iodo-1-(pyridin-3-yl)octane",
    NineIodoOnePyridinThreeYlNonane => "9-Iodo-1-(pyridin-3-yl)nonane",
    OneCarboxyOnePyridinFourYlMethane => "1-Carboxy-1-(pyridin-4-yl)methane",
    OneAlkoxycarbonylOnePyridinFourYlMethane => "1-Alkoxycarbonyl-1-(pyridin-4-yl)methane",
    OneCarbamoylOnePyridinFourYlMethane => "1-Carbamoyl-1-(pyridin-4-yl)methane",
    OneFormylOnePyridinFourYlMethane => "1-Formyl-1-(pyridin-4-yl)methane",
    OneAcylOnePyridinFourYlMethane => "1-Acyl-1-(pyridin-4-yl)methane",
    OneCyanoOnePyridinFourYlMethane => "1-Cyano-1-(pyridin-4-yl)methane",
    TwoCarboxyOnePyridinFourYlEthane => "2-Carboxy-1-(pyridin-4-yl)ethane",
    TwoAlkoxycarbonylOnePyridinFourYlEthane => "2-Alkoxycarbonyl-1-(pyridin-4-yl)ethane",
    TwoCarbamoylOnePyridinFourYlEthane => "2-Carbamoyl-1-(pyridin-4-yl)ethane",
    TwoFormylOnePyridinFourYlEthane => "2-Formyl-1-(pyridin-4-yl)ethane",
    TwoAcylOnePyridinFourYlEthane => "2-Acyl-1-(pyridin-4-yl)ethane",
    TwoCyanoOnePyridinFourYlEthane => "2-Cyano-1-(pyridin-4-yl)ethane",
    ThreeCarboxyOnePyridinFourYlPropane => "3-Carboxy-1-(pyridin-4-yl)propane",
    ThreeAlkoxycarbonylOnePyridinFourYlPropane => "3-Alkoxycarbonyl-1-(pyridin-4-yl)propane",
    ThreeCarbamoylOnePyridinFourYlPropane => "3-Carbamoyl-1-(pyridin-4-yl)propane",
    ThreeFormylOnePyridinFourYlPropane => "3-Formyl-1-(pyridin-4-yl)propane",
    ThreeAcylOnePyridinFourYlPropane => "3-Acyl-1-(pyridin-4-yl)propane",
    ThreeCyanoOnePyridinFourYlPropane => "3-Cyano-1-(pyridin-4-yl)propane",
    FourCarboxyOnePyridinFourYlButane => "4-Carboxy-1-(pyridin-4-yl)butane",
    FourAlkoxycarbonylOnePyridinFourYlButane => "4-Alkoxycarbonyl-1-(pyridin-4-yl)butane",
    FourCarbamoylOnePyridinFourYlButane => "4-Carbamoyl-1-(pyridin-4-yl)butane",
    FourFormylOnePyridinFourYlButane => "4-Formyl-1-(pyridin-4-yl)butane",
    FourAcylOnePyridinFourYlButane => "4-Acyl-1-(pyridin-4-yl)butane",
    FourCyanoOnePyridinFourYlButane => "4-Cyano-1-(pyridin-4-yl)butane",
    FiveCarboxyOnePyridinFourYlPentane => "5-Carboxy-1-(pyridin-4-yl)pentane",
    FiveAlkoxycarbonylOnePyridinFourYlPentane => "5-Alkoxycarbonyl-1-(pyridin-4-yl)pentane",
    FiveCarbamoylOnePyridinFourYlPentane => "5-Carbamoyl-1-(pyridin-4-yl)pentane",
    FiveFormylOnePyridinFourYlPentane => "5-Formyl-1-(pyridin-4-yl)pentane",
    FiveAcylOnePyridinFourYlPentane => "5-Acyl-1-(pyridin-4-yl)pentane",
    FiveCyanoOnePyridinFourYlPentane => "5-Cyano-1-(pyridin-4-yl)pentane",
    SixCarboxyOnePyridinFourYlHexane => "6-Carboxy-1-(pyridin-4-yl)hexane",
    SixAlkoxycarbonylOnePyridinFourYlHexane => "6-Alkoxycarbonyl-1-(pyridin-4-yl)hexane",
    SixCarbamoylOnePyridinFourYlHexane => "6-Carbamoyl-1-(pyridin-4-yl)hexane",
    SixFormylOnePyridinFourYlHexane => "6-Formyl-1-(pyridin-4-yl)hexane",
    SixAcylOnePyridinFourYlHexane => "6-Acyl-1-(pyridin-4-yl)hexane",
    SixCyanoOnePyridinFourYlHexane => "6-Cyano-1-(pyridin-4-yl)hexane",
    SevenCarboxyOnePyridinFourYlHeptane => "7-Carboxy-1-(pyridin-4-yl)heptane",
    SevenAlkoxycarbonylOnePyridinFourYlHeptane => "7-Alkoxycarbonyl-1-(pyridin-4-yl)heptane",
    SevenCarbamoylOnePyridinFourYlHeptane => "7-Carbamoyl-1-(pyridin-4-yl)heptane",
    SevenFormylOnePyridinFourYlHeptane => "7-Formyl-1-(pyridin-4-yl)heptane",
    SevenAcylOnePyridinFourYlHeptane => "7-Acyl-1-(pyridin-4-yl)heptane",
    SevenCyanoOnePyridinFourYlHeptane => "7-Cyano-1-(pyridin-4-yl)heptane",
    EightCarboxyOnePyridinFourYlOctane => "8-Carboxy-1-(pyridin-4-yl)octane",
    EightAlkoxycarbonylOnePyridinFourYlOctane => "8-Alkoxycarbonyl-1-(pyridin-4-yl)octane",
    EightCarbamoylOnePyridinFourYlOctane => "8-Carbamoyl-1-(pyridin-4-yl)octane",
    EightFormylOnePyridinFourYlOctane => "8-Formyl-1-(pyridin-4-yl)octane",
    EightAcylOnePyridinFourYlOctane => "8-Acyl-1-(pyridin-4-yl)octane",
    EightCyanoOnePyridinFourYlOctane => "8-Cyano-1-(pyridin-4-yl)octane",
    OneHydroxyOnePyridinFourYlMethane => "1-Hydroxy-1-(pyridin-4-yl)methane",
    OneMethoxyOnePyridinFourYlMethane => "1-Methoxy-1-(pyridin-4-yl)methane",
    OneAlkoxyOnePyridinFourYlMethane => "1-Alkoxy-1-(pyridin-4-yl)methane",
    OneAcyloxyOnePyridinFourYlMethane => "1-Acyloxy-1-(pyridin-4-yl)methane",
    TwoHydroxyOnePyridinFourYlEthane => "2-Hydroxy-1-(pyridin-4-yl)ethane",
    TwoMethoxyOnePyridinFourYlEthane => "2-Methoxy-1-(pyridin-4-yl)ethane",
    TwoAlkoxyOnePyridinFourYlEthane => "2-Alkoxy-1-(pyridin-4-yl)ethane",
    TwoAcyloxyOnePyridinFourYlEthane => "2-Acyloxy-1-(pyridin-4-yl)ethane",
    ThreeHydroxyOnePyridinFourYlPropane => "3-Hydroxy-1-(pyridin-4-yl)propane",
    ThreeMethoxyOnePyridinFourYlPropane => "3-Methoxy-1-(pyridin-4-yl)propane",
    ThreeAlkoxyOnePyridinFourYlPropane => "3-Alkoxy-1-(pyridin-4-yl)propane",
    ThreeAcyloxyOnePyridinFourYlPropane => "3-Acyloxy-1-(pyridin-4-yl)propane",
    FourHydroxyOnePyridinFourYlButane => "4-Hydroxy-1-(pyridin-4-yl)butane",
    FourMethoxyOnePyridinFourYlButane => "4-Methoxy-1-(pyridin-4-yl)butane",
    FourAlkoxyOnePyridinFourYlButane => "4-Alkoxy-1-(pyridin-4-yl)butane",
    FourAcyloxyOnePyridinFourYlButane => "4-Acyloxy-1-(pyridin-4-yl)butane",
    FiveHydroxyOnePyridinFourYlPentane => "5-Hydroxy-1-(pyridin-4-yl)pentane",
    FiveMethoxyOnePyridinFourYlPentane => "5-Methoxy-1-(pyridin-4-yl)pentane",
    FiveAlkoxyOnePyridinFourYlPentane => "5-Alkoxy-1-(pyridin-4-yl)pentane",
    FiveAcyloxyOnePyridinFourYlPentane => "5-Acyloxy-1-(pyridin-4-yl)pentane",
    SixHydroxyOnePyridinFourYlHexane => "6-Hydroxy-1-(pyridin-4-yl)hexane",
    SixMethoxyOnePyridinFourYlHexane => "6-Methoxy-1-(pyridin-4-yl)hexane",
    SixAlkoxyOnePyridinFourYlHexane => "6-Alkoxy-1-(pyridin-4-yl)hexane",
    SixAcyloxyOnePyridinFourYlHexane => "6-Acyloxy-1-(pyridin-4-yl)hexane",
    SevenHydroxyOnePyridinFourYlHeptane => "7-Hydroxy-1-(pyridin-4-yl)heptane",
    SevenMethoxyOnePyridinFourYlHeptane => "7-Methoxy-1-(pyridin-4-yl)heptane",
    SevenAlkoxyOnePyridinFourYlHeptane => "7-Alkoxy-1-(pyridin-4-yl)heptane",
    SevenAcyloxyOnePyridinFourYlHeptane => "7-Acyloxy-1-(pyridin-4-yl)heptane",
    EightHydroxyOnePyridinFourYlOctane => "8-Hydroxy-1-(pyridin-4-yl)octane",
    EightMethoxyOnePyridinFourYlOctane => "8-Methoxy-1-(pyridin-4-yl)octane",
    EightAlkoxyOnePyridinFourYlOctane => "8-Alkoxy-1-(pyridin-4-yl)octane",
    EightAcyloxyOnePyridinFourYlOctane => "8-Acyloxy-1-(pyridin-4-yl)octane",
    OneAminoOnePyridinFourYlMethane => "1-Amino-1-(pyridin-4-yl)methane",
    OneAlkylaminoOnePyridinFourYlMethane => "1-Alkylamino-1-(pyridin-4-yl)methane",
    OneAcylaminoOnePyridinFourYlMethane => "1-Acylamino-1-(pyridin-4-yl)methane",
    TwoAminoOnePyridinFourYlEthane => "2-Amino-1-(pyridin-4-yl)ethane",
    TwoAlkylaminoOnePyridinFourYlEthane => "2-Alkylamino-1-(pyridin-4-yl)ethane",
    TwoAcylaminoOnePyridinFourYlEthane => "2-Acylamino-1-(pyridin-4-yl)ethane",
    ThreeAminoOnePyridinFourYlPropane => "3-Amino-1-(pyridin-4-yl)propane",
    ThreeAlkylaminoOnePyridinFourYlPropane => "3-Alkylamino-1-(pyridin-4-yl)propane",
    ThreeAcylaminoOnePyridinFourYlPropane => "3-Acylamino-1-(pyridin-4-yl)propane",
    FourAminoOnePyridinFourYlButane => "4-Amino-1-(pyridin-4-yl)butane",
    FourAlkylaminoOnePyridinFourYlButane => "4-Alkylamino-1-(pyridin-4-yl)butane",
    FourAcylaminoOnePyridinFourYlButane => "4-Acylamino-1-(pyridin-4-yl)butane",
    FiveAminoOnePyridinFourYlPentane => "5-Amino-1-(pyridin-4-yl)pentane",
    FiveAlkylaminoOnePyridinFourYlPentane => "5-Alkylamino-1-(pyridin-4-yl)pentane",
    FiveAcylaminoOnePyridinFourYlPentane => "5-Acylamino-1-(pyridin-4-yl)pentane",
    SixAminoOnePyridinFourYlHexane => "6-Amino-1-(pyridin-4-yl)hexane",
    SixAlkylaminoOnePyridinFourYlHexane => "6-Alkylamino-1-(pyridin-4-yl)hexane",
    SixAcylaminoOnePyridinFourYlHexane => "6-Acylamino-1-(pyridin-4-yl)hexane",
    SevenAminoOnePyridinFourYlHeptane => "7-Amino-1-(pyridin-4-yl)heptane",
    SevenAlkylaminoOnePyridinFourYlHeptane => "7-Alkylamino-1-(pyridin-4-yl)heptane",
    SevenAcylaminoOnePyridinFourYlHeptane => "7-Acylamino-1-(pyridin-4-yl)heptane",
    EightAminoOnePyridinFourYlOctane => "8-Amino-1-(pyridin-4-yl)octane",
    EightAlkylaminoOnePyridinFourYlOctane => "8-Alkylamino-1-(pyridin-4-yl)octane",
    EightAcylaminoOnePyridinFourYlOctane => "8-Acylamino-1-(pyridin-4-yl)octane",
    OneMercaptoOnePyridinFourYlMethane => "1-Mercapto-1-(pyridin-4-yl)methane",
    OneAlkylthioOnePyridinFourYlMethane => "1-Alkylthio-1-(pyridin-4-yl)methane",
    OneSulfonylOnePyridinFourYlMethane => "1-Sulfonyl-1-(pyridin-4-yl)methane",
    TwoMercaptoOnePyridinFourYlEthane => "2-Mercapto-1-(pyridin-4-yl)ethane",
    TwoAlkylthioOnePyridinFourYlEthane => "2-Alkylthio-1-(pyridin-4-yl)ethane",
    TwoSulfonylOnePyridinFourYlEthane => "2-Sulfonyl-1-(pyridin-4-yl)ethane",
    ThreeMercaptoOnePyridinFourYlPropane => "3-Mercapto-1-(pyridin-4-yl)propane",
    ThreeAlkylthioOnePyridinFourYlPropane => "3-Alkylthio-1-(pyridin-4-yl)propane",
    ThreeSulfonylOnePyridinFourYlPropane => "3-Sulfonyl-1-(pyridin-4-yl)propane",
    FourMercaptoOnePyridinFourYlButane => "4-Mercapto-1-(pyridin-4-yl)butane",
    FourAlkylthioOnePyridinFourYlButane => "4-Alkylthio-1-(pyridin-4-yl)butane",
    FourSulfonylOnePyridinFourYlButane => "4-Sulfonyl-1-(pyridin-4-yl)butane",
    FiveMercaptoOnePyridinFourYlPentane => "5-Mercapto-1-(pyridin-4-yl)pentane",
    FiveAlkylthioOnePyridinFourYlPentane => "5-Alkylthio-1-(pyridin-4-yl)pentane",
    FiveSulfonylOnePyridinFourYlPentane => "5-Sulfonyl-1-(pyridin-4-yl)pentane",
    SixMercaptoOnePyridinFourYlHexane => "6-Mercapto-1-(pyridin-4-yl)hexane",
    SixAlkylthioOnePyridinFourYlHexane => "6-Alkylthio-1-(pyridin-4-yl)hexane",
    SixSulfonylOnePyridinFourYlHexane => "6-Sulfonyl-1-(pyridin-4-yl)hexane",
    SevenMercaptoOnePyridinFourYlHeptane => "7-Mercapto-1-(pyridin-4-yl)heptane",
    SevenAlkylthioOnePyridinFourYlHeptane => "7-Alkylthio-1-(pyridin-4-yl)heptane",
    SevenSulfonylOnePyridinFourYlHeptane => "7-Sulfonyl-1-(pyridin-4-yl)heptane",
    EightMercaptoOnePyridinFourYlOctane => "8-Mercapto-1-(pyridin-4-yl)octane",
    EightAlkylthioOnePyridinFourYlOctane => "8-Alkylthio-1-(pyridin-4-yl)octane",
    EightSulfonylOnePyridinFourYlOctane => "8-Sulfonyl-1-(pyridin-4-yl)octane",
    OneFluoroOnePyridinFourYlMethane => "1-Fluoro-1-(pyridin-4-yl)methane",
    TwoFluoroOnePyridinFourYlEthane => "2-Fluoro-1-(pyridin-4-yl)ethane",
    ThreeFluoroOnePyridinFourYlPropane => "3-Fluoro-1-(pyridin-4-yl)propane",
    FourFluoroOnePyridinFourYlButane => "4-Fluoro-1-(pyridin-4-yl)butane",
    FiveFluoroOnePyridinFourYlPentane => "5-Fluoro-1-(pyridin-4-yl)pentane",
    SixFluoroOnePyridinFourYlHexane => "6-Fluoro-1-(pyridin-4-yl)hexane",
    SevenFluoroOnePyridinFourYlHeptane => "7-Fluoro-1-(pyridin-4-yl)heptane",
    EightFluoroOnePyridinFourYlOctane => "8-Fluoro-1-(pyridin-4-yl)octane",
    OneChloroOnePyridinFourYlMethane => "1-Chloro-1-(pyridin-4-yl)methane",
    TwoChloroOnePyridinFourYlEthane => "2-Chloro-1-(pyridin-4-yl)ethane",
    ThreeChloroOnePyridinFourYlPropane => "3-Chloro-1-(pyridin-4-yl)propane",
    FourChloroOnePyridinFourYlButane => "4-Chloro-1-(pyridin-4-yl)butane",
    FiveChloroOnePyridinFourYlPentane => "5-Chloro-1-(pyridin-4-yl)pentane",
    SixChloroOnePyridinFourYlHexane => "6-Chloro-1-(pyridin-4-yl)hexane",
    SevenChloroOnePyridinFourYlHeptane => "7-Chloro-1-(pyridin-4-yl)heptane",
    EightChloroOnePyridinFourYlOctane => "8-Chloro-1-(pyridin-4-yl)octane",
    OneBromoOnePyridinFourYlMethane => "1-Bromo-1-(pyridin-4-yl)methane",
    TwoBromoOnePyridinFourYlEthane => "2-Bromo-1-(pyridin-4-yl)ethane",
    ThreeBromoOnePyridinFourYlPropane => "3-Bromo-1-(pyridin-4-yl)propane",
    FourBromoOnePyridinFourYlButane => "4-Bromo-1-(pyridin-4-yl)butane",
    FiveBromoOnePyridinFourYlPentane => "5-Bromo-1-(pyridin-4-yl)pentane",
    SixBromoOnePyridinFourYlHexane => "6-Bromo-1-(pyridin-4-yl)hexane",
    SevenBromoOnePyridinFourYlHeptane => "7-Bromo-1-(pyridin-4-yl)heptane",
    EightBromoOnePyridinFourYlOctane => "8-Bromo-1-(pyridin-4-yl)octane",
    OneIodoOnePyridinFourYlMethane => "1-Iodo-1-(pyridin-4-yl)methane",
    TwoIodoOnePyridinFourYlEthane => "2-Iodo-1-(pyridin-4-yl)ethane",
    ThreeIodoOnePyridinFourYlPropane => "3-Iodo-1-(pyridin-4-yl)propane",
    FourIodoOnePyridinFourYlButane => "4-Iodo-1-(pyridin-4-yl)butane",
    FiveIodoOnePyridinFourYlPentane => "5-Iodo-1-(pyridin-4-yl)pentane",
    SixIodoOnePyridinFourYlHexane => "6-Iodo-1-(pyridin-4-yl)hexane",
    SevenIodoOnePyridinFourYlHeptane => "7-Iodo-1-(pyridin-4-yl)heptane",
    EightIodoOnePyridinFourYlOctane => "8-Iodo-1-(pyridin-4-yl)octane",
    OneCarboxyOnePyrrolTwoYlMethane => "1-Carboxy-1-(pyrrol-2-yl)methane",
    OneAlkoxycarbonylOnePyrrolTwoYlMethane => "1-Alkoxycarbonyl-1-(pyrrol-2-yl)methane",
    OneCarbamoylOnePyrrolTwoYlMethane => "1-Carbamoyl-1-(pyrrol-2-yl)methane",
    OneFormylOnePyrrolTwoYlMethane => "1-Formyl-1-(pyrrol-2-yl)methane",
    OneAcylOnePyrrolTwoYlMethane => "1-Acyl-1-(pyrrol-2-yl)methane",
    OneCyanoOnePyrrolTwoYlMethane => "1-Cyano-1-(pyrrol-2-yl)methane",
    TwoCarboxyOnePyrrolTwoYlEthane => "2-Carboxy-1-(pyrrol-2-yl)ethane",
    TwoAlkoxycarbonylOnePyrrolTwoYlEthane => "2-Alkoxycarbonyl-1-(pyrrol-2-yl)ethane",
    TwoCarbamoylOnePyrrolTwoYlEthane => "2-Carbamoyl-1-(pyrrol-2-yl)ethane",
    TwoFormylOnePyrrolTwoYlEthane => "2-Formyl-1-(pyrrol-2-yl)ethane",
    TwoAcylOnePyrrolTwoYlEthane => "2-Acyl-1-(pyrrol-2-yl)ethane",
    TwoCyanoOnePyrrolTwoYlEthane => "2-Cyano-1-(pyrrol-2-yl)ethane",
    ThreeCarboxyOnePyrrolTwoYlPropane => "3-Carboxy-1-(pyrrol-2-yl)propane",
    ThreeAlkoxycarbonylOnePyrrolTwoYlPropane => "3-Alkoxycarbonyl-1-(pyrrol-2-yl)propane",
    ThreeCarbamoylOnePyrrolTwoYlPropane => "3-Carbamoyl-1-(pyrrol-2-yl)propane",
    ThreeFormylOnePyrrolTwoYlPropane => "3-Formyl-1-(pyrrol-2-yl)propane",
    ThreeAcylOnePyrrolTwoYlPropane => "3-Acyl-1-(pyrrol-2-yl)propane",
    ThreeCyanoOnePyrrolTwoYlPropane => "3-Cyano-1-(pyrrol-2-yl)propane",
    FourCarboxyOnePyrrolTwoYlButane => "4-Carboxy-1-(pyrrol-2-yl)butane",
    FourAlkoxycarbonylOnePyrrolTwoYlButane => "4-Alkoxycarbonyl-1-(pyrrol-2-yl)butane",
    FourCarbamoylOnePyrrolTwoYlButane => "4-Carbamoyl-1-(pyrrol-2-yl)butane",
    FourFormylOnePyrrolTwoYlButane => "4-Formyl-1-(pyrrol-2-yl)butane",
    FourAcylOnePyrrolTwoYlButane => "4-Acyl-1-(pyrrol-2-yl)butane",
    FourCyanoOnePyrrolTwoYlButane => "4-Cyano-1-(pyrrol-2-yl)butane",
    FiveCarboxyOnePyrrolTwoYlPentane => "5-Carboxy-1-(pyrrol-2-yl)pentane",
    FiveAlkoxycarbonylOnePyrrolTwoYlPentane => "5-Alkoxycarbonyl-1-(pyrrol-2-yl)pentane",
    FiveCarbamoylOnePyrrolTwoYlPentane => "5-Carbamoyl-1-(pyrrol-2-yl)pentane",
    FiveFormylOnePyrrolTwoYlPentane => "5-Formyl-1-(pyrrol-2-yl)pentane",
    FiveAcylOnePyrrolTwoYlPentane => "5-Acyl-1-(pyrrol-2-yl)pentane",
    FiveCyanoOnePyrrolTwoYlPentane => "5-Cyano-1-(pyrrol-2-yl)pentane",
    SixCarboxyOnePyrrolTwoYlHexane => "6-Carboxy-1-(pyrrol-2-yl)hexane",
    SixAlkoxycarbonylOnePyrrolTwoYlHexane => "6-Alkoxycarbonyl-1-(pyrrol-2-yl)hexane",
    SixCarbamoylOnePyrrolTwoYlHexane => "6-Carbamoyl-1-(pyrrol-2-yl)hexane",
    SixFormylOnePyrrolTwoYlHexane => "6-Formyl-1-(pyrrol-2-yl)hexane",
    SixAcylOnePyrrolTwoYlHexane => "6-Acyl-1-(pyrrol-2-yl)hexane",
    SixCyanoOnePyrrolTwoYlHexane => "6-Cyano-1-(pyrrol-2-yl)hexane",
    SevenCarboxyOnePyrrolTwoYlHeptane => "7-Carboxy-1-(pyrrol-2-yl)heptane",
    SevenAlkoxycarbonylOnePyrrolTwoYlHeptane => "7-Alkoxycarbonyl-1-(pyrrol-2-yl)heptane",
    SevenCarbamoylOnePyrrolTwoYlHeptane => "7-Carbamoyl-1-(pyrrol-2-yl)heptane",
    SevenFormylOnePyrrolTwoYlHeptane => "7-Formyl-1-(pyrrol-2-yl)heptane",
    SevenAcylOnePyrrolTwoYlHeptane => "7-Acyl-1-(pyrrol-2-yl)heptane",
    SevenCyanoOnePyrrolTwoYlHeptane => "7-Cyano-1-(pyrrol-2-yl)heptane",
    EightCarboxyOnePyrrolTwoYlOctane => "8-Carboxy-1-(pyrrol-2-yl)octane",
    EightAlkoxycarbonylOnePyrrolTwoYlOctane => "8-Alkoxycarbonyl-1-(pyrrol-2-yl)octane",
    EightCarbamoylOnePyrrolTwoYlOctane => "8-Carbamoyl-1-(pyrrol-2-yl)octane",
    EightFormylOnePyrrolTwoYlOctane => "8-Formyl-1-(pyrrol-2-yl)octane",
    EightAcylOnePyrrolTwoYlOctane => "8-Acyl-1-(pyrrol-2-yl)octane",
    EightCyanoOnePyrrolTwoYlOctane => "8-Cyano-1-(pyrrol-2-yl)octane",
    NineCarboxyOnePyrrolTwoYlNonane => "9-Carboxy-1-(pyrrol-2-yl)nonane",
    NineAlkoxycarbonylOnePyrrolTwoYlNonane => "9-Alkoxycarbonyl-1-(pyrrol-2-yl)nonane",
    NineCarbamoylOnePyrrolTwoYlNonane => "9-Carbamoyl-1-(pyrrol-2-yl)nonane",
    NineFormylOnePyrrolTwoYlNonane => "9-Formyl-1-(pyrrol-2-yl)nonane",
    NineAcylOnePyrrolTwoYlNonane => "9-Acyl-1-(pyrrol-2-yl)nonane",
    NineCyanoOnePyrrolTwoYlNonane => "9-Cyano-1-(pyrrol-2-yl)nonane",
    TenCarboxyOnePyrrolTwoYlDecane => "10-Carboxy-1-(pyrrol-2-yl)decane",
    TenAlkoxycarbonylOnePyrrolTwoYlDecane => "10-Alkoxycarbonyl-1-(pyrrol-2-yl)decane",
    TenCarbamoylOnePyrrolTwoYlDecane => "10-Carbamoyl-1-(pyrrol-2-yl)decane",
    TenFormylOnePyrrolTwoYlDecane => "10-Formyl-1-(pyrrol-2-yl)decane",
    TenAcylOnePyrrolTwoYlDecane => "10-Acyl-1-(pyrrol-2-yl)decane",
    TenCyanoOnePyrrolTwoYlDecane => "10-Cyano-1-(pyrrol-2-yl)decane",
    OneHydroxyOnePyrrolTwoYlMethane => "1-Hydroxy-1-(pyrrol-2-yl)methane",
    OneMethoxyOnePyrrolTwoYlMethane => "1-Methoxy-1-(pyrrol-2-yl)methane",
    OneAlkoxyOnePyrrolTwoYlMethane => "1-Alkoxy-1-(pyrrol-2-yl)methane",
    OneAcyloxyOnePyrrolTwoYlMethane => "1-Acyloxy-1-(pyrrol-2-yl)methane",
    TwoHydroxyOnePyrrolTwoYlEthane => "2-Hydroxy-1-(pyrrol-2-yl)ethane",
    TwoMethoxyOnePyrrolTwoYlEthane => "2-Methoxy-1-(pyrrol-2-yl)ethane",
    TwoAlkoxyOnePyrrolTwoYlEthane => "2-Alkoxy-1-(pyrrol-2-yl)ethane",
    TwoAcyloxyOnePyrrolTwoYlEthane => "2-Acyloxy-1-(pyrrol-2-yl)ethane",
    ThreeHydroxyOnePyrrolTwoYlPropane => "3-Hydroxy-1-(pyrrol-2-yl)propane",
    ThreeMethoxyOnePyrrolTwoYlPropane => "3-Methoxy-1-(pyrrol-2-yl)propane",
    ThreeAlkoxyOnePyrrolTwoYlPropane => "3-Alkoxy-1-(pyrrol-2-yl)propane",
    ThreeAcyloxyOnePyrrolTwoYlPropane => "3-Acyloxy-1-(pyrrol-2-yl)propane",
    FourHydroxyOnePyrrolTwoYlButane => "4-Hydroxy-1-(pyrrol-2-yl)butane",
    FourMethoxyOnePyrrolTwoYlButane => "4-Methoxy-1-(pyrrol-2-yl)butane",
    FourAlkoxyOnePyrrolTwoYlButane => "4-Alkoxy-1-(pyrrol-2-yl)butane",
    FourAcyloxyOnePyrrolTwoYlButane => "4-Acyloxy-1-(pyrrol-2-yl)butane",
    FiveHydroxyOnePyrrolTwoYlPentane => "5-Hydroxy-1-(pyrrol-2-yl)pentane",
    FiveMethoxyOnePyrrolTwoYlPentane => "5-Methoxy-1-(pyrrol-2-yl)pentane",
    FiveAlkoxyOnePyrrolTwoYlPentane => "5-Alkoxy-1-(pyrrol-2-yl)pentane",
    FiveAcyloxyOnePyrrolTwoYlPentane => "5-Acyloxy-1-(pyrrol-2-yl)pentane",
    SixHydroxyOnePyrrolTwoYlHexane => "6-Hydroxy-1-(pyrrol-2-yl)hexane",
    SixMethoxyOnePyrrolTwoYlHexane => "6-Methoxy-1-(pyrrol-2-yl)hexane",
    SixAlkoxyOnePyrrolTwoYlHexane => "6-Alkoxy-1-(pyrrol-2-yl)hexane",
    SixAcyloxyOnePyrrolTwoYlHexane => "6-Acyloxy-1-(pyrrol-2-yl)hexane",
    SevenHydroxyOnePyrrolTwoYlHeptane => "7-Hydroxy-1-(pyrrol-2-yl)heptane",
    SevenMethoxyOnePyrrolTwoYlHeptane => "7-Methoxy-1-(pyrrol-2-yl)heptane",
    SevenAlkoxyOnePyrrolTwoYlHeptane => "7-Alkoxy-1-(pyrrol-2-yl)heptane",
    SevenAcyloxyOnePyrrolTwoYlHeptane => "7-Acyloxy-1-(pyrrol-2-yl)heptane",
    EightHydroxyOnePyrrolTwoYlOctane => "8-Hydroxy-1-(pyrrol-2-yl)octane",
    EightMethoxyOnePyrrolTwoYlOctane => "8-Methoxy-1-(pyrrol-2-yl)octane",
    EightAlkoxyOnePyrrolTwoYlOctane => "8-Alkoxy-1-(pyrrol-2-yl)octane",
    EightAcyloxyOnePyrrolTwoYlOctane => "8-Acyloxy-1-(pyrrol-2-yl)octane",
    NineHydroxyOnePyrrolTwoYlNonane => "9-Hydroxy-1-(pyrrol-2-yl)nonane",
    NineMethoxyOnePyrrolTwoYlNonane => "9-Methoxy-1-(pyrrol-2-yl)nonane",
    NineAlkoxyOnePyrrolTwoYlNonane => "9-Alkoxy-1-(pyrrol-2-yl)nonane",
    NineAcyloxyOnePyrrolTwoYlNonane => "9-Acyloxy-1-(pyrrol-2-yl)nonane",
    TenHydroxyOnePyrrolTwoYlDecane => "10-Hydroxy-1-(pyrrol-2-yl)decane",
    TenMethoxyOnePyrrolTwoYlDecane => "10-Methoxy-1-(pyrrol-2-yl)decane",
    TenAlkoxyOnePyrrolTwoYlDecane => "10-Alkoxy-1-(pyrrol-2-yl)decane",
    TenAcyloxyOnePyrrolTwoYlDecane => "10-Acyloxy-1-(pyrrol-2-yl)decane",
    OneAminoOnePyrrolTwoYlMethane => "1-Amino-1-(pyrrol-2-yl)methane",
    OneAlkylaminoOnePyrrolTwoYlMethane => "1-Alkylamino-1-(pyrrol-2-yl)methane",
    OneAcylaminoOnePyrrolTwoYlMethane => "1-Acylamino-1-(pyrrol-2-yl)methane",
    TwoAminoOnePyrrolTwoYlEthane => "2-Amino-1-(pyrrol-2-yl)ethane",
    TwoAlkylaminoOnePyrrolTwoYlEthane => "2-Alkylamino-1-(pyrrol-2-yl)ethane",
    TwoAcylaminoOnePyrrolTwoYlEthane => "2-Acylamino-1-(pyrrol-2-yl)ethane",
    ThreeAminoOnePyrrolTwoYlPropane => "3-Amino-1-(pyrrol-2-yl)propane",
    ThreeAlkylaminoOnePyrrolTwoYlPropane => "3-Alkylamino-1-(pyrrol-2-yl)propane",
    ThreeAcylaminoOnePyrrolTwoYlPropane => "3-Acylamino-1-(pyrrol-2-yl)propane",
    FourAminoOnePyrrolTwoYlButane => "4-Amino-1-(pyrrol-2-yl)butane",
    FourAlkylaminoOnePyrrolTwoYlButane => "4-Alkylamino-1-(pyrrol-2-yl)butane",
    FourAcylaminoOnePyrrolTwoYlButane => "4-Acylamino-1-(pyrrol-2-yl)butane",
    FiveAminoOnePyrrolTwoYlPentane => "5-Amino-1-(pyrrol-2-yl)pentane",
    FiveAlkylaminoOnePyrrolTwoYlPentane => "5-Alkylamino-1-(pyrrol-2-yl)pentane",
    FiveAcylaminoOnePyrrolTwoYlPentane => "5-Acylamino-1-(pyrrol-2-yl)pentane",
    SixAminoOnePyrrolTwoYlHexane => "6-Amino-1-(pyrrol-2-yl)hexane",
    SixAlkylaminoOnePyrrolTwoYlHexane => "6-Alkylamino-1-(pyrrol-2-yl)hexane",
    SixAcylaminoOnePyrrolTwoYlHexane => "6-Acylamino-1-(pyrrol-2-yl)hexane",
    SevenAminoOnePyrrolTwoYlHeptane => "7-Amino-1-(pyrrol-2-yl)heptane",
    SevenAlkylaminoOnePyrrolTwoYlHeptane => "7-Alkylamino-1-(pyrrol-2-yl)heptane",
    SevenAcylaminoOnePyrrolTwoYlHeptane => "7-Acylamino-1-(pyrrol-2-yl)heptane",
    EightAminoOnePyrrolTwoYlOctane => "8-Amino-1-(pyrrol-2-yl)octane",
    EightAlkylaminoOnePyrrolTwoYlOctane => "8-Alkylamino-1-(pyrrol-2-yl)octane",
    EightAcylaminoOnePyrrolTwoYlOctane => "8-Acylamino-1-(pyrrol-2-yl)octane",
    NineAminoOnePyrrolTwoYlNonane => "9-Amino-1-(pyrrol-2-yl)nonane",
    NineAlkylaminoOnePyrrolTwoYlNonane => "9-Alkylamino-1-(pyrrol-2-yl)nonane",
    NineAcylaminoOnePyrrolTwoYlNonane => "9-Acylamino-1-(pyrrol-2-yl)nonane",
    TenAminoOnePyrrolTwoYlDecane => "10-Amino-1-(pyrrol-2-yl)decane",
    TenAlkylaminoOnePyrrolTwoYlDecane => "10-Alkylamino-1-(pyrrol-2-yl)decane",
    TenAcylaminoOnePyrrolTwoYlDecane => "10-Acylamino-1-(pyrrol-2-yl)decane",
    OneMercaptoOnePyrrolTwoYlMethane => "1-Mercapto-1-(pyrrol-2-yl)methane",
    OneAlkylthioOnePyrrolTwoYlMethane => "1-Alkylthio-1-(pyrrol-2-yl)methane",
    OneSulfonylOnePyrrolTwoYlMethane => "1-Sulfonyl-1-(pyrrol-2-yl)methane",
    TwoMercaptoOnePyrrolTwoYlEthane => "2-Mercapto-1-(pyrrol-2-yl)ethane",
    TwoAlkylthioOnePyrrolTwoYlEthane => "2-Alkylthio-1-(pyrrol-2-yl)ethane",
    TwoSulfonylOnePyrrolTwoYlEthane => "2-Sulfonyl-1-(pyrrol-2-yl)ethane",
    ThreeMercaptoOnePyrrolTwoYlPropane => "3-Mercapto-1-(pyrrol-2-yl)propane",
    ThreeAlkylthioOnePyrrolTwoYlPropane => "3-Alkylthio-1-(pyrrol-2-yl)propane",
    ThreeSulfonylOnePyrrolTwoYlPropane => "3-Sulfonyl-1-(pyrrol-2-yl)propane",
    FourMercaptoOnePyrrolTwoYlButane => "4-Mercapto-1-(pyrrol-2-yl)butane",
    FourAlkylthioOnePyrrolTwoYlButane => "4-Alkylthio-1-(pyrrol-2-yl)butane",
    FourSulfonylOnePyrrolTwoYlButane => "4-Sulfonyl-1-(pyrrol-2-yl)butane",
    FiveMercaptoOnePyrrolTwoYlPentane => "5-Mercapto-1-(pyrrol-2-yl)pentane",
    FiveAlkylthioOnePyrrolTwoYlPentane => "5-Alkylthio-1-(pyrrol-2-yl)pentane",
    FiveSulfonylOnePyrrolTwoYlPentane => "5-Sulfonyl-1-(pyrrol-2-yl)pentane",
    SixMercaptoOnePyrrolTwoYlHexane => "6-Mercapto-1-(pyrrol-2-yl)hexane",
    SixAlkylthioOnePyrrolTwoYlHexane => "6-Alkylthio-1-(pyrrol-2-yl)hexane",
    SixSulfonylOnePyrrolTwoYlHexane => "6-Sulfonyl-1-(pyrrol-2-yl)hexane",
    SevenMercaptoOnePyrrolTwoYlHeptane => "7-Mercapto-1-(pyrrol-2-yl)heptane",
    SevenAlkylthioOnePyrrolTwoYlHeptane => "7-Alkylthio-1-(pyrrol-2-yl)heptane",
    SevenSulfonylOnePyrrolTwoYlHeptane => "7-Sulfonyl-1-(pyrrol-2-yl)heptane",
    EightMercaptoOnePyrrolTwoYlOctane => "8-Mercapto-1-(pyrrol-2-yl)octane",
    EightAlkylthioOnePyrrolTwoYlOctane => "8-Alkylthio-1-(pyrrol-2-yl)octane",
    EightSulfonylOnePyrrolTwoYlOctane => "8-Sulfonyl-1-(pyrrol-2-yl)octane",
    NineMercaptoOnePyrrolTwoYlNonane => "9-Mercapto-1-(pyrrol-2-yl)nonane",
    NineAlkylthioOnePyrrolTwoYlNonane => "9-Alkylthio-1-(pyrrol-2-yl)nonane",
    NineSulfonylOnePyrrolTwoYlNonane => "9-Sulfonyl-1-(pyrrol-2-yl)nonane",
    TenMercaptoOnePyrrolTwoYlDecane => "10-Mercapto-1-(pyrrol-2-yl)decane",
    TenAlkylthioOnePyrrolTwoYlDecane => "10-Alkylthio-1-(pyrrol-2-yl)decane",
    TenSulfonylOnePyrrolTwoYlDecane => "10-Sulfonyl-1-(pyrrol-2-yl)decane",
    OneFluoroOnePyrrolTwoYlMethane => "1-Fluoro-1-(pyrrol-2-yl)methane",
    TwoFluoroOnePyrrolTwoYlEthane => "2-Fluoro-1-(pyrrol-2-yl)ethane",
    ThreeFluoroOnePyrrolTwoYlPropane => "3-Fluoro-1-(pyrrol-2-yl)propane",
    FourFluoroOnePyrrolTwoYlButane => "4-Fluoro-1-(pyrrol-2-yl)butane",
    FiveFluoroOnePyrrolTwoYlPentane => "5-Fluoro-1-(pyrrol-2-yl)pentane",
    SixFluoroOnePyrrolTwoYlHexane => "6-Fluoro-1-(pyrrol-2-yl)hexane",
    SevenFluoroOnePyrrolTwoYlHeptane => "7-Fluoro-1-(pyrrol-2-yl)heptane",
    EightFluoroOnePyrrolTwoYlOctane => "8-Fluoro-1-(pyrrol-2-yl)octane",
    NineFluoroOnePyrrolTwoYlNonane => "9-Fluoro-1-(pyrrol-2-yl)nonane",
    TenFluoroOnePyrrolTwoYlDecane => "10-Fluoro-1-(pyrrol-2-yl)decane",
    OneChloroOnePyrrolTwoYlMethane => "1-Chloro-1-(pyrrol-2-yl)methane",
    TwoChloroOnePyrrolTwoYlEthane => "2-Chloro-1-(pyrrol-2-yl)ethane",
    ThreeChloroOnePyrrolTwoYlPropane => "3-Chloro-1-(pyrrol-2-yl)propane",
    FourChloroOnePyrrolTwoYlButane => "4-Chloro-1-(pyrrol-2-yl)butane",
    FiveChloroOnePyrrolTwoYlPentane => "5-Chloro-1-(pyrrol-2-yl)pentane",
    SixChloroOnePyrrolTwoYlHexane => "6-Chloro-1-(pyrrol-2-yl)hexane",
    SevenChloroOnePyrrolTwoYlHeptane => "7-Chloro-1-(pyrrol-2-yl)heptane",
    EightChloroOnePyrrolTwoYlOctane => "8-Chloro-1-(pyrrol-2-yl)octane",
    NineChloroOnePyrrolTwoYlNonane => "9-Chloro-1-(pyrrol-2-yl)nonane",
    TenChloroOnePyrrolTwoYlDecane => "10-Chloro-1-(pyrrol-2-yl)decane",
    OneBromoOnePyrrolTwoYlMethane => "1-Bromo-1-(pyrrol-2-yl)methane",
    TwoBromoOnePyrrolTwoYlEthane => "2-Bromo-1-(pyrrol-2-yl)ethane",
    ThreeBromoOnePyrrolTwoYlPropane => "3-Bromo-1-(pyrrol-2-yl)propane",
    FourBromoOnePyrrolTwoYlButane => "4-Bromo-1-(pyrrol-2-yl)butane",
    FiveBromoOnePyrrolTwoYlPentane => "5-Bromo-1-(pyrrol-2-yl)pentane",
    SixBromoOnePyrrolTwoYlHexane => "6-Bromo-1-(pyrrol-2-yl)hexane",
    SevenBromoOnePyrrolTwoYlHeptane => "7-Bromo-1-(pyrrol-2-yl)heptane",
    EightBromoOnePyrrolTwoYlOctane => "8-Bromo-1-(pyrrol-2-yl)octane",
    NineBromoOnePyrrolTwoYlNonane => "9-Bromo-1-(pyrrol-2-yl)nonane",
    TenBromoOnePyrrolTwoYlDecane => "10-Bromo-1-(pyrrol-2-yl)decane",
    OneIodoOnePyrrolTwoYlMethane => "1-Iodo-1-(pyrrol-2-yl)methane",
    TwoIodoOnePyrrolTwoYlEthane => "2-Iodo-1-(pyrrol-2-yl)ethane",
    ThreeIodoOnePyrrolTwoYlPropane => "3-Iodo-1-(pyrrol-2-yl)propane",
    FourIodoOnePyrrolTwoYlButane => "4-Iodo-1-(pyrrol-2-yl)butane",
    FiveIodoOnePyrrolTwoYlPentane => "5-Iodo-1-(pyrrol-2-yl)pentane",
    SixIodoOnePyrrolTwoYlHexane => "6-Iodo-1-(pyrrol-2-yl)hexane",
    SevenIodoOnePyrrolTwoYlHeptane => "7-Iodo-1-(pyrrol-2-yl)heptane",
    EightIodoOnePyrrolTwoYlOctane => "8-Iodo-1-(pyrrol-2-yl)octane",
    NineIodoOnePyrrolTwoYlNonane => "9-Iodo-1-(pyrrol-2-yl)nonane",
    TenIodoOnePyrrolTwoYlDecane => "10-Iodo-1-(pyrrol-2-yl)decane",
    OneCarboxyOneFuranTwoYlMethane => "1-Carboxy-1-(furan-2-yl)methane",
    OneAlkoxycarbonylOneFuranTwoYlMethane => "1-Alkoxycarbonyl-1-(furan-2-yl)methane",
    OneCarbamoylOneFuranTwoYlMethane => "1-Carbamoyl-1-(furan-2-yl)methane",
    OneFormylOneFuranTwoYlMethane => "1-Formyl-1-(furan-2-yl)methane",
    OneAcylOneFuranTwoYlMethane => "1-Acyl-1-(furan-2-yl)methane",
    OneCyanoOneFuranTwoYlMethane => "1-Cyano-1-(furan-2-yl)methane",
    TwoCarboxyOneFuranTwoYlEthane => "2-Carboxy-1-(furan-2-yl)ethane",
    TwoAlkoxycarbonylOneFuranTwoYlEthane => "2-Alkoxycarbonyl-1-(furan-2-yl)ethane",
    TwoCarbamoylOneFuranTwoYlEthane => "2-Carbamoyl-1-(furan-2-yl)ethane",
    TwoFormylOneFuranTwoYlEthane => "2-Formyl-1-(furan-2-yl)ethane",
    TwoAcylOneFuranTwoYlEthane => "2-Acyl-1-(furan-2-yl)ethane",
    TwoCyanoOneFuranTwoYlEthane => "2-Cyano-1-(furan-2-yl)ethane",
    ThreeCarboxyOneFuranTwoYlPropane => "3-Carboxy-1-(furan-2-yl)propane",
    ThreeAlkoxycarbonylOneFuranTwoYlPropane => "3-Alkoxycarbonyl-1-(furan-2-yl)propane",
    ThreeCarbamoylOneFuranTwoYlPropane => "3-Carbamoyl-1-(furan-2-yl)propane",
    ThreeFormylOneFuranTwoYlPropane => "3-Formyl-1-(furan-2-yl)propane",
    ThreeAcylOneFuranTwoYlPropane => "3-Acyl-1-(furan-2-yl)propane",
    ThreeCyanoOneFuranTwoYlPropane => "3-Cyano-1-(furan-2-yl)propane",
    FourCarboxyOneFuranTwoYlButane => "4-Carboxy-1-(furan-2-yl)butane",
    FourAlkoxycarbonylOneFuranTwoYlButane => "4-Alkoxycarbonyl-1-(furan-2-yl)butane",
    FourCarbamoylOneFuranTwoYlButane => "4-Carbamoyl-1-(furan-2-yl)butane",
    FourFormylOneFuranTwoYlButane => "4-Formyl-1-(furan-2-yl)butane",
    FourAcylOneFuranTwoYlButane => "4-Acyl-1-(furan-2-yl)butane",
    FourCyanoOneFuranTwoYlButane => "4-Cyano-1-(furan-2-yl)butane",
    FiveCarboxyOneFuranTwoYlPentane => "5-Carboxy-1-(furan-2-yl)pentane",
    FiveAlkoxycarbonylOneFuranTwoYlPentane => "5-Alkoxycarbonyl-1-(furan-2-yl)pentane",
    FiveCarbamoylOneFuranTwoYlPentane => "5-Carbamoyl-1-(furan-2-yl)pentane",
    FiveFormylOneFuranTwoYlPentane => "5-Formyl-1-(furan-2-yl)pentane",
    FiveAcylOneFuranTwoYlPentane => "5-Acyl-1-(furan-2-yl)pentane",
    FiveCyanoOneFuranTwoYlPentane => "5-Cyano-1-(furan-2-yl)pentane",
    SixCarboxyOneFuranTwoYlHexane => "6-Carboxy-1-(furan-2-yl)hexane",
    SixAlkoxycarbonylOneFuranTwoYlHexane => "6-Alkoxycarbonyl-1-(furan-2-yl)hexane",
    SixCarbamoylOneFuranTwoYlHexane => "6-Carbamoyl-1-(furan-2-yl)hexane",
    SixFormylOneFuranTwoYlHexane => "6-Formyl-1-(furan-2-yl)hexane",
    SixAcylOneFuranTwoYlHexane => "6-Acyl-1-(furan-2-yl)hexane",
    SixCyanoOneFuranTwoYlHexane => "6-Cyano-1-(furan-2-yl)hexane",
    SevenCarboxyOneFuranTwoYlHeptane => "7-Carboxy-1-(furan-2-yl)heptane",
    SevenAlkoxycarbonylOneFuranTwoYlHeptane => "7-Alkoxycarbonyl-1-(furan-2-yl)heptane",
    SevenCarbamoylOneFuranTwoYlHeptane => "7-Carbamoyl-1-(furan-2-yl)heptane",
    SevenFormylOneFuranTwoYlHeptane => "7-Formyl-1-(furan-2-yl)heptane",
    SevenAcylOneFuranTwoYlHeptane => "7-Acyl-1-(furan-2-yl)heptane",
    SevenCyanoOneFuranTwoYlHeptane => "7-Cyano-1-(furan-2-yl)heptane",
    EightCarboxyOneFuranTwoYlOctane => "8-Carboxy-1-(furan-2-yl)octane",
    EightAlkoxycarbonylOneFuranTwoYlOctane => "8-Alkoxycarbonyl-1-(furan-2-yl)octane",
    EightCarbamoylOneFuranTwoYlOctane => "8-Carbamoyl-1-(furan-2-yl)octane",
    EightFormylOneFuranTwoYlOctane => "8-Formyl-1-(furan-2-yl)octane",
    EightAcylOneFuranTwoYlOctane => "8-Acyl-1-(furan-2-yl)octane",
    EightCyanoOneFuranTwoYlOctane => "8-Cyano-1-(furan-2-yl)octane",
    NineCarboxyOneFuranTwoYlNonane => "9-Carboxy-1-(furan-2-yl)nonane",
    NineAlkoxycarbonylOneFuranTwoYlNonane => "9-Alkoxycarbonyl-1-(furan-2-yl)nonane",
    NineCarbamoylOneFuranTwoYlNonane => "9-Carbamoyl-1-(furan-2-yl)nonane",
    NineFormylOneFuranTwoYlNonane => "9-Formyl-1-(furan-2-yl)nonane",
    NineAcylOneFuranTwoYlNonane => "9-Acyl-1-(furan-2-yl)nonane",
    NineCyanoOneFuranTwoYlNonane => "9-Cyano-1-(furan-2-yl)nonane",
    TenCarboxyOneFuranTwoYlDecane => "10-Carboxy-1-(furan-2-yl)decane",
    TenAlkoxycarbonylOneFuranTwoYlDecane => "10-Alkoxycarbonyl-1-(furan-2-yl)decane",
    TenCarbamoylOneFuranTwoYlDecane => "10-Carbamoyl-1-(furan-2-yl)decane",
    TenFormylOneFuranTwoYlDecane => "10-Formyl-1-(furan-2-yl)decane",
    TenAcylOneFuranTwoYlDecane => "10-Acyl-1-(furan-2-yl)decane",
    TenCyanoOneFuranTwoYlDecane => "10-Cyano-1-(furan-2-yl)decane",
    OneHydroxyOneFuranTwoYlMethane => "1-Hydroxy-1-(furan-2-yl)methane",
    OneMethoxyOneFuranTwoYlMethane => "1-Methoxy-1-(furan-2-yl)methane",
    OneAlkoxyOneFuranTwoYlMethane => "1-Alkoxy-1-(furan-2-yl)methane",
    OneAcyloxyOneFuranTwoYlMethane => "1-Acyloxy-1-(furan-2-yl)methane",
    TwoHydroxyOneFuranTwoYlEthane => "2-Hydroxy-1-(furan-2-yl)ethane",
    TwoMethoxyOneFuranTwoYlEthane => "2-Methoxy-1-(furan-2-yl)ethane",
    TwoAlkoxyOneFuranTwoYlEthane => "2-Alkoxy-1-(furan-2-yl)ethane",
    TwoAcyloxyOneFuranTwoYlEthane => "2-Acyloxy-1-(furan-2-yl)ethane",
    ThreeHydroxyOneFuranTwoYlPropane => "3-Hydroxy-1-(furan-2-yl)propane",
    ThreeMethoxyOneFuranTwoYlPropane => "3-Methoxy-1-(furan-2-yl)propane",
    ThreeAlkoxyOneFuranTwoYlPropane => "3-Alkoxy-1-(furan-2-yl)propane",
    ThreeAcyloxyOneFuranTwoYlPropane => "3-Acyloxy-1-(furan-2-yl)propane",
    FourHydroxyOneFuranTwoYlButane => "4-Hydroxy-1-(furan-2-yl)butane",
    FourMethoxyOneFuranTwoYlButane => "4-Methoxy-1-(furan-2-yl)butane",
    FourAlkoxyOneFuranTwoYlButane => "4-Alkoxy-1-(furan-2-yl)butane",
    FourAcyloxyOneFuranTwoYlButane => "4-Acyloxy-1-(furan-2-yl)butane",
    FiveHydroxyOneFuranTwoYlPentane => "5-Hydroxy-1-(furan-2-yl)pentane",
    FiveMethoxyOneFuranTwoYlPentane => "5-Methoxy-1-(furan-2-yl)pentane",
    FiveAlkoxyOneFuranTwoYlPentane => "5-Alkoxy-1-(furan-2-yl)pentane",
    FiveAcyloxyOneFuranTwoYlPentane => "5-Acyloxy-1-(furan-2-yl)pentane",
    SixHydroxyOneFuranTwoYlHexane => "6-Hydroxy-1-(furan-2-yl)hexane",
    SixMethoxyOneFuranTwoYlHexane => "6-Methoxy-1-(furan-2-yl)hexane",
    SixAlkoxyOneFuranTwoYlHexane => "6-Alkoxy-1-(furan-2-yl)hexane",
    SixAcyloxyOneFuranTwoYlHexane => "6-Acyloxy-1-(furan-2-yl)hexane",
    SevenHydroxyOneFuranTwoYlHeptane => "7-Hydroxy-1-(furan-2-yl)heptane",
    SevenMethoxyOneFuranTwoYlHeptane => "7-Methoxy-1-(furan-2-yl)heptane",
    SevenAlkoxyOneFuranTwoYlHeptane => "7-Alkoxy-1-(furan-2-yl)heptane",
    SevenAcyloxyOneFuranTwoYlHeptane => "7-Acyloxy-1-(furan-2-yl)heptane",
    EightHydroxyOneFuranTwoYlOctane => "8-Hydroxy-1-(furan-2-yl)octane",
    EightMethoxyOneFuranTwoYlOctane => "8-Methoxy-1-(furan-2-yl)octane",
    EightAlkoxyOneFuranTwoYlOctane => "8-Alkoxy-1-(furan-2-yl)octane",
    EightAcyloxyOneFuranTwoYlOctane => "8-Acyloxy-1-(furan-2-yl)octane",
    NineHydroxyOneFuranTwoYlNonane => "9-Hydroxy-1-(furan-2-yl)nonane",
    NineMethoxyOneFuranTwoYlNonane => "9-Methoxy-1-(furan-2-yl)nonane",
    NineAlkoxyOneFuranTwoYlNonane => "9-Alkoxy-1-(furan-2-yl)nonane",
    NineAcyloxyOneFuranTwoYlNonane => "9-Acyloxy-1-(furan-2-yl)nonane",
    TenHydroxyOneFuranTwoYlDecane => "10-Hydroxy-1-(furan-2-yl)decane",
    TenMethoxyOneFuranTwoYlDecane => "10-Methoxy-1-(furan-2-yl)decane",
    TenAlkoxyOneFuranTwoYlDecane => "10-Alkoxy-1-(furan-2-yl)decane",
    TenAcyloxyOneFuranTwoYlDecane => "10-Acyloxy-1-(furan-2-yl)decane",
    OneAminoOneFuranTwoYlMethane => "1-Amino-1-(furan-2-yl)methane",
    OneAlkylaminoOneFuranTwoYlMethane => "1-Alkylamino-1-(furan-2-yl)methane",
    OneAcylaminoOneFuranTwoYlMethane => "1-Acylamino-1-(furan-2-yl)methane",
    TwoAminoOneFuranTwoYlEthane => "2-Amino-1-(furan-2-yl)ethane",
    TwoAlkylaminoOneFuranTwoYlEthane => "2-Alkylamino-1-(furan-2-yl)ethane",
    TwoAcylaminoOneFuranTwoYlEthane => "2-Acylamino-1-(furan-2-yl)ethane",
    ThreeAminoOneFuranTwoYlPropane => "3-Amino-1-(furan-2-yl)propane",
    ThreeAlkylaminoOneFuranTwoYlPropane => "3-Alkylamino-1-(furan-2-yl)propane",
    ThreeAcylaminoOneFuranTwoYlPropane => "3-Acylamino-1-(furan-2-yl)propane",
    FourAminoOneFuranTwoYlButane => "4-Amino-1-(furan-2-yl)butane",
    FourAlkylaminoOneFuranTwoYlButane => "4-Alkylamino-1-(furan-2-yl)butane",
    FourAcylaminoOneFuranTwoYlButane => "4-Acylamino-1-(furan-2-yl)butane",
    FiveAminoOneFuranTwoYlPentane => "5-Amino-1-(furan-2-yl)pentane",
    FiveAlkylaminoOneFuranTwoYlPentane => "5-Alkylamino-1-(furan-2-yl)pentane",
    FiveAcylaminoOneFuranTwoYlPentane => "5-Acylamino-1-(furan-2-yl)pentane",
    SixAminoOneFuranTwoYlHexane => "6-Amino-1-(furan-2-yl)hexane",
    SixAlkylaminoOneFuranTwoYlHexane => "6-Alkylamino-1-(furan-2-yl)hexane",
    SixAcylaminoOneFuranTwoYlHexane => "6-Acylamino-1-(furan-2-yl)hexane",
    SevenAminoOneFuranTwoYlHeptane => "7-Amino-1-(furan-2-yl)heptane",
    SevenAlkylaminoOneFuranTwoYlHeptane => "7-Alkylamino-1-(furan-2-yl)heptane",
    SevenAcylaminoOneFuranTwoYlHeptane => "7-Acylamino-1-(furan-2-yl)heptane",
    EightAminoOneFuranTwoYlOctane => "8-Amino-1-(furan-2-yl)octane",
    EightAlkylaminoOneFuranTwoYlOctane => "8-Alkylamino-1-(furan-2-yl)octane",
    EightAcylaminoOneFuranTwoYlOctane => "8-Acylamino-1-(furan-2-yl)octane",
    NineAminoOneFuranTwoYlNonane => "9-Amino-1-(furan-2-yl)nonane",
    NineAlkylaminoOneFuranTwoYlNonane => "9-Alkylamino-1-(furan-2-yl)nonane",
    NineAcylaminoOneFuranTwoYlNonane => "9-Acylamino-1-(furan-2-yl)nonane",
    TenAminoOneFuranTwoYlDecane => "10-Amino-1-(furan-2-yl)decane",
    TenAlkylaminoOneFuranTwoYlDecane => "10-Alkylamino-1-(furan-2-yl)decane",
    TenAcylaminoOneFuranTwoYlDecane => "10-Acylamino-1-(furan-2-yl)decane",
    OneMercaptoOneFuranTwoYlMethane => "1-Mercapto-1-(furan-2-yl)methane",
    OneAlkylthioOneFuranTwoYlMethane => "1-Alkylthio-1-(furan-2-yl)methane",
    OneSulfonylOneFuranTwoYlMethane => "1-Sulfonyl-1-(furan-2-yl)methane",
    TwoMercaptoOneFuranTwoYlEthane => "2-Mercapto-1-(furan-2-yl)ethane",
    TwoAlkylthioOneFuranTwoYlEthane => "2-Alkylthio-1-(furan-2-yl)ethane",
    TwoSulfonylOneFuranTwoYlEthane => "2-Sulfonyl-1-(furan-2-yl)ethane",
    ThreeMercaptoOneFuranTwoYlPropane => "3-Mercapto-1-(furan-2-yl)propane",
    ThreeAlkylthioOneFuranTwoYlPropane => "3-Alkylthio-1-(furan-2-yl)propane",
    ThreeSulfonylOneFuranTwoYlPropane => "3-Sulfonyl-1-(furan-2-yl)propane",
    FourMercaptoOneFuranTwoYlButane => "4-Mercapto-1-(furan-2-yl)butane",
    FourAlkylthioOneFuranTwoYlButane => "4-Alkylthio-1-(furan-2-yl)butane",
    FourSulfonylOneFuranTwoYlButane => "4-Sulfonyl-1-(furan-2-yl)butane",
    FiveMercaptoOneFuranTwoYlPentane => "5-Mercapto-1-(furan-2-yl)pentane",
    FiveAlkylthioOneFuranTwoYlPentane => "5-Alkylthio-1-(furan-2-yl)pentane",
    FiveSulfonylOneFuranTwoYlPentane => "5-Sulfonyl-1-(furan-2-yl)pentane",
    SixMercaptoOneFuranTwoYlHexane => "6-Mercapto-1-(furan-2-yl)hexane",
    SixAlkylthioOneFuranTwoYlHexane => "6-Alkylthio-1-(furan-2-yl)hexane",
    SixSulfonylOneFuranTwoYlHexane => "6-Sulfonyl-1-(furan-2-yl)hexane",
    SevenMercaptoOneFuranTwoYlHeptane => "7-Mercapto-1-(furan-2-yl)heptane",
    SevenAlkylthioOneFuranTwoYlHeptane => "7-Alkylthio-1-(furan-2-yl)heptane",
    SevenSulfonylOneFuranTwoYlHeptane => "7-Sulfonyl-1-(furan-2-yl)heptane",
    EightMercaptoOneFuranTwoYlOctane => "8-Mercapto-1-(furan-2-yl)octane",
    EightAlkylthioOneFuranTwoYlOctane => "8-Alkylthio-1-(furan-2-yl)octane",
    EightSulfonylOneFuranTwoYlOctane => "8-Sulfonyl-1-(furan-2-yl)octane",
    NineMercaptoOneFuranTwoYlNonane => "9-Mercapto-1-(furan-2-yl)nonane",
    NineAlkylthioOneFuranTwoYlNonane => "9-Alkylthio-1-(furan-2-yl)nonane",
    NineSulfonylOneFuranTwoYlNonane => "9-Sulfonyl-1-(furan-2-yl)nonane",
    TenMercaptoOneFuranTwoYlDecane => "10-Mercapto-1-(furan-2-yl)decane",
    TenAlkylthioOneFuranTwoYlDecane => "10-Alkylthio-1-(furan-2-yl)decane",
    TenSulfonylOneFuranTwoYlDecane => "10-Sulfonyl-1-(furan-2-yl)decane",
    OneFluoroOneFuranTwoYlMethane => "1-Fluoro-1-(furan-2-yl)methane",
    TwoFluoroOneFuranTwoYlEthane => "2-Fluoro-1-(furan-2-yl)ethane",
    ThreeFluoroOneFuranTwoYlPropane => "3-Fluoro-1-(furan-2-yl)propane",
    FourFluoroOneFuranTwoYlButane => "4-Fluoro-1-(furan-2-yl)butane",
    FiveFluoroOneFuranTwoYlPentane => "5-Fluoro-1-(furan-2-yl)pentane",
    SixFluoroOneFuranTwoYlHexane => "6-Fluoro-1-(furan-2-yl)hexane",
    SevenFluoroOneFuranTwoYlHeptane => "7-Fluoro-1-(furan-2-yl)heptane",
    EightFluoroOneFuranTwoYlOctane => "8-Fluoro-1-(furan-2-yl)octane",
    NineFluoroOneFuranTwoYlNonane => "9-Fluoro-1-(furan-2-yl)nonane",
    TenFluoroOneFuranTwoYlDecane => "10-Fluoro-1-(furan-2-yl)decane",
    OneChloroOneFuranTwoYlMethane => "1-Chloro-1-(furan-2-yl)methane",
    TwoChloroOneFuranTwoYlEthane => "2-Chloro-1-(furan-2-yl)ethane",
    ThreeChloroOneFuranTwoYlPropane => "3-Chloro-1-(furan-2-yl)propane",
    FourChloroOneFuranTwoYlButane => "4-Chloro-1-(furan-2-yl)butane",
    FiveChloroOneFuranTwoYlPentane => "5-Chloro-1-(furan-2-yl)pentane",
    SixChloroOneFuranTwoYlHexane => "6-Chloro-1-(furan-2-yl)hexane",
    SevenChloroOneFuranTwoYlHeptane => "7-Chloro-1-(furan-2-yl)heptane",
    EightChloroOneFuranTwoYlOctane => "8-Chloro-1-(furan-2-yl)octane",
    NineChloroOneFuranTwoYlNonane => "9-Chloro-1-(furan-2-yl)nonane",
    TenChloroOneFuranTwoYlDecane => "10-Chloro-1-(furan-2-yl)decane",
    OneBromoOneFuranTwoYlMethane => "1-Bromo-1-(furan-2-yl)methane",
    TwoBromoOneFuranTwoYlEthane => "2-Bromo-1-(furan-2-yl)ethane",
    ThreeBromoOneFuranTwoYlPropane => "3-Bromo-1-(furan-2-yl)propane",
    FourBromoOneFuranTwoYlButane => "4-Bromo-1-(furan-2-yl)butane",
    FiveBromoOneFuranTwoYlPentane => "5-Bromo-1-(furan-2-yl)pentane",
    SixBromoOneFuranTwoYlHexane => "6-Bromo-1-(furan-2-yl)hexane",
    SevenBromoOneFuranTwoYlHeptane => "7-Bromo-1-(furan-2-yl)heptane",
    EightBromoOneFuranTwoYlOctane => "8-Bromo-1-(furan-2-yl)octane",
    NineBromoOneFuranTwoYlNonane => "9-Bromo-1-(furan-2-yl)nonane",
    TenBromoOneFuranTwoYlDecane => "10-Bromo-1-(furan-2-yl)decane",
    OneIodoOneFuranTwoYlMethane => "1-Iodo-1-(furan-2-yl)methane",
    TwoIodoOneFuranTwoYlEthane => "2-Iodo-1-(furan-2-yl)ethane",
    ThreeIodoOneFuranTwoYlPropane => "3-Iodo-1-(furan-2-yl)propane",
    FourIodoOneFuranTwoYlButane => "4-Iodo-1-(furan-2-yl)butane",
    FiveIodoOneFuranTwoYlPentane => "5-Iodo-1-(furan-2-yl)pentane",
    SixIodoOneFuranTwoYlHexane => "6-Iodo-1-(furan-2-yl)hexane",
    SevenIodoOneFuranTwoYlHeptane => "7-Iodo-1-(furan-2-yl)heptane",
    EightIodoOneFuranTwoYlOctane => "8-Iodo-1-(furan-2-yl)octane",
    NineIodoOneFuranTwoYlNonane => "9-Iodo-1-(furan-2-yl)nonane",
    TenIodoOneFuranTwoYlDecane => "10-Iodo-1-(furan-2-yl)decane",
    OneCarboxyOneFuranThreeYlMethane => "1-Carboxy-1-(furan-3-yl)methane",
    OneAlkoxycarbonylOneFuranThreeYlMethane => "1-Alkoxycarbonyl-1-(furan-3-yl)methane",
    OneCarbamoylOneFuranThreeYlMethane => "1-Carbamoyl-1-(furan-3-yl)methane",
    OneFormylOneFuranThreeYlMethane => "1-Formyl-1-(furan-3-yl)methane",
    OneAcylOneFuranThreeYlMethane => "1-Acyl-1-(furan-3-yl)methane",
    OneCyanoOneFuranThreeYlMethane => "1-Cyano-1-(furan-3-yl)methane",
    TwoCarboxyOneFuranThreeYlEthane => "2-Carboxy-1-(furan-3-yl)ethane",
    TwoAlkoxycarbonylOneFuranThreeYlEthane => "2-Alkoxycarbonyl-1-(furan-3-yl)ethane",
    TwoCarbamoylOneFuranThreeYlEthane => "2-Carbamoyl-1-(furan-3-yl)ethane",
    TwoFormylOneFuranThreeYlEthane => "2-Formyl-1-(furan-3-yl)ethane",
    TwoAcylOneFuranThreeYlEthane => "2-Acyl-1-(furan-3-yl)ethane",
    TwoCyanoOneFuranThreeYlEthane => "2-Cyano-1-(furan-3-yl)ethane",
    ThreeCarboxyOneFuranThreeYlPropane => "3-Carboxy-1-(furan-3-yl)propane",
    ThreeAlkoxycarbonylOneFuranThreeYlPropane => "3-Alkoxycarbonyl-1-(furan-3-yl)propane",
    ThreeCarbamoylOneFuranThreeYlPropane => "3-Carbamoyl-1-(furan-3-yl)propane",
    ThreeFormylOneFuranThreeYlPropane => "3-Formyl-1-(furan-3-yl)propane",
    ThreeAcylOneFuranThreeYlPropane => "3-Acyl-1-(furan-3-yl)propane",
    ThreeCyanoOneFuranThreeYlPropane => "3-Cyano-1-(furan-3-yl)propane",
    FourCarboxyOneFuranThreeYlButane => "4-Carboxy-1-(furan-3-yl)butane",
    FourAlkoxycarbonylOneFuranThreeYlButane => "4-Alkoxycarbonyl-1-(furan-3-yl)butane",
    FourCarbamoylOneFuranThreeYlButane => "4-Carbamoyl-1-(furan-3-yl)butane",
    FourFormylOneFuranThreeYlButane => "4-Formyl-1-(furan-3-yl)butane",
    FourAcylOneFuranThreeYlButane => "4-Acyl-1-(furan-3-yl)butane",
    FourCyanoOneFuranThreeYlButane => "4-Cyano-1-(furan-3-yl)butane",
    FiveCarboxyOneFuranThreeYlPentane => "5-Carboxy-1-(furan-3-yl)pentane",
    FiveAlkoxycarbonylOneFuranThreeYlPentane => "5-Alkoxycarbonyl-1-(furan-3-yl)pentane",
    FiveCarbamoylOneFuranThreeYlPentane => "5-Carbamoyl-1-(furan-3-yl)pentane",
    FiveFormylOneFuranThreeYlPentane => "5-Formyl-1-(furan-3-yl)pentane",
    FiveAcylOneFuranThreeYlPentane => "5-Acyl-1-(furan-3-yl)pentane",
    FiveCyanoOneFuranThreeYlPentane => "5-Cyano-1-(furan-3-yl)pentane",
    SixCarboxyOneFuranThreeYlHexane => "6-Carboxy-1-(furan-3-yl)hexane",
    SixAlkoxycarbonylOneFuranThreeYlHexane => "6-Alkoxycarbonyl-1-(furan-3-yl)hexane",
    SixCarbamoylOneFuranThreeYlHexane => "6-Carbamoyl-1-(furan-3-yl)hexane",
    SixFormylOneFuranThreeYlHexane => "6-Formyl-1-(furan-3-yl)hexane",
    SixAcylOneFuranThreeYlHexane => "6-Acyl-1-(furan-3-yl)hexane",
    SixCyanoOneFuranThreeYlHexane => "6-Cyano-1-(furan-3-yl)hexane",
    SevenCarboxyOneFuranThreeYlHeptane => "7-Carboxy-1-(furan-3-yl)heptane",
    SevenAlkoxycarbonylOneFuranThreeYlHeptane => "7-Alkoxycarbonyl-1-(furan-3-yl)heptane",
    SevenCarbamoylOneFuranThreeYlHeptane => "7-Carbamoyl-1-(furan-3-yl)heptane",
    SevenFormylOneFuranThreeYlHeptane => "7-Formyl-1-(furan-3-yl)heptane",
    SevenAcylOneFuranThreeYlHeptane => "7-Acyl-1-(furan-3-yl)heptane",
    SevenCyanoOneFuranThreeYlHeptane => "7-Cyano-1-(furan-3-yl)heptane",
    EightCarboxyOneFuranThreeYlOctane => "8-Carboxy-1-(furan-3-yl)octane",
    EightAlkoxycarbonylOneFuranThreeYlOctane => "8-Alkoxycarbonyl-1-(furan-3-yl)octane",
    EightCarbamoylOneFuranThreeYlOctane => "8-Carbamoyl-1-(furan-3-yl)octane",
    EightFormylOneFuranThreeYlOctane => "8-Formyl-1-(furan-3-yl)octane",
    EightAcylOneFuranThreeYlOctane => "8-Acyl-1-(furan-3-yl)octane",
    EightCyanoOneFuranThreeYlOctane => "8-Cyano-1-(furan-3-yl)octane",
    NineCarboxyOneFuranThreeYlNonane => "9-Carboxy-1-(furan-3-yl)nonane",
    NineAlkoxycarbonylOneFuranThreeYlNonane => "9-Alkoxycarbonyl-1-(furan-3-yl)nonane",
    NineCarbamoylOneFuranThreeYlNonane => "9-Carbamoyl-1-(furan-3-yl)nonane",
    NineFormylOneFuranThreeYlNonane => "9-Formyl-1-(furan-3-yl)nonane",
    NineAcylOneFuranThreeYlNonane => "9-Acyl-1-(furan-3-yl)nonane",
    NineCyanoOneFuranThreeYlNonane => "9-Cyano-1-(furan-3-yl)nonane",
    OneHydroxyOneFuranThreeYlMethane => "1-Hydroxy-1-(furan-3-yl)methane",
    OneMethoxyOneFuranThreeYlMethane => "1-Methoxy-1-(furan-3-yl)methane",
    OneAlkoxyOneFuranThreeYlMethane => "1-Alkoxy-1-(furan-3-yl)methane",
    OneAcyloxyOneFuranThreeYlMethane => "1-Acyloxy-1-(furan-3-yl)methane",
    TwoHydroxyOneFuranThreeYlEthane => "2-Hydroxy-1-(furan-3-yl)ethane",
    TwoMethoxyOneFuranThreeYlEthane => "2-Methoxy-1-(furan-3-yl)ethane",
    TwoAlkoxyOneFuranThreeYlEthane => "2-Alkoxy-1-(furan-3-yl)ethane",
    TwoAcyloxyOneFuranThreeYlEthane => "2-Acyloxy-1-(furan-3-yl)ethane",
    ThreeHydroxyOneFuranThreeYlPropane => "3-Hydroxy-1-(furan-3-yl)propane",
    ThreeMethoxyOneFuranThreeYlPropane => "3-Methoxy-1-(furan-3-yl)propane",
    ThreeAlkoxyOneFuranThreeYlPropane => "3-Alkoxy-1-(furan-3-yl)propane",
    ThreeAcyloxyOneFuranThreeYlPropane => "3-Acyloxy-1-(furan-3-yl)propane",
    FourHydroxyOneFuranThreeYlButane => "4-Hydroxy-1-(furan-3-yl)butane",
    FourMethoxyOneFuranThreeYlButane => "4-Methoxy-1-(furan-3-yl)butane",
    FourAlkoxyOneFuranThreeYlButane => "4-Alkoxy-1-(furan-3-yl)butane",
    FourAcyloxyOneFuranThreeYlButane => "4-Acyloxy-1-(furan-3-yl)butane",
    FiveHydroxyOneFuranThreeYlPentane => "5-Hydroxy-1-(furan-3-yl)pentane",
    FiveMethoxyOneFuranThreeYlPentane => "5-Methoxy-1-(furan-3-yl)pentane",
    FiveAlkoxyOneFuranThreeYlPentane => "5-Alkoxy-1-(furan-3-yl)pentane",
    FiveAcyloxyOneFuranThreeYlPentane => "5-Acyloxy-1-(furan-3-yl)pentane",
    SixHydroxyOneFuranThreeYlHexane => "6-Hydroxy-1-(furan-3-yl)hexane",
    SixMethoxyOneFuranThreeYlHexane => "6-Methoxy-1-(furan-3-yl)hexane",
    SixAlkoxyOneFuranThreeYlHexane => "6-Alkoxy-1-(furan-3-yl)hexane",
    SixAcyloxyOneFuranThreeYlHexane => "6-Acyloxy-1-(furan-3-yl)hexane",
    SevenHydroxyOneFuranThreeYlHeptane => "7-Hydroxy-1-(furan-3-yl)heptane",
    SevenMethoxyOneFuranThreeYlHeptane => "7-Methoxy-1-(furan-3-yl)heptane",
    SevenAlkoxyOneFuranThreeYlHeptane => "7-Alkoxy-1-(furan-3-yl)heptane",
    SevenAcyloxyOneFuranThreeYlHeptane => "7-Acyloxy-1-(furan-3-yl)heptane",
    EightHydroxyOneFuranThreeYlOctane => "8-Hydroxy-1-(furan-3-yl)octane",
    EightMethoxyOneFuranThreeYlOctane => "8-Methoxy-1-(furan-3-yl)octane",
    EightAlkoxyOneFuranThreeYlOctane => "8-Alkoxy-1-(furan-3-yl)octane",
    EightAcyloxyOneFuranThreeYlOctane => "8-Acyloxy-1-(furan-3-yl)octane",
    NineHydroxyOneFuranThreeYlNonane => "9-Hydroxy-1-(furan-3-yl)nonane",
    NineMethoxyOneFuranThreeYlNonane => "9-Methoxy-1-(furan-3-yl)nonane",
    NineAlkoxyOneFuranThreeYlNonane => "9-Alkoxy-1-(furan-3-yl)nonane",
    NineAcyloxyOneFuranThreeYlNonane => "9-Acyloxy-1-(furan-3-yl)nonane",
    OneAminoOneFuranThreeYlMethane => "1-Amino-1-(furan-3-yl)methane",
    OneAlkylaminoOneFuranThreeYlMethane => "1-Alkylamino-1-(furan-3-yl)methane",
    OneAcylaminoOneFuranThreeYlMethane => "1-Acylamino-1-(furan-3-yl)methane",
    TwoAminoOneFuranThreeYlEthane => "2-Amino-1-(furan-3-yl)ethane",
    TwoAlkylaminoOneFuranThreeYlEthane => "2-Alkylamino-1-(furan-3-yl)ethane",
    TwoAcylaminoOneFuranThreeYlEthane => "2-Acylamino-1-(furan-3-yl)ethane",
    ThreeAminoOneFuranThreeYlPropane => "3-Amino-1-(furan-3-yl)propane",
    ThreeAlkylaminoOneFuranThreeYlPropane => "3-Alkylamino-1-(furan-3-yl)propane",
    ThreeAcylaminoOneFuranThreeYlPropane => "3-Acylamino-1-(furan-3-yl)propane",
    FourAminoOneFuranThreeYlButane => "4-Amino-1-(furan-3-yl)butane",
    FourAlkylaminoOneFuranThreeYlButane => "4-Alkylamino-1-(furan-3-yl)butane",
    FourAcylaminoOneFuranThreeYlButane => "4-Acylamino-1-(furan-3-yl)butane",
    FiveAminoOneFuranThreeYlPentane => "5-Amino-1-(furan-3-yl)pentane",
    FiveAlkylaminoOneFuranThreeYlPentane => "5-Alkylamino-1-(furan-3-yl)pentane",
    FiveAcylaminoOneFuranThreeYlPentane => "5-Acylamino-1-(furan-3-yl)pentane",
    SixAminoOneFuranThreeYlHexane => "6-Amino-1-(furan-3-yl)hexane",
    SixAlkylaminoOneFuranThreeYlHexane => "6-Alkylamino-1-(furan-3-yl)hexane",
    SixAcylaminoOneFuranThreeYlHexane => "6-Acylamino-1-(furan-3-yl)hexane",
    SevenAminoOneFuranThreeYlHeptane => "7-Amino-1-(furan-3-yl)heptane",
    SevenAlkylaminoOneFuranThreeYlHeptane => "7-Alkylamino-1-(furan-3-yl)heptane",
    SevenAcylaminoOneFuranThreeYlHeptane => "7-Acylamino-1-(furan-3-yl)heptane",
    EightAminoOneFuranThreeYlOctane => "8-Amino-1-(furan-3-yl)octane",
    EightAlkylaminoOneFuranThreeYlOctane => "8-Alkylamino-1-(furan-3-yl)octane",
    EightAcylaminoOneFuranThreeYlOctane => "8-Acylamino-1-(furan-3-yl)octane",
    NineAminoOneFuranThreeYlNonane => "9-Amino-1-(furan-3-yl)nonane",
    NineAlkylaminoOneFuranThreeYlNonane => "9-Alkylamino-1-(furan-3-yl)nonane",
    NineAcylaminoOneFuranThreeYlNonane => "9-Acylamino-1-(furan-3-yl)nonane",
    OneMercaptoOneFuranThreeYlMethane => "1-Mercapto-1-(furan-3-yl)methane",
    OneAlkylthioOneFuranThreeYlMethane => "1-Alkylthio-1-(furan-3-yl)methane",
    OneSulfonylOneFuranThreeYlMethane => "1-Sulfonyl-1-(furan-3-yl)methane",
    TwoMercaptoOneFuranThreeYlEthane => "2-Mercapto-1-(furan-3-yl)ethane",
    TwoAlkylthioOneFuranThreeYlEthane => "2-Alkylthio-1-(furan-3-yl)ethane",
    TwoSulfonylOneFuranThreeYlEthane => "2-Sulfonyl-1-(furan-3-yl)ethane",
    ThreeMercaptoOneFuranThreeYlPropane => "3-Mercapto-1-(furan-3-yl)propane",
    ThreeAlkylthioOneFuranThreeYlPropane => "3-Alkylthio-1-(furan-3-yl)propane",
    ThreeSulfonylOneFuranThreeYlPropane => "3-Sulfonyl-1-(furan-3-yl)propane",
    FourMercaptoOneFuranThreeYlButane => "4-Mercapto-1-(furan-3-yl)butane",
    FourAlkylthioOneFuranThreeYlButane => "4-Alkylthio-1-(furan-3-yl)butane",
    FourSulfonylOneFuranThreeYlButane => "4-Sulfonyl-1-(furan-3-yl)butane",
    FiveMercaptoOneFuranThreeYlPentane => "5-Mercapto-1-(furan-3-yl)pentane",
    FiveAlkylthioOneFuranThreeYlPentane => "5-Alkylthio-1-(furan-3-yl)pentane",
    FiveSulfonylOneFuranThreeYlPentane => "5-Sulfonyl-1-(furan-3-yl)pentane",
    SixMercaptoOneFuranThreeYlHexane => "6-Mercapto-1-(furan-3-yl)hexane",
    SixAlkylthioOneFuranThreeYlHexane => "6-Alkylthio-1-(furan-3-yl)hexane",
    SixSulfonylOneFuranThreeYlHexane => "6-Sulfonyl-1-(furan-3-yl)hexane",
    SevenMercaptoOneFuranThreeYlHeptane => "7-Mercapto-1-(furan-3-yl)heptane",
    SevenAlkylthioOneFuranThreeYlHeptane => "7-Alkylthio-1-(furan-3-yl)heptane",
    SevenSulfonylOneFuranThreeYlHeptane => "7-Sulfonyl-1-(furan-3-yl)heptane",
    EightMercaptoOneFuranThreeYlOctane => "8-Mercapto-1-(furan-3-yl)octane",
    EightAlkylthioOneFuranThreeYlOctane => "8-Alkylthio-1-(furan-3-yl)octane",
    EightSulfonylOneFuranThreeYlOctane => "8-Sulfonyl-1-(furan-3-yl)octane",
    NineMercaptoOneFuranThreeYlNonane => "9-Mercapto-1-(furan-3-yl)nonane",
    NineAlkylthioOneFuranThreeYlNonane => "9-Alkylthio-1-(furan-3-yl)nonane",
    NineSulfonylOneFuranThreeYlNonane => "9-Sulfonyl-1-(furan-3-yl)nonane",
    OneFluoroOneFuranThreeYlMethane => "1-Fluoro-1-(furan-3-yl)methane",
    TwoFluoroOneFuranThreeYlEthane => "2-Fluoro-1-(furan-3-yl)ethane",
    ThreeFluoroOneFuranThreeYlPropane => "3-Fluoro-1-(furan-3-yl)propane",
    FourFluoroOneFuranThreeYlButane => "4-Fluoro-1-(furan-3-yl)butane",
    FiveFluoroOneFuranThreeYlPentane => "5-Fluoro-1-(furan-3-yl)pentane",
    SixFluoroOneFuranThreeYlHexane => "6-Fluoro-1-(furan-3-yl)hexane",
    SevenFluoroOneFuranThreeYlHeptane => "7-Fluoro-1-(furan-3-yl)heptane",
    EightFluoroOneFuranThreeYlOctane => "8-Fluoro-1-(furan-3-yl)octane",
    NineFluoroOneFuranThreeYlNonane => "9-Fluoro-1-(furan-3-yl)nonane",
    OneChloroOneFuranThreeYlMethane => "1-Chloro-1-(furan-3-yl)methane",
    TwoChloroOneFuranThreeYlEthane => "2-Chloro-1-(furan-3-yl)ethane",
    ThreeChloroOneFuranThreeYlPropane => "3-Chloro-1-(furan-3-yl)propane",
    FourChloroOneFuranThreeYlButane => "4-Chloro-1-(furan-3-yl)butane",
    FiveChloroOneFuranThreeYlPentane => "5-Chloro-1-(furan-3-yl)pentane",
    SixChloroOneFuranThreeYlHexane => "6-Chloro-1-(furan-3-yl)hexane",
    SevenChloroOneFuranThreeYlHeptane => "7-Chloro-1-(furan-3-yl)heptane",
    EightChloroOneFuranThreeYlOctane => "8-Chloro-1-(furan-3-yl)octane",
    NineChloroOneFuranThreeYlNonane => "9-Chloro-1-(furan-3-yl)nonane",
    OneBromoOneFuranThreeYlMethane => "1-Bromo-1-(furan-3-yl)methane",
    TwoBromoOneFuranThreeYlEthane => "2-Bromo-1-(furan-3-yl)ethane",
    ThreeBromoOneFuranThreeYlPropane => "3-Bromo-1-(furan-3-yl)propane",
    FourBromoOneFuranThreeYlButane => "4-Bromo-1-(furan-3-yl)butane",
    FiveBromoOneFuranThreeYlPentane => "5-Bromo-1-(furan-3-yl)pentane",
    SixBromoOneFuranThreeYlHexane => "6-Bromo-1-(furan-3-yl)hexane",
    SevenBromoOneFuranThreeYlHeptane => "7-Bromo-1-(furan-3-yl)heptane",
    EightBromoOneFuranThreeYlOctane => "8-Bromo-1-(furan-3-yl)octane",
    NineBromoOneFuranThreeYlNonane => "9-Bromo-1-(furan-3-yl)nonane",
    OneIodoOneFuranThreeYlMethane => "1-Iodo-1-(furan-3-yl)methane",
    TwoIodoOneFuranThreeYlEthane => "2-Iodo-1-(furan-3-yl)ethane",
    ThreeIodoOneFuranThreeYlPropane => "3-Iodo-1-(furan-3-yl)propane",
    FourIodoOneFuranThreeYlButane => "4-Iodo-1-(furan-3-yl)butane",
    FiveIodoOneFuranThreeYlPentane => "5-Iodo-1-(furan-3-yl)pentane",
    SixIodoOneFuranThreeYlHexane => "6-Iodo-1-(furan-3-yl)hexane",
    SevenIodoOneFuranThreeYlHeptane => "7-Iodo-1-(furan-3-yl)heptane",
    EightIodoOneFuranThreeYlOctane => "8-Iodo-1-(furan-3-yl)octane",
    NineIodoOneFuranThreeYlNonane => "9-Iodo-1-(furan-3-yl)nonane",
    OneCarboxyOneThiophenTwoYlMethane => "1-Carboxy-1-(thiophen-2-yl)methane",
    OneAlkoxycarbonylOneThiophenTwoYlMethane => "1-Alkoxycarbonyl-1-(thiophen-2-yl)methane",
    OneCarbamoylOneThiophenTwoYlMethane => "1-Carbamoyl-1-(thiophen-2-yl)methane",
    OneFormylOneThiophenTwoYlMethane => "1-Formyl-1-(thiophen-2-yl)methane",
    OneAcylOneThiophenTwoYlMethane => "1-Acyl-1-(thiophen-2-yl)methane",
    OneCyanoOneThiophenTwoYlMethane => "1-Cyano-1-(thiophen-2-yl)methane",
    TwoCarboxyOneThiophenTwoYlEthane => "2-Carboxy-1-(thiophen-2-yl)ethane",
    TwoAlkoxycarbonylOneThiophenTwoYlEthane => "2-Alkoxycarbonyl-1-(thiophen-2-yl)ethane",
    TwoCarbamoylOneThiophenTwoYlEthane => "2-Carbamoyl-1-(thiophen-2-yl)ethane",
    TwoFormylOneThiophenTwoYlEthane => "2-Formyl-1-(thiophen-2-yl)ethane",
    TwoAcylOneThiophenTwoYlEthane => "2-Acyl-1-(thiophen-2-yl)ethane",
    TwoCyanoOneThiophenTwoYlEthane => "2-Cyano-1-(thiophen-2-yl)ethane",
    ThreeCarboxyOneThiophenTwoYlPropane => "3-Carboxy-1-(thiophen-2-yl)propane",
    ThreeAlkoxycarbonylOneThiophenTwoYlPropane => "3-Alkoxycarbonyl-1-(thiophen-2-yl)propane",
    ThreeCarbamoylOneThiophenTwoYlPropane => "3-Carbamoyl-1-(thiophen-2-yl)propane",
    ThreeFormylOneThiophenTwoYlPropane => "3-Formyl-1-(thiophen-2-yl)propane",
    ThreeAcylOneThiophenTwoYlPropane => "3-Acyl-1-(thiophen-2-yl)propane",
    ThreeCyanoOneThiophenTwoYlPropane => "3-Cyano-1-(thiophen-2-yl)propane",
    FourCarboxyOneThiophenTwoYlButane => "4-Carboxy-1-(thiophen-2-yl)butane",
    FourAlkoxycarbonylOneThiophenTwoYlButane => "4-Alkoxycarbonyl-1-(thiophen-2-yl)butane",
    FourCarbamoylOneThiophenTwoYlButane => "4-Carbamoyl-1-(thiophen-2-yl)butane",
    FourFormylOneThiophenTwoYlButane => "4-Formyl-1-(thiophen-2-yl)butane",
    FourAcylOneThiophenTwoYlButane => "4-Acyl-1-(thiophen-2-yl)butane",
    FourCyanoOneThiophenTwoYlButane => "4-Cyano-1-(thiophen-2-yl)butane",
    FiveCarboxyOneThiophenTwoYlPentane => "5-Carboxy-1-(thiophen-2-yl)pentane",
    FiveAlkoxycarbonylOneThiophenTwoYlPentane => "5-Alkoxycarbonyl-1-(thiophen-2-yl)pentane",
    FiveCarbamoylOneThiophenTwoYlPentane => "5-Carbamoyl-1-(thiophen-2-yl)pentane",
    FiveFormylOneThiophenTwoYlPentane => "5-Formyl-1-(thiophen-2-yl)pentane",
    FiveAcylOneThiophenTwoYlPentane => "5-Acyl-1-(thiophen-2-yl)pentane",
    FiveCyanoOneThiophenTwoYlPentane => "5-Cyano-1-(thiophen-2-yl)pentane",
    SixCarboxyOneThiophenTwoYlHexane => "6-Carboxy-1-(thiophen-2-yl)hexane",
    SixAlkoxycarbonylOneThiophenTwoYlHexane => "6-Alkoxycarbonyl-1-(thiophen-2-yl)hexane",
    SixCarbamoylOneThiophenTwoYlHexane => "6-Carbamoyl-1-(thiophen-2-yl)hexane",
    SixFormylOneThiophenTwoYlHexane => "6-Formyl-1-(thiophen-2-yl)hexane",
    SixAcylOneThiophenTwoYlHexane => "6-Acyl-1-(thiophen-2-yl)hexane",
    SixCyanoOneThiophenTwoYlHexane => "6-Cyano-1-(thiophen-2-yl)hexane",
    SevenCarboxyOneThiophenTwoYlHeptane => "7-Carboxy-1-(thiophen-2-yl)heptane",
    SevenAlkoxycarbonylOneThiophenTwoYlHeptane => "7-Alkoxycarbonyl-1-(thiophen-2-yl)heptane",
    SevenCarbamoylOneThiophenTwoYlHeptane => "7-Carbamoyl-1-(thiophen-2-yl)heptane",
    SevenFormylOneThiophenTwoYlHeptane => "7-Formyl-1-(thiophen-2-yl)heptane",
    SevenAcylOneThiophenTwoYlHeptane => "7-Acyl-1-(thiophen-2-yl)heptane",
    SevenCyanoOneThiophenTwoYlHeptane => "7-Cyano-1-(thiophen-2-yl)heptane",
    EightCarboxyOneThiophenTwoYlOctane => "8-Carboxy-1-(thiophen-2-yl)octane",
    EightAlkoxycarbonylOneThiophenTwoYlOctane => "8-Alkoxycarbonyl-1-(thiophen-2-yl)octane",
    EightCarbamoylOneThiophenTwoYlOctane => "8-Carbamoyl-1-(thiophen-2-yl)octane",
    EightFormylOneThiophenTwoYlOctane => "8-Formyl-1-(thiophen-2-yl)octane",
    EightAcylOneThiophenTwoYlOctane => "8-Acyl-1-(thiophen-2-yl)octane",
    EightCyanoOneThiophenTwoYlOctane => "8-Cyano-1-(thiophen-2-yl)octane",
    NineCarboxyOneThiophenTwoYlNonane => "9-Carboxy-1-(thiophen-2-yl)nonane",
    NineAlkoxycarbonylOneThiophenTwoYlNonane => "9-Alkoxycarbonyl-1-(thiophen-2-yl)nonane",
    NineCarbamoylOneThiophenTwoYlNonane => "9-Carbamoyl-1-(thiophen-2-yl)nonane",
    NineFormylOneThiophenTwoYlNonane => "9-Formyl-1-(thiophen-2-yl)nonane",
    NineAcylOneThiophenTwoYlNonane => "9-Acyl-1-(thiophen-2-yl)nonane",
    NineCyanoOneThiophenTwoYlNonane => "9-Cyano-1-(thiophen-2-yl)nonane",
    TenCarboxyOneThiophenTwoYlDecane => "10-Carboxy-1-(thiophen-2-yl)decane",
    TenAlkoxycarbonylOneThiophenTwoYlDecane => "10-Alkoxycarbonyl-1-(thiophen-2-yl)decane",
    TenCarbamoylOneThiophenTwoYlDecane => "10-Carbamoyl-1-(thiophen-2-yl)decane",
    TenFormylOneThiophenTwoYlDecane => "10-Formyl-1-(thiophen-2-yl)decane",
    TenAcylOneThiophenTwoYlDecane => "10-Acyl-1-(thiophen-2-yl)decane",
    TenCyanoOneThiophenTwoYlDecane => "10-Cyano-1-(thiophen-2-yl)decane",
    OneHydroxyOneThiophenTwoYlMethane => "1-Hydroxy-1-(thiophen-2-yl)methane",
    OneMethoxyOneThiophenTwoYlMethane => "1-Methoxy-1-(thiophen-2-yl)methane",
    OneAlkoxyOneThiophenTwoYlMethane => "1-Alkoxy-1-(thiophen-2-yl)methane",
    OneAcyloxyOneThiophenTwoYlMethane => "1-Acyloxy-1-(thiophen-2-yl)methane",
    TwoHydroxyOneThiophenTwoYlEthane => "2-Hydroxy-1-(thiophen-2-yl)ethane",
    TwoMethoxyOneThiophenTwoYlEthane => "2-Methoxy-1-(thiophen-2-yl)ethane",
    TwoAlkoxyOneThiophenTwoYlEthane => "2-Alkoxy-1-(thiophen-2-yl)ethane",
    TwoAcyloxyOneThiophenTwoYlEthane => "2-Acyloxy-1-(thiophen-2-yl)ethane",
    ThreeHydroxyOneThiophenTwoYlPropane => "3-Hydroxy-1-(thiophen-2-yl)propane",
    ThreeMethoxyOneThiophenTwoYlPropane => "3-Methoxy-1-(thiophen-2-yl)propane",
    ThreeAlkoxyOneThiophenTwoYlPropane => "3-Alkoxy-1-(thiophen-2-yl)propane",
    ThreeAcyloxyOneThiophenTwoYlPropane => "3-Acyloxy-1-(thiophen-2-yl)propane",
    FourHydroxyOneThiophenTwoYlButane => "4-Hydroxy-1-(thiophen-2-yl)butane",
    FourMethoxyOneThiophenTwoYlButane => "4-Methoxy-1-(thiophen-2-yl)butane",
    FourAlkoxyOneThiophenTwoYlButane => "4-Alkoxy-1-(thiophen-2-yl)butane",
    FourAcyloxyOneThiophenTwoYlButane => "4-Acyloxy-1-(thiophen-2-yl)butane",
    FiveHydroxyOneThiophenTwoYlPentane => "5-Hydroxy-1-(thiophen-2-yl)pentane",
    FiveMethoxyOneThiophenTwoYlPentane => "5-Methoxy-1-(thiophen-2-yl)pentane",
    FiveAlkoxyOneThiophenTwoYlPentane => "5-Alkoxy-1-(thiophen-2-yl)pentane",
    FiveAcyloxyOneThiophenTwoYlPentane => "5-Acyloxy-1-(thiophen-2-yl)pentane",
    SixHydroxyOneThiophenTwoYlHexane => "6-Hydroxy-1-(thiophen-2-yl)hexane",
    SixMethoxyOneThiophenTwoYlHexane => "6-Methoxy-1-(thiophen-2-yl)hexane",
    SixAlkoxyOneThiophenTwoYlHexane => "6-Alkoxy-1-(thiophen-2-yl)hexane",
    SixAcyloxyOneThiophenTwoYlHexane => "6-Acyloxy-1-(thiophen-2-yl)hexane",
    SevenHydroxyOneThiophenTwoYlHeptane => "7-Hydroxy-1-(thiophen-2-yl)heptane",
    SevenMethoxyOneThiophenTwoYlHeptane => "7-Methoxy-1-(thiophen-2-yl)heptane",
    SevenAlkoxyOneThiophenTwoYlHeptane => "7-Alkoxy-1-(thiophen-2-yl)heptane",
    SevenAcyloxyOneThiophenTwoYlHeptane => "7-Acyloxy-1-(thiophen-2-yl)heptane",
    EightHydroxyOneThiophenTwoYlOctane => "8-Hydroxy-1-(thiophen-2-yl)octane",
    EightMethoxyOneThiophenTwoYlOctane => "8-Methoxy-1-(thiophen-2-yl)octane",
    EightAlkoxyOneThiophenTwoYlOctane => "8-Alkoxy-1-(thiophen-2-yl)octane",
    EightAcyloxyOneThiophenTwoYlOctane => "8-Acyloxy-1-(thiophen-2-yl)octane",
    NineHydroxyOneThiophenTwoYlNonane => "9-Hydroxy-1-(thiophen-2-yl)nonane",
    NineMethoxyOneThiophenTwoYlNonane => "9-Methoxy-1-(thiophen-2-yl)nonane",
    NineAlkoxyOneThiophenTwoYlNonane => "9-Alkoxy-1-(thiophen-2-yl)nonane",
    NineAcyloxyOneThiophenTwoYlNonane => "9-Acyloxy-1-(thiophen-2-yl)nonane",
    TenHydroxyOneThiophenTwoYlDecane => "10-Hydroxy-1-(thiophen-2-yl)decane",
    TenMethoxyOneThiophenTwoYlDecane => "10-Methoxy-1-(thiophen-2-yl)decane",
    TenAlkoxyOneThiophenTwoYlDecane => "10-Alkoxy-1-(thiophen-2-yl)decane",
    TenAcyloxyOneThiophenTwoYlDecane => "10-Acyloxy-1-(thiophen-2-yl)decane",
    OneAminoOneThiophenTwoYlMethane => "1-Amino-1-(thiophen-2-yl)methane",
    OneAlkylaminoOneThiophenTwoYlMethane => "1-Alkylamino-1-(thiophen-2-yl)methane",
    OneAcylaminoOneThiophenTwoYlMethane => "1-Acylamino-1-(thiophen-2-yl)methane",
    TwoAminoOneThiophenTwoYlEthane => "2-Amino-1-(thiophen-2-yl)ethane",
    TwoAlkylaminoOneThiophenTwoYlEthane => "2-Alkylamino-1-(thiophen-2-yl)ethane",
    TwoAcylaminoOneThiophenTwoYlEthane => "2-Acylamino-1-(thiophen-2-yl)ethane",
    ThreeAminoOneThiophenTwoYlPropane => "3-Amino-1-(thiophen-2-yl)propane",
    ThreeAlkylaminoOneThiophenTwoYlPropane => "3-Alkylamino-1-(thiophen-2-yl)propane",
    ThreeAcylaminoOneThiophenTwoYlPropane => "3-Acylamino-1-(thiophen-2-yl)propane",
    FourAminoOneThiophenTwoYlButane => "4-Amino-1-(thiophen-2-yl)butane",
    FourAlkylaminoOneThiophenTwoYlButane => "4-Alkylamino-1-(thiophen-2-yl)butane",
    FourAcylaminoOneThiophenTwoYlButane => "4-Acylamino-1-(thiophen-2-yl)butane",
    FiveAminoOneThiophenTwoYlPentane => "5-Amino-1-(thiophen-2-yl)pentane",
    FiveAlkylaminoOneThiophenTwoYlPentane => "5-Alkylamino-1-(thiophen-2-yl)pentane",
    FiveAcylaminoOneThiophenTwoYlPentane => "5-Acylamino-1-(thiophen-2-yl)pentane",
    SixAminoOneThiophenTwoYlHexane => "6-Amino-1-(thiophen-2-yl)hexane",
    SixAlkylaminoOneThiophenTwoYlHexane => "6-Alkylamino-1-(thiophen-2-yl)hexane",
    SixAcylaminoOneThiophenTwoYlHexane => "6-Acylamino-1-(thiophen-2-yl)hexane",
    SevenAminoOneThiophenTwoYlHeptane => "7-Amino-1-(thiophen-2-yl)heptane",
    SevenAlkylaminoOneThiophenTwoYlHeptane => "7-Alkylamino-1-(thiophen-2-yl)heptane",
    SevenAcylaminoOneThiophenTwoYlHeptane => "7-Acylamino-1-(thiophen-2-yl)heptane",
    EightAminoOneThiophenTwoYlOctane => "8-Amino-1-(thiophen-2-yl)octane",
    EightAlkylaminoOneThiophenTwoYlOctane => "8-Alkylamino-1-(thiophen-2-yl)octane",
    EightAcylaminoOneThiophenTwoYlOctane => "8-Acylamino-1-(thiophen-2-yl)octane",
    NineAminoOneThiophenTwoYlNonane => "9-Amino-1-(thiophen-2-yl)nonane",
    NineAlkylaminoOneThiophenTwoYlNonane => "9-Alkylamino-1-(thiophen-2-yl)nonane",
    NineAcylaminoOneThiophenTwoYlNonane => "9-Acylamino-1-(thiophen-2-yl)nonane",
    TenAminoOneThiophenTwoYlDecane => "10-Amino-1-(thiophen-2-yl)decane",
    TenAlkylaminoOneThiophenTwoYlDecane => "10-Alkylamino-1-(thiophen-2-yl)decane",
    TenAcylaminoOneThiophenTwoYlDecane => "10-Acylamino-1-(thiophen-2-yl)decane",
    OneMercaptoOneThiophenTwoYlMethane => "1-Mercapto-1-(thiophen-2-yl)methane",
    OneAlkylthioOneThiophenTwoYlMethane => "1-Alkylthio-1-(thiophen-2-yl)methane",
    OneSulfonylOneThiophenTwoYlMethane => "1-Sulfonyl-1-(thiophen-2-yl)methane",
    TwoMercaptoOneThiophenTwoYlEthane => "2-Mercapto-1-(thiophen-2-yl)ethane",
    TwoAlkylthioOneThiophenTwoYlEthane => "2-Alkylthio-1-(thiophen-2-yl)ethane",
    TwoSulfonylOneThiophenTwoYlEthane => "2-Sulfonyl-1-(thiophen-2-yl)ethane",
    ThreeMercaptoOneThiophenTwoYlPropane => "3-Mercapto-1-(thiophen-2-yl)propane",
    ThreeAlkylthioOneThiophenTwoYlPropane => "3-Alkylthio-1-(thiophen-2-yl)propane",
    ThreeSulfonylOneThiophenTwoYlPropane => "3-Sulfonyl-1-(thiophen-2-yl)propane",
    FourMercaptoOneThiophenTwoYlButane => "4-Mercapto-1-(thiophen-2-yl)butane",
    FourAlkylthioOneThiophenTwoYlButane => "4-Alkylthio-1-(thiophen-2-yl)butane",
    FourSulfonylOneThiophenTwoYlButane => "4-Sulfonyl-1-(thiophen-2-yl)butane",
    FiveMercaptoOneThiophenTwoYlPentane => "5-Mercapto-1-(thiophen-2-yl)pentane",
    FiveAlkylthioOneThiophenTwoYlPentane => "5-Alkylthio-1-(thiophen-2-yl)pentane",
    FiveSulfonylOneThiophenTwoYlPentane => "5-Sulfonyl-1-(thiophen-2-yl)pentane",
    SixMercaptoOneThiophenTwoYlHexane => "6-Mercapto-1-(thiophen-2-yl)hexane",
    SixAlkylthioOneThiophenTwoYlHexane => "6-Alkylthio-1-(thiophen-2-yl)hexane",
    SixSulfonylOneThiophenTwoYlHexane => "6-Sulfonyl-1-(thiophen-2-yl)hexane",
    SevenMercaptoOneThiophenTwoYlHeptane => "7-Mercapto-1-(thiophen-2-yl)heptane",
    SevenAlkylthioOneThiophenTwoYlHeptane => "7-Alkylthio-1-(thiophen-2-yl)heptane",
    SevenSulfonylOneThiophenTwoYlHeptane => "7-Sulfonyl-1-(thiophen-2-yl)heptane",
    EightMercaptoOneThiophenTwoYlOctane => "8-Mercapto-1-(thiophen-2-yl)octane",
    EightAlkylthioOneThiophenTwoYlOctane => "8-Alkylthio-1-(thiophen-2-yl)octane",
    EightSulfonylOneThiophenTwoYlOctane => "8-Sulfonyl-1-(thiophen-2-yl)octane",
    NineMercaptoOneThiophenTwoYlNonane => "9-Mercapto-1-(thiophen-2-yl)nonane",
    NineAlkylthioOneThiophenTwoYlNonane => "9-Alkylthio-1-(thiophen-2-yl)nonane",
    NineSulfonylOneThiophenTwoYlNonane => "9-Sulfonyl-1-(thiophen-2-yl)nonane",
    TenMercaptoOneThiophenTwoYlDecane => "10-Mercapto-1-(thiophen-2-yl)decane",
    TenAlkylthioOneThiophenTwoYlDecane => "10-Alkylthio-1-(thiophen-2-yl)decane",
    TenSulfonylOneThiophenTwoYlDecane => "10-Sulfonyl-1-(thiophen-2-yl)decane",
    OneFluoroOneThiophenTwoYlMethane => "1-Fluoro-1-(thiophen-2-yl)methane",
    TwoFluoroOneThiophenTwoYlEthane => "2-Fluoro-1-(thiophen-2-yl)ethane",
    ThreeFluoroOneThiophenTwoYlPropane => "3-Fluoro-1-(thiophen-2-yl)propane",
    FourFluoroOneThiophenTwoYlButane => "4-Fluoro-1-(thiophen-2-yl)butane",
    FiveFluoroOneThiophenTwoYlPentane => "5-Fluoro-1-(thiophen-2-yl)pentane",
    SixFluoroOneThiophenTwoYlHexane => "6-Fluoro-1-(thiophen-2-yl)hexane",
    SevenFluoroOneThiophenTwoYlHeptane => "7-Fluoro-1-(thiophen-2-yl)heptane",
    EightFluoroOneThiophenTwoYlOctane => "8-Fluoro-1-(thiophen-2-yl)octane",
    NineFluoroOneThiophenTwoYlNonane => "9-Fluoro-1-(thiophen-2-yl)nonane",
    TenFluoroOneThiophenTwoYlDecane => "10-Fluoro-1-(thiophen-2-yl)decane",
    OneChloroOneThiophenTwoYlMethane => "1-Chloro-1-(thiophen-2-yl)methane",
    TwoChloroOneThiophenTwoYlEthane => "2-Chloro-1-(thiophen-2-yl)ethane",
    ThreeChloroOneThiophenTwoYlPropane => "3-Chloro-1-(thiophen-2-yl)propane",
    FourChloroOneThiophenTwoYlButane => "4-Chloro-1-(thiophen-2-yl)butane",
    FiveChloroOneThiophenTwoYlPentane => "5-Chloro-1-(thiophen-2-yl)pentane",
    SixChloroOneThiophenTwoYlHexane => "6-Chloro-1-(thiophen-2-yl)hexane",
    SevenChloroOneThiophenTwoYlHeptane => "7-Chloro-1-(thiophen-2-yl)heptane",
    EightChloroOneThiophenTwoYlOctane => "8-Chloro-1-(thiophen-2-yl)octane",
    NineChloroOneThiophenTwoYlNonane => "9-Chloro-1-(thiophen-2-yl)nonane",
    TenChloroOneThiophenTwoYlDecane => "10-Chloro-1-(thiophen-2-yl)decane",
    OneBromoOneThiophenTwoYlMethane => "1-Bromo-1-(thiophen-2-yl)methane",
    TwoBromoOneThiophenTwoYlEthane => "2-Bromo-1-(thiophen-2-yl)ethane",
    ThreeBromoOneThiophenTwoYlPropane => "3-Bromo-1-(thiophen-2-yl)propane",
    FourBromoOneThiophenTwoYlButane => "4-Bromo-1-(thiophen-2-yl)butane",
    FiveBromoOneThiophenTwoYlPentane => "5-Bromo-1-(thiophen-2-yl)pentane",
    SixBromoOneThiophenTwoYlHexane => "6-Bromo-1-(thiophen-2-yl)hexane",
    SevenBromoOneThiophenTwoYlHeptane => "7-Bromo-1-(thiophen-2-yl)heptane",
    EightBromoOneThiophenTwoYlOctane => "8-Bromo-1-(thiophen-2-yl)octane",
    NineBromoOneThiophenTwoYlNonane => "9-Bromo-1-(thiophen-2-yl)nonane",
    TenBromoOneThiophenTwoYlDecane => "10-Bromo-1-(thiophen-2-yl)decane",
    OneIodoOneThiophenTwoYlMethane => "1-Iodo-1-(thiophen-2-yl)methane",
    TwoIodoOneThiophenTwoYlEthane => "2-Iodo-1-(thiophen-2-yl)ethane",
    ThreeIodoOneThiophenTwoYlPropane => "3-Iodo-1-(thiophen-2-yl)propane",
    FourIodoOneThiophenTwoYlButane => "4-Iodo-1-(thiophen-2-yl)butane",
    FiveIodoOneThiophenTwoYlPentane => "5-Iodo-1-(thiophen-2-yl)pentane",
    SixIodoOneThiophenTwoYlHexane => "6-Iodo-1-(thiophen-2-yl)hexane",
    SevenIodoOneThiophenTwoYlHeptane => "7-Iodo-1-(thiophen-2-yl)heptane",
    EightIodoOneThiophenTwoYlOctane => "8-Iodo-1-(thiophen-2-yl)octane",
    NineIodoOneThiophenTwoYlNonane => "9-Iodo-1-(thiophen-2-yl)nonane",
    TenIodoOneThiophenTwoYlDecane => "10-Iodo-1-(thiophen-2-yl)decane",
    OneCarboxyOneThiophenThreeYlMethane => "1-Carboxy-1-(thiophen-3-yl)methane",
    OneAlkoxycarbonylOneThiophenThreeYlMethane => "1-Alkoxycarbonyl-1-(thiophen-3-yl)methane",
    OneCarbamoylOneThiophenThreeYlMethane => "1-Carbamoyl-1-(thiophen-3-yl)methane",
    OneFormylOneThiophenThreeYlMethane => "1-Formyl-1-(thiophen-3-yl)methane",
    OneAcylOneThiophenThreeYlMethane => "1-Acyl-1-(thiophen-3-yl)methane",
    OneCyanoOneThiophenThreeYlMethane => "1-Cyano-1-(thiophen-3-yl)methane",
    TwoCarboxyOneThiophenThreeYlEthane => "2-Carboxy-1-(thiophen-3-yl)ethane",
    TwoAlkoxycarbonylOneThiophenThreeYlEthane => "2-Alkoxycarbonyl-1-(thiophen-3-yl)ethane",
    TwoCarbamoylOneThiophenThreeYlEthane => "2-Carbamoyl-1-(thiophen-3-yl)ethane",
    TwoFormylOneThiophenThreeYlEthane => "2-Formyl-1-(thiophen-3-yl)ethane",
    TwoAcylOneThiophenThreeYlEthane => "2-Acyl-1-(thiophen-3-yl)ethane",
    TwoCyanoOneThiophenThreeYlEthane => "2-Cyano-1-(thiophen-3-yl)ethane",
    ThreeCarboxyOneThiophenThreeYlPropane => "3-Carboxy-1-(thiophen-3-yl)propane",
    ThreeAlkoxycarbonylOneThiophenThreeYlPropane => "3-Alkoxycarbonyl-1-(thiophen-3-yl)propane",
    ThreeCarbamoylOneThiophenThreeYlPropane => "3-Carbamoyl-1-(thiophen-3-yl)propane",
    ThreeFormylOneThiophenThreeYlPropane => "3-Formyl-1-(thiophen-3-yl)propane",
    ThreeAcylOneThiophenThreeYlPropane => "3-Acyl-1-(thiophen-3-yl)propane",
    ThreeCyanoOneThiophenThreeYlPropane => "3-Cyano-1-(thiophen-3-yl)propane",
    FourCarboxyOneThiophenThreeYlButane => "4-Carboxy-1-(thiophen-3-yl)butane",
    FourAlkoxycarbonylOneThiophenThreeYlButane => "4-Alkoxycarbonyl-1-(thiophen-3-yl)butane",
    FourCarbamoylOneThiophenThreeYlButane => "4-Carbamoyl-1-(thiophen-3-yl)butane",
    FourFormylOneThiophenThreeYlButane => "4-Formyl-1-(thiophen-3-yl)butane",
    FourAcylOneThiophenThreeYlButane => "4-Acyl-1-(thiophen-3-yl)butane",
    FourCyanoOneThiophenThreeYlButane => "4-Cyano-1-(thiophen-3-yl)butane",
    FiveCarboxyOneThiophenThreeYlPentane => "5-Carboxy-1-(thiophen-3-yl)pentane",
    FiveAlkoxycarbonylOneThiophenThreeYlPentane => "5-Alkoxycarbonyl-1-(thiophen-3-yl)pentane",
    FiveCarbamoylOneThiophenThreeYlPentane => "5-Carbamoyl-1-(thiophen-3-yl)pentane",
    FiveFormylOneThiophenThreeYlPentane => "5-Formyl-1-(thiophen-3-yl)pentane",
    FiveAcylOneThiophenThreeYlPentane => "5-Acyl-1-(thiophen-3-yl)pentane",
    FiveCyanoOneThiophenThreeYlPentane => "5-Cyano-1-(thiophen-3-yl)pentane",
    SixCarboxyOneThiophenThreeYlHexane => "6-Carboxy-1-(thiophen-3-yl)hexane",
    SixAlkoxycarbonylOneThiophenThreeYlHexane => "6-Alkoxycarbonyl-1-(thiophen-3-yl)hexane",
    SixCarbamoylOneThiophenThreeYlHexane => "6-Carbamoyl-1-(thiophen-3-yl)hexane",
    SixFormylOneThiophenThreeYlHexane => "6-Formyl-1-(thiophen-3-yl)hexane",
    SixAcylOneThiophenThreeYlHexane => "6-Acyl-1-(thiophen-3-yl)hexane",
    SixCyanoOneThiophenThreeYlHexane => "6-Cyano-1-(thiophen-3-yl)hexane",
    SevenCarboxyOneThiophenThreeYlHeptane => "7-Carboxy-1-(thiophen-3-yl)heptane",
    SevenAlkoxycarbonylOneThiophenThreeYlHeptane => "7-Alkoxycarbonyl-1-(thiophen-3-yl)heptane",
    SevenCarbamoylOneThiophenThreeYlHeptane => "7-Carbamoyl-1-(thiophen-3-yl)heptane",
    SevenFormylOneThiophenThreeYlHeptane => "7-Formyl-1-(thiophen-3-yl)heptane",
    SevenAcylOneThiophenThreeYlHeptane => "7-Acyl-1-(thiophen-3-yl)heptane",
    SevenCyanoOneThiophenThreeYlHeptane => "7-Cyano-1-(thiophen-3-yl)heptane",
    EightCarboxyOneThiophenThreeYlOctane => "8-Carboxy-1-(thiophen-3-yl)octane",
    EightAlkoxycarbonylOneThiophenThreeYlOctane => "8-Alkoxycarbonyl-1-(thiophen-3-yl)octane",
    EightCarbamoylOneThiophenThreeYlOctane => "8-Carbamoyl-1-(thiophen-3-yl)octane",
    EightFormylOneThiophenThreeYlOctane => "8-Formyl-1-(thiophen-3-yl)octane",
    EightAcylOneThiophenThreeYlOctane => "8-Acyl-1-(thiophen-3-yl)octane",
    EightCyanoOneThiophenThreeYlOctane => "8-Cyano-1-(thiophen-3-yl)octane",
    NineCarboxyOneThiophenThreeYlNonane => "9-Carboxy-1-(thiophen-3-yl)nonane",
    NineAlkoxycarbonylOneThiophenThreeYlNonane => "9-Alkoxycarbonyl-1-(thiophen-3-yl)nonane",
    NineCarbamoylOneThiophenThreeYlNonane => "9-Carbamoyl-1-(thiophen-3-yl)nonane",
    NineFormylOneThiophenThreeYlNonane => "9-Formyl-1-(thiophen-3-yl)nonane",
    NineAcylOneThiophenThreeYlNonane => "9-Acyl-1-(thiophen-3-yl)nonane",
    NineCyanoOneThiophenThreeYlNonane => "9-Cyano-1-(thiophen-3-yl)nonane",
    OneHydroxyOneThiophenThreeYlMethane => "1-Hydroxy-1-(thiophen-3-yl)methane",
    OneMethoxyOneThiophenThreeYlMethane => "1-Methoxy-1-(thiophen-3-yl)methane",
    OneAlkoxyOneThiophenThreeYlMethane => "1-Alkoxy-1-(thiophen-3-yl)methane",
    OneAcyloxyOneThiophenThreeYlMethane => "1-Acyloxy-1-(thiophen-3-yl)methane",
    TwoHydroxyOneThiophenThreeYlEthane => "2-Hydroxy-1-(thiophen-3-yl)ethane",
    TwoMethoxyOneThiophenThreeYlEthane => "2-Methoxy-1-(thiophen-3-yl)ethane",
    TwoAlkoxyOneThiophenThreeYlEthane => "2-Alkoxy-1-(thiophen-3-yl)ethane",
    TwoAcyloxyOneThiophenThreeYlEthane => "2-Acyloxy-1-(thiophen-3-yl)ethane",
    ThreeHydroxyOneThiophenThreeYlPropane => "3-Hydroxy-1-(thiophen-3-yl)propane",
    ThreeMethoxyOneThiophenThreeYlPropane => "3-Methoxy-1-(thiophen-3-yl)propane",
    ThreeAlkoxyOneThiophenThreeYlPropane => "3-Alkoxy-1-(thiophen-3-yl)propane",
    ThreeAcyloxyOneThiophenThreeYlPropane => "3-Acyloxy-1-(thiophen-3-yl)propane",
    FourHydroxyOneThiophenThreeYlButane => "4-Hydroxy-1-(thiophen-3-yl)butane",
    FourMethoxyOneThiophenThreeYlButane => "4-Methoxy-1-(thiophen-3-yl)butane",
    FourAlkoxyOneThiophenThreeYlButane => "4-Alkoxy-1-(thiophen-3-yl)butane",
    FourAcyloxyOneThiophenThreeYlButane => "4-Acyloxy-1-(thiophen-3-yl)butane",
    FiveHydroxyOneThiophenThreeYlPentane => "5-Hydroxy-1-(thiophen-3-yl)pentane",
    FiveMethoxyOneThiophenThreeYlPentane => "5-Methoxy-1-(thiophen-3-yl)pentane",
    FiveAlkoxyOneThiophenThreeYlPentane => "5-Alkoxy-1-(thiophen-3-yl)pentane",
    FiveAcyloxyOneThiophenThreeYlPentane => "5-Acyloxy-1-(thiophen-3-yl)pentane",
    SixHydroxyOneThiophenThreeYlHexane => "6-Hydroxy-1-(thiophen-3-yl)hexane",
    SixMethoxyOneThiophenThreeYlHexane => "6-Methoxy-1-(thiophen-3-yl)hexane",
    SixAlkoxyOneThiophenThreeYlHexane => "6-Alkoxy-1-(thiophen-3-yl)hexane",
    SixAcyloxyOneThiophenThreeYlHexane => "6-Acyloxy-1-(thiophen-3-yl)hexane",
    SevenHydroxyOneThiophenThreeYlHeptane => "7-Hydroxy-1-(thiophen-3-yl)heptane",
    SevenMethoxyOneThiophenThreeYlHeptane => "7-Methoxy-1-(thiophen-3-yl)heptane",
    SevenAlkoxyOneThiophenThreeYlHeptane => "7-Alkoxy-1-(thiophen-3-yl)heptane",
    SevenAcyloxyOneThiophenThreeYlHeptane => "7-Acyloxy-1-(thiophen-3-yl)heptane",
    EightHydroxyOneThiophenThreeYlOctane => "8-Hydroxy-1-(thiophen-3-yl)octane",
    EightMethoxyOneThiophenThreeYlOctane => "8-Methoxy-1-(thiophen-3-yl)octane",
    EightAlkoxyOneThiophenThreeYlOctane => "8-Alkoxy-1-(thiophen-3-yl)octane",
    EightAcyloxyOneThiophenThreeYlOctane => "8-Acyloxy-1-(thiophen-3-yl)octane",
    NineHydroxyOneThiophenThreeYlNonane => "9-Hydroxy-1-(thiophen-3-yl)nonane",
    NineMethoxyOneThiophenThreeYlNonane => "9-Methoxy-1-(thiophen-3-yl)nonane",
    NineAlkoxyOneThiophenThreeYlNonane => "9-Alkoxy-1-(thiophen-3-yl)nonane",
    NineAcyloxyOneThiophenThreeYlNonane => "9-Acyloxy-1-(thiophen-3-yl)nonane",
    OneAminoOneThiophenThreeYlMethane => "1-Amino-1-(thiophen-3-yl)methane",
    OneAlkylaminoOneThiophenThreeYlMethane => "1-Alkylamino-1-(thiophen-3-yl)methane",
    OneAcylaminoOneThiophenThreeYlMethane => "1-Acylamino-1-(thiophen-3-yl)methane",
    TwoAminoOneThiophenThreeYlEthane => "2-Amino-1-(thiophen-3-yl)ethane",
    TwoAlkylaminoOneThiophenThreeYlEthane => "2-Alkylamino-1-(thiophen-3-yl)ethane",
    TwoAcylaminoOneThiophenThreeYlEthane => "2-Acylamino-1-(thiophen-3-yl)ethane",
    ThreeAminoOneThiophenThreeYlPropane => "3-Amino-1-(thiophen-3-yl)propane",
    ThreeAlkylaminoOneThiophenThreeYlPropane => "3-Alkylamino-1-(thiophen-3-yl)propane",
    ThreeAcylaminoOneThiophenThreeYlPropane => "3-Acylamino-1-(thiophen-3-yl)propane",
    FourAminoOneThiophenThreeYlButane => "4-Amino-1-(thiophen-3-yl)butane",
    FourAlkylaminoOneThiophenThreeYlButane => "4-Alkylamino-1-(thiophen-3-yl)butane",
    FourAcylaminoOneThiophenThreeYlButane => "4-Acylamino-1-(thiophen-3-yl)butane",
    FiveAminoOneThiophenThreeYlPentane => "5-Amino-1-(thiophen-3-yl)pentane",
    FiveAlkylaminoOneThiophenThreeYlPentane => "5-Alkylamino-1-(thiophen-3-yl)pentane",
    FiveAcylaminoOneThiophenThreeYlPentane => "5-Acylamino-1-(thiophen-3-yl)pentane",
    SixAminoOneThiophenThreeYlHexane => "6-Amino-1-(thiophen-3-yl)hexane",
    SixAlkylaminoOneThiophenThreeYlHexane => "6-Alkylamino-1-(thiophen-3-yl)hexane",
    SixAcylaminoOneThiophenThreeYlHexane => "6-Acylamino-1-(thiophen-3-yl)hexane",
    SevenAminoOneThiophenThreeYlHeptane => "7-Amino-1-(thiophen-3-yl)heptane",
    SevenAlkylaminoOneThiophenThreeYlHeptane => "7-Alkylamino-1-(thiophen-3-yl)heptane",
    SevenAcylaminoOneThiophenThreeYlHeptane => "7-Acylamino-1-(thiophen-3-yl)heptane",
    EightAminoOneThiophenThreeYlOctane => "8-Amino-1-(thiophen-3-yl)octane",
    EightAlkylaminoOneThiophenThreeYlOctane => "8-Alkylamino-1-(thiophen-3-yl)octane",
    EightAcylaminoOneThiophenThreeYlOctane => "8-Acylamino-1-(thiophen-3-yl)octane",
    NineAminoOneThiophenThreeYlNonane => "9-Amino-1-(thiophen-3-yl)nonane",
    NineAlkylaminoOneThiophenThreeYlNonane => "9-Alkylamino-1-(thiophen-3-yl)nonane",
    NineAcylaminoOneThiophenThreeYlNonane => "9-Acylamino-1-(thiophen-3-yl)nonane",
    OneMercaptoOneThiophenThreeYlMethane => "1-Mercapto-1-(thiophen-3-yl)methane",
    OneAlkylthioOneThiophenThreeYlMethane => "1-Alkylthio-1-(thiophen-3-yl)methane",
    OneSulfonylOneThiophenThreeYlMethane => "1-Sulfonyl-1-(thiophen-3-yl)methane",
    TwoMercaptoOneThiophenThreeYlEthane => "2-Mercapto-1-(thiophen-3-yl)ethane",
    TwoAlkylthioOneThiophenThreeYlEthane => "2-Alkylthio-1-(thiophen-3-yl)ethane",
    TwoSulfonylOneThiophenThreeYlEthane => "2-Sulfonyl-1-(thiophen-3-yl)ethane",
    ThreeMercaptoOneThiophenThreeYlPropane => "3-Mercapto-1-(thiophen-3-yl)propane",
    ThreeAlkylthioOneThiophenThreeYlPropane => "3-Alkylthio-1-(thiophen-3-yl)propane",
    ThreeSulfonylOneThiophenThreeYlPropane => "3-Sulfonyl-1-(thiophen-3-yl)propane",
    FourMercaptoOneThiophenThreeYlButane => "4-Mercapto-1-(thiophen-3-yl)butane",
    FourAlkylthioOneThiophenThreeYlButane => "4-Alkylthio-1-(thiophen-3-yl)butane",
    FourSulfonylOneThiophenThreeYlButane => "4-Sulfonyl-1-(thiophen-3-yl)butane",
    FiveMercaptoOneThiophenThreeYlPentane => "5-Mercapto-1-(thiophen-3-yl)pentane",
    FiveAlkylthioOneThiophenThreeYlPentane => "5-Alkylthio-1-(thiophen-3-yl)pentane",
    FiveSulfonylOneThiophenThreeYlPentane => "5-Sulfonyl-1-(thiophen-3-yl)pentane",
    SixMercaptoOneThiophenThreeYlHexane => "6-Mercapto-1-(thiophen-3-yl)hexane",
    SixAlkylthioOneThiophenThreeYlHexane => "6-Alkylthio-1-(thiophen-3-yl)hexane",
    SixSulfonylOneThiophenThreeYlHexane => "6-Sulfonyl-1-(thiophen-3-yl)hexane",
    SevenMercaptoOneThiophenThreeYlHeptane => "7-Mercapto-1-(thiophen-3-yl)heptane",
    SevenAlkylthioOneThiophenThreeYlHeptane => "7-Alkylthio-1-(thiophen-3-yl)heptane",
    SevenSulfonylOneThiophenThreeYlHeptane => "7-Sulfonyl-1-(thiophen-3-yl)heptane",
    EightMercaptoOneThiophenThreeYlOctane => "8-Mercapto-1-(thiophen-3-yl)octane",
    EightAlkylthioOneThiophenThreeYlOctane => "8-Alkylthio-1-(thiophen-3-yl)octane",
    EightSulfonylOneThiophenThreeYlOctane => "8-Sulfonyl-1-(thiophen-3-yl)octane",
    NineMercaptoOneThiophenThreeYlNonane => "9-Mercapto-1-(thiophen-3-yl)nonane",
    NineAlkylthioOneThiophenThreeYlNonane => "9-Alkylthio-1-(thiophen-3-yl)nonane",
    NineSulfonylOneThiophenThreeYlNonane => "9-Sulfonyl-1-(thiophen-3-yl)nonane",
    OneFluoroOneThiophenThreeYlMethane => "1-Fluoro-1-(thiophen-3-yl)methane",
    TwoFluoroOneThiophenThreeYlEthane => "2-Fluoro-1-(thiophen-3-yl)ethane",
    ThreeFluoroOneThiophenThreeYlPropane => "3-Fluoro-1-(thiophen-3-yl)propane",
    FourFluoroOneThiophenThreeYlButane => "4-Fluoro-1-(thiophen-3-yl)butane",
    FiveFluoroOneThiophenThreeYlPentane => "5-Fluoro-1-(thiophen-3-yl)pentane",
    SixFluoroOneThiophenThreeYlHexane => "6-Fluoro-1-(thiophen-3-yl)hexane",
    SevenFluoroOneThiophenThreeYlHeptane => "7-Fluoro-1-(thiophen-3-yl)heptane",
    EightFluoroOneThiophenThreeYlOctane => "8-Fluoro-1-(thiophen-3-yl)octane",
    NineFluoroOneThiophenThreeYlNonane => "9-Fluoro-1-(thiophen-3-yl)nonane",
    OneChloroOneThiophenThreeYlMethane => "1-Chloro-1-(thiophen-3-yl)methane",
    TwoChloroOneThiophenThreeYlEthane => "2-Chloro-1-(thiophen-3-yl)ethane",
    ThreeChloroOneThiophenThreeYlPropane => "3-Chloro-1-(thiophen-3-yl)propane",
    FourChloroOneThiophenThreeYlButane => "4-Chloro-1-(thiophen-3-yl)butane",
    FiveChloroOneThiophenThreeYlPentane => "5-Chloro-1-(thiophen-3-yl)pentane",
    SixChloroOneThiophenThreeYlHexane => "6-Chloro-1-(thiophen-3-yl)hexane",
    SevenChloroOneThiophenThreeYlHeptane => "7-Chloro-1-(thiophen-3-yl)heptane",
    EightChloroOneThiophenThreeYlOctane => "8-Chloro-1-(thiophen-3-yl)octane",
    NineChloroOneThiophenThreeYlNonane => "9-Chloro-1-(thiophen-3-yl)nonane",
    OneBromoOneThiophenThreeYlMethane => "1-Bromo-1-(thiophen-3-yl)methane",
    TwoBromoOneThiophenThreeYlEthane => "2-Bromo-1-(thiophen-3-yl)ethane",
    ThreeBromoOneThiophenThreeYlPropane => "3-Bromo-1-(thiophen-3-yl)propane",
    FourBromoOneThiophenThreeYlButane => "4-Bromo-1-(thiophen-3-yl)butane",
    FiveBromoOneThiophenThreeYlPentane => "5-Bromo-1-(thiophen-3-yl)pentane",
    SixBromoOneThiophenThreeYlHexane => "6-Bromo-1-(thiophen-3-yl)hexane",
    SevenBromoOneThiophenThreeYlHeptane => "7-Bromo-1-(thiophen-3-yl)heptane",
    EightBromoOneThiophenThreeYlOctane => "8-Bromo-1-(thiophen-3-yl)octane",
    NineBromoOneThiophenThreeYlNonane => "9-Bromo-1-(thiophen-3-yl)nonane",
    OneIodoOneThiophenThreeYlMethane => "1-Iodo-1-(thiophen-3-yl)methane",
    TwoIodoOneThiophenThreeYlEthane => "2-Iodo-1-(thiophen-3-yl)ethane",
    ThreeIodoOneThiophenThreeYlPropane => "3-Iodo-1-(thiophen-3-yl)propane",
    FourIodoOneThiophenThreeYlButane => "4-Iodo-1-(thiophen-3-yl)butane",
    FiveIodoOneThiophenThreeYlPentane => "5-Iodo-1-(thiophen-3-yl)pentane",
    SixIodoOneThiophenThreeYlHexane => "6-Iodo-1-(thiophen-3-yl)hexane",
    SevenIodoOneThiophenThreeYlHeptane => "7-Iodo-1-(thiophen-3-yl)heptane",
    EightIodoOneThiophenThreeYlOctane => "8-Iodo-1-(thiophen-3-yl)octane",
    NineIodoOneThiophenThreeYlNonane => "9-Iodo-1-(thiophen-3-yl)nonane",
    OneCarboxyOnePyrimidinTwoYlMethane => "1-Carboxy-1-(pyrimidin-2-yl)methane",
    OneAlkoxycarbonylOnePyrimidinTwoYlMethane => "1-Alkoxycarbonyl-1-(pyrimidin-2-yl)methane",
    OneCarbamoylOnePyrimidinTwoYlMethane => "1-Carbamoyl-1-(pyrimidin-2-yl)methane",
    OneFormylOnePyrimidinTwoYlMethane => "1-Formyl-1-(pyrimidin-2-yl)methane",
    OneAcylOnePyrimidinTwoYlMethane => "1-Acyl-1-(pyrimidin-2-yl)methane",
    OneCyanoOnePyrimidinTwoYlMethane => "1-Cyano-1-(pyrimidin-2-yl)methane",
    TwoCarboxyOnePyrimidinTwoYlEthane => "2-Carboxy-1-(pyrimidin-2-yl)ethane",
    TwoAlkoxycarbonylOnePyrimidinTwoYlEthane => "2-Alkoxycarbonyl-1-(pyrimidin-2-yl)ethane",
    TwoCarbamoylOnePyrimidinTwoYlEthane => "2-Carbamoyl-1-(pyrimidin-2-yl)ethane",
    TwoFormylOnePyrimidinTwoYlEthane => "2-Formyl-1-(pyrimidin-2-yl)ethane",
    TwoAcylOnePyrimidinTwoYlEthane => "2-Acyl-1-(pyrimidin-2-yl)ethane",
    TwoCyanoOnePyrimidinTwoYlEthane => "2-Cyano-1-(pyrimidin-2-yl)ethane",
    ThreeCarboxyOnePyrimidinTwoYlPropane => "3-Carboxy-1-(pyrimidin-2-yl)propane",
    ThreeAlkoxycarbonylOnePyrimidinTwoYlPropane => "3-Alkoxycarbonyl-1-(pyrimidin-2-yl)propane",
    ThreeCarbamoylOnePyrimidinTwoYlPropane => "3-Carbamoyl-1-(pyrimidin-2-yl)propane",
    ThreeFormylOnePyrimidinTwoYlPropane => "3-Formyl-1-(pyrimidin-2-yl)propane",
    ThreeAcylOnePyrimidinTwoYlPropane => "3-Acyl-1-(pyrimidin-2-yl)propane",
    ThreeCyanoOnePyrimidinTwoYlPropane => "3-Cyano-1-(pyrimidin-2-yl)propane",
    FourCarboxyOnePyrimidinTwoYlButane => "4-Carboxy-1-(pyrimidin-2-yl)butane",
    FourAlkoxycarbonylOnePyrimidinTwoYlButane => "4-Alkoxycarbonyl-1-(pyrimidin-2-yl)butane",
    FourCarbamoylOnePyrimidinTwoYlButane => "4-Carbamoyl-1-(pyrimidin-2-yl)butane",
    FourFormylOnePyrimidinTwoYlButane => "4-Formyl-1-(pyrimidin-2-yl)butane",
    FourAcylOnePyrimidinTwoYlButane => "4-Acyl-1-(pyrimidin-2-yl)butane",
    FourCyanoOnePyrimidinTwoYlButane => "4-Cyano-1-(pyrimidin-2-yl)butane",
    FiveCarboxyOnePyrimidinTwoYlPentane => "5-Carboxy-1-(pyrimidin-2-yl)pentane",
    FiveAlkoxycarbonylOnePyrimidinTwoYlPentane => "5-Alkoxycarbonyl-1-(pyrimidin-2-yl)pentane",
    FiveCarbamoylOnePyrimidinTwoYlPentane => "5-Carbamoyl-1-(pyrimidin-2-yl)pentane",
    FiveFormylOnePyrimidinTwoYlPentane => "5-Formyl-1-(pyrimidin-2-yl)pentane",
    FiveAcylOnePyrimidinTwoYlPentane => "5-Acyl-1-(pyrimidin-2-yl)pentane",
    FiveCyanoOnePyrimidinTwoYlPentane => "5-Cyano-1-(pyrimidin-2-yl)pentane",
    SixCarboxyOnePyrimidinTwoYlHexane => "6-Carboxy-1-(pyrimidin-2-yl)hexane",
    SixAlkoxycarbonylOnePyrimidinTwoYlHexane => "6-Alkoxycarbonyl-1-(pyrimidin-2-yl)hexane",
    SixCarbamoylOnePyrimidinTwoYlHexane => "6-Carbamoyl-1-(pyrimidin-2-yl)hexane",
    SixFormylOnePyrimidinTwoYlHexane => "6-Formyl-1-(pyrimidin-2-yl)hexane",
    SixAcylOnePyrimidinTwoYlHexane => "6-Acyl-1-(pyrimidin-2-yl)hexane",
    SixCyanoOnePyrimidinTwoYlHexane => "6-Cyano-1-(pyrimidin-2-yl)hexane",
    SevenCarboxyOnePyrimidinTwoYlHeptane => "7-Carboxy-1-(pyrimidin-2-yl)heptane",
    SevenAlkoxycarbonylOnePyrimidinTwoYlHeptane => "7-Alkoxycarbonyl-1-(pyrimidin-2-yl)heptane",
    SevenCarbamoylOnePyrimidinTwoYlHeptane => "7-Carbamoyl-1-(pyrimidin-2-yl)heptane",
    SevenFormylOnePyrimidinTwoYlHeptane => "7-Formyl-1-(pyrimidin-2-yl)heptane",
    SevenAcylOnePyrimidinTwoYlHeptane => "7-Acyl-1-(pyrimidin-2-yl)heptane",
    SevenCyanoOnePyrimidinTwoYlHeptane => "7-Cyano-1-(pyrimidin-2-yl)heptane",
    EightCarboxyOnePyrimidinTwoYlOctane => "8-Carboxy-1-(pyrimidin-2-yl)octane",
    EightAlkoxycarbonylOnePyrimidinTwoYlOctane => "8-Alkoxycarbonyl-1-(pyrimidin-2-yl)octane",
    EightCarbamoylOnePyrimidinTwoYlOctane => "8-Carbamoyl-1-(pyrimidin-2-yl)octane",
    EightFormylOnePyrimidinTwoYlOctane => "8-Formyl-1-(pyrimidin-2-yl)octane",
    EightAcylOnePyrimidinTwoYlOctane => "8-Acyl-1-(pyrimidin-2-yl)octane",
    EightCyanoOnePyrimidinTwoYlOctane => "8-Cyano-1-(pyrimidin-2-yl)octane",
    NineCarboxyOnePyrimidinTwoYlNonane => "9-Carboxy-1-(pyrimidin-2-yl)nonane",
    NineAlkoxycarbonylOnePyrimidinTwoYlNonane => "9-Alkoxycarbonyl-1-(pyrimidin-2-yl)nonane",
    NineCarbamoylOnePyrimidinTwoYlNonane => "9-Carbamoyl-1-(pyrimidin-2-yl)nonane",
    NineFormylOnePyrimidinTwoYlNonane => "9-Formyl-1-(pyrimidin-2-yl)nonane",
    NineAcylOnePyrimidinTwoYlNonane => "9-Acyl-1-(pyrimidin-2-yl)nonane",
    NineCyanoOnePyrimidinTwoYlNonane => "9-Cyano-1-(pyrimidin-2-yl)nonane",
    OneHydroxyOnePyrimidinTwoYlMethane => "1-Hydroxy-1-(pyrimidin-2-yl)methane",
    OneMethoxyOnePyrimidinTwoYlMethane => "1-Methoxy-1-(pyrimidin-2-yl)methane",
    OneAlkoxyOnePyrimidinTwoYlMethane => "1-Alkoxy-1-(pyrimidin-2-yl)methane",
    OneAcyloxyOnePyrimidinTwoYlMethane => "1-Acyloxy-1-(pyrimidin-2-yl)methane",
    TwoHydroxyOnePyrimidinTwoYlEthane => "2-Hydroxy-1-(pyrimidin-2-yl)ethane",
    TwoMethoxyOnePyrimidinTwoYlEthane => "2-Methoxy-1-(pyrimidin-2-yl)ethane",
    TwoAlkoxyOnePyrimidinTwoYlEthane => "2-Alkoxy-1-(pyrimidin-2-yl)ethane",
    TwoAcyloxyOnePyrimidinTwoYlEthane => "2-Acyloxy-1-(pyrimidin-2-yl)ethane",
    ThreeHydroxyOnePyrimidinTwoYlPropane => "3-Hydroxy-1-(pyrimidin-2-yl)propane",
    ThreeMethoxyOnePyrimidinTwoYlPropane => "3-Methoxy-1-(pyrimidin-2-yl)propane",
    ThreeAlkoxyOnePyrimidinTwoYlPropane => "3-Alkoxy-1-(pyrimidin-2-yl)propane",
    ThreeAcyloxyOnePyrimidinTwoYlPropane => "3-Acyloxy-1-(pyrimidin-2-yl)propane",
    FourHydroxyOnePyrimidinTwoYlButane => "4-Hydroxy-1-(pyrimidin-2-yl)butane",
    FourMethoxyOnePyrimidinTwoYlButane => "4-Methoxy-1-(pyrimidin-2-yl)butane",
    FourAlkoxyOnePyrimidinTwoYlButane => "4-Alkoxy-1-(pyrimidin-2-yl)butane",
    FourAcyloxyOnePyrimidinTwoYlButane => "4-Acyloxy-1-(pyrimidin-2-yl)butane",
    FiveHydroxyOnePyrimidinTwoYlPentane => "5-Hydroxy-1-(pyrimidin-2-yl)pentane",
    FiveMethoxyOnePyrimidinTwoYlPentane => "5-Methoxy-1-(pyrimidin-2-yl)pentane",
    FiveAlkoxyOnePyrimidinTwoYlPentane => "5-Alkoxy-1-(pyrimidin-2-yl)pentane",
    FiveAcyloxyOnePyrimidinTwoYlPentane => "5-Acyloxy-1-(pyrimidin-2-yl)pentane",
    SixHydroxyOnePyrimidinTwoYlHexane => "6-Hydroxy-1-(pyrimidin-2-yl)hexane",
    SixMethoxyOnePyrimidinTwoYlHexane => "6-Methoxy-1-(pyrimidin-2-yl)hexane",
    SixAlkoxyOnePyrimidinTwoYlHexane => "6-Alkoxy-1-(pyrimidin-2-yl)hexane",
    SixAcyloxyOnePyrimidinTwoYlHexane => "6-Acyloxy-1-(pyrimidin-2-yl)hexane",
    SevenHydroxyOnePyrimidinTwoYlHeptane => "7-Hydroxy-1-(pyrimidin-2-yl)heptane",
    SevenMethoxyOnePyrimidinTwoYlHeptane => "7-Methoxy-1-(pyrimidin-2-yl)heptane",
    SevenAlkoxyOnePyrimidinTwoYlHeptane => "7-Alkoxy-1-(pyrimidin-2-yl)heptane",
    SevenAcyloxyOnePyrimidinTwoYlHeptane => "7-Acyloxy-1-(pyrimidin-2-yl)heptane",
    EightHydroxyOnePyrimidinTwoYlOctane => "8-Hydroxy-1-(pyrimidin-2-yl)octane",
    EightMethoxyOnePyrimidinTwoYlOctane => "8-Methoxy-1-(pyrimidin-2-yl)octane",
    EightAlkoxyOnePyrimidinTwoYlOctane => "8-Alkoxy-1-(pyrimidin-2-yl)octane",
    EightAcyloxyOnePyrimidinTwoYlOctane => "8-Acyloxy-1-(pyrimidin-2-yl)octane",
    NineHydroxyOnePyrimidinTwoYlNonane => "9-Hydroxy-1-(pyrimidin-2-yl)nonane",
    NineMethoxyOnePyrimidinTwoYlNonane => "9-Methoxy-1-(pyrimidin-2-yl)nonane",
    NineAlkoxyOnePyrimidinTwoYlNonane => "9-Alkoxy-1-(pyrimidin-2-yl)nonane",
    NineAcyloxyOnePyrimidinTwoYlNonane => "9-Acyloxy-1-(pyrimidin-2-yl)nonane",
    OneAminoOnePyrimidinTwoYlMethane => "1-Amino-1-(pyrimidin-2-yl)methane",
    OneAlkylaminoOnePyrimidinTwoYlMethane => "1-Alkylamino-1-(pyrimidin-2-yl)methane",
    OneAcylaminoOnePyrimidinTwoYlMethane => "1-Acylamino-1-(pyrimidin-2-yl)methane",
    TwoAminoOnePyrimidinTwoYlEthane => "2-Amino-1-(pyrimidin-2-yl)ethane",
    TwoAlkylaminoOnePyrimidinTwoYlEthane => "2-Alkylamino-1-(pyrimidin-2-yl)ethane",
    TwoAcylaminoOnePyrimidinTwoYlEthane => "2-Acylamino-1-(pyrimidin-2-yl)ethane",
    ThreeAminoOnePyrimidinTwoYlPropane => "3-Amino-1-(pyrimidin-2-yl)propane",
    ThreeAlkylaminoOnePyrimidinTwoYlPropane => "3-Alkylamino-1-(pyrimidin-2-yl)propane",
    ThreeAcylaminoOnePyrimidinTwoYlPropane => "3-Acylamino-1-(pyrimidin-2-yl)propane",
    FourAminoOnePyrimidinTwoYlButane => "4-Amino-1-(pyrimidin-2-yl)butane",
    FourAlkylaminoOnePyrimidinTwoYlButane => "4-Alkylamino-1-(pyrimidin-2-yl)butane",
    FourAcylaminoOnePyrimidinTwoYlButane => "4-Acylamino-1-(pyrimidin-2-yl)butane",
    FiveAminoOnePyrimidinTwoYlPentane => "5-Amino-1-(pyrimidin-2-yl)pentane",
    FiveAlkylaminoOnePyrimidinTwoYlPentane => "5-Alkylamino-1-(pyrimidin-2-yl)pentane",
    FiveAcylaminoOnePyrimidinTwoYlPentane => "5-Acylamino-1-(pyrimidin-2-yl)pentane",
    SixAminoOnePyrimidinTwoYlHexane => "6-Amino-1-(pyrimidin-2-yl)hexane",
    SixAlkylaminoOnePyrimidinTwoYlHexane => "6-Alkylamino-1-(pyrimidin-2-yl)hexane",
    SixAcylaminoOnePyrimidinTwoYlHexane => "6-Acylamino-1-(pyrimidin-2-yl)hexane",
    SevenAminoOnePyrimidinTwoYlHeptane => "7-Amino-1-(pyrimidin-2-yl)heptane",
    SevenAlkylaminoOnePyrimidinTwoYlHeptane => "7-Alkylamino-1-(pyrimidin-2-yl)heptane",
    SevenAcylaminoOnePyrimidinTwoYlHeptane => "7-Acylamino-1-(pyrimidin-2-yl)heptane",
    EightAminoOnePyrimidinTwoYlOctane => "8-Amino-1-(pyrimidin-2-yl)octane",
    EightAlkylaminoOnePyrimidinTwoYlOctane => "8-Alkylamino-1-(pyrimidin-2-yl)octane",
    EightAcylaminoOnePyrimidinTwoYlOctane => "8-Acylamino-1-(pyrimidin-2-yl)octane",
    NineAminoOnePyrimidinTwoYlNonane => "9-Amino-1-(pyrimidin-2-yl)nonane",
    NineAlkylaminoOnePyrimidinTwoYlNonane => "9-Alkylamino-1-(pyrimidin-2-yl)nonane",
    NineAcylaminoOnePyrimidinTwoYlNonane => "9-Acylamino-1-(pyrimidin-2-yl)nonane",
    OneMercaptoOnePyrimidinTwoYlMethane => "1-Mercapto-1-(pyrimidin-2-yl)methane",
    OneAlkylthioOnePyrimidinTwoYlMethane => "1-Alkylthio-1-(pyrimidin-2-yl)methane",
    OneSulfonylOnePyrimidinTwoYlMethane => "1-Sulfonyl-1-(pyrimidin-2-yl)methane",
    TwoMercaptoOnePyrimidinTwoYlEthane => "2-Mercapto-1-(pyrimidin-2-yl)ethane",
    TwoAlkylthioOnePyrimidinTwoYlEthane => "2-Alkylthio-1-(pyrimidin-2-yl)ethane",
    TwoSulfonylOnePyrimidinTwoYlEthane => "2-Sulfonyl-1-(pyrimidin-2-yl)ethane",
    ThreeMercaptoOnePyrimidinTwoYlPropane => "3-Mercapto-1-(pyrimidin-2-yl)propane",
    ThreeAlkylthioOnePyrimidinTwoYlPropane => "3-Alkylthio-1-(pyrimidin-2-yl)propane",
    ThreeSulfonylOnePyrimidinTwoYlPropane => "3-Sulfonyl-1-(pyrimidin-2-yl)propane",
    FourMercaptoOnePyrimidinTwoYlButane => "4-Mercapto-1-(pyrimidin-2-yl)butane",
    FourAlkylthioOnePyrimidinTwoYlButane => "4-Alkylthio-1-(pyrimidin-2-yl)butane",
    FourSulfonylOnePyrimidinTwoYlButane => "4-Sulfonyl-1-(pyrimidin-2-yl)butane",
    FiveMercaptoOnePyrimidinTwoYlPentane => "5-Mercapto-1-(pyrimidin-2-yl)pentane",
    FiveAlkylthioOnePyrimidinTwoYlPentane => "5-Alkylthio-1-(pyrimidin-2-yl)pentane",
    FiveSulfonylOnePyrimidinTwoYlPentane => "5-Sulfonyl-1-(pyrimidin-2-yl)pentane",
    SixMercaptoOnePyrimidinTwoYlHexane => "6-Mercapto-1-(pyrimidin-2-yl)hexane",
    SixAlkylthioOnePyrimidinTwoYlHexane => "6-Alkylthio-1-(pyrimidin-2-yl)hexane",
    SixSulfonylOnePyrimidinTwoYlHexane => "6-Sulfonyl-1-(pyrimidin-2-yl)hexane",
    SevenMercaptoOnePyrimidinTwoYlHeptane => "7-Mercapto-1-(pyrimidin-2-yl)heptane",
    SevenAlkylthioOnePyrimidinTwoYlHeptane => "7-Alkylthio-1-(pyrimidin-2-yl)heptane",
    SevenSulfonylOnePyrimidinTwoYlHeptane => "7-Sulfonyl-1-(pyrimidin-2-yl)heptane",
    EightMercaptoOnePyrimidinTwoYlOctane => "8-Mercapto-1-(pyrimidin-2-yl)octane",
    EightAlkylthioOnePyrimidinTwoYlOctane => "8-Alkylthio-1-(pyrimidin-2-yl)octane",
    EightSulfonylOnePyrimidinTwoYlOctane => "8-Sulfonyl-1-(pyrimidin-2-yl)octane",
    NineMercaptoOnePyrimidinTwoYlNonane => "9-Mercapto-1-(pyrimidin-2-yl)nonane",
    NineAlkylthioOnePyrimidinTwoYlNonane => "9-Alkylthio-1-(pyrimidin-2-yl)nonane",
    NineSulfonylOnePyrimidinTwoYlNonane => "9-Sulfonyl-1-(pyrimidin-2-yl)nonane",
    OneFluoroOnePyrimidinTwoYlMethane => "1-Fluoro-1-(pyrimidin-2-yl)methane",
    TwoFluoroOnePyrimidinTwoYlEthane => "2-Fluoro-1-(pyrimidin-2-yl)ethane",
    ThreeFluoroOnePyrimidinTwoYlPropane => "3-Fluoro-1-(pyrimidin-2-yl)propane",
    FourFluoroOnePyrimidinTwoYlButane => "4-Fluoro-1-(pyrimidin-2-yl)butane",
    FiveFluoroOnePyrimidinTwoYlPentane => "5-Fluoro-1-(pyrimidin-2-yl)pentane",
    SixFluoroOnePyrimidinTwoYlHexane => "6-Fluoro-1-(pyrimidin-2-yl)hexane",
    SevenFluoroOnePyrimidinTwoYlHeptane => "7-Fluoro-1-(pyrimidin-2-yl)heptane",
    EightFluoroOnePyrimidinTwoYlOctane => "8-Fluoro-1-(pyrimidin-2-yl)octane",
    NineFluoroOnePyrimidinTwoYlNonane => "9-Fluoro-1-(pyrimidin-2-yl)nonane",
    OneChloroOnePyrimidinTwoYlMethane => "1-Chloro-1-(pyrimidin-2-yl)methane",
    TwoChloroOnePyrimidinTwoYlEthane => "2-Chloro-1-(pyrimidin-2-yl)ethane",
    ThreeChloroOnePyrimidinTwoYlPropane => "3-Chloro-1-(pyrimidin-2-yl)propane",
    FourChloroOnePyrimidinTwoYlButane => "4-Chloro-1-(pyrimidin-2-yl)butane",
    FiveChloroOnePyrimidinTwoYlPentane => "5-Chloro-1-(pyrimidin-2-yl)pentane",
    SixChloroOnePyrimidinTwoYlHexane => "6-Chloro-1-(pyrimidin-2-yl)hexane",
    SevenChloroOnePyrimidinTwoYlHeptane => "7-Chloro-1-(pyrimidin-2-yl)heptane",
    EightChloroOnePyrimidinTwoYlOctane => "8-Chloro-1-(pyrimidin-2-yl)octane",
    NineChloroOnePyrimidinTwoYlNonane => "9-Chloro-1-(pyrimidin-2-yl)nonane",
    OneBromoOnePyrimidinTwoYlMethane => "1-Bromo-1-(pyrimidin-2-yl)methane",
    TwoBromoOnePyrimidinTwoYlEthane => "2-Bromo-1-(pyrimidin-2-yl)ethane",
    ThreeBromoOnePyrimidinTwoYlPropane => "3-Bromo-1-(pyrimidin-2-yl)propane",
    FourBromoOnePyrimidinTwoYlButane => "4-Bromo-1-(pyrimidin-2-yl)butane",
    FiveBromoOnePyrimidinTwoYlPentane => "5-Bromo-1-(pyrimidin-2-yl)pentane",
    SixBromoOnePyrimidinTwoYlHexane => "6-Bromo-1-(pyrimidin-2-yl)hexane",
    SevenBromoOnePyrimidinTwoYlHeptane => "7-Bromo-1-(pyrimidin-2-yl)heptane",
    EightBromoOnePyrimidinTwoYlOctane => "8-Bromo-1-(pyrimidin-2-yl)octane",
    NineBromoOnePyrimidinTwoYlNonane => "9-Bromo-1-(pyrimidin-2-yl)nonane",
    OneIodoOnePyrimidinTwoYlMethane => "1-Iodo-1-(pyrimidin-2-yl)methane",
    TwoIodoOnePyrimidinTwoYlEthane => "2-Iodo-1-(pyrimidin-2-yl)ethane",
    ThreeIodoOnePyrimidinTwoYlPropane => "3-Iodo-1-(pyrimidin-2-yl)propane",
    FourIodoOnePyrimidinTwoYlButane => "4-Iodo-1-(pyrimidin-2-yl)butane",
    FiveIodoOnePyrimidinTwoYlPentane => "5-Iodo-1-(pyrimidin-2-yl)pentane",
    SixIodoOnePyrimidinTwoYlHexane => "6-Iodo-1-(pyrimidin-2-yl)hexane",
    SevenIodoOnePyrimidinTwoYlHeptane => "7-Iodo-1-(pyrimidin-2-yl)heptane",
    EightIodoOnePyrimidinTwoYlOctane => "8-Iodo-1-(pyrimidin-2-yl)octane",
    NineIodoOnePyrimidinTwoYlNonane => "9-Iodo-1-(pyrimidin-2-yl)nonane",
    OneCarboxyOneThiazolTwoYlMethane => "1-Carboxy-1-(thiazol-2-yl)methane",
    OneAlkoxycarbonylOneThiazolTwoYlMethane => "1-Alkoxycarbonyl-1-(thiazol-2-yl)methane",
    OneCarbamoylOneThiazolTwoYlMethane => "1-Carbamoyl-1-(thiazol-2-yl)methane",
    OneFormylOneThiazolTwoYlMethane => "1-Formyl-1-(thiazol-2-yl)methane",
    OneAcylOneThiazolTwoYlMethane => "1-Acyl-1-(thiazol-2-yl)methane",
    OneCyanoOneThiazolTwoYlMethane => "1-Cyano-1-(thiazol-2-yl)methane",
    TwoCarboxyOneThiazolTwoYlEthane => "2-Carboxy-1-(thiazol-2-yl)ethane",
    TwoAlkoxycarbonylOneThiazolTwoYlEthane => "2-Alkoxycarbonyl-1-(thiazol-2-yl)ethane",
    TwoCarbamoylOneThiazolTwoYlEthane => "2-Carbamoyl-1-(thiazol-2-yl)ethane",
    TwoFormylOneThiazolTwoYlEthane => "2-Formyl-1-(thiazol-2-yl)ethane",
    TwoAcylOneThiazolTwoYlEthane => "2-Acyl-1-(thiazol-2-yl)ethane",
    TwoCyanoOneThiazolTwoYlEthane => "2-Cyano-1-(thiazol-2-yl)ethane",
    ThreeCarboxyOneThiazolTwoYlPropane => "3-Carboxy-1-(thiazol-2-yl)propane",
    ThreeAlkoxycarbonylOneThiazolTwoYlPropane => "3-Alkoxycarbonyl-1-(thiazol-2-yl)propane",
    ThreeCarbamoylOneThiazolTwoYlPropane => "3-Carbamoyl-1-(thiazol-2-yl)propane",
    ThreeFormylOneThiazolTwoYlPropane => "3-Formyl-1-(thiazol-2-yl)propane",
    ThreeAcylOneThiazolTwoYlPropane => "3-Acyl-1-(thiazol-2-yl)propane",
    ThreeCyanoOneThiazolTwoYlPropane => "3-Cyano-1-(thiazol-2-yl)propane",
    FourCarboxyOneThiazolTwoYlButane => "4-Carboxy-1-(thiazol-2-yl)butane",
    FourAlkoxycarbonylOneThiazolTwoYlButane => "4-Alkoxycarbonyl-1-(thiazol-2-yl)butane",
    FourCarbamoylOneThiazolTwoYlButane => "4-Carbamoyl-1-(thiazol-2-yl)butane",
    FourFormylOneThiazolTwoYlButane => "4-Formyl-1-(thiazol-2-yl)butane",
    FourAcylOneThiazolTwoYlButane => "4-Acyl-1-(thiazol-2-yl)butane",
    FourCyanoOneThiazolTwoYlButane => "4-Cyano-1-(thiazol-2-yl)butane",
    FiveCarboxyOneThiazolTwoYlPentane => "5-Carboxy-1-(thiazol-2-yl)pentane",
    FiveAlkoxycarbonylOneThiazolTwoYlPentane => "5-Alkoxycarbonyl-1-(thiazol-2-yl)pentane",
    FiveCarbamoylOneThiazolTwoYlPentane => "5-Carbamoyl-1-(thiazol-2-yl)pentane",
    FiveFormylOneThiazolTwoYlPentane => "5-Formyl-1-(thiazol-2-yl)pentane",
    FiveAcylOneThiazolTwoYlPentane => "5-Acyl-1-(thiazol-2-yl)pentane",
    FiveCyanoOneThiazolTwoYlPentane => "5-Cyano-1-(thiazol-2-yl)pentane",
    SixCarboxyOneThiazolTwoYlHexane => "6-Carboxy-1-(thiazol-2-yl)hexane",
    SixAlkoxycarbonylOneThiazolTwoYlHexane => "6-Alkoxycarbonyl-1-(thiazol-2-yl)hexane",
    SixCarbamoylOneThiazolTwoYlHexane => "6-Carbamoyl-1-(thiazol-2-yl)hexane",
    SixFormylOneThiazolTwoYlHexane => "6-Formyl-1-(thiazol-2-yl)hexane",
    SixAcylOneThiazolTwoYlHexane => "6-Acyl-1-(thiazol-2-yl)hexane",
    SixCyanoOneThiazolTwoYlHexane => "6-Cyano-1-(thiazol-2-yl)hexane",
    SevenCarboxyOneThiazolTwoYlHeptane => "7-Carboxy-1-(thiazol-2-yl)heptane",
    SevenAlkoxycarbonylOneThiazolTwoYlHeptane => "7-Alkoxycarbonyl-1-(thiazol-2-yl)heptane",
    SevenCarbamoylOneThiazolTwoYlHeptane => "7-Carbamoyl-1-(thiazol-2-yl)heptane",
    SevenFormylOneThiazolTwoYlHeptane => "7-Formyl-1-(thiazol-2-yl)heptane",
    SevenAcylOneThiazolTwoYlHeptane => "7-Acyl-1-(thiazol-2-yl)heptane",
    SevenCyanoOneThiazolTwoYlHeptane => "7-Cyano-1-(thiazol-2-yl)heptane",
    EightCarboxyOneThiazolTwoYlOctane => "8-Carboxy-1-(thiazol-2-yl)octane",
    EightAlkoxycarbonylOneThiazolTwoYlOctane => "8-Alkoxycarbonyl-1-(thiazol-2-yl)octane",
    EightCarbamoylOneThiazolTwoYlOctane => "8-Carbamoyl-1-(thiazol-2-yl)octane",
    EightFormylOneThiazolTwoYlOctane => "8-Formyl-1-(thiazol-2-yl)octane",
    EightAcylOneThiazolTwoYlOctane => "8-Acyl-1-(thiazol-2-yl)octane",
    EightCyanoOneThiazolTwoYlOctane => "8-Cyano-1-(thiazol-2-yl)octane",
    NineCarboxyOneThiazolTwoYlNonane => "9-Carboxy-1-(thiazol-2-yl)nonane",
    NineAlkoxycarbonylOneThiazolTwoYlNonane => "9-Alkoxycarbonyl-1-(thiazol-2-yl)nonane",
    NineCarbamoylOneThiazolTwoYlNonane => "9-Carbamoyl-1-(thiazol-2-yl)nonane",
    NineFormylOneThiazolTwoYlNonane => "9-Formyl-1-(thiazol-2-yl)nonane",
    NineAcylOneThiazolTwoYlNonane => "9-Acyl-1-(thiazol-2-yl)nonane",
    NineCyanoOneThiazolTwoYlNonane => "9-Cyano-1-(thiazol-2-yl)nonane",
    OneHydroxyOneThiazolTwoYlMethane => "1-Hydroxy-1-(thiazol-2-yl)methane",
    OneMethoxyOneThiazolTwoYlMethane => "1-Methoxy-1-(thiazol-2-yl)methane",
    OneAlkoxyOneThiazolTwoYlMethane => "1-Alkoxy-1-(thiazol-2-yl)methane",
    OneAcyloxyOneThiazolTwoYlMethane => "1-Acyloxy-1-(thiazol-2-yl)methane",
    TwoHydroxyOneThiazolTwoYlEthane => "2-Hydroxy-1-(thiazol-2-yl)ethane",
    TwoMethoxyOneThiazolTwoYlEthane => "2-Methoxy-1-(thiazol-2-yl)ethane",
    TwoAlkoxyOneThiazolTwoYlEthane => "2-Alkoxy-1-(thiazol-2-yl)ethane",
    TwoAcyloxyOneThiazolTwoYlEthane => "2-Acyloxy-1-(thiazol-2-yl)ethane",
    ThreeHydroxyOneThiazolTwoYlPropane => "3-Hydroxy-1-(thiazol-2-yl)propane",
    ThreeMethoxyOneThiazolTwoYlPropane => "3-Methoxy-1-(thiazol-2-yl)propane",
    ThreeAlkoxyOneThiazolTwoYlPropane => "3-Alkoxy-1-(thiazol-2-yl)propane",
    ThreeAcyloxyOneThiazolTwoYlPropane => "3-Acyloxy-1-(thiazol-2-yl)propane",
    FourHydroxyOneThiazolTwoYlButane => "4-Hydroxy-1-(thiazol-2-yl)butane",
    FourMethoxyOneThiazolTwoYlButane => "4-Methoxy-1-(thiazol-2-yl)butane",
    FourAlkoxyOneThiazolTwoYlButane => "4-Alkoxy-1-(thiazol-2-yl)butane",
    FourAcyloxyOneThiazolTwoYlButane => "4-Acyloxy-1-(thiazol-2-yl)butane",
    FiveHydroxyOneThiazolTwoYlPentane => "5-Hydroxy-1-(thiazol-2-yl)pentane",
    FiveMethoxyOneThiazolTwoYlPentane => "5-Methoxy-1-(thiazol-2-yl)pentane",
    FiveAlkoxyOneThiazolTwoYlPentane => "5-Alkoxy-1-(thiazol-2-yl)pentane",
    FiveAcyloxyOneThiazolTwoYlPentane => "5-Acyloxy-1-(thiazol-2-yl)pentane",
    SixHydroxyOneThiazolTwoYlHexane => "6-Hydroxy-1-(thiazol-2-yl)hexane",
    SixMethoxyOneThiazolTwoYlHexane => "6-Methoxy-1-(thiazol-2-yl)hexane",
    SixAlkoxyOneThiazolTwoYlHexane => "6-Alkoxy-1-(thiazol-2-yl)hexane",
    SixAcyloxyOneThiazolTwoYlHexane => "6-Acyloxy-1-(thiazol-2-yl)hexane",
    SevenHydroxyOneThiazolTwoYlHeptane => "7-Hydroxy-1-(thiazol-2-yl)heptane",
    SevenMethoxyOneThiazolTwoYlHeptane => "7-Methoxy-1-(thiazol-2-yl)heptane",
    SevenAlkoxyOneThiazolTwoYlHeptane => "7-Alkoxy-1-(thiazol-2-yl)heptane",
    SevenAcyloxyOneThiazolTwoYlHeptane => "7-Acyloxy-1-(thiazol-2-yl)heptane",
    EightHydroxyOneThiazolTwoYlOctane => "8-Hydroxy-1-(thiazol-2-yl)octane",
    EightMethoxyOneThiazolTwoYlOctane => "8-Methoxy-1-(thiazol-2-yl)octane",
    EightAlkoxyOneThiazolTwoYlOctane => "8-Alkoxy-1-(thiazol-2-yl)octane",
    EightAcyloxyOneThiazolTwoYlOctane => "8-Acyloxy-1-(thiazol-2-yl)octane",
    NineHydroxyOneThiazolTwoYlNonane => "9-Hydroxy-1-(thiazol-2-yl)nonane",
    NineMethoxyOneThiazolTwoYlNonane => "9-Methoxy-1-(thiazol-2-yl)nonane",
    NineAlkoxyOneThiazolTwoYlNonane => "9-Alkoxy-1-(thiazol-2-yl)nonane",
    NineAcyloxyOneThiazolTwoYlNonane => "9-Acyloxy-1-(thiazol-2-yl)nonane",
    OneAminoOneThiazolTwoYlMethane => "1-Amino-1-(thiazol-2-yl)methane",
    OneAlkylaminoOneThiazolTwoYlMethane => "1-Alkylamino-1-(thiazol-2-yl)methane",
    OneAcylaminoOneThiazolTwoYlMethane => "1-Acylamino-1-(thiazol-2-yl)methane",
    TwoAminoOneThiazolTwoYlEthane => "2-Amino-1-(thiazol-2-yl)ethane",
    TwoAlkylaminoOneThiazolTwoYlEthane => "2-Alkylamino-1-(thiazol-2-yl)ethane",
    TwoAcylaminoOneThiazolTwoYlEthane => "2-Acylamino-1-(thiazol-2-yl)ethane",
    ThreeAminoOneThiazolTwoYlPropane => "3-Amino-1-(thiazol-2-yl)propane",
    ThreeAlkylaminoOneThiazolTwoYlPropane => "3-Alkylamino-1-(thiazol-2-yl)propane",
    ThreeAcylaminoOneThiazolTwoYlPropane => "3-Acylamino-1-(thiazol-2-yl)propane",
    FourAminoOneThiazolTwoYlButane => "4-Amino-1-(thiazol-2-yl)butane",
    FourAlkylaminoOneThiazolTwoYlButane => "4-Alkylamino-1-(thiazol-2-yl)butane",
    FourAcylaminoOneThiazolTwoYlButane => "4-Acylamino-1-(thiazol-2-yl)butane",
    FiveAminoOneThiazolTwoYlPentane => "5-Amino-1-(thiazol-2-yl)pentane",
    FiveAlkylaminoOneThiazolTwoYlPentane => "5-Alkylamino-1-(thiazol-2-yl)pentane",
    FiveAcylaminoOneThiazolTwoYlPentane => "5-Acylamino-1-(thiazol-2-yl)pentane",
    SixAminoOneThiazolTwoYlHexane => "6-Amino-1-(thiazol-2-yl)hexane",
    SixAlkylaminoOneThiazolTwoYlHexane => "6-Alkylamino-1-(thiazol-2-yl)hexane",
    SixAcylaminoOneThiazolTwoYlHexane => "6-Acylamino-1-(thiazol-2-yl)hexane",
    SevenAminoOneThiazolTwoYlHeptane => "7-Amino-1-(thiazol-2-yl)heptane",
    SevenAlkylaminoOneThiazolTwoYlHeptane => "7-Alkylamino-1-(thiazol-2-yl)heptane",
    SevenAcylaminoOneThiazolTwoYlHeptane => "7-Acylamino-1-(thiazol-2-yl)heptane",
    EightAminoOneThiazolTwoYlOctane => "8-Amino-1-(thiazol-2-yl)octane",
    EightAlkylaminoOneThiazolTwoYlOctane => "8-Alkylamino-1-(thiazol-2-yl)octane",
    EightAcylaminoOneThiazolTwoYlOctane => "8-Acylamino-1-(thiazol-2-yl)octane",
    NineAminoOneThiazolTwoYlNonane => "9-Amino-1-(thiazol-2-yl)nonane",
    NineAlkylaminoOneThiazolTwoYlNonane => "9-Alkylamino-1-(thiazol-2-yl)nonane",
    NineAcylaminoOneThiazolTwoYlNonane => "9-Acylamino-1-(thiazol-2-yl)nonane",
    OneMercaptoOneThiazolTwoYlMethane => "1-Mercapto-1-(thiazol-2-yl)methane",
    OneAlkylthioOneThiazolTwoYlMethane => "1-Alkylthio-1-(thiazol-2-yl)methane",
    OneSulfonylOneThiazolTwoYlMethane => "1-Sulfonyl-1-(thiazol-2-yl)methane",
    TwoMercaptoOneThiazolTwoYlEthane => "2-Mercapto-1-(thiazol-2-yl)ethane",
    TwoAlkylthioOneThiazolTwoYlEthane => "2-Alkylthio-1-(thiazol-2-yl)ethane",
    TwoSulfonylOneThiazolTwoYlEthane => "2-Sulfonyl-1-(thiazol-2-yl)ethane",
    ThreeMercaptoOneThiazolTwoYlPropane => "3-Mercapto-1-(thiazol-2-yl)propane",
    ThreeAlkylthioOneThiazolTwoYlPropane => "3-Alkylthio-1-(thiazol-2-yl)propane",
    ThreeSulfonylOneThiazolTwoYlPropane => "3-Sulfonyl-1-(thiazol-2-yl)propane",
    FourMercaptoOneThiazolTwoYlButane => "4-Mercapto-1-(thiazol-2-yl)butane",
    FourAlkylthioOneThiazolTwoYlButane => "4-Alkylthio-1-(thiazol-2-yl)butane",
    FourSulfonylOneThiazolTwoYlButane => "4-Sulfonyl-1-(thiazol-2-yl)butane",
    FiveMercaptoOneThiazolTwoYlPentane => "5-Mercapto-1-(thiazol-2-yl)pentane",
    FiveAlkylthioOneThiazolTwoYlPentane => "5-Alkylthio-1-(thiazol-2-yl)pentane",
    FiveSulfonylOneThiazolTwoYlPentane => "5-Sulfonyl-1-(thiazol-2-yl)pentane",
    SixMercaptoOneThiazolTwoYlHexane => "6-Mercapto-1-(thiazol-2-yl)hexane",
    SixAlkylthioOneThiazolTwoYlHexane => "6-Alkylthio-1-(thiazol-2-yl)hexane",
    SixSulfonylOneThiazolTwoYlHexane => "6-Sulfonyl-1-(thiazol-2-yl)hexane",
    SevenMercaptoOneThiazolTwoYlHeptane => "7-Mercapto-1-(thiazol-2-yl)heptane",
    SevenAlkylthioOneThiazolTwoYlHeptane => "7-Alkylthio-1-(thiazol-2-yl)heptane",
    SevenSulfonylOneThiazolTwoYlHeptane => "7-Sulfonyl-1-(thiazol-2-yl)heptane",
    EightMercaptoOneThiazolTwoYlOctane => "8-Mercapto-1-(thiazol-2-yl)octane",
    EightAlkylthioOneThiazolTwoYlOctane => "8-Alkylthio-1-(thiazol-2-yl)octane",
    EightSulfonylOneThiazolTwoYlOctane => "8-Sulfonyl-1-(thiazol-2-yl)octane",
    NineMercaptoOneThiazolTwoYlNonane => "9-Mercapto-1-(thiazol-2-yl)nonane",
    NineAlkylthioOneThiazolTwoYlNonane => "9-Alkylthio-1-(thiazol-2-yl)nonane",
    NineSulfonylOneThiazolTwoYlNonane => "9-Sulfonyl-1-(thiazol-2-yl)nonane",
    OneFluoroOneThiazolTwoYlMethane => "1-Fluoro-1-(thiazol-2-yl)methane",
    TwoFluoroOneThiazolTwoYlEthane => "2-Fluoro-1-(thiazol-2-yl)ethane",
    ThreeFluoroOneThiazolTwoYlPropane => "3-Fluoro-1-(thiazol-2-yl)propane",
    FourFluoroOneThiazolTwoYlButane => "4-Fluoro-1-(thiazol-2-yl)butane",
    FiveFluoroOneThiazolTwoYlPentane => "5-Fluoro-1-(thiazol-2-yl)pentane",
    SixFluoroOneThiazolTwoYlHexane => "6-Fluoro-1-(thiazol-2-yl)hexane",
    SevenFluoroOneThiazolTwoYlHeptane => "7-Fluoro-1-(thiazol-2-yl)heptane",
    EightFluoroOneThiazolTwoYlOctane => "8-Fluoro-1-(thiazol-2-yl)octane",
    NineFluoroOneThiazolTwoYlNonane => "9-Fluoro-1-(thiazol-2-yl)nonane",
    OneChloroOneThiazolTwoYlMethane => "1-Chloro-1-(thiazol-2-yl)methane",
    TwoChloroOneThiazolTwoYlEthane => "2-Chloro-1-(thiazol-2-yl)ethane",
    ThreeChloroOneThiazolTwoYlPropane => "3-Chloro-1-(thiazol-2-yl)propane",
    FourChloroOneThiazolTwoYlButane => "4-Chloro-1-(thiazol-2-yl)butane",
    FiveChloroOneThiazolTwoYlPentane => "5-Chloro-1-(thiazol-2-yl)pentane",
    SixChloroOneThiazolTwoYlHexane => "6-Chloro-1-(thiazol-2-yl)hexane",
    SevenChloroOneThiazolTwoYlHeptane => "7-Chloro-1-(thiazol-2-yl)heptane",
    EightChloroOneThiazolTwoYlOctane => "8-Chloro-1-(thiazol-2-yl)octane",
    NineChloroOneThiazolTwoYlNonane => "9-Chloro-1-(thiazol-2-yl)nonane",
    OneBromoOneThiazolTwoYlMethane => "1-Bromo-1-(thiazol-2-yl)methane",
    TwoBromoOneThiazolTwoYlEthane => "2-Bromo-1-(thiazol-2-yl)ethane",
    ThreeBromoOneThiazolTwoYlPropane => "3-Bromo-1-(thiazol-2-yl)propane",
    FourBromoOneThiazolTwoYlButane => "4-Bromo-1-(thiazol-2-yl)butane",
    FiveBromoOneThiazolTwoYlPentane => "5-Bromo-1-(thiazol-2-yl)pentane",
    SixBromoOneThiazolTwoYlHexane => "6-Bromo-1-(thiazol-2-yl)hexane",
    SevenBromoOneThiazolTwoYlHeptane => "7-Bromo-1-(thiazol-2-yl)heptane",
    EightBromoOneThiazolTwoYlOctane => "8-Bromo-1-(thiazol-2-yl)octane",
    NineBromoOneThiazolTwoYlNonane => "9-Bromo-1-(thiazol-2-yl)nonane",
    OneIodoOneThiazolTwoYlMethane => "1-Iodo-1-(thiazol-2-yl)methane",
    TwoIodoOneThiazolTwoYlEthane => "2-Iodo-1-(thiazol-2-yl)ethane",
    ThreeIodoOneThiazolTwoYlPropane => "3-Iodo-1-(thiazol-2-yl)propane",
    FourIodoOneThiazolTwoYlButane => "4-Iodo-1-(thiazol-2-yl)butane",
    FiveIodoOneThiazolTwoYlPentane => "5-Iodo-1-(thiazol-2-yl)pentane",
    SixIodoOneThiazolTwoYlHexane => "6-Iodo-1-(thiazol-2-yl)hexane",
    SevenIodoOneThiazolTwoYlHeptane => "7-Iodo-1-(thiazol-2-yl)heptane",
    EightIodoOneThiazolTwoYlOctane => "8-Iodo-1-(thiazol-2-yl)octane",
    NineIodoOneThiazolTwoYlNonane => "9-Iodo-1-(thiazol-2-yl)nonane",
    // lipid head groups
    PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk =>
        "Phosphatidylcholine choline nitrogen to phosphate head oxygen walk",
    PhosphatidylethanolamineAminoNitrogenToPhosphateHeadOxygenWalk =>
        "Phosphatidylethanolamine amino nitrogen to phosphate head oxygen walk",
    SphingomyelinAmideNitrogenToCThreeHydroxylWalk =>
        "Sphingomyelin amide nitrogen to C-3 hydroxyl walk",
    PhosphatidylcholineCholineNitrogenToGlycerolPhosphateOxygenWalk =>
        "Phosphatidylcholine choline nitrogen to glycerol phosphate oxygen walk",
    PhosphatidylethanolamineAminoNitrogenToGlycerolPhosphateOxygenWalk =>
        "Phosphatidylethanolamine amino nitrogen to glycerol phosphate oxygen walk",
    PhosphatidylcholineCholineNitrogenToSnOneEsterOxygenWalk =>
        "Phosphatidylcholine choline nitrogen to sn-1 ester oxygen walk",
    PhosphatidylethanolamineAminoNitrogenToSnOneEsterOxygenWalk =>
        "Phosphatidylethanolamine amino nitrogen to sn-1 ester oxygen walk",
    PhosphatidylcholineCholineNitrogenToSnOneCarbonylOxygenWalk =>
        "Phosphatidylcholine choline nitrogen to sn-1 carbonyl oxygen walk",
    PhosphatidylethanolamineAminoNitrogenToSnOneCarbonylOxygenWalk =>
        "Phosphatidylethanolamine amino nitrogen to sn-1 carbonyl oxygen walk",
    PhosphatidylcholineCholineNitrogenToSnTwoEsterOxygenWalk =>
        "Phosphatidylcholine choline nitrogen to sn-2 ester oxygen walk",
    PhosphatidylethanolamineAminoNitrogenToSnTwoEsterOxygenWalk =>
        "Phosphatidylethanolamine amino nitrogen to sn-2 ester oxygen walk",
    PhosphatidylcholineCholineNitrogenToSnTwoCarbonylOxygenWalk =>
        "Phosphatidylcholine choline nitrogen to sn-2 carbonyl oxygen walk",
    PhosphatidylethanolamineAminoNitrogenToSnTwoCarbonylOxygenWalk =>
        "Phosphatidylethanolamine amino nitrogen to sn-2 carbonyl oxygen walk",
    GlycerophospholipidPhosphateHeadOxygenToGlycerolPhosphateOxygenWalk =>
        "Glycerophospholipid phosphate head oxygen to glycerol phosphate oxygen walk",
    GlycerophospholipidPhosphateHeadOxygenToSnOneEsterOxygenWalk =>
        "Glycerophospholipid phosphate head oxygen to sn-1 ester oxygen walk",
    PhosphatidylserineSerineCarboxylToGlycerolPhosphateOxygenWalk =>
        "Phosphatidylserine serine carboxyl to glycerol phosphate oxygen walk",
    PhosphatidylglycerolHeadGlycerolHydroxylToGlycerolPhosphateOxygenWalk =>
        "Phosphatidylglycerol head glycerol hydroxyl to glycerol phosphate oxygen walk",
    GlycerophospholipidPhosphateHeadOxygenToSnOneCarbonylOxygenWalk =>
        "Glycerophospholipid phosphate head oxygen to sn-1 carbonyl oxygen walk",
    GlycerophospholipidPhosphateHeadOxygenToSnTwoEsterOxygenWalk =>
        "Glycerophospholipid phosphate head oxygen to sn-2 ester oxygen walk",
    PhosphatidylinositolGlycerolPhosphateOxygenToInositolHydroxylWalk =>
        "Phosphatidylinositol glycerol phosphate oxygen to inositol hydroxyl walk",
    LysophosphatidylcholinePhosphateHeadOxygenToSnTwoHydroxylWalk =>
        "Lysophosphatidylcholine phosphate head oxygen to sn-2 hydroxyl walk",
    GlycerophospholipidPhosphateHeadOxygenToSnTwoCarbonylOxygenWalk =>
        "Glycerophospholipid phosphate head oxygen to sn-2 carbonyl oxygen walk",
    GlycerophospholipidGlycerolPhosphateOxygenToSnOneEsterOxygenWalk =>
        "Glycerophospholipid glycerol phosphate oxygen to sn-1 ester oxygen walk",
    PhosphatidylserineSerineCarboxylToPhosphateHeadOxygenWalk =>
        "Phosphatidylserine serine carboxyl to phosphate head oxygen walk",
    PhosphatidylglycerolHeadGlycerolHydroxylToPhosphateHeadOxygenWalk =>
        "Phosphatidylglycerol head glycerol hydroxyl to phosphate head oxygen walk",
    CeramideSnOneHydroxylToCThreeHydroxylWalk => "Ceramide sn-1 hydroxyl to C-3 hydroxyl walk",
    TriacylglycerolSnOneEsterOxygenToSnThreeEsterOxygenWalk =>
        "Triacylglycerol sn-1 ester oxygen to sn-3 ester oxygen walk",
    DiacylglycerolSnOneEsterOxygenToSnThreeHydroxylWalk =>
        "Diacylglycerol sn-1 ester oxygen to sn-3 hydroxyl walk",
    AlkylEtherPhospholipidAlkylEtherOxygenToPhosphateHeadOxygenWalk =>
        "Alkyl ether phospholipid alkyl ether oxygen to phosphate head oxygen walk",
    AcylcarnitineEsterOxygenToCarboxylateOxygenWalk =>
        "Acylcarnitine ester oxygen to carboxylate oxygen walk",
    GlycerophospholipidGlycerolPhosphateOxygenToSnOneCarbonylOxygenWalk =>
        "Glycerophospholipid glycerol phosphate oxygen to sn-1 carbonyl oxygen walk",
    TriacylglycerolSnOneCarbonylOxygenToSnThreeEsterOxygenWalk =>
        "Triacylglycerol sn-1 carbonyl oxygen to sn-3 ester oxygen walk",
    DiacylglycerolSnOneCarbonylOxygenToSnThreeHydroxylWalk =>
        "Diacylglycerol sn-1 carbonyl oxygen to sn-3 hydroxyl walk",
    GlycerophospholipidGlycerolPhosphateOxygenToSnTwoEsterOxygenWalk =>
        "Glycerophospholipid glycerol phosphate oxygen to sn-2 ester oxygen walk",
    OneTwoDiacylglycerolSnOneEsterOxygenToSnTwoEsterOxygenWalk =>
        "1,2-Diacylglycerol sn-1 ester oxygen to sn-2 ester oxygen walk",
    PhosphatidylinositolPhosphateHeadOxygenToInositolHydroxylWalk =>
        "Phosphatidylinositol phosphate head oxygen to inositol hydroxyl walk",
    LysophosphatidylcholineGlycerolPhosphateOxygenToSnTwoHydroxylWalk =>
        "Lysophosphatidylcholine glycerol phosphate oxygen to sn-2 hydroxyl walk",
    LysophosphatidylcholineSnTwoHydroxylToSnOneEsterOxygenWalk =>
        "Lysophosphatidylcholine sn-2 hydroxyl to sn-1 ester oxygen walk",
    DiacylglycerolSnTwoEsterOxygenToSnThreeHydroxylWalk =>
        "Diacylglycerol sn-2 ester oxygen to sn-3 hydroxyl walk",
    MonoacylglycerolSnTwoHydroxylToSnThreeHydroxylWalk =>
        "Monoacylglycerol sn-2 hydroxyl to sn-3 hydroxyl walk",
    PlasmalogenSnTwoEsterOxygenToPhosphateHeadOxygenWalk =>
        "Plasmalogen sn-2 ester oxygen to phosphate head oxygen walk",
    AlkylEtherPhospholipidAlkylEtherOxygenToSnTwoEsterOxygenWalk =>
        "Alkyl ether phospholipid alkyl ether oxygen to sn-2 ester oxygen walk",
    GlycerophospholipidGlycerolPhosphateOxygenToSnTwoCarbonylOxygenWalk =>
        "Glycerophospholipid glycerol phosphate oxygen to sn-2 carbonyl oxygen walk",
    OneTwoDiacylglycerolSnOneEsterOxygenToSnTwoCarbonylOxygenWalk =>
        "1,2-Diacylglycerol sn-1 ester oxygen to sn-2 carbonyl oxygen walk",
    LysophosphatidylcholineSnTwoHydroxylToSnOneCarbonylOxygenWalk =>
        "Lysophosphatidylcholine sn-2 hydroxyl to sn-1 carbonyl oxygen walk",
    AlkylEtherPhospholipidAlkylEtherOxygenToSnTwoCarbonylOxygenWalk =>
        "Alkyl ether phospholipid alkyl ether oxygen to sn-2 carbonyl oxygen walk",
    OneTwoDiacylglycerolSnOneEsterOxygenToSnOneCarbonylOxygenWalk =>
        "1,2-Diacylglycerol sn-1 ester oxygen to sn-1 carbonyl oxygen walk",
    OneTwoDiacylglycerolSnOneCarbonylOxygenToSnTwoCarbonylOxygenWalk =>
        "1,2-Diacylglycerol sn-1 carbonyl oxygen to sn-2 carbonyl oxygen walk",
    PhosphatidylserineSerineCarboxylToSnOneEsterOxygenWalk =>
        "Phosphatidylserine serine carboxyl to sn-1 ester oxygen walk",
    PhosphatidylglycerolHeadGlycerolHydroxylToSnOneEsterOxygenWalk =>
        "Phosphatidylglycerol head glycerol hydroxyl to sn-1 ester oxygen walk",
    PhosphatidylserineSerineCarboxylToSnOneCarbonylOxygenWalk =>
        "Phosphatidylserine serine carboxyl to sn-1 carbonyl oxygen walk",
    PhosphatidylglycerolHeadGlycerolHydroxylToSnOneCarbonylOxygenWalk =>
        "Phosphatidylglycerol head glycerol hydroxyl to sn-1 carbonyl oxygen walk",
    PhosphatidylserineSerineCarboxylToSnTwoEsterOxygenWalk =>
        "Phosphatidylserine serine carboxyl to sn-2 ester oxygen walk",
    PhosphatidylglycerolHeadGlycerolHydroxylToSnTwoEsterOxygenWalk =>
        "Phosphatidylglycerol head glycerol hydroxyl to sn-2 ester oxygen walk",
    PhosphatidylinositolSnOneEsterOxygenToInositolHydroxylWalk =>
        "Phosphatidylinositol sn-1 ester oxygen to inositol hydroxyl walk",
    PhosphatidylserineSerineCarboxylToSnTwoCarbonylOxygenWalk =>
        "Phosphatidylserine serine carboxyl to sn-2 carbonyl oxygen walk",
    PhosphatidylglycerolHeadGlycerolHydroxylToSnTwoCarbonylOxygenWalk =>
        "Phosphatidylglycerol head glycerol hydroxyl to sn-2 carbonyl oxygen walk",
    PhosphatidylinositolSnOneCarbonylOxygenToInositolHydroxylWalk =>
        "Phosphatidylinositol sn-1 carbonyl oxygen to inositol hydroxyl walk",
    PhosphatidylinositolSnTwoEsterOxygenToInositolHydroxylWalk =>
        "Phosphatidylinositol sn-2 ester oxygen to inositol hydroxyl walk",
    PhosphatidylinositolSnTwoCarbonylOxygenToInositolHydroxylWalk =>
        "Phosphatidylinositol sn-2 carbonyl oxygen to inositol hydroxyl walk",
    SphingomyelinCholineNitrogenToAmideNitrogenWalk =>
        "Sphingomyelin choline nitrogen to amide nitrogen walk",
    SphingomyelinCholineNitrogenToAcylCarbonylOxygenWalk =>
        "Sphingomyelin choline nitrogen to acyl carbonyl oxygen walk",
    SphingomyelinCholineNitrogenToCThreeHydroxylWalk =>
        "Sphingomyelin choline nitrogen to C-3 hydroxyl walk",
    SphingomyelinPhosphateHeadOxygenToAmideNitrogenWalk =>
        "Sphingomyelin phosphate head oxygen to amide nitrogen walk",
    SphingomyelinPhosphateHeadOxygenToAcylCarbonylOxygenWalk =>
        "Sphingomyelin phosphate head oxygen to acyl carbonyl oxygen walk",
    SphingomyelinPhosphateHeadOxygenToCThreeHydroxylWalk =>
        "Sphingomyelin phosphate head oxygen to C-3 hydroxyl walk",
    SphingomyelinAmideNitrogenToAcylCarbonylOxygenWalk =>
        "Sphingomyelin amide nitrogen to acyl carbonyl oxygen walk",
    SphingomyelinAcylCarbonylOxygenToCThreeHydroxylWalk =>
        "Sphingomyelin acyl carbonyl oxygen to C-3 hydroxyl walk",
    TriacylglycerolSnOneCarbonylOxygenToSnThreeCarbonylOxygenWalk =>
        "Triacylglycerol sn-1 carbonyl oxygen to sn-3 carbonyl oxygen walk",
    AcylCoAAcylCarbonylOxygenToThioesterSulfurWalk =>
        "Acyl-CoA acyl carbonyl oxygen to thioester sulfur walk",
    AcylCoAAcylCarbonylOxygenToCysteamineNitrogenWalk =>
        "Acyl-CoA acyl carbonyl oxygen to cysteamine nitrogen walk",
    AcylCoAAcylCarbonylOxygenToBetaAlanineCarbonylOxygenWalk =>
        "Acyl-CoA acyl carbonyl oxygen to beta-alanine carbonyl oxygen walk",
    AcylCoAAcylCarbonylOxygenToBetaAlanineNitrogenWalk =>
        "Acyl-CoA acyl carbonyl oxygen to beta-alanine nitrogen walk",
    AcylCoAAcylCarbonylOxygenToPantoylCarbonylOxygenWalk =>
        "Acyl-CoA acyl carbonyl oxygen to pantoyl carbonyl oxygen walk",
    AcylCoAAcylCarbonylOxygenToPantoylHydroxylWalk =>
        "Acyl-CoA acyl carbonyl oxygen to pantoyl hydroxyl walk",
    AcylCoAThioesterSulfurToCysteamineNitrogenWalk =>
        "Acyl-CoA thioester sulfur to cysteamine nitrogen walk",
    AcylCoAThioesterSulfurToBetaAlanineCarbonylOxygenWalk =>
        "Acyl-CoA thioester sulfur to beta-alanine carbonyl oxygen walk",
    AcylCoAThioesterSulfurToBetaAlanineNitrogenWalk =>
        "Acyl-CoA thioester sulfur to beta-alanine nitrogen walk",
    AcylCoAThioesterSulfurToPantoylCarbonylOxygenWalk =>
        "Acyl-CoA thioester sulfur to pantoyl carbonyl oxygen walk",
    AcylCoAThioesterSulfurToPantoylHydroxylWalk =>
        "Acyl-CoA thioester sulfur to pantoyl hydroxyl walk",
    AcylCoAThioesterSulfurToPhosphateHeadOxygenWalk =>
        "Acyl-CoA thioester sulfur to phosphate head oxygen walk",
    AcylCoACysteamineNitrogenToBetaAlanineNitrogenWalk =>
        "Acyl-CoA cysteamine nitrogen to beta-alanine nitrogen walk",
    AcylCoACysteamineNitrogenToPantoylCarbonylOxygenWalk =>
        "Acyl-CoA cysteamine nitrogen to pantoyl carbonyl oxygen walk",
    AcylCoACysteamineNitrogenToPantoylHydroxylWalk =>
        "Acyl-CoA cysteamine nitrogen to pantoyl hydroxyl walk",
    AcylCoACysteamineNitrogenToPhosphateHeadOxygenWalk =>
        "Acyl-CoA cysteamine nitrogen to phosphate head oxygen walk",
    AcylCoABetaAlanineCarbonylOxygenToBetaAlanineNitrogenWalk =>
        "Acyl-CoA beta-alanine carbonyl oxygen to beta-alanine nitrogen walk",
    AcylCoABetaAlanineCarbonylOxygenToPantoylCarbonylOxygenWalk =>
        "Acyl-CoA beta-alanine carbonyl oxygen to pantoyl carbonyl oxygen walk",
    AcylCoABetaAlanineCarbonylOxygenToPantoylHydroxylWalk =>
        "Acyl-CoA beta-alanine carbonyl oxygen to pantoyl hydroxyl walk",
    AcylCoABetaAlanineCarbonylOxygenToPhosphateHeadOxygenWalk =>
        "Acyl-CoA beta-alanine carbonyl oxygen to phosphate head oxygen walk",
    AcylCoABetaAlanineNitrogenToPhosphateHeadOxygenWalk =>
        "Acyl-CoA beta-alanine nitrogen to phosphate head oxygen walk",
    AcylcarnitineCholineNitrogenToCarboxylateOxygenWalk =>
        "Acylcarnitine choline nitrogen to carboxylate oxygen walk",
    AcylCoAPantoylCarbonylOxygenToPantoylHydroxylWalk =>
        "Acyl-CoA pantoyl carbonyl oxygen to pantoyl hydroxyl walk",
    AcylCoAPantoylCarbonylOxygenToPhosphateHeadOxygenWalk =>
        "Acyl-CoA pantoyl carbonyl oxygen to phosphate head oxygen walk",
    AcylcarnitineAcylCarbonylOxygenToCholineNitrogenWalk =>
        "Acylcarnitine acyl carbonyl oxygen to choline nitrogen walk",
    // sugar chains
    OneTwoPrimeOrTwoPrimeThreeDioxygenatedTwoOGlycosylHexopyranose =>
        "1,2'/2',3-Dioxygenated 2-O-glycosyl hexopyranose",
    TwoPrimeFiveDioxygenatedTwoOGlycosylHexopyranose =>
        "2',5-Dioxygenated 2-O-glycosyl hexopyranose",
    TwoPrimeFiveDioxygenatedSixOGlycosylHexopyranose =>
        "2',5-Dioxygenated 6-O-glycosyl hexopyranose",
    OneTwoPrimeDioxygenatedSucroseTypeDisaccharide => "1,2'-Dioxygenated sucrose-type disaccharide",
    TwoPrimeThreeDioxygenatedSucroseTypeDisaccharide =>
        "2',3-Dioxygenated sucrose-type disaccharide",
    TwoSixDioxygenatedArylGlucuronide => "2,6-Dioxygenated aryl glucuronide",
    TwoPrimeFourOrOneThreePrimeOrThreeThreePrimeDioxygenatedTwoOGlycosylHexopyranose =>
        "2',4/1,3'/3,3'-Dioxygenated 2-O-glycosyl hexopyranose",
    ThreePrimeFiveDioxygenatedTwoOGlycosylHexopyranose =>
        "3',5-Dioxygenated 2-O-glycosyl hexopyranose",
    TwoPrimeFiveDioxygenatedThreeOGlycosylHexopyranose =>
        "2',5-Dioxygenated 3-O-glycosyl hexopyranose",
    TwoPrimeSixDioxygenatedFourOGlycosylHexopyranose =>
        "2',6-Dioxygenated 4-O-glycosyl hexopyranose",
    TwoPrimeFourDioxygenatedSixOGlycosylHexopyranose =>
        "2',4-Dioxygenated 6-O-glycosyl hexopyranose",
    ThreePrimeFiveDioxygenatedSixOGlycosylHexopyranose =>
        "3',5-Dioxygenated 6-O-glycosyl hexopyranose",
    TwoPrimeFourDioxygenatedSucroseTypeDisaccharide =>
        "2',4-Dioxygenated sucrose-type disaccharide",
    OneThreePrimeDioxygenatedSucroseTypeDisaccharide =>
        "1,3'-Dioxygenated sucrose-type disaccharide",
    ThreeThreePrimeDioxygenatedSucroseTypeDisaccharide =>
        "3,3'-Dioxygenated sucrose-type disaccharide",
    TwoPrimeSixDioxygenatedTwoOGlycosylHexopyranose =>
        "2',6-Dioxygenated 2-O-glycosyl hexopyranose",
    TwoTwoPrimeDioxygenatedSixOGlycosylHexopyranose =>
        "2,2'-Dioxygenated 6-O-glycosyl hexopyranose",
    ThreePrimeFourDioxygenatedTwoOGlycosylHexopyranose =>
        "3',4-Dioxygenated 2-O-glycosyl hexopyranose",
    ThreePrimeFiveDioxygenatedThreeOGlycosylHexopyranose =>
        "3',5-Dioxygenated 3-O-glycosyl hexopyranose",
    ThreePrimeSixDioxygenatedFourOGlycosylHexopyranose =>
        "3',6-Dioxygenated 4-O-glycosyl hexopyranose",
    ThreePrimeFourDioxygenatedSixOGlycosylHexopyranose =>
        "3',4-Dioxygenated 6-O-glycosyl hexopyranose",
    ThreePrimeFourDioxygenatedSucroseTypeDisaccharide =>
        "3',4-Dioxygenated sucrose-type disaccharide",
    ThreePrimeSixDioxygenatedTwoOGlycosylHexopyranose =>
        "3',6-Dioxygenated 2-O-glycosyl hexopyranose",
    TwoThreePrimeDioxygenatedSixOGlycosylHexopyranose =>
        "2,3'-Dioxygenated 6-O-glycosyl hexopyranose",
    OneFourPrimeOrThreeFourPrimeDioxygenatedTwoOGlycosylHexopyranose =>
        "1,4'/3,4'-Dioxygenated 2-O-glycosyl hexopyranose",
    FourPrimeFiveDioxygenatedTwoOGlycosylHexopyranose =>
        "4',5-Dioxygenated 2-O-glycosyl hexopyranose",
    OneSixPrimeOrThreeSixPrimeDioxygenatedTwoOGlycosylHexopyranose =>
        "1,6'/3,6'-Dioxygenated 2-O-glycosyl hexopyranose",
    FiveSixPrimeDioxygenatedTwoOGlycosylHexopyranose =>
        "5,6'-Dioxygenated 2-O-glycosyl hexopyranose",
    FourPrimeFiveDioxygenatedSixOGlycosylHexopyranose =>
        "4',5-Dioxygenated 6-O-glycosyl hexopyranose",
    FiveSixPrimeDioxygenatedSixOGlycosylHexopyranose =>
        "5,6'-Dioxygenated 6-O-glycosyl hexopyranose",
    TwoPrimeSixDioxygenatedSucroseTypeDisaccharide => "2',6-Dioxygenated sucrose-type disaccharide",
    OneFourPrimeDioxygenatedSucroseTypeDisaccharide =>
        "1,4'-Dioxygenated sucrose-type disaccharide",
    ThreeFourPrimeDioxygenatedSucroseTypeDisaccharide =>
        "3,4'-Dioxygenated sucrose-type disaccharide",
    OneSixPrimeDioxygenatedSucroseTypeDisaccharide => "1,6'-Dioxygenated sucrose-type disaccharide",
    ThreeSixPrimeDioxygenatedSucroseTypeDisaccharide =>
        "3,6'-Dioxygenated sucrose-type disaccharide",
    TwoPrimeSixDioxygenatedThreeOGlycosylHexopyranose =>
        "2',6-Dioxygenated 3-O-glycosyl hexopyranose",
    TwoPrimeThreeDioxygenatedSixOGlycosylHexopyranose =>
        "2',3-Dioxygenated 6-O-glycosyl hexopyranose",
    FourFourPrimeDioxygenatedTwoOGlycosylHexopyranose =>
        "4,4'-Dioxygenated 2-O-glycosyl hexopyranose",
    FourSixPrimeDioxygenatedTwoOGlycosylHexopyranose =>
        "4,6'-Dioxygenated 2-O-glycosyl hexopyranose",
    FourPrimeFiveDioxygenatedThreeOGlycosylHexopyranose =>
        "4',5-Dioxygenated 3-O-glycosyl hexopyranose",
    FiveSixPrimeDioxygenatedThreeOGlycosylHexopyranose =>
        "5,6'-Dioxygenated 3-O-glycosyl hexopyranose",
    FourPrimeSixDioxygenatedFourOGlycosylHexopyranose =>
        "4',6-Dioxygenated 4-O-glycosyl hexopyranose",
    SixSixPrimeDioxygenatedFourOGlycosylHexopyranose =>
        "6,6'-Dioxygenated 4-O-glycosyl hexopyranose",
    FourFourPrimeDioxygenatedSixOGlycosylHexopyranose =>
        "4,4'-Dioxygenated 6-O-glycosyl hexopyranose",
    FourSixPrimeDioxygenatedSixOGlycosylHexopyranose =>
        "4,6'-Dioxygenated 6-O-glycosyl hexopyranose",
    ThreePrimeSixDioxygenatedSucroseTypeDisaccharide =>
        "3',6-Dioxygenated sucrose-type disaccharide",
    FourFourPrimeDioxygenatedSucroseTypeDisaccharide =>
        "4,4'-Dioxygenated sucrose-type disaccharide",
    FourSixPrimeDioxygenatedSucroseTypeDisaccharide =>
        "4,6'-Dioxygenated sucrose-type disaccharide",
    ThreePrimeSixDioxygenatedThreeOGlycosylHexopyranose =>
        "3',6-Dioxygenated 3-O-glycosyl hexopyranose",
    ThreeThreePrimeDioxygenatedSixOGlycosylHexopyranose =>
        "3,3'-Dioxygenated 6-O-glycosyl hexopyranose",
    FourPrimeSixDioxygenatedTwoOGlycosylHexopyranose =>
        "4',6-Dioxygenated 2-O-glycosyl hexopyranose",
    SixSixPrimeDioxygenatedTwoOGlycosylHexopyranose =>
        "6,6'-Dioxygenated 2-O-glycosyl hexopyranose",
    TwoFourPrimeDioxygenatedSixOGlycosylHexopyranose =>
        "2,4'-Dioxygenated 6-O-glycosyl hexopyranose",
    TwoSixPrimeDioxygenatedSixOGlycosylHexopyranose =>
        "2,6'-Dioxygenated 6-O-glycosyl hexopyranose",
    OneFivePrimeOrThreeFivePrimeDioxygenatedTwoOGlycosylHexopyranose =>
        "1,5'/3,5'-Dioxygenated 2-O-glycosyl hexopyranose",
    FiveFivePrimeDioxygenatedTwoOGlycosylHexopyranose =>
        "5,5'-Dioxygenated 2-O-glycosyl hexopyranose",
    FiveFivePrimeDioxygenatedSixOGlycosylHexopyranose =>
        "5,5'-Dioxygenated 6-O-glycosyl hexopyranose",
    TwoPrimeFiveDioxygenatedSucroseTypeDisaccharide =>
        "2',5-Dioxygenated sucrose-type disaccharide",
    OneFivePrimeDioxygenatedSucroseTypeDisaccharide =>
        "1,5'-Dioxygenated sucrose-type disaccharide",
    ThreeFivePrimeDioxygenatedSucroseTypeDisaccharide =>
        "3,5'-Dioxygenated sucrose-type disaccharide",
    OneFourDioxygenatedArylGlucuronide => "1,4-Dioxygenated aryl glucuronide",
    OneSixDioxygenatedArylGlucuronide => "1,6-Dioxygenated aryl glucuronide",
    OneFourDioxygenatedSixOAcylHexopyranose => "1,4-Dioxygenated 6-O-acyl hexopyranose",
    FourFivePrimeDioxygenatedTwoOGlycosylHexopyranose =>
        "4,5'-Dioxygenated 2-O-glycosyl hexopyranose",
    FiveFivePrimeDioxygenatedThreeOGlycosylHexopyranose =>
        "5,5'-Dioxygenated 3-O-glycosyl hexopyranose",
    FivePrimeSixDioxygenatedFourOGlycosylHexopyranose =>
        "5',6-Dioxygenated 4-O-glycosyl hexopyranose",
    FourFivePrimeDioxygenatedSixOGlycosylHexopyranose =>
        "4,5'-Dioxygenated 6-O-glycosyl hexopyranose",
    ThreePrimeFiveDioxygenatedSucroseTypeDisaccharide =>
        "3',5-Dioxygenated sucrose-type disaccharide",
    FourFivePrimeDioxygenatedSucroseTypeDisaccharide =>
        "4,5'-Dioxygenated sucrose-type disaccharide",
    FivePrimeSixDioxygenatedTwoOGlycosylHexopyranose =>
        "5',6-Dioxygenated 2-O-glycosyl hexopyranose",
    TwoFivePrimeDioxygenatedSixOGlycosylHexopyranose =>
        "2,5'-Dioxygenated 6-O-glycosyl hexopyranose",
    OneTwoPrimeDioxygenatedFourOGlycosylHexopyranose =>
        "1,2'-Dioxygenated 4-O-glycosyl hexopyranose",
    OneTwoPrimeDioxygenatedSixOGlycosylHexopyranose =>
        "1,2'-Dioxygenated 6-O-glycosyl hexopyranose",
    FourPrimeSixDioxygenatedThreeOGlycosylHexopyranose =>
        "4',6-Dioxygenated 3-O-glycosyl hexopyranose",
    SixSixPrimeDioxygenatedThreeOGlycosylHexopyranose =>
        "6,6'-Dioxygenated 3-O-glycosyl hexopyranose",
    OneFourPrimeDioxygenatedFourOGlycosylHexopyranose =>
        "1,4'-Dioxygenated 4-O-glycosyl hexopyranose",
    OneSixPrimeDioxygenatedFourOGlycosylHexopyranose =>
        "1,6'-Dioxygenated 4-O-glycosyl hexopyranose",
    ThreeFourPrimeDioxygenatedSixOGlycosylHexopyranose =>
        "3,4'-Dioxygenated 6-O-glycosyl hexopyranose",
    ThreeSixPrimeDioxygenatedSixOGlycosylHexopyranose =>
        "3,6'-Dioxygenated 6-O-glycosyl hexopyranose",
    FourPrimeSixDioxygenatedSucroseTypeDisaccharide =>
        "4',6-Dioxygenated sucrose-type disaccharide",
    FivePrimeSixDioxygenatedThreeOGlycosylHexopyranose =>
        "5',6-Dioxygenated 3-O-glycosyl hexopyranose",
    OneFivePrimeDioxygenatedFourOGlycosylHexopyranose =>
        "1,5'-Dioxygenated 4-O-glycosyl hexopyranose",
    ThreeFivePrimeDioxygenatedSixOGlycosylHexopyranose =>
        "3,5'-Dioxygenated 6-O-glycosyl hexopyranose",
    FourPrimeFiveDioxygenatedSucroseTypeDisaccharide =>
        "4',5-Dioxygenated sucrose-type disaccharide",
    OneThreePrimeDioxygenatedFourOGlycosylHexopyranose =>
        "1,3'-Dioxygenated 4-O-glycosyl hexopyranose",
    OneThreePrimeDioxygenatedSixOGlycosylHexopyranose =>
        "1,3'-Dioxygenated 6-O-glycosyl hexopyranose",
    OneFourPrimeDioxygenatedSixOGlycosylHexopyranose =>
        "1,4'-Dioxygenated 6-O-glycosyl hexopyranose",
    OneSixPrimeDioxygenatedSixOGlycosylHexopyranose =>
        "1,6'-Dioxygenated 6-O-glycosyl hexopyranose",
    OneFivePrimeDioxygenatedSixOGlycosylHexopyranose =>
        "1,5'-Dioxygenated 6-O-glycosyl hexopyranose",
    FivePrimeSixDioxygenatedSucroseTypeDisaccharide =>
        "5',6-Dioxygenated sucrose-type disaccharide",
    FiveSixPrimeDioxygenatedSucroseTypeDisaccharide =>
        "5,6'-Dioxygenated sucrose-type disaccharide",
    SixSixPrimeDioxygenatedSucroseTypeDisaccharide => "6,6'-Dioxygenated sucrose-type disaccharide",
    FiveFivePrimeDioxygenatedSucroseTypeDisaccharide =>
        "5,5'-Dioxygenated sucrose-type disaccharide",
    OneTwoDioxygenatedArylGlucuronide => "1,2-Dioxygenated aryl glucuronide",
    TwoThreeOrThreeFourDioxygenatedArylGlucuronide => "2,3/3,4-Dioxygenated aryl glucuronide",
    TwoFiveOrFourFiveDioxygenatedArylGlucuronide => "2,5/4,5-Dioxygenated aryl glucuronide",
    FiveSixDioxygenatedArylGlucuronide => "5,6-Dioxygenated aryl glucuronide",
    OneThreeDioxygenatedArylGlucuronide => "1,3-Dioxygenated aryl glucuronide",
    TwoFourDioxygenatedArylGlucuronide => "2,4-Dioxygenated aryl glucuronide",
    ThreeFiveDioxygenatedArylGlucuronide => "3,5-Dioxygenated aryl glucuronide",
    FourSixDioxygenatedArylGlucuronide => "4,6-Dioxygenated aryl glucuronide",
    ThreeSixDioxygenatedArylGlucuronide => "3,6-Dioxygenated aryl glucuronide",
    OneFiveDioxygenatedArylGlucuronide => "1,5-Dioxygenated aryl glucuronide",
    OneFiveDioxygenatedSixOAcylHexopyranose => "1,5-Dioxygenated 6-O-acyl hexopyranose",
    OneFourPrimeDioxygenatedArylGlucuronide => "1,4'-Dioxygenated aryl glucuronide",
    TwoFourPrimeDioxygenatedArylGlucuronide => "2,4'-Dioxygenated aryl glucuronide",
    ThreeFourPrimeDioxygenatedArylGlucuronide => "3,4'-Dioxygenated aryl glucuronide",
    FourFourPrimeDioxygenatedArylGlucuronide => "4,4'-Dioxygenated aryl glucuronide",
    FourPrimeSixDioxygenatedArylGlucuronide => "4',6-Dioxygenated aryl glucuronide",
    FourPrimeFiveDioxygenatedArylGlucuronide => "4',5-Dioxygenated aryl glucuronide",
    OneOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk =>
        "1-Oxygenated N-acetylhexosamine glycoside 2-nitrogen walk",
    ThreeOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk =>
        "3-Oxygenated N-acetylhexosamine glycoside 2-nitrogen walk",
    FiveOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk =>
        "5-Oxygenated N-acetylhexosamine glycoside 2-nitrogen walk",
    OneAcetylDioxygenatedNAcetylhexosamineGlycoside =>
        "1,acetyl-Dioxygenated N-acetylhexosamine glycoside",
    ThreeAcetylDioxygenatedNAcetylhexosamineGlycoside =>
        "3,acetyl-Dioxygenated N-acetylhexosamine glycoside",
    FiveAcetylDioxygenatedNAcetylhexosamineGlycoside =>
        "5,acetyl-Dioxygenated N-acetylhexosamine glycoside",
    FourOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk =>
        "4-Oxygenated N-acetylhexosamine glycoside 2-nitrogen walk",
    FourAcetylDioxygenatedNAcetylhexosamineGlycoside =>
        "4,acetyl-Dioxygenated N-acetylhexosamine glycoside",
    SixOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk =>
        "6-Oxygenated N-acetylhexosamine glycoside 2-nitrogen walk",
    SixAcetylDioxygenatedNAcetylhexosamineGlycoside =>
        "6,acetyl-Dioxygenated N-acetylhexosamine glycoside",
    AcetylOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk =>
        "acetyl-Oxygenated N-acetylhexosamine glycoside 2-nitrogen walk",
    TwoAcylDioxygenatedOneOAcylHexopyranose => "2,acyl-Dioxygenated 1-O-acyl hexopyranose",
    FiveAcylDioxygenatedSixOAcylHexopyranose => "5,acyl-Dioxygenated 6-O-acyl hexopyranose",
    ThreeAcylDioxygenatedOneOAcylHexopyranose => "3,acyl-Dioxygenated 1-O-acyl hexopyranose",
    FourAcylDioxygenatedSixOAcylHexopyranose => "4,acyl-Dioxygenated 6-O-acyl hexopyranose",
    FourAcylDioxygenatedOneOAcylHexopyranose => "4,acyl-Dioxygenated 1-O-acyl hexopyranose",
    SixAcylDioxygenatedOneOAcylHexopyranose => "6,acyl-Dioxygenated 1-O-acyl hexopyranose",
    ThreeAcylDioxygenatedSixOAcylHexopyranose => "3,acyl-Dioxygenated 6-O-acyl hexopyranose",
    FiveAcylDioxygenatedOneOAcylHexopyranose => "5,acyl-Dioxygenated 1-O-acyl hexopyranose",
    OneAcylDioxygenatedSixOAcylHexopyranose => "1,acyl-Dioxygenated 6-O-acyl hexopyranose",
    TwoAcylDioxygenatedSixOAcylHexopyranose => "2,acyl-Dioxygenated 6-O-acyl hexopyranose",
    // flavonoid, coumarin and xanthone substitution walks
    ThreeFiveDioxygenatedFlavone => "3,5-Dioxygenated flavone",
    ThreeFiveDioxygenatedFlavanone => "3,5-Dioxygenated flavanone",
    ThreeTwoPrimeDioxygenatedFlavanone => "3,2'-Dioxygenated flavanone",
    ThreeFiveDioxygenatedFlavanThreeOl => "3,5-Dioxygenated flavan-3-ol",
    ThreeTwoPrimeDioxygenatedFlavanThreeOl => "3,2'-Dioxygenated flavan-3-ol",
    ThreeSixDioxygenatedFlavone => "3,6-Dioxygenated flavone",
    ThreeEightDioxygenatedFlavone => "3,8-Dioxygenated flavone",
    ThreeSixDioxygenatedFlavanone => "3,6-Dioxygenated flavanone",
    ThreeEightDioxygenatedFlavanone => "3,8-Dioxygenated flavanone",
    ThreeThreePrimeOrThreeFivePrimeDioxygenatedFlavanone => "3,3'/3,5'-Dioxygenated flavanone",
    ThreeSixDioxygenatedFlavanThreeOl => "3,6-Dioxygenated flavan-3-ol",
    ThreeEightDioxygenatedFlavanThreeOl => "3,8-Dioxygenated flavan-3-ol",
    ThreeThreePrimeOrThreeFivePrimeDioxygenatedFlavanThreeOl =>
        "3,3'/3,5'-Dioxygenated flavan-3-ol",
    ThreeSevenDioxygenatedFlavone => "3,7-Dioxygenated flavone",
    ThreeSevenDioxygenatedFlavanone => "3,7-Dioxygenated flavanone",
    ThreeFourPrimeDioxygenatedFlavanone => "3,4'-Dioxygenated flavanone",
    ThreeSevenDioxygenatedFlavanThreeOl => "3,7-Dioxygenated flavan-3-ol",
    ThreeFourPrimeDioxygenatedFlavanThreeOl => "3,4'-Dioxygenated flavan-3-ol",
    ThreeTwoPrimeDioxygenatedFlavone => "3,2'-Dioxygenated flavone",
    TwoPrimeOxygenatedIsoflavoneRingOxygenWalk => "2'-Oxygenated isoflavone ring oxygen walk",
    TwoPrimeOxygenatedAuroneRingOxygenWalk => "2'-Oxygenated aurone ring oxygen walk",
    ThreeFiveDioxygenatedCoumarin => "3,5-Dioxygenated coumarin",
    ThreeThreePrimeOrThreeFivePrimeDioxygenatedFlavone => "3,3'/3,5'-Dioxygenated flavone",
    ThreePrimeOrFivePrimeOxygenatedIsoflavoneRingOxygenWalk =>
        "3'/5'-Oxygenated isoflavone ring oxygen walk",
    ThreePrimeOrFivePrimeOxygenatedAuroneRingOxygenWalk =>
        "3'/5'-Oxygenated aurone ring oxygen walk",
    ThreeSixOrThreeEightDioxygenatedCoumarin => "3,6/3,8-Dioxygenated coumarin",
    ThreeFourPrimeDioxygenatedFlavone => "3,4'-Dioxygenated flavone",
    FourPrimeOxygenatedIsoflavoneRingOxygenWalk => "4'-Oxygenated isoflavone ring oxygen walk",
    FourPrimeOxygenatedAuroneRingOxygenWalk => "4'-Oxygenated aurone ring oxygen walk",
    ThreeSevenDioxygenatedCoumarin => "3,7-Dioxygenated coumarin",
    FiveSixOrSixSevenOrSevenEightDioxygenatedChromone => "5,6/6,7/7,8-Dioxygenated chromone",
    EightOxygenatedChromoneRingOxygenWalk => "8-Oxygenated chromone ring oxygen walk",
    FiveSixOrSixSevenOrSevenEightDioxygenatedChromane => "5,6/6,7/7,8-Dioxygenated chromane",
    EightOxygenatedChromaneRingOxygenWalk => "8-Oxygenated chromane ring oxygen walk",
    FourFiveOrFiveSixOrSixSevenDioxygenatedAurone => "4,5/5,6/6,7-Dioxygenated aurone",
    SevenOxygenatedAuroneRingOxygenWalk => "7-Oxygenated aurone ring oxygen walk",
    TwoPrimeThreePrimeOrThreePrimeFourPrimeDioxygenatedChalcone =>
        "2',3'/3',4'-Dioxygenated chalcone",
    FiveSixOrSixSevenOrSevenEightDioxygenatedCoumarin => "5,6/6,7/7,8-Dioxygenated coumarin",
    EightOxygenatedCoumarinRingOxygenWalk => "8-Oxygenated coumarin ring oxygen walk",
    OneTwoOrTwoThreeOrThreeFourDioxygenatedXanthone => "1,2/2,3/3,4-Dioxygenated xanthone",
    FiveSevenOrSixEightDioxygenatedChromone => "5,7/6,8-Dioxygenated chromone",
    FiveOxygenatedChromoneRingOxygenWalk => "5-Oxygenated chromone ring oxygen walk",
    SevenOxygenatedChromoneRingOxygenWalk => "7-Oxygenated chromone ring oxygen walk",
    FiveSevenOrSixEightDioxygenatedChromane => "5,7/6,8-Dioxygenated chromane",
    FiveOxygenatedChromaneRingOxygenWalk => "5-Oxygenated chromane ring oxygen walk",
    SevenOxygenatedChromaneRingOxygenWalk => "7-Oxygenated chromane ring oxygen walk",
    FourSixOrFiveSevenDioxygenatedAurone => "4,6/5,7-Dioxygenated aurone",
    FourOxygenatedAuroneRingOxygenWalk => "4-Oxygenated aurone ring oxygen walk",
    SixOxygenatedAuroneRingOxygenWalk => "6-Oxygenated aurone ring oxygen walk",
    TwoPrimeFourPrimeDioxygenatedChalcone => "2',4'-Dioxygenated chalcone",
    FiveSevenOrSixEightDioxygenatedCoumarin => "5,7/6,8-Dioxygenated coumarin",
    FiveOxygenatedCoumarinRingOxygenWalk => "5-Oxygenated coumarin ring oxygen walk",
    SevenOxygenatedCoumarinRingOxygenWalk => "7-Oxygenated coumarin ring oxygen walk",
    OneThreeOrTwoFourDioxygenatedXanthone => "1,3/2,4-Dioxygenated xanthone",
    FiveEightDioxygenatedChromone => "5,8-Dioxygenated chromone",
    SixOxygenatedChromoneRingOxygenWalk => "6-Oxygenated chromone ring oxygen walk",
    FiveEightDioxygenatedChromane => "5,8-Dioxygenated chromane",
    SixOxygenatedChromaneRingOxygenWalk => "6-Oxygenated chromane ring oxygen walk",
    FourSevenDioxygenatedAurone => "4,7-Dioxygenated aurone",
    FiveOxygenatedAuroneRingOxygenWalk => "5-Oxygenated aurone ring oxygen walk",
    FiveEightDioxygenatedCoumarin => "5,8-Dioxygenated coumarin",
    SixOxygenatedCoumarinRingOxygenWalk => "6-Oxygenated coumarin ring oxygen walk",
    OneFourDioxygenatedXanthone => "1,4-Dioxygenated xanthone",
    FiveTwoPrimeDioxygenatedFlavone => "5,2'-Dioxygenated flavone",
    SevenTwoPrimeDioxygenatedFlavone => "7,2'-Dioxygenated flavone",
    FiveTwoPrimeDioxygenatedFlavanone => "5,2'-Dioxygenated flavanone",
    SevenTwoPrimeDioxygenatedFlavanone => "7,2'-Dioxygenated flavanone",
    FiveTwoPrimeDioxygenatedFlavanThreeOl => "5,2'-Dioxygenated flavan-3-ol",
    SevenTwoPrimeDioxygenatedFlavanThreeOl => "7,2'-Dioxygenated flavan-3-ol",
    FourTwoPrimeDioxygenatedAurone => "4,2'-Dioxygenated aurone",
    TwoTwoPrimeDioxygenatedChalcone => "2,2'-Dioxygenated chalcone",
    FiveThreePrimeOrFiveFivePrimeDioxygenatedFlavone => "5,3'/5,5'-Dioxygenated flavone",
    SevenThreePrimeOrSevenFivePrimeDioxygenatedFlavone => "7,3'/7,5'-Dioxygenated flavone",
    FiveThreePrimeOrFiveFivePrimeDioxygenatedFlavanone => "5,3'/5,5'-Dioxygenated flavanone",
    SevenThreePrimeOrSevenFivePrimeDioxygenatedFlavanone => "7,3'/7,5'-Dioxygenated flavanone",
    FiveThreePrimeOrFiveFivePrimeDioxygenatedFlavanThreeOl => "5,3'/5,5'-Dioxygenated flavan-3-ol",
    SevenThreePrimeOrSevenFivePrimeDioxygenatedFlavanThreeOl =>
        "7,3'/7,5'-Dioxygenated flavan-3-ol",
    FourThreePrimeOrFourFivePrimeDioxygenatedAurone => "4,3'/4,5'-Dioxygenated aurone",
    ThreeTwoPrimeDioxygenatedChalcone => "3,2'-Dioxygenated chalcone",
    FiveFourPrimeOrSevenFourPrimeDioxygenatedFlavone => "5,4'/7,4'-Dioxygenated flavone",
    FiveFourPrimeOrSevenFourPrimeDioxygenatedFlavanone => "5,4'/7,4'-Dioxygenated flavanone",
    FiveFourPrimeOrSevenFourPrimeDioxygenatedFlavanThreeOl => "5,4'/7,4'-Dioxygenated flavan-3-ol",
    FiveFourPrimeDioxygenatedFlavone => "5,4'-Dioxygenated flavone",
    FourFourPrimeDioxygenatedAurone => "4,4'-Dioxygenated aurone",
    FourTwoPrimeDioxygenatedChalcone => "4,2'-Dioxygenated chalcone",
    SixTwoPrimeDioxygenatedFlavone => "6,2'-Dioxygenated flavone",
    SixTwoPrimeDioxygenatedFlavanone => "6,2'-Dioxygenated flavanone",
    SixTwoPrimeDioxygenatedFlavanThreeOl => "6,2'-Dioxygenated flavan-3-ol",
    FiveTwoPrimeDioxygenatedAurone => "5,2'-Dioxygenated aurone",
    TwoThreePrimeDioxygenatedChalcone => "2,3'-Dioxygenated chalcone",
    SixThreePrimeOrSixFivePrimeDioxygenatedFlavone => "6,3'/6,5'-Dioxygenated flavone",
    SixThreePrimeOrSixFivePrimeDioxygenatedFlavanone => "6,3'/6,5'-Dioxygenated flavanone",
    SixThreePrimeOrSixFivePrimeDioxygenatedFlavanThreeOl => "6,3'/6,5'-Dioxygenated flavan-3-ol",
    FiveThreePrimeOrFiveFivePrimeDioxygenatedAurone => "5,3'/5,5'-Dioxygenated aurone",
    ThreeThreePrimeDioxygenatedChalcone => "3,3'-Dioxygenated chalcone",
    SixFourPrimeDioxygenatedFlavone => "6,4'-Dioxygenated flavone",
    SixFourPrimeDioxygenatedFlavanone => "6,4'-Dioxygenated flavanone",
    SixFourPrimeDioxygenatedFlavanThreeOl => "6,4'-Dioxygenated flavan-3-ol",
    FiveFourPrimeDioxygenatedAurone => "5,4'-Dioxygenated aurone",
    FourThreePrimeDioxygenatedChalcone => "4,3'-Dioxygenated chalcone",
    EightTwoPrimeDioxygenatedFlavone => "8,2'-Dioxygenated flavone",
    EightTwoPrimeDioxygenatedFlavanone => "8,2'-Dioxygenated flavanone",
    EightTwoPrimeDioxygenatedFlavanThreeOl => "8,2'-Dioxygenated flavan-3-ol",
    EightThreePrimeOrEightFivePrimeDioxygenatedFlavone => "8,3'/8,5'-Dioxygenated flavone",
    EightThreePrimeOrEightFivePrimeDioxygenatedFlavanone => "8,3'/8,5'-Dioxygenated flavanone",
    EightThreePrimeOrEightFivePrimeDioxygenatedFlavanThreeOl =>
        "8,3'/8,5'-Dioxygenated flavan-3-ol",
    EightFourPrimeDioxygenatedFlavone => "8,4'-Dioxygenated flavone",
    EightFourPrimeDioxygenatedFlavanone => "8,4'-Dioxygenated flavanone",
    EightFourPrimeDioxygenatedFlavanThreeOl => "8,4'-Dioxygenated flavan-3-ol",
    ThreeOxygenatedFlavoneCarbonylWalk => "3-Oxygenated flavone carbonyl walk",
    ThreeOxygenatedFlavanoneCarbonylWalk => "3-Oxygenated flavanone carbonyl walk",
    ThreeOxygenatedCoumarinCarbonylWalk => "3-Oxygenated coumarin carbonyl walk",
    ThreeOxygenatedFlavoneRingOxygenWalk => "3-Oxygenated flavone ring oxygen walk",
    ThreeFourDioxygenatedCoumarin => "3,4-Dioxygenated coumarin",
    FiveOxygenatedChromoneCarbonylWalk => "5-Oxygenated chromone carbonyl walk",
    FiveOxygenatedChromaneCarbonylWalk => "5-Oxygenated chromane carbonyl walk",
    FourOxygenatedAuroneCarbonylWalk => "4-Oxygenated aurone carbonyl walk",
    TwoPrimeOxygenatedChalconeCarbonylWalk => "2'-Oxygenated chalcone carbonyl walk",
    SixOrEightOxygenatedChromoneCarbonylWalk => "6/8-Oxygenated chromone carbonyl walk",
    SixOrEightOxygenatedChromaneCarbonylWalk => "6/8-Oxygenated chromane carbonyl walk",
    FiveOrSevenOxygenatedAuroneCarbonylWalk => "5/7-Oxygenated aurone carbonyl walk",
    ThreePrimeOxygenatedChalconeCarbonylWalk => "3'-Oxygenated chalcone carbonyl walk",
    SevenOxygenatedChromoneCarbonylWalk => "7-Oxygenated chromone carbonyl walk",
    SevenOxygenatedChromaneCarbonylWalk => "7-Oxygenated chromane carbonyl walk",
    SixOxygenatedAuroneCarbonylWalk => "6-Oxygenated aurone carbonyl walk",
    FourPrimeOxygenatedChalconeCarbonylWalk => "4'-Oxygenated chalcone carbonyl walk",
    TwoPrimeOxygenatedFlavoneCarbonylWalk => "2'-Oxygenated flavone carbonyl walk",
    TwoPrimeOxygenatedAuroneCarbonylWalk => "2'-Oxygenated aurone carbonyl walk",
    TwoOxygenatedChalconeCarbonylWalk => "2-Oxygenated chalcone carbonyl walk",
    FiveOxygenatedCoumarinCarbonylWalk => "5-Oxygenated coumarin carbonyl walk",
    TwoPrimeOxygenatedFlavoneRingOxygenWalk => "2'-Oxygenated flavone ring oxygen walk",
    TwoPrimeOxygenatedFlavanoneRingOxygenWalk => "2'-Oxygenated flavanone ring oxygen walk",
    TwoPrimeOxygenatedFlavanThreeOlRingOxygenWalk => "2'-Oxygenated flavan-3-ol ring oxygen walk",
    FourFiveDioxygenatedCoumarin => "4,5-Dioxygenated coumarin",
    FourOxygenatedCoumarinRingOxygenWalk => "4-Oxygenated coumarin ring oxygen walk",
    ThreePrimeOrFivePrimeOxygenatedFlavoneCarbonylWalk => "3'/5'-Oxygenated flavone carbonyl walk",
    ThreePrimeOrFivePrimeOxygenatedAuroneCarbonylWalk => "3'/5'-Oxygenated aurone carbonyl walk",
    ThreeOxygenatedChalconeCarbonylWalk => "3-Oxygenated chalcone carbonyl walk",
    SixOxygenatedCoumarinCarbonylWalk => "6-Oxygenated coumarin carbonyl walk",
    ThreePrimeOrFivePrimeOxygenatedFlavoneRingOxygenWalk =>
        "3'/5'-Oxygenated flavone ring oxygen walk",
    ThreePrimeOrFivePrimeOxygenatedFlavanoneRingOxygenWalk =>
        "3'/5'-Oxygenated flavanone ring oxygen walk",
    ThreePrimeOrFivePrimeOxygenatedFlavanThreeOlRingOxygenWalk =>
        "3'/5'-Oxygenated flavan-3-ol ring oxygen walk",
    FourSixDioxygenatedCoumarin => "4,6-Dioxygenated coumarin",
    FourEightDioxygenatedCoumarin => "4,8-Dioxygenated coumarin",
    FourPrimeOxygenatedFlavoneCarbonylWalk => "4'-Oxygenated flavone carbonyl walk",
    FourPrimeOxygenatedAuroneCarbonylWalk => "4'-Oxygenated aurone carbonyl walk",
    FourOxygenatedChalconeCarbonylWalk => "4-Oxygenated chalcone carbonyl walk",
    FourPrimeOxygenatedFlavoneRingOxygenWalk => "4'-Oxygenated flavone ring oxygen walk",
    FourPrimeOxygenatedFlavanoneRingOxygenWalk => "4'-Oxygenated flavanone ring oxygen walk",
    FourPrimeOxygenatedFlavanThreeOlRingOxygenWalk => "4'-Oxygenated flavan-3-ol ring oxygen walk",
    FourSevenDioxygenatedCoumarin => "4,7-Dioxygenated coumarin",
    FiveTwoPrimeDioxygenatedIsoflavone => "5,2'-Dioxygenated isoflavone",
    FiveThreePrimeOrFiveFivePrimeDioxygenatedIsoflavone => "5,3'/5,5'-Dioxygenated isoflavone",
    SixTwoPrimeDioxygenatedIsoflavone => "6,2'-Dioxygenated isoflavone",
    EightTwoPrimeDioxygenatedIsoflavone => "8,2'-Dioxygenated isoflavone",
    FiveFourPrimeDioxygenatedIsoflavone => "5,4'-Dioxygenated isoflavone",
    SevenTwoPrimeDioxygenatedIsoflavone => "7,2'-Dioxygenated isoflavone",
    SixThreePrimeOrSixFivePrimeDioxygenatedIsoflavone => "6,3'/6,5'-Dioxygenated isoflavone",
    EightThreePrimeOrEightFivePrimeDioxygenatedIsoflavone => "8,3'/8,5'-Dioxygenated isoflavone",
    SixFourPrimeOrEightFourPrimeDioxygenatedIsoflavone => "6,4'/8,4'-Dioxygenated isoflavone",
    SevenThreePrimeOrSevenFivePrimeDioxygenatedIsoflavone => "7,3'/7,5'-Dioxygenated isoflavone",
    SixTwoPrimeDioxygenatedAurone => "6,2'-Dioxygenated aurone",
    SixThreePrimeOrSixFivePrimeDioxygenatedAurone => "6,3'/6,5'-Dioxygenated aurone",
    SevenFourPrimeDioxygenatedIsoflavone => "7,4'-Dioxygenated isoflavone",
    SixFourPrimeDioxygenatedAurone => "6,4'-Dioxygenated aurone",
    SevenTwoPrimeDioxygenatedAurone => "7,2'-Dioxygenated aurone",
    SevenThreePrimeOrSevenFivePrimeDioxygenatedAurone => "7,3'/7,5'-Dioxygenated aurone",
    EightFourPrimeDioxygenatedIsoflavone => "8,4'-Dioxygenated isoflavone",
    SevenFourPrimeDioxygenatedAurone => "7,4'-Dioxygenated aurone",
    TwoPrimeOxygenatedIsoflavoneCarbonylWalk => "2'-Oxygenated isoflavone carbonyl walk",
    ThreePrimeOrFivePrimeOxygenatedIsoflavoneCarbonylWalk =>
        "3'/5'-Oxygenated isoflavone carbonyl walk",
    FourPrimeOxygenatedIsoflavoneCarbonylWalk => "4'-Oxygenated isoflavone carbonyl walk",
    ThreeEightDioxygenatedCoumarin => "3,8-Dioxygenated coumarin",
    FiveFourPrimeDioxygenatedFlavanone => "5,4'-Dioxygenated flavanone",
    FiveFourPrimeDioxygenatedFlavanThreeOl => "5,4'-Dioxygenated flavan-3-ol",
    ThreeOxygenatedFlavanoneRingOxygenWalk => "3-Oxygenated flavanone ring oxygen walk",
    ThreeOxygenatedFlavanThreeOlRingOxygenWalk => "3-Oxygenated flavan-3-ol ring oxygen walk",
    ThreeOxygenatedCoumarinRingOxygenWalk => "3-Oxygenated coumarin ring oxygen walk",
    TwoPrimeOxygenatedFlavanoneCarbonylWalk => "2'-Oxygenated flavanone carbonyl walk",
    ThreePrimeOrFivePrimeOxygenatedFlavanoneCarbonylWalk =>
        "3'/5'-Oxygenated flavanone carbonyl walk",
    FourPrimeOxygenatedFlavanoneCarbonylWalk => "4'-Oxygenated flavanone carbonyl walk",
    TwoFourPrimeDioxygenatedChalcone => "2,4'-Dioxygenated chalcone",
    ThreeFourPrimeDioxygenatedChalcone => "3,4'-Dioxygenated chalcone",
    FourFourPrimeDioxygenatedChalcone => "4,4'-Dioxygenated chalcone",
    FourOxygenatedCoumarinCarbonylWalk => "4-Oxygenated coumarin carbonyl walk",
    FiveOrSevenOxygenatedCoumarinCarbonylWalk => "5/7-Oxygenated coumarin carbonyl walk",
    EightOxygenatedCoumarinCarbonylWalk => "8-Oxygenated coumarin carbonyl walk",
    OneFiveDioxygenatedXanthone => "1,5-Dioxygenated xanthone",
    OneSevenDioxygenatedXanthone => "1,7-Dioxygenated xanthone",
    TwoEightDioxygenatedXanthone => "2,8-Dioxygenated xanthone",
    FourEightDioxygenatedXanthone => "4,8-Dioxygenated xanthone",
    OneFiveOrThreeFiveOrFourSixOrFourEightDioxygenatedXanthone =>
        "1,5/3,5/4,6/4,8-Dioxygenated xanthone",
    OneSixDioxygenatedXanthone => "1,6-Dioxygenated xanthone",
    TwoFiveDioxygenatedXanthone => "2,5-Dioxygenated xanthone",
    TwoSevenDioxygenatedXanthone => "2,7-Dioxygenated xanthone",
    ThreeEightDioxygenatedXanthone => "3,8-Dioxygenated xanthone",
    FourSevenDioxygenatedXanthone => "4,7-Dioxygenated xanthone",
    ThreeSixDioxygenatedXanthone => "3,6-Dioxygenated xanthone",
    OneEightDioxygenatedXanthone => "1,8-Dioxygenated xanthone",
    TwoFiveOrFourSevenDioxygenatedXanthone => "2,5/4,7-Dioxygenated xanthone",
    TwoSixDioxygenatedXanthone => "2,6-Dioxygenated xanthone",
    ThreeSevenDioxygenatedXanthone => "3,7-Dioxygenated xanthone",
    TwoSixOrThreeSevenDioxygenatedXanthone => "2,6/3,7-Dioxygenated xanthone",
    FourFiveDioxygenatedXanthone => "4,5-Dioxygenated xanthone",
    OneOrEightOxygenatedXanthoneCarbonylWalk => "1/8-Oxygenated xanthone carbonyl walk",
    OneOrThreeOrSixOrEightOxygenatedXanthoneRingOxygenWalk =>
        "1/3/6/8-Oxygenated xanthone ring oxygen walk",
    TwoOrFourOrFiveOrSevenOxygenatedXanthoneCarbonylWalk =>
        "2/4/5/7-Oxygenated xanthone carbonyl walk",
    TwoOrSevenOxygenatedXanthoneRingOxygenWalk => "2/7-Oxygenated xanthone ring oxygen walk",
    ThreeOrSixOxygenatedXanthoneCarbonylWalk => "3/6-Oxygenated xanthone carbonyl walk",
    FourOrFiveOxygenatedXanthoneRingOxygenWalk => "4/5-Oxygenated xanthone ring oxygen walk",
    // steroid and terpenoid ring walks
    ThreeSevenOrSevenTwelveOrSevenSeventeenDioxygenatedSteroid =>
        "3,7/7,12/7,17-Dioxygenated steroid",
    ThreeElevenDioxygenatedSteroid => "3,11-Dioxygenated steroid",
    ThreeElevenDioxygenatedDrimane => "3,11-Dioxygenated drimane",
    ThreeTwelveDioxygenatedSteroid => "3,12-Dioxygenated steroid",
    ThreeSeventeenDioxygenatedSteroid => "3,17-Dioxygenated steroid",
    ThreeOxygenatedSteroidEighteenMethylWalk => "3-Oxygenated steroid 18-methyl walk",
    ThreeOrSevenOrTwelveOxygenatedSteroidNineteenMethylWalk =>
        "3/7/12-Oxygenated steroid 19-methyl walk",
    ElevenOxygenatedSteroidTwentySideChainWalk => "11-Oxygenated steroid 20-side chain walk",
    ThreeOxygenatedDrimaneFifteenMethylWalk => "3-Oxygenated drimane 15-methyl walk",
    EighteenOxygenatedAbietatrieneTwentyMethylWalk => "18-Oxygenated abietatriene 20-methyl walk",
    ThreeOxygenatedSteroidTwentySideChainWalk => "3-Oxygenated steroid 20-side chain walk",
    SevenElevenOrElevenSeventeenDioxygenatedSteroid => "7,11/11,17-Dioxygenated steroid",
    SevenOxygenatedSteroidTwentySideChainWalk => "7-Oxygenated steroid 20-side chain walk",
    ElevenOxygenatedDrimaneThirteenMethylWalk => "11-Oxygenated drimane 13-methyl walk",
    ElevenTwelveDioxygenatedSteroid => "11,12-Dioxygenated steroid",
    ElevenOxygenatedSteroidEighteenMethylWalk => "11-Oxygenated steroid 18-methyl walk",
    TwelveOxygenatedSteroidTwentySideChainWalk => "12-Oxygenated steroid 20-side chain walk",
    ThreeOxygenatedPMenthaneSevenMethylWalk => "3-Oxygenated p-menthane 7-methyl walk",
    ThreeOxygenatedPMenthaneNineMethylWalk => "3-Oxygenated p-menthane 9-methyl walk",
    ElevenOxygenatedDrimaneTwelveMethylWalk => "11-Oxygenated drimane 12-methyl walk",
    TwelveSeventeenDioxygenatedSteroid => "12,17-Dioxygenated steroid",
    TwelveOrSeventeenOxygenatedSteroidEighteenMethylWalk =>
        "12/17-Oxygenated steroid 18-methyl walk",
    ThreeOxygenatedDrimaneThirteenMethylWalk => "3-Oxygenated drimane 13-methyl walk",
    EighteenOxygenatedAbietatrieneNineteenMethylWalk => "18-Oxygenated abietatriene 19-methyl walk",
    SeventeenOxygenatedSteroidNineteenMethylWalk => "17-Oxygenated steroid 19-methyl walk",
    ThreeOxygenatedDrimaneTwelveMethylWalk => "3-Oxygenated drimane 12-methyl walk",
    SeventeenOxygenatedSteroidTwentySideChainWalk => "17-Oxygenated steroid 20-side chain walk",
    EighteenNineteenDimethylSteroidWalk => "18,19-Dimethyl steroid walk",
    SevenNineDimethylPMenthaneWalk => "7,9-Dimethyl p-menthane walk",
    TwelveThirteenDimethylDrimaneWalk => "12,13-Dimethyl drimane walk",
    EighteenMethylSteroidTwentySideChainWalk => "18-Methyl steroid 20-side chain walk",
    NineteenMethylSteroidTwentySideChainWalk => "19-Methyl steroid 20-side chain walk",
    ThreeSevenDioxygenatedFiveEneSteroid => "3,7-Dioxygenated 5-ene steroid",
    ThreeSeventeenDioxygenatedFiveEneSteroid => "3,17-Dioxygenated 5-ene steroid",
    ThreeOxygenatedFiveEneSteroidEighteenMethylWalk => "3-Oxygenated 5-ene steroid 18-methyl walk",
    ThreeOxygenatedFiveEneSteroidTwentySideChainWalk =>
        "3-Oxygenated 5-ene steroid 20-side chain walk",
    SevenOxygenatedFiveEneSteroidNineteenMethylWalk => "7-Oxygenated 5-ene steroid 19-methyl walk",
    ThreeSevenDioxygenatedFourEnThreeOneSteroid => "3,7-Dioxygenated 4-en-3-one steroid",
    ThreeElevenDioxygenatedFourEnThreeOneSteroid => "3,11-Dioxygenated 4-en-3-one steroid",
    ThreeTwelveDioxygenatedFourEnThreeOneSteroid => "3,12-Dioxygenated 4-en-3-one steroid",
    ThreeSeventeenDioxygenatedFourEnThreeOneSteroid => "3,17-Dioxygenated 4-en-3-one steroid",
    ThreeOxygenatedFourEnThreeOneSteroidEighteenMethylWalk =>
        "3-Oxygenated 4-en-3-one steroid 18-methyl walk",
    ThreeOxygenatedFourEnThreeOneSteroidNineteenMethylWalk =>
        "3-Oxygenated 4-en-3-one steroid 19-methyl walk",
    ThreeOxygenatedFourEnThreeOneSteroidTwentySideChainWalk =>
        "3-Oxygenated 4-en-3-one steroid 20-side chain walk",
    ThreeSevenDioxygenatedEstratriene => "3,7-Dioxygenated estratriene",
    ThreeElevenDioxygenatedEstratriene => "3,11-Dioxygenated estratriene",
    ThreeTwelveDioxygenatedEstratriene => "3,12-Dioxygenated estratriene",
    ThreeSeventeenDioxygenatedEstratriene => "3,17-Dioxygenated estratriene",
    ThreeOxygenatedEstratrieneEighteenMethylWalk => "3-Oxygenated estratriene 18-methyl walk",
    ThreeOxygenatedEstratrieneTwentySideChainWalk => "3-Oxygenated estratriene 20-side chain walk",
    TwelveFifteenOrThirteenFifteenDimethylDrimaneWalk => "12,15/13,15-Dimethyl drimane walk",
    NineteenTwentyDimethylAbietatrieneWalk => "19,20-Dimethyl abietatriene walk",
    ThreeOxygenatedDrimSevenEneTwelveMethylWalk => "3-Oxygenated drim-7-ene 12-methyl walk",
    TwelveThirteenDimethylDrimSevenEneWalk => "12,13-Dimethyl drim-7-ene walk",
    EighteenOxygenatedAbietatrieneFifteenSideChainWalk =>
        "18-Oxygenated abietatriene 15-side chain walk",
    NineteenMethylAbietatrieneFifteenSideChainWalk => "19-Methyl abietatriene 15-side chain walk",
    TwentyMethylAbietatrieneFifteenSideChainWalk => "20-Methyl abietatriene 15-side chain walk",
    NineOxygenatedIononeTenMethylWalk => "9-Oxygenated ionone 10-methyl walk",
    NineOxygenatedIononeElevenMethylWalk => "9-Oxygenated ionone 11-methyl walk",
    NineOxygenatedIononeThirteenMethylWalk => "9-Oxygenated ionone 13-methyl walk",
    TenElevenDimethylIononeWalk => "10,11-Dimethyl ionone walk",
    TenThirteenDimethylIononeWalk => "10,13-Dimethyl ionone walk",
    ElevenThirteenDimethylIononeWalk => "11,13-Dimethyl ionone walk",
    // alkaloid ringsets
    SixSevenDioxygenatedTetrahydroisoquinoline => "6,7-Dioxygenated tetrahydroisoquinoline",
    FiveSixOrSixSevenOrSevenEightDioxygenatedQuinoline => "5,6/6,7/7,8-Dioxygenated quinoline",
    FourFiveOrFiveSixOrSixSevenDioxygenatedTryptamine => "4,5/5,6/6,7-Dioxygenated tryptamine",
    FourPrimeSixDioxygenatedTetrahydroisoquinoline => "4',6-Dioxygenated tetrahydroisoquinoline",
    SixOxygenatedTetrahydroisoquinolineTwoNitrogenWalk =>
        "6-Oxygenated tetrahydroisoquinoline 2-nitrogen walk",
    FourOxygenatedTryptamineAminoNitrogenWalk => "4-Oxygenated tryptamine amino-nitrogen walk",
    FourPrimeSevenDioxygenatedTetrahydroisoquinoline => "4',7-Dioxygenated tetrahydroisoquinoline",
    SevenOxygenatedTetrahydroisoquinolineTwoNitrogenWalk =>
        "7-Oxygenated tetrahydroisoquinoline 2-nitrogen walk",
    FourPrimeOxygenatedTetrahydroisoquinolineTwoNitrogenWalk =>
        "4'-Oxygenated tetrahydroisoquinoline 2-nitrogen walk",
    FiveOxygenatedTryptamineAminoNitrogenWalk => "5-Oxygenated tryptamine amino-nitrogen walk",
    SevenOxygenatedTryptamineAminoNitrogenWalk => "7-Oxygenated tryptamine amino-nitrogen walk",
    FourFiveDioxygenatedQuinoline => "4,5-Dioxygenated quinoline",
    FiveSevenOrSixEightDioxygenatedQuinoline => "5,7/6,8-Dioxygenated quinoline",
    FourSixOrFiveSevenDioxygenatedTryptamine => "4,6/5,7-Dioxygenated tryptamine",
    FourSixDioxygenatedQuinoline => "4,6-Dioxygenated quinoline",
    FourEightDioxygenatedQuinoline => "4,8-Dioxygenated quinoline",
    FiveEightDioxygenatedQuinoline => "5,8-Dioxygenated quinoline",
    FourSevenDioxygenatedTryptamine => "4,7-Dioxygenated tryptamine",
    FourSevenDioxygenatedQuinoline => "4,7-Dioxygenated quinoline",
    FourOxygenatedQuinolineOneNitrogenWalk => "4-Oxygenated quinoline 1-nitrogen walk",
    FiveOxygenatedQuinolineOneNitrogenWalk => "5-Oxygenated quinoline 1-nitrogen walk",
    SevenOxygenatedQuinolineOneNitrogenWalk => "7-Oxygenated quinoline 1-nitrogen walk",
    FourOxygenatedTryptamineOneNitrogenWalk => "4-Oxygenated tryptamine 1-nitrogen walk",
    SixOxygenatedTryptamineOneNitrogenWalk => "6-Oxygenated tryptamine 1-nitrogen walk",
    FourOxygenatedQuinolineTwoMethylWalk => "4-Oxygenated quinoline 2-methyl walk",
    FiveOxygenatedQuinolineTwoMethylWalk => "5-Oxygenated quinoline 2-methyl walk",
    SevenOxygenatedQuinolineTwoMethylWalk => "7-Oxygenated quinoline 2-methyl walk",
    SixOxygenatedQuinolineOneNitrogenWalk => "6-Oxygenated quinoline 1-nitrogen walk",
    FiveOxygenatedTryptamineOneNitrogenWalk => "5-Oxygenated tryptamine 1-nitrogen walk",
    SixOxygenatedQuinolineTwoMethylWalk => "6-Oxygenated quinoline 2-methyl walk",
    EightOxygenatedQuinolineOneNitrogenWalk => "8-Oxygenated quinoline 1-nitrogen walk",
    SevenOxygenatedTryptamineOneNitrogenWalk => "7-Oxygenated tryptamine 1-nitrogen walk",
    EightOxygenatedQuinolineTwoMethylWalk => "8-Oxygenated quinoline 2-methyl walk",
    OneNitrogenousQuinolineTwoMethylWalk => "1-Nitrogenous quinoline 2-methyl walk",
    SixOxygenatedTryptamineAminoNitrogenWalk => "6-Oxygenated tryptamine amino-nitrogen walk",
    ThreeOxygenatedTropaneNMethylWalk => "3-Oxygenated tropane N-methyl walk",
    ThreeOxygenatedTropaneEsterNMethylWalk => "3-Oxygenated tropane ester N-methyl walk",
    ThreeOxygenatedTropaneEsterTwoSideChainWalk => "3-Oxygenated tropane ester 2-side chain walk",
    NMethylTropaneEsterTwoSideChainWalk => "N-Methyl tropane ester 2-side chain walk",
    ElevenOxygenatedQuinolizidineFiveNitrogenWalk => "11-Oxygenated quinolizidine 5-nitrogen walk",
    NineOxygenatedPyrrolizidineFourNitrogenWalk => "9-Oxygenated pyrrolizidine 4-nitrogen walk",
    SevenNineDioxygenatedPyrrolizidine => "7,9-Dioxygenated pyrrolizidine",
    SevenOxygenatedPyrrolizidineFourNitrogenWalk => "7-Oxygenated pyrrolizidine 4-nitrogen walk",
    TwoSixDioxygenatedXanthine => "2,6-Dioxygenated xanthine",
    TwoOrSixOxygenatedXanthineOneMethylWalk => "2/6-Oxygenated xanthine 1-methyl walk",
    TwoOxygenatedXanthineSevenMethylWalk => "2-Oxygenated xanthine 7-methyl walk",
    SixOxygenatedXanthineThreeMethylWalk => "6-Oxygenated xanthine 3-methyl walk",
    SixOxygenatedXanthineSevenMethylWalk => "6-Oxygenated xanthine 7-methyl walk",
    OneThreeDimethylXanthineWalk => "1,3-Dimethyl xanthine walk",
    OneSevenDimethylXanthineWalk => "1,7-Dimethyl xanthine walk",
    ThreeSevenDimethylXanthineWalk => "3,7-Dimethyl xanthine walk",
    SixNitrogenousAdenineNineMethylWalk => "6-Nitrogenous adenine 9-methyl walk",
    // peptide backbones and side chains
    TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk =>
        "Tripeptide N-terminal amine to preceding carbonyl oxygen walk",
    TripeptideAmideNitrogenToCarbonylOxygenWalk =>
        "Tripeptide amide nitrogen to carbonyl oxygen walk",
    TripeptideNTerminalAmineToAmideNitrogenWalk =>
        "Tripeptide N-terminal amine to amide nitrogen walk",
    TripeptideAmideNitrogenToFollowingAmideNitrogenWalk =>
        "Tripeptide amide nitrogen to following amide nitrogen walk",
    TripeptideNTerminalAmineToCarbonylOxygenWalk =>
        "Tripeptide N-terminal amine to carbonyl oxygen walk",
    TripeptideNTerminalAmineToFollowingAmideNitrogenWalk =>
        "Tripeptide N-terminal amine to following amide nitrogen walk",
    TripeptideNTerminalAmineToCTerminalHydroxylWalk =>
        "Tripeptide N-terminal amine to C-terminal hydroxyl walk",
    TripeptidePrecedingCarbonylOxygenToAmideNitrogenWalk =>
        "Tripeptide preceding carbonyl oxygen to amide nitrogen walk",
    TripeptidePrecedingCarbonylOxygenToCarbonylOxygenWalk =>
        "Tripeptide preceding carbonyl oxygen to carbonyl oxygen walk",
    TripeptidePrecedingCarbonylOxygenToFollowingAmideNitrogenWalk =>
        "Tripeptide preceding carbonyl oxygen to following amide nitrogen walk",
    TripeptidePrecedingCarbonylOxygenToCTerminalHydroxylWalk =>
        "Tripeptide preceding carbonyl oxygen to C-terminal hydroxyl walk",
    TripeptideAmideNitrogenToCTerminalHydroxylWalk =>
        "Tripeptide amide nitrogen to C-terminal hydroxyl walk",
    SerineSideChainToNTerminalAmineWalk => "Serine side chain to N-terminal amine walk",
    TripeptideCarbonylOxygenToCTerminalHydroxylWalk =>
        "Tripeptide carbonyl oxygen to C-terminal hydroxyl walk",
    TripeptideFollowingAmideNitrogenToCTerminalHydroxylWalk =>
        "Tripeptide following amide nitrogen to C-terminal hydroxyl walk",
    SerineSideChainToCarbonylOxygenWalk => "Serine side chain to carbonyl oxygen walk",
    SerineSideChainToFollowingAmideNitrogenWalk =>
        "Serine side chain to following amide nitrogen walk",
    SerineSideChainToCTerminalHydroxylWalk => "Serine side chain to C-terminal hydroxyl walk",
    CysteineSideChainToNTerminalAmineWalk => "Cysteine side chain to N-terminal amine walk",
    CysteineSideChainToPrecedingCarbonylOxygenWalk =>
        "Cysteine side chain to preceding carbonyl oxygen walk",
    CysteineSideChainToAmideNitrogenWalk => "Cysteine side chain to amide nitrogen walk",
    CysteineSideChainToCarbonylOxygenWalk => "Cysteine side chain to carbonyl oxygen walk",
    CysteineSideChainToFollowingAmideNitrogenWalk =>
        "Cysteine side chain to following amide nitrogen walk",
    CysteineSideChainToCTerminalHydroxylWalk => "Cysteine side chain to C-terminal hydroxyl walk",
    MethionineSideChainToNTerminalAmineWalk => "Methionine side chain to N-terminal amine walk",
    MethionineSideChainToPrecedingCarbonylOxygenWalk =>
        "Methionine side chain to preceding carbonyl oxygen walk",
    MethionineSideChainToCarbonylOxygenWalk => "Methionine side chain to carbonyl oxygen walk",
    MethionineSideChainToFollowingAmideNitrogenWalk =>
        "Methionine side chain to following amide nitrogen walk",
    MethionineSideChainToCTerminalHydroxylWalk =>
        "Methionine side chain to C-terminal hydroxyl walk",
    AspartateSideChainToNTerminalAmineWalk => "Aspartate side chain to N-terminal amine walk",
    AspartateSideChainToPrecedingCarbonylOxygenWalk =>
        "Aspartate side chain to preceding carbonyl oxygen walk",
    AspartateSideChainToCarbonylOxygenWalk => "Aspartate side chain to carbonyl oxygen walk",
    AspartateSideChainToFollowingAmideNitrogenWalk =>
        "Aspartate side chain to following amide nitrogen walk",
    AspartateSideChainToCTerminalHydroxylWalk => "Aspartate side chain to C-terminal hydroxyl walk",
    GlutamateSideChainToNTerminalAmineWalk => "Glutamate side chain to N-terminal amine walk",
    GlutamateSideChainToPrecedingCarbonylOxygenWalk =>
        "Glutamate side chain to preceding carbonyl oxygen walk",
    GlutamateSideChainToCarbonylOxygenWalk => "Glutamate side chain to carbonyl oxygen walk",
    GlutamateSideChainToFollowingAmideNitrogenWalk =>
        "Glutamate side chain to following amide nitrogen walk",
    GlutamateSideChainToCTerminalHydroxylWalk => "Glutamate side chain to C-terminal hydroxyl walk",
    AsparagineSideChainToNTerminalAmineWalk => "Asparagine side chain to N-terminal amine walk",
    AsparagineSideChainToPrecedingCarbonylOxygenWalk =>
        "Asparagine side chain to preceding carbonyl oxygen walk",
    AsparagineSideChainToAmideNitrogenWalk => "Asparagine side chain to amide nitrogen walk",
    AsparagineSideChainToCarbonylOxygenWalk => "Asparagine side chain to carbonyl oxygen walk",
    AsparagineSideChainToFollowingAmideNitrogenWalk =>
        "Asparagine side chain to following amide nitrogen walk",
    ArginineSideChainToAmideNitrogenWalk => "Arginine side chain to amide nitrogen walk",
    AsparagineSideChainToCTerminalHydroxylWalk =>
        "Asparagine side chain to C-terminal hydroxyl walk",
    GlutamineSideChainToNTerminalAmineWalk => "Glutamine side chain to N-terminal amine walk",
    ArginineSideChainToNTerminalAmineWalk => "Arginine side chain to N-terminal amine walk",
    GlutamineSideChainToPrecedingCarbonylOxygenWalk =>
        "Glutamine side chain to preceding carbonyl oxygen walk",
    ArginineSideChainToPrecedingCarbonylOxygenWalk =>
        "Arginine side chain to preceding carbonyl oxygen walk",
    GlutamineSideChainToCarbonylOxygenWalk => "Glutamine side chain to carbonyl oxygen walk",
    ArginineSideChainToCarbonylOxygenWalk => "Arginine side chain to carbonyl oxygen walk",
    GlutamineSideChainToFollowingAmideNitrogenWalk =>
        "Glutamine side chain to following amide nitrogen walk",
    LysineSideChainToAmideNitrogenWalk => "Lysine side chain to amide nitrogen walk",
    ArginineSideChainToFollowingAmideNitrogenWalk =>
        "Arginine side chain to following amide nitrogen walk",
    GlutamineSideChainToCTerminalHydroxylWalk => "Glutamine side chain to C-terminal hydroxyl walk",
    ArginineSideChainToCTerminalHydroxylWalk => "Arginine side chain to C-terminal hydroxyl walk",
    LysineSideChainToNTerminalAmineWalk => "Lysine side chain to N-terminal amine walk",
    LysineSideChainToPrecedingCarbonylOxygenWalk =>
        "Lysine side chain to preceding carbonyl oxygen walk",
    LysineSideChainToCarbonylOxygenWalk => "Lysine side chain to carbonyl oxygen walk",
    LysineSideChainToFollowingAmideNitrogenWalk =>
        "Lysine side chain to following amide nitrogen walk",
    LysineSideChainToCTerminalHydroxylWalk => "Lysine side chain to C-terminal hydroxyl walk",
    HistidineSideChainToNTerminalAmineWalk => "Histidine side chain to N-terminal amine walk",
    HistidineSideChainToPrecedingCarbonylOxygenWalk =>
        "Histidine side chain to preceding carbonyl oxygen walk",
    HistidineSideChainToAmideNitrogenWalk => "Histidine side chain to amide nitrogen walk",
    HistidineSideChainToCarbonylOxygenWalk => "Histidine side chain to carbonyl oxygen walk",
    HistidineSideChainToFollowingAmideNitrogenWalk =>
        "Histidine side chain to following amide nitrogen walk",
    HistidineSideChainToCTerminalHydroxylWalk => "Histidine side chain to C-terminal hydroxyl walk",
    TyrosineSideChainToNTerminalAmineWalk => "Tyrosine side chain to N-terminal amine walk",
    TyrosineSideChainToPrecedingCarbonylOxygenWalk =>
        "Tyrosine side chain to preceding carbonyl oxygen walk",
    TyrosineSideChainToAmideNitrogenWalk => "Tyrosine side chain to amide nitrogen walk",
    TyrosineSideChainToCarbonylOxygenWalk => "Tyrosine side chain to carbonyl oxygen walk",
    TyrosineSideChainToFollowingAmideNitrogenWalk =>
        "Tyrosine side chain to following amide nitrogen walk",
    TyrosineSideChainToCTerminalHydroxylWalk => "Tyrosine side chain to C-terminal hydroxyl walk",
    TryptophanSideChainToNTerminalAmineWalk => "Tryptophan side chain to N-terminal amine walk",
    TryptophanSideChainToPrecedingCarbonylOxygenWalk =>
        "Tryptophan side chain to preceding carbonyl oxygen walk",
    TryptophanSideChainToAmideNitrogenWalk => "Tryptophan side chain to amide nitrogen walk",
    TryptophanSideChainToCarbonylOxygenWalk => "Tryptophan side chain to carbonyl oxygen walk",
    TryptophanSideChainToFollowingAmideNitrogenWalk =>
        "Tryptophan side chain to following amide nitrogen walk",
    TryptophanSideChainToCTerminalHydroxylWalk =>
        "Tryptophan side chain to C-terminal hydroxyl walk",
}

impl Motif {
    pub const COUNT: usize = Motif::ALL.len();

    /// Position of this motif's bit in a fingerprint.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look a motif up by its catalogue name.
    pub fn from_name(name: &str) -> Option<Motif> {
        Motif::ALL.iter().copied().find(|m| m.name() == name)
    }
}

impl std::fmt::Display for Motif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn index_matches_declaration_order() {
        for (i, m) in Motif::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
        assert_eq!(Motif::COUNT, Motif::ALL.len());
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = Motif::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), Motif::COUNT);
    }

    #[test]
    fn name_lookup() {
        assert_eq!(Motif::from_name("Carbon-carbon double bond"), Some(Motif::CarbonCarbonDoubleBond));
        assert_eq!(Motif::from_name("N-methyl"), Some(Motif::NMethyl));
        assert_eq!(Motif::from_name("not a motif"), None);
        assert_eq!(Motif::Phenol.to_string(), "Phenol");
    }
}
