//! Classification labels carried by graph records.

/// Bond order classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Symbol used for this order in connectivity signatures.
    pub fn symbol(self) -> char {
        match self {
            BondOrder::Single => '-',
            BondOrder::Double => '=',
            BondOrder::Triple => '#',
            BondOrder::Aromatic => ':',
        }
    }

    /// Parse a signature bond symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '-' => Some(BondOrder::Single),
            '=' => Some(BondOrder::Double),
            '#' => Some(BondOrder::Triple),
            ':' => Some(BondOrder::Aromatic),
            _ => None,
        }
    }
}

/// Functional-group tag of a single atom.
///
/// Tags are assigned upstream (or inferred by [`GraphBuilder`](crate::GraphBuilder))
/// from the atom's element, charge and neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionGroup {
    // carbon
    AlkaneCarbon,
    AlkeneCarbon,
    AlkyneCarbon,
    AromaticCarbon,
    ImineCarbon,
    KetoneCarbon,
    AldehydeCarbon,
    CarboxylCarbon,
    EsterCarbon,
    AmideCarbon,
    NitrileCarbon,
    // oxygen
    HydroxylOxygen,
    EtherOxygen,
    EsterOxygen,
    CarbonylOxygen,
    AromaticOxygen,
    AnionicOxygen,
    // nitrogen
    PrimaryAmineNitrogen,
    SecondaryAmineNitrogen,
    TertiaryAmineNitrogen,
    QuaternaryNitrogen,
    AmideNitrogen,
    ImineNitrogen,
    NitrileNitrogen,
    NitroNitrogen,
    AromaticNitrogen,
    // sulfur
    ThiolSulfur,
    SulfideSulfur,
    DisulfideSulfur,
    SulfinylSulfur,
    SulfonylSulfur,
    ThiocarbonylSulfur,
    AromaticSulfur,
    // phosphorus
    PhosphatePhosphorus,
    PhosphonatePhosphorus,
    OtherPhosphorus,
    // misc
    Halogen,
    Silicon,
    Hydrogen,
    #[default]
    Other,
}

impl FunctionGroup {
    /// Carbon bearing a double-bonded oxygen.
    pub fn is_carbonyl_carbon(self) -> bool {
        matches!(
            self,
            FunctionGroup::KetoneCarbon
                | FunctionGroup::AldehydeCarbon
                | FunctionGroup::CarboxylCarbon
                | FunctionGroup::EsterCarbon
                | FunctionGroup::AmideCarbon
        )
    }

    /// Any amine nitrogen (not amide, not aromatic).
    pub fn is_amine(self) -> bool {
        matches!(
            self,
            FunctionGroup::PrimaryAmineNitrogen
                | FunctionGroup::SecondaryAmineNitrogen
                | FunctionGroup::TertiaryAmineNitrogen
                | FunctionGroup::QuaternaryNitrogen
        )
    }
}

/// Classified skeleton type of a single ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RingType {
    // aromatic six-membered
    Benzene,
    Pyridine,
    Pyrimidine,
    Pyrazine,
    Pyridazine,
    Triazine,
    // aromatic five-membered
    Pyrrole,
    Furan,
    Thiophene,
    Imidazole,
    Pyrazole,
    Oxazole,
    Isoxazole,
    Thiazole,
    Triazole,
    Tetrazole,
    // carbocycles
    Cyclopropane,
    Cyclobutane,
    Cyclopentane,
    Cyclopentene,
    Cyclohexane,
    Cyclohexene,
    Cyclohexadiene,
    Cycloheptane,
    // saturated and partially saturated heterocycles
    Oxirane,
    Aziridine,
    Oxetane,
    Azetidine,
    Pyrrolidine,
    Pyrroline,
    Tetrahydrofuran,
    Dihydrofuran,
    Thiolane,
    Piperidine,
    Tetrahydropyridine,
    Piperazine,
    Morpholine,
    Tetrahydropyran,
    Dihydropyran,
    Pyran,
    Dioxolane,
    Dioxane,
    Azepane,
    // oxo heterocycles
    Pyranone,
    Pyrone,
    Butyrolactone,
    Valerolactone,
    Pyrrolidinone,
    Piperidinone,
    Imidazolidine,
    Other,
}

impl RingType {
    /// Fully aromatic ring skeletons.
    pub fn is_aromatic(self) -> bool {
        matches!(
            self,
            RingType::Benzene
                | RingType::Pyridine
                | RingType::Pyrimidine
                | RingType::Pyrazine
                | RingType::Pyridazine
                | RingType::Triazine
                | RingType::Pyrrole
                | RingType::Furan
                | RingType::Thiophene
                | RingType::Imidazole
                | RingType::Pyrazole
                | RingType::Oxazole
                | RingType::Isoxazole
                | RingType::Thiazole
                | RingType::Triazole
                | RingType::Tetrazole
        )
    }

    /// Aromatic rings containing at least one heteroatom.
    pub fn is_heteroaromatic(self) -> bool {
        self.is_aromatic() && self != RingType::Benzene
    }

    /// All-carbon non-aromatic rings.
    pub fn is_carbocycle(self) -> bool {
        matches!(
            self,
            RingType::Cyclopropane
                | RingType::Cyclobutane
                | RingType::Cyclopentane
                | RingType::Cyclopentene
                | RingType::Cyclohexane
                | RingType::Cyclohexene
                | RingType::Cyclohexadiene
                | RingType::Cycloheptane
        )
    }

    /// Sugar-like oxygen heterocycles (furanose/pyranose skeletons).
    pub fn is_sugar_skeleton(self) -> bool {
        matches!(self, RingType::Tetrahydrofuran | RingType::Tetrahydropyran)
    }
}

/// Classified composite type of a fused or bridged ring system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RingSetType {
    Naphthalene,
    Anthracene,
    Phenanthrene,
    Indole,
    Indoline,
    Isoindole,
    Benzofuran,
    Dihydrobenzofuran,
    Benzothiophene,
    Benzimidazole,
    Benzoxazole,
    Benzothiazole,
    Purine,
    Pteridine,
    Quinoline,
    Isoquinoline,
    Tetrahydroisoquinoline,
    Quinazoline,
    Quinoxaline,
    Quinolizidine,
    Pyrrolizidine,
    Tropane,
    Chromone,
    Chromane,
    Chromene,
    Coumarin,
    Isocoumarin,
    Xanthone,
    Xanthene,
    Carbazole,
    Acridine,
    Indane,
    Tetralin,
    Decalin,
    Steroid,
    Benzodioxole,
    Benzodioxane,
    Other,
}

impl RingSetType {
    /// Benzopyran-derived systems (flavonoid cores).
    pub fn is_benzopyran(self) -> bool {
        matches!(
            self,
            RingSetType::Chromone
                | RingSetType::Chromane
                | RingSetType::Chromene
                | RingSetType::Coumarin
                | RingSetType::Isocoumarin
                | RingSetType::Xanthone
                | RingSetType::Xanthene
        )
    }
}
