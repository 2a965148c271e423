use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

pub type Point = Point3<f64>;

/// Chemical elements commonly found in receptor and ligand structure files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    H,
    C,
    N,
    O,
    F,
    Na,
    Mg,
    P,
    S,
    Cl,
    K,
    Ca,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Se,
    Br,
    I,
    Unknown,
}

/// Partition of atom records by their source record type: `ATOM  ` rows are
/// standard-residue atoms, `HETATM` rows are hetero-atoms (ligands, waters,
/// cofactors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueCategory {
    Standard,
    Hetero,
}

impl Element {
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::K => "K",
            Element::Ca => "Ca",
            Element::Mn => "Mn",
            Element::Fe => "Fe",
            Element::Co => "Co",
            Element::Ni => "Ni",
            Element::Cu => "Cu",
            Element::Zn => "Zn",
            Element::Se => "Se",
            Element::Br => "Br",
            Element::I => "I",
            Element::Unknown => "Unknown",
        }
    }

    /// Guesses the element from a hetero-atom name when the element column is
    /// blank (ions like `CA` or `FE` carry the symbol in the name). Two-letter
    /// symbols are tried before the leading letter alone, so this is not
    /// suitable for standard-residue atom names.
    pub fn from_atom_name(name: &str) -> Element {
        let symbol: String = name.chars().filter(|c| c.is_alphabetic()).collect();
        if symbol.is_empty() {
            return Element::Unknown;
        }

        if symbol.len() >= 2 {
            let two = format!(
                "{}{}",
                symbol[0..1].to_ascii_uppercase(),
                symbol[1..2].to_ascii_lowercase()
            );
            if let Ok(el) = Element::from_str(&two) {
                if el != Element::Unknown {
                    return el;
                }
            }
        }

        Element::from_str(&symbol[0..1].to_ascii_uppercase()).unwrap_or(Element::Unknown)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Element::H),
            "C" => Ok(Element::C),
            "N" => Ok(Element::N),
            "O" => Ok(Element::O),
            "F" => Ok(Element::F),
            "Na" | "NA" => Ok(Element::Na),
            "Mg" | "MG" => Ok(Element::Mg),
            "P" => Ok(Element::P),
            "S" => Ok(Element::S),
            "Cl" | "CL" => Ok(Element::Cl),
            "K" => Ok(Element::K),
            "Ca" | "CA" => Ok(Element::Ca),
            "Mn" | "MN" => Ok(Element::Mn),
            "Fe" | "FE" => Ok(Element::Fe),
            "Co" | "CO" => Ok(Element::Co),
            "Ni" | "NI" => Ok(Element::Ni),
            "Cu" | "CU" => Ok(Element::Cu),
            "Zn" | "ZN" => Ok(Element::Zn),
            "Se" | "SE" => Ok(Element::Se),
            "Br" | "BR" => Ok(Element::Br),
            "I" => Ok(Element::I),
            _ => Ok(Element::Unknown),
        }
    }
}

impl ResidueCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ResidueCategory::Standard => "Standard Residue",
            ResidueCategory::Hetero => "Hetero Residue",
        }
    }

    /// PDB record type that atoms of this category are written under.
    pub fn record_type(&self) -> &'static str {
        match self {
            ResidueCategory::Standard => "ATOM  ",
            ResidueCategory::Hetero => "HETATM",
        }
    }
}

impl fmt::Display for ResidueCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One-letter code for a 3-letter amino-acid residue name, or `None` for
/// anything outside the 20 standard amino acids.
pub fn one_letter_code(res_name: &str) -> Option<char> {
    match res_name {
        "ALA" => Some('A'),
        "ARG" => Some('R'),
        "ASN" => Some('N'),
        "ASP" => Some('D'),
        "CYS" => Some('C'),
        "GLN" => Some('Q'),
        "GLU" => Some('E'),
        "GLY" => Some('G'),
        "HIS" => Some('H'),
        "ILE" => Some('I'),
        "LEU" => Some('L'),
        "LYS" => Some('K'),
        "MET" => Some('M'),
        "PHE" => Some('F'),
        "PRO" => Some('P'),
        "SER" => Some('S'),
        "THR" => Some('T'),
        "TRP" => Some('W'),
        "TYR" => Some('Y'),
        "VAL" => Some('V'),
        _ => None,
    }
}
