use once_cell::sync::Lazy;
use phf::{phf_map, Map};

use crate::dict::dictionary::TokenDictionary;
use crate::dict::entity::Element;

struct ElementInfo {
    number: u32,
    name: &'static str,
    mass: f64,
    period: u32,
    group: Option<u32>,
}

// symbol -> element data, IUPAC 2016 names, standard atomic weights
static ELEMENTS: Map<&'static str, ElementInfo> = phf_map! {
    "H" => ElementInfo { number: 1, name: "Hydrogen", mass: 1.008, period: 1, group: Some(1) },
    "He" => ElementInfo { number: 2, name: "Helium", mass: 4.0026, period: 1, group: Some(18) },
    "Li" => ElementInfo { number: 3, name: "Lithium", mass: 6.94, period: 2, group: Some(1) },
    "Be" => ElementInfo { number: 4, name: "Beryllium", mass: 9.0122, period: 2, group: Some(2) },
    "B" => ElementInfo { number: 5, name: "Boron", mass: 10.81, period: 2, group: Some(13) },
    "C" => ElementInfo { number: 6, name: "Carbon", mass: 12.011, period: 2, group: Some(14) },
    "N" => ElementInfo { number: 7, name: "Nitrogen", mass: 14.007, period: 2, group: Some(15) },
    "O" => ElementInfo { number: 8, name: "Oxygen", mass: 15.999, period: 2, group: Some(16) },
    "F" => ElementInfo { number: 9, name: "Fluorine", mass: 18.998, period: 2, group: Some(17) },
    "Ne" => ElementInfo { number: 10, name: "Neon", mass: 20.18, period: 2, group: Some(18) },
    "Na" => ElementInfo { number: 11, name: "Sodium", mass: 22.99, period: 3, group: Some(1) },
    "Mg" => ElementInfo { number: 12, name: "Magnesium", mass: 24.305, period: 3, group: Some(2) },
    "Al" => ElementInfo { number: 13, name: "Aluminum", mass: 26.982, period: 3, group: Some(13) },
    "Si" => ElementInfo { number: 14, name: "Silicon", mass: 28.085, period: 3, group: Some(14) },
    "P" => ElementInfo { number: 15, name: "Phosphorus", mass: 30.974, period: 3, group: Some(15) },
    "S" => ElementInfo { number: 16, name: "Sulfur", mass: 32.06, period: 3, group: Some(16) },
    "Cl" => ElementInfo { number: 17, name: "Chlorine", mass: 35.45, period: 3, group: Some(17) },
    "Ar" => ElementInfo { number: 18, name: "Argon", mass: 39.948, period: 3, group: Some(18) },
    "K" => ElementInfo { number: 19, name: "Potassium", mass: 39.098, period: 4, group: Some(1) },
    "Ca" => ElementInfo { number: 20, name: "Calcium", mass: 40.078, period: 4, group: Some(2) },
    "Sc" => ElementInfo { number: 21, name: "Scandium", mass: 44.956, period: 4, group: Some(3) },
    "Ti" => ElementInfo { number: 22, name: "Titanium", mass: 47.867, period: 4, group: Some(4) },
    "V" => ElementInfo { number: 23, name: "Vanadium", mass: 50.942, period: 4, group: Some(5) },
    "Cr" => ElementInfo { number: 24, name: "Chromium", mass: 51.996, period: 4, group: Some(6) },
    "Mn" => ElementInfo { number: 25, name: "Manganese", mass: 54.938, period: 4, group: Some(7) },
    "Fe" => ElementInfo { number: 26, name: "Iron", mass: 55.845, period: 4, group: Some(8) },
    "Co" => ElementInfo { number: 27, name: "Cobalt", mass: 58.933, period: 4, group: Some(9) },
    "Ni" => ElementInfo { number: 28, name: "Nickel", mass: 58.693, period: 4, group: Some(10) },
    "Cu" => ElementInfo { number: 29, name: "Copper", mass: 63.546, period: 4, group: Some(11) },
    "Zn" => ElementInfo { number: 30, name: "Zinc", mass: 65.38, period: 4, group: Some(12) },
    "Ga" => ElementInfo { number: 31, name: "Gallium", mass: 69.723, period: 4, group: Some(13) },
    "Ge" => ElementInfo { number: 32, name: "Germanium", mass: 72.63, period: 4, group: Some(14) },
    "As" => ElementInfo { number: 33, name: "Arsenic", mass: 74.922, period: 4, group: Some(15) },
    "Se" => ElementInfo { number: 34, name: "Selenium", mass: 78.971, period: 4, group: Some(16) },
    "Br" => ElementInfo { number: 35, name: "Bromine", mass: 79.904, period: 4, group: Some(17) },
    "Kr" => ElementInfo { number: 36, name: "Krypton", mass: 83.798, period: 4, group: Some(18) },
    "Rb" => ElementInfo { number: 37, name: "Rubidium", mass: 85.468, period: 5, group: Some(1) },
    "Sr" => ElementInfo { number: 38, name: "Strontium", mass: 87.62, period: 5, group: Some(2) },
    "Y" => ElementInfo { number: 39, name: "Yttrium", mass: 88.906, period: 5, group: Some(3) },
    "Zr" => ElementInfo { number: 40, name: "Zirconium", mass: 91.224, period: 5, group: Some(4) },
    "Nb" => ElementInfo { number: 41, name: "Niobium", mass: 92.906, period: 5, group: Some(5) },
    "Mo" => ElementInfo { number: 42, name: "Molybdenum", mass: 95.95, period: 5, group: Some(6) },
    "Tc" => ElementInfo { number: 43, name: "Technetium", mass: 98.0, period: 5, group: Some(7) },
    "Ru" => ElementInfo { number: 44, name: "Ruthenium", mass: 101.07, period: 5, group: Some(8) },
    "Rh" => ElementInfo { number: 45, name: "Rhodium", mass: 102.91, period: 5, group: Some(9) },
    "Pd" => ElementInfo { number: 46, name: "Palladium", mass: 106.42, period: 5, group: Some(10) },
    "Ag" => ElementInfo { number: 47, name: "Silver", mass: 107.87, period: 5, group: Some(11) },
    "Cd" => ElementInfo { number: 48, name: "Cadmium", mass: 112.41, period: 5, group: Some(12) },
    "In" => ElementInfo { number: 49, name: "Indium", mass: 114.82, period: 5, group: Some(13) },
    "Sn" => ElementInfo { number: 50, name: "Tin", mass: 118.71, period: 5, group: Some(14) },
    "Sb" => ElementInfo { number: 51, name: "Antimony", mass: 121.76, period: 5, group: Some(15) },
    "Te" => ElementInfo { number: 52, name: "Tellurium", mass: 127.6, period: 5, group: Some(16) },
    "I" => ElementInfo { number: 53, name: "Iodine", mass: 126.9, period: 5, group: Some(17) },
    "Xe" => ElementInfo { number: 54, name: "Xenon", mass: 131.29, period: 5, group: Some(18) },
    "Cs" => ElementInfo { number: 55, name: "Cesium", mass: 132.91, period: 6, group: Some(1) },
    "Ba" => ElementInfo { number: 56, name: "Barium", mass: 137.33, period: 6, group: Some(2) },
    "La" => ElementInfo { number: 57, name: "Lanthanum", mass: 138.91, period: 6, group: None },
    "Ce" => ElementInfo { number: 58, name: "Cerium", mass: 140.12, period: 6, group: None },
    "Pr" => ElementInfo { number: 59, name: "Praseodymium", mass: 140.91, period: 6, group: None },
    "Nd" => ElementInfo { number: 60, name: "Neodymium", mass: 144.24, period: 6, group: None },
    "Pm" => ElementInfo { number: 61, name: "Promethium", mass: 145.0, period: 6, group: None },
    "Sm" => ElementInfo { number: 62, name: "Samarium", mass: 150.36, period: 6, group: None },
    "Eu" => ElementInfo { number: 63, name: "Europium", mass: 151.96, period: 6, group: None },
    "Gd" => ElementInfo { number: 64, name: "Gadolinium", mass: 157.25, period: 6, group: None },
    "Tb" => ElementInfo { number: 65, name: "Terbium", mass: 158.93, period: 6, group: None },
    "Dy" => ElementInfo { number: 66, name: "Dysprosium", mass: 162.5, period: 6, group: None },
    "Ho" => ElementInfo { number: 67, name: "Holmium", mass: 164.93, period: 6, group: None },
    "Er" => ElementInfo { number: 68, name: "Erbium", mass: 167.26, period: 6, group: None },
    "Tm" => ElementInfo { number: 69, name: "Thulium", mass: 168.93, period: 6, group: None },
    "Yb" => ElementInfo { number: 70, name: "Ytterbium", mass: 173.05, period: 6, group: None },
    "Lu" => ElementInfo { number: 71, name: "Lutetium", mass: 174.97, period: 6, group: None },
    "Hf" => ElementInfo { number: 72, name: "Hafnium", mass: 178.49, period: 6, group: Some(4) },
    "Ta" => ElementInfo { number: 73, name: "Tantalum", mass: 180.95, period: 6, group: Some(5) },
    "W" => ElementInfo { number: 74, name: "Tungsten", mass: 183.84, period: 6, group: Some(6) },
    "Re" => ElementInfo { number: 75, name: "Rhenium", mass: 186.21, period: 6, group: Some(7) },
    "Os" => ElementInfo { number: 76, name: "Osmium", mass: 190.23, period: 6, group: Some(8) },
    "Ir" => ElementInfo { number: 77, name: "Iridium", mass: 192.22, period: 6, group: Some(9) },
    "Pt" => ElementInfo { number: 78, name: "Platinum", mass: 195.08, period: 6, group: Some(10) },
    "Au" => ElementInfo { number: 79, name: "Gold", mass: 196.97, period: 6, group: Some(11) },
    "Hg" => ElementInfo { number: 80, name: "Mercury", mass: 200.59, period: 6, group: Some(12) },
    "Tl" => ElementInfo { number: 81, name: "Thallium", mass: 204.38, period: 6, group: Some(13) },
    "Pb" => ElementInfo { number: 82, name: "Lead", mass: 207.2, period: 6, group: Some(14) },
    "Bi" => ElementInfo { number: 83, name: "Bismuth", mass: 208.98, period: 6, group: Some(15) },
    "Po" => ElementInfo { number: 84, name: "Polonium", mass: 209.0, period: 6, group: Some(16) },
    "At" => ElementInfo { number: 85, name: "Astatine", mass: 210.0, period: 6, group: Some(17) },
    "Rn" => ElementInfo { number: 86, name: "Radon", mass: 222.0, period: 6, group: Some(18) },
    "Fr" => ElementInfo { number: 87, name: "Francium", mass: 223.0, period: 7, group: Some(1) },
    "Ra" => ElementInfo { number: 88, name: "Radium", mass: 226.0, period: 7, group: Some(2) },
    "Ac" => ElementInfo { number: 89, name: "Actinium", mass: 227.0, period: 7, group: None },
    "Th" => ElementInfo { number: 90, name: "Thorium", mass: 232.04, period: 7, group: None },
    "Pa" => ElementInfo { number: 91, name: "Protactinium", mass: 231.04, period: 7, group: None },
    "U" => ElementInfo { number: 92, name: "Uranium", mass: 238.03, period: 7, group: None },
    "Np" => ElementInfo { number: 93, name: "Neptunium", mass: 237.0, period: 7, group: None },
    "Pu" => ElementInfo { number: 94, name: "Plutonium", mass: 244.0, period: 7, group: None },
    "Am" => ElementInfo { number: 95, name: "Americium", mass: 243.0, period: 7, group: None },
    "Cm" => ElementInfo { number: 96, name: "Curium", mass: 247.0, period: 7, group: None },
    "Bk" => ElementInfo { number: 97, name: "Berkelium", mass: 247.0, period: 7, group: None },
    "Cf" => ElementInfo { number: 98, name: "Californium", mass: 251.0, period: 7, group: None },
    "Es" => ElementInfo { number: 99, name: "Einsteinium", mass: 252.0, period: 7, group: None },
    "Fm" => ElementInfo { number: 100, name: "Fermium", mass: 257.0, period: 7, group: None },
    "Md" => ElementInfo { number: 101, name: "Mendelevium", mass: 258.0, period: 7, group: None },
    "No" => ElementInfo { number: 102, name: "Nobelium", mass: 259.0, period: 7, group: None },
    "Lr" => ElementInfo { number: 103, name: "Lawrencium", mass: 266.0, period: 7, group: None },
    "Rf" => ElementInfo { number: 104, name: "Rutherfordium", mass: 267.0, period: 7, group: Some(4) },
    "Db" => ElementInfo { number: 105, name: "Dubnium", mass: 268.0, period: 7, group: Some(5) },
    "Sg" => ElementInfo { number: 106, name: "Seaborgium", mass: 269.0, period: 7, group: Some(6) },
    "Bh" => ElementInfo { number: 107, name: "Bohrium", mass: 270.0, period: 7, group: Some(7) },
    "Hs" => ElementInfo { number: 108, name: "Hassium", mass: 277.0, period: 7, group: Some(8) },
    "Mt" => ElementInfo { number: 109, name: "Meitnerium", mass: 278.0, period: 7, group: Some(9) },
    "Ds" => ElementInfo { number: 110, name: "Darmstadtium", mass: 281.0, period: 7, group: Some(10) },
    "Rg" => ElementInfo { number: 111, name: "Roentgenium", mass: 282.0, period: 7, group: Some(11) },
    "Cn" => ElementInfo { number: 112, name: "Copernicium", mass: 285.0, period: 7, group: Some(12) },
    "Nh" => ElementInfo { number: 113, name: "Nihonium", mass: 286.0, period: 7, group: Some(13) },
    "Fl" => ElementInfo { number: 114, name: "Flerovium", mass: 289.0, period: 7, group: Some(14) },
    "Mc" => ElementInfo { number: 115, name: "Moscovium", mass: 290.0, period: 7, group: Some(15) },
    "Lv" => ElementInfo { number: 116, name: "Livermorium", mass: 293.0, period: 7, group: Some(16) },
    "Ts" => ElementInfo { number: 117, name: "Tennessine", mass: 294.0, period: 7, group: Some(17) },
    "Og" => ElementInfo { number: 118, name: "Oganesson", mass: 294.0, period: 7, group: Some(18) },
};

/// The periodic table as a token dictionary.
///
/// Built on first use. The value is immutable, pass `&PERIODIC_TABLE` to the
/// segmenter like any other dictionary.
pub static PERIODIC_TABLE: Lazy<TokenDictionary<Element>> = Lazy::new(|| {
    TokenDictionary::build(elements())
        .expect("periodic table symbols are unique and 1-2 letters long")
});

/// All 118 elements, ordered by atomic number.
pub fn elements() -> Vec<Element> {
    let mut rows: Vec<Element> = ELEMENTS
        .entries()
        .map(|(symbol, info)| Element {
            name: info.name.to_string(),
            symbol: symbol.to_string(),
            atomic_number: info.number,
            atomic_mass: info.mass,
            period: info.period,
            group: info.group,
        })
        .collect();
    rows.sort_by_key(|e| e.atomic_number);
    rows
}
