use super::chain::Chain;
use super::residue::Residue;
use super::types::ResidueCategory;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    chains: Vec<Chain>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_chain(&mut self, chain: Chain) {
        debug_assert!(
            self.chain(&chain.id).is_none(),
            "Attempted to add a duplicate chain ID '{}'",
            chain.id
        );
        self.chains.push(chain);
    }

    pub fn chain(&self, id: &str) -> Option<&Chain> {
        self.chains.iter().find(|c| c.id == id)
    }

    pub fn chain_mut(&mut self, id: &str) -> Option<&mut Chain> {
        self.chains.iter_mut().find(|c| c.id == id)
    }

    /// Mutable access to the chain with the given id, creating it at the end
    /// of the chain list when absent.
    pub fn chain_mut_or_insert(&mut self, id: &str) -> &mut Chain {
        let index = match self.chains.iter().position(|c| c.id == id) {
            Some(index) => index,
            None => {
                self.chains.push(Chain::new(id));
                self.chains.len() - 1
            }
        };
        &mut self.chains[index]
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn residue_count(&self) -> usize {
        self.chains.iter().map(|c| c.residue_count()).sum()
    }

    pub fn atom_count(&self) -> usize {
        self.chains.iter().map(|c| c.iter_atoms().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn sort_chains_by_id(&mut self) {
        self.chains.sort_by(|a, b| a.id.cmp(&b.id));
    }

    pub fn prune_empty_chains(&mut self) {
        self.chains.retain(|c| !c.is_empty());
    }

    pub fn iter_chains(&self) -> std::slice::Iter<'_, Chain> {
        self.chains.iter()
    }

    pub fn iter_chains_mut(&mut self) -> std::slice::IterMut<'_, Chain> {
        self.chains.iter_mut()
    }

    pub fn iter_atoms(&self) -> impl Iterator<Item = &super::atom::Atom> {
        self.chains.iter().flat_map(|c| c.iter_atoms())
    }

    pub fn iter_residues(&self) -> impl Iterator<Item = &Residue> {
        self.chains.iter().flat_map(|c| c.iter_residues())
    }

    pub fn iter_residues_with_chain(&self) -> impl Iterator<Item = (&Chain, &Residue)> {
        self.chains
            .iter()
            .flat_map(|chain| chain.iter_residues().map(move |res| (chain, res)))
    }

    /// Chain identifiers that carry at least one residue of the given category,
    /// in file order.
    pub fn chains_with_category(&self, category: ResidueCategory) -> Vec<&str> {
        self.chains
            .iter()
            .filter(|c| c.has_category(category))
            .map(|c| c.id.as_str())
            .collect()
    }

    /// One-letter amino-acid sequence of a chain's standard residues in file
    /// order. Residues without a one-letter code (waters, ligands) are skipped.
    pub fn chain_sequence(&self, chain_id: &str) -> Option<String> {
        self.chain(chain_id).map(|chain| {
            chain
                .iter_category(ResidueCategory::Standard)
                .filter_map(|res| res.one_letter())
                .collect()
        })
    }

    /// Sequence of the lexicographically smallest chain that has standard
    /// residues, the same default the cleanup operation selects.
    pub fn primary_sequence(&self) -> Option<String> {
        let mut ids = self.chains_with_category(ResidueCategory::Standard);
        ids.sort_unstable();
        ids.first().and_then(|id| self.chain_sequence(id))
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Structure {{ chains: {}, residues: {}, atoms: {} }}",
            self.chain_count(),
            self.residue_count(),
            self.atom_count()
        )
    }
}

impl FromIterator<Chain> for Structure {
    fn from_iter<T: IntoIterator<Item = Chain>>(iter: T) -> Self {
        Self {
            chains: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::types::{Element, Point};

    fn residue_with_atom(id: i32, name: &str, category: ResidueCategory) -> Residue {
        let mut residue = Residue::new(id, name, category);
        residue.add_atom(Atom::new("X", Element::C, Point::new(0.0, 0.0, 0.0)));
        residue
    }

    #[test]
    fn structure_new_creates_empty_structure() {
        let structure = Structure::new();

        assert!(structure.is_empty());
        assert_eq!(structure.chain_count(), 0);
        assert_eq!(structure.residue_count(), 0);
        assert_eq!(structure.atom_count(), 0);
    }

    #[test]
    fn structure_add_chain_and_lookup() {
        let mut structure = Structure::new();
        structure.add_chain(Chain::new("A"));

        assert_eq!(structure.chain_count(), 1);
        assert!(structure.chain("A").is_some());
        assert!(structure.chain("B").is_none());
    }

    #[test]
    fn structure_chain_mut_or_insert_creates_once() {
        let mut structure = Structure::new();

        structure.chain_mut_or_insert("A").add_residue(residue_with_atom(
            1,
            "ALA",
            ResidueCategory::Standard,
        ));
        structure.chain_mut_or_insert("A").add_residue(residue_with_atom(
            2,
            "GLY",
            ResidueCategory::Standard,
        ));

        assert_eq!(structure.chain_count(), 1);
        assert_eq!(structure.chain("A").unwrap().residue_count(), 2);
    }

    #[test]
    fn structure_sort_chains_by_id_sorts_correctly() {
        let mut structure = Structure::new();
        structure.add_chain(Chain::new("C"));
        structure.add_chain(Chain::new("A"));
        structure.add_chain(Chain::new("B"));

        structure.sort_chains_by_id();

        let ids: Vec<&str> = structure.iter_chains().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn structure_prune_empty_chains_drops_empties() {
        let mut structure = Structure::new();
        structure.add_chain(Chain::new("A"));
        let mut chain_b = Chain::new("B");
        chain_b.add_residue(residue_with_atom(1, "ALA", ResidueCategory::Standard));
        structure.add_chain(chain_b);

        structure.prune_empty_chains();

        assert!(structure.chain("A").is_none());
        assert!(structure.chain("B").is_some());
    }

    #[test]
    fn structure_chains_with_category_filters() {
        let mut structure = Structure::new();
        let mut chain_a = Chain::new("A");
        chain_a.add_residue(residue_with_atom(1, "ALA", ResidueCategory::Standard));
        let mut chain_b = Chain::new("B");
        chain_b.add_residue(residue_with_atom(2, "HEM", ResidueCategory::Hetero));
        structure.add_chain(chain_a);
        structure.add_chain(chain_b);

        assert_eq!(structure.chains_with_category(ResidueCategory::Standard), vec!["A"]);
        assert_eq!(structure.chains_with_category(ResidueCategory::Hetero), vec!["B"]);
    }

    #[test]
    fn structure_chain_sequence_extracts_one_letter_codes() {
        let mut structure = Structure::new();
        let mut chain = Chain::new("A");
        chain.add_residue(residue_with_atom(1, "MET", ResidueCategory::Standard));
        chain.add_residue(residue_with_atom(2, "LYS", ResidueCategory::Standard));
        chain.add_residue(residue_with_atom(3, "VAL", ResidueCategory::Standard));
        chain.add_residue(residue_with_atom(4, "HEM", ResidueCategory::Hetero));
        structure.add_chain(chain);

        assert_eq!(structure.chain_sequence("A").unwrap(), "MKV");
        assert!(structure.chain_sequence("Z").is_none());
    }

    #[test]
    fn structure_primary_sequence_uses_smallest_standard_chain() {
        let mut structure = Structure::new();
        let mut chain_b = Chain::new("B");
        chain_b.add_residue(residue_with_atom(1, "GLY", ResidueCategory::Standard));
        let mut chain_a = Chain::new("A");
        chain_a.add_residue(residue_with_atom(1, "ALA", ResidueCategory::Standard));
        structure.add_chain(chain_b);
        structure.add_chain(chain_a);

        assert_eq!(structure.primary_sequence().unwrap(), "A");
    }

    #[test]
    fn structure_display_formats_correctly() {
        let mut structure = Structure::new();
        let mut chain = Chain::new("A");
        chain.add_residue(residue_with_atom(1, "ALA", ResidueCategory::Standard));
        structure.add_chain(chain);

        assert_eq!(
            format!("{}", structure),
            "Structure { chains: 1, residues: 1, atoms: 1 }"
        );
    }

    #[test]
    fn structure_from_iterator_collects_chains() {
        let chains = vec![Chain::new("A"), Chain::new("B")];
        let structure: Structure = chains.into_iter().collect();

        assert_eq!(structure.chain_count(), 2);
    }
}
