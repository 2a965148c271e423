use super::residue::Residue;
use super::types::ResidueCategory;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub id: String,
    residues: Vec<Residue>,
}

impl Chain {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            residues: Vec::new(),
        }
    }

    /// Appends a residue to the chain.
    ///
    /// # Arguments
    ///
    /// * `residue` - Residue to append; its `(id, icode)` pair must be unique
    ///   within the chain.
    pub fn add_residue(&mut self, residue: Residue) {
        debug_assert!(
            self.residue_at(residue.id, residue.icode).is_none(),
            "Attempted to add a duplicate residue ID '{}{}' to chain '{}'",
            residue.id,
            residue.icode.unwrap_or(' '),
            self.id
        );
        self.residues.push(residue);
    }

    /// Looks up a residue by sequence number alone.
    ///
    /// When insertion codes make the number ambiguous, the first residue in
    /// file order wins; use [`Chain::residue_at`] to address one exactly.
    ///
    /// # Arguments
    ///
    /// * `id` - Residue sequence number.
    ///
    /// # Returns
    ///
    /// The first matching residue, or `None`.
    pub fn residue(&self, id: i32) -> Option<&Residue> {
        self.residues.iter().find(|r| r.id == id)
    }

    pub fn residue_mut(&mut self, id: i32) -> Option<&mut Residue> {
        self.residues.iter_mut().find(|r| r.id == id)
    }

    /// Looks up a residue by its full `(id, icode)` identity.
    ///
    /// # Arguments
    ///
    /// * `id` - Residue sequence number.
    /// * `icode` - Insertion code, or `None` for an un-inserted residue.
    ///
    /// # Returns
    ///
    /// The matching residue, or `None` if no residue carries that identity.
    pub fn residue_at(&self, id: i32, icode: Option<char>) -> Option<&Residue> {
        self.residues
            .iter()
            .find(|r| r.id == id && r.icode == icode)
    }

    pub fn residue_at_mut(&mut self, id: i32, icode: Option<char>) -> Option<&mut Residue> {
        self.residues
            .iter_mut()
            .find(|r| r.id == id && r.icode == icode)
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Retains only residues for which the predicate returns `true`.
    pub fn retain_residues<F>(&mut self, predicate: F)
    where
        F: FnMut(&Residue) -> bool,
    {
        self.residues.retain(predicate);
    }

    pub fn iter_residues(&self) -> std::slice::Iter<'_, Residue> {
        self.residues.iter()
    }

    pub fn iter_residues_mut(&mut self) -> std::slice::IterMut<'_, Residue> {
        self.residues.iter_mut()
    }

    /// Iterates residues of a single category in file order.
    pub fn iter_category(&self, category: ResidueCategory) -> impl Iterator<Item = &Residue> {
        self.residues.iter().filter(move |r| r.category == category)
    }

    pub fn has_category(&self, category: ResidueCategory) -> bool {
        self.residues.iter().any(|r| r.category == category)
    }

    pub fn iter_atoms(&self) -> impl Iterator<Item = &super::atom::Atom> {
        self.residues.iter().flat_map(|r| r.iter_atoms())
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chain {{ id: \"{}\", residues: {} }}",
            self.id,
            self.residue_count()
        )
    }
}
