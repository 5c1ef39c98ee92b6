//! Named variable cells.
//!
//! Names are interned to [`CellId`] handles; values live in a flat vector
//! indexed by handle. Cells are never removed.

use std::collections::HashMap;

use crate::config::AssignPolicy;
use crate::error::RegistryError;
use crate::token::CellId;

/// Constants every registry starts with. They are ordinary cells and can be
/// reassigned like any variable.
pub const BUILTINS: [(&str, f64); 7] = [
    ("pi", std::f64::consts::PI),
    ("e", std::f64::consts::E),
    ("inf", f64::INFINITY),
    ("NaN", f64::NAN),
    // Smallest positive subnormal.
    ("Epsilon", f64::from_bits(1)),
    ("MinValue", f64::MIN),
    ("MaxValue", f64::MAX),
];

#[derive(Debug, Clone)]
struct Cell {
    name: String,
    value: f64,
}

#[derive(Debug, Clone)]
pub struct Registry {
    ids: HashMap<String, CellId>,
    cells: Vec<Cell>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// A registry seeded with [`BUILTINS`].
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (name, value) in BUILTINS {
            let id = registry.declare_or_get(name);
            registry.set_value(id, value);
        }
        registry
    }

    pub fn empty() -> Self {
        Self {
            ids: HashMap::new(),
            cells: Vec::new(),
        }
    }

    /// Returns the cell for `name`, creating it with value NaN if needed.
    pub fn declare_or_get(&mut self, name: &str) -> CellId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = CellId::new(self.cells.len() as u32);
        self.cells.push(Cell {
            name: name.to_string(),
            value: f64::NAN,
        });
        self.ids.insert(name.to_string(), id);
        id
    }

    /// Updates an existing cell. Unknown names are ignored; the return value
    /// says whether anything was written.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        match self.ids.get(name) {
            Some(&id) => {
                self.set_value(id, value);
                true
            }
            None => false,
        }
    }

    /// `set` with an explicit policy for names never declared.
    pub fn assign(&mut self, name: &str, value: f64, policy: AssignPolicy) -> bool {
        match policy {
            AssignPolicy::IgnoreUnknown => self.set(name, value),
            AssignPolicy::DeclareUnknown => {
                let id = self.declare_or_get(name);
                self.set_value(id, value);
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<f64, RegistryError> {
        self.lookup(name)
            .map(|id| self.value(id))
            .ok_or_else(|| RegistryError::UnknownVariable {
                name: name.to_string(),
            })
    }

    pub fn lookup(&self, name: &str) -> Option<CellId> {
        self.ids.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Current value of a cell. Handles from another registry read as NaN.
    pub fn value(&self, id: CellId) -> f64 {
        self.cells.get(id.index()).map_or(f64::NAN, |cell| cell.value)
    }

    pub fn set_value(&mut self, id: CellId, value: f64) {
        if let Some(cell) = self.cells.get_mut(id.index()) {
            cell.value = value;
        }
    }

    pub fn name(&self, id: CellId) -> Option<&str> {
        self.cells.get(id.index()).map(|cell| cell.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.cells.iter().map(|cell| (cell.name.as_str(), cell.value))
    }
}
