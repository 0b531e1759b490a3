//! Interned identifiers: `Symbol` equality is identity.
//!
//! Ported in spirit from the teacher's `RegistryV1` (bijective forward/
//! reverse maps keyed on a small `Copy` handle), but process-global: a
//! `Symbol` must compare equal across every `Container`/`Model` in a run,
//! not just within one registry epoch.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, OnceLock};

struct Interner {
    forward: Vec<&'static str>,
    reverse: HashMap<&'static str, u32>,
}

fn interner() -> &'static Mutex<Interner> {
    static INTERNER: OnceLock<Mutex<Interner>> = OnceLock::new();
    INTERNER.get_or_init(|| {
        Mutex::new(Interner {
            forward: Vec::new(),
            reverse: HashMap::new(),
        })
    })
}

/// An interned identifier used for tag names, concept names, counter names,
/// slot names, trap labels, and notification labels.
///
/// Two `Symbol`s are equal iff they were interned from the same string;
/// comparison is a single integer compare, never a string compare.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Intern `name`, returning the same handle for every prior and
    /// subsequent call with an equal string.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut table = interner().lock().expect("symbol interner poisoned");
        if let Some(&id) = table.reverse.get(name) {
            return Self(id);
        }
        let owned: &'static str = Box::leak(name.to_owned().into_boxed_str());
        let id = u32::try_from(table.forward.len()).expect("symbol table overflow");
        table.forward.push(owned);
        table.reverse.insert(owned, id);
        Self(id)
    }

    /// The original string this symbol was interned from.
    #[must_use]
    pub fn name(self) -> &'static str {
        let table = interner().lock().expect("symbol interner poisoned");
        table.forward[self.0 as usize]
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.name())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}
