//! Random sample contacts to seed a fresh session with.

use crate::model::{ContactFields, Field};
use crate::store::ContactStore;
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

pub const FIRST_NAMES: &[&str] = &[
    "Peter", "Alice", "Joshua", "Mike", "Olivia", "Nina", "Alex", "Rita", "Dan", "Umberto",
    "Henrik", "Rene", "Lisa", "Marge",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith",
    "Gordon",
    "Simpson",
    "Brown",
    "Clavel",
    "Simons",
    "Verne",
    "Scott",
    "Allison",
    "Gates",
    "Rowling",
    "Barks",
    "Ross",
    "Schneider",
    "Tate",
];

/// Generates `count` contacts with random first/last names and every other
/// field empty.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ContactFields> {
    (0..count)
        .map(|_| {
            let first = FIRST_NAMES.choose(rng).copied().unwrap_or_default();
            let last = LAST_NAMES.choose(rng).copied().unwrap_or_default();
            ContactFields::new()
                .with(Field::FirstName, first)
                .with(Field::LastName, last)
        })
        .collect()
}

/// Appends `count` generated contacts to the store, in generation order.
pub fn seed<S: ContactStore, R: Rng + ?Sized>(store: &mut S, rng: &mut R, count: usize) {
    for fields in generate(rng, count) {
        store.push(fields);
    }
    tracing::debug!(count, total = store.len(), "store seeded");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_requested_count_from_name_lists() {
        let mut rng = StdRng::seed_from_u64(7);
        let contacts = generate(&mut rng, 50);

        assert_eq!(contacts.len(), 50);
        for fields in &contacts {
            assert!(FIRST_NAMES.contains(&fields[Field::FirstName].as_str()));
            assert!(LAST_NAMES.contains(&fields[Field::LastName].as_str()));
            assert_eq!(fields[Field::Company], "");
            assert_eq!(fields[Field::WorkEmail], "");
        }
    }

    #[test]
    fn same_seed_same_names() {
        let a = generate(&mut StdRng::seed_from_u64(42), 20);
        let b = generate(&mut StdRng::seed_from_u64(42), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn seed_appends_to_store() {
        let mut store = InMemoryStore::new();
        seed(&mut store, &mut StdRng::seed_from_u64(1), 10);
        seed(&mut store, &mut StdRng::seed_from_u64(1), 5);
        assert_eq!(store.len(), 15);
    }
}
