//! Address reassignment.
//!
//! The address column is permuted uniformly at random and re-paired with the
//! names in their original order. Identity mappings are not excluded: a
//! record may keep its own address, and [`retained_addresses`] reports how
//! many did.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::record::{Dataset, Record};

/// Returns a new dataset whose addresses are a random permutation of the
/// input's addresses, paired with the input's names in order.
///
/// # Example
///
/// ```
/// use address_shuffle::{Dataset, Record, reassign};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let dataset = Dataset::from_records(vec![
///     Record::new("Ada", "1 Elm Street, Paris"),
///     Record::new("Grace", "2 Oak Avenue, Paris"),
/// ]);
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
///
/// let reassigned = reassign(&mut rng, &dataset);
///
/// let mut before = dataset.addresses();
/// let mut after = reassigned.addresses();
/// before.sort();
/// after.sort();
/// assert_eq!(before, after);
/// ```
#[must_use]
pub fn reassign<R>(rng: &mut R, dataset: &Dataset) -> Dataset
where
    R: Rng + ?Sized,
{
    let mut addresses = dataset.addresses();
    addresses.shuffle(rng);

    dataset
        .iter()
        .zip(addresses)
        .map(|(record, address)| Record {
            name: record.name.clone(),
            address,
        })
        .collect()
}

/// Counts positions where the reassigned dataset kept the original address.
///
/// Records are compared by position; extra records in the longer dataset are
/// ignored.
#[must_use]
pub fn retained_addresses(original: &Dataset, reassigned: &Dataset) -> usize {
    original
        .iter()
        .zip(reassigned)
        .filter(|(before, after)| before.address == after.address)
        .count()
}
