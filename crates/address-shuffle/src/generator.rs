//! Synthetic record generation.
//!
//! Names and addresses come from `fake`'s English fakers driven by a caller
//! supplied RNG, so the same seeded handle always produces the same dataset.

use std::num::NonZeroUsize;

use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::name::raw::Name;
use fake::locales::EN;
use rand::Rng;

use crate::record::{City, Dataset, Record};

/// Upper bound on records reserved up front; larger datasets grow as they fill.
const MAX_PREALLOCATED_RECORDS: usize = 1024;

/// Generates `num_records` synthetic records for `city`.
///
/// Each address is a two-line US-style postal address. When the generated
/// text does not already mention the city (ignoring case), `", {city}"` is
/// appended, so every address in the result contains the city. Names and
/// addresses may repeat.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use address_shuffle::{City, generate_records};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let city = City::new("Paris").expect("valid city");
/// let count = NonZeroUsize::new(5).expect("non-zero");
///
/// let first = generate_records(&mut ChaCha8Rng::seed_from_u64(7), count, &city);
/// let second = generate_records(&mut ChaCha8Rng::seed_from_u64(7), count, &city);
///
/// assert_eq!(first.len(), 5);
/// // Same seed produces identical records
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn generate_records<R>(rng: &mut R, num_records: NonZeroUsize, city: &City) -> Dataset
where
    R: Rng + ?Sized,
{
    let mut records = Vec::with_capacity(capacity_hint(num_records));
    for _ in 0..num_records.get() {
        records.push(generate_record(rng, city));
    }
    Dataset::from_records(records)
}

/// Capacity to reserve for `num_records`, capped so a huge count cannot
/// request an allocation before any record exists.
const fn capacity_hint(num_records: NonZeroUsize) -> usize {
    let requested = num_records.get();
    if requested < MAX_PREALLOCATED_RECORDS {
        requested
    } else {
        MAX_PREALLOCATED_RECORDS
    }
}

fn generate_record<R>(rng: &mut R, city: &City) -> Record
where
    R: Rng + ?Sized,
{
    let name: String = Name(EN).fake_with_rng(rng);
    let address = anchor_to_city(generate_address(rng), city);
    Record { name, address }
}

/// Builds `"{number} {street}\n{town}, {state} {zip}"`.
fn generate_address<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let number: String = BuildingNumber(EN).fake_with_rng(rng);
    let street: String = StreetName(EN).fake_with_rng(rng);
    let town: String = CityName(EN).fake_with_rng(rng);
    let state: String = StateAbbr(EN).fake_with_rng(rng);
    let zip: String = ZipCode(EN).fake_with_rng(rng);
    format!("{number} {street}\n{town}, {state} {zip}")
}

/// Appends the city unless the address already mentions it.
fn anchor_to_city(mut address: String, city: &City) -> String {
    if !city.is_in(&address) {
        address.push_str(", ");
        address.push_str(city.as_str());
    }
    address
}
