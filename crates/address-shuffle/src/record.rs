//! Record, dataset, and city types.
//!
//! A [`Dataset`] is an ordered sequence of [`Record`]s. Position is the only
//! thing tying a name to its address, so reassignment works by permuting the
//! address column against the fixed name column.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single (name, address) pair.
///
/// Serializes with the CSV column names `Name` and `Address`.
///
/// # Example
///
/// ```
/// use address_shuffle::Record;
///
/// let record = Record::new("Ada Lovelace", "12 Elm Street\nParis, TX 75460");
/// assert_eq!(record.name, "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Free-form person name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Free-form postal address.
    #[serde(rename = "Address")]
    pub address: String,
}

impl Record {
    /// Builds a record from a name and an address.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// An ordered sequence of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wraps records in their existing order.
    #[must_use]
    pub const fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns the records in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the dataset holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Clones the address column in record order.
    #[must_use]
    pub fn addresses(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.address.clone())
            .collect()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::from_records(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl IntoIterator for Dataset {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A non-empty target city.
///
/// # Example
///
/// ```
/// use address_shuffle::City;
///
/// let city = City::new("Paris").expect("valid city");
/// assert!(city.is_in("1 Rue de Rivoli, PARIS"));
/// assert!(!city.is_in("1 Main Street, Lyon"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City(String);

impl City {
    /// Validates and wraps a city name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCity`] when the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let owned = name.into();
        if owned.trim().is_empty() {
            return Err(ValidationError::EmptyCity);
        }
        Ok(Self(owned))
    }

    /// Returns the city name as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the address contains the city, ignoring case.
    #[must_use]
    pub fn is_in(&self, address: &str) -> bool {
        address.to_lowercase().contains(&self.0.to_lowercase())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn city_rejects_blank_names(#[case] name: &str) {
        assert_eq!(City::new(name), Err(ValidationError::EmptyCity));
    }

    #[rstest]
    #[case("Paris", "10 Downing Street\nparis, TX 75460", true)]
    #[case("paris", "10 Downing Street\nPARIS, TX 75460", true)]
    #[case("New York", "5 Elm Road\nnew york, NY 10001", true)]
    #[case("Paris", "10 Downing Street\nLondon, KY 40741", false)]
    fn city_containment_ignores_case(
        #[case] name: &str,
        #[case] address: &str,
        #[case] expected: bool,
    ) {
        let city = City::new(name).expect("valid city");
        assert_eq!(city.is_in(address), expected);
    }

    #[test]
    fn addresses_follow_record_order() {
        let dataset = Dataset::from(vec![
            Record::new("A", "first"),
            Record::new("B", "second"),
            Record::new("C", "third"),
        ]);

        assert_eq!(dataset.addresses(), ["first", "second", "third"]);
    }

    #[test]
    fn dataset_collects_from_iterator() {
        let dataset: Dataset = ["x", "y"]
            .into_iter()
            .map(|name| Record::new(name, "somewhere"))
            .collect();

        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
        assert!(Dataset::default().is_empty());
    }
}
