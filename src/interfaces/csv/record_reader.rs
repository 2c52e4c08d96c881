use crate::error::{ParamsError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::marker::PhantomData;

/// Reads payment records from a CSV source.
///
/// `T` is the record type, typically `Card` or `BankAccount`. Headers name
/// the record fields; columns not present in the header are left at their
/// defaults.
pub struct RecordReader<R: Read, T> {
    reader: csv::Reader<R>,
    record: PhantomData<T>,
}

impl<R: Read, T: DeserializeOwned> RecordReader<R, T> {
    /// Creates a new `RecordReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self {
            reader,
            record: PhantomData,
        }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    ///
    /// A malformed row yields an error and does not end the iteration.
    pub fn records(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ParamsError::from))
    }
}
