//! Defines the savings type catalog store trait.

use crate::{
    Error,
    models::{DatabaseID, NewSavingsType, SavingsType},
};

/// Handles the savings type catalog: the reference data describing account
/// categories.
///
/// Catalog entries are administrator-managed. The ledger reads them but does
/// not enforce their contribution bounds.
pub trait SavingsTypeStore {
    /// Add a new savings type to the catalog.
    fn create(&mut self, new_savings_type: NewSavingsType) -> Result<SavingsType, Error>;

    /// Get a savings type by its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a savings type.
    fn get(&self, id: DatabaseID) -> Result<SavingsType, Error>;

    /// Get all savings types in the catalog.
    fn get_all(&self) -> Result<Vec<SavingsType>, Error>;

    /// Replace the stored fields of an existing savings type.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `savings_type.id` does not refer to a
    /// savings type.
    fn update(&mut self, savings_type: &SavingsType) -> Result<SavingsType, Error>;

    /// Delete a savings type from the catalog.
    ///
    /// Balance and deposit rows referencing the type are cascade-deleted
    /// with it.
    ///
    /// # Errors
    /// - [Error::ReferentialIntegrity] if withdrawal records reference the
    ///   type; nothing is deleted in that case.
    /// - [Error::NotFound] if `id` does not refer to a savings type.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;
}
