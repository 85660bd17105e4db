/*
 * Copyright 2024-2025 Chase Bennett
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use crate::record::OrderRecord;

/// A data access object for order records.
///
/// A `OrderRecordDao` persistently stores order records uniquely keyed by their order number, in
/// insertion order. Read operations return owned copies of the stored records, so callers cannot
/// mutate the store's internal state by holding on to a returned value.
///
/// Every method may fail with [`Error::Io`] or [`Error::Parse`] if reading or rewriting the
/// backing store fails.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::Parse`]: crate::Error::Parse
pub trait OrderRecordDao {
    /// Add `record` to the store and persist it.
    ///
    /// # Errors
    /// - `Error::AlreadyExists`: A record with the same order number already exists.
    fn create(&self, record: OrderRecord) -> crate::Result<()>;

    /// Return the record with the given `order_number`, or `None` if there is no such record.
    ///
    /// A missing record is not an error.
    fn get(&self, order_number: &str) -> crate::Result<Option<OrderRecord>>;

    /// Return all records in the store, in store order.
    fn get_all(&self) -> crate::Result<Vec<OrderRecord>>;

    /// Replace the order date and vendor ID of the record matching `original` with the values
    /// from `updated`, and persist the change.
    ///
    /// `original` is the caller's believed-current state of the record. It must match the stored
    /// record on order number, order date, and vendor ID, or the update is rejected and the store
    /// is left unchanged. The order number of a record cannot be changed through this method.
    ///
    /// # Errors
    /// - `Error::NotFound`: No record with `original`'s order number exists.
    /// - `Error::Mismatch`: `original`'s order date or vendor ID does not match the stored
    /// record.
    fn update(&self, original: &OrderRecord, updated: &OrderRecord) -> crate::Result<()>;

    /// Remove the record with the given `order_number` if it exists, and persist the result.
    ///
    /// Deleting an order number which is not in the store is not an error; the store is persisted
    /// either way.
    fn delete(&self, order_number: &str) -> crate::Result<()>;
}
