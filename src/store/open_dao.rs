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

use crate::store::OrderRecordDao;

/// A value which can be used to open an `OrderRecordDao`.
///
/// This trait is the seam for selecting a backing format: each DAO implementation has a config
/// type implementing `OpenDao`, and callers that don't care about the format can use
/// [`XmlConfig::default`]. There is currently only the XML-backed implementation.
///
/// [`XmlConfig::default`]: crate::store::XmlConfig
pub trait OpenDao {
    /// The type of `OrderRecordDao` which this value can be used to open.
    type Dao: OrderRecordDao + 'static;

    /// Open a data access object of type `Dao`.
    ///
    /// Opening does not touch the backing store; the store is read lazily on the first operation.
    ///
    /// # Errors
    /// - `Error::Io`: An I/O error occurred.
    fn open(&self) -> crate::Result<Self::Dao>;
}
