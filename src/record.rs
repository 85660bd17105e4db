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

use chrono::NaiveDate;

/// An order record in the record store.
///
/// This is a plain value type. Read operations on the store return owned `OrderRecord` values, so
/// mutating a returned record never affects the store's internal state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderRecord {
    /// The order number which uniquely identifies this record.
    ///
    /// The order number is immutable once the record has been created; updates cannot change it.
    pub order_number: String,

    /// The calendar date the order was placed. There is no time component.
    pub order_date: NaiveDate,

    /// The ID of the vendor the order was placed with.
    pub vendor_id: i32,
}

impl OrderRecord {
    /// Create a new `OrderRecord` with the given field values.
    pub fn new(order_number: impl Into<String>, order_date: NaiveDate, vendor_id: i32) -> Self {
        OrderRecord {
            order_number: order_number.into(),
            order_date,
            vendor_id,
        }
    }
}
