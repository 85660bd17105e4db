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

//! `order-store` is a small data access layer for order records backed by a single XML file.
//!
//! An order record consists of an order number (a unique string key), an order date, and a vendor
//! ID. Records are persisted in one XML file on the local file system; the whole file is read into
//! memory on first access and rewritten on every mutation.
//!
//! This crate provides the following types:
//! - [`OrderRecord`] is the persisted entity, a plain value type.
//! - [`OrderRecordDao`] is the trait defining the CRUD operations over order records.
//! - [`XmlDao`] is the XML-file-backed implementation of [`OrderRecordDao`].
//! - [`XmlConfig`] opens an [`XmlDao`] via the [`OpenDao`] trait.
//!
//! # Examples
//! ```
//! use chrono::NaiveDate;
//! use order_store::store::{OpenDao, OrderRecordDao, XmlConfig};
//! use order_store::OrderRecord;
//!
//! fn main() -> order_store::Result<()> {
//!     let directory = tempfile::tempdir()?;
//!     let path = directory.path().join("order_records.xml");
//!
//!     // The backing file must exist before the store can be read.
//!     std::fs::write(&path, "<recordList/>")?;
//!
//!     let dao = XmlConfig { path }.open()?;
//!
//!     let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!     dao.create(OrderRecord::new("A100", date, 42))?;
//!
//!     let record = dao.get("A100")?.unwrap();
//!     assert_eq!(record.vendor_id, 42);
//!
//!     Ok(())
//! }
//! ```
//!
//! [`OrderRecord`]: crate::OrderRecord
//! [`OrderRecordDao`]: crate::store::OrderRecordDao
//! [`XmlDao`]: crate::store::XmlDao
//! [`XmlConfig`]: crate::store::XmlConfig
//! [`OpenDao`]: crate::store::OpenDao

pub use error::{Error, MismatchField, Result};
pub use record::OrderRecord;

mod error;
mod record;
pub mod store;
