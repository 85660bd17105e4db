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

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tempfile::NamedTempFile;
use tracing::debug;

use super::dao::OrderRecordDao;
use super::open_dao::OpenDao;
use super::xml;
use crate::error::MismatchField;
use crate::record::OrderRecord;
use crate::Error;

/// The default file name of the backing record file.
pub const DEFAULT_FILE_NAME: &str = "order_records.xml";

/// The configuration for opening an [`XmlDao`].
///
/// [`XmlDao`]: crate::store::XmlDao
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct XmlConfig {
    /// The path of the backing record file.
    pub path: PathBuf,
}

impl Default for XmlConfig {
    /// The default configuration uses [`DEFAULT_FILE_NAME`] relative to the working directory.
    ///
    /// [`DEFAULT_FILE_NAME`]: crate::store::DEFAULT_FILE_NAME
    fn default() -> Self {
        XmlConfig {
            path: PathBuf::from(DEFAULT_FILE_NAME),
        }
    }
}

impl OpenDao for XmlConfig {
    type Dao = XmlDao;

    fn open(&self) -> crate::Result<Self::Dao> {
        Ok(XmlDao {
            path: self.path.clone(),
            records: Mutex::new(None),
        })
    }
}

/// An `OrderRecordDao` which stores records in a single XML file.
///
/// The backing file is read in full the first time the store is touched and the resulting record
/// set is cached in memory for the life of this value. Every mutating operation rewrites the
/// whole file, so memory and disk stay in sync outside of the mutating call itself. Each
/// operation holds a lock on the record set for its full duration, so a `XmlDao` can be shared
/// between threads.
///
/// You can use [`XmlConfig`] to open a data access object of this type.
///
/// [`XmlConfig`]: crate::store::XmlConfig
#[derive(Debug)]
pub struct XmlDao {
    /// The path of the backing record file.
    path: PathBuf,

    /// The in-memory record set, or `None` if the backing file has not been read yet.
    records: Mutex<Option<Vec<OrderRecord>>>,
}

impl XmlDao {
    /// Read the full record set from the backing file.
    fn read_from_file(&self) -> crate::Result<Vec<OrderRecord>> {
        let text = fs::read_to_string(&self.path)?;
        let records = xml::parse_records(&text)?;
        debug!(
            path = %self.path.display(),
            count = records.len(),
            "loaded order records from the backing file"
        );
        Ok(records)
    }

    /// Serialize `records` and replace the backing file with the result.
    ///
    /// The document is written to a staging file in the backing file's directory and then moved
    /// over the backing path, so a crash mid-write cannot leave a half-written record file.
    fn save_to_file(&self, records: &[OrderRecord]) -> crate::Result<()> {
        let document = xml::serialize_records(records)?;

        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staging_file = NamedTempFile::new_in(directory)?;
        staging_file.write_all(&document)?;
        staging_file
            .persist(&self.path)
            .map_err(|error| Error::Io(error.error))?;

        debug!(
            path = %self.path.display(),
            count = records.len(),
            "rewrote the backing file"
        );
        Ok(())
    }

    /// Run `operation` against the in-memory record set, loading it from the backing file first
    /// if this store has not been touched yet.
    ///
    /// The record set stays locked for the duration of `operation`, making each public operation
    /// a critical section.
    fn with_records<T>(
        &self,
        operation: impl FnOnce(&mut Vec<OrderRecord>) -> crate::Result<T>,
    ) -> crate::Result<T> {
        let mut guard = self.records.lock();
        if guard.is_none() {
            *guard = Some(self.read_from_file()?);
        }
        let records = guard.as_mut().expect("the record set was just loaded");
        operation(records)
    }
}

impl OrderRecordDao for XmlDao {
    fn create(&self, record: OrderRecord) -> crate::Result<()> {
        self.with_records(|records| {
            if records
                .iter()
                .any(|existing| existing.order_number == record.order_number)
            {
                return Err(Error::AlreadyExists(record.order_number.clone()));
            }
            records.push(record);
            self.save_to_file(records)
        })
    }

    fn get(&self, order_number: &str) -> crate::Result<Option<OrderRecord>> {
        self.with_records(|records| {
            Ok(records
                .iter()
                .find(|record| record.order_number == order_number)
                .cloned())
        })
    }

    fn get_all(&self) -> crate::Result<Vec<OrderRecord>> {
        self.with_records(|records| Ok(records.clone()))
    }

    fn update(&self, original: &OrderRecord, updated: &OrderRecord) -> crate::Result<()> {
        self.with_records(|records| {
            let existing = records
                .iter_mut()
                .find(|record| record.order_number == original.order_number)
                .ok_or_else(|| Error::NotFound(original.order_number.clone()))?;

            if existing.order_date != original.order_date {
                return Err(Error::Mismatch(MismatchField::OrderDate));
            }
            if existing.vendor_id != original.vendor_id {
                return Err(Error::Mismatch(MismatchField::VendorId));
            }

            existing.order_date = updated.order_date;
            existing.vendor_id = updated.vendor_id;
            self.save_to_file(records)
        })
    }

    fn delete(&self, order_number: &str) -> crate::Result<()> {
        self.with_records(|records| {
            if let Some(position) = records
                .iter()
                .position(|record| record.order_number == order_number)
            {
                records.remove(position);
            }
            // A missing record is not an error, and the file is rewritten either way.
            self.save_to_file(records)
        })
    }
}
