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

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use order_store::store::{OpenDao, XmlConfig, XmlDao, DEFAULT_FILE_NAME};
use order_store::OrderRecord;

/// The XML document of a store with no records.
pub const EMPTY_STORE: &str = "<recordList/>";

/// Create a date with the given fields.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Open a DAO over a fresh, empty record file in `directory`.
pub fn empty_store(directory: &Path) -> anyhow::Result<XmlDao> {
    store_with_contents(directory, EMPTY_STORE)
}

/// Open a DAO over a record file in `directory` seeded with `contents`.
pub fn store_with_contents(directory: &Path, contents: &str) -> anyhow::Result<XmlDao> {
    let path = directory.join(DEFAULT_FILE_NAME);
    fs::write(&path, contents)?;
    Ok(XmlConfig { path }.open()?)
}

/// Open a second DAO over the record file in `directory`, so that the file is read fresh from
/// disk.
pub fn reopen_store(directory: &Path) -> anyhow::Result<XmlDao> {
    let path = directory.join(DEFAULT_FILE_NAME);
    Ok(XmlConfig { path }.open()?)
}

/// Read the record file in `directory` back as text.
pub fn store_contents(directory: &Path) -> anyhow::Result<String> {
    Ok(fs::read_to_string(directory.join(DEFAULT_FILE_NAME))?)
}

/// The example record used throughout the tests.
pub fn sample_record() -> OrderRecord {
    OrderRecord::new("A100", date(2024, 1, 15), 42)
}
