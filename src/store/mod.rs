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

//! Data access objects for order records.
//!
//! This module provides the [`OrderRecordDao`] trait, which defines the CRUD operations over
//! order records, and its backing implementations. A DAO loads the full record set from its
//! backing file into memory the first time it is used and rewrites the entire file on every
//! mutating operation.
//!
//! For each DAO implementation, there is a corresponding config type which provides the necessary
//! configuration to open it. Config types implement [`OpenDao`]. [`XmlDao`], opened via
//! [`XmlConfig`], stores records in a single XML file and is currently the only implementation;
//! further backing formats (a CSV file, a relational database) would be added as additional
//! [`OpenDao`] implementations.
//!
//! [`OrderRecordDao`]: crate::store::OrderRecordDao
//! [`OpenDao`]: crate::store::OpenDao
//! [`XmlDao`]: crate::store::XmlDao
//! [`XmlConfig`]: crate::store::XmlConfig

pub use self::dao::OrderRecordDao;
pub use self::open_dao::OpenDao;
pub use self::xml_dao::{XmlConfig, XmlDao, DEFAULT_FILE_NAME};

mod dao;
mod open_dao;
mod xml;
mod xml_dao;
