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
use std::fmt;
use std::io;
use std::result;

use thiserror::Error as DeriveError;

/// The field of an order record which failed optimistic validation on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchField {
    /// The order date of the record.
    OrderDate,

    /// The vendor ID of the record.
    VendorId,
}

impl fmt::Display for MismatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchField::OrderDate => write!(f, "order date"),
            MismatchField::VendorId => write!(f, "vendor ID"),
        }
    }
}

/// The error type for operations with the record store.
#[derive(Debug, DeriveError)]
pub enum Error {
    /// An order record with this order number already exists.
    #[error("There is already an order record with order number `{0}`.")]
    AlreadyExists(String),

    /// No order record with this order number exists.
    #[error("The original record with order number `{0}` does not exist.")]
    NotFound(String),

    /// The given original record does not match the record stored under its order number.
    #[error("The original record's {0} does not match the record store.")]
    Mismatch(MismatchField),

    /// The backing file could not be parsed or serialized.
    #[error("The record file could not be parsed: {0}")]
    Parse(anyhow::Error),

    /// An I/O error occurred.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// The result type for operations with the record store.
pub type Result<T> = result::Result<T, Error>;
