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

//! The XML codec for the backing record file.
//!
//! The file format is a `<recordList>` root containing one `<record>` element per order record.
//! Each `<record>` carries its order number in an `order-number` attribute and its order date and
//! vendor ID in `<orderDate>` and `<vendorId>` child elements. Unrecognized child elements are
//! ignored when parsing; any other malformation aborts the whole parse.

use anyhow::anyhow;
use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::record::OrderRecord;
use crate::Error;

/// The date format of the `orderDate` element: zero-padded month/day/4-digit-year.
pub(super) const DATE_FORMAT: &str = "%m/%d/%Y";

const ROOT_TAG: &str = "recordList";
const RECORD_TAG: &str = "record";
const ORDER_NUMBER_ATTR: &str = "order-number";
const ORDER_DATE_TAG: &str = "orderDate";
const VENDOR_ID_TAG: &str = "vendorId";

fn parse_error(error: impl Into<anyhow::Error>) -> Error {
    Error::Parse(error.into())
}

/// The child element of a `record` element currently being parsed.
#[derive(Debug, Clone, Copy)]
enum RecordField {
    OrderDate,
    VendorId,
}

/// A `record` element whose child elements have not all been seen yet.
#[derive(Debug)]
struct PartialRecord {
    order_number: String,
    order_date: Option<NaiveDate>,
    vendor_id: Option<i32>,
}

impl PartialRecord {
    fn new(order_number: String) -> Self {
        PartialRecord {
            order_number,
            order_date: None,
            vendor_id: None,
        }
    }

    fn build(self) -> crate::Result<OrderRecord> {
        let PartialRecord {
            order_number,
            order_date,
            vendor_id,
        } = self;
        let order_date = order_date.ok_or_else(|| {
            parse_error(anyhow!(
                "record `{order_number}` is missing its `{ORDER_DATE_TAG}` element"
            ))
        })?;
        let vendor_id = vendor_id.ok_or_else(|| {
            parse_error(anyhow!(
                "record `{order_number}` is missing its `{VENDOR_ID_TAG}` element"
            ))
        })?;
        Ok(OrderRecord {
            order_number,
            order_date,
            vendor_id,
        })
    }
}

/// Extract the required `order-number` attribute from a `record` element.
fn order_number_attr(element: &BytesStart) -> crate::Result<String> {
    for attribute in element.attributes() {
        let attribute = attribute.map_err(parse_error)?;
        if attribute.key.as_ref() == ORDER_NUMBER_ATTR.as_bytes() {
            return Ok(attribute.unescape_value().map_err(parse_error)?.into_owned());
        }
    }
    Err(parse_error(anyhow!(
        "a `{RECORD_TAG}` element is missing its `{ORDER_NUMBER_ATTR}` attribute"
    )))
}

/// Parse the contents of the backing file into a list of records, in document order.
///
/// Any malformation aborts the whole parse; there is no partial result.
pub(super) fn parse_records(text: &str) -> crate::Result<Vec<OrderRecord>> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut current: Option<PartialRecord> = None;
    let mut field: Option<RecordField> = None;

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(element) => match element.name().as_ref() {
                tag if tag == RECORD_TAG.as_bytes() => {
                    current = Some(PartialRecord::new(order_number_attr(&element)?));
                }
                tag if tag == ORDER_DATE_TAG.as_bytes() => field = Some(RecordField::OrderDate),
                tag if tag == VENDOR_ID_TAG.as_bytes() => field = Some(RecordField::VendorId),
                // Unrecognized child elements are ignored.
                _ => field = None,
            },
            Event::Text(text) => {
                if let (Some(record), Some(field)) = (current.as_mut(), field) {
                    let text = text.unescape().map_err(parse_error)?;
                    match field {
                        RecordField::OrderDate => {
                            let date = NaiveDate::parse_from_str(&text, DATE_FORMAT)
                                .map_err(parse_error)?;
                            record.order_date = Some(date);
                        }
                        RecordField::VendorId => {
                            record.vendor_id = Some(text.parse::<i32>().map_err(parse_error)?);
                        }
                    }
                }
            }
            Event::End(element) => {
                if element.name().as_ref() == RECORD_TAG.as_bytes() {
                    let record = current.take().ok_or_else(|| {
                        parse_error(anyhow!("unexpected closing `{RECORD_TAG}` tag"))
                    })?;
                    records.push(record.build()?);
                }
                field = None;
            }
            Event::Empty(element) => {
                // A self-closing record has no child elements and can never be complete.
                if element.name().as_ref() == RECORD_TAG.as_bytes() {
                    PartialRecord::new(order_number_attr(&element)?).build()?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if current.is_some() {
        return Err(parse_error(anyhow!(
            "unexpected end of document inside a `{RECORD_TAG}` element"
        )));
    }

    Ok(records)
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> crate::Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(parse_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(parse_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(parse_error)?;
    Ok(())
}

/// Serialize `records` into a complete XML document, in list order.
pub(super) fn serialize_records(records: &[OrderRecord]) -> crate::Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(parse_error)?;
    writer
        .write_event(Event::Start(BytesStart::new(ROOT_TAG)))
        .map_err(parse_error)?;

    for record in records {
        let mut element = BytesStart::new(RECORD_TAG);
        element.push_attribute((ORDER_NUMBER_ATTR, record.order_number.as_str()));
        writer
            .write_event(Event::Start(element))
            .map_err(parse_error)?;

        let date_text = record.order_date.format(DATE_FORMAT).to_string();
        write_text_element(&mut writer, ORDER_DATE_TAG, &date_text)?;
        write_text_element(&mut writer, VENDOR_ID_TAG, &record.vendor_id.to_string())?;

        writer
            .write_event(Event::End(BytesEnd::new(RECORD_TAG)))
            .map_err(parse_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(ROOT_TAG)))
        .map_err(parse_error)?;

    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn round_trip_preserves_records_in_order() -> anyhow::Result<()> {
        let records = vec![
            OrderRecord::new("A100", date(2024, 1, 15), 42),
            OrderRecord::new("B200", date(2023, 12, 1), 7),
            OrderRecord::new("C300", date(2024, 6, 30), 42),
        ];

        let document = serialize_records(&records)?;
        let parsed = parse_records(std::str::from_utf8(&document)?)?;

        assert_eq!(parsed, records);
        Ok(())
    }

    #[test]
    fn serialized_dates_are_zero_padded() -> anyhow::Result<()> {
        let records = vec![OrderRecord::new("A100", date(2024, 3, 5), 42)];

        let document = String::from_utf8(serialize_records(&records)?)?;

        assert!(document.contains("<orderDate>03/05/2024</orderDate>"));
        assert!(document.contains("<vendorId>42</vendorId>"));
        assert!(document.contains(r#"order-number="A100""#));
        Ok(())
    }

    #[test]
    fn empty_root_parses_to_no_records() -> anyhow::Result<()> {
        assert_eq!(parse_records("<recordList/>")?, Vec::new());
        assert_eq!(parse_records("<recordList></recordList>")?, Vec::new());
        Ok(())
    }

    #[test]
    fn unrecognized_children_are_ignored() -> anyhow::Result<()> {
        let document = r#"
            <recordList>
              <record order-number="A100">
                <orderDate>01/15/2024</orderDate>
                <note>rush delivery</note>
                <vendorId>42</vendorId>
              </record>
            </recordList>
        "#;

        let parsed = parse_records(document)?;

        assert_eq!(parsed, vec![OrderRecord::new("A100", date(2024, 1, 15), 42)]);
        Ok(())
    }

    #[test]
    fn malformed_date_is_a_parse_error() {
        let document = r#"
            <recordList>
              <record order-number="A100">
                <orderDate>2024-01-15</orderDate>
                <vendorId>42</vendorId>
              </record>
            </recordList>
        "#;

        assert!(matches!(parse_records(document), Err(Error::Parse(_))));
    }

    #[test]
    fn malformed_vendor_id_is_a_parse_error() {
        let document = r#"
            <recordList>
              <record order-number="A100">
                <orderDate>01/15/2024</orderDate>
                <vendorId>forty-two</vendorId>
              </record>
            </recordList>
        "#;

        assert!(matches!(parse_records(document), Err(Error::Parse(_))));
    }

    #[test]
    fn missing_order_number_is_a_parse_error() {
        let document = r#"
            <recordList>
              <record>
                <orderDate>01/15/2024</orderDate>
                <vendorId>42</vendorId>
              </record>
            </recordList>
        "#;

        assert!(matches!(parse_records(document), Err(Error::Parse(_))));
    }

    #[test]
    fn record_with_missing_children_is_a_parse_error() {
        let document = r#"
            <recordList>
              <record order-number="A100">
                <vendorId>42</vendorId>
              </record>
            </recordList>
        "#;

        assert!(matches!(parse_records(document), Err(Error::Parse(_))));
    }

    #[test]
    fn unclosed_document_is_a_parse_error() {
        let document = r#"<recordList><record order-number="A100">"#;

        assert!(matches!(parse_records(document), Err(Error::Parse(_))));
    }
}
