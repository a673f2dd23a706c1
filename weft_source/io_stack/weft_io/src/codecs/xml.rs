use weft_markup::{Element, WriteOptions, parse_markup, write_element};

use super::Codec;
use crate::error::CodecError;
use crate::record::{Record, assign_field};

/// `<ArrayOf{Type}><{Type}><field>value</field>...</{Type}>...</ArrayOf{Type}>`
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlCodec;

fn array_name<R: Record>() -> String {
    format!("ArrayOf{}", R::TYPE_NAME)
}

impl<R: Record> Codec<Vec<R>> for XmlCodec {
    fn encode(&self, value: &Vec<R>) -> Result<Vec<u8>, CodecError> {
        let mut root = Element::new(array_name::<R>());
        for record in value {
            let mut item = Element::new(R::TYPE_NAME);
            for field in R::FIELDS {
                item = item.with_child(Element::new(field.name).with_text((field.get)(record)));
            }
            root = root.with_child(item);
        }

        let options = WriteOptions {
            prolog: true,
            ..WriteOptions::default()
        };
        Ok(write_element(&root, &options).into_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<R>, CodecError> {
        let text = String::from_utf8(bytes.to_vec())?;
        let root = parse_markup(&text)?
            .into_root()
            .ok_or(weft_markup::MarkupError::NoRoot)?;

        let expected = array_name::<R>();
        if root.name != expected {
            return Err(CodecError::WrongRoot {
                expected,
                found: root.name,
            });
        }

        let mut records = Vec::new();
        for (index, item) in root.child_elements().enumerate() {
            if item.name != R::TYPE_NAME {
                log::warn!("{expected}: skipping unexpected element <{}>", item.name);
                continue;
            }

            let mut record = R::default();
            let location = format!("{} #{}", R::TYPE_NAME, index + 1);
            for child in item.child_elements() {
                match R::field(&child.name) {
                    Some(field) => assign_field(&mut record, field, &child.text(), &location),
                    None => log::debug!("{location}: ignoring unknown element <{}>", child.name),
                }
            }
            records.push(record);
        }
        Ok(records)
    }
}
