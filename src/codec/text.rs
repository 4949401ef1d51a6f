//! Textual codecs: the code-unit byte sequence in identity order.

use crate::error::{Error, Result};
use crate::region::Region;

use super::raw::{from_bytes, into_bytes};

pub fn from_ascii(text: &str) -> Result<Region> {
    if let Some(character) = text.chars().find(|character| !character.is_ascii()) {
        return Err(Error::NumericRange {
            value: character.to_string(),
            bit_length: 8,
            target: "ASCII",
        });
    }
    Ok(from_bytes(text.as_bytes()))
}

pub fn into_ascii(region: &Region) -> Result<String> {
    let bytes = into_bytes(region)?;
    if let Some(byte) = bytes.iter().find(|byte| !byte.is_ascii()) {
        return Err(Error::NumericRange {
            value: byte.to_string(),
            bit_length: 8,
            target: "ASCII",
        });
    }
    Ok(bytes.into_iter().map(char::from).collect())
}

pub fn from_utf8(text: &str) -> Region {
    from_bytes(text.as_bytes())
}

pub fn into_utf8(region: &Region) -> Result<String> {
    let bit_length = region.bit_length();
    let bytes = into_bytes(region)?;
    String::from_utf8(bytes).map_err(|error| Error::NumericRange {
        value: format!("byte {}", error.utf8_error().valid_up_to()),
        bit_length,
        target: "UTF-8",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits;
    use crate::codec::from_byte_list;

    #[test]
    fn ascii_round_trips() {
        let region = from_ascii("Hi!").unwrap();

        assert_eq!(region.bit_length(), 24);
        assert_eq!(region.cells(), b"Hi!");
        assert_eq!(into_ascii(&region).unwrap(), "Hi!");
    }

    #[test]
    fn ascii_rejects_characters_outside_the_seven_bit_range() {
        assert_eq!(from_ascii("héllo").unwrap_err().symbol(), "NumericRangeError");

        let high_byte = from_byte_list(&[0x80], 8).unwrap();
        assert_eq!(into_ascii(&high_byte).unwrap_err().symbol(), "NumericRangeError");
    }

    #[test]
    fn utf8_round_trips_multibyte_text() {
        let region = from_utf8("héllo");

        assert_eq!(region.bit_length(), 48);
        assert_eq!(into_utf8(&region).unwrap(), "héllo");
    }

    #[test]
    fn text_decoding_requires_whole_bytes() {
        assert_eq!(into_utf8(&bits![1, 0, 1]).unwrap_err().symbol(), "ByteAlignmentError");
        assert_eq!(into_ascii(&bits![1, 0, 1]).unwrap_err().symbol(), "ByteAlignmentError");
    }

    #[test]
    fn invalid_utf8_is_not_representable_as_text() {
        let region = from_byte_list(&[0xC3], 8).unwrap();

        assert_eq!(into_utf8(&region).unwrap_err().symbol(), "NumericRangeError");
    }

    #[test]
    fn empty_text_is_the_empty_region() {
        assert_eq!(from_utf8(""), bits![]);
        assert_eq!(into_utf8(&bits![]).unwrap(), "");
    }
}
