//! Typed MAPI property values.
//!
//! A [`PropertyKind`] knows how to decode its value from a shared cursor and
//! how many bytes that takes. Row decoders walk a column list and let each
//! kind consume its own bytes, so fixed and variable-width values can be
//! mixed in one pass.

mod row;

pub use row::PropertyRow;

use crate::cursor::Cursor;
use crate::{Error, Result};

/// MAPI property type codes (low word of a property tag).
pub mod ptyp {
    /// `PtypBoolean`, one byte in a property row.
    pub const BOOLEAN: u16 = 0x000B;
    /// `PtypInteger32`.
    pub const INTEGER32: u16 = 0x0003;
    /// `PtypInteger64`.
    pub const INTEGER64: u16 = 0x0014;
    /// `PtypString`, null-terminated UTF-16LE.
    pub const STRING: u16 = 0x001F;
    /// `PtypBinary`, prefixed by a 16-bit count.
    pub const BINARY: u16 = 0x0102;
}

/// A property with a registered codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// `PidTagAttachMethod`: how an attachment is stored.
    AttachMethod,
    /// `PidTagMemberRights`: permissions of a permission-table member.
    MemberRights,
    /// `PidTagRights`: permissions on a folder.
    Rights,
    /// `PidTagMemberId`: permission-table member identifier.
    MemberId,
    /// `PidTagFolderId`: folder identifier.
    FolderId,
    /// `PidTagHasAttachments`.
    HasAttachments,
    /// `PidTagEntryId`: count-prefixed binary.
    EntryId,
    /// `PidTagMemberName`: null-terminated UTF-16LE.
    MemberName,
}

impl PropertyKind {
    /// Every registered kind.
    pub const ALL: [Self; 8] = [
        Self::AttachMethod,
        Self::MemberRights,
        Self::Rights,
        Self::MemberId,
        Self::FolderId,
        Self::HasAttachments,
        Self::EntryId,
        Self::MemberName,
    ];

    /// Returns the 32-bit property tag (id in the high word, type in the low).
    #[must_use]
    pub const fn property_tag(self) -> u32 {
        match self {
            Self::AttachMethod => 0x3705_0003,
            Self::MemberRights => 0x6673_0003,
            Self::Rights => 0x6639_0003,
            Self::MemberId => 0x6671_0014,
            Self::FolderId => 0x6748_0014,
            Self::HasAttachments => 0x0E1B_000B,
            Self::EntryId => 0x0FFF_0102,
            Self::MemberName => 0x6672_001F,
        }
    }

    /// Returns the property type code.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn property_type(self) -> u16 {
        (self.property_tag() & 0xFFFF) as u16
    }

    /// Returns the encoded width, or `None` for variable-width kinds.
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self.property_type() {
            ptyp::BOOLEAN => Some(1),
            ptyp::INTEGER32 => Some(4),
            ptyp::INTEGER64 => Some(8),
            _ => None,
        }
    }

    /// Decodes this kind's value at the cursor.
    ///
    /// Consumes exactly the value's encoded width. On error the cursor may
    /// have consumed a count prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the value runs past the buffer and
    /// [`Error::InvalidUtf16`] for a malformed string.
    pub fn decode(self, cursor: &mut Cursor<'_>) -> Result<PropertyValue> {
        let value = match self {
            Self::AttachMethod => PropertyValue::AttachMethod(cursor.read_u32()?),
            Self::MemberRights => PropertyValue::MemberRights(cursor.read_u32()?),
            Self::Rights => PropertyValue::Rights(cursor.read_u32()?),
            Self::MemberId => PropertyValue::MemberId(cursor.read_i64()?),
            Self::FolderId => PropertyValue::FolderId(cursor.read_u64()?),
            Self::HasAttachments => PropertyValue::HasAttachments(cursor.read_u8()? != 0),
            Self::EntryId => {
                let count = cursor.read_u16()?;
                PropertyValue::EntryId(cursor.read_bytes(usize::from(count))?)
            }
            Self::MemberName => PropertyValue::MemberName(cursor.read_utf16_nul()?),
        };
        Ok(value)
    }
}

impl TryFrom<u32> for PropertyKind {
    type Error = Error;

    fn try_from(tag: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.property_tag() == tag)
            .ok_or(Error::UnknownPropertyTag(tag))
    }
}

/// A decoded property value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PropertyValue {
    /// `PidTagAttachMethod`.
    AttachMethod(u32),
    /// `PidTagMemberRights`.
    MemberRights(u32),
    /// `PidTagRights`.
    Rights(u32),
    /// `PidTagMemberId`.
    MemberId(i64),
    /// `PidTagFolderId`.
    FolderId(u64),
    /// `PidTagHasAttachments`.
    HasAttachments(bool),
    /// `PidTagEntryId`.
    EntryId(Vec<u8>),
    /// `PidTagMemberName`.
    MemberName(String),
}

/// The scalar a property value projects to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Scalar {
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit signed integer.
    I64(i64),
    /// 64-bit unsigned integer.
    U64(u64),
    /// Boolean.
    Bool(bool),
    /// Binary blob.
    Binary(Vec<u8>),
    /// Text.
    String(String),
}

impl PropertyValue {
    /// Decodes a `kind` value at byte offset `pos` of `raw`.
    ///
    /// Returns the value and the number of bytes it occupied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `pos` or the value lies past the
    /// end of `raw`.
    pub fn decode_at(kind: PropertyKind, raw: &[u8], pos: usize) -> Result<(Self, usize)> {
        let mut cursor = Cursor::at(raw, pos)?;
        let value = kind.decode(&mut cursor)?;
        Ok((value, cursor.position() - pos))
    }

    /// Returns the kind this value was decoded as.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::AttachMethod(_) => PropertyKind::AttachMethod,
            Self::MemberRights(_) => PropertyKind::MemberRights,
            Self::Rights(_) => PropertyKind::Rights,
            Self::MemberId(_) => PropertyKind::MemberId,
            Self::FolderId(_) => PropertyKind::FolderId,
            Self::HasAttachments(_) => PropertyKind::HasAttachments,
            Self::EntryId(_) => PropertyKind::EntryId,
            Self::MemberName(_) => PropertyKind::MemberName,
        }
    }

    /// Returns the number of bytes this value occupies on the wire.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::EntryId(bytes) => 2 + bytes.len(),
            Self::MemberName(s) => (s.encode_utf16().count() + 1) * 2,
            other => other.kind().fixed_width().unwrap_or_default(),
        }
    }

    /// Projects the value to its underlying scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Scalar {
        match self {
            Self::AttachMethod(v) | Self::MemberRights(v) | Self::Rights(v) => Scalar::U32(*v),
            Self::MemberId(v) => Scalar::I64(*v),
            Self::FolderId(v) => Scalar::U64(*v),
            Self::HasAttachments(v) => Scalar::Bool(*v),
            Self::EntryId(v) => Scalar::Binary(v.clone()),
            Self::MemberName(v) => Scalar::String(v.clone()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_method_at_start() {
        let (value, consumed) =
            PropertyValue::decode_at(PropertyKind::AttachMethod, &[0x03, 0x00, 0x00, 0x00], 0)
                .unwrap();
        assert_eq!(value, PropertyValue::AttachMethod(3));
        assert_eq!(value.as_scalar(), Scalar::U32(3));
        assert_eq!(consumed, 4);
    }

    #[test]
    fn test_attach_method_mid_buffer() {
        let raw = [0xEE, 0xEE, 0x05, 0x00, 0x00, 0x00, 0xEE];
        let mut cursor = Cursor::at(&raw, 2).unwrap();
        let value = PropertyKind::AttachMethod.decode(&mut cursor).unwrap();
        assert_eq!(value, PropertyValue::AttachMethod(5));
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_fixed_widths() {
        assert_eq!(PropertyKind::AttachMethod.fixed_width(), Some(4));
        assert_eq!(PropertyKind::MemberId.fixed_width(), Some(8));
        assert_eq!(PropertyKind::HasAttachments.fixed_width(), Some(1));
        assert_eq!(PropertyKind::EntryId.fixed_width(), None);
        assert_eq!(PropertyKind::MemberName.fixed_width(), None);
    }

    #[test]
    fn test_fixed_width_matches_consumed() {
        let raw = [0x01u8; 16];
        for kind in PropertyKind::ALL {
            if let Some(width) = kind.fixed_width() {
                let (value, consumed) = PropertyValue::decode_at(kind, &raw, 3).unwrap();
                assert_eq!(consumed, width, "{kind:?}");
                assert_eq!(value.width(), width);
                assert_eq!(value.kind(), kind);
            }
        }
    }

    #[test]
    fn test_entry_id_reports_width() {
        let raw = [0x03, 0x00, 0xDE, 0xAD, 0xBE, 0xEF];
        let (value, consumed) = PropertyValue::decode_at(PropertyKind::EntryId, &raw, 0).unwrap();
        assert_eq!(value, PropertyValue::EntryId(vec![0xDE, 0xAD, 0xBE]));
        assert_eq!(consumed, 5);
        assert_eq!(value.width(), 5);
    }

    #[test]
    fn test_member_name() {
        let raw = [b'A', 0, b'n', 0, b'y', 0, 0, 0];
        let (value, consumed) =
            PropertyValue::decode_at(PropertyKind::MemberName, &raw, 0).unwrap();
        assert_eq!(value.as_scalar(), Scalar::String("Any".into()));
        assert_eq!(consumed, 8);
        assert_eq!(value.width(), 8);
    }

    #[test]
    fn test_member_id_signed() {
        let raw = (-1i64).to_le_bytes();
        let (value, _) = PropertyValue::decode_at(PropertyKind::MemberId, &raw, 0).unwrap();
        assert_eq!(value.as_scalar(), Scalar::I64(-1));
    }

    #[test]
    fn test_truncated_value() {
        let err = PropertyValue::decode_at(PropertyKind::AttachMethod, &[0x03, 0x00], 0)
            .unwrap_err();
        assert!(err.is_truncated());
        assert!(PropertyValue::decode_at(PropertyKind::AttachMethod, &[0; 4], 5).is_err());
    }

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(
            PropertyKind::try_from(0x3705_0003_u32).unwrap(),
            PropertyKind::AttachMethod
        );
        assert_eq!(
            PropertyKind::try_from(0x1234_0003_u32).unwrap_err(),
            Error::UnknownPropertyTag(0x1234_0003)
        );
        assert_eq!(PropertyKind::MemberName.property_type(), ptyp::STRING);
        assert_eq!(PropertyKind::EntryId.property_type(), ptyp::BINARY);
    }
}
