//! Heterogeneous property rows.

use super::{PropertyKind, PropertyValue};
use crate::cursor::Cursor;
use crate::Result;

/// A sequence of property values decoded against a column list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PropertyRow {
    /// Values in column order.
    pub values: Vec<PropertyValue>,
}

impl PropertyRow {
    /// Decodes one value per column, in order, from a shared cursor.
    ///
    /// # Errors
    ///
    /// Returns the first column's decode error; no partial row is returned.
    pub fn decode(cursor: &mut Cursor<'_>, columns: &[PropertyKind]) -> Result<Self> {
        let values = columns
            .iter()
            .map(|kind| kind.decode(cursor))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { values })
    }

    /// Returns the first value of the given kind.
    #[must_use]
    pub fn get(&self, kind: PropertyKind) -> Option<&PropertyValue> {
        self.values.iter().find(|value| value.kind() == kind)
    }

    /// Returns the number of bytes the row occupied on the wire.
    #[must_use]
    pub fn width(&self) -> usize {
        self.values.iter().map(PropertyValue::width).sum()
    }
}
