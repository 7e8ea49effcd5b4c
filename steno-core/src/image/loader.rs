use crate::tables::{
    EncodingTable, Keymap, KeymapLayer, Layout, Locale, MatrixPos, SpecialShiftTable,
    ENCODE_SIZE, MATRIX_COLS, MATRIX_ROWS, NO_ENTRY, SPECIAL_SHIFT_TABLE_SIZE, TABLE_SIZE,
};
use crate::types::{Cell, Family};
use super::error::{ImageError, Result};
use super::{HEADER_SIZE, MAGIC, MAJOR_VERSION};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// Decoded image header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub major_version: u8,
    pub minor_version: u8,
    pub locale: Locale,
    pub rows: u8,
    pub cols: u8,
    pub table_count: u8,
}

pub struct ImageLoader;

impl ImageLoader {
    /// Load a layout from binary image data
    pub fn load(data: &[u8]) -> Result<Layout> {
        let mut cursor = Cursor::new(data);

        let header = Self::read_header(&mut cursor)?;

        if header.rows as usize != MATRIX_ROWS || header.cols as usize != MATRIX_COLS {
            return Err(ImageError::DimensionMismatch {
                rows: header.rows,
                cols: header.cols,
                expected_rows: MATRIX_ROWS,
                expected_cols: MATRIX_COLS,
            });
        }

        let mut tables = Vec::with_capacity(header.table_count as usize);
        for _ in 0..header.table_count {
            tables.push(Self::read_table(&mut cursor)?);
        }

        let keymap = Self::read_keymap(&mut cursor)?;
        let special_shift = Self::read_special_shift(&mut cursor)?;

        Ok(Layout::from_parts(header.locale, tables, keymap, special_shift))
    }

    /// Read and validate the header only
    pub fn read_header(cursor: &mut Cursor<&[u8]>) -> Result<ImageHeader> {
        if cursor.get_ref().len() < HEADER_SIZE {
            return Err(ImageError::ImageTooSmall(cursor.get_ref().len()));
        }

        let mut magic_code = [0u8; 4];
        cursor.read_exact(&mut magic_code)?;

        if &magic_code != MAGIC {
            return Err(ImageError::InvalidMagicCode(magic_code));
        }

        let major_version = cursor.read_u8()?;
        let minor_version = cursor.read_u8()?;
        if major_version != MAJOR_VERSION {
            return Err(ImageError::UnsupportedVersion {
                major: major_version,
                minor: minor_version,
            });
        }

        let locale_tag = cursor.read_u8()?;
        let locale = Locale::from_tag(locale_tag).ok_or(ImageError::UnknownLocale(locale_tag))?;

        Ok(ImageHeader {
            major_version,
            minor_version,
            locale,
            rows: cursor.read_u8()?,
            cols: cursor.read_u8()?,
            table_count: cursor.read_u8()?,
        })
    }

    /// Read one encoding table
    fn read_table(cursor: &mut Cursor<&[u8]>) -> Result<EncodingTable> {
        let tag = cursor.read_u8()?;
        let family = Family::from_tag(tag)
            .filter(|f| f.has_table())
            .ok_or(ImageError::InvalidFamily(tag))?;

        let count = cursor.read_u16::<LittleEndian>()? as usize;
        if count != family.combinations() {
            return Err(ImageError::TableSize {
                family: tag,
                expected: family.combinations(),
                actual: count,
            });
        }

        let mut entries = [NO_ENTRY; TABLE_SIZE];
        for entry in entries.iter_mut().take(count) {
            let mut encoding = [0u8; ENCODE_SIZE];
            cursor.read_exact(&mut encoding)?;
            *entry = encoding;
        }

        Ok(EncodingTable::from_entries(family, entries))
    }

    /// Read both keymap layers
    fn read_keymap(cursor: &mut Cursor<&[u8]>) -> Result<Keymap> {
        let mut keymap = Keymap::EMPTY;
        for layer in [KeymapLayer::Base, KeymapLayer::Shifted] {
            for row in 0..MATRIX_ROWS {
                for col in 0..MATRIX_COLS {
                    let raw = cursor.read_u32::<LittleEndian>()?;
                    let cell = Cell::from_raw(raw).ok_or(ImageError::InvalidCell { raw, row, col })?;
                    keymap.set(layer, MatrixPos::new(row as u8, col as u8), cell);
                }
            }
        }
        Ok(keymap)
    }

    /// Read the special shift table
    fn read_special_shift(cursor: &mut Cursor<&[u8]>) -> Result<SpecialShiftTable> {
        let count = cursor.read_u8()? as usize;
        if count != SPECIAL_SHIFT_TABLE_SIZE {
            return Err(ImageError::SpecialShiftSize(count));
        }
        let mut entries = [0u16; SPECIAL_SHIFT_TABLE_SIZE];
        for entry in entries.iter_mut() {
            *entry = cursor.read_u16::<LittleEndian>()?;
        }
        Ok(SpecialShiftTable::from_raw(entries))
    }
}
