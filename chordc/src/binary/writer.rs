use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;
use steno_core::image::{MAGIC, MAJOR_VERSION, MINOR_VERSION};
use steno_core::tables::{KeymapLayer, MATRIX_COLS, MATRIX_ROWS, SPECIAL_SHIFT_TABLE_SIZE};
use steno_core::{ChordsError, EncodingTable, Keymap, Layout, SpecialShiftTable};

/// Serializes a layout into the binary image format
pub struct ImageWriter<W: Write> {
    writer: W,
}

impl<W: Write> ImageWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_layout(mut self, layout: &Layout) -> Result<(), ChordsError> {
        self.write_header(layout)?;

        for table in layout.tables() {
            self.write_table(table)?;
        }

        self.write_keymap(layout.keymap())?;
        self.write_special_shift(layout.special_shift())?;

        self.writer.flush()?;
        Ok(())
    }

    fn write_header(&mut self, layout: &Layout) -> Result<(), ChordsError> {
        // Magic code
        self.writer.write_all(MAGIC)?;

        // Version
        self.writer.write_u8(MAJOR_VERSION)?;
        self.writer.write_u8(MINOR_VERSION)?;

        self.writer.write_u8(layout.locale().tag())?;
        self.writer.write_u8(MATRIX_ROWS as u8)?;
        self.writer.write_u8(MATRIX_COLS as u8)?;

        let table_count = u8::try_from(layout.tables().len())
            .map_err(|_| ChordsError::BinaryWrite("too many tables".to_string()))?;
        self.writer.write_u8(table_count)?;

        Ok(())
    }

    fn write_table(&mut self, table: &EncodingTable) -> Result<(), ChordsError> {
        let entries = table.entries();
        self.writer.write_u8(table.family().tag())?;
        self.writer.write_u16::<LittleEndian>(entries.len() as u16)?;
        for entry in entries {
            self.writer.write_all(entry)?;
        }
        Ok(())
    }

    fn write_keymap(&mut self, keymap: &Keymap) -> Result<(), ChordsError> {
        for layer in [KeymapLayer::Base, KeymapLayer::Shifted] {
            for pos in keymap.positions() {
                self.writer.write_u32::<LittleEndian>(keymap.cell(layer, pos).to_raw())?;
            }
        }
        Ok(())
    }

    fn write_special_shift(&mut self, table: &SpecialShiftTable) -> Result<(), ChordsError> {
        self.writer.write_u8(SPECIAL_SHIFT_TABLE_SIZE as u8)?;
        for &entry in table.raw() {
            self.writer.write_u16::<LittleEndian>(entry)?;
        }
        Ok(())
    }
}
