//! Address codec - cell coordinates, cell addresses, and location ids.
//!
//! A cell address is a two-letter column code followed by the literal
//! two-digit row, e.g. `AA10`. A location id prefixes the layer:
//! `L300-AA10`.
//!
//! The column enumeration covers the 80 legal codes
//! `AA..AZ, BA..BZ, CA..CZ, DB, DC` (the D block is offset by one so that
//! the 80th code is `DC`). `col_index_to_cell` and `cell_to_col_index` are
//! mutual inverses over that enumeration.
//!
//! Malformed input is always rejected with an [`AddressError`], never
//! silently clamped.

use gridatlas_types::{
    layer_in_range, AddressError, CellPos, WorldPos, GRID_COLS, ROW_MAX, ROW_MIN,
};

/// Convert a column index (0..=79) into its two-letter code.
pub fn col_index_to_cell(index: u8) -> Result<String, AddressError> {
    if index >= GRID_COLS {
        return Err(AddressError::ColumnIndexOutOfRange(index as u32));
    }
    let (first, mut second) = (index / 26, index % 26);
    if first == 3 {
        // D block: DB, DC.
        second += 1;
    }
    Ok(format!("{}{}", (b'A' + first) as char, (b'A' + second) as char))
}

/// Convert a two-letter column code back into its index (0..=79).
pub fn cell_to_col_index(code: &str) -> Result<u8, AddressError> {
    let bytes = code.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(|b| b.is_ascii_uppercase()) {
        return Err(AddressError::InvalidColumn(code.to_string()));
    }
    let first = bytes[0] - b'A';
    let second = bytes[1] - b'A';
    let index = match first {
        0..=2 => first as u16 * 26 + second as u16,
        // D block is offset by one: DB=78, DC=79; DA is not part of the
        // enumeration.
        3 if (1..=2).contains(&second) => 77 + second as u16,
        _ => return Err(AddressError::InvalidColumn(code.to_string())),
    };
    Ok(index as u8)
}

/// Parse a four-character cell address like `AA10`.
pub fn parse_cell_address(address: &str) -> Result<CellPos, AddressError> {
    let bytes = address.as_bytes();
    if bytes.len() != 4 {
        return Err(AddressError::MalformedCell(address.to_string()));
    }
    if !bytes[..2].iter().all(|b| b.is_ascii_uppercase())
        || !bytes[2..].iter().all(|b| b.is_ascii_digit())
    {
        return Err(AddressError::MalformedCell(address.to_string()));
    }

    let col = cell_to_col_index(&address[..2])?;
    let row: u32 = address[2..]
        .parse()
        .map_err(|_| AddressError::MalformedCell(address.to_string()))?;
    if !(ROW_MIN as u32..=ROW_MAX as u32).contains(&row) {
        return Err(AddressError::RowOutOfRange(row));
    }

    Ok(CellPos::new(col, row as u8))
}

/// Format a column/row pair as a cell address.
pub fn format_cell_address(col: u8, row: u8) -> Result<String, AddressError> {
    if !(ROW_MIN..=ROW_MAX).contains(&row) {
        return Err(AddressError::RowOutOfRange(row as u32));
    }
    Ok(format!("{}{}", col_index_to_cell(col)?, row))
}

/// Format a full location id, `L<layer>-<cell>`.
pub fn format_location_id(layer: u16, col: u8, row: u8) -> Result<String, AddressError> {
    if !layer_in_range(layer) {
        return Err(AddressError::LayerOutOfRange(layer as u32));
    }
    Ok(format!("L{}-{}", layer, format_cell_address(col, row)?))
}

/// Parse a full location id back into a world position.
pub fn parse_location_id(id: &str) -> Result<WorldPos, AddressError> {
    let rest = id
        .strip_prefix('L')
        .ok_or_else(|| AddressError::MalformedLocationId(id.to_string()))?;
    let (layer_str, cell_str) = rest
        .split_once('-')
        .ok_or_else(|| AddressError::MalformedLocationId(id.to_string()))?;
    let layer: u16 = layer_str
        .parse()
        .map_err(|_| AddressError::MalformedLocationId(id.to_string()))?;
    if !layer_in_range(layer) {
        return Err(AddressError::LayerOutOfRange(layer as u32));
    }
    let cell = parse_cell_address(cell_str)?;
    Ok(WorldPos::new(layer, cell.col, cell.row))
}
