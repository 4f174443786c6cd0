//! CSV sheet loading.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::catalog::CsvColumns;
use crate::errors::SeedError;
use crate::generators::SourceRow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Loads source rows from spreadsheet CSV exports.
pub struct CsvLoader;

impl CsvLoader {
    /// Loads the rows of a CSV file, in file order.
    ///
    /// Rows with a blank name are skipped. A column missing from the header
    /// reads as an empty cell.
    pub fn load_file(
        path: impl AsRef<Path>,
        columns: &CsvColumns,
    ) -> Result<Vec<SourceRow>, SeedError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| SeedError::io(path, e))?;

        Self::load_bytes(&data, columns).map_err(|e| SeedError::csv(path, e))
    }

    /// Loads rows from CSV data in memory.
    pub fn load_bytes(data: &[u8], columns: &CsvColumns) -> Result<Vec<SourceRow>, csv::Error> {
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(data);

        let headers = reader.headers()?.clone();
        let name_idx = column_index(&headers, columns.name);
        let unit_idx = column_index(&headers, columns.unit);
        let price_idx = column_index(&headers, columns.price);

        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

            let Some(row) =
                SourceRow::from_fields(field(name_idx), field(unit_idx), field(price_idx))
            else {
                debug!(line, "Skipping row without {}", columns.name);
                continue;
            };

            if row.price_defaulted {
                debug!(
                    line,
                    product = %row.name,
                    raw = field(price_idx),
                    "Unparseable price, using default"
                );
            }

            rows.push(row);
        }

        Ok(rows)
    }
}

fn column_index(headers: &StringRecord, column: &str) -> Option<usize> {
    let idx = headers.iter().position(|h| h == column);
    if idx.is_none() {
        debug!("Column {column} not found in header, reading it as empty");
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{INGREDIENTS, MATERIALS};

    #[test]
    fn test_load_keeps_file_order() {
        let data = "INGREDIENTES,MEDIDA,PRECIO\nHarina,KG,\"1,50\"\nHuevos,DOCENA,\"2,10\"\n";
        let rows = CsvLoader::load_bytes(data.as_bytes(), &INGREDIENTS.columns).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Harina");
        assert_eq!(rows[0].unit, "KG");
        assert_eq!(rows[0].price, "1.50");
        assert_eq!(rows[1].name, "Huevos");
        assert_eq!(rows[1].price, "2.10");
    }

    #[test]
    fn test_load_skips_blank_names() {
        let data = "MATERIAL,MEDIDA,PRECIO\n,UNIDAD,1\n   ,KG,2\nCaja,UNIDAD,\"0,30\"\n";
        let rows = CsvLoader::load_bytes(data.as_bytes(), &MATERIALS.columns).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Caja");
    }

    #[test]
    fn test_load_strips_bom() {
        let data = "\u{feff}INGREDIENTES,MEDIDA,PRECIO\nSal,KG,\"0,80\"\n";
        let rows = CsvLoader::load_bytes(data.as_bytes(), &INGREDIENTS.columns).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Sal");
    }

    #[test]
    fn test_missing_columns_read_as_empty() {
        let data = "INGREDIENTES,NOTAS\nLevadura,fresca\n";
        let rows = CsvLoader::load_bytes(data.as_bytes(), &INGREDIENTS.columns).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].unit, "UNIDAD");
        assert_eq!(rows[0].price, "0.00");
    }

    #[test]
    fn test_short_records_are_accepted() {
        let data = "INGREDIENTES,MEDIDA,PRECIO\nAceite,LITRO\n";
        let rows = CsvLoader::load_bytes(data.as_bytes(), &INGREDIENTS.columns).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].unit, "LITRO");
        assert_eq!(rows[0].price, "0.00");
    }

    #[test]
    fn test_header_only_and_empty_input() {
        let header_only = CsvLoader::load_bytes(b"MATERIAL,MEDIDA,PRECIO\n", &MATERIALS.columns);
        assert!(header_only.unwrap().is_empty());

        let empty = CsvLoader::load_bytes(b"", &MATERIALS.columns);
        assert!(empty.unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = std::env::temp_dir().join("lovelace-seed-missing.csv");
        let err = CsvLoader::load_file(&path, &INGREDIENTS.columns).unwrap_err();

        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }
}
