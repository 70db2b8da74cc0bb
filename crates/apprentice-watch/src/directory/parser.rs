use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyEntry {
    pub name: String,
    #[serde(default)]
    pub domain: String,
}

pub(crate) fn parse_entries<R: Read>(reader: R) -> Result<Vec<CompanyEntry>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<CompanyEntry>() {
        let entry = record?;
        if entry.name.is_empty() {
            continue;
        }
        entries.push(entry);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_cells_and_skips_nameless_rows() {
        let entries = parse_entries(" name , domain \n  BT Group , bt.com \n,orphan.com\n".as_bytes())
            .expect("csv parses");
        assert_eq!(
            entries,
            vec![CompanyEntry {
                name: "BT Group".to_string(),
                domain: "bt.com".to_string(),
            }]
        );
    }
}
