use crate::error::{QfResult, QuoteError};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Unvalidated rate-store contents: whatever keys the store happens to hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRates {
    values: BTreeMap<String, f64>,
}

impl RawRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.values.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads a rate-store export with a `key,value[,label]` header.
    pub fn from_csv_reader<R: Read>(reader: R) -> QfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rates = Self::new();
        for (line, record) in rdr.records().enumerate() {
            let record = record?;
            if record.len() < 2 || record[0].is_empty() {
                debug!("Skipping short rate row {}", line + 2);
                continue;
            }
            let key = &record[0];
            let value = record[1].parse::<f64>().map_err(|_| {
                QuoteError::RateSource(format!(
                    "row {}: value '{}' for '{}' is not a number",
                    line + 2,
                    &record[1],
                    key
                ))
            })?;
            rates.set(key, value);
        }
        Ok(rates)
    }

    /// Reads a flat `{ "key": value }` JSON object, the shape the rate API serves.
    pub fn from_json_reader<R: Read>(reader: R) -> QfResult<Self> {
        let values: BTreeMap<String, f64> = serde_json::from_reader(reader)?;
        Ok(Self { values })
    }

    /// Picks the format from the file extension (`.csv` or `.json`).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> QfResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let rates = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::from_csv_reader(file)?,
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_reader(file)?,
            _ => {
                return Err(QuoteError::RateSource(format!(
                    "unsupported rate file '{}' (expected .csv or .json)",
                    path.display()
                )))
            }
        };
        info!("Loaded {} rates from {}", rates.len(), path.display());
        Ok(rates)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for RawRates {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
