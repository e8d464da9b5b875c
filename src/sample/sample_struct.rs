use std::path::Path;
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;
use rayon::prelude::*;
use serde::ser::{Serialize, Serializer, SerializeMap, SerializeSeq};

use super::feature::Feature;
use crate::error::{MiniRulesError, Result};


/// Struct `Sample` holds a labeled table in column-major form.
///
/// The first column is a row identifier, the last column is the class label,
/// and every column in between is an attribute.
/// Both the attribute list and the class label are fixed at construction.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) attributes: Vec<String>,
    pub(super) class_label: String,
    pub(super) n_sample: usize,
}


impl Sample {
    /// Build a `Sample` from the given columns.
    /// All columns must have the same length.
    pub fn from_features(features: Vec<Feature>) -> Result<Self> {
        let n_feature = features.len();
        if n_feature == 0 {
            return Err(MiniRulesError::NoColumns);
        }

        let mut name_to_index = HashMap::with_capacity(n_feature);
        for (i, feat) in features.iter().enumerate() {
            let name = feat.name().to_string();
            if name_to_index.insert(name.clone(), i).is_some() {
                return Err(MiniRulesError::DuplicateColumn(name));
            }
        }

        let n_sample = features[0].len();
        if let Some(feat) = features.iter().find(|f| f.len() != n_sample) {
            return Err(MiniRulesError::RaggedRow {
                row: n_sample.min(feat.len()),
                expected: n_sample,
                got: feat.len(),
            });
        }

        // The id column and the class column are not attributes.
        let attributes = if n_feature >= 3 {
            features[1..n_feature - 1].iter()
                .map(|f| f.name().to_string())
                .collect()
        } else {
            Vec::new()
        };
        let class_label = features[n_feature - 1].name().to_string();

        let sample = Self {
            name_to_index, features, attributes, class_label, n_sample,
        };
        Ok(sample)
    }


    /// Build a `Sample` from a header and rows of values.
    /// Every row must have exactly as many values as the header.
    pub fn from_rows<H, R, S>(header: H, rows: R) -> Result<Self>
        where H: IntoIterator,
              H::Item: ToString,
              R: IntoIterator,
              R::Item: AsRef<[S]>,
              S: AsRef<str>,
    {
        let mut features = header.into_iter()
            .map(Feature::new)
            .collect::<Vec<_>>();
        let n_feature = features.len();

        for (row, values) in rows.into_iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n_feature {
                return Err(MiniRulesError::RaggedRow {
                    row, expected: n_feature, got: values.len(),
                });
            }
            features.iter_mut()
                .zip(values)
                .for_each(|(feat, v)| feat.append(v.as_ref()));
        }

        Self::from_features(features)
    }


    /// Convert a `polars::DataFrame` into `Sample`.
    /// Every column is cast to a string column;
    /// missing values become the empty string.
    pub fn from_dataframe(data: DataFrame) -> Result<Self> {
        let features = data.get_columns()
            .par_iter()
            .map(feature_from_series)
            .collect::<Result<Vec<_>>>()?;

        Self::from_features(features)
    }


    /// Read a CSV format file to `Sample` type.
    /// Without a header row, the columns are named `Feat. [k]`.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        Self::from_delimited(file, has_header, b',')
    }


    /// Read a delimited text file to `Sample` type.
    /// Schema inference is disabled so that every value stays a string.
    pub fn from_delimited<P>(file: P, has_header: bool, separator: u8)
        -> Result<Self>
        where P: AsRef<Path>,
    {
        let mut data = CsvReader::from_path(file.as_ref())?
            .has_header(has_header)
            .with_separator(separator)
            .infer_schema(Some(0))
            .finish()?;

        // if the header does not exist,
        // construct a dummy header.
        if !has_header {
            let names = (1..=data.width())
                .map(|k| format!("Feat. [{k}]"))
                .collect::<Vec<_>>();
            data.set_column_names(&names[..])?;
        }

        Self::from_dataframe(data)
    }


    /// Returns the pair of the number of rows and the number of columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.features.len())
    }


    /// Returns `true` if no rows remain.
    pub fn is_empty(&self) -> bool {
        self.n_sample == 0
    }


    /// Returns the attribute names in column order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Returns the name of the class column.
    pub fn class_label(&self) -> &str {
        &self.class_label
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the column named `name`.
    pub fn feature<S: AsRef<str>>(&self, name: S) -> Result<&Feature> {
        let name = name.as_ref();
        self.name_to_index.get(name)
            .map(|&k| &self.features[k])
            .ok_or_else(|| MiniRulesError::ColumnNotFound(name.to_string()))
    }


    /// Distinct class values in first-occurrence order.
    pub fn class_values(&self) -> Vec<&str> {
        self.features[self.features.len() - 1].distinct_values()
    }


    /// Returns the `idx`-th row.
    pub fn row(&self, idx: usize) -> Row<'_> {
        assert!(idx < self.n_sample, "row {idx} is out of range");
        Row { sample: self, idx }
    }


    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        (0..self.n_sample).map(move |idx| Row { sample: self, idx })
    }


    /// Remove every row whose `column` equals `value`
    /// and returns the number of removed rows.
    pub fn remove_rows_where<S, T>(&mut self, column: S, value: T)
        -> Result<usize>
        where S: AsRef<str>,
              T: AsRef<str>,
    {
        let value = value.as_ref();
        let keep = self.feature(column)?
            .values()
            .iter()
            .map(|v| v != value)
            .collect::<Vec<bool>>();
        let n_kept = keep.iter().filter(|&&k| k).count();
        let n_removed = self.n_sample - n_kept;

        if n_removed > 0 {
            self.features.iter_mut()
                .for_each(|feat| feat.retain_by(&keep[..]));
            self.n_sample = n_kept;
        }
        Ok(n_removed)
    }
}


fn feature_from_series(series: &Series) -> Result<Feature> {
    let mut feature = Feature::new(series.name());
    let series = series.cast(&DataType::Utf8)?;
    series.utf8()?
        .into_iter()
        .for_each(|v| feature.append(v.unwrap_or("")));
    Ok(feature)
}


/// A borrowed view of one row: a mapping from column name to value.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    sample: &'a Sample,
    idx: usize,
}


impl<'a> Row<'a> {
    /// Returns the value at the column named `name`.
    pub fn get<S: AsRef<str>>(&self, name: S) -> Option<&'a str> {
        let sample = self.sample;
        sample.name_to_index.get(name.as_ref())
            .map(|&k| &sample.features[k][self.idx])
    }

    /// Returns the position of this row in its table.
    pub fn index(&self) -> usize {
        self.idx
    }

    /// Iterate over `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        let idx = self.idx;
        self.sample.features.iter()
            .map(move |feat| (feat.name(), &feat[idx]))
    }
}


impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S)
        -> std::result::Result<S::Ok, S::Error>
    {
        let mut map = serializer.serialize_map(Some(self.sample.features.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}


impl Serialize for Sample {
    fn serialize<S: Serializer>(&self, serializer: S)
        -> std::result::Result<S::Ok, S::Error>
    {
        let mut seq = serializer.serialize_seq(Some(self.n_sample))?;
        for row in self.rows() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        match self.feature(name) {
            Ok(feature) => feature,
            Err(_) => panic!("The column named `{name}` does not exist"),
        }
    }
}
