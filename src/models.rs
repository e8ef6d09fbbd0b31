use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Values held by a single dataset column.
///
/// Datawrapper receives everything as CSV text, so no type checking happens
/// here; the split only preserves how the caller expressed the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnValues {
    Text(Vec<String>),
    Numbers(Vec<f64>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Text(v) => v.len(),
            ColumnValues::Numbers(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at `row` rendered as CSV text. `None` past the end of the column.
    pub fn cell(&self, row: usize) -> Option<String> {
        match self {
            ColumnValues::Text(v) => v.get(row).cloned(),
            ColumnValues::Numbers(v) => v.get(row).map(|n| n.to_string()),
        }
    }
}

/// A named column of a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: ColumnValues,
}

/// Ordered, named columns forming the tabular payload of a chart.
///
/// By convention the first column is the category axis (e.g. a year) and the
/// remaining columns are the numeric series to stack. Nothing enforces that
/// convention locally; the remote service decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<Column>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_column<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.push(Column {
            name: name.to_string(),
            values: ColumnValues::Text(values.into_iter().map(Into::into).collect()),
        });
        self
    }

    pub fn with_numeric_column<I>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.columns.push(Column {
            name: name.to_string(),
            values: ColumnValues::Numbers(values.into_iter().collect()),
        });
        self
    }

    /// Number of data rows: the length of the longest column. Shorter
    /// columns are padded with empty cells when serialized.
    pub fn rows(&self) -> usize {
        self.columns.iter().map(|c| c.values.len()).max().unwrap_or(0)
    }
}

/// Chart resource as returned by `POST /charts`.
///
/// Only `id` is required; the service sends many more fields we ignore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartInfo {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub chart_type: Option<String>,
    #[serde(rename = "publicUrl", default)]
    pub public_url: Option<String>,
}

/// Build the JSON body for chart creation.
///
/// The body always starts with `metadata.visualize.stacking = "normal"`.
/// Caller-supplied `metadata` is then merged into the *top level* of the
/// body, key by key. A caller key named `"metadata"` therefore replaces the
/// whole default metadata block, stacking flag included. This shallow merge
/// is the documented contract; do not deepen it.
pub fn create_chart_body(
    title: &str,
    chart_type: &str,
    metadata: Option<&Map<String, Value>>,
) -> Value {
    let mut body = Map::new();
    body.insert("title".into(), Value::String(title.to_string()));
    body.insert("type".into(), Value::String(chart_type.to_string()));
    body.insert(
        "metadata".into(),
        json!({
            "visualize": {
                "stacking": "normal"
            }
        }),
    );

    if let Some(extra) = metadata {
        for (key, value) in extra {
            body.insert(key.clone(), value.clone());
        }
    }

    Value::Object(body)
}
