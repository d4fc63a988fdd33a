//! Translation from high-level query requests to DreamFactory query-string
//! parameters.
//!
//! "Not specified" is expressed by omitting a key, never by sending an empty
//! value. The filter expression is forwarded verbatim; its grammar belongs to
//! the backing service.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::Result, ToolError};

/// Treat an explicit JSON `null` the same as an absent argument
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sentinel selecting every column of a table
pub const ALL_FIELDS: &str = "*";

/// A column or related-table selection, given either as one string or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    One(String),
    Many(Vec<String>),
}

impl Selection {
    /// Render as a single comma-joined string, or `None` when nothing is selected
    pub fn render(&self) -> Option<String> {
        let rendered = match self {
            Selection::One(value) => value.clone(),
            Selection::Many(values) => values.join(","),
        };
        if rendered.is_empty() {
            None
        } else {
            Some(rendered)
        }
    }

    /// Whether this selection is the all-fields sentinel
    pub fn is_all(&self) -> bool {
        match self {
            Selection::One(value) => value == ALL_FIELDS,
            Selection::Many(values) => values.len() == 1 && values[0] == ALL_FIELDS,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::One(value.to_string())
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Selection::One(value)
    }
}

impl From<Vec<String>> for Selection {
    fn from(values: Vec<String>) -> Self {
        Selection::Many(values)
    }
}

impl From<Vec<&str>> for Selection {
    fn from(values: Vec<&str>) -> Self {
        Selection::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Selection {
    fn from(values: [&str; N]) -> Self {
        Selection::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Records query against one table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub table_name: String,
    /// Filter expression, equivalent to a SQL WHERE clause
    #[serde(default, rename = "filter_str", deserialize_with = "null_as_default")]
    pub filter: String,
    #[serde(default)]
    pub fields: Option<Selection>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub offset: u64,
    /// Field name, optionally followed by `ASC` or `DESC`
    #[serde(default, rename = "order_field", deserialize_with = "null_as_default")]
    pub order: String,
    #[serde(default)]
    pub related: Option<Selection>,
}

impl QueryRequest {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Default::default()
        }
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn fields(mut self, fields: impl Into<Selection>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    pub fn related(mut self, related: impl Into<Selection>) -> Self {
        self.related = Some(related.into());
        self
    }

    /// Render the full parameter set for this query
    pub fn to_params(&self) -> ParamSet {
        let mut params = ParamSet::new();
        if !self.filter.is_empty() {
            params.insert("filter", self.filter.clone());
        }
        params.insert_fields(self.fields.as_ref());
        if let Some(limit) = self.limit.filter(|limit| *limit > 0) {
            params.insert("limit", limit.to_string());
        }
        params.insert("offset", self.offset.to_string());
        if !self.order.is_empty() {
            params.insert("order", self.order.clone());
        }
        params.insert_related(self.related.as_ref());
        params
    }
}

/// Lookup of specific records by primary key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdLookupRequest {
    pub table_name: String,
    pub ids: Selection,
    #[serde(default)]
    pub fields: Option<Selection>,
    #[serde(default)]
    pub related: Option<Selection>,
}

impl IdLookupRequest {
    pub fn new(table_name: impl Into<String>, ids: impl Into<Selection>) -> Self {
        Self {
            table_name: table_name.into(),
            ids: ids.into(),
            fields: None,
            related: None,
        }
    }

    pub fn fields(mut self, fields: impl Into<Selection>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn related(mut self, related: impl Into<Selection>) -> Self {
        self.related = Some(related.into());
        self
    }

    /// Render `ids` plus the column and related-table selections.
    ///
    /// Fails when no identifiers were given.
    pub fn to_params(&self) -> Result<ParamSet> {
        let ids = self
            .ids
            .render()
            .ok_or_else(|| ToolError::invalid_field("ids", "at least one record id is required"))?;

        let mut params = ParamSet::new();
        params.insert("ids", ids);
        params.insert_fields(self.fields.as_ref());
        params.insert_related(self.related.as_ref());
        Ok(params)
    }
}

/// Ordered query-string parameters sent to the backing service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet {
    pairs: Vec<(&'static str, String)>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, key: &'static str, value: String) {
        self.pairs.push((key, value));
    }

    fn insert_fields(&mut self, fields: Option<&Selection>) {
        if let Some(fields) = fields.filter(|f| !f.is_all()).and_then(Selection::render) {
            self.insert("fields", fields);
        }
    }

    fn insert_related(&mut self, related: Option<&Selection>) {
        if let Some(related) = related.and_then(Selection::render) {
            self.insert("related", related);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(k, _)| *k).collect()
    }

    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
