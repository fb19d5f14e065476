// src/content/query.rs
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldFilter {
    /// `fields.<name>=<value>`
    Equals { field: String, value: String },
    /// `fields.<name>[exists]=<bool>`
    Exists { field: String, exists: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub field: String,
    pub descending: bool,
}

/// A content-type query against the delivery API.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentQuery {
    pub content_type: String,
    pub filters: Vec<FieldFilter>,
    pub order: Option<Order>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
    pub include: Option<u8>,
}

impl ContentQuery {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            filters: Vec::new(),
            order: None,
            limit: None,
            skip: None,
            include: None,
        }
    }

    pub fn field_eq(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push(FieldFilter::Equals {
            field: field.into(),
            value: value.to_string(),
        });
        self
    }

    pub fn field_exists(mut self, field: impl Into<String>, exists: bool) -> Self {
        self.filters.push(FieldFilter::Exists {
            field: field.into(),
            exists,
        });
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, descending: bool) -> Self {
        self.order = Some(Order {
            field: field.into(),
            descending,
        });
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn include(mut self, depth: u8) -> Self {
        self.include = Some(depth);
        self
    }

    /// Query-string pairs in the delivery API's syntax.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("content_type".to_string(), self.content_type.clone())];
        for filter in &self.filters {
            match filter {
                FieldFilter::Equals { field, value } => {
                    params.push((format!("fields.{}", field), value.clone()));
                }
                FieldFilter::Exists { field, exists } => {
                    params.push((format!("fields.{}[exists]", field), exists.to_string()));
                }
            }
        }
        if let Some(order) = &self.order {
            let prefix = if order.descending { "-" } else { "" };
            params.push(("order".to_string(), format!("{}fields.{}", prefix, order.field)));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(skip) = self.skip {
            params.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(include) = self.include {
            params.push(("include".to_string(), include.to_string()));
        }
        params
    }
}

impl fmt::Display for ContentQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .to_params()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        write!(f, "{}", pairs.join("&"))
    }
}
