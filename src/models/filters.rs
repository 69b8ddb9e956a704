use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Field the listing API can sort on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Price,
    Name,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Search filters exactly as the user entered them.
///
/// Every text field uses the empty string for "not set". Numeric fields stay
/// text until `validate_filters` turns them into a [`PropertyQuery`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub name: String,
    pub address: String,
    pub min_price: String,
    pub max_price: String,
    pub page: String,
    pub page_size: String,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

impl FilterCriteria {
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.to_string();
        self
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.sort_order = Some(order);
        self
    }

    /// True when none of the user-editable search fields are set
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.address, &self.min_price, &self.max_price]
            .iter()
            .all(|value| value.is_empty())
    }
}

/// Validated query sent to the listing API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyQuery {
    pub name: Option<String>,
    pub address: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

impl PropertyQuery {
    /// Query-string pairs for every field that is set, in wire order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(name) = self.name.as_ref().filter(|v| !v.is_empty()) {
            pairs.push(("name", name.clone()));
        }
        if let Some(address) = self.address.as_ref().filter(|v| !v.is_empty()) {
            pairs.push(("address", address.clone()));
        }
        if let Some(min_price) = self.min_price {
            pairs.push(("minPrice", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("maxPrice", max_price.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize", page_size.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.as_str().to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder", sort_order.as_str().to_string()));
        }

        pairs
    }
}
