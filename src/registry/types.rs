use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Final path segment the page is served under, e.g. `3.html`.
    pub id: String,
    pub title: String,
    /// Icon class consumed by the presentation layer.
    pub icon: String,
    pub short_label: String,
}

impl PageDescriptor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        short_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            short_label: short_label.into(),
        }
    }
}

/// Ordered, immutable page sequence. Order defines next/previous.
///
/// Always non-empty with unique ids; cloning shares the underlying table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRegistry {
    pages: Arc<[PageDescriptor]>,
}

impl PageRegistry {
    pub fn new(pages: Vec<PageDescriptor>) -> DeckResult<Self> {
        if pages.is_empty() {
            return Err(DeckError::invalid_registry(
                "registry must contain at least one page",
            ));
        }

        let mut seen = HashSet::with_capacity(pages.len());
        for page in &pages {
            if page.id.is_empty() {
                return Err(DeckError::invalid_registry("page id must not be empty"));
            }
            if !seen.insert(page.id.as_str()) {
                return Err(DeckError::invalid_registry(format!(
                    "duplicate page id: {}",
                    page.id
                )));
            }
        }

        Ok(Self {
            pages: pages.into(),
        })
    }

    pub(super) fn from_validated(pages: Vec<PageDescriptor>) -> Self {
        Self {
            pages: pages.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn first(&self) -> &PageDescriptor {
        &self.pages[0]
    }

    /// 0-based access.
    pub fn get(&self, index: usize) -> Option<&PageDescriptor> {
        self.pages.get(index)
    }

    /// 1-based position of `id`, or 0 when the id is not registered.
    pub fn index_of(&self, id: &str) -> usize {
        self.pages
            .iter()
            .position(|page| page.id == id)
            .map_or(0, |index| index + 1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageDescriptor> {
        self.pages.iter()
    }

    pub fn as_slice(&self) -> &[PageDescriptor] {
        &self.pages
    }

    pub fn to_json(&self) -> DeckResult<String> {
        Ok(serde_json::to_string(self.as_slice())?)
    }
}

impl<'a> IntoIterator for &'a PageRegistry {
    type Item = &'a PageDescriptor;
    type IntoIter = std::slice::Iter<'a, PageDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
