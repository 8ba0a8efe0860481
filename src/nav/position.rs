use crate::location::current_page_id;
use crate::registry::{PageDescriptor, PageRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStep {
    Next,
    Previous,
}

/// Where the current document sits in the registry. Derived, never stored
/// across page loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPosition {
    pub page_id: String,
    pub descriptor: Option<PageDescriptor>,
    /// 1-based; 0 when the page is not registered.
    pub one_based_index: usize,
    pub total: usize,
}

impl CurrentPosition {
    pub fn resolve(registry: &PageRegistry, pathname: &str) -> Self {
        let page_id = current_page_id(pathname, &registry.first().id);
        let one_based_index = registry.index_of(page_id);
        let descriptor = one_based_index
            .checked_sub(1)
            .and_then(|index| registry.get(index))
            .cloned();

        Self {
            page_id: page_id.to_string(),
            descriptor,
            one_based_index,
            total: registry.len(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.one_based_index > 0
    }

    pub fn is_home(&self) -> bool {
        self.one_based_index == 1
    }

    pub fn is_active(&self, page: &PageDescriptor) -> bool {
        self.descriptor
            .as_ref()
            .is_some_and(|current| current.id == page.id)
    }

    pub fn indicator_text(&self) -> String {
        format!("{} / {}", self.one_based_index, self.total)
    }

    /// Neighbour in `step` direction. Clamped at both ends; an unregistered
    /// page (index 0) steps forward onto the first entry.
    pub fn step_target<'r>(
        &self,
        registry: &'r PageRegistry,
        step: NavStep,
    ) -> Option<&'r PageDescriptor> {
        match step {
            NavStep::Next if self.one_based_index < registry.len() => {
                registry.get(self.one_based_index)
            }
            NavStep::Previous if self.one_based_index > 1 => {
                registry.get(self.one_based_index - 2)
            }
            _ => None,
        }
    }
}
