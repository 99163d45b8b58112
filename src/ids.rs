//! DOM identifiers shared by the notification header and card body.

/// Identifiers for one notification category.
///
/// The header toggles the body through `toggle_target`, so both sides must be
/// derived here. Category labels are interpolated verbatim; callers keep them
/// unique within a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardIds {
    category: String,
}

impl CardIds {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    pub fn header(&self) -> String {
        format!("accordion-header-{}", self.category)
    }

    pub fn body(&self) -> String {
        format!("accordion-body-{}", self.category)
    }

    pub fn form_container(&self) -> String {
        format!("form-container-{}", self.category)
    }

    /// Selector used by the collapse toggle (`data-target`).
    pub fn toggle_target(&self) -> String {
        format!("#{}", self.body())
    }
}
