use std::fmt;

/// A lazily resolved chain of CSS selector steps.
///
/// Each step is evaluated against the descendants of every element matched by
/// the previous step; `nth` pins a step to a single match in document order.
/// Locators carry no reference to a live page, so the same value can be
/// resolved against a page driver or a detached [`Document`](super::Document).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Step {
    selector: String,
    index: Option<usize>,
}

impl Locator {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            steps: vec![Step {
                selector: selector.into(),
                index: None,
            }],
        }
    }

    /// Narrow to descendants of this locator's matches.
    #[must_use]
    pub fn locator(&self, selector: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.steps.push(Step {
            selector: selector.into(),
            index: None,
        });
        next
    }

    #[must_use]
    pub fn nth(&self, index: usize) -> Self {
        let mut next = self.clone();
        if let Some(last) = next.steps.last_mut() {
            last.index = Some(index);
        }
        next
    }

    #[must_use]
    pub fn first(&self) -> Self {
        self.nth(0)
    }

    pub(crate) fn steps(&self) -> impl Iterator<Item = (&str, Option<usize>)> {
        self.steps.iter().map(|s| (s.selector.as_str(), s.index))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " >> ")?;
            }
            write!(f, "{}", step.selector)?;
            if let Some(index) = step.index {
                write!(f, " >> nth={index}")?;
            }
        }
        Ok(())
    }
}
