/// An ordered list of caller-owned elements whose visibility follows the
/// active page.
///
/// When [`ItemList::has_header`] is true, index `0` is a header row: it stays
/// visible on every page and record indices are shifted by one.
pub trait ItemList {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn has_header(&self) -> bool;

    fn set_visible(&mut self, index: usize, visible: bool);
}

/// Placeholder list for paginators that do not manage any elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoItems;

impl ItemList for NoItems {
    fn len(&self) -> usize {
        0
    }

    fn has_header(&self) -> bool {
        false
    }

    fn set_visible(&mut self, _index: usize, _visible: bool) {}
}

/// In-memory visibility flags, one per element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMask {
    visible: Vec<bool>,
    header: bool,
}

impl VisibilityMask {
    /// A list of `len` elements, all initially visible.
    pub fn new(len: usize) -> Self {
        Self {
            visible: vec![true; len],
            header: false,
        }
    }

    /// A list of `len` elements where the first one is a header row.
    pub fn with_header(len: usize) -> Self {
        Self {
            visible: vec![true; len],
            header: true,
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(index, visible)| visible.then_some(index))
            .collect()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.visible
    }
}

impl ItemList for VisibilityMask {
    fn len(&self) -> usize {
        self.visible.len()
    }

    fn has_header(&self) -> bool {
        self.header
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(slot) = self.visible.get_mut(index) {
            *slot = visible;
        }
    }
}
