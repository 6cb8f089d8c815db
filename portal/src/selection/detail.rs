/// The record shown in a screen's detail dialog, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSelection<K> {
    selected: Option<K>,
}

impl<K> Default for DetailSelection<K> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<K: PartialEq> DetailSelection<K> {
    /// Shows `key`, replacing whatever was shown before.
    pub fn open(&mut self, key: K) {
        self.selected = Some(key);
    }

    /// Hides the dialog.
    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Whether `key` is the record on display.
    pub fn is_showing(&self, key: &K) -> bool {
        self.selected.as_ref() == Some(key)
    }
}
