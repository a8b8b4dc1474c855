use crate::form::field::FieldId;

/// Declarative focus request over an ordered list of field targets. The
/// engine records where focus should go; the rendering layer observes
/// `current_id` and applies it.
#[derive(Debug, Default, Clone)]
pub struct FocusState {
    targets: Vec<FieldId>,
    index: Option<usize>,
}

impl FocusState {
    pub fn from_ids(ids: Vec<FieldId>) -> Self {
        Self {
            targets: ids,
            index: None,
        }
    }

    pub fn rebuild(&mut self, ids: &[FieldId]) {
        self.targets = ids.to_vec();
        self.index = None;
    }

    pub fn current_id(&self) -> Option<&str> {
        self.index
            .and_then(|i| self.targets.get(i))
            .map(|id| id.as_str())
    }

    pub fn set_focus_by_id(&mut self, id: &str) {
        self.index = self.targets.iter().position(|target| target == id);
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn next(&mut self) {
        if self.targets.is_empty() {
            self.index = None;
            return;
        }
        self.index = Some(match self.index {
            Some(current) => (current + 1) % self.targets.len(),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        if self.targets.is_empty() {
            self.index = None;
            return;
        }
        self.index = Some(match self.index {
            Some(current) => (current + self.targets.len() - 1) % self.targets.len(),
            None => self.targets.len() - 1,
        });
    }
}
