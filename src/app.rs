pub struct BranchItem {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Accepted,
    Aborted,
}

/// State behind the multi-select screen.
pub struct SelectApp {
    title: String,
    branches: Vec<BranchItem>,
    cursor: usize,
    outcome: Option<SelectOutcome>,
}

impl SelectApp {
    pub fn new<S: Into<String>>(title: S, branches: Vec<String>) -> Self {
        let items = branches
            .into_iter()
            .map(|name| BranchItem {
                name,
                selected: false,
            })
            .collect();
        Self {
            title: title.into(),
            branches: items,
            cursor: 0,
            outcome: None,
        }
    }

    pub fn move_down(&mut self) {
        if self.branches.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1).min(self.branches.len() - 1);
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn toggle_current(&mut self) {
        if let Some(current) = self.branches.get_mut(self.cursor) {
            current.selected = !current.selected;
        }
    }

    pub fn toggle_all(&mut self) {
        let all_selected = self.branches.iter().all(|branch| branch.selected);
        for branch in &mut self.branches {
            branch.selected = !all_selected;
        }
    }

    /// Accept the current selection, empty included.
    pub fn accept(&mut self) {
        self.outcome = Some(SelectOutcome::Accepted);
    }

    pub fn abort(&mut self) {
        self.outcome = Some(SelectOutcome::Aborted);
    }

    pub fn outcome(&self) -> Option<SelectOutcome> {
        self.outcome
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn items(&self) -> &[BranchItem] {
        &self.branches
    }

    pub fn selected_count(&self) -> usize {
        self.branches
            .iter()
            .filter(|branch| branch.selected)
            .count()
    }

    pub fn total_count(&self) -> usize {
        self.branches.len()
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.branches
            .iter()
            .filter(|branch| branch.selected)
            .map(|branch| branch.name.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Answered(bool),
    Aborted,
}

/// State behind a yes/no screen. `yes` tracks the highlighted button; No is
/// highlighted initially.
pub struct ConfirmApp {
    title: String,
    details: Vec<String>,
    yes: bool,
    outcome: Option<ConfirmOutcome>,
}

impl ConfirmApp {
    pub fn new<S: Into<String>>(title: S, details: Vec<String>) -> Self {
        Self {
            title: title.into(),
            details,
            yes: false,
            outcome: None,
        }
    }

    pub fn toggle(&mut self) {
        self.yes = !self.yes;
    }

    pub fn answer(&mut self, yes: bool) {
        self.outcome = Some(ConfirmOutcome::Answered(yes));
    }

    /// Answer with whichever button is highlighted.
    pub fn accept(&mut self) {
        self.outcome = Some(ConfirmOutcome::Answered(self.yes));
    }

    pub fn abort(&mut self) {
        self.outcome = Some(ConfirmOutcome::Aborted);
    }

    pub fn outcome(&self) -> Option<ConfirmOutcome> {
        self.outcome
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn yes_highlighted(&self) -> bool {
        self.yes
    }
}
