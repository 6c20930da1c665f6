use crate::domain::model::OptionItem;
use crate::domain::ports::SelectControl;

/// In-memory select control standing in for the page's
/// `<select id="dropdown">`: an ordered option list plus a selection index.
#[derive(Debug, Clone)]
pub struct SelectBox {
    id: String,
    options: Vec<OptionItem>,
    selected: usize,
}

impl SelectBox {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            selected: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// One line per option, `>` marking the selection.
    pub fn render(&self) -> String {
        let mut out = format!("[{}] {} option(s)", self.id, self.options.len());
        for (i, option) in self.options.iter().enumerate() {
            let marker = if i == self.selected { '>' } else { ' ' };
            let value = option.value.as_deref().unwrap_or("-");
            let disabled = if option.disabled { " (disabled)" } else { "" };
            out.push_str(&format!(
                "\n {} {} [value={}]{}",
                marker, option.label, value, disabled
            ));
        }
        out
    }
}

impl SelectControl for SelectBox {
    fn clear(&mut self) {
        self.options.clear();
        self.selected = 0;
    }

    fn append(&mut self, option: OptionItem) {
        self.options.push(option);
    }

    fn set_selected_index(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = index;
        }
    }

    fn options(&self) -> &[OptionItem] {
        &self.options
    }

    fn selected_index(&self) -> usize {
        self.selected
    }
}
