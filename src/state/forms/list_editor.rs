//! Add/remove editors for the URL lists of a draft

/// Which draft list an editor is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Socials,
    News,
}

impl ListKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Socials => "Social Media Links",
            Self::News => "News Items",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Socials => "Enter a social media URL",
            Self::News => "Enter a news item URL",
        }
    }
}

/// Pending entry and selection cursor for one list.
///
/// The committed entries live in the draft; the editor only owns the text
/// that has not been added yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEditor {
    pub pending: String,
    /// Entry highlighted for removal
    pub selected: Option<usize>,
}

impl ListEditor {
    /// Commit the pending entry to `list`.
    ///
    /// Whitespace-only entries are ignored. Returns true if an entry was added.
    pub fn add(&mut self, list: &mut Vec<String>) -> bool {
        if self.pending.trim().is_empty() {
            tracing::debug!("Pending entry is empty, not adding");
            return false;
        }
        let entry = std::mem::take(&mut self.pending);
        tracing::debug!(entry = %entry, "Adding list entry");
        list.push(entry);
        true
    }

    /// Remove the entry at `index`, keeping the rest in order
    pub fn remove(&mut self, list: &mut Vec<String>, index: usize) -> Option<String> {
        if index >= list.len() {
            return None;
        }
        tracing::debug!(index, "Removing list entry");
        let removed = list.remove(index);
        self.clamp_selection(list.len());
        Some(removed)
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }

    /// Move the cursor up; moving above the first entry returns to the input
    pub fn select_prev(&mut self) {
        self.selected = match self.selected {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    fn clamp_selection(&mut self, len: usize) {
        if let Some(i) = self.selected {
            self.selected = if len == 0 { None } else { Some(i.min(len - 1)) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_then_blank_then_remove() {
        let mut editor = ListEditor::default();
        let mut socials = Vec::new();

        editor.pending = "https://x.com".to_string();
        assert!(editor.add(&mut socials));
        assert_eq!(socials, strings(&["https://x.com"]));
        assert_eq!(editor.pending, "");

        editor.pending = "  ".to_string();
        assert!(!editor.add(&mut socials));
        assert_eq!(socials, strings(&["https://x.com"]));

        assert_eq!(editor.remove(&mut socials, 0), Some("https://x.com".to_string()));
        assert!(socials.is_empty());
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut editor = ListEditor::default();
        let mut list = strings(&["a", "b"]);
        editor.pending = "c".to_string();
        editor.add(&mut list);
        assert_eq!(list, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_add_keeps_entry_untrimmed() {
        let mut editor = ListEditor::default();
        let mut list = Vec::new();
        editor.pending = " https://y.com ".to_string();
        editor.add(&mut list);
        assert_eq!(list, strings(&[" https://y.com "]));
    }

    #[test]
    fn test_blank_add_keeps_pending_text() {
        let mut editor = ListEditor::default();
        let mut list = Vec::new();
        editor.pending = "\t ".to_string();
        editor.add(&mut list);
        assert_eq!(editor.pending, "\t ");
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut editor = ListEditor::default();
        let mut list = Vec::new();
        for _ in 0..2 {
            editor.pending = "same".to_string();
            editor.add(&mut list);
        }
        assert_eq!(list, strings(&["same", "same"]));
    }

    #[test]
    fn test_remove_middle_shifts_down() {
        let mut editor = ListEditor::default();
        let mut list = strings(&["a", "b", "c", "d"]);
        editor.remove(&mut list, 1);
        assert_eq!(list, strings(&["a", "c", "d"]));
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut editor = ListEditor::default();
        let mut list = strings(&["a"]);
        assert_eq!(editor.remove(&mut list, 5), None);
        assert_eq!(list, strings(&["a"]));
    }

    #[test]
    fn test_remove_clamps_cursor() {
        let mut editor = ListEditor {
            selected: Some(2),
            ..Default::default()
        };
        let mut list = strings(&["a", "b", "c"]);
        assert_eq!(editor.remove(&mut list, 2), Some("c".to_string()));
        assert_eq!(editor.selected, Some(1));

        editor.remove(&mut list, 1);
        editor.remove(&mut list, 0);
        assert!(list.is_empty());
        assert_eq!(editor.selected, None);
    }

    #[test]
    fn test_selection_movement() {
        let mut editor = ListEditor::default();
        editor.select_next(2);
        assert_eq!(editor.selected, Some(0));
        editor.select_next(2);
        editor.select_next(2);
        assert_eq!(editor.selected, Some(1));
        editor.select_prev();
        editor.select_prev();
        assert_eq!(editor.selected, None);
    }

    #[test]
    fn test_select_next_on_empty_list() {
        let mut editor = ListEditor::default();
        editor.select_next(0);
        assert_eq!(editor.selected, None);
    }
}
