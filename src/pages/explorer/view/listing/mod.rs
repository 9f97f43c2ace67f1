use crate::pages::explorer::ExplorerPage;
use gpui::*;

pub mod context_menu;
pub mod list;
pub mod row;

pub fn render(
    page: &mut ExplorerPage,
    _window: &mut Window,
    cx: &mut Context<ExplorerPage>,
) -> AnyElement {
    list::render(page, cx)
}

/// Shortens `text` to `max_len` chars, keeping the extension visible.
pub fn truncate_middle(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_len {
        return text.to_string();
    }

    let (stem, ext) = match text.rfind('.') {
        Some(dot) if dot > 0 => (&text[..dot], &text[dot..]),
        _ => (text, ""),
    };
    let ext_chars = ext.chars().count();
    if ext_chars + 3 >= max_len {
        let chars: Vec<char> = text.chars().collect();
        let head: String = chars[..max_len.saturating_sub(3)].iter().collect();
        return format!("{}...", head);
    }

    let budget = max_len - ext_chars - 3;
    let keep_start = budget / 2;
    let keep_end = budget - keep_start;
    let stem_chars: Vec<char> = stem.chars().collect();
    let start: String = stem_chars[..keep_start].iter().collect();
    let end: String = stem_chars[stem_chars.len() - keep_end..].iter().collect();
    format!("{}...{}{}", start, end, ext)
}

#[cfg(test)]
mod tests {
    use super::truncate_middle;

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(truncate_middle("notes.txt", 20), "notes.txt");
    }

    #[test]
    fn long_names_keep_their_extension() {
        let out = truncate_middle("a_really_long_report_name_2024.pdf", 20);
        assert_eq!(out.chars().count(), 20);
        assert!(out.ends_with(".pdf"));
        assert!(out.contains("..."));
    }

    #[test]
    fn names_without_extension_are_split_in_the_middle() {
        assert_eq!(truncate_middle("abcdefghijklmnop", 9), "abc...nop");
    }
}
