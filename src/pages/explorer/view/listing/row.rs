use super::truncate_middle;

use crate::models::file_entry::FileEntry;
use crate::pages::explorer::{ExplorerPage, ROW_HEIGHT};
use crate::services::explorer::Command;
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;
use gpui_component::{Icon, IconName, ListItem};

pub fn render(
    page: &ExplorerPage,
    entry: &FileEntry,
    ix: usize,
    cx: &mut Context<ExplorerPage>,
) -> impl IntoElement {
    let (icon_name, icon_color) = if entry.is_dir() {
        (IconName::Folder, rgb(theme::ACCENT))
    } else {
        (IconName::File, rgb(theme::MUTED))
    };
    let selected = page.state.selection.as_deref() == Some(entry.path.as_path());
    let bg_color = if selected { theme::BG_SELECTED } else { theme::BG };

    let max_chars = (page.col_name_width / 8.0) as usize;
    let display_name = truncate_middle(&entry.name, max_chars.max(20));
    let total_width = page.total_table_width();

    let click_path = entry.path.clone();
    let menu_path = entry.path.clone();

    div()
        .w(px(total_width))
        .on_mouse_down(
            MouseButton::Right,
            cx.listener(move |this, event: &MouseDownEvent, window, cx| {
                this.open_context_menu(event.position, Some(menu_path.clone()), window, cx);
                cx.stop_propagation();
            }),
        )
        .child(
            ListItem::new(("file-row", ix))
                .w(px(total_width))
                .h(px(ROW_HEIGHT))
                .px(px(24.0))
                .bg(rgb(bg_color))
                .on_click(cx.listener(move |this, event: &ClickEvent, window, cx| {
                    if let ClickEvent::Mouse(mouse) = event {
                        if mouse.up.button != MouseButton::Left {
                            return;
                        }
                        this.context_menu = None;
                        if mouse.up.click_count >= 2 {
                            this.dispatch(Command::Open(click_path.clone()), window, cx);
                        } else {
                            this.dispatch(Command::Select(Some(click_path.clone())), window, cx);
                        }
                    }
                }))
                .child(
                    div()
                        .flex()
                        .items_center()
                        .w_full()
                        .h_full()
                        .child(
                            div()
                                .flex()
                                .items_center()
                                .gap_2()
                                .w(px(page.col_name_width))
                                .flex_shrink_0()
                                .child(Icon::new(icon_name).size_4().text_color(icon_color))
                                .child(
                                    div()
                                        .text_sm()
                                        .font_weight(gpui::FontWeight::MEDIUM)
                                        .text_color(rgb(theme::FG))
                                        .overflow_hidden()
                                        .text_ellipsis()
                                        .whitespace_nowrap()
                                        .child(display_name),
                                ),
                        )
                        .child(cell(page.col_type_width, entry.type_label.clone()))
                        .child(cell(page.col_size_width, entry.size.clone()))
                        .child(cell(page.col_modified_width, entry.modified.clone())),
                ),
        )
}

fn cell(width: f32, text: String) -> impl IntoElement {
    div()
        .w(px(width))
        .flex_shrink_0()
        .text_sm()
        .text_color(rgb(theme::FG_SECONDARY))
        .overflow_hidden()
        .text_ellipsis()
        .whitespace_nowrap()
        .child(text)
}
