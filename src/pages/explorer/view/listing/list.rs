use super::row;
use crate::pages::explorer::{ExplorerPage, HEADER_HEIGHT};
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;
use gpui_component::v_virtual_list;
use std::rc::Rc;

pub fn render(page: &mut ExplorerPage, cx: &mut Context<ExplorerPage>) -> AnyElement {
    let table_width = page.total_table_width();
    let entity = cx.entity().clone();

    let mut all_sizes = vec![gpui::size(px(table_width), px(HEADER_HEIGHT))];
    all_sizes.extend(page.item_sizes.as_ref().iter().copied());
    let all_sizes = Rc::new(all_sizes);
    let scroll_handle = page.virtual_scroll_handle.clone();
    let empty = page.state.entries.is_empty();

    div()
        .id("file-table-area")
        .relative()
        .size_full()
        .flex()
        .flex_col()
        .min_h(px(0.0))
        .overflow_hidden()
        .on_mouse_down(
            MouseButton::Right,
            cx.listener(|this, event: &MouseDownEvent, window, cx| {
                this.open_context_menu(event.position, None, window, cx);
            }),
        )
        .child(
            div().flex_1().overflow_hidden().child(
                v_virtual_list(
                    entity,
                    "file-table",
                    all_sizes,
                    move |view, visible_range, _window, cx| {
                        visible_range
                            .filter_map(|ix| {
                                if ix == 0 {
                                    Some(render_header_row(view, table_width).into_any_element())
                                } else {
                                    let data_ix = ix - 1;
                                    view.state.entries.get(data_ix).cloned().map(|entry| {
                                        row::render(view, &entry, data_ix, cx).into_any_element()
                                    })
                                }
                            })
                            .collect()
                    },
                )
                .track_scroll(&scroll_handle),
            ),
        )
        .when(empty, |this| {
            this.child(
                div()
                    .absolute()
                    .top(px(HEADER_HEIGHT + 24.0))
                    .left_0()
                    .right_0()
                    .flex()
                    .justify_center()
                    .text_sm()
                    .text_color(rgb(theme::MUTED))
                    .child("No items"),
            )
        })
        .into_any_element()
}

fn render_header_row(page: &ExplorerPage, table_width: f32) -> impl IntoElement {
    div()
        .w(px(table_width))
        .h(px(HEADER_HEIGHT))
        .px(px(24.0))
        .bg(rgb(theme::BG))
        .border_b_1()
        .border_color(rgb(theme::BORDER))
        .child(
            div()
                .flex()
                .items_center()
                .w_full()
                .h_full()
                .child(column_header("Name", page.col_name_width))
                .child(column_header("Type", page.col_type_width))
                .child(column_header("Size", page.col_size_width))
                .child(column_header("Date", page.col_modified_width)),
        )
}

fn column_header(label: &'static str, width: f32) -> impl IntoElement {
    div()
        .w(px(width))
        .flex_shrink_0()
        .text_xs()
        .font_weight(gpui::FontWeight::SEMIBOLD)
        .text_color(rgb(theme::FG_SECONDARY))
        .child(label)
}
