use crate::models::tree_node::TreeRow;
use crate::pages::explorer::ExplorerPage;
use crate::services::explorer::Command;
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;
use gpui_component::{Icon, IconName, ListItem};

const INDENT: f32 = 14.0;

/// Directory tree. Only expanded nodes contribute rows.
pub fn render(
    page: &mut ExplorerPage,
    _window: &mut Window,
    cx: &mut Context<ExplorerPage>,
) -> impl IntoElement {
    let rows = page.state.tree.visible_rows();
    let mut list = div().flex().flex_col().gap_0p5().px(px(4.0));
    for (ix, row) in rows.into_iter().enumerate() {
        let current = row.path == page.state.cwd;
        list = list.child(tree_row(ix, row, current, cx));
    }

    div()
        .id("dir-tree")
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(theme::BG))
        .py(px(8.0))
        .overflow_y_scroll()
        .child(
            div()
                .px(px(12.0))
                .py(px(6.0))
                .text_xs()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(rgb(theme::FG_SECONDARY))
                .child("Folders"),
        )
        .child(list)
}

fn tree_row(
    ix: usize,
    row: TreeRow,
    current: bool,
    cx: &mut Context<ExplorerPage>,
) -> impl IntoElement {
    let toggle_path = row.path.clone();
    let expanded = row.expanded;
    let nav_path = row.path;

    ListItem::new(("tree-row", ix))
        .pl(px(8.0 + row.depth as f32 * INDENT))
        .py(px(2.0))
        .rounded(px(4.0))
        .when(current, |this| this.bg(rgb(theme::BG_SELECTED)))
        .on_click(cx.listener(move |this, _, window, cx| {
            this.dispatch(Command::Navigate(nav_path.clone()), window, cx)
        }))
        .child(
            div()
                .flex()
                .items_center()
                .gap_1()
                .child(
                    div()
                        .id(("tree-toggle", ix))
                        .p(px(2.0))
                        .rounded(px(4.0))
                        .hover(|s| s.bg(rgb(theme::BG_HOVER)))
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(move |this, _, window, cx| {
                                let command = if expanded {
                                    Command::CollapseNode(toggle_path.clone())
                                } else {
                                    Command::ExpandNode(toggle_path.clone())
                                };
                                this.dispatch(command, window, cx);
                                cx.stop_propagation();
                            }),
                        )
                        .child(
                            Icon::new(if expanded {
                                IconName::ChevronDown
                            } else {
                                IconName::ChevronRight
                            })
                            .size_3()
                            .text_color(rgb(theme::MUTED)),
                        ),
                )
                .child(
                    Icon::new(if expanded {
                        IconName::FolderOpen
                    } else {
                        IconName::Folder
                    })
                    .size_4()
                    .text_color(rgb(theme::ACCENT)),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(if current {
                            rgb(theme::FG)
                        } else {
                            rgb(theme::FG_SECONDARY)
                        })
                        .whitespace_nowrap()
                        .overflow_hidden()
                        .text_ellipsis()
                        .child(row.label),
                ),
        )
}
