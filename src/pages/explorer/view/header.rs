use crate::pages::explorer::ExplorerPage;
use crate::services::explorer::Command;
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;
use gpui_component::input::TextInput;
use gpui_component::{Icon, IconName, ListItem};

/// Toolbar: parent button, editable path bar, search field, hidden toggle.
pub fn render(
    page: &mut ExplorerPage,
    _window: &mut Window,
    cx: &mut Context<ExplorerPage>,
) -> impl IntoElement {
    let show_hidden = page.state.show_hidden;
    let at_root = page.state.cwd.parent().is_none();

    div()
        .bg(rgb(theme::BG))
        .border_b_1()
        .border_color(rgb(theme::BORDER))
        .flex()
        .items_center()
        .text_color(rgb(theme::FG))
        .px(px(12.0))
        .py(px(8.0))
        .gap_2()
        .child(
            ListItem::new("nav-parent")
                .px(px(8.0))
                .py(px(6.0))
                .rounded(px(6.0))
                .flex_shrink_0()
                .when(at_root, |this| this.opacity(0.3))
                .when(!at_root, |this| {
                    this.on_click(cx.listener(|view, _, window, cx| {
                        view.dispatch(Command::NavigateParent, window, cx)
                    }))
                })
                .child(div().text_sm().text_color(rgb(theme::FG_SECONDARY)).child("↑")),
        )
        .child(
            div()
                .flex_1()
                .min_w(px(0.0))
                .child(TextInput::new(&page.path_input)),
        )
        .child(
            div()
                .flex()
                .items_center()
                .gap_1()
                .w(px(220.0))
                .flex_shrink_0()
                .child(
                    Icon::new(IconName::Search)
                        .size_4()
                        .text_color(rgb(theme::FG_SECONDARY)),
                )
                .child(div().flex_1().child(TextInput::new(&page.search_input))),
        )
        .child(
            ListItem::new("toggle-hidden")
                .px(px(8.0))
                .py(px(6.0))
                .rounded(px(6.0))
                .flex_shrink_0()
                .when(show_hidden, |this| this.bg(rgb(theme::BG_HOVER)))
                .on_click(cx.listener(|view, _, window, cx| {
                    view.dispatch(Command::ToggleHidden, window, cx)
                }))
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_1()
                        .child(
                            Icon::new(if show_hidden {
                                IconName::Eye
                            } else {
                                IconName::EyeOff
                            })
                            .size_4()
                            .text_color(if show_hidden {
                                rgb(theme::ACCENT)
                            } else {
                                rgb(theme::MUTED)
                            }),
                        )
                        .child(
                            div()
                                .text_xs()
                                .text_color(rgb(theme::FG_SECONDARY))
                                .whitespace_nowrap()
                                .child(if show_hidden { "Hidden: on" } else { "Hidden: off" }),
                        ),
                ),
        )
}
