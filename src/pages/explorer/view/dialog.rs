use crate::pages::explorer::{Dialog, ExplorerPage};
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;
use gpui_component::input::TextInput;
use gpui_component::ListItem;

const MAX_LISTED: usize = 8;

/// Modal box over the whole page. Enter confirms, Escape cancels.
pub fn render(
    page: &ExplorerPage,
    dialog: Dialog,
    cx: &mut Context<ExplorerPage>,
) -> impl IntoElement {
    let title = dialog.title();
    let is_error = matches!(dialog, Dialog::Error { .. });

    let body = match &dialog {
        Dialog::Error { message, .. } => text_line(message.clone()).into_any_element(),
        Dialog::ConfirmDelete(path) => text_line(format!(
            "Delete \"{}\"? This cannot be undone.",
            path.display()
        ))
        .into_any_element(),
        Dialog::ConfirmOverwrite(paths) => {
            let mut list = div()
                .flex()
                .flex_col()
                .gap_1()
                .child(text_line("These items already exist and will be overwritten:".to_string()));
            for path in paths.iter().take(MAX_LISTED) {
                list = list.child(
                    div()
                        .text_xs()
                        .text_color(rgb(theme::FG_SECONDARY))
                        .child(path.display().to_string()),
                );
            }
            if paths.len() > MAX_LISTED {
                list = list.child(
                    div()
                        .text_xs()
                        .text_color(rgb(theme::MUTED))
                        .child(format!("and {} more", paths.len() - MAX_LISTED)),
                );
            }
            list.into_any_element()
        }
        Dialog::NewFolder | Dialog::Rename(_) => div()
            .flex()
            .flex_col()
            .gap_2()
            .child(text_line("Name:".to_string()))
            .child(TextInput::new(&page.dialog_input))
            .into_any_element(),
    };

    div()
        .id("dialog-overlay")
        .absolute()
        .inset_0()
        .flex()
        .items_center()
        .justify_center()
        .bg(rgba(theme::OVERLAY))
        .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
        .child(
            div()
                .w(px(420.0))
                .flex()
                .flex_col()
                .gap_3()
                .p(px(16.0))
                .bg(rgb(theme::BG_SECONDARY))
                .border_1()
                .border_color(rgb(if is_error { theme::DANGER } else { theme::BORDER }))
                .rounded(px(8.0))
                .shadow_lg()
                .child(
                    div()
                        .text_sm()
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(rgb(if is_error { theme::DANGER } else { theme::FG }))
                        .child(title),
                )
                .child(body)
                .child(
                    div()
                        .flex()
                        .justify_end()
                        .gap_2()
                        .when(!is_error, |this| {
                            this.child(button("dialog-cancel", "Cancel", cx.listener(
                                |view, _, window, cx| view.cancel_dialog(window, cx),
                            )))
                        })
                        .child(button("dialog-ok", "OK", cx.listener(
                            |view, _, window, cx| view.confirm_dialog(window, cx),
                        ))),
                ),
        )
}

fn text_line(text: String) -> impl IntoElement {
    div().text_sm().text_color(rgb(theme::FG)).child(text)
}

fn button(
    id: &'static str,
    label: &'static str,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> impl IntoElement {
    ListItem::new(id)
        .px(px(14.0))
        .py(px(6.0))
        .rounded(px(6.0))
        .border_1()
        .border_color(rgb(theme::BORDER))
        .on_click(on_click)
        .child(div().text_sm().text_color(rgb(theme::FG)).child(label))
}
