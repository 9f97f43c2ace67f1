use crate::pages::explorer::ExplorerPage;
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;

pub mod dialog;
pub mod header;
pub mod listing;
pub mod sidebar;

pub fn render(
    page: &mut ExplorerPage,
    window: &mut Window,
    cx: &mut Context<ExplorerPage>,
) -> impl IntoElement {
    page.sync_query(window, cx);
    if !page.focus_requested {
        page.focus_requested = true;
        cx.focus_self(window);
    }

    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(theme::BG))
        .relative()
        .track_focus(&page.focus_handle)
        .on_key_down(cx.listener(|this, event: &gpui::KeyDownEvent, window, cx| {
            this.handle_key_down(event, window, cx);
        }))
        .child(header::render(page, window, cx))
        .child(
            div().flex().flex_row().flex_grow().min_h(px(0.0)).child(
                gpui_component::resizable::h_resizable("file-explorer", page.resizable.clone())
                    .child(
                        gpui_component::resizable::resizable_panel()
                            .size(px(260.0))
                            .size_range(px(160.0)..px(480.0))
                            .child(
                                div()
                                    .size_full()
                                    .overflow_hidden()
                                    .border_r_1()
                                    .border_color(rgb(theme::BORDER))
                                    .child(sidebar::render(page, window, cx)),
                            ),
                    )
                    .child(
                        gpui_component::resizable::resizable_panel().child(
                            div()
                                .size_full()
                                .flex()
                                .flex_col()
                                .min_h(px(0.0))
                                .overflow_hidden()
                                .child(listing::render(page, window, cx)),
                        ),
                    )
                    .into_any_element(),
            ),
        )
        .when_some(page.context_menu, |this, menu| {
            this.child(listing::context_menu::render(page, menu, cx))
        })
        .when_some(page.dialog.clone(), |this, dialog| {
            this.child(dialog::render(page, dialog, cx))
        })
}
