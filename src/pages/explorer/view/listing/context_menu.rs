use crate::pages::explorer::{ContextMenu, ExplorerPage};
use crate::services::explorer::Command;
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;
use gpui_component::ListItem;

const ITEMS: [(&str, MenuAction); 7] = [
    ("Open", MenuAction::Open),
    ("New folder", MenuAction::NewFolder),
    ("Rename", MenuAction::Rename),
    ("Cut", MenuAction::Cut),
    ("Copy", MenuAction::Copy),
    ("Paste", MenuAction::Paste),
    ("Delete", MenuAction::Delete),
];

#[derive(Clone, Copy)]
enum MenuAction {
    Open,
    NewFolder,
    Rename,
    Cut,
    Copy,
    Paste,
    Delete,
}

impl MenuAction {
    fn command(self) -> Command {
        match self {
            MenuAction::Open => Command::OpenSelected,
            MenuAction::NewFolder => Command::PromptNewFolder,
            MenuAction::Rename => Command::PromptRename,
            MenuAction::Cut => Command::Cut,
            MenuAction::Copy => Command::Copy,
            MenuAction::Paste => Command::Paste,
            MenuAction::Delete => Command::RequestDelete,
        }
    }

    fn needs_selection(self) -> bool {
        matches!(
            self,
            MenuAction::Open
                | MenuAction::Rename
                | MenuAction::Cut
                | MenuAction::Copy
                | MenuAction::Delete
        )
    }
}

/// Popup at the pointer with the file actions for the selected entry.
pub fn render(
    page: &ExplorerPage,
    menu: ContextMenu,
    cx: &mut Context<ExplorerPage>,
) -> impl IntoElement {
    let has_selection = page.state.selection.is_some();
    let can_paste = !page.state.clipboard.is_empty();

    let mut items = div().flex().flex_col().py(px(4.0));
    for (ix, (label, action)) in ITEMS.into_iter().enumerate() {
        let enabled = match action {
            MenuAction::Paste => can_paste,
            a if a.needs_selection() => has_selection,
            _ => true,
        };
        let color = match action {
            MenuAction::Delete if enabled => rgb(theme::DANGER),
            _ if enabled => rgb(theme::FG),
            _ => rgb(theme::MUTED),
        };
        items = items.child(
            ListItem::new(("context-item", ix))
                .px(px(12.0))
                .py(px(4.0))
                .when(enabled, |this| {
                    this.on_click(cx.listener(move |view, _, window, cx| {
                        view.context_menu = None;
                        view.dispatch(action.command(), window, cx);
                    }))
                })
                .child(div().text_sm().text_color(color).child(label)),
        );
    }

    deferred(
        anchored().position(menu.position).child(
            div()
                .id("context-menu")
                .min_w(px(160.0))
                .bg(rgb(theme::BG_SECONDARY))
                .border_1()
                .border_color(rgb(theme::BORDER))
                .rounded(px(6.0))
                .shadow_md()
                .on_mouse_down_out(cx.listener(|view, _, _, cx| {
                    view.context_menu = None;
                    cx.notify();
                }))
                .child(items),
        ),
    )
    .with_priority(1)
}
