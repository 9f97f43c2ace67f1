use crate::models::clipboard::ClipOp;
use crate::services::explorer::keymap;
use crate::services::explorer::{AppState, Command, Effect, Explorer, Field};
use crate::services::fs::listing::SEARCH_PLACEHOLDER;
use crate::services::fs::{LocalFs, SystemLauncher};

use gpui::{
    px, size, AppContext, Context, Entity, FocusHandle, Focusable, IntoElement, KeyDownEvent,
    Pixels, Point, Render, Size, Window,
};
use gpui_component::input::{InputEvent, InputState};
use gpui_component::resizable::ResizableState;
use gpui_component::VirtualListScrollHandle;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;

mod types;
pub mod view;
pub use types::*;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 36.0;

pub struct ExplorerPage {
    pub explorer: Explorer<LocalFs, SystemLauncher>,
    pub state: AppState,
    pub path_input: Entity<InputState>,
    pub search_input: Entity<InputState>,
    pub dialog_input: Entity<InputState>,
    pub dialog: Option<Dialog>,
    pub context_menu: Option<ContextMenu>,
    pub resizable: Entity<ResizableState>,
    pub subs: Vec<gpui::Subscription>,
    pub virtual_scroll_handle: VirtualListScrollHandle,
    pub item_sizes: Rc<Vec<Size<Pixels>>>,
    pub col_name_width: f32,
    pub col_type_width: f32,
    pub col_size_width: f32,
    pub col_modified_width: f32,
    pub focus_handle: FocusHandle,
    pub focus_requested: bool,
}

impl Focusable for ExplorerPage {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl ExplorerPage {
    pub fn new(
        explorer: Explorer<LocalFs, SystemLauncher>,
        state: AppState,
        resizable: Entity<ResizableState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let path_input = cx.new(|cx| InputState::new(window, cx));
        let search_input = cx.new(|cx| InputState::new(window, cx).placeholder(SEARCH_PLACEHOLDER));
        let dialog_input = cx.new(|cx| InputState::new(window, cx));

        let cwd = state.cwd.display().to_string();
        path_input.update(cx, |input, cx| input.set_value(cwd, window, cx));

        let mut subs = Vec::new();
        subs.push(cx.subscribe_in(
            &path_input,
            window,
            |this, input, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    let text = input.read(cx).text().to_string();
                    this.dispatch(Command::Navigate(PathBuf::from(text.trim())), window, cx);
                }
            },
        ));
        subs.push(cx.subscribe_in(
            &dialog_input,
            window,
            |this, _input, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.confirm_dialog(window, cx);
                }
            },
        ));

        let mut page = Self {
            explorer,
            state,
            path_input,
            search_input,
            dialog_input,
            dialog: None,
            context_menu: None,
            resizable,
            subs,
            virtual_scroll_handle: VirtualListScrollHandle::new(),
            item_sizes: Rc::new(Vec::new()),
            col_name_width: 420.0,
            col_type_width: 120.0,
            col_size_width: 100.0,
            col_modified_width: 160.0,
            focus_handle: cx.focus_handle(),
            focus_requested: false,
        };
        page.update_item_sizes();
        page
    }

    /// Runs `command` and carries out the effects it returns.
    pub fn dispatch(&mut self, command: Command, window: &mut Window, cx: &mut Context<Self>) {
        self.apply(command, window, cx);
        cx.notify();
    }

    /// Like [`Self::dispatch`] without scheduling a redraw; used while rendering.
    pub fn apply(&mut self, command: Command, window: &mut Window, cx: &mut Context<Self>) {
        debug!(?command, "dispatch");
        let transition = self.explorer.handle(&self.state, command);
        let cwd_changed = transition.state.cwd != self.state.cwd;
        self.state = transition.state;
        self.update_item_sizes();
        if cwd_changed {
            let cwd = self.state.cwd.display().to_string();
            self.path_input
                .update(cx, |input, cx| input.set_value(cwd, window, cx));
        }

        for effect in transition.effects {
            match effect {
                Effect::ShowError { title, message } => {
                    self.dialog = Some(Dialog::Error { title, message });
                }
                Effect::ConfirmDelete(path) => self.dialog = Some(Dialog::ConfirmDelete(path)),
                Effect::ConfirmOverwrite(paths) => {
                    self.dialog = Some(Dialog::ConfirmOverwrite(paths));
                }
                Effect::PromptNewFolder { initial } => {
                    self.open_prompt(Dialog::NewFolder, initial, window, cx);
                }
                Effect::PromptRename { path, initial } => {
                    self.open_prompt(Dialog::Rename(path), initial, window, cx);
                }
                Effect::Focus(Field::PathBar) => {
                    self.path_input.update(cx, |input, cx| input.focus(window, cx));
                }
                Effect::Focus(Field::Search) => {
                    self.search_input.update(cx, |input, cx| input.focus(window, cx));
                }
                Effect::Opened(_) | Effect::TreeChanged => {}
            }
        }
    }

    fn open_prompt(
        &mut self,
        dialog: Dialog,
        initial: String,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.dialog = Some(dialog);
        self.dialog_input.update(cx, |input, cx| {
            input.set_value(initial, window, cx);
            input.focus(window, cx);
        });
    }

    pub fn confirm_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        match dialog {
            Dialog::Error { .. } => {}
            Dialog::ConfirmDelete(path) => {
                self.apply(Command::Select(Some(path)), window, cx);
                self.apply(Command::Delete { confirmed: true }, window, cx);
            }
            Dialog::ConfirmOverwrite(_) => self.apply(Command::PasteConfirmed, window, cx),
            Dialog::NewFolder => {
                let name = self.dialog_input.read(cx).text().to_string();
                self.apply(Command::NewFolder(name), window, cx);
            }
            Dialog::Rename(path) => {
                let name = self.dialog_input.read(cx).text().to_string();
                self.apply(Command::Select(Some(path)), window, cx);
                self.apply(Command::Rename(name), window, cx);
            }
        }
        self.refocus_page(window);
        cx.notify();
    }

    pub fn cancel_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(Dialog::ConfirmDelete(_)) = self.dialog {
            self.apply(Command::Delete { confirmed: false }, window, cx);
        }
        self.dialog = None;
        self.refocus_page(window);
        cx.notify();
    }

    fn refocus_page(&self, window: &mut Window) {
        // A follow-up error dialog keeps focus where it is.
        if self.dialog.is_none() {
            window.focus(&self.focus_handle);
        }
    }

    pub fn open_context_menu(
        &mut self,
        position: Point<Pixels>,
        target: Option<PathBuf>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.apply(Command::Select(target), window, cx);
        self.context_menu = Some(ContextMenu { position });
        cx.notify();
    }

    pub fn handle_key_down(
        &mut self,
        event: &KeyDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let key = event.keystroke.key.to_lowercase();
        if self.dialog.is_some() {
            match key.as_str() {
                "escape" => self.cancel_dialog(window, cx),
                "enter" if !self.dialog.as_ref().is_some_and(Dialog::takes_text) => {
                    self.confirm_dialog(window, cx)
                }
                _ => return,
            }
            cx.stop_propagation();
            return;
        }
        if self.context_menu.is_some() && key == "escape" {
            self.context_menu = None;
            cx.notify();
            cx.stop_propagation();
            return;
        }

        let m = &event.keystroke.modifiers;
        let Some(shortcut) = keymap::lookup(&key, m.control, m.alt, m.platform) else {
            return;
        };
        if shortcut.edits_text() && self.text_input_focused(window, cx) {
            return;
        }
        self.context_menu = None;
        self.dispatch(shortcut.command(), window, cx);
        cx.stop_propagation();
    }

    fn text_input_focused(&self, window: &Window, cx: &Context<Self>) -> bool {
        [&self.path_input, &self.search_input, &self.dialog_input]
            .into_iter()
            .any(|input| input.read(cx).focus_handle(cx).is_focused(window))
    }

    /// Picks up search field edits; the listing follows every keystroke.
    pub fn sync_query(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let text = self.search_input.read(cx).text().to_string();
        if text != self.state.query {
            self.apply(Command::SetQuery(text), window, cx);
        }
    }

    pub fn clipboard_summary(&self) -> Option<String> {
        let clip = &self.state.clipboard;
        let op = clip.op()?;
        let verb = match op {
            ClipOp::Copy => "copy",
            ClipOp::Cut => "cut",
        };
        Some(match clip.items() {
            [one] => format!(
                "{}: {}",
                verb,
                one.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| one.display().to_string())
            ),
            many => format!("{}: {} items", verb, many.len()),
        })
    }

    fn update_item_sizes(&mut self) {
        let width = self.total_table_width();
        self.item_sizes = Rc::new(
            self.state
                .entries
                .iter()
                .map(|_| size(px(width), px(ROW_HEIGHT)))
                .collect(),
        );
    }

    pub fn total_table_width(&self) -> f32 {
        self.col_name_width
            + self.col_type_width
            + self.col_size_width
            + self.col_modified_width
            + 48.0
    }
}

impl Render for ExplorerPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        view::render(self, window, cx)
    }
}
