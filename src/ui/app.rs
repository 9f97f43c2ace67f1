#![cfg(feature = "gui")]

use crate::core::config::ExplorerConfig;
use crate::pages::explorer::ExplorerPage;
use crate::services::explorer::Explorer;
use crate::services::fs::tree::default_roots;
use crate::services::fs::{LocalFs, SystemLauncher};
use crate::ui::assets::Assets;
use crate::ui::components::layout::footer::{footer, FooterProps};
use crate::ui::theme::theme;

use gpui::Entity;
use gpui::{
    div, prelude::*, px, rgb, size, App, Application, Bounds, Context, FocusHandle, Focusable,
    IntoElement, Render, Window, WindowBounds, WindowOptions,
};
use gpui_component::resizable::ResizableState;
use gpui_component::Root;
use tracing::{error, info};

pub struct PaddlApp;

impl PaddlApp {
    /// Opens the browser window and blocks until it is closed.
    pub fn run(config: ExplorerConfig) -> anyhow::Result<()> {
        let explorer = Explorer::new(LocalFs, SystemLauncher, config);
        let state = explorer.initial_state(default_roots(&LocalFs))?;
        info!(cwd = %state.cwd.display(), "starting explorer");

        Application::new().with_assets(Assets).run(move |app: &mut App| {
            gpui_component::init(app);
            let resizable = ResizableState::new(app);
            let bounds = Bounds::centered(None, size(px(1100.0), px(650.0)), app);
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            };

            let opened = app.open_window(options, |window, cx| {
                window.set_window_title(crate::services::explorer::APP_TITLE);
                let focus_handle = cx.focus_handle();
                let explorer_page =
                    cx.new(|cx| ExplorerPage::new(explorer, state, resizable, window, cx));
                let view = cx.new(|_cx| RootView {
                    focus_handle,
                    explorer: explorer_page,
                });
                cx.new(|cx| Root::new(view.into(), window, cx))
            });
            if let Err(e) = opened {
                error!(error = %e, "failed to open window");
                app.quit();
            }
        });
        Ok(())
    }
}

pub struct RootView {
    focus_handle: FocusHandle,
    explorer: Entity<ExplorerPage>,
}

impl Focusable for RootView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for RootView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let props = {
            let page = self.explorer.read(cx);
            FooterProps {
                status: page.state.status.clone(),
                clipboard: page.clipboard_summary(),
                show_hidden: page.state.show_hidden,
            }
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(theme::BG))
            .text_color(rgb(theme::FG))
            .relative()
            .track_focus(&self.focus_handle)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .min_h(px(0.0))
                    .child(self.explorer.clone()),
            )
            .child(footer(props, cx))
            .children(Root::render_modal_layer(window, cx))
            .children(Root::render_notification_layer(window, cx))
    }
}
