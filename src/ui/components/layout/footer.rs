#![cfg(feature = "gui")]

use crate::ui::theme::theme;
use gpui::{div, prelude::*, px, rgb, Context, IntoElement};
use gpui_component::{Icon, IconName};

#[derive(Clone, Default)]
pub struct FooterProps {
    /// `<cwd> | <n> items`, or the outcome of the last command.
    pub status: String,
    pub clipboard: Option<String>,
    pub show_hidden: bool,
}

/// Status bar along the bottom of the window.
pub fn footer<V: gpui::Render>(props: FooterProps, cx: &mut Context<V>) -> impl IntoElement {
    div()
        .h(px(28.0))
        .w_full()
        .flex()
        .items_center()
        .justify_between()
        .px(px(8.0))
        .bg(rgb(theme::BG_SECONDARY))
        .border_t_1()
        .border_color(rgb(theme::BORDER))
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .min_w(px(0.0))
                .child(footer_item(
                    ("footer-status", 0_usize),
                    IconName::Folder,
                    &truncate_middle_path(&props.status, 120),
                    cx,
                )),
        )
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .flex_shrink_0()
                .when_some(props.clipboard.clone(), |this, clip| {
                    this.child(footer_item(
                        ("footer-clipboard", 1_usize),
                        IconName::Copy,
                        &clip,
                        cx,
                    ))
                })
                .child(footer_item(
                    ("footer-hidden", 2_usize),
                    if props.show_hidden {
                        IconName::Eye
                    } else {
                        IconName::EyeOff
                    },
                    if props.show_hidden {
                        "hidden shown"
                    } else {
                        "hidden off"
                    },
                    cx,
                )),
        )
}

fn footer_item<V: gpui::Render>(
    id: impl Into<gpui::ElementId>,
    icon: IconName,
    label: &str,
    _cx: &mut Context<V>,
) -> impl IntoElement {
    let label = label.to_string();
    let has_label = !label.is_empty();

    div()
        .id(id)
        .h(px(24.0))
        .px(px(8.0))
        .flex()
        .items_center()
        .gap_1()
        .rounded(px(4.0))
        .child(Icon::new(icon).size_3().text_color(rgb(theme::FG_SECONDARY)))
        .when(has_label, |this| {
            this.child(
                div()
                    .text_xs()
                    .text_color(rgb(theme::FG_SECONDARY))
                    .whitespace_nowrap()
                    .child(label),
            )
        })
}

fn truncate_middle_path(text: &str, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }
    let keep = (max_chars - 3) / 2;
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}...{}", head, tail)
}
