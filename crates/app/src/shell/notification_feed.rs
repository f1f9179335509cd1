use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    list::ListItem,
    v_flex,
};

use crate::shell::events::{FeedDismissed, FeedUnreadChanged};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotificationKind {
    Mention,
    Reaction,
    System,
}

impl NotificationKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Mention => "Mention",
            Self::Reaction => "Reaction",
            Self::System => "System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NotificationItem {
    id: &'static str,
    kind: NotificationKind,
    title: String,
    body: String,
    age_label: String,
    read: bool,
}

/// Third pane variant: recent activity across all conversations.
///
/// Items are a fixed in-process set for now; read state still round-trips
/// through the shell so the header badge stays accurate while the feed is
/// collapsed.
pub struct NotificationFeed {
    items: Vec<NotificationItem>,
}

impl EventEmitter<FeedDismissed> for NotificationFeed {}
impl EventEmitter<FeedUnreadChanged> for NotificationFeed {}

impl NotificationFeed {
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            items: starter_items(),
        }
    }

    pub fn unread(&self) -> usize {
        self.items.iter().filter(|item| !item.read).count()
    }

    fn mark_read(&mut self, id: &'static str, cx: &mut Context<Self>) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        if item.read {
            return;
        }

        item.read = true;
        cx.emit(FeedUnreadChanged {
            unread: self.unread(),
        });
        cx.notify();
    }

    fn mark_all_read(&mut self, cx: &mut Context<Self>) {
        if self.items.iter().all(|item| item.read) {
            return;
        }

        for item in &mut self.items {
            item.read = true;
        }
        cx.emit(FeedUnreadChanged { unread: 0 });
        cx.notify();
    }

    fn render_header(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();

        h_flex()
            .w_full()
            .items_center()
            .justify_between()
            .px_3()
            .py_2()
            .border_b_1()
            .border_color(theme.border)
            .child(Label::new("Notifications").text_sm())
            .child(
                h_flex()
                    .items_center()
                    .gap_1()
                    .child(
                        Button::new("feed-mark-all-read")
                            .ghost()
                            .small()
                            .icon(IconName::CircleCheck)
                            .on_click(cx.listener(|this, _, _window, cx| {
                                this.mark_all_read(cx);
                            })),
                    )
                    .child(
                        Button::new("feed-close")
                            .ghost()
                            .small()
                            .icon(IconName::Close)
                            .on_click(cx.listener(|_, _, _window, cx| {
                                cx.emit(FeedDismissed);
                            })),
                    ),
            )
            .into_any_element()
    }

    fn render_items(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();

        if self.items.is_empty() {
            return v_flex()
                .flex_1()
                .items_center()
                .justify_center()
                .child(
                    Label::new("You're all caught up")
                        .text_sm()
                        .text_color(theme.foreground.opacity(0.55)),
                )
                .into_any_element();
        }

        v_flex()
            .id("notification-feed-items")
            .flex_1()
            .min_h_0()
            .overflow_y_scroll()
            .py_1()
            .children(self.items.iter().enumerate().map(|(index, item)| {
                let id = item.id;

                div()
                    .w_full()
                    .px_2()
                    .py_0p5()
                    .child(
                        ListItem::new(("notification", index))
                            .w_full()
                            .px_2()
                            .py_2()
                            .rounded_md()
                            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                                this.mark_read(id, cx);
                            }))
                            .child(
                                h_flex()
                                    .w_full()
                                    .items_start()
                                    .gap_2()
                                    .child(
                                        div()
                                            .mt_1()
                                            .size(px(8.))
                                            .flex_shrink_0()
                                            .rounded_full()
                                            .when(!item.read, |el| el.bg(theme.primary)),
                                    )
                                    .child(
                                        v_flex()
                                            .flex_1()
                                            .min_w_0()
                                            .gap_0p5()
                                            .child(
                                                h_flex()
                                                    .w_full()
                                                    .items_center()
                                                    .justify_between()
                                                    .child(
                                                        Label::new(item.title.clone()).text_sm(),
                                                    )
                                                    .child(
                                                        Label::new(item.age_label.clone())
                                                            .text_xs()
                                                            .text_color(
                                                                theme.foreground.opacity(0.5),
                                                            ),
                                                    ),
                                            )
                                            .child(div().w_full().truncate().child(
                                                Label::new(item.body.clone()).text_xs().text_color(
                                                    theme.foreground.opacity(0.6),
                                                ),
                                            ))
                                            .child(
                                                Label::new(item.kind.tag())
                                                    .text_xs()
                                                    .text_color(theme.foreground.opacity(0.45)),
                                            ),
                                    ),
                            ),
                    )
            }))
            .into_any_element()
    }
}

impl Render for NotificationFeed {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        v_flex()
            .size_full()
            .min_w_0()
            .overflow_hidden()
            .bg(theme.background)
            .child(self.render_header(cx))
            .child(self.render_items(cx))
    }
}

fn starter_items() -> Vec<NotificationItem> {
    vec![
        NotificationItem {
            id: "notif_1",
            kind: NotificationKind::Mention,
            title: "Alice Wonderland".to_string(),
            body: "Mentioned you in a conversation".to_string(),
            age_label: "5m".to_string(),
            read: false,
        },
        NotificationItem {
            id: "notif_2",
            kind: NotificationKind::Reaction,
            title: "Bob The Builder".to_string(),
            body: "Reacted to your message".to_string(),
            age_label: "1h".to_string(),
            read: false,
        },
        NotificationItem {
            id: "notif_3",
            kind: NotificationKind::System,
            title: "Workspace".to_string(),
            body: "Diana Prince joined your workspace".to_string(),
            age_label: "2h".to_string(),
            read: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_feed_reports_unread_items() {
        let feed = NotificationFeed {
            items: starter_items(),
        };

        assert_eq!(feed.unread(), 2);
    }
}
