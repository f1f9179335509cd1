use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::notification::NotificationList;
use gpui_component::{ActiveTheme, h_flex};

use mica_core::{ConversationId, ShellState, ThirdPaneContent, is_desktop_width, resolve};
use mica_storage::{ChannelDirectory, ChannelId, MemoryStore, MessageLog, UserDirectory};

use crate::preferences::PreferenceStore;
use crate::shell::events::{
    BackRequested, ConversationSelected, DetailClosed, DetailToggled, FeedDismissed, FeedToggled,
    FeedUnreadChanged, MessageSubmitted, PinToggled,
};
use crate::shell::time::{relative_age_label, unix_now_seconds};
use crate::shell::{
    ConversationEntry, ConversationListPane, ConversationPane, ConversationSnapshot, DetailPane,
    DetailSubject, MessageView, NotificationFeed,
};

/// Width of the conversation list on wide windows.
pub const LIST_PANE_WIDTH: f32 = 320.0;
/// Width of the third pane (notification feed or counterpart details).
pub const THIRD_PANE_WIDTH: f32 = 340.0;
/// Compile-time validation of the pane layout constants.
const _: () = {
    assert!(LIST_PANE_WIDTH > 0.0);
    assert!(THIRD_PANE_WIDTH > 0.0);
    assert!(LIST_PANE_WIDTH + THIRD_PANE_WIDTH < mica_core::DESKTOP_BREAKPOINT);
};

gpui::actions!(shell, [Quit,]);

/// Root view that wires the store, the view-state machine, and the panes.
///
/// Panes never read the store directly. Every intent lands here, mutates
/// `ShellState` or the store, and the changed snapshots are pushed back down,
/// so a pane can never render state the machine has already left.
pub struct ShellRoot {
    notification_list: Entity<NotificationList>,
    store: MemoryStore,
    state: ShellState,
    preferences: PreferenceStore,
    list_pane: Entity<ConversationListPane>,
    conversation_pane: Entity<ConversationPane>,
    detail_pane: Entity<DetailPane>,
    notification_feed: Entity<NotificationFeed>,
    feed_unread: usize,
    desktop: bool,
}

impl ShellRoot {
    pub fn new(
        notification_list: Entity<NotificationList>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let preferences = PreferenceStore::load();
        let state = ShellState::new(preferences.preferences().notification_feed_collapsed);
        let store = MemoryStore::seeded();
        // Seed the flag from the real viewport so the first chrome push does
        // not assume a wide window.
        let desktop = is_desktop_width(f32::from(window.viewport_size().width));

        let list_pane = cx.new(|cx| ConversationListPane::new(window, cx));
        let conversation_pane = cx.new(|cx| ConversationPane::new(window, cx));
        let detail_pane = cx.new(|cx| DetailPane::new(window, cx));
        let notification_feed = cx.new(|cx| NotificationFeed::new(window, cx));

        cx.subscribe(
            &list_pane,
            |this, _, event: &ConversationSelected, cx| {
                this.select_conversation(event.channel_id.clone(), cx);
            },
        )
        .detach();

        cx.subscribe(&conversation_pane, |this, _, _event: &BackRequested, cx| {
            this.go_back(cx);
        })
        .detach();
        cx.subscribe(&conversation_pane, |this, _, _event: &DetailToggled, cx| {
            this.toggle_detail_panel(cx);
        })
        .detach();
        cx.subscribe(&conversation_pane, |this, _, _event: &FeedToggled, cx| {
            this.toggle_notification_feed(cx);
        })
        .detach();
        cx.subscribe(
            &conversation_pane,
            |this, _, event: &MessageSubmitted, cx| {
                this.send_message(event.content.clone(), cx);
            },
        )
        .detach();

        cx.subscribe(&detail_pane, |this, _, _event: &DetailClosed, cx| {
            this.close_detail_panel(cx);
        })
        .detach();
        cx.subscribe(&detail_pane, |this, _, _event: &PinToggled, cx| {
            this.toggle_pin(cx);
        })
        .detach();

        cx.subscribe(&notification_feed, |this, _, _event: &FeedDismissed, cx| {
            this.dismiss_notification_feed(cx);
        })
        .detach();
        cx.subscribe(
            &notification_feed,
            |this, _, event: &FeedUnreadChanged, cx| {
                this.feed_unread = event.unread;
                this.sync_panes(cx);
                cx.notify();
            },
        )
        .detach();

        let feed_unread = notification_feed.read(cx).unread();

        let mut shell = Self {
            notification_list,
            store,
            state,
            preferences,
            list_pane,
            conversation_pane,
            detail_pane,
            notification_feed,
            feed_unread,
            desktop,
        };
        shell.sync_panes(cx);
        shell
    }

    fn selected_channel_id(&self) -> Option<ChannelId> {
        self.state
            .selected()
            .map(|id: &ConversationId| ChannelId::new(id.as_str()))
    }

    fn select_conversation(&mut self, channel_id: ChannelId, cx: &mut Context<Self>) {
        self.store.mark_channel_read(&channel_id);
        self.state
            .select_conversation(ConversationId::new(channel_id.as_str()));
        self.sync_panes(cx);
        cx.notify();
    }

    fn go_back(&mut self, cx: &mut Context<Self>) {
        self.state.go_back();
        self.sync_panes(cx);
        cx.notify();
    }

    fn toggle_detail_panel(&mut self, cx: &mut Context<Self>) {
        // Ignored simply means nothing is selected; nothing to render either way.
        self.state.toggle_detail_panel();
        self.sync_panes(cx);
        cx.notify();
    }

    fn close_detail_panel(&mut self, cx: &mut Context<Self>) {
        self.state.close_detail_panel();
        self.sync_panes(cx);
        cx.notify();
    }

    fn toggle_pin(&mut self, cx: &mut Context<Self>) {
        self.state.toggle_pin();
        self.sync_panes(cx);
        cx.notify();
    }

    fn toggle_notification_feed(&mut self, cx: &mut Context<Self>) {
        let next = !self.state.panel().notification_collapsed;
        self.persist_feed_collapsed(next);
        self.state.toggle_notification_feed();
        self.sync_panes(cx);
        cx.notify();
    }

    fn dismiss_notification_feed(&mut self, cx: &mut Context<Self>) {
        self.persist_feed_collapsed(true);
        self.state.collapse_notification_feed();
        self.sync_panes(cx);
        cx.notify();
    }

    /// The durable write happens before the in-memory flip; a failed write is
    /// logged and the session continues with the new value anyway.
    fn persist_feed_collapsed(&mut self, collapsed: bool) {
        if let Err(error) = self.preferences.set_notification_feed_collapsed(collapsed) {
            tracing::warn!("failed to persist notification feed preference: {error}");
        }
    }

    fn send_message(&mut self, content: String, cx: &mut Context<Self>) {
        let Some(channel_id) = self.selected_channel_id() else {
            return;
        };

        if self.store.append_message(&channel_id, &content).is_none() {
            tracing::warn!("dropping message for unknown channel {channel_id}");
            return;
        }

        self.sync_panes(cx);
        cx.notify();
    }

    /// Counterpart of the selected direct message, if the directory has it.
    fn resolved_counterpart(&self) -> Option<mica_storage::UserRecord> {
        let channel_id = self.selected_channel_id()?;
        let channel = self.store.get_channel(&channel_id)?;
        let counterpart_id = channel.counterpart_of(self.store.viewer_id())?.clone();
        self.store.get_user(&counterpart_id)
    }

    /// Pushes fresh snapshots into every pane.
    fn sync_panes(&mut self, cx: &mut Context<Self>) {
        let selected = self.selected_channel_id();
        let now = unix_now_seconds();
        let viewer_id = self.store.viewer_id().clone();

        let entries: Vec<ConversationEntry> = self
            .store
            .list_channels()
            .into_iter()
            .map(|channel| {
                let counterpart = channel
                    .counterpart_of(&viewer_id)
                    .and_then(|id| self.store.get_user(id));
                let last = self.store.last_message(&channel.id);

                ConversationEntry {
                    id: channel.id.clone(),
                    avatar_initial: counterpart
                        .as_ref()
                        .map(|user| user.avatar_initial())
                        .or_else(|| channel.name.chars().next())
                        .unwrap_or('?'),
                    presence: counterpart
                        .as_ref()
                        .map(|user| user.presence)
                        .unwrap_or(mica_storage::Presence::Offline),
                    preview: last
                        .as_ref()
                        .map(|message| message.content.clone())
                        .unwrap_or_else(|| "No messages yet".to_string()),
                    age_label: last
                        .as_ref()
                        .map(|message| relative_age_label(message.sent_at_unix_seconds, now))
                        .unwrap_or_default(),
                    unread_count: channel.unread_count,
                    name: channel.name,
                }
            })
            .collect();

        self.list_pane.update(cx, |pane, cx| {
            pane.set_entries(entries, selected.clone(), cx);
        });

        let snapshot = selected.as_ref().and_then(|channel_id| {
            let channel = self.store.get_channel(channel_id)?;
            let counterpart = channel
                .counterpart_of(&viewer_id)
                .and_then(|id| self.store.get_user(id));

            let messages = self
                .store
                .messages_for_channel(channel_id)
                .into_iter()
                .map(|message| MessageView {
                    mine: message.author_id == viewer_id,
                    author_name: self
                        .store
                        .get_user(&message.author_id)
                        .map(|user| user.username)
                        .unwrap_or_else(|| message.author_id.to_string()),
                    age_label: relative_age_label(message.sent_at_unix_seconds, now),
                    id: message.id,
                    content: message.content,
                })
                .collect();

            Some(ConversationSnapshot {
                channel_id: channel.id.clone(),
                avatar_initial: counterpart
                    .as_ref()
                    .map(|user| user.avatar_initial())
                    .or_else(|| channel.name.chars().next())
                    .unwrap_or('?'),
                status_line: counterpart
                    .as_ref()
                    .map(|user| user.status_line().to_string())
                    .unwrap_or_default(),
                presence: counterpart.as_ref().map(|user| user.presence),
                title: channel.name,
                messages,
            })
        });
        let has_selection = selected.is_some();

        self.conversation_pane.update(cx, |pane, cx| {
            pane.set_view(snapshot, has_selection, cx);
        });
        self.sync_chrome(cx);

        let subject = self.resolved_counterpart().map(|user| DetailSubject {
            avatar_initial: user.avatar_initial(),
            status_line: user.status_line().to_string(),
            presence: user.presence,
            username: user.username,
        });
        let pinned = self.state.panel().pinned;
        self.detail_pane.update(cx, |pane, cx| {
            pane.set_subject(subject, cx);
            pane.set_pinned(pinned, cx);
        });
    }

    fn sync_chrome(&mut self, cx: &mut Context<Self>) {
        let panel = self.state.panel();
        let desktop = self.desktop;
        let feed_unread = self.feed_unread;

        self.conversation_pane.update(cx, |pane, cx| {
            pane.set_chrome(
                desktop,
                panel.detail_open,
                panel.notification_collapsed,
                feed_unread,
                cx,
            );
        });
    }
}

impl Render for ShellRoot {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let width = f32::from(window.viewport_size().width);
        let desktop = is_desktop_width(width);
        if desktop != self.desktop {
            self.desktop = desktop;
            self.sync_chrome(cx);
        }

        let decision = resolve(
            desktop,
            self.state.selected(),
            self.state.panel(),
            self.resolved_counterpart().is_some(),
        );
        let theme = cx.theme();

        div()
            .size_full()
            .relative()
            .bg(theme.background)
            .child(
                h_flex()
                    .size_full()
                    .min_w_0()
                    .min_h_0()
                    .overflow_hidden()
                    .when(decision.show_list_pane, |el| {
                        el.child(
                            div()
                                .id("list-pane-container")
                                .h_full()
                                .min_w_0()
                                .overflow_hidden()
                                .map(|el| {
                                    if desktop {
                                        el.w(px(LIST_PANE_WIDTH))
                                            .flex_shrink_0()
                                            .border_r_1()
                                            .border_color(theme.border)
                                    } else {
                                        el.flex_1()
                                    }
                                })
                                .child(self.list_pane.clone()),
                        )
                    })
                    .when(decision.show_conversation_pane, |el| {
                        el.child(
                            div()
                                .id("conversation-pane-container")
                                .flex_1()
                                .h_full()
                                .min_w_0()
                                .overflow_hidden()
                                .child(self.conversation_pane.clone()),
                        )
                    })
                    .map(|el| {
                        let pane = match decision.third_pane_content {
                            ThirdPaneContent::UserDetail => {
                                self.detail_pane.clone().into_any_element()
                            }
                            ThirdPaneContent::Notifications => {
                                self.notification_feed.clone().into_any_element()
                            }
                            ThirdPaneContent::None => return el,
                        };

                        el.child(
                            div()
                                .id("third-pane-container")
                                .h_full()
                                .w(px(THIRD_PANE_WIDTH))
                                .flex_shrink_0()
                                .min_w_0()
                                .overflow_hidden()
                                .border_l_1()
                                .border_color(theme.border)
                                .child(pane),
                        )
                    }),
            )
            .child(self.notification_list.clone())
    }
}
