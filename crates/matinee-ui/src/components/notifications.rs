//! Player notification stack.
//!
//! Keeps the ordered list of playback notifications for one player scope
//! and renders it. The context owns the list; views share the reactive
//! handle and must not build a competing list for the same region.

use leptos::prelude::*;

use crate::types::PlayerNotif;

/// Context owning the notification list for one player scope.
///
/// Create one per player view (usually via [`PlayerNotifProvider`]);
/// mutations are synchronous and observed by subscribers on the next
/// render pass.
#[derive(Clone, Copy)]
pub struct PlayerNotifContext {
    /// Current notifications, in display order.
    pub notifs: ReadSignal<Vec<PlayerNotif>>,
    /// Signal to update the notification list.
    set_notifs: WriteSignal<Vec<PlayerNotif>>,
}

impl PlayerNotifContext {
    /// Create a context with an empty notification list.
    #[must_use]
    pub fn new() -> Self {
        let (notifs, set_notifs) = signal::<Vec<PlayerNotif>>(vec![]);
        Self { notifs, set_notifs }
    }

    /// Append a notification at the end of the list.
    ///
    /// Insertion order is display order. Nothing is deduplicated and the
    /// list is unbounded.
    pub fn push(&self, notif: PlayerNotif) {
        self.set_notifs.update(|notifs| notifs.push(notif));
    }

    /// Remove the notification at `index`, preserving the relative order
    /// of the rest.
    ///
    /// An out-of-range `index` is a no-op that returns `None`: the entry
    /// may already have been dismissed through another view, and the
    /// caller can still observe the miss.
    pub fn remove(&self, index: usize) -> Option<PlayerNotif> {
        if index >= self.notifs.with_untracked(Vec::len) {
            return None;
        }
        let mut removed = None;
        self.set_notifs.update(|notifs| {
            if index < notifs.len() {
                removed = Some(notifs.remove(index));
            }
        });
        removed
    }

    /// Drop every notification, replacing the list with a fresh one.
    ///
    /// Cleared entries never reappear in later states.
    pub fn clear(&self) {
        self.set_notifs.set(Vec::new());
    }

    /// Surface an error notification.
    pub fn error(&self, message: impl Into<String>) {
        self.push(PlayerNotif::error(message));
    }

    /// Surface a warning notification.
    pub fn warning(&self, message: impl Into<String>) {
        self.push(PlayerNotif::warning(message));
    }

    /// Surface an info notification.
    pub fn info(&self, message: impl Into<String>) {
        self.push(PlayerNotif::info(message));
    }
}

impl Default for PlayerNotifContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Stack of player notifications.
///
/// Place once inside the player view; it renders the context's list in
/// insertion order.
#[component]
pub fn PlayerNotifStack() -> impl IntoView {
    let ctx = expect_context::<PlayerNotifContext>();

    view! {
        <div class="notif-stack" data-testid="notif-stack">
            <For
                each={move || ctx.notifs.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(index, notif)| (*index, notif.message.clone())
                children=move |(index, notif)| {
                    view! {
                        <PlayerNotifRow
                            notif=notif
                            on_dismiss=Callback::new(move |()| {
                                ctx.remove(index);
                            })
                        />
                    }
                }
            />
        </div>
    }
}

/// A single notification row.
#[component]
fn PlayerNotifRow(
    /// The notification to display.
    notif: PlayerNotif,
    /// Callback when the viewer dismisses the notification.
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let notif_type = notif.notif_type;

    view! {
        <div
            class=format!("notif notif-{notif_type}")
            role="alert"
            aria-live="polite"
            data-testid="notif"
            data-notif-type=notif_type.to_string()
        >
            <div class="notif-body">
                <div class="notif-message">{notif.message}</div>
                {notif.details.map(|details| view! {
                    <div class="notif-details">{details}</div>
                })}
            </div>
            <button
                class="notif-dismiss btn btn-ghost"
                on:click=move |_| on_dismiss.run(())
                aria-label="Dismiss notification"
                data-testid="notif-dismiss"
            >
                "\u{2715}"
            </button>
        </div>
    }
}

/// Provider component that sets up the notification context.
///
/// Wrap the player view with this component; descendants reach the
/// context through [`use_player_notifs`].
#[component]
pub fn PlayerNotifProvider(
    /// Child components that can access the notification context.
    children: Children,
) -> impl IntoView {
    let ctx = PlayerNotifContext::new();
    provide_context(ctx);

    view! {
        {children()}
        <PlayerNotifStack />
    }
}

/// Hook to access the notification context.
///
/// # Panics
/// Panics if called outside of a `PlayerNotifProvider`.
pub fn use_player_notifs() -> PlayerNotifContext {
    expect_context::<PlayerNotifContext>()
}
