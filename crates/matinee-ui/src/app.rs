//! Main application component.

use leptos::prelude::*;

use matinee_core::{QueueItem, Video, VideoId};

use crate::components::{PlayerNotifProvider, QueueCard, use_player_notifs};
use crate::types::PlayerNotif;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>{include_str!("../styles/main.css")}</style>
        <PlayerNotifProvider>
            <PlayerPage />
        </PlayerNotifProvider>
    }
}

/// Player page: the playback queue plus the notification stack mounted by
/// the surrounding provider.
#[component]
fn PlayerPage() -> impl IntoView {
    let notifs = use_player_notifs();

    let (queue, set_queue) = signal::<Vec<QueueItem>>(vec![]);
    let (link, set_link) = signal(String::new());

    let add_link = move |_| {
        let url = link.get();
        match VideoId::from_url(&url) {
            Ok(id) => {
                set_queue.update(|queue| queue.push(QueueItem::new(Video::new(id))));
                set_link.set(String::new());
            }
            Err(err) => {
                notifs.push(
                    PlayerNotif::error("Could not add link").with_details(err.to_string()),
                );
            }
        }
    };

    let remove_at = move |index: usize| {
        set_queue.update(|queue| {
            if index < queue.len() {
                queue.remove(index);
            }
        });
    };

    view! {
        <main class="player-page">
            <section class="queue-panel">
                <h2>"Up next"</h2>
                <div class="queue-add">
                    <input
                        type="text"
                        placeholder="Paste a video link"
                        prop:value=move || link.get()
                        on:input=move |ev| set_link.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=add_link>"Add"</button>
                </div>
                <For
                    each={move || queue.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, item)| (*index, item.video.id.clone())
                    children=move |(index, item)| {
                        view! {
                            <QueueCard
                                item=item
                                on_remove=Callback::new(move |()| remove_at(index))
                            />
                        }
                    }
                />
            </section>
        </main>
    }
}
