//! Queue entry card component.

use leptos::prelude::*;

use matinee_core::QueueItem;

/// Format a duration in seconds as M:SS or H:MM:SS.
fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;
    if hours > 0 {
        format!("{hours}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}

/// Card for one entry of the playback queue.
///
/// Entries whose metadata has not resolved yet render a placeholder
/// thumbnail and a fallback title.
#[component]
pub fn QueueCard(
    /// The queue entry to display.
    item: QueueItem,
    /// Callback when the viewer removes the entry.
    on_remove: Callback<()>,
) -> impl IntoView {
    let title = item.video.display_title().to_owned();
    let service = item.video.id.service.to_string();
    let thumbnail = item.video.thumbnail_url().map(str::to_owned);
    let duration = item
        .effective_end()
        .map(|end| format_duration(end.saturating_sub(item.effective_start())));

    view! {
        <div class="queue-card" data-testid="queue-card">
            {if let Some(url) = thumbnail {
                view! { <img class="queue-card-thumb" src=url alt="" /> }.into_any()
            } else {
                view! { <div class="queue-card-thumb placeholder" aria-hidden="true"></div> }
                    .into_any()
            }}
            <div class="queue-card-body">
                <div class="queue-card-title">{title}</div>
                <div class="queue-card-meta">
                    <span class="queue-card-service">{service}</span>
                    {duration.map(|d| view! { <span class="queue-card-duration">{d}</span> })}
                </div>
            </div>
            <button
                class="btn btn-ghost queue-card-remove"
                aria-label="Remove from queue"
                data-testid="queue-card-remove"
                on:click=move |_| on_remove.run(())
            >
                "\u{2715}"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(596), "9:56");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3725), "1:02:05");
    }
}
