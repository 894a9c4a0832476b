//! Leptos Toast Notifications
//!
//! Fire-and-forget toast queue for Leptos apps.
//! Free functions push messages from anywhere; the Toaster component
//! renders the queue and expires entries on a timer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Display time for non-sticky toasts
const DEFAULT_DURATION_MS: u32 = 4000;

/// Visual flavor of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    /// Sticky until dismissed (spinner-style)
    Loading,
    Custom,
}

impl ToastLevel {
    pub fn as_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
            ToastLevel::Loading => "toast-loading",
            ToastLevel::Custom => "toast-custom",
        }
    }

    /// Loading toasts have no timer; everything else expires
    fn default_duration(&self) -> Option<u32> {
        match self {
            ToastLevel::Loading => None,
            _ => Some(DEFAULT_DURATION_MS),
        }
    }
}

/// Screen corner / edge a toast stack is pinned to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastPosition {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::TopRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
        ToastPosition::BottomRight,
    ];

    pub fn as_class(&self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::TopRight => "top-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
            ToastPosition::BottomRight => "bottom-right",
        }
    }
}

/// Per-toast overrides; unset fields fall back to level / Toaster defaults
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToastOptions {
    pub duration_ms: Option<u32>,
    pub position: Option<ToastPosition>,
}

/// Handle for dismissing a toast early
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// A queued message
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub level: ToastLevel,
    /// None means sticky
    pub duration_ms: Option<u32>,
    /// None means use the Toaster's position
    pub position: Option<ToastPosition>,
}

static TOASTS: OnceLock<RwSignal<Vec<Toast>>> = OnceLock::new();
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn toast_queue() -> RwSignal<Vec<Toast>> {
    *TOASTS.get_or_init(|| RwSignal::new(Vec::new()))
}

/// Queue a toast with level defaults
pub fn notify(message: impl Into<String>, level: ToastLevel) -> ToastId {
    notify_with(message, level, ToastOptions::default())
}

/// Queue a toast with explicit overrides
pub fn notify_with(message: impl Into<String>, level: ToastLevel, options: ToastOptions) -> ToastId {
    let id = ToastId(NEXT_ID.fetch_add(1, Ordering::Relaxed));
    let toast = Toast {
        id,
        message: message.into(),
        level,
        duration_ms: options.duration_ms.or(level.default_duration()),
        position: options.position,
    };
    toast_queue().update(|queue| queue.push(toast));
    id
}

pub fn success(message: impl Into<String>) -> ToastId {
    notify(message, ToastLevel::Success)
}

pub fn error(message: impl Into<String>) -> ToastId {
    notify(message, ToastLevel::Error)
}

/// Sticky toast; pair with dismiss() when the work finishes
pub fn loading(message: impl Into<String>) -> ToastId {
    notify(message, ToastLevel::Loading)
}

pub fn custom(message: impl Into<String>, options: ToastOptions) -> ToastId {
    notify_with(message, ToastLevel::Custom, options)
}

/// Remove a toast; unknown ids are ignored
pub fn dismiss(id: ToastId) {
    toast_queue().update(|queue| queue.retain(|toast| toast.id != id));
}

/// Renders the queue as per-position stacks
#[component]
pub fn Toaster(#[prop(optional)] position: Option<ToastPosition>) -> impl IntoView {
    let default_position = position.unwrap_or_default();
    let queue = toast_queue();
    view! {
        <div class="toaster">
            {ToastPosition::ALL
                .iter()
                .map(|stack_position| {
                    let stack_position = *stack_position;
                    let stack = move || {
                        queue.with(|toasts| {
                            toasts
                                .iter()
                                .filter(|toast| {
                                    toast.position.unwrap_or(default_position) == stack_position
                                })
                                .cloned()
                                .collect::<Vec<_>>()
                        })
                    };
                    view! {
                        <div class=format!("toast-stack {}", stack_position.as_class())>
                            <For
                                each=stack
                                key=|toast| toast.id
                                children=|toast: Toast| view! { <ToastView toast=toast/> }
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One toast; arms its expiry timer on mount, click dismisses
#[component]
fn ToastView(toast: Toast) -> impl IntoView {
    if let Some(duration_ms) = toast.duration_ms {
        let id = toast.id;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            dismiss(id);
        });
    }
    let id = toast.id;
    let class = format!("toast {}", toast.level.as_class());
    view! {
        <div class=class on:click=move |_| dismiss(id)>
            {toast.message}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The queue is process-global and tests run in parallel, so every
    // assertion is scoped to ids created by the test itself.
    fn find_toast(id: ToastId) -> Option<Toast> {
        toast_queue().with_untracked(|queue| queue.iter().find(|t| t.id == id).cloned())
    }

    #[test]
    fn test_notify_assigns_distinct_ids() {
        let first = success("saved");
        let second = success("saved");
        assert_ne!(first, second);
        assert!(find_toast(first).is_some());
        assert!(find_toast(second).is_some());
    }

    #[test]
    fn test_dismiss_removes_only_the_given_toast() {
        let doomed = error("boom");
        let kept = success("fine");
        dismiss(doomed);
        assert!(find_toast(doomed).is_none());
        assert!(find_toast(kept).is_some());
    }

    #[test]
    fn test_dismissing_unknown_id_is_harmless() {
        let kept = success("still here");
        dismiss(ToastId(u64::MAX));
        assert!(find_toast(kept).is_some());
    }

    #[test]
    fn test_loading_toasts_are_sticky() {
        let id = loading("working");
        let toast = find_toast(id).unwrap();
        assert_eq!(toast.level, ToastLevel::Loading);
        assert_eq!(toast.duration_ms, None);
    }

    #[test]
    fn test_success_and_error_expire_by_default() {
        let ok = success("done");
        let bad = error("failed");
        assert_eq!(find_toast(ok).unwrap().duration_ms, Some(DEFAULT_DURATION_MS));
        assert_eq!(find_toast(bad).unwrap().duration_ms, Some(DEFAULT_DURATION_MS));
    }

    #[test]
    fn test_options_override_duration_and_position() {
        let id = custom(
            "pinned",
            ToastOptions {
                duration_ms: Some(10_000),
                position: Some(ToastPosition::BottomRight),
            },
        );
        let toast = find_toast(id).unwrap();
        assert_eq!(toast.duration_ms, Some(10_000));
        assert_eq!(toast.position, Some(ToastPosition::BottomRight));
    }

    #[test]
    fn test_options_fall_back_to_level_defaults() {
        let id = notify_with("plain", ToastLevel::Success, ToastOptions::default());
        let toast = find_toast(id).unwrap();
        assert_eq!(toast.duration_ms, Some(DEFAULT_DURATION_MS));
        assert_eq!(toast.position, None);
    }
}
