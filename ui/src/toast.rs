//! App-wide transient notifications, rendered as a stack in the corner.
//!
//! Errors linger a second longer than the rest. Entries carry their expiry
//! instant; the provider wakes up periodically and drops whatever has lapsed,
//! so no per-toast task is ever spawned.

use std::time::{Duration, Instant};

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }

    fn lifetime(self) -> Duration {
        match self {
            ToastKind::Error => Duration::from_millis(4000),
            _ => Duration::from_millis(3000),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
    expires_at: Instant,
}

#[derive(Clone, Debug, Default)]
struct ToastStack {
    entries: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    fn push(&mut self, kind: ToastKind, message: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            kind,
            message,
            expires_at: Instant::now() + kind.lifetime(),
        });
    }

    fn any_expired(&self, now: Instant) -> bool {
        self.entries.iter().any(|t| t.expires_at <= now)
    }

    fn prune(&mut self, now: Instant) {
        self.entries.retain(|t| t.expires_at > now);
    }
}

/// Cheap, copyable handle for raising notifications from any view.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    stack: Signal<ToastStack>,
}

impl ToastHandle {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut stack = self.stack;
        stack.write().push(kind, message);
    }
}

pub fn use_toast() -> ToastHandle {
    ToastHandle {
        stack: use_context(),
    }
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut stack = use_context_provider(|| Signal::new(ToastStack::default()));

    // Sweep lapsed entries. Only writes when something actually expired, so
    // the sweep itself never causes a re-render of an idle tree.
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_millis(250)).await;
            let now = Instant::now();
            if stack.peek().any_expired(now) {
                stack.write().prune(now);
            }
        }
    });

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for toast in stack().entries.iter() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_outlive_other_kinds() {
        assert!(ToastKind::Error.lifetime() > ToastKind::Success.lifetime());
        assert!(ToastKind::Error.lifetime() > ToastKind::Info.lifetime());
    }

    #[test]
    fn prune_drops_only_lapsed_entries() {
        let mut stack = ToastStack::default();
        stack.push(ToastKind::Info, "first".to_string());
        stack.push(ToastKind::Error, "second".to_string());
        assert_eq!(stack.entries.len(), 2);

        // Nothing has lapsed yet
        let now = Instant::now();
        assert!(!stack.any_expired(now));
        stack.prune(now);
        assert_eq!(stack.entries.len(), 2);

        // Jump past the info lifetime but not the error one
        let later = now + Duration::from_millis(3500);
        assert!(stack.any_expired(later));
        stack.prune(later);
        assert_eq!(stack.entries.len(), 1);
        assert_eq!(stack.entries[0].message, "second");
    }

    #[test]
    fn ids_are_monotonic() {
        let mut stack = ToastStack::default();
        stack.push(ToastKind::Info, "a".to_string());
        stack.push(ToastKind::Info, "b".to_string());
        assert!(stack.entries[0].id < stack.entries[1].id);
    }
}
