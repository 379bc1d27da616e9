use std::collections::VecDeque;
use std::time::{Duration, Instant};

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastPhase {
    /// Entering from the right; the value is how far in, `0.0..1.0`.
    SlidingIn(f64),
    Visible,
    /// Leaving to the right; the value is how far out, `0.0..1.0`.
    SlidingOut(f64),
    Expired,
}

impl ToastPhase {
    /// Share of the toast's width that is on screen.
    pub fn visible_ratio(self) -> f64 {
        match self {
            ToastPhase::SlidingIn(p) => p,
            ToastPhase::Visible => 1.0,
            ToastPhase::SlidingOut(p) => 1.0 - p,
            ToastPhase::Expired => 0.0,
        }
    }
}

/// Notifications that slide in, stay for `lifetime`, then slide out.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
    slide: Duration,
}

impl ToastQueue {
    pub fn new(lifetime: Duration, slide: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
            slide,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) -> Uuid {
        self.push_at(message, Instant::now())
    }

    pub fn push_at(&mut self, message: impl Into<String>, now: Instant) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push_back(Toast {
            id,
            message: message.into(),
            created_at: now,
        });
        id
    }

    pub fn phase(&self, toast: &Toast, now: Instant) -> ToastPhase {
        let age = now.saturating_duration_since(toast.created_at);
        let ratio = |elapsed: Duration| {
            if self.slide.is_zero() {
                1.0
            } else {
                (elapsed.as_secs_f64() / self.slide.as_secs_f64()).min(1.0)
            }
        };

        if age < self.slide {
            ToastPhase::SlidingIn(ratio(age))
        } else if age < self.lifetime {
            ToastPhase::Visible
        } else if age < self.lifetime + self.slide {
            ToastPhase::SlidingOut(ratio(age - self.lifetime))
        } else {
            ToastPhase::Expired
        }
    }

    /// Drops expired toasts and returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        let lifetime = self.lifetime + self.slide;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.created_at) < lifetime);
        before - self.toasts.len()
    }

    pub fn visible(&self, now: Instant) -> impl Iterator<Item = (&Toast, ToastPhase)> {
        self.toasts
            .iter()
            .map(move |toast| (toast, self.phase(toast, now)))
            .filter(|(_, phase)| *phase != ToastPhase::Expired)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> ToastQueue {
        ToastQueue::new(Duration::from_millis(3000), Duration::from_millis(300))
    }

    #[test]
    fn walks_through_phases() {
        let mut toasts = queue();
        let start = Instant::now();
        toasts.push_at("Opening app store...", start);
        let toast = toasts.visible(start).next().unwrap().0.clone();

        assert_eq!(toasts.phase(&toast, start), ToastPhase::SlidingIn(0.0));
        assert_eq!(
            toasts.phase(&toast, start + Duration::from_millis(150)),
            ToastPhase::SlidingIn(0.5)
        );
        assert_eq!(
            toasts.phase(&toast, start + Duration::from_millis(1000)),
            ToastPhase::Visible
        );
        assert_eq!(
            toasts.phase(&toast, start + Duration::from_millis(3150)),
            ToastPhase::SlidingOut(0.5)
        );
        assert_eq!(
            toasts.phase(&toast, start + Duration::from_millis(3300)),
            ToastPhase::Expired
        );
    }

    #[test]
    fn prune_removes_only_expired() {
        let mut toasts = queue();
        let start = Instant::now();
        toasts.push_at("first", start);
        toasts.push_at("second", start + Duration::from_millis(2000));

        assert_eq!(toasts.prune(start + Duration::from_millis(3299)), 0);
        assert_eq!(toasts.prune(start + Duration::from_millis(3300)), 1);
        assert_eq!(toasts.len(), 1);

        let remaining: Vec<_> = toasts
            .visible(start + Duration::from_millis(3300))
            .map(|(t, _)| t.message.clone())
            .collect();
        assert_eq!(remaining, vec!["second".to_string()]);
    }

    #[test]
    fn visible_ratio_follows_slide() {
        assert_eq!(ToastPhase::SlidingIn(0.25).visible_ratio(), 0.25);
        assert_eq!(ToastPhase::Visible.visible_ratio(), 1.0);
        assert_eq!(ToastPhase::SlidingOut(0.25).visible_ratio(), 0.75);
        assert_eq!(ToastPhase::Expired.visible_ratio(), 0.0);
    }
}
