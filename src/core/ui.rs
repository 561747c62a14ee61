use crate::config::toml_config::FlashRules;
use crate::domain::model::{ElementHandle, EventOutcome, TimerTask};
use crate::domain::ports::Document;
use chrono::NaiveDate;

/// Schedules fade-out and removal for every flash banner currently on the
/// page.
pub fn schedule_flash_dismissal<D: Document>(document: &mut D, rules: &FlashRules) {
    let banners = document.alert_elements();
    for &element in &banners {
        document.set_timeout(
            rules.display(),
            TimerTask::FadeOut {
                element,
                fade: rules.fade(),
            },
        );
    }
    tracing::debug!(count = banners.len(), "scheduled flash dismissal");
}

/// Executes a timer task once its delay has elapsed.
pub fn run_timer_task<D: Document>(document: &mut D, task: TimerTask) {
    match task {
        TimerTask::FadeOut { element, fade } => {
            let transition = format!("opacity {}s", fade.as_secs_f64());
            document.set_style(element, "transition", &transition);
            document.set_style(element, "opacity", "0");
            document.set_timeout(fade, TimerTask::Remove(element));
        }
        TimerTask::Remove(element) => {
            document.remove(element);
            tracing::debug!(element = element.0, "flash message removed");
        }
    }
}

pub fn confirm_action<D: Document>(document: &mut D, prompt: &str) -> EventOutcome {
    if document.confirm(prompt) {
        EventOutcome::Allowed
    } else {
        EventOutcome::Blocked
    }
}

/// Caps the date picker at today so future payments cannot be picked.
pub fn apply_payment_date_bound<D: Document>(
    document: &mut D,
    element: ElementHandle,
    today: NaiveDate,
) {
    let max = today.format("%Y-%m-%d").to_string();
    document.set_attribute(element, "max", &max);
}
