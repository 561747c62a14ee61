use crate::domain::model::{ElementHandle, FileDescriptor, TimerTask};
use chrono::NaiveDate;
use std::time::Duration;

/// The page the guard is attached to. Every method is synchronous: handlers
/// run to completion against the current snapshot.
pub trait Document {
    fn get_element_by_id(&self, id: &str) -> Option<ElementHandle>;

    /// Elements carrying the `alert` class.
    fn alert_elements(&self) -> Vec<ElementHandle>;

    /// Elements whose `onclick` attribute mentions `confirm`.
    fn confirm_elements(&self) -> Vec<ElementHandle>;

    /// `input[type="number"]` elements whose `name` is one of `names`.
    fn number_inputs_named(&self, names: &[&str]) -> Vec<ElementHandle>;

    fn value(&self, element: ElementHandle) -> Option<String>;
    fn set_value(&mut self, element: ElementHandle, value: &str);
    fn set_attribute(&mut self, element: ElementHandle, name: &str, value: &str);
    fn set_style(&mut self, element: ElementHandle, property: &str, value: &str);

    /// First file of a file input's selection.
    fn selected_file(&self, element: ElementHandle) -> Option<FileDescriptor>;
    fn clear_selection(&mut self, element: ElementHandle);

    fn remove(&mut self, element: ElementHandle);

    /// Blocking modal message.
    fn alert(&mut self, message: &str);
    /// Blocking yes/no prompt.
    fn confirm(&mut self, message: &str) -> bool;

    fn set_timeout(&mut self, delay: Duration, task: TimerTask);

    fn value_of(&self, id: &str) -> Option<String> {
        self.get_element_by_id(id)
            .and_then(|element| self.value(element))
    }
}

pub trait Clock {
    fn today(&self) -> NaiveDate;
}
