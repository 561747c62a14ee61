use crate::core::ui::run_timer_task;
use crate::domain::model::{ElementHandle, FileDescriptor, TimerTask};
use crate::domain::ports::Document;
use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub name: Option<String>,
    pub input_type: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub value: Option<String>,
    pub files: Vec<FileDescriptor>,
    pub styles: BTreeMap<String, String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// An `<input>` whose id and name are both `id`.
    pub fn input(id: &str, input_type: &str) -> Self {
        Self::new("input")
            .with_id(id)
            .with_name(id)
            .with_type(input_type)
            .with_value("")
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[derive(Debug, Clone)]
struct PendingTimer {
    due: Duration,
    seq: u64,
    task: TimerTask,
}

/// In-memory page with a virtual timer queue. Alerts and confirm prompts are
/// recorded; confirm answers are scripted.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: Vec<Element>,
    attached: Vec<bool>,
    alerts: Vec<String>,
    prompts: Vec<String>,
    confirm_answers: VecDeque<bool>,
    timers: Vec<PendingTimer>,
    next_seq: u64,
    now: Duration,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: Element) -> ElementHandle {
        self.elements.push(element);
        self.attached.push(true);
        ElementHandle(self.elements.len() - 1)
    }

    pub fn add_form(&mut self, id: &str) -> ElementHandle {
        self.add(Element::new("form").with_id(id))
    }

    pub fn add_input(&mut self, id: &str, input_type: &str, value: &str) -> ElementHandle {
        self.add(Element::input(id, input_type).with_value(value))
    }

    /// Server-rendered flash banner.
    pub fn add_flash(&mut self, category: &str) -> ElementHandle {
        self.add(
            Element::new("div")
                .with_class("alert")
                .with_class(format!("alert-{}", category))
                .with_attribute("role", "alert"),
        )
    }

    pub fn element(&self, handle: ElementHandle) -> Option<&Element> {
        self.elements.get(handle.0)
    }

    pub fn is_attached(&self, handle: ElementHandle) -> bool {
        self.attached.get(handle.0).copied().unwrap_or(false)
    }

    pub fn select_file(&mut self, handle: ElementHandle, file: FileDescriptor) {
        if let Some(element) = self.elements.get_mut(handle.0) {
            element.files = vec![file];
            element.value = Some(format!("C:\\fakepath\\{}", element_file_name(&element.files[0])));
        }
    }

    pub fn attribute(&self, handle: ElementHandle, name: &str) -> Option<&str> {
        self.element(handle)?.attributes.get(name).map(String::as_str)
    }

    pub fn style(&self, handle: ElementHandle, property: &str) -> Option<&str> {
        self.element(handle)?.styles.get(property).map(String::as_str)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answer for the next confirm prompt. Unscripted prompts are accepted.
    pub fn answer_next_confirm(&mut self, accept: bool) {
        self.confirm_answers.push_back(accept);
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Moves the virtual clock forward, running every timer that falls due in
    /// order, including timers scheduled by those timers.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, timer)| timer.due <= target)
                .min_by_key(|(_, timer)| (timer.due, timer.seq))
                .map(|(index, _)| index);

            let Some(index) = next else {
                break;
            };
            let timer = self.timers.remove(index);
            self.now = timer.due;
            run_timer_task(self, timer.task);
        }
        self.now = target;
    }

    fn live(&self) -> impl Iterator<Item = (ElementHandle, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(index, _)| self.attached[*index])
            .map(|(index, element)| (ElementHandle(index), element))
    }

    fn live_element(&self, handle: ElementHandle) -> Option<&Element> {
        if self.is_attached(handle) {
            self.elements.get(handle.0)
        } else {
            None
        }
    }

    fn live_mut(&mut self, handle: ElementHandle) -> Option<&mut Element> {
        if self.is_attached(handle) {
            self.elements.get_mut(handle.0)
        } else {
            None
        }
    }
}

fn element_file_name(file: &FileDescriptor) -> &str {
    file.name.as_deref().unwrap_or("upload")
}

impl Document for MemoryDocument {
    fn get_element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.live()
            .find(|(_, element)| element.id.as_deref() == Some(id))
            .map(|(handle, _)| handle)
    }

    fn alert_elements(&self) -> Vec<ElementHandle> {
        self.live()
            .filter(|(_, element)| element.classes.iter().any(|class| class == "alert"))
            .map(|(handle, _)| handle)
            .collect()
    }

    fn confirm_elements(&self) -> Vec<ElementHandle> {
        self.live()
            .filter(|(_, element)| {
                element
                    .attributes
                    .get("onclick")
                    .is_some_and(|handler| handler.contains("confirm"))
            })
            .map(|(handle, _)| handle)
            .collect()
    }

    fn number_inputs_named(&self, names: &[&str]) -> Vec<ElementHandle> {
        self.live()
            .filter(|(_, element)| {
                element.tag == "input"
                    && element.input_type.as_deref() == Some("number")
                    && element
                        .name
                        .as_deref()
                        .is_some_and(|name| names.contains(&name))
            })
            .map(|(handle, _)| handle)
            .collect()
    }

    fn value(&self, element: ElementHandle) -> Option<String> {
        self.live_element(element)?.value.clone()
    }

    fn set_value(&mut self, element: ElementHandle, value: &str) {
        if let Some(element) = self.live_mut(element) {
            element.value = Some(value.to_string());
        }
    }

    fn set_attribute(&mut self, element: ElementHandle, name: &str, value: &str) {
        if let Some(element) = self.live_mut(element) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_style(&mut self, element: ElementHandle, property: &str, value: &str) {
        if let Some(element) = self.live_mut(element) {
            element.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn selected_file(&self, element: ElementHandle) -> Option<FileDescriptor> {
        self.live_element(element)?.files.first().cloned()
    }

    fn clear_selection(&mut self, element: ElementHandle) {
        if let Some(element) = self.live_mut(element) {
            element.files.clear();
            element.value = Some(String::new());
        }
    }

    fn remove(&mut self, element: ElementHandle) {
        if let Some(attached) = self.attached.get_mut(element.0) {
            *attached = false;
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.confirm_answers.pop_front().unwrap_or(true)
    }

    fn set_timeout(&mut self, delay: Duration, task: TimerTask) {
        self.timers.push(PendingTimer {
            due: self.now + delay,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }
}
