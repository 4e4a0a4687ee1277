//! Mock DOM for the browser frontend
//!
//! A deliberately small model of what the calculator page needs: elements
//! with an id, a tag, text content, CSS classes, and attributes, plus click
//! and keydown events. It lets the browser wiring run under plain `cargo
//! test` with no web-sys in sight.

use std::collections::HashMap;

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element id
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// CSS classes
    pub classes: Vec<String>,
    /// Attributes
    pub attributes: HashMap<String, String>,
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            classes: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Sets the element id
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a CSS class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Replaces the text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|existing| existing != class);
    }

    /// Checks whether a class is present
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    /// Reads an attribute
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events the calculator page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// A click on an element
    Click {
        /// Id of the clicked element
        element_id: String,
    },
    /// A keyboard key pressed on the page
    KeyDown {
        /// The DOM `key` string (`"7"`, `"+"`, `"Enter"`, ...)
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// The flat element registry backing the calculator page
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_log: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element for id lookup; elements without an id are dropped
    pub fn register(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Looks an element up by id
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Looks an element up mutably by id
    pub fn element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Replaces an element's text content
    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.set_text(text);
        }
    }

    /// Reads an element's text content
    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|element| element.text_content.as_str())
    }

    /// Records an event in the log
    pub fn log_event(&mut self, event: DomEvent) {
        self.event_log.push(event);
    }

    /// Returns the recorded events
    #[must_use]
    pub fn events(&self) -> &[DomEvent] {
        &self.event_log
    }

    /// Returns the number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}
