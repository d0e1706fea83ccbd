//! Typed translation documents and the JSON section patcher.
//!
//! A translation row stores one opaque JSON blob per (entity, locale). This
//! module parses that blob into a [`Document`]: free-form localized text
//! fields plus a map of named sections, each an ordered sequence of items
//! that may carry an attachment reference. All patch operations (image URL
//! resolution, section defaulting, indexed removal, image carry-forward)
//! are pure transformations over this type.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// Well-known section names inside a translation document.
///
/// Sections are the only keys interpreted by the patcher; everything else in
/// the blob is treated as an opaque localized field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKey {
    SecTwo,
    SecThree,
    SecFour,
    Faqs,
    Laws,
}

impl SectionKey {
    pub const ALL: &'static [SectionKey] = &[
        SectionKey::SecTwo,
        SectionKey::SecThree,
        SectionKey::SecFour,
        SectionKey::Faqs,
        SectionKey::Laws,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::SecTwo => "sec_two",
            SectionKey::SecThree => "sec_three",
            SectionKey::SecFour => "sec_four",
            SectionKey::Faqs => "faqs",
            SectionKey::Laws => "laws",
        }
    }

    pub fn parse(name: &str) -> Option<SectionKey> {
        Self::ALL.iter().copied().find(|key| key.as_str() == name)
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering context for [`Document::render`].
///
/// List pages additionally expose the raw stored path under `old_image` so
/// clients can resubmit unchanged references; detail pages omit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContext {
    List,
    Detail,
}

/// One item inside a section: opaque localized fields plus an optional
/// attachment reference (a stored relative path, never a URL).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionItem {
    pub fields: Map<String, Value>,
    pub image: Option<String>,
}

impl SectionItem {
    fn from_value(value: &Value) -> SectionItem {
        let mut fields = Map::new();
        let mut image = None;

        if let Value::Object(object) = value {
            for (key, value) in object {
                match key.as_str() {
                    "image" => {
                        image = value
                            .as_str()
                            .filter(|path| !path.is_empty())
                            .map(str::to_owned);
                    }
                    // Rendered output only; never persisted back.
                    "old_image" => {}
                    _ => {
                        fields.insert(key.clone(), value.clone());
                    }
                }
            }
        }

        SectionItem { fields, image }
    }

    fn to_value(&self) -> Value {
        let mut object = self.fields.clone();
        object.insert(
            "image".to_string(),
            match &self.image {
                Some(path) => Value::String(path.clone()),
                None => Value::Null,
            },
        );
        Value::Object(object)
    }
}

/// Parsed translation document: localized text fields plus named sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub fields: Map<String, Value>,
    pub sections: BTreeMap<SectionKey, Vec<SectionItem>>,
}

impl Document {
    /// Parses a stored JSON blob. Unknown top-level keys become opaque
    /// fields; known section keys holding arrays become section sequences.
    pub fn from_value(value: &Value) -> Document {
        let mut document = Document::default();

        let Value::Object(object) = value else {
            return document;
        };

        for (key, value) in object {
            match (SectionKey::parse(key), value) {
                (Some(section), Value::Array(items)) => {
                    document
                        .sections
                        .insert(section, items.iter().map(SectionItem::from_value).collect());
                }
                (Some(section), _) => {
                    // Malformed section value degrades to an empty sequence.
                    document.sections.insert(section, Vec::new());
                }
                (None, _) => {
                    document.fields.insert(key.clone(), value.clone());
                }
            }
        }

        document
    }

    /// Serializes back to the stored blob shape. Every section item carries
    /// an explicit `image` key (path or null) so the stored form is uniform.
    pub fn to_value(&self) -> Value {
        let mut object = self.fields.clone();
        for (section, items) in &self.sections {
            object.insert(
                section.as_str().to_string(),
                Value::Array(items.iter().map(SectionItem::to_value).collect()),
            );
        }
        Value::Object(object)
    }

    /// Ensures every known section key is present, defaulting to an empty
    /// sequence. Callers must never observe an undefined section.
    pub fn default_missing_sections(&mut self, known: &[SectionKey]) {
        for section in known {
            self.sections.entry(*section).or_default();
        }
    }

    pub fn contains_item(&self, section: SectionKey, index: usize) -> bool {
        self.sections
            .get(&section)
            .is_some_and(|items| index < items.len())
    }

    pub fn image_at(&self, section: SectionKey, index: usize) -> Option<&str> {
        self.sections
            .get(&section)
            .and_then(|items| items.get(index))
            .and_then(|item| item.image.as_deref())
    }

    /// Sets the attachment reference of an existing item. Returns false when
    /// the slot does not exist; no item is created.
    pub fn set_image_at(&mut self, section: SectionKey, index: usize, path: Option<String>) -> bool {
        match self
            .sections
            .get_mut(&section)
            .and_then(|items| items.get_mut(index))
        {
            Some(item) => {
                item.image = path;
                true
            }
            None => false,
        }
    }

    /// Removes the item at `index` from the named section and renumbers the
    /// remainder contiguously. Returns false when the slot does not exist.
    pub fn remove_indexed_item(&mut self, section: SectionKey, index: usize) -> bool {
        match self.sections.get_mut(&section) {
            Some(items) if index < items.len() => {
                items.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Reconciles attachment references for every section item.
    ///
    /// An item that has a freshly uploaded path in `new_paths` takes it;
    /// every other item carries forward the path stored at the same
    /// (section, index) in `previous`, or null when no previous document
    /// exists. Submitted image values are never trusted as-is.
    pub fn merge_section_images(
        &mut self,
        previous: Option<&Document>,
        new_paths: &HashMap<(SectionKey, usize), String>,
    ) {
        for (section, items) in &mut self.sections {
            for (index, item) in items.iter_mut().enumerate() {
                item.image = match new_paths.get(&(*section, index)) {
                    Some(path) => Some(path.clone()),
                    None => previous
                        .and_then(|doc| doc.image_at(*section, index))
                        .map(str::to_owned),
                };
            }
        }
    }

    /// Renders the document for a response: stored attachment paths are
    /// replaced with servable URLs at the top level and inside every section
    /// item; missing attachments render as null.
    pub fn render(&self, url_of: &dyn Fn(&str) -> String, context: RenderContext) -> Map<String, Value> {
        let mut rendered = self.fields.clone();

        for (section, items) in &self.sections {
            let items: Vec<Value> = items
                .iter()
                .map(|item| {
                    let mut object = item.fields.clone();
                    if context == RenderContext::List {
                        // The key is always present so list payloads have a
                        // uniform shape; imageless items carry null.
                        object.insert(
                            "old_image".to_string(),
                            match &item.image {
                                Some(path) => Value::String(path.clone()),
                                None => Value::Null,
                            },
                        );
                    }
                    object.insert(
                        "image".to_string(),
                        match &item.image {
                            Some(path) => Value::String(url_of(path)),
                            None => Value::Null,
                        },
                    );
                    Value::Object(object)
                })
                .collect();
            rendered.insert(section.as_str().to_string(), Value::Array(items));
        }

        rendered
    }

    /// Non-empty string field lookup, used for required-field validation.
    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
    }
}
