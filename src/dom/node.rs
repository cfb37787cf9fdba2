//! Node types: NodeId, NodeData.

use std::fmt::Write as _;
use std::rc::Rc;

use glam::Mat4;
use slotmap::new_key_type;

use crate::binding::model::DataModelHandle;
use crate::dom::attributes::Attributes;
use crate::dom::scroll::ScrollMetrics;
use crate::geometry::Vector2f;
use crate::layout::boxes::{BoxArea, ElementBox};
use crate::style::values::ComputedValues;

new_key_type! {
    /// Unique identifier for an element. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single element.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Tag name (e.g. "div", "body").
    pub tag: String,
    /// Optional unique id.
    pub id: Option<String>,
    /// Class names.
    pub classes: Vec<String>,
    /// Attributes; `data-*` entries declare bindings.
    pub attributes: Attributes,
    /// Resolved style snapshot.
    pub computed: ComputedValues,
    /// Resolved box geometry.
    pub layout_box: ElementBox,
    /// Border-box origin relative to the offset parent's border box.
    pub relative_offset: Vector2f,
    /// Explicit offset parent. `None` falls back to the tree parent.
    pub offset_parent: Option<NodeId>,
    /// Scrollable extent, scroll position and scrollbar sizes.
    pub scroll: ScrollMetrics,
    /// Resolved transform shared with the host's transform state.
    pub transform: Option<Rc<Mat4>>,
    /// Non-owning handle to the data model this element is bound to.
    pub data_model: Option<DataModelHandle>,
}

impl NodeData {
    /// Create a new `NodeData` with the given tag and default geometry.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: Attributes::new(),
            computed: ComputedValues::default(),
            layout_box: ElementBox::default(),
            relative_offset: Vector2f::ZERO,
            offset_parent: None,
            scroll: ScrollMetrics::default(),
            transform: None,
            data_model: None,
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class (builder). Duplicates are ignored.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set an attribute (builder).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Set the computed values (builder).
    pub fn with_computed(mut self, computed: ComputedValues) -> Self {
        self.computed = computed;
        self
    }

    /// Set the box (builder).
    pub fn with_box(mut self, layout_box: ElementBox) -> Self {
        self.layout_box = layout_box;
        self
    }

    /// Set the offset relative to the offset parent (builder).
    pub fn with_offset(mut self, offset: Vector2f) -> Self {
        self.relative_offset = offset;
        self
    }

    /// Set the scroll metrics (builder).
    pub fn with_scroll(mut self, scroll: ScrollMetrics) -> Self {
        self.scroll = scroll;
        self
    }

    /// Set the transform (builder).
    pub fn with_transform(mut self, transform: Rc<Mat4>) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Bind the element to a data model (builder).
    pub fn with_data_model(mut self, handle: DataModelHandle) -> Self {
        self.data_model = Some(handle);
        self
    }

    /// Check whether this element has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add or remove a class.
    pub fn set_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            if !self.has_class(class) {
                self.classes.push(class.to_owned());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
    }

    /// The area scrollbars and clipping are measured against.
    pub fn client_area(&self) -> BoxArea {
        BoxArea::Padding
    }

    /// Size of the client area: the padding area minus scrollbars.
    pub fn client_size(&self) -> Vector2f {
        (self.layout_box.size(self.client_area()) - self.scroll.scrollbar_size).max(Vector2f::ZERO)
    }

    /// Size of the scrollable area; never smaller than the client area.
    pub fn scroll_size(&self) -> Vector2f {
        self.scroll.content_size.max(self.client_size())
    }

    /// Whether content overflows the client area by more than half a pixel.
    pub fn has_overflow(&self) -> bool {
        let client = self.client_size();
        let scroll = self.scroll_size();
        client.x < scroll.x - 0.5 || client.y < scroll.y - 0.5
    }

    /// This element's part of an address: `tag#id.class1.class2`.
    pub fn address_fragment(&self) -> String {
        let mut fragment = self.tag.clone();
        if let Some(id) = &self.id {
            let _ = write!(fragment, "#{id}");
        }
        for class in &self.classes {
            let _ = write!(fragment, ".{class}");
        }
        fragment
    }
}
