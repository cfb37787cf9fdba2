//! Parsing binding attribute names: `data-<type>[-<modifier>]`.

const PREFIX: &str = "data-";

/// The parts of a binding attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingName<'a> {
    /// Text between `data-` and the next `-` (or the end). May be empty.
    pub type_name: &'a str,
    /// Everything after `data-<type>-`, when non-empty.
    pub modifier: Option<&'a str>,
}

/// Split an attribute name into binding type and modifier.
///
/// Returns `None` unless the name is longer than `data-` and starts with it.
///
/// ```
/// use element_utils::binding::parse_binding_name;
///
/// let name = parse_binding_name("data-attr-title").unwrap();
/// assert_eq!(name.type_name, "attr");
/// assert_eq!(name.modifier, Some("title"));
///
/// assert!(parse_binding_name("data-").is_none());
/// ```
pub fn parse_binding_name(name: &str) -> Option<BindingName<'_>> {
    if name.len() <= PREFIX.len() || !name.starts_with(PREFIX) {
        return None;
    }

    let rest = &name[PREFIX.len()..];
    let (type_name, modifier) = match rest.split_once('-') {
        Some((type_name, modifier)) => (type_name, (!modifier.is_empty()).then_some(modifier)),
        None => (rest, None),
    };
    Some(BindingName { type_name, modifier })
}
