//! Clip region resolution and the scissor applier.
//!
//! An element is clipped by every ancestor on its offset-parent chain that
//! restricts overflow and actually has something to hide. The `clip` property
//! adjusts this: `clip: <N>` skips the next N clipping ancestors, `clip: always`
//! makes an ancestor clip even without overflow, and `clip: none` cuts the
//! chain.

use crate::dom::{Dom, NodeId};
use crate::geometry::{snap_to_pixel_grid, Region, Vector2i};
use crate::style::Clip;

use super::context::RenderContext;
use super::interface::RenderInterface;
use super::RenderError;

// ---------------------------------------------------------------------------
// ClipRegion
// ---------------------------------------------------------------------------

/// Accumulator for the clip region of one element.
///
/// Starts unset (origin and dimensions both `(-1, -1)`). The first region
/// merged seeds it; every later one is intersected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipRegion {
    origin: Vector2i,
    dimensions: Vector2i,
}

impl ClipRegion {
    pub const UNSET: ClipRegion = ClipRegion {
        origin: Vector2i { x: -1, y: -1 },
        dimensions: Vector2i { x: -1, y: -1 },
    };

    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }

    /// Seed with `region` when unset, otherwise intersect with it.
    pub fn merge(&mut self, region: Region) {
        let current = if self.is_unset() {
            region
        } else {
            Region::from_origin_size(self.origin, self.dimensions).intersection(region)
        };
        self.origin = current.origin();
        self.dimensions = current.size();
    }

    /// The accumulated region, if any was merged.
    pub fn region(&self) -> Option<Region> {
        (self.dimensions.x >= 0 && self.dimensions.y >= 0)
            .then(|| Region::from_origin_size(self.origin, self.dimensions))
    }
}

impl Default for ClipRegion {
    fn default() -> Self {
        Self::UNSET
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Compute the region `node` must be drawn under.
///
/// Returns `None` when nothing clips the element (or it does not exist). A
/// region is returned even when the clipping ancestors do not overlap; it then
/// has zero size.
pub fn get_clipping_region(dom: &Dom, node: NodeId) -> Option<Region> {
    let target = dom.get(node)?;
    if target.computed.clip == Clip::None {
        return None;
    }

    let mut num_ignored_clips = target.computed.clip.number();
    let mut clip = ClipRegion::UNSET;

    let mut clipping_element = dom.offset_parent(node);
    while let Some(ancestor) = clipping_element {
        let Some(data) = dom.get(ancestor) else {
            break;
        };
        let computed = &data.computed;
        let clip_enabled = computed.is_overflow_restricted();
        let clip_always = computed.clip == Clip::Always;

        if (clip_always || clip_enabled) && num_ignored_clips == 0 && (clip_always || data.has_overflow()) {
            let client_area = data.client_area();
            if let Some(origin) = dom.absolute_offset(ancestor, client_area) {
                let (origin, size) = snap_to_pixel_grid(origin, data.layout_box.size(client_area));
                clip.merge(Region::from_origin_size(origin.into(), size.into()));
            }
        }

        // Only ancestors that restrict overflow count towards the skip.
        if num_ignored_clips > 0 && clip_enabled {
            num_ignored_clips -= 1;
        }
        num_ignored_clips = num_ignored_clips.max(computed.clip.number());

        if computed.clip == Clip::None {
            break;
        }
        clipping_element = dom.offset_parent(ancestor);
    }

    clip.region()
}

// ---------------------------------------------------------------------------
// Applier
// ---------------------------------------------------------------------------

/// Make `node`'s clip region the active one, or turn clipping off for `None`.
///
/// Returns `Ok(true)` when the active state changed and was pushed, `Ok(false)`
/// when it already matched. Without a backend the new state is still recorded
/// and `Err(NoRenderInterface)` is returned.
pub fn set_clipping_region<R: RenderInterface>(
    context: &mut RenderContext<R>,
    dom: &Dom,
    node: Option<NodeId>,
) -> Result<bool, RenderError> {
    let clip = node.and_then(|node| get_clipping_region(dom, node));
    if clip == context.active_clip {
        return Ok(false);
    }

    log::trace!("{}: clip region {:?} -> {:?}", context.name(), context.active_clip, clip);
    context.active_clip = clip;
    apply_active_clip_region(context)?;
    Ok(true)
}

/// Push the active clip state to the backend.
pub fn apply_active_clip_region<R: RenderInterface>(context: &mut RenderContext<R>) -> Result<(), RenderError> {
    let active = context.active_clip;
    let interface = context.interface.as_mut().ok_or(RenderError::NoRenderInterface)?;
    interface.enable_scissor_region(active.is_some());
    if let Some(region) = active {
        interface.set_scissor_region(region);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContextConfig;
    use crate::dom::{NodeData, ScrollMetrics};
    use crate::geometry::Vector2f;
    use crate::layout::ElementBox;
    use crate::style::{ComputedValues, Overflow};
    use crate::testing::{RecordingRenderer, RenderCall};

    fn panel(declarations: &str, offset: (f32, f32), size: (f32, f32), overflowing: bool) -> NodeData {
        let content = if overflowing { Vector2f::new(1000.0, 1000.0) } else { Vector2f::ZERO };
        NodeData::new("div")
            .with_computed(ComputedValues::parse(declarations).unwrap())
            .with_offset(Vector2f::new(offset.0, offset.1))
            .with_box(ElementBox::new(Vector2f::new(size.0, size.1)))
            .with_scroll(ScrollMetrics::new(content))
    }

    fn leaf(declarations: &str) -> NodeData {
        NodeData::new("span").with_computed(ComputedValues::parse(declarations).unwrap())
    }

    #[test]
    fn unset_accumulator_has_no_region() {
        assert!(ClipRegion::default().is_unset());
        assert_eq!(ClipRegion::UNSET.region(), None);
    }

    #[test]
    fn merge_seeds_then_intersects() {
        let mut clip = ClipRegion::UNSET;
        clip.merge(Region::new(0, 0, 100, 100));
        assert_eq!(clip.region(), Some(Region::new(0, 0, 100, 100)));
        clip.merge(Region::new(50, 25, 100, 100));
        assert_eq!(clip.region(), Some(Region::new(50, 25, 50, 75)));
    }

    #[test]
    fn no_clipping_ancestors() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), true));
        let child = dom.insert_child(root, leaf(""));
        assert_eq!(get_clipping_region(&dom, child), None);
        assert_eq!(get_clipping_region(&dom, root), None);
    }

    #[test]
    fn single_clipping_ancestor() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let clipper = dom.insert_child(root, panel("overflow: hidden", (10.0, 20.0), (100.0, 50.0), true));
        let child = dom.insert_child(clipper, leaf(""));
        assert_eq!(get_clipping_region(&dom, child), Some(Region::new(10, 20, 100, 50)));
    }

    #[test]
    fn region_is_snapped_to_pixel_grid() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let clipper = dom.insert_child(root, panel("overflow: auto", (10.4, 20.6), (100.3, 50.0), true));
        let child = dom.insert_child(clipper, leaf(""));
        assert_eq!(get_clipping_region(&dom, child), Some(Region::new(10, 21, 101, 50)));
    }

    #[test]
    fn restricted_overflow_without_overflow_does_not_clip() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let quiet = dom.insert_child(root, panel("overflow: hidden", (0.0, 0.0), (100.0, 50.0), false));
        let child = dom.insert_child(quiet, leaf(""));
        assert_eq!(get_clipping_region(&dom, child), None);
    }

    #[test]
    fn clip_always_clips_without_overflow() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let always = dom.insert_child(root, panel("clip: always", (5.0, 5.0), (40.0, 30.0), false));
        let child = dom.insert_child(always, leaf(""));
        assert_eq!(get_clipping_region(&dom, child), Some(Region::new(5, 5, 40, 30)));
    }

    #[test]
    fn nested_ancestors_intersect_in_any_order() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let outer = dom.insert_child(root, panel("overflow: hidden", (0.0, 0.0), (100.0, 100.0), true));
        let inner = dom.insert_child(outer, panel("overflow: hidden", (50.0, 50.0), (100.0, 100.0), true));
        let child = dom.insert_child(inner, leaf(""));
        let expected = Some(Region::new(50, 50, 50, 50));
        assert_eq!(get_clipping_region(&dom, child), expected);

        // Same two rectangles with the nesting swapped.
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let outer = dom.insert_child(root, panel("overflow: hidden", (50.0, 50.0), (100.0, 100.0), true));
        let inner = dom.insert_child(outer, panel("overflow: hidden", (-50.0, -50.0), (100.0, 100.0), true));
        let child = dom.insert_child(inner, leaf(""));
        assert_eq!(get_clipping_region(&dom, child), expected);
    }

    #[test]
    fn disjoint_ancestors_yield_empty_region() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let outer = dom.insert_child(root, panel("overflow: hidden", (0.0, 0.0), (10.0, 10.0), true));
        let inner = dom.insert_child(outer, panel("overflow: hidden", (100.0, 100.0), (10.0, 10.0), true));
        let child = dom.insert_child(inner, leaf(""));
        assert_eq!(get_clipping_region(&dom, child), Some(Region::new(100, 100, 0, 0)));
    }

    /// root > a (clips 0,0 300x300) > b (clips 10,10 100x100) > target
    fn two_clippers(target_declarations: &str) -> (Dom, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let a = dom.insert_child(root, panel("overflow: hidden", (0.0, 0.0), (300.0, 300.0), true));
        let b = dom.insert_child(a, panel("overflow: scroll", (10.0, 10.0), (100.0, 100.0), true));
        let target = dom.insert_child(b, leaf(target_declarations));
        (dom, target)
    }

    #[test]
    fn ignore_count_skips_exactly_n_clippers() {
        let (dom, target) = two_clippers("");
        assert_eq!(get_clipping_region(&dom, target), Some(Region::new(10, 10, 100, 100)));

        let (dom, target) = two_clippers("clip: 1");
        assert_eq!(get_clipping_region(&dom, target), Some(Region::new(0, 0, 300, 300)));

        let (dom, target) = two_clippers("clip: 2");
        assert_eq!(get_clipping_region(&dom, target), None);
    }

    #[test]
    fn clip_none_on_target_disables_clipping() {
        let (dom, target) = two_clippers("clip: none");
        assert_eq!(get_clipping_region(&dom, target), None);
    }

    #[test]
    fn skip_is_not_consumed_by_visible_overflow() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let clipper = dom.insert_child(root, panel("overflow: hidden", (0.0, 0.0), (300.0, 300.0), true));
        let always = dom.insert_child(clipper, panel("clip: always", (10.0, 10.0), (100.0, 100.0), false));
        let target = dom.insert_child(always, leaf("clip: 1"));
        // `always` is skipped but does not use up the skip, so `clipper` is skipped too.
        assert_eq!(get_clipping_region(&dom, target), None);
    }

    #[test]
    fn ancestor_number_is_inherited() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let a = dom.insert_child(root, panel("overflow: hidden", (0.0, 0.0), (300.0, 300.0), true));
        let b = dom.insert_child(a, panel("overflow: hidden; clip: 1", (10.0, 10.0), (100.0, 100.0), true));
        let target = dom.insert_child(b, leaf(""));
        assert_eq!(get_clipping_region(&dom, target), Some(Region::new(10, 10, 100, 100)));
    }

    #[test]
    fn skipped_ancestor_raises_ignore_count() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let outermost = dom.insert_child(root, panel("overflow: hidden", (0.0, 0.0), (400.0, 400.0), true));
        let third = dom.insert_child(outermost, panel("overflow: hidden", (10.0, 10.0), (300.0, 300.0), true));
        let second = dom.insert_child(third, panel("overflow: hidden", (10.0, 10.0), (200.0, 200.0), true));
        let first = dom.insert_child(second, panel("overflow: hidden; clip: 2", (10.0, 10.0), (100.0, 100.0), true));
        let target = dom.insert_child(first, leaf("clip: 1"));
        // `first` uses up the target's skip and then asks for two more, so only
        // `outermost` clips.
        assert_eq!(get_clipping_region(&dom, target), Some(Region::new(0, 0, 400, 400)));
    }

    #[test]
    fn huge_clipper_does_not_overflow() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let outer = dom.insert_child(root, panel("overflow: hidden", (0.0, 0.0), (100.0, 100.0), true));
        let inner = dom.insert_child(
            outer,
            panel("overflow: hidden", (10.0, 10.0), (4.0e9, 4.0e9), false)
                .with_scroll(ScrollMetrics::new(Vector2f::new(1.0e10, 1.0e10))),
        );
        let target = dom.insert_child(inner, leaf(""));
        assert_eq!(get_clipping_region(&dom, target), Some(Region::new(10, 10, 90, 90)));
    }

    #[test]
    fn clip_none_on_ancestor_halts_accumulation() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let clipper = dom.insert_child(root, panel("overflow: hidden", (0.0, 0.0), (300.0, 300.0), true));
        let barrier = dom.insert_child(clipper, panel("clip: none", (0.0, 0.0), (100.0, 100.0), true));
        let target = dom.insert_child(barrier, leaf(""));
        assert_eq!(get_clipping_region(&dom, target), None);
    }

    #[test]
    fn walks_offset_parents_not_tree_parents() {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let clipper = dom.insert_child(root, panel("overflow: hidden", (10.0, 10.0), (50.0, 50.0), true));
        let target = dom.insert_child(clipper, leaf(""));
        dom.set_offset(target, Vector2f::ZERO, root);
        assert_eq!(get_clipping_region(&dom, target), None);
    }

    #[test]
    fn scroll_position_moves_region() {
        let mut dom = Dom::new();
        let mut scrolled = ScrollMetrics::new(Vector2f::new(800.0, 2000.0));
        scrolled.offset = Vector2f::new(0.0, 30.0);
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false).with_scroll(scrolled));
        let clipper = dom.insert_child(root, panel("overflow: hidden", (10.0, 100.0), (50.0, 50.0), true));
        let target = dom.insert_child(clipper, leaf(""));
        assert_eq!(get_clipping_region(&dom, target), Some(Region::new(10, 70, 50, 50)));
    }

    #[test]
    fn computed_values_builder_matches_parser() {
        let parsed = ComputedValues::parse("overflow: hidden").unwrap();
        assert_eq!(parsed, ComputedValues::new().with_overflow(Overflow::Hidden));
    }

    fn clipped_tree() -> (Dom, NodeId, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(panel("", (0.0, 0.0), (800.0, 600.0), false));
        let clipper = dom.insert_child(root, panel("overflow: hidden", (10.0, 20.0), (100.0, 50.0), true));
        let child = dom.insert_child(clipper, leaf(""));
        (dom, root, child)
    }

    #[test]
    fn applier_pushes_only_on_change() {
        let (dom, root, child) = clipped_tree();
        let mut context = RenderContext::new(ContextConfig::new(), RecordingRenderer::new());

        assert_eq!(set_clipping_region(&mut context, &dom, Some(child)), Ok(true));
        assert_eq!(set_clipping_region(&mut context, &dom, Some(child)), Ok(false));
        assert_eq!(set_clipping_region(&mut context, &dom, Some(root)), Ok(true));
        assert_eq!(set_clipping_region(&mut context, &dom, None), Ok(false));

        assert_eq!(
            context.interface().unwrap().calls(),
            &[
                RenderCall::EnableScissor(true),
                RenderCall::SetScissor(Region::new(10, 20, 100, 50)),
                RenderCall::EnableScissor(false),
            ]
        );
    }

    #[test]
    fn applier_reapplies_active_region() {
        let (dom, _root, child) = clipped_tree();
        let mut context = RenderContext::new(ContextConfig::new(), RecordingRenderer::new());
        set_clipping_region(&mut context, &dom, Some(child)).unwrap();
        context.interface_mut().unwrap().clear();

        apply_active_clip_region(&mut context).unwrap();
        assert_eq!(
            context.interface().unwrap().calls(),
            &[RenderCall::EnableScissor(true), RenderCall::SetScissor(Region::new(10, 20, 100, 50))]
        );
    }

    #[test]
    fn applier_without_interface_still_tracks_state() {
        let (dom, _root, child) = clipped_tree();
        let mut context: RenderContext<RecordingRenderer> = RenderContext::headless(ContextConfig::new());

        assert_eq!(
            set_clipping_region(&mut context, &dom, Some(child)),
            Err(RenderError::NoRenderInterface)
        );
        assert_eq!(context.active_clip_region(), Some(Region::new(10, 20, 100, 50)));
        assert_eq!(set_clipping_region(&mut context, &dom, Some(child)), Ok(false));
    }
}
