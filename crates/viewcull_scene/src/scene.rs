//! # Scene Graph
//!
//! A generational arena of nodes. Each node has a local transform, an
//! optional drawable extent in local space, an ordered child list and the
//! two flags a culler may write.
//!
//! World transforms are cached. Editing a local transform leaves the cache
//! stale until [`Scene::update_transforms`] (or `bounds(id, true)`) refreshes
//! it, the same way a render loop refreshes transforms once per frame.

use tracing::trace;
use viewcull::{Rect, SceneGraph, Toggle};

use crate::affine::Affine2;
use crate::error::{SceneError, SceneResult};
use crate::id::NodeId;

/// A node slot.
#[derive(Debug, Clone)]
struct Node {
    /// Transform relative to the parent.
    local: Affine2,
    /// Cached transform relative to the scene root.
    world: Affine2,
    /// Drawable extent in local space. None for pure containers.
    content: Option<Rect>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    visible: bool,
    renderable: bool,
}

impl Node {
    fn new(content: Option<Rect>) -> Self {
        Self {
            local: Affine2::IDENTITY,
            world: Affine2::IDENTITY,
            content,
            parent: None,
            children: Vec::new(),
            visible: true,
            renderable: true,
        }
    }
}

/// Hierarchical scene with generational node handles.
#[derive(Debug, Default)]
pub struct Scene {
    slots: Vec<Option<Node>>,
    /// Current generation per slot (persists across frees).
    generations: Vec<u32>,
    free_list: Vec<u32>,
    alive: usize,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scene with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            generations: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            alive: 0,
        }
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alive
    }

    /// Returns true if the scene has no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alive == 0
    }

    /// Returns true if `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        if id.is_null() {
            return None;
        }
        let index = id.index() as usize;
        if self.generations.get(index) != Some(&id.generation()) {
            return None;
        }
        self.slots[index].as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_null() {
            return None;
        }
        let index = id.index() as usize;
        if self.generations.get(index) != Some(&id.generation()) {
            return None;
        }
        self.slots[index].as_mut()
    }

    fn live(&self, id: NodeId) -> SceneResult<&Node> {
        self.node(id).ok_or(SceneError::StaleNode(id))
    }

    fn live_mut(&mut self, id: NodeId) -> SceneResult<&mut Node> {
        self.node_mut(id).ok_or(SceneError::StaleNode(id))
    }

    // =========================================================================
    // HIERARCHY
    // =========================================================================

    /// Creates a parentless node. `content` is its drawable extent in local
    /// space; pass None for a pure container.
    #[allow(clippy::cast_possible_truncation)]
    pub fn spawn(&mut self, content: Option<Rect>) -> NodeId {
        self.alive += 1;

        if let Some(index) = self.free_list.pop() {
            self.slots[index as usize] = Some(Node::new(content));
            return NodeId::new(index, self.generations[index as usize]);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Some(Node::new(content)));
        self.generations.push(0);
        NodeId::new(index, 0)
    }

    /// Appends `child` to the children of `parent`.
    ///
    /// # Errors
    ///
    /// Fails if either handle is stale, if `child` already has a parent, or
    /// if `child` is `parent` or one of its ancestors.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> SceneResult<()> {
        self.live(parent)?;
        if let Some(current) = self.live(child)?.parent {
            return Err(SceneError::AlreadyParented {
                child,
                parent: current,
            });
        }
        if parent == child {
            return Err(SceneError::SelfParent(child));
        }
        if self.is_ancestor(child, parent) {
            return Err(SceneError::Cycle { parent, child });
        }

        self.live_mut(parent)?.children.push(child);
        self.live_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Removes `child` from its parent. The subtree stays alive as a root.
    ///
    /// # Errors
    ///
    /// Fails if the handle is stale or the node has no parent.
    pub fn detach(&mut self, child: NodeId) -> SceneResult<()> {
        let parent = self.live(child)?.parent.ok_or(SceneError::NotParented(child))?;

        self.live_mut(parent)?.children.retain(|&c| c != child);
        self.live_mut(child)?.parent = None;
        Ok(())
    }

    /// Removes a node and its whole subtree. Their handles become stale.
    ///
    /// # Errors
    ///
    /// Fails if the handle is already stale.
    pub fn despawn(&mut self, id: NodeId) -> SceneResult<()> {
        if let Some(parent) = self.live(id)?.parent {
            self.live_mut(parent)?.children.retain(|&c| c != id);
        }

        let freed = self.free_subtree(id);
        trace!(?id, freed, "despawned subtree");
        Ok(())
    }

    fn free_subtree(&mut self, id: NodeId) -> usize {
        let index = id.index() as usize;
        let Some(node) = self.slots[index].take() else {
            return 0;
        };

        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free_list.push(id.index());
        self.alive -= 1;

        let mut freed = 1;
        for child in node.children {
            freed += self.free_subtree(child);
        }
        freed
    }

    /// Returns true if `ancestor` is on the parent chain of `node`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.node(node).and_then(|n| n.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    /// Returns the parent of a node (None for roots and stale handles).
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Returns the children of a node in draw order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Iterates all parentless live nodes in slot order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots.iter().enumerate().filter_map(move |(index, slot)| {
            let node = slot.as_ref()?;
            if node.parent.is_some() {
                return None;
            }
            Some(NodeId::new(index as u32, self.generations[index]))
        })
    }

    // =========================================================================
    // TRANSFORMS & BOUNDS
    // =========================================================================

    /// Sets the local transform. The world transform is refreshed lazily.
    ///
    /// # Errors
    ///
    /// Fails if the handle is stale.
    pub fn set_transform(&mut self, id: NodeId, transform: Affine2) -> SceneResult<()> {
        self.live_mut(id)?.local = transform;
        Ok(())
    }

    /// Returns the local transform.
    #[must_use]
    pub fn transform(&self, id: NodeId) -> Option<Affine2> {
        self.node(id).map(|n| n.local)
    }

    /// Returns the cached world transform, as of the last refresh.
    #[must_use]
    pub fn world_transform(&self, id: NodeId) -> Option<Affine2> {
        self.node(id).map(|n| n.world)
    }

    /// Sets the drawable extent in local space.
    ///
    /// # Errors
    ///
    /// Fails if the handle is stale.
    pub fn set_content(&mut self, id: NodeId, content: Option<Rect>) -> SceneResult<()> {
        self.live_mut(id)?.content = content;
        Ok(())
    }

    /// Recomputes world transforms along the ancestor chain of `id` and then
    /// through its whole subtree.
    ///
    /// # Errors
    ///
    /// Fails if the handle is stale.
    pub fn update_transforms(&mut self, id: NodeId) -> SceneResult<()> {
        let parent = self.live(id)?.parent;
        let parent_world = parent.map_or(Affine2::IDENTITY, |p| self.resolve_world(p));
        self.propagate(id, parent_world);
        Ok(())
    }

    fn resolve_world(&mut self, id: NodeId) -> Affine2 {
        let Some((parent, local)) = self.node(id).map(|n| (n.parent, n.local)) else {
            return Affine2::IDENTITY;
        };

        let parent_world = parent.map_or(Affine2::IDENTITY, |p| self.resolve_world(p));
        let world = parent_world * local;
        if let Some(node) = self.node_mut(id) {
            node.world = world;
        }
        world
    }

    fn propagate(&mut self, id: NodeId, parent_world: Affine2) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let world = parent_world * node.local;
        node.world = world;

        let child_count = node.children.len();
        for index in 0..child_count {
            let child = self.children(id)[index];
            self.propagate(child, world);
        }
    }

    /// Returns the bounds of `id` and its subtree, refreshing transforms
    /// first if `refresh` is set. Stale handles have empty bounds.
    pub fn bounds(&mut self, id: NodeId, refresh: bool) -> Rect {
        if refresh && self.update_transforms(id).is_err() {
            return Rect::EMPTY;
        }
        self.cached_bounds(id)
    }

    /// Returns the bounds of `id` and its subtree from cached world
    /// transforms.
    #[must_use]
    pub fn cached_bounds(&self, id: NodeId) -> Rect {
        let Some(node) = self.node(id) else {
            return Rect::EMPTY;
        };

        let own = match node.content {
            Some(content) if !content.is_empty() => node.world.transform_rect(&content),
            _ => Rect::EMPTY,
        };
        node.children
            .iter()
            .fold(own, |acc, &child| acc.union(&self.cached_bounds(child)))
    }

    // =========================================================================
    // FLAGS
    // =========================================================================

    /// Returns the `visible` flag (false for stale handles).
    #[must_use]
    pub fn visible(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.visible)
    }

    /// Returns the `renderable` flag (false for stale handles).
    #[must_use]
    pub fn renderable(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.renderable)
    }

    /// Sets the `visible` flag.
    ///
    /// # Errors
    ///
    /// Fails if the handle is stale.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> SceneResult<()> {
        self.live_mut(id)?.visible = visible;
        Ok(())
    }

    /// Sets the `renderable` flag.
    ///
    /// # Errors
    ///
    /// Fails if the handle is stale.
    pub fn set_renderable(&mut self, id: NodeId, renderable: bool) -> SceneResult<()> {
        self.live_mut(id)?.renderable = renderable;
        Ok(())
    }
}

impl SceneGraph for Scene {
    type Node = NodeId;

    fn contains(&self, node: NodeId) -> bool {
        Scene::contains(self, node)
    }

    fn bounds(&mut self, node: NodeId, refresh: bool) -> Rect {
        Scene::bounds(self, node, refresh)
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        Scene::children(self, node)
    }

    fn flag(&self, node: NodeId, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Visible => self.visible(node),
            Toggle::Renderable => self.renderable(node),
        }
    }

    fn set_flag(&mut self, node: NodeId, toggle: Toggle, value: bool) {
        if let Some(n) = self.node_mut(node) {
            match toggle {
                Toggle::Visible => n.visible = value,
                Toggle::Renderable => n.renderable = value,
            }
        }
    }
}
