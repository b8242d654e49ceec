//! Owns the resize bus and every mounted container.
//!
//! Mounting wires a container's `connected_to` names to its
//! `on_container_resize`, so a container can follow the first pane of
//! another one. The follow subscriptions live inside the container and go
//! away with it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use covshare_common::errors::LayoutError;
use tracing::{debug, warn};

use crate::bus::ResizeBus;
use crate::container::{ContainerConfig, LayoutContainer, PaneSpec, ResizeHandlers};

pub type SharedContainer = Rc<RefCell<LayoutContainer>>;

#[derive(Debug, Default)]
pub struct LayoutCoordinator {
    bus: ResizeBus,
    containers: Vec<(String, SharedContainer)>,
}

impl LayoutCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bus shared by every mounted container.
    pub fn bus(&self) -> &ResizeBus {
        &self.bus
    }

    /// Create a container and subscribe it to the publishers it follows.
    ///
    /// The container is not measured yet; call
    /// [`LayoutContainer::initialize`] once its content box is known.
    pub fn mount(
        &mut self,
        config: ContainerConfig,
        panes: Vec<PaneSpec>,
        handlers: ResizeHandlers,
    ) -> Result<SharedContainer, LayoutError> {
        if self.container(&config.id).is_some() {
            return Err(LayoutError::DuplicateContainer(config.id));
        }
        let id = config.id.clone();
        let follows = config.connected_to.clone();
        let container = Rc::new(RefCell::new(
            LayoutContainer::new(config, panes, &self.bus).with_handlers(handlers),
        ));

        for publisher in follows {
            let link = self.bus.subscribe(
                publisher.clone(),
                follow_callback(Rc::downgrade(&container), id.clone(), publisher),
            );
            container.borrow_mut().attach_link(link);
        }

        debug!(container = %id, links = container.borrow().link_count(), "mounted");
        self.containers.push((id, Rc::clone(&container)));
        Ok(container)
    }

    /// End any drag, drop the follow subscriptions and forget the container.
    /// Returns `false` for an unknown id.
    pub fn unmount(&mut self, id: &str) -> bool {
        let Some(pos) = self.containers.iter().position(|(name, _)| name == id) else {
            return false;
        };
        let (_, container) = self.containers.remove(pos);
        container.borrow_mut().detach();
        debug!(container = id, "unmounted");
        true
    }

    pub fn container(&self, id: &str) -> Option<SharedContainer> {
        self.containers
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, c)| Rc::clone(c))
    }

    /// Like [`LayoutCoordinator::container`], but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<SharedContainer, LayoutError> {
        self.container(id)
            .ok_or_else(|| LayoutError::UnknownContainer(id.to_string()))
    }

    /// Mounted container ids in mount order.
    pub fn ids(&self) -> Vec<String> {
        self.containers.iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

fn follow_callback(
    target: Weak<RefCell<LayoutContainer>>,
    follower: String,
    publisher: String,
) -> impl Fn(f64, f64) + 'static {
    move |width, height| {
        let Some(container) = target.upgrade() else {
            return;
        };
        match container.try_borrow_mut() {
            Ok(mut container) => container.on_container_resize(width, height),
            Err(_) => warn!(
                container = %follower,
                %publisher,
                "container is already resizing; skipping follow update"
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covshare_common::types::{Alignment, Dimension};

    fn two_auto() -> Vec<PaneSpec> {
        vec![PaneSpec::auto("a"), PaneSpec::auto("b")]
    }

    #[test]
    fn mount_and_lookup() {
        let mut coord = LayoutCoordinator::new();
        coord
            .mount(
                ContainerConfig::new("left", Alignment::Horizontal),
                two_auto(),
                ResizeHandlers::new(),
            )
            .unwrap();
        assert_eq!(coord.ids(), vec!["left".to_string()]);
        assert!(coord.container("left").is_some());
        assert!(coord.container("right").is_none());
        assert_eq!(coord.bus().publisher_count("left"), 1);
        assert_eq!(coord.bus().publisher_count("left-inv"), 1);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut coord = LayoutCoordinator::new();
        let config = ContainerConfig::new("left", Alignment::Horizontal);
        coord
            .mount(config.clone(), two_auto(), ResizeHandlers::new())
            .unwrap();
        let err = coord
            .mount(config, two_auto(), ResizeHandlers::new())
            .unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateContainer(id) if id == "left"));
        assert_eq!(coord.len(), 1);
    }

    #[test]
    fn follower_tracks_leading_pane() {
        let mut coord = LayoutCoordinator::new();
        let outer = coord
            .mount(
                ContainerConfig::new("outer", Alignment::Horizontal).with_handle_size(10.0),
                vec![
                    PaneSpec::auto("nav").with_width(Dimension::Pixels(100.0)),
                    PaneSpec::auto("body"),
                ],
                ResizeHandlers::new(),
            )
            .unwrap();
        let inner = coord
            .mount(
                ContainerConfig::new("inner", Alignment::Vertical)
                    .with_handle_size(0.0)
                    .connected_to("outer"),
                two_auto(),
                ResizeHandlers::new(),
            )
            .unwrap();
        assert_eq!(inner.borrow().link_count(), 1);

        outer.borrow_mut().initialize(300.0, 200.0);
        assert_eq!(inner.borrow().extent().width, 100.0);
        assert_eq!(inner.borrow().pixel_sizes(), &[100.0, 100.0]);

        let mut outer_mut = outer.borrow_mut();
        outer_mut.begin_drag(0, 100.0, 0.0);
        outer_mut.on_pointer_move(140.0, 0.0);
        outer_mut.end_drag();
        drop(outer_mut);
        assert_eq!(inner.borrow().extent().width, 140.0);
    }

    #[test]
    fn unmount_releases_follow_subscriptions() {
        let mut coord = LayoutCoordinator::new();
        coord
            .mount(
                ContainerConfig::new("a", Alignment::Horizontal),
                two_auto(),
                ResizeHandlers::new(),
            )
            .unwrap();
        coord
            .mount(
                ContainerConfig::new("b", Alignment::Horizontal).connected_to("a"),
                two_auto(),
                ResizeHandlers::new(),
            )
            .unwrap();
        assert_eq!(coord.bus().subscriber_count("a"), 1);

        assert!(coord.unmount("b"));
        assert_eq!(coord.bus().subscriber_count("a"), 0);
        assert!(!coord.unmount("b"));
        assert_eq!(coord.ids(), vec!["a".to_string()]);
    }

    #[test]
    fn follow_cycle_is_skipped_not_panicking() {
        let mut coord = LayoutCoordinator::new();
        let a = coord
            .mount(
                ContainerConfig::new("a", Alignment::Horizontal)
                    .with_handle_size(0.0)
                    .connected_to("b"),
                two_auto(),
                ResizeHandlers::new(),
            )
            .unwrap();
        let b = coord
            .mount(
                ContainerConfig::new("b", Alignment::Horizontal).connected_to("a"),
                two_auto(),
                ResizeHandlers::new(),
            )
            .unwrap();
        a.borrow_mut().initialize(200.0, 50.0);
        assert!(b.borrow().is_initialized());
        assert_eq!(b.borrow().extent().width, 100.0);
    }

    #[test]
    fn require_reports_unknown() {
        let coord = LayoutCoordinator::new();
        let err = coord.require("ghost").unwrap_err();
        assert_eq!(err.to_string(), "unknown container: ghost");
        assert!(coord.is_empty());
    }
}
