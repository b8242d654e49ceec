//! Replays a scenario against a [`LayoutCoordinator`] and records what the
//! containers report.

use std::cell::RefCell;
use std::rc::Rc;

use covshare_common::types::PaneSize;
use covshare_common::{CovshareError, LayoutError, LayoutEvent};
use covshare_config::{ContainerSchema, LayoutDefaults};
use covshare_layout::container::trailing_publisher_name;
use covshare_layout::{LayoutCoordinator, PointerEvent, ResizeHandlers, Subscription};
use tracing::{debug, info};

use crate::scenario::{container_config, content_box, pane_specs, Scenario, Step, Window};

type EventLog = Rc<RefCell<Vec<LayoutEvent>>>;

pub struct Runner {
    coordinator: LayoutCoordinator,
    defaults: LayoutDefaults,
    window: Window,
    mounted: Vec<ContainerSchema>,
    /// Bus taps recording broadcasts, keyed by the owning container.
    taps: Vec<(String, Subscription)>,
    events: EventLog,
}

impl Runner {
    pub fn new(defaults: LayoutDefaults, window: Window) -> Self {
        Self {
            coordinator: LayoutCoordinator::new(),
            defaults,
            window,
            mounted: Vec::new(),
            taps: Vec::new(),
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn coordinator(&self) -> &LayoutCoordinator {
        &self.coordinator
    }

    /// Mount a declared container without measuring it.
    pub fn mount(&mut self, schema: &ContainerSchema) -> Result<(), CovshareError> {
        let config = container_config(schema, &self.defaults);
        let panes = pane_specs(schema)?;
        let handlers = self.recording_handlers(&schema.id);
        self.coordinator.mount(config, panes, handlers)?;

        for publisher in [schema.id.clone(), trailing_publisher_name(&schema.id)] {
            let events = Rc::clone(&self.events);
            let name = publisher.clone();
            let tap = self.coordinator.bus().subscribe(publisher, move |width, height| {
                events.borrow_mut().push(LayoutEvent::Broadcast {
                    publisher: name.clone(),
                    width,
                    height,
                });
            });
            self.taps.push((schema.id.clone(), tap));
        }
        self.mounted.push(schema.clone());
        Ok(())
    }

    /// Measure every container that does not follow another one. Followers
    /// are sized by the broadcasts this triggers.
    pub fn measure(&mut self) -> Result<(), CovshareError> {
        for schema in &self.mounted {
            if !schema.connected_to.is_empty() {
                continue;
            }
            let extent = content_box(schema, self.window)?;
            let container = self.coordinator.require(&schema.id)?;
            container.borrow_mut().on_container_resize(extent.width, extent.height);
        }
        Ok(())
    }

    pub fn apply(&mut self, step: &Step) -> Result<(), CovshareError> {
        debug!(?step, "step");
        match step {
            Step::Resize {
                container: None,
                width,
                height,
            } => {
                self.window = Window {
                    width: *width,
                    height: *height,
                };
                self.measure()?;
            }
            Step::Resize {
                container: Some(id),
                width,
                height,
            } => {
                let container = self.coordinator.require(id)?;
                container.borrow_mut().on_container_resize(*width, *height);
            }
            Step::Press {
                container,
                divider,
                x,
                y,
            } => {
                let container = self.coordinator.require(container)?;
                let event = match divider {
                    Some(divider) => PointerEvent::Down {
                        divider: *divider,
                        x: *x,
                        y: *y,
                    },
                    None => {
                        let hit = container.borrow().handle_at(*x, *y);
                        match hit {
                            Some(handle) => handle.press(*x, *y),
                            None => {
                                debug!(x, y, "press missed every divider");
                                return Ok(());
                            }
                        }
                    }
                };
                container.borrow_mut().handle_pointer(event);
            }
            Step::Move { container, x, y } => {
                let container = self.coordinator.require(container)?;
                container
                    .borrow_mut()
                    .handle_pointer(PointerEvent::Move { x: *x, y: *y });
            }
            Step::Release { container } => {
                let container = self.coordinator.require(container)?;
                container.borrow_mut().handle_pointer(PointerEvent::Up);
            }
            Step::Blur { container } => {
                let container = self.coordinator.require(container)?;
                container.borrow_mut().handle_pointer(PointerEvent::Blur);
            }
            Step::Hide { container, hidden } => {
                let container = self.coordinator.require(container)?;
                container.borrow_mut().set_hidden_panes(hidden);
            }
            Step::Reset { container } => {
                let container = self.coordinator.require(container)?;
                container.borrow_mut().reset_sizes();
            }
            Step::Unmount { container } => {
                if !self.coordinator.unmount(container) {
                    return Err(LayoutError::UnknownContainer(container.clone()).into());
                }
                self.taps.retain(|(owner, _)| owner != container);
                self.mounted.retain(|schema| &schema.id != container);
                self.events.borrow_mut().push(LayoutEvent::Unmounted {
                    container: container.clone(),
                });
            }
        }
        Ok(())
    }

    /// Take the events recorded so far.
    pub fn drain_events(&self) -> Vec<LayoutEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn recording_handlers(&self, id: &str) -> ResizeHandlers {
        let record = |kind: fn(String, Vec<PaneSize>) -> LayoutEvent| {
            let events = Rc::clone(&self.events);
            let id = id.to_string();
            move |sizes: &[PaneSize]| events.borrow_mut().push(kind(id.clone(), sizes.to_vec()))
        };
        ResizeHandlers::new()
            .on_resize_start(record(|container, sizes| LayoutEvent::ResizeStarted {
                container,
                sizes,
            }))
            .on_resize(record(|container, sizes| LayoutEvent::Resized {
                container,
                sizes,
            }))
            .on_resize_stop(record(|container, sizes| LayoutEvent::ResizeStopped {
                container,
                sizes,
            }))
    }
}

/// Mount, measure and replay a whole scenario.
pub fn run(scenario: &Scenario, defaults: &LayoutDefaults) -> Result<Vec<LayoutEvent>, CovshareError> {
    let mut runner = Runner::new(defaults.clone(), scenario.window);
    for schema in &scenario.containers {
        runner.mount(schema)?;
    }
    runner.measure()?;
    for step in &scenario.steps {
        runner.apply(step)?;
    }
    let events = runner.drain_events();
    info!(
        containers = runner.coordinator().len(),
        steps = scenario.steps.len(),
        events = events.len(),
        "scenario finished"
    );
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use covshare_common::types::Dimension;

    const WINDOW: &str = r#"
[window]
width = 300
height = 100

[[container]]
id = "main"
handle_size = 10
[[container.pane]]
label = "a"
[[container.pane]]
label = "b"
"#;

    fn scenario(steps: &str) -> Scenario {
        Scenario::parse(&format!("{WINDOW}\n{steps}")).unwrap()
    }

    fn px(sizes: &[PaneSize]) -> Vec<Dimension> {
        sizes.iter().map(|s| s.width).collect()
    }

    fn kinds(events: &[LayoutEvent]) -> Vec<&'static str> {
        events
            .iter()
            .map(|e| match e {
                LayoutEvent::ResizeStarted { .. } => "started",
                LayoutEvent::Resized { .. } => "resized",
                LayoutEvent::ResizeStopped { .. } => "stopped",
                LayoutEvent::Broadcast { .. } => "broadcast",
                LayoutEvent::Unmounted { .. } => "unmounted",
                LayoutEvent::Unknown => "unknown",
            })
            .collect()
    }

    #[test]
    fn initial_measure_publishes_then_resizes() {
        let events = run(&scenario(""), &LayoutDefaults::default()).unwrap();
        assert_eq!(
            events[0],
            LayoutEvent::Broadcast {
                publisher: "main".into(),
                width: 145.0,
                height: 100.0
            }
        );
        assert_eq!(
            events[1],
            LayoutEvent::Broadcast {
                publisher: "main-inv".into(),
                width: 135.0,
                height: 100.0
            }
        );
        match &events[2] {
            LayoutEvent::Resized { container, sizes } => {
                assert_eq!(container, "main");
                assert_eq!(px(sizes), vec![Dimension::Pixels(145.0); 2]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn drag_reports_start_moves_and_stop() {
        let steps = r#"
[[step]]
action = "press"
container = "main"
x = 150
y = 50

[[step]]
action = "move"
container = "main"
x = 170
y = 50

[[step]]
action = "release"
container = "main"
"#;
        let mut runner = Runner::new(LayoutDefaults::default(), scenario("").window);
        let scenario = scenario(steps);
        runner.mount(&scenario.containers[0]).unwrap();
        runner.measure().unwrap();
        runner.drain_events();
        for step in &scenario.steps {
            runner.apply(step).unwrap();
        }
        let events = runner.drain_events();
        assert_eq!(
            kinds(&events),
            vec!["started", "broadcast", "broadcast", "resized", "stopped"]
        );
        match events.last() {
            Some(LayoutEvent::ResizeStopped { sizes, .. }) => {
                assert_eq!(
                    px(sizes),
                    vec![Dimension::Pixels(165.0), Dimension::Pixels(125.0)]
                );
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn press_off_the_divider_does_nothing() {
        let steps = "[[step]]\naction = \"press\"\ncontainer = \"main\"\nx = 20\ny = 50\n";
        let events = run(&scenario(steps), &LayoutDefaults::default()).unwrap();
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn follower_tracks_leading_pane() {
        let extra = r#"
[[container]]
id = "side"
alignment = "vertical"
handle_size = 0
connected_to = ["main"]
[[container.pane]]
label = "top"
[[container.pane]]
label = "bottom"
"#;
        let events = run(&scenario(extra), &LayoutDefaults::default()).unwrap();
        let side = events
            .iter()
            .find_map(|e| match e {
                LayoutEvent::Resized { container, sizes } if container == "side" => Some(sizes),
                _ => None,
            })
            .unwrap();
        assert_eq!(side[0].width, Dimension::Percent(100.0));
        assert_eq!(side[0].height, Dimension::Pixels(50.0));
        assert_eq!(side[1].height, Dimension::Pixels(50.0));
    }

    #[test]
    fn window_resize_scales_panes() {
        let steps = "[[step]]\naction = \"resize\"\nwidth = 590\nheight = 100\n";
        let events = run(&scenario(steps), &LayoutDefaults::default()).unwrap();
        match events.last() {
            Some(LayoutEvent::Resized { sizes, .. }) => {
                assert_eq!(px(sizes), vec![Dimension::Pixels(290.0); 2]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn unmount_records_and_releases() {
        let steps = "[[step]]\naction = \"unmount\"\ncontainer = \"main\"\n";
        let mut runner = Runner::new(LayoutDefaults::default(), Window::default());
        let scenario = scenario(steps);
        runner.mount(&scenario.containers[0]).unwrap();
        runner.apply(&scenario.steps[0]).unwrap();
        assert_eq!(
            runner.drain_events(),
            vec![LayoutEvent::Unmounted {
                container: "main".into()
            }]
        );
        assert!(runner.coordinator().is_empty());
        assert_eq!(runner.coordinator().bus().subscriber_count("main"), 0);
    }

    #[test]
    fn unknown_container_fails_the_step() {
        let steps = "[[step]]\naction = \"reset\"\ncontainer = \"nope\"\n";
        let err = run(&scenario(steps), &LayoutDefaults::default()).unwrap_err();
        assert_eq!(err.to_string(), "unknown container: nope");
    }
}
