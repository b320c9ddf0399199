//! The hierarchy of named timers and their recorded events.

use std::fmt;

use foldhash::{HashMap, HashMapExt};
use tracing::{debug, trace};

use crate::{Error, EventRecorder, Period, Result, Tick, TimeEvent};

type NodeId = usize;

const ROOT: NodeId = 0;

/// Selects which timers contribute events to [`TimeRepository::get_all()`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EventFilter {
    /// Events of every timer.
    #[default]
    Regular,

    /// Only events of timers that have no child timers.
    Orphan,
}

/// A named timer in a [`TimeRepository`], holding the events recorded against it.
#[derive(Clone, Debug)]
pub struct TimerNode {
    name: String,
    depth: usize,
    recorder: EventRecorder,
    children: Vec<NodeId>,
}

impl TimerNode {
    fn new(name: String, depth: usize) -> Self {
        Self {
            name,
            depth,
            recorder: EventRecorder::new(),
            children: Vec::new(),
        }
    }

    /// The name of the timer.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many levels below the root of the repository the timer is. The root is at depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The events recorded against this timer.
    #[must_use]
    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }

    /// Whether any timers have been registered under this one.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A tree of named timers, each with its own [`EventRecorder`].
///
/// The repository itself is the root timer of the tree and is addressable by the name of
/// the repository. Once a root tick has been registered via
/// [`register_root()`](Self::register_root), the root is also addressable by the name of
/// that tick.
///
/// Timer names are unique across the whole tree, not only among siblings. Timers are always
/// registered as new leaves under an existing parent, so the structure is always a tree.
///
/// Every operation either succeeds completely or returns an error without modifying
/// the repository.
///
/// # Examples
///
/// ```
/// use chronologger::{Clock, EventFilter, TimeRepository};
///
/// let clock = Clock::new();
/// let mut repository = TimeRepository::new("my_app");
///
/// repository.register_root(clock.tick("root_tick"))?;
/// repository.register("load", "root_tick")?;
/// repository.register("load.parse", "load")?;
///
/// repository.add(clock.tick("load"), "load")?;
/// repository.add(clock.tick("parse"), "load.parse")?;
///
/// let events = repository.get_all(EventFilter::Regular, false);
/// let names: Vec<_> = events.iter().map(|event| event.name()).collect();
/// assert_eq!(names, ["load", "parse"]);
///
/// println!("{}", repository.render());
/// # Ok::<(), chronologger::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct TimeRepository {
    name: String,

    // Arena of timers. The root is always at index ROOT and a parent always precedes
    // its children.
    nodes: Vec<TimerNode>,

    // Every name that resolves to a timer, including the name of the root tick.
    index: HashMap<String, NodeId>,

    root_tick: Option<String>,
}

impl TimeRepository {
    /// Creates a repository whose root timer has the given name and no events.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();

        let mut index = HashMap::new();
        index.insert(name.clone(), ROOT);

        Self {
            nodes: vec![TimerNode::new(name.clone(), 0)],
            index,
            root_tick: None,
            name,
        }
    }

    /// The name of the repository, which is also the name of its root timer.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seeds the root timer with its initial tick.
    ///
    /// Afterwards the root timer can also be addressed by the name of the tick.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRegistration`] if a root tick has already been registered.
    ///
    /// Returns [`Error::RootNotEmpty`] if events were recorded against the root timer before
    /// any root tick was registered.
    ///
    /// Returns [`Error::DuplicateName`] if the name of the tick is already used by another timer.
    pub fn register_root(&mut self, tick: Tick) -> Result<()> {
        if let Some(existing) = &self.root_tick {
            return Err(Error::DuplicateRegistration {
                repository: self.name.clone(),
                existing: existing.clone(),
            });
        }

        if let Some(first) = self.root_node().recorder.first() {
            return Err(Error::RootNotEmpty {
                repository: self.name.clone(),
                first: first.name().to_string(),
            });
        }

        if self
            .index
            .get(tick.name())
            .is_some_and(|&id| id != ROOT)
        {
            return Err(Error::DuplicateName {
                name: tick.name().to_string(),
            });
        }

        debug!(repository = %self.name, root_tick = tick.name(), "registered root");

        self.index.insert(tick.name().to_string(), ROOT);
        self.root_tick = Some(tick.name().to_string());
        self.root_node_mut().recorder.add(tick);

        Ok(())
    }

    /// Registers a new timer without events as a child of the timer named `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParent`] if no timer is named `parent`.
    ///
    /// Returns [`Error::DuplicateName`] if a timer named `name` already exists anywhere in
    /// the repository.
    pub fn register(&mut self, name: impl Into<String>, parent: &str) -> Result<()> {
        let name = name.into();
        let parent_id = self.resolve(parent)?;

        if self.index.contains_key(&name) {
            return Err(Error::DuplicateName { name });
        }

        let id = self.nodes.len();
        let depth = self
            .node_at(parent_id)
            .depth
            .checked_add(1)
            .expect("tree depth cannot realistically exceed usize::MAX");

        debug!(repository = %self.name, timer = %name, parent, depth, "registered timer");

        self.nodes.push(TimerNode::new(name.clone(), depth));
        self.node_at_mut(parent_id).children.push(id);
        self.index.insert(name, id);

        Ok(())
    }

    /// Records an event against the timer named `timer`.
    ///
    /// Returns the period from the first event of that timer to the new event, if the timer
    /// already had events.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParent`] if no timer is named `timer`.
    pub fn add(&mut self, event: impl Into<TimeEvent>, timer: &str) -> Result<Option<Period>> {
        let id = self.resolve(timer)?;
        let event = event.into();

        trace!(repository = %self.name, timer, event = event.name(), "recorded event");

        Ok(self.node_at_mut(id).recorder.add(event))
    }

    /// Records an event against the root timer.
    ///
    /// Returns the period from the first event of the root timer to the new event, if the root
    /// already had events.
    pub fn add_to_root(&mut self, event: impl Into<TimeEvent>) -> Option<Period> {
        let event = event.into();

        trace!(repository = %self.name, event = event.name(), "recorded event at root");

        self.root_node_mut().recorder.add(event)
    }

    /// Collects the events of the tree in depth-first pre-order, parents before children and
    /// siblings in registration order.
    ///
    /// If `include_root` is false, the root tick registered via
    /// [`register_root()`](Self::register_root) is left out. Other events recorded against
    /// the root timer are still included.
    #[must_use]
    pub fn get_all(&self, filter: EventFilter, include_root: bool) -> Vec<&TimeEvent> {
        let mut events = Vec::new();

        for (id, node) in self.pre_order() {
            if filter == EventFilter::Orphan && node.has_children() {
                continue;
            }

            let skip = usize::from(id == ROOT && !include_root && self.root_tick.is_some());
            events.extend(node.recorder.iter().skip(skip));
        }

        events
    }

    /// The tick registered via [`register_root()`](Self::register_root), if any.
    #[must_use]
    pub fn root_tick(&self) -> Option<&TimeEvent> {
        self.root_tick
            .as_ref()
            .and_then(|_| self.root_node().recorder.first())
    }

    /// Whether a timer with the given name exists, including the name of the root tick.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The timer with the given name.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&TimerNode> {
        self.index.get(name).map(|&id| self.node_at(id))
    }

    /// The events recorded against the timer with the given name.
    #[must_use]
    pub fn recorder(&self, name: &str) -> Option<&EventRecorder> {
        self.node(name).map(TimerNode::recorder)
    }

    /// The timers registered directly under the timer with the given name, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParent`] if no timer is named `name`.
    pub fn children(&self, name: &str) -> Result<Vec<&TimerNode>> {
        let id = self.resolve(name)?;

        Ok(self
            .node_at(id)
            .children
            .iter()
            .map(|&child| self.node_at(child))
            .collect())
    }

    /// The number of timers in the repository, including the root.
    #[must_use]
    pub fn timer_count(&self) -> usize {
        self.nodes.len()
    }

    /// Renders the whole tree as text.
    ///
    /// Every timer is shown as its name and depth, followed by the periods between its
    /// consecutive events. Children follow their parent, indented one level deeper.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn resolve(&self, name: &str) -> Result<NodeId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownParent {
                name: name.to_string(),
            })
    }

    fn pre_order(&self) -> Vec<(NodeId, &TimerNode)> {
        let mut visited = Vec::with_capacity(self.nodes.len());
        let mut pending = vec![ROOT];

        while let Some(id) = pending.pop() {
            let node = self.node_at(id);
            visited.push((id, node));

            // Reversed so that the first registered child is visited first.
            pending.extend(node.children.iter().rev());
        }

        visited
    }

    fn root_node(&self) -> &TimerNode {
        self.node_at(ROOT)
    }

    fn root_node_mut(&mut self) -> &mut TimerNode {
        self.node_at_mut(ROOT)
    }

    fn node_at(&self, id: NodeId) -> &TimerNode {
        self.nodes
            .get(id)
            .expect("node ids in the repository always refer to existing nodes")
    }

    fn node_at_mut(&mut self, id: NodeId) -> &mut TimerNode {
        self.nodes
            .get_mut(id)
            .expect("node ids in the repository always refer to existing nodes")
    }
}

impl fmt::Display for TimeRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, node) in self.pre_order() {
            let indent = "  ".repeat(node.depth);

            write!(f, "{indent}{} ({})", node.name, node.depth)?;

            if let Some(elapsed) = node.recorder.elapsed() {
                write!(f, " elapsed {}", elapsed.unit().format_secs(elapsed.secs()))?;
            }

            writeln!(f)?;

            for line in node.recorder.to_string().lines() {
                writeln!(f, "{indent}{line}")?;
            }
        }

        Ok(())
    }
}
