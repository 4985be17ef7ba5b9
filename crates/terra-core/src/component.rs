use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::decorator::{SharedDecorator, same_decorator};
use crate::events::{SubId, Subscribers};
use crate::{Rect, Scene};

/// State changes a component reports to its subscribers.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentEvent {
    DecoratorAdded,
    DecoratorRemoved,
    RepaintRequested(Rect),
}

pub type Painter = Rc<dyn Fn(&mut Scene, Rect)>;

struct ComponentInner {
    bounds: Rect,
    parent: Weak<RefCell<ComponentInner>>,
    decorators: SmallVec<[SharedDecorator; 4]>,
    painter: Option<Painter>,
    dirty: Option<Rect>,
    repaint_count: u64,
    events: Subscribers<ComponentEvent>,
}

/// Cloneable handle to a component in the host tree.
///
/// The transition engine never creates or destroys components; it only
/// mutates decorator-stack membership and requests repaints. Repaint requests
/// are fire-and-forget: they accumulate a dirty region (and fire
/// [`ComponentEvent::RepaintRequested`]) for the host loop to drain with
/// [`Component::take_dirty`].
///
/// Regions are in the component's local coordinate space, (0,0) at its own
/// origin; [`Component::decorated_bounds`] is in the parent's space.
#[derive(Clone)]
pub struct Component(Rc<RefCell<ComponentInner>>);

impl Component {
    pub fn new(bounds: Rect) -> Self {
        Self(Rc::new(RefCell::new(ComponentInner {
            bounds,
            parent: Weak::new(),
            decorators: SmallVec::new(),
            painter: None,
            dirty: None,
            repaint_count: 0,
            events: Subscribers::new(),
        })))
    }

    fn events(&self) -> Subscribers<ComponentEvent> {
        self.0.borrow().events.clone()
    }

    pub fn bounds(&self) -> Rect {
        self.0.borrow().bounds
    }

    pub fn set_bounds(&self, bounds: Rect) {
        self.0.borrow_mut().bounds = bounds;
    }

    pub fn parent(&self) -> Option<Component> {
        self.0.borrow().parent.upgrade().map(Component)
    }

    pub fn set_parent(&self, parent: &Component) {
        self.0.borrow_mut().parent = Rc::downgrade(&parent.0);
    }

    pub fn clear_parent(&self) {
        self.0.borrow_mut().parent = Weak::new();
    }

    // --- decorator stack -------------------------------------------------

    /// Append a decorator; the new decorator becomes the innermost.
    pub fn add_decorator(&self, decorator: SharedDecorator) {
        self.0.borrow_mut().decorators.push(decorator);
        self.events().emit(&ComponentEvent::DecoratorAdded);
    }

    /// Insert at `index` (0 = outermost). `index` past the end appends.
    pub fn insert_decorator(&self, index: usize, decorator: SharedDecorator) {
        {
            let mut inner = self.0.borrow_mut();
            let index = index.min(inner.decorators.len());
            inner.decorators.insert(index, decorator);
        }
        self.events().emit(&ComponentEvent::DecoratorAdded);
    }

    /// Remove the exact instance previously added. Order of the remaining
    /// stack is preserved. Removing an absent decorator is a no-op.
    pub fn remove_decorator(&self, decorator: &SharedDecorator) -> bool {
        let removed = {
            let mut inner = self.0.borrow_mut();
            match inner
                .decorators
                .iter()
                .position(|d| same_decorator(d, decorator))
            {
                Some(pos) => {
                    inner.decorators.remove(pos);
                    true
                }
                None => false,
            }
        };
        if removed {
            self.events().emit(&ComponentEvent::DecoratorRemoved);
        } else {
            log::warn!("remove_decorator: instance not attached to this component");
        }
        removed
    }

    pub fn decorator_count(&self) -> usize {
        self.0.borrow().decorators.len()
    }

    /// Whether this exact instance is currently on the stack.
    pub fn has_decorator(&self, decorator: &SharedDecorator) -> bool {
        self.0
            .borrow()
            .decorators
            .iter()
            .any(|d| same_decorator(d, decorator))
    }

    /// Snapshot of the stack, outermost first.
    pub fn decorators(&self) -> Vec<SharedDecorator> {
        self.0.borrow().decorators.iter().cloned().collect()
    }

    /// Own bounds folded through every attached decorator, innermost out,
    /// in the parent's coordinate space.
    pub fn decorated_bounds(&self) -> Rect {
        let inner = self.0.borrow();
        inner
            .decorators
            .iter()
            .rev()
            .fold(inner.bounds, |b, d| d.borrow().decorated_bounds(b))
    }

    // --- painting --------------------------------------------------------

    pub fn set_painter(&self, painter: impl Fn(&mut Scene, Rect) + 'static) {
        self.0.borrow_mut().painter = Some(Rc::new(painter));
    }

    /// Record this component into `scene`: every decorator's opening ops,
    /// outermost first, then the painter, then the closing ops in reverse.
    pub fn render(&self, scene: &mut Scene) {
        let (decorators, bounds, painter) = {
            let inner = self.0.borrow();
            (
                inner.decorators.clone(),
                inner.bounds,
                inner.painter.clone(),
            )
        };

        let local = Rect::new(0.0, 0.0, bounds.w, bounds.h);
        for d in &decorators {
            d.borrow().begin(scene, local);
        }
        if let Some(painter) = painter {
            painter(scene, local);
        }
        for d in decorators.iter().rev() {
            d.borrow().end(scene);
        }
    }

    // --- repaint requests ------------------------------------------------

    /// Request a repaint of the whole component.
    pub fn repaint(&self) {
        let region = {
            let inner = self.0.borrow();
            Rect::new(0.0, 0.0, inner.bounds.w, inner.bounds.h)
        };
        self.repaint_region(region);
    }

    /// Request a repaint of `region` (local coordinates). Fire-and-forget.
    pub fn repaint_region(&self, region: Rect) {
        {
            let mut inner = self.0.borrow_mut();
            inner.dirty = Some(match inner.dirty {
                Some(dirty) => dirty.union(region),
                None => region,
            });
            inner.repaint_count += 1;
        }
        self.events()
            .emit(&ComponentEvent::RepaintRequested(region));
    }

    /// Drain the accumulated dirty region.
    pub fn take_dirty(&self) -> Option<Rect> {
        self.0.borrow_mut().dirty.take()
    }

    pub fn repaint_count(&self) -> u64 {
        self.0.borrow().repaint_count
    }

    // --- events ----------------------------------------------------------

    pub fn subscribe(&self, f: impl Fn(&ComponentEvent) + 'static) -> SubId {
        self.events().subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.events().unsubscribe(id);
    }

    pub fn clear_subscriptions(&self) {
        self.events().clear();
    }
}
