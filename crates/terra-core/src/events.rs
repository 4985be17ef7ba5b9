use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = u64;

/// Typed subscription table. The emitting entity owns one per event kind and
/// notifies through [`Subscribers::emit`]; subscribers detach deterministically
/// with the id handed back by [`Subscribers::subscribe`].
#[derive(Clone)]
pub struct Subscribers<E>(Rc<RefCell<Inner<E>>>);

struct Inner<E> {
    next_id: SubId,
    subs: Vec<(SubId, Rc<dyn Fn(&E)>)>,
}

impl<E> Subscribers<E> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Inner {
            next_id: 1,
            subs: Vec::new(),
        })))
    }

    pub fn subscribe(&self, f: impl Fn(&E) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subs.push((id, Rc::new(f)));
        id
    }

    /// Remove one subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubId) {
        self.0.borrow_mut().subs.retain(|(sid, _)| *sid != id);
    }

    pub fn clear(&self) {
        self.0.borrow_mut().subs.clear();
    }

    /// Notify subscribers in subscription order. A subscriber removed by an
    /// earlier subscriber during this emission is skipped; subscribers may
    /// also unsubscribe themselves.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<(SubId, Rc<dyn Fn(&E)>)> = self
            .0
            .borrow()
            .subs
            .iter()
            .map(|(id, f)| (*id, f.clone()))
            .collect();
        for (id, f) in snapshot {
            let live = self.0.borrow().subs.iter().any(|(sid, _)| *sid == id);
            if live {
                f(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.borrow().subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().subs.is_empty()
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}
