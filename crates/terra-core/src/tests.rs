#[cfg(test)]
mod tests {
    use crate::clock::TestClock;
    use crate::component::{Component, ComponentEvent};
    use crate::decorator::{Decorator, SharedDecorator};
    use crate::error::CoreError;
    use crate::geometry::{Rect, Transform, Vec2};
    use crate::scene::{Scene, SceneNode};
    use crate::scheduler::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use web_time::Duration;

    fn test_scheduler() -> (Rc<TestClock>, Scheduler) {
        let clock = Rc::new(TestClock::new());
        let scheduler = Scheduler::new(clock.clone());
        (clock, scheduler)
    }

    struct Tag(&'static str, Rc<RefCell<Vec<&'static str>>>);

    impl Decorator for Tag {
        fn begin(&self, _scene: &mut Scene, _bounds: Rect) {
            self.1.borrow_mut().push(self.0);
        }
        fn end(&self, _scene: &mut Scene) {}
    }

    struct Alpha(f32);

    impl Decorator for Alpha {
        fn begin(&self, scene: &mut Scene, _bounds: Rect) {
            scene.push(SceneNode::PushAlpha(self.0));
        }
        fn end(&self, scene: &mut Scene) {
            scene.push(SceneNode::PopAlpha);
        }
    }

    struct Grow(Vec2);

    impl Decorator for Grow {
        fn begin(&self, _scene: &mut Scene, _bounds: Rect) {}
        fn end(&self, _scene: &mut Scene) {}
        fn decorated_bounds(&self, bounds: Rect) -> Rect {
            bounds.expanded(self.0)
        }
    }

    fn shared(d: impl Decorator + 'static) -> SharedDecorator {
        Rc::new(RefCell::new(d))
    }

    #[test]
    fn test_rect_union_expanded() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.union(b), Rect::new(0.0, 0.0, 15.0, 15.0));

        let grown = a.expanded(Vec2::new(3.0, 3.0));
        assert_eq!(grown, Rect::new(0.0, 0.0, 13.0, 13.0));

        let grown_neg = a.expanded(Vec2::new(-3.0, 0.0));
        assert_eq!(grown_neg, Rect::new(-3.0, 0.0, 13.0, 10.0));
    }

    #[test]
    fn test_transform_apply() {
        let t = Transform::translate(10.0, -5.0);
        let r = t.apply_to_rect(Rect::new(1.0, 1.0, 4.0, 4.0));
        assert_eq!(r, Rect::new(11.0, -4.0, 4.0, 4.0));

        let s = Transform::scale(2.0, 2.0);
        let r = s.apply_to_rect(Rect::new(1.0, 1.0, 4.0, 4.0));
        assert_eq!(r, Rect::new(2.0, 2.0, 8.0, 8.0));
    }

    #[test]
    fn test_scheduler_fires_on_interval() {
        let (clock, scheduler) = test_scheduler();
        let fired = Rc::new(Cell::new(0u32));

        let _handle = scheduler
            .schedule_repeating(Duration::from_millis(10), {
                let fired = fired.clone();
                move || fired.set(fired.get() + 1)
            })
            .unwrap();

        scheduler.pump();
        assert_eq!(fired.get(), 0, "nothing due yet");

        clock.advance(Duration::from_millis(10));
        scheduler.pump();
        assert_eq!(fired.get(), 1);

        clock.advance(Duration::from_millis(10));
        scheduler.pump();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_scheduler_late_pump_fires_once() {
        let (clock, scheduler) = test_scheduler();
        let fired = Rc::new(Cell::new(0u32));

        let _handle = scheduler
            .schedule_repeating(Duration::from_millis(10), {
                let fired = fired.clone();
                move || fired.set(fired.get() + 1)
            })
            .unwrap();

        // Host stalled for five intervals; no burst of catch-up fires.
        clock.advance(Duration::from_millis(50));
        scheduler.pump();
        assert_eq!(fired.get(), 1);

        // Deadline was pushed into the future, not left in the past.
        assert!(scheduler.next_due().unwrap() > scheduler.now());
    }

    #[test]
    fn test_scheduler_zero_interval_rejected() {
        let (_clock, scheduler) = test_scheduler();
        let err = scheduler
            .schedule_repeating(Duration::ZERO, || {})
            .map(|_| ())
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidInterval);
        assert!(!scheduler.has_timers());
    }

    #[test]
    fn test_scheduler_cancel_is_synchronous() {
        let (clock, scheduler) = test_scheduler();
        let fired = Rc::new(Cell::new(0u32));

        let handle = scheduler
            .schedule_repeating(Duration::from_millis(10), {
                let fired = fired.clone();
                move || fired.set(fired.get() + 1)
            })
            .unwrap();

        handle.cancel();
        clock.advance(Duration::from_millis(100));
        scheduler.pump();
        assert_eq!(fired.get(), 0);
        assert!(!scheduler.has_timers());

        // Cancelling twice is harmless.
        handle.cancel();
    }

    #[test]
    fn test_scheduler_cancel_mid_pump_suppresses_later_fire() {
        let (clock, scheduler) = test_scheduler();
        let fired = Rc::new(Cell::new(0u32));

        // First timer cancels the second before the second's turn in the
        // same pump.
        let victim = Rc::new(RefCell::new(None));
        let _killer = scheduler
            .schedule_repeating(Duration::from_millis(10), {
                let victim: Rc<RefCell<Option<crate::scheduler::TimerHandle>>> = victim.clone();
                move || {
                    if let Some(handle) = victim.borrow_mut().take() {
                        handle.cancel();
                    }
                }
            })
            .unwrap();
        let handle = scheduler
            .schedule_repeating(Duration::from_millis(10), {
                let fired = fired.clone();
                move || fired.set(fired.get() + 1)
            })
            .unwrap();
        *victim.borrow_mut() = Some(handle);

        clock.advance(Duration::from_millis(10));
        scheduler.pump();
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_scheduler_callbacks_fire_in_registration_order() {
        let (clock, scheduler) = test_scheduler();
        let order = Rc::new(RefCell::new(Vec::new()));

        for name in ["a", "b", "c"] {
            let order = order.clone();
            scheduler
                .schedule_repeating(Duration::from_millis(10), move || {
                    order.borrow_mut().push(name)
                })
                .unwrap();
        }

        clock.advance(Duration::from_millis(10));
        scheduler.pump();
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_decorator_stack_order_preserved() {
        let c = Component::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let log = Rc::new(RefCell::new(Vec::new()));

        let outer = shared(Tag("outer", log.clone()));
        let mid = shared(Tag("mid", log.clone()));
        let inner = shared(Tag("inner", log.clone()));

        c.add_decorator(outer.clone());
        c.add_decorator(mid.clone());
        c.add_decorator(inner.clone());

        let mut scene = Scene::new();
        c.render(&mut scene);
        assert_eq!(*log.borrow(), vec!["outer", "mid", "inner"]);

        // Removing the middle instance keeps the rest in order.
        assert!(c.remove_decorator(&mid));
        log.borrow_mut().clear();
        let mut scene = Scene::new();
        c.render(&mut scene);
        assert_eq!(*log.borrow(), vec!["outer", "inner"]);

        // Removing something absent is a no-op.
        assert!(!c.remove_decorator(&mid));
        assert_eq!(c.decorator_count(), 2);

        // Membership tracks the live stack.
        assert!(c.has_decorator(&outer));
        assert!(!c.has_decorator(&mid));
    }

    #[test]
    fn test_insert_decorator_prepends_outermost() {
        let c = Component::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let log = Rc::new(RefCell::new(Vec::new()));

        c.add_decorator(shared(Tag("first", log.clone())));
        c.insert_decorator(0, shared(Tag("outermost", log.clone())));

        let mut scene = Scene::new();
        c.render(&mut scene);
        assert_eq!(*log.borrow(), vec!["outermost", "first"]);
    }

    #[test]
    fn test_render_balances_push_pop() {
        let c = Component::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        c.set_painter(|scene, bounds| {
            scene.push(SceneNode::Rect {
                rect: bounds,
                color: crate::Color::WHITE,
                radius: 0.0,
            });
        });
        c.add_decorator(shared(Alpha(0.5)));
        c.add_decorator(shared(Alpha(0.5)));

        let mut scene = Scene::new();
        c.render(&mut scene);
        assert_eq!(scene.nodes.len(), 5);
        assert_eq!(scene.nodes[0], SceneNode::PushAlpha(0.5));
        assert_eq!(scene.nodes[4], SceneNode::PopAlpha);
        assert_eq!(scene.open_alpha(), 1.0);
    }

    #[test]
    fn test_decorated_bounds_folds_decorators() {
        let c = Component::new(Rect::new(10.0, 10.0, 50.0, 20.0));
        assert_eq!(c.decorated_bounds(), c.bounds());

        c.add_decorator(shared(Grow(Vec2::new(3.0, 3.0))));
        assert_eq!(c.decorated_bounds(), Rect::new(10.0, 10.0, 53.0, 23.0));
    }

    #[test]
    fn test_repaint_accumulates_dirty_union() {
        let c = Component::new(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(c.take_dirty(), None);

        c.repaint_region(Rect::new(0.0, 0.0, 10.0, 10.0));
        c.repaint_region(Rect::new(90.0, 40.0, 10.0, 10.0));
        assert_eq!(c.repaint_count(), 2);
        assert_eq!(c.take_dirty(), Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
        assert_eq!(c.take_dirty(), None);

        c.repaint();
        assert_eq!(c.take_dirty(), Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
    }

    #[test]
    fn test_component_events_subscribe_unsubscribe() {
        let c = Component::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = c.subscribe({
            let seen = seen.clone();
            move |e: &ComponentEvent| seen.borrow_mut().push(e.clone())
        });

        let d = shared(Alpha(1.0));
        c.add_decorator(d.clone());
        c.remove_decorator(&d);
        assert_eq!(
            *seen.borrow(),
            vec![
                ComponentEvent::DecoratorAdded,
                ComponentEvent::DecoratorRemoved
            ]
        );

        c.unsubscribe(id);
        c.repaint();
        assert_eq!(seen.borrow().len(), 2, "no events after unsubscribe");
    }

    #[test]
    fn test_parent_link() {
        let parent = Component::new(Rect::new(0.0, 0.0, 400.0, 300.0));
        let child = Component::new(Rect::new(20.0, 20.0, 100.0, 100.0));
        assert!(child.parent().is_none());

        child.set_parent(&parent);
        let p = child.parent().unwrap();
        p.repaint_region(Rect::new(20.0, 20.0, 103.0, 103.0));
        assert_eq!(
            parent.take_dirty(),
            Some(Rect::new(20.0, 20.0, 103.0, 103.0))
        );

        child.clear_parent();
        assert!(child.parent().is_none());
    }
}
