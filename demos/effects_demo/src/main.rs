//! Runs the stock transitions against real wall-clock time and logs their
//! progress. No renderer is attached; the painted scenes go nowhere, which
//! makes this a convenient smoke test for the timing side.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use terra_core::{Component, Rect, Scheduler, Vec2};
use terra_effects::{
    DropShadowDecorator, End, FadeTransition, FadeWindowTransition, MotionTheme, SlideTransition,
    share,
};

/// Pump until every scheduled timer is gone, sleeping to the next deadline
/// in between.
fn run_to_idle(scheduler: &Scheduler) {
    while scheduler.has_timers() {
        if let Some(due) = scheduler.next_due() {
            let now = scheduler.now();
            if due > now {
                thread::sleep(due - now);
            }
        }
        scheduler.pump();
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let theme = MotionTheme::default();
    let scheduler = Scheduler::system();

    let desktop = Component::new(Rect::new(0.0, 0.0, 640.0, 480.0));

    // 1. Fade a button out.
    let button = Component::new(Rect::new(20.0, 20.0, 80.0, 24.0));
    button.set_parent(&desktop);

    let fade = FadeTransition::new(&scheduler, &button, theme.fade_duration, theme.fade_rate)?;
    fade.start_with(|how| log::info!("fade ended: {how:?}"))?;
    run_to_idle(&scheduler);
    log::info!(
        "button opacity {:.2}, decorators left: {}",
        fade.opacity(),
        button.decorator_count()
    );

    // 2. Slide a sheet down from above, stopping it partway to show the
    //    reverse handoff, then close it again from where it got to.
    let sheet = Component::new(Rect::new(170.0, 0.0, 300.0, 200.0));
    sheet.set_parent(&desktop);

    let open = SlideTransition::new(
        &scheduler,
        &sheet,
        Vec2::new(0.0, -200.0),
        Vec2::ZERO,
        false,
        theme.slide_duration,
        theme.slide_rate,
    )?;
    open.start()?;

    thread::sleep(theme.slide_duration / 2);
    scheduler.pump();
    open.stop();
    let reached = open.y();
    log::info!("sheet interrupted at y = {reached:.1}");

    let close = SlideTransition::new(
        &scheduler,
        &sheet,
        Vec2::new(0.0, reached),
        Vec2::new(0.0, -200.0),
        true,
        open.elapsed(),
        theme.slide_rate,
    )?;
    close.start_with(|how| log::info!("sheet close ended: {how:?}"))?;
    run_to_idle(&scheduler);

    // 3. Fade a popup window out together with its drop shadow.
    let popup = Component::new(Rect::new(200.0, 150.0, 240.0, 120.0));
    popup.set_parent(&desktop);
    let (shadow, shadow_erased) = share(DropShadowDecorator::new(&theme));
    popup.add_decorator(shadow_erased);

    let completed = Rc::new(RefCell::new(false));
    let close_popup = FadeWindowTransition::new(
        &scheduler,
        &popup,
        theme.fade_duration,
        theme.fade_rate,
        shadow,
    )?;
    close_popup.start_with({
        let completed = completed.clone();
        move |how| *completed.borrow_mut() = how == End::Completed
    })?;

    // Pump by hand at a coarser cadence than the transition's rate; elapsed
    // time is measured, not counted, so the timeline stays accurate.
    while close_popup.is_running() {
        thread::sleep(Duration::from_millis(60));
        scheduler.pump();
        log::info!("popup at {:.0}%", close_popup.percent_complete() * 100.0);
    }
    log::info!(
        "popup fade completed: {}, dirty region on desktop: {:?}",
        completed.borrow(),
        desktop.take_dirty()
    );

    Ok(())
}
