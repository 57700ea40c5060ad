use super::*;
use crate::FrameCallbackRegistration;

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn frame_callback_runs_once_with_frame_time() {
    let runtime = Runtime::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let registration = {
        let seen = Rc::clone(&seen);
        runtime
            .frame_clock()
            .with_frame_nanos(move |time| seen.borrow_mut().push(time))
    };
    assert!(registration.is_active());
    assert!(runtime.needs_frame());

    runtime.drain_frame_callbacks(16_000_000);
    runtime.drain_frame_callbacks(32_000_000);

    assert_eq!(seen.borrow().as_slice(), &[16_000_000]);
    assert!(!runtime.needs_frame());
    drop(registration);
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::new();
    let fired = Rc::new(RefCell::new(false));
    {
        let fired = Rc::clone(&fired);
        let registration = runtime
            .frame_clock()
            .with_frame_nanos(move |_| *fired.borrow_mut() = true);
        drop(registration);
    }
    assert!(!runtime.has_frame_callbacks());
    assert!(!runtime.needs_frame());

    runtime.drain_frame_callbacks(1);
    assert!(!*fired.borrow());
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let log = Rc::new(RefCell::new(Vec::new()));
    let nested: Rc<RefCell<Option<FrameCallbackRegistration>>> = Rc::new(RefCell::new(None));

    let outer = {
        let log = Rc::clone(&log);
        let nested = Rc::clone(&nested);
        runtime.frame_clock().with_frame_nanos(move |nanos| {
            log.borrow_mut().push(("outer", nanos));
            let log = Rc::clone(&log);
            let registration = handle
                .frame_clock()
                .with_frame_nanos(move |nanos| log.borrow_mut().push(("inner", nanos)));
            nested.borrow_mut().replace(registration);
        })
    };

    runtime.drain_frame_callbacks(10_000_000);
    assert_eq!(log.borrow().as_slice(), &[("outer", 10_000_000)]);
    assert!(runtime.needs_frame());

    runtime.drain_frame_callbacks(20_000_000);
    assert_eq!(log.borrow().as_slice(), &[("outer", 10_000_000), ("inner", 20_000_000)]);
    drop(outer);
}

#[test]
fn callback_cancelled_earlier_in_the_same_frame_does_not_run() {
    let runtime = Runtime::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let later: Rc<RefCell<Option<FrameCallbackRegistration>>> = Rc::new(RefCell::new(None));

    let first = {
        let fired = Rc::clone(&fired);
        let later = Rc::clone(&later);
        runtime.frame_clock().with_frame_nanos(move |_| {
            fired.borrow_mut().push("first");
            if let Some(registration) = later.borrow_mut().take() {
                registration.cancel();
            }
        })
    };
    let second = {
        let fired = Rc::clone(&fired);
        runtime
            .frame_clock()
            .with_frame_nanos(move |_| fired.borrow_mut().push("second"))
    };
    later.borrow_mut().replace(second);

    runtime.drain_frame_callbacks(16_000_000);

    assert_eq!(fired.borrow().as_slice(), &["first"]);
    assert!(!runtime.has_frame_callbacks());
    assert!(!runtime.needs_frame());
    drop(first);
}

#[test]
fn dead_runtime_yields_inactive_registration() {
    let runtime = Runtime::new();
    let clock = runtime.frame_clock();
    drop(runtime);

    assert!(!clock.runtime_handle().is_alive());
    let registration = clock.with_frame_nanos(|_| panic!("must never run"));
    assert!(!registration.is_active());
    registration.cancel();
}
